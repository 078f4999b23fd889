// Quantum Consciousness Neuron
// Copyright (c) 2026 Quantum Consciousness Simulator
//
// A neuron holds a collapse probability rather than an activation.
// Observing it collapses the superposition to a classical 0/1 for that
// decision round.

use rand::Rng;

/// A single probabilistic neuron.
#[derive(Debug, Clone)]
pub struct QuantumNeuron {
    /// Probability of collapsing to 1 on observation. Always in [0, 1].
    state: f64,
    /// Index of the neuron this one is entangled with, if any.
    entangled_with: Option<usize>,
}

impl QuantumNeuron {
    /// Fresh neuron in equal superposition (50% collapse probability).
    pub fn new() -> Self {
        Self {
            state: 0.5,
            entangled_with: None,
        }
    }

    /// Neuron with an explicit collapse bias, clamped into [0, 1].
    pub fn with_bias(bias: f64) -> Self {
        Self {
            state: bias.clamp(0.0, 1.0),
            entangled_with: None,
        }
    }

    /// Current collapse probability.
    pub fn bias(&self) -> f64 {
        self.state
    }

    /// Link this neuron to a partner by index. The network enforces that
    /// linked neurons share one collapse outcome per decision round.
    pub fn entangle(&mut self, partner: usize) {
        self.entangled_with = Some(partner);
    }

    pub fn entangled_partner(&self) -> Option<usize> {
        self.entangled_with
    }

    /// Collapse the superposition: 1 with probability `state`, else 0.
    pub fn observe(&mut self, rng: &mut impl Rng) -> u8 {
        if rng.gen::<f64>() < self.state {
            1
        } else {
            0
        }
    }
}

impl Default for QuantumNeuron {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_starts_in_equal_superposition() {
        let neuron = QuantumNeuron::new();
        assert!((neuron.bias() - 0.5).abs() < f64::EPSILON);
        assert!(neuron.entangled_partner().is_none());
    }

    #[test]
    fn test_bias_is_clamped() {
        assert_eq!(QuantumNeuron::with_bias(1.7).bias(), 1.0);
        assert_eq!(QuantumNeuron::with_bias(-0.3).bias(), 0.0);
    }

    #[test]
    fn test_observation_is_binary() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut neuron = QuantumNeuron::new();
        for _ in 0..100 {
            let bit = neuron.observe(&mut rng);
            assert!(bit == 0 || bit == 1);
        }
    }

    #[test]
    fn test_extreme_biases_collapse_deterministically() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut certain = QuantumNeuron::with_bias(1.0);
        let mut never = QuantumNeuron::with_bias(0.0);
        for _ in 0..50 {
            assert_eq!(certain.observe(&mut rng), 1);
            assert_eq!(never.observe(&mut rng), 0);
        }
    }
}
