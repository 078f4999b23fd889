// Quantum Consciousness Network
// Copyright (c) 2026 Quantum Consciousness Simulator
//
// The handle a run holds on to: a bank of probabilistic neurons plus the
// RNG that drives their collapses. One decide() round observes every
// neuron once and averages the collapses into a single value in [0, 1].

pub mod neuron;

use anyhow::{bail, Result};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, info};

pub use neuron::QuantumNeuron;

pub struct QuantumNeuralNetwork {
    neurons: Vec<QuantumNeuron>,
    rng: StdRng,
    /// Total decide() rounds served so far.
    rounds: u64,
}

impl QuantumNeuralNetwork {
    /// Build a network of `num_neurons` fresh neurons with an
    /// entropy-seeded RNG.
    pub fn new(num_neurons: usize) -> Result<Self> {
        Self::build(num_neurons, StdRng::from_entropy())
    }

    /// Build a reproducible network: the same seed and neuron count yield
    /// the same decision stream.
    pub fn with_seed(num_neurons: usize, seed: u64) -> Result<Self> {
        Self::build(num_neurons, StdRng::seed_from_u64(seed))
    }

    fn build(num_neurons: usize, rng: StdRng) -> Result<Self> {
        if num_neurons == 0 {
            bail!("A network needs at least one neuron.");
        }
        let neurons = (0..num_neurons).map(|_| QuantumNeuron::new()).collect();
        info!(
            "[NETWORK] 🧠 {} neuron(s) initialised in superposition",
            num_neurons
        );
        Ok(Self {
            neurons,
            rng,
            rounds: 0,
        })
    }

    pub fn neuron_count(&self) -> usize {
        self.neurons.len()
    }

    pub fn rounds(&self) -> u64 {
        self.rounds
    }

    /// Entangle neurons pairwise: (0,1), (2,3), ... Each pair shares one
    /// collapse outcome per decision round. A trailing odd neuron stays
    /// free.
    pub fn entangle_pairs(&mut self) {
        let pairs = self.neurons.len() / 2;
        for p in 0..pairs {
            let (a, b) = (2 * p, 2 * p + 1);
            self.neurons[a].entangle(b);
            self.neurons[b].entangle(a);
        }
        info!("[NETWORK] 🔗 {} entangled pair(s) formed", pairs);
    }

    /// One decision round: observe every neuron once, average the
    /// collapses.
    ///
    /// Entangled partners collapse together — whichever neuron of a pair
    /// is observed first fixes the outcome for both.
    pub fn decide(&mut self) -> f64 {
        let count = self.neurons.len();
        let mut outcomes: Vec<Option<u8>> = vec![None; count];
        for i in 0..count {
            let shared = self.neurons[i]
                .entangled_partner()
                .and_then(|p| outcomes.get(p).copied().flatten());
            let bit = match shared {
                Some(bit) => bit,
                None => self.neurons[i].observe(&mut self.rng),
            };
            outcomes[i] = Some(bit);
        }
        self.rounds += 1;
        let sum: u32 = outcomes.iter().flatten().map(|&b| u32::from(b)).sum();
        let decision = sum as f64 / count as f64;
        debug!("[NETWORK] Round {} collapsed to {:.3}", self.rounds, decision);
        decision
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_network_is_refused() {
        assert!(QuantumNeuralNetwork::new(0).is_err());
        assert!(QuantumNeuralNetwork::with_seed(0, 42).is_err());
    }

    #[test]
    fn test_decisions_stay_in_unit_interval() {
        let mut network = QuantumNeuralNetwork::with_seed(10, 1).unwrap();
        for _ in 0..200 {
            let decision = network.decide();
            assert!((0.0..=1.0).contains(&decision));
        }
        assert_eq!(network.rounds(), 200);
    }

    #[test]
    fn test_same_seed_same_stream() {
        let mut a = QuantumNeuralNetwork::with_seed(10, 99).unwrap();
        let mut b = QuantumNeuralNetwork::with_seed(10, 99).unwrap();
        for _ in 0..50 {
            assert_eq!(a.decide(), b.decide());
        }
    }

    #[test]
    fn test_entangled_pair_collapses_as_one() {
        // Two fully entangled neurons can only agree, so the average is
        // always 0.0 or 1.0 and never 0.5.
        let mut network = QuantumNeuralNetwork::with_seed(2, 5).unwrap();
        network.entangle_pairs();
        for _ in 0..100 {
            let decision = network.decide();
            assert!(decision == 0.0 || decision == 1.0);
        }
    }

    #[test]
    fn test_odd_neuron_stays_free() {
        let mut network = QuantumNeuralNetwork::with_seed(3, 5).unwrap();
        network.entangle_pairs();
        assert_eq!(network.neuron_count(), 3);
        // Still a valid network; decisions land on thirds.
        let decision = network.decide();
        assert!((0.0..=1.0).contains(&decision));
    }
}
