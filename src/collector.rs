// Quantum Consciousness Decision Collector
// Copyright (c) 2026 Quantum Consciousness Simulator
//
// The glue the simulator actually runs: pull a fixed number of decisions
// out of a source, keep them in call order, report them, hand them to the
// plot.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::network::QuantumNeuralNetwork;

// ─────────────────────────────────────────────────────────────────────────────
// Decision Source
// ─────────────────────────────────────────────────────────────────────────────

/// Anything that can produce one numeric decision per call.
///
/// The sampling loop only ever sees this seam, so tests can substitute a
/// scripted source for the real network.
pub trait DecisionSource {
    fn decide(&mut self) -> f64;
}

impl DecisionSource for QuantumNeuralNetwork {
    fn decide(&mut self) -> f64 {
        QuantumNeuralNetwork::decide(self)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Decision Trace
// ─────────────────────────────────────────────────────────────────────────────

/// Ordered record of every decision collected during one run.
///
/// Insertion order is sampling order and becomes the x-axis of the plot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecisionTrace {
    decisions: Vec<f64>,
}

impl DecisionTrace {
    pub fn len(&self) -> usize {
        self.decisions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.decisions.is_empty()
    }

    /// The collected decisions, in sampling order.
    pub fn values(&self) -> &[f64] {
        &self.decisions
    }

    /// The stdout report line, e.g. `Decisions: [0.4, 0.6]`.
    pub fn report(&self) -> String {
        format!("Decisions: {:?}", self.decisions)
    }

    /// Dump the trace as pretty JSON.
    pub fn export_json(&self, path: &Path) -> Result<()> {
        let data = serde_json::to_string_pretty(self)
            .context("Failed to serialise decision trace")?;
        fs::write(path, data)
            .with_context(|| format!("Failed to write trace to {:?}", path))?;
        info!("[COLLECTOR] 💾 Trace exported to {:?}", path);
        Ok(())
    }
}

impl From<Vec<f64>> for DecisionTrace {
    fn from(decisions: Vec<f64>) -> Self {
        Self { decisions }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Sample Loop
// ─────────────────────────────────────────────────────────────────────────────

/// Run the sample loop: exactly `samples` sequential decide() calls,
/// collected in call order. Each call returns before the next is issued.
pub fn collect(source: &mut dyn DecisionSource, samples: usize) -> DecisionTrace {
    let mut decisions = Vec::with_capacity(samples);
    for _ in 0..samples {
        decisions.push(source.decide());
    }
    info!("[COLLECTOR] ⚡ Collected {} decision(s)", decisions.len());
    DecisionTrace { decisions }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Countdown {
        next: f64,
    }

    impl DecisionSource for Countdown {
        fn decide(&mut self) -> f64 {
            self.next -= 1.0;
            self.next
        }
    }

    #[test]
    fn test_collects_exactly_n_samples_in_order() {
        let mut source = Countdown { next: 4.0 };
        let trace = collect(&mut source, 3);
        assert_eq!(trace.len(), 3);
        assert_eq!(trace.values(), &[3.0, 2.0, 1.0]);
    }

    #[test]
    fn test_zero_samples_yield_empty_trace() {
        let mut source = Countdown { next: 4.0 };
        let trace = collect(&mut source, 0);
        assert!(trace.is_empty());
        assert_eq!(trace.report(), "Decisions: []");
    }

    #[test]
    fn test_report_line_format() {
        let trace = DecisionTrace::from(vec![0.5, 1.0, 0.0]);
        assert_eq!(trace.report(), "Decisions: [0.5, 1.0, 0.0]");
    }
}
