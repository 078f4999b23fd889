// Quantum Consciousness Core Modules
// Copyright (c) 2026 Quantum Consciousness Simulator

pub mod collector;
pub mod network;
pub mod plot;
pub mod window;

// Re-export the most common types for easier top-level use
pub use collector::{collect, DecisionSource, DecisionTrace};
pub use network::QuantumNeuralNetwork;
pub use plot::TracePlot;
