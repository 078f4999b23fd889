// Quantum Consciousness Main Entry Point
// Copyright (c) 2026 Quantum Consciousness Simulator

use quantum_consciousness::network::QuantumNeuralNetwork;
use quantum_consciousness::plot::TracePlot;
use quantum_consciousness::{collect, window};

use anyhow::Result;
use clap::{Parser, Subcommand};
use dotenv::dotenv;
use std::path::PathBuf;
use tracing::info;

#[derive(Parser)]
#[command(name = "quantum-consciousness")]
#[command(about = "Quantum Consciousness Simulator", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Sample a run of decisions and plot them
    Simulate {
        /// Number of neurons in the network
        #[arg(short, long, default_value_t = 10)]
        neurons: usize,

        /// Number of decisions to sample
        #[arg(short, long, default_value_t = 100)]
        decisions: usize,

        /// RNG seed for a reproducible run
        #[arg(long)]
        seed: Option<u64>,

        /// Entangle the neurons pairwise before sampling
        #[arg(long)]
        entangle: bool,

        /// Write the collected trace to a JSON file
        #[arg(long)]
        export: Option<PathBuf>,

        /// Skip the viewer window (report only)
        #[arg(long)]
        headless: bool,
    },

    /// Print a single decision
    Decide {
        /// Number of neurons in the network
        #[arg(short, long, default_value_t = 10)]
        neurons: usize,

        /// RNG seed for a reproducible decision
        #[arg(long)]
        seed: Option<u64>,
    },
}

fn main() -> Result<()> {
    dotenv().ok();

    // Set default log level to suppress noisy GUI-stack crates (wgpu, naga,
    // winit) unless explicitly overridden by the user.
    if std::env::var("RUST_LOG").is_err() {
        std::env::set_var(
            "RUST_LOG",
            "info,wgpu_core=error,wgpu_hal=error,naga=error,winit=error,egui_wgpu=error,eframe=error",
        );
    }

    // Diagnostics go to stderr; stdout stays reserved for the report line.
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    info!("--- QUANTUM CONSCIOUSNESS SIMULATOR v0.1.0 ---");

    let args = Cli::parse();

    match args.command {
        Commands::Simulate {
            neurons,
            decisions,
            seed,
            entangle,
            export,
            headless,
        } => {
            let mut network = build_network(neurons, seed)?;
            if entangle {
                network.entangle_pairs();
            }

            info!(
                "[COLLECTOR] ⚡ Sampling {} decision(s) from {} neuron(s)...",
                decisions, neurons
            );
            let trace = collect(&mut network, decisions);
            println!("{}", trace.report());

            if let Some(path) = export {
                trace.export_json(&path)?;
            }

            if headless {
                info!("[VIEWER] Headless run, skipping the plot window");
            } else {
                info!("[VIEWER] 📈 Opening plot window (close it to exit)...");
                let plot = TracePlot::from_trace(&trace);
                window::show(plot).map_err(|e| anyhow::anyhow!("Viewer failed: {}", e))?;
            }
        }
        Commands::Decide { neurons, seed } => {
            let mut network = build_network(neurons, seed)?;
            println!("Decision: {}", network.decide());
        }
    }

    Ok(())
}

fn build_network(neurons: usize, seed: Option<u64>) -> Result<QuantumNeuralNetwork> {
    match seed {
        Some(seed) => QuantumNeuralNetwork::with_seed(neurons, seed),
        None => QuantumNeuralNetwork::new(neurons),
    }
}
