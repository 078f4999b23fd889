// Quantum Consciousness Plot Description
// Copyright (c) 2026 Quantum Consciousness Simulator
//
// A pure description of the chart. The window module renders it; tests
// inspect it without a display.

use serde::Serialize;

use crate::collector::DecisionTrace;

pub const PLOT_TITLE: &str = "Quantum Consciousness Simulator";
pub const X_LABEL: &str = "Decision Number";
pub const Y_LABEL: &str = "Decision Value";

/// Everything the viewer needs to draw one run.
#[derive(Debug, Clone, Serialize)]
pub struct TracePlot {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    /// [sample index, decision value] pairs in sampling order.
    pub points: Vec<[f64; 2]>,
}

impl TracePlot {
    /// Map a trace onto chart axes: x = zero-based sample index, y = the
    /// decision value, untransformed.
    pub fn from_trace(trace: &DecisionTrace) -> Self {
        let points = trace
            .values()
            .iter()
            .enumerate()
            .map(|(i, &v)| [i as f64, v])
            .collect();
        Self {
            title: PLOT_TITLE.to_string(),
            x_label: X_LABEL.to_string(),
            y_label: Y_LABEL.to_string(),
            points,
        }
    }
}
