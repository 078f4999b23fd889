// Quantum Consciousness Viewer
// Copyright (c) 2026 Quantum Consciousness Simulator
//
// Deep Dark Theme | Single-chart layout
// Renders a TracePlot as a line chart and blocks until the window closes.

use eframe::egui;
use egui_plot::{Line, Plot, PlotPoints};

use crate::plot::TracePlot;

// --- Color Palette ---
const COLOR_BG_DARK: egui::Color32 = egui::Color32::from_rgb(26, 26, 26);
const COLOR_PANEL_BG: egui::Color32 = egui::Color32::from_rgb(34, 34, 34);
const COLOR_TRACE_BLUE: egui::Color32 = egui::Color32::from_rgb(50, 150, 255);
const COLOR_TEXT_PRIMARY: egui::Color32 = egui::Color32::from_rgb(220, 220, 220);
const COLOR_TEXT_SECONDARY: egui::Color32 = egui::Color32::from_rgb(160, 160, 160);

pub struct ViewerApp {
    plot: TracePlot,
}

impl ViewerApp {
    pub fn new(plot: TracePlot) -> Self {
        Self { plot }
    }

    fn configure_style(&self, ctx: &egui::Context) {
        let mut visuals = egui::Visuals::dark();
        visuals.window_fill = COLOR_BG_DARK;
        visuals.panel_fill = COLOR_PANEL_BG;
        visuals.widgets.noninteractive.bg_fill = COLOR_PANEL_BG;
        ctx.set_visuals(visuals);
    }
}

impl eframe::App for ViewerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.configure_style(ctx);

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.add_space(8.0);
            ui.heading(
                egui::RichText::new(&self.plot.title)
                    .size(22.0)
                    .color(COLOR_TEXT_PRIMARY),
            );
            ui.label(
                egui::RichText::new(format!("{} decision(s)", self.plot.points.len()))
                    .size(12.0)
                    .color(COLOR_TEXT_SECONDARY),
            );
            ui.add_space(8.0);

            let line = Line::new(PlotPoints::from(self.plot.points.clone()))
                .color(COLOR_TRACE_BLUE)
                .name("decisions");

            Plot::new("decision_trace")
                .x_axis_label(self.plot.x_label.as_str())
                .y_axis_label(self.plot.y_label.as_str())
                .show(ui, |plot_ui| {
                    plot_ui.line(line);
                });
        });
    }
}

/// Open the viewer window for a plot. Blocks until the window is closed.
pub fn show(plot: TracePlot) -> Result<(), eframe::Error> {
    let title = plot.title.clone();
    let options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_inner_size([900.0, 600.0])
            .with_title(title.clone()),
        ..Default::default()
    };

    eframe::run_native(
        &title,
        options,
        Box::new(|_cc| Ok(Box::new(ViewerApp::new(plot)))),
    )
}
