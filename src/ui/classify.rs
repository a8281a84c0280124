//! Document classification view

use eframe::egui;

use super::file_bar::FileBar;
use crate::app::ClauseWiseApp;
use crate::core::analysis::format_confidence;
use crate::core::panels::Page;

pub struct ClassifyView;

impl ClassifyView {
    pub fn show(ui: &mut egui::Ui, app: &mut ClauseWiseApp) {
        ui.heading(Page::Classify.title());
        FileBar::show(ui, app);

        ui.horizontal(|ui| {
            if ui.button("Classify").clicked() {
                app.classify.run();
            }
            if ui.button("Clear").clicked() {
                app.classify.clear();
            }
        });
        ui.add_space(8.0);

        match &app.classify.classes {
            Some(classes) => {
                for class in classes {
                    Self::card(ui, |ui| {
                        ui.strong(&class.label);
                        ui.label(format!("Confidence: {}", format_confidence(class.score)));
                    });
                }
            }
            None => Self::card(ui, |ui| {
                ui.weak("No results");
                ui.weak("Run classification to see predicted document types.");
            }),
        }
    }

    fn card(ui: &mut egui::Ui, add_contents: impl FnOnce(&mut egui::Ui)) {
        egui::Frame::group(ui.style()).inner_margin(10.0).show(ui, |ui| {
            ui.set_width(ui.available_width());
            add_contents(ui);
        });
    }
}
