//! Entity extraction view

use eframe::egui;
use egui_extras::{Column, TableBuilder};

use super::file_bar::FileBar;
use crate::app::ClauseWiseApp;
use crate::core::analysis::{format_confidence, Entity};
use crate::core::panels::Page;

pub struct EntitiesView;

impl EntitiesView {
    pub fn show(ui: &mut egui::Ui, app: &mut ClauseWiseApp) {
        ui.heading(Page::ExtractEntities.title());
        FileBar::show(ui, app);

        ui.horizontal(|ui| {
            if ui.button("Extract").clicked() {
                app.entities.run();
            }
            if ui.button("Clear").clicked() {
                app.entities.clear();
            }
        });
        ui.add_space(8.0);

        match &app.entities.entities {
            Some(entities) => Self::show_table(ui, entities),
            None => {
                ui.weak("No entities extracted yet.");
            }
        }
    }

    fn show_table(ui: &mut egui::Ui, entities: &[Entity]) {
        TableBuilder::new(ui)
            .striped(true)
            .column(Column::remainder())
            .column(Column::auto().at_least(80.0))
            .column(Column::auto().at_least(80.0))
            .header(20.0, |mut header| {
                for title in ["Text", "Type", "Confidence"] {
                    header.col(|ui| {
                        ui.strong(title);
                    });
                }
            })
            .body(|mut body| {
                for entity in entities {
                    body.row(18.0, |mut row| {
                        row.col(|ui| {
                            ui.label(&entity.text);
                        });
                        row.col(|ui| {
                            ui.label(entity.kind.label());
                        });
                        row.col(|ui| {
                            ui.label(format_confidence(entity.score));
                        });
                    });
                }
            });
    }
}
