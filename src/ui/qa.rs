//! Question and answer view

use eframe::egui;

use super::file_bar::FileBar;
use crate::app::ClauseWiseApp;
use crate::core::panels::Page;

pub struct QaView;

impl QaView {
    pub fn show(ui: &mut egui::Ui, app: &mut ClauseWiseApp) {
        ui.heading(Page::Qa.title());
        FileBar::show(ui, app);

        let mut ask = false;
        ui.horizontal(|ui| {
            let width = ui.available_width() - 60.0;
            let response = ui.add(
                egui::TextEdit::singleline(&mut app.qa.question)
                    .hint_text("Ask a question about the document")
                    .desired_width(width),
            );
            if response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                ask = true;
            }
            if ui.button("Ask").clicked() {
                ask = true;
            }
            if ask {
                response.request_focus();
            }
        });

        if ask {
            if let Err(notice) = app.qa.ask() {
                app.show_notice(notice);
            }
        }
        ui.add_space(8.0);

        if app.qa.entries.is_empty() {
            ui.weak("No questions asked yet.");
            return;
        }

        for entry in &app.qa.entries {
            egui::Frame::group(ui.style()).inner_margin(10.0).show(ui, |ui| {
                ui.set_width(ui.available_width());
                ui.horizontal_wrapped(|ui| {
                    ui.strong("Q:");
                    ui.label(&entry.question);
                });
                ui.horizontal_wrapped(|ui| {
                    ui.weak("A:");
                    ui.label(&entry.answer);
                });
            });
        }
    }
}
