//! Landing view with document upload and feature cards

use eframe::egui;
use egui_commonmark::CommonMarkViewer;

use crate::app::ClauseWiseApp;
use crate::core::panels::Page;

const INTRO: &str = "\
# ClauseWise

Make sense of contracts faster. Upload a document, then:

- **Simplify** dense clauses into plain language
- **Extract** parties, dates and amounts
- **Classify** the type of agreement
- **Ask** questions about the text

*Analysis results other than simplification are sample output.*
";

/// Home view
pub struct HomeView;

impl HomeView {
    pub fn show(ui: &mut egui::Ui, app: &mut ClauseWiseApp) {
        CommonMarkViewer::new().show(ui, &mut app.commonmark_cache, INTRO);
        ui.add_space(16.0);

        Self::show_upload(ui, app);
        ui.add_space(16.0);
        ui.separator();

        Self::show_cards(ui, app);
    }

    /// Upload control; feature buttons appear once a document is selected
    fn show_upload(ui: &mut egui::Ui, app: &mut ClauseWiseApp) {
        ui.group(|ui| {
            ui.strong("Upload a document");
            if ui.button("Choose file...").clicked() {
                app.pick_document();
            }

            if let Some(name) = app.file_ref.get_file_reference() {
                ui.label(format!("Selected: {}", name));
                ui.add_space(8.0);
                ui.label("What would you like to do?");
                ui.horizontal_wrapped(|ui| {
                    for page in Page::FEATURES {
                        if ui.button(page.title()).clicked() {
                            app.navigate_to_key(page.key());
                        }
                    }
                });
            }
        });
    }

    fn show_cards(ui: &mut egui::Ui, app: &mut ClauseWiseApp) {
        ui.horizontal_wrapped(|ui| {
            for page in Page::FEATURES {
                let response = egui::Frame::group(ui.style())
                    .inner_margin(12.0)
                    .show(ui, |ui| {
                        ui.set_width(180.0);
                        ui.strong(page.title());
                        ui.label(page.description());
                    })
                    .response
                    .interact(egui::Sense::click())
                    .on_hover_cursor(egui::CursorIcon::PointingHand);

                if response.clicked() {
                    app.navigate(page);
                }
            }
        });
    }
}
