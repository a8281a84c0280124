//! Sidebar navigation between views

use eframe::egui;

use crate::app::ClauseWiseApp;
use crate::core::panels::Page;

/// Sidebar with one entry per view
pub struct Sidebar;

impl Sidebar {
    /// Show the sidebar
    pub fn show(ui: &mut egui::Ui, app: &mut ClauseWiseApp) {
        ui.vertical(|ui| {
            ui.heading("ClauseWise");
            ui.separator();

            for page in Page::ALL {
                if ui
                    .selectable_label(app.page == page, page.title())
                    .on_hover_text(page.description())
                    .clicked()
                {
                    app.navigate(page);
                }
            }

            ui.separator();

            // Current document
            ui.collapsing("Document", |ui| match app.file_ref.get_file_reference() {
                Some(name) => {
                    ui.label(name);
                }
                None => {
                    ui.weak("None selected");
                }
            });
        });
    }
}
