//! Current document label shown on every feature view

use eframe::egui;

use crate::app::ClauseWiseApp;

/// Label used when no document has been picked this session
pub const NO_FILE_LABEL: &str = "None selected";

/// The label text for an optional file reference
pub fn file_label(name: Option<&str>) -> &str {
    name.unwrap_or(NO_FILE_LABEL)
}

pub struct FileBar;

impl FileBar {
    pub fn show(ui: &mut egui::Ui, app: &mut ClauseWiseApp) {
        let current = app.file_ref.get_file_reference();

        ui.horizontal(|ui| {
            ui.label("Current file:");
            ui.strong(file_label(current.as_deref()));

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if current.is_some()
                    && ui.button("Forget").on_hover_text("Forget this file").clicked()
                {
                    app.file_ref.clear_file_reference();
                }
                if ui.button("Change file...").clicked() {
                    app.pick_document();
                }
            });
        });
        ui.separator();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_label() {
        assert_eq!(file_label(None), "None selected");
        assert_eq!(file_label(Some("contract.pdf")), "contract.pdf");
        // an empty name is still a selection
        assert_eq!(file_label(Some("")), "");
    }
}
