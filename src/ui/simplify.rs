//! Clause simplification view

use eframe::egui;

use super::file_bar::FileBar;
use crate::app::ClauseWiseApp;
use crate::core::panels::Page;
use crate::core::rewrite::RuleSet;

pub struct SimplifyView;

impl SimplifyView {
    pub fn show(ui: &mut egui::Ui, app: &mut ClauseWiseApp) {
        ui.heading(Page::Simplify.title());
        FileBar::show(ui, app);

        ui.label("Original clauses");
        ui.add(
            egui::TextEdit::multiline(&mut app.simplify.original)
                .hint_text("Paste clauses here")
                .desired_width(f32::INFINITY)
                .desired_rows(10),
        );

        ui.horizontal(|ui| {
            if ui.button("Simplify").clicked() {
                if let Err(notice) = app.simplify.run(&app.rules) {
                    app.show_notice(notice);
                }
            }
            if ui.button("Clear").clicked() {
                app.simplify.clear();
            }
        });

        ui.add_space(8.0);
        ui.label("Simplified clauses");
        ui.add(
            egui::TextEdit::multiline(&mut app.simplify.simplified)
                .desired_width(f32::INFINITY)
                .desired_rows(10),
        );

        ui.add_space(8.0);
        Self::show_rules(ui, &app.rules);
    }

    /// Active substitutions in application order
    fn show_rules(ui: &mut egui::Ui, rules: &RuleSet) {
        ui.collapsing(format!("Active rules ({})", rules.len()), |ui| {
            if rules.is_empty() {
                ui.weak("No rules configured.");
                return;
            }
            egui::Grid::new("rewrite_rules").striped(true).show(ui, |ui| {
                for rule in rules.rules() {
                    ui.monospace(rule.pattern());
                    ui.label("\u{2192}");
                    ui.monospace(rule.replacement());
                    ui.end_row();
                }
            });
        });
    }
}
