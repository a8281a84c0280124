//! Main application state and UI coordination

use eframe::egui;

use crate::core::config::{AppConfig, LoadedConfig};
use crate::core::panels::{ClassifyPanel, EntitiesPanel, Page, QaPanel, SimplifyPanel};
use crate::core::rewrite::RuleSet;
use crate::core::session::FileReferenceStore;
use crate::ui::{
    classify::ClassifyView, entities::EntitiesView, home::HomeView, qa::QaView,
    sidebar::Sidebar, simplify::SimplifyView,
};

/// File extensions offered by the document picker
const DOCUMENT_EXTENSIONS: [&str; 4] = ["pdf", "doc", "docx", "txt"];

/// Main application state
pub struct ClauseWiseApp {
    /// Application configuration
    pub config: AppConfig,
    /// False when the config file on disk could not be read or backed up
    pub config_writable: bool,
    /// Substitutions used by the simplify view, fixed for the session
    pub rules: RuleSet,
    /// Name of the selected document, shared by every view
    pub file_ref: FileReferenceStore,
    /// Currently shown view
    pub page: Page,
    /// Whether sidebar is visible
    pub sidebar_visible: bool,
    /// Last notice shown in the status bar
    pub notice: Option<String>,
    pub simplify: SimplifyPanel,
    pub entities: EntitiesPanel,
    pub classify: ClassifyPanel,
    pub qa: QaPanel,
    /// Commonmark cache for the home view
    pub commonmark_cache: egui_commonmark::CommonMarkCache,
}

impl ClauseWiseApp {
    /// Create a new application instance
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let LoadedConfig { config, writable } = AppConfig::load_or_recover();

        Self::apply_theme(&cc.egui_ctx, &config);

        let rules = RuleSet::from_specs(&config.rewrite.rules).unwrap_or_else(|e| {
            tracing::error!("Invalid rewrite rules, using defaults: {}", e);
            RuleSet::default()
        });
        tracing::info!("Loaded {} rewrite rules", rules.len());

        let page = Page::from_key(&config.ui.start_page).unwrap_or_default();

        Self {
            config,
            config_writable: writable,
            rules,
            file_ref: FileReferenceStore::default(),
            page,
            sidebar_visible: true,
            notice: None,
            simplify: SimplifyPanel::default(),
            entities: EntitiesPanel::default(),
            classify: ClassifyPanel::default(),
            qa: QaPanel::default(),
            commonmark_cache: egui_commonmark::CommonMarkCache::default(),
        }
    }

    fn apply_theme(ctx: &egui::Context, config: &AppConfig) {
        if config.is_dark() {
            ctx.set_visuals(egui::Visuals::dark());
        } else {
            ctx.set_visuals(egui::Visuals::light());
        }
    }

    /// Flip between the light and dark theme and persist the choice
    pub fn toggle_theme(&mut self, ctx: &egui::Context) {
        self.config.ui.theme = if self.config.is_dark() { "light" } else { "dark" }.to_string();
        Self::apply_theme(ctx, &self.config);
        if !self.config_writable {
            tracing::warn!("Config file was not loaded; leaving it untouched");
            return;
        }
        if let Err(e) = self.config.save() {
            tracing::error!("Failed to save config: {:#}", e);
        }
    }

    /// Switch to another view
    pub fn navigate(&mut self, page: Page) {
        if self.page != page {
            tracing::debug!("Navigating to {}", page.key());
            self.page = page;
        }
    }

    /// Navigate by feature key; unknown keys are ignored
    pub fn navigate_to_key(&mut self, key: &str) {
        if Page::from_key(key).is_none() {
            tracing::warn!("Unknown feature: {}", key);
        }
        self.navigate(self.page.route(key));
    }

    /// Show a notice in the status bar
    pub fn show_notice(&mut self, message: &str) {
        tracing::info!("[ClauseWise] {}", message);
        self.notice = Some(message.to_string());
    }

    /// Ask the user for a document and remember its file name
    ///
    /// Returns `true` if a file was picked.
    pub fn pick_document(&mut self) -> bool {
        let Some(path) = rfd::FileDialog::new()
            .add_filter("Documents", &DOCUMENT_EXTENSIONS)
            .pick_file()
        else {
            return false;
        };

        match path.file_name() {
            Some(name) => {
                self.file_ref.set_file_reference(&name.to_string_lossy());
                true
            }
            None => {
                tracing::warn!("Picked path has no file name: {}", path.display());
                false
            }
        }
    }

    /// Render the top menu bar
    fn render_menu_bar(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("File", |ui| {
                    if ui.button("Open Document...").clicked() {
                        self.pick_document();
                        ui.close();
                    }
                    if ui.button("Forget Document").clicked() {
                        self.file_ref.clear_file_reference();
                        ui.close();
                    }
                    ui.separator();
                    if ui.button("Exit").clicked() {
                        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                    }
                });

                ui.menu_button("View", |ui| {
                    if ui.button("Toggle Sidebar").clicked() {
                        self.sidebar_visible = !self.sidebar_visible;
                        ui.close();
                    }
                    if ui.button("Toggle Theme").clicked() {
                        self.toggle_theme(ctx);
                        ui.close();
                    }
                    ui.separator();
                    for page in Page::ALL {
                        if ui.selectable_label(self.page == page, page.title()).clicked() {
                            self.navigate(page);
                            ui.close();
                        }
                    }
                });
            });
        });
    }

    /// Render the status bar with the latest notice
    fn render_status_bar(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                match &self.notice {
                    Some(notice) => {
                        ui.label(notice);
                        if ui.small_button("\u{2715}").on_hover_text("Dismiss").clicked() {
                            self.notice = None;
                        }
                    }
                    None => {
                        ui.weak("Ready");
                    }
                }
            });
        });
    }
}

impl eframe::App for ClauseWiseApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Handle keyboard shortcuts
        ctx.input(|i| {
            if i.modifiers.ctrl && i.key_pressed(egui::Key::B) {
                self.sidebar_visible = !self.sidebar_visible;
            }
        });

        self.render_menu_bar(ctx);
        self.render_status_bar(ctx);

        if self.sidebar_visible {
            let width = self.config.ui.sidebar_width;
            egui::SidePanel::left("sidebar")
                .resizable(true)
                .default_width(width)
                .min_width(150.0)
                .show(ctx, |ui| {
                    Sidebar::show(ui, self);
                });
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .id_salt("page_scroll")
                .show(ui, |ui| match self.page {
                    Page::Home => HomeView::show(ui, self),
                    Page::Simplify => SimplifyView::show(ui, self),
                    Page::ExtractEntities => EntitiesView::show(ui, self),
                    Page::Classify => ClassifyView::show(ui, self),
                    Page::Qa => QaView::show(ui, self),
                });
        });
    }
}
