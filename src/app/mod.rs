//! App module - the eframe shell around the main window

mod modals;

use crate::constants::APP_NAME;
use crate::model::Campaign;
use crate::presenter::EditorPresenter;
use crate::settings::Settings;
use crate::theme;
use crate::ui::dialogs::DialogFactory;
use crate::ui::main_window::MainWindow;
use eframe::egui;
use modals::ActiveDialog;
use std::cell::RefCell;
use std::path::PathBuf;
use std::rc::Rc;
use tracing::{debug, warn};

// ============================================================================
// APP STATE
// ============================================================================

pub struct App {
    pub(crate) window: MainWindow<EditorPresenter>,
    pub(crate) dialogs: DialogFactory,
    pub(crate) campaign: Rc<RefCell<Campaign>>,
    pub(crate) active_dialog: Option<ActiveDialog>,
    pub(crate) list_panel_width: f32,
    // Settings
    pub(crate) settings: Settings,
    pub(crate) data_dir: PathBuf,
    pub(crate) window_pos: Option<egui::Pos2>,
    pub(crate) window_size: Option<egui::Vec2>,
    pub(crate) needs_center: bool,
}

// ============================================================================
// APP INITIALIZATION & HELPERS
// ============================================================================

impl App {
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        mut window: MainWindow<EditorPresenter>,
        settings: Settings,
        data_dir: PathBuf,
    ) -> Self {
        cc.egui_ctx.set_theme(egui::Theme::Dark);

        // Phosphor icons for menus and table headers
        let mut fonts = egui::FontDefinitions::default();
        egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
        cc.egui_ctx.set_fonts(fonts);

        theme::apply_visuals(&cc.egui_ctx);

        let repository = Rc::clone(window.presenter().repository());
        window.attach();

        Self {
            window,
            dialogs: DialogFactory::new(repository),
            campaign: Rc::new(RefCell::new(Campaign::default())),
            active_dialog: None,
            list_panel_width: settings.list_panel_width,
            settings,
            data_dir,
            window_pos: None,
            window_size: None,
            needs_center: false,
        }
    }

    /// Copy live state into the settings and write them out
    pub fn save_settings(&mut self) {
        self.settings.window_x = self.window_pos.map(|p| p.x);
        self.settings.window_y = self.window_pos.map(|p| p.y);
        self.settings.window_w = self.window_size.map(|s| s.x);
        self.settings.window_h = self.window_size.map(|s| s.y);
        self.settings.list_panel_width = self.list_panel_width;

        let presenter = self.window.presenter();
        if let Some(folder) = presenter.data_folder() {
            self.settings.data_folder = Some(folder.to_string_lossy().to_string());
        }
        if let Some(file) = presenter.last_file() {
            self.settings.last_file = Some(file.to_string_lossy().to_string());
        }

        match self.settings.save(&self.data_dir) {
            Ok(()) => debug!(dir = %self.data_dir.display(), "Settings written"),
            Err(e) => warn!(error = %e, "Failed to save settings"),
        }
    }

    pub(crate) fn window_title(&self) -> String {
        format!("{} - {}", APP_NAME, self.campaign.borrow().name)
    }
}
