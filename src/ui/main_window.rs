//! Main window: menu bar, planet and trade route lists, galactic plot
//!
//! The window turns raw egui input into presenter calls. Everything the
//! presenter can touch lives in `MainWindowState`, which is kept apart from
//! the presenter itself so a callback can update the view without aliasing.

use crate::constants::{APP_NAME, PLANETS_HEADER, TRADE_ROUTES_HEADER};
use crate::presenter::{MainWindowPresenter, MainWindowView};
use crate::theme;
use crate::types::{DialogKind, MenuAction, MenuOutcome};
use crate::ui::file_picker::FilePicker;
use crate::ui::galactic_plot::GalacticPlot;
use crate::ui::table::{CheckableTable, TableError, TableFactory, TableLayout};
use eframe::egui;
use std::path::Path;
use tracing::{debug, info, warn};

const FILE_MENU: [(MenuAction, &str, &str); 4] = [
    (MenuAction::Open, egui_phosphor::regular::FOLDER_OPEN, "Open Galactic Conquest"),
    (MenuAction::Save, egui_phosphor::regular::FLOPPY_DISK, "Save"),
    (MenuAction::SetDataFolder, egui_phosphor::regular::FOLDER, "Set Data Folder"),
    (MenuAction::Quit, egui_phosphor::regular::SIGN_OUT, "Quit"),
];

const EDIT_MENU: [(MenuAction, &str, &str); 3] = [
    (MenuAction::CreateTradeRoute, egui_phosphor::regular::PATH, "Create Trade Route"),
    (MenuAction::CampaignProperties, egui_phosphor::regular::FLAG, "Campaign Properties"),
    (MenuAction::AutoConnectionSettings, egui_phosphor::regular::GEAR, "Auto Connection Settings"),
];

/// Widgets the presenter is allowed to change
pub struct MainWindowState {
    planets: CheckableTable,
    trade_routes: CheckableTable,
    plot: Option<GalacticPlot>,
    status: Option<String>,
}

impl MainWindowView for MainWindowState {
    fn add_planets(&mut self, names: &[String]) {
        for name in names {
            self.planets.append_row(name.as_str());
        }
        debug!(added = names.len(), total = self.planets.row_count(), "Planets listed");
    }

    fn add_trade_routes(&mut self, names: &[String]) {
        for name in names {
            self.trade_routes.append_row(name.as_str());
        }
        debug!(added = names.len(), total = self.trade_routes.row_count(), "Trade routes listed");
    }

    fn make_galactic_plot(&mut self) -> &mut GalacticPlot {
        self.plot.insert(GalacticPlot::new())
    }

    fn galactic_plot(&mut self) -> Option<&mut GalacticPlot> {
        self.plot.as_mut()
    }
}

pub struct MainWindow<P: MainWindowPresenter> {
    presenter: P,
    state: MainWindowState,
    picker: Box<dyn FilePicker>,
}

impl<P: MainWindowPresenter> MainWindow<P> {
    pub fn new(presenter: P, picker: Box<dyn FilePicker>) -> Result<Self, TableError> {
        Ok(Self {
            presenter,
            state: MainWindowState {
                planets: TableFactory::construct(TableLayout {
                    labels: &[PLANETS_HEADER],
                    ..Default::default()
                })?,
                trade_routes: TableFactory::construct(TableLayout {
                    labels: &[TRADE_ROUTES_HEADER],
                    ..Default::default()
                })?,
                plot: None,
                status: None,
            },
            picker,
        })
    }

    /// Root window description for the native bootstrap
    pub fn viewport_builder() -> egui::ViewportBuilder {
        egui::ViewportBuilder::default()
            .with_title(APP_NAME)
            .with_inner_size([1280.0, 760.0])
            .with_min_inner_size([800.0, 500.0])
    }

    /// Let the presenter fill the window
    pub fn attach(&mut self) {
        self.presenter.attach(&mut self.state);
    }

    /// Run a closure with the presenter and the view it drives
    pub fn dispatch<R>(&mut self, f: impl FnOnce(&mut P, &mut dyn MainWindowView) -> R) -> R {
        f(&mut self.presenter, &mut self.state)
    }

    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    #[cfg(test)]
    pub fn planets(&self) -> &CheckableTable {
        &self.state.planets
    }

    #[cfg(test)]
    pub fn trade_routes(&self) -> &CheckableTable {
        &self.state.trade_routes
    }

    #[cfg(test)]
    pub fn galactic_plot(&self) -> Option<&GalacticPlot> {
        self.state.plot.as_ref()
    }

    /// Last path surfaced by a file prompt
    #[cfg(test)]
    pub fn status(&self) -> Option<&str> {
        self.state.status.as_deref()
    }

    pub fn on_planet_row_clicked(&mut self, row: usize) {
        match self.state.planets.toggle(row) {
            Some(checked) => {
                debug!(row, name = ?self.state.planets.row_text(row), checked, "Planet toggled");
                self.presenter.on_planet_checked(&mut self.state, row, checked);
            }
            None => warn!(row, "Click on unknown planet row"),
        }
    }

    pub fn on_trade_route_row_clicked(&mut self, row: usize) {
        match self.state.trade_routes.toggle(row) {
            Some(checked) => {
                let name = self.state.trade_routes.row_text(row);
                debug!(row, name = ?name, checked, "Trade route toggled");
                self.presenter.on_trade_route_checked(&mut self.state, row, checked);
            }
            None => warn!(row, "Click on unknown trade route row"),
        }
    }

    /// Check every planet and notify for each row, including rows already checked
    pub fn select_all_planets(&mut self) {
        for row in 0..self.state.planets.row_count() {
            self.state.planets.set_checked(row, true);
            self.presenter.on_planet_checked(&mut self.state, row, true);
        }
    }

    pub fn select_all_trade_routes(&mut self) {
        for row in 0..self.state.trade_routes.row_count() {
            self.state.trade_routes.set_checked(row, true);
            self.presenter.on_trade_route_checked(&mut self.state, row, true);
        }
    }

    pub fn handle_menu(&mut self, action: MenuAction) -> MenuOutcome {
        debug!(?action, "Menu action");
        match action {
            MenuAction::Open => {
                if let Some(path) = self.picker.pick_open_file() {
                    self.surface_path("Opened", &path);
                    self.presenter.on_open_file(&path);
                }
                MenuOutcome::Handled
            }
            MenuAction::SetDataFolder => {
                if let Some(path) = self.picker.pick_folder() {
                    self.surface_path("Data folder", &path);
                    self.presenter.on_data_folder_selected(&path);
                }
                MenuOutcome::Handled
            }
            MenuAction::Save => {
                if let Some(path) = self.picker.pick_save_file() {
                    self.surface_path("Save to", &path);
                    self.presenter.on_save_file(&path);
                }
                MenuOutcome::Handled
            }
            MenuAction::Quit => {
                info!("Quit requested");
                MenuOutcome::Close
            }
            MenuAction::CreateTradeRoute => MenuOutcome::OpenDialog(DialogKind::TradeRouteCreator),
            MenuAction::CampaignProperties => {
                MenuOutcome::OpenDialog(DialogKind::CampaignProperties)
            }
            MenuAction::AutoConnectionSettings => {
                MenuOutcome::OpenDialog(DialogKind::AutoConnectionSettings)
            }
        }
    }

    fn surface_path(&mut self, label: &str, path: &Path) {
        info!(path = %path.display(), "{}", label);
        self.state.status = Some(format!("{}: {}", label, path.display()));
    }

    /// Render one frame. `list_panel_width` is read and updated so the shell can persist it.
    pub fn show(&mut self, ctx: &egui::Context, list_panel_width: &mut f32) -> MenuOutcome {
        let mut action = None;

        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("File", |ui| {
                    for (item, icon, label) in FILE_MENU {
                        if theme::menu_item(ui, icon, label) {
                            action = Some(item);
                            ui.close_menu();
                        }
                    }
                });
                ui.menu_button("Edit", |ui| {
                    for (item, icon, label) in EDIT_MENU {
                        if theme::menu_item(ui, icon, label) {
                            action = Some(item);
                            ui.close_menu();
                        }
                    }
                });
            });
        });

        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            let text = self.state.status.as_deref().unwrap_or("Ready");
            ui.label(egui::RichText::new(text).size(theme::FONT_SMALL).color(theme::TEXT_MUTED));
        });

        let mut planet_clicks = Vec::new();
        let mut route_clicks = Vec::new();
        let mut select_all_planets = false;
        let mut select_all_routes = false;

        let state = &mut self.state;
        let panel = egui::SidePanel::left("list_panel")
            .resizable(true)
            .default_width(*list_panel_width)
            .min_width(180.0)
            .frame(theme::sidebar_frame())
            .show(ctx, |ui| {
                let reserved = 2.0 * (theme::BUTTON_HEIGHT + theme::SPACING_LG * 2.0);
                let table_height = ((ui.available_height() - reserved) / 2.0).max(60.0);
                let width = ui.available_width();

                ui.push_id("planet_table", |ui| {
                    planet_clicks = state.planets.show(ui, table_height);
                });
                ui.add_space(theme::SPACING_SM);
                select_all_planets = ui
                    .add_sized([width, theme::BUTTON_HEIGHT], theme::button("Select All Planets"))
                    .clicked();

                ui.add_space(theme::SPACING_LG);

                ui.push_id("trade_route_table", |ui| {
                    route_clicks = state.trade_routes.show(ui, table_height);
                });
                ui.add_space(theme::SPACING_SM);
                select_all_routes = ui
                    .add_sized([width, theme::BUTTON_HEIGHT], theme::button("Select All Trade Routes"))
                    .clicked();
            });
        *list_panel_width = panel.response.rect.width();

        egui::CentralPanel::default().show(ctx, |ui| match state.plot.as_mut() {
            Some(plot) => plot.show(ui),
            None => {
                ui.centered_and_justified(|ui| {
                    ui.label(egui::RichText::new("No galactic plot").color(theme::TEXT_DIM));
                });
            }
        });

        for row in planet_clicks {
            self.on_planet_row_clicked(row);
        }
        for row in route_clicks {
            self.on_trade_route_row_clicked(row);
        }
        if select_all_planets {
            self.select_all_planets();
        }
        if select_all_routes {
            self.select_all_trade_routes();
        }

        match action {
            Some(action) => self.handle_menu(action),
            None => MenuOutcome::Handled,
        }
    }
}
