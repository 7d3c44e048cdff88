use super::{show_modal, Dialog, DialogState};
use crate::model::{GameObjectRepository, TradeRoute};
use crate::theme;
use eframe::egui;
use std::cell::RefCell;
use std::rc::Rc;
use tracing::debug;

/// Pick two planets and a name to create a trade route
pub struct TradeRouteCreatorDialog {
    repository: Rc<RefCell<GameObjectRepository>>,
    name: String,
    name_edited: bool,
    start: Option<usize>,
    end: Option<usize>,
    created: Option<TradeRoute>,
}

impl TradeRouteCreatorDialog {
    pub fn new(repository: Rc<RefCell<GameObjectRepository>>) -> Self {
        Self {
            repository,
            name: String::new(),
            name_edited: false,
            start: None,
            end: None,
            created: None,
        }
    }

    #[cfg(test)]
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
        self.name_edited = true;
    }

    pub fn select_start(&mut self, planet: usize) {
        self.start = Some(planet);
        self.suggest_name();
    }

    pub fn select_end(&mut self, planet: usize) {
        self.end = Some(planet);
        self.suggest_name();
    }

    /// Route produced by the last successful accept
    #[cfg(test)]
    pub fn created_route(&self) -> Option<&TradeRoute> {
        self.created.as_ref()
    }

    pub fn take_created_route(&mut self) -> Option<TradeRoute> {
        self.created.take()
    }

    /// Name routes "Start_End" until the user types their own
    fn suggest_name(&mut self) {
        if self.name_edited {
            return;
        }
        let repo = self.repository.borrow();
        let planet_name = |i: Option<usize>| {
            i.and_then(|i| repo.planets().get(i))
                .map(|p| p.name.replace(' ', "_"))
        };
        if let (Some(a), Some(b)) = (planet_name(self.start), planet_name(self.end)) {
            self.name = format!("{}_{}", a, b);
        }
    }

    pub fn validate(&self) -> Result<TradeRoute, &'static str> {
        let repo = self.repository.borrow();
        let start = self.start.and_then(|i| repo.planets().get(i)).ok_or("Choose a start planet")?;
        let end = self.end.and_then(|i| repo.planets().get(i)).ok_or("Choose an end planet")?;
        if start.name == end.name {
            return Err("Start and end must be different planets");
        }
        let name = self.name.trim();
        if name.is_empty() {
            return Err("Enter a route name");
        }
        if repo.trade_routes().iter().any(|r| r.name == name) {
            return Err("A trade route with this name already exists");
        }
        Ok(TradeRoute::new(name, start.name.clone(), end.name.clone()))
    }

    /// Accept if the current input is valid
    pub fn accept(&mut self) -> bool {
        match self.validate() {
            Ok(route) => {
                debug!(name = %route.name, "Trade route accepted");
                self.created = Some(route);
                true
            }
            Err(_) => false,
        }
    }

    fn planet_combo(ui: &mut egui::Ui, id: &str, names: &[String], selected: &mut Option<usize>) -> bool {
        let text = selected.and_then(|i| names.get(i)).map(String::as_str).unwrap_or("Select planet");
        let mut changed = false;
        egui::ComboBox::from_id_salt(id)
            .selected_text(text)
            .width(theme::DIALOG_WIDTH - 120.0)
            .show_ui(ui, |ui| {
                for (i, name) in names.iter().enumerate() {
                    if ui.selectable_value(selected, Some(i), name.as_str()).changed() {
                        changed = true;
                    }
                }
            });
        changed
    }
}

impl Dialog for TradeRouteCreatorDialog {
    fn title(&self) -> &'static str {
        "Create Trade Route"
    }

    fn show(&mut self, ctx: &egui::Context) -> DialogState {
        let names = self.repository.borrow().planet_names();
        let validation = self.validate();
        let mut start = self.start;
        let mut end = self.end;
        let mut name = self.name.clone();
        let mut name_changed = false;

        let state = show_modal(ctx, self.title(), "Create", validation.is_ok(), |ui| {
            egui::Grid::new("trade_route_grid")
                .num_columns(2)
                .spacing([theme::SPACING_LG, theme::SPACING_MD])
                .show(ui, |ui| {
                    ui.label("Start");
                    Self::planet_combo(ui, "trade_route_start", &names, &mut start);
                    ui.end_row();

                    ui.label("End");
                    Self::planet_combo(ui, "trade_route_end", &names, &mut end);
                    ui.end_row();

                    ui.label("Name");
                    name_changed = ui.text_edit_singleline(&mut name).changed();
                    ui.end_row();
                });
            if let Err(reason) = &validation {
                ui.add_space(theme::SPACING_SM);
                ui.label(egui::RichText::new(*reason).size(theme::FONT_SMALL).color(theme::TEXT_DIM));
            }
        });

        if name_changed {
            self.set_name(name);
        }
        if start != self.start {
            if let Some(i) = start {
                self.select_start(i);
            }
        }
        if end != self.end {
            if let Some(i) = end {
                self.select_end(i);
            }
        }

        match state {
            DialogState::Accepted if !self.accept() => DialogState::Open,
            other => other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dialog() -> TradeRouteCreatorDialog {
        TradeRouteCreatorDialog::new(Rc::new(RefCell::new(GameObjectRepository::demo())))
    }

    #[test]
    fn suggests_name_from_endpoints() {
        let mut dialog = dialog();
        dialog.select_start(2);
        dialog.select_end(3);
        assert_eq!(dialog.name(), "Cygnar_Dorrin_Prime");
        assert!(dialog.accept());
        let route = dialog.created_route().unwrap();
        assert_eq!((route.start.as_str(), route.end.as_str()), ("Cygnar", "Dorrin Prime"));
    }

    #[test]
    fn typed_name_is_kept() {
        let mut dialog = dialog();
        dialog.set_name("Spice Run");
        dialog.select_start(4);
        dialog.select_end(5);
        assert_eq!(dialog.name(), "Spice Run");
        assert!(dialog.accept());
        assert_eq!(dialog.take_created_route().unwrap().name, "Spice Run");
        assert!(dialog.created_route().is_none());
    }

    #[test]
    fn rejects_incomplete_or_invalid_input() {
        let mut dialog = dialog();
        assert_eq!(dialog.validate().unwrap_err(), "Choose a start planet");
        dialog.select_start(0);
        assert_eq!(dialog.validate().unwrap_err(), "Choose an end planet");
        dialog.select_end(0);
        assert_eq!(dialog.validate().unwrap_err(), "Start and end must be different planets");
        dialog.select_end(1);
        // Aldara_Brisk already exists in the demo sector
        assert_eq!(dialog.validate().unwrap_err(), "A trade route with this name already exists");
        dialog.set_name("   ");
        assert_eq!(dialog.validate().unwrap_err(), "Enter a route name");
        assert!(!dialog.accept());
        assert!(dialog.created_route().is_none());
    }

    #[test]
    fn accept_does_not_touch_repository() {
        let repo = Rc::new(RefCell::new(GameObjectRepository::demo()));
        let before = repo.borrow().trade_routes().len();
        let mut dialog = TradeRouteCreatorDialog::new(Rc::clone(&repo));
        dialog.select_start(1);
        dialog.select_end(2);
        assert!(dialog.accept());
        assert_eq!(repo.borrow().trade_routes().len(), before);
    }
}
