//! Auto connection settings dialog
//!
//! Only edits the settings stored in the repository. Route generation reads
//! them from there and is not part of the editor UI.

use super::{show_modal, Dialog, DialogState};
use crate::model::{AutoConnectionSettings, GameObjectRepository};
use crate::theme;
use eframe::egui;
use std::cell::RefCell;
use std::rc::Rc;
use tracing::info;

pub struct AutoConnectionSettingsDialog {
    repository: Rc<RefCell<GameObjectRepository>>,
    draft: AutoConnectionSettings,
}

impl AutoConnectionSettingsDialog {
    pub fn new(repository: Rc<RefCell<GameObjectRepository>>) -> Self {
        let draft = repository.borrow().auto_connection_settings().clone();
        Self { repository, draft }
    }

    #[cfg(test)]
    pub fn draft(&self) -> &AutoConnectionSettings {
        &self.draft
    }

    #[cfg(test)]
    pub fn draft_mut(&mut self) -> &mut AutoConnectionSettings {
        &mut self.draft
    }

    /// Write the draft back to the repository
    pub fn apply(&self) {
        info!(
            max_distance = self.draft.max_distance,
            max_routes = self.draft.max_routes_per_planet,
            "Auto connection settings applied"
        );
        self.repository
            .borrow_mut()
            .set_auto_connection_settings(self.draft.clone());
    }
}

impl Dialog for AutoConnectionSettingsDialog {
    fn title(&self) -> &'static str {
        "Auto Connection Settings"
    }

    fn show(&mut self, ctx: &egui::Context) -> DialogState {
        let draft = &mut self.draft;
        let state = show_modal(ctx, "Auto Connection Settings", "Apply", true, |ui| {
            egui::Grid::new("auto_connection_grid")
                .num_columns(2)
                .spacing([theme::SPACING_LG, theme::SPACING_MD])
                .show(ui, |ui| {
                    ui.label("Max distance");
                    ui.add(egui::Slider::new(&mut draft.max_distance, 10.0..=1000.0).step_by(5.0));
                    ui.end_row();

                    ui.label("Max routes per planet");
                    ui.add(egui::DragValue::new(&mut draft.max_routes_per_planet).range(1..=12));
                    ui.end_row();
                });
        });

        if state == DialogState::Accepted {
            self.apply();
        }
        state
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn draft_is_only_written_on_apply() {
        let repo = Rc::new(RefCell::new(GameObjectRepository::new()));
        let mut dialog = AutoConnectionSettingsDialog::new(Rc::clone(&repo));
        assert_eq!(dialog.draft(), &AutoConnectionSettings::default());

        dialog.draft_mut().max_distance = 250.0;
        dialog.draft_mut().max_routes_per_planet = 5;
        assert_eq!(repo.borrow().auto_connection_settings().max_distance, 120.0);

        dialog.apply();
        let settings = repo.borrow().auto_connection_settings().clone();
        assert_eq!(settings.max_distance, 250.0);
        assert_eq!(settings.max_routes_per_planet, 5);
    }

    #[test]
    fn draft_starts_from_current_settings() {
        let repo = Rc::new(RefCell::new(GameObjectRepository::new()));
        repo.borrow_mut().set_auto_connection_settings(AutoConnectionSettings {
            max_distance: 80.0,
            max_routes_per_planet: 2,
        });
        let dialog = AutoConnectionSettingsDialog::new(repo);
        assert_eq!(dialog.draft().max_distance, 80.0);
    }
}
