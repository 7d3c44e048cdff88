use super::{show_modal, Dialog, DialogState};
use crate::model::Campaign;
use crate::theme;
use eframe::egui;
use std::cell::RefCell;
use std::rc::Rc;
use tracing::info;

/// Edits a copy of the campaign; the shared campaign only changes on accept
pub struct CampaignPropertiesDialog {
    campaign: Rc<RefCell<Campaign>>,
    draft: Campaign,
}

impl CampaignPropertiesDialog {
    pub fn new(campaign: Rc<RefCell<Campaign>>) -> Self {
        let draft = campaign.borrow().clone();
        Self { campaign, draft }
    }

    #[cfg(test)]
    pub fn campaign(&self) -> &Rc<RefCell<Campaign>> {
        &self.campaign
    }

    #[cfg(test)]
    pub fn draft_mut(&mut self) -> &mut Campaign {
        &mut self.draft
    }

    pub fn is_valid(&self) -> bool {
        !self.draft.name.trim().is_empty()
    }

    pub fn apply(&self) {
        info!(name = %self.draft.name, "Campaign properties applied");
        *self.campaign.borrow_mut() = self.draft.clone();
    }
}

impl Dialog for CampaignPropertiesDialog {
    fn title(&self) -> &'static str {
        "Campaign Properties"
    }

    fn show(&mut self, ctx: &egui::Context) -> DialogState {
        let valid = self.is_valid();
        let draft = &mut self.draft;
        let state = show_modal(ctx, "Campaign Properties", "Save", valid, |ui| {
            egui::Grid::new("campaign_grid")
                .num_columns(2)
                .spacing([theme::SPACING_LG, theme::SPACING_MD])
                .show(ui, |ui| {
                    ui.label("Name");
                    ui.text_edit_singleline(&mut draft.name);
                    ui.end_row();

                    ui.label("Campaign set");
                    ui.text_edit_singleline(&mut draft.set_name);
                    ui.end_row();

                    ui.label("Sort order");
                    ui.add(egui::DragValue::new(&mut draft.sort_order));
                    ui.end_row();
                });
            ui.add_space(theme::SPACING_SM);
            ui.label("Description");
            ui.add(
                egui::TextEdit::multiline(&mut draft.description)
                    .desired_rows(4)
                    .desired_width(f32::INFINITY),
            );
        });

        if state == DialogState::Accepted {
            self.apply();
        }
        state
    }
}
