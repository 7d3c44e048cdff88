//! Modal dialogs and the factory that builds them

mod auto_connection_settings;
mod campaign_properties;
mod trade_route_creator;

pub use auto_connection_settings::AutoConnectionSettingsDialog;
pub use campaign_properties::CampaignPropertiesDialog;
pub use trade_route_creator::TradeRouteCreatorDialog;

use crate::model::{Campaign, GameObjectRepository};
use crate::theme;
use eframe::egui;
use std::cell::RefCell;
use std::rc::Rc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogState {
    Open,
    Accepted,
    Cancelled,
}

pub trait Dialog {
    fn title(&self) -> &'static str;

    /// Render one frame of the dialog
    fn show(&mut self, ctx: &egui::Context) -> DialogState;
}

/// Builds dialogs that share one repository handle
pub struct DialogFactory {
    repository: Rc<RefCell<GameObjectRepository>>,
}

impl DialogFactory {
    pub fn new(repository: Rc<RefCell<GameObjectRepository>>) -> Self {
        Self { repository }
    }

    pub fn make_trade_route_creation_dialog(&self) -> TradeRouteCreatorDialog {
        TradeRouteCreatorDialog::new(Rc::clone(&self.repository))
    }

    pub fn make_auto_connection_settings_dialog(&self) -> AutoConnectionSettingsDialog {
        AutoConnectionSettingsDialog::new(Rc::clone(&self.repository))
    }

    pub fn make_campaign_properties_dialog(
        &self,
        campaign: Rc<RefCell<Campaign>>,
    ) -> CampaignPropertiesDialog {
        CampaignPropertiesDialog::new(campaign)
    }
}

/// Shared modal chrome: title, body, and an accept/cancel row.
/// Escape or a backdrop click cancels.
fn show_modal(
    ctx: &egui::Context,
    title: &str,
    accept_label: &str,
    accept_enabled: bool,
    add_contents: impl FnOnce(&mut egui::Ui),
) -> DialogState {
    let id = egui::Id::new(title);
    let area = egui::Modal::default_area(id).default_width(theme::DIALOG_WIDTH);
    let modal = egui::Modal::new(id)
        .area(area)
        .backdrop_color(egui::Color32::from_black_alpha(180))
        .frame(theme::modal_frame());

    let response = modal.show(ctx, |ui| {
        ui.set_min_width(theme::DIALOG_WIDTH);
        ui.set_max_width(theme::DIALOG_WIDTH);
        ui.label(egui::RichText::new(title).size(theme::FONT_HEADING).strong());
        ui.add_space(theme::SPACING_MD);
        ui.separator();
        ui.add_space(theme::SPACING_MD);

        add_contents(ui);

        ui.add_space(theme::SPACING_LG);
        let mut state = DialogState::Open;
        ui.horizontal(|ui| {
            let ok = ui.add_enabled(
                accept_enabled,
                theme::button_accent(format!("{}  {}", egui_phosphor::regular::CHECK, accept_label)),
            );
            if ok.clicked() {
                state = DialogState::Accepted;
            }
            if ui.add(theme::button("Cancel")).clicked() {
                state = DialogState::Cancelled;
            }
        });
        state
    });

    if response.should_close() && response.inner == DialogState::Open {
        DialogState::Cancelled
    } else {
        response.inner
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn factory() -> (DialogFactory, Rc<RefCell<GameObjectRepository>>) {
        let repo = Rc::new(RefCell::new(GameObjectRepository::demo()));
        (DialogFactory::new(Rc::clone(&repo)), repo)
    }

    #[test]
    fn campaign_dialog_is_bound_to_the_given_campaign() {
        let (factory, _) = factory();
        let campaign = Rc::new(RefCell::new(Campaign::default()));
        let dialog = factory.make_campaign_properties_dialog(Rc::clone(&campaign));
        assert!(Rc::ptr_eq(dialog.campaign(), &campaign));
    }

    #[test]
    fn each_call_builds_a_fresh_dialog() {
        let (factory, repo) = factory();
        let mut first = factory.make_trade_route_creation_dialog();
        first.set_name("Draft");
        let second = factory.make_trade_route_creation_dialog();
        assert_eq!(second.name(), "");

        let _settings = factory.make_auto_connection_settings_dialog();
        // factory + two trade route dialogs + settings dialog + local handle
        assert_eq!(Rc::strong_count(&repo), 5);
    }

    #[test]
    fn dialogs_render_headless() {
        let (factory, _) = factory();
        let mut trade = factory.make_trade_route_creation_dialog();
        let mut settings = factory.make_auto_connection_settings_dialog();
        let mut campaign =
            factory.make_campaign_properties_dialog(Rc::new(RefCell::new(Campaign::default())));

        let ctx = egui::Context::default();
        let mut states = Vec::new();
        let _ = ctx.run(egui::RawInput::default(), |ctx| {
            states.clear();
            states.push(trade.show(ctx));
            states.push(settings.show(ctx));
            states.push(campaign.show(ctx));
        });
        assert_eq!(states, [DialogState::Open; 3]);
        assert_eq!(trade.title(), "Create Trade Route");
    }
}
