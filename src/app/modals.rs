//! Modal dialogs opened from the Edit menu

use super::App;
use crate::types::DialogKind;
use crate::ui::dialogs::{
    AutoConnectionSettingsDialog, CampaignPropertiesDialog, Dialog, DialogState,
    TradeRouteCreatorDialog,
};
use eframe::egui;
use std::rc::Rc;
use tracing::{debug, info};

/// The one dialog that can be open at a time
pub(crate) enum ActiveDialog {
    TradeRoute(TradeRouteCreatorDialog),
    Campaign(CampaignPropertiesDialog),
    AutoConnection(AutoConnectionSettingsDialog),
}

impl ActiveDialog {
    fn as_dialog(&mut self) -> &mut dyn Dialog {
        match self {
            ActiveDialog::TradeRoute(d) => d,
            ActiveDialog::Campaign(d) => d,
            ActiveDialog::AutoConnection(d) => d,
        }
    }
}

impl App {
    pub(crate) fn open_dialog(&mut self, kind: DialogKind) {
        let dialog = match kind {
            DialogKind::TradeRouteCreator => {
                ActiveDialog::TradeRoute(self.dialogs.make_trade_route_creation_dialog())
            }
            DialogKind::CampaignProperties => ActiveDialog::Campaign(
                self.dialogs.make_campaign_properties_dialog(Rc::clone(&self.campaign)),
            ),
            DialogKind::AutoConnectionSettings => {
                ActiveDialog::AutoConnection(self.dialogs.make_auto_connection_settings_dialog())
            }
        };
        debug!(?kind, "Dialog opened");
        self.active_dialog = Some(dialog);
    }

    pub(crate) fn render_active_dialog(&mut self, ctx: &egui::Context) {
        let Some(active) = self.active_dialog.as_mut() else {
            return;
        };
        let state = active.as_dialog().show(ctx);
        if state == DialogState::Open {
            return;
        }

        let Some(active) = self.active_dialog.take() else {
            return;
        };
        if state == DialogState::Cancelled {
            debug!("Dialog cancelled");
            return;
        }

        match active {
            ActiveDialog::TradeRoute(mut dialog) => {
                if let Some(route) = dialog.take_created_route() {
                    info!(name = %route.name, "Trade route created");
                    self.window.dispatch(|presenter, view| presenter.add_trade_route(view, route));
                }
            }
            ActiveDialog::Campaign(_) => {
                ctx.send_viewport_cmd(egui::ViewportCommand::Title(self.window_title()));
            }
            ActiveDialog::AutoConnection(_) => {}
        }
    }
}
