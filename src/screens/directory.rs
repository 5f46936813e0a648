use eframe::egui::{self, Color32, RichText};

use crate::app::HelplineApp;
use crate::constants::{CARD_SPACING, CARD_WIDTH};
use crate::data::catalog::SERVICES;
use crate::ui_components::card::render_service_card;
use crate::view::{card_views, grid_layout, CountersView};

/// Directory view - every catalog entry as a card in a responsive grid
pub fn render_directory_view(app: &mut HelplineApp, ui: &mut egui::Ui, ctx: &egui::Context) {
    let cards = card_views(SERVICES, &app.session);
    let can_call = CountersView::from(&app.session).can_call;
    let mut clicked = None;

    egui::ScrollArea::vertical().show(ui, |ui| {
        ui.add_space(16.0);
        ui.vertical_centered(|ui| {
            ui.label(
                RichText::new("National Emergency Helplines")
                    .size(24.0)
                    .strong()
                    .color(Color32::BLACK),
            );
            ui.label(
                RichText::new("Copy a number or place a simulated call (20 coins each)")
                    .size(14.0)
                    .color(Color32::GRAY),
            );
        });
        ui.add_space(16.0);

        let (columns, padding) = grid_layout(ui.available_width(), CARD_WIDTH, CARD_SPACING);

        for row in cards.chunks(columns) {
            ui.horizontal_top(|ui| {
                ui.add_space(padding);
                for card in row {
                    let icon = app.ui.icon_texture(ctx, card.service.id, card.service.icon);
                    if let Some(action) =
                        render_service_card(ui, card, icon.as_ref(), can_call, CARD_WIDTH)
                    {
                        clicked = Some(action);
                    }
                    ui.add_space(CARD_SPACING);
                }
            });
            ui.add_space(CARD_SPACING);
        }
    });

    if let Some(action) = clicked {
        app.apply_card_action(action);
    }
}
