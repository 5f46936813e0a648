use eframe::egui::{self, Color32, RichText};

use crate::app::HelplineApp;
use crate::constants::{ACCENT_GREEN_RGB, COIN_GOLD_RGB, HEART_ACTIVE_RGB};
use crate::view::CountersView;

/// Top bar: app title on the left, session counters on the right
pub fn render_counters_bar(app: &HelplineApp, ui: &mut egui::Ui) {
    let counters = CountersView::from(&app.session);
    let (r, g, b) = ACCENT_GREEN_RGB;

    ui.add_space(8.0);
    ui.horizontal(|ui| {
        ui.label(
            RichText::new("☎ Emergency Service Directory")
                .size(22.0)
                .strong()
                .color(Color32::from_rgb(r, g, b)),
        );

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            counter_chip(ui, "Copied", counters.copies, Color32::from_rgb(r, g, b));

            let (cr, cg, cb) = COIN_GOLD_RGB;
            let coin_color = if counters.can_call {
                Color32::from_rgb(cr, cg, cb)
            } else {
                Color32::GRAY
            };
            counter_chip(ui, "🪙", counters.coins, coin_color);

            let (hr, hg, hb) = HEART_ACTIVE_RGB;
            counter_chip(ui, "♥", counters.likes, Color32::from_rgb(hr, hg, hb));
        });
    });
    ui.add_space(8.0);
}

fn counter_chip(ui: &mut egui::Ui, label: &str, value: u32, color: Color32) {
    egui::Frame::new()
        .fill(Color32::from_gray(245))
        .corner_radius(egui::CornerRadius::same(12))
        .inner_margin(egui::Margin::symmetric(12, 6))
        .show(ui, |ui| {
            ui.horizontal(|ui| {
                ui.label(RichText::new(value.to_string()).size(16.0).strong());
                ui.label(RichText::new(label).size(16.0).color(color));
            });
        });
    ui.add_space(6.0);
}
