use eframe::egui::{self, Color32, RichText};

use crate::app::HelplineApp;
use crate::utils::formatting::count_label;

/// Call history panel, most recent call on top
pub fn render_history_panel(app: &mut HelplineApp, ui: &mut egui::Ui) {
    ui.add_space(16.0);
    ui.horizontal(|ui| {
        ui.label(RichText::new("🕘 Call History").size(20.0).strong());
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            let clear = egui::Button::new(RichText::new("Clear").color(Color32::WHITE))
                .fill(Color32::from_rgb(0, 166, 62));
            if ui.add(clear).clicked() {
                app.clear_history();
            }
        });
    });
    ui.label(
        RichText::new(count_label(app.session.history_len(), "call", "calls"))
            .size(12.0)
            .color(Color32::GRAY),
    );
    ui.add_space(12.0);

    if app.session.history_len() == 0 {
        ui.vertical_centered(|ui| {
            ui.add_space(40.0);
            ui.label(
                RichText::new("No calls yet")
                    .size(15.0)
                    .color(Color32::GRAY),
            );
        });
        return;
    }

    egui::ScrollArea::vertical().show(ui, |ui| {
        for entry in app.session.history() {
            egui::Frame::new()
                .fill(Color32::from_gray(248))
                .corner_radius(egui::CornerRadius::same(8))
                .inner_margin(egui::Margin::same(10))
                .show(ui, |ui| {
                    ui.set_width(ui.available_width());
                    ui.horizontal(|ui| {
                        ui.vertical(|ui| {
                            ui.label(
                                RichText::new(&entry.service_name)
                                    .strong()
                                    .color(Color32::from_gray(60)),
                            );
                            ui.label(
                                RichText::new(&entry.number)
                                    .size(13.0)
                                    .color(Color32::GRAY),
                            );
                        });
                        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                            ui.label(
                                RichText::new(entry.time_label())
                                    .size(13.0)
                                    .color(Color32::GRAY),
                            );
                        });
                    });
                });
            ui.add_space(8.0);
        }
    });
}
