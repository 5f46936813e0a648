use eframe::egui::{self, Color32, RichText, Sense, Vec2};

use crate::app::helpline_app::CardAction;
use crate::constants::{ACCENT_GREEN_RGB, CARD_ICON_SIZE, HEART_ACTIVE_RGB};
use crate::view::CardView;

/// Draw one service card. Returns the action clicked this frame, if any.
pub fn render_service_card(
    ui: &mut egui::Ui,
    card: &CardView,
    icon: Option<&egui::TextureHandle>,
    can_call: bool,
    width: f32,
) -> Option<CardAction> {
    let service = card.service;
    let (gr, gg, gb) = ACCENT_GREEN_RGB;
    let green = Color32::from_rgb(gr, gg, gb);
    let mut action = None;

    egui::Frame::new()
        .fill(Color32::WHITE)
        .stroke(egui::Stroke::new(1.0, Color32::from_rgb(209, 250, 229)))
        .corner_radius(egui::CornerRadius::same(16))
        .inner_margin(egui::Margin::same(18))
        .show(ui, |ui| {
            ui.set_width(width - 36.0);

            // Icon and heart
            ui.horizontal(|ui| {
                egui::Frame::new()
                    .fill(Color32::from_rgb(254, 242, 242))
                    .corner_radius(egui::CornerRadius::same(8))
                    .inner_margin(egui::Margin::same(10))
                    .show(ui, |ui| match icon {
                        Some(texture) => {
                            ui.add(
                                egui::Image::new(texture)
                                    .fit_to_exact_size(Vec2::splat(CARD_ICON_SIZE)),
                            );
                        }
                        None => {
                            ui.label(RichText::new(service.fallback_glyph()).size(CARD_ICON_SIZE - 6.0));
                        }
                    });

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Min), |ui| {
                    let heart_color = if card.liked {
                        let (r, g, b) = HEART_ACTIVE_RGB;
                        Color32::from_rgb(r, g, b)
                    } else {
                        Color32::from_gray(170)
                    };
                    let heart = ui
                        .add(
                            egui::Label::new(RichText::new("♥").size(24.0).color(heart_color))
                                .sense(Sense::click()),
                        )
                        .on_hover_cursor(egui::CursorIcon::PointingHand);
                    if heart.clicked() {
                        action = Some(CardAction::Like(service.id));
                    }
                });
            });

            ui.add_space(12.0);
            ui.label(RichText::new(service.name).size(17.0).strong().color(Color32::BLACK));
            ui.label(RichText::new(service.short_name).size(13.0).color(Color32::GRAY));
            ui.add_space(4.0);
            ui.label(RichText::new(service.number).size(26.0).strong().color(Color32::BLACK));
            ui.add_space(4.0);
            egui::Frame::new()
                .fill(Color32::from_gray(240))
                .corner_radius(egui::CornerRadius::same(10))
                .inner_margin(egui::Margin::symmetric(8, 2))
                .show(ui, |ui| {
                    ui.label(RichText::new(service.category).size(12.0).color(Color32::DARK_GRAY));
                });

            ui.add_space(14.0);
            ui.horizontal(|ui| {
                let button_width = (ui.available_width() - 8.0) / 2.0;

                let copy = egui::Button::new(RichText::new("⎘ Copy").color(green))
                    .stroke(egui::Stroke::new(1.0, green))
                    .fill(Color32::WHITE)
                    .min_size(Vec2::new(button_width, 30.0));
                if ui.add(copy).clicked() {
                    action = Some(CardAction::Copy(service.number));
                }

                let call = egui::Button::new(RichText::new("📞 Call").color(Color32::WHITE))
                    .fill(if can_call { green } else { Color32::from_gray(160) })
                    .min_size(Vec2::new(button_width, 30.0));
                // Still clickable when broke so the user sees why the call fails
                if ui.add(call).clicked() {
                    action = Some(CardAction::Call(service.id));
                }
            });
        });

    action
}
