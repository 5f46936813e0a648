//! Modal notices shown in place of blocking alerts

use std::collections::VecDeque;

use eframe::egui::{self, Color32, RichText};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Info,
    Success,
    Warning,
    Error,
}

impl NoticeKind {
    fn accent(self) -> Color32 {
        match self {
            NoticeKind::Info => Color32::from_rgb(59, 130, 246),
            NoticeKind::Success => Color32::from_rgb(0, 166, 62),
            NoticeKind::Warning => Color32::from_rgb(245, 158, 11),
            NoticeKind::Error => Color32::from_rgb(220, 38, 38),
        }
    }

    fn title(self) -> &'static str {
        match self {
            NoticeKind::Info => "Notice",
            NoticeKind::Success => "Done",
            NoticeKind::Warning => "Not enough coins",
            NoticeKind::Error => "Something went wrong",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

/// FIFO of pending notices; only the oldest is on screen
#[derive(Default)]
pub struct NoticeQueue {
    notices: VecDeque<Notice>,
}

impl NoticeQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, kind: NoticeKind, message: impl Into<String>) {
        self.notices.push_back(Notice {
            kind,
            message: message.into(),
        });
    }

    pub fn show_info(&mut self, message: impl Into<String>) {
        self.push(NoticeKind::Info, message);
    }

    pub fn show_success(&mut self, message: impl Into<String>) {
        self.push(NoticeKind::Success, message);
    }

    pub fn show_warning(&mut self, message: impl Into<String>) {
        self.push(NoticeKind::Warning, message);
    }

    pub fn show_error(&mut self, message: impl Into<String>) {
        self.push(NoticeKind::Error, message);
    }

    pub fn current(&self) -> Option<&Notice> {
        self.notices.front()
    }

    pub fn dismiss(&mut self) -> Option<Notice> {
        self.notices.pop_front()
    }

    pub fn len(&self) -> usize {
        self.notices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notices.is_empty()
    }

    /// Draw the current notice as a modal. Interaction behind it is blocked.
    pub fn render(&mut self, ctx: &egui::Context) {
        let Some(notice) = self.current().cloned() else {
            return;
        };

        let mut ok_clicked = false;
        let response = egui::Modal::new(egui::Id::new("helpline_notice")).show(ctx, |ui| {
            ui.set_width(340.0);
            ui.label(
                RichText::new(notice.kind.title())
                    .size(18.0)
                    .strong()
                    .color(notice.kind.accent()),
            );
            ui.add_space(8.0);
            ui.label(RichText::new(&notice.message).size(15.0));
            ui.add_space(14.0);
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button(RichText::new("  OK  ").strong()).clicked() {
                    ok_clicked = true;
                }
                if self.len() > 1 {
                    ui.label(
                        RichText::new(format!("{} more", self.len() - 1))
                            .size(12.0)
                            .color(Color32::GRAY),
                    );
                }
            });
        });

        if ok_clicked || response.should_close() {
            self.dismiss();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notices_shown_in_order() {
        let mut queue = NoticeQueue::new();
        assert!(queue.current().is_none());

        queue.show_warning("first");
        queue.show_success("second");
        assert_eq!(queue.len(), 2);
        assert_eq!(queue.current().unwrap().message, "first");
        assert_eq!(queue.current().unwrap().kind, NoticeKind::Warning);

        let dismissed = queue.dismiss().unwrap();
        assert_eq!(dismissed.message, "first");
        assert_eq!(queue.current().unwrap().message, "second");

        queue.dismiss();
        assert!(queue.is_empty());
        assert!(queue.dismiss().is_none());
    }
}
