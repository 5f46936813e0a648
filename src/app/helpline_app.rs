use std::time::Duration;

use chrono::{DateTime, Local};
use eframe::egui;
use log::{info, warn};

use crate::config::AppConfig;
use crate::constants::CLIPBOARD_POLL_MILLIS;
use crate::state::{BackgroundTasks, LikeOutcome, SessionState, UIState};
use crate::utils::clipboard::{ClipboardWorker, CopyResult};
use crate::utils::HelplineError;

/// Action raised by a card click, applied after the frame's layout pass
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardAction {
    Like(u32),
    Copy(&'static str),
    Call(u32),
}

pub struct HelplineApp {
    // Counters, liked ids, call history
    pub session: SessionState,

    // Notices and icon textures
    pub ui: UIState,

    // Clipboard worker
    pub tasks: BackgroundTasks,
}

impl HelplineApp {
    /// Create the app from eframe's CreationContext
    pub fn new(cc: &eframe::CreationContext<'_>, config: AppConfig) -> Self {
        cc.egui_ctx.set_visuals(egui::Visuals::light());
        Self::with_clipboard(config, ClipboardWorker::spawn_system())
    }

    /// Create the app around an existing clipboard worker
    pub fn with_clipboard(config: AppConfig, clipboard: ClipboardWorker) -> Self {
        info!(
            "[App] Session started with {} coins, {} services",
            config.starting_coins,
            crate::data::catalog::SERVICES.len()
        );
        Self {
            session: SessionState::new(config.starting_coins, config.history_limit),
            ui: UIState::new(config.assets_dir),
            tasks: BackgroundTasks::new(clipboard),
        }
    }

    /// Route a card click to its handler
    pub fn apply_card_action(&mut self, action: CardAction) {
        match action {
            CardAction::Like(id) => self.like_service(id),
            CardAction::Copy(number) => self.copy_number(number),
            CardAction::Call(id) => self.call_service(id),
        }
    }

    /// Like a service; repeat likes are silently ignored
    pub fn like_service(&mut self, service_id: u32) {
        match self.session.like(service_id) {
            Ok(LikeOutcome::Liked) => {
                info!(
                    "[Like] Liked service {} (total likes: {})",
                    service_id,
                    self.session.counters().likes
                );
            }
            Ok(LikeOutcome::AlreadyLiked) => {
                log::debug!("[Like] Service {} already liked", service_id);
            }
            Err(e) => warn!("[Like] {}", e),
        }
    }

    /// Send a number to the clipboard; the result is handled in `check_clipboard`
    pub fn copy_number(&mut self, number: &str) {
        info!("[Copy] Requesting clipboard write of {}", number);
        if let Err(e) = self.tasks.clipboard.request_copy(number) {
            self.handle_copy_result(Err((number.to_string(), e)));
        }
    }

    /// Apply one finished clipboard write
    pub fn handle_copy_result(&mut self, result: CopyResult) {
        match result {
            Ok(number) => {
                self.session.record_copy();
                info!(
                    "[Copy] Copied {} (total copies: {})",
                    number,
                    self.session.counters().copies
                );
                self.ui
                    .notices
                    .show_success(format!("\"{}\" copied to clipboard.", number));
            }
            Err((number, e)) => {
                warn!("[Copy] Could not copy {}: {}", number, e);
                let reason = match e {
                    HelplineError::Clipboard(reason) => reason,
                    other => other.to_string(),
                };
                self.ui
                    .notices
                    .show_error(format!("Could not copy \"{}\": {}", number, reason));
            }
        }
    }

    /// Drain finished clipboard writes and keep polling while any are pending
    pub fn check_clipboard(&mut self, ctx: &egui::Context) {
        for result in self.tasks.drain_clipboard() {
            self.handle_copy_result(result);
        }
        if self.tasks.has_active_tasks() {
            ctx.request_repaint_after(Duration::from_millis(CLIPBOARD_POLL_MILLIS));
        }
    }

    /// Place a simulated call at the current local time
    pub fn call_service(&mut self, service_id: u32) {
        self.call_service_at(service_id, Local::now());
    }

    pub fn call_service_at(&mut self, service_id: u32, now: DateTime<Local>) {
        match self.session.call(service_id, now) {
            Ok(service) => {
                info!(
                    "[Call] Calling {} ({}), coins left: {}",
                    service.name,
                    service.number,
                    self.session.counters().coins
                );
                self.ui
                    .notices
                    .show_info(format!("Calling {} ({})", service.name, service.number));
            }
            Err(e) => match e {
                HelplineError::InsufficientCoins { required, balance } => {
                    warn!(
                        "[Call] Rejected call to service {}: balance {} below cost {}",
                        service_id, balance, required
                    );
                    self.ui.notices.show_warning(e.to_string());
                }
                other => warn!("[Call] {}", other),
            },
        }
    }

    /// Empty the call history; counters and likes are untouched
    pub fn clear_history(&mut self) {
        let removed = self.session.clear_history();
        info!("[History] Cleared {} entries", removed);
        self.ui.notices.show_success("Call history has been cleared.");
    }

    fn cleanup_and_exit(&mut self) {
        info!("[Shutdown] Stopping clipboard worker...");
        self.tasks.clear_all();

        info!("[Shutdown] Clearing icon cache...");
        self.ui.clear_icons();

        let counters = self.session.counters();
        info!(
            "[Shutdown] Session ended: likes={} coins={} copies={} calls_in_history={}",
            counters.likes,
            counters.coins,
            counters.copies,
            self.session.history_len()
        );
    }
}

impl eframe::App for HelplineApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if ctx.input(|i| i.viewport().close_requested()) && !self.ui.is_shutting_down {
            self.ui.is_shutting_down = true;
            self.cleanup_and_exit();
            return;
        }

        self.check_clipboard(ctx);

        egui::TopBottomPanel::top("counters_bar").show(ctx, |ui| {
            crate::ui_components::counters_bar::render_counters_bar(self, ui);
        });

        egui::SidePanel::right("call_history")
            .resizable(false)
            .exact_width(crate::constants::HISTORY_PANEL_WIDTH)
            .show(ctx, |ui| {
                crate::screens::history::render_history_panel(self, ui);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            crate::screens::directory::render_directory_view(self, ui, ctx);
        });

        if !self.ui.notices.is_empty() {
            self.ui.notices.render(ctx);
        }
    }
}
