use std::collections::{HashMap, HashSet};
use std::path::PathBuf;

use egui::TextureHandle;

use crate::ui_components::notice::NoticeQueue;

pub struct UIState {
    // Modal notices
    pub notices: NoticeQueue,

    // Card icons, keyed by service id
    pub assets_dir: PathBuf,
    pub icon_cache: HashMap<u32, TextureHandle>,
    pub icon_failed: HashSet<u32>,

    pub is_shutting_down: bool,
}

impl Default for UIState {
    fn default() -> Self {
        Self::new(PathBuf::from(crate::constants::DEFAULT_ASSETS_DIR))
    }
}

impl UIState {
    pub fn new(assets_dir: PathBuf) -> Self {
        Self {
            notices: NoticeQueue::new(),
            assets_dir,
            icon_cache: HashMap::new(),
            icon_failed: HashSet::new(),
            is_shutting_down: false,
        }
    }

    /// Texture for a service icon, loading it on first use.
    ///
    /// Failures are remembered so a missing file is only reported once.
    pub fn icon_texture(
        &mut self,
        ctx: &egui::Context,
        service_id: u32,
        icon: &str,
    ) -> Option<TextureHandle> {
        if let Some(texture) = self.icon_cache.get(&service_id) {
            return Some(texture.clone());
        }
        if self.icon_failed.contains(&service_id) {
            return None;
        }

        let path = self.assets_dir.join(icon);
        match crate::utils::artwork::load_icon_from_path(&path) {
            Ok(img) => {
                let texture = ctx.load_texture(
                    format!("service-icon-{}", service_id),
                    img,
                    egui::TextureOptions::LINEAR,
                );
                log::debug!("[Icons] Loaded {}", path.display());
                self.icon_cache.insert(service_id, texture.clone());
                Some(texture)
            }
            Err(e) => {
                log::warn!("[Icons] {} - using fallback glyph", e);
                self.icon_failed.insert(service_id);
                None
            }
        }
    }

    /// Drop cached textures (on shutdown)
    pub fn clear_icons(&mut self) {
        self.icon_cache.clear();
        self.icon_failed.clear();
    }
}
