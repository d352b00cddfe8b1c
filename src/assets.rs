//! Image loading with solid-color fallback
//!
//! Missing or unreadable images are never fatal: the loader logs a
//! diagnostic and returns `None`, and callers draw solid-color rectangles
//! (or a placeholder on the end screen) instead. All textures are loaded
//! once at startup and handed to the scenes.

use macroquad::prelude::{load_texture, FilterMode, Texture2D};

use crate::config::{EndScreenConfig, GameConfig};

/// Load a texture, or `None` (with a diagnostic) if the path is empty,
/// missing or unreadable.
pub async fn load_texture_opt(path: &str) -> Option<Texture2D> {
    if path.is_empty() {
        return None;
    }
    match load_texture(path).await {
        Ok(tex) => {
            tex.set_filter(FilterMode::Linear);
            Some(tex)
        }
        Err(e) => {
            eprintln!("failed to load image {}: {}", path, e);
            None
        }
    }
}

/// Every texture the game may draw. Any of them may be absent.
#[derive(Default)]
pub struct Assets {
    pub background: Option<Texture2D>,
    pub player1: Option<Texture2D>,
    pub player2: Option<Texture2D>,
    pub end_image: Option<Texture2D>,
}

impl Assets {
    /// Load all configured images up front
    pub async fn load(cfg: &GameConfig, end_cfg: &EndScreenConfig) -> Self {
        Self {
            background: load_texture_opt(&cfg.background_image).await,
            player1: load_texture_opt(&cfg.player_sprites.player1).await,
            player2: load_texture_opt(&cfg.player_sprites.player2).await,
            end_image: load_texture_opt(&end_cfg.image_path).await,
        }
    }
}
