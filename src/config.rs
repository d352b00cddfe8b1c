//! Game and end-screen configuration
//!
//! Both config files are RON. Every field the game logic depends on is
//! required; a missing field fails the load with an error naming the field,
//! and startup aborts. Only asset paths are optional since missing art
//! degrades to solid-color drawing instead of failing.

use std::fs;
use std::path::Path;

use macroquad::color::Color;
use serde::Deserialize;

/// Error type for config loading
#[derive(Debug)]
pub enum ConfigError {
    IoError(std::io::Error),
    ParseError(ron::error::SpannedError),
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::IoError(e)
    }
}

impl From<ron::error::SpannedError> for ConfigError {
    fn from(e: ron::error::SpannedError) -> Self {
        ConfigError::ParseError(e)
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::IoError(e) => write!(f, "IO error: {}", e),
            ConfigError::ParseError(e) => write!(f, "Parse error: {}", e),
        }
    }
}

/// Convert an `[r, g, b]` config entry to a macroquad color
pub fn rgb(c: [u8; 3]) -> Color {
    Color::from_rgba(c[0], c[1], c[2], 255)
}

/// Color table shared by the level and end scenes
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct ColorTable {
    pub background: [u8; 3],
    pub platform: [u8; 3],
    pub goal: [u8; 3],
    pub text: [u8; 3],
    pub player1: [u8; 3],
    pub player2: [u8; 3],
    pub panel: [u8; 3],
    pub panel_border: [u8; 3],
}

/// Per-player tuning, identical for both players within a run
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct PlayerConfig {
    pub width: f32,
    pub height: f32,
    pub move_speed: f32,
    pub jump_speed: f32,
}

/// Optional sprite paths for the two players
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PlayerSprites {
    pub player1: String,
    pub player2: String,
}

/// Top-level game configuration
#[derive(Debug, Clone, Deserialize)]
pub struct GameConfig {
    pub screen_width: u32,
    pub screen_height: u32,
    pub fps: u32,
    pub window_title: String,
    /// Ordered level file paths; the sequence the state machine walks
    pub levels: Vec<String>,
    pub colors: ColorTable,
    pub player: PlayerConfig,
    pub gravity: f32,
    pub max_fall_speed: f32,
    #[serde(default)]
    pub background_image: String,
    #[serde(default)]
    pub player_sprites: PlayerSprites,
}

/// End-screen configuration
#[derive(Debug, Clone, Deserialize)]
pub struct EndScreenConfig {
    pub title: String,
    pub message: String,
    #[serde(default)]
    pub image_path: String,
}

/// Load a RON config file into any deserializable type
pub fn load_config<T, P>(path: P) -> Result<T, ConfigError>
where
    T: serde::de::DeserializeOwned,
    P: AsRef<Path>,
{
    let contents = fs::read_to_string(path)?;
    Ok(ron::from_str(&contents)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    const GAME_RON: &str = r#"(
        screen_width: 960,
        screen_height: 540,
        fps: 60,
        window_title: "Duet",
        levels: ["assets/levels/level1.ron"],
        colors: (
            background: (18, 22, 34),
            platform: (90, 102, 130),
            goal: (70, 190, 110),
            text: (235, 238, 245),
            player1: (235, 110, 100),
            player2: (100, 160, 235),
            panel: (30, 36, 54),
            panel_border: (120, 130, 160),
        ),
        player: (width: 28, height: 40, move_speed: 260, jump_speed: 640),
        gravity: 1500,
        max_fall_speed: 900,
    )"#;

    #[test]
    fn test_parse_game_config() {
        let cfg: GameConfig = ron::from_str(GAME_RON).unwrap();
        assert_eq!(cfg.screen_width, 960);
        assert_eq!(cfg.fps, 60);
        assert_eq!(cfg.levels.len(), 1);
        assert_eq!(cfg.player.move_speed, 260.0);
        // Optional asset fields default to empty
        assert!(cfg.background_image.is_empty());
        assert!(cfg.player_sprites.player1.is_empty());
    }

    #[test]
    fn test_missing_required_field_names_it() {
        let missing = GAME_RON.replace("gravity: 1500,\n", "");
        let err = ron::from_str::<GameConfig>(&missing).unwrap_err();
        assert!(err.to_string().contains("gravity"), "error was: {}", err);
    }

    #[test]
    fn test_parse_end_screen_config() {
        let cfg: EndScreenConfig = ron::from_str(
            r#"(title: "You made it!", message: "Press R to go again.")"#,
        )
        .unwrap();
        assert_eq!(cfg.title, "You made it!");
        assert!(cfg.image_path.is_empty());
    }

    #[test]
    fn test_bundled_configs_parse() {
        let cfg: GameConfig = load_config("assets/config/game_config.ron").unwrap();
        assert!(!cfg.levels.is_empty());
        let end: EndScreenConfig = load_config("assets/config/end_screen.ron").unwrap();
        assert!(!end.title.is_empty());
    }

    #[test]
    fn test_bundled_levels_parse() {
        let cfg: GameConfig = load_config("assets/config/game_config.ron").unwrap();
        for path in &cfg.levels {
            let level = crate::world::load_level(path)
                .unwrap_or_else(|e| panic!("{}: {}", path, e));
            assert!(level.platforms.len() >= 4, "{}: walls missing", path);
        }
    }
}
