//! Duet: a two-player cooperative platformer
//!
//! Two rectangle avatars, one keyboard. Gravity and axis-aligned platform
//! collision apply to both; a level is cleared when both players overlap
//! the goal zone in the same frame. Levels and configuration are RON files
//! under assets/.

mod app;
mod assets;
mod config;
mod player;
mod scene;
mod world;

use macroquad::prelude::*;

use app::Game;
use assets::Assets;
use config::{load_config, EndScreenConfig, GameConfig};

const GAME_CONFIG_PATH: &str = "assets/config/game_config.ron";
const END_SCREEN_PATH: &str = "assets/config/end_screen.ron";

fn window_conf() -> Conf {
    // The window is created before async main runs, so read the config
    // here; main reloads it and reports errors properly.
    match load_config::<GameConfig, _>(GAME_CONFIG_PATH) {
        Ok(cfg) => Conf {
            window_title: cfg.window_title,
            window_width: cfg.screen_width as i32,
            window_height: cfg.screen_height as i32,
            window_resizable: false,
            high_dpi: true,
            ..Default::default()
        },
        Err(_) => Conf {
            window_title: "Duet".to_string(),
            ..Default::default()
        },
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    let cfg: GameConfig = match load_config(GAME_CONFIG_PATH) {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("failed to load {}: {}", GAME_CONFIG_PATH, e);
            std::process::exit(1);
        }
    };
    let end_cfg: EndScreenConfig = match load_config(END_SCREEN_PATH) {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("failed to load {}: {}", END_SCREEN_PATH, e);
            std::process::exit(1);
        }
    };

    let target_frame_time = if cfg.fps > 0 {
        Some(1.0 / cfg.fps as f64)
    } else {
        None
    };

    let assets = Assets::load(&cfg, &end_cfg).await;

    let mut game = match Game::new(cfg, end_cfg, assets) {
        Ok(game) => game,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    };

    while game.running() {
        let frame_start = get_time();
        let dt = get_frame_time();

        game.frame(dt);
        game.draw();

        // Hold the loop to the configured frame rate: sleep for the bulk of
        // the remainder, then spin for precision.
        if let Some(target) = target_frame_time {
            #[cfg(not(target_arch = "wasm32"))]
            {
                let spin_margin = 0.002;
                while get_time() - frame_start + spin_margin < target {
                    std::thread::sleep(std::time::Duration::from_millis(1));
                }
                while get_time() - frame_start < target {
                    std::hint::spin_loop();
                }
            }
            #[cfg(target_arch = "wasm32")]
            {
                // Browser frame pacing applies; nothing to do.
                let _ = (frame_start, target);
            }
        }

        next_frame().await;
    }
}
