//! Top-level game controller
//!
//! Owns the configuration, the pre-loaded level sequence, the current level
//! index and the active scene. All level files are parsed at startup so a
//! broken file aborts before the first frame and scene transitions can
//! never fail mid-run. Nothing about progress survives the process.

use macroquad::prelude::KeyCode;

use crate::assets::Assets;
use crate::config::{EndScreenConfig, GameConfig};
use crate::player::Controls;
use crate::scene::{EndScene, LevelScene, Scene, SceneAction};
use crate::world::{load_level, LevelData, LevelError};

/// Player 1: WASD-style movement
pub const P1_CONTROLS: Controls = Controls {
    jump: KeyCode::W,
    left: KeyCode::A,
    right: KeyCode::D,
};

/// Player 2: IJKL-style movement on the right hand
pub const P2_CONTROLS: Controls = Controls {
    jump: KeyCode::I,
    left: KeyCode::J,
    right: KeyCode::L,
};

pub struct Game {
    cfg: GameConfig,
    end_cfg: EndScreenConfig,
    assets: Assets,

    levels: Vec<LevelData>,
    level_index: usize,
    scene: Scene,
    running: bool,
}

impl Game {
    /// Load every level named in the config and start on the first one.
    ///
    /// Any unreadable or malformed level file is a fatal startup error;
    /// the message names the file.
    pub fn new(cfg: GameConfig, end_cfg: EndScreenConfig, assets: Assets) -> Result<Self, String> {
        if cfg.levels.is_empty() {
            return Err("config lists no levels".to_string());
        }

        let levels = cfg
            .levels
            .iter()
            .map(|path| {
                load_level(path).map_err(|e: LevelError| format!("failed to load {}: {}", path, e))
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self::from_parts(cfg, end_cfg, assets, levels))
    }

    /// Build a game from already-loaded levels (also used by tests)
    pub fn from_parts(
        cfg: GameConfig,
        end_cfg: EndScreenConfig,
        assets: Assets,
        levels: Vec<LevelData>,
    ) -> Self {
        assert!(!levels.is_empty());
        let scene = Scene::Level(LevelScene::new(
            &levels[0],
            &cfg,
            &assets,
            P1_CONTROLS,
            P2_CONTROLS,
        ));
        Self {
            cfg,
            end_cfg,
            assets,
            levels,
            level_index: 0,
            scene,
            running: true,
        }
    }

    pub fn running(&self) -> bool {
        self.running
    }

    pub fn level_index(&self) -> usize {
        self.level_index
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    #[cfg(test)]
    pub(crate) fn scene_mut(&mut self) -> &mut Scene {
        &mut self.scene
    }

    /// Advance the active scene by one step and apply any transition
    pub fn frame(&mut self, dt: f32) {
        let action = self.scene.update(dt);
        self.apply(action);
    }

    pub fn draw(&self) {
        self.scene.draw();
    }

    /// Perform a scene transition. The old scene is dropped wholesale;
    /// level scenes are rebuilt from the immutable level data.
    pub fn apply(&mut self, action: SceneAction) {
        match action {
            SceneAction::None => {}
            SceneAction::AdvanceLevel => {
                self.level_index += 1;
                if self.level_index < self.levels.len() {
                    self.scene = self.level_scene(self.level_index);
                } else {
                    self.scene = Scene::End(EndScene::new(
                        &self.cfg.colors,
                        &self.end_cfg,
                        self.assets.end_image.clone(),
                    ));
                }
            }
            SceneAction::Restart => {
                self.level_index = 0;
                self.scene = self.level_scene(0);
            }
            SceneAction::Quit => {
                self.running = false;
            }
        }
    }

    fn level_scene(&self, index: usize) -> Scene {
        Scene::Level(LevelScene::new(
            &self.levels[index],
            &self.cfg,
            &self.assets,
            P1_CONTROLS,
            P2_CONTROLS,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::world::load_level_from_str;

    fn test_config(level_count: usize) -> GameConfig {
        let mut cfg: GameConfig = ron::from_str(
            r#"(
                screen_width: 960,
                screen_height: 540,
                fps: 60,
                window_title: "test",
                levels: [],
                colors: (
                    background: (0, 0, 0),
                    platform: (0, 0, 0),
                    goal: (0, 0, 0),
                    text: (0, 0, 0),
                    player1: (0, 0, 0),
                    player2: (0, 0, 0),
                    panel: (0, 0, 0),
                    panel_border: (0, 0, 0),
                ),
                player: (width: 20, height: 20, move_speed: 200, jump_speed: 500),
                gravity: 1500,
                max_fall_speed: 900,
            )"#,
        )
        .unwrap();
        cfg.levels = (0..level_count).map(|i| format!("level{}.ron", i)).collect();
        cfg
    }

    fn test_end_config() -> EndScreenConfig {
        ron::from_str(r#"(title: "done", message: "bye")"#).unwrap()
    }

    fn test_level() -> LevelData {
        load_level_from_str(
            r#"(
                world_bounds: (x: 0, y: 0, w: 960, h: 540),
                platforms: [],
                goal: (x: 100, y: 100, w: 50, h: 50),
                spawns: (player1: (x: 110, y: 110), player2: (x: 120, y: 110)),
            )"#,
        )
        .unwrap()
    }

    fn test_game(level_count: usize) -> Game {
        let levels = (0..level_count).map(|_| test_level()).collect();
        Game::from_parts(test_config(level_count), test_end_config(), Assets::default(), levels)
    }

    #[test]
    fn test_advance_moves_to_next_level() {
        let mut game = test_game(3);
        assert_eq!(game.level_index(), 0);

        game.apply(SceneAction::AdvanceLevel);
        assert_eq!(game.level_index(), 1);
        assert!(matches!(game.scene(), Scene::Level(_)));
    }

    #[test]
    fn test_advance_past_last_level_shows_end_screen() {
        let mut game = test_game(2);
        game.apply(SceneAction::AdvanceLevel);
        game.apply(SceneAction::AdvanceLevel);
        assert!(matches!(game.scene(), Scene::End(_)));
        assert!(game.running());
    }

    #[test]
    fn test_restart_resets_to_first_level_with_fresh_players() {
        let mut game = test_game(2);
        game.apply(SceneAction::AdvanceLevel);
        game.apply(SceneAction::AdvanceLevel);
        assert!(matches!(game.scene(), Scene::End(_)));

        game.apply(SceneAction::Restart);
        assert_eq!(game.level_index(), 0);
        match game.scene() {
            Scene::Level(scene) => {
                let (p1, p2) = scene.players();
                assert_eq!(p1.rect.x, 110.0);
                assert_eq!(p2.rect.x, 120.0);
                assert_eq!(p1.vel, macroquad::math::vec2(0.0, 0.0));
                assert_eq!(p2.vel, macroquad::math::vec2(0.0, 0.0));
            }
            Scene::End(_) => panic!("expected a level scene after restart"),
        }
    }

    #[test]
    fn test_quit_is_absorbing() {
        let mut game = test_game(1);
        game.apply(SceneAction::Quit);
        assert!(!game.running());
    }

    #[test]
    fn test_advancing_into_goal_spawns_chains_levels() {
        // Both spawns sit inside the goal, so every step with dt = 0 wins
        // immediately and the game walks the whole sequence to the end.
        let mut game = test_game(3);
        for expected in [1, 2] {
            let action = match game.scene_mut() {
                Scene::Level(s) => s.step(0.0, Default::default(), Default::default()),
                Scene::End(_) => panic!("expected a level scene"),
            };
            assert_eq!(action, SceneAction::AdvanceLevel);
            game.apply(action);
            assert_eq!(game.level_index(), expected);
        }
        let action = match game.scene_mut() {
            Scene::Level(s) => s.step(0.0, Default::default(), Default::default()),
            Scene::End(_) => panic!("expected a level scene"),
        };
        game.apply(action);
        assert!(matches!(game.scene(), Scene::End(_)));
    }
}
