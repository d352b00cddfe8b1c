//! Level-in-progress scene
//!
//! Owns the two players and the static geometry for one level. Both players
//! step before the goal check, so a win requires both rects to overlap the
//! goal within the same update.

use macroquad::prelude::{
    clear_background, draw_rectangle, draw_text, draw_texture_ex, screen_height, screen_width,
    vec2, Color, DrawTextureParams,
};

use super::SceneAction;
use crate::assets::Assets;
use crate::config::{rgb, GameConfig};
use crate::player::{Controls, Player, PlayerInput};
use crate::world::LevelData;

const HUD_TEXT: &str =
    "P1: W jump, A/D move   |   P2: I jump, J/L move   |   Both reach the goal to win";

pub struct LevelScene {
    level: LevelData,
    player1: Player,
    player2: Player,
    controls1: Controls,
    controls2: Controls,

    background: Option<macroquad::prelude::Texture2D>,
    background_color: Color,
    platform_color: Color,
    goal_color: Color,
    text_color: Color,
}

impl LevelScene {
    /// Build a fresh scene for one level: new players at the spawn points
    /// with zero velocity, nothing carried over from a previous level.
    pub fn new(
        level: &LevelData,
        cfg: &GameConfig,
        assets: &Assets,
        controls1: Controls,
        controls2: Controls,
    ) -> Self {
        let player1 = Player::new(
            level.spawn1,
            &cfg.player,
            cfg.gravity,
            cfg.max_fall_speed,
            rgb(cfg.colors.player1),
            assets.player1.clone(),
        );
        let player2 = Player::new(
            level.spawn2,
            &cfg.player,
            cfg.gravity,
            cfg.max_fall_speed,
            rgb(cfg.colors.player2),
            assets.player2.clone(),
        );

        Self {
            level: level.clone(),
            player1,
            player2,
            controls1,
            controls2,
            background: assets.background.clone(),
            background_color: rgb(cfg.colors.background),
            platform_color: rgb(cfg.colors.platform),
            goal_color: rgb(cfg.colors.goal),
            text_color: rgb(cfg.colors.text),
        }
    }

    /// Sample the keyboard and advance one physics step
    pub fn update(&mut self, dt: f32) -> SceneAction {
        let in1 = self.controls1.sample();
        let in2 = self.controls2.sample();
        self.step(dt, in1, in2)
    }

    /// Advance one physics step with explicit input snapshots.
    ///
    /// The goal check runs after both players have updated; there is no
    /// memory of overlaps from earlier frames.
    pub fn step(&mut self, dt: f32, in1: PlayerInput, in2: PlayerInput) -> SceneAction {
        self.player1.handle_input(in1);
        self.player2.handle_input(in2);

        self.player1.update(dt, &self.level.platforms);
        self.player2.update(dt, &self.level.platforms);

        let p1_in_goal = self.player1.rect.overlaps(&self.level.goal);
        let p2_in_goal = self.player2.rect.overlaps(&self.level.goal);

        if p1_in_goal && p2_in_goal {
            SceneAction::AdvanceLevel
        } else {
            SceneAction::None
        }
    }

    pub fn draw(&self) {
        match &self.background {
            Some(tex) => draw_texture_ex(
                tex,
                0.0,
                0.0,
                macroquad::prelude::WHITE,
                DrawTextureParams {
                    dest_size: Some(vec2(screen_width(), screen_height())),
                    ..Default::default()
                },
            ),
            None => clear_background(self.background_color),
        }

        // Boundary walls sit outside the world bounds, so drawing the full
        // platform list only shows the in-level geometry.
        for p in &self.level.platforms {
            draw_rectangle(p.x, p.y, p.w, p.h, self.platform_color);
        }

        let g = &self.level.goal;
        draw_rectangle(g.x, g.y, g.w, g.h, self.goal_color);

        self.player1.draw();
        self.player2.draw();

        draw_text(HUD_TEXT, 12.0, 24.0, 24.0, self.text_color);
    }

    /// Read-only view of the two player rects (for tests and overlays)
    pub fn players(&self) -> (&Player, &Player) {
        (&self.player1, &self.player2)
    }

    #[cfg(test)]
    pub(crate) fn players_mut(&mut self) -> (&mut Player, &mut Player) {
        (&mut self.player1, &mut self.player2)
    }
}
