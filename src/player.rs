//! Player entity
//!
//! Each player owns its rect, velocity, grounded flag and facing. Input is
//! sampled into a plain snapshot so the physics path never touches the
//! window layer. Update order per frame: input -> gravity -> collision
//! resolver over the full platform list (boundary walls included).

use macroquad::prelude::{
    draw_rectangle, draw_texture_ex, is_key_down, vec2, Color, DrawTextureParams, KeyCode,
    Texture2D, Vec2, WHITE,
};

use crate::config::PlayerConfig;
use crate::world::{resolve, Rect};

/// Fixed physical key bindings for one player
#[derive(Debug, Clone, Copy)]
pub struct Controls {
    pub jump: KeyCode,
    pub left: KeyCode,
    pub right: KeyCode,
}

impl Controls {
    /// Sample the keyboard into a snapshot for this frame
    pub fn sample(&self) -> PlayerInput {
        PlayerInput {
            left: is_key_down(self.left),
            right: is_key_down(self.right),
            jump: is_key_down(self.jump),
        }
    }
}

/// One frame's worth of input for one player
#[derive(Debug, Clone, Copy, Default)]
pub struct PlayerInput {
    pub left: bool,
    pub right: bool,
    pub jump: bool,
}

/// A rectangle avatar under one player's control
pub struct Player {
    pub rect: Rect,
    pub vel: Vec2,
    pub grounded: bool,
    pub facing_right: bool,

    move_speed: f32,
    jump_speed: f32,
    gravity: f32,
    max_fall_speed: f32,

    color: Color,
    sprite: Option<Texture2D>,
}

impl Player {
    /// Create a fresh player at a spawn point with zero velocity.
    ///
    /// Spawn coordinates are truncated onto the pixel grid, matching the
    /// grid-aligned displacement in the collision resolver.
    pub fn new(
        spawn: Vec2,
        cfg: &PlayerConfig,
        gravity: f32,
        max_fall_speed: f32,
        color: Color,
        sprite: Option<Texture2D>,
    ) -> Self {
        Self {
            rect: Rect::new(spawn.x.trunc(), spawn.y.trunc(), cfg.width, cfg.height),
            vel: vec2(0.0, 0.0),
            grounded: false,
            facing_right: true,
            move_speed: cfg.move_speed,
            jump_speed: cfg.jump_speed,
            gravity,
            max_fall_speed,
            color,
            sprite,
        }
    }

    /// Turn this frame's input into horizontal velocity and a jump impulse.
    ///
    /// Right is checked after left, so holding both moves right. Facing only
    /// changes while a horizontal key is held, so it persists through air
    /// time with no input. Jumping requires the grounded flag and clears it,
    /// so a second jump cannot trigger until the next landing.
    pub fn handle_input(&mut self, input: PlayerInput) {
        let mut vx = 0.0;

        if input.left {
            vx = -self.move_speed;
            self.facing_right = false;
        }
        if input.right {
            vx = self.move_speed;
            self.facing_right = true;
        }
        self.vel.x = vx;

        if input.jump && self.grounded {
            self.vel.y = -self.jump_speed;
            self.facing_right = true;
            self.grounded = false;
        }
    }

    /// Integrate gravity and resolve collisions for one step.
    ///
    /// `platforms` is the level's full obstacle list; the grounded flag is
    /// recomputed from scratch every step, never carried over.
    pub fn update(&mut self, dt: f32, platforms: &[Rect]) {
        self.vel.y += self.gravity * dt;
        if self.vel.y > self.max_fall_speed {
            self.vel.y = self.max_fall_speed;
        }

        let result = resolve(self.rect, self.vel, platforms, dt);
        self.rect = result.rect;
        self.vel = result.velocity;
        self.grounded = result.grounded;
    }

    /// Draw the sprite flipped by facing, or a solid rectangle if the
    /// sprite failed to load.
    pub fn draw(&self) {
        match &self.sprite {
            Some(tex) => draw_texture_ex(
                tex,
                self.rect.x,
                self.rect.y,
                WHITE,
                DrawTextureParams {
                    dest_size: Some(vec2(self.rect.w, self.rect.h)),
                    flip_x: !self.facing_right,
                    ..Default::default()
                },
            ),
            None => draw_rectangle(self.rect.x, self.rect.y, self.rect.w, self.rect.h, self.color),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use macroquad::color::RED;

    fn test_player() -> Player {
        let cfg = PlayerConfig {
            width: 20.0,
            height: 20.0,
            move_speed: 200.0,
            jump_speed: 500.0,
        };
        Player::new(vec2(100.0, 100.0), &cfg, 1500.0, 900.0, RED, None)
    }

    fn held(left: bool, right: bool, jump: bool) -> PlayerInput {
        PlayerInput { left, right, jump }
    }

    #[test]
    fn test_horizontal_input() {
        let mut p = test_player();

        p.handle_input(held(true, false, false));
        assert_eq!(p.vel.x, -200.0);
        assert!(!p.facing_right);

        p.handle_input(held(false, true, false));
        assert_eq!(p.vel.x, 200.0);
        assert!(p.facing_right);

        p.handle_input(held(false, false, false));
        assert_eq!(p.vel.x, 0.0);
    }

    #[test]
    fn test_both_held_right_wins() {
        let mut p = test_player();
        p.handle_input(held(true, true, false));
        assert_eq!(p.vel.x, 200.0);
        assert!(p.facing_right);
    }

    #[test]
    fn test_facing_persists_without_input() {
        let mut p = test_player();
        p.handle_input(held(true, false, false));
        assert!(!p.facing_right);
        p.handle_input(held(false, false, false));
        assert!(!p.facing_right);
    }

    #[test]
    fn test_jump_only_when_grounded() {
        let mut p = test_player();

        // Airborne: jump has no effect on vertical velocity
        p.grounded = false;
        p.vel.y = 50.0;
        p.handle_input(held(false, false, true));
        assert_eq!(p.vel.y, 50.0);

        // Grounded: jump applies the impulse and clears grounded
        p.grounded = true;
        p.facing_right = false;
        p.handle_input(held(false, false, true));
        assert_eq!(p.vel.y, -500.0);
        assert!(!p.grounded);
        assert!(p.facing_right);
    }

    #[test]
    fn test_gravity_clamps_to_max_fall_speed() {
        let mut p = test_player();
        for _ in 0..240 {
            p.update(1.0 / 60.0, &[]);
            assert!(p.vel.y <= 900.0);
        }
        assert_eq!(p.vel.y, 900.0);
    }

    #[test]
    fn test_update_lands_on_platform() {
        let mut p = test_player();
        let floor = Rect::new(0.0, 200.0, 400.0, 24.0);
        let platforms = [floor];
        let mut landed = false;
        for _ in 0..120 {
            p.update(1.0 / 60.0, &platforms);
            landed = landed || p.grounded;
        }
        assert!(landed);
        assert_eq!(p.rect.bottom(), floor.y);
    }

    #[test]
    fn test_grounded_not_sticky() {
        let mut p = test_player();
        let floor = Rect::new(0.0, 200.0, 400.0, 24.0);
        while !p.grounded {
            p.update(1.0 / 60.0, &[floor]);
        }
        // Remove the floor: the very next step recomputes grounded
        p.update(1.0 / 60.0, &[]);
        assert!(!p.grounded);
    }

    #[test]
    fn test_walls_contain_player() {
        let wb = Rect::new(0.0, 0.0, 400.0, 300.0);
        let platforms: Vec<Rect> = crate::world::boundary_walls(wb).to_vec();

        let mut p = test_player();
        // Hold right against the wall for several seconds of frames
        for _ in 0..600 {
            p.handle_input(held(false, true, false));
            p.update(1.0 / 60.0, &platforms);
            assert!(p.rect.x >= wb.x);
            assert!(p.rect.right() <= wb.right());
            assert!(p.rect.y >= wb.y);
            assert!(p.rect.bottom() <= wb.bottom());
        }
        assert_eq!(p.rect.right(), wb.right());
        assert_eq!(p.rect.bottom(), wb.bottom());
    }
}
