//! Scenes and scene transitions
//!
//! The game is always in exactly one scene: a level in progress or the end
//! screen. Scenes never swap themselves; their update reports a
//! `SceneAction` and the `Game` controller replaces the active scene
//! wholesale.

mod end;
mod level;

pub use end::{wrap_text, EndScene};
pub use level::LevelScene;

/// Transition request reported by a scene's update
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SceneAction {
    /// Keep running the current scene
    None,
    /// Both players reached the goal; go to the next level or the end screen
    AdvanceLevel,
    /// Restart from the first level
    Restart,
    /// Terminate the application
    Quit,
}

/// The active scene, exactly one at a time
pub enum Scene {
    Level(LevelScene),
    End(EndScene),
}

impl Scene {
    /// Sample input and advance the scene by one step
    pub fn update(&mut self, dt: f32) -> SceneAction {
        match self {
            Scene::Level(s) => s.update(dt),
            Scene::End(s) => s.update(),
        }
    }

    /// Draw the scene for this frame
    pub fn draw(&self) {
        match self {
            Scene::Level(s) => s.draw(),
            Scene::End(s) => s.draw(),
        }
    }
}
