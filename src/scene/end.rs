//! End screen
//!
//! Modal panel shown after the last level: title, an image slot, the
//! configured message word-wrapped into a text box, and the quit/restart
//! hint. Enter or Escape quits, R restarts from the first level.

use macroquad::prelude::{
    clear_background, draw_rectangle, draw_rectangle_lines, draw_text, draw_texture_ex,
    is_key_pressed, measure_text, screen_height, screen_width, vec2, Color, DrawTextureParams,
    KeyCode, Texture2D, BLACK, WHITE,
};

use super::SceneAction;
use crate::config::{rgb, ColorTable, EndScreenConfig};
use crate::world::Rect;

const TITLE_FONT_SIZE: f32 = 54.0;
const BODY_FONT_SIZE: f32 = 28.0;

pub struct EndScene {
    title: String,
    message: String,
    image: Option<Texture2D>,

    background_color: Color,
    text_color: Color,
    panel_color: Color,
    panel_border: Color,
}

impl EndScene {
    pub fn new(colors: &ColorTable, end_cfg: &EndScreenConfig, image: Option<Texture2D>) -> Self {
        Self {
            title: end_cfg.title.clone(),
            message: end_cfg.message.clone(),
            image,
            background_color: rgb(colors.background),
            text_color: rgb(colors.text),
            panel_color: rgb(colors.panel),
            panel_border: rgb(colors.panel_border),
        }
    }

    /// Map this frame's key presses to a transition
    pub fn update(&mut self) -> SceneAction {
        Self::action_for(
            is_key_pressed(KeyCode::Enter) || is_key_pressed(KeyCode::Escape),
            is_key_pressed(KeyCode::R),
        )
    }

    /// Quit wins over restart if both keys land on the same frame
    pub fn action_for(quit: bool, restart: bool) -> SceneAction {
        if quit {
            SceneAction::Quit
        } else if restart {
            SceneAction::Restart
        } else {
            SceneAction::None
        }
    }

    pub fn draw(&self) {
        clear_background(self.background_color);

        let sw = screen_width();
        let sh = screen_height();

        let panel_w = (sw * 0.78).floor();
        let panel_h = (sh * 0.72).floor();
        let panel = Rect::new(
            ((sw - panel_w) / 2.0).floor(),
            ((sh - panel_h) / 2.0).floor(),
            panel_w,
            panel_h,
        );

        draw_rectangle(panel.x, panel.y, panel.w, panel.h, self.panel_color);
        draw_rectangle_lines(panel.x, panel.y, panel.w, panel.h, 2.0, self.panel_border);

        draw_text(
            &self.title,
            panel.x + 28.0,
            panel.y + 24.0 + TITLE_FONT_SIZE * 0.75,
            TITLE_FONT_SIZE,
            self.text_color,
        );

        let img_slot = Rect::new(
            panel.x + 28.0,
            panel.y + 100.0,
            (panel.w * 0.42).floor(),
            (panel.h * 0.62).floor(),
        );
        draw_rectangle(img_slot.x, img_slot.y, img_slot.w, img_slot.h, BLACK);
        draw_rectangle_lines(img_slot.x, img_slot.y, img_slot.w, img_slot.h, 2.0, self.panel_border);

        match &self.image {
            Some(tex) => {
                let (dest, dx, dy) = fit_into(tex.width(), tex.height(), &img_slot);
                draw_texture_ex(
                    tex,
                    dx,
                    dy,
                    WHITE,
                    DrawTextureParams {
                        dest_size: Some(dest),
                        ..Default::default()
                    },
                );
            }
            None => {
                draw_text(
                    "No image found.",
                    img_slot.x + 16.0,
                    img_slot.y + 16.0 + BODY_FONT_SIZE * 0.75,
                    BODY_FONT_SIZE,
                    self.text_color,
                );
            }
        }

        let text_box = Rect::new(
            img_slot.right() + 24.0,
            img_slot.y,
            panel.right() - (img_slot.right() + 24.0) - 28.0,
            img_slot.h,
        );
        draw_rectangle(text_box.x, text_box.y, text_box.w, text_box.h, BLACK);
        draw_rectangle_lines(text_box.x, text_box.y, text_box.w, text_box.h, 2.0, self.panel_border);

        let inner_w = text_box.w - 24.0;
        let lines = wrap_text(&self.message, inner_w, |s| {
            measure_text(s, None, BODY_FONT_SIZE as u16, 1.0).width
        });
        let line_height = BODY_FONT_SIZE * 1.1;
        let mut y = text_box.y + 12.0 + BODY_FONT_SIZE * 0.75;
        for line in &lines {
            if y > text_box.bottom() - 12.0 {
                break;
            }
            draw_text(line, text_box.x + 12.0, y, BODY_FONT_SIZE, self.text_color);
            y += line_height;
        }

        draw_text(
            "ENTER = Quit   |   R = Restart",
            panel.x + 28.0,
            panel.bottom() - 28.0,
            BODY_FONT_SIZE,
            self.text_color,
        );
    }
}

/// Scale a texture to fit inside a slot, preserving aspect ratio and
/// centering it. Returns the destination size and top-left corner.
fn fit_into(tex_w: f32, tex_h: f32, slot: &Rect) -> (macroquad::math::Vec2, f32, f32) {
    if tex_w <= 0.0 || tex_h <= 0.0 {
        return (vec2(0.0, 0.0), slot.x, slot.y);
    }
    let scale = (slot.w / tex_w).min(slot.h / tex_h);
    let w = (tex_w * scale).max(1.0);
    let h = (tex_h * scale).max(1.0);
    let dx = slot.x + (slot.w - w) / 2.0;
    let dy = slot.y + (slot.h - h) / 2.0;
    (vec2(w, h), dx, dy)
}

/// Greedy word wrap over a caller-supplied measure function.
///
/// Explicit newlines start a new line; a blank paragraph produces an empty
/// line. A single word wider than `max_width` gets its own line rather than
/// being split.
pub fn wrap_text<F>(text: &str, max_width: f32, measure: F) -> Vec<String>
where
    F: Fn(&str) -> f32,
{
    let mut lines = Vec::new();

    for paragraph in text.split('\n') {
        let mut line = String::new();
        for word in paragraph.split_whitespace() {
            let candidate = if line.is_empty() {
                word.to_string()
            } else {
                format!("{} {}", line, word)
            };
            if line.is_empty() || measure(&candidate) <= max_width {
                line = candidate;
            } else {
                lines.push(line);
                line = word.to_string();
            }
        }
        lines.push(line);
    }

    lines
}
