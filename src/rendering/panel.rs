use macroquad::prelude::*;

use crate::application::GameOfLife;
use crate::ui::{Button, PANEL_WIDTH, panel_x};

const ACCENT: Color = Color::new(0.0, 1.0, 0.59, 1.0);
const MUTED: Color = Color::new(0.7, 0.7, 0.7, 1.0);

/// Draw the control panel: buttons, status and key help
pub fn draw_controls(
    game: &GameOfLife,
    generation: u64,
    buttons: &[Button],
    mouse_pos: (f32, f32),
) {
    let px = panel_x();
    draw_rectangle(px, 0.0, PANEL_WIDTH, screen_height(), Color::from_rgba(30, 30, 30, 255));

    buttons.iter().for_each(|btn| btn.draw(mouse_pos));

    let config = game.config();
    let status = if game.is_stopped() {
        "Stopped"
    } else if game.is_running() {
        "Running"
    } else {
        "Paused"
    };
    let labels = [
        ("Generation:".to_owned(), 340.0, 16.0, WHITE),
        (generation.to_string(), 360.0, 20.0, ACCENT),
        ("Status:".to_owned(), 395.0, 16.0, WHITE),
        (status.to_owned(), 415.0, 16.0, MUTED),
        (format!("Tick: {} ms", config.speed_in_milliseconds), 445.0, 14.0, MUTED),
        (
            format!("Board: {0}x{0}", config.number_of_tiles),
            462.0,
            14.0,
            MUTED,
        ),
        (format!("Alive: {}", game.grid().population()), 479.0, 14.0, MUTED),
    ];
    for (text, y, size, color) in &labels {
        draw_text(text, px, *y, *size, *color);
    }

    let help = [
        "Click: toggle cell",
        "Enter: start",
        "Space: pause/resume",
        "R: reset",
        "Up/Down: speed",
        "T: tiles (gen 0)",
        "1-5: patterns",
    ];
    for (i, line) in help.iter().enumerate() {
        draw_text(line, px, 520.0 + i as f32 * 14.0, 12.0, GRAY);
    }
}
