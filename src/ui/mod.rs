mod button;

pub use button::Button;

use macroquad::prelude::{screen_height, screen_width};

pub const PANEL_WIDTH: f32 = 180.0;
pub const BUTTON_HEIGHT: f32 = 40.0;

/// Tile counts the host cycles through
pub const TILE_OPTIONS: &[usize] = &[50, 100, 150, 250];

/// Fastest and slowest tick period offered by the speed buttons
pub const MIN_SPEED_MS: u64 = 10;
pub const MAX_SPEED_MS: u64 = 1000;

/// Get the X position where the panel starts (right side)
pub fn panel_x() -> f32 {
    screen_width() - PANEL_WIDTH
}

/// Area left of the panel available to the board
pub fn board_area() -> (f32, f32) {
    (screen_width() - PANEL_WIDTH, screen_height())
}

/// Panel buttons, in the order `input::process_button_clicks` expects
pub fn create_buttons() -> Vec<Button> {
    let px = panel_x();
    ["Start", "Pause/Resume", "Reset", "Faster", "Slower", "Tiles"]
        .iter()
        .enumerate()
        .map(|(i, label)| {
            Button::new(px, 20.0 + i as f32 * 50.0, PANEL_WIDTH, BUTTON_HEIGHT, *label)
        })
        .collect()
}

/// Next entry of `TILE_OPTIONS` after `current`, wrapping around
pub fn next_tile_option(current: usize) -> usize {
    TILE_OPTIONS
        .iter()
        .copied()
        .find(|&n| n > current)
        .unwrap_or(TILE_OPTIONS[0])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tile_options_cycle() {
        assert_eq!(next_tile_option(50), 100);
        assert_eq!(next_tile_option(120), 150);
        assert_eq!(next_tile_option(250), 50);
        assert_eq!(next_tile_option(1000), 50);
    }
}
