use macroquad::prelude::*;

use crate::application::GameOfLife;
use crate::domain::{Result, presets};
use crate::rendering::Canvas;
use crate::ui::{Button, MAX_SPEED_MS, MIN_SPEED_MS, next_tile_option};

/// Host-level requests translated from raw input
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Command {
    Start,
    TogglePause,
    Reset,
    Faster,
    Slower,
    NextTileCount,
    PlacePattern(usize),
    Click(f32, f32),
}

/// Collect commands from keyboard and mouse for this frame
pub fn poll_commands(buttons: &[Button], mouse_pos: (f32, f32)) -> Vec<Command> {
    let mut commands = process_button_clicks(buttons, mouse_pos);

    let keys = [
        (KeyCode::Enter, Command::Start),
        (KeyCode::Space, Command::TogglePause),
        (KeyCode::R, Command::Reset),
        (KeyCode::Up, Command::Faster),
        (KeyCode::Down, Command::Slower),
        (KeyCode::T, Command::NextTileCount),
        (KeyCode::Key1, Command::PlacePattern(0)),
        (KeyCode::Key2, Command::PlacePattern(1)),
        (KeyCode::Key3, Command::PlacePattern(2)),
        (KeyCode::Key4, Command::PlacePattern(3)),
        (KeyCode::Key5, Command::PlacePattern(4)),
    ];
    commands.extend(
        keys.iter()
            .filter(|(key, _)| is_key_pressed(*key))
            .map(|(_, command)| *command),
    );

    let on_button = buttons.iter().any(|b| b.is_hovered(mouse_pos));
    if is_mouse_button_pressed(MouseButton::Left) && !on_button {
        commands.push(Command::Click(mouse_pos.0, mouse_pos.1));
    }
    commands
}

fn process_button_clicks(buttons: &[Button], mouse_pos: (f32, f32)) -> Vec<Command> {
    const BUTTON_COMMANDS: [Command; 6] = [
        Command::Start,
        Command::TogglePause,
        Command::Reset,
        Command::Faster,
        Command::Slower,
        Command::NextTileCount,
    ];
    buttons
        .iter()
        .zip(BUTTON_COMMANDS)
        .filter(|(btn, _)| btn.is_clicked(mouse_pos))
        .map(|(_, command)| command)
        .collect()
}

/// Tick period after a speed step, kept within the offered range
pub fn stepped_speed(current_ms: u64, faster: bool) -> u64 {
    let next = if faster { current_ms / 2 } else { current_ms.saturating_mul(2) };
    next.clamp(MIN_SPEED_MS, MAX_SPEED_MS)
}

/// Apply one command to the game
pub fn apply(game: &mut GameOfLife, command: Command, canvas: &mut Canvas) -> Result<()> {
    match command {
        Command::Start => game.start(),
        Command::TogglePause => game.toggle_pause(),
        Command::Reset => game.reset(canvas)?,
        Command::Faster | Command::Slower => {
            let faster = command == Command::Faster;
            let speed = stepped_speed(game.config().speed_in_milliseconds, faster);
            game.change_speed(speed)?;
        }
        Command::NextTileCount => {
            let tiles = next_tile_option(game.config().number_of_tiles);
            let mut resized = Canvas::new(tiles);
            game.set_number_of_tiles(tiles, &mut resized)?;
            *canvas = resized;
        }
        Command::PlacePattern(index) => {
            if let Some(pattern) = presets::all_patterns().get(index) {
                game.place_pattern(pattern, canvas);
            }
        }
        Command::Click(x, y) => {
            game.click(x, y, canvas)?;
        }
    }
    Ok(())
}
