use std::rc::Rc;
use std::time::Duration;

use life_core::{
    Configuration, GameOfLife,
    input,
    rendering::{self, Canvas},
    ui,
};
use macroquad::prelude::*;

fn window_conf() -> Conf {
    Conf {
        window_title: "Conway's Game of Life".to_owned(),
        window_width: 1000,
        window_height: 800,
        window_resizable: true,
        ..Default::default()
    }
}

/// Configuration from the JSON file named by the first argument, or defaults
fn load_configuration() -> life_core::Result<Configuration> {
    let Some(path) = std::env::args().nth(1) else {
        return Ok(Configuration::default());
    };
    let text = std::fs::read_to_string(&path).map_err(|e| {
        life_core::LifeError::InvalidConfiguration(format!("cannot read {path}: {e}"))
    })?;
    log::info!("Loaded configuration from {path}");
    Configuration::from_json(&text)
}

#[macroquad::main(window_conf)]
async fn main() {
    env_logger::init();

    let config = match load_configuration() {
        Ok(config) => config,
        Err(e) => {
            log::error!("{e}");
            return;
        }
    };
    let mut canvas = Canvas::new(config.number_of_tiles);
    let mut game = match GameOfLife::create(config) {
        Ok(game) => game,
        Err(e) => {
            log::error!("{e}");
            return;
        }
    };

    let generation = Rc::new(std::cell::Cell::new(0u64));
    let display = Rc::clone(&generation);
    game.subscribe_counter(move |counter| display.set(counter));

    let mut board_area = (0.0, 0.0);

    loop {
        if is_key_pressed(KeyCode::Escape) {
            break;
        }

        let area = ui::board_area();
        if area != board_area {
            board_area = area;
            game.resize((0.0, 0.0), area, &mut canvas);
        }

        let mouse_pos = mouse_position();
        let buttons = ui::create_buttons();
        for command in input::poll_commands(&buttons, mouse_pos) {
            if let Err(e) = input::apply(&mut game, command, &mut canvas) {
                log::warn!("{command:?} rejected: {e}");
            }
        }

        game.advance(Duration::from_secs_f32(get_frame_time()), &mut canvas);

        clear_background(BLACK);
        if let Some(viewport) = game.viewport() {
            canvas.present(&viewport);
        }
        rendering::draw_controls(&game, generation.get(), &buttons, mouse_pos);

        next_frame().await;
    }

    game.stop();
}
