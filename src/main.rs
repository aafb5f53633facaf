use std::path::PathBuf;

use log::info;
use macroquad::prelude::*;

use pulse_snake::config::{DEFAULT_CONFIG_PATH, GameConfig};
use pulse_snake::food::clock_seed;
use pulse_snake::game_loop::{GameLoopController, Phase};
use pulse_snake::input::{Intent, SwipeTracker, WATCHED_KEYS, intent_for_key};
use pulse_snake::render::{ScreenSurface, draw_game_over, draw_hud};
use pulse_snake::score::JsonFileStore;

fn window_conf() -> Conf {
    Conf {
        window_title: "Snake".to_owned(),
        window_width: 480,
        window_height: 520,
        high_dpi: true,
        ..Default::default()
    }
}

fn config_path() -> PathBuf {
    std::env::var_os("SNAKE_CONFIG")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH))
}

/// Keyboard input gathered this frame in `WATCHED_KEYS` order, then touches
fn poll_intents(swipe: &mut SwipeTracker, game_over: bool) -> Vec<Intent> {
    let mut intents: Vec<Intent> = WATCHED_KEYS
        .iter()
        .filter(|key| is_key_pressed(**key))
        .filter_map(|key| intent_for_key(*key))
        .collect();

    for touch in touches() {
        if game_over && matches!(touch.phase, TouchPhase::Started) {
            intents.push(Intent::Restart);
        }
        if let Some(dir) = swipe.on_touch(touch.phase, touch.position) {
            intents.push(Intent::Steer(dir));
        }
    }
    intents
}

#[macroquad::main(window_conf)]
async fn main() {
    env_logger::init();

    let config = GameConfig::load_or_default(&config_path());
    let store = JsonFileStore::new(&config.save_path);
    info!("Best score file: {}", store.path().display());

    let seed = clock_seed();
    info!("Food seed: {seed}");
    let mut game = GameLoopController::new(config, store).with_food_seed(seed);
    let mut swipe = SwipeTracker::new();
    game.start(get_time());

    loop {
        let now = get_time();
        let game_over = matches!(game.phase(), Phase::GameOver(_));

        for intent in poll_intents(&mut swipe, game_over) {
            match intent {
                Intent::Steer(dir) => {
                    game.steer(dir);
                }
                Intent::Restart if game_over => game.restart(now),
                Intent::Restart => {}
                Intent::Quit => return,
            }
        }

        game.update(now);

        let mut surface = ScreenSurface::fit_window(game.config().grid(), game.config().cell_size);
        game.render(&mut surface);
        draw_hud(game.score(), game.best_score());
        if let Phase::GameOver(reason) = game.phase() {
            draw_game_over(game.score(), game.best_score(), reason.headline());
        }

        next_frame().await;
    }
}
