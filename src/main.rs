// PushCalc: push a row of labeled boxes around a walled field.
// Controls: arrow keys or W/A/S/D, held keys keep walking. Close the window (or Q in the console) to quit.
// Usage: PushCalc [window|console] [--seed N] [--speed F] [--hz F] [--no-hud], see --help

use PushCalc::bevy_interface::run_window;
use PushCalc::config::{FrontendMode, GameConfig};
use PushCalc::console_interface::{cleanup_terminal, collect_input, render_game, setup_terminal};
use PushCalc::core::{tick, GameState, MoveUpdate};
use clap::Parser;
use PushCalc::models::GameRenderState;
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use std::io;
use std::time::{Duration, Instant};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = GameConfig::parse();
    let game_state = config.new_game();

    let mode = config.mode;
    match mode {
        FrontendMode::Window => {
            let exit = run_window(game_state, config);
            if exit.is_error() {
                return Err(format!("window closed with {:?}", exit).into());
            }
        }
        FrontendMode::Console => {
            let mut terminal = setup_terminal()?;
            let result = run_console(&config, game_state, &mut terminal);
            cleanup_terminal()?;
            let moves = result?;
            println!("Bye! {} moves.", moves);
        }
    }

    Ok(())
}

fn run_console(
    config: &GameConfig,
    game_state: GameState,
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
) -> Result<usize, Box<dyn std::error::Error>> {
    let mut game_state = game_state;
    let tick_length = Duration::from_secs_f64(1.0 / config.ticks_per_second);
    let mut next_tick = Instant::now();
    let mut last_update = None;
    let mut moves = 0;

    loop {
        next_tick += tick_length;
        let input = collect_input(next_tick)?;
        if input.quit {
            break;
        }

        let report = tick(&mut game_state, input.held, config.speed);
        if let Some((_, change)) = report.started {
            moves += 1;
            last_update = Some(MoveUpdate::Moved(change));
        } else if let Some(reason) = report.blocked {
            last_update = Some(MoveUpdate::Blocked(reason));
        }

        render_game(terminal, &GameRenderState {
            game: &game_state,
            last_update,
            moves,
        })?;

        // fell behind (slow terminal), don't try to catch up
        let now = Instant::now();
        if next_tick < now {
            next_tick = now;
        }
    }

    Ok(moves)
}
