use clap::{Parser, ValueEnum};
use rand::rngs::StdRng;
use rand::SeedableRng;
use thiserror::Error;
use crate::core::{GameState, SPEED, TICKS_PER_SECOND};

#[derive(Clone, Copy, PartialEq, Eq, Debug, ValueEnum)]
pub enum FrontendMode {
    Window,
    Console,
}

/// Runtime settings, read from the command line.
#[derive(Clone, Debug, PartialEq, Parser)]
#[command(author, version, about, long_about = None)]
pub struct GameConfig {
    #[arg(value_enum, default_value_t = FrontendMode::Window)]
    pub mode: FrontendMode,
    /// Seed for tile and box colors. Random when omitted.
    #[arg(long, value_name = "N")]
    pub seed: Option<u64>,
    /// Fraction of a tile covered per tick, in (0, 1].
    #[arg(long, value_name = "F", default_value_t = SPEED, value_parser = parse_speed)]
    pub speed: f32,
    #[arg(long = "hz", value_name = "F", default_value_t = TICKS_PER_SECOND, value_parser = parse_tick_rate)]
    pub ticks_per_second: f64,
    #[arg(long = "no-hud", action = clap::ArgAction::SetFalse)]
    pub show_hud: bool,
}

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("'{0}' is not a number")]
    NotANumber(String),
    #[error("speed must be in (0, 1], got {0}")]
    SpeedOutOfRange(f32),
    #[error("tick rate must be positive, got {0}")]
    TickRateNotPositive(f64),
}

fn parse_speed(value: &str) -> Result<f32, ConfigError> {
    let speed: f32 = value.parse().map_err(|_| ConfigError::NotANumber(value.to_string()))?;
    if speed > 0.0 && speed <= 1.0 {
        Ok(speed)
    } else {
        Err(ConfigError::SpeedOutOfRange(speed))
    }
}

fn parse_tick_rate(value: &str) -> Result<f64, ConfigError> {
    let hz: f64 = value.parse().map_err(|_| ConfigError::NotANumber(value.to_string()))?;
    if hz > 0.0 && hz.is_finite() {
        Ok(hz)
    } else {
        Err(ConfigError::TickRateNotPositive(hz))
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            mode: FrontendMode::Window,
            seed: None,
            speed: SPEED,
            ticks_per_second: TICKS_PER_SECOND,
            show_hud: true,
        }
    }
}

impl GameConfig {
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_rng(&mut rand::rng()),
        }
    }

    pub fn new_game(&self) -> GameState {
        GameState::new_default(&mut self.rng())
    }
}
