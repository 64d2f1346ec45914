use crate::core::{Direction, GameState, Rgb, TileKind, LABEL_COLOR};
use crate::models::GameRenderState;
use bevy::math::IVec2;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    Terminal,
    backend::CrosstermBackend,
    layout::{Alignment, Constraint, Direction as LayoutDirection, Layout},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use std::io;
use std::time::Instant;

pub fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>, Box<dyn std::error::Error>>
{
    crossterm::terminal::enable_raw_mode()?;
    crossterm::execute!(io::stdout(), crossterm::terminal::EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(io::stdout());
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

pub fn cleanup_terminal() -> Result<(), Box<dyn std::error::Error>> {
    crossterm::terminal::disable_raw_mode()?;
    crossterm::execute!(io::stdout(), crossterm::terminal::LeaveAlternateScreen)?;
    Ok(())
}

/// Actor index drawn in each cell: the first actor whose rounded render position lands there.
fn actor_drawn_at(game: &GameState, pos: IVec2) -> Option<usize> {
    game.actors.iter().position(|actor| actor.render_pos.round().as_ivec2() == pos)
}

fn terminal_color(rgb: Rgb) -> Color {
    Color::Rgb(rgb.r, rgb.g, rgb.b)
}

/// Two terminal columns per tile so cells come out roughly square.
pub fn render_field_lines(game: &GameState) -> Vec<Line<'static>> {
    (0..game.height())
        .map(|y| {
            let spans: Vec<Span<'static>> = (0..game.width())
                .map(|x| {
                    let pos = IVec2 { x, y };
                    match actor_drawn_at(game, pos) {
                        Some(index) => {
                            let actor = &game.actors[index];
                            Span::styled(
                                format!("{} ", actor.label),
                                Style::default().fg(terminal_color(LABEL_COLOR)).bg(terminal_color(actor.color)),
                            )
                        }
                        None => Span::styled("  ", Style::default().bg(terminal_color(game.field[&pos].color))),
                    }
                })
                .collect();
            Line::from(spans)
        })
        .collect()
}

pub fn render_game(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    state: &GameRenderState,
) -> Result<(), Box<dyn std::error::Error>> {
    terminal.draw(|f| {
        let chunks = Layout::default()
            .direction(LayoutDirection::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(3)])
            .split(f.area());

        let game_paragraph = Paragraph::new(render_field_lines(state.game))
            .block(Block::default().borders(Borders::ALL).title("PushCalc"))
            .alignment(Alignment::Center);
        f.render_widget(game_paragraph, chunks[0]);

        let instructions = format!("Controls: WASD or Arrow keys to move, Q to quit | Moves: {}", state.moves);
        let instructions = if let Some(update) = &state.last_update {
            format!("{} | Last: {:?}", instructions, update)
        } else {
            instructions
        };

        let instruction_paragraph = Paragraph::new(instructions)
            .block(Block::default().borders(Borders::ALL).title("Instructions"))
            .style(Style::default().fg(Color::Cyan))
            .alignment(Alignment::Center);
        f.render_widget(instruction_paragraph, chunks[1]);
    })?;
    Ok(())
}

/// '#' for walls, the actor label on its logical tile, blank floor otherwise.
pub fn render_game_to_string(game: &GameState) -> String {
    let mut result = String::new();
    for y in 0..game.height() {
        for x in 0..game.width() {
            let pos = IVec2 { x, y };
            let ch = match game.actor_at(&pos) {
                Some(index) => game.actors[index].label,
                None => match game.field[&pos].kind {
                    TileKind::Wall => '#',
                    TileKind::Floor => ' ',
                },
            };
            result.push(ch);
        }
        result.push('\n');
    }
    result
}

pub fn dir_from_key(code: KeyCode) -> Option<Direction> {
    match code {
        KeyCode::Char('w') | KeyCode::Char('W') | KeyCode::Up => Some(Direction::Up),
        KeyCode::Char('s') | KeyCode::Char('S') | KeyCode::Down => Some(Direction::Down),
        KeyCode::Char('a') | KeyCode::Char('A') | KeyCode::Left => Some(Direction::Left),
        KeyCode::Char('d') | KeyCode::Char('D') | KeyCode::Right => Some(Direction::Right),
        _ => None,
    }
}

#[derive(Default, Debug, PartialEq)]
pub struct TickInput {
    /// Directions with a press or repeat event this tick. Terminals report no releases.
    pub held: Vec<Direction>,
    pub quit: bool,
}

impl TickInput {
    pub fn record(&mut self, key: KeyEvent) {
        if key.kind == KeyEventKind::Release {
            return;
        }
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => self.quit = true,
            code => {
                if let Some(direction) = dir_from_key(code) {
                    if !self.held.contains(&direction) {
                        self.held.push(direction);
                    }
                }
            }
        }
    }
}

/// Drains terminal events until `deadline`, which paces the loop at the tick rate.
pub fn collect_input(deadline: Instant) -> Result<TickInput, Box<dyn std::error::Error>> {
    let mut input = TickInput::default();
    loop {
        let remaining = deadline.saturating_duration_since(Instant::now());
        if !event::poll(remaining)? {
            return Ok(input);
        }
        if let Event::Key(key) = event::read()? {
            input.record(key);
        }
        if input.quit {
            return Ok(input);
        }
    }
}
