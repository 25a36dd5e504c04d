use crate::core::{
    display_tile, mirror_goal, Difficulty, GameState, GridSize, Level, LevelError, Position,
    TileType, UserAction, Direction, World,
};
use crate::models::GameRenderState;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    Terminal,
    backend::CrosstermBackend,
    layout::{Alignment, Constraint, Direction as LayoutDirection, Layout},
    style::{Color, Style},
    widgets::{Block, Borders, Paragraph},
};
use std::io;
use std::time::Duration;

pub const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Parses an ASCII level as level 1 "Custom".
///
/// `#` wall, ` ` empty, `O` pit, `@` start, `.` goal, `+` start on the goal.
pub fn parse_level(s: &str) -> Result<Level, LevelError> {
    parse_level_with(1, "Custom", Difficulty::Easy, s)
}

pub fn parse_level_with(
    id: u32,
    name: &str,
    difficulty: Difficulty,
    s: &str,
) -> Result<Level, LevelError> {
    let mut rows: Vec<Vec<TileType>> = Vec::new();
    let mut start = None;
    let mut goal = None;
    let max_width = s.lines().map(|line| line.chars().count()).max().unwrap_or(0);

    let mut y = 0;
    for line in s.lines() {
        if line.is_empty() {
            continue;
        }

        let mut row = Vec::new();
        for (x, ch) in line.chars().enumerate() {
            let pos = Position::new(x as i32, y);
            let tile = match ch {
                '#' => TileType::Wall,
                'O' => TileType::Pit,
                '@' => {
                    start = Some(pos);
                    TileType::Empty
                }
                '.' => {
                    goal = Some(pos);
                    TileType::Empty
                }
                '+' => {
                    start = Some(pos);
                    goal = Some(pos);
                    TileType::Empty
                }
                _ => TileType::Empty,
            };
            row.push(tile);
        }
        // Pad row to max width with Empty
        row.resize(max_width, TileType::Empty);
        rows.push(row);
        y += 1;
    }

    let start = start.ok_or_else(|| LevelError::Parse("level has no start '@'".into()))?;
    let goal = goal.ok_or_else(|| LevelError::Parse("level has no goal '.'".into()))?;
    let size = GridSize::new(max_width as i32, rows.len() as i32);
    Level::new(id, name, difficulty, size, start, goal, rows)
}

pub fn render_world_to_string(level: &Level, game: &GameState, world: World) -> String {
    let (player, goal) = match world {
        World::Real => (game.player, level.goal()),
        World::Mirror => (game.mirror_player(level), mirror_goal(level)),
    };

    let mut result = String::new();
    for y in 0..level.height() {
        for x in 0..level.width() {
            let pos = Position::new(x, y);
            let ch = match (pos == player, pos == goal) {
                (true, true) => '+',
                (true, false) => '@',
                (false, true) => '.',
                (false, false) => match display_tile(level, pos, world) {
                    TileType::Wall => '#',
                    TileType::Pit => 'O',
                    _ => ' ',
                },
            };
            result.push(ch);
        }
        result.push('\n');
    }
    result
}

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

pub fn render_game(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    state: &GameRenderState,
) -> Result<(), Box<dyn std::error::Error>> {
    let session = state.session;
    let level = session.level();

    terminal.draw(|f| {
        let chunks = Layout::default()
            .direction(LayoutDirection::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(0),
                Constraint::Length(4),
            ])
            .split(f.area());

        let header = format!(
            "Level {}: {} [{}]   Moves: {}",
            level.id(),
            level.name(),
            level.difficulty(),
            session.move_count()
        );
        let header_paragraph = Paragraph::new(header)
            .block(Block::default().borders(Borders::ALL).title("Dual Dimension"))
            .style(Style::default().fg(Color::White))
            .alignment(Alignment::Center);
        f.render_widget(header_paragraph, chunks[0]);

        let worlds = Layout::default()
            .direction(LayoutDirection::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(chunks[1]);
        for (area, world, title, color) in [
            (worlds[0], World::Real, "Real World", Color::Yellow),
            (worlds[1], World::Mirror, "Mirror World", Color::Magenta),
        ] {
            let text = render_world_to_string(level, session.state(), world);
            let paragraph = Paragraph::new(text)
                .block(Block::default().borders(Borders::ALL).title(title))
                .style(Style::default().fg(color))
                .alignment(Alignment::Center);
            f.render_widget(paragraph, area);
        }

        let instructions = if session.is_complete() {
            "Level Complete! R to replay, Q to quit, any other key to continue.".to_string()
        } else {
            "Controls: WASD or Arrow keys to move, R restart, H hint, Q quit".to_string()
        };
        let instructions = match &state.feedback {
            Some(feedback) => format!("{} | {}", instructions, feedback),
            None => instructions,
        };
        let hint_line = if state.hint_pending {
            "Hint: thinking...".to_string()
        } else {
            match &state.hint {
                Some(hint) => format!("Hint: {}", hint),
                None => String::new(),
            }
        };

        let instruction_paragraph = Paragraph::new(format!("{}\n{}", instructions, hint_line))
            .block(Block::default().borders(Borders::ALL).title("Instructions"))
            .style(Style::default().fg(Color::Cyan))
            .alignment(Alignment::Center);
        f.render_widget(instruction_paragraph, chunks[2]);
    })?;
    Ok(())
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ConsoleInput {
    UserAction(UserAction),
    Hint,
    Quit,
    Timeout,
    Unknown,
}

/// What a key press means once the level is complete.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum AfterWin {
    Quit,
    Restart,
    NextLevel,
    Wait,
}

pub fn after_win_choice(input: &ConsoleInput) -> AfterWin {
    match input {
        ConsoleInput::Quit => AfterWin::Quit,
        ConsoleInput::UserAction(UserAction::Restart) => AfterWin::Restart,
        ConsoleInput::Timeout => AfterWin::Wait,
        ConsoleInput::UserAction(UserAction::Move(_)) | ConsoleInput::Hint | ConsoleInput::Unknown => {
            AfterWin::NextLevel
        }
    }
}

pub fn key_to_input(code: KeyCode) -> ConsoleInput {
    match code {
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => ConsoleInput::Quit,
        KeyCode::Char('w') | KeyCode::Char('W') | KeyCode::Up => {
            ConsoleInput::UserAction(UserAction::Move(Direction::Up))
        }
        KeyCode::Char('s') | KeyCode::Char('S') | KeyCode::Down => {
            ConsoleInput::UserAction(UserAction::Move(Direction::Down))
        }
        KeyCode::Char('a') | KeyCode::Char('A') | KeyCode::Left => {
            ConsoleInput::UserAction(UserAction::Move(Direction::Left))
        }
        KeyCode::Char('d') | KeyCode::Char('D') | KeyCode::Right => {
            ConsoleInput::UserAction(UserAction::Move(Direction::Right))
        }
        KeyCode::Char('r') | KeyCode::Char('R') => ConsoleInput::UserAction(UserAction::Restart),
        KeyCode::Char('h') | KeyCode::Char('H') => ConsoleInput::Hint,
        _ => ConsoleInput::Unknown,
    }
}

pub fn handle_input() -> Result<ConsoleInput, Box<dyn std::error::Error>> {
    if event::poll(POLL_INTERVAL)? {
        if let Event::Key(KeyEvent {
            code,
            kind: KeyEventKind::Press,
            ..
        }) = event::read()?
        {
            return Ok(key_to_input(code));
        }
    }
    Ok(ConsoleInput::Timeout)
}
