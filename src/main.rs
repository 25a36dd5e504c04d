// Dual Dimension in the terminal
// One input drives two characters: one in the real world, one in its horizontal mirror.
// Controls: W/A/S/D or arrow keys to move, R restart, H hint, Q quit.
// Tiles: '#' wall, 'O' pit, '@' player, '.' goal, '+' player on goal, ' ' floor.

use clap::{Parser, Subcommand};
use dual_dimension::console_interface::{after_win_choice, AfterWin, ConsoleInput};
use dual_dimension::console_interface::{
    cleanup_terminal, handle_input, render_game, render_world_to_string, setup_terminal,
};
use dual_dimension::core::{GameState, Level, UserAction, World, DEFAULT_LEVEL_ID};
use dual_dimension::hint::{HintRequest, HintWorker, SolverHintProvider};
use dual_dimension::levels::LevelCatalog;
use dual_dimension::models::GameRenderState;
use dual_dimension::session::{Session, SessionEvent};
use dual_dimension::state_graph::{get_graph_info, get_json_data, populate_all, solve};
use env_logger::{Env, Target};
use log::{error, info};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;

#[derive(Parser, Debug)]
#[command(name = "dual_dimension", about = "Guide two mirrored characters to their goals at once")]
struct Cli {
    /// JSON file with the level catalog. Uses the built-in levels when omitted.
    #[arg(long)]
    levels: Option<PathBuf>,

    /// Where logs go while the terminal UI owns the screen.
    #[arg(long, default_value = "dual_dimension.log")]
    log_file: PathBuf,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Play interactively, starting at LEVEL
    Play { level: Option<u32> },
    /// List the available levels
    List {
        /// Print the catalog as JSON instead
        #[arg(long)]
        json: bool,
    },
    /// Print the shortest solution of a level
    Solve { level: u32 },
    /// Export the reachable state graph of a level as JSON
    Export {
        level: u32,
        #[arg(long)]
        out: Option<PathBuf>,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or(Command::Play { level: None });
    let interactive = matches!(command, Command::Play { .. });
    init_logging(interactive.then_some(cli.log_file.as_path()))?;

    let loaded;
    let catalog = match &cli.levels {
        Some(path) => {
            loaded = LevelCatalog::load(path)?;
            &loaded
        }
        None => LevelCatalog::builtin()?,
    };

    match command {
        Command::Play { level } => {
            let level = catalog.find(level.unwrap_or(DEFAULT_LEVEL_ID))?;
            let mut terminal = setup_terminal()?;
            let result = run_interactive(catalog, level, &mut terminal);
            cleanup_terminal()?;
            if let Err(err) = &result {
                error!("Interactive session ended with an error: {}", err);
            }
            result?;
        }
        Command::List { json } => {
            if json {
                println!("{}", catalog.to_json()?);
            } else {
                for level in catalog.iter() {
                    println!(
                        "Level {}: {} [{}] {}x{}",
                        level.id(),
                        level.name(),
                        level.difficulty(),
                        level.width(),
                        level.height()
                    );
                }
            }
        }
        Command::Solve { level } => {
            let level = catalog.find(level)?;
            run_solve(level);
        }
        Command::Export { level, out } => {
            let level = catalog.find(level)?;
            let graph = populate_all(level, level.player_start());
            info!("{}", get_graph_info(&graph));
            let json_data = get_json_data(&graph, level)?;
            match out {
                Some(path) => {
                    std::fs::write(&path, json_data)?;
                    println!("State graph exported to {}", path.display());
                }
                None => println!("{}", json_data),
            }
        }
    }

    Ok(())
}

fn init_logging(log_file: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    let mut builder = env_logger::Builder::from_env(Env::default().default_filter_or("info"));
    if let Some(path) = log_file {
        let log_out = std::fs::OpenOptions::new()
            .write(true)
            .truncate(true)
            .create(true)
            .open(path)?;
        builder.target(Target::Pipe(Box::new(log_out)));
    }
    builder.init();
    Ok(())
}

fn run_solve(level: &Level) {
    let graph = populate_all(level, level.player_start());
    println!("{}", get_graph_info(&graph));
    print!("{}", render_world_to_string(level, &GameState::new(level), World::Real));

    match solve(level, level.player_start()) {
        Some(path) => {
            let names: Vec<&str> = path.iter().map(|d| d.name()).collect();
            println!("Solved \"{}\" in {} moves: {}", level.name(), path.len(), names.join(", "));
        }
        None => println!("\"{}\" cannot be solved", level.name()),
    }
}

fn run_interactive<'a>(
    catalog: &'a LevelCatalog,
    first_level: &'a Level,
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut level = first_level;

    'levels: loop {
        let mut session = Session::new(level);
        let mut hints = HintWorker::new(Arc::new(SolverHintProvider));
        let mut feedback: Option<String> = None;
        let mut hint: Option<String> = None;

        loop {
            if let Some(result) = hints.poll() {
                hint = Some(match result {
                    Ok(text) => text,
                    Err(err) => format!("Error: {}", err),
                });
            }

            render_game(terminal, &GameRenderState {
                session: &session,
                feedback: feedback.clone(),
                hint: hint.clone(),
                hint_pending: hints.is_pending(),
            })?;

            if session.is_complete() {
                match after_win_choice(&handle_input()?) {
                    AfterWin::Quit => break 'levels,
                    AfterWin::Wait => continue,
                    AfterWin::Restart => {
                        session.dispatch(UserAction::Restart);
                        hints.cancel();
                        hint = None;
                        feedback = Some("Level restarted".to_string());
                        continue;
                    }
                    AfterWin::NextLevel => {}
                }
                match catalog.next_after(level.id()) {
                    Some(next) => {
                        level = next;
                        continue 'levels;
                    }
                    None => {
                        info!("All levels complete");
                        break 'levels;
                    }
                }
            }

            match handle_input()? {
                ConsoleInput::Quit => break 'levels,
                ConsoleInput::UserAction(action) => match session.dispatch(action) {
                    SessionEvent::Moved(_) => feedback = None,
                    SessionEvent::Rejected(reason) => feedback = Some(format!("Ouch! {}", reason)),
                    SessionEvent::Completed { moves } => {
                        hints.cancel();
                        hint = None;
                        feedback = Some(format!("You solved \"{}\" in {} moves.", level.name(), moves));
                    }
                    SessionEvent::Restarted => {
                        hints.cancel();
                        hint = None;
                        feedback = Some("Level restarted".to_string());
                    }
                },
                ConsoleInput::Hint => {
                    if !hints.request(HintRequest::new(level, session.state())) {
                        feedback = Some("A hint is already on its way".to_string());
                    }
                }
                ConsoleInput::Timeout | ConsoleInput::Unknown => {}
            }
        }
    }

    Ok(())
}
