//! REPL for calcctl
use anyhow::Result;

use calc::Session;
use std::path::PathBuf;

use crate::editor::{self, Editor};
use crate::print_reply;
use rustyline::error::ReadlineError;

/// Entrypoint for running REPL.
/// Returns Err if REPL terminated with error
pub(crate) fn run(session: &mut Session, use_history: bool) -> Result<()> {
    let mut rl = editor::editor()?;
    let history = if use_history { history_file() } else { None };

    load_history(&mut rl, &history);

    loop {
        let line = match rl.readline("calc> ") {
            Ok(line) => {
                let _ = rl.add_history_entry(line.as_str());
                line
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
            Err(err) => {
                println!("Error: {:?}", err);
                break;
            }
        };
        if !print_reply(session.process(&line)) {
            break;
        }
    }

    save_history(&mut rl, &history);

    Ok(())
}

/// Path to file to use for history
fn history_file() -> Option<PathBuf> {
    let dir = dirs::data_local_dir()
        .or_else(dirs::data_dir)
        .or_else(dirs::home_dir)?;
    Some(dir.as_path().join(".calcctl_history"))
}

fn load_history(rl: &mut Editor, history: &Option<PathBuf>) {
    if let Some(history) = history {
        if let Err(e) = rl.load_history(&history) {
            eprintln!("Failed to load {} - {}", history.to_string_lossy(), e);
        }
    }
}

fn save_history(rl: &mut Editor, history: &Option<PathBuf>) {
    if let Some(history) = history {
        if let Err(e) = rl.save_history(&history) {
            eprintln!("Failed to save {} - {}", history.to_string_lossy(), e);
        }
    }
}
