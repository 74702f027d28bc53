use anyhow::{Context, Result};
use calc::{Reply, Session};
use clap::{arg, command};
use std::io::{self, BufRead, IsTerminal};
use tracing::debug;

mod editor;
mod repl;

/// Process a single line
fn run_cmd(session: &mut Session, line: &str) -> Result<()> {
    if let Reply::Output(s) = session.process(line)? {
        println!("{s}");
    }
    Ok(())
}

/// Process lines from a non-interactive stream until EOF or `/exit`
fn run_stream(session: &mut Session, read: impl BufRead) -> Result<()> {
    for line in read.lines() {
        let line = line.context("Failed to read input")?;
        if !print_reply(session.process(&line)) {
            break;
        }
    }
    Ok(())
}

/// Print result of processing a line.
/// Returns false once the session should end
pub(crate) fn print_reply(res: calc::Result<Reply>) -> bool {
    match res {
        Ok(Reply::Silent) => true,
        Ok(Reply::Output(s)) => {
            println!("{s}");
            true
        }
        Ok(Reply::Exit) => false,
        Err(e) => {
            eprintln!("{e}");
            true
        }
    }
}

/// The clap CLI interface
fn cli() -> clap::Command {
    command!()
        .arg(arg!(command: -c --command <LINE> "If present, LINE is processed and program exits"))
        .arg(arg!(--"no-history" "Do not load or save REPL history"))
}

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();
    let args = cli().get_matches();

    let mut session = Session::new();
    match args.get_one::<String>("command") {
        Some(line) => run_cmd(&mut session, line),
        None if io::stdin().is_terminal() => {
            repl::run(&mut session, !args.get_flag("no-history"))
        }
        None => {
            debug!("stdin is not a terminal - reading lines without prompt");
            run_stream(&mut session, io::stdin().lock())
        }
    }
}
