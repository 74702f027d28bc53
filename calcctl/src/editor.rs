//! Line editor for calcctl REPL

use rustyline::{
    completion::{Completer, Pair},
    history::DefaultHistory,
    Context, Helper, Highlighter, Hinter, Result, Validator,
};

/// Commands offered for completion
const COMMANDS: &[&str] = &["/help", "/exit"];

/// Custom rustyline::Editor
pub(crate) type Editor = rustyline::Editor<ReplEditor, DefaultHistory>;

/// Create a line editor
pub fn editor() -> Result<Editor> {
    let editor = ReplEditor {};
    let mut rl = rustyline::Editor::new()?;
    rl.set_helper(Some(editor));
    Ok(rl)
}

/// Editor for calcctl repl
#[derive(Helper, Highlighter, Hinter, Validator)]
pub struct ReplEditor {}

impl Completer for ReplEditor {
    type Candidate = Pair;

    fn complete(&self, line: &str, pos: usize, _ctx: &Context<'_>) -> Result<(usize, Vec<Pair>)> {
        let candidates = commands_for(&line[..pos])
            .map(|cmd| Pair {
                display: cmd.to_string(),
                replacement: cmd.to_string(),
            })
            .collect();
        Ok((0, candidates))
    }
}

/// Commands starting with `prefix`. Only lines starting with `/` are commands
fn commands_for(prefix: &str) -> impl Iterator<Item = &'static str> + '_ {
    COMMANDS
        .iter()
        .copied()
        .filter(move |cmd| prefix.starts_with('/') && cmd.starts_with(prefix))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn complete_commands() {
        assert_eq!(commands_for("/").collect::<Vec<_>>(), COMMANDS.to_vec());
        assert_eq!(commands_for("/h").collect::<Vec<_>>(), vec!["/help"]);
        assert_eq!(commands_for("/exit").collect::<Vec<_>>(), vec!["/exit"]);
        assert_eq!(commands_for("/x").count(), 0);
    }

    #[test]
    fn complete_non_commands() {
        assert_eq!(commands_for("").count(), 0);
        assert_eq!(commands_for("e").count(), 0);
        assert_eq!(commands_for("2 /").count(), 0);
    }
}
