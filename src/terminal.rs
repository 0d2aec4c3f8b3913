//! Terminal front end
//!
//! One line per answer. Lines starting with `:` are commands.

use std::io::{self, BufRead, Write};

use crate::game::{GameSession, SessionEvent};

/// A parsed input line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Answer(String),
    /// Restart with a new root word
    NewGame,
    List,
    Help,
    Quit,
    Unknown(String),
}

impl Command {
    pub fn parse(line: &str) -> Option<Self> {
        let line = line.trim();
        if line.is_empty() {
            return None;
        }

        let Some(cmd) = line.strip_prefix(':') else {
            return Some(Command::Answer(line.to_string()));
        };

        Some(match cmd.to_lowercase().as_str() {
            "new" | "refresh" | "n" => Command::NewGame,
            "list" | "l" => Command::List,
            "help" | "h" | "?" => Command::Help,
            "quit" | "exit" | "q" => Command::Quit,
            other => Command::Unknown(other.to_string()),
        })
    }
}

const HELP: &str = "\
Type a word made from the letters of the root word and press Enter.
  :new    start over with a new root word (alias :refresh)
  :list   show your words again
  :help   show this help
  :quit   leave (progress is saved)";

/// Interactive loop; returns at `:quit` or end of input
pub fn run<R: BufRead, W: Write>(game: &mut GameSession, input: R, out: &mut W) -> io::Result<()> {
    render_events(game, out)?;

    for line in input.lines() {
        let line = line?;
        let Some(command) = Command::parse(&line) else {
            continue;
        };

        match command {
            Command::Answer(answer) => match game.submit_answer(&answer) {
                Ok(_) => render_events(game, out)?,
                Err(rejection) => {
                    writeln!(out, "! {}", rejection.title())?;
                    writeln!(out, "  {}", rejection.message())?;
                }
            },
            Command::NewGame => {
                game.start_game();
                render_events(game, out)?;
            }
            Command::List => render_list(game, out)?,
            Command::Help => writeln!(out, "{HELP}")?,
            Command::Quit => break,
            Command::Unknown(cmd) => writeln!(out, "Unknown command :{cmd} (try :help)")?,
        }
        out.flush()?;
    }

    Ok(())
}

fn render_events<W: Write>(game: &mut GameSession, out: &mut W) -> io::Result<()> {
    for event in game.drain_events() {
        match event {
            SessionEvent::Reloaded => render_list(game, out)?,
            SessionEvent::Inserted { index } => {
                if let Some(word) = game.row(index) {
                    writeln!(out, "+ {word}")?;
                }
            }
        }
    }
    Ok(())
}

fn render_list<W: Write>(game: &GameSession, out: &mut W) -> io::Result<()> {
    let title = game.title().unwrap_or("?");
    writeln!(out, "== {} ==", title.to_uppercase())?;
    if game.row_count() == 0 {
        writeln!(out, "   (no words yet)")?;
    }
    for i in 0..game.row_count() {
        if let Some(word) = game.row(i) {
            writeln!(out, "{:>3}. {word}", i + 1)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::Dictionary;
    use crate::game::FixedPick;
    use crate::persistence::MemoryStore;
    use crate::words::WordList;

    fn game() -> GameSession {
        let mut game = GameSession::new(
            WordList::from_text("silkworm"),
            Box::new(MemoryStore::new()),
            Box::new(Dictionary::from_text("silk\nworm\n", "en")),
            Box::new(FixedPick(0)),
        );
        game.launch();
        game
    }

    fn play(game: &mut GameSession, script: &str) -> String {
        let mut out = Vec::new();
        run(game, script.as_bytes(), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_parse_commands() {
        assert_eq!(Command::parse("  "), None);
        assert_eq!(Command::parse("silk"), Some(Command::Answer("silk".into())));
        assert_eq!(Command::parse(":refresh"), Some(Command::NewGame));
        assert_eq!(Command::parse(":Q"), Some(Command::Quit));
        assert_eq!(Command::parse(":foo"), Some(Command::Unknown("foo".into())));
    }

    #[test]
    fn test_session_transcript() {
        let mut game = game();
        let out = play(&mut game, "silk\nsilk\ndog\n:quit\nworm\n");

        assert!(out.starts_with("== SILKWORM =="));
        assert!(out.contains("+ silk"));
        assert!(out.contains("! The word was the same as the keyword"));
        assert!(out.contains("You can't spell that word from silkworm!"));
        // Input after :quit is ignored
        assert!(!out.contains("+ worm"));
        assert_eq!(game.used_words(), &["silk"]);
    }

    #[test]
    fn test_new_game_clears_list() {
        let mut game = game();
        let out = play(&mut game, "silk\n:new\n");
        assert!(out.contains("(no words yet)"));
        assert!(game.used_words().is_empty());
    }
}
