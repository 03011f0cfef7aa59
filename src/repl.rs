use std::path::PathBuf;

use crate::export::ExportFormat;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplInput {
    Blank,
    Mood(String),
    Export { format: ExportFormat, dir: PathBuf },
    Links,
    History,
    Help,
    Quit,
    Invalid(String),
}

pub const HELP: &str = "\
Type a mood to get a playlist (start it with // if it begins with /), or one of:
  /export <json|csv|txt> [dir]   save the current playlist (default dir: .)
  /links                         open-all-songs panel
  /history                       moods and playlists from this session
  /help                          this message
  /quit                          leave";

/// Classify one line typed at the session prompt. Anything that isn't a
/// slash command is a mood, passed through untrimmed. A leading `//` escapes
/// a mood that itself starts with `/`.
pub fn parse_input(line: &str) -> ReplInput {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return ReplInput::Blank;
    }

    if let Some(escaped) = line.trim_start().strip_prefix("//") {
        return ReplInput::Mood(format!("/{}", escaped.trim_end_matches(['\r', '\n'])));
    }

    let Some(command) = trimmed.strip_prefix('/') else {
        return ReplInput::Mood(line.trim_end_matches(['\r', '\n']).to_string());
    };

    let mut words = command.split_whitespace();
    match words.next().unwrap_or_default() {
        "quit" | "exit" => ReplInput::Quit,
        "help" => ReplInput::Help,
        "links" => ReplInput::Links,
        "history" => ReplInput::History,
        "export" => {
            let Some(format) = words.next() else {
                return ReplInput::Invalid("usage: /export <json|csv|txt> [dir]".into());
            };
            match format.parse::<ExportFormat>() {
                Ok(format) => ReplInput::Export {
                    format,
                    dir: words.next().map(PathBuf::from).unwrap_or_else(|| PathBuf::from(".")),
                },
                Err(e) => ReplInput::Invalid(e.to_string()),
            }
        }
        other => ReplInput::Invalid(format!("unknown command: /{}", other)),
    }
}
