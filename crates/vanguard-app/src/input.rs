//! JSON-line command input.

use std::io::BufRead;
use std::sync::mpsc;

use tracing::warn;

use vanguard_core::commands::PlayerCommand;

use crate::state::GameLoopCommand;

/// Parse one input line. Blank lines and `#` comments yield None.
pub fn parse_line(line: &str) -> Option<Result<PlayerCommand, serde_json::Error>> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return None;
    }
    Some(serde_json::from_str(line))
}

/// Forward commands from `reader` until EOF or until the loop hangs up.
/// Malformed lines are logged and skipped.
pub fn forward_commands(reader: impl BufRead, tx: &mpsc::Sender<GameLoopCommand>) {
    for (number, line) in reader.lines().enumerate() {
        let Ok(line) = line else {
            break;
        };
        match parse_line(&line) {
            None => {}
            Some(Ok(command)) => {
                if tx.send(GameLoopCommand::PlayerCommand(command)).is_err() {
                    break;
                }
            }
            Some(Err(err)) => warn!(line = number + 1, %err, "ignoring malformed command"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_line() {
        assert!(parse_line("   ").is_none());
        assert!(parse_line("# comment").is_none());
        assert_eq!(
            parse_line(r#"{"type":"SetFiring","held":true}"#).unwrap().unwrap(),
            PlayerCommand::SetFiring { held: true }
        );
        assert!(parse_line(r#"{"type":"Warp"}"#).unwrap().is_err());
    }

    #[test]
    fn test_forward_skips_bad_lines() {
        let input = "{\"type\":\"StartRun\"}\nnot json\n\n{\"type\":\"Pause\"}\n";
        let (tx, rx) = mpsc::channel();
        forward_commands(input.as_bytes(), &tx);
        let got: Vec<_> = rx.try_iter().collect();
        assert_eq!(got.len(), 2);
        assert!(matches!(got[0], GameLoopCommand::PlayerCommand(PlayerCommand::StartRun)));
        assert!(matches!(got[1], GameLoopCommand::PlayerCommand(PlayerCommand::Pause)));
    }
}
