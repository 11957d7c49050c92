const START: &str = "START";
const ROUND: &str = "ROUND";
const SCORE: &str = "SCORE";
const END: &str = "END";

/// One line sent by the judge, classified.
///
/// `ROUND` and `SCORE` are matched by prefix so the judge can append round
/// numbers or scores; their payload is whatever follows the keyword, with the
/// separator removed. `START` and `END` must match exactly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Start,
    Round(String),
    Score(String),
    End,
    Unknown(String),
}

impl Command {
    pub fn classify(line: &str) -> Command {
        let line = line.trim();
        if line == START {
            Command::Start
        } else if let Some(rest) = line.strip_prefix(ROUND) {
            Command::Round(rest.trim_start().to_owned())
        } else if let Some(rest) = line.strip_prefix(SCORE) {
            Command::Score(rest.trim_start().to_owned())
        } else if line == END {
            Command::End
        } else {
            Command::Unknown(line.to_owned())
        }
    }

    /// Whether the judge waits for a move after sending this command.
    pub fn expects_move(&self) -> bool {
        matches!(self, Command::Start | Command::Round(_))
    }
}
