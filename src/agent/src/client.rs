use std::io::{BufRead, Write};

use common::model::{game::Move, messages::Command};
use tracing::{debug, info, warn};

use crate::{
    error::{BotError, Result},
    strategy::{SessionContext, Strategy},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Waiting,
    Active,
    Done,
}

/// How a session ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub phase: Phase,
    pub lines_read: usize,
    pub moves_sent: usize,
}

pub struct Client {
    strategy: Box<dyn Strategy>,
    context: SessionContext,
}

impl Client {
    pub fn new(strategy: Box<dyn Strategy>) -> Self {
        Client {
            strategy,
            context: SessionContext::new(),
        }
    }

    pub fn context(&self) -> &SessionContext {
        &self.context
    }

    /// Applies one command, returning the next phase and the move to send, if any.
    pub fn update(&mut self, phase: Phase, command: &Command) -> (Phase, Option<Move>) {
        match phase {
            Phase::Waiting => match command {
                Command::Start => (Phase::Active, Some(self.play(command))),
                _ => {
                    warn!("Ignoring {:?} before START", command);
                    (Phase::Waiting, None)
                }
            },
            Phase::Active => {
                self.context.observe(command);
                if command.expects_move() {
                    (Phase::Active, Some(self.play(command)))
                } else if matches!(command, Command::End) {
                    (Phase::Done, None)
                } else {
                    (Phase::Active, None)
                }
            }
            Phase::Done => (Phase::Done, None),
        }
    }

    fn play(&mut self, command: &Command) -> Move {
        let next_move = self.strategy.make_move(command, &self.context);
        self.context.history.push(next_move);
        next_move
    }

    /// Reads judge commands one line at a time until `END` or end of input,
    /// writing and flushing each move before the next read. Lines that are not
    /// valid UTF-8 are decoded lossily and end up as `Unknown`.
    pub fn run(&mut self, mut input: impl BufRead, mut output: impl Write) -> Result<RunSummary> {
        let mut phase = Phase::Waiting;
        let mut summary = RunSummary {
            phase,
            lines_read: 0,
            moves_sent: 0,
        };
        let mut line = Vec::new();
        info!("Waiting for judge");
        loop {
            line.clear();
            let read = input
                .read_until(b'\n', &mut line)
                .map_err(BotError::Input)?;
            if read == 0 {
                info!(?phase, "Judge closed input");
                break;
            }
            summary.lines_read += 1;

            let command = Command::classify(&String::from_utf8_lossy(&line));
            debug!(?command, "Received");
            let (next_phase, reply) = self.update(phase, &command);
            if let Some(reply) = reply {
                writeln!(output, "{}", reply).map_err(BotError::Output)?;
                output.flush().map_err(BotError::Output)?;
                summary.moves_sent += 1;
                debug!(%reply, "Sent");
            }
            if next_phase != phase {
                info!(from = ?phase, to = ?next_phase, "Session phase changed");
            }
            phase = next_phase;
            if matches!(phase, Phase::Done) {
                break;
            }
        }
        summary.phase = phase;
        Ok(summary)
    }
}
