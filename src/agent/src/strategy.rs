use clap::ValueEnum;
use common::model::{game::Move, messages::Command};

/// What a strategy may look at when choosing a move.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct SessionContext {
    /// Moves already sent this session, oldest first.
    pub history: Vec<Move>,
    pub last_round: Option<String>,
    pub last_score: Option<String>,
}

impl SessionContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records what the judge told us. Only `ROUND` and `SCORE` carry anything.
    pub fn observe(&mut self, command: &Command) {
        match command {
            Command::Round(payload) => self.last_round = Some(payload.clone()),
            Command::Score(payload) => self.last_score = Some(payload.clone()),
            _ => {}
        }
    }
}

pub trait Strategy {
    fn make_move(&self, command: &Command, context: &SessionContext) -> Move;
}

impl<F> Strategy for F
where
    F: Fn(&Command, &SessionContext) -> Move,
{
    fn make_move(&self, command: &Command, context: &SessionContext) -> Move {
        self(command, context)
    }
}

// Trivial strategies
pub struct OnlyRock {}
impl Strategy for OnlyRock {
    fn make_move(&self, _: &Command, _: &SessionContext) -> Move {
        Move::Rock
    }
}
pub struct OnlyPaper {}
impl Strategy for OnlyPaper {
    fn make_move(&self, _: &Command, _: &SessionContext) -> Move {
        Move::Paper
    }
}
pub struct OnlyScissors {}
impl Strategy for OnlyScissors {
    fn make_move(&self, _: &Command, _: &SessionContext) -> Move {
        Move::Scissors
    }
}

// Rock, Paper, Scissors, Rock, ...
pub struct Cycle {}
impl Strategy for Cycle {
    fn make_move(&self, _: &Command, context: &SessionContext) -> Move {
        match context.history.last() {
            Some(last) => last.next(),
            None => Move::Rock,
        }
    }
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StrategyKind {
    #[default]
    Rock,
    Paper,
    Scissors,
    Cycle,
}

impl StrategyKind {
    pub fn build(&self) -> Box<dyn Strategy> {
        match self {
            StrategyKind::Rock => Box::new(OnlyRock {}),
            StrategyKind::Paper => Box::new(OnlyPaper {}),
            StrategyKind::Scissors => Box::new(OnlyScissors {}),
            StrategyKind::Cycle => Box::new(Cycle {}),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn context_after(moves: &[Move]) -> SessionContext {
        SessionContext {
            history: moves.to_vec(),
            ..SessionContext::new()
        }
    }

    #[test]
    fn constants_ignore_command_and_context() {
        let busy = context_after(&[Move::Paper, Move::Paper]);
        for command in [Command::Start, Command::Round("7".to_owned())] {
            for context in [SessionContext::new(), busy.clone()] {
                assert_eq!(OnlyRock {}.make_move(&command, &context), Move::Rock);
                assert_eq!(OnlyPaper {}.make_move(&command, &context), Move::Paper);
                assert_eq!(
                    OnlyScissors {}.make_move(&command, &context),
                    Move::Scissors
                );
            }
        }
    }

    #[test]
    fn cycle_follows_history() {
        let cycle = Cycle {};
        assert_eq!(cycle.make_move(&Command::Start, &SessionContext::new()), Move::Rock);
        assert_eq!(
            cycle.make_move(&Command::Round(String::new()), &context_after(&[Move::Rock])),
            Move::Paper
        );
        assert_eq!(
            cycle.make_move(
                &Command::Round(String::new()),
                &context_after(&[Move::Rock, Move::Paper, Move::Scissors])
            ),
            Move::Rock
        );
    }

    #[test]
    fn closures_are_strategies() {
        let by_round = |command: &Command, _: &SessionContext| match command {
            Command::Round(payload) if payload == "2" => Move::Scissors,
            _ => Move::Paper,
        };
        let context = SessionContext::new();
        assert_eq!(by_round.make_move(&Command::Start, &context), Move::Paper);
        assert_eq!(
            by_round.make_move(&Command::Round("2".to_owned()), &context),
            Move::Scissors
        );
    }

    #[test]
    fn observe_keeps_latest_payloads() {
        let mut context = SessionContext::new();
        context.observe(&Command::Start);
        assert_eq!(context, SessionContext::new());
        context.observe(&Command::Round("1".to_owned()));
        context.observe(&Command::Score("0 0".to_owned()));
        context.observe(&Command::Round("2".to_owned()));
        context.observe(&Command::Unknown("WIN".to_owned()));
        assert_eq!(context.last_round.as_deref(), Some("2"));
        assert_eq!(context.last_score.as_deref(), Some("0 0"));
        assert!(context.history.is_empty());
    }

    #[test]
    fn kinds_build_matching_strategies() {
        let context = SessionContext::new();
        let built: Vec<Move> = [
            StrategyKind::Rock,
            StrategyKind::Paper,
            StrategyKind::Scissors,
            StrategyKind::Cycle,
        ]
        .iter()
        .map(|kind| kind.build().make_move(&Command::Start, &context))
        .collect();
        assert_eq!(built, vec![Move::Rock, Move::Paper, Move::Scissors, Move::Rock]);
    }
}
