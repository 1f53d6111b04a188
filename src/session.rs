use crate::board::{Board, CELL_COUNT, Outcome, Side};
use crate::error::{Error, Result};
use crate::strategy::Strategy;
use std::time::Duration;
use tracing::{debug, info};

/// Pause a front end should take before showing the engine's move.
pub const DEFAULT_ENGINE_DELAY: Duration = Duration::from_millis(500);

/// The side the human plays.
pub const HUMAN: Side = Side::Minimizer;
/// The side the engine plays.
pub const ENGINE: Side = Side::Maximizer;

/// Where a game stands. `Won` and `Lost` are from the human's point of view.
#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub enum Phase {
    /// The human is to move.
    AwaitingHumanMove,
    /// The engine is to move.
    AwaitingEngineMove,
    /// The human completed a line.
    Won,
    /// The engine completed a line.
    Lost,
    /// The board filled up without a line.
    Draw,
}

impl Phase {
    /// Returns `true` once the game has a result.
    pub const fn is_finished(self) -> bool {
        matches!(self, Phase::Won | Phase::Lost | Phase::Draw)
    }
}

/// A builder for creating instances of `GameSession`.
pub struct GameSessionBuilder<S: Strategy> {
    strategy: S,
    human_first: bool,
    engine_delay: Duration,
}

impl<S: Strategy> GameSessionBuilder<S> {
    /// Creates a new builder around the strategy that plays for the engine.
    pub fn new(strategy: S) -> Self {
        Self {
            strategy,
            human_first: true,
            engine_delay: DEFAULT_ENGINE_DELAY,
        }
    }

    /// Chooses who opens each game. Defaults to the human.
    pub fn with_human_first(mut self, human_first: bool) -> Self {
        self.human_first = human_first;
        self
    }

    /// Sets the pacing delay reported by `GameSession::engine_delay`.
    pub fn with_engine_delay(mut self, delay: Duration) -> Self {
        self.engine_delay = delay;
        self
    }

    /// Builds the `GameSession` with the configured settings.
    pub fn build(self) -> GameSession<S> {
        GameSession::new(self.strategy, self.human_first, self.engine_delay)
    }
}

/// One live game between a human and an engine strategy.
///
/// The session owns the board and the turn order; it validates human input
/// and applies whatever the strategy answers. It does no I/O and never sleeps.
pub struct GameSession<S: Strategy> {
    strategy: S,
    human_first: bool,
    engine_delay: Duration,
    board: Board,
    phase: Phase,
    history: Vec<(Side, u8)>,
}

impl<S: Strategy> GameSession<S> {
    /// Returns a new builder for `GameSession`.
    pub fn builder(strategy: S) -> GameSessionBuilder<S> {
        GameSessionBuilder::new(strategy)
    }

    /// Creates a new session.
    ///
    /// It is recommended to use the builder pattern via `GameSession::builder()` instead.
    pub fn new(strategy: S, human_first: bool, engine_delay: Duration) -> Self {
        Self {
            strategy,
            human_first,
            engine_delay,
            board: Board::new(),
            phase: Self::opening_phase(human_first),
            history: Vec::with_capacity(CELL_COUNT),
        }
    }

    fn opening_phase(human_first: bool) -> Phase {
        if human_first {
            Phase::AwaitingHumanMove
        } else {
            Phase::AwaitingEngineMove
        }
    }

    /// Returns the current board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns where the game stands.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Returns `true` once the game is won, lost or drawn.
    pub fn is_finished(&self) -> bool {
        self.phase.is_finished()
    }

    /// Returns the pause a front end should take before `play_engine`.
    pub fn engine_delay(&self) -> Duration {
        self.engine_delay
    }

    /// Moves played so far, oldest first.
    pub fn history(&self) -> &[(Side, u8)] {
        &self.history
    }

    /// Starts a new game with the same strategy and settings.
    pub fn reset(&mut self) {
        self.board = Board::new();
        self.phase = Self::opening_phase(self.human_first);
        self.history.clear();
        debug!(human_first = self.human_first, "session reset");
    }

    /// Marks `position` for the human and returns the resulting phase.
    pub fn play_human(&mut self, position: usize) -> Result<Phase> {
        match self.phase {
            Phase::AwaitingHumanMove => {}
            Phase::AwaitingEngineMove => return Err(Error::NotHumanTurn),
            _ => return Err(Error::GameOver),
        }
        if position >= CELL_COUNT {
            return Err(Error::PositionOutOfRange { position });
        }
        if !self.board.is_empty_at(position) {
            return Err(Error::PositionOccupied { position });
        }

        self.apply(HUMAN, position as u8);
        Ok(self.phase)
    }

    /// Lets the strategy move for the engine and returns the chosen cell.
    pub fn play_engine(&mut self) -> Result<u8> {
        match self.phase {
            Phase::AwaitingEngineMove => {}
            Phase::AwaitingHumanMove => return Err(Error::NotEngineTurn),
            _ => return Err(Error::GameOver),
        }

        let position = self
            .strategy
            .choose_move(&self.board, ENGINE)
            .ok_or(Error::NoMoveAvailable)?;
        if !self.board.is_empty_at(position as usize) {
            return Err(Error::IllegalEngineMove { position });
        }

        self.apply(ENGINE, position);
        Ok(position)
    }

    fn apply(&mut self, side: Side, position: u8) {
        self.board.place(position, side);
        self.history.push((side, position));
        self.phase = match self.board.outcome() {
            Outcome::MaximizerWins => Phase::Lost,
            Outcome::MinimizerWins => Phase::Won,
            Outcome::Draw => Phase::Draw,
            Outcome::Ongoing if side == HUMAN => Phase::AwaitingEngineMove,
            Outcome::Ongoing => Phase::AwaitingHumanMove,
        };
        debug!(side = ?side, position, phase = ?self.phase, "move applied");
        if self.phase.is_finished() {
            info!(phase = ?self.phase, moves = self.history.len(), "game finished");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::strategy::Minimax;

    /// Replays a fixed list of cells, for driving the engine side in tests.
    struct Scripted(Vec<u8>);

    impl Strategy for Scripted {
        fn choose_move(&mut self, _board: &Board, _side: Side) -> Option<u8> {
            if self.0.is_empty() {
                None
            } else {
                Some(self.0.remove(0))
            }
        }
    }

    #[test]
    fn builder_defaults() {
        let session = GameSession::builder(Minimax).build();
        assert_eq!(session.phase(), Phase::AwaitingHumanMove);
        assert_eq!(session.engine_delay(), DEFAULT_ENGINE_DELAY);
        assert_eq!(*session.board(), Board::new());
    }

    #[test]
    fn engine_can_open() {
        // arrange
        let mut session = GameSession::builder(Minimax)
            .with_human_first(false)
            .with_engine_delay(Duration::ZERO)
            .build();

        // act
        let position = session.play_engine().unwrap();

        // assert
        assert_eq!(position, 0);
        assert_eq!(session.phase(), Phase::AwaitingHumanMove);
        assert_eq!(session.history(), &[(ENGINE, 0)]);
        assert_eq!(session.engine_delay(), Duration::ZERO);
    }

    #[test]
    fn human_move_validation() {
        let mut session = GameSession::builder(Minimax).build();
        assert_eq!(
            session.play_human(9),
            Err(Error::PositionOutOfRange { position: 9 })
        );
        assert_eq!(session.play_engine(), Err(Error::NotEngineTurn));

        assert_eq!(session.play_human(4), Ok(Phase::AwaitingEngineMove));
        assert_eq!(session.play_human(0), Err(Error::NotHumanTurn));

        let reply = session.play_engine().unwrap();
        assert_eq!(
            session.play_human(reply as usize),
            Err(Error::PositionOccupied {
                position: reply as usize
            })
        );
    }

    #[test]
    fn engine_punishes_lowest_cell_human() {
        // arrange
        let mut session = GameSession::builder(Minimax).build();

        // act
        while !session.is_finished() {
            if session.phase() == Phase::AwaitingHumanMove {
                let lowest = session.board().available_moves()[0];
                session.play_human(lowest as usize).unwrap();
            } else {
                session.play_engine().unwrap();
            }
        }

        // assert
        assert_eq!(session.phase(), Phase::Lost, "{}", session.board());
        assert_eq!(
            session.history(),
            &[
                (HUMAN, 0),
                (ENGINE, 4),
                (HUMAN, 1),
                (ENGINE, 2),
                (HUMAN, 3),
                (ENGINE, 6)
            ]
        );
        assert_eq!(session.play_human(5), Err(Error::GameOver));
        assert_eq!(session.play_engine(), Err(Error::GameOver));
    }

    #[test]
    fn human_can_win_against_weak_engine() {
        let mut session = GameSession::builder(Scripted(vec![3, 4])).build();
        session.play_human(0).unwrap();
        session.play_engine().unwrap();
        session.play_human(1).unwrap();
        session.play_engine().unwrap();
        assert_eq!(session.play_human(2), Ok(Phase::Won));
        assert!(session.is_finished());
    }

    #[test]
    fn full_board_is_a_draw() {
        let mut session = GameSession::builder(Scripted(vec![4, 2, 3, 7])).build();
        for human in [0, 1, 5, 6, 8] {
            let phase = session.play_human(human).unwrap();
            if phase == Phase::AwaitingEngineMove {
                session.play_engine().unwrap();
            }
        }
        assert_eq!(session.phase(), Phase::Draw);
        assert_eq!(session.history().len(), 9);
    }

    #[test]
    fn illegal_engine_answer_is_rejected() {
        let mut session = GameSession::builder(Scripted(vec![4])).build();
        session.play_human(4).unwrap();
        assert_eq!(
            session.play_engine(),
            Err(Error::IllegalEngineMove { position: 4 })
        );
        assert_eq!(session.phase(), Phase::AwaitingEngineMove);
    }

    #[test]
    fn exhausted_engine_reports_no_move() {
        let mut session = GameSession::builder(Scripted(vec![])).build();
        session.play_human(0).unwrap();
        assert_eq!(session.play_engine(), Err(Error::NoMoveAvailable));
    }

    #[test]
    fn reset_starts_over() {
        let mut session = GameSession::builder(Minimax)
            .with_human_first(false)
            .build();
        session.play_engine().unwrap();
        session.reset();
        assert_eq!(session.phase(), Phase::AwaitingEngineMove);
        assert!(session.history().is_empty());
        assert_eq!(*session.board(), Board::new());
    }
}
