use crate::board::{Board, Side};
use crate::engine;
use crate::random::{RandomGenerator, StandardRandomGenerator};

/// Something that can choose a move for a side.
///
/// Front ends talk to this trait rather than to the engine directly, so the
/// same game loop can face a perfect or a random opponent.
pub trait Strategy {
    /// Returns the cell to mark, or `None` when the board has no empty cell.
    fn choose_move(&mut self, board: &Board, side: Side) -> Option<u8>;
}

impl<S: Strategy + ?Sized> Strategy for Box<S> {
    fn choose_move(&mut self, board: &Board, side: Side) -> Option<u8> {
        (**self).choose_move(board, side)
    }
}

/// Perfect play through exhaustive minimax search.
#[derive(Debug, Default, Copy, Clone)]
pub struct Minimax;

impl Strategy for Minimax {
    fn choose_move(&mut self, board: &Board, side: Side) -> Option<u8> {
        engine::best_move(board, side)
    }
}

/// Plays a uniformly random empty cell.
#[derive(Default)]
pub struct RandomStrategy<K: RandomGenerator = StandardRandomGenerator> {
    random: K,
}

impl<K: RandomGenerator> RandomStrategy<K> {
    /// Creates a strategy drawing from `random`.
    pub fn new(random: K) -> Self {
        Self { random }
    }
}

impl<K: RandomGenerator> Strategy for RandomStrategy<K> {
    fn choose_move(&mut self, board: &Board, _side: Side) -> Option<u8> {
        self.random.pick(&board.available_moves()).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::CustomNumberGenerator;

    #[test]
    fn minimax_matches_engine() {
        let board: Board = "OO XX    ".parse().unwrap();
        assert_eq!(Minimax.choose_move(&board, Side::Maximizer), Some(2));
    }

    #[test]
    fn random_strategy_only_picks_empty_cells() {
        // arrange
        let board: Board = "OXO X  O ".parse().unwrap();
        let mut strategy = RandomStrategy::new(CustomNumberGenerator::default());

        // act & assert
        for _ in 0..50 {
            let position = strategy.choose_move(&board, Side::Minimizer).unwrap();
            assert!(board.is_empty_at(position as usize));
        }
    }

    #[test]
    fn random_strategy_on_full_board_has_no_move() {
        let board: Board = "XOXXOOOXX".parse().unwrap();
        let mut strategy = RandomStrategy::new(CustomNumberGenerator::new(1));
        assert_eq!(strategy.choose_move(&board, Side::Minimizer), None);
    }

    #[test]
    fn boxed_strategy_delegates() {
        let mut strategy: Box<dyn Strategy> = Box::new(Minimax);
        let board: Board = "XX OO    ".parse().unwrap();
        assert_eq!(strategy.choose_move(&board, Side::Minimizer), Some(2));
    }
}
