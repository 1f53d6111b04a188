//! A small and simple library for exhaustive minimax search over tic-tac-toe.
//!
//! The engine walks the whole game tree from a given position and returns the
//! exact game value, or the optimal move for the side to play. It keeps no
//! state between calls and never modifies the board it is given. Among equally
//! good moves it always returns the lowest cell index, so results are fully
//! deterministic.
//!
//! # Example
//!
//! ```rust
//! use minimax_lib::board::{Board, Side};
//! use minimax_lib::engine;
//!
//! // The Maximizer (O) is one move away from completing the top row
//! let board: Board = "OO XX    ".parse().unwrap();
//!
//! assert_eq!(engine::best_move(&board, Side::Maximizer), Some(2));
//! assert_eq!(engine::evaluate(&board, Side::Maximizer), 1);
//!
//! // Perfect play from the empty board is a draw
//! assert_eq!(engine::evaluate(&Board::new(), Side::Maximizer), 0);
//! ```

/// Board representation, winning lines and the terminal-state predicates.
pub mod board;
/// The exhaustive minimax search.
pub mod engine;
/// Crate error type.
pub mod error;
/// Contains traits and implementations for random number generation.
pub mod random;
/// A caller-side game loop shared by front ends.
pub mod session;
/// The `Strategy` trait and the players that implement it.
pub mod strategy;

pub use board::{Board, Cell, Outcome, Side};
pub use error::{Error, Result};
