use crate::board::{Board, Side};
use tracing::debug;

/// Counters collected while walking the game tree.
#[derive(Debug, Default, PartialEq, Eq, Copy, Clone)]
pub struct SearchStats {
    /// Positions visited, the root included.
    pub nodes: u64,
    /// Terminal positions reached.
    pub leaves: u64,
}

/// The exact value of one legal move.
#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub struct MoveScore {
    /// The cell the mark goes on.
    pub position: u8,
    /// The game value after the move, with the opponent to play.
    pub score: i32,
}

/// Returns the game value of `board` with `side` to move, assuming perfect play.
///
/// `+1` means the Maximizer wins, `-1` the Minimizer, `0` a forced draw. A
/// terminal board is scored immediately, empty cells notwithstanding.
pub fn evaluate(board: &Board, side: Side) -> i32 {
    evaluate_with_stats(board, side).0
}

/// Same as [`evaluate`], also reporting how much of the tree was walked.
pub fn evaluate_with_stats(board: &Board, side: Side) -> (i32, SearchStats) {
    let mut search = Search::default();
    let mut working = *board;
    let score = search.minimax(&mut working, side);
    (score, search.stats)
}

/// Scores every empty cell of `board` for `side`, in increasing index order.
pub fn score_moves(board: &Board, side: Side) -> Vec<MoveScore> {
    let mut search = Search::default();
    search.score_moves(board, side)
}

/// Picks the optimal move for `side`.
///
/// Cells are tried in increasing index order and only a strictly better score
/// replaces the current choice, so among equally good moves the lowest index
/// wins. Returns `None` only when the board has no empty cell.
pub fn best_move(board: &Board, side: Side) -> Option<u8> {
    let mut search = Search::default();
    let mut best: Option<MoveScore> = None;
    for candidate in search.score_moves(board, side) {
        let improves = match best {
            None => true,
            Some(current) => side.prefers(candidate.score, current.score),
        };
        if improves {
            best = Some(candidate);
        }
    }

    if let Some(chosen) = best {
        debug!(
            side = ?side,
            position = chosen.position,
            score = chosen.score,
            nodes = search.stats.nodes,
            "best move found"
        );
    }
    best.map(|chosen| chosen.position)
}

/// Depth-first minimax over a private working board.
///
/// Every mark placed during the recursion is cleared before the call that
/// placed it returns.
#[derive(Default)]
struct Search {
    stats: SearchStats,
}

impl Search {
    fn score_moves(&mut self, board: &Board, side: Side) -> Vec<MoveScore> {
        let mut working = *board;
        working
            .available_moves()
            .into_iter()
            .map(|position| {
                working.place(position, side);
                let score = self.minimax(&mut working, side.opponent());
                working.clear(position);
                MoveScore { position, score }
            })
            .collect()
    }

    fn minimax(&mut self, board: &mut Board, side: Side) -> i32 {
        self.stats.nodes += 1;
        if let Some(score) = board.outcome().score() {
            self.stats.leaves += 1;
            return score;
        }

        let mut best = match side {
            Side::Maximizer => i32::MIN,
            Side::Minimizer => i32::MAX,
        };
        for position in board.available_moves() {
            board.place(position, side);
            let score = self.minimax(board, side.opponent());
            board.clear(position);
            best = match side {
                Side::Maximizer => best.max(score),
                Side::Minimizer => best.min(score),
            };
        }
        best
    }
}
