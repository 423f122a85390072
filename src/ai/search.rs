//! Bounded-depth search over the pending move queue.
//!
//! The planner tries every legal action for the queue, applies it to a
//! snapshot, and recursively evaluates the reduced queue, discounting the
//! continuation. Depth is capped at `min(max_depth, queue_len)` plies and
//! the branching factor is tiny, so the search is always fast. Pure: no
//! randomness, no side effects.

use smallvec::SmallVec;

use crate::board::graph::BoardGraph;
use crate::core::player::PlayerId;
use crate::core::tokens::TokenBoard;
use crate::engine::moves::apply_move;

use super::actions::{legal_actions, AiAction};
use super::config::AiConfig;
use super::eval::{evaluate_board, score_action};

/// Heuristic planner for one AI player.
pub struct AiPlanner<'a> {
    board: &'a BoardGraph,
    config: AiConfig,
}

impl<'a> AiPlanner<'a> {
    /// Create a planner with default weights.
    #[must_use]
    pub fn new(board: &'a BoardGraph) -> Self {
        Self {
            board,
            config: AiConfig::default(),
        }
    }

    /// Create a planner with custom weights.
    #[must_use]
    pub fn with_config(board: &'a BoardGraph, config: AiConfig) -> Self {
        Self { board, config }
    }

    /// The active configuration.
    #[must_use]
    pub fn config(&self) -> &AiConfig {
        &self.config
    }

    /// Pick the best action for the queue, or `None` when no legal action
    /// exists (the caller must then treat the queue as unusable).
    ///
    /// Maximizes `immediate + discount × continuation`; near-ties go to the
    /// higher immediate score. Defaults to the first legal action if no
    /// candidate scores strictly best.
    #[must_use]
    pub fn choose_best(
        &self,
        tokens: &TokenBoard,
        player: PlayerId,
        queue: &[i8],
    ) -> Option<AiAction> {
        let actions = legal_actions(self.board, tokens, player, queue);
        let first = *actions.first()?;

        let depth = self.config.max_depth.min(queue.len());

        let mut best_action = first;
        let mut best_total = f64::NEG_INFINITY;
        let mut best_immediate = f64::NEG_INFINITY;

        for action in actions {
            let (total, immediate) = self.score_with_continuation(tokens, player, queue, &action, depth);

            let improves = total > best_total + self.config.tie_epsilon;
            let near_tie = (total - best_total).abs() <= self.config.tie_epsilon
                && immediate > best_immediate;
            if improves || near_tie {
                best_action = action;
                best_total = total;
                best_immediate = immediate;
            }
        }

        Some(best_action)
    }

    /// Best achievable value of a queue from this position.
    ///
    /// Terminal at depth 0, an empty queue, or a won position. With legal
    /// actions, the maximum of `immediate + discount × continuation`;
    /// without, the static evaluation penalized per stranded queue entry.
    #[must_use]
    pub fn evaluate_queue(
        &self,
        tokens: &TokenBoard,
        player: PlayerId,
        queue: &[i8],
        depth: usize,
    ) -> f64 {
        if tokens.has_won(player) {
            return self.config.win_score;
        }
        if depth == 0 || queue.is_empty() {
            return evaluate_board(self.board, tokens, player, &self.config);
        }

        let actions = legal_actions(self.board, tokens, player, queue);
        if actions.is_empty() {
            return evaluate_board(self.board, tokens, player, &self.config)
                - self.config.stuck_penalty * queue.len() as f64;
        }

        let mut best = f64::NEG_INFINITY;
        for action in actions {
            let (total, _) = self.score_with_continuation(tokens, player, queue, &action, depth);
            best = best.max(total);
        }
        best
    }

    fn score_with_continuation(
        &self,
        tokens: &TokenBoard,
        player: PlayerId,
        queue: &[i8],
        action: &AiAction,
        depth: usize,
    ) -> (f64, f64) {
        let outcome = apply_move(self.board, tokens, player, action.token, action.destination);
        let immediate = score_action(self.board, tokens, player, action, &outcome, &self.config);

        let remaining = without_index(queue, action.queue_index);
        let continuation =
            self.evaluate_queue(&outcome.tokens, player, &remaining, depth.saturating_sub(1));

        (immediate + self.config.discount * continuation, immediate)
    }
}

fn without_index(queue: &[i8], index: usize) -> SmallVec<[i8; 4]> {
    queue
        .iter()
        .enumerate()
        .filter(|&(i, _)| i != index)
        .map(|(_, &v)| v)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::position::{NodeId, Position};
    use crate::core::tokens::TokenId;

    fn on(id: NodeId) -> Position {
        Position::On(id)
    }

    #[test]
    fn test_no_legal_action_returns_none() {
        let board = BoardGraph::standard();
        let planner = AiPlanner::new(&board);
        let mut tokens = TokenBoard::new();
        for token in TokenId::all() {
            tokens.set_position(PlayerId::TWO, token, Position::Home);
        }

        assert_eq!(planner.choose_best(&tokens, PlayerId::TWO, &[3]), None);
        assert_eq!(planner.choose_best(&tokens, PlayerId::TWO, &[]), None);
    }

    #[test]
    fn test_takes_the_winning_move() {
        let board = BoardGraph::standard();
        let planner = AiPlanner::new(&board);
        let mut tokens = TokenBoard::new();
        for token in TokenId::all().take(3) {
            tokens.set_position(PlayerId::ONE, token, Position::Home);
        }
        tokens.set_position(PlayerId::ONE, TokenId(3), on(NodeId::M18));

        let action = planner.choose_best(&tokens, PlayerId::ONE, &[3]).unwrap();
        assert_eq!(action.destination, Position::Home);
    }

    #[test]
    fn test_prefers_capture() {
        let board = BoardGraph::standard();
        let planner = AiPlanner::new(&board);
        let mut tokens = TokenBoard::new();
        tokens.set_position(PlayerId::ONE, TokenId(0), on(NodeId::M5));
        tokens.set_position(PlayerId::TWO, TokenId(0), on(NodeId::M8));

        let action = planner.choose_best(&tokens, PlayerId::ONE, &[3]).unwrap();
        assert_eq!(action.token, TokenId(0));
        assert_eq!(action.destination, on(NodeId::M8));
    }

    #[test]
    fn test_search_is_deterministic() {
        let board = BoardGraph::standard();
        let planner = AiPlanner::new(&board);
        let mut tokens = TokenBoard::new();
        tokens.set_position(PlayerId::ONE, TokenId(0), on(NodeId::M4));
        tokens.set_position(PlayerId::TWO, TokenId(1), on(NodeId::M11));

        let first = planner.choose_best(&tokens, PlayerId::ONE, &[2, 5]);
        for _ in 0..5 {
            assert_eq!(planner.choose_best(&tokens, PlayerId::ONE, &[2, 5]), first);
        }
    }

    #[test]
    fn test_multi_value_queue_always_finds_action() {
        let board = BoardGraph::standard();
        let planner = AiPlanner::new(&board);
        let tokens = TokenBoard::new();

        // Fresh board: every positive value has at least the entry move.
        let action = planner.choose_best(&tokens, PlayerId::TWO, &[2, 3]);
        assert!(action.is_some());
    }

    #[test]
    fn test_evaluate_queue_penalizes_stuck_player() {
        let board = BoardGraph::standard();
        let planner = AiPlanner::new(&board);
        let mut tokens = TokenBoard::new();
        for token in TokenId::all() {
            tokens.set_position(PlayerId::ONE, token, Position::Home);
        }

        // Won position dominates everything else, stuck or not.
        let value = planner.evaluate_queue(&tokens, PlayerId::ONE, &[-1, -1], 2);
        assert_eq!(value, planner.config().win_score);

        // A genuinely stuck player: three home, one at start, only Back Do
        // queued (no token on course, so no legal retreat).
        let mut stuck = TokenBoard::new();
        for token in TokenId::all().take(3) {
            stuck.set_position(PlayerId::ONE, token, Position::Home);
        }
        let base = planner.evaluate_queue(&stuck, PlayerId::ONE, &[], 0);
        let penalized = planner.evaluate_queue(&stuck, PlayerId::ONE, &[-1, -1], 2);
        assert_eq!(penalized, base - 2.0 * planner.config().stuck_penalty);
    }

    #[test]
    fn test_depth_is_bounded_by_queue_length() {
        let board = BoardGraph::standard();
        let planner = AiPlanner::new(&board);
        let tokens = TokenBoard::new();

        // Long queue exercises the depth cap rather than the queue length.
        let queue = [1, 2, 3, 4, 5, 5];
        let action = planner.choose_best(&tokens, PlayerId::ONE, &queue);
        assert!(action.is_some());
    }
}
