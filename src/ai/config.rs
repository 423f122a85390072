//! AI tuning parameters.

use serde::{Deserialize, Serialize};

/// Weights and bounds for the heuristic planner.
///
/// Board-state weights feed [`eval::evaluate_board`](super::eval::evaluate_board);
/// action weights feed the immediate score of a candidate move; the rest
/// bound the queue search.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AiConfig {
    // === Board-state evaluation ===
    /// Per home-token differential.
    pub home_weight: f64,
    /// Per point of summed race progress differential.
    pub progress_weight: f64,
    /// Per token-at-start differential (opponent at start is good).
    pub start_weight: f64,
    /// Scales the exposure differential (opponent exposure is good).
    pub vulnerability_weight: f64,
    /// Scales the capture-potential differential.
    pub capture_potential_weight: f64,
    /// Per threatened token-on-cell inside the exposure sum.
    pub vulnerability_cell_weight: f64,
    /// Throw values that threaten a cell: 1..=threat_range steps away.
    pub threat_range: i8,

    // === Immediate action scoring ===
    /// Sentinel for a move that wins outright.
    pub win_score: f64,
    /// Per captured opponent token.
    pub capture_score: f64,
    /// Per own token brought home by the move.
    pub home_gain_score: f64,
    /// Per opponent token brought home by the move (penalty).
    pub opp_home_gain_score: f64,
    /// Per own token leaving `Start`.
    pub start_reduction_score: f64,
    /// Per token moving in the stack.
    pub stack_score: f64,
    /// Per point of destination progress.
    pub progress_score: f64,
    /// Bonus when the branch shortcut was taken.
    pub branch_score: f64,

    // === Queue search ===
    /// Discount on the recursively evaluated continuation.
    pub discount: f64,
    /// Penalty per unusable queued value when no legal action exists.
    pub stuck_penalty: f64,
    /// Search depth cap in plies.
    pub max_depth: usize,
    /// Near-tie margin broken in favor of the higher immediate score.
    pub tie_epsilon: f64,
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            home_weight: 720.0,
            progress_weight: 22.0,
            start_weight: 32.0,
            vulnerability_weight: 0.9,
            capture_potential_weight: 36.0,
            vulnerability_cell_weight: 14.0,
            threat_range: 5,
            win_score: 1_000_000.0,
            capture_score: 950.0,
            home_gain_score: 800.0,
            opp_home_gain_score: 500.0,
            start_reduction_score: 160.0,
            stack_score: 45.0,
            progress_score: 14.0,
            branch_score: 8.0,
            discount: 0.86,
            stuck_penalty: 40.0,
            max_depth: 4,
            tie_epsilon: 0.001,
        }
    }
}

impl AiConfig {
    /// Override the search depth cap.
    #[must_use]
    pub fn with_max_depth(mut self, depth: usize) -> Self {
        self.max_depth = depth;
        self
    }

    /// Override the continuation discount.
    #[must_use]
    pub fn with_discount(mut self, discount: f64) -> Self {
        self.discount = discount;
        self
    }
}
