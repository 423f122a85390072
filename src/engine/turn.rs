//! The turn/allowance state machine.
//!
//! A player holds a *throw allowance*, starting at 1 each turn. Throwing
//! consumes one allowance and queues the throw's value; Yut/Mo add one
//! allowance, and so does a capture. Queued values may be played in any
//! order. The turn ends only when the queue is empty and the allowance is
//! spent, at which point control passes and the opponent starts at 1.
//!
//! The Back Do edge case is policy-driven: thrown with no token on course,
//! the value is either queued as a plain Do or dropped entirely, per
//! [`BackDoPolicy`].

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::player::PlayerId;
use crate::throws::{BackDoPolicy, Throw};

/// What became of a recorded throw.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ThrowOutcome {
    /// The value joined the move queue (possibly converted to +1 by the
    /// Back Do policy).
    Queued { value: i8, extra_turn: bool },
    /// An empty-board Back Do was dropped under [`BackDoPolicy::Skip`].
    Skipped,
}

/// Turn state for one game: active player, allowance, and the move queue.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnState {
    active: PlayerId,
    allowance: u8,
    queue: SmallVec<[i8; 4]>,
    back_do_policy: BackDoPolicy,
}

impl TurnState {
    /// Start a game with the given player to move.
    #[must_use]
    pub fn new(starting_player: PlayerId, back_do_policy: BackDoPolicy) -> Self {
        Self {
            active: starting_player,
            allowance: 1,
            queue: SmallVec::new(),
            back_do_policy,
        }
    }

    /// The player whose turn it is.
    #[must_use]
    pub fn active_player(&self) -> PlayerId {
        self.active
    }

    /// Remaining throws this turn.
    #[must_use]
    pub fn allowance(&self) -> u8 {
        self.allowance
    }

    /// Pending throw values, in insertion order. Any entry may be played
    /// next.
    #[must_use]
    pub fn queue(&self) -> &[i8] {
        &self.queue
    }

    /// Whether the active player may throw.
    #[must_use]
    pub fn can_throw(&self) -> bool {
        self.allowance > 0
    }

    /// Record a throw by the active player.
    ///
    /// Consumes one allowance; an extra-turn throw immediately grants one
    /// back. `has_token_on_course` routes the empty-board Back Do through
    /// the configured policy.
    ///
    /// ## Panics
    ///
    /// Panics if called with no allowance left.
    pub fn record_throw(&mut self, throw: &Throw, has_token_on_course: bool) -> ThrowOutcome {
        assert!(self.allowance > 0, "throw recorded with no allowance");
        self.allowance -= 1;
        if throw.extra_turn {
            self.allowance += 1;
        }

        let value = if throw.is_back_do() && !has_token_on_course {
            match self.back_do_policy {
                BackDoPolicy::TreatAsDo => 1,
                BackDoPolicy::Skip => return ThrowOutcome::Skipped,
            }
        } else {
            throw.value
        };

        self.queue.push(value);
        ThrowOutcome::Queued {
            value,
            extra_turn: throw.extra_turn,
        }
    }

    /// Remove and return the queue entry at `index`, chosen by the player
    /// or the AI. Returns `None` for an out-of-range index.
    pub fn take_queued(&mut self, index: usize) -> Option<i8> {
        if index < self.queue.len() {
            Some(self.queue.remove(index))
        } else {
            None
        }
    }

    /// Drop a queue entry that has no usable move (stuck player).
    pub fn discard_queued(&mut self, index: usize) -> Option<i8> {
        self.take_queued(index)
    }

    /// A capture grants one extra throw.
    pub fn note_capture(&mut self) {
        self.allowance += 1;
    }

    /// True when the queue is drained and the allowance spent.
    #[must_use]
    pub fn is_turn_over(&self) -> bool {
        self.queue.is_empty() && self.allowance == 0
    }

    /// Pass control to the opponent if the turn is over.
    ///
    /// Returns true when control changed; the opponent's allowance resets
    /// to 1.
    pub fn try_advance_turn(&mut self) -> bool {
        if !self.is_turn_over() {
            return false;
        }
        self.active = self.active.opponent();
        self.allowance = 1;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::throws::StickFace::{Flat, Round};

    fn throw_of(value: i8) -> Throw {
        let sticks = match value {
            -1 => [Flat, Round, Round, Round],
            1 => [Round, Flat, Round, Round],
            2 => [Flat, Flat, Round, Round],
            3 => [Flat, Flat, Flat, Round],
            4 => [Flat, Flat, Flat, Flat],
            _ => [Round, Round, Round, Round],
        };
        Throw::from_sticks(sticks)
    }

    #[test]
    fn test_simple_turn_cycle() {
        let mut turn = TurnState::new(PlayerId::ONE, BackDoPolicy::TreatAsDo);
        assert!(turn.can_throw());

        let outcome = turn.record_throw(&throw_of(2), false);
        assert_eq!(outcome, ThrowOutcome::Queued { value: 2, extra_turn: false });
        assert!(!turn.can_throw());
        assert!(!turn.is_turn_over());

        assert_eq!(turn.take_queued(0), Some(2));
        assert!(turn.is_turn_over());
        assert!(turn.try_advance_turn());
        assert_eq!(turn.active_player(), PlayerId::TWO);
        assert_eq!(turn.allowance(), 1);
    }

    #[test]
    fn test_extra_turn_keeps_allowance() {
        let mut turn = TurnState::new(PlayerId::ONE, BackDoPolicy::TreatAsDo);

        turn.record_throw(&throw_of(4), true);
        assert_eq!(turn.allowance(), 1);
        turn.record_throw(&throw_of(5), true);
        assert_eq!(turn.allowance(), 1);
        turn.record_throw(&throw_of(3), true);
        assert_eq!(turn.allowance(), 0);

        assert_eq!(turn.queue(), &[4, 5, 3]);
    }

    #[test]
    fn test_queue_is_free_choice_not_fifo() {
        let mut turn = TurnState::new(PlayerId::ONE, BackDoPolicy::TreatAsDo);
        turn.record_throw(&throw_of(4), true);
        turn.record_throw(&throw_of(2), true);

        assert_eq!(turn.take_queued(1), Some(2));
        assert_eq!(turn.queue(), &[4]);
        assert_eq!(turn.take_queued(5), None);
    }

    #[test]
    fn test_capture_grants_extra_throw() {
        let mut turn = TurnState::new(PlayerId::ONE, BackDoPolicy::TreatAsDo);
        turn.record_throw(&throw_of(1), false);
        turn.take_queued(0);

        turn.note_capture();
        assert!(turn.can_throw());
        assert!(!turn.is_turn_over());
        assert!(!turn.try_advance_turn());
    }

    #[test]
    fn test_empty_board_back_do_treat_as_do() {
        let mut turn = TurnState::new(PlayerId::ONE, BackDoPolicy::TreatAsDo);

        let outcome = turn.record_throw(&throw_of(-1), false);
        assert_eq!(outcome, ThrowOutcome::Queued { value: 1, extra_turn: false });
        assert_eq!(turn.queue(), &[1]);
    }

    #[test]
    fn test_empty_board_back_do_skip() {
        let mut turn = TurnState::new(PlayerId::ONE, BackDoPolicy::Skip);

        let outcome = turn.record_throw(&throw_of(-1), false);
        assert_eq!(outcome, ThrowOutcome::Skipped);
        assert!(turn.queue().is_empty());
        // The allowance is still spent: the turn is over.
        assert!(turn.is_turn_over());
    }

    #[test]
    fn test_back_do_with_token_on_course_queues_normally() {
        for policy in [BackDoPolicy::TreatAsDo, BackDoPolicy::Skip] {
            let mut turn = TurnState::new(PlayerId::ONE, policy);
            let outcome = turn.record_throw(&throw_of(-1), true);
            assert_eq!(outcome, ThrowOutcome::Queued { value: -1, extra_turn: false });
            assert_eq!(turn.queue(), &[-1]);
        }
    }

    #[test]
    fn test_turn_never_ends_with_queued_values() {
        let mut turn = TurnState::new(PlayerId::ONE, BackDoPolicy::TreatAsDo);
        turn.record_throw(&throw_of(3), false);

        assert!(!turn.is_turn_over());
        assert!(!turn.try_advance_turn());
        assert_eq!(turn.active_player(), PlayerId::ONE);
    }

    #[test]
    #[should_panic(expected = "no allowance")]
    fn test_throw_without_allowance_panics() {
        let mut turn = TurnState::new(PlayerId::ONE, BackDoPolicy::TreatAsDo);
        turn.record_throw(&throw_of(1), false);
        turn.record_throw(&throw_of(1), false);
    }

    #[test]
    fn test_serde_round_trip() {
        let mut turn = TurnState::new(PlayerId::TWO, BackDoPolicy::Skip);
        turn.record_throw(&throw_of(5), false);

        let json = serde_json::to_string(&turn).unwrap();
        let back: TurnState = serde_json::from_str(&json).unwrap();
        assert_eq!(turn, back);
    }
}
