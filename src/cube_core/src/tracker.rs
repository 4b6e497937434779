//! Live solve progress: a stack of the moves still needed to return
//! to solved, collapsed under move-cancellation rules as physical
//! moves stream in.

use crate::moves::{Magnitude, Move, MoveSeries};

/// Tracks the minimal remaining undo sequence while a human executes
/// (or mis-executes) a suggested solution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolveTracker {
    // next move to apply on top
    stack: Vec<Move>,
}

impl SolveTracker {
    /// Start tracking `solution`, the move sequence that solves the
    /// cube from its current state.
    #[must_use]
    pub fn new(solution: &MoveSeries) -> SolveTracker {
        SolveTracker {
            stack: solution.moves().iter().rev().copied().collect(),
        }
    }

    /// The pending moves, next-to-apply first.
    pub fn remaining(&self) -> impl DoubleEndedIterator<Item = Move> + '_ {
        self.stack.iter().rev().copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.stack.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }

    /// Record a physically applied move, collapsing it against the
    /// pending stack instead of merely appending.
    pub fn apply(&mut self, mv: Move) {
        let Some(next) = self.stack.pop() else {
            // nothing was pending; the move itself must now be undone
            self.stack.push(mv.inverse());
            return;
        };

        if next == mv {
            // exactly the expected step; consumed
        } else if next.face == mv.face {
            if next.magnitude == Magnitude::HalfTurn {
                // one of the two like quarter turns has been supplied,
                // one more of the same is still needed
                self.stack.push(mv);
            } else {
                // the move went the wrong way; a half turn now
                // corrects it in one step
                self.stack
                    .push(Move::with_magnitude(mv.face, Magnitude::HalfTurn));
            }
        } else {
            // unexpected face: the old obligation stays pending and
            // the new move must be undone first
            self.stack.push(next);
            self.stack.push(mv.inverse());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tracker(solution: &str) -> SolveTracker {
        SolveTracker::new(&solution.parse().unwrap())
    }

    fn mv(token: &str) -> Move {
        token.parse().unwrap()
    }

    fn remaining(tracker: &SolveTracker) -> String {
        tracker.remaining().collect::<MoveSeries>().to_string()
    }

    #[test]
    fn following_the_solution_empties_the_tracker() {
        let mut t = tracker("U R");
        assert_eq!(t.len(), 2);
        t.apply(mv("U"));
        assert_eq!(remaining(&t), "R");
        t.apply(mv("R"));
        assert!(t.is_empty());
    }

    #[test]
    fn a_move_and_its_undo_cancel() {
        let mut t = tracker("U R");
        t.apply(mv("U"));
        t.apply(mv("U'"));
        // U' went the wrong way relative to the pending R... no:
        // after U the stack holds R; U' is an unexpected face move
        assert_eq!(remaining(&t), "U R");
        t.apply(mv("U"));
        t.apply(mv("R"));
        assert!(t.is_empty());
    }

    #[test]
    fn empty_tracker_accumulates_inverses() {
        let mut t = tracker("");
        t.apply(mv("F"));
        assert_eq!(remaining(&t), "F'");
        t.apply(mv("D2"));
        assert_eq!(remaining(&t), "D2 F'");
    }

    #[test]
    fn a_move_followed_by_its_own_undo_leaves_nothing_pending() {
        let mut t = tracker("");
        t.apply(mv("U"));
        t.apply(mv("U'"));
        assert!(t.is_empty());
    }

    #[test]
    fn unrelated_move_grows_by_one_obligation() {
        let mut t = tracker("U R");
        t.apply(mv("F"));
        assert_eq!(remaining(&t), "F' U R");
        assert_eq!(t.len(), 3);
    }

    #[test]
    fn wrong_way_quarter_turn_becomes_half_turn() {
        // expected U, got U': a half turn now fixes it in one step
        let mut t = tracker("U");
        t.apply(mv("U'"));
        assert_eq!(remaining(&t), "U2");
        t.apply(mv("U2"));
        assert!(t.is_empty());
    }

    #[test]
    fn half_turn_accepts_two_like_quarter_turns() {
        let mut t = tracker("R2");
        t.apply(mv("R"));
        assert_eq!(remaining(&t), "R");
        t.apply(mv("R"));
        assert!(t.is_empty());

        let mut t = tracker("R2");
        t.apply(mv("R'"));
        assert_eq!(remaining(&t), "R'");
        t.apply(mv("R'"));
        assert!(t.is_empty());
    }

    #[test]
    fn tracked_moves_solve_the_cube() {
        // simulate a solve with a detour and check the tracker's
        // remaining moves always solve the live cube
        let scramble: MoveSeries = "F2 U' R".parse().unwrap();
        let solution = scramble.inverse();
        let mut cube = crate::cube::Cube::from_moves(&scramble);
        let mut t = SolveTracker::new(&solution);

        for applied in [mv("R'"), mv("F"), mv("F'"), mv("U"), mv("F2")] {
            cube.apply(applied);
            t.apply(applied);
            let rest: MoveSeries = t.remaining().collect();
            assert!(cube.applying_series(&rest).is_solved());
        }
        assert!(cube.is_solved());
        assert!(t.is_empty());
    }
}
