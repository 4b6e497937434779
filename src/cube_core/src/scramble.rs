//! Uniformly random, legally reachable cube states.

use fastrand::Rng;
use log::debug;

use crate::cube::Cube;
use crate::pieces::{CornerLocation, CornerOrientation, EdgeLocation, EdgeOrientation};

impl Cube {
    /// A uniformly random state reachable by legal moves.
    #[must_use]
    pub fn scrambled() -> Cube {
        Cube::scrambled_with(&mut Rng::new())
    }

    /// Like [`scrambled`](Cube::scrambled), with a caller-supplied RNG
    /// for reproducibility.
    #[must_use]
    pub fn scrambled_with(rng: &mut Rng) -> Cube {
        let mut cube = Cube::default();
        cube.shuffle_orientations(rng);
        cube.shuffle_permutations(rng);
        cube
    }

    fn shuffle_orientations(&mut self, rng: &mut Rng) {
        for slot in EdgeLocation::ALL {
            self.edges[slot].orientation = EdgeOrientation::ALL[rng.usize(..EdgeOrientation::ALL.len())];
        }
        // Zero the flip sum by adjusting one random piece by the
        // deficit.
        let parity = self.edge_orientation_sum();
        if parity != 0 {
            let slot = EdgeLocation::ALL[rng.usize(..EdgeLocation::ALL.len())];
            let adjustment = EdgeOrientation::ALL[(2 - parity) % 2];
            let piece = &mut self.edges[slot];
            piece.orientation = piece.orientation.compose(adjustment);
        }
        debug_assert_eq!(self.edge_orientation_sum(), 0);

        for slot in CornerLocation::ALL {
            self.corners[slot].orientation =
                CornerOrientation::ALL[rng.usize(..CornerOrientation::ALL.len())];
        }
        let parity = self.corner_orientation_sum();
        if parity != 0 {
            let slot = CornerLocation::ALL[rng.usize(..CornerLocation::ALL.len())];
            let adjustment = CornerOrientation::ALL[(3 - parity) % 3];
            let piece = &mut self.corners[slot];
            piece.orientation = piece.orientation.compose(adjustment);
        }
        debug_assert_eq!(self.corner_orientation_sum(), 0);
    }

    fn shuffle_permutations(&mut self, rng: &mut Rng) {
        // Rejection loop: the chance of drawing odd combined parity
        // halves on each retry, and capping attempts could hand back
        // an unreachable state, so this must not be bounded.
        loop {
            rng.shuffle(&mut self.edges.0);
            rng.shuffle(&mut self.corners.0);
            if self.permutation_swaps() % 2 == 0 {
                break;
            }
            debug!("scramble permutation has odd parity, reshuffling");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test_log::test]
    fn scrambles_are_reachable_states() {
        let mut rng = Rng::with_seed(0x5eed);
        for _ in 0..100 {
            let cube = Cube::scrambled_with(&mut rng);
            assert!(cube.satisfies_invariants());
        }
    }

    #[test_log::test]
    fn scrambles_differ_from_solved() {
        // a scramble landing on the solved state is a 1-in-43
        // quintillion event per draw
        let mut rng = Rng::with_seed(42);
        for _ in 0..100 {
            assert!(!Cube::scrambled_with(&mut rng).is_solved());
        }
    }

    #[test_log::test]
    fn seeded_scrambles_are_deterministic() {
        let a = Cube::scrambled_with(&mut Rng::with_seed(7));
        let b = Cube::scrambled_with(&mut Rng::with_seed(7));
        assert_eq!(a, b);
    }
}
