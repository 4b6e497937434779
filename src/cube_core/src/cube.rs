//! The aggregate cube state: a total mapping from each slot to the
//! piece occupying it, plus the reachability invariant checks.

use std::ops::{Index, IndexMut};

use thiserror::Error;

use crate::pieces::{CornerLocation, CornerPiece, EdgeLocation, EdgePiece};

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("expected exactly {expected} pieces, got {actual}")]
pub struct PieceCountError {
    pub expected: usize,
    pub actual: usize,
}

/// The twelve edge pieces, indexed by the slot they currently occupy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EdgePieces(pub(crate) [EdgePiece; 12]);

impl Default for EdgePieces {
    fn default() -> EdgePieces {
        EdgePieces(EdgeLocation::ALL.map(EdgePiece::solved))
    }
}

impl Index<EdgeLocation> for EdgePieces {
    type Output = EdgePiece;

    fn index(&self, location: EdgeLocation) -> &EdgePiece {
        &self.0[location.index()]
    }
}

impl IndexMut<EdgeLocation> for EdgePieces {
    fn index_mut(&mut self, location: EdgeLocation) -> &mut EdgePiece {
        &mut self.0[location.index()]
    }
}

impl EdgePieces {
    /// The pieces in canonical slot order.
    #[must_use]
    pub fn all(&self) -> [EdgePiece; 12] {
        self.0
    }

    /// Replace every piece at once. Fails unless `pieces` has exactly
    /// one entry per slot.
    pub fn set_all(&mut self, pieces: &[EdgePiece]) -> Result<(), PieceCountError> {
        let replacement: [EdgePiece; 12] =
            pieces.try_into().map_err(|_| PieceCountError {
                expected: 12,
                actual: pieces.len(),
            })?;
        self.0 = replacement;
        Ok(())
    }
}

/// The eight corner pieces, indexed by the slot they currently occupy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CornerPieces(pub(crate) [CornerPiece; 8]);

impl Default for CornerPieces {
    fn default() -> CornerPieces {
        CornerPieces(CornerLocation::ALL.map(CornerPiece::solved))
    }
}

impl Index<CornerLocation> for CornerPieces {
    type Output = CornerPiece;

    fn index(&self, location: CornerLocation) -> &CornerPiece {
        &self.0[location.index()]
    }
}

impl IndexMut<CornerLocation> for CornerPieces {
    fn index_mut(&mut self, location: CornerLocation) -> &mut CornerPiece {
        &mut self.0[location.index()]
    }
}

impl CornerPieces {
    /// The pieces in canonical slot order.
    #[must_use]
    pub fn all(&self) -> [CornerPiece; 8] {
        self.0
    }

    /// Replace every piece at once. Fails unless `pieces` has exactly
    /// one entry per slot.
    pub fn set_all(&mut self, pieces: &[CornerPiece]) -> Result<(), PieceCountError> {
        let replacement: [CornerPiece; 8] =
            pieces.try_into().map_err(|_| PieceCountError {
                expected: 8,
                actual: pieces.len(),
            })?;
        self.0 = replacement;
        Ok(())
    }
}

/// An immutable-by-convention snapshot of a 3x3 cube: both a bijection
/// on slots (the permutation) and a per-slot orientation.
///
/// The default value is the solved cube, where every slot holds its
/// own piece with correct orientation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Cube {
    pub edges: EdgePieces,
    pub corners: CornerPieces,
}

impl Cube {
    #[must_use]
    pub fn solved() -> Cube {
        Cube::default()
    }

    #[must_use]
    pub fn is_solved(&self) -> bool {
        *self == Cube::default()
    }

    /// The number of pieces that are both in their native slot and
    /// correctly oriented.
    #[must_use]
    pub fn solved_piece_count(&self) -> usize {
        let edges = EdgeLocation::ALL
            .iter()
            .filter(|&&slot| self.edges[slot] == EdgePiece::solved(slot))
            .count();
        let corners = CornerLocation::ALL
            .iter()
            .filter(|&&slot| self.corners[slot] == CornerPiece::solved(slot))
            .count();
        edges + corners
    }

    /// Whether this state is reachable by legal moves: edge flips sum
    /// to zero mod 2, corner twists sum to zero mod 3, and the
    /// combined permutation parity is even.
    #[must_use]
    pub fn satisfies_invariants(&self) -> bool {
        self.edge_orientation_sum() == 0
            && self.corner_orientation_sum() == 0
            && self.permutation_swaps() % 2 == 0
    }

    pub(crate) fn edge_orientation_sum(&self) -> usize {
        self.edges
            .0
            .iter()
            .map(|piece| piece.orientation.index())
            .sum::<usize>()
            % 2
    }

    pub(crate) fn corner_orientation_sum(&self) -> usize {
        self.corners
            .0
            .iter()
            .map(|piece| piece.orientation.index())
            .sum::<usize>()
            % 3
    }

    /// Total transposition count across both permutations, computed
    /// via cycle decomposition: a cycle of length `L` contributes
    /// `L - 1` transpositions.
    pub(crate) fn permutation_swaps(&self) -> usize {
        count_swaps(self.edges.0.map(|piece| piece.location.index()))
            + count_swaps(self.corners.0.map(|piece| piece.location.index()))
    }
}

fn count_swaps<const N: usize>(native_slots: [usize; N]) -> usize {
    let mut seen = [false; N];
    let mut swaps = 0;

    for start in 0..N {
        if seen[start] {
            continue;
        }

        // Walk the cycle this slot belongs to until it closes.
        let mut cur = start;
        let mut cycle_length = 0;
        while !seen[cur] {
            seen[cur] = true;
            cycle_length += 1;
            cur = native_slots[cur];
        }

        swaps += cycle_length - 1;
    }

    swaps
}
