//! The compact "cubie" byte encoding used by smart-cube hardware:
//! parallel permutation/orientation arrays in canonical slot order.

use itertools::izip;
use thiserror::Error;

use crate::cube::Cube;
use crate::pieces::{
    CornerLocation, CornerOrientation, CornerPiece, EdgeLocation, EdgeOrientation, EdgePiece,
};

/// Flat byte-array form of a cube state. `cp`/`ep` are permutation
/// indices into the canonical location order; `co`/`eo` are
/// orientation indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cubies {
    pub cp: [u8; 8],
    pub co: [u8; 8],
    pub ep: [u8; 12],
    pub eo: [u8; 12],
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CubieError {
    #[error("corner permutation byte {value} at slot {slot} is out of range 0..8")]
    CornerPermutation { slot: usize, value: u8 },
    #[error("corner orientation byte {value} at slot {slot} is out of range 0..3")]
    CornerOrientation { slot: usize, value: u8 },
    #[error("edge permutation byte {value} at slot {slot} is out of range 0..12")]
    EdgePermutation { slot: usize, value: u8 },
    #[error("edge orientation byte {value} at slot {slot} is out of range 0..2")]
    EdgeOrientation { slot: usize, value: u8 },
}

impl Cube {
    /// Encode this state as its cubie byte arrays.
    #[must_use]
    pub fn cubies(&self) -> Cubies {
        let corners = self.corners.all();
        let edges = self.edges.all();
        Cubies {
            cp: corners.map(|piece| piece.location.index() as u8),
            co: corners.map(|piece| piece.orientation.index() as u8),
            ep: edges.map(|piece| piece.location.index() as u8),
            eo: edges.map(|piece| piece.orientation.index() as u8),
        }
    }
}

impl TryFrom<&Cubies> for Cube {
    type Error = CubieError;

    fn try_from(cubies: &Cubies) -> Result<Cube, CubieError> {
        let mut cube = Cube::default();

        for (index, slot, &permutation, &orientation) in izip!(
            0..,
            CornerLocation::ALL,
            &cubies.cp,
            &cubies.co
        ) {
            let location = CornerLocation::from_index(usize::from(permutation)).ok_or(
                CubieError::CornerPermutation {
                    slot: index,
                    value: permutation,
                },
            )?;
            let orientation = CornerOrientation::from_index(usize::from(orientation)).ok_or(
                CubieError::CornerOrientation {
                    slot: index,
                    value: orientation,
                },
            )?;
            cube.corners[slot] = CornerPiece::new(location, orientation);
        }

        for (index, slot, &permutation, &orientation) in izip!(
            0..,
            EdgeLocation::ALL,
            &cubies.ep,
            &cubies.eo
        ) {
            let location = EdgeLocation::from_index(usize::from(permutation)).ok_or(
                CubieError::EdgePermutation {
                    slot: index,
                    value: permutation,
                },
            )?;
            let orientation = EdgeOrientation::from_index(usize::from(orientation)).ok_or(
                CubieError::EdgeOrientation {
                    slot: index,
                    value: orientation,
                },
            )?;
            cube.edges[slot] = EdgePiece::new(location, orientation);
        }

        Ok(cube)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::moves::MoveSeries;

    #[test]
    fn solved_cubies_are_identity() {
        let cubies = Cube::default().cubies();
        assert_eq!(cubies.cp, [0, 1, 2, 3, 4, 5, 6, 7]);
        assert_eq!(cubies.co, [0; 8]);
        assert_eq!(cubies.ep, [0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11]);
        assert_eq!(cubies.eo, [0; 12]);
    }

    #[test]
    fn cubies_round_trip() {
        let scramble: MoveSeries = "F R U' B2 L D' F2 R'".parse().unwrap();
        let cube = Cube::from_moves(&scramble);
        assert_eq!(Cube::try_from(&cube.cubies()).unwrap(), cube);
    }

    #[test]
    fn out_of_range_bytes_are_rejected() {
        let mut cubies = Cube::default().cubies();
        cubies.cp[3] = 8;
        assert_eq!(
            Cube::try_from(&cubies),
            Err(CubieError::CornerPermutation { slot: 3, value: 8 })
        );

        let mut cubies = Cube::default().cubies();
        cubies.co[0] = 3;
        assert_eq!(
            Cube::try_from(&cubies),
            Err(CubieError::CornerOrientation { slot: 0, value: 3 })
        );

        let mut cubies = Cube::default().cubies();
        cubies.ep[11] = 12;
        assert_eq!(
            Cube::try_from(&cubies),
            Err(CubieError::EdgePermutation { slot: 11, value: 12 })
        );

        let mut cubies = Cube::default().cubies();
        cubies.eo[5] = 2;
        assert_eq!(
            Cube::try_from(&cubies),
            Err(CubieError::EdgeOrientation { slot: 5, value: 2 })
        );
    }
}
