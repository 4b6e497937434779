//! The 54-sticker facelet representation and its bijection with
//! [`Cube`].
//!
//! Sticker `i` lives at `9 * face_index + sticker_index`, where
//! sticker 4 is the fixed center of the face. The solved cube encodes
//! as nine `U`s, nine `R`s, and so on in face order.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::cube::Cube;
use crate::pieces::{
    CornerLocation, CornerOrientation, CornerPiece, EdgeLocation, EdgeOrientation, EdgePiece, Face,
};

/// A cube described by the face code shown on each of its 54 stickers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Facelets([Face; 54]);

pub const FACELET_COUNT: usize = 54;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FaceletError {
    #[error("facelet string must be exactly {FACELET_COUNT} stickers, got {0}")]
    InvalidLength(usize),
    #[error("sticker {index}: {source}")]
    InvalidFaceCode {
        index: usize,
        source: crate::pieces::FaceParseError,
    },
    #[error("the stickers at the {0:?} slot match no corner piece")]
    InvalidCorner(CornerLocation),
    #[error("the stickers at the {0:?} slot match no edge piece")]
    InvalidEdge(EdgeLocation),
}

impl Facelets {
    #[must_use]
    pub fn new(values: [Face; 54]) -> Facelets {
        Facelets(values)
    }

    #[must_use]
    pub fn values(&self) -> &[Face; 54] {
        &self.0
    }
}

impl fmt::Display for Facelets {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for face in self.0 {
            write!(f, "{face}")?;
        }
        Ok(())
    }
}

impl FromStr for Facelets {
    type Err = FaceletError;

    fn from_str(s: &str) -> Result<Facelets, FaceletError> {
        let mut values = [Face::Top; 54];
        let mut count = 0;
        for (index, c) in s.chars().enumerate() {
            if index >= FACELET_COUNT {
                return Err(FaceletError::InvalidLength(s.chars().count()));
            }
            values[index] =
                Face::from_char(c).map_err(|source| FaceletError::InvalidFaceCode { index, source })?;
            count += 1;
        }
        if count != FACELET_COUNT {
            return Err(FaceletError::InvalidLength(count));
        }
        Ok(Facelets(values))
    }
}

impl Cube {
    /// Encode this state as its 54 sticker colors.
    #[must_use]
    pub fn facelets(&self) -> Facelets {
        let mut values = [Face::Top; 54];

        for center in Face::ALL {
            values[9 * center.index() + 4] = center;
        }

        for slot in CornerLocation::ALL {
            let corner = self.corners[slot];
            let stickers = corner_facelets(slot);
            let faces = corner.location.reference_faces();
            for twist in 0..3 {
                let sticker = stickers[(corner.orientation.index() + twist) % 3];
                values[sticker] = faces[twist];
            }
        }

        for slot in EdgeLocation::ALL {
            let edge = self.edges[slot];
            let stickers = edge_facelets(slot);
            let faces = edge.location.reference_faces();
            for flip in 0..2 {
                let sticker = stickers[(edge.orientation.index() + flip) % 2];
                values[sticker] = faces[flip];
            }
        }

        Facelets(values)
    }
}

impl TryFrom<&Facelets> for Cube {
    type Error = FaceletError;

    /// Reconstruct the cube state from its stickers.
    ///
    /// Corner orientation is anchored by whichever of the three
    /// stickers shows a top or bottom color; the piece identity then
    /// comes from matching the remaining two stickers against the
    /// corner reference triples. Edges are matched against both the
    /// straight and the swapped sticker pair to recover flip state.
    ///
    /// # Errors
    ///
    /// [`FaceletError::InvalidCorner`] or [`FaceletError::InvalidEdge`]
    /// when some slot shows a sticker combination no real piece has.
    fn try_from(facelets: &Facelets) -> Result<Cube, FaceletError> {
        let values = facelets.values();
        let mut cube = Cube::default();

        for slot in CornerLocation::ALL {
            let stickers = corner_facelets(slot);
            let orientation = CornerOrientation::ALL
                .into_iter()
                .find(|orientation| {
                    matches!(values[stickers[orientation.index()]], Face::Top | Face::Bottom)
                })
                .ok_or(FaceletError::InvalidCorner(slot))?;

            let color1 = values[stickers[(orientation.index() + 1) % 3]];
            let color2 = values[stickers[(orientation.index() + 2) % 3]];
            let piece = CornerLocation::ALL
                .into_iter()
                .find(|location| {
                    let faces = location.reference_faces();
                    faces[1] == color1 && faces[2] == color2
                })
                .ok_or(FaceletError::InvalidCorner(slot))?;

            cube.corners[slot] = CornerPiece::new(piece, orientation);
        }

        for slot in EdgeLocation::ALL {
            let stickers = edge_facelets(slot);
            let pair = [values[stickers[0]], values[stickers[1]]];
            let piece = EdgeLocation::ALL
                .into_iter()
                .find_map(|location| {
                    let faces = location.reference_faces();
                    if pair == faces {
                        Some(EdgePiece::new(location, EdgeOrientation::Correct))
                    } else if pair == [faces[1], faces[0]] {
                        Some(EdgePiece::new(location, EdgeOrientation::Flipped))
                    } else {
                        None
                    }
                })
                .ok_or(FaceletError::InvalidEdge(slot))?;

            cube.edges[slot] = piece;
        }

        Ok(cube)
    }
}

// Sticker indices per slot, in the same clockwise order as the slot's
// reference faces.
fn corner_facelets(slot: CornerLocation) -> [usize; 3] {
    match slot {
        CornerLocation::TopRightFront => [8, 9, 20],
        CornerLocation::TopLeftFront => [6, 18, 38],
        CornerLocation::TopLeftBack => [0, 36, 47],
        CornerLocation::TopRightBack => [2, 45, 11],
        CornerLocation::BottomRightFront => [29, 26, 15],
        CornerLocation::BottomLeftFront => [27, 44, 24],
        CornerLocation::BottomLeftBack => [33, 53, 42],
        CornerLocation::BottomRightBack => [35, 17, 51],
    }
}

fn edge_facelets(slot: EdgeLocation) -> [usize; 2] {
    match slot {
        EdgeLocation::TopRight => [5, 10],
        EdgeLocation::TopFront => [7, 19],
        EdgeLocation::TopLeft => [3, 37],
        EdgeLocation::TopBack => [1, 46],
        EdgeLocation::BottomRight => [32, 16],
        EdgeLocation::BottomFront => [28, 25],
        EdgeLocation::BottomLeft => [30, 43],
        EdgeLocation::BottomBack => [34, 52],
        EdgeLocation::MiddleRightFront => [23, 12],
        EdgeLocation::MiddleLeftFront => [21, 41],
        EdgeLocation::MiddleLeftBack => [50, 39],
        EdgeLocation::MiddleRightBack => [48, 14],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::moves::MoveSeries;

    pub const SOLVED_FACELETS: &str =
        "UUUUUUUUURRRRRRRRRFFFFFFFFFDDDDDDDDDLLLLLLLLLBBBBBBBBB";

    #[test]
    fn solved_encodes_to_face_blocks() {
        assert_eq!(Cube::default().facelets().to_string(), SOLVED_FACELETS);
    }

    #[test]
    fn string_round_trip() {
        let facelets: Facelets = SOLVED_FACELETS.parse().unwrap();
        assert_eq!(facelets.to_string(), SOLVED_FACELETS);
    }

    #[test]
    fn wrong_length_is_rejected() {
        assert_eq!(
            "UUU".parse::<Facelets>(),
            Err(FaceletError::InvalidLength(3))
        );
        let long = "U".repeat(55);
        assert_eq!(
            long.parse::<Facelets>(),
            Err(FaceletError::InvalidLength(55))
        );
    }

    #[test]
    fn bad_face_code_is_rejected() {
        let mut s = SOLVED_FACELETS.to_owned();
        s.replace_range(10..11, "X");
        assert!(matches!(
            s.parse::<Facelets>(),
            Err(FaceletError::InvalidFaceCode { index: 10, .. })
        ));
    }

    #[test]
    fn decode_round_trips_through_encode() {
        let scramble: MoveSeries = "R U2 F' L B2 D R' F L2 D'".parse().unwrap();
        let cube = Cube::from_moves(&scramble);
        let facelets = cube.facelets();
        assert_eq!(Cube::try_from(&facelets).unwrap(), cube);
        assert_eq!(Cube::try_from(&facelets).unwrap().facelets(), facelets);
    }

    #[test]
    fn impossible_sticker_arrangement_is_rejected() {
        // all nine stickers of every face showing U: no corner can
        // match a triple of three identical colors
        let all_top = Facelets::new([Face::Top; 54]);
        assert!(matches!(
            Cube::try_from(&all_top),
            Err(FaceletError::InvalidCorner(_))
        ));

        // swap two stickers of a single edge with a color pair no
        // edge has (U next to D never occurs)
        let mut values = *Cube::default().facelets().values();
        values[5] = Face::Top;
        values[10] = Face::Bottom;
        assert_eq!(
            Cube::try_from(&Facelets::new(values)),
            Err(FaceletError::InvalidEdge(EdgeLocation::TopRight))
        );
    }
}
