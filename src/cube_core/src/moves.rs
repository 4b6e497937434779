//! Face turns, move sequences, their textual form, and the move
//! application algebra.
//!
//! Orientation deltas follow Kociemba's definition: only F and B
//! quarter turns change edge orientation, and U/D turns never change
//! corner orientation.
//! <https://web.archive.org/web/20220124065317/https://kociemba.org/math/cubielevel.htm>

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::cube::Cube;
use crate::pieces::{CornerLocation, CornerOrientation, Face};
use crate::pieces::{EdgeLocation, FaceParseError};

/// How far a face is turned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Magnitude {
    ClockwiseQuarterTurn,
    HalfTurn,
    CounterClockwiseQuarterTurn,
}

impl Magnitude {
    #[must_use]
    pub fn inverse(self) -> Magnitude {
        match self {
            Magnitude::ClockwiseQuarterTurn => Magnitude::CounterClockwiseQuarterTurn,
            Magnitude::CounterClockwiseQuarterTurn => Magnitude::ClockwiseQuarterTurn,
            Magnitude::HalfTurn => Magnitude::HalfTurn,
        }
    }

    fn suffix(self) -> &'static str {
        match self {
            Magnitude::ClockwiseQuarterTurn => "",
            Magnitude::CounterClockwiseQuarterTurn => "'",
            Magnitude::HalfTurn => "2",
        }
    }
}

/// A single face turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub face: Face,
    pub magnitude: Magnitude,
}

impl Move {
    /// A clockwise quarter turn of `face`.
    #[must_use]
    pub fn new(face: Face) -> Move {
        Move::with_magnitude(face, Magnitude::ClockwiseQuarterTurn)
    }

    #[must_use]
    pub fn with_magnitude(face: Face, magnitude: Magnitude) -> Move {
        Move { face, magnitude }
    }

    #[must_use]
    pub fn inverse(self) -> Move {
        Move::with_magnitude(self.face, self.magnitude.inverse())
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.face, self.magnitude.suffix())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MoveParseError {
    #[error("empty move token")]
    Empty,
    #[error(transparent)]
    Face(#[from] FaceParseError),
    #[error("`{0}` is not a move token, expected `<face>`, `<face>'` or `<face>2`")]
    BadToken(String),
}

impl FromStr for Move {
    type Err = MoveParseError;

    fn from_str(s: &str) -> Result<Move, MoveParseError> {
        let mut chars = s.chars();
        let face = Face::from_char(chars.next().ok_or(MoveParseError::Empty)?)?;
        let magnitude = match chars.as_str() {
            "" => Magnitude::ClockwiseQuarterTurn,
            "'" => Magnitude::CounterClockwiseQuarterTurn,
            "2" => Magnitude::HalfTurn,
            _ => return Err(MoveParseError::BadToken(s.to_owned())),
        };
        Ok(Move::with_magnitude(face, magnitude))
    }
}

/// An ordered sequence of moves.
///
/// Serializes as space-joined move tokens, e.g. `R U R' U'`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct MoveSeries(Vec<Move>);

impl MoveSeries {
    #[must_use]
    pub fn new(moves: Vec<Move>) -> MoveSeries {
        MoveSeries(moves)
    }

    #[must_use]
    pub fn moves(&self) -> &[Move] {
        &self.0
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The sequence that undoes this one: reversed order, each move
    /// inverted.
    #[must_use]
    pub fn inverse(&self) -> MoveSeries {
        MoveSeries(self.0.iter().rev().map(|mv| mv.inverse()).collect())
    }
}

impl FromIterator<Move> for MoveSeries {
    fn from_iter<I: IntoIterator<Item = Move>>(iter: I) -> MoveSeries {
        MoveSeries(iter.into_iter().collect())
    }
}

impl IntoIterator for MoveSeries {
    type Item = Move;
    type IntoIter = std::vec::IntoIter<Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl fmt::Display for MoveSeries {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, mv) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{mv}")?;
        }
        Ok(())
    }
}

impl FromStr for MoveSeries {
    type Err = MoveParseError;

    fn from_str(s: &str) -> Result<MoveSeries, MoveParseError> {
        s.split_whitespace().map(Move::from_str).collect()
    }
}

impl Cube {
    /// Apply a single move in place.
    pub fn apply(&mut self, mv: Move) {
        self.apply_all(&[mv]);
    }

    /// Apply a sequence of moves in place, in order.
    pub fn apply_all(&mut self, moves: &[Move]) {
        // Half turns are realized as two clockwise quarter turns; the
        // per-quarter-turn algorithm never sees one.
        for mv in moves.iter().flat_map(|&mv| expand_half_turn(mv)) {
            self.apply_quarter_turn(mv);
        }
    }

    pub fn apply_series(&mut self, series: &MoveSeries) {
        self.apply_all(series.moves());
    }

    /// Non-destructive counterpart of [`apply`](Cube::apply).
    #[must_use]
    pub fn applying(&self, mv: Move) -> Cube {
        let mut cube = *self;
        cube.apply(mv);
        cube
    }

    #[must_use]
    pub fn applying_all(&self, moves: &[Move]) -> Cube {
        let mut cube = *self;
        cube.apply_all(moves);
        cube
    }

    #[must_use]
    pub fn applying_series(&self, series: &MoveSeries) -> Cube {
        self.applying_all(series.moves())
    }

    /// The state obtained by applying `series` to the solved cube.
    #[must_use]
    pub fn from_moves(series: &MoveSeries) -> Cube {
        Cube::default().applying_series(series)
    }

    fn apply_quarter_turn(&mut self, mv: Move) {
        debug_assert!(mv.magnitude != Magnitude::HalfTurn);

        // 1. Alter orientation of the pieces currently on the face.
        if quarter_turn_flips_edges(mv.face) {
            for slot in EdgeLocation::ring(mv.face) {
                self.edges[slot] = self.edges[slot].flipped();
            }
        }
        for slot in CornerLocation::ring(mv.face) {
            let delta = corner_twist_after_clockwise_turn(mv.face, slot);
            self.corners[slot] = self.corners[slot].twisted(delta);
        }

        // 2. Permute, carrying the new orientations to the new slots.
        let clockwise = mv.magnitude == Magnitude::ClockwiseQuarterTurn;
        self.rotate_rings(mv.face, clockwise);
    }

    fn rotate_rings(&mut self, face: Face, clockwise: bool) {
        // Reads come from a pre-rotation snapshot; shifting in place
        // through already-moved neighbors would be wrong.
        let mut rotated = *self;

        let mut edge_ring = EdgeLocation::ring(face);
        let mut corner_ring = CornerLocation::ring(face);
        if !clockwise {
            edge_ring.reverse();
            corner_ring.reverse();
        }

        for (index, &slot) in edge_ring.iter().enumerate() {
            let next = edge_ring[(index + 1) % edge_ring.len()];
            rotated.edges[next] = self.edges[slot];
        }
        for (index, &slot) in corner_ring.iter().enumerate() {
            let next = corner_ring[(index + 1) % corner_ring.len()];
            rotated.corners[next] = self.corners[slot];
        }

        *self = rotated;
    }
}

fn expand_half_turn(mv: Move) -> impl Iterator<Item = Move> {
    let (first, second) = if mv.magnitude == Magnitude::HalfTurn {
        let quarter = Move::new(mv.face);
        (quarter, Some(quarter))
    } else {
        (mv, None)
    };
    std::iter::once(first).chain(second)
}

fn quarter_turn_flips_edges(face: Face) -> bool {
    matches!(face, Face::Front | Face::Back)
}

fn corner_twist_after_clockwise_turn(face: Face, slot: CornerLocation) -> CornerOrientation {
    use CornerLocation::{
        BottomLeftBack, BottomLeftFront, BottomRightBack, BottomRightFront, TopLeftBack,
        TopLeftFront, TopRightBack, TopRightFront,
    };
    use CornerOrientation::{Correct, RotatedClockwise, RotatedCounterClockwise};

    match face {
        Face::Top | Face::Bottom => Correct,
        Face::Front => match slot {
            TopRightFront | BottomLeftFront => RotatedCounterClockwise,
            TopLeftFront | BottomRightFront => RotatedClockwise,
            _ => unreachable!("{slot:?} is not on the front face"),
        },
        Face::Back => match slot {
            TopRightBack | BottomLeftBack => RotatedClockwise,
            TopLeftBack | BottomRightBack => RotatedCounterClockwise,
            _ => unreachable!("{slot:?} is not on the back face"),
        },
        Face::Left => match slot {
            TopLeftFront | BottomLeftBack => RotatedCounterClockwise,
            TopLeftBack | BottomLeftFront => RotatedClockwise,
            _ => unreachable!("{slot:?} is not on the left face"),
        },
        Face::Right => match slot {
            TopRightFront | BottomRightBack => RotatedClockwise,
            TopRightBack | BottomRightFront => RotatedCounterClockwise,
            _ => unreachable!("{slot:?} is not on the right face"),
        },
    }
}
