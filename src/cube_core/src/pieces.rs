//! The typed piece model: faces, the twelve edge slots, the eight
//! corner slots, and the orientation groups attached to each.
//!
//! Ordinal order is load-bearing everywhere. Faces enumerate as
//! `U R F D L B`, matching the facelet string layout and the smart
//! cube wire numbering, and the location enums enumerate in the
//! canonical order used by the cubie encoding.

use std::fmt;

use thiserror::Error;

/// One of the six faces of the cube.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Face {
    Top,
    Right,
    Front,
    Bottom,
    Left,
    Back,
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("`{0}` is not a face code, expected one of U R F D L B")]
pub struct FaceParseError(pub char);

impl Face {
    pub const ALL: [Face; 6] = [
        Face::Top,
        Face::Right,
        Face::Front,
        Face::Bottom,
        Face::Left,
        Face::Back,
    ];

    #[must_use]
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_char(c: char) -> Result<Face, FaceParseError> {
        match c {
            'U' => Ok(Face::Top),
            'R' => Ok(Face::Right),
            'F' => Ok(Face::Front),
            'D' => Ok(Face::Bottom),
            'L' => Ok(Face::Left),
            'B' => Ok(Face::Back),
            _ => Err(FaceParseError(c)),
        }
    }

    #[must_use]
    pub fn code(self) -> char {
        match self {
            Face::Top => 'U',
            Face::Right => 'R',
            Face::Front => 'F',
            Face::Bottom => 'D',
            Face::Left => 'L',
            Face::Back => 'B',
        }
    }

    /// Unit offset of the face center from the cube center, for
    /// consumers that lay the cube out in 3D space.
    #[must_use]
    pub fn offset(self) -> [i8; 3] {
        match self {
            Face::Top => [0, 1, 0],
            Face::Bottom => [0, -1, 0],
            Face::Left => [-1, 0, 0],
            Face::Right => [1, 0, 0],
            Face::Front => [0, 0, 1],
            Face::Back => [0, 0, -1],
        }
    }

    /// The physical sticker color of the face, aligned with the GAN
    /// face definitions: a `U` from the cube means the white face.
    #[must_use]
    pub fn color(self) -> FaceColor {
        match self {
            Face::Top => FaceColor::White,
            Face::Right => FaceColor::Red,
            Face::Front => FaceColor::Green,
            Face::Bottom => FaceColor::Yellow,
            Face::Left => FaceColor::Orange,
            Face::Back => FaceColor::Blue,
        }
    }
}

impl fmt::Display for Face {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// The physical color of a face on a standard color scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FaceColor {
    White,
    Red,
    Green,
    Yellow,
    Orange,
    Blue,
}

/// Flip state of an edge piece relative to the slot it occupies,
/// under Kociemba's definition of edge orientation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum EdgeOrientation {
    #[default]
    Correct,
    Flipped,
}

impl EdgeOrientation {
    pub const ALL: [EdgeOrientation; 2] = [EdgeOrientation::Correct, EdgeOrientation::Flipped];

    #[must_use]
    pub fn index(self) -> usize {
        self as usize
    }

    #[must_use]
    pub fn from_index(index: usize) -> Option<EdgeOrientation> {
        Self::ALL.get(index).copied()
    }

    #[must_use]
    pub fn flip(self) -> EdgeOrientation {
        match self {
            EdgeOrientation::Correct => EdgeOrientation::Flipped,
            EdgeOrientation::Flipped => EdgeOrientation::Correct,
        }
    }

    #[must_use]
    pub fn compose(self, other: EdgeOrientation) -> EdgeOrientation {
        match other {
            EdgeOrientation::Correct => self,
            EdgeOrientation::Flipped => self.flip(),
        }
    }

    /// Edge flips are self-inverse.
    #[must_use]
    pub fn invert(self) -> EdgeOrientation {
        self
    }
}

/// Twist state of a corner piece relative to the slot it occupies.
/// Forms the cyclic group of order three under [`compose`].
///
/// [`compose`]: CornerOrientation::compose
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CornerOrientation {
    #[default]
    Correct,
    RotatedClockwise,
    RotatedCounterClockwise,
}

impl CornerOrientation {
    pub const ALL: [CornerOrientation; 3] = [
        CornerOrientation::Correct,
        CornerOrientation::RotatedClockwise,
        CornerOrientation::RotatedCounterClockwise,
    ];

    #[must_use]
    pub fn index(self) -> usize {
        self as usize
    }

    #[must_use]
    pub fn from_index(index: usize) -> Option<CornerOrientation> {
        Self::ALL.get(index).copied()
    }

    /// Addition in the cyclic group: `Correct` is the identity and
    /// two like twists compose into the opposite twist.
    #[must_use]
    pub fn compose(self, other: CornerOrientation) -> CornerOrientation {
        match (self.index() + other.index()) % 3 {
            0 => CornerOrientation::Correct,
            1 => CornerOrientation::RotatedClockwise,
            _ => CornerOrientation::RotatedCounterClockwise,
        }
    }

    #[must_use]
    pub fn invert(self) -> CornerOrientation {
        match self {
            CornerOrientation::Correct => CornerOrientation::Correct,
            CornerOrientation::RotatedClockwise => CornerOrientation::RotatedCounterClockwise,
            CornerOrientation::RotatedCounterClockwise => CornerOrientation::RotatedClockwise,
        }
    }

    #[must_use]
    pub fn subtract(self, other: CornerOrientation) -> CornerOrientation {
        self.compose(other.invert())
    }
}

/// One of the twelve edge slots of the cube, in canonical order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EdgeLocation {
    TopRight,
    TopFront,
    TopLeft,
    TopBack,
    BottomRight,
    BottomFront,
    BottomLeft,
    BottomBack,
    MiddleRightFront,
    MiddleLeftFront,
    MiddleLeftBack,
    MiddleRightBack,
}

impl EdgeLocation {
    pub const ALL: [EdgeLocation; 12] = [
        EdgeLocation::TopRight,
        EdgeLocation::TopFront,
        EdgeLocation::TopLeft,
        EdgeLocation::TopBack,
        EdgeLocation::BottomRight,
        EdgeLocation::BottomFront,
        EdgeLocation::BottomLeft,
        EdgeLocation::BottomBack,
        EdgeLocation::MiddleRightFront,
        EdgeLocation::MiddleLeftFront,
        EdgeLocation::MiddleLeftBack,
        EdgeLocation::MiddleRightBack,
    ];

    #[must_use]
    pub fn index(self) -> usize {
        self as usize
    }

    #[must_use]
    pub fn from_index(index: usize) -> Option<EdgeLocation> {
        Self::ALL.get(index).copied()
    }

    /// The two stickers touching this slot when solved, the primary
    /// reference facelet first.
    #[must_use]
    pub fn reference_faces(self) -> [Face; 2] {
        match self {
            EdgeLocation::TopRight => [Face::Top, Face::Right],
            EdgeLocation::TopFront => [Face::Top, Face::Front],
            EdgeLocation::TopLeft => [Face::Top, Face::Left],
            EdgeLocation::TopBack => [Face::Top, Face::Back],
            EdgeLocation::BottomRight => [Face::Bottom, Face::Right],
            EdgeLocation::BottomFront => [Face::Bottom, Face::Front],
            EdgeLocation::BottomLeft => [Face::Bottom, Face::Left],
            EdgeLocation::BottomBack => [Face::Bottom, Face::Back],
            EdgeLocation::MiddleRightFront => [Face::Front, Face::Right],
            EdgeLocation::MiddleLeftFront => [Face::Front, Face::Left],
            EdgeLocation::MiddleLeftBack => [Face::Back, Face::Left],
            EdgeLocation::MiddleRightBack => [Face::Back, Face::Right],
        }
    }

    /// The four edge slots of `face`, sorted clockwise as viewed from
    /// outside that face. The cyclic rotation logic in the move
    /// algebra relies on this ordering.
    #[must_use]
    pub fn ring(face: Face) -> [EdgeLocation; 4] {
        match face {
            Face::Top => [
                EdgeLocation::TopRight,
                EdgeLocation::TopFront,
                EdgeLocation::TopLeft,
                EdgeLocation::TopBack,
            ],
            Face::Bottom => [
                EdgeLocation::BottomFront,
                EdgeLocation::BottomRight,
                EdgeLocation::BottomBack,
                EdgeLocation::BottomLeft,
            ],
            Face::Left => [
                EdgeLocation::TopLeft,
                EdgeLocation::MiddleLeftFront,
                EdgeLocation::BottomLeft,
                EdgeLocation::MiddleLeftBack,
            ],
            Face::Right => [
                EdgeLocation::TopRight,
                EdgeLocation::MiddleRightBack,
                EdgeLocation::BottomRight,
                EdgeLocation::MiddleRightFront,
            ],
            Face::Front => [
                EdgeLocation::TopFront,
                EdgeLocation::MiddleRightFront,
                EdgeLocation::BottomFront,
                EdgeLocation::MiddleLeftFront,
            ],
            Face::Back => [
                EdgeLocation::TopBack,
                EdgeLocation::MiddleLeftBack,
                EdgeLocation::BottomBack,
                EdgeLocation::MiddleRightBack,
            ],
        }
    }
}

/// One of the eight corner slots of the cube, in canonical order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CornerLocation {
    TopRightFront,
    TopLeftFront,
    TopLeftBack,
    TopRightBack,
    BottomRightFront,
    BottomLeftFront,
    BottomLeftBack,
    BottomRightBack,
}

impl CornerLocation {
    pub const ALL: [CornerLocation; 8] = [
        CornerLocation::TopRightFront,
        CornerLocation::TopLeftFront,
        CornerLocation::TopLeftBack,
        CornerLocation::TopRightBack,
        CornerLocation::BottomRightFront,
        CornerLocation::BottomLeftFront,
        CornerLocation::BottomLeftBack,
        CornerLocation::BottomRightBack,
    ];

    #[must_use]
    pub fn index(self) -> usize {
        self as usize
    }

    #[must_use]
    pub fn from_index(index: usize) -> Option<CornerLocation> {
        Self::ALL.get(index).copied()
    }

    /// The three stickers touching this slot when solved: the primary
    /// reference facelet first, then the other two clockwise.
    #[must_use]
    pub fn reference_faces(self) -> [Face; 3] {
        match self {
            CornerLocation::TopRightFront => [Face::Top, Face::Right, Face::Front],
            CornerLocation::TopLeftFront => [Face::Top, Face::Front, Face::Left],
            CornerLocation::TopLeftBack => [Face::Top, Face::Left, Face::Back],
            CornerLocation::TopRightBack => [Face::Top, Face::Back, Face::Right],
            CornerLocation::BottomRightFront => [Face::Bottom, Face::Front, Face::Right],
            CornerLocation::BottomLeftFront => [Face::Bottom, Face::Left, Face::Front],
            CornerLocation::BottomLeftBack => [Face::Bottom, Face::Back, Face::Left],
            CornerLocation::BottomRightBack => [Face::Bottom, Face::Right, Face::Back],
        }
    }

    /// The four corner slots of `face`, sorted clockwise as viewed
    /// from outside that face.
    #[must_use]
    pub fn ring(face: Face) -> [CornerLocation; 4] {
        match face {
            Face::Top => [
                CornerLocation::TopRightFront,
                CornerLocation::TopLeftFront,
                CornerLocation::TopLeftBack,
                CornerLocation::TopRightBack,
            ],
            Face::Bottom => [
                CornerLocation::BottomLeftFront,
                CornerLocation::BottomRightFront,
                CornerLocation::BottomRightBack,
                CornerLocation::BottomLeftBack,
            ],
            Face::Left => [
                CornerLocation::TopLeftBack,
                CornerLocation::TopLeftFront,
                CornerLocation::BottomLeftFront,
                CornerLocation::BottomLeftBack,
            ],
            Face::Right => [
                CornerLocation::TopRightFront,
                CornerLocation::TopRightBack,
                CornerLocation::BottomRightBack,
                CornerLocation::BottomRightFront,
            ],
            Face::Front => [
                CornerLocation::TopLeftFront,
                CornerLocation::TopRightFront,
                CornerLocation::BottomRightFront,
                CornerLocation::BottomLeftFront,
            ],
            Face::Back => [
                CornerLocation::TopRightBack,
                CornerLocation::TopLeftBack,
                CornerLocation::BottomLeftBack,
                CornerLocation::BottomRightBack,
            ],
        }
    }
}

/// The edge piece currently occupying some slot: which slot it
/// natively belongs to, and its flip state relative to where it sits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EdgePiece {
    pub location: EdgeLocation,
    pub orientation: EdgeOrientation,
}

impl EdgePiece {
    #[must_use]
    pub fn new(location: EdgeLocation, orientation: EdgeOrientation) -> EdgePiece {
        EdgePiece {
            location,
            orientation,
        }
    }

    #[must_use]
    pub fn solved(location: EdgeLocation) -> EdgePiece {
        EdgePiece::new(location, EdgeOrientation::Correct)
    }

    #[must_use]
    pub(crate) fn flipped(self) -> EdgePiece {
        EdgePiece::new(self.location, self.orientation.flip())
    }
}

/// The corner piece currently occupying some slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CornerPiece {
    pub location: CornerLocation,
    pub orientation: CornerOrientation,
}

impl CornerPiece {
    #[must_use]
    pub fn new(location: CornerLocation, orientation: CornerOrientation) -> CornerPiece {
        CornerPiece {
            location,
            orientation,
        }
    }

    #[must_use]
    pub fn solved(location: CornerLocation) -> CornerPiece {
        CornerPiece::new(location, CornerOrientation::Correct)
    }

    #[must_use]
    pub(crate) fn twisted(self, delta: CornerOrientation) -> CornerPiece {
        CornerPiece::new(self.location, self.orientation.compose(delta))
    }
}
