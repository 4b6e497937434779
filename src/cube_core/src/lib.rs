//! An exact combinatorial model of the 3x3x3 Rubik's cube.
//!
//! The cube is represented at the cubie level: a bijection from slots
//! to pieces plus a per-slot orientation, with a move algebra over
//! quarter and half face turns. Around that core sit two invertible
//! codecs (the 54-sticker facelet string and the flat cubie byte
//! arrays used by smart-cube hardware), a uniform random scramble
//! generator that respects the reachability invariants, a live solve
//! tracker with move cancellation, and an opaque boundary to an
//! external solving routine.
//!
//! Everything here is a pure value transformation: no I/O, no shared
//! mutable state, safe to call from any thread on independent values.

pub mod cube;
pub mod cubies;
pub mod facelets;
pub mod moves;
pub mod pieces;
mod scramble;
pub mod solver;
pub mod tracker;

pub use cube::{CornerPieces, Cube, EdgePieces, PieceCountError};
pub use cubies::{CubieError, Cubies};
pub use facelets::{FACELET_COUNT, FaceletError, Facelets};
pub use moves::{Magnitude, Move, MoveParseError, MoveSeries};
pub use pieces::{
    CornerLocation, CornerOrientation, CornerPiece, EdgeLocation, EdgeOrientation, EdgePiece, Face,
    FaceColor, FaceParseError,
};
pub use solver::{CubeSolver, DEFAULT_MAX_DEPTH, PreparedSolver, SolverError};
pub use tracker::SolveTracker;
