//! Lost-notification recovery over the move serial counter.
//!
//! Each move frame carries an 8-bit serial that increments per
//! physical move, plus the last seven moves as history. Comparing
//! serials tells us how many notifications were dropped, and the
//! history lets us replay them in order.

use cube_core::Move;
use log::debug;

use crate::frames::MoveFrame;

/// Orders incoming move frames into a gap-free move stream.
#[derive(Debug, Default, Clone)]
pub struct MoveStream {
    last_serial: Option<u8>,
}

impl MoveStream {
    #[must_use]
    pub fn new() -> Self {
        MoveStream::default()
    }

    /// Ingest one move frame and return the physical moves it
    /// accounts for, oldest first.
    ///
    /// The first frame ever seen yields only its newest move; there
    /// is no baseline to diff against. Afterwards the serial gap
    /// (wrapping at 256) decides how many history entries to replay,
    /// capped at the seven the frame carries.
    pub fn feed(&mut self, frame: &MoveFrame) -> Vec<Move> {
        let count = match self.last_serial {
            None => 1,
            Some(last) => usize::from(frame.serial.wrapping_sub(last)).min(7),
        };
        self.last_serial = Some(frame.serial);

        if count > 1 {
            debug!("serial gap of {count}, replaying from move history");
        }

        let mut moves: Vec<Move> = frame.moves.iter().copied().take(count).collect();
        moves.reverse();
        moves
    }
}
