//! Gen2 frame codec: commands out, bit-packed event frames in.
//!
//! Every frame on the wire is 20 bytes (after decryption). The first
//! four bits select the event kind; the rest is a kind-specific
//! bit-packed layout.

use cube_core::{Cube, CubieError, Cubies, Face, Magnitude, Move};
use thiserror::Error;

use crate::bits::BitReader;

/// Length of every Gen2 frame, both directions.
pub const FRAME_LEN: usize = 20;

/// A request sent to the cube.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    RequestHardware,
    RequestFacelets,
    RequestBattery,
    Reset,
}

impl Command {
    /// The 20-byte plaintext payload for this command.
    #[must_use]
    pub fn encode(self) -> [u8; FRAME_LEN] {
        let mut bytes = [0_u8; FRAME_LEN];
        match self {
            Command::RequestFacelets => bytes[0] = 0x04,
            Command::RequestHardware => bytes[0] = 0x05,
            Command::RequestBattery => bytes[0] = 0x09,
            Command::Reset => {
                bytes = [
                    0x0A, 0x05, 0x39, 0x77, 0x00, 0x00, 0x01, 0x23, 0x45, 0x67, 0x89, 0xAB, 0x00,
                    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
                ];
            }
        }
        bytes
    }
}

/// Device orientation as a unit quaternion plus, on cubes that report
/// it, a coarse angular velocity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GyroFrame {
    pub orientation: Quaternion,
    pub angular_velocity: AngularVelocity,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quaternion {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub w: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AngularVelocity {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

/// A move notification: the move that just happened plus up to six
/// older moves as recent history, newest first. `serial` increments
/// by one per physical move and wraps at 256.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveFrame {
    pub serial: u8,
    pub moves: Vec<Move>,
}

/// The cube's own view of its state, bit-packed cubie arrays. The
/// last element of each array is not transmitted; it is derived from
/// the group invariants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StateFrame {
    pub serial: u8,
    pub cubies: Cubies,
}

impl StateFrame {
    /// Reconstruct the full cube state this frame describes.
    pub fn cube(&self) -> Result<Cube, CubieError> {
        Cube::try_from(&self.cubies)
    }
}

/// Hardware identity reported by the cube.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct HardwareFrame {
    pub hardware_name: String,
    pub software_version: String,
    pub hardware_version: String,
    pub supports_gyroscope: bool,
}

/// A decoded event frame.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    Gyro(GyroFrame),
    Move(MoveFrame),
    Facelets(StateFrame),
    Hardware(HardwareFrame),
    /// Battery level, 0-100.
    Battery(u8),
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameError {
    #[error("frame must be {FRAME_LEN} bytes, got {0}")]
    Truncated(usize),
}

/// Decode one decrypted frame. Unknown event kinds decode to `None`;
/// the protocol reserves them for other cube generations.
pub fn decode(frame: &[u8]) -> Result<Option<Event>, FrameError> {
    if frame.len() < FRAME_LEN {
        return Err(FrameError::Truncated(frame.len()));
    }
    let reader = BitReader::new(frame);

    let event = match reader.read_u8(0, 4) {
        0x01 => Some(Event::Gyro(decode_gyro(reader))),
        0x02 => Some(Event::Move(decode_moves(reader))),
        0x04 => Some(Event::Facelets(decode_state(reader))),
        0x05 => Some(Event::Hardware(decode_hardware(reader))),
        0x09 => Some(Event::Battery(reader.read_u8(8, 8).min(100))),
        _ => None,
    };
    Ok(event)
}

fn decode_gyro(reader: BitReader<'_>) -> GyroFrame {
    // 16-bit sign-magnitude fractions of 0x7FFF
    fn fraction(value: u16) -> f64 {
        let sign = if value >> 15 & 1 == 1 { -1.0 } else { 1.0 };
        sign * f64::from(value & 0x7FFF) / f64::from(0x7FFF_u16)
    }

    // 4-bit sign-magnitude counts
    fn velocity(value: u8) -> f64 {
        let sign = if value >> 3 & 1 == 1 { -1.0 } else { 1.0 };
        sign * f64::from(value & 0x7)
    }

    GyroFrame {
        orientation: Quaternion {
            w: fraction(reader.read_u16(4)),
            x: fraction(reader.read_u16(20)),
            y: fraction(reader.read_u16(36)),
            z: fraction(reader.read_u16(52)),
        },
        angular_velocity: AngularVelocity {
            x: velocity(reader.read_u8(68, 4)),
            y: velocity(reader.read_u8(72, 4)),
            z: velocity(reader.read_u8(76, 4)),
        },
    }
}

fn decode_moves(reader: BitReader<'_>) -> MoveFrame {
    let serial = reader.read_u8(4, 8);

    let moves = (0..7)
        .filter_map(|i| {
            let raw_face = reader.read_u8(12 + 5 * i, 4);
            let raw_direction = reader.read_u8(16 + 5 * i, 1);
            // face values 0..=5 are U R F D L B, matching Face order
            let face = Face::ALL.get(usize::from(raw_face)).copied()?;
            let magnitude = if raw_direction == 0 {
                Magnitude::ClockwiseQuarterTurn
            } else {
                Magnitude::CounterClockwiseQuarterTurn
            };
            Some(Move::with_magnitude(face, magnitude))
        })
        .collect();

    MoveFrame { serial, moves }
}

fn decode_state(reader: BitReader<'_>) -> StateFrame {
    let serial = reader.read_u8(4, 8);

    let mut cp = [0_u8; 8];
    let mut co = [0_u8; 8];
    for i in 0..7 {
        cp[i] = reader.read_u8(12 + i * 3, 3);
        co[i] = reader.read_u8(33 + i * 2, 2);
    }
    // The eighth corner is implied: permutation indices sum to 28 and
    // twists sum to 0 mod 3. Wrapping keeps corrupt frames in u8
    // range; the cubie codec rejects them downstream.
    cp[7] = 28_u8.wrapping_sub(cp[..7].iter().sum());
    co[7] = (3 - co[..7].iter().sum::<u8>() % 3) % 3;

    let mut ep = [0_u8; 12];
    let mut eo = [0_u8; 12];
    for i in 0..11 {
        ep[i] = reader.read_u8(47 + i * 4, 4);
        eo[i] = reader.read_u8(91 + i, 1);
    }
    ep[11] = 66_u8.wrapping_sub(ep[..11].iter().sum());
    eo[11] = (2 - eo[..11].iter().sum::<u8>() % 2) % 2;

    StateFrame {
        serial,
        cubies: Cubies { cp, co, ep, eo },
    }
}

fn decode_hardware(reader: BitReader<'_>) -> HardwareFrame {
    let hw_major = reader.read_u8(8, 8);
    let hw_minor = reader.read_u8(16, 8);
    let sw_major = reader.read_u8(24, 8);
    let sw_minor = reader.read_u8(32, 8);
    let name_bytes: Vec<u8> = (0..8).map(|i| reader.read_u8(40 + i * 8, 8)).collect();
    let supports_gyroscope = reader.read_u8(104, 1) == 1;

    HardwareFrame {
        hardware_name: String::from_utf8_lossy(&name_bytes)
            .trim_end_matches('\0')
            .to_owned(),
        software_version: format!("{sw_major}.{sw_minor}"),
        hardware_version: format!("{hw_major}.{hw_minor}"),
        supports_gyroscope,
    }
}
