//! Wire protocol for GAN Gen2 smart cubes.
//!
//! Smart cubes notify an app over BLE with 20-byte AES-encrypted
//! frames. This crate covers everything between raw characteristic
//! bytes and [`cube_core`] values: the per-device cipher, the
//! bit-packed frame codec, and recovery of moves lost to dropped
//! notifications. BLE transport itself is out of scope; callers hand
//! in the bytes their platform's stack delivers.

mod bits;
mod cipher;
mod frames;
mod recovery;

pub use bits::BitReader;
pub use cipher::{CipherError, GAN_GEN2_IV, GAN_GEN2_KEY, GanCipher, MOYU_AI_IV, MOYU_AI_KEY};
pub use frames::{
    AngularVelocity, Command, Event, FRAME_LEN, FrameError, GyroFrame, HardwareFrame, MoveFrame,
    Quaternion, StateFrame, decode,
};
pub use recovery::MoveStream;
