//! The AES-based stream cipher wrapping every frame on the wire.
//!
//! Each notification is masked with AES-128 applied as single-block
//! CBC to the first 16 bytes and, when the frame is longer, to the
//! trailing 16 bytes as an overlapping window. The base key and IV
//! are per-vendor constants salted with the device MAC address.

use aes::Aes128;
use aes::cipher::generic_array::GenericArray;
use aes::cipher::{BlockDecrypt, BlockEncrypt, KeyInit};
use thiserror::Error;

/// Base key/IV used by GAN Gen2 and Gen3 cubes.
pub const GAN_GEN2_KEY: [u8; 16] = [
    0x01, 0x02, 0x42, 0x28, 0x31, 0x91, 0x16, 0x07, 0x20, 0x05, 0x18, 0x54, 0x42, 0x11, 0x12, 0x53,
];
pub const GAN_GEN2_IV: [u8; 16] = [
    0x11, 0x03, 0x32, 0x28, 0x21, 0x01, 0x76, 0x27, 0x20, 0x95, 0x78, 0x14, 0x32, 0x12, 0x02, 0x43,
];

/// Base key/IV used by MoYu AI 2023 cubes.
pub const MOYU_AI_KEY: [u8; 16] = [
    0x05, 0x12, 0x02, 0x45, 0x02, 0x01, 0x29, 0x56, 0x12, 0x78, 0x12, 0x76, 0x81, 0x01, 0x08, 0x03,
];
pub const MOYU_AI_IV: [u8; 16] = [
    0x01, 0x44, 0x28, 0x06, 0x86, 0x21, 0x22, 0x28, 0x51, 0x05, 0x08, 0x31, 0x82, 0x02, 0x21, 0x06,
];

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CipherError {
    #[error("buffer must be at least 16 bytes, got {0}")]
    Truncated(usize),
}

/// A device-keyed frame cipher.
pub struct GanCipher {
    cipher: Aes128,
    iv: [u8; 16],
}

impl GanCipher {
    /// Derive the device cipher from a vendor base key/IV and the
    /// 6-byte salt (the device MAC address as carried in the
    /// advertisement manufacturer data).
    #[must_use]
    pub fn new(key: &[u8; 16], iv: &[u8; 16], salt: &[u8; 6]) -> GanCipher {
        let mut key = *key;
        let mut iv = *iv;

        // Byte-wise addition mod 0xFF (not 0x100), per the vendor app.
        for (i, &byte) in salt.iter().enumerate() {
            key[i] = ((u16::from(key[i]) + u16::from(byte)) % 0xFF) as u8;
            iv[i] = ((u16::from(iv[i]) + u16::from(byte)) % 0xFF) as u8;
        }

        GanCipher {
            cipher: Aes128::new(&key.into()),
            iv,
        }
    }

    fn encrypt_block(&self, chunk: &mut [u8]) {
        for (byte, iv) in chunk.iter_mut().zip(self.iv) {
            *byte ^= iv;
        }
        self.cipher
            .encrypt_block(GenericArray::from_mut_slice(chunk));
    }

    fn decrypt_block(&self, chunk: &mut [u8]) {
        self.cipher
            .decrypt_block(GenericArray::from_mut_slice(chunk));
        for (byte, iv) in chunk.iter_mut().zip(self.iv) {
            *byte ^= iv;
        }
    }

    /// Encrypt `data` in place: leading 16-byte block first, then the
    /// trailing 16-byte block when the buffer is longer than one.
    pub fn encrypt(&self, data: &mut [u8]) -> Result<(), CipherError> {
        if data.len() < 16 {
            return Err(CipherError::Truncated(data.len()));
        }
        self.encrypt_block(&mut data[..16]);
        if data.len() > 16 {
            let start = data.len() - 16;
            self.encrypt_block(&mut data[start..]);
        }
        Ok(())
    }

    /// Decrypt `data` in place, undoing [`encrypt`](GanCipher::encrypt)
    /// by processing the blocks in the reverse order.
    pub fn decrypt(&self, data: &mut [u8]) -> Result<(), CipherError> {
        if data.len() < 16 {
            return Err(CipherError::Truncated(data.len()));
        }
        if data.len() > 16 {
            let start = data.len() - 16;
            self.decrypt_block(&mut data[start..]);
        }
        self.decrypt_block(&mut data[..16]);
        Ok(())
    }
}
