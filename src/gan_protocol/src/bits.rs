//! Big-endian bit-addressed reads over a byte buffer. Notification
//! frames pack fields at arbitrary bit offsets, so all field access
//! goes through this.

/// A read-only bit-addressed view of a byte slice.
#[derive(Debug, Clone, Copy)]
pub struct BitReader<'a> {
    bytes: &'a [u8],
}

impl<'a> BitReader<'a> {
    #[must_use]
    pub fn new(bytes: &'a [u8]) -> BitReader<'a> {
        BitReader { bytes }
    }

    /// Read a single bit.
    ///
    /// # Panics
    ///
    /// Panics if `bit_offset` is past the end of the buffer. Callers
    /// validate the frame length up front.
    #[must_use]
    pub fn read_u1(&self, bit_offset: usize) -> bool {
        let byte = self.bytes[bit_offset / 8];
        byte & (1 << (7 - bit_offset % 8)) != 0
    }

    /// Read `bit_count` bits (at most 8) as an unsigned value.
    #[must_use]
    pub fn read_u8(&self, bit_offset: usize, bit_count: usize) -> u8 {
        assert!(bit_count <= 8, "{bit_count} > 8");
        let mut result = 0;
        for i in 0..bit_count {
            result = (result << 1) | u8::from(self.read_u1(bit_offset + i));
        }
        result
    }

    /// Read 16 bits, big endian.
    #[must_use]
    pub fn read_u16(&self, bit_offset: usize) -> u16 {
        let hi = u16::from(self.read_u8(bit_offset, 8));
        let lo = u16::from(self.read_u8(bit_offset + 8, 8));
        (hi << 8) | lo
    }

    /// Read 32 bits, big endian.
    #[must_use]
    pub fn read_u32(&self, bit_offset: usize) -> u32 {
        let hi = u32::from(self.read_u16(bit_offset));
        let lo = u32::from(self.read_u16(bit_offset + 16));
        (hi << 16) | lo
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_bit_patterns() {
        let bytes = [
            0b1100_0000,
            0b1010_0001,
            0b0110_1001,
            0b0010_0110,
            0b0101_1010,
            0b0011_0100,
        ];
        let reader = BitReader::new(&bytes);

        assert!(reader.read_u1(0));
        assert!(reader.read_u1(1));
        assert!(!reader.read_u1(2));
        assert!(reader.read_u1(10));
        assert!(!reader.read_u1(11));

        assert_eq!(reader.read_u8(1, 8), 0b1000_0001);
        assert_eq!(reader.read_u8(8, 8), 0b1010_0001);
        assert_eq!(reader.read_u8(9, 8), 0b0100_0010);

        assert_eq!(reader.read_u16(10), 0b1000_0101_1010_0100);

        assert_eq!(
            reader.read_u32(11),
            0b0000_1011_0100_1001_0011_0010_1101_0001
        );
    }

    #[test]
    fn partial_byte_reads() {
        let reader = BitReader::new(&[0b1011_0110]);
        assert_eq!(reader.read_u8(0, 4), 0b1011);
        assert_eq!(reader.read_u8(4, 4), 0b0110);
        assert_eq!(reader.read_u8(2, 3), 0b110);
        assert_eq!(reader.read_u8(0, 0), 0);
    }
}
