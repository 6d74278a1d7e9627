use byteorder::{ByteOrder, BE, LE};

use crate::{Error, Result};

fn low_bits(count: usize) -> u64 {
    1u64.checked_shl(count as u32).map_or(u64::MAX, |bit| bit - 1)
}

/// Width of the words the accumulator is refilled with.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BlockSize {
    Bits8,
    Bits16,
    Bits32,
}

impl BlockSize {
    pub fn bits(self) -> usize {
        match self {
            BlockSize::Bits8 => 8,
            BlockSize::Bits16 => 16,
            BlockSize::Bits32 => 32,
        }
    }

    fn bytes(self) -> usize {
        self.bits() / 8
    }
}

/// Byte order of each refill word. Bits are always consumed MSB-first
/// from the accumulator.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BitOrder {
    LittleEndian,
    BigEndian,
}

pub struct BitReader<'a> {
    bytes: &'a [u8],
    pos: usize,
    buffer: u64,
    len: usize,
    bit_pos: usize,
    block_size: BlockSize,
    order: BitOrder,
}

impl<'a> BitReader<'a> {
    /// Reader over 16-bit little-endian words, the layout of video packets.
    pub fn new(bytes: &'a [u8]) -> Self {
        Self::with_config(bytes, BlockSize::Bits16, BitOrder::LittleEndian)
    }

    pub fn with_config(bytes: &'a [u8], block_size: BlockSize, order: BitOrder) -> Self {
        Self {
            bytes,
            pos: 0,
            buffer: 0,
            len: 0,
            bit_pos: 0,
            block_size,
            order,
        }
    }

    /// Number of bits consumed so far.
    pub fn bit_position(&self) -> usize {
        self.bit_pos
    }

    /// Number of source bytes pulled into the accumulator so far.
    pub fn byte_position(&self) -> usize {
        self.pos
    }

    pub fn read(&mut self, count: usize) -> Result<u32> {
        if count == 0 {
            return Ok(0);
        }
        if count > 32 {
            return Err(Error::FormatError(format!("Cannot read {} bits at once", count)));
        }
        while self.len < count {
            self.refill()?;
        }
        let value = (self.buffer >> (self.len - count)) & low_bits(count);
        self.len -= count;
        self.buffer &= low_bits(self.len);
        self.bit_pos += count;
        Ok(value as u32)
    }

    /// Reads `count` bits and sign-extends from bit `count - 1`.
    pub fn read_signed(&mut self, count: usize) -> Result<i32> {
        let value = self.read(count)?;
        if count == 0 {
            return Ok(0);
        }
        let shift = 32 - count as u32;
        Ok(((value << shift) as i32) >> shift)
    }

    pub fn read_bool(&mut self) -> Result<bool> {
        Ok(self.read(1)? != 0)
    }

    pub fn read_elias_gamma(&mut self) -> Result<u32> {
        let mut zeros = 0;
        while self.read(1)? == 0 {
            zeros += 1;
            if zeros >= 32 {
                return Err(Error::FormatError("Elias-gamma prefix longer than 31 bits".into()));
            }
        }
        Ok((1u32 << zeros) + self.read(zeros)?)
    }

    pub fn read_exp_golomb(&mut self) -> Result<u32> {
        Ok(self.read_elias_gamma()? - 1)
    }

    /// Maps 0, 1, 2, 3, 4, ... to 0, 1, -1, 2, -2, ...
    pub fn read_exp_golomb_signed(&mut self) -> Result<i32> {
        let value = self.read_exp_golomb()?;
        let half = (value / 2) as i32;
        Ok(if value % 2 == 0 { -half } else { half + 1 })
    }

    fn refill(&mut self) -> Result<()> {
        let size = self.block_size.bytes();
        let bytes = self.bytes.get(self.pos..self.pos + size)
            .ok_or(Error::EndOfStream)?;
        let block = match (self.block_size, self.order) {
            (BlockSize::Bits8, _) => bytes[0] as u64,
            (BlockSize::Bits16, BitOrder::LittleEndian) => LE::read_u16(bytes) as u64,
            (BlockSize::Bits16, BitOrder::BigEndian) => BE::read_u16(bytes) as u64,
            (BlockSize::Bits32, BitOrder::LittleEndian) => LE::read_u32(bytes) as u64,
            (BlockSize::Bits32, BitOrder::BigEndian) => BE::read_u32(bytes) as u64,
        };
        self.buffer = (self.buffer << self.block_size.bits()) | block;
        self.len += self.block_size.bits();
        self.pos += size;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reader(bytes: &[u8], block_size: BlockSize) -> BitReader {
        BitReader::with_config(bytes, block_size, BitOrder::LittleEndian)
    }

    #[test]
    fn test_low_bits() {
        assert_eq!(low_bits(0), 0);
        assert_eq!(low_bits(5), 0b11111);
        assert_eq!(low_bits(63), u64::MAX >> 1);
        assert_eq!(low_bits(64), u64::MAX);
    }

    #[test]
    fn test_read_bytes() {
        let mut r = reader(&[0xCA, 0xFE], BlockSize::Bits8);
        assert_eq!(r.read(3).unwrap(), 6);
        assert_eq!(r.read(2).unwrap(), 1);
        assert_eq!(r.read(3).unwrap(), 2);
        assert_eq!(r.byte_position(), 1);
        assert_eq!(r.bit_position(), 8);
    }

    #[test]
    fn test_read_across_blocks() {
        let mut r = reader(&[0xCA, 0xFB, 0xFF], BlockSize::Bits8);
        assert_eq!(r.read(3).unwrap(), 6);
        assert_eq!(r.read(10).unwrap(), 0x15F);
        assert_eq!(r.read(3).unwrap(), 3);
        assert_eq!(r.byte_position(), 2);
    }

    #[test]
    fn test_read_words_little_endian() {
        let mut r = reader(&[0xFB, 0xCA], BlockSize::Bits16);
        assert_eq!(r.read(3).unwrap(), 6);
        assert_eq!(r.read(10).unwrap(), 0x15F);
        assert_eq!(r.read(3).unwrap(), 3);

        let mut r = reader(&[0xC1, 0xC0, 0x00, 0xA0], BlockSize::Bits16);
        assert_eq!(r.read(15).unwrap(), 0x6060);
        assert_eq!(r.read(5).unwrap(), 0x1A);
        assert_eq!(r.byte_position(), 4);
    }

    #[test]
    fn test_read_words_big_endian() {
        let mut r = BitReader::with_config(&[0xCA, 0xFB], BlockSize::Bits16, BitOrder::BigEndian);
        assert_eq!(r.read(3).unwrap(), 6);
        assert_eq!(r.read(10).unwrap(), 0x15F);
        assert_eq!(r.read(3).unwrap(), 3);

        let mut r = BitReader::with_config(&[0x12, 0x34, 0x56, 0x78], BlockSize::Bits32, BitOrder::BigEndian);
        assert_eq!(r.read(32).unwrap(), 0x1234_5678);
    }

    #[test]
    fn test_read_dwords() {
        let mut r = reader(&[0x78, 0x56, 0x34, 0x12, 0xFF, 0x00, 0x00, 0x00], BlockSize::Bits32);
        assert_eq!(r.read(4).unwrap(), 0x1);
        assert_eq!(r.read(32).unwrap(), 0x2345_6780);
        assert_eq!(r.byte_position(), 8);
        assert_eq!(r.bit_position(), 36);
    }

    #[test]
    fn test_read_signed() {
        let mut r = reader(&[0xF9, 0xA7, 0x90], BlockSize::Bits8);
        assert_eq!(r.read_signed(12).unwrap(), -102);
        assert_eq!(r.read_signed(4).unwrap(), 7);
        assert_eq!(r.read_signed(4).unwrap(), -7);
    }

    #[test]
    fn test_read_bool() {
        let mut r = reader(&[0x02], BlockSize::Bits8);
        r.read(6).unwrap();
        assert!(r.read_bool().unwrap());
        assert!(!r.read_bool().unwrap());
    }

    #[test]
    fn test_read_elias_gamma() {
        let bytes = [0b1_010_011_0, 0b00100_000, 0b00101_000, 0b00001000, 0b1_0000000];
        let mut r = reader(&bytes, BlockSize::Bits8);
        assert_eq!(r.read_elias_gamma().unwrap(), 1);
        assert_eq!(r.read_elias_gamma().unwrap(), 2);
        assert_eq!(r.read_elias_gamma().unwrap(), 3);
        r.read(1).unwrap();
        assert_eq!(r.read_elias_gamma().unwrap(), 4);
        r.read(3).unwrap();
        assert_eq!(r.read_elias_gamma().unwrap(), 5);
        r.read(3).unwrap();
        assert_eq!(r.read_elias_gamma().unwrap(), 17);
    }

    #[test]
    fn test_read_exp_golomb() {
        let bytes = [0b1_010_011_0, 0b00111_000, 0b0001001_0];
        let mut r = reader(&bytes, BlockSize::Bits8);
        assert_eq!(r.read_exp_golomb().unwrap(), 0);
        assert_eq!(r.read_exp_golomb().unwrap(), 1);
        assert_eq!(r.read_exp_golomb().unwrap(), 2);
        r.read(1).unwrap();
        assert_eq!(r.read_exp_golomb().unwrap(), 6);
        r.read(3).unwrap();
        assert_eq!(r.read_exp_golomb().unwrap(), 8);
    }

    #[test]
    fn test_read_exp_golomb_signed() {
        let bytes = [0b1_010_011_0, 0b0001000_0, 0b0001001_0];
        let mut r = reader(&bytes, BlockSize::Bits8);
        assert_eq!(r.read_exp_golomb_signed().unwrap(), 0);
        assert_eq!(r.read_exp_golomb_signed().unwrap(), 1);
        assert_eq!(r.read_exp_golomb_signed().unwrap(), -1);
        r.read(1).unwrap();
        assert_eq!(r.read_exp_golomb_signed().unwrap(), 4);
        r.read(1).unwrap();
        assert_eq!(r.read_exp_golomb_signed().unwrap(), -4);
    }

    #[test]
    fn test_packed_values_read_back() {
        let values: [(u32, usize); 6] = [(5, 3), (0x1FF, 9), (0, 4), (1, 1), (0xABCDE, 20), (3, 2)];
        let mut bytes = Vec::new();
        let mut acc: u64 = 0;
        let mut acc_len = 0;
        for &(value, width) in &values {
            acc = (acc << width) | value as u64;
            acc_len += width;
            while acc_len >= 8 {
                acc_len -= 8;
                bytes.push((acc >> acc_len) as u8);
            }
        }
        assert_eq!(acc_len, 7);
        bytes.push((acc << (8 - acc_len)) as u8);

        let mut r = reader(&bytes, BlockSize::Bits8);
        for &(value, width) in &values {
            assert_eq!(r.read(width).unwrap(), value);
        }
        assert_eq!(r.bit_position(), 39);
        assert_eq!(r.byte_position(), 5);
    }

    #[test]
    fn test_end_of_stream() {
        let mut r = reader(&[], BlockSize::Bits8);
        assert!(matches!(r.read(1), Err(Error::EndOfStream)));

        let mut r = reader(&[0xFF], BlockSize::Bits16);
        assert!(matches!(r.read(1), Err(Error::EndOfStream)));

        let mut r = reader(&[0x00, 0x00], BlockSize::Bits16);
        assert!(matches!(r.read_elias_gamma(), Err(Error::EndOfStream)));
    }
}
