//! Bit strings for packing 11-bit word indices.
//!
//! Bits are stored most significant bit first, both inside each byte and in
//! every value that is pushed or read. Nothing here pads to a byte boundary:
//! an 11-bit value pushed after 3 bits occupies bits 3..14.

use crate::wordlist::{WordIndex, BITS_PER_WORD};
use alloc::vec::Vec;
use core::ops::{BitOrAssign, Shl};

fn set_bit<T: BitOrAssign + Shl<u8, Output = T> + From<u8>>(target: &mut T, len: u8, index: u8) {
    *target |= T::from(1) << ((len - 1) - index)
}

/// An append-only sequence of bits.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BitString {
    bytes: Vec<u8>,
    len: usize,
}

impl BitString {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(bits: usize) -> Self {
        Self {
            bytes: Vec::with_capacity(bits.div_ceil(8)),
            len: 0,
        }
    }

    pub fn from_bytes(bytes: &[u8]) -> Self {
        Self {
            bytes: bytes.to_vec(),
            len: bytes.len() * 8,
        }
    }

    /// Packs each index as 11 bits in order
    pub fn from_word_indices(indices: &[WordIndex]) -> Self {
        let mut bits = Self::with_capacity(indices.len() * BITS_PER_WORD as usize);
        for &index in indices {
            bits.push_word(index);
        }
        bits
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn push_bit(&mut self, bit: bool) {
        if self.len % 8 == 0 {
            self.bytes.push(0);
        }
        if bit {
            let last = self.bytes.len() - 1;
            set_bit(&mut self.bytes[last], 8, (self.len % 8) as u8);
        }
        self.len += 1;
    }

    /// Appends the low `width` bits of `value`, most significant first.
    pub fn push_bits(&mut self, value: u32, width: u8) {
        assert!(width <= 32, "can push at most 32 bits at once");
        for offset in (0..width).rev() {
            self.push_bit((value >> offset) & 1 == 1);
        }
    }

    pub fn push_word(&mut self, index: WordIndex) {
        self.push_bits(index.get().into(), BITS_PER_WORD);
    }

    pub fn bit(&self, index: usize) -> Option<bool> {
        if index >= self.len {
            return None;
        }
        Some((self.bytes[index / 8] >> (7 - (index % 8))) & 1 == 1)
    }

    /// Reads `width` bits starting at bit `start` as an unsigned integer.
    ///
    /// Panics if the slice runs past the end or `width > 32`.
    pub fn read_bits(&self, start: usize, width: u8) -> u32 {
        assert!(width <= 32, "can read at most 32 bits at once");
        assert!(
            start + width as usize <= self.len,
            "bit slice {}..{} out of bounds for length {}",
            start,
            start + width as usize,
            self.len
        );
        let mut value = 0u32;
        for i in 0..width as usize {
            let index = start + i;
            let bit = (self.bytes[index / 8] >> (7 - (index % 8))) & 1;
            if bit != 0 {
                set_bit(&mut value, width, i as u8);
            }
        }
        value
    }

    /// The first `n_bits` bits as bytes. `n_bits` must be a multiple of 8.
    pub fn byte_prefix(&self, n_bits: usize) -> &[u8] {
        assert!(n_bits % 8 == 0, "byte prefix must end on a byte boundary");
        assert!(n_bits <= self.len, "byte prefix longer than the bit string");
        &self.bytes[..n_bits / 8]
    }

    /// Splits the bit string into consecutive 11-bit word indices.
    ///
    /// Trailing bits that don't fill a whole word are ignored.
    pub fn word_indices(&self) -> impl Iterator<Item = WordIndex> + '_ {
        let width = BITS_PER_WORD as usize;
        (0..self.len / width)
            .map(move |i| WordIndex::from_low_bits(self.read_bits(i * width, BITS_PER_WORD)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_bits_is_msb_first() {
        let mut bits = BitString::new();
        bits.push_bits(0b101, 3);
        assert_eq!(bits.len(), 3);
        assert_eq!(bits.bit(0), Some(true));
        assert_eq!(bits.bit(1), Some(false));
        assert_eq!(bits.bit(2), Some(true));
        assert_eq!(bits.bit(3), None);
    }

    #[test]
    fn words_straddle_byte_boundaries() {
        let mut bits = BitString::new();
        bits.push_word(WordIndex::new(0b111_1111_1111).unwrap());
        bits.push_word(WordIndex::new(1).unwrap());
        assert_eq!(bits.len(), 22);
        // 11111111 111 00000 000001 (padded with zeroes)
        assert_eq!(bits.byte_prefix(16), &[0xff, 0xe0]);
        assert_eq!(bits.read_bits(0, 11), 0x7ff);
        assert_eq!(bits.read_bits(11, 11), 1);
        assert_eq!(bits.read_bits(8, 6), 0b111000);
    }

    #[test]
    fn read_from_bytes() {
        let bits = BitString::from_bytes(&[0b1000_0001, 0b0110_0000]);
        assert_eq!(bits.len(), 16);
        assert_eq!(bits.read_bits(0, 8), 0b1000_0001);
        assert_eq!(bits.read_bits(7, 4), 0b1011);
        assert_eq!(bits.read_bits(3, 0), 0);
        assert_eq!(bits.read_bits(0, 16), 0b1000_0001_0110_0000);
    }

    #[test]
    fn word_indices_roundtrip() {
        let indices = [0u16, 2047, 1, 1024, 3]
            .into_iter()
            .map(|i| WordIndex::new(i).unwrap())
            .collect::<Vec<_>>();
        let bits = BitString::from_word_indices(&indices);
        assert_eq!(bits.len(), 55);
        assert_eq!(bits.word_indices().collect::<Vec<_>>(), indices);
    }

    #[test]
    fn partial_trailing_word_is_ignored() {
        let mut bits = BitString::from_bytes(&[0xff, 0xff]);
        assert_eq!(bits.word_indices().count(), 1);
        bits.push_bits(0, 6);
        assert_eq!(
            bits.word_indices().map(WordIndex::get).collect::<Vec<_>>(),
            [2047, 0b11111_000000]
        );
    }

    #[test]
    #[should_panic]
    fn read_past_end_panics() {
        let bits = BitString::from_bytes(&[0xff]);
        bits.read_bits(4, 5);
    }

    #[test]
    #[should_panic]
    fn unaligned_byte_prefix_panics() {
        let bits = BitString::from_bytes(&[0xff, 0xff]);
        bits.byte_prefix(12);
    }
}
