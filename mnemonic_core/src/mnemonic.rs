use crate::bits::BitString;
use crate::error::MnemonicError;
use crate::wordlist::{Language, WordIndex, WordList, BITS_PER_WORD};
use alloc::{string::ToString, vec::Vec};
use core::fmt;
use sha2::{Digest, Sha256};

/// The five mnemonic lengths BIP39 allows.
///
/// Every length splits `11 * words` bits into `ENT` bits of entropy followed
/// by `CS = ENT / 32` checksum bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum MnemonicLength {
    Words12,
    Words15,
    Words18,
    Words21,
    #[default]
    Words24,
}

impl MnemonicLength {
    pub const ALL: [MnemonicLength; 5] = [
        MnemonicLength::Words12,
        MnemonicLength::Words15,
        MnemonicLength::Words18,
        MnemonicLength::Words21,
        MnemonicLength::Words24,
    ];

    pub fn from_word_count(words: usize) -> Result<Self, MnemonicError> {
        Self::ALL
            .into_iter()
            .find(|length| length.word_count() == words)
            .ok_or(MnemonicError::InvalidWordCount(words))
    }

    pub fn from_entropy_len(bytes: usize) -> Result<Self, MnemonicError> {
        Self::ALL
            .into_iter()
            .find(|length| length.entropy_bytes() == bytes)
            .ok_or(MnemonicError::InvalidEntropyLength(bytes))
    }

    pub fn word_count(self) -> usize {
        match self {
            MnemonicLength::Words12 => 12,
            MnemonicLength::Words15 => 15,
            MnemonicLength::Words18 => 18,
            MnemonicLength::Words21 => 21,
            MnemonicLength::Words24 => 24,
        }
    }

    pub fn total_bits(self) -> usize {
        self.word_count() * BITS_PER_WORD as usize
    }

    pub fn checksum_bits(self) -> u8 {
        (self.total_bits() / 33) as u8
    }

    pub fn entropy_bits(self) -> usize {
        self.total_bits() - self.checksum_bits() as usize
    }

    pub fn entropy_bytes(self) -> usize {
        self.entropy_bits() / 8
    }

    /// How many last words complete any prefix of this length.
    ///
    /// The last word carries `11 - CS` free entropy bits and every choice of
    /// them has exactly one matching checksum.
    pub fn completions_per_prefix(self) -> usize {
        1 << (BITS_PER_WORD - self.checksum_bits())
    }
}

impl fmt::Display for MnemonicLength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.word_count())
    }
}

/// First `checksum_bits` bits of SHA256(entropy)
pub fn checksum(entropy: &[u8], checksum_bits: u8) -> u32 {
    let digest = Sha256::digest(entropy);
    BitString::from_bytes(&digest).read_bits(0, checksum_bits)
}

/// Whether the checksum bits at the end of `bits` match its entropy bits.
///
/// `bits` must be exactly `length.total_bits()` long.
pub(crate) fn checksum_matches(bits: &BitString, length: MnemonicLength) -> bool {
    debug_assert_eq!(bits.len(), length.total_bits());
    let entropy = bits.byte_prefix(length.entropy_bits());
    let stored = bits.read_bits(length.entropy_bits(), length.checksum_bits());
    stored == checksum(entropy, length.checksum_bits())
}

/// Encodes entropy and its checksum as 11-bit word indices
pub fn encode_indices(entropy: &[u8]) -> Result<Vec<WordIndex>, MnemonicError> {
    let length = MnemonicLength::from_entropy_len(entropy.len())?;
    let checksum_bits = length.checksum_bits();

    let mut bits = BitString::with_capacity(length.total_bits());
    for &byte in entropy {
        bits.push_bits(byte.into(), 8);
    }
    bits.push_bits(checksum(entropy, checksum_bits), checksum_bits);
    debug_assert_eq!(bits.len(), length.total_bits());

    Ok(bits.word_indices().collect())
}

/// Unpacks word indices into entropy and checks the checksum
pub fn decode_indices(indices: &[WordIndex]) -> Result<Decoded, MnemonicError> {
    let length = MnemonicLength::from_word_count(indices.len())?;
    Ok(Decoded::from_bits(
        &BitString::from_word_indices(indices),
        length,
    ))
}

/// The result of decoding a mnemonic.
///
/// A wrong checksum is not an error: the entropy is still recovered and
/// `valid` is false.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decoded {
    pub entropy: Vec<u8>,
    pub valid: bool,
}

impl Decoded {
    fn from_bits(bits: &BitString, length: MnemonicLength) -> Self {
        Decoded {
            entropy: bits.byte_prefix(length.entropy_bits()).to_vec(),
            valid: checksum_matches(bits, length),
        }
    }
}

/// A sequence of words of a valid length, all from one word list.
///
/// The checksum may or may not hold; see [`Mnemonic::is_valid`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mnemonic {
    language: Language,
    length: MnemonicLength,
    indices: Vec<WordIndex>,
    words: Vec<&'static str>,
}

impl Mnemonic {
    pub fn language(&self) -> Language {
        self.language
    }

    pub fn length(&self) -> MnemonicLength {
        self.length
    }

    pub fn indices(&self) -> &[WordIndex] {
        &self.indices
    }

    pub fn words(&self) -> &[&'static str] {
        &self.words
    }

    pub fn decode(&self) -> Decoded {
        Decoded::from_bits(&BitString::from_word_indices(&self.indices), self.length)
    }

    pub fn is_valid(&self) -> bool {
        self.decode().valid
    }

    pub fn to_entropy(&self) -> Vec<u8> {
        self.decode().entropy
    }
}

impl fmt::Display for Mnemonic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, word) in self.words.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", word)?;
        }
        Ok(())
    }
}

/// Translates between entropy and words of a [`WordList`].
#[derive(Debug, Clone, Copy)]
pub struct MnemonicCodec<'a> {
    wordlist: &'a WordList,
}

impl<'a> MnemonicCodec<'a> {
    pub fn new(wordlist: &'a WordList) -> Self {
        Self { wordlist }
    }

    pub fn wordlist(&self) -> &'a WordList {
        self.wordlist
    }

    /// Looks up every word, failing on the first one that isn't in the list
    pub fn resolve<S: AsRef<str>>(&self, words: &[S]) -> Result<Vec<WordIndex>, MnemonicError> {
        words
            .iter()
            .enumerate()
            .map(|(position, word)| {
                let word = word.as_ref();
                self.wordlist
                    .index_of(word)
                    .ok_or_else(|| MnemonicError::UnknownWord {
                        position,
                        word: word.to_string(),
                    })
            })
            .collect()
    }

    /// Encodes 16, 20, 24, 28 or 32 bytes of entropy as 12 to 24 words
    pub fn encode(&self, entropy: &[u8]) -> Result<Mnemonic, MnemonicError> {
        let length = MnemonicLength::from_entropy_len(entropy.len())?;
        let indices = encode_indices(entropy)?;
        Ok(self.from_indices(length, indices))
    }

    /// Recovers the entropy of a phrase and reports whether its checksum holds
    pub fn decode<S: AsRef<str>>(&self, words: &[S]) -> Result<Decoded, MnemonicError> {
        Ok(self.mnemonic(words)?.decode())
    }

    pub fn is_valid<S: AsRef<str>>(&self, words: &[S]) -> Result<bool, MnemonicError> {
        Ok(self.decode(words)?.valid)
    }

    /// Assembles words into a [`Mnemonic`] without checking the checksum.
    ///
    /// The word count is checked before any word is looked up.
    pub fn mnemonic<S: AsRef<str>>(&self, words: &[S]) -> Result<Mnemonic, MnemonicError> {
        let length = MnemonicLength::from_word_count(words.len())?;
        let indices = self.resolve(words)?;
        Ok(self.from_indices(length, indices))
    }

    fn from_indices(&self, length: MnemonicLength, indices: Vec<WordIndex>) -> Mnemonic {
        let words = indices
            .iter()
            .map(|&index| self.wordlist.word_at(index))
            .collect();
        Mnemonic {
            language: self.wordlist.language(),
            length,
            indices,
            words,
        }
    }
}
