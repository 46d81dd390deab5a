//! Error types for mnemonic_core

use alloc::string::String;
use core::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MnemonicError {
    /// A word is not in the active word list
    UnknownWord {
        /// Position of the word in the phrase (0 = first word)
        position: usize,
        /// The word that was provided
        word: String,
    },
    /// The phrase is not 12, 15, 18, 21 or 24 words long
    InvalidWordCount(usize),
    /// The entropy is not 16, 20, 24, 28 or 32 bytes long
    InvalidEntropyLength(usize),
    /// A word index does not fit in 11 bits
    IndexOutOfRange(u16),
    /// No word in the list completes the prefix into a valid mnemonic
    NoValidCompletion,
}

impl fmt::Display for MnemonicError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MnemonicError::UnknownWord { position, word } => {
                write!(
                    f,
                    "Word at position {} '{}' is not in the word list",
                    position + 1,
                    word
                )
            }
            MnemonicError::InvalidWordCount(count) => {
                write!(
                    f,
                    "Invalid mnemonic length: {} words. Must be 12, 15, 18, 21 or 24 words",
                    count
                )
            }
            MnemonicError::InvalidEntropyLength(len) => {
                write!(
                    f,
                    "Invalid entropy length: {} bytes. Must be 16, 20, 24, 28 or 32 bytes",
                    len
                )
            }
            MnemonicError::IndexOutOfRange(index) => {
                write!(f, "Word index {} is out of range (max 2047)", index)
            }
            MnemonicError::NoValidCompletion => {
                write!(f, "No word completes the prefix into a valid mnemonic")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for MnemonicError {}

/// The language identifier isn't one of the supported word lists
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownLanguage(pub String);

impl fmt::Display for UnknownLanguage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unsupported language '{}'", self.0)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for UnknownLanguage {}
