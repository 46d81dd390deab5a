//! BIP39 mnemonic encoding, checksum validation and last-word completion.
//!
//! The engine is pure computation over an explicit [`WordList`]: pick a
//! [`Language`], build the list once and pass it to the [`MnemonicCodec`] or
//! to [`completion::find_completions`].
#![no_std]

#[cfg(feature = "std")]
#[macro_use]
extern crate std;

#[allow(unused_imports)]
#[macro_use]
extern crate alloc;

pub mod bits;
pub mod completion;
pub mod mnemonic;
pub mod wordlist;

mod error;
pub use completion::find_completions;
#[cfg(feature = "rayon")]
pub use completion::find_completions_par;
pub use error::*;
pub use mnemonic::{Decoded, Mnemonic, MnemonicCodec, MnemonicLength};
pub use wordlist::{Language, WordIndex, WordList};
