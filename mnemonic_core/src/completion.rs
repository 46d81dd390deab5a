//! Finding the last words that complete a mnemonic.
//!
//! Given every word but the last, the last word holds `11 - CS` free entropy
//! bits followed by the checksum. Rather than guessing which words fit, we
//! try every word in the list and keep the ones whose checksum holds, in
//! list order.

use crate::bits::BitString;
use crate::error::MnemonicError;
use crate::mnemonic::{checksum_matches, MnemonicCodec, MnemonicLength};
use crate::wordlist::{WordIndex, WordList};
use alloc::vec::Vec;

/// Returns every word that completes `prefix` into a mnemonic with a valid
/// checksum, in word list order.
///
/// The mnemonic length is `prefix.len() + 1`, so a 23 word prefix finds the
/// last word of a 24 word mnemonic.
pub fn find_completions<S: AsRef<str>>(
    prefix: &[S],
    wordlist: &WordList,
) -> Result<Vec<&'static str>, MnemonicError> {
    let (prefix_bits, length) = pack_prefix(prefix, wordlist)?;

    let completions = WordIndex::all()
        .filter(|&candidate| completes(&prefix_bits, candidate, length))
        .map(|candidate| wordlist.word_at(candidate))
        .collect::<Vec<_>>();

    finish(completions, wordlist, length)
}

/// Same as [`find_completions`] but checks candidates on the rayon thread pool.
#[cfg(feature = "rayon")]
pub fn find_completions_par<S: AsRef<str>>(
    prefix: &[S],
    wordlist: &WordList,
) -> Result<Vec<&'static str>, MnemonicError> {
    use crate::wordlist::WORDLIST_LEN;
    use rayon::prelude::*;

    let (prefix_bits, length) = pack_prefix(prefix, wordlist)?;

    let mut found = (0..WORDLIST_LEN as u32)
        .into_par_iter()
        .map(WordIndex::from_low_bits)
        .filter(|&candidate| completes(&prefix_bits, candidate, length))
        .collect::<Vec<_>>();
    found.sort_unstable();

    let completions = found
        .into_iter()
        .map(|candidate| wordlist.word_at(candidate))
        .collect::<Vec<_>>();

    finish(completions, wordlist, length)
}

fn pack_prefix<S: AsRef<str>>(
    prefix: &[S],
    wordlist: &WordList,
) -> Result<(BitString, MnemonicLength), MnemonicError> {
    let length = MnemonicLength::from_word_count(prefix.len() + 1)?;
    let indices = MnemonicCodec::new(wordlist).resolve(prefix)?;
    Ok((BitString::from_word_indices(&indices), length))
}

fn completes(prefix_bits: &BitString, candidate: WordIndex, length: MnemonicLength) -> bool {
    let mut bits = prefix_bits.clone();
    bits.push_word(candidate);
    checksum_matches(&bits, length)
}

#[cfg_attr(not(feature = "tracing"), allow(unused_variables))]
fn finish(
    completions: Vec<&'static str>,
    wordlist: &WordList,
    length: MnemonicLength,
) -> Result<Vec<&'static str>, MnemonicError> {
    if completions.is_empty() {
        #[cfg(feature = "tracing")]
        tracing::event!(
            tracing::Level::ERROR,
            words = length.word_count(),
            language = wordlist.language().name(),
            "no word completes a well formed prefix"
        );
        return Err(MnemonicError::NoValidCompletion);
    }

    #[cfg(feature = "tracing")]
    tracing::event!(
        tracing::Level::DEBUG,
        words = length.word_count(),
        language = wordlist.language().name(),
        found = completions.len(),
        "found last word candidates"
    );

    Ok(completions)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlist::Language;
    use alloc::string::String;

    #[test]
    fn all_abandon_prefix_24() {
        let wordlist = WordList::new(Language::English);
        let completions = find_completions(&["abandon"; 23], &wordlist).unwrap();
        assert_eq!(completions.len(), 8);
        assert!(completions.contains(&"art"));
    }

    #[test]
    fn all_abandon_prefix_12() {
        let wordlist = WordList::new(Language::English);
        let completions = find_completions(&["abandon"; 11], &wordlist).unwrap();
        assert_eq!(completions.len(), 128);
        assert_eq!(completions[0], "about");
    }

    #[test]
    fn prefix_length_must_make_a_valid_mnemonic() {
        let wordlist = WordList::new(Language::English);
        assert_eq!(
            find_completions(&["abandon"; 22], &wordlist),
            Err(MnemonicError::InvalidWordCount(23))
        );
        assert_eq!(
            find_completions(&["abandon"; 24], &wordlist),
            Err(MnemonicError::InvalidWordCount(25))
        );
        assert_eq!(
            find_completions::<&str>(&[], &wordlist),
            Err(MnemonicError::InvalidWordCount(1))
        );
    }

    #[test]
    fn unknown_prefix_word() {
        let wordlist = WordList::new(Language::English);
        let mut prefix = ["zoo"; 23];
        prefix[0] = "Zoo";
        assert_eq!(
            find_completions(&prefix, &wordlist),
            Err(MnemonicError::UnknownWord {
                position: 0,
                word: String::from("Zoo"),
            })
        );
    }

    #[cfg(feature = "rayon")]
    #[test]
    fn parallel_matches_sequential() {
        let wordlist = WordList::new(Language::Spanish);
        let prefix = &wordlist.all()[100..123];
        assert_eq!(
            find_completions_par(prefix, &wordlist),
            find_completions(prefix, &wordlist)
        );
    }
}
