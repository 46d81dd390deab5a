//! BIP39 word lists and 11-bit word indices

use crate::error::{MnemonicError, UnknownLanguage};
use alloc::{collections::BTreeMap, string::ToString, vec::Vec};
use core::{fmt, str::FromStr};

/// Number of words in every BIP39 word list
pub const WORDLIST_LEN: usize = 2048;

/// Number of bits each word encodes
pub const BITS_PER_WORD: u8 = 11;

/// Languages with a standard BIP39 word list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Language {
    #[default]
    English,
    ChineseSimplified,
    ChineseTraditional,
    Czech,
    French,
    Italian,
    Japanese,
    Korean,
    Portuguese,
    Spanish,
}

impl Language {
    pub const ALL: [Language; 10] = [
        Language::English,
        Language::ChineseSimplified,
        Language::ChineseTraditional,
        Language::Czech,
        Language::French,
        Language::Italian,
        Language::Japanese,
        Language::Korean,
        Language::Portuguese,
        Language::Spanish,
    ];

    /// The identifier used to select this language on the command line
    pub fn name(self) -> &'static str {
        match self {
            Language::English => "english",
            Language::ChineseSimplified => "chinese_simplified",
            Language::ChineseTraditional => "chinese_traditional",
            Language::Czech => "czech",
            Language::French => "french",
            Language::Italian => "italian",
            Language::Japanese => "japanese",
            Language::Korean => "korean",
            Language::Portuguese => "portuguese",
            Language::Spanish => "spanish",
        }
    }

    /// The standard word list for this language in canonical order
    pub fn words(self) -> &'static [&'static str; WORDLIST_LEN] {
        let language = match self {
            Language::English => bip39::Language::English,
            Language::ChineseSimplified => bip39::Language::SimplifiedChinese,
            Language::ChineseTraditional => bip39::Language::TraditionalChinese,
            Language::Czech => bip39::Language::Czech,
            Language::French => bip39::Language::French,
            Language::Italian => bip39::Language::Italian,
            Language::Japanese => bip39::Language::Japanese,
            Language::Korean => bip39::Language::Korean,
            Language::Portuguese => bip39::Language::Portuguese,
            Language::Spanish => bip39::Language::Spanish,
        };
        language.word_list()
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Language {
    type Err = UnknownLanguage;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Language::ALL
            .into_iter()
            .find(|language| language.name() == s)
            .ok_or_else(|| UnknownLanguage(s.to_string()))
    }
}

/// A position in a word list. Always in `0..2048`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct WordIndex(u16);

impl WordIndex {
    pub const MAX: WordIndex = WordIndex((WORDLIST_LEN - 1) as u16);

    pub fn new(index: u16) -> Result<Self, MnemonicError> {
        if (index as usize) < WORDLIST_LEN {
            Ok(WordIndex(index))
        } else {
            Err(MnemonicError::IndexOutOfRange(index))
        }
    }

    /// Takes the low 11 bits of `bits`
    pub(crate) fn from_low_bits(bits: u32) -> Self {
        WordIndex((bits & ((1 << BITS_PER_WORD) - 1)) as u16)
    }

    pub fn get(self) -> u16 {
        self.0
    }

    /// Every index in list order
    pub fn all() -> impl DoubleEndedIterator<Item = WordIndex> + ExactSizeIterator {
        (0..WORDLIST_LEN as u16).map(WordIndex)
    }
}

impl TryFrom<u16> for WordIndex {
    type Error = MnemonicError;

    fn try_from(index: u16) -> Result<Self, Self::Error> {
        WordIndex::new(index)
    }
}

impl From<WordIndex> for u16 {
    fn from(index: WordIndex) -> u16 {
        index.0
    }
}

impl fmt::Display for WordIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The word list for one language with lookups in both directions.
///
/// Build it once with [`WordList::new`] and share it by reference. It never
/// changes after construction.
#[derive(Debug, Clone)]
pub struct WordList {
    language: Language,
    words: &'static [&'static str; WORDLIST_LEN],
    lookup: BTreeMap<&'static str, WordIndex>,
}

impl WordList {
    pub fn new(language: Language) -> Self {
        let words = language.words();
        let lookup = words
            .iter()
            .copied()
            .zip(WordIndex::all())
            .collect::<BTreeMap<_, _>>();
        debug_assert_eq!(lookup.len(), WORDLIST_LEN, "word list has duplicates");
        Self {
            language,
            words,
            lookup,
        }
    }

    pub fn language(&self) -> Language {
        self.language
    }

    /// Exact, case sensitive lookup of a word's position
    pub fn index_of(&self, word: &str) -> Option<WordIndex> {
        self.lookup.get(word).copied()
    }

    pub fn word_at(&self, index: WordIndex) -> &'static str {
        self.words[index.0 as usize]
    }

    /// The whole list in canonical order
    pub fn all(&self) -> &'static [&'static str] {
        self.words
    }

    pub fn contains(&self, word: &str) -> bool {
        self.lookup.contains_key(word)
    }

    /// Get all words that start with the given prefix, in list order
    pub fn words_with_prefix(&self, prefix: &str) -> Vec<&'static str> {
        self.words
            .iter()
            .copied()
            .filter(|word| word.starts_with(prefix))
            .collect()
    }
}

impl Default for WordList {
    fn default() -> Self {
        WordList::new(Language::default())
    }
}
