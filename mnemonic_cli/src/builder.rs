use crate::prompt::{ordinal, Prompt, PromptError};
use mnemonic_core::{find_completions_par, Mnemonic, MnemonicCodec, MnemonicError, MnemonicLength, WordList};
use std::fmt;
use std::io::{BufRead, Write};
use tracing::{event, Level};

#[derive(Debug)]
pub enum BuildError {
    /// Gave up while picking the fixed words
    PrefixAborted,
    /// Gave up while picking the last word
    LastWordAborted,
    Io(std::io::Error),
    Mnemonic(MnemonicError),
}

impl BuildError {
    /// Process exit code for this failure
    pub fn exit_code(&self) -> i32 {
        match self {
            BuildError::LastWordAborted => 2,
            _ => 1,
        }
    }
}

impl fmt::Display for BuildError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BuildError::PrefixAborted | BuildError::LastWordAborted => {
                write!(f, "{}", PromptError::Aborted)
            }
            BuildError::Io(e) => write!(f, "{}", e),
            BuildError::Mnemonic(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for BuildError {}

impl From<MnemonicError> for BuildError {
    fn from(e: MnemonicError) -> Self {
        BuildError::Mnemonic(e)
    }
}

impl From<std::io::Error> for BuildError {
    fn from(e: std::io::Error) -> Self {
        BuildError::Io(e)
    }
}

fn prompt_error(e: PromptError, aborted: BuildError) -> BuildError {
    match e {
        PromptError::Aborted => aborted,
        PromptError::Io(e) => BuildError::Io(e),
    }
}

/// Has the user hand pick all but the last word then choose the last one from
/// the words that give a valid checksum.
pub fn build_mnemonic<R: BufRead, W: Write>(
    prompt: &mut Prompt<R, W>,
    wordlist: &WordList,
    length: MnemonicLength,
) -> Result<Mnemonic, BuildError> {
    let n_fixed = length.word_count() - 1;
    prompt.println(format_args!(
        "To build your mnemonic, you can hand pick the first {} words of the mnemonic.\n\
         The last word can be chosen from a shorter list, to match the correct checksum of your mnemonic.",
        n_fixed
    ))?;

    let mut words = Vec::with_capacity(length.word_count());
    for i in 0..n_fixed {
        let label = format!("Select {} word", ordinal(i + 1));
        let word = prompt
            .select_word(&label, wordlist)
            .map_err(|e| prompt_error(e, BuildError::PrefixAborted))?;
        words.push(word);
    }

    let candidates = find_completions_par(&words, wordlist)?;
    event!(
        Level::DEBUG,
        candidates = candidates.len(),
        "choosing the last word"
    );

    let last = prompt
        .select_from("Select last word", &candidates)
        .map_err(|e| prompt_error(e, BuildError::LastWordAborted))?;
    words.push(last);

    Ok(MnemonicCodec::new(wordlist).mnemonic(&words)?)
}
