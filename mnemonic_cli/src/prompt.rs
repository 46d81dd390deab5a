use mnemonic_core::WordList;
use std::fmt;
use std::io::{self, BufRead, Write};

/// How many matching words we show when an entry is ambiguous
const MAX_SHOWN: usize = 30;

#[derive(Debug)]
pub enum PromptError {
    /// Input ended before a selection was made
    Aborted,
    Io(io::Error),
}

impl fmt::Display for PromptError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PromptError::Aborted => write!(f, "input ended before a selection was made"),
            PromptError::Io(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for PromptError {}

impl From<io::Error> for PromptError {
    fn from(e: io::Error) -> Self {
        PromptError::Io(e)
    }
}

/// "1st", "2nd", "3rd", "4th", ... "11th", "12th", "13th", "21st"
pub fn ordinal(n: usize) -> String {
    let suffix = match (n % 10, n % 100) {
        (1, 11) | (2, 12) | (3, 13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    };
    format!("{}{}", n, suffix)
}

/// Line based word selection.
pub struct Prompt<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompt<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    #[cfg(test)]
    pub fn into_output(self) -> W {
        self.output
    }

    pub fn println(&mut self, line: impl fmt::Display) -> io::Result<()> {
        writeln!(self.output, "{}", line)
    }

    fn read_entry(&mut self, label: &str) -> Result<String, PromptError> {
        loop {
            write!(self.output, "{}: ", label)?;
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                writeln!(self.output)?;
                return Err(PromptError::Aborted);
            }
            let entry = line.trim();
            if !entry.is_empty() {
                return Ok(entry.to_string());
            }
        }
    }

    /// Asks until the entry is a word of `wordlist` or the prefix of exactly one
    pub fn select_word(
        &mut self,
        label: &str,
        wordlist: &WordList,
    ) -> Result<&'static str, PromptError> {
        loop {
            let entry = self.read_entry(label)?;
            if let Some(index) = wordlist.index_of(&entry) {
                return Ok(wordlist.word_at(index));
            }

            let matches = wordlist.words_with_prefix(&entry);
            match matches.as_slice() {
                [] => writeln!(
                    self.output,
                    "'{}' is not in the {} word list",
                    entry,
                    wordlist.language()
                )?,
                [word] => {
                    writeln!(self.output, "  {}", word)?;
                    return Ok(*word);
                }
                many => {
                    let shown = many.iter().take(MAX_SHOWN).copied().collect::<Vec<_>>();
                    write!(self.output, "  {}", shown.join(" "))?;
                    if many.len() > MAX_SHOWN {
                        write!(self.output, " ... and {} more", many.len() - MAX_SHOWN)?;
                    }
                    writeln!(self.output)?;
                }
            }
        }
    }

    /// Shows `items` numbered from 1 and asks for a number or one of the items
    pub fn select_from(
        &mut self,
        label: &str,
        items: &[&'static str],
    ) -> Result<&'static str, PromptError> {
        for (i, item) in items.iter().enumerate() {
            writeln!(self.output, "  {:>2}) {}", i + 1, item)?;
        }
        loop {
            let entry = self.read_entry(label)?;
            if let Some(item) = items.iter().find(|item| **item == entry) {
                return Ok(*item);
            }
            match entry.parse::<usize>() {
                Ok(n) if (1..=items.len()).contains(&n) => return Ok(items[n - 1]),
                _ => writeln!(
                    self.output,
                    "choose a number from 1 to {} or one of the words above",
                    items.len()
                )?,
            }
        }
    }
}
