use clap::{CommandFactory, Parser};
use mnemonic_core::{find_completions_par, Language, MnemonicCodec, MnemonicLength, WordList};
use std::io::{self, BufRead, Write};
use tracing::{event, Level};

mod builder;
mod prompt;

#[derive(Parser)]
#[command(name = "mnemonic-builder", version)]
#[command(about = "Hand pick a BIP39 mnemonic and choose a last word with a valid checksum")]
struct Cli {
    #[arg(
        long,
        default_value = "english",
        help = "Mnemonic language (english chinese_simplified chinese_traditional czech french italian japanese korean portuguese spanish)"
    )]
    lang: String,

    #[arg(long, help = "List available words")]
    list: bool,

    #[arg(long, help = "Build a mnemonic")]
    build: bool,

    #[arg(
        long = "words",
        value_name = "N",
        default_value_t = MnemonicLength::Words24,
        value_parser = parse_length,
        help = "Number of words in the mnemonic to build (12, 15, 18, 21 or 24)"
    )]
    length: MnemonicLength,

    #[arg(
        long,
        value_name = "PREFIX",
        help = "Print every last word that completes these words into a valid mnemonic"
    )]
    complete: Option<String>,

    #[arg(long, value_name = "PHRASE", help = "Check the checksum of a full mnemonic")]
    check: Option<String>,

    #[arg(short, long)]
    verbose: bool,
}

fn parse_length(s: &str) -> Result<MnemonicLength, String> {
    let words = s.parse::<usize>().map_err(|e| e.to_string())?;
    MnemonicLength::from_word_count(words).map_err(|e| e.to_string())
}

/// Exit code when `--lang` names a word list we don't have
const EXIT_UNKNOWN_LANGUAGE: i32 = 3;
/// Exit code when `--check` is given a mnemonic with a bad checksum
const EXIT_INVALID_CHECKSUM: i32 = 4;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    tracing_subscriber::fmt()
        .with_max_level(if cli.verbose {
            Level::DEBUG
        } else {
            Level::INFO
        })
        .with_writer(io::stderr)
        .init();

    let stdin = io::stdin();
    let code = run(&cli, stdin.lock(), &mut io::stdout())?;
    if code != 0 {
        std::process::exit(code);
    }
    Ok(())
}

/// Carries out the actions asked for on the command line and returns the
/// process exit code.
fn run<R: BufRead, W: Write>(cli: &Cli, input: R, out: &mut W) -> anyhow::Result<i32> {
    let language = match cli.lang.parse::<Language>() {
        Ok(language) => language,
        Err(e) => {
            let supported = Language::ALL.map(Language::name).join(" ");
            eprintln!("{}", e);
            eprintln!("supported languages: {}", supported);
            return Ok(EXIT_UNKNOWN_LANGUAGE);
        }
    };
    let wordlist = WordList::new(language);
    event!(Level::DEBUG, language = language.name(), "loaded word list");

    if cli.list {
        writeln!(out, "{}", wordlist.all().join(" "))?;
    }

    if let Some(prefix) = &cli.complete {
        let prefix = prefix.split_whitespace().collect::<Vec<_>>();
        for word in find_completions_par(&prefix, &wordlist)? {
            writeln!(out, "{}", word)?;
        }
    }

    if let Some(phrase) = &cli.check {
        let words = phrase.split_whitespace().collect::<Vec<_>>();
        let decoded = MnemonicCodec::new(&wordlist).decode(&words)?;
        writeln!(out, "{}", if decoded.valid { "valid" } else { "invalid" })?;
        writeln!(out, "{}", hex::encode(&decoded.entropy))?;
        if !decoded.valid {
            return Ok(EXIT_INVALID_CHECKSUM);
        }
    }

    if cli.build {
        let built = {
            let mut prompt = prompt::Prompt::new(input, &mut *out);
            builder::build_mnemonic(&mut prompt, &wordlist, cli.length)
        };
        let mnemonic = match built {
            Ok(mnemonic) => mnemonic,
            Err(e) => {
                eprintln!("{}", e);
                return Ok(e.exit_code());
            }
        };
        writeln!(out, "Your mnemonic:")?;
        writeln!(out, "{}", mnemonic)?;
    }

    if !cli.list && !cli.build && cli.complete.is_none() && cli.check.is_none() {
        write!(out, "{}", Cli::command().render_help())?;
    }

    Ok(0)
}
