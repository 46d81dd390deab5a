use mnemonic_core::*;
use proptest::test_runner::{RngAlgorithm, TestRng};
use rand::Rng;

#[test]
fn last_word_substitutions_that_keep_the_checksum() {
    // Swapping the last word keeps the mnemonic valid only when the new word is
    // one of the other 2^(11 - CS) - 1 completions of the same prefix.
    let wordlist = WordList::new(Language::English);
    let codec = MnemonicCodec::new(&wordlist);
    let mut rng = TestRng::deterministic_rng(RngAlgorithm::ChaCha);

    for length in MnemonicLength::ALL {
        let mut entropy = vec![0u8; length.entropy_bytes()];
        rng.fill(&mut entropy[..]);
        let mnemonic = codec.encode(&entropy).unwrap();
        let original_last = *mnemonic.words().last().unwrap();

        let mut still_valid = 0;
        for &word in wordlist.all() {
            if word == original_last {
                continue;
            }
            let mut words = mnemonic.words().to_vec();
            *words.last_mut().unwrap() = word;
            if codec.is_valid(&words).unwrap() {
                still_valid += 1;
            }
        }

        assert_eq!(
            still_valid,
            length.completions_per_prefix() - 1,
            "{} words",
            length
        );
    }
}

#[test]
fn inner_word_false_positive_rate() {
    let length = MnemonicLength::Words24;
    // Corrupting a word before the last one leaves a 1/2^CS chance the checksum
    // still matches.
    let expected_rate = 1.0 / (1u32 << length.checksum_bits()) as f64;

    let wordlist = WordList::new(Language::English);
    let codec = MnemonicCodec::new(&wordlist);
    let mut rng = TestRng::deterministic_rng(RngAlgorithm::ChaCha);

    let mut entropy = [0u8; 32];
    rng.fill(&mut entropy[..]);
    let mnemonic = codec.encode(&entropy).unwrap();
    let original_words = mnemonic.words();

    let mut false_positives = 0;
    let mut total_corruptions = 0;

    for word_index in 0..original_words.len() - 1 {
        for _corruption_attempt in 0..500 {
            let original_word = original_words[word_index];
            let new_word = loop {
                let candidate = wordlist.all()[rng.gen_range(0..2048)];
                if candidate != original_word {
                    break candidate;
                }
            };

            let mut corrupted_words = original_words.to_vec();
            corrupted_words[word_index] = new_word;
            total_corruptions += 1;

            if codec.is_valid(&corrupted_words).unwrap() {
                false_positives += 1;
            }
        }
    }

    let observed_rate = false_positives as f64 / total_corruptions as f64;

    println!("Total corruptions tested: {}", total_corruptions);
    println!("False positives: {}", false_positives);
    println!("Observed false positive rate: {:.6}", observed_rate);
    println!("Expected false positive rate: {:.6}", expected_rate);

    // ~11500 trials at p = 1/256 gives ~45 expected hits with a std dev of ~6.7
    let lower_bound = expected_rate * 0.5;
    let upper_bound = expected_rate * 2.0;

    assert!(
        observed_rate >= lower_bound && observed_rate <= upper_bound,
        "False positive rate {:.6} is outside expected range [{:.6}, {:.6}]",
        observed_rate,
        lower_bound,
        upper_bound
    );
}
