use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Characters counted as one word when computing wpm
pub const CHARS_PER_WORD: usize = 5;

#[derive(Clone, Debug, Copy, PartialEq, Eq)]
pub enum WordOutcome {
    Correct,
    Incorrect,
    /// the user stopped before reaching this word
    Missing,
}

#[derive(Clone, Debug, Copy, Default, PartialEq, Eq)]
pub struct WordTally {
    pub correct: usize,
    pub incorrect: usize,
}

impl WordTally {
    pub fn from_outcomes(outcomes: &[WordOutcome]) -> Self {
        outcomes.iter().fold(Self::default(), |mut tally, o| {
            match o {
                WordOutcome::Correct => tally.correct += 1,
                WordOutcome::Incorrect | WordOutcome::Missing => tally.incorrect += 1,
            }
            tally
        })
    }

    pub fn total(&self) -> usize {
        self.correct + self.incorrect
    }

    /// Fraction of words typed correctly, always within `[0, 1]`
    pub fn accuracy(&self) -> f64 {
        match self.total() {
            0 => 0.0,
            total => self.correct as f64 / total as f64,
        }
    }
}

/// wpm and accuracy of one finished trial
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrialResult {
    pub wpm: f64,
    pub accuracy: f64,
}

impl TrialResult {
    pub fn new(wpm: f64, accuracy: f64) -> Self {
        Self { wpm, accuracy }
    }
}

impl From<(f64, f64)> for TrialResult {
    fn from(v: (f64, f64)) -> Self {
        TrialResult {
            wpm: v.0,
            accuracy: v.1,
        }
    }
}

impl From<TrialResult> for (f64, f64) {
    fn from(r: TrialResult) -> Self {
        (r.wpm, r.accuracy)
    }
}

/// represents one round of words shown to the user
#[derive(Debug, Clone, PartialEq)]
pub struct Trial {
    pub target: Vec<String>,
    pub sentence: String,
}

impl Trial {
    pub fn new(target: Vec<String>) -> Self {
        let sentence = target.iter().fold(String::new(), |mut s, word| {
            s.push_str(word);
            s.push(' ');
            s
        });

        Self { target, sentence }
    }

    /// Length of the displayed sentence, trailing spaces included
    pub fn total_chars(&self) -> usize {
        self.sentence.chars().count()
    }

    pub fn word_count(&self) -> usize {
        self.target.len()
    }

    pub fn outcomes(&self, line: &str) -> Vec<WordOutcome> {
        compare(&self.target, &tokenize(line))
    }

    pub fn score(&self, line: &str, elapsed: Duration) -> (TrialResult, WordTally) {
        let tally = WordTally::from_outcomes(&self.outcomes(line));
        let wpm = words_per_minute(self.total_chars(), tally.incorrect, elapsed);

        (TrialResult::new(wpm, tally.accuracy()), tally)
    }
}

/// Split a typed line into words on single spaces.
///
/// Trailing whitespace (the line terminator included) is dropped first, so no
/// phantom empty word is produced at the end. Runs of spaces inside the line
/// still yield empty words.
pub fn tokenize(line: &str) -> Vec<&str> {
    let line = line.trim_end();
    if line.is_empty() {
        return vec![];
    }
    line.split(' ').collect()
}

/// Score each target word against the word typed at the same position.
/// Typed words past the end of the target are ignored.
pub fn compare<S: AsRef<str>>(target: &[String], typed: &[S]) -> Vec<WordOutcome> {
    target
        .iter()
        .enumerate()
        .map(|(idx, expected)| match typed.get(idx) {
            Some(word) if word.as_ref() == expected => WordOutcome::Correct,
            Some(_) => WordOutcome::Incorrect,
            None => WordOutcome::Missing,
        })
        .collect()
}

/// `(total_chars / 5 - incorrect) / minutes`, with whole-word division of the
/// character count. Zero elapsed time scores 0.
pub fn words_per_minute(total_chars: usize, incorrect: usize, elapsed: Duration) -> f64 {
    let minutes = elapsed.as_secs_f64() / 60.0;
    if minutes <= 0.0 {
        return 0.0;
    }

    let gross_words = (total_chars / CHARS_PER_WORD) as f64;
    (gross_words - incorrect as f64) / minutes
}
