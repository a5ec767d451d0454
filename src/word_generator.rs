use rand::{seq::SliceRandom, Rng};
use std::ops::Range;

use crate::{trial::Trial, word_list::WordList};

/// Smallest number of words in a trial
pub const DEFAULT_MIN_WORDS: usize = 25;

/// Trials hold fewer words than this
pub const DEFAULT_MAX_WORDS: usize = 50;

/// Builds the random word sequences shown in each trial
#[derive(Debug)]
pub struct WordGenerator<'a> {
    words: &'a WordList,
    word_count: Range<usize>,
}

impl<'a> WordGenerator<'a> {
    /// `word_count` is half open; an empty range always yields its start
    pub fn new(words: &'a WordList, word_count: Range<usize>) -> Self {
        Self { words, word_count }
    }

    pub fn word_count<R: Rng + ?Sized>(&self, rng: &mut R) -> usize {
        if self.word_count.is_empty() {
            return self.word_count.start;
        }
        rng.gen_range(self.word_count.clone())
    }

    /// Draw `count` words independently, duplicates allowed
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R, count: usize) -> Vec<String> {
        (0..count)
            .filter_map(|_| self.words.words().choose(rng).cloned())
            .collect()
    }

    pub fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> Trial {
        let count = self.word_count(rng);
        Trial::new(self.sample(rng, count))
    }
}
