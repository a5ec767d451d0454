use rand::Rng;
use std::io::{self, Write};
use std::ops::Range;
use thiserror::Error;
use tracing::debug;

use crate::{
    runtime::{Clock, LineSource, Pacer, Pacing, COUNTDOWN_FROM},
    summary::Summary,
    trial::{Trial, TrialResult},
    ui::Screen,
    word_generator::{WordGenerator, DEFAULT_MAX_WORDS, DEFAULT_MIN_WORDS},
    word_list::WordList,
};

/// Number of trials in a session
pub const DEFAULT_TRIALS: usize = 5;

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("console i/o failed: {0}")]
    Io(#[from] io::Error),

    #[error("input closed before trial {trial} was typed")]
    InputClosed { trial: usize },

    #[error("session has no trials")]
    NoTrials,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SessionConfig {
    pub trials: usize,
    pub word_count: Range<usize>,
    pub pacing: Pacing,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            trials: DEFAULT_TRIALS,
            word_count: DEFAULT_MIN_WORDS..DEFAULT_MAX_WORDS,
            pacing: Pacing::default(),
        }
    }
}

/// Runs the trials of one sitting, one after another
pub struct Session<I: LineSource, P: Pacer, C: Clock> {
    config: SessionConfig,
    input: I,
    pacer: P,
    clock: C,
    results: Vec<TrialResult>,
}

impl<I: LineSource, P: Pacer, C: Clock> Session<I, P, C> {
    pub fn new(config: SessionConfig, input: I, pacer: P, clock: C) -> Self {
        Self {
            results: Vec::new(),
            config,
            input,
            pacer,
            clock,
        }
    }

    pub fn results(&self) -> &[TrialResult] {
        &self.results
    }

    pub fn pacer(&self) -> &P {
        &self.pacer
    }

    /// Run every trial, print the summary and return it
    pub fn run<R, W>(
        &mut self,
        words: &WordList,
        rng: &mut R,
        screen: &mut Screen<W>,
    ) -> Result<Summary, SessionError>
    where
        R: Rng + ?Sized,
        W: Write,
    {
        let generator = WordGenerator::new(words, self.config.word_count.clone());

        for n in 1..=self.config.trials {
            let trial = generator.generate(rng);
            let result = self.run_trial(n, &trial, screen)?;
            self.results.push(result);
            self.pacer.pause(self.config.pacing.between_trials);
        }

        let summary = Summary::from_results(&self.results).ok_or(SessionError::NoTrials)?;
        screen.summary(&summary)?;
        self.pacer.pause(self.config.pacing.farewell);
        screen.farewell()?;

        Ok(summary)
    }

    /// Count down, show the sentence, time one typed line and score it
    pub fn run_trial<W: Write>(
        &mut self,
        n: usize,
        trial: &Trial,
        screen: &mut Screen<W>,
    ) -> Result<TrialResult, SessionError> {
        let pacing = self.config.pacing;

        screen.get_ready()?;
        self.pacer.pause(pacing.get_ready);
        for digit in (1..=COUNTDOWN_FROM).rev() {
            screen.countdown(digit)?;
            self.pacer.pause(pacing.countdown_step);
        }

        screen.sentence(&trial.sentence)?;
        let started_at = self.clock.now();
        let line = self
            .input
            .read_line()?
            .ok_or(SessionError::InputClosed { trial: n })?;
        let elapsed = self.clock.now().saturating_duration_since(started_at);

        let (result, tally) = trial.score(&line, elapsed);
        debug!(
            trial = n,
            words = trial.word_count(),
            elapsed_ms = elapsed.as_millis() as u64,
            correct = tally.correct,
            incorrect = tally.incorrect,
            "trial scored"
        );

        screen.trial_result(&result)?;
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runtime::{RecordingPacer, ScriptedLines, SteppingClock};
    use assert_matches::assert_matches;
    use rand::{rngs::StdRng, SeedableRng};
    use std::time::Duration;

    fn words() -> WordList {
        WordList::parse("the of and a to in is you that it", 10).unwrap()
    }

    fn trial(ws: &[&str]) -> Trial {
        Trial::new(ws.iter().map(|w| w.to_string()).collect())
    }

    fn output(screen: Screen<Vec<u8>>) -> String {
        String::from_utf8(screen.into_inner()).unwrap()
    }

    #[test]
    fn trial_follows_countdown_sequence() {
        let mut session = Session::new(
            SessionConfig::default(),
            ScriptedLines::new(["the is a\n"]),
            RecordingPacer::new(),
            SteppingClock::new(Duration::from_secs(6)),
        );
        let mut screen = Screen::plain(Vec::new());

        session
            .run_trial(1, &trial(&["the", "is", "a"]), &mut screen)
            .unwrap();

        assert_eq!(
            session.pacer().pauses,
            vec![
                Duration::from_secs(2),
                Duration::from_secs(1),
                Duration::from_secs(1),
                Duration::from_secs(1)
            ]
        );
        let out = output(screen);
        assert!(out.starts_with("Get Ready: \n3\n2\n1\nthe is a \n"));
        assert!(out.contains("Accuracy: 100.00%"));
    }

    #[test]
    fn short_input_counts_missing_words() {
        let mut session = Session::new(
            SessionConfig::default(),
            ScriptedLines::new(["the is\n"]),
            RecordingPacer::new(),
            SteppingClock::new(Duration::from_secs(60)),
        );
        let mut screen = Screen::plain(Vec::new());

        let result = session
            .run_trial(1, &trial(&["the", "is", "a"]), &mut screen)
            .unwrap();

        assert!((result.accuracy - 2.0 / 3.0).abs() < 1e-12);
        // "the is a " is 9 chars -> 1 word, minus 1 error, over one minute
        assert_eq!(result.wpm, 0.0);
    }

    #[test]
    fn run_collects_every_trial() {
        let config = SessionConfig {
            trials: 3,
            word_count: 2..4,
            pacing: Pacing::instant(),
        };
        let mut session = Session::new(
            config,
            ScriptedLines::new(["x\n", "x\n", "x\n"]),
            RecordingPacer::new(),
            SteppingClock::new(Duration::from_secs(10)),
        );
        let mut screen = Screen::plain(Vec::new());
        let mut rng = StdRng::seed_from_u64(5);

        let summary = session.run(&words(), &mut rng, &mut screen).unwrap();

        assert_eq!(summary.trials, 3);
        assert_eq!(session.results().len(), 3);
        let out = output(screen);
        assert_eq!(out.matches("Get Ready: ").count(), 3);
        assert!(out.ends_with("Thanks for playing!\n"));
    }

    #[test]
    fn closed_input_aborts_session() {
        let config = SessionConfig {
            trials: 2,
            word_count: 2..3,
            pacing: Pacing::instant(),
        };
        let mut session = Session::new(
            config,
            ScriptedLines::new(["only one line\n"]),
            RecordingPacer::new(),
            SteppingClock::new(Duration::from_secs(1)),
        );
        let mut screen = Screen::plain(Vec::new());
        let mut rng = StdRng::seed_from_u64(5);

        let err = session.run(&words(), &mut rng, &mut screen).unwrap_err();
        assert_matches!(err, SessionError::InputClosed { trial: 2 });
        assert_eq!(session.results().len(), 1);
    }

    #[test]
    fn huge_trial_count_does_not_allocate_up_front() {
        let config = SessionConfig {
            trials: usize::MAX / 2,
            word_count: 2..3,
            pacing: Pacing::instant(),
        };
        let mut session = Session::new(
            config,
            ScriptedLines::new(["the of\n"]),
            RecordingPacer::new(),
            SteppingClock::new(Duration::from_secs(1)),
        );
        assert!(session.results().is_empty());

        // input runs out long before the trial count does
        let mut screen = Screen::plain(Vec::new());
        let err = session
            .run(&words(), &mut StdRng::seed_from_u64(5), &mut screen)
            .unwrap_err();
        assert_matches!(err, SessionError::InputClosed { trial: 2 });
        assert_eq!(session.results().len(), 1);
    }

    #[test]
    fn zero_trials_has_no_summary() {
        let config = SessionConfig {
            trials: 0,
            ..SessionConfig::default()
        };
        let mut session = Session::new(
            config,
            ScriptedLines::default(),
            RecordingPacer::new(),
            SteppingClock::new(Duration::from_secs(1)),
        );
        let mut screen = Screen::plain(Vec::new());
        let mut rng = StdRng::seed_from_u64(5);

        let err = session.run(&words(), &mut rng, &mut screen).unwrap_err();
        assert_matches!(err, SessionError::NoTrials);
    }
}
