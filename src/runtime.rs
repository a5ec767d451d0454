use std::collections::VecDeque;
use std::io::{self, BufRead};
use std::time::{Duration, Instant};

/// Pause after "Get Ready" before the countdown starts
pub const GET_READY_DELAY: Duration = Duration::from_secs(2);
/// Pause after each countdown digit
pub const COUNTDOWN_STEP: Duration = Duration::from_secs(1);
/// Pause after a trial's results are shown
pub const BETWEEN_TRIALS_DELAY: Duration = Duration::from_secs(2);
/// Pause before the closing message
pub const FAREWELL_DELAY: Duration = Duration::from_secs(1);

/// First digit of the countdown
pub const COUNTDOWN_FROM: u32 = 3;

/// Durations of every pause in a session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pacing {
    pub get_ready: Duration,
    pub countdown_step: Duration,
    pub between_trials: Duration,
    pub farewell: Duration,
}

impl Default for Pacing {
    fn default() -> Self {
        Self {
            get_ready: GET_READY_DELAY,
            countdown_step: COUNTDOWN_STEP,
            between_trials: BETWEEN_TRIALS_DELAY,
            farewell: FAREWELL_DELAY,
        }
    }
}

impl Pacing {
    /// No pauses at all
    pub fn instant() -> Self {
        Self {
            get_ready: Duration::ZERO,
            countdown_step: Duration::ZERO,
            between_trials: Duration::ZERO,
            farewell: Duration::ZERO,
        }
    }
}

/// Blocks the session for UI pacing
pub trait Pacer {
    fn pause(&mut self, duration: Duration);
}

/// Production pacer that sleeps the current thread
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadPacer;

impl Pacer for ThreadPacer {
    fn pause(&mut self, duration: Duration) {
        if !duration.is_zero() {
            std::thread::sleep(duration);
        }
    }
}

/// Test pacer that records requested pauses instead of sleeping
#[derive(Debug, Default, Clone)]
pub struct RecordingPacer {
    pub pauses: Vec<Duration>,
}

impl RecordingPacer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn total(&self) -> Duration {
        self.pauses.iter().sum()
    }
}

impl Pacer for RecordingPacer {
    fn pause(&mut self, duration: Duration) {
        self.pauses.push(duration);
    }
}

/// Source of timestamps around the typed line
pub trait Clock {
    fn now(&mut self) -> Instant;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&mut self) -> Instant {
        Instant::now()
    }
}

/// Test clock that moves forward by a fixed step on every reading
#[derive(Debug, Clone)]
pub struct SteppingClock {
    current: Instant,
    step: Duration,
}

impl SteppingClock {
    pub fn new(step: Duration) -> Self {
        Self {
            current: Instant::now(),
            step,
        }
    }
}

impl Clock for SteppingClock {
    fn now(&mut self) -> Instant {
        self.current += self.step;
        self.current
    }
}

/// Supplies the user's typed lines
pub trait LineSource {
    /// Block until a full line is available. `Ok(None)` means input has ended.
    fn read_line(&mut self) -> io::Result<Option<String>>;
}

/// Reads lines from any buffered reader, stdin in production
#[derive(Debug)]
pub struct ReaderLines<R: BufRead> {
    reader: R,
}

impl<R: BufRead> ReaderLines<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl ReaderLines<io::StdinLock<'static>> {
    pub fn stdin() -> Self {
        Self::new(io::stdin().lock())
    }
}

impl<R: BufRead> LineSource for ReaderLines<R> {
    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        match self.reader.read_line(&mut line)? {
            0 => Ok(None),
            _ => Ok(Some(line)),
        }
    }
}

/// Test source replaying canned lines
#[derive(Debug, Default, Clone)]
pub struct ScriptedLines {
    lines: VecDeque<String>,
}

impl ScriptedLines {
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
        }
    }
}

impl LineSource for ScriptedLines {
    fn read_line(&mut self) -> io::Result<Option<String>> {
        Ok(self.lines.pop_front())
    }
}
