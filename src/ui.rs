use crossterm::style::{Color, Stylize};
use std::fmt::Display;
use std::io::{self, Write};

use crate::{summary::Summary, trial::TrialResult};

/// Line oriented console output for a session
#[derive(Debug)]
pub struct Screen<W: Write> {
    out: W,
    color: bool,
}

impl<W: Write> Screen<W> {
    /// `color` should only be set when `out` is a terminal
    pub fn new(out: W, color: bool) -> Self {
        Self { out, color }
    }

    pub fn plain(out: W) -> Self {
        Self::new(out, false)
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn paint<T: Display>(&self, text: T, color: Color) -> String {
        if self.color {
            text.to_string().with(color).bold().to_string()
        } else {
            text.to_string()
        }
    }

    fn line<T: Display>(&mut self, text: T) -> io::Result<()> {
        writeln!(self.out, "{text}")?;
        self.out.flush()
    }

    pub fn get_ready(&mut self) -> io::Result<()> {
        let text = self.paint("Get Ready: ", Color::Yellow);
        self.line(text)
    }

    pub fn countdown(&mut self, n: u32) -> io::Result<()> {
        let text = self.paint(n, Color::Yellow);
        self.line(text)
    }

    pub fn sentence(&mut self, sentence: &str) -> io::Result<()> {
        self.line(sentence)
    }

    pub fn trial_result(&mut self, result: &TrialResult) -> io::Result<()> {
        let wpm = self.paint(format!("{:.2}", result.wpm), Color::Cyan);
        let accuracy = self.paint(format!("{:.2}%", result.accuracy * 100.0), Color::Cyan);
        self.line(format!("WPM: {wpm}"))?;
        self.line(format!("Accuracy: {accuracy}"))
    }

    pub fn summary(&mut self, summary: &Summary) -> io::Result<()> {
        let wpm = self.paint(format!("{:.2}", summary.average_wpm), Color::Green);
        let accuracy = self.paint(
            format!("{:.2}%", summary.average_accuracy * 100.0),
            Color::Green,
        );
        self.line("")?;
        self.line(format!(
            "Your average wpm was {wpm} and your average accuracy was {accuracy}"
        ))?;
        self.line("")?;
        self.line(summary.consistency_sentence())
    }

    pub fn farewell(&mut self) -> io::Result<()> {
        self.line("Thanks for playing!")
    }

    pub fn json(&mut self, summary: &Summary) -> io::Result<()> {
        let data = serde_json::to_string_pretty(summary).map_err(io::Error::other)?;
        self.line(data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rendered<F>(f: F) -> String
    where
        F: FnOnce(&mut Screen<Vec<u8>>) -> io::Result<()>,
    {
        let mut screen = Screen::plain(Vec::new());
        f(&mut screen).unwrap();
        String::from_utf8(screen.into_inner()).unwrap()
    }

    #[test]
    fn trial_result_lines() {
        let out = rendered(|s| s.trial_result(&TrialResult::new(28.0, 2.0 / 3.0)));
        assert_eq!(out, "WPM: 28.00\nAccuracy: 66.67%\n");
    }

    #[test]
    fn countdown_prints_digit() {
        let out = rendered(|s| {
            s.get_ready()?;
            s.countdown(3)
        });
        assert_eq!(out, "Get Ready: \n3\n");
    }

    #[test]
    fn summary_lines() {
        let results = vec![TrialResult::new(40.0, 1.0), TrialResult::new(42.0, 0.98)];
        let summary = Summary::from_results(&results).unwrap();

        let out = rendered(|s| s.summary(&summary));
        assert!(out.contains("Your average wpm was 41.00 and your average accuracy was 99.00%"));
        assert!(out.contains(
            "You were extremely consistent in typing speed and extremely consistent in accuracy."
        ));
    }

    #[test]
    fn plain_screen_has_no_escape_codes() {
        let out = rendered(|s| s.countdown(1));
        assert!(!out.contains('\u{1b}'));
    }

    #[test]
    fn colored_screen_styles_numbers() {
        let mut screen = Screen::new(Vec::new(), true);
        screen.countdown(2).unwrap();
        let out = String::from_utf8(screen.into_inner()).unwrap();
        assert!(out.contains('\u{1b}'));
        assert!(out.contains('2'));
    }

    #[test]
    fn json_summary_is_valid() {
        let summary = Summary::from_results(&[TrialResult::new(50.0, 0.9)]).unwrap();
        let out = rendered(|s| s.json(&summary));
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["average_wpm"], 50.0);
    }
}
