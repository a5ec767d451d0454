use clap::{error::ErrorKind, CommandFactory, Parser};
use crossterm::tty::IsTty;
use std::{
    env,
    error::Error,
    io::{self, stdout},
    path::PathBuf,
    process,
};
use typespeed::{
    config::{Config, ConfigStore, FileConfigStore},
    runtime::{ReaderLines, SystemClock, ThreadPacer},
    session::Session,
    ui::Screen,
    word_list::WordList,
};

/// timed typing test over random common words
#[derive(Parser, Debug, Clone)]
#[clap(
    version,
    about,
    long_about = "Types out random sequences of common words over several timed trials, then reports words per minute, accuracy and how consistent you were."
)]
pub struct Cli {
    /// word list file, whitespace separated
    #[clap(short = 'f', long)]
    words_file: Option<PathBuf>,

    /// number of words to load from the word list
    #[clap(short = 'n', long)]
    word_list_size: Option<usize>,

    /// number of timed trials
    #[clap(short = 't', long)]
    trials: Option<usize>,

    /// fewest words in a trial
    #[clap(long)]
    min_words: Option<usize>,

    /// trials hold fewer words than this
    #[clap(long)]
    max_words: Option<usize>,

    /// skip the countdown and the pauses between trials
    #[clap(long)]
    no_delay: bool,

    /// also print the summary as json
    #[clap(long)]
    json: bool,

    /// config file to read settings from
    #[clap(long)]
    config: Option<PathBuf>,

    /// save the effective settings to the config file
    #[clap(long)]
    save_config: bool,
}

impl Cli {
    /// Command line flags take precedence over the stored config
    fn apply(&self, mut cfg: Config) -> Config {
        if let Some(path) = &self.words_file {
            cfg.word_list_path = path.clone();
        }
        if let Some(size) = self.word_list_size {
            cfg.word_list_size = size;
        }
        if let Some(trials) = self.trials {
            cfg.trials = trials;
        }
        if let Some(min) = self.min_words {
            cfg.min_words = min;
        }
        if let Some(max) = self.max_words {
            cfg.max_words = max;
        }
        cfg
    }

    /// Settings for this run only; `--no-delay` is never persisted
    fn run_config(&self, cfg: &Config) -> Config {
        if self.no_delay {
            cfg.clone().without_delays()
        } else {
            cfg.clone()
        }
    }

    fn config_store(&self) -> FileConfigStore {
        match &self.config {
            Some(path) => FileConfigStore::with_path(path),
            None => FileConfigStore::new(),
        }
    }
}

fn init_tracing() {
    let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "warn".to_string());
    tracing_subscriber::fmt()
        .with_env_filter(log_level.as_str())
        .with_target(false)
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_tty())
        .init();
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();
    init_tracing();

    let store = cli.config_store();
    let cfg = cli.apply(store.load());
    let run_cfg = cli.run_config(&cfg);

    let session_config = match run_cfg.session_config() {
        Ok(sc) => sc,
        Err(err) => Cli::command()
            .error(ErrorKind::ValueValidation, err)
            .exit(),
    };

    if cli.save_config {
        store.save(&cfg)?;
    }

    let words = match WordList::load(&run_cfg.word_list_path, run_cfg.word_list_size) {
        Ok(words) => words,
        Err(err) => Cli::command().error(ErrorKind::Io, err).exit(),
    };

    let color = stdout().is_tty();
    let mut screen = Screen::new(stdout().lock(), color);
    let mut session = Session::new(
        session_config,
        ReaderLines::stdin(),
        ThreadPacer,
        SystemClock,
    );

    let summary = match session.run(&words, &mut rand::thread_rng(), &mut screen) {
        Ok(summary) => summary,
        Err(err) => {
            eprintln!("error: {err}");
            process::exit(1);
        }
    };
    if cli.json {
        screen.json(&summary)?;
    }

    Ok(())
}
