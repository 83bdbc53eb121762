//! Terminal host for the wordily trainer.
//!
//! Owns everything the core deliberately does not: reading the word file,
//! the frame loop, stdin as the next-card button, and drawing the card view
//! with ANSI colors. Press Enter for the next card, Ctrl-D to quit.

use std::{
    fs,
    io::{self, BufRead, Write},
    path::PathBuf,
    sync::{
        Arc,
        atomic::{AtomicBool, Ordering},
        mpsc::{self, Receiver, TryRecvError},
    },
    thread,
    time::{Duration, Instant},
};

use anyhow::{Context, Result};
use clap::Parser;
use log::error;
use wordily_core::{
    app::{TickResult, TrainerApp, TrainerConfig},
    input::{InputEvent, InputProvider},
    random::StdIndexRandom,
    render::CardView,
    words::WordStore,
};

const TICK_INTERVAL: Duration = Duration::from_millis(33);

#[derive(Parser, Debug)]
#[command(name = "wordily", version, about = "Flashcard vocabulary trainer")]
struct Args {
    /// Path to a `term,meaning` word list.
    #[arg(default_value = "words.txt")]
    words: PathBuf,

    /// Fade duration in seconds.
    #[arg(long, default_value_t = 0.5)]
    fade: f32,

    /// RNG seed for a reproducible session.
    #[arg(long)]
    seed: Option<u64>,
}

/// Enter presses arriving from a reader thread, drained per tick.
struct StdinButton {
    events: Receiver<InputEvent>,
}

impl StdinButton {
    /// Spawn the reader thread. The returned flag flips once stdin closes.
    fn spawn() -> (Self, Arc<AtomicBool>) {
        let (tx, rx) = mpsc::channel();
        let closed = Arc::new(AtomicBool::new(false));
        let closed_flag = Arc::clone(&closed);

        thread::spawn(move || {
            let stdin = io::stdin();
            for line in stdin.lock().lines() {
                if line.is_err() || tx.send(InputEvent::Press).is_err() {
                    break;
                }
            }
            closed_flag.store(true, Ordering::Relaxed);
        });

        (Self { events: rx }, closed)
    }
}

impl InputProvider for StdinButton {
    type Error = ();

    fn poll_event(&mut self) -> Result<Option<InputEvent>, Self::Error> {
        match self.events.try_recv() {
            Ok(event) => Ok(Some(event)),
            Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => Ok(None),
        }
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let raw = fs::read_to_string(&args.words)
        .with_context(|| format!("cannot read word list {}", args.words.display()));
    let raw = match raw {
        Ok(raw) => raw,
        Err(err) => {
            error!("{err:#}");
            String::new()
        }
    };

    let store = WordStore::parse(&raw);
    let rng = match args.seed {
        Some(seed) => StdIndexRandom::seeded(seed),
        None => StdIndexRandom::from_entropy(),
    };
    let config = TrainerConfig {
        fade_duration: args.fade,
        ..TrainerConfig::default()
    };

    let (input, stdin_closed) = StdinButton::spawn();
    let mut app = TrainerApp::new(store, input, rng, config);
    app.show_next();

    let mut last = Instant::now();
    loop {
        thread::sleep(TICK_INTERVAL);
        let now = Instant::now();
        let dt = now.duration_since(last).as_secs_f32();
        last = now;

        if app.tick(dt) == TickResult::RenderRequested {
            app.with_card(render);
        }

        if stdin_closed.load(Ordering::Relaxed) && !app.in_transition() {
            break;
        }
    }

    println!();
    Ok(())
}

/// Redraw the single status line: term and meaning dimmed by their alphas,
/// with a marker while the button pulse is active.
fn render(card: CardView<'_>) {
    let mut out = io::stdout().lock();
    let _ = write!(
        out,
        "\r\x1b[2K  {}{}\x1b[0m  -  {}{}\x1b[0m  {}",
        gray(card.term_alpha),
        card.term,
        gray(card.meaning_alpha),
        card.meaning,
        if card.button_scale < 1.0 { "*" } else { " " },
    );
    let _ = out.flush();
}

/// 256-color grayscale escape for an alpha in 0..=1.
fn gray(alpha: f32) -> String {
    let level = 232 + (alpha.clamp(0.0, 1.0) * 23.0).round() as u8;
    format!("\x1b[38;5;{level}m")
}
