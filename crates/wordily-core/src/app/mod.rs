//! Flashcard presentation state machine: selection, card transitions, and
//! press feedback.

use log::warn;

use crate::{
    input::{InputEvent, InputProvider},
    random::IndexRandom,
    render::{CardView, Fade, JoinBarrier, ScalePulse},
    words::WordStore,
};

const TERM_SLOT: usize = 0;
const MEANING_SLOT: usize = 1;
/// Display slots fading concurrently in each transition phase.
const FADE_SLOTS: u8 = 2;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum TickResult {
    NoRender,
    RenderRequested,
}

/// Timing knobs for the card transition and press feedback.
///
/// Durations are seconds of accumulated tick delta.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TrainerConfig {
    pub fade_duration: f32,
    pub button_click_scale: f32,
    pub button_click_duration: f32,
}

impl Default for TrainerConfig {
    fn default() -> Self {
        Self {
            fade_duration: 0.5,
            button_click_scale: 0.9,
            button_click_duration: 0.1,
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum TransitionPhase {
    FadingOut,
    FadingIn,
}

/// In-flight two-phase card swap: one fade per display slot, gated by a
/// join barrier before the phase switch and again before completion.
#[derive(Clone, Copy, Debug, PartialEq)]
struct Transition {
    phase: TransitionPhase,
    fades: [Fade; FADE_SLOTS as usize],
    barrier: JoinBarrier,
}

#[derive(Clone, Debug)]
struct DisplaySlot {
    text: String,
    alpha: f32,
}

impl DisplaySlot {
    fn new() -> Self {
        Self {
            text: String::new(),
            alpha: 1.0,
        }
    }
}

pub struct TrainerApp<IN, RNG>
where
    IN: InputProvider,
    RNG: IndexRandom,
{
    store: WordStore,
    input: IN,
    rng: RNG,
    config: TrainerConfig,
    slots: [DisplaySlot; 2],
    transition: Option<Transition>,
    press_pulse: Option<ScalePulse>,
    pending_redraw: bool,
}

include!("view.rs");
include!("input.rs");
include!("runtime.rs");
