//! App-level view model and animation state.
//!
//! Animations are plain state objects advanced by an explicit `tick(dt)`
//! from the host's frame loop; nothing here schedules itself.

/// Snapshot of everything the host needs to draw one frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CardView<'a> {
    pub term: &'a str,
    pub meaning: &'a str,
    /// 0.0..=1.0
    pub term_alpha: f32,
    /// 0.0..=1.0
    pub meaning_alpha: f32,
    /// Uniform scale of the next-card control, 1.0 at rest.
    pub button_scale: f32,
}

/// Linear interpolation over accumulated tick time.
///
/// The value is `from` before the first tick, `lerp(from, to, elapsed /
/// duration)` while running, and exactly `to` once `elapsed >= duration`.
/// Completion is reported by [`Fade::tick`] exactly once.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Fade {
    from: f32,
    to: f32,
    duration: f32,
    elapsed: f32,
    finished: bool,
}

impl Fade {
    pub fn new(from: f32, to: f32, duration: f32) -> Self {
        Self {
            from,
            to,
            duration: duration.max(0.0),
            elapsed: 0.0,
            finished: false,
        }
    }

    /// Current interpolated value.
    pub fn value(&self) -> f32 {
        if self.duration <= 0.0 || self.elapsed >= self.duration {
            return self.to;
        }

        let t = self.elapsed / self.duration;
        self.from + (self.to - self.from) * t
    }

    /// Advance by `dt`. Returns `true` only on the tick that reaches the
    /// end; later ticks are no-ops.
    pub fn tick(&mut self, dt: f32) -> bool {
        if self.finished {
            return false;
        }

        self.elapsed += dt.max(0.0);
        if self.elapsed >= self.duration {
            self.finished = true;
            return true;
        }

        false
    }

    pub const fn is_finished(&self) -> bool {
        self.finished
    }
}

/// Countdown join point for a fixed set of concurrent effects.
///
/// Each effect decrements the counter once on completion; the orchestrator
/// proceeds when it reaches zero.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct JoinBarrier {
    remaining: u8,
}

impl JoinBarrier {
    pub const fn new(parties: u8) -> Self {
        Self { remaining: parties }
    }

    /// Record one completion. Saturates at zero.
    pub fn arrive(&mut self) {
        self.remaining = self.remaining.saturating_sub(1);
    }

    pub const fn is_open(&self) -> bool {
        self.remaining == 0
    }
}

/// Press feedback: scale 1 -> factor -> 1, linear in both halves.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScalePulse {
    factor: f32,
    half_duration: f32,
    elapsed: f32,
}

impl ScalePulse {
    pub fn new(factor: f32, half_duration: f32) -> Self {
        Self {
            factor,
            half_duration: half_duration.max(0.0),
            elapsed: 0.0,
        }
    }

    /// Current scale. Exactly 1.0 once the release half has played out.
    pub fn value(&self) -> f32 {
        if self.half_duration <= 0.0 {
            return 1.0;
        }

        let t = self.elapsed / self.half_duration;
        if t >= 2.0 {
            1.0
        } else if t <= 1.0 {
            1.0 + (self.factor - 1.0) * t
        } else {
            self.factor + (1.0 - self.factor) * (t - 1.0)
        }
    }

    /// Advance by `dt`. Returns `true` once both halves are done.
    pub fn tick(&mut self, dt: f32) -> bool {
        self.elapsed += dt.max(0.0);
        self.half_duration <= 0.0 || self.elapsed >= self.half_duration * 2.0
    }
}
