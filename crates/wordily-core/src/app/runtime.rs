impl<IN, RNG> TrainerApp<IN, RNG>
where
    IN: InputProvider,
    RNG: IndexRandom,
{
    /// Advance all cooperative animation tasks by one frame delta.
    pub fn tick(&mut self, dt: f32) -> TickResult {
        self.process_inputs();

        let dt = if dt.is_finite() { dt.max(0.0) } else { 0.0 };
        let mut changed = self.pending_redraw;
        self.pending_redraw = false;

        if let Some(mut pulse) = self.press_pulse.take() {
            let done = pulse.tick(dt);
            self.press_pulse = if done { None } else { Some(pulse) };
            changed = true;
        }

        if self.tick_transition(dt) {
            changed = true;
        }

        if changed {
            TickResult::RenderRequested
        } else {
            TickResult::NoRender
        }
    }

    /// Immediate advance: new pair into the slots, fully visible, no
    /// animation. Cancels any in-flight transition first.
    pub fn show_next(&mut self) {
        self.transition = None;
        self.advance_into_slots();
        for slot in &mut self.slots {
            slot.alpha = 1.0;
        }
        self.pending_redraw = true;
    }

    /// Two-phase fade swap: both slots fade out, the selection advances
    /// while they are invisible, both fade back in.
    ///
    /// An in-flight transition is dropped first, so a rapid re-trigger can
    /// neither write stale alphas nor advance the store twice. The new
    /// fade-out starts from each slot's current alpha.
    pub fn show_next_animated(&mut self) {
        self.transition = Some(Transition {
            phase: TransitionPhase::FadingOut,
            fades: [
                Fade::new(self.slots[TERM_SLOT].alpha, 0.0, self.config.fade_duration),
                Fade::new(self.slots[MEANING_SLOT].alpha, 0.0, self.config.fade_duration),
            ],
            barrier: JoinBarrier::new(FADE_SLOTS),
        });
        self.pending_redraw = true;
    }

    fn tick_transition(&mut self, dt: f32) -> bool {
        let Some(mut transition) = self.transition.take() else {
            return false;
        };

        for (slot, fade) in self.slots.iter_mut().zip(transition.fades.iter_mut()) {
            if fade.is_finished() {
                continue;
            }
            if fade.tick(dt) {
                transition.barrier.arrive();
            }
            slot.alpha = fade.value();
        }

        if !transition.barrier.is_open() {
            self.transition = Some(transition);
            return true;
        }

        match transition.phase {
            TransitionPhase::FadingOut => {
                // Both slots are invisible; swap content and fade back in.
                self.advance_into_slots();
                self.transition = Some(Transition {
                    phase: TransitionPhase::FadingIn,
                    fades: [
                        Fade::new(0.0, 1.0, self.config.fade_duration),
                        Fade::new(0.0, 1.0, self.config.fade_duration),
                    ],
                    barrier: JoinBarrier::new(FADE_SLOTS),
                });
            }
            TransitionPhase::FadingIn => {}
        }

        true
    }

    /// Move the selection and push the new pair's fields into the slots.
    /// An empty store warns (inside `advance`) and leaves the text as-is.
    fn advance_into_slots(&mut self) {
        if let Some(pair) = self.store.advance(&mut self.rng) {
            let (term, meaning) = (pair.term.clone(), pair.meaning.clone());
            self.slots[TERM_SLOT].text = term;
            self.slots[MEANING_SLOT].text = meaning;
        }
    }
}
