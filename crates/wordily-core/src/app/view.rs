impl<IN, RNG> TrainerApp<IN, RNG>
where
    IN: InputProvider,
    RNG: IndexRandom,
{
    pub fn new(store: WordStore, input: IN, rng: RNG, mut config: TrainerConfig) -> Self {
        if !config.fade_duration.is_finite() || config.fade_duration < 0.0 {
            config.fade_duration = 0.0;
        }
        if !config.button_click_duration.is_finite() || config.button_click_duration < 0.0 {
            config.button_click_duration = 0.0;
        }
        if !config.button_click_scale.is_finite() {
            config.button_click_scale = 1.0;
        }

        Self {
            store,
            input,
            rng,
            config,
            slots: [DisplaySlot::new(), DisplaySlot::new()],
            transition: None,
            press_pulse: None,
            pending_redraw: true,
        }
    }

    /// Lend the host one frame's worth of drawable state.
    pub fn with_card<F>(&self, f: F)
    where
        F: FnOnce(CardView<'_>),
    {
        f(CardView {
            term: &self.slots[TERM_SLOT].text,
            meaning: &self.slots[MEANING_SLOT].text,
            term_alpha: self.slots[TERM_SLOT].alpha,
            meaning_alpha: self.slots[MEANING_SLOT].alpha,
            button_scale: self.press_pulse.map_or(1.0, |pulse| pulse.value()),
        })
    }

    /// Whether a card swap is still fading.
    pub fn in_transition(&self) -> bool {
        self.transition.is_some()
    }

    pub fn store(&self) -> &WordStore {
        &self.store
    }
}
