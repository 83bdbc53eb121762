impl<IN, RNG> TrainerApp<IN, RNG>
where
    IN: InputProvider,
    RNG: IndexRandom,
{
    fn process_inputs(&mut self) {
        loop {
            match self.input.poll_event() {
                Ok(Some(event)) => self.apply_input_event(event),
                Ok(None) => break,
                Err(_) => {
                    warn!("input provider failed; dropping remaining events this tick");
                    break;
                }
            }
        }
    }

    fn apply_input_event(&mut self, event: InputEvent) {
        match event {
            InputEvent::Press => {
                if self.config.button_click_duration > 0.0 {
                    self.press_pulse = Some(ScalePulse::new(
                        self.config.button_click_scale,
                        self.config.button_click_duration,
                    ));
                }
                self.show_next_animated();
            }
        }
    }
}
