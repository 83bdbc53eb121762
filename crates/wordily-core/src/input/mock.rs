use super::{InputEvent, InputProvider};

/// Event-less provider for tests and hosts that call the app directly.
#[derive(Default, Debug, Clone, Copy)]
pub struct NullInput;

impl NullInput {
    pub const fn new() -> Self {
        Self
    }
}

impl InputProvider for NullInput {
    type Error = core::convert::Infallible;

    fn poll_event(&mut self) -> Result<Option<InputEvent>, Self::Error> {
        Ok(None)
    }
}
