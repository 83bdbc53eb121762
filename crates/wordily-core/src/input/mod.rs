//! Input abstraction layer.

pub mod mock;

/// Logical actions consumed by the trainer app.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum InputEvent {
    /// The next-card button was pressed.
    Press,
}

/// Polled input provider.
pub trait InputProvider {
    type Error;

    fn poll_event(&mut self) -> Result<Option<InputEvent>, Self::Error>;
}
