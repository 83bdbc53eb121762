//! Core logic for the wordily flashcard trainer.
//!
//! The host owns the widgets, the frame scheduler, and file I/O. This crate
//! owns everything between: parsing `term,meaning` lists, the non-repeating
//! random selection, and the tick-driven fade/press animations around a card
//! swap. Collaborators reach the core through small trait seams
//! ([`input::InputProvider`], [`random::IndexRandom`]) so hosts and tests can
//! substitute their own.

pub mod app;
pub mod input;
pub mod random;
pub mod render;
pub mod words;
