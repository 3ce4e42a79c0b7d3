//! Single-line text input used for composing notes.
//!
//! The buffer is plain data driven by [`crate::app::Message`]s, so it fits
//! the TEA update cycle.

mod buffer;

pub use buffer::InputBuffer;
