//! UI components.

pub mod floating_notes;
