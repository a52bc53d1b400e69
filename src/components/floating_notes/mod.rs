//! Floating glyph layer for the portfolio hero section.
//!
//! Musical notes and code punctuation drift up from below the viewport, get
//! pushed away from the cursor, and wrap around the edges:
//! - [`ParticleField`] owns the batch and advances it once per frame
//! - [`step`] is the same frame update as a pure function over a slice
//! - [`FloatingNotes`] mounts the field in the page and schedules it
//!
//! # Example
//!
//! ```ignore
//! use floating_notes::{FieldConfig, FloatingNotes};
//!
//! view! {
//!     <section class="hero">
//!         <FloatingNotes config=FieldConfig::default() />
//!     </section>
//! }
//! ```

mod component;
mod config;
mod field;
mod glyphs;
mod host;
mod particles;
mod pointer;
mod render;
pub mod theme;

pub use component::FloatingNotes;
pub use config::FieldConfig;
pub use field::ParticleField;
pub use glyphs::{Glyph, GlyphKind, GlyphSet};
pub use particles::{Particle, spawn_batch, step};
pub use pointer::Pointer;
pub use theme::NoteTheme;
