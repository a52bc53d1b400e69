//! floating-notes: drifting note and code glyphs for a portfolio hero section.
//!
//! This crate provides a WASM-based decorative layer: a small particle field
//! whose glyphs rise through the viewport, scatter away from the cursor, and
//! wrap around the screen edges.

use leptos::prelude::*;
use leptos_meta::*;
use log::{Level, info, warn};
use wasm_bindgen::JsCast;
use web_sys::{HtmlScriptElement, Window};

#[cfg(target_arch = "wasm32")]
use getrandom as _;

pub mod components;

pub use components::floating_notes::{
	FieldConfig, FloatingNotes, Glyph, GlyphKind, GlyphSet, NoteTheme, Particle, ParticleField,
	Pointer, spawn_batch, step,
};

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("floating-notes: logging initialized");
}

/// Load field overrides from a script element with id="floating-notes-config".
/// Expected format: JSON object with any subset of [`FieldConfig`] fields.
pub fn load_field_config() -> Option<FieldConfig> {
	let window: Window = web_sys::window()?;
	let document = window.document()?;
	let element = document.get_element_by_id("floating-notes-config")?;
	let script: HtmlScriptElement = element.dyn_into().ok()?;
	let json_text = script.text().ok()?;

	match FieldConfig::from_json(&json_text) {
		Ok(config) => {
			info!(
				"floating-notes: loaded config ({} particles, reseed every {}ms)",
				config.particle_count, config.reseed_interval_ms
			);
			Some(config)
		}
		Err(e) => {
			warn!("floating-notes: failed to parse config: {}", e);
			None
		}
	}
}

/// Main application component.
/// Reads optional config from the DOM and mounts the glyph layer in the hero.
#[component]
pub fn App() -> impl IntoView {
	provide_meta_context();

	let config = load_field_config().unwrap_or_default();

	view! {
		<Html attr:lang="en" attr:dir="ltr" />
		<Title text="Portfolio" />
		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />

		<section class="hero" style="position: relative; min-height: 100vh; overflow: hidden;">
			<FloatingNotes config=config />
		</section>
	}
}
