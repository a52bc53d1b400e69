//! Inline CSS for the glyph layer and its sprites.
//!
//! Each particle becomes an absolutely positioned element whose center sits
//! on the particle's coordinate.

use std::fmt::Write;

use super::particles::Particle;
use super::theme::NoteTheme;

/// Style for the full-viewport container. It never takes pointer events, so
/// the page underneath stays interactive.
pub fn layer_style(theme: &NoteTheme) -> String {
	format!(
		"position: absolute; inset: 0; overflow: hidden; pointer-events: none; z-index: {};",
		theme.z_index
	)
}

/// Style for one glyph sprite.
pub fn sprite_style(particle: &Particle, theme: &NoteTheme) -> String {
	let (x, y) = particle.position();
	let look = theme.appearance(particle.is_decorative());

	let mut style = format!(
		"position: absolute; left: {x}px; top: {y}px; font-size: {}rem; color: {}; font-weight: {};",
		particle.scale(),
		theme.color.with_alpha(look.alpha).to_css(),
		look.font_weight
	);
	if let Some(family) = look.font_family {
		let _ = write!(style, " font-family: {family};");
	}
	style.push_str(" transform: translate(-50%, -50%); will-change: transform; pointer-events: none;");
	style
}
