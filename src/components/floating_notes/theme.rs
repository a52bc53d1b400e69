//! Visual theming for the floating glyphs.

/// RGBA color representation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
	/// Red channel.
	pub r: u8,
	/// Green channel.
	pub g: u8,
	/// Blue channel.
	pub b: u8,
	/// Alpha in 0.0..=1.0.
	pub a: f64,
}

impl Color {
	/// Opaque color.
	pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
		Self { r, g, b, a: 1.0 }
	}

	/// Same color with a different alpha.
	pub fn with_alpha(self, a: f64) -> Self {
		Self { a, ..self }
	}

	/// Hex when opaque, `rgba(..)` otherwise.
	pub fn to_css(self) -> String {
		if (self.a - 1.0).abs() < 0.001 {
			format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
		} else {
			format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
		}
	}
}

/// Per-category text style.
#[derive(Clone, Debug)]
pub struct GlyphAppearance {
	/// Opacity applied to the theme color.
	pub alpha: f64,
	/// CSS `font-family`, or `None` to inherit the page font.
	pub font_family: Option<&'static str>,
	/// CSS `font-weight`.
	pub font_weight: u16,
}

/// Complete look of the glyph layer.
#[derive(Clone, Debug)]
pub struct NoteTheme {
	/// Exposed on the layer as `data-theme`.
	pub name: &'static str,
	/// Base glyph color; alpha comes from the appearance.
	pub color: Color,
	/// Look of note glyphs.
	pub note: GlyphAppearance,
	/// Look of code (decorative) glyphs.
	pub code: GlyphAppearance,
	/// Stacking order of the layer relative to page content.
	pub z_index: i32,
}

impl NoteTheme {
	/// Muted emerald glyphs, code punctuation slightly stronger (default).
	pub fn alpine() -> Self {
		Self {
			name: "alpine",
			color: Color::rgb(16, 185, 129),
			note: GlyphAppearance {
				alpha: 0.3,
				font_family: None,
				font_weight: 400,
			},
			code: GlyphAppearance {
				alpha: 0.4,
				font_family: Some("ui-monospace, SFMono-Regular, Menlo, monospace"),
				font_weight: 700,
			},
			z_index: 1,
		}
	}

	/// Style for a sprite: decorative (code) glyphs get the stronger look.
	pub fn appearance(&self, decorative: bool) -> &GlyphAppearance {
		if decorative { &self.code } else { &self.note }
	}
}

impl Default for NoteTheme {
	fn default() -> Self {
		Self::alpine()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn css_output() {
		assert_eq!(Color::rgb(16, 185, 129).to_css(), "#10b981");
		assert_eq!(
			Color::rgb(16, 185, 129).with_alpha(0.4).to_css(),
			"rgba(16, 185, 129, 0.4)"
		);
	}

	#[test]
	fn code_glyphs_stand_out() {
		let theme = NoteTheme::default();
		let (note, code) = (theme.appearance(false), theme.appearance(true));
		assert!(code.alpha > note.alpha);
		assert!(code.font_weight > note.font_weight);
		assert!(code.font_family.is_some());
	}

	#[test]
	fn default_theme_is_named_for_the_layer() {
		let theme = NoteTheme::default();
		assert_eq!(theme.name, "alpine");
	}
}
