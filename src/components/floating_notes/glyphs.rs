//! Glyph sets drawn by the floating notes layer.

use rand::Rng;

/// Category a glyph belongs to. Only affects styling, never physics.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GlyphKind {
	/// Musical notation: notes, flats, sharps.
	Note,
	/// Code punctuation: braces, arrows, comment markers.
	Code,
}

/// A single drawable symbol.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Glyph {
	/// Text drawn for the glyph; may be more than one character (`=>`).
	pub text: &'static str,
	/// Category; decides the rendering style.
	pub kind: GlyphKind,
}

impl Glyph {
	/// Code glyphs are rendered in the bolder decorative style.
	pub fn is_decorative(self) -> bool {
		self.kind == GlyphKind::Code
	}

	/// Base font scale (rem) for this glyph's category, before jitter.
	pub fn base_scale(self) -> f64 {
		match self.kind {
			GlyphKind::Note => 1.2,
			GlyphKind::Code => 1.5,
		}
	}
}

const NOTE_GLYPHS: [&str; 6] = ["♪", "♫", "♬", "♩", "♭", "♯"];

const CODE_GLYPHS: [&str; 19] = [
	"{", "}", "<", ">", "/", "=", "(", ")", "[", "]", ";", "&", "|", "*", "#", "=>", "//", "{}",
	"()",
];

/// A non-empty set of glyphs to draw from.
#[derive(Clone, Debug)]
pub struct GlyphSet {
	glyphs: Vec<Glyph>,
}

impl GlyphSet {
	/// Notes followed by code punctuation (default).
	pub fn notes_and_code() -> Self {
		let notes = NOTE_GLYPHS.iter().map(|&text| Glyph {
			text,
			kind: GlyphKind::Note,
		});
		let code = CODE_GLYPHS.iter().map(|&text| Glyph {
			text,
			kind: GlyphKind::Code,
		});
		Self {
			glyphs: notes.chain(code).collect(),
		}
	}

	/// Pick a glyph uniformly over the whole set.
	pub fn pick<R: Rng + ?Sized>(&self, rng: &mut R) -> Glyph {
		self.glyphs[rng.gen_range(0..self.glyphs.len())]
	}
}

impl Default for GlyphSet {
	fn default() -> Self {
		Self::notes_and_code()
	}
}
