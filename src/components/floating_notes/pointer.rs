//! Latest known pointer position.

/// Pointer state as seen by the field, in viewport pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum Pointer {
	/// No pointer over the page (not moved yet, or left the document).
	#[default]
	Inactive,
	/// Pointer at client coordinates.
	At {
		/// Client x in px.
		x: f64,
		/// Client y in px.
		y: f64,
	},
}

impl Pointer {
	/// Euclidean distance and direction (dx, dy) from `(x, y)` to the pointer.
	/// `None` while inactive.
	pub fn offset_from(self, x: f64, y: f64) -> Option<(f64, f64, f64)> {
		match self {
			Pointer::Inactive => None,
			Pointer::At { x: px, y: py } => {
				let (dx, dy) = (px - x, py - y);
				Some(((dx * dx + dy * dy).sqrt(), dx, dy))
			}
		}
	}
}
