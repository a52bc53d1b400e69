//! Tunable constants for the particle field.
//!
//! Every field has a default, so a page can override any subset of them
//! through a JSON script element (see [`crate::load_field_config`]).

use serde::Deserialize;

/// Physics and scheduling parameters for a [`super::ParticleField`].
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct FieldConfig {
	/// Particles per batch.
	pub particle_count: usize,
	/// Per-axis velocity limit in px/tick.
	pub max_velocity: f64,
	/// Pointer influence radius in px. Force falls to zero at this distance.
	pub deflection_radius: f64,
	/// Velocity added per tick at zero distance.
	pub deflection_strength: f64,
	/// How far past the left/right edge a particle travels before wrapping.
	pub wrap_margin_x: f64,
	/// How far past the top/bottom edge a particle travels before wrapping.
	pub wrap_margin_y: f64,
	/// Depth of the band below the viewport where new batches spawn.
	pub spawn_depth: f64,
	/// Wall-clock period between wholesale reseeds.
	pub reseed_interval_ms: u32,
}

impl Default for FieldConfig {
	fn default() -> Self {
		Self {
			particle_count: 15,
			max_velocity: 2.0,
			deflection_radius: 120.0,
			deflection_strength: 0.15,
			wrap_margin_x: 100.0,
			wrap_margin_y: 150.0,
			spawn_depth: 200.0,
			reseed_interval_ms: 20_000,
		}
	}
}

impl FieldConfig {
	/// Parse a (possibly partial) JSON override.
	pub fn from_json(text: &str) -> serde_json::Result<Self> {
		serde_json::from_str::<Self>(text).map(Self::sanitized)
	}

	/// Replace values the physics cannot work with by their defaults.
	pub fn sanitized(self) -> Self {
		let d = Self::default();
		let positive = |v: f64, fallback: f64| {
			if v.is_finite() && v > 0.0 { v } else { fallback }
		};
		let non_negative = |v: f64, fallback: f64| {
			if v.is_finite() && v >= 0.0 { v } else { fallback }
		};

		Self {
			particle_count: if self.particle_count == 0 {
				d.particle_count
			} else {
				self.particle_count
			},
			max_velocity: positive(self.max_velocity, d.max_velocity),
			deflection_radius: positive(self.deflection_radius, d.deflection_radius),
			deflection_strength: non_negative(self.deflection_strength, d.deflection_strength),
			wrap_margin_x: non_negative(self.wrap_margin_x, d.wrap_margin_x),
			wrap_margin_y: non_negative(self.wrap_margin_y, d.wrap_margin_y),
			spawn_depth: non_negative(self.spawn_depth, d.spawn_depth),
			reseed_interval_ms: if self.reseed_interval_ms == 0 {
				d.reseed_interval_ms
			} else {
				self.reseed_interval_ms
			},
		}
	}
}
