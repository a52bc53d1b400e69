//! Owner of the live particle batch.
//!
//! The field is the single authority over the particle list. The host calls
//! [`ParticleField::tick`] once per frame and [`ParticleField::reseed`] on a
//! wall-clock timer; both run on the same thread, and a reseed swaps the whole
//! list in one assignment, so a tick always sees one complete batch.

use log::debug;
use rand::Rng;

use super::config::FieldConfig;
use super::glyphs::GlyphSet;
use super::particles::{Particle, spawn_batch};
use super::pointer::Pointer;

/// A fixed-size batch of floating glyphs plus the random source that feeds it.
pub struct ParticleField<R> {
	particles: Vec<Particle>,
	glyphs: GlyphSet,
	config: FieldConfig,
	rng: R,
	generation: u64,
}

impl<R: Rng> ParticleField<R> {
	/// Create a field and spawn its first batch for the given viewport.
	pub fn new(config: FieldConfig, rng: R, width: f64, height: f64) -> Self {
		Self::with_glyphs(GlyphSet::default(), config, rng, width, height)
	}

	/// Like [`ParticleField::new`], drawing from a custom glyph set.
	pub fn with_glyphs(glyphs: GlyphSet, config: FieldConfig, rng: R, width: f64, height: f64) -> Self {
		let mut field = Self {
			particles: Vec::new(),
			glyphs,
			config,
			rng,
			generation: 0,
		};
		field.reseed(width, height);
		field
	}

	/// Discard the current batch and spawn a new one below the viewport.
	pub fn reseed(&mut self, width: f64, height: f64) -> &[Particle] {
		let batch = spawn_batch(&self.glyphs, &self.config, width, height, &mut self.rng);
		self.particles = batch;
		self.generation += 1;
		debug!(
			"floating-notes: batch {} spawned ({} particles, {}x{})",
			self.generation,
			self.particles.len(),
			width,
			height
		);
		&self.particles
	}

	/// Advance every particle by one frame. Returns how many re-entered
	/// vertically with a fresh trajectory.
	pub fn tick(&mut self, pointer: Pointer, width: f64, height: f64) -> usize {
		let (config, rng) = (&self.config, &mut self.rng);
		self.particles
			.iter_mut()
			.map(|p| p.advance(pointer, width, height, config, rng))
			.filter(|&reentered| reentered)
			.count()
	}
}

impl<R> ParticleField<R> {
	/// Read-only view of the current batch, in spawn order.
	pub fn particles(&self) -> &[Particle] {
		&self.particles
	}

	/// Number of batches spawned so far. Part of the render key so sprites
	/// from different batches never share an identity.
	pub fn generation(&self) -> u64 {
		self.generation
	}

	/// Tunables the field was built with.
	pub fn config(&self) -> &FieldConfig {
		&self.config
	}
}
