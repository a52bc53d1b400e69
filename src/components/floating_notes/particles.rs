//! Floating glyph particles: spawning and the per-frame physics step.
//!
//! Velocities are in pixels per frame. There is no `dt`: the host calls the
//! step once per display refresh, so the drift speed follows the frame rate.

use rand::Rng;

use super::config::FieldConfig;
use super::glyphs::{Glyph, GlyphSet};
use super::pointer::Pointer;

/// Random spread added on top of a glyph's base scale.
const SCALE_JITTER: f64 = 0.8;
/// Total width of the lateral drift range, centered on zero.
const LATERAL_DRIFT: f64 = 0.5;
/// Slowest upward drift.
const RISE_MIN: f64 = 0.5;
/// Extra upward drift on top of `RISE_MIN`.
const RISE_JITTER: f64 = 0.5;

/// A single floating glyph.
///
/// Glyph and scale are fixed at creation; only position and velocity change.
#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
	id: usize,
	glyph: Glyph,
	scale: f64,
	x: f64,
	y: f64,
	vx: f64,
	vy: f64,
}

/// Fresh drift velocity: small random sideways component, always rising.
fn drift_velocity<R: Rng + ?Sized>(rng: &mut R) -> (f64, f64) {
	let vx = (rng.r#gen::<f64>() - 0.5) * LATERAL_DRIFT;
	let vy = -RISE_MIN - rng.r#gen::<f64>() * RISE_JITTER;
	(vx, vy)
}

impl Particle {
	/// Particle at an explicit position and velocity.
	pub fn new(id: usize, glyph: Glyph, scale: f64, position: (f64, f64), velocity: (f64, f64)) -> Self {
		Self {
			id,
			glyph,
			scale,
			x: position.0,
			y: position.1,
			vx: velocity.0,
			vy: velocity.1,
		}
	}

	/// Spawn somewhere in the band just below the viewport, drifting upward.
	pub fn spawn<R: Rng + ?Sized>(
		id: usize,
		glyphs: &GlyphSet,
		config: &FieldConfig,
		width: f64,
		height: f64,
		rng: &mut R,
	) -> Self {
		let glyph = glyphs.pick(rng);
		let x = rng.r#gen::<f64>() * width;
		let y = height + rng.r#gen::<f64>() * config.spawn_depth;
		let scale = glyph.base_scale() + rng.r#gen::<f64>() * SCALE_JITTER;
		Self::new(id, glyph, scale, (x, y), drift_velocity(rng))
	}

	/// Index within its batch; used as the render key.
	pub fn id(&self) -> usize {
		self.id
	}

	/// Glyph chosen at spawn.
	pub fn glyph(&self) -> Glyph {
		self.glyph
	}

	/// Text to draw.
	pub fn symbol(&self) -> &'static str {
		self.glyph.text
	}

	/// Whether the sprite uses the decorative (code) style.
	pub fn is_decorative(&self) -> bool {
		self.glyph.is_decorative()
	}

	/// Font scale in rem.
	pub fn scale(&self) -> f64 {
		self.scale
	}

	/// Center of the glyph in viewport pixels.
	pub fn position(&self) -> (f64, f64) {
		(self.x, self.y)
	}

	/// Pixels per frame.
	pub fn velocity(&self) -> (f64, f64) {
		(self.vx, self.vy)
	}

	/// Advance one frame. Returns `true` when the particle left the vertical
	/// band and re-entered from the opposite edge with a new trajectory.
	pub fn advance<R: Rng + ?Sized>(
		&mut self,
		pointer: Pointer,
		width: f64,
		height: f64,
		config: &FieldConfig,
		rng: &mut R,
	) -> bool {
		// Repulsion accumulates into velocity, so lingering near the cursor
		// keeps speeding the particle up until the clamp.
		if let Some((distance, dx, dy)) = pointer.offset_from(self.x, self.y) {
			if distance > 0.0 && distance < config.deflection_radius {
				let force = (1.0 - distance / config.deflection_radius) * config.deflection_strength;
				let angle = dy.atan2(dx);
				self.vx -= angle.cos() * force;
				self.vy -= angle.sin() * force;
			}
		}

		self.x += self.vx;
		self.y += self.vy;

		let (left, right) = (-config.wrap_margin_x, width + config.wrap_margin_x);
		if self.x < left {
			self.x = right;
		} else if self.x > right {
			self.x = left;
		}

		let (top, bottom) = (-config.wrap_margin_y, height + config.wrap_margin_y);
		let reentered = self.y < top || self.y > bottom;
		if reentered {
			self.y = if self.y < top { bottom } else { top };
			self.x = rng.r#gen::<f64>() * width;
			(self.vx, self.vy) = drift_velocity(rng);
		}

		let max = config.max_velocity;
		self.vx = self.vx.clamp(-max, max);
		self.vy = self.vy.clamp(-max, max);

		reentered
	}
}

/// Build a complete batch of `config.particle_count` particles.
pub fn spawn_batch<R: Rng + ?Sized>(
	glyphs: &GlyphSet,
	config: &FieldConfig,
	width: f64,
	height: f64,
	rng: &mut R,
) -> Vec<Particle> {
	(0..config.particle_count)
		.map(|id| Particle::spawn(id, glyphs, config, width, height, rng))
		.collect()
}

/// Pure frame step: returns the advanced copy of `particles`.
pub fn step<R: Rng + ?Sized>(
	particles: &[Particle],
	pointer: Pointer,
	width: f64,
	height: f64,
	config: &FieldConfig,
	rng: &mut R,
) -> Vec<Particle> {
	particles
		.iter()
		.cloned()
		.map(|mut p| {
			p.advance(pointer, width, height, config, rng);
			p
		})
		.collect()
}

#[cfg(test)]
mod tests {
	use rand::SeedableRng;
	use rand::rngs::StdRng;
	use rand::rngs::mock::StepRng;

	use super::super::glyphs::GlyphKind;
	use super::*;

	const W: f64 = 1000.0;
	const H: f64 = 800.0;

	fn note() -> Glyph {
		Glyph {
			text: "♪",
			kind: GlyphKind::Note,
		}
	}

	fn at(x: f64, y: f64, vx: f64, vy: f64) -> Particle {
		Particle::new(0, note(), 1.5, (x, y), (vx, vy))
	}

	fn speed((vx, vy): (f64, f64)) -> f64 {
		(vx * vx + vy * vy).sqrt()
	}

	#[test]
	fn spawn_lands_below_viewport() {
		let config = FieldConfig::default();
		let glyphs = GlyphSet::default();
		let mut rng = StdRng::seed_from_u64(1);
		for p in spawn_batch(&glyphs, &config, W, H, &mut rng) {
			let (x, y) = p.position();
			let (vx, vy) = p.velocity();
			assert!((0.0..W).contains(&x));
			assert!(y >= H && y <= H + 200.0);
			assert!((-0.25..=0.25).contains(&vx));
			assert!((-1.0..=-0.5).contains(&vy));
			let base = p.glyph().base_scale();
			assert!(p.scale() >= base && p.scale() <= base + 0.8);
		}
	}

	#[test]
	fn spawn_with_constant_source_hits_range_edges() {
		let config = FieldConfig::default();
		let mut rng = StepRng::new(0, 0);
		let p = Particle::spawn(3, &GlyphSet::default(), &config, W, H, &mut rng);
		assert_eq!(p.id(), 3);
		assert_eq!(p.symbol(), "♪");
		assert_eq!(p.position(), (0.0, H));
		assert_eq!(p.scale(), 1.2);
		assert_eq!(p.velocity(), (-0.25, -0.5));
	}

	#[test]
	fn horizontal_wrap_keeps_velocity() {
		let config = FieldConfig::default();
		let mut rng = StdRng::seed_from_u64(2);
		let mut p = at(W + 101.0, 400.0, 0.2, -0.5);
		let reentered = p.advance(Pointer::Inactive, W, H, &config, &mut rng);
		assert!(!reentered);
		assert_eq!(p.position(), (-100.0, 399.5));
		assert_eq!(p.velocity(), (0.2, -0.5));

		let mut p = at(-101.0, 400.0, -0.2, -0.5);
		p.advance(Pointer::Inactive, W, H, &config, &mut rng);
		assert_eq!(p.position().0, W + 100.0);
		assert_eq!(p.velocity().0, -0.2);
	}

	#[test]
	fn leaving_the_top_reenters_from_below() {
		let config = FieldConfig::default();
		let mut rng = StdRng::seed_from_u64(3);
		for _ in 0..50 {
			let mut p = at(500.0, -151.0, 1.9, -1.9);
			assert!(p.advance(Pointer::Inactive, W, H, &config, &mut rng));
			let (x, y) = p.position();
			let (vx, vy) = p.velocity();
			assert_eq!(y, H + 150.0);
			assert!((0.0..W).contains(&x));
			assert!((-1.0..=-0.5).contains(&vy));
			assert!((-0.25..=0.25).contains(&vx));
		}
	}

	#[test]
	fn leaving_the_bottom_reenters_from_above() {
		let config = FieldConfig::default();
		let mut rng = StdRng::seed_from_u64(4);
		let mut p = at(500.0, H + 151.0, 0.0, 1.0);
		assert!(p.advance(Pointer::Inactive, W, H, &config, &mut rng));
		assert_eq!(p.position().1, -150.0);
		assert!(p.velocity().1 < 0.0);
	}

	#[test]
	fn closer_pointer_pushes_harder() {
		let config = FieldConfig::default();
		let mut rng = StdRng::seed_from_u64(5);
		let pointer = Pointer::At { x: 500.0, y: 400.0 };
		// Same direction (down-right of the pointer), different distances.
		let (ux, uy) = (0.6, 0.8);
		let mut near = at(500.0 + ux * 30.0, 400.0 + uy * 30.0, 0.0, 0.0);
		let mut far = at(500.0 + ux * 100.0, 400.0 + uy * 100.0, 0.0, 0.0);
		let start = near.position();
		near.advance(pointer, W, H, &config, &mut rng);
		far.advance(pointer, W, H, &config, &mut rng);

		assert!(speed(near.velocity()) > speed(far.velocity()));
		assert!(speed(far.velocity()) > 0.0);
		// Pushed away from the pointer.
		assert!(near.velocity().0 > 0.0 && near.velocity().1 > 0.0);
		// Same-frame displacement uses the deflected velocity.
		let (vx, vy) = near.velocity();
		assert_eq!(near.position(), (start.0 + vx, start.1 + vy));
	}

	#[test]
	fn pointer_outside_radius_or_on_top_does_nothing() {
		let config = FieldConfig::default();
		let mut rng = StdRng::seed_from_u64(6);
		let mut outside = at(500.0, 400.0, 0.1, -0.6);
		outside.advance(Pointer::At { x: 500.0, y: 520.0 }, W, H, &config, &mut rng);
		assert_eq!(outside.velocity(), (0.1, -0.6));

		let mut on_top = at(500.0, 400.0, 0.1, -0.6);
		on_top.advance(Pointer::At { x: 500.0, y: 400.0 }, W, H, &config, &mut rng);
		assert_eq!(on_top.velocity(), (0.1, -0.6));
	}

	#[test]
	fn inactive_pointer_only_moves_by_velocity() {
		let config = FieldConfig::default();
		let mut rng = StdRng::seed_from_u64(7);
		let before = vec![at(500.0, 400.0, 0.2, -0.7), at(10.0, 10.0, -0.1, -0.5)];
		let after = step(&before, Pointer::Inactive, W, H, &config, &mut rng);
		for (b, a) in before.iter().zip(&after) {
			assert_eq!(a.velocity(), b.velocity());
			let (bx, by) = b.position();
			let (vx, vy) = b.velocity();
			assert_eq!(a.position(), (bx + vx, by + vy));
		}
	}

	#[test]
	fn step_leaves_input_untouched() {
		let config = FieldConfig::default();
		let mut rng = StdRng::seed_from_u64(8);
		let before = vec![at(500.0, 400.0, 0.2, -0.7)];
		let snapshot = before.clone();
		let _ = step(&before, Pointer::At { x: 510.0, y: 400.0 }, W, H, &config, &mut rng);
		assert_eq!(before, snapshot);
	}

	#[test]
	fn velocity_stays_clamped_under_sustained_push() {
		let config = FieldConfig::default();
		let mut rng = StdRng::seed_from_u64(9);
		let mut particles = spawn_batch(&GlyphSet::default(), &config, W, H, &mut rng);
		for frame in 0..5000 {
			// Sweep the pointer around so it keeps catching particles.
			let t = frame as f64 * 0.01;
			let pointer = Pointer::At {
				x: 500.0 + 400.0 * t.cos(),
				y: 400.0 + 350.0 * (t * 1.3).sin(),
			};
			particles = step(&particles, pointer, W, H, &config, &mut rng);
			for p in &particles {
				let (vx, vy) = p.velocity();
				assert!(vx.abs() <= 2.0 && vy.abs() <= 2.0);
			}
		}
	}

	#[test]
	fn zero_viewport_collapses_without_failing() {
		let config = FieldConfig::default();
		let mut rng = StdRng::seed_from_u64(10);
		let mut particles = spawn_batch(&GlyphSet::default(), &config, 0.0, 0.0, &mut rng);
		assert_eq!(particles.len(), 15);
		assert!(particles.iter().all(|p| p.position().0 == 0.0));
		for _ in 0..1000 {
			particles = step(&particles, Pointer::At { x: 0.0, y: 0.0 }, 0.0, 0.0, &config, &mut rng);
		}
		assert!(particles.iter().all(|p| p.position().0.is_finite() && p.position().1.is_finite()));
	}
}
