//! Registration bookkeeping for the browser host.
//!
//! Tracks the pending animation frame, the reseed timer and every attached
//! listener, so unmounting can release each of them exactly once no matter
//! how far setup got.

/// Operations needed to release what the host registered.
pub(crate) trait HostEnv {
	type Listener;

	fn cancel_frame(&self, id: i32);
	fn clear_interval(&self, id: i32);
	fn detach(&self, event: &'static str, listener: Self::Listener);
}

/// Handles owned by one mounted layer.
pub(crate) struct Registrations<L> {
	frame_id: Option<i32>,
	interval_id: Option<i32>,
	listeners: Vec<(&'static str, L)>,
	torn_down: bool,
}

impl<L> Default for Registrations<L> {
	fn default() -> Self {
		Self {
			frame_id: None,
			interval_id: None,
			listeners: Vec::new(),
			torn_down: false,
		}
	}
}

impl<L> Registrations<L> {
	/// `false` once torn down; no new frames may be requested after that.
	pub(crate) fn is_live(&self) -> bool {
		!self.torn_down
	}

	/// Remember the most recently requested animation frame.
	pub(crate) fn track_frame(&mut self, id: i32) {
		self.frame_id = Some(id);
	}

	/// The pending frame already ran or could not be requested.
	pub(crate) fn forget_frame(&mut self) {
		self.frame_id = None;
	}

	pub(crate) fn track_interval(&mut self, id: i32) {
		self.interval_id = Some(id);
	}

	pub(crate) fn track_listener(&mut self, event: &'static str, listener: L) {
		self.listeners.push((event, listener));
	}

	/// Cancel the frame, clear the timer and detach every listener. Returns
	/// `true` only on the first call.
	pub(crate) fn teardown<E: HostEnv<Listener = L>>(&mut self, env: &E) -> bool {
		let first = !self.torn_down;
		self.torn_down = true;

		if let Some(id) = self.frame_id.take() {
			env.cancel_frame(id);
		}
		if let Some(id) = self.interval_id.take() {
			env.clear_interval(id);
		}
		for (event, listener) in self.listeners.drain(..) {
			env.detach(event, listener);
		}
		first
	}
}
