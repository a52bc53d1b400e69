//! Leptos component hosting the particle field in the browser.
//!
//! The component renders a transparent full-viewport layer and wires the
//! field to three browser event sources: `requestAnimationFrame` drives
//! `tick`, a `setInterval` timer drives `reseed`, and window `mousemove` /
//! `resize` plus document `mouseleave` feed pointer and viewport state.
//! Everything registered is released when the component's owner is cleaned up.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use leptos::prelude::*;
use log::{debug, info, warn};
use rand::SeedableRng;
use rand::rngs::StdRng;
use send_wrapper::SendWrapper;
use wasm_bindgen::prelude::*;
use web_sys::{AddEventListenerOptions, EventTarget, MouseEvent, Window};

use super::config::FieldConfig;
use super::field::ParticleField;
use super::host::{HostEnv, Registrations};
use super::particles::Particle;
use super::pointer::Pointer;
use super::render;
use super::theme::NoteTheme;

/// Snapshot published to the view after every tick or reseed.
#[derive(Clone, Debug, Default)]
struct Batch {
	generation: u64,
	particles: Vec<Particle>,
}

impl Batch {
	/// Particle behind a sprite. Sprites from an earlier batch resolve to
	/// nothing until `<For>` removes them.
	fn sprite(&self, generation: u64, id: usize) -> Option<&Particle> {
		if self.generation != generation {
			return None;
		}
		self.particles.iter().find(|p| p.id() == id)
	}
}

/// Per-sprite data that stays fixed for a particle's lifetime.
#[derive(Clone, Debug)]
struct SpriteSlot {
	generation: u64,
	id: usize,
	symbol: &'static str,
}

/// Callback attached to a DOM event target.
enum ListenerCallback {
	Mouse(Closure<dyn FnMut(MouseEvent)>),
	Plain(Closure<dyn FnMut()>),
}

impl ListenerCallback {
	fn as_js(&self) -> &JsValue {
		match self {
			ListenerCallback::Mouse(cb) => cb.as_ref(),
			ListenerCallback::Plain(cb) => cb.as_ref(),
		}
	}
}

struct BrowserListener {
	target: EventTarget,
	callback: ListenerCallback,
}

/// Releases registrations against the live window, if there is one.
struct BrowserEnv(Option<Window>);

impl HostEnv for BrowserEnv {
	type Listener = BrowserListener;

	fn cancel_frame(&self, id: i32) {
		if let Some(window) = &self.0 {
			let _ = window.cancel_animation_frame(id);
		}
	}

	fn clear_interval(&self, id: i32) {
		if let Some(window) = &self.0 {
			window.clear_interval_with_handle(id);
		}
	}

	fn detach(&self, event: &'static str, listener: BrowserListener) {
		let _ = listener
			.target
			.remove_event_listener_with_callback(event, listener.callback.as_js().unchecked_ref());
	}
}

/// Browser callbacks and handles owned by one mounted layer.
#[derive(Default)]
struct HostHandles {
	registrations: Registrations<BrowserListener>,
	frame: Option<Closure<dyn FnMut()>>,
	reseed: Option<Closure<dyn FnMut()>>,
}

impl HostHandles {
	/// Stop the frame loop and timer and detach all listeners. Safe to call
	/// repeatedly and after a partial setup.
	fn teardown(&mut self) {
		if self.registrations.teardown(&BrowserEnv(web_sys::window())) {
			debug!("floating-notes: torn down");
		}
		self.frame = None;
		self.reseed = None;
	}

	fn attach(
		&mut self,
		target: EventTarget,
		event: &'static str,
		callback: ListenerCallback,
		options: Option<&AddEventListenerOptions>,
	) {
		let function = callback.as_js().unchecked_ref();
		let added = match options {
			Some(options) => {
				target.add_event_listener_with_callback_and_add_event_listener_options(event, function, options)
			}
			None => target.add_event_listener_with_callback(event, function),
		};
		if let Err(e) = added {
			warn!("floating-notes: {} listener failed: {:?}", event, e);
		}
		self.registrations.track_listener(event, BrowserListener { target, callback });
	}
}

fn viewport_size(window: &Window) -> (f64, f64) {
	let read = |v: Result<JsValue, JsValue>| v.ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
	(read(window.inner_width()), read(window.inner_height()))
}

fn publish(sprites: RwSignal<Batch>, field: &ParticleField<StdRng>) {
	sprites.set(Batch {
		generation: field.generation(),
		particles: field.particles().to_vec(),
	});
}

/// Request the next animation frame unless the layer has been torn down.
fn schedule_frame(handles: &Rc<RefCell<HostHandles>>) {
	let mut guard = handles.borrow_mut();
	let HostHandles {
		registrations,
		frame,
		..
	} = &mut *guard;
	if !registrations.is_live() {
		return;
	}
	let (Some(cb), Some(window)) = (frame.as_ref(), web_sys::window()) else {
		return;
	};
	match window.request_animation_frame(cb.as_ref().unchecked_ref()) {
		Ok(id) => registrations.track_frame(id),
		Err(e) => {
			warn!("floating-notes: requestAnimationFrame failed: {:?}", e);
			registrations.forget_frame();
		}
	}
}

/// Renders drifting note and code glyphs that rise through the viewport and
/// scatter away from the cursor.
///
/// Mount it inside a positioned container (usually the hero section); the
/// layer fills that container and never intercepts pointer events.
#[component]
pub fn FloatingNotes(
	#[prop(default = FieldConfig::default())] config: FieldConfig,
	#[prop(default = NoteTheme::default())] theme: NoteTheme,
) -> impl IntoView {
	let sprites = RwSignal::new(Batch::default());
	let field: Rc<RefCell<Option<ParticleField<StdRng>>>> = Rc::new(RefCell::new(None));
	let handles: Rc<RefCell<HostHandles>> = Rc::default();
	let pointer = Rc::new(Cell::new(Pointer::Inactive));
	let viewport = Rc::new(Cell::new((0.0, 0.0)));

	on_cleanup({
		let handles = SendWrapper::new(handles.clone());
		move || handles.borrow_mut().teardown()
	});

	let (field_init, handles_init) = (field.clone(), handles.clone());
	Effect::new(move |_| {
		if !handles_init.borrow().registrations.is_live() || field_init.borrow().is_some() {
			return;
		}
		let Some(window) = web_sys::window() else {
			warn!("floating-notes: no window, animation disabled");
			return;
		};

		let (w, h) = viewport_size(&window);
		viewport.set((w, h));
		let initial = ParticleField::new(config.clone(), StdRng::from_entropy(), w, h);
		let interval_ms = i32::try_from(initial.config().reseed_interval_ms).unwrap_or(i32::MAX);
		publish(sprites, &initial);
		*field_init.borrow_mut() = Some(initial);
		info!("floating-notes: mounted at {}x{}", w, h);

		let mut hs = handles_init.borrow_mut();

		let pointer_mm = pointer.clone();
		let on_move = Closure::<dyn FnMut(MouseEvent)>::new(move |ev: MouseEvent| {
			pointer_mm.set(Pointer::At {
				x: ev.client_x() as f64,
				y: ev.client_y() as f64,
			});
		});
		let passive = AddEventListenerOptions::new();
		passive.set_passive(true);
		hs.attach(
			window.clone().into(),
			"mousemove",
			ListenerCallback::Mouse(on_move),
			Some(&passive),
		);

		if let Some(root) = window.document().and_then(|d| d.document_element()) {
			let pointer_ml = pointer.clone();
			let on_leave = Closure::<dyn FnMut(MouseEvent)>::new(move |_: MouseEvent| {
				pointer_ml.set(Pointer::Inactive);
			});
			hs.attach(root.into(), "mouseleave", ListenerCallback::Mouse(on_leave), None);
		}

		let viewport_rs = viewport.clone();
		let on_resize = Closure::<dyn FnMut()>::new(move || {
			if let Some(win) = web_sys::window() {
				viewport_rs.set(viewport_size(&win));
			}
		});
		hs.attach(window.clone().into(), "resize", ListenerCallback::Plain(on_resize), None);

		let (field_rs, viewport_rs) = (field_init.clone(), viewport.clone());
		let on_reseed = Closure::<dyn FnMut()>::new(move || {
			let (w, h) = viewport_rs.get();
			if let Some(ref mut f) = *field_rs.borrow_mut() {
				f.reseed(w, h);
				publish(sprites, f);
			}
		});
		match window.set_interval_with_callback_and_timeout_and_arguments_0(
			on_reseed.as_ref().unchecked_ref(),
			interval_ms,
		) {
			Ok(id) => hs.registrations.track_interval(id),
			Err(e) => warn!("floating-notes: reseed timer failed: {:?}", e),
		}
		hs.reseed = Some(on_reseed);

		let (field_fr, pointer_fr, viewport_fr, handles_fr) = (
			field_init.clone(),
			pointer.clone(),
			viewport.clone(),
			handles_init.clone(),
		);
		hs.frame = Some(Closure::new(move || {
			let (w, h) = viewport_fr.get();
			if let Some(ref mut f) = *field_fr.borrow_mut() {
				f.tick(pointer_fr.get(), w, h);
				publish(sprites, f);
			}
			schedule_frame(&handles_fr);
		}));
		drop(hs);
		schedule_frame(&handles_init);
	});

	let (layer, theme_name) = (render::layer_style(&theme), theme.name);
	view! {
		<div class="floating-notes" data-theme=theme_name style=layer aria-hidden="true">
			<For
				each=move || {
					sprites.with(|batch| {
						batch
							.particles
							.iter()
							.map(|p| SpriteSlot {
								generation: batch.generation,
								id: p.id(),
								symbol: p.symbol(),
							})
							.collect::<Vec<_>>()
					})
				}
				key=|slot: &SpriteSlot| (slot.generation, slot.id)
				children=move |slot: SpriteSlot| {
					let SpriteSlot { generation, id, symbol } = slot;
					let theme = theme.clone();
					let style = move || {
						sprites.with(|batch| {
							batch
								.sprite(generation, id)
								.map(|p| render::sprite_style(p, &theme))
								.unwrap_or_default()
						})
					};
					view! { <span class="floating-note" style=style>{symbol}</span> }
				}
			/>
		</div>
	}
}
