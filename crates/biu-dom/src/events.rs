//! `load` / `hashchange` wiring.
//!
//! Each event reads `location.hash` and spawns one navigation on the
//! browser's microtask queue. Navigation errors end here: they are logged
//! and the page is left as it was.

use crate::error::{DomError, DomResult};
use crate::launcher::WebRouter;
use biu_router::{NavigationOutcome, NavigationResult, info_log, warn_log};
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::Event;

/// Which browser event started a navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
	/// Page load: also marks the active navigation link.
	Load,
	/// Fragment change.
	HashChange,
}

/// Returns the current `location.hash`, or `""` when unavailable.
pub fn current_fragment() -> String {
	web_sys::window()
		.and_then(|window| window.location().hash().ok())
		.unwrap_or_default()
}

/// Runs one navigation and logs its result. Returns whether the page changed.
pub async fn navigate(router: &WebRouter, fragment: &str, trigger: Trigger) -> bool {
	let result = match trigger {
		Trigger::Load => router.on_load(fragment).await,
		Trigger::HashChange => router.url_change(fragment).await,
	};
	report(fragment, result)
}

fn report(fragment: &str, result: NavigationResult<NavigationOutcome>) -> bool {
	match result {
		Ok(outcome) => outcome.is_spliced(),
		Err(err) => {
			warn_log!("navigation to {:?} dropped: {}", fragment, err);
			false
		}
	}
}

fn spawn_navigation(router: Rc<WebRouter>, trigger: Trigger) {
	let fragment = current_fragment();
	wasm_bindgen_futures::spawn_local(async move {
		navigate(&router, &fragment, trigger).await;
	});
}

/// Subscribes `router` to `hashchange` and `load`.
///
/// When the page has already finished loading (the usual case once the
/// WASM module is instantiated), the load navigation runs immediately.
/// Listeners live for the rest of the page.
pub fn install(router: &Rc<WebRouter>) -> DomResult<()> {
	let window = web_sys::window().ok_or(DomError::NoWindow)?;
	let document = window.document().ok_or(DomError::NoDocument)?;

	let hash_router = Rc::clone(router);
	let on_hash_change = Closure::wrap(Box::new(move |_event: Event| {
		spawn_navigation(Rc::clone(&hash_router), Trigger::HashChange);
	}) as Box<dyn FnMut(_)>);
	window
		.add_event_listener_with_callback("hashchange", on_hash_change.as_ref().unchecked_ref())
		.map_err(|e| DomError::js("addEventListener(hashchange)", e))?;
	on_hash_change.forget();

	if document.ready_state() == "complete" {
		info_log!("page already loaded; navigating now");
		spawn_navigation(Rc::clone(router), Trigger::Load);
		return Ok(());
	}

	let load_router = Rc::clone(router);
	let on_load = Closure::wrap(Box::new(move |_event: Event| {
		spawn_navigation(Rc::clone(&load_router), Trigger::Load);
	}) as Box<dyn FnMut(_)>);
	window
		.add_event_listener_with_callback("load", on_load.as_ref().unchecked_ref())
		.map_err(|e| DomError::js("addEventListener(load)", e))?;
	on_load.forget();

	Ok(())
}
