//! # biu
//!
//! A hash-fragment router. The part of the URL after `#` names a fragment
//! document on the server; the router fetches it and writes it into the
//! page element the fragment itself declares with a `b-target` attribute.
//!
//! ```text
//! index.html#about?tab=2
//!   ─▶ GET about.html ─▶ <div b-target="main">…</div>
//!   ─▶ #main.innerHTML = <div b-target="main">…</div>
//! ```
//!
//! ## Crates
//!
//! - [`biu_router`]: address grammar, route registry, configuration and the
//!   navigation executor, generic over a fetcher and a document host
//! - `biu_dom` (feature `dom`): browser implementations of both, plus
//!   `load`/`hashchange` wiring and the `BiuRouter` JavaScript class
//!
//! ## Feature Flags
//!
//! | Feature | Default | Enables |
//! |---------|---------|---------|
//! | `dom` | yes | [`dom`] module (browser bindings) |
//! | `memory` | no | `memory` module (in-memory document host) |
//! | `console_error_panic_hook` | no | forwards panics to the browser console |
//!
//! ## Example
//!
//! ```rust,ignore
//! use biu::prelude::*;
//!
//! #[wasm_bindgen(start)]
//! pub fn main() -> Result<(), JsValue> {
//! 	biu::dom::launch(
//! 		RouterConfig::html_documents(),
//! 		[RouteEntry::new("home", "p1"), RouteEntry::new("about", "p1")],
//! 	)?;
//! 	Ok(())
//! }
//! ```

#[cfg(feature = "dom")]
pub mod dom;

pub use biu_router::{
	Address, ConfigError, DocumentHost, FetchError, FetchMode, FragmentFetcher, Hook,
	LifecycleHooks, NavigationError, NavigationOutcome, NavigationResult, NavigationTarget,
	QueryParams, RouteEntry, RouteRegistry, RouteSegment, Router, RouterConfig,
};
pub use biu_router::{debug_log, error_log, info_log, warn_log};

#[cfg(feature = "memory")]
pub use biu_router::memory;

/// Commonly used types.
pub mod prelude {
	pub use biu_router::{
		DocumentHost, FetchMode, FragmentFetcher, NavigationError, NavigationOutcome,
		NavigationTarget, RouteEntry, Router, RouterConfig,
	};
}
