//! # biu-dom
//!
//! Browser bindings for [`biu_router`]: a `fetch`-backed
//! [`FragmentFetcher`](biu_router::FragmentFetcher), a DOM-backed
//! [`DocumentHost`](biu_router::DocumentHost), and the wiring that runs a
//! navigation on `load` and on every `hashchange`.
//!
//! ## From Rust
//!
//! ```ignore
//! use biu_dom::launch;
//! use biu_router::{RouteEntry, RouterConfig};
//!
//! #[wasm_bindgen(start)]
//! pub fn main() -> Result<(), JsValue> {
//! 	let router = launch(
//! 		RouterConfig::html_documents(),
//! 		[RouteEntry::new("home", "main"), RouteEntry::new("about", "main")],
//! 	)?;
//! 	// keep `router` if the page needs `resolve` later; listeners hold their own handle
//! 	Ok(())
//! }
//! ```
//!
//! ## From JavaScript
//!
//! ```js
//! import init, { BiuRouter } from "./pkg/biu_dom.js";
//!
//! await init();
//! const router = new BiuRouter({ fetch_mode: { suffixed: ".html" }, highlight_active_link: true });
//! router.init({ url: "home", parent: "main" }, { url: "about", parent: "main" });
//! ```

pub mod error;
pub mod fetch;

#[cfg(all(target_family = "wasm", target_os = "unknown"))]
pub mod document;
#[cfg(all(target_family = "wasm", target_os = "unknown"))]
pub mod events;
#[cfg(all(target_family = "wasm", target_os = "unknown"))]
pub mod launcher;

pub use error::{DomError, DomResult};
pub use fetch::HttpFetcher;

#[cfg(all(target_family = "wasm", target_os = "unknown"))]
pub use document::BrowserDocument;
#[cfg(all(target_family = "wasm", target_os = "unknown"))]
pub use launcher::{BiuRouter, WebRouter, launch};
