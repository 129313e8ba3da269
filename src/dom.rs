//! Browser bindings
//!
//! Re-exports `biu-dom`: the `fetch`-backed fetcher, the DOM document host,
//! event wiring and the `BiuRouter` JavaScript class.
//!
//! ## Example
//!
//! ```rust,ignore
//! use biu::dom::launch;
//! use biu::{RouteEntry, RouterConfig};
//!
//! let router = launch(RouterConfig::default(), [RouteEntry::new("home", "p1")])?;
//! ```

pub use biu_dom::*;
