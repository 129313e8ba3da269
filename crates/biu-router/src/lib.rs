//! # biu-router
//!
//! Hash-fragment router core. Maps the fragment part of the page address
//! (`#about?tab=2`) to a fragment document, fetches it and splices it into
//! the container the document declares.
//!
//! The crate is platform-independent: fetching and DOM access are consumed
//! through the [`FragmentFetcher`] and [`DocumentHost`] traits. Browser
//! implementations live in `biu-dom`; [`memory::MemoryDocument`] provides an
//! in-memory page for native hosts and tests.
//!
//! ## Modules
//!
//! - [`address`]: fragment grammar `#segment(?pairs)?`
//! - [`registry`]: route keys in registration order
//! - [`config`]: fetch mode and page-contract names
//! - [`navigation`]: the [`Router`] and its navigation executor
//! - [`host`]: capability traits
//! - [`error`]: error types
//!
//! ## Example
//!
//! ```ignore
//! use biu_router::{Router, RouterConfig, RouteEntry};
//!
//! let router = Router::new(RouterConfig::html_documents(), fetcher, document);
//! router.init([
//! 	RouteEntry::new("home", "main"),
//! 	RouteEntry::new("about", "main"),
//! ]);
//!
//! // #about?tab=2 -> fetches "about.html" and fills the declared container
//! router.url_change("#about?tab=2").await?;
//! ```

#[macro_use]
pub mod logging;

pub mod address;
pub mod config;
pub mod error;
pub mod host;
#[cfg(feature = "memory")]
pub mod memory;
pub mod navigation;
pub mod registry;

pub use address::{Address, QueryParams, RouteSegment};
pub use config::{FetchMode, RouterConfig};
pub use error::{ConfigError, FetchError, NavigationError, NavigationResult};
pub use host::{DocumentHost, FragmentFetcher};
pub use navigation::{Hook, LifecycleHooks, NavigationOutcome, NavigationTarget, Router};
pub use registry::{RouteEntry, RouteRegistry};

#[doc(hidden)]
pub mod __private {
	#[cfg(not(target_arch = "wasm32"))]
	pub use tracing;
	#[cfg(target_arch = "wasm32")]
	pub use web_sys;
}
