//! The router and its navigation executor.
//!
//! A navigation resolves the current fragment to a [`NavigationTarget`],
//! fetches the fragment document for its path and splices the document into
//! the container it declares:
//!
//! ```text
//! "#about?tab=2" ─resolve─▶ { path: "about", params: { tab: "2" } }
//!                ─fetch───▶ "about.html" ─▶ <div b-target="main">…</div>
//!                ─splice──▶ #main.innerHTML = <div b-target="main">…</div>
//! ```
//!
//! Each navigation gets a sequence number. With
//! [`RouterConfig::discard_stale`] set, starting a navigation aborts the
//! previous in-flight fetch, and only the latest navigation may touch the
//! page.

use crate::address::{Address, QueryParams};
use crate::config::RouterConfig;
use crate::error::{NavigationError, NavigationResult};
use crate::host::{DocumentHost, FragmentFetcher};
use crate::registry::{RouteEntry, RouteRegistry};
use futures::future::{AbortHandle, Aborted, abortable};
use parking_lot::{Mutex, RwLock};
use serde::Serialize;
use std::rc::Rc;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};

/// A lifecycle hook callback.
pub type Hook = Rc<dyn Fn(&NavigationTarget)>;

/// `before` / `after` page-transition hooks.
///
/// The router stores these for the host but never calls them: no
/// transition point is defined for them yet. Hosts that want transition
/// callbacks can read them back through [`Router::hooks`].
#[derive(Clone, Default)]
pub struct LifecycleHooks {
	before: Option<Hook>,
	after: Option<Hook>,
}

impl std::fmt::Debug for LifecycleHooks {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("LifecycleHooks")
			.field("has_before", &self.before.is_some())
			.field("has_after", &self.after.is_some())
			.finish()
	}
}

impl LifecycleHooks {
	/// Creates an empty hook set.
	pub fn new() -> Self {
		Self::default()
	}

	/// Sets the hook meant to run before a page transition.
	pub fn with_before<H>(mut self, hook: H) -> Self
	where
		H: Fn(&NavigationTarget) + 'static,
	{
		self.before = Some(Rc::new(hook));
		self
	}

	/// Sets the hook meant to run after a page transition.
	pub fn with_after<H>(mut self, hook: H) -> Self
	where
		H: Fn(&NavigationTarget) + 'static,
	{
		self.after = Some(Rc::new(hook));
		self
	}

	/// Returns the `before` hook.
	pub fn before(&self) -> Option<&Hook> {
		self.before.as_ref()
	}

	/// Returns the `after` hook.
	pub fn after(&self) -> Option<&Hook> {
		self.after.as_ref()
	}
}

/// The resolved destination of a navigation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavigationTarget {
	/// Route key.
	pub path: String,
	/// Query parameters.
	pub params: QueryParams,
}

impl NavigationTarget {
	/// Creates a target without parameters.
	pub fn new(path: impl Into<String>) -> Self {
		Self {
			path: path.into(),
			params: QueryParams::new(),
		}
	}

	/// Adds a parameter.
	pub fn with_param(mut self, key: impl Into<String>, value: Option<&str>) -> Self {
		self.params.insert(key, value);
		self
	}

	/// Renders the target as a fragment (`#path?key=value`), with keys and
	/// values percent-encoded.
	pub fn to_fragment(&self) -> String {
		if self.params.is_empty() {
			format!("#{}", self.path)
		} else {
			format!("#{}?{}", self.path, self.params.to_query())
		}
	}
}

/// What a completed navigation did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationOutcome {
	/// The fragment document was written into its container.
	Spliced {
		/// Navigation sequence number.
		sequence: u64,
		/// Resolved target.
		target: NavigationTarget,
		/// Address that was fetched.
		address: String,
		/// Container that received the document.
		container: String,
	},
	/// A newer navigation started first; the page was left alone.
	Superseded {
		/// Navigation sequence number.
		sequence: u64,
		/// Resolved target.
		target: NavigationTarget,
		/// Address that was fetched.
		address: String,
	},
}

impl NavigationOutcome {
	/// Returns the navigation sequence number.
	pub fn sequence(&self) -> u64 {
		match self {
			Self::Spliced { sequence, .. } | Self::Superseded { sequence, .. } => *sequence,
		}
	}

	/// Returns whether the page was changed.
	pub fn is_spliced(&self) -> bool {
		matches!(self, Self::Spliced { .. })
	}
}

/// Hash-fragment router.
///
/// Construct one per page, register routes with [`Router::init`], then call
/// [`Router::on_load`] once and [`Router::url_change`] on every fragment
/// change. `biu-dom` wires both to the browser events.
pub struct Router<F, D> {
	config: RouterConfig,
	registry: RwLock<RouteRegistry>,
	fetcher: F,
	document: D,
	hooks: LifecycleHooks,
	initialized: AtomicBool,
	sequence: AtomicU64,
	in_flight: Mutex<Option<(u64, AbortHandle)>>,
}

impl<F, D> std::fmt::Debug for Router<F, D> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("Router")
			.field("config", &self.config)
			.field("routes_count", &self.registry.read().len())
			.field("hooks", &self.hooks)
			.field("sequence", &self.sequence.load(Ordering::SeqCst))
			.finish()
	}
}

impl<F, D> Router<F, D>
where
	F: FragmentFetcher,
	D: DocumentHost,
{
	/// Creates a router with no routes.
	pub fn new(config: RouterConfig, fetcher: F, document: D) -> Self {
		Self {
			config,
			registry: RwLock::new(RouteRegistry::new()),
			fetcher,
			document,
			hooks: LifecycleHooks::new(),
			initialized: AtomicBool::new(false),
			sequence: AtomicU64::new(0),
			in_flight: Mutex::new(None),
		}
	}

	/// Sets the lifecycle hooks.
	pub fn with_hooks(mut self, hooks: LifecycleHooks) -> Self {
		self.hooks = hooks;
		self
	}

	/// Returns the configuration.
	pub fn config(&self) -> &RouterConfig {
		&self.config
	}

	/// Returns the fetcher.
	pub fn fetcher(&self) -> &F {
		&self.fetcher
	}

	/// Returns the document host.
	pub fn document(&self) -> &D {
		&self.document
	}

	/// Returns the lifecycle hooks.
	pub fn hooks(&self) -> &LifecycleHooks {
		&self.hooks
	}

	/// Registers the page's routes. The first entry becomes the fallback.
	///
	/// Calling this again adds or overwrites entries; the fallback stays the
	/// first key ever registered.
	pub fn init<I>(&self, entries: I)
	where
		I: IntoIterator<Item = RouteEntry>,
	{
		if self.initialized.swap(true, Ordering::SeqCst) {
			warn_log!("router initialized more than once; merging routes");
		}
		let mut registry = self.registry.write();
		registry.extend(entries);
		debug_log!(
			"router has {} routes, fallback {:?}",
			registry.len(),
			registry.fallback()
		);
	}

	/// Returns whether [`Router::init`] has been called.
	pub fn is_initialized(&self) -> bool {
		self.initialized.load(Ordering::SeqCst)
	}

	/// Returns the number of registered routes.
	pub fn route_count(&self) -> usize {
		self.registry.read().len()
	}

	/// Returns whether `url` is a registered route key.
	pub fn is_registered(&self, url: &str) -> bool {
		self.registry.read().contains(url)
	}

	/// Returns the parent label registered for `url`.
	pub fn parent_of(&self, url: &str) -> Option<String> {
		self.registry.read().parent_of(url).map(str::to_string)
	}

	/// Returns the fallback route key.
	pub fn fallback_route(&self) -> Option<String> {
		self.registry.read().fallback().map(str::to_string)
	}

	/// Returns the registered routes in registration order.
	pub fn routes(&self) -> Vec<RouteEntry> {
		self.registry.read().iter().cloned().collect()
	}

	/// Returns the sequence number of the most recently started navigation.
	pub fn latest_sequence(&self) -> u64 {
		self.sequence.load(Ordering::SeqCst)
	}

	/// Resolves a fragment (`location.hash`) to a navigation target.
	///
	/// An absent or empty route segment resolves to the fallback route.
	/// Returns `None` only when that happens with no routes registered.
	pub fn resolve(&self, fragment: &str) -> Option<NavigationTarget> {
		let address = Address::parse_with(fragment, self.config.decode_params);
		let params = address.query;

		let path = match address.route.key() {
			Some(key) => {
				if !self.is_registered(key) {
					debug_log!("route '{}' is not registered; fetching anyway", key);
				}
				key.to_string()
			}
			None => {
				let fallback = self.fallback_route()?;
				debug_log!("no route in {:?}; falling back to '{}'", fragment, fallback);
				fallback
			}
		};

		Some(NavigationTarget { path, params })
	}

	/// Returns the fetch address of the fragment document for `path`.
	pub fn document_address(&self, path: &str) -> String {
		self.config.fetch_mode.document_address(path)
	}

	/// Returns the selector of the navigation link pointing at `path`.
	pub fn active_link_selector(&self, path: &str) -> String {
		let escaped = path.replace('\\', "\\\\").replace('"', "\\\"");
		format!(
			"a.{}[href=\"#{}\"]",
			self.config.nav_item_class, escaped
		)
	}

	/// Marks the navigation link of the current route as active.
	///
	/// Does nothing unless [`RouterConfig::highlight_active_link`] is set.
	/// Returns whether a link was marked.
	pub fn highlight_active_link(&self, fragment: &str) -> bool {
		if !self.config.highlight_active_link {
			return false;
		}
		let Some(target) = self.resolve(fragment) else {
			return false;
		};
		let selector = self.active_link_selector(&target.path);
		let marked = self
			.document
			.add_class_to_first(&selector, &self.config.active_class);
		if !marked {
			debug_log!("no navigation link matches {}", selector);
		}
		marked
	}

	/// Handles the page-load event: marks the active link, then navigates.
	pub async fn on_load(&self, fragment: &str) -> NavigationResult<NavigationOutcome> {
		self.highlight_active_link(fragment);
		self.url_change(fragment).await
	}

	/// Performs one navigation for `fragment`.
	///
	/// # Errors
	///
	/// Returns [`NavigationError`] when the page was left unchanged because
	/// the route could not be resolved, the fetch failed, or the container
	/// could not be found.
	pub async fn url_change(&self, fragment: &str) -> NavigationResult<NavigationOutcome> {
		let target = self
			.resolve(fragment)
			.ok_or_else(|| NavigationError::UnresolvableRoute {
				fragment: fragment.to_string(),
			})?;
		let address = self.document_address(&target.path);
		let sequence = self.sequence.fetch_add(1, Ordering::SeqCst) + 1;
		debug_log!("navigation #{}: {:?} -> {}", sequence, fragment, address);

		let text = if self.config.discard_stale {
			let (fetch, handle) = abortable(self.fetcher.fetch_text(&address));
			let previous = self.in_flight.lock().replace((sequence, handle));
			if let Some((previous_sequence, previous_handle)) = previous {
				debug_log!("aborting navigation #{}", previous_sequence);
				previous_handle.abort();
			}

			let fetched = fetch.await;
			self.clear_in_flight(sequence);
			match fetched {
				Ok(result) => result?,
				Err(Aborted) => return Ok(Self::superseded(sequence, target, address)),
			}
		} else {
			self.fetcher.fetch_text(&address).await?
		};

		if self.config.discard_stale && self.latest_sequence() != sequence {
			return Ok(Self::superseded(sequence, target, address));
		}

		let container = self
			.document
			.declared_container(&text, &self.config.target_attribute)
			.filter(|id| !id.is_empty())
			.ok_or_else(|| NavigationError::MissingContainerDeclaration {
				address: address.clone(),
				attribute: self.config.target_attribute.clone(),
			})?;

		if !self.document.replace_container(&container, &text) {
			return Err(NavigationError::MissingContainer { address, container });
		}

		debug_log!("navigation #{}: {} -> #{}", sequence, address, container);
		Ok(NavigationOutcome::Spliced {
			sequence,
			target,
			address,
			container,
		})
	}

	fn clear_in_flight(&self, sequence: u64) {
		let mut in_flight = self.in_flight.lock();
		if matches!(*in_flight, Some((current, _)) if current == sequence) {
			*in_flight = None;
		}
	}

	fn superseded(sequence: u64, target: NavigationTarget, address: String) -> NavigationOutcome {
		debug_log!("navigation #{} superseded; discarding {}", sequence, address);
		NavigationOutcome::Superseded {
			sequence,
			target,
			address,
		}
	}
}
