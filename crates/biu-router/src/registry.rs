//! Route registry.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A route registration: `url` is the route key, `parent` an opaque label
/// stored for the host and never interpreted by the router.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteEntry {
	/// Route key, as it appears after `#`.
	pub url: String,
	/// Caller-defined owner label.
	#[serde(default)]
	pub parent: String,
}

impl RouteEntry {
	/// Creates a route entry.
	pub fn new(url: impl Into<String>, parent: impl Into<String>) -> Self {
		Self {
			url: url.into(),
			parent: parent.into(),
		}
	}
}

/// Registered route keys in registration order.
///
/// The first key ever registered is the fallback route. Registering a key
/// again replaces its parent but keeps its position.
#[derive(Debug, Clone, Default)]
pub struct RouteRegistry {
	entries: Vec<RouteEntry>,
	index: HashMap<String, usize>,
}

impl RouteRegistry {
	/// Creates an empty registry.
	pub fn new() -> Self {
		Self::default()
	}

	/// Registers a route. Returns `false` if the key was already registered.
	pub fn insert(&mut self, entry: RouteEntry) -> bool {
		if let Some(&position) = self.index.get(&entry.url) {
			self.entries[position].parent = entry.parent;
			return false;
		}
		self.index.insert(entry.url.clone(), self.entries.len());
		self.entries.push(entry);
		true
	}

	/// Returns the fallback route key.
	pub fn fallback(&self) -> Option<&str> {
		self.entries.first().map(|entry| entry.url.as_str())
	}

	/// Returns the parent label registered for `url`.
	pub fn parent_of(&self, url: &str) -> Option<&str> {
		self.index
			.get(url)
			.map(|&position| self.entries[position].parent.as_str())
	}

	/// Returns whether `url` is registered.
	pub fn contains(&self, url: &str) -> bool {
		self.index.contains_key(url)
	}

	/// Returns the number of registered routes.
	pub fn len(&self) -> usize {
		self.entries.len()
	}

	/// Returns whether no route is registered.
	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	/// Iterates over the routes in registration order.
	pub fn iter(&self) -> impl Iterator<Item = &RouteEntry> {
		self.entries.iter()
	}
}

impl Extend<RouteEntry> for RouteRegistry {
	fn extend<I: IntoIterator<Item = RouteEntry>>(&mut self, iter: I) {
		for entry in iter {
			self.insert(entry);
		}
	}
}

impl FromIterator<RouteEntry> for RouteRegistry {
	fn from_iter<I: IntoIterator<Item = RouteEntry>>(iter: I) -> Self {
		let mut registry = Self::new();
		registry.extend(iter);
		registry
	}
}
