//! Error types for fragment navigation.
//!
//! None of these errors reach the host page: the browser bindings log them
//! and drop them. They exist so callers and tests can see why a navigation
//! left the page unchanged.

use thiserror::Error;

/// Result type for a single navigation.
pub type NavigationResult<T> = Result<T, NavigationError>;

/// Failure reported by a [`FragmentFetcher`](crate::FragmentFetcher).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
	/// The request never produced a response.
	#[error("Network error fetching '{address}': {message}")]
	Network {
		/// Address that was requested.
		address: String,
		/// Transport error message.
		message: String,
	},
	/// The server answered with a non-success status.
	#[error("Fetching '{address}' failed with status {status} {status_text}")]
	Status {
		/// Address that was requested.
		address: String,
		/// HTTP status code.
		status: u16,
		/// HTTP status text.
		status_text: String,
	},
	/// The response body could not be read as text.
	#[error("Failed to read body of '{address}': {message}")]
	Body {
		/// Address that was requested.
		address: String,
		/// Decoding error message.
		message: String,
	},
}

/// Why a navigation did not change the page.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NavigationError {
	/// The address had no route segment and no route is registered.
	#[error("No route segment in '{fragment}' and no fallback route registered")]
	UnresolvableRoute {
		/// Fragment that was resolved.
		fragment: String,
	},
	/// The fragment document could not be fetched.
	#[error(transparent)]
	Fetch(#[from] FetchError),
	/// The fetched document does not declare its container.
	#[error("Fragment '{address}' does not declare a '{attribute}' container")]
	MissingContainerDeclaration {
		/// Address the fragment was fetched from.
		address: String,
		/// Attribute that was looked up on the fragment root.
		attribute: String,
	},
	/// The declared container is not present in the live page.
	#[error("Container '#{container}' declared by '{address}' is not in the page")]
	MissingContainer {
		/// Address the fragment was fetched from.
		address: String,
		/// Declared container id.
		container: String,
	},
}

/// Invalid router configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
	/// The configuration document is not valid JSON for [`RouterConfig`](crate::RouterConfig).
	#[error("Invalid router configuration JSON: {0}")]
	Json(#[from] serde_json::Error),
	/// A configuration value is out of range.
	#[error("Invalid router configuration: {0}")]
	Invalid(String),
}
