//! Capabilities the router consumes from its host environment.
//!
//! The router neither fetches nor parses markup itself. A browser host
//! implements these traits on top of `fetch` and the DOM; native hosts and
//! tests use in-memory implementations.
//!
//! Both traits are `?Send`: browser handles (`web_sys::Document`, JS
//! promises) are not thread-safe and the router runs on one event loop.

use crate::error::FetchError;
use async_trait::async_trait;
use std::rc::Rc;

/// Fetches the text of a fragment document.
#[async_trait(?Send)]
pub trait FragmentFetcher {
	/// Fetches `address` and returns the response body as text.
	///
	/// # Errors
	///
	/// Returns [`FetchError`] for transport failures, non-success statuses
	/// and unreadable bodies.
	async fn fetch_text(&self, address: &str) -> Result<String, FetchError>;
}

/// Reads and mutates the live page.
///
/// Methods take `&self`: like the DOM, implementations mutate through
/// shared handles.
pub trait DocumentHost {
	/// Parses `fragment` as markup and returns the value of `attribute` on
	/// its root element.
	fn declared_container(&self, fragment: &str, attribute: &str) -> Option<String>;

	/// Replaces the inner content of the element with id `id`.
	///
	/// Returns `false` when no such element exists.
	fn replace_container(&self, id: &str, content: &str) -> bool;

	/// Adds `class` to the first element matching the CSS `selector`.
	///
	/// Returns `false` when nothing matches or the selector is invalid.
	fn add_class_to_first(&self, selector: &str, class: &str) -> bool;
}

#[async_trait(?Send)]
impl<T: FragmentFetcher + ?Sized> FragmentFetcher for Rc<T> {
	async fn fetch_text(&self, address: &str) -> Result<String, FetchError> {
		(**self).fetch_text(address).await
	}
}

impl<T: DocumentHost + ?Sized> DocumentHost for Rc<T> {
	fn declared_container(&self, fragment: &str, attribute: &str) -> Option<String> {
		(**self).declared_container(fragment, attribute)
	}

	fn replace_container(&self, id: &str, content: &str) -> bool {
		(**self).replace_container(id, content)
	}

	fn add_class_to_first(&self, selector: &str, class: &str) -> bool {
		(**self).add_class_to_first(selector, class)
	}
}
