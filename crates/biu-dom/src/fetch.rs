//! `fetch`-backed fragment fetcher.

use async_trait::async_trait;
use biu_router::{FetchError, FragmentFetcher};

/// Fetches fragment documents with the browser's `fetch`.
///
/// Addresses are passed through unchanged, so relative route addresses
/// resolve against the page URL exactly like an `<a href>` would.
#[derive(Debug, Clone, Copy, Default)]
pub struct HttpFetcher;

impl HttpFetcher {
	/// Creates a fetcher.
	pub fn new() -> Self {
		Self
	}
}

#[cfg(all(target_family = "wasm", target_os = "unknown"))]
#[async_trait(?Send)]
impl FragmentFetcher for HttpFetcher {
	async fn fetch_text(&self, address: &str) -> Result<String, FetchError> {
		use gloo_net::http::Request;

		let response = Request::get(address)
			.send()
			.await
			.map_err(|e| FetchError::Network {
				address: address.to_string(),
				message: e.to_string(),
			})?;

		if !response.ok() {
			return Err(FetchError::Status {
				address: address.to_string(),
				status: response.status(),
				status_text: response.status_text(),
			});
		}

		response.text().await.map_err(|e| FetchError::Body {
			address: address.to_string(),
			message: e.to_string(),
		})
	}
}

/// Non-WASM stub: there is no browser `fetch` to call.
#[cfg(not(all(target_family = "wasm", target_os = "unknown")))]
#[async_trait(?Send)]
impl FragmentFetcher for HttpFetcher {
	async fn fetch_text(&self, address: &str) -> Result<String, FetchError> {
		Err(FetchError::Network {
			address: address.to_string(),
			message: "fetch is not supported outside WASM".to_string(),
		})
	}
}
