//! Errors raised while setting the router up in a page.
//!
//! Navigation failures never surface here; they are logged and dropped by
//! the event handlers. These errors only concern start-up: a missing
//! `window`, a bad configuration, unreadable route entries.

use biu_router::ConfigError;
use thiserror::Error;

/// Result type for browser start-up.
pub type DomResult<T> = Result<T, DomError>;

/// Start-up failure.
#[derive(Debug, Error)]
pub enum DomError {
	/// No global `window` (not running in a page).
	#[error("No window object")]
	NoWindow,
	/// The window has no document.
	#[error("No document object")]
	NoDocument,
	/// The router configuration was rejected.
	#[error(transparent)]
	Config(#[from] ConfigError),
	/// Route entries or configuration could not be read from a JS value.
	#[error("Invalid value passed to the router: {0}")]
	InvalidValue(String),
	/// A browser API call threw.
	#[error("Browser call '{call}' failed: {message}")]
	Js {
		/// API that threw.
		call: &'static str,
		/// Stringified exception.
		message: String,
	},
}

#[cfg(all(target_family = "wasm", target_os = "unknown"))]
impl DomError {
	/// Wraps a thrown JS value.
	pub(crate) fn js(call: &'static str, value: wasm_bindgen::JsValue) -> Self {
		Self::Js {
			call,
			message: value.as_string().unwrap_or_else(|| format!("{:?}", value)),
		}
	}
}

#[cfg(all(target_family = "wasm", target_os = "unknown"))]
impl From<DomError> for wasm_bindgen::JsValue {
	fn from(err: DomError) -> Self {
		wasm_bindgen::JsValue::from_str(&err.to_string())
	}
}

#[cfg(all(target_family = "wasm", target_os = "unknown"))]
impl From<serde_wasm_bindgen::Error> for DomError {
	fn from(err: serde_wasm_bindgen::Error) -> Self {
		Self::InvalidValue(err.to_string())
	}
}
