//! Router configuration.
//!
//! A page picks between the two fetch conventions and names the attributes
//! and classes of its markup contract. Every field has a default, so a JSON
//! configuration only needs the fields it changes:
//!
//! ```json
//! { "fetch_mode": { "suffixed": ".html" }, "highlight_active_link": true }
//! ```

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};

/// Attribute a fragment document's root element uses to name its container.
pub const DEFAULT_TARGET_ATTRIBUTE: &str = "b-target";

/// Class carried by navigation links.
pub const DEFAULT_NAV_ITEM_CLASS: &str = "nav-item";

/// Class applied to the navigation link of the current route.
pub const DEFAULT_ACTIVE_CLASS: &str = "active";

/// Suffix used by [`RouterConfig::html_documents`].
pub const HTML_SUFFIX: &str = ".html";

/// How a route key becomes the address of its fragment document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FetchMode {
	/// Fetch the route key as-is (`about`).
	#[default]
	Literal,
	/// Append a document extension (`about.html`).
	Suffixed(String),
}

impl FetchMode {
	/// Returns the fetch address for a route key.
	pub fn document_address(&self, path: &str) -> String {
		match self {
			Self::Literal => path.to_string(),
			Self::Suffixed(suffix) => format!("{}{}", path, suffix),
		}
	}
}

/// Router configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RouterConfig {
	/// Fetch address convention.
	pub fetch_mode: FetchMode,
	/// Container-declaration attribute on the fragment root.
	pub target_attribute: String,
	/// Mark the current navigation link on page load.
	pub highlight_active_link: bool,
	/// Class carried by navigation links.
	pub nav_item_class: String,
	/// Class applied to the current navigation link.
	pub active_class: String,
	/// Abort superseded fetches and discard their late completions.
	pub discard_stale: bool,
	/// Percent-decode query keys and values.
	pub decode_params: bool,
}

impl Default for RouterConfig {
	fn default() -> Self {
		Self {
			fetch_mode: FetchMode::Literal,
			target_attribute: DEFAULT_TARGET_ATTRIBUTE.to_string(),
			highlight_active_link: false,
			nav_item_class: DEFAULT_NAV_ITEM_CLASS.to_string(),
			active_class: DEFAULT_ACTIVE_CLASS.to_string(),
			discard_stale: true,
			decode_params: false,
		}
	}
}

impl RouterConfig {
	/// Fetches route keys literally; no active-link marker.
	pub fn literal() -> Self {
		Self::default()
	}

	/// Fetches `<route>.html` and marks the current navigation link on load.
	pub fn html_documents() -> Self {
		Self {
			fetch_mode: FetchMode::Suffixed(HTML_SUFFIX.to_string()),
			highlight_active_link: true,
			..Self::default()
		}
	}

	/// Sets the fetch mode.
	pub fn with_fetch_mode(mut self, fetch_mode: FetchMode) -> Self {
		self.fetch_mode = fetch_mode;
		self
	}

	/// Sets the container-declaration attribute.
	pub fn with_target_attribute(mut self, attribute: impl Into<String>) -> Self {
		self.target_attribute = attribute.into();
		self
	}

	/// Enables or disables the stale-navigation guard.
	pub fn with_discard_stale(mut self, discard_stale: bool) -> Self {
		self.discard_stale = discard_stale;
		self
	}

	/// Enables or disables percent-decoding of query parameters.
	pub fn with_decode_params(mut self, decode_params: bool) -> Self {
		self.decode_params = decode_params;
		self
	}

	/// Parses and validates a JSON configuration.
	pub fn from_json(json: &str) -> Result<Self, ConfigError> {
		let config: Self = serde_json::from_str(json)?;
		config.validate()?;
		Ok(config)
	}

	/// Checks that every name used to build selectors is usable.
	pub fn validate(&self) -> Result<(), ConfigError> {
		let names = [
			("target_attribute", &self.target_attribute),
			("nav_item_class", &self.nav_item_class),
			("active_class", &self.active_class),
		];
		for (field, value) in names {
			if value.is_empty() {
				return Err(ConfigError::Invalid(format!("{} must not be empty", field)));
			}
			if value.chars().any(|c| c.is_whitespace() || c == '"') {
				return Err(ConfigError::Invalid(format!(
					"{} must not contain whitespace or quotes: {:?}",
					field, value
				)));
			}
		}
		if let FetchMode::Suffixed(suffix) = &self.fetch_mode
			&& suffix.is_empty()
		{
			return Err(ConfigError::Invalid(
				"suffixed fetch mode needs a non-empty suffix".to_string(),
			));
		}
		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	#[case(FetchMode::Literal, "about", "about")]
	#[case(FetchMode::Suffixed(".html".to_string()), "about", "about.html")]
	#[case(FetchMode::Suffixed(".htm".to_string()), "docs/intro", "docs/intro.htm")]
	fn test_document_address(#[case] mode: FetchMode, #[case] path: &str, #[case] expected: &str) {
		assert_eq!(mode.document_address(path), expected);
	}

	#[rstest]
	fn test_presets() {
		let literal = RouterConfig::literal();
		assert_eq!(literal.fetch_mode, FetchMode::Literal);
		assert!(!literal.highlight_active_link);

		let html = RouterConfig::html_documents();
		assert_eq!(html.fetch_mode, FetchMode::Suffixed(".html".to_string()));
		assert!(html.highlight_active_link);
		assert_eq!(html.target_attribute, "b-target");
	}

	#[rstest]
	fn test_from_json_partial() {
		let config = RouterConfig::from_json(
			r#"{ "fetch_mode": { "suffixed": ".html" }, "highlight_active_link": true }"#,
		)
		.unwrap();

		assert_eq!(config, RouterConfig::html_documents());
	}

	#[rstest]
	fn test_from_json_literal_mode() {
		let config = RouterConfig::from_json(r#"{ "fetch_mode": "literal" }"#).unwrap();
		assert_eq!(config.fetch_mode, FetchMode::Literal);
		assert!(config.discard_stale);
	}

	#[rstest]
	#[case(r#"{ "target_attribute": "" }"#)]
	#[case(r#"{ "active_class": "is active" }"#)]
	#[case(r#"{ "fetch_mode": { "suffixed": "" } }"#)]
	fn test_from_json_rejects_invalid_values(#[case] json: &str) {
		let result = RouterConfig::from_json(json);
		assert!(matches!(result, Err(ConfigError::Invalid(_))));
	}

	#[rstest]
	fn test_from_json_rejects_malformed_json() {
		let result = RouterConfig::from_json("{ fetch_mode");
		assert!(matches!(result, Err(ConfigError::Json(_))));
	}
}
