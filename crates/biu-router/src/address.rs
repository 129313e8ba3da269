//! Fragment address grammar.
//!
//! The router reads the fragment the browser reports for the page address
//! (`location.hash`), which has the shape:
//!
//! ```text
//! fragment := route-portion [ "?" query [ "?" ignored ] ]
//! route-portion := [ prefix ] "#" segment [ "#" ignored ]
//! query := pair *( "&" pair )
//! pair := key [ "=" value [ "=" ignored ] ]
//! ```
//!
//! Parsing is best-effort and never fails: malformed input degrades to an
//! absent segment or odd-looking parameters. Keys and values are taken as
//! written unless decoding is requested with [`Address::parse_with`].

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// The route segment of a fragment.
///
/// `Absent` and `Empty` are kept apart so callers can tell `""` from `"#"`,
/// even though the router treats both as "no route" and falls back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteSegment {
	/// No `#` before the query portion.
	Absent,
	/// A `#` followed by nothing.
	Empty,
	/// A route key.
	Present(String),
}

impl RouteSegment {
	/// Returns the route key if one is present.
	pub fn key(&self) -> Option<&str> {
		match self {
			Self::Present(key) => Some(key),
			Self::Absent | Self::Empty => None,
		}
	}
}

/// Query parameters of a fragment.
///
/// A bare token (`#list?all`) maps to `None`. Later duplicates overwrite
/// earlier ones.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QueryParams(HashMap<String, Option<String>>);

impl QueryParams {
	/// Creates an empty parameter map.
	pub fn new() -> Self {
		Self::default()
	}

	/// Parses a query portion (the text after `?`, without it).
	///
	/// An empty query yields no parameters.
	pub fn parse(query: &str) -> Self {
		Self::parse_with(query, false)
	}

	/// Parses a query portion, percent-decoding keys and values when `decode`
	/// is set.
	///
	/// Tokens are decoded one by one in query order, so `q=1&%71=2` yields
	/// `q = 2`. Input that does not decode to UTF-8 is kept as written.
	pub fn parse_with(query: &str, decode: bool) -> Self {
		let mut params = Self::new();
		if query.is_empty() {
			return params;
		}
		for token in query.split('&') {
			let mut parts = token.split('=');
			let key = parts.next().unwrap_or_default();
			let value = parts.next();
			if decode {
				params.insert(percent_decode(key), value.map(percent_decode));
			} else {
				params.insert(key, value);
			}
		}
		params
	}

	/// Inserts a parameter, replacing any previous value for `key`.
	pub fn insert(&mut self, key: impl Into<String>, value: Option<impl Into<String>>) {
		self.0.insert(key.into(), value.map(Into::into));
	}

	/// Returns the value of `key` when it was given with `=`.
	pub fn get(&self, key: &str) -> Option<&str> {
		self.0.get(key).and_then(|value| value.as_deref())
	}

	/// Returns the raw entry: `Some(None)` for a bare key, `None` when missing.
	pub fn entry(&self, key: &str) -> Option<Option<&str>> {
		self.0.get(key).map(|value| value.as_deref())
	}

	/// Returns whether `key` was present, with or without a value.
	pub fn contains_key(&self, key: &str) -> bool {
		self.0.contains_key(key)
	}

	/// Returns the number of distinct keys.
	pub fn len(&self) -> usize {
		self.0.len()
	}

	/// Returns whether there are no parameters.
	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	/// Iterates over `(key, value)` pairs in arbitrary order.
	pub fn iter(&self) -> impl Iterator<Item = (&str, Option<&str>)> {
		self.0.iter().map(|(k, v)| (k.as_str(), v.as_deref()))
	}

	/// Renders the parameters as a query portion, keys sorted for stable output.
	///
	/// Keys and values are percent-encoded, so `&`, `=` and `?` inside them
	/// survive a [`QueryParams::parse_with`] with decoding.
	pub fn to_query(&self) -> String {
		let mut pairs: Vec<_> = self.iter().collect();
		pairs.sort_by(|a, b| a.0.cmp(b.0));
		pairs
			.into_iter()
			.map(|(key, value)| match value {
				Some(value) => format!(
					"{}={}",
					urlencoding::encode(key),
					urlencoding::encode(value)
				),
				None => urlencoding::encode(key).into_owned(),
			})
			.collect::<Vec<_>>()
			.join("&")
	}
}

fn percent_decode(raw: &str) -> String {
	urlencoding::decode(raw)
		.map(|cow| cow.into_owned())
		.unwrap_or_else(|_| raw.to_string())
}

/// A parsed fragment address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Address {
	/// The route segment.
	pub route: RouteSegment,
	/// The query parameters.
	pub query: QueryParams,
}

impl Address {
	/// Parses a fragment such as `#about?tab=2`.
	pub fn parse(fragment: &str) -> Self {
		Self::parse_with(fragment, false)
	}

	/// Parses a fragment, percent-decoding query keys and values when
	/// `decode_params` is set. The route segment is never decoded.
	pub fn parse_with(fragment: &str, decode_params: bool) -> Self {
		let (route_portion, query_portion) = match fragment.split_once('?') {
			// Only the text up to a second `?` belongs to the query.
			Some((route, rest)) => (route, rest.split_once('?').map_or(rest, |(query, _)| query)),
			None => (fragment, ""),
		};

		Self {
			route: Self::route_segment(route_portion),
			query: QueryParams::parse_with(query_portion, decode_params),
		}
	}

	fn route_segment(route_portion: &str) -> RouteSegment {
		match route_portion.split('#').nth(1) {
			None => RouteSegment::Absent,
			Some("") => RouteSegment::Empty,
			Some(key) => RouteSegment::Present(key.to_string()),
		}
	}
}
