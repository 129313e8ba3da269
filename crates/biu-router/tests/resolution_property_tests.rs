//! Property-based tests for fragment resolution
//!
//! Uses proptest to verify properties that should hold for all route keys
//! and parameter sets.

#[cfg(not(target_arch = "wasm32"))]
mod property_tests {
	use async_trait::async_trait;
	use biu_router::memory::MemoryDocument;
	use biu_router::{FetchError, FragmentFetcher, RouteEntry, Router, RouterConfig};
	use proptest::prelude::*;
	use proptest::proptest;

	struct NoFetch;

	#[async_trait(?Send)]
	impl FragmentFetcher for NoFetch {
		async fn fetch_text(&self, address: &str) -> Result<String, FetchError> {
			Err(FetchError::Network {
				address: address.to_string(),
				message: "offline".to_string(),
			})
		}
	}

	fn router(routes: &[String]) -> Router<NoFetch, MemoryDocument> {
		let router = Router::new(RouterConfig::default(), NoFetch, MemoryDocument::new());
		router.init(routes.iter().map(|url| RouteEntry::new(url.as_str(), "p")));
		router
	}

	const KEY: &str = r"[a-zA-Z0-9_\-./]{1,24}";
	const VALUE: &str = r"[a-zA-Z0-9_\-.%]{0,16}";

	proptest! {
		/// Property: `#k?k1=v1&k2=v2` resolves to `k` with exactly those pairs
		#[test]
		fn prop_resolution_is_deterministic(
			key in KEY,
			params in prop::collection::btree_map(KEY, VALUE, 0..6)
		) {
			let query = params
				.iter()
				.map(|(k, v)| format!("{}={}", k, v))
				.collect::<Vec<_>>()
				.join("&");
			let fragment = if query.is_empty() {
				format!("#{}", key)
			} else {
				format!("#{}?{}", key, query)
			};

			let router = router(&["home".to_string()]);
			let target = router.resolve(&fragment).unwrap();

			prop_assert_eq!(&target.path, &key);
			prop_assert_eq!(target.params.len(), params.len());
			for (k, v) in &params {
				prop_assert_eq!(target.params.get(k), Some(v.as_str()));
			}
			prop_assert_eq!(router.resolve(&fragment), Some(target));
		}

		/// Property: a fragment without a route segment resolves to the first registered route
		#[test]
		fn prop_fallback_is_first_registered(
			routes in prop::collection::vec(KEY, 1..8),
			query in r"[a-z0-9=&]{0,20}",
			hash in proptest::bool::ANY
		) {
			let fragment = match (hash, query.is_empty()) {
				(true, true) => "#".to_string(),
				(true, false) => format!("#?{}", query),
				(false, true) => String::new(),
				(false, false) => format!("?{}", query),
			};

			let router = router(&routes);
			let target = router.resolve(&fragment).unwrap();

			prop_assert_eq!(&target.path, &routes[0]);
		}

		/// Property: bare keys map to no value and the last duplicate wins
		#[test]
		fn prop_bare_and_duplicate_keys(
			key in r"[a-z]{1,8}",
			values in prop::collection::vec(r"[a-z0-9]{1,8}", 1..5),
			trailing_bare in proptest::bool::ANY
		) {
			let mut tokens: Vec<String> = values.iter().map(|v| format!("{}={}", key, v)).collect();
			if trailing_bare {
				tokens.push(key.clone());
			}
			let fragment = format!("#page?{}", tokens.join("&"));

			let target = router(&["home".to_string()]).resolve(&fragment).unwrap();

			let expected = if trailing_bare { None } else { values.last().map(String::as_str) };
			prop_assert_eq!(target.params.entry(&key), Some(expected));
		}

		/// Property: rendering a target back to a fragment resolves to the same target
		#[test]
		fn prop_fragment_round_trip(
			key in KEY,
			params in prop::collection::btree_map(r"[a-z]{1,8}", prop::option::of(r"[a-z0-9]{1,8}"), 0..5)
		) {
			let router = router(&["home".to_string()]);
			let mut target = biu_router::NavigationTarget::new(key);
			for (k, v) in &params {
				target = target.with_param(k.clone(), v.as_deref());
			}

			let resolved = router.resolve(&target.to_fragment()).unwrap();

			prop_assert_eq!(resolved, target);
		}
	}
}
