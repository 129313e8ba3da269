//! Browser tests for the DOM document host and navigation against a live page
//!
//! Run with `wasm-pack test --headless --chrome crates/biu-dom`.

#[cfg(all(target_family = "wasm", target_os = "unknown"))]
mod browser_tests {
	use async_trait::async_trait;
	use biu_dom::{BiuRouter, BrowserDocument, HttpFetcher, launch};
	use biu_router::{
		DocumentHost, FetchError, FragmentFetcher, NavigationError, RouteEntry, Router,
		RouterConfig,
	};
	use js_sys::{Array, Function, JSON, Map, Reflect};
	use std::rc::Rc;
	use wasm_bindgen::{JsCast, JsValue};
	use wasm_bindgen_futures::JsFuture;
	use wasm_bindgen_test::*;
	use web_sys::Element;

	wasm_bindgen_test_configure!(run_in_browser);

	/// Serves a single fragment document for every address.
	struct OneDocument(&'static str);

	#[async_trait(?Send)]
	impl FragmentFetcher for OneDocument {
		async fn fetch_text(&self, _address: &str) -> Result<String, FetchError> {
			Ok(self.0.to_string())
		}
	}

	fn host() -> BrowserDocument {
		BrowserDocument::current().unwrap()
	}

	/// Appends an element to `<body>` and returns it.
	fn mount(html_id: &str, tag: &str) -> Element {
		let document = host().document().clone();
		if let Some(existing) = document.get_element_by_id(html_id) {
			existing.remove();
		}
		let element = document.create_element(tag).unwrap();
		element.set_id(html_id);
		document.body().unwrap().append_child(&element).unwrap();
		element
	}

	fn set_hash(hash: &str) {
		web_sys::window().unwrap().location().set_hash(hash).unwrap();
	}

	/// Resolves after the pending spawned tasks had a chance to run.
	async fn next_tick() {
		let promise = js_sys::Promise::new(&mut |resolve, _reject| {
			web_sys::window()
				.unwrap()
				.set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, 0)
				.unwrap();
		});
		JsFuture::from(promise).await.unwrap();
	}

	fn entry(url: &str, parent: &str) -> JsValue {
		JSON::parse(&format!(r#"{{"url":"{}","parent":"{}"}}"#, url, parent)).unwrap()
	}

	/// Calls `target[method](...args)` the way page scripts do.
	fn call(target: &JsValue, method: &str, args: &Array) -> JsValue {
		let function: Function = Reflect::get(target, &JsValue::from_str(method))
			.unwrap()
			.dyn_into()
			.unwrap();
		function.apply(target, args).unwrap()
	}

	fn get(target: &JsValue, key: &str) -> JsValue {
		Reflect::get(target, &JsValue::from_str(key)).unwrap()
	}

	#[wasm_bindgen_test]
	fn test_declared_container_reads_first_element() {
		let document = host();

		assert_eq!(
			document.declared_container(r#"<div b-target="main">Hi</div><p>x</p>"#, "b-target"),
			Some("main".to_string())
		);
		assert_eq!(
			document.declared_container("  <section b-target=\"side\"></section>", "b-target"),
			Some("side".to_string())
		);
		assert_eq!(document.declared_container("<div>none</div>", "b-target"), None);
		assert_eq!(document.declared_container("plain text", "b-target"), None);
	}

	#[wasm_bindgen_test]
	fn test_replace_container() {
		let container = mount("biu-test-main", "div");
		let document = host();

		assert!(document.replace_container("biu-test-main", "<b>swapped</b>"));
		assert_eq!(container.inner_html(), "<b>swapped</b>");
		assert!(!document.replace_container("biu-test-missing", "<b>x</b>"));
	}

	#[wasm_bindgen_test]
	fn test_add_class_to_first() {
		let link = mount("biu-test-link", "a");
		link.set_class_name("nav-item");
		link.set_attribute("href", "#biu-about").unwrap();
		let document = host();

		assert!(document.add_class_to_first(r##"a.nav-item[href="#biu-about"]"##, "active"));
		assert!(link.class_list().contains("active"));
		assert!(!document.add_class_to_first(r##"a.nav-item[href="#biu-none"]"##, "active"));
		assert!(!document.add_class_to_first("a[[", "active"));
	}

	#[wasm_bindgen_test]
	async fn test_navigation_splices_into_live_page() {
		let container = mount("biu-test-page", "div");
		let router = Router::new(
			RouterConfig::html_documents(),
			OneDocument(r#"<div b-target="biu-test-page">Loaded</div>"#),
			host(),
		);
		router.init([RouteEntry::new("home", "p1")]);

		let outcome = router.url_change("#home?tab=1").await.unwrap();

		assert!(outcome.is_spliced());
		assert_eq!(
			container.inner_html(),
			r#"<div b-target="biu-test-page">Loaded</div>"#
		);
	}

	#[wasm_bindgen_test]
	async fn test_fetch_failure_leaves_page_unchanged() {
		let container = mount("biu-test-unchanged", "div");
		container.set_inner_html("before");
		let router = Router::new(RouterConfig::html_documents(), HttpFetcher::new(), host());
		router.init([RouteEntry::new("biu-does-not-exist", "p1")]);

		let result = router.url_change("").await;

		assert!(matches!(result, Err(NavigationError::Fetch(_))));
		assert_eq!(container.inner_html(), "before");
	}

	#[wasm_bindgen_test]
	fn test_init_takes_entries_as_separate_arguments() {
		let router = JsValue::from(BiuRouter::new(JsValue::UNDEFINED).unwrap());

		call(
			&router,
			"init",
			&Array::of2(&entry("biu-home", "p1"), &entry("biu-about", "p1")),
		);
		let routes: Array = call(&router, "routes", &Array::new()).dyn_into().unwrap();

		assert_eq!(routes.length(), 2);
		assert_eq!(get(&routes.get(0), "url").as_string().as_deref(), Some("biu-home"));
		assert_eq!(get(&routes.get(1), "url").as_string().as_deref(), Some("biu-about"));
		assert_eq!(get(&routes.get(1), "parent").as_string().as_deref(), Some("p1"));
	}

	#[wasm_bindgen_test]
	fn test_init_flattens_an_array_argument() {
		let router = JsValue::from(BiuRouter::new(JsValue::UNDEFINED).unwrap());

		call(
			&router,
			"init",
			&Array::of1(&Array::of2(&entry("biu-faq", "p2"), &entry("biu-news", "p2")).into()),
		);
		call(&router, "init", &Array::of1(&entry("biu-contact", "p3")));
		let routes: Array = call(&router, "routes", &Array::new()).dyn_into().unwrap();

		assert_eq!(routes.length(), 3);
		assert_eq!(get(&routes.get(2), "url").as_string().as_deref(), Some("biu-contact"));
	}

	#[wasm_bindgen_test]
	fn test_get_full_request_returns_plain_objects() {
		set_hash("biu-about?tab=2&all");
		let router = BiuRouter::new(JsValue::UNDEFINED).unwrap();
		assert!(router.get_full_request().unwrap().is_undefined());

		router
			.init_routes(Array::of1(&entry("biu-home", "p1")).into())
			.unwrap();
		let request = router.get_full_request().unwrap();
		let params = get(&request, "params");

		assert_eq!(get(&request, "path").as_string().as_deref(), Some("biu-about"));
		assert!(params.is_object());
		assert!(!params.is_instance_of::<Map>());
		assert_eq!(get(&params, "tab").as_string().as_deref(), Some("2"));
		assert!(get(&params, "all").is_undefined());
	}

	#[wasm_bindgen_test]
	fn test_repeated_init_keeps_the_running_router() {
		let router = BiuRouter::new(JsValue::UNDEFINED).unwrap();
		assert!(router.router().is_none());

		router.init_routes(entry("biu-one", "p1")).unwrap();
		let running = router.router().unwrap();
		router.init_routes(entry("biu-two", "p1")).unwrap();

		// Listeners are installed by the first launch only
		assert!(Rc::ptr_eq(&running, &router.router().unwrap()));
		assert_eq!(running.route_count(), 2);
		assert_eq!(running.fallback_route().as_deref(), Some("biu-one"));
	}

	#[wasm_bindgen_test]
	fn test_invalid_config_is_rejected() {
		let result = BiuRouter::new(JsValue::from_str(r#"{ "nav_item_class": "" }"#));
		assert!(result.is_err());
	}

	#[wasm_bindgen_test]
	async fn test_url_change_before_init_resolves_false() {
		let router = BiuRouter::new(JsValue::UNDEFINED).unwrap();

		let changed = JsFuture::from(router.url_change()).await.unwrap();

		assert_eq!(changed.as_bool(), Some(false));
	}

	#[wasm_bindgen_test]
	async fn test_launch_runs_the_load_navigation() {
		let link = mount("biu-test-late-link", "a");
		link.set_class_name("nav-item");
		link.set_attribute("href", "#biu-late").unwrap();
		set_hash("biu-late");

		let router = launch(
			RouterConfig::html_documents(),
			[RouteEntry::new("biu-late", "p1")],
		)
		.unwrap();
		// Runs at once when the page already loaded, otherwise on `load`
		for _ in 0..50 {
			if link.class_list().contains("active") {
				break;
			}
			next_tick().await;
		}

		assert!(link.class_list().contains("active"));
		assert!(router.latest_sequence() >= 1);
	}
}
