//! Router start-up, from Rust ([`launch`]) and from JavaScript ([`BiuRouter`]).

use crate::document::BrowserDocument;
use crate::error::{DomError, DomResult};
use crate::events::{self, Trigger};
use crate::fetch::HttpFetcher;
use biu_router::{RouteEntry, Router, RouterConfig, info_log};
use js_sys::{Array, Function, Object, Reflect};
use serde::Serialize;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::future_to_promise;

/// The router as it runs in a page.
pub type WebRouter = Router<HttpFetcher, BrowserDocument>;

/// Builds a router for the current page, registers `entries` and subscribes
/// it to `load` and `hashchange`.
///
/// # Errors
///
/// Fails when `config` is invalid or there is no `window`/`document`.
pub fn launch<I>(config: RouterConfig, entries: I) -> DomResult<Rc<WebRouter>>
where
	I: IntoIterator<Item = RouteEntry>,
{
	#[cfg(feature = "console_error_panic_hook")]
	console_error_panic_hook::set_once();

	config.validate()?;
	let router = Rc::new(Router::new(
		config,
		HttpFetcher::new(),
		BrowserDocument::current()?,
	));
	router.init(entries);
	events::install(&router)?;
	info_log!("router started with {} routes", router.route_count());
	Ok(router)
}

/// JavaScript handle to a page router.
///
/// ```js
/// const router = new BiuRouter();                 // defaults
/// const router = new BiuRouter('{"decode_params":true}');
/// const router = new BiuRouter({ fetch_mode: { suffixed: ".html" } });
/// router.init({ url: "home", parent: "p1" }, { url: "about", parent: "p1" });
/// router.init([{ url: "faq", parent: "p1" }]);    // arrays are flattened
/// router.getFullRequest();                        // { path: "home", params: { tab: "2" } }
/// ```
#[wasm_bindgen]
pub struct BiuRouter {
	config: RouterConfig,
	router: RefCell<Option<Rc<WebRouter>>>,
}

thread_local! {
	static VARIADIC_INIT: Cell<bool> = const { Cell::new(false) };
}

#[wasm_bindgen]
impl BiuRouter {
	/// Creates a handle. `config` may be omitted, a JSON string or an object.
	#[wasm_bindgen(constructor)]
	pub fn new(config: JsValue) -> Result<BiuRouter, JsValue> {
		let config = read_config(config)?;
		install_variadic_init()?;
		Ok(Self::detached(config))
	}

	/// Registers routes from an array of `{ url, parent }` entries (or a
	/// single entry). `init(...entries)` forwards here.
	///
	/// The first call also starts listening for `load` and `hashchange`;
	/// later calls only merge routes.
	#[wasm_bindgen(js_name = initRoutes)]
	pub fn init_routes(&self, entries: JsValue) -> Result<(), JsValue> {
		let entries = read_entries(entries)?;
		self.register(entries)?;
		Ok(())
	}

	/// Resolves the current `location.hash` to `{ path, params }`, or
	/// `undefined` before any route is registered.
	#[wasm_bindgen(js_name = getFullRequest)]
	pub fn get_full_request(&self) -> Result<JsValue, JsValue> {
		let target = self
			.router
			.borrow()
			.as_ref()
			.and_then(|router| router.resolve(&events::current_fragment()));
		match target {
			Some(target) => Ok(to_js(&target)?),
			None => Ok(JsValue::UNDEFINED),
		}
	}

	/// Navigates to the current `location.hash`. Resolves to whether the
	/// page changed.
	#[wasm_bindgen(js_name = urlChange)]
	pub fn url_change(&self) -> js_sys::Promise {
		let router = self.router.borrow().clone();
		future_to_promise(async move {
			let Some(router) = router else {
				return Ok(JsValue::FALSE);
			};
			let fragment = events::current_fragment();
			let spliced = events::navigate(&router, &fragment, Trigger::HashChange).await;
			Ok(JsValue::from_bool(spliced))
		})
	}

	/// Returns the registered routes as `[{ url, parent }, ...]`.
	pub fn routes(&self) -> Result<JsValue, JsValue> {
		let routes = self
			.router
			.borrow()
			.as_ref()
			.map(|router| router.routes())
			.unwrap_or_default();
		Ok(to_js(&routes)?)
	}
}

impl BiuRouter {
	fn detached(config: RouterConfig) -> Self {
		Self {
			config,
			router: RefCell::new(None),
		}
	}

	/// Registers `entries`, starting the page router on the first call.
	pub fn register<I>(&self, entries: I) -> DomResult<()>
	where
		I: IntoIterator<Item = RouteEntry>,
	{
		let mut slot = self.router.borrow_mut();
		match slot.as_ref() {
			Some(router) => router.init(entries),
			None => *slot = Some(launch(self.config.clone(), entries)?),
		}
		Ok(())
	}

	/// Returns the running router, once routes have been registered.
	pub fn router(&self) -> Option<Rc<WebRouter>> {
		self.router.borrow().clone()
	}
}

/// Defines `BiuRouter.prototype.init(...entries)` on top of `initRoutes`.
///
/// Exported methods only receive their declared parameters, so the
/// variadic form is a small JS function on the class prototype. The
/// prototype is reached through a throwaway instance, freed right away.
fn install_variadic_init() -> DomResult<()> {
	if VARIADIC_INIT.with(Cell::get) {
		return Ok(());
	}

	let instance = JsValue::from(BiuRouter::detached(RouterConfig::default()));
	let prototype = Object::get_prototype_of(&instance);
	let init = Function::new_with_args("...entries", "return this.initRoutes(entries.flat());");
	Reflect::set(&prototype, &JsValue::from_str("init"), &init)
		.map_err(|e| DomError::js("BiuRouter.prototype.init", e))?;

	let free = Reflect::get(&instance, &JsValue::from_str("free"))
		.ok()
		.and_then(|free| free.dyn_into::<Function>().ok());
	if let Some(free) = free {
		free.call0(&instance)
			.map_err(|e| DomError::js("BiuRouter.free", e))?;
	}

	VARIADIC_INIT.with(|installed| installed.set(true));
	Ok(())
}

/// Converts to a JS value with maps as plain objects (`params.tab`, not
/// `params.get("tab")`) and `None` as `undefined`.
fn to_js<T: Serialize + ?Sized>(value: &T) -> DomResult<JsValue> {
	let serializer = serde_wasm_bindgen::Serializer::new().serialize_maps_as_objects(true);
	Ok(value.serialize(&serializer)?)
}

fn read_config(value: JsValue) -> DomResult<RouterConfig> {
	if value.is_undefined() || value.is_null() {
		return Ok(RouterConfig::default());
	}
	if let Some(json) = value.as_string() {
		return Ok(RouterConfig::from_json(&json)?);
	}
	let config: RouterConfig = serde_wasm_bindgen::from_value(value)?;
	config.validate()?;
	Ok(config)
}

fn read_entries(value: JsValue) -> DomResult<Vec<RouteEntry>> {
	if Array::is_array(&value) {
		Ok(serde_wasm_bindgen::from_value(value)?)
	} else {
		Ok(vec![serde_wasm_bindgen::from_value(value)?])
	}
}
