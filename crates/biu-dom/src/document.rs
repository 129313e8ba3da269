//! DOM-backed document host.

use crate::error::{DomError, DomResult};
use biu_router::{DocumentHost, warn_log};
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlTemplateElement};

/// [`DocumentHost`] over the live page.
#[derive(Debug, Clone)]
pub struct BrowserDocument {
	document: Document,
}

impl BrowserDocument {
	/// Wraps a document.
	pub fn new(document: Document) -> Self {
		Self { document }
	}

	/// Wraps the current page's document.
	pub fn current() -> DomResult<Self> {
		let window = web_sys::window().ok_or(DomError::NoWindow)?;
		let document = window.document().ok_or(DomError::NoDocument)?;
		Ok(Self::new(document))
	}

	/// Returns the wrapped document.
	pub fn document(&self) -> &Document {
		&self.document
	}
}

impl DocumentHost for BrowserDocument {
	fn declared_container(&self, fragment: &str, attribute: &str) -> Option<String> {
		// Parsed inside a <template> so nothing in the fragment loads or runs.
		let template = self
			.document
			.create_element("template")
			.ok()?
			.dyn_into::<HtmlTemplateElement>()
			.ok()?;
		template.set_inner_html(fragment);
		template
			.content()
			.first_element_child()?
			.get_attribute(attribute)
	}

	fn replace_container(&self, id: &str, content: &str) -> bool {
		match self.document.get_element_by_id(id) {
			Some(element) => {
				// Fragment documents come from the page's own origin.
				element.set_inner_html(content);
				true
			}
			None => false,
		}
	}

	fn add_class_to_first(&self, selector: &str, class: &str) -> bool {
		match self.document.query_selector(selector) {
			Ok(Some(element)) => element.class_list().add_1(class).is_ok(),
			Ok(None) => false,
			Err(err) => {
				warn_log!("invalid link selector {}: {:?}", selector, err);
				false
			}
		}
	}
}
