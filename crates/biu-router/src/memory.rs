//! In-memory [`DocumentHost`] for native hosts and tests.
//!
//! The page is reduced to what the router touches: containers (elements with
//! an `id`) and navigation links (`<a href>` elements with their classes).
//! Fragment markup is parsed with `scraper`, and selectors passed to
//! [`DocumentHost::add_class_to_first`] are real CSS selectors matched against
//! the links in document order.

use crate::host::DocumentHost;
use scraper::{ElementRef, Html, Selector};
use std::cell::RefCell;
use std::collections::BTreeMap;

/// A navigation link of a [`MemoryDocument`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemoryLink {
	/// Link target.
	pub href: String,
	/// Class list.
	pub classes: Vec<String>,
}

impl MemoryLink {
	/// Creates a link.
	pub fn new<I, S>(href: impl Into<String>, classes: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		Self {
			href: href.into(),
			classes: classes.into_iter().map(Into::into).collect(),
		}
	}

	/// Returns whether the link carries `class`.
	pub fn has_class(&self, class: &str) -> bool {
		self.classes.iter().any(|c| c == class)
	}

	fn to_markup(&self) -> String {
		format!(
			r#"<a href="{}" class="{}"></a>"#,
			escape_attribute(&self.href),
			escape_attribute(&self.classes.join(" "))
		)
	}
}

/// A page held in memory.
#[derive(Debug, Default)]
pub struct MemoryDocument {
	containers: RefCell<BTreeMap<String, String>>,
	links: RefCell<Vec<MemoryLink>>,
}

impl MemoryDocument {
	/// Creates an empty page.
	pub fn new() -> Self {
		Self::default()
	}

	/// Builds a page from HTML, collecting every element with an `id` as a
	/// container and every `<a href>` as a link.
	///
	/// Nested containers are recorded independently; replacing an outer one
	/// does not update the inner entries.
	pub fn from_html(html: &str) -> Self {
		let page = Html::parse_document(html);
		let document = Self::new();

		for element in page.root_element().descendants().filter_map(ElementRef::wrap) {
			let value = element.value();
			if let Some(id) = value.id() {
				document
					.containers
					.borrow_mut()
					.insert(id.to_string(), element.inner_html());
			}
			if value.name() == "a"
				&& let Some(href) = value.attr("href")
			{
				document
					.links
					.borrow_mut()
					.push(MemoryLink::new(href, value.classes()));
			}
		}
		document
	}

	/// Adds an empty container.
	pub fn with_container(self, id: impl Into<String>) -> Self {
		self.containers
			.borrow_mut()
			.insert(id.into(), String::new());
		self
	}

	/// Adds a navigation link.
	pub fn with_link(self, link: MemoryLink) -> Self {
		self.links.borrow_mut().push(link);
		self
	}

	/// Returns the inner content of a container.
	pub fn content(&self, id: &str) -> Option<String> {
		self.containers.borrow().get(id).cloned()
	}

	/// Returns the container ids in sorted order.
	pub fn container_ids(&self) -> Vec<String> {
		self.containers.borrow().keys().cloned().collect()
	}

	/// Returns a snapshot of the links.
	pub fn links(&self) -> Vec<MemoryLink> {
		self.links.borrow().clone()
	}

	/// Returns the hrefs of links carrying `class`.
	pub fn links_with_class(&self, class: &str) -> Vec<String> {
		self.links
			.borrow()
			.iter()
			.filter(|link| link.has_class(class))
			.map(|link| link.href.clone())
			.collect()
	}
}

impl DocumentHost for MemoryDocument {
	fn declared_container(&self, fragment: &str, attribute: &str) -> Option<String> {
		let parsed = Html::parse_fragment(fragment);
		let root = parsed
			.root_element()
			.children()
			.find_map(ElementRef::wrap)?;
		root.value().attr(attribute).map(str::to_string)
	}

	fn replace_container(&self, id: &str, content: &str) -> bool {
		match self.containers.borrow_mut().get_mut(id) {
			Some(existing) => {
				*existing = content.to_string();
				true
			}
			None => false,
		}
	}

	fn add_class_to_first(&self, selector: &str, class: &str) -> bool {
		let Ok(selector) = Selector::parse(selector) else {
			return false;
		};
		let mut links = self.links.borrow_mut();
		let matching = links.iter_mut().find(|link| {
			Html::parse_fragment(&link.to_markup())
				.select(&selector)
				.next()
				.is_some()
		});
		match matching {
			Some(link) => {
				if !link.has_class(class) {
					link.classes.push(class.to_string());
				}
				true
			}
			None => false,
		}
	}
}

fn escape_attribute(value: &str) -> String {
	value.replace('&', "&amp;").replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	const PAGE: &str = r##"
		<html><body>
			<nav>
				<a class="nav-item" href="#home">Home</a>
				<a class="nav-item external" href="#about">About</a>
				<a href="#about">Plain</a>
			</nav>
			<div id="main"><p>Loading</p></div>
			<aside id="sidebar"></aside>
		</body></html>
	"##;

	#[rstest]
	fn test_from_html_collects_containers_and_links() {
		let document = MemoryDocument::from_html(PAGE);

		assert_eq!(document.container_ids(), vec!["main", "sidebar"]);
		assert_eq!(document.content("main").as_deref(), Some("<p>Loading</p>"));
		assert_eq!(document.links().len(), 3);
		assert!(document.links()[1].has_class("external"));
	}

	#[rstest]
	#[case(r#"<div b-target="main">Hi</div>"#, Some("main"))]
	#[case("\n  <section b-target=\"sidebar\"><p>x</p></section>", Some("sidebar"))]
	#[case("<div>No target</div>", None)]
	#[case("just text", None)]
	#[case(r#"<div><p b-target="main">nested</p></div>"#, None)]
	fn test_declared_container(#[case] fragment: &str, #[case] expected: Option<&str>) {
		let document = MemoryDocument::new();
		assert_eq!(
			document.declared_container(fragment, "b-target").as_deref(),
			expected
		);
	}

	#[rstest]
	fn test_replace_container() {
		let document = MemoryDocument::from_html(PAGE);

		assert!(document.replace_container("main", "<b>new</b>"));
		assert!(!document.replace_container("missing", "<b>new</b>"));
		assert_eq!(document.content("main").as_deref(), Some("<b>new</b>"));
		assert_eq!(document.content("sidebar").as_deref(), Some(""));
	}

	#[rstest]
	fn test_add_class_to_first_matching_link() {
		let document = MemoryDocument::from_html(PAGE);

		assert!(document.add_class_to_first(r##"a.nav-item[href="#about"]"##, "active"));
		assert_eq!(document.links_with_class("active"), vec!["#about"]);
		assert!(!document.links()[2].has_class("active"));
	}

	#[rstest]
	#[case(r##"a.nav-item[href="#contact"]"##)]
	#[case("a[[[")]
	fn test_add_class_without_match(#[case] selector: &str) {
		let document = MemoryDocument::from_html(PAGE);

		assert!(!document.add_class_to_first(selector, "active"));
		assert!(document.links_with_class("active").is_empty());
	}
}
