//! Element nodes shared between the control and its host.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;

/// Shared handle to an element.
///
/// The control and the host hold clones of the same handle, so writes made
/// during a scrub are visible to the renderer on the next frame.
pub type NodeRef = Rc<RefCell<Element>>;

/// A single node in the control's element tree.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Element {
    /// Tag name (`div`, `span`, ...)
    pub tag: String,
    /// Class list in insertion order
    pub classes: Vec<String>,
    /// Attributes (`role`, `aria-*`, `data-*`)
    pub attrs: BTreeMap<String, String>,
    /// Inline style properties (`width`, `max-width`, ...)
    pub style: BTreeMap<String, String>,
    /// Text content
    pub text: String,
    /// Child nodes in document order
    pub children: Vec<NodeRef>,
}

impl Element {
    /// Create a detached element wrapped in a shared handle.
    pub fn create(tag: &str, class: &str) -> NodeRef {
        let mut el = Element {
            tag: tag.to_string(),
            ..Default::default()
        };
        for c in class.split_whitespace() {
            el.add_class(c);
        }
        Rc::new(RefCell::new(el))
    }

    /// Add a class if not already present.
    pub fn add_class(&mut self, class: &str) {
        if !self.has_class(class) {
            self.classes.push(class.to_string());
        }
    }

    pub fn remove_class(&mut self, class: &str) {
        self.classes.retain(|c| c != class);
    }

    /// Whether the class list contains `class`.
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    /// Set (overwrite) an attribute.
    pub fn set_attr(&mut self, name: &str, value: impl Into<String>) {
        self.attrs.insert(name.to_string(), value.into());
    }

    /// Read an attribute.
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs.get(name).map(String::as_str)
    }

    /// Set (overwrite) an inline style property.
    pub fn set_style(&mut self, prop: &str, value: impl Into<String>) {
        self.style.insert(prop.to_string(), value.into());
    }

    /// Read an inline style property.
    pub fn style(&self, prop: &str) -> Option<&str> {
        self.style.get(prop).map(String::as_str)
    }

    /// Replace text content.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    /// Append a child node.
    pub fn append(&mut self, child: NodeRef) {
        self.children.push(child);
    }
}

/// Depth-first search for the first descendant (or self) carrying `class`.
pub fn find_by_class(root: &NodeRef, class: &str) -> Option<NodeRef> {
    if root.borrow().has_class(class) {
        return Some(Rc::clone(root));
    }
    let children = root.borrow().children.clone();
    children.iter().find_map(|child| find_by_class(child, class))
}

impl Element {
    /// Convenience wrapper around [`find_by_class`].
    pub fn query(root: &NodeRef, class: &str) -> Option<NodeRef> {
        find_by_class(root, class)
    }

    /// Render the subtree as indented markup, one element per line.
    ///
    /// Used for debugging and snapshot tests.
    pub fn outline(root: &NodeRef) -> String {
        let mut out = String::new();
        write_outline(root, 0, &mut out);
        out
    }
}

fn write_outline(node: &NodeRef, depth: usize, out: &mut String) {
    let el = node.borrow();
    out.push_str(&"  ".repeat(depth));
    out.push('<');
    out.push_str(&el.tag);
    if !el.classes.is_empty() {
        out.push_str(&format!(" class=\"{}\"", el.classes.join(" ")));
    }
    for (k, v) in &el.attrs {
        out.push_str(&format!(" {}=\"{}\"", k, v));
    }
    if !el.style.is_empty() {
        let style = el
            .style
            .iter()
            .map(|(k, v)| format!("{}: {}", k, v))
            .collect::<Vec<_>>()
            .join("; ");
        out.push_str(&format!(" style=\"{}\"", style));
    }
    out.push('>');
    if !el.text.is_empty() {
        out.push_str(&el.text);
    }
    out.push('\n');
    for child in &el.children {
        write_outline(child, depth + 1, out);
    }
}
