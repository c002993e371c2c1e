//! Markup - Rendered table tree
//!
//! A small, framework-neutral element tree. The table renderer produces it,
//! the GPUI view walks it and `render_to_string` serializes it to HTML.

use std::borrow::Cow;

use super::column::CellValue;

/// A unified representation of renderable content.
#[derive(Debug, Clone, PartialEq)]
pub enum View {
    /// An element node.
    Element(ElementView),
    /// A text node.
    Text(Cow<'static, str>),
    /// Several views without a wrapper element.
    Fragment(Vec<View>),
    /// Renders nothing.
    Empty,
}

/// An element in the view tree.
#[derive(Debug, Clone, PartialEq)]
pub struct ElementView {
    tag: Cow<'static, str>,
    /// Reconciliation identity among siblings, never emitted as an attribute.
    key: Option<Cow<'static, str>>,
    attrs: Vec<(Cow<'static, str>, Cow<'static, str>)>,
    children: Vec<View>,
}

impl ElementView {
    /// Creates a new element view.
    pub fn new(tag: impl Into<Cow<'static, str>>) -> Self {
        Self {
            tag: tag.into(),
            key: None,
            attrs: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Sets the sibling key.
    pub fn key(mut self, key: impl Into<Cow<'static, str>>) -> Self {
        self.key = Some(key.into());
        self
    }

    /// Sets an attribute, replacing an earlier value of the same name in place.
    pub fn attr(
        mut self,
        name: impl Into<Cow<'static, str>>,
        value: impl Into<Cow<'static, str>>,
    ) -> Self {
        self.set_attr(name, value);
        self
    }

    /// Sets an attribute only when a value is present; `None` removes it.
    pub fn attr_opt(
        mut self,
        name: impl Into<Cow<'static, str>>,
        value: Option<impl Into<Cow<'static, str>>>,
    ) -> Self {
        let name = name.into();
        match value {
            Some(value) => self.set_attr(name, value),
            None => self.remove_attr(&name),
        }
        self
    }

    /// In-place variant of [`ElementView::attr`].
    pub fn set_attr(
        &mut self,
        name: impl Into<Cow<'static, str>>,
        value: impl Into<Cow<'static, str>>,
    ) {
        let name = name.into();
        let value = value.into();
        match self.attrs.iter_mut().find(|(n, _)| *n == name) {
            Some(slot) => slot.1 = value,
            None => self.attrs.push((name, value)),
        }
    }

    /// Removes an attribute if present.
    pub fn remove_attr(&mut self, name: &str) {
        self.attrs.retain(|(n, _)| n != name);
    }

    /// Adds a child view.
    pub fn child(mut self, child: impl IntoView) -> Self {
        self.children.push(child.into_view());
        self
    }

    /// Adds multiple child views.
    pub fn children(mut self, children: impl IntoIterator<Item = impl IntoView>) -> Self {
        self.children
            .extend(children.into_iter().map(IntoView::into_view));
        self
    }

    /// Returns the tag name.
    pub fn tag_name(&self) -> &str {
        &self.tag
    }

    /// Returns the sibling key.
    pub fn key_value(&self) -> Option<&str> {
        self.key.as_deref()
    }

    /// Returns the attributes in insertion order.
    pub fn attrs(&self) -> &[(Cow<'static, str>, Cow<'static, str>)] {
        &self.attrs
    }

    /// Looks up an attribute value.
    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_ref())
    }

    /// Returns the child views.
    pub fn child_views(&self) -> &[View] {
        &self.children
    }

    /// Concatenated text of all descendants.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        for child in &self.children {
            child.collect_text(&mut out);
        }
        out
    }

    /// Direct element children, flattening fragments.
    pub fn child_elements(&self) -> Vec<&ElementView> {
        let mut out = Vec::new();
        for child in &self.children {
            child.collect_elements(&mut out);
        }
        out
    }

    /// All descendant elements with the given tag, in document order.
    pub fn find_all(&self, tag: &str) -> Vec<&ElementView> {
        let mut out = Vec::new();
        for child in &self.children {
            child.find_all_into(tag, &mut out);
        }
        out
    }
}

impl View {
    /// Creates an element view.
    pub fn element(tag: impl Into<Cow<'static, str>>) -> ElementView {
        ElementView::new(tag)
    }

    /// Creates a text view.
    pub fn text(content: impl Into<Cow<'static, str>>) -> Self {
        Self::Text(content.into())
    }

    /// Creates a fragment view.
    pub fn fragment(children: impl IntoIterator<Item = impl IntoView>) -> Self {
        Self::Fragment(children.into_iter().map(IntoView::into_view).collect())
    }

    /// Creates an empty view.
    pub fn empty() -> Self {
        Self::Empty
    }

    /// Returns the element if this view is one.
    pub fn as_element(&self) -> Option<&ElementView> {
        match self {
            View::Element(el) => Some(el),
            _ => None,
        }
    }

    /// Concatenated text of this view and its descendants.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    /// All elements with the given tag, including this view itself.
    pub fn find_all(&self, tag: &str) -> Vec<&ElementView> {
        let mut out = Vec::new();
        self.find_all_into(tag, &mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        match self {
            View::Element(el) => {
                for child in &el.children {
                    child.collect_text(out);
                }
            }
            View::Text(text) => out.push_str(text),
            View::Fragment(children) => {
                for child in children {
                    child.collect_text(out);
                }
            }
            View::Empty => {}
        }
    }

    fn collect_elements<'a>(&'a self, out: &mut Vec<&'a ElementView>) {
        match self {
            View::Element(el) => out.push(el),
            View::Fragment(children) => {
                for child in children {
                    child.collect_elements(out);
                }
            }
            View::Text(_) | View::Empty => {}
        }
    }

    fn find_all_into<'a>(&'a self, tag: &str, out: &mut Vec<&'a ElementView>) {
        match self {
            View::Element(el) => {
                if el.tag_name() == tag {
                    out.push(el);
                }
                for child in &el.children {
                    child.find_all_into(tag, out);
                }
            }
            View::Fragment(children) => {
                for child in children {
                    child.find_all_into(tag, out);
                }
            }
            View::Text(_) | View::Empty => {}
        }
    }

    /// Renders the view to an HTML string.
    pub fn render_to_string(&self) -> String {
        let mut output = String::new();
        self.render_to_string_inner(&mut output);
        output
    }

    fn render_to_string_inner(&self, output: &mut String) {
        match self {
            View::Element(el) => {
                output.push('<');
                output.push_str(el.tag_name());

                for (name, value) in el.attrs() {
                    output.push(' ');
                    output.push_str(name);
                    output.push_str("=\"");
                    output.push_str(&html_escape(value));
                    output.push('"');
                }

                output.push('>');
                for child in el.child_views() {
                    child.render_to_string_inner(output);
                }
                output.push_str("</");
                output.push_str(el.tag_name());
                output.push('>');
            }
            View::Text(text) => output.push_str(&html_escape(text)),
            View::Fragment(children) => {
                for child in children {
                    child.render_to_string_inner(output);
                }
            }
            View::Empty => {}
        }
    }
}

/// Escapes text for use in HTML content and attribute values.
pub fn html_escape(s: &str) -> Cow<'_, str> {
    if !s.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(s);
    }
    let mut escaped = String::with_capacity(s.len() + 8);
    for c in s.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#x27;"),
            _ => escaped.push(c),
        }
    }
    Cow::Owned(escaped)
}

/// Trait for types that can be converted into a View.
pub trait IntoView {
    /// Converts self into a View.
    fn into_view(self) -> View;
}

impl IntoView for View {
    fn into_view(self) -> View {
        self
    }
}

impl IntoView for ElementView {
    fn into_view(self) -> View {
        View::Element(self)
    }
}

impl IntoView for String {
    fn into_view(self) -> View {
        View::Text(Cow::Owned(self))
    }
}

impl IntoView for &'static str {
    fn into_view(self) -> View {
        View::Text(Cow::Borrowed(self))
    }
}

impl IntoView for CellValue {
    fn into_view(self) -> View {
        View::Text(Cow::Owned(self.to_string()))
    }
}

impl<T: IntoView> IntoView for Option<T> {
    fn into_view(self) -> View {
        match self {
            Some(v) => v.into_view(),
            None => View::Empty,
        }
    }
}

impl<T: IntoView> IntoView for Vec<T> {
    fn into_view(self) -> View {
        View::fragment(self)
    }
}
