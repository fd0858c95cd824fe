//! Headless chapter bar container and its HTML rendering.

use std::fmt::Write as _;

use crate::host::{BarElement, SegmentId, SegmentSpec};

/// A rendered segment node.
#[derive(Debug, Clone, PartialEq)]
pub struct SegmentNode {
    pub classes: Vec<String>,
    pub width: String,
    pub attributes: Vec<(String, String)>,
    pub label: String,
}

impl SegmentNode {
    fn from_spec(spec: SegmentSpec) -> Self {
        Self {
            classes: spec.class.split_whitespace().map(str::to_string).collect(),
            width: spec.width,
            attributes: spec.attributes,
            label: spec.label,
        }
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }
}

/// In-memory bar container.
///
/// Segment ids are indices into the current node list and are invalidated
/// by [`BarElement::clear_segments`].
#[derive(Debug, Clone, Default)]
pub struct HeadlessBar {
    id: String,
    nodes: Vec<SegmentNode>,
    background: Option<String>,
}

impl HeadlessBar {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// Rendered segments, in order.
    pub fn segments(&self) -> &[SegmentNode] {
        &self.nodes
    }

    /// Current `background` style, if any was set.
    pub fn background(&self) -> Option<&str> {
        self.background.as_deref()
    }

    /// Render the container and its segments as HTML.
    pub fn render_html(&self) -> String {
        let mut out = String::new();

        let _ = write!(out, "<div id=\"{}\"", escape_html(&self.id));
        if let Some(bg) = &self.background {
            let _ = write!(out, " style=\"background: {}\"", escape_html(bg));
        }
        out.push_str(">\n");

        for node in &self.nodes {
            out.push_str("  <div");
            if !node.classes.is_empty() {
                let _ = write!(out, " class=\"{}\"", escape_html(&node.classes.join(" ")));
            }
            let _ = write!(out, " style=\"width: {}\"", escape_html(&node.width));
            for (name, value) in &node.attributes {
                let _ = write!(out, " {}=\"{}\"", name, escape_html(value));
            }
            let _ = writeln!(out, ">{}</div>", escape_html(&node.label));
        }

        out.push_str("</div>\n");
        out
    }
}

impl BarElement for HeadlessBar {
    fn segment_count(&self) -> usize {
        self.nodes.len()
    }

    fn append_segment(&mut self, spec: SegmentSpec) -> SegmentId {
        self.nodes.push(SegmentNode::from_spec(spec));
        SegmentId(self.nodes.len() - 1)
    }

    fn segment_attribute(&self, id: SegmentId, name: &str) -> Option<String> {
        self.nodes.get(id.0)?.attribute(name).map(str::to_string)
    }

    fn toggle_segment_class(&mut self, id: SegmentId, class: &str, on: bool) {
        let Some(node) = self.nodes.get_mut(id.0) else {
            return;
        };
        let present = node.has_class(class);
        if on && !present {
            node.classes.push(class.to_string());
        } else if !on && present {
            node.classes.retain(|c| c != class);
        }
    }

    fn clear_segments(&mut self) {
        self.nodes.clear();
    }

    fn set_background(&mut self, css: &str) {
        self.background = Some(css.to_string());
    }
}

/// Escape text for HTML content and double-quoted attribute values.
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spec(label: &str) -> SegmentSpec {
        SegmentSpec {
            class: "chapter-segment".to_string(),
            width: "50%".to_string(),
            attributes: vec![("data-start".to_string(), "30".to_string())],
            label: label.to_string(),
        }
    }

    #[test]
    fn append_and_read_attributes() {
        let mut bar = HeadlessBar::new("chapter-bar");
        let id = bar.append_segment(spec("Intro"));
        assert_eq!(id, SegmentId(0));
        assert_eq!(bar.segment_count(), 1);
        assert_eq!(bar.segment_attribute(id, "data-start").as_deref(), Some("30"));
        assert_eq!(bar.segment_attribute(id, "data-end"), None);
        assert_eq!(bar.segment_attribute(SegmentId(9), "data-start"), None);
    }

    #[test]
    fn class_toggle_is_idempotent() {
        let mut bar = HeadlessBar::new("bar");
        let id = bar.append_segment(spec("Intro"));
        bar.toggle_segment_class(id, "active", true);
        bar.toggle_segment_class(id, "active", true);
        assert_eq!(bar.segments()[0].classes, ["chapter-segment", "active"]);
        bar.toggle_segment_class(id, "active", false);
        assert!(!bar.segments()[0].has_class("active"));
    }

    #[test]
    fn render_escapes_labels() {
        let mut bar = HeadlessBar::new("chapter-bar");
        bar.append_segment(spec("Tips & <tricks>"));
        bar.set_background("red");

        let html = bar.render_html();
        assert_eq!(
            html,
            "<div id=\"chapter-bar\" style=\"background: red\">\n  <div class=\"chapter-segment\" style=\"width: 50%\" data-start=\"30\">Tips &amp; &lt;tricks&gt;</div>\n</div>\n"
        );
    }

    #[test]
    fn clear_removes_segments() {
        let mut bar = HeadlessBar::new("bar");
        bar.append_segment(spec("a"));
        bar.append_segment(spec("b"));
        bar.clear_segments();
        assert_eq!(bar.segment_count(), 0);
        assert_eq!(bar.append_segment(spec("c")), SegmentId(0));
    }
}
