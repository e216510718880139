//! Cards are assembled as an element tree and serialised once at the end, so
//! renders can be asserted on by text and attribute before they become markup.

use std::fmt::{self, Write as _};
use unicode_width::UnicodeWidthStr;

/// A node in a presentational SVG tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Element(Element),
    Text(String),
}

/// An SVG element with ordered attributes and children.
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    name: &'static str,
    attrs: Vec<(&'static str, String)>,
    children: Vec<Node>,
}

impl Element {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            attrs: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Set an attribute, replacing an earlier value for the same key.
    pub fn attr(mut self, key: &'static str, value: impl fmt::Display) -> Self {
        let value = value.to_string();
        match self.attrs.iter_mut().find(|(k, _)| *k == key) {
            Some(slot) => slot.1 = value,
            None => self.attrs.push((key, value)),
        }
        self
    }

    pub fn child(mut self, child: Element) -> Self {
        self.children.push(Node::Element(child));
        self
    }

    pub fn children(mut self, children: impl IntoIterator<Item = Element>) -> Self {
        self.children
            .extend(children.into_iter().map(Node::Element));
        self
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.children.push(Node::Text(text.into()));
        self
    }

    pub fn push(&mut self, child: Element) {
        self.children.push(Node::Element(child));
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn attrs(&self) -> &[(&'static str, String)] {
        &self.attrs
    }

    pub fn get_attr(&self, key: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Visit this element and every descendant element, depth first.
    pub fn walk<'a>(&'a self, f: &mut impl FnMut(&'a Element)) {
        f(self);
        for node in &self.children {
            if let Node::Element(el) = node {
                el.walk(f);
            }
        }
    }

    /// Every text node in document order, one per line.
    pub fn text_content(&self) -> String {
        let mut lines = Vec::new();
        self.collect_text(&mut lines);
        lines.join("\n")
    }

    fn collect_text<'a>(&'a self, out: &mut Vec<&'a str>) {
        for node in &self.children {
            match node {
                Node::Element(el) => el.collect_text(out),
                Node::Text(text) => out.push(text),
            }
        }
    }

    /// Serialise to an SVG/XML string.
    pub fn to_svg(&self) -> String {
        let mut out = String::new();
        self.write_to(&mut out, 0);
        out
    }

    fn write_to(&self, out: &mut String, depth: usize) {
        let indent = "  ".repeat(depth);
        let _ = write!(out, "{}<{}", indent, self.name);
        for (key, value) in &self.attrs {
            let _ = write!(out, r#" {}="{}""#, key, escape(value));
        }

        if self.children.is_empty() {
            out.push_str("/>\n");
            return;
        }

        let inline = self
            .children
            .iter()
            .all(|node| matches!(node, Node::Text(_)));
        if inline {
            out.push('>');
            for node in &self.children {
                if let Node::Text(text) = node {
                    out.push_str(&escape(text));
                }
            }
            let _ = writeln!(out, "</{}>", self.name);
            return;
        }

        out.push_str(">\n");
        for node in &self.children {
            match node {
                Node::Element(el) => el.write_to(out, depth + 1),
                Node::Text(text) => {
                    let _ = writeln!(out, "{}  {}", indent, escape(text));
                }
            }
        }
        let _ = writeln!(out, "{}</{}>", indent, self.name);
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_svg())
    }
}

/// Escape text for use in XML content or a double-quoted attribute.
pub fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}

/// Optimizes an SVG string, returning the input untouched if anything fails.
#[cfg(feature = "optimize")]
pub fn optimize(svg: &str) -> String {
    use oxvg_ast::parse::roxmltree::parse;
    use oxvg_ast::serialize::Node as _;
    use oxvg_ast::visitor::Info;
    use oxvg_optimiser::Jobs;

    parse(svg, |dom, allocator| {
        let jobs = Jobs::default();
        if jobs.run(dom, &Info::new(allocator)).is_ok() {
            dom.serialize().unwrap_or_else(|_| svg.to_string())
        } else {
            svg.to_string()
        }
    })
    .unwrap_or_else(|_| svg.to_string())
}

/// Format a count with k/M suffixes. Rounds to a tenth before picking the
/// suffix so `999_960` reads `1.0M`, not `1000.0k`.
pub fn format_number(n: u64) -> String {
    let tenths_of_k = n.saturating_add(50) / 100;
    if tenths_of_k >= 10_000 {
        let tenths_of_m = n.saturating_add(50_000) / 100_000;
        format!("{}.{}M", tenths_of_m / 10, tenths_of_m % 10)
    } else if n >= 1000 {
        format!("{}.{}k", tenths_of_k / 10, tenths_of_k % 10)
    } else {
        n.to_string()
    }
}

fn round_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

fn trim_point_zero(s: String) -> String {
    match s.strip_suffix(".0") {
        Some(trimmed) => trimmed.to_string(),
        None => s,
    }
}

/// `52` -> `52%`, `52.46` -> `52.5%`. Non-finite values show as `0%`.
pub fn format_percent(value: f64) -> String {
    if !value.is_finite() {
        return "0%".to_string();
    }
    format!("{}%", trim_point_zero(format!("{:.1}", value)))
}

/// Minutes below an hour stay in minutes, anything longer switches to hours.
pub fn format_minutes(minutes: f64) -> String {
    if !minutes.is_finite() {
        return "0 min".to_string();
    }
    let rounded = round_tenth(minutes);
    if rounded < 60.0 {
        format!("{} min", trim_point_zero(format!("{:.1}", rounded)))
    } else {
        format!("{} h", trim_point_zero(format!("{:.1}", minutes / 60.0)))
    }
}

/// Clamp a percentage into a bar fill fraction.
pub fn bar_fraction(percent: f64) -> f64 {
    if percent.is_finite() {
        percent.clamp(0.0, 100.0) / 100.0
    } else {
        0.0
    }
}

/// Greedy word wrap by display width. A word wider than `max_width` gets its
/// own line rather than being split.
pub fn wrap_text(text: &str, max_width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        if current.is_empty() {
            current.push_str(word);
        } else if current.width() + 1 + word.width() <= max_width {
            current.push(' ');
            current.push_str(word);
        } else {
            lines.push(std::mem::take(&mut current));
            current.push_str(word);
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_nested_tree() {
        let el = Element::new("g")
            .attr("id", "a")
            .child(Element::new("text").attr("x", 10).text("hi"))
            .child(Element::new("rect").attr("width", 5));
        let svg = el.to_svg();
        assert!(svg.starts_with(r#"<g id="a">"#));
        assert!(svg.contains(r#"<text x="10">hi</text>"#));
        assert!(svg.contains(r#"<rect width="5"/>"#));
        assert!(svg.trim_end().ends_with("</g>"));
    }

    #[test]
    fn attr_replaces_existing_key() {
        let el = Element::new("rect").attr("fill", "red").attr("fill", "blue");
        assert_eq!(el.attrs().len(), 1);
        assert_eq!(el.get_attr("fill"), Some("blue"));
    }

    #[test]
    fn escapes_text_and_attributes() {
        let el = Element::new("text")
            .attr("data-x", r#"a"b"#)
            .text("<Tom & Jerry's>");
        let svg = el.to_svg();
        assert!(svg.contains("&lt;Tom &amp; Jerry&apos;s&gt;"));
        assert!(svg.contains(r#"data-x="a&quot;b""#));
    }

    #[test]
    fn text_content_in_document_order() {
        let el = Element::new("g")
            .child(Element::new("text").text("one"))
            .child(Element::new("g").child(Element::new("text").text("two")));
        assert_eq!(el.text_content(), "one\ntwo");
    }

    #[test]
    fn number_formatting() {
        assert_eq!(format_number(999), "999");
        assert_eq!(format_number(12847), "12.8k");
        assert_eq!(format_number(2_500_000), "2.5M");
    }

    #[test]
    fn rounding_up_promotes_the_suffix() {
        assert_eq!(format_number(999_949), "999.9k");
        assert_eq!(format_number(999_950), "1.0M");
        assert_eq!(format_number(999_999), "1.0M");
        assert_eq!(format_minutes(59.94), "59.9 min");
        assert_eq!(format_minutes(59.97), "1 h");
    }

    #[test]
    fn percent_formatting() {
        assert_eq!(format_percent(52.0), "52%");
        assert_eq!(format_percent(52.46), "52.5%");
        assert_eq!(format_percent(f64::NAN), "0%");
    }

    #[test]
    fn minutes_formatting() {
        assert_eq!(format_minutes(4.2), "4.2 min");
        assert_eq!(format_minutes(12.0), "12 min");
        assert_eq!(format_minutes(90.0), "1.5 h");
        assert_eq!(format_minutes(120.0), "2 h");
    }

    #[test]
    fn bar_fraction_is_clamped() {
        assert_eq!(bar_fraction(150.0), 1.0);
        assert_eq!(bar_fraction(-3.0), 0.0);
        assert_eq!(bar_fraction(f64::INFINITY), 0.0);
        assert_eq!(bar_fraction(25.0), 0.25);
    }

    #[test]
    fn wraps_on_word_boundaries() {
        let lines = wrap_text("Kamu tuh ya, bikin aku senyum terus", 12);
        assert_eq!(lines, vec!["Kamu tuh ya,", "bikin aku", "senyum terus"]);
    }

    #[test]
    fn long_word_gets_own_line() {
        let lines = wrap_text("a supercalifragilistic b", 5);
        assert_eq!(lines, vec!["a", "supercalifragilistic", "b"]);
    }

    #[test]
    fn wrap_of_blank_is_empty() {
        assert!(wrap_text("   ", 10).is_empty());
    }
}
