use ego_tree::iter::Edge;
use scraper::{ElementRef, Node};

pub trait ElementRefExt {
    fn plain_text(&self) -> String;
}

impl ElementRefExt for ElementRef<'_> {
    fn plain_text(&self) -> String {
        self.traverse()
            .filter_map(|edge| {
                if let Edge::Open(node) = edge {
                    return match node.value() {
                        Node::Text(text) => Some(text.as_ref()),
                        Node::Element(elem) if elem.name() == "img" => elem.attr("alt"),
                        Node::Element(elem) if elem.name() == "br" => Some("\n"),
                        _ => None,
                    };
                }

                None
            })
            .collect()
    }
}

/// Table cells and descriptions use typographic quotes; downstream
/// generators expect plain ASCII ones.
pub fn normalize_quotes(s: &str) -> String {
    s.chars()
        .filter_map(|c| match c {
            '\u{201c}' | '\u{201d}' => Some('"'),
            '\u{00bb}' => None,
            c => Some(c),
        })
        .collect()
}
