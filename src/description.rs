use crate::util::ElementRefExt;
use ego_tree::NodeRef;
use itertools::Itertools;
use scraper::{ElementRef, Node, Selector};

/// Rebuilds a normalized textual description from a bounded run of sibling
/// nodes. Iteration stops at the first node matching `stop` (typically the
/// next heading level or the parameter table).
///
/// List items come out as `" - item"` lines, `pre`/`blockquote` content is
/// kept verbatim between backticks, and inline markup is reduced to plain
/// text except `<a>` and `<em>`, which the return-type inference relies on
/// to locate type mentions.
pub fn extract<'a, P>(nodes: &[ElementRef<'a>], stop: P) -> String
where
    P: Fn(&ElementRef<'a>) -> bool,
{
    nodes
        .iter()
        .take_while(|elem| !stop(*elem))
        .copied()
        .map(format_block)
        .join("\n")
        .trim()
        .to_string()
}

fn format_block(elem: ElementRef) -> String {
    let li = Selector::parse("li").unwrap();
    match elem.value().name() {
        "ul" | "ol" => elem
            .select(&li)
            .map(|item| format!(" - {}", inline_markup(item).trim()))
            .join("\n"),
        "pre" | "blockquote" => format!("`{}`", elem.plain_text().trim()),
        _ => inline_markup(elem).trim().to_string(),
    }
}

/// Flattens an element to text, keeping `<em>` spans and `<a>` links in a
/// canonical form and dropping every other tag.
pub fn inline_markup(elem: ElementRef) -> String {
    let mut out = String::new();
    render_children(*elem, &mut out);
    out
}

fn render_children(node: NodeRef<'_, Node>, out: &mut String) {
    for child in node.children() {
        match child.value() {
            Node::Text(text) => out.push_str(text),
            Node::Element(elem) => match elem.name() {
                "a" => match elem.attr("href") {
                    Some(href) => {
                        out.push_str(&format!("<a href=\"{}\">", href));
                        render_children(child, out);
                        out.push_str("</a>");
                    }
                    None => render_children(child, out),
                },
                "em" => {
                    out.push_str("<em>");
                    render_children(child, out);
                    out.push_str("</em>");
                }
                "img" => {
                    if let Some(alt) = elem.attr("alt") {
                        out.push_str(alt);
                    }
                }
                "br" => out.push('\n'),
                _ => render_children(child, out),
            },
            _ => {}
        }
    }
}
