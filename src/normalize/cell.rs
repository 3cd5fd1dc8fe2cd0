// src/normalize/cell.rs

//! Read-only views over `scraper` nodes that mirror how a cell's markup is
//! shaped: its element children, the text before the first child, the text
//! trailing an element.

use scraper::ElementRef;

/// Element children of a row, i.e. its cells.
pub fn cells<'a>(row: ElementRef<'a>) -> impl Iterator<Item = ElementRef<'a>> + 'a {
    row.children().filter_map(ElementRef::wrap)
}

pub fn children<'a>(el: ElementRef<'a>) -> Vec<ElementRef<'a>> {
    el.children().filter_map(ElementRef::wrap).collect()
}

/// All descendant text, concatenated.
pub fn text_content(el: ElementRef<'_>) -> String {
    el.text().collect()
}

/// Text nodes directly inside `el` that come before its first element child.
pub fn leading_text(el: ElementRef<'_>) -> String {
    let mut out = String::new();
    for node in el.children() {
        if let Some(t) = node.value().as_text() {
            out.push_str(t);
        } else if node.value().is_element() {
            break;
        }
    }
    out
}

/// Text nodes that follow `el` among its siblings, up to the next element.
pub fn tail_text(el: ElementRef<'_>) -> String {
    let mut out = String::new();
    for node in el.next_siblings() {
        if let Some(t) = node.value().as_text() {
            out.push_str(t);
        } else if node.value().is_element() {
            break;
        }
    }
    out
}

pub fn is_tag(el: ElementRef<'_>, name: &str) -> bool {
    el.value().name().eq_ignore_ascii_case(name)
}

/// First direct child element named `name`.
pub fn find_child<'a>(el: ElementRef<'a>, name: &str) -> Option<ElementRef<'a>> {
    el.children()
        .filter_map(ElementRef::wrap)
        .find(|c| is_tag(*c, name))
}

/// First descendant element named `name`, excluding `el` itself.
pub fn find_descendant<'a>(el: ElementRef<'a>, name: &str) -> Option<ElementRef<'a>> {
    el.descendants()
        .skip(1)
        .filter_map(ElementRef::wrap)
        .find(|c| is_tag(*c, name))
}
