//! Recursive rendering of content blocks to formatted text.
//!
//! One branch per block kind, dispatched on the closed [`ContentBlock`]
//! enum. Sub-blocks recurse through [`render_block`], so any kind can nest
//! inside an `entries` or `section` body.

use crate::model::{ContentBlock, Entry};

/// Render one entry: plain lines verbatim, blocks via recursive dispatch.
pub fn render_entry(entry: &Entry) -> String {
    match entry {
        Entry::Text(line) => line.clone(),
        Entry::Block(block) => render_block(block, false),
    }
}

/// Render a content block to newline-joined text.
///
/// `as_section` only affects `entries` blocks: a named `entries` block
/// rendered inside a `section` promotes its name to an H2 heading instead
/// of a bolded inline label.
pub fn render_block(block: &ContentBlock, as_section: bool) -> String {
    match block {
        ContentBlock::Entries { name, entries } => {
            render_entries(name.as_deref(), entries, as_section)
        }
        ContentBlock::Inset { name, entries } => render_inset(name.as_deref(), entries),
        ContentBlock::List { items } => render_list(items),
        ContentBlock::Section { name: _, entries } => render_section(entries),
        ContentBlock::Table {
            caption,
            col_labels,
            rows,
        } => render_table(caption.as_deref(), col_labels, rows),
        ContentBlock::Quote { entries } => render_quote(entries),
    }
}

/// Render child entries, guaranteeing at least one (possibly empty) line.
fn child_lines(entries: &[Entry]) -> Vec<String> {
    let mut lines: Vec<String> = entries.iter().map(render_entry).collect();
    if lines.is_empty() {
        lines.push(String::new());
    }
    lines
}

fn render_entries(name: Option<&str>, entries: &[Entry], as_section: bool) -> String {
    let mut lines = child_lines(entries);
    match name {
        Some(name) if as_section => {
            lines.insert(0, format!("## {}", name));
        }
        Some(name) => {
            lines[0] = format!("**{}**. {}", name, lines[0]);
        }
        None => {}
    }
    lines.join("\n\n")
}

fn render_inset(name: Option<&str>, entries: &[Entry]) -> String {
    let mut lines = vec![
        "---".to_string(),
        format!("**{}**", name.unwrap_or_default()),
    ];
    lines.extend(entries.iter().map(render_entry));
    lines.push("---".to_string());
    lines.join("\n\n")
}

fn render_list(items: &[String]) -> String {
    items
        .iter()
        .map(|item| format!("- {}", item))
        .collect::<Vec<_>>()
        .join("\n")
}

fn render_section(entries: &[Entry]) -> String {
    // A section has no heading of its own; nested `entries` blocks are
    // promoted to headings instead.
    let lines: Vec<String> = entries
        .iter()
        .map(|entry| match entry {
            Entry::Text(line) => line.clone(),
            Entry::Block(block @ ContentBlock::Entries { .. }) => render_block(block, true),
            Entry::Block(block) => render_block(block, false),
        })
        .collect();
    lines.join("\n\n")
}

fn render_table(caption: Option<&str>, col_labels: &[String], rows: &[Vec<String>]) -> String {
    let mut lines = vec![
        format!("*{}*", caption.unwrap_or_default()),
        format!("|{}|", col_labels.join("|")),
        format!(
            "|{}|",
            col_labels
                .iter()
                .map(|_| "---")
                .collect::<Vec<_>>()
                .join("|")
        ),
    ];
    for row in rows {
        lines.push(format!("|{}|", row.join("|")));
    }
    lines.join("\n")
}

fn render_quote(entries: &[Entry]) -> String {
    let mut lines = child_lines(entries);
    lines[0] = format!("*\"{}", lines[0]);
    let last = lines.len() - 1;
    lines[last] = format!("{}\"*", lines[last]);
    lines.join("\n")
}
