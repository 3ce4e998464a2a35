//! Renderer and macro-normalizer property tests.

use itempress::{parse_str, render_block, ContentBlock, Entry, MacroNormalizer};

fn table(cols: usize, rows: usize) -> ContentBlock {
    ContentBlock::Table {
        caption: Some("Caption".to_string()),
        col_labels: (0..cols).map(|c| format!("c{}", c)).collect(),
        rows: (0..rows)
            .map(|r| (0..cols).map(|c| format!("r{}c{}", r, c)).collect())
            .collect(),
    }
}

#[test]
fn test_table_line_count_property() {
    for (cols, rows) in [(1, 1), (3, 5), (2, 0), (4, 7)] {
        let rendered = render_block(&table(cols, rows), false);
        let lines: Vec<&str> = rendered.lines().collect();
        // caption, then header + separator + one line per row
        assert_eq!(lines.len(), rows + 3, "cols={} rows={}", cols, rows);

        let cell_count = |line: &str| line.trim_matches('|').split('|').count();
        assert_eq!(cell_count(lines[1]), cols);
        assert_eq!(cell_count(lines[2]), cols);
    }
}

#[test]
fn test_table_parsed_from_catalog_json() {
    let doc = parse_str(
        r#"{"item":[{
            "name": "Trinket Box",
            "entries": [{
                "type": "table",
                "caption": "Trinkets",
                "colLabels": ["d4", "Result"],
                "rows": [["1", "a feather"], ["2", "a coin"]]
            }]
        }]}"#,
    )
    .unwrap();
    let records = itempress::normalize_document(&doc);
    let description = &records[0].description;
    assert!(description.contains("*Trinkets*"));
    assert!(description.contains("|d4|Result|"));
    assert!(description.contains("|---|---|"));
    assert!(description.contains("|2|a coin|"));
}

#[test]
fn test_section_heading_promotion_only_for_entries() {
    let block = ContentBlock::Section {
        name: Some("Ignored Title".to_string()),
        entries: vec![
            Entry::Block(ContentBlock::Entries {
                name: Some("Promoted".to_string()),
                entries: vec![Entry::text("body")],
            }),
            Entry::Block(ContentBlock::List {
                items: vec!["bullet".to_string()],
            }),
        ],
    };
    let rendered = render_block(&block, false);
    assert!(rendered.starts_with("## Promoted"));
    assert!(!rendered.contains("Ignored Title"));
    assert!(rendered.ends_with("- bullet"));
}

#[test]
fn test_quote_wraps_rendered_children() {
    let block = ContentBlock::Quote {
        entries: vec![
            Entry::text("Speak friend,"),
            Entry::text("and enter."),
        ],
    };
    assert_eq!(
        render_block(&block, false),
        "*\"Speak friend,\nand enter.\"*"
    );
}

#[test]
fn test_macro_normalizer_identity() {
    let normalizer = MacroNormalizer::new();
    let samples = [
        "no macros at all",
        "stray { braces } and | pipes",
        "an email-looking thing {@}",
    ];
    for sample in samples {
        assert_eq!(normalizer.process(sample), sample);
    }
}

#[test]
fn test_macro_normalizer_exhausts_well_formed_macros() {
    let normalizer = MacroNormalizer::new();
    let text = "Hit: {@h}{@damage 1d6 + 3} and {@condition prone|XPHB|knocked prone}, \
                see {@item shield|phb}.";
    let result = normalizer.process(text);
    assert!(result.contains("1d6 + 3"));
    assert!(result.contains("knocked prone"));
    assert!(result.contains("see phb."));
    // {@h} has no argument and is not part of the macro grammar
    assert!(result.contains("{@h}"));
}
