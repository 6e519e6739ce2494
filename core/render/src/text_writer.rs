//! FILENAME: core/render/src/text_writer.rs
//! PURPOSE: Column-aligned plain-text tables for terminals and diffs.

use table_engine::TableView;

pub fn write_text(tables: &[TableView]) -> String {
    let mut out = String::new();
    for (i, view) in tables.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        write_table(&mut out, view);
    }
    out
}

fn write_table(out: &mut String, view: &TableView) {
    out.push_str(&format!("== {} ==\n", view.table));

    let rendered: Vec<Vec<String>> = view
        .cells
        .iter()
        .map(|row| row.iter().map(|value| value.to_string()).collect())
        .collect();

    let mut widths = vec![0usize; view.col_count];
    for row in &rendered {
        for (col, value) in row.iter().enumerate() {
            widths[col] = widths[col].max(value.chars().count());
        }
    }

    for (r, row) in rendered.iter().enumerate() {
        let line: Vec<String> = row
            .iter()
            .enumerate()
            .map(|(col, value)| pad(value, widths[col]))
            .collect();
        out.push_str(line.join(" | ").trim_end());
        out.push('\n');

        if r + 1 == view.header_rows {
            let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
            out.push_str(&rule.join("-+-"));
            out.push('\n');
        }
    }
}

fn pad(value: &str, width: usize) -> String {
    let len = value.chars().count();
    format!("{}{}", value, " ".repeat(width.saturating_sub(len)))
}
