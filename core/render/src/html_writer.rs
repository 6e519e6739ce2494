//! FILENAME: core/render/src/html_writer.rs
//! PURPOSE: Emits each table as a plain HTML `<table>` fragment.
//! CONTEXT: Header cells become `<th>`, computed cells `<td>`. Items carry
//! their internal name in a `data-item` attribute so wiki templates can
//! attach icons; no styling is emitted here. Every piece of text passes
//! through askama's HTML escaping.

use askama::Template;
use engine::Displayable;
use table_engine::{TableCellType, TableView};

use crate::error::RenderError;

// ============================================================================
// TEMPLATES
// ============================================================================

/// One rendered cell: its tag and already-escaped inner markup.
struct CellMarkup {
    tag: &'static str,
    markup: String,
}

#[derive(Template)]
#[template(path = "table.html")]
struct TableTemplate<'a> {
    table: &'a str,
    head: Vec<Vec<CellMarkup>>,
    body: Vec<Vec<CellMarkup>>,
}

#[derive(Template)]
#[template(source = "{{ text }}", ext = "html")]
struct TextFragment<'a> {
    text: &'a str,
}

#[derive(Template)]
#[template(
    source = "<span class=\"item\" data-item=\"{{ name }}\">{{ label }}</span>",
    ext = "html"
)]
struct ItemFragment<'a> {
    name: &'a str,
    label: &'a str,
}

// ============================================================================
// WRITER
// ============================================================================

pub fn write_html(tables: &[TableView]) -> Result<String, RenderError> {
    let mut out = String::new();
    for (i, view) in tables.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        out.push_str(&render_table(view)?);
        out.push('\n');
    }
    Ok(out)
}

fn render_table(view: &TableView) -> Result<String, RenderError> {
    let mut rows = (0..view.row_count)
        .map(|row| render_row(view, row))
        .collect::<Result<Vec<_>, _>>()?;
    let body = rows.split_off(view.header_rows.min(rows.len()));

    let template = TableTemplate {
        table: &view.table,
        head: rows,
        body,
    };
    Ok(template.render()?)
}

fn render_row(view: &TableView, row: usize) -> Result<Vec<CellMarkup>, RenderError> {
    view.cells[row]
        .iter()
        .enumerate()
        .map(|(col, value)| {
            let tag = match view.cell_type(row, col) {
                TableCellType::Data => "td",
                _ => "th",
            };
            Ok(CellMarkup {
                tag,
                markup: displayable_html(value)?,
            })
        })
        .collect()
}

/// Markup for a single value.
pub fn displayable_html(value: &Displayable) -> Result<String, RenderError> {
    let markup = match value {
        Displayable::Item { name } => item_html(name)?,
        Displayable::ItemGroup { names } => names
            .iter()
            .map(|name| item_html(name))
            .collect::<Result<Vec<_>, _>>()?
            .join(" / "),
        Displayable::Count { count, of } => {
            format!("{} &times; {}", count, displayable_html(of)?)
        }
        Displayable::Ratio { left, right } => {
            format!("{} : {}", displayable_html(left)?, displayable_html(right)?)
        }
        Displayable::Group { parts } => parts
            .iter()
            .filter(|part| !part.is_blank())
            .map(displayable_html)
            .collect::<Result<Vec<_>, _>>()?
            .join(" "),
        other => TextFragment {
            text: &other.to_string(),
        }
        .render()?,
    };
    Ok(markup)
}

fn item_html(name: &str) -> Result<String, RenderError> {
    let label = Displayable::Item {
        name: name.to_string(),
    }
    .to_string();
    Ok(ItemFragment {
        name,
        label: &label,
    }
    .render()?)
}
