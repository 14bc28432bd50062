//! Text renderings of a finished table.
//!
//! The legacy layout is what downstream tooling reads: one line per row,
//! `capacity + 2` integer fields (row item weight, then capacities `0..=W`),
//! with the answer as the last field of the last line.

use std::io::Write;

use crate::error::Result;
use crate::table::DpTable;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Separator {
    Comma,
    Space,
}

impl Separator {
    fn as_str(self) -> &'static str {
        match self {
            Separator::Comma => ",",
            Separator::Space => " ",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layout {
    /// Full dump with the weight bookkeeping column.
    Legacy(Separator),
    /// Only the answer integer.
    Answer,
    /// One JSON object with the answer and its reconstruction.
    Json,
}

/// Render `table` into `out` using `layout`.
pub fn write_table<W: Write>(table: &DpTable, layout: Layout, out: &mut W) -> Result<()> {
    match layout {
        Layout::Legacy(sep) => write_legacy(table, sep, out)?,
        Layout::Answer => writeln!(out, "{}", table.answer())?,
        Layout::Json => write_json(table, out)?,
    }
    out.flush()?;
    Ok(())
}

fn write_legacy<W: Write>(table: &DpTable, sep: Separator, out: &mut W) -> Result<()> {
    for row in 0..table.rows() {
        let fields = table.legacy_row(row);
        let line = fields
            .iter()
            .map(u64::to_string)
            .collect::<Vec<_>>()
            .join(sep.as_str());
        writeln!(out, "{line}")?;
    }
    Ok(())
}

fn write_json<W: Write>(table: &DpTable, out: &mut W) -> Result<()> {
    let selection = table.selection();
    let selected = selection
        .origins
        .iter()
        .map(usize::to_string)
        .collect::<Vec<_>>()
        .join(",");
    writeln!(
        out,
        "{{\"capacity\":{},\"items\":{},\"max_value\":{},\"selected\":[{}],\"total_weight\":{}}}",
        table.capacity(),
        table.items().len(),
        table.answer(),
        selected,
        selection.total_weight
    )?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::build_table;
    use crate::item::build_sequence;

    fn render(layout: Layout) -> String {
        let items = build_sequence(&[3, 2], &[4, 3]).unwrap();
        let table = build_table(&items, 5).unwrap();
        let mut buf = Vec::new();
        write_table(&table, layout, &mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn legacy_comma_layout() {
        assert_eq!(
            render(Layout::Legacy(Separator::Comma)),
            "2,0,0,3,3,3,3\n3,0,0,3,4,4,7\n"
        );
    }

    #[test]
    fn legacy_space_layout() {
        let text = render(Layout::Legacy(Separator::Space));
        assert_eq!(text.lines().next(), Some("2 0 0 3 3 3 3"));
    }

    #[test]
    fn answer_layout() {
        assert_eq!(render(Layout::Answer), "7\n");
    }

    #[test]
    fn json_layout_reports_input_indices() {
        assert_eq!(
            render(Layout::Json),
            "{\"capacity\":5,\"items\":2,\"max_value\":7,\"selected\":[1,0],\"total_weight\":5}\n"
        );
    }
}
