//! Rows × columns zip into a plain-text grid.

use crate::model::record::Record;
use crate::table::columns::Column;

/// Message shown instead of rows when nothing matches.
pub const EMPTY_STATE: &str = "No data";

/// Rendered table: header labels plus one string per cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableView {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl TableView {
    pub fn build<T: Record>(columns: &[Column<T>], rows: &[&T]) -> Self {
        let headers = columns
            .iter()
            .map(|column| column.header().to_string())
            .collect();
        let rows = rows
            .iter()
            .map(|row| {
                columns
                    .iter()
                    .map(|column| column.render(*row).to_text())
                    .collect()
            })
            .collect();
        Self { headers, rows }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Left-aligned grid with ` | ` separators.
    ///
    /// An empty table renders the header line followed by [`EMPTY_STATE`].
    pub fn to_text(&self) -> String {
        let widths = self.column_widths();
        let mut lines = vec![format_line(&self.headers, &widths)];
        lines.push(
            widths
                .iter()
                .map(|width| "-".repeat(*width))
                .collect::<Vec<_>>()
                .join("-+-"),
        );

        if self.rows.is_empty() {
            lines.push(EMPTY_STATE.to_string());
        } else {
            lines.extend(self.rows.iter().map(|row| format_line(row, &widths)));
        }
        lines.join("\n")
    }

    fn column_widths(&self) -> Vec<usize> {
        self.headers
            .iter()
            .enumerate()
            .map(|(index, header)| {
                self.rows
                    .iter()
                    .filter_map(|row| row.get(index))
                    .map(|cell| cell.chars().count())
                    .chain(std::iter::once(header.chars().count()))
                    .max()
                    .unwrap_or(0)
            })
            .collect()
    }
}

fn format_line(cells: &[String], widths: &[usize]) -> String {
    cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| {
            let padding = width.saturating_sub(cell.chars().count());
            format!("{cell}{}", " ".repeat(padding))
        })
        .collect::<Vec<_>>()
        .join(" | ")
        .trim_end()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::{TableView, EMPTY_STATE};
    use crate::model::entry::Entry;
    use crate::table::columns::ColumnFormatter;

    #[test]
    fn build_renders_one_string_per_cell() {
        let formatter = ColumnFormatter::<Entry>::new(|_| {}, |_| {});
        let columns = formatter.columns(&["name", "amount"]);
        let entry = Entry::new("Huur", 950.0, "2024-02-01", "Anders");

        let view = TableView::build(&columns, &[&entry]);
        assert_eq!(view.headers, vec!["Naam", "Bedrag", "Acties"]);
        assert_eq!(
            view.rows,
            vec![vec![
                "Huur".to_string(),
                "€\u{a0}950,00".to_string(),
                "Bewerk | Verwijder".to_string(),
            ]]
        );
    }

    #[test]
    fn empty_rows_render_empty_state() {
        let formatter = ColumnFormatter::<Entry>::new(|_| {}, |_| {});
        let columns = formatter.columns(&["name"]);
        let view = TableView::build::<Entry>(&columns, &[]);

        assert!(view.is_empty());
        assert!(view.to_text().ends_with(EMPTY_STATE));
    }
}
