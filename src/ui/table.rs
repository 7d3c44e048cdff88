//! Checkable tables and the factory that configures them

use crate::theme;
use crate::types::{ColumnSizing, SortDirection};
use eframe::egui;
use thiserror::Error;
use tracing::warn;

const DEFAULT_LABELS: &[&str] = &["Empty"];

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TableError {
    #[error("a table needs at least one column")]
    NoColumns,
    #[error("{labels} header labels given for {columns} columns")]
    LabelMismatch { labels: usize, columns: usize },
}

/// Header labels, column count and sizing of a new table.
///
/// `Default` gives a single stretched "Empty" column, so callers only spell
/// out what differs.
#[derive(Debug, Clone, Copy)]
pub struct TableLayout<'a> {
    pub labels: &'a [&'a str],
    pub columns: usize,
    pub stretch: bool,
}

impl Default for TableLayout<'_> {
    fn default() -> Self {
        Self { labels: DEFAULT_LABELS, columns: DEFAULT_LABELS.len(), stretch: true }
    }
}

/// Builds tables with the header and column sizing used throughout the editor
pub struct TableFactory;

impl TableFactory {
    /// Construct a table with one header label per column.
    ///
    /// With `stretch` the first column fills the width. Without it the first
    /// column fits its content and the second one (if any) takes the rest.
    /// Tables have no row-number header and header clicks sort.
    pub fn construct(layout: TableLayout<'_>) -> Result<CheckableTable, TableError> {
        let TableLayout { labels, columns, stretch } = layout;
        if columns == 0 {
            return Err(TableError::NoColumns);
        }
        if labels.len() != columns {
            return Err(TableError::LabelMismatch { labels: labels.len(), columns });
        }

        let mut sizing = vec![ColumnSizing::Resizable; columns];
        if stretch {
            sizing[0] = ColumnSizing::Stretch;
        } else {
            sizing[0] = ColumnSizing::FitToContent;
            if let Some(second) = sizing.get_mut(1) {
                *second = ColumnSizing::Stretch;
            }
        }

        Ok(CheckableTable {
            headers: labels.iter().map(|l| l.to_string()).collect(),
            sizing,
            rows: Vec::new(),
            display_order: Vec::new(),
            sort: None,
        })
    }
}

#[derive(Debug, Clone)]
struct TableRow {
    cells: Vec<String>,
    checked: bool,
}

/// Table whose first column carries a check box per row.
///
/// Rows are addressed by insertion index everywhere; sorting only changes
/// `display_order`.
#[derive(Debug, Clone)]
pub struct CheckableTable {
    headers: Vec<String>,
    sizing: Vec<ColumnSizing>,
    rows: Vec<TableRow>,
    display_order: Vec<usize>,
    sort: Option<(usize, SortDirection)>,
}

impl CheckableTable {
    #[cfg(test)]
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn column_count(&self) -> usize {
        self.headers.len()
    }

    #[cfg(test)]
    pub fn column_sizing(&self, column: usize) -> Option<ColumnSizing> {
        self.sizing.get(column).copied()
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Append an unchecked row; `text` goes into the first column
    pub fn append_row(&mut self, text: impl Into<String>) -> usize {
        let mut cells = vec![String::new(); self.column_count()];
        cells[0] = text.into();
        self.rows.push(TableRow { cells, checked: false });
        let index = self.rows.len() - 1;
        self.display_order.push(index);
        if self.sort.is_some() {
            self.apply_sort();
        }
        index
    }

    pub fn row_text(&self, row: usize) -> Option<&str> {
        self.rows.get(row).map(|r| r.cells[0].as_str())
    }

    pub fn is_checked(&self, row: usize) -> Option<bool> {
        self.rows.get(row).map(|r| r.checked)
    }

    pub fn set_checked(&mut self, row: usize, checked: bool) -> bool {
        match self.rows.get_mut(row) {
            Some(r) => {
                r.checked = checked;
                true
            }
            None => {
                warn!(row, rows = self.rows.len(), "Row index out of range");
                false
            }
        }
    }

    /// Flip a row's check state and return the new state
    pub fn toggle(&mut self, row: usize) -> Option<bool> {
        let current = self.is_checked(row)?;
        self.set_checked(row, !current);
        Some(!current)
    }

    #[cfg(test)]
    pub fn current_sort(&self) -> Option<(usize, SortDirection)> {
        self.sort
    }

    /// Sort by a column. Sorting the same column again reverses the direction.
    pub fn sort_by(&mut self, column: usize) {
        if column >= self.column_count() {
            return;
        }
        self.sort = match self.sort {
            Some((col, dir)) if col == column => Some((col, dir.flipped())),
            _ => Some((column, SortDirection::Ascending)),
        };
        self.apply_sort();
    }

    /// Row indices in the order they are displayed
    #[cfg(test)]
    pub fn display_order(&self) -> &[usize] {
        &self.display_order
    }

    fn apply_sort(&mut self) {
        let Some((column, direction)) = self.sort else {
            return;
        };
        let rows = &self.rows;
        self.display_order.sort_by(|&a, &b| {
            let ord = rows[a].cells[column]
                .to_lowercase()
                .cmp(&rows[b].cells[column].to_lowercase());
            match direction {
                SortDirection::Ascending => ord,
                SortDirection::Descending => ord.reverse(),
            }
        });
    }

    /// Render the table. Returns the rows whose check box was clicked this
    /// frame; their state is left for the caller to change.
    pub fn show(&mut self, ui: &mut egui::Ui, max_height: f32) -> Vec<usize> {
        use egui_extras::{Column, TableBuilder};

        let mut clicked = Vec::new();
        let mut sort_request = None;

        let mut table = TableBuilder::new(ui)
            .striped(true)
            .resizable(false)
            .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
            .auto_shrink([false, false])
            .min_scrolled_height(0.0)
            .max_scroll_height(max_height);

        for sizing in &self.sizing {
            table = table.column(match sizing {
                ColumnSizing::Stretch => Column::remainder().clip(true),
                ColumnSizing::FitToContent => Column::auto(),
                ColumnSizing::Resizable => Column::auto().resizable(true),
            });
        }

        let headers = &self.headers;
        let sort = self.sort;
        let rows = &self.rows;
        let order = &self.display_order;

        table
            .header(theme::TABLE_HEADER_HEIGHT, |mut header| {
                for (col, label) in headers.iter().enumerate() {
                    header.col(|ui| {
                        let icon = match sort {
                            Some((c, SortDirection::Ascending)) if c == col => {
                                egui_phosphor::regular::CARET_UP
                            }
                            Some((c, SortDirection::Descending)) if c == col => {
                                egui_phosphor::regular::CARET_DOWN
                            }
                            _ => egui_phosphor::regular::CARET_UP_DOWN,
                        };
                        let text = format!("{} {}", label, icon);
                        let resp = ui.add(
                            egui::Label::new(
                                egui::RichText::new(text).size(theme::FONT_LABEL).strong(),
                            )
                            .selectable(false)
                            .sense(egui::Sense::click()),
                        );
                        if resp.clicked() {
                            sort_request = Some(col);
                        }
                    });
                }
            })
            .body(|body| {
                body.rows(theme::ROW_HEIGHT, order.len(), |mut table_row| {
                    let index = order[table_row.index()];
                    let row = &rows[index];
                    for (col, cell) in row.cells.iter().enumerate() {
                        table_row.col(|ui| {
                            if col == 0 {
                                let mut checked = row.checked;
                                if ui.checkbox(&mut checked, cell.as_str()).clicked() {
                                    clicked.push(index);
                                }
                            } else {
                                ui.label(cell.as_str());
                            }
                        });
                    }
                });
            });

        if let Some(col) = sort_request {
            self.sort_by(col);
        }
        clicked
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout<'a>(labels: &'a [&'a str], stretch: bool) -> TableLayout<'a> {
        TableLayout { labels, columns: labels.len(), stretch }
    }

    fn default_table() -> CheckableTable {
        TableFactory::construct(TableLayout::default()).unwrap()
    }

    #[test]
    fn stretch_sets_first_column_to_fill() {
        let table = TableFactory::construct(layout(&["Name", "Owner"], true)).unwrap();
        assert_eq!(table.column_sizing(0), Some(ColumnSizing::Stretch));
        assert_eq!(table.column_sizing(1), Some(ColumnSizing::Resizable));
    }

    #[test]
    fn no_stretch_fits_first_and_stretches_second() {
        let table = TableFactory::construct(layout(&["Name", "Owner", "Tech"], false)).unwrap();
        assert_eq!(table.column_sizing(0), Some(ColumnSizing::FitToContent));
        assert_eq!(table.column_sizing(1), Some(ColumnSizing::Stretch));
        assert_eq!(table.column_sizing(2), Some(ColumnSizing::Resizable));
    }

    #[test]
    fn no_stretch_single_column_only_fits() {
        let table = TableFactory::construct(layout(&["Name"], false)).unwrap();
        assert_eq!(table.column_sizing(0), Some(ColumnSizing::FitToContent));
        assert_eq!(table.column_sizing(1), None);
    }

    #[test]
    fn default_layout_is_one_stretched_empty_column() {
        let table = default_table();
        assert_eq!(table.headers(), ["Empty"]);
        assert_eq!(table.column_count(), 1);
        assert_eq!(table.column_sizing(0), Some(ColumnSizing::Stretch));
        assert_eq!(table.row_count(), 0);
    }

    #[test]
    fn default_labels_do_not_leak_between_tables() {
        let mut first = default_table();
        first.append_row("Aldara");
        let second = default_table();
        assert_eq!(second.headers(), ["Empty"]);
        assert_eq!(second.row_count(), 0);
    }

    #[test]
    fn overriding_labels_keeps_other_defaults() {
        let table =
            TableFactory::construct(TableLayout { labels: &["Planets"], ..Default::default() })
                .unwrap();
        assert_eq!(table.headers(), ["Planets"]);
        assert_eq!(table.column_sizing(0), Some(ColumnSizing::Stretch));
    }

    #[test]
    fn label_count_must_match_columns() {
        let mismatch = TableLayout { labels: &["A"], columns: 2, stretch: true };
        assert_eq!(
            TableFactory::construct(mismatch).unwrap_err(),
            TableError::LabelMismatch { labels: 1, columns: 2 }
        );
        assert_eq!(
            TableFactory::construct(layout(&[], true)).unwrap_err(),
            TableError::NoColumns
        );
    }

    #[test]
    fn rows_start_unchecked_and_toggle() {
        let mut table = default_table();
        let row = table.append_row("Brisk");
        assert_eq!(table.is_checked(row), Some(false));
        assert_eq!(table.toggle(row), Some(true));
        assert_eq!(table.toggle(row), Some(false));
        assert_eq!(table.toggle(5), None);
        assert!(!table.set_checked(5, true));
    }

    #[test]
    fn sorting_changes_display_order_only() {
        let mut table = default_table();
        for name in ["cygnar", "Aldara", "brisk"] {
            table.append_row(name);
        }

        table.sort_by(0);
        assert_eq!(table.display_order(), [1, 2, 0]);
        assert_eq!(table.row_text(0), Some("cygnar"));

        table.sort_by(0);
        assert_eq!(table.current_sort(), Some((0, SortDirection::Descending)));
        assert_eq!(table.display_order(), [0, 2, 1]);

        // New rows land in sorted position
        table.append_row("Dorrin");
        assert_eq!(table.display_order(), [3, 0, 2, 1]);
    }

    #[test]
    fn sort_ignores_unknown_column() {
        let mut table = default_table();
        table.append_row("b");
        table.sort_by(3);
        assert_eq!(table.current_sort(), None);
    }

    fn run_frames(
        table: &mut CheckableTable,
        frames: impl IntoIterator<Item = Vec<egui::Event>>,
    ) -> Vec<usize> {
        let ctx = egui::Context::default();
        let mut clicked = Vec::new();
        for events in frames {
            let input = egui::RawInput {
                screen_rect: Some(egui::Rect::from_min_size(
                    egui::Pos2::ZERO,
                    egui::vec2(800.0, 600.0),
                )),
                events,
                ..Default::default()
            };
            let _ = ctx.run(input, |ctx| {
                egui::CentralPanel::default().show(ctx, |ui| {
                    clicked.extend(table.show(ui, 200.0));
                });
            });
        }
        clicked
    }

    fn click_at(pos: egui::Pos2) -> Vec<Vec<egui::Event>> {
        let button = |pressed| egui::Event::PointerButton {
            pos,
            button: egui::PointerButton::Primary,
            pressed,
            modifiers: egui::Modifiers::NONE,
        };
        vec![vec![], vec![egui::Event::PointerMoved(pos)], vec![button(true)], vec![button(false)]]
    }

    #[test]
    fn renders_headless_without_clicks() {
        let mut table = TableFactory::construct(layout(&["Name", "Owner"], false)).unwrap();
        table.append_row("Aldara");
        table.append_row("Brisk");
        assert!(run_frames(&mut table, [vec![]]).is_empty());
    }

    #[test]
    fn clicked_row_is_reported_by_insertion_index_when_sorted() {
        let mut table = default_table();
        for name in ["cygnar", "Aldara", "brisk"] {
            table.append_row(name);
        }
        table.sort_by(0);

        // Panel margin plus header puts the first displayed row (Aldara) at y 36..60
        let clicked = run_frames(&mut table, click_at(egui::pos2(20.0, 48.0)));
        assert_eq!(clicked, [1]);
        // The table leaves the check state to its owner
        assert_eq!(table.is_checked(1), Some(false));
    }
}
