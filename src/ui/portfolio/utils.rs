//! Portfolio view utility functions
//!
//! Contains helper functions used across the view components

use crate::events::Worker;
use chrono::NaiveDateTime;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::prelude::Color;

/// Get a ratatui color for the worker that emitted an event
pub fn get_worker_color(worker: &Worker) -> Color {
    match worker {
        Worker::DataFetcher => Color::Cyan,
        Worker::LocalStore => Color::Green,
    }
}

/// "YYYY-MM-DD HH:MM:SS" to "MM-DD HH:MM"; anything else is returned as is.
pub fn format_compact_timestamp(timestamp: &str) -> String {
    NaiveDateTime::parse_from_str(timestamp, "%Y-%m-%d %H:%M:%S")
        .map(|parsed| parsed.format("%m-%d %H:%M").to_string())
        .unwrap_or_else(|_| timestamp.to_string())
}

/// Height of a grid of `count` cells, `columns` per row.
pub fn grid_height(count: usize, columns: usize, cell_height: u16) -> u16 {
    if columns == 0 {
        return 0;
    }
    u16::try_from(count.div_ceil(columns))
        .unwrap_or(u16::MAX)
        .saturating_mul(cell_height)
}

/// Lays `count` cells of a fixed height out in rows of `columns`.
///
/// Rows that would not fit in `area` are dropped, so fewer than `count`
/// cells may be returned.
pub fn grid_cells(area: Rect, count: usize, columns: usize, cell_height: u16) -> Vec<Rect> {
    let mut cells = Vec::with_capacity(count);
    if count == 0 || columns == 0 || cell_height == 0 {
        return cells;
    }

    let column_constraints = vec![Constraint::Ratio(1, columns as u32); columns];
    for row in 0..count.div_ceil(columns) {
        let offset = u16::try_from(row)
            .unwrap_or(u16::MAX)
            .saturating_mul(cell_height);
        if offset.saturating_add(cell_height) > area.height {
            break;
        }
        let row_area = Rect::new(area.x, area.y + offset, area.width, cell_height);
        let row_cells = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(column_constraints.clone())
            .split(row_area);
        for cell in row_cells.iter() {
            if cells.len() == count {
                break;
            }
            cells.push(*cell);
        }
    }
    cells
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_compact_timestamp() {
        assert_eq!(format_compact_timestamp("2024-03-09 14:05:59"), "03-09 14:05");
        assert_eq!(format_compact_timestamp("garbage"), "garbage");
    }

    #[test]
    fn test_grid_fills_rows_left_to_right() {
        let cells = grid_cells(Rect::new(0, 0, 90, 30), 8, 3, 7);
        assert_eq!(cells.len(), 8);
        assert_eq!(cells[0], Rect::new(0, 0, 30, 7));
        assert_eq!(cells[2].x, 60);
        assert_eq!(cells[3].y, 7);
        assert_eq!(cells[7].y, 14);
    }

    #[test]
    fn test_grid_drops_rows_that_do_not_fit() {
        let cells = grid_cells(Rect::new(0, 0, 90, 10), 8, 3, 7);
        assert_eq!(cells.len(), 3);
        assert!(grid_cells(Rect::new(0, 0, 90, 10), 0, 3, 7).is_empty());
    }

    #[test]
    fn test_grid_height() {
        assert_eq!(grid_height(6, 3, 7), 14);
        assert_eq!(grid_height(7, 3, 7), 21);
        assert_eq!(grid_height(12, 4, 4), 12);
        assert_eq!(grid_height(0, 3, 7), 0);
    }
}
