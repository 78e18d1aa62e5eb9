//! Shared position conversion helpers.
//!
//! Tree-sitter positions are zero-based `usize` values. Spans keep them
//! zero-based as `u32`; error messages use one-based coordinates.

use shellfacts_core::{LineCol, Span};

/// Converts a Tree-sitter position (0-based) to one-based display coordinates.
#[must_use]
pub(crate) fn point_to_one_based(pos: tree_sitter::Point) -> (u32, u32) {
    // Line/column numbers will realistically never exceed u32::MAX.
    let line = u32::try_from(pos.row.saturating_add(1)).unwrap_or(u32::MAX);
    let column = u32::try_from(pos.column.saturating_add(1)).unwrap_or(u32::MAX);
    (line, column)
}

fn point_to_line_col(pos: tree_sitter::Point) -> LineCol {
    LineCol::new(saturating_u32(pos.row), saturating_u32(pos.column))
}

fn saturating_u32(value: usize) -> u32 {
    u32::try_from(value).unwrap_or(u32::MAX)
}

/// Returns the zero-based span of a syntax node.
#[must_use]
pub fn node_span(node: tree_sitter::Node<'_>) -> Span {
    Span::new(
        saturating_u32(node.start_byte()),
        saturating_u32(node.end_byte()),
        point_to_line_col(node.start_position()),
        point_to_line_col(node.end_position()),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_based_adds_one_to_row_and_column() {
        assert_eq!(point_to_one_based(tree_sitter::Point::new(0, 0)), (1, 1));
        assert_eq!(point_to_one_based(tree_sitter::Point::new(4, 7)), (5, 8));
    }

    #[test]
    fn line_col_stays_zero_based() {
        let pos = point_to_line_col(tree_sitter::Point::new(2, 3));
        assert_eq!((pos.line(), pos.column()), (2, 3));
    }

    #[test]
    fn oversized_values_saturate() {
        assert_eq!(saturating_u32(usize::MAX), u32::MAX);
    }
}
