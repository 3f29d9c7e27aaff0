//! Row-wrapping placement cursor

use log::warn;

use super::types::{Offsets, Point, Size};

/// Hands out positions row by row inside a bounded band
///
/// Boxes are placed left to right. A box that would cross the row bound
/// starts a new row, unless it is the first box of its row. A cursor holds
/// the state of one placement sequence and must not be shared between
/// independent passes.
#[derive(Debug, Clone)]
pub struct PlotCursor {
    origin: Point,
    cursor: Point,
    max_width: f64,
    max_height: f64,
    padding: Offsets,
    row_height: f64,
    row_len: usize,
    completed_rows: usize,
    extent: Size,
    warned: bool,
}

impl PlotCursor {
    /// `padding.right`/`padding.bottom` separate boxes and rows;
    /// `padding.left`/`padding.top` inset the first row and column.
    pub fn new(origin: Point, max_width: f64, max_height: f64, padding: Offsets) -> Self {
        Self {
            origin,
            cursor: Point::new(origin.x + padding.left, origin.y + padding.top),
            max_width,
            max_height,
            padding,
            row_height: 0.0,
            row_len: 0,
            completed_rows: 0,
            extent: Size::default(),
            warned: false,
        }
    }

    /// Position for the next box of `size`, advancing the cursor past it
    pub fn calculate_position(&mut self, size: Size) -> Point {
        if self.row_len > 0 && self.cursor.x - self.origin.x + size.width > self.max_width {
            self.wrap();
        }

        let position = self.cursor;
        self.cursor.x += size.width + self.padding.right;
        self.row_height = self.row_height.max(size.height);
        self.row_len += 1;

        self.extent.width = self.extent.width.max(position.x + size.width - self.origin.x);
        self.extent.height = self.extent.height.max(position.y + size.height - self.origin.y);
        if self.extent.height > self.max_height && !self.warned {
            self.warned = true;
            warn!(
                "placement exceeds height bound: {} > {}",
                self.extent.height, self.max_height
            );
        }

        position
    }

    /// Close the current row; the next box starts a new one
    ///
    /// Does nothing while the row is empty.
    pub fn new_row(&mut self) {
        if self.row_len > 0 {
            self.wrap();
        }
    }

    fn wrap(&mut self) {
        self.cursor.x = self.origin.x + self.padding.left;
        self.cursor.y += self.row_height + self.padding.bottom;
        self.row_height = 0.0;
        self.row_len = 0;
        self.completed_rows += 1;
    }

    /// Number of rows that hold at least one box
    pub fn row_count(&self) -> usize {
        self.completed_rows + usize::from(self.row_len > 0)
    }

    /// Width and height covered by placed boxes, measured from the origin
    pub fn extent(&self) -> Size {
        self.extent
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cursor() -> PlotCursor {
        PlotCursor::new(
            Point::new(12.0, 12.0),
            328.0,
            100_000.0,
            Offsets::new(0.0, 0.0, 10.0, 12.0),
        )
    }

    #[test]
    fn test_places_left_to_right() {
        let mut cursor = cursor();
        let leaf = Size::new(140.0, 50.0);

        assert_eq!(cursor.calculate_position(leaf), Point::new(12.0, 12.0));
        assert_eq!(cursor.calculate_position(leaf), Point::new(164.0, 12.0));
        assert_eq!(cursor.row_count(), 1);
    }

    #[test]
    fn test_wraps_below_tallest_box() {
        let mut cursor = cursor();

        cursor.calculate_position(Size::new(140.0, 50.0));
        cursor.calculate_position(Size::new(140.0, 80.0));
        let third = cursor.calculate_position(Size::new(140.0, 50.0));

        assert_eq!(third, Point::new(12.0, 102.0));
        assert_eq!(cursor.row_count(), 2);

        // Row height tracker restarts with the new row
        cursor.calculate_position(Size::new(140.0, 20.0));
        let fifth = cursor.calculate_position(Size::new(140.0, 20.0));
        assert_eq!(fifth, Point::new(12.0, 162.0));
    }

    #[test]
    fn test_oversized_box_takes_an_empty_row() {
        let mut cursor = cursor();

        let first = cursor.calculate_position(Size::new(500.0, 30.0));
        let second = cursor.calculate_position(Size::new(10.0, 30.0));

        assert_eq!(first, Point::new(12.0, 12.0));
        assert_eq!(second, Point::new(12.0, 52.0));
    }

    #[test]
    fn test_padding_insets_every_row() {
        let mut cursor = PlotCursor::new(
            Point::default(),
            100.0,
            1_000.0,
            Offsets::new(3.0, 4.0, 0.0, 0.0),
        );

        assert_eq!(cursor.calculate_position(Size::new(60.0, 10.0)), Point::new(4.0, 3.0));
        assert_eq!(cursor.calculate_position(Size::new(60.0, 10.0)), Point::new(4.0, 13.0));
        assert_eq!(cursor.extent(), Size::new(64.0, 23.0));
    }

    #[test]
    fn test_new_row_breaks_before_the_bound() {
        let mut cursor = cursor();
        let leaf = Size::new(140.0, 50.0);

        cursor.new_row();
        assert_eq!(cursor.calculate_position(leaf), Point::new(12.0, 12.0));
        cursor.new_row();
        cursor.new_row();
        assert_eq!(cursor.calculate_position(leaf), Point::new(12.0, 72.0));
        assert_eq!(cursor.row_count(), 2);
    }

    #[test]
    fn test_height_overflow_is_reported_once() {
        let mut cursor = PlotCursor::new(
            Point::default(),
            100.0,
            40.0,
            Offsets::default(),
        );

        cursor.calculate_position(Size::new(60.0, 30.0));
        assert!(!cursor.warned);
        cursor.calculate_position(Size::new(60.0, 30.0));
        assert!(cursor.warned);

        // Placement carries on past the bound
        assert_eq!(cursor.calculate_position(Size::new(60.0, 30.0)), Point::new(0.0, 60.0));
        assert!(cursor.warned);
    }

    #[test]
    fn test_extent() {
        let mut cursor = cursor();
        cursor.calculate_position(Size::new(140.0, 50.0));
        cursor.calculate_position(Size::new(100.0, 70.0));

        assert_eq!(cursor.extent(), Size::new(252.0, 70.0));
    }
}
