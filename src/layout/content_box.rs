//! Inner rectangle of a group, after its offsets are subtracted

use super::types::{Direction, Offsets, Point, Size};

/// The padded area children are aligned against
///
/// Both corners are relative to the owning group's origin.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ContentBox {
    pub top_left: Point,
    pub bottom_right: Point,
}

impl ContentBox {
    /// Derive the content box of an outer box of `size` with `offsets`
    pub fn new(size: Size, offsets: Offsets) -> Self {
        Self {
            top_left: Point::new(offsets.left, offsets.top),
            bottom_right: Point::new(size.width - offsets.right, size.height - offsets.bottom),
        }
    }

    /// Leading edge along `direction`
    pub fn start(&self, direction: Direction) -> f64 {
        match direction {
            Direction::Horizontal => self.top_left.x,
            Direction::Vertical => self.top_left.y,
        }
    }

    /// Trailing edge along `direction`
    pub fn end(&self, direction: Direction) -> f64 {
        match direction {
            Direction::Horizontal => self.bottom_right.x,
            Direction::Vertical => self.bottom_right.y,
        }
    }

    /// Usable length along `direction`, never negative
    pub fn length(&self, direction: Direction) -> f64 {
        (self.end(direction) - self.start(direction)).max(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_box_from_offsets() {
        let content = ContentBox::new(Size::new(200.0, 100.0), Offsets::new(35.0, 5.0, 5.0, 10.0));

        assert_eq!(content.start(Direction::Horizontal), 5.0);
        assert_eq!(content.end(Direction::Horizontal), 190.0);
        assert_eq!(content.length(Direction::Horizontal), 185.0);
        assert_eq!(content.start(Direction::Vertical), 35.0);
        assert_eq!(content.end(Direction::Vertical), 95.0);
        assert_eq!(content.length(Direction::Vertical), 60.0);
    }

    #[test]
    fn test_empty_box_has_no_length() {
        let content = ContentBox::new(Size::default(), Offsets::new(5.0, 5.0, 5.0, 5.0));
        assert_eq!(content.length(Direction::Horizontal), 0.0);
        assert_eq!(content.length(Direction::Vertical), 0.0);
    }
}
