//! Hierarchical row-wrap layout
//!
//! Subtrees are arranged into rows bounded by a column budget. The first pass
//! walks the tree bottom-up to size every subtree; the second walks it
//! top-down and hands out absolute positions through a [`PlotCursor`].
//! Siblings are visited heaviest first in both passes.

use log::{debug, trace};

use super::config::Settings;
use super::cursor::PlotCursor;
use super::types::{BoundingBox, Offsets, Point, Size};

/// Height bound of the placement band; large enough to never wrap pages
const MAX_PAPER_HEIGHT: f64 = 100_000.0;

/// A node of the tree arranged by [`HierarchyLayoutEngine`]
#[derive(Debug, Clone, PartialEq, Default)]
pub struct HierarchyNode {
    pub id: String,
    pub name: String,
    pub kind: String,
    pub children: Vec<HierarchyNode>,
    /// Total number of descendants, the node itself excluded
    pub nested_count: usize,
    pub width: f64,
    /// Height of the node's own box (leaf box or header band)
    pub height: f64,
    /// Vertical space taken by the node together with its nested rows
    pub vertical_coverage: f64,
    pub x: f64,
    pub y: f64,
}

impl HierarchyNode {
    pub fn new(id: impl Into<String>, name: impl Into<String>, kind: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            kind: kind.into(),
            ..Default::default()
        }
    }

    /// Replace the children and recount descendants
    pub fn with_children(mut self, children: Vec<HierarchyNode>) -> Self {
        self.children = children;
        self.nested_count = self.count_descendants();
        self
    }

    /// Count descendants from the children's own counts
    pub fn count_descendants(&self) -> usize {
        self.children.iter().map(|c| c.nested_count + 1).sum()
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Absolute box covering the node and its nested rows
    pub fn bounds(&self) -> BoundingBox {
        BoundingBox::new(self.x, self.y, self.width, self.vertical_coverage)
    }
}

/// Size of a level of siblings, as computed by the dimension pass
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SubtreeDimensions {
    pub width: f64,
    pub vertical_coverage: f64,
    pub max_column_count: usize,
}

/// What the placement pass reports back for one level of siblings
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RowsSummary {
    pub max_column_count: usize,
    pub row_count: usize,
    pub max_width: f64,
    pub max_height: f64,
}

/// Columns consumed in the current row of one sibling level
///
/// Both passes drive their budgets through this type so that every subtree
/// receives the same column cap in each pass.
#[derive(Debug)]
struct ColumnBudget {
    max_columns: usize,
    child_cap: usize,
    used: usize,
}

impl ColumnBudget {
    fn new(max_columns: usize, child_cap: usize) -> Self {
        Self {
            max_columns,
            child_cap,
            used: 0,
        }
    }

    fn remaining(&self) -> usize {
        self.max_columns.saturating_sub(self.used)
    }

    /// Column cap for a subtree with `nested_count` descendants
    ///
    /// A subtree too large for what is left of the row gets all of it.
    fn cap_for(&self, nested_count: usize) -> usize {
        let remaining = self.remaining().max(1);
        if nested_count > remaining {
            remaining
        } else {
            self.child_cap
        }
    }

    /// Record `columns` and report whether the row must close
    fn consume(&mut self, columns: usize, last: bool) -> bool {
        self.used += columns;
        self.used >= self.max_columns || last
    }

    fn reset(&mut self) {
        self.used = 0;
    }
}

/// Heaviest subtrees first; ties keep their given order
fn sort_by_weight(nodes: &mut [HierarchyNode]) {
    nodes.sort_by(|a, b| b.nested_count.cmp(&a.nested_count));
}

/// Arranges a forest of [`HierarchyNode`]s into column-wrapped rows
#[derive(Debug, Clone, Copy)]
pub struct HierarchyLayoutEngine<'a> {
    settings: &'a Settings,
}

impl<'a> HierarchyLayoutEngine<'a> {
    pub fn new(settings: &'a Settings) -> Self {
        Self { settings }
    }

    /// Size and place every node; returns the paper size
    ///
    /// Roots are placed inside a page margin of
    /// `size_reference.padding_x/padding_y`.
    pub fn process_layout(&self, roots: &mut [HierarchyNode]) -> Size {
        let sizes = &self.settings.size_reference;
        let max_columns = self.settings.max_horizontal_count;
        debug!(
            "hierarchy layout: {} roots, {} columns",
            roots.len(),
            max_columns
        );

        let dimensions = self.compute_dimensions(roots, max_columns);
        let rows_height =
            dimensions.vertical_coverage - sizes.inner_top_padding_y - sizes.inner_bottom_padding_y;
        let paper = Size::new(
            dimensions.width + 2.0 * sizes.padding_x,
            rows_height + 2.0 * sizes.padding_y,
        );

        let summary =
            self.render_rows(roots, max_columns, Point::new(sizes.padding_x, sizes.padding_y));
        debug!(
            "hierarchy layout done: paper {}x{}, {} root rows",
            paper.width, paper.height, summary.row_count
        );
        paper
    }

    /// Bottom-up pass: width, height and vertical coverage of every node
    ///
    /// Sorts `nodes` heaviest first in place.
    pub fn compute_dimensions(
        &self,
        nodes: &mut [HierarchyNode],
        max_columns: usize,
    ) -> SubtreeDimensions {
        sort_by_weight(nodes);

        let sizes = &self.settings.size_reference;
        let mut result = SubtreeDimensions {
            width: 0.0,
            vertical_coverage: sizes.inner_top_padding_y,
            max_column_count: 0,
        };
        let mut budget = ColumnBudget::new(max_columns, self.settings.max_child_horizontal_count);
        let mut cursor_x = 0.0;
        let mut row_height = 0.0f64;
        let last = nodes.len().saturating_sub(1);

        for (index, node) in nodes.iter_mut().enumerate() {
            let nested = if node.is_leaf() {
                node.height = sizes.default_height;
                SubtreeDimensions {
                    width: sizes.default_width,
                    vertical_coverage: sizes.default_height,
                    max_column_count: 1,
                }
            } else {
                let cap = budget.cap_for(node.nested_count);
                trace!("node '{}' sized with {} columns", node.id, cap);
                node.height = sizes.inner_top_padding_y;
                self.compute_dimensions(&mut node.children, cap)
            };

            node.width = nested.width;
            node.vertical_coverage = nested.vertical_coverage;

            let row_closed = budget.consume(nested.max_column_count, index == last);
            result.max_column_count = result.max_column_count.max(budget.used);

            cursor_x += nested.width;
            result.width = result.width.max(cursor_x);
            row_height = row_height.max(nested.vertical_coverage + sizes.padding_y);

            if row_closed {
                result.vertical_coverage += row_height;
                cursor_x = 0.0;
                row_height = 0.0;
                budget.reset();
            } else {
                cursor_x += sizes.margin_x;
            }
        }

        result.vertical_coverage += sizes.inner_bottom_padding_y;
        result
    }

    /// Top-down pass: absolute position of every node
    ///
    /// Must run after [`Self::compute_dimensions`] on the same tree; the
    /// re-sort is stable and keeps the order of the first pass.
    pub fn render_rows(
        &self,
        nodes: &mut [HierarchyNode],
        max_columns: usize,
        origin: Point,
    ) -> RowsSummary {
        sort_by_weight(nodes);

        let sizes = &self.settings.size_reference;
        let mut cursor = PlotCursor::new(
            origin,
            max_columns as f64 * sizes.element_unit_width(),
            MAX_PAPER_HEIGHT,
            Offsets::new(0.0, 0.0, sizes.margin_y, sizes.margin_x),
        );
        let mut budget = ColumnBudget::new(max_columns, self.settings.max_child_horizontal_count);
        let mut summary = RowsSummary::default();
        let last = nodes.len().saturating_sub(1);

        for (index, node) in nodes.iter_mut().enumerate() {
            let nested_rows = node.vertical_coverage - node.height;
            let position = cursor.calculate_position(Size::new(node.width, node.height + nested_rows));
            node.x = position.x;
            node.y = position.y;
            trace!("node '{}' placed at ({}, {})", node.id, node.x, node.y);

            let columns = if node.is_leaf() {
                1
            } else {
                let cap = budget.cap_for(node.nested_count);
                let below = Point::new(node.x, node.y + node.height);
                self.render_rows(&mut node.children, cap, below).max_column_count
            };

            let row_closed = budget.consume(columns, index == last);
            summary.max_column_count = summary.max_column_count.max(budget.used);
            if row_closed {
                budget.reset();
                // Break where the dimension pass closed the row
                cursor.new_row();
            }
        }

        let extent = cursor.extent();
        summary.row_count = cursor.row_count();
        summary.max_width = extent.width;
        summary.max_height = extent.height;
        summary
    }
}
