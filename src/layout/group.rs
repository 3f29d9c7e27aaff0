//! Axis groups: ordered children stacked along a main axis
//!
//! A group accumulates the natural sizes of its children bottom-up and grows
//! monotonically while doing so. Every mutation re-runs the distribution
//! pass, which rewrites child positions (and, for stretched alignments, child
//! sizes) along both axes. Child positions are relative to the group; use
//! [`AxisGroup::placements`] to resolve absolute geometry.

use log::trace;

use super::content_box::ContentBox;
use super::element::Element;
use super::error::{Dimension, LayoutError};
use super::types::{Alignment, BoundingBox, Direction, ElementId, Offsets, Point, Size};

/// A child of a group: either a leaf box or a nested group
#[derive(Debug, Clone, PartialEq)]
pub enum LayoutNode {
    Element(Element),
    Group(AxisGroup),
}

impl From<Element> for LayoutNode {
    fn from(element: Element) -> Self {
        LayoutNode::Element(element)
    }
}

impl From<AxisGroup> for LayoutNode {
    fn from(group: AxisGroup) -> Self {
        LayoutNode::Group(group)
    }
}

impl LayoutNode {
    pub fn id(&self) -> ElementId {
        match self {
            LayoutNode::Element(e) => e.id(),
            LayoutNode::Group(g) => g.id(),
        }
    }

    pub fn parent_id(&self) -> Option<ElementId> {
        match self {
            LayoutNode::Element(e) => e.parent_id(),
            LayoutNode::Group(g) => g.parent_id(),
        }
    }

    /// Position relative to the parent group, and current size
    pub fn bounds(&self) -> BoundingBox {
        match self {
            LayoutNode::Element(e) => e.bounds(),
            LayoutNode::Group(g) => g.bounds(),
        }
    }

    pub fn x(&self) -> f64 {
        self.bounds().x
    }

    pub fn y(&self) -> f64 {
        self.bounds().y
    }

    pub fn width(&self) -> f64 {
        self.bounds().width
    }

    pub fn height(&self) -> f64 {
        self.bounds().height
    }

    pub fn as_element(&self) -> Option<&Element> {
        match self {
            LayoutNode::Element(e) => Some(e),
            LayoutNode::Group(_) => None,
        }
    }

    pub fn as_group(&self) -> Option<&AxisGroup> {
        match self {
            LayoutNode::Group(g) => Some(g),
            LayoutNode::Element(_) => None,
        }
    }

    pub fn is_group(&self) -> bool {
        matches!(self, LayoutNode::Group(_))
    }

    fn size(&self) -> Size {
        let bounds = self.bounds();
        Size::new(bounds.width, bounds.height)
    }

    /// Size the child asks for: a leaf's built size, a group's current size
    fn natural_size(&self) -> Size {
        match self {
            LayoutNode::Element(e) => e.natural_size(),
            LayoutNode::Group(g) => g.size(),
        }
    }

    fn subtree_count(&self) -> usize {
        match self {
            LayoutNode::Element(_) => 0,
            LayoutNode::Group(g) => g.subtree_count(),
        }
    }

    fn set_parent_id(&mut self, parent: ElementId) {
        match self {
            LayoutNode::Element(e) => e.set_parent_id(parent),
            LayoutNode::Group(g) => g.parent_id = Some(parent),
        }
    }

    fn set_position(&mut self, direction: Direction, value: f64) {
        match (self, direction) {
            (LayoutNode::Element(e), Direction::Horizontal) => e.set_x(value),
            (LayoutNode::Element(e), Direction::Vertical) => e.set_y(value),
            (LayoutNode::Group(g), Direction::Horizontal) => g.set_x(value),
            (LayoutNode::Group(g), Direction::Vertical) => g.set_y(value),
        }
    }

    /// Force the child's length along `direction`
    ///
    /// Leaves take any length. Groups only grow; asking a group for less
    /// than it already has is an invariant violation.
    fn resize(&mut self, direction: Direction, value: f64) -> Result<(), LayoutError> {
        match self {
            LayoutNode::Element(e) => {
                match direction {
                    Direction::Horizontal => e.set_width(value),
                    Direction::Vertical => e.set_height(value),
                }
                Ok(())
            }
            LayoutNode::Group(g) => {
                if value == g.length(direction) {
                    return Ok(());
                }
                match direction {
                    Direction::Horizontal => g.set_width(value),
                    Direction::Vertical => g.set_height(value),
                }
            }
        }
    }
}

/// Absolute geometry of one box of a resolved group tree
#[derive(Debug, Clone, PartialEq)]
pub struct Placement {
    pub id: ElementId,
    pub parent_id: Option<ElementId>,
    pub external_id: Option<String>,
    pub name: Option<String>,
    pub kind: Option<String>,
    /// Nesting level below the group `placements` was called on
    pub depth: usize,
    pub is_group: bool,
    pub bounds: BoundingBox,
}

/// A container that stacks children along its main axis
#[derive(Debug, Clone, PartialEq)]
pub struct AxisGroup {
    id: ElementId,
    parent_id: Option<ElementId>,
    pub(crate) external_id: Option<String>,
    pub(crate) name: Option<String>,
    pub(crate) kind: Option<String>,
    pub(crate) lateral_label: bool,
    direction: Direction,
    main_alignment: Alignment,
    cross_alignment: Alignment,
    spacing: f64,
    offsets: Offsets,
    children: Vec<LayoutNode>,
    position: Point,
    width: f64,
    height: f64,
    used_main: f64,
    used_cross: f64,
    content_box: ContentBox,
    size_reference: f64,
    max_child_main_size: f64,
    has_nested_group: bool,
    subtree_count: usize,
}

impl AxisGroup {
    /// Create an empty group
    ///
    /// Alignments are given per physical axis; `direction` decides which of
    /// them drives the main axis.
    pub fn with_offsets(
        direction: Direction,
        horizontal: Alignment,
        vertical: Alignment,
        spacing: f64,
        offsets: Offsets,
    ) -> Self {
        let (main_alignment, cross_alignment) = direction.main_cross(horizontal, vertical);
        let width = offsets.left + offsets.right;
        let height = offsets.top + offsets.bottom;

        Self {
            id: ElementId::generate(),
            parent_id: None,
            external_id: None,
            name: None,
            kind: None,
            lateral_label: false,
            direction,
            main_alignment,
            cross_alignment,
            spacing,
            offsets,
            children: Vec::new(),
            position: Point::default(),
            width,
            height,
            used_main: 0.0,
            used_cross: 0.0,
            content_box: ContentBox::new(Size::new(width, height), offsets),
            size_reference: 0.0,
            max_child_main_size: 0.0,
            has_nested_group: false,
            subtree_count: 0,
        }
    }

    pub fn id(&self) -> ElementId {
        self.id
    }

    pub fn parent_id(&self) -> Option<ElementId> {
        self.parent_id
    }

    pub fn external_id(&self) -> Option<&str> {
        self.external_id.as_deref()
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn kind(&self) -> Option<&str> {
        self.kind.as_deref()
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn main_alignment(&self) -> Alignment {
        self.main_alignment
    }

    pub fn cross_alignment(&self) -> Alignment {
        self.cross_alignment
    }

    pub fn offsets(&self) -> Offsets {
        self.offsets
    }

    pub fn children(&self) -> &[LayoutNode] {
        &self.children
    }

    pub fn child(&self, index: usize) -> Option<&LayoutNode> {
        self.children.get(index)
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    pub fn x(&self) -> f64 {
        self.position.x
    }

    pub fn y(&self) -> f64 {
        self.position.y
    }

    pub fn set_x(&mut self, value: f64) {
        self.position.x = value;
    }

    pub fn set_y(&mut self, value: f64) {
        self.position.y = value;
    }

    /// Move the group; children follow since they are stored relative to it
    pub fn translate(&mut self, dx: f64, dy: f64) {
        self.position.x += dx;
        self.position.y += dy;
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    pub fn bounds(&self) -> BoundingBox {
        BoundingBox::new(self.position.x, self.position.y, self.width, self.height)
    }

    fn length(&self, direction: Direction) -> f64 {
        direction.length_of(self.size())
    }

    /// Length the children occupy horizontally, spacing included
    pub fn used_width(&self) -> f64 {
        self.direction.main_cross(self.used_main, self.used_cross).0
    }

    /// Length the children occupy vertically, spacing included
    pub fn used_height(&self) -> f64 {
        self.direction.main_cross(self.used_main, self.used_cross).1
    }

    pub fn used_main_length(&self) -> f64 {
        self.used_main
    }

    pub fn used_cross_length(&self) -> f64 {
        self.used_cross
    }

    pub fn content_box(&self) -> ContentBox {
        self.content_box
    }

    /// Length every child gets along the main axis when it is expanded
    pub fn size_reference(&self) -> f64 {
        self.size_reference
    }

    pub fn max_child_main_size(&self) -> f64 {
        self.max_child_main_size
    }

    pub fn has_nested_group(&self) -> bool {
        self.has_nested_group
    }

    /// Number of leaves and groups below this group
    pub fn subtree_count(&self) -> usize {
        self.subtree_count
    }

    /// Grow the group's width
    ///
    /// Fails with [`LayoutError::InvalidOperation`] unless `value` is
    /// strictly greater than the current width.
    pub fn set_width(&mut self, value: f64) -> Result<(), LayoutError> {
        if value <= self.width {
            return Err(LayoutError::shrink(Dimension::Width, self.width, value));
        }
        self.width = value;
        self.refresh()
    }

    /// Grow the group's height
    ///
    /// Fails with [`LayoutError::InvalidOperation`] unless `value` is
    /// strictly greater than the current height.
    pub fn set_height(&mut self, value: f64) -> Result<(), LayoutError> {
        if value <= self.height {
            return Err(LayoutError::shrink(Dimension::Height, self.height, value));
        }
        self.height = value;
        self.refresh()
    }

    /// Append a child and redistribute every child
    pub fn add_container(&mut self, child: impl Into<LayoutNode>) -> Result<(), LayoutError> {
        let mut child = child.into();
        child.set_parent_id(self.id);

        let size = child.size();
        let (main, cross) = self.direction.main_cross(size.width, size.height);
        if !self.children.is_empty() {
            self.used_main += self.spacing;
        }
        self.used_main += main;
        self.used_cross = self.used_cross.max(cross);
        self.has_nested_group |= child.is_group();
        self.subtree_count += 1 + child.subtree_count();
        self.children.push(child);

        self.grow_to_content();
        self.refresh()
    }

    /// Same as [`AxisGroup::add_container`], ignoring an absent child
    pub fn add_optional<C: Into<LayoutNode>>(&mut self, child: Option<C>) -> Result<(), LayoutError> {
        match child {
            Some(child) => self.add_container(child),
            None => Ok(()),
        }
    }

    /// Look up a group by id in this subtree
    pub fn find_group(&self, id: ElementId) -> Option<&AxisGroup> {
        if self.id == id {
            return Some(self);
        }
        self.children
            .iter()
            .filter_map(LayoutNode::as_group)
            .find_map(|g| g.find_group(id))
    }

    /// Resolve absolute boxes for this group and everything below it
    pub fn placements(&self, origin: Point) -> Vec<Placement> {
        let mut out = Vec::with_capacity(self.subtree_count + 1);
        self.collect_placements(origin, 0, &mut out);
        out
    }

    fn collect_placements(&self, origin: Point, depth: usize, out: &mut Vec<Placement>) {
        let absolute = Point::new(origin.x + self.position.x, origin.y + self.position.y);
        out.push(Placement {
            id: self.id,
            parent_id: self.parent_id,
            external_id: self.external_id.clone(),
            name: self.name.clone(),
            kind: self.kind.clone(),
            depth,
            is_group: true,
            bounds: BoundingBox::new(absolute.x, absolute.y, self.width, self.height),
        });

        for child in &self.children {
            match child {
                LayoutNode::Element(e) => out.push(Placement {
                    id: e.id(),
                    parent_id: e.parent_id(),
                    external_id: e.external_id().map(str::to_string),
                    name: Some(e.name().to_string()),
                    kind: e.kind().map(str::to_string),
                    depth: depth + 1,
                    is_group: false,
                    bounds: BoundingBox::new(absolute.x + e.x(), absolute.y + e.y(), e.width(), e.height()),
                }),
                LayoutNode::Group(g) => g.collect_placements(absolute, depth + 1, out),
            }
        }
    }

    /// Grow the outer box so that used lengths plus offsets fit inside it
    fn grow_to_content(&mut self) {
        let cross = self.direction.cross();
        let required_main =
            self.used_main + self.offsets.leading(self.direction) + self.offsets.trailing(self.direction);
        let required_cross = self.used_cross + self.offsets.leading(cross) + self.offsets.trailing(cross);

        if required_main > self.length(self.direction) {
            self.set_length(self.direction, required_main);
        }
        if required_cross > self.length(cross) {
            self.set_length(cross, required_cross);
        }
    }

    fn set_length(&mut self, direction: Direction, value: f64) {
        match direction {
            Direction::Horizontal => self.width = value,
            Direction::Vertical => self.height = value,
        }
    }

    fn refresh(&mut self) -> Result<(), LayoutError> {
        self.content_box = ContentBox::new(self.size(), self.offsets);
        self.update_size_reference();
        self.distribute()
    }

    fn update_size_reference(&mut self) {
        let count = self.children.len();
        if count == 0 {
            self.size_reference = 0.0;
            self.max_child_main_size = 0.0;
            return;
        }

        let direction = self.direction;
        self.max_child_main_size = self
            .children
            .iter()
            .map(|c| direction.length_of(c.natural_size()))
            .fold(0.0, f64::max);

        let gaps = (count - 1) as f64 * self.spacing;
        let share = (self.content_box.length(direction) - gaps) / count as f64;

        if self.has_nested_group && share < self.max_child_main_size {
            self.size_reference = self.max_child_main_size;

            // Stretched nested groups must stay inside the box
            if self.main_alignment == Alignment::Expanded {
                let required = self.size_reference * count as f64
                    + gaps
                    + self.offsets.leading(direction)
                    + self.offsets.trailing(direction);
                if required > self.length(direction) {
                    self.set_length(direction, required);
                    self.content_box = ContentBox::new(self.size(), self.offsets);
                }
            }
        } else {
            self.size_reference = share;
        }
    }

    /// Reposition every child along both axes
    pub fn distribute(&mut self) -> Result<(), LayoutError> {
        self.distribute_main_axis()?;
        self.distribute_cross_axis()
    }

    /// Reposition (and for [`Alignment::Expanded`], resize) children along the main axis
    pub fn distribute_main_axis(&mut self) -> Result<(), LayoutError> {
        let direction = self.direction;
        let spacing = self.spacing;
        let start = self.content_box.start(direction);
        let end = self.content_box.end(direction);

        match self.main_alignment {
            Alignment::Start => {
                stack_from(&mut self.children, direction, start, spacing);
            }
            Alignment::Center => {
                let used = self
                    .children
                    .iter()
                    .map(|c| direction.length_of(c.size()))
                    .sum::<f64>()
                    + self.children.len().saturating_sub(1) as f64 * spacing;
                let offset = start + (self.content_box.length(direction) - used) / 2.0;
                stack_from(&mut self.children, direction, offset, spacing);
            }
            Alignment::End => {
                // First child ends up nearest the far edge
                let mut cursor = end;
                for child in &mut self.children {
                    cursor -= direction.length_of(child.size());
                    child.set_position(direction, cursor);
                    cursor -= spacing;
                }
            }
            Alignment::Expanded => {
                let reference = self.size_reference;
                let mut cursor = start;
                for child in &mut self.children {
                    child.resize(direction, reference)?;
                    child.set_position(direction, cursor);
                    cursor += reference + spacing;
                }
            }
        }

        trace!(
            "group {} main axis {:?}: {} children, size reference {}",
            self.id,
            self.main_alignment,
            self.children.len(),
            self.size_reference
        );
        Ok(())
    }

    /// Reposition (and for [`Alignment::Expanded`], resize) children along the cross axis
    ///
    /// Alignment spans the used cross length: the breadth of the widest child.
    pub fn distribute_cross_axis(&mut self) -> Result<(), LayoutError> {
        let cross = self.direction.cross();
        let offset = self.content_box.start(cross);
        let band = self.used_cross;

        for child in &mut self.children {
            let size = cross.length_of(child.size());
            let position = match self.cross_alignment {
                Alignment::Start => offset,
                Alignment::End => offset + band - size,
                Alignment::Center => offset + band / 2.0 - size / 2.0,
                Alignment::Expanded => {
                    child.resize(cross, band)?;
                    offset
                }
            };
            child.set_position(cross, position);
        }
        Ok(())
    }
}

fn stack_from(children: &mut [LayoutNode], direction: Direction, start: f64, spacing: f64) {
    let mut cursor = start;
    for child in children {
        child.set_position(direction, cursor);
        cursor += direction.length_of(child.size()) + spacing;
    }
}
