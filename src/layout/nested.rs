//! Nested layout: every inner node becomes a labelled group

use log::debug;

use super::config::Settings;
use super::element::Element;
use super::error::LayoutError;
use super::group::{AxisGroup, LayoutNode};
use super::hierarchy::HierarchyNode;
use super::row::GroupLabel;
use super::types::{Alignment, BoundingBox, Point, Size};

/// Boxes inner nodes inside visible groups stacked along `settings.direction`
#[derive(Debug, Clone, Copy)]
pub struct NestedLayoutEngine<'a> {
    settings: &'a Settings,
}

impl<'a> NestedLayoutEngine<'a> {
    pub fn new(settings: &'a Settings) -> Self {
        Self { settings }
    }

    /// Build the page group holding one child per root
    pub fn build(&self, roots: &[HierarchyNode]) -> Result<AxisGroup, LayoutError> {
        let mut page = AxisGroup::new(
            self.settings.direction,
            Alignment::Start,
            Alignment::Start,
            self.settings,
        );
        for root in roots {
            page.add_container(self.build_node(root)?)?;
        }
        Ok(page)
    }

    fn build_node(&self, node: &HierarchyNode) -> Result<LayoutNode, LayoutError> {
        let sizes = &self.settings.size_reference;
        if node.is_leaf() {
            let element = Element::new(node.name.as_str(), sizes.default_width, sizes.default_height)
                .with_external_id(node.id.as_str())
                .with_kind(node.kind.as_str());
            return Ok(element.into());
        }

        let label = GroupLabel::new(node.name.as_str(), node.kind.as_str())
            .lateral(self.settings.lateral_label)
            .with_external_id(node.id.as_str());
        let mut group = AxisGroup::visible(
            self.settings.direction,
            Alignment::Start,
            Alignment::Start,
            self.settings,
            label,
        );
        for child in &node.children {
            group.add_container(self.build_node(child)?)?;
        }
        Ok(group.into())
    }

    /// Lay out `roots` and write absolute boxes back onto every node
    ///
    /// Returns the paper size, page margins included.
    pub fn process_layout(&self, roots: &mut [HierarchyNode]) -> Result<Size, LayoutError> {
        let sizes = &self.settings.size_reference;
        let page = self.build(roots)?;
        debug!(
            "nested layout: {} boxes in {}x{}",
            page.subtree_count(),
            page.width(),
            page.height()
        );

        // Placements come out in pre-order, page first, like the node tree
        let placements = page.placements(Point::new(sizes.padding_x, sizes.padding_y));
        let mut boxes = placements.iter().skip(1).map(|p| p.bounds);
        for root in roots.iter_mut() {
            assign_bounds(root, &mut boxes);
        }

        Ok(Size::new(
            page.width() + 2.0 * sizes.padding_x,
            page.height() + 2.0 * sizes.padding_y,
        ))
    }
}

fn assign_bounds(node: &mut HierarchyNode, boxes: &mut impl Iterator<Item = BoundingBox>) {
    if let Some(bounds) = boxes.next() {
        node.x = bounds.x;
        node.y = bounds.y;
        node.width = bounds.width;
        node.height = bounds.height;
        node.vertical_coverage = bounds.height;
    }
    for child in &mut node.children {
        assign_bounds(child, boxes);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::types::Direction;
    use pretty_assertions::assert_eq;

    fn forest() -> Vec<HierarchyNode> {
        vec![
            HierarchyNode::new("a", "A", "domain").with_children(vec![
                HierarchyNode::new("a1", "A1", "system"),
                HierarchyNode::new("a2", "A2", "system"),
            ]),
            HierarchyNode::new("b", "B", "system"),
        ]
    }

    #[test]
    fn test_build_mirrors_the_tree() {
        let settings = Settings::default();
        let page = NestedLayoutEngine::new(&settings).build(&forest()).unwrap();

        assert_eq!(page.len(), 2);
        assert_eq!(page.subtree_count(), 4);
        let a = page.child(0).and_then(LayoutNode::as_group).unwrap();
        assert_eq!(a.name(), Some("A"));
        assert_eq!(a.external_id(), Some("a"));
        let b = page.child(1).and_then(LayoutNode::as_element).unwrap();
        assert_eq!(b.kind(), Some("system"));
    }

    #[test]
    fn test_process_layout_writes_absolute_boxes() {
        let settings = Settings::default();
        let mut roots = forest();

        let paper = NestedLayoutEngine::new(&settings)
            .process_layout(&mut roots)
            .unwrap();

        assert_eq!(paper, Size::new(464.0, 114.0));
        assert_eq!(roots[0].bounds(), BoundingBox::new(12.0, 12.0, 295.0, 90.0));
        assert_eq!(
            roots[0].children[0].bounds(),
            BoundingBox::new(17.0, 47.0, 140.0, 50.0)
        );
        assert_eq!(
            roots[0].children[1].bounds(),
            BoundingBox::new(162.0, 47.0, 140.0, 50.0)
        );
        assert_eq!(roots[1].bounds(), BoundingBox::new(312.0, 12.0, 140.0, 50.0));
    }

    #[test]
    fn test_vertical_direction_stacks_roots() {
        let settings = Settings::default().with_direction(Direction::Vertical);
        let mut roots = forest();

        NestedLayoutEngine::new(&settings)
            .process_layout(&mut roots)
            .unwrap();

        let a = roots[0].bounds();
        let b = roots[1].bounds();
        assert_eq!(a.x, b.x);
        assert_eq!(b.y, a.bottom() + 5.0);
        for child in &roots[0].children {
            assert!(a.encloses(&child.bounds()));
        }
    }
}
