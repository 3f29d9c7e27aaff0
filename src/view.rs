//! Flat view of a laid-out hierarchy

use std::fmt;

use crate::layout::{BoundingBox, HierarchyNode, Size};

/// One positioned box of the view
#[derive(Debug, Clone, PartialEq)]
pub struct ViewNode {
    pub id: String,
    pub parent_id: Option<String>,
    pub name: String,
    pub kind: String,
    pub depth: usize,
    pub bounds: BoundingBox,
}

/// The laid-out result: paper size plus every node's absolute box
#[derive(Debug, Clone, PartialEq)]
pub struct View {
    pub title: String,
    pub width: f64,
    pub height: f64,
    pub nodes: Vec<ViewNode>,
}

impl View {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            width: 0.0,
            height: 0.0,
            nodes: Vec::new(),
        }
    }

    /// Flatten a laid-out forest in pre-order
    pub fn from_hierarchy(title: impl Into<String>, roots: &[HierarchyNode], paper: Size) -> Self {
        let mut view = Self::new(title);
        view.set_bounds(paper.width, paper.height);
        for root in roots {
            view.collect(root, None, 0);
        }
        view
    }

    fn collect(&mut self, node: &HierarchyNode, parent: Option<&str>, depth: usize) {
        self.nodes.push(ViewNode {
            id: node.id.clone(),
            parent_id: parent.map(str::to_string),
            name: node.name.clone(),
            kind: node.kind.clone(),
            depth,
            bounds: node.bounds(),
        });
        for child in &node.children {
            self.collect(child, Some(&node.id), depth + 1);
        }
    }

    /// Set the paper size
    pub fn set_bounds(&mut self, width: f64, height: f64) {
        self.width = width.max(0.0);
        self.height = height.max(0.0);
    }

    /// Order nodes so that every parent comes before its children
    ///
    /// Renderers draw in list order, so containers must be drawn first.
    pub fn sort_parents_first(&mut self) {
        self.nodes.sort_by_key(|n| n.depth);
    }

    /// First node with the given id
    pub fn node(&self, id: &str) -> Option<&ViewNode> {
        self.nodes.iter().find(|n| n.id == id)
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "view \"{}\" {}x{}", self.title, self.width, self.height)?;
        for node in &self.nodes {
            write!(
                f,
                "{}{} [{}] x={} y={} w={} h={}",
                "  ".repeat(node.depth),
                node.id,
                node.kind,
                node.bounds.x,
                node.bounds.y,
                node.bounds.width,
                node.bounds.height
            )?;
            if let Some(parent) = &node.parent_id {
                write!(f, " in {}", parent)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn forest() -> Vec<HierarchyNode> {
        vec![
            HierarchyNode::new("a", "A", "domain")
                .with_children(vec![HierarchyNode::new("a1", "A1", "system")]),
            HierarchyNode::new("b", "B", "system"),
        ]
    }

    #[test]
    fn test_from_hierarchy_is_pre_order() {
        let view = View::from_hierarchy("t", &forest(), Size::new(10.0, 20.0));

        let ids: Vec<_> = view.nodes.iter().map(|n| n.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "a1", "b"]);
        assert_eq!(view.node("a1").unwrap().parent_id.as_deref(), Some("a"));
        assert_eq!(view.node("a1").unwrap().depth, 1);
        assert_eq!((view.width, view.height), (10.0, 20.0));
    }

    #[test]
    fn test_sort_parents_first_is_stable() {
        let mut view = View::from_hierarchy("t", &forest(), Size::default());
        view.sort_parents_first();

        let ids: Vec<_> = view.nodes.iter().map(|n| n.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b", "a1"]);
    }

    #[test]
    fn test_display() {
        let view = View::from_hierarchy("t", &forest(), Size::new(10.0, 20.5));
        let text = view.to_string();

        assert!(text.starts_with("view \"t\" 10x20.5\n"));
        assert!(text.contains("  a1 [system] x=0 y=0 w=0 h=0 in a\n"));
    }
}
