//! Turns root-to-leaf paths into a tree of hierarchy nodes

use serde::Deserialize;

use crate::layout::HierarchyNode;

/// One step of a path: the entity at that level
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PathElement {
    pub identifier: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
}

impl PathElement {
    pub fn new(
        identifier: impl Into<String>,
        name: impl Into<String>,
        kind: impl Into<String>,
    ) -> Self {
        Self {
            identifier: identifier.into(),
            name: name.into(),
            kind: kind.into(),
        }
    }
}

/// Merges paths that share a prefix into one forest
///
/// Siblings are matched by identifier and kept in first-seen order.
#[derive(Debug, Clone, Default)]
pub struct SemanticEngine {
    paths: Vec<Vec<PathElement>>,
}

impl SemanticEngine {
    pub fn new(paths: Vec<Vec<PathElement>>) -> Self {
        Self { paths }
    }

    /// Build the forest with every `nested_count` filled in
    pub fn build_tree(&self) -> Vec<HierarchyNode> {
        let mut roots = Vec::new();
        for path in &self.paths {
            insert_path(&mut roots, path);
        }
        for root in &mut roots {
            recount(root);
        }
        roots
    }
}

fn insert_path(level: &mut Vec<HierarchyNode>, path: &[PathElement]) {
    let Some((head, rest)) = path.split_first() else {
        return;
    };

    let index = match level.iter().position(|n| n.id == head.identifier) {
        Some(index) => index,
        None => {
            level.push(HierarchyNode::new(
                head.identifier.as_str(),
                head.name.as_str(),
                head.kind.as_str(),
            ));
            level.len() - 1
        }
    };
    insert_path(&mut level[index].children, rest);
}

fn recount(node: &mut HierarchyNode) -> usize {
    node.nested_count = node.children.iter_mut().map(|c| recount(c) + 1).sum();
    node.nested_count
}
