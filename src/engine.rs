//! Pipeline from semantic paths to a laid-out view

use log::{debug, info};

use crate::error::ViewError;
use crate::layout::{HierarchyLayoutEngine, LayoutType, NestedLayoutEngine, Settings};
use crate::semantic::{PathElement, SemanticEngine};
use crate::view::View;

const UNKNOWN_TITLE: &str = "Unknown";

/// Runs the semantic engine and the configured layout engine
#[derive(Debug, Clone, Default)]
pub struct SmartViewEngine {
    settings: Settings,
}

impl SmartViewEngine {
    pub fn new(settings: Settings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Build the view for `paths`, parents sorted before their children
    ///
    /// An empty title is replaced by `"Unknown"`.
    pub fn generate_view(
        &self,
        paths: Vec<Vec<PathElement>>,
        title: &str,
    ) -> Result<View, ViewError> {
        let title = if title.trim().is_empty() {
            UNKNOWN_TITLE
        } else {
            title
        };

        let mut roots = SemanticEngine::new(paths).build_tree();
        let layout = self.settings.layout();
        debug!("generating view '{}' with {:?} layout", title, layout);

        let paper = match layout {
            LayoutType::Hierarchy => HierarchyLayoutEngine::new(&self.settings).process_layout(&mut roots),
            LayoutType::Nested => NestedLayoutEngine::new(&self.settings).process_layout(&mut roots)?,
        };

        let mut view = View::from_hierarchy(title, &roots, paper);
        view.sort_parents_first();
        info!(
            "view '{}': {} nodes on {}x{}",
            view.title,
            view.nodes.len(),
            view.width,
            view.height
        );
        Ok(view)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn paths() -> Vec<Vec<PathElement>> {
        let d = PathElement::new("d1", "Domain", "domain");
        vec![
            vec![d.clone(), PathElement::new("s1", "One", "system")],
            vec![d, PathElement::new("s2", "Two", "system")],
        ]
    }

    #[test]
    fn test_empty_title_becomes_unknown() {
        let view = SmartViewEngine::default().generate_view(paths(), "  ").unwrap();
        assert_eq!(view.title, "Unknown");
    }

    #[test]
    fn test_view_lists_parents_first() {
        for layout in ["nested", "hierarchy"] {
            let engine = SmartViewEngine::new(Settings::default().with_layout_type(layout));
            let view = engine.generate_view(paths(), "Map").unwrap();

            let ids: Vec<_> = view.nodes.iter().map(|n| n.id.as_str()).collect();
            assert_eq!(ids, vec!["d1", "s1", "s2"], "{} layout", layout);
            assert!(view.width > 0.0 && view.height > 0.0);
        }
    }

    #[test]
    fn test_no_paths_gives_empty_view() {
        let view = SmartViewEngine::default().generate_view(Vec::new(), "Empty").unwrap();
        assert!(view.nodes.is_empty());
    }
}
