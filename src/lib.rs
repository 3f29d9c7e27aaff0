//! Smart View - box layout for hierarchical architecture maps
//!
//! Root-to-leaf paths of named entities are merged into a tree and laid out
//! either as nested labelled groups or as column-wrapped rows of subtrees.
//!
//! # Example
//!
//! ```rust
//! use smart_view::{generate_view, PathElement, Settings};
//!
//! let domain = PathElement::new("d1", "Payments", "domain");
//! let paths = vec![
//!     vec![domain.clone(), PathElement::new("s1", "Ledger", "system")],
//!     vec![domain, PathElement::new("s2", "Billing", "system")],
//! ];
//!
//! let settings = Settings::default().with_layout_type("hierarchy");
//! let view = generate_view(paths, "Payments", &settings).unwrap();
//!
//! assert_eq!(view.nodes.len(), 3);
//! assert_eq!(view.nodes[0].id, "d1");
//! ```

pub mod engine;
pub mod error;
pub mod layout;
pub mod semantic;
pub mod view;

pub use engine::SmartViewEngine;
pub use error::{CliError, ViewError};
pub use layout::{
    AxisGroup, Direction, HierarchyLayoutEngine, HierarchyNode, LayoutError, LayoutType,
    NestedLayoutEngine, Settings, SettingsError,
};
pub use semantic::{PathElement, SemanticEngine};
pub use view::{View, ViewNode};

/// Lay out `paths` with a one-off engine built from `settings`
pub fn generate_view(
    paths: Vec<Vec<PathElement>>,
    title: &str,
    settings: &Settings,
) -> Result<View, ViewError> {
    SmartViewEngine::new(settings.clone()).generate_view(paths, title)
}
