//! Layout engines for computing box positions and sizes
//!
//! Two engines share this module: axis groups (rows and columns that align
//! and stretch their children) and the hierarchical row-wrap engine that
//! packs subtrees into column-bounded rows.

pub mod config;
pub mod content_box;
pub mod cursor;
pub mod element;
pub mod error;
pub mod group;
pub mod hierarchy;
pub mod nested;
pub mod row;
pub mod types;

pub use config::{LayoutType, Settings, SettingsError, SizeReference};
pub use content_box::ContentBox;
pub use cursor::PlotCursor;
pub use element::{Element, ElementBuilder, ElementDescriptor};
pub use error::{Dimension, LayoutError};
pub use group::{AxisGroup, LayoutNode, Placement};
pub use hierarchy::{HierarchyLayoutEngine, HierarchyNode, RowsSummary, SubtreeDimensions};
pub use nested::NestedLayoutEngine;
pub use row::GroupLabel;
pub use types::*;
