//! Row and column bindings of [`AxisGroup`]
//!
//! A row stacks along x and aligns along y; a column is the transpose. The
//! visible variants reserve room for an outer label before their content.

use super::config::Settings;
use super::group::AxisGroup;
use super::types::{Alignment, Direction, Offsets};

/// Caption of a visible group
#[derive(Debug, Clone, PartialEq, Default)]
pub struct GroupLabel {
    pub name: String,
    pub kind: String,
    /// Reserve the label room on the left instead of on top
    pub lateral: bool,
    /// Identifier of the node the group stands for
    pub external_id: Option<String>,
}

impl GroupLabel {
    pub fn new(name: impl Into<String>, kind: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: kind.into(),
            ..Default::default()
        }
    }

    pub fn lateral(mut self, lateral: bool) -> Self {
        self.lateral = lateral;
        self
    }

    pub fn with_external_id(mut self, id: impl Into<String>) -> Self {
        self.external_id = Some(id.into());
        self
    }
}

impl AxisGroup {
    /// A group without offsets, spaced by `settings.space_between`
    pub fn new(
        direction: Direction,
        horizontal: Alignment,
        vertical: Alignment,
        settings: &Settings,
    ) -> Self {
        Self::with_offsets(
            direction,
            horizontal,
            vertical,
            settings.space_between,
            Offsets::default(),
        )
    }

    /// Children stacked left to right
    pub fn row(horizontal: Alignment, vertical: Alignment, settings: &Settings) -> Self {
        Self::new(Direction::Horizontal, horizontal, vertical, settings)
    }

    /// Children stacked top to bottom
    pub fn col(horizontal: Alignment, vertical: Alignment, settings: &Settings) -> Self {
        Self::new(Direction::Vertical, horizontal, vertical, settings)
    }

    /// A labelled group whose content starts below (or beside) its label
    pub fn visible(
        direction: Direction,
        horizontal: Alignment,
        vertical: Alignment,
        settings: &Settings,
        label: GroupLabel,
    ) -> Self {
        let offsets = settings.labelled_offsets(label.lateral);
        let mut group = Self::with_offsets(
            direction,
            horizontal,
            vertical,
            settings.space_between,
            offsets,
        );
        group.name = Some(label.name);
        group.kind = Some(label.kind);
        group.external_id = label.external_id;
        group.lateral_label = label.lateral;
        group
    }

    /// Visible group stacking left to right
    pub fn visible_row(
        horizontal: Alignment,
        vertical: Alignment,
        settings: &Settings,
        label: GroupLabel,
    ) -> Self {
        Self::visible(Direction::Horizontal, horizontal, vertical, settings, label)
    }

    /// Visible group stacking top to bottom
    pub fn visible_col(
        horizontal: Alignment,
        vertical: Alignment,
        settings: &Settings,
        label: GroupLabel,
    ) -> Self {
        Self::visible(Direction::Vertical, horizontal, vertical, settings, label)
    }

    /// Whether the label sits on the left of the content
    pub fn has_lateral_label(&self) -> bool {
        self.lateral_label
    }
}
