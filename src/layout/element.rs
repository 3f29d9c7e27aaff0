//! Leaf boxes placed by axis groups

use super::types::{BoundingBox, ElementId, Size};

/// A leaf box with a natural size fixed at construction
///
/// Groups move it and, for stretched alignments, resize it. The natural size
/// is kept so that accumulated lengths do not depend on earlier stretching.
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    id: ElementId,
    parent_id: Option<ElementId>,
    external_id: Option<String>,
    name: String,
    kind: Option<String>,
    natural: Size,
    bounds: BoundingBox,
}

impl Element {
    pub fn new(name: impl Into<String>, width: f64, height: f64) -> Self {
        Self {
            id: ElementId::generate(),
            parent_id: None,
            external_id: None,
            name: name.into(),
            kind: None,
            natural: Size::new(width, height),
            bounds: BoundingBox::new(0.0, 0.0, width, height),
        }
    }

    /// Attach the identifier of the node this element represents
    pub fn with_external_id(mut self, id: impl Into<String>) -> Self {
        self.external_id = Some(id.into());
        self
    }

    /// Attach a semantic type
    pub fn with_kind(mut self, kind: impl Into<String>) -> Self {
        self.kind = Some(kind.into());
        self
    }

    pub fn id(&self) -> ElementId {
        self.id
    }

    pub fn parent_id(&self) -> Option<ElementId> {
        self.parent_id
    }

    pub(crate) fn set_parent_id(&mut self, parent: ElementId) {
        self.parent_id = Some(parent);
    }

    pub fn external_id(&self) -> Option<&str> {
        self.external_id.as_deref()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> Option<&str> {
        self.kind.as_deref()
    }

    /// Size the element was built with
    pub fn natural_size(&self) -> Size {
        self.natural
    }

    /// Position relative to the parent group, and current size
    pub fn bounds(&self) -> BoundingBox {
        self.bounds
    }

    pub fn x(&self) -> f64 {
        self.bounds.x
    }

    pub fn y(&self) -> f64 {
        self.bounds.y
    }

    pub fn width(&self) -> f64 {
        self.bounds.width
    }

    pub fn height(&self) -> f64 {
        self.bounds.height
    }

    pub fn set_x(&mut self, value: f64) {
        self.bounds.x = value;
    }

    pub fn set_y(&mut self, value: f64) {
        self.bounds.y = value;
    }

    pub fn set_width(&mut self, value: f64) {
        self.bounds.width = value;
    }

    pub fn set_height(&mut self, value: f64) {
        self.bounds.height = value;
    }
}

/// Raw description of a leaf box
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ElementDescriptor {
    pub name: String,
    pub width: f64,
    pub height: f64,
    pub x: f64,
    pub y: f64,
}

/// Builds leaf elements from descriptors
#[derive(Debug, Clone, Default)]
pub struct ElementBuilder {
    minimum: Size,
}

impl ElementBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Never build an element smaller than `minimum` in either dimension
    pub fn with_minimum_size(mut self, minimum: Size) -> Self {
        self.minimum = minimum;
        self
    }

    pub fn build(&self, descriptor: &ElementDescriptor) -> Element {
        let width = descriptor.width.max(self.minimum.width);
        let height = descriptor.height.max(self.minimum.height);
        let mut element = Element::new(descriptor.name.clone(), width, height);
        element.set_x(descriptor.x);
        element.set_y(descriptor.y);
        element
    }
}
