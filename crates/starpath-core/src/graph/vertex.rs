use serde::{Deserialize, Serialize};

/// Attribute record of a vertex.
///
/// The vertex index is its position in the graph and is not stored here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vertex {
    /// Display name, unique under case-insensitive comparison
    pub name: String,
    /// Apparent magnitude (lower is brighter)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub magnitude: Option<f64>,
    /// Category label, e.g. the constellation or system a body belongs to
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

impl Vertex {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            magnitude: None,
            category: None,
        }
    }

    pub fn with_magnitude(mut self, magnitude: f64) -> Self {
        self.magnitude = Some(magnitude);
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Case-insensitive name comparison after trimming
    pub fn has_name(&self, name: &str) -> bool {
        names_match(&self.name, name)
    }

    pub(crate) fn merge(&mut self, update: VertexUpdate) {
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(magnitude) = update.magnitude {
            self.magnitude = Some(magnitude);
        }
        if let Some(category) = update.category {
            self.category = Some(category);
        }
    }
}

/// Partial update merged into an existing vertex; `None` fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VertexUpdate {
    pub name: Option<String>,
    pub magnitude: Option<f64>,
    pub category: Option<String>,
}

impl VertexUpdate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn magnitude(mut self, magnitude: f64) -> Self {
        self.magnitude = Some(magnitude);
        self
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }
}

pub(crate) fn names_match(a: &str, b: &str) -> bool {
    a.trim().to_lowercase() == b.trim().to_lowercase()
}
