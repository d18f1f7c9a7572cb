//! Common types and data structures

/// One icon of the catalog and every component it is mapped to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconInfo {
    pub id: usize,
    pub drawable_name: String,
    pub component_names: Vec<ComponentMapping>,
}

/// An application component and the human-readable label it belongs to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComponentMapping {
    pub label: String,
    pub component_name: String,
}

impl ComponentMapping {
    pub fn new(label: impl Into<String>, component_name: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            component_name: component_name.into(),
        }
    }
}

/// Component names sharing one label, in first-seen order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupedMapping {
    pub label: String,
    pub component_names: Vec<String>,
}

impl GroupedMapping {
    pub fn new<S: Into<String>>(label: impl Into<String>, component_names: impl IntoIterator<Item = S>) -> Self {
        Self {
            label: label.into(),
            component_names: component_names.into_iter().map(Into::into).collect(),
        }
    }
}
