use serde::{Deserialize, Serialize};

/// Режим фасета: одиночный выбор (замена) или мультивыбор (переключение).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FacetKind {
    Single,
    Multi,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FacetOption {
    pub value: String,
    /// Message id in the catalog, or literal text when the catalog has no entry.
    pub label: String,
}

impl FacetOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

/// Описание фасета фильтра для панели фильтров.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FacetDescriptor {
    pub key: String,
    pub kind: FacetKind,
    pub label: String,
    pub options: Vec<FacetOption>,
}

impl FacetDescriptor {
    pub fn new(key: impl Into<String>, kind: FacetKind, label: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            kind,
            label: label.into(),
            options: Vec::new(),
        }
    }

    pub fn with_options(mut self, options: Vec<FacetOption>) -> Self {
        self.options = options;
        self
    }

    pub fn option_label(&self, value: &str) -> Option<&str> {
        self.options
            .iter()
            .find(|o| o.value == value)
            .map(|o| o.label.as_str())
    }
}
