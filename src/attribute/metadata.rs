//! Human-readable metadata for attributes and components.

use std::fmt;

use smol_str::SmolStr;

/// Ordinal importance of an attribute.
///
/// The declaration order is the natural order used when grouping by level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum AttributeLevel {
    Basic,
    Medium,
    Advanced,
}

impl AttributeLevel {
    /// All levels in ordinal order.
    pub const ALL: [AttributeLevel; 3] = [Self::Basic, Self::Medium, Self::Advanced];

    pub fn display(&self) -> &'static str {
        match self {
            Self::Basic => "Basic",
            Self::Medium => "Medium",
            Self::Advanced => "Advanced",
        }
    }
}

impl fmt::Display for AttributeLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display())
    }
}

/// Human-readable metadata carried by one attribute.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct AttributeMetadata {
    /// Short label for configuration UIs (e.g. "Cluster count").
    pub label: SmolStr,
    /// One-line title, usually the first sentence of the description.
    pub title: Option<SmolStr>,
    /// Longer free-form description.
    pub description: Option<String>,
    /// Semantic category (e.g. "Preprocessing"). Empty means none.
    pub group: Option<SmolStr>,
    pub level: Option<AttributeLevel>,
}

impl AttributeMetadata {
    pub fn new(label: impl Into<SmolStr>) -> Self {
        Self {
            label: label.into(),
            ..Self::default()
        }
    }

    pub fn with_title(mut self, title: impl Into<SmolStr>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_group(mut self, group: impl Into<SmolStr>) -> Self {
        self.group = Some(group.into());
        self
    }

    pub fn with_level(mut self, level: AttributeLevel) -> Self {
        self.level = Some(level);
        self
    }

    /// The semantic group, treating an empty string as no group.
    pub fn group(&self) -> Option<&str> {
        self.group.as_deref().filter(|g| !g.is_empty())
    }

    pub fn level(&self) -> Option<AttributeLevel> {
        self.level
    }
}

/// Human-readable metadata about a whole component.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct BindableMetadata {
    pub name: SmolStr,
    pub title: Option<SmolStr>,
    pub label: Option<SmolStr>,
    pub description: Option<String>,
}

impl BindableMetadata {
    pub fn new(name: impl Into<SmolStr>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn with_title(mut self, title: impl Into<SmolStr>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_label(mut self, label: impl Into<SmolStr>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Label if present, otherwise the component name.
    pub fn label_or_name(&self) -> &str {
        self.label.as_deref().unwrap_or(&self.name)
    }
}
