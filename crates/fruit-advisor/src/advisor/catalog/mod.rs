mod knowledge_base;

pub use knowledge_base::{KnowledgeBaseCatalog, KnowledgeBaseError};

use super::domain::Nutrition;

/// Lookup abstraction over the nutrition knowledge base.
///
/// `Ok(None)` means the label has no nutrition facts; it is not a failure.
pub trait NutritionCatalog: Send + Sync {
    fn lookup(&self, label: &str) -> Result<Option<Nutrition>, CatalogError>;
}

/// Failure raised by a catalog backend.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    #[error("nutrition lookup timed out for {label}")]
    Timeout { label: String },
    #[error("knowledge base unavailable: {0}")]
    Unavailable(String),
}

/// Spelling fixes applied to a label before it is matched against the knowledge base.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LabelAliases {
    entries: Vec<(String, String)>,
}

impl LabelAliases {
    pub fn new() -> Self {
        Self::default()
    }

    /// The knowledge base spells every strawberry entity as "Stawberry".
    pub fn standard() -> Self {
        Self::new().with_alias("Strawberry", "Stawberry")
    }

    pub fn with_alias(mut self, from: impl Into<String>, to: impl Into<String>) -> Self {
        self.entries.push((from.into(), to.into()));
        self
    }

    /// Parse a `From=To,From2=To2` table. Blank input yields an empty table.
    pub fn parse(raw: &str) -> Result<Self, AliasParseError> {
        let mut aliases = Self::new();
        for entry in raw.split(',').map(str::trim).filter(|entry| !entry.is_empty()) {
            let (from, to) = entry
                .split_once('=')
                .map(|(from, to)| (from.trim(), to.trim()))
                .filter(|(from, to)| !from.is_empty() && !to.is_empty())
                .ok_or_else(|| AliasParseError {
                    entry: entry.to_string(),
                })?;
            aliases = aliases.with_alias(from, to);
        }
        Ok(aliases)
    }

    /// Apply every alias, in table order, as a substring replacement.
    pub fn resolve(&self, label: &str) -> String {
        self.entries
            .iter()
            .fold(label.to_string(), |resolved, (from, to)| {
                resolved.replace(from.as_str(), to)
            })
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("label alias '{entry}' must look like From=To")]
pub struct AliasParseError {
    pub entry: String,
}
