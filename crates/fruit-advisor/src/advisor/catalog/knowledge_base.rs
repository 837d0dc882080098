use super::super::domain::{InvalidNutrition, Nutrition};
use super::{CatalogError, LabelAliases, NutritionCatalog};
use serde::Deserialize;
use std::collections::HashMap;
use std::io::Read;
use std::path::Path;
use tracing::debug;

#[derive(Debug)]
pub enum KnowledgeBaseError {
    Io(std::io::Error),
    Csv(csv::Error),
    InvalidRecord {
        entity: String,
        source: InvalidNutrition,
    },
    DuplicateEntity(String),
}

impl std::fmt::Display for KnowledgeBaseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            KnowledgeBaseError::Io(err) => write!(f, "failed to read knowledge base: {}", err),
            KnowledgeBaseError::Csv(err) => write!(f, "invalid knowledge base data: {}", err),
            KnowledgeBaseError::InvalidRecord { entity, source } => {
                write!(f, "invalid nutrition facts for {}: {}", entity, source)
            }
            KnowledgeBaseError::DuplicateEntity(entity) => {
                write!(f, "knowledge base lists {} more than once", entity)
            }
        }
    }
}

impl std::error::Error for KnowledgeBaseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            KnowledgeBaseError::Io(err) => Some(err),
            KnowledgeBaseError::Csv(err) => Some(err),
            KnowledgeBaseError::InvalidRecord { source, .. } => Some(source),
            KnowledgeBaseError::DuplicateEntity(_) => None,
        }
    }
}

impl From<std::io::Error> for KnowledgeBaseError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<csv::Error> for KnowledgeBaseError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err)
    }
}

/// In-memory catalog loaded from a CSV export of the fruit knowledge base.
///
/// Expected header: `entity,calories,sugarContent,vitaminC`.
#[derive(Debug, Clone)]
pub struct KnowledgeBaseCatalog {
    entities: HashMap<String, Nutrition>,
    aliases: LabelAliases,
}

impl KnowledgeBaseCatalog {
    pub fn from_path<P: AsRef<Path>>(
        path: P,
        aliases: LabelAliases,
    ) -> Result<Self, KnowledgeBaseError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file, aliases)
    }

    pub fn from_reader<R: Read>(
        reader: R,
        aliases: LabelAliases,
    ) -> Result<Self, KnowledgeBaseError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);
        let mut entities = HashMap::new();

        for record in csv_reader.deserialize::<KnowledgeBaseRow>() {
            let row = record?;
            let nutrition =
                Nutrition::new(row.entity.as_str(), row.sugar, row.calories, row.vitamin_c)
                    .map_err(|source| KnowledgeBaseError::InvalidRecord {
                        entity: row.entity.clone(),
                        source,
                    })?;

            if entities.insert(row.entity.clone(), nutrition).is_some() {
                return Err(KnowledgeBaseError::DuplicateEntity(row.entity));
            }
        }

        Ok(Self { entities, aliases })
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }
}

impl NutritionCatalog for KnowledgeBaseCatalog {
    fn lookup(&self, label: &str) -> Result<Option<Nutrition>, CatalogError> {
        let entity = self.aliases.resolve(label);
        debug!(label, %entity, "querying knowledge base");

        let Some(nutrition) = self.entities.get(&entity) else {
            debug!(%entity, "no nutrition data found");
            return Ok(None);
        };

        Ok(Some(nutrition.clone().with_name(label)))
    }
}

#[derive(Debug, Deserialize)]
struct KnowledgeBaseRow {
    entity: String,
    calories: f64,
    #[serde(rename = "sugarContent")]
    sugar: f64,
    #[serde(rename = "vitaminC")]
    vitamin_c: f64,
}
