//! Fruit recommendation engine: profile intake, rule evaluation, explanation,
//! ranking, and the catalog/classifier boundaries it depends on.

pub mod catalog;
pub mod classifier;
pub mod domain;
pub mod evaluation;
pub mod intake;
pub mod pipeline;
pub mod router;
pub mod service;

#[cfg(test)]
mod tests;

pub use catalog::{
    AliasParseError, CatalogError, KnowledgeBaseCatalog, KnowledgeBaseError, LabelAliases,
    NutritionCatalog,
};
pub use classifier::{ClassifierError, ImageClassifier, LabelVocabulary};
pub use domain::{
    DietaryPreference, FitnessGoal, Gender, HealthCondition, InvalidNutrition, Nutrition,
    NutritionFacts, Profile, ProfileResponse, ProfileSubmission, ProfileView, Recommendation,
};
pub use evaluation::{benefits, evaluate, explain, passes_rules, RuleVerdict, RuleViolation};
pub use intake::{AcceptedProfile, ProfileGuard, ProfileViolation};
pub use pipeline::{rank, recommend, try_recommend, RECOMMENDATION_LIMIT};
pub use router::{advisor_router, NutritionView};
pub use service::{AdvisorService, AdvisorServiceError};
