use std::sync::Arc;

use tracing::{debug, warn};

use super::catalog::{CatalogError, NutritionCatalog};
use super::classifier::{ClassifierError, ImageClassifier, LabelVocabulary};
use super::domain::{
    Nutrition, Profile, ProfileResponse, ProfileSubmission, ProfileView, Recommendation,
};
use super::intake::{AcceptedProfile, ProfileGuard, ProfileViolation};
use super::pipeline;

/// Service composing the intake guard, nutrition catalog, label vocabulary and classifier.
pub struct AdvisorService<C, I> {
    guard: ProfileGuard,
    catalog: Arc<C>,
    classifier: Arc<I>,
    vocabulary: Arc<LabelVocabulary>,
}

impl<C, I> AdvisorService<C, I>
where
    C: NutritionCatalog + 'static,
    I: ImageClassifier + 'static,
{
    pub fn new(catalog: Arc<C>, classifier: Arc<I>, vocabulary: Arc<LabelVocabulary>) -> Self {
        Self {
            guard: ProfileGuard,
            catalog,
            classifier,
            vocabulary,
        }
    }

    pub fn vocabulary(&self) -> &LabelVocabulary {
        &self.vocabulary
    }

    /// Validate a submitted profile and attach its recommendations.
    pub fn submit_profile(
        &self,
        submission: ProfileSubmission,
    ) -> Result<ProfileResponse, AdvisorServiceError> {
        let AcceptedProfile { name, profile } = self.guard.accept(submission)?;
        debug!(%name, age = profile.age, "processing profile");

        let recommendations = self.recommend(&profile)?;

        Ok(ProfileResponse {
            success: true,
            message: format!("Profile created successfully for {name}"),
            profile: ProfileView { name, profile },
            recommendations,
        })
    }

    /// Rank the whole vocabulary against `profile`.
    ///
    /// Timed-out lookups are skipped like absent ones; any other catalog failure
    /// aborts so it cannot be mistaken for an empty recommendation list.
    pub fn recommend(
        &self,
        profile: &Profile,
    ) -> Result<Vec<Recommendation>, AdvisorServiceError> {
        let recommendations =
            pipeline::try_recommend(profile, self.vocabulary.labels(), |label| {
                match self.catalog.lookup(label) {
                    Err(CatalogError::Timeout { label }) => {
                        warn!(%label, "nutrition lookup timed out; skipping");
                        Ok(None)
                    }
                    resolved => resolved,
                }
            })?;

        Ok(recommendations)
    }

    /// Nutrition facts for a single label.
    pub fn nutrition(&self, fruit: &str) -> Result<Nutrition, AdvisorServiceError> {
        let fruit = fruit.trim();
        if fruit.is_empty() {
            return Err(AdvisorServiceError::MissingFruit);
        }

        self.catalog
            .lookup(fruit)?
            .ok_or_else(|| AdvisorServiceError::NutritionNotFound {
                fruit: fruit.to_string(),
            })
    }

    /// Classify an encoded image into one of the vocabulary labels.
    pub fn predict(&self, image: &[u8]) -> Result<String, AdvisorServiceError> {
        if image.is_empty() {
            return Err(AdvisorServiceError::MissingImage);
        }

        let scores = self.classifier.scores(image)?;
        let fruit = self.vocabulary.label_for(&scores)?;
        debug!(%fruit, "predicted fruit");
        Ok(fruit.to_string())
    }
}

/// Error raised by the advisor service.
#[derive(Debug, thiserror::Error)]
pub enum AdvisorServiceError {
    #[error(transparent)]
    Profile(#[from] ProfileViolation),
    #[error(transparent)]
    Catalog(#[from] CatalogError),
    #[error(transparent)]
    Classifier(#[from] ClassifierError),
    #[error("No fruit name provided")]
    MissingFruit,
    #[error("Nutrition info not found for this fruit")]
    NutritionNotFound { fruit: String },
    #[error("No image uploaded")]
    MissingImage,
}
