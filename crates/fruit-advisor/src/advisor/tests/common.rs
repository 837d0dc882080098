use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::response::Response;
use serde_json::Value;

use crate::advisor::catalog::{CatalogError, NutritionCatalog};
use crate::advisor::classifier::{ClassifierError, ImageClassifier, LabelVocabulary};
use crate::advisor::domain::{
    DietaryPreference, FitnessGoal, Gender, HealthCondition, Nutrition, Profile,
    ProfileSubmission,
};
use crate::advisor::{advisor_router, AdvisorService};

/// Mirror of `data/fruit_catalog.csv`, keyed by label: (sugar, calories, vitamin C).
pub(super) const CATALOG: [(&str, f64, f64, f64); 17] = [
    ("Apple_Unripe", 8.0, 45.0, 3.0),
    ("Apple_Ripe", 10.0, 52.0, 4.6),
    ("Apple_Overripe", 12.0, 55.0, 2.5),
    ("Banana_Unripe", 6.0, 89.0, 8.7),
    ("Banana_Ripe", 12.0, 90.0, 9.0),
    ("Banana_Overripe", 15.0, 95.0, 6.0),
    ("Dragonfruit_Unripe", 6.0, 45.0, 1.5),
    ("Dragonfruit_Ripe", 8.0, 50.0, 3.0),
    ("Mango_Unripe", 6.0, 60.0, 27.0),
    ("Mango_Ripe", 14.0, 70.0, 36.0),
    ("Mango_Overripe", 16.0, 75.0, 20.0),
    ("Orange_Unripe", 5.0, 40.0, 40.0),
    ("Orange_Ripe", 9.0, 47.0, 53.0),
    ("Orange_Overripe", 10.0, 50.0, 30.0),
    ("Strawberry_Unripe", 3.0, 28.0, 30.0),
    ("Strawberry_Ripe", 4.9, 32.0, 59.0),
    ("Strawberry_Overripe", 5.5, 35.0, 40.0),
];

pub(super) fn fruit(name: &str, sugar: f64, calories: f64, vitamin_c: f64) -> Nutrition {
    Nutrition::new(name, sugar, calories, vitamin_c).expect("valid nutrition")
}

pub(super) fn catalog_fruit(name: &str) -> Nutrition {
    CATALOG
        .iter()
        .find(|(label, ..)| *label == name)
        .map(|(label, sugar, calories, vitamin_c)| fruit(label, *sugar, *calories, *vitamin_c))
        .expect("fruit present in catalog fixture")
}

pub(super) fn catalog_labels() -> Vec<String> {
    CATALOG.iter().map(|(label, ..)| label.to_string()).collect()
}

pub(super) fn lookup(label: &str) -> Option<Nutrition> {
    CATALOG
        .iter()
        .find(|(name, ..)| *name == label)
        .map(|(name, sugar, calories, vitamin_c)| fruit(name, *sugar, *calories, *vitamin_c))
}

pub(super) fn profile(age: u32, gender: Gender) -> Profile {
    Profile {
        gender,
        ..Profile::with_age(age)
    }
}

pub(super) fn male(age: u32) -> Profile {
    profile(age, Gender::Male)
}

pub(super) fn female(age: u32) -> Profile {
    profile(age, Gender::Female)
}

pub(super) fn with_goal(mut profile: Profile, goal: FitnessGoal) -> Profile {
    profile.fitness_goal = goal;
    profile
}

pub(super) fn with_diet(mut profile: Profile, diet: DietaryPreference) -> Profile {
    profile.dietary_preference = diet;
    profile
}

pub(super) fn with_condition(mut profile: Profile, condition: HealthCondition) -> Profile {
    profile.health_conditions.insert(condition);
    profile
}

pub(super) fn submission(name: &str, age: u64) -> ProfileSubmission {
    ProfileSubmission {
        name: Some(name.to_string()),
        age: Some(age.into()),
        ..ProfileSubmission::default()
    }
}

/// Catalog backed by the fixture table with optional per-label failures.
#[derive(Default, Clone)]
pub(super) struct MemoryCatalog {
    failures: HashMap<String, CatalogError>,
    pub(super) lookups: Arc<Mutex<Vec<String>>>,
}

impl MemoryCatalog {
    pub(super) fn failing(label: &str, error: CatalogError) -> Self {
        let mut catalog = Self::default();
        catalog.failures.insert(label.to_string(), error);
        catalog
    }

    pub(super) fn lookups(&self) -> Vec<String> {
        self.lookups.lock().expect("lookup mutex poisoned").clone()
    }
}

impl NutritionCatalog for MemoryCatalog {
    fn lookup(&self, label: &str) -> Result<Option<Nutrition>, CatalogError> {
        self.lookups
            .lock()
            .expect("lookup mutex poisoned")
            .push(label.to_string());
        if let Some(error) = self.failures.get(label) {
            return Err(error.clone());
        }
        Ok(lookup(label))
    }
}

/// Classifier returning canned scores or a canned error.
pub(super) struct FixedClassifier(pub(super) Result<Vec<f32>, ClassifierError>);

impl ImageClassifier for FixedClassifier {
    fn scores(&self, _image: &[u8]) -> Result<Vec<f32>, ClassifierError> {
        self.0.clone()
    }
}

pub(super) fn vocabulary() -> LabelVocabulary {
    LabelVocabulary::new(catalog_labels())
}

pub(super) fn build_service_with(
    catalog: MemoryCatalog,
    classifier: FixedClassifier,
) -> AdvisorService<MemoryCatalog, FixedClassifier> {
    AdvisorService::new(
        Arc::new(catalog),
        Arc::new(classifier),
        Arc::new(vocabulary()),
    )
}

/// Service whose classifier favours `Orange_Ripe` (index 12).
pub(super) fn build_service() -> AdvisorService<MemoryCatalog, FixedClassifier> {
    let mut scores = vec![0.01_f32; CATALOG.len()];
    scores[12] = 0.8;
    build_service_with(MemoryCatalog::default(), FixedClassifier(Ok(scores)))
}

pub(super) fn router_with_service(
    service: AdvisorService<MemoryCatalog, FixedClassifier>,
) -> axum::Router {
    advisor_router(Arc::new(service))
}

pub(super) fn recommended_fruits(recommendations: &[crate::advisor::Recommendation]) -> Vec<&str> {
    recommendations
        .iter()
        .map(|recommendation| recommendation.fruit.as_str())
        .collect()
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
