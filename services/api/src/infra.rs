use fruit_advisor::advisor::{
    AdvisorService, ClassifierError, ImageClassifier, KnowledgeBaseCatalog, LabelVocabulary,
    NutritionCatalog,
};
use fruit_advisor::config::CatalogConfig;
use fruit_advisor::error::AppError;
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use tracing::{info, warn};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Placeholder wired in until a vision model is attached; every prediction is unavailable.
#[derive(Debug, Default, Clone, Copy)]
pub(crate) struct UnconfiguredClassifier;

impl ImageClassifier for UnconfiguredClassifier {
    fn scores(&self, _image: &[u8]) -> Result<Vec<f32>, ClassifierError> {
        Err(ClassifierError::Unavailable(
            "no image model configured".to_string(),
        ))
    }
}

pub(crate) type Advisor = AdvisorService<KnowledgeBaseCatalog, UnconfiguredClassifier>;

/// Load the label vocabulary and knowledge base named in `config`.
pub(crate) fn load_advisor(config: &CatalogConfig) -> Result<Advisor, AppError> {
    let vocabulary =
        LabelVocabulary::from_path(&config.labels_path).map_err(|source| AppError::Vocabulary {
            path: config.labels_path.clone(),
            source,
        })?;
    let catalog = KnowledgeBaseCatalog::from_path(
        &config.knowledge_base_path,
        config.label_aliases.clone(),
    )?;

    let unresolved = vocabulary
        .labels()
        .iter()
        .filter(|label| matches!(catalog.lookup(label), Ok(None)))
        .count();
    if unresolved > 0 {
        warn!(unresolved, "labels without nutrition data will never be recommended");
    }
    info!(
        labels = vocabulary.len(),
        entities = catalog.len(),
        "fruit catalog loaded"
    );

    Ok(AdvisorService::new(
        Arc::new(catalog),
        Arc::new(UnconfiguredClassifier),
        Arc::new(vocabulary),
    ))
}
