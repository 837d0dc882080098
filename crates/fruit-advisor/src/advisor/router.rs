use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{
        multipart::MultipartError, rejection::JsonRejection, FromRequest, Multipart, Request,
        State,
    },
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::post,
    Router,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::error;

use super::catalog::{CatalogError, NutritionCatalog};
use super::classifier::{ClassifierError, ImageClassifier};
use super::domain::{Nutrition, ProfileSubmission};
use super::service::{AdvisorService, AdvisorServiceError};

/// Router builder exposing profile, nutrition and prediction endpoints.
pub fn advisor_router<C, I>(service: Arc<AdvisorService<C, I>>) -> Router
where
    C: NutritionCatalog + 'static,
    I: ImageClassifier + 'static,
{
    Router::new()
        .route("/api/v1/profile", post(profile_handler::<C, I>))
        .route("/api/v1/nutrition", post(nutrition_handler::<C, I>))
        .route("/api/v1/predict", post(predict_handler::<C, I>))
        .with_state(service)
}

#[derive(Debug, Deserialize)]
pub(crate) struct NutritionRequest {
    #[serde(default)]
    pub(crate) fruit: Option<String>,
}

/// Nutrition lookup response, mirroring the knowledge-base property names.
///
/// Facts are JSON numbers and the requested label is echoed as `fruit`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NutritionView {
    pub fruit: String,
    pub calories: f64,
    #[serde(rename = "sugarContent")]
    pub sugar_content: f64,
    #[serde(rename = "vitaminC")]
    pub vitamin_c: f64,
}

impl From<Nutrition> for NutritionView {
    fn from(nutrition: Nutrition) -> Self {
        Self {
            fruit: nutrition.name().to_string(),
            calories: nutrition.calories(),
            sugar_content: nutrition.sugar_grams(),
            vitamin_c: nutrition.vitamin_c_mg(),
        }
    }
}

pub(crate) async fn profile_handler<C, I>(
    State(service): State<Arc<AdvisorService<C, I>>>,
    payload: Result<axum::Json<ProfileSubmission>, JsonRejection>,
) -> Response
where
    C: NutritionCatalog + 'static,
    I: ImageClassifier + 'static,
{
    let axum::Json(submission) = match payload {
        Ok(payload) => payload,
        Err(rejection) => return bad_request(rejection.body_text()),
    };

    match service.submit_profile(submission) {
        Ok(response) => (StatusCode::OK, axum::Json(response)).into_response(),
        Err(err) => error_response(err),
    }
}

pub(crate) async fn nutrition_handler<C, I>(
    State(service): State<Arc<AdvisorService<C, I>>>,
    payload: Result<axum::Json<NutritionRequest>, JsonRejection>,
) -> Response
where
    C: NutritionCatalog + 'static,
    I: ImageClassifier + 'static,
{
    let axum::Json(request) = match payload {
        Ok(payload) => payload,
        Err(rejection) => return bad_request(rejection.body_text()),
    };

    let fruit = request.fruit.unwrap_or_default();
    match service.nutrition(&fruit) {
        Ok(nutrition) => {
            let view = NutritionView::from(nutrition);
            (StatusCode::OK, axum::Json(view)).into_response()
        }
        Err(err) => error_response(err),
    }
}

pub(crate) async fn predict_handler<C, I>(
    State(service): State<Arc<AdvisorService<C, I>>>,
    request: Request,
) -> Response
where
    C: NutritionCatalog + 'static,
    I: ImageClassifier + 'static,
{
    let image = match read_image(request).await {
        Ok(image) => image,
        Err(response) => return response,
    };

    match service.predict(&image) {
        Ok(fruit) => (StatusCode::OK, axum::Json(json!({ "fruit": fruit }))).into_response(),
        Err(err) => error_response(err),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum UploadKind {
    Raw,
    Form,
}

/// Raw `image/*` or octet-stream bodies are taken as-is; form uploads carry the image in the
/// `image` field. A missing header is treated as a raw upload.
fn upload_kind(raw: &str) -> Option<UploadKind> {
    let content_type = raw.parse::<mime::Mime>().ok()?;
    if content_type.essence_str() == mime::MULTIPART_FORM_DATA.essence_str() {
        Some(UploadKind::Form)
    } else if content_type.type_() == mime::IMAGE
        || content_type.essence_str() == mime::APPLICATION_OCTET_STREAM.essence_str()
    {
        Some(UploadKind::Raw)
    } else {
        None
    }
}

async fn read_image(request: Request) -> Result<Bytes, Response> {
    let kind = match request.headers().get(header::CONTENT_TYPE) {
        None => UploadKind::Raw,
        Some(value) => match value.to_str().ok().and_then(upload_kind) {
            Some(kind) => kind,
            None => {
                return Err(bad_request(format!(
                    "Invalid image data: unsupported content type {:?}",
                    value
                )))
            }
        },
    };

    match kind {
        UploadKind::Raw => Bytes::from_request(request, &())
            .await
            .map_err(IntoResponse::into_response),
        UploadKind::Form => {
            let mut form = Multipart::from_request(request, &())
                .await
                .map_err(|rejection| bad_request(rejection.body_text()))?;
            image_field(&mut form)
                .await
                .map_err(|err| bad_request(format!("Invalid image data: {}", err.body_text())))
        }
    }
}

/// Bytes of the first `image` field; empty when the form has none.
async fn image_field(form: &mut Multipart) -> Result<Bytes, MultipartError> {
    while let Some(field) = form.next_field().await? {
        if field.name() == Some("image") {
            return field.bytes().await;
        }
    }
    Ok(Bytes::new())
}

fn bad_request(message: impl Into<String>) -> Response {
    let payload = json!({ "error": message.into() });
    (StatusCode::BAD_REQUEST, axum::Json(payload)).into_response()
}

fn error_response(err: AdvisorServiceError) -> Response {
    let status = match &err {
        AdvisorServiceError::Profile(_)
        | AdvisorServiceError::MissingFruit
        | AdvisorServiceError::MissingImage
        | AdvisorServiceError::Classifier(ClassifierError::InvalidImage(_)) => {
            StatusCode::BAD_REQUEST
        }
        AdvisorServiceError::NutritionNotFound { .. } => StatusCode::NOT_FOUND,
        AdvisorServiceError::Classifier(ClassifierError::Unavailable(_)) => {
            StatusCode::SERVICE_UNAVAILABLE
        }
        AdvisorServiceError::Catalog(CatalogError::Timeout { .. })
        | AdvisorServiceError::Catalog(CatalogError::Unavailable(_))
        | AdvisorServiceError::Classifier(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };

    if status.is_server_error() {
        error!(error = %err, "advisor request failed");
    }

    let payload = json!({ "error": err.to_string() });
    (status, axum::Json(payload)).into_response()
}
