//! Receipt upload and validation endpoint.
//!
//! `POST /api/v1/validate` accepts one multipart form: a `receipt` image
//! part (JPEG only) plus the optional text fields `valor`, `documento`,
//! `beneficiario`, and `banco`.
//!
//! Flow per request: persist the upload → preprocess a derivative → OCR the
//! derivative → run the validation pipeline over the recognized text and
//! the original upload. Upload rejection, preprocessing failure, and OCR
//! failure are fatal and produce the error envelope; metadata and AI
//! failures degrade inside the pipeline and still produce a success
//! response. Both temporary files are removed on every exit path by the
//! [`TempFiles`] guard.

use crate::cleanup::TempFiles;
use crate::error::{ServerError, ServerResult};
use crate::preprocess;
use crate::state::ServerState;
use axum::extract::{Multipart, State};
use axum::response::IntoResponse;
use axum::Json;
use comprova::{ExpectedData, ValidationResult};
use serde::Serialize;
use std::sync::Arc;

const ERR_NO_FILE: &str = "Nenhum arquivo foi enviado";
const ERR_NOT_JPEG: &str = "Apenas imagens JPG são aceitas";

/// Success envelope for one validation.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidateResponse {
    pub success: bool,
    pub validation: ValidationResult,
    pub extracted_text: String,
}

/// Validate an uploaded payment receipt.
pub async fn validate_receipt(
    State(state): State<Arc<ServerState>>,
    mut multipart: Multipart,
) -> ServerResult<impl IntoResponse> {
    let mut expected = ExpectedData::default();
    let mut receipt: Option<Vec<u8>> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|err| ServerError::BadRequest(err.to_string()))?
    {
        let name = field.name().map(str::to_owned);
        match name.as_deref() {
            Some("receipt") => {
                if field.content_type() != Some("image/jpeg") {
                    return Err(ServerError::UnsupportedMedia(ERR_NOT_JPEG.to_string()));
                }
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|err| ServerError::BadRequest(err.to_string()))?;
                receipt = Some(bytes.to_vec());
            }
            Some("valor") => expected.valor = text_field(field).await?,
            Some("documento") => expected.documento = text_field(field).await?,
            Some("beneficiario") => expected.beneficiario = text_field(field).await?,
            Some("banco") => expected.banco = text_field(field).await?,
            _ => {}
        }
    }

    let bytes = receipt.ok_or_else(|| ServerError::BadRequest(ERR_NO_FILE.to_string()))?;

    tokio::fs::create_dir_all(&state.config.upload_dir).await?;
    let upload_path = state
        .config
        .upload_dir
        .join(format!("{}.jpg", uuid::Uuid::new_v4()));
    tokio::fs::write(&upload_path, &bytes).await?;

    // Everything tracked from here on is removed when the guard drops,
    // whichever way this handler exits.
    let mut temp = TempFiles::new();
    temp.track(upload_path.clone());

    let processed_path = {
        let source = upload_path.clone();
        tokio::task::spawn_blocking(move || preprocess::preprocess(&source))
            .await
            .map_err(|err| ServerError::Internal(err.to_string()))?
            .map_err(|err| ServerError::Preprocess(err.to_string()))?
    };
    temp.track(processed_path.clone());

    let text = state
        .ocr
        .recognize(&processed_path)
        .await
        .map_err(|err| ServerError::Ocr(err.to_string()))?;

    let validation = state.validator.validate(&text, &upload_path, &expected).await;

    tracing::info!(
        is_valid = validation.is_valid,
        warnings = validation.metadata.warnings.len(),
        "receipt validated"
    );

    Ok(Json(ValidateResponse {
        success: true,
        validation,
        extracted_text: text,
    }))
}

/// Reads an optional text field, mapping blank values to `None`.
async fn text_field(field: axum::extract::multipart::Field<'_>) -> ServerResult<Option<String>> {
    let value = field
        .text()
        .await
        .map_err(|err| ServerError::BadRequest(err.to_string()))?;
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Ok(None)
    } else {
        Ok(Some(trimmed.to_string()))
    }
}
