use axum::{
    extract::{multipart::Field, Multipart},
    Json,
};
use bytes::Bytes;
use serde::Serialize;

use crate::errors::AppError;
use crate::extraction::{extract_text, DocumentKind, ExtractionError};

/// A file part read out of a multipart body.
#[derive(Debug, Clone)]
pub struct UploadedFile {
    pub file_name: Option<String>,
    pub content_type: Option<String>,
    pub bytes: Bytes,
}

impl UploadedFile {
    pub async fn read(field: Field<'_>) -> Result<Self, AppError> {
        let file_name = field.file_name().map(str::to_string);
        let content_type = field.content_type().map(str::to_string);
        let bytes = field
            .bytes()
            .await
            .map_err(|e| AppError::Validation(format!("Could not read uploaded file: {e}")))?;
        Ok(Self {
            file_name,
            content_type,
            bytes,
        })
    }

    pub fn size_kb(&self) -> f64 {
        (self.bytes.len() as f64 / 1024.0 * 100.0).round() / 100.0
    }
}

#[derive(Debug, Serialize)]
pub struct ExtractResponse {
    pub file_name: Option<String>,
    pub file_type: DocumentKind,
    pub size_kb: f64,
    pub text: String,
}

/// POST /api/v1/resumes/extract
pub async fn handle_extract_resume(
    mut multipart: Multipart,
) -> Result<Json<ExtractResponse>, AppError> {
    let mut upload = None;
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Invalid multipart body: {e}")))?
    {
        if field.name() == Some("resume") {
            upload = Some(UploadedFile::read(field).await?);
        }
    }
    let file = upload
        .ok_or_else(|| AppError::Validation("Missing 'resume' file field".to_string()))?;

    let file_type = DocumentKind::detect(file.file_name.as_deref(), file.content_type.as_deref())
        .ok_or_else(|| {
            ExtractionError::UnsupportedFileType(
                file.file_name.clone().unwrap_or_else(|| "unknown".to_string()),
            )
        })?;
    let size_kb = file.size_kb();

    let UploadedFile {
        file_name,
        content_type,
        bytes,
    } = file;
    let name = file_name.clone();
    let text = tokio::task::spawn_blocking(move || {
        extract_text(name.as_deref(), content_type.as_deref(), &bytes)
    })
    .await
    .map_err(|e| anyhow::anyhow!("extraction task failed: {e}"))??;

    Ok(Json(ExtractResponse {
        file_name,
        file_type,
        size_kb,
        text,
    }))
}
