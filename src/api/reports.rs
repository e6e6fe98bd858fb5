//! Validation Report Endpoints

use reqwest::multipart::{Form, Part};
use serde_json::Value;
use wasm_bindgen_futures::JsFuture;

use super::ApiClient;
use crate::error::{ApiError, ApiResult};
use crate::models::PsReport;

/// Image picked for upload, read into memory
#[derive(Debug, Clone)]
pub struct SignatureUpload {
    pub file_name: String,
    pub mime: String,
    pub bytes: Vec<u8>,
}

impl SignatureUpload {
    /// Read the contents of a file chosen in an `<input type="file">`
    pub async fn read(file: &web_sys::File) -> ApiResult<Self> {
        let buffer = JsFuture::from(file.array_buffer())
            .await
            .map_err(|e| ApiError::File(format!("{:?}", e)))?;
        Ok(Self {
            file_name: file.name(),
            mime: file.type_(),
            bytes: js_sys::Uint8Array::new(&buffer).to_vec(),
        })
    }

    fn into_part(self) -> ApiResult<Part> {
        let part = Part::bytes(self.bytes).file_name(self.file_name);
        if self.mime.is_empty() {
            Ok(part)
        } else {
            Ok(part.mime_str(&self.mime)?)
        }
    }
}

/// Only image MIME types are accepted as signatures
pub fn is_image_mime(mime: &str) -> bool {
    mime.starts_with("image/")
}

impl ApiClient {
    /// PS validation report for an application, `None` when none was filed
    pub async fn get_ps_report(&self, application_id: u32) -> ApiResult<Option<PsReport>> {
        let response = self
            .get(&format!("/validation-report/ps/{}", application_id))
            .send()
            .await?;
        Self::parse_envelope(response, "PS report").await
    }

    /// Attach the LIU signature image to an application's report
    pub async fn upload_liu_signature(
        &self,
        application_id: u32,
        upload: SignatureUpload,
    ) -> ApiResult<()> {
        log::info!(
            "uploading LIU signature {} ({} bytes) for application {}",
            upload.file_name,
            upload.bytes.len(),
            application_id
        );
        let form = Form::new()
            .text("applicationId", application_id.to_string())
            .part("LIUSignature", upload.into_part()?);
        let response = self
            .put("/validation-report/uploadsignature")
            .multipart(form)
            .send()
            .await?;
        Self::parse_envelope::<Value>(response, "signature upload").await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_image_mime() {
        assert!(is_image_mime("image/png"));
        assert!(is_image_mime("image/jpeg"));
        assert!(!is_image_mime("application/pdf"));
        assert!(!is_image_mime(""));
    }
}
