//! Multipart form collection for the upload routes.

use std::collections::HashMap;

use anyhow::anyhow;
use axum::extract::Multipart;
use bytes::Bytes;

use crate::errors::AppError;

/// A fully-read multipart form: file parts keyed by part name, text parts
/// keyed likewise. Parts without a name are skipped.
pub struct UploadedForm {
    files: HashMap<String, Bytes>,
    fields: HashMap<String, String>,
}

impl UploadedForm {
    /// Drains the multipart stream into memory. Parts carrying a filename
    /// are treated as file uploads, everything else as text fields.
    pub async fn collect(mut multipart: Multipart) -> Result<Self, AppError> {
        let mut files = HashMap::new();
        let mut fields = HashMap::new();

        while let Some(field) = multipart
            .next_field()
            .await
            .map_err(|e| AppError::Internal(anyhow!("failed to read multipart field: {e}")))?
        {
            let Some(name) = field.name().map(String::from) else {
                continue;
            };

            if field.file_name().is_some() {
                let data = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::Internal(anyhow!("failed to read upload '{name}': {e}")))?;
                files.insert(name, data);
            } else {
                let value = field
                    .text()
                    .await
                    .map_err(|e| AppError::Internal(anyhow!("failed to read field '{name}': {e}")))?;
                fields.insert(name, value);
            }
        }

        Ok(UploadedForm { files, fields })
    }

    /// Returns the named file upload, or `MissingInput` naming it.
    pub fn file(&self, name: &str) -> Result<Bytes, AppError> {
        self.files
            .get(name)
            .cloned()
            .ok_or_else(|| AppError::missing(name))
    }

    /// Returns the named text field, or `MissingInput` naming it.
    /// Whitespace-only values count as missing.
    pub fn field(&self, name: &str) -> Result<&str, AppError> {
        self.fields
            .get(name)
            .map(|s| s.trim())
            .filter(|s| !s.is_empty())
            .ok_or_else(|| AppError::missing(name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(files: &[(&str, &[u8])], fields: &[(&str, &str)]) -> UploadedForm {
        UploadedForm {
            files: files
                .iter()
                .map(|(k, v)| (k.to_string(), Bytes::copy_from_slice(v)))
                .collect(),
            fields: fields
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        }
    }

    #[test]
    fn test_missing_file_names_the_part() {
        let form = form(&[], &[]);
        let err = form.file("cv").unwrap_err();
        assert!(err.to_string().contains("cv"));
    }

    #[test]
    fn test_blank_field_counts_as_missing() {
        let form = form(&[], &[("companyName", "   ")]);
        assert!(form.field("companyName").is_err());
    }

    #[test]
    fn test_field_is_trimmed() {
        let form = form(&[], &[("companyName", "  Acme  ")]);
        assert_eq!(form.field("companyName").unwrap(), "Acme");
    }

    #[test]
    fn test_present_file_is_returned() {
        let form = form(&[("notes", b"%PDF-1.4")], &[]);
        assert_eq!(form.file("notes").unwrap().as_ref(), b"%PDF-1.4");
    }
}
