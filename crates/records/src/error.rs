//! Error taxonomy for store mutations and form validation.

use std::fmt;

use thiserror::Error;

/// Errors raised by [`crate::RecordStore`] mutations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// A record with the same id already exists in the collection.
    #[error("ya existe un registro con el id `{0}`")]
    DuplicateId(String),
}

/// A single field-level validation failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    /// Form field name, matching the input's `name` attribute.
    pub field: &'static str,
    /// Message shown inline next to the field.
    pub message: String,
}

/// Ordered collection of field-level validation failures.
///
/// Kept in field order so forms render errors in the same order as
/// their inputs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    errors: Vec<FieldError>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a failure for `field`.
    pub fn push(&mut self, field: &'static str, message: impl Into<String>) {
        self.errors.push(FieldError {
            field,
            message: message.into(),
        });
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// First message recorded for `field`, if any.
    pub fn get(&self, field: &str) -> Option<&str> {
        self.errors
            .iter()
            .find(|e| e.field == field)
            .map(|e| e.message.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.errors.iter()
    }

    /// `Ok(())` when no failures were recorded, otherwise `Err(self)`.
    pub fn into_result(self) -> Result<(), ValidationErrors> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.errors.is_empty() {
            return f.write_str("validation failed");
        }
        write!(f, "validation failed for ")?;
        for (i, e) in self.errors.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}: {}", e.field, e.message)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_and_get() {
        let mut errors = ValidationErrors::new();
        errors.push("email", "es obligatorio");
        errors.push("email", "second message is shadowed");

        assert_eq!(errors.len(), 2);
        assert_eq!(errors.get("email"), Some("es obligatorio"));
        assert_eq!(errors.get("name"), None);
    }

    #[test]
    fn test_into_result_empty_is_ok() {
        assert!(ValidationErrors::new().into_result().is_ok());
    }

    #[test]
    fn test_into_result_preserves_order() {
        let mut errors = ValidationErrors::new();
        errors.push("name", "es obligatorio");
        errors.push("total", "debe ser un número");

        let err = errors.into_result().unwrap_err();
        let fields: Vec<&str> = err.iter().map(|e| e.field).collect();
        assert_eq!(fields, vec!["name", "total"]);
    }

    #[test]
    fn test_display_mentions_fields() {
        let mut errors = ValidationErrors::new();
        errors.push("date", "formato inválido");

        let rendered = errors.to_string();
        assert!(rendered.contains("date"));
        assert!(rendered.contains("formato inválido"));
    }

    #[test]
    fn test_display_without_errors_has_no_dangling_fragment() {
        let rendered = ValidationErrors::new().to_string();
        assert_eq!(rendered, "validation failed");
    }

    // The screens surface this message verbatim; keep it the single
    // source of truth for duplicate-id wording.
    #[test]
    fn test_duplicate_id_message() {
        let err = StoreError::DuplicateId("7".to_string());
        assert_eq!(err.to_string(), "ya existe un registro con el id `7`");
    }
}
