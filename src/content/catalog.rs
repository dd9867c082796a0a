use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::content::builtin;
use crate::content::types::{QuestionRecord, Verdict};

/// Errors that can occur when loading a question catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to read catalog file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid JSON catalog: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid TOML catalog: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Unsupported catalog format '{path}': expected a .json or .toml file")]
    UnsupportedFormat { path: PathBuf },

    #[error("Catalog validation failed: {message}")]
    ValidationError { message: String },
}

/// On-disk shape shared by the JSON and TOML formats.
#[derive(Debug, Serialize, Deserialize)]
struct CatalogFile {
    questions: Vec<QuestionRecord>,
}

/// Ordered, validated collection of quiz questions.
///
/// Read-only once built: the session core only ever looks records up.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Catalog {
    questions: Vec<QuestionRecord>,
}

impl Catalog {
    /// Builds a catalog, rejecting records that break the catalog invariants.
    pub fn new(questions: Vec<QuestionRecord>) -> Result<Self, CatalogError> {
        let catalog = Self { questions };
        catalog.validate()?;
        Ok(catalog)
    }

    /// The fifteen reference messages shipped with the binary.
    pub fn builtin() -> Self {
        Self {
            questions: builtin::questions(),
        }
    }

    /// Loads a catalog file; the extension selects the format.
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase());

        let content = fs::read_to_string(path).map_err(|e| CatalogError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let catalog = match extension.as_deref() {
            Some("json") => Self::from_json_str(&content)?,
            Some("toml") => Self::from_toml_str(&content)?,
            _ => {
                return Err(CatalogError::UnsupportedFormat {
                    path: path.to_path_buf(),
                })
            }
        };

        tracing::info!(
            path = %path.display(),
            questions = catalog.len(),
            "Loaded question catalog"
        );
        Ok(catalog)
    }

    pub fn from_json_str(content: &str) -> Result<Self, CatalogError> {
        let file: CatalogFile = serde_json::from_str(content)?;
        Self::new(file.questions)
    }

    pub fn from_toml_str(content: &str) -> Result<Self, CatalogError> {
        let file: CatalogFile = toml::from_str(content)?;
        Self::new(file.questions)
    }

    /// Validates the catalog.
    ///
    /// Checks:
    /// - At least one question
    /// - Identifiers are unique
    /// - Every question has one or two distinct emotion tags
    pub fn validate(&self) -> Result<(), CatalogError> {
        if self.questions.is_empty() {
            return Err(CatalogError::ValidationError {
                message: "At least one question must be defined".to_string(),
            });
        }

        let mut seen = HashSet::new();
        for question in &self.questions {
            if !seen.insert(question.id) {
                return Err(CatalogError::ValidationError {
                    message: format!("Duplicate question id {}", question.id),
                });
            }

            let count = question.emotions.len();
            if !(1..=2).contains(&count) {
                return Err(CatalogError::ValidationError {
                    message: format!(
                        "Question {} must list 1 or 2 emotions, found {}",
                        question.id, count
                    ),
                });
            }

            if count == 2 && question.emotions[0] == question.emotions[1] {
                return Err(CatalogError::ValidationError {
                    message: format!("Question {} repeats an emotion", question.id),
                });
            }
        }

        Ok(())
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// Record at a catalog position (not an identifier).
    pub fn get(&self, position: usize) -> Option<&QuestionRecord> {
        self.questions.get(position)
    }

    /// Record with the given identifier.
    pub fn find(&self, id: u32) -> Option<&QuestionRecord> {
        self.questions.iter().find(|question| question.id == id)
    }

    pub fn questions(&self) -> &[QuestionRecord] {
        &self.questions
    }

    pub fn count_by_verdict(&self, verdict: Verdict) -> usize {
        self.questions
            .iter()
            .filter(|question| question.verdict == verdict)
            .count()
    }
}
