//! Recovery over many share documents, one independent session each.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{info, warn};

use crate::consensus::Recovery;
use crate::document::ShareDocument;
use crate::error::{RecoveryError, Result};

const DOCUMENT_EXTENSION: &str = "json";

/// Result of recovering one input.
#[derive(Debug)]
pub struct BatchOutcome {
    pub input: PathBuf,
    pub result: Result<Recovery>,
}

impl BatchOutcome {
    pub fn is_success(&self) -> bool {
        self.result.is_ok()
    }

    /// Flatten into a serializable record.
    pub fn record(&self) -> OutcomeRecord {
        let input = self.input.display().to_string();
        match &self.result {
            Ok(recovery) => OutcomeRecord {
                input,
                secret: Some(recovery.secret.to_string()),
                subset_size: Some(recovery.subset_size),
                votes: Some(recovery.votes),
                error: None,
            },
            Err(err) => OutcomeRecord {
                input,
                secret: None,
                subset_size: None,
                votes: None,
                error: Some(err.to_string()),
            },
        }
    }
}

/// Serializable view of a [`BatchOutcome`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct OutcomeRecord {
    pub input: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secret: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subset_size: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub votes: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Expand directories into the share documents they contain.
///
/// Files are kept as given; a directory contributes its `*.json` entries
/// sorted by file name.
pub fn collect_inputs<P: AsRef<Path>>(paths: &[P]) -> Result<Vec<PathBuf>> {
    let mut inputs = Vec::new();
    for path in paths {
        let path = path.as_ref();
        if !path.is_dir() {
            inputs.push(path.to_path_buf());
            continue;
        }

        let mut documents = fs::read_dir(path)
            .map_err(|err| RecoveryError::io(path, err))?
            .map(|entry| {
                entry
                    .map(|entry| entry.path())
                    .map_err(|err| RecoveryError::io(path, err))
            })
            .collect::<Result<Vec<_>>>()?;
        documents.retain(|candidate| {
            candidate.is_file()
                && candidate.extension().and_then(|ext| ext.to_str())
                    == Some(DOCUMENT_EXTENSION)
        });
        documents.sort();
        inputs.extend(documents);
    }
    Ok(inputs)
}

/// Read one share document and recover its secret.
pub fn recover_file(path: impl AsRef<Path>) -> Result<Recovery> {
    ShareDocument::from_path(path)?.recover()
}

/// Recover every input; failures are recorded and do not stop the batch.
pub fn recover_batch<P: AsRef<Path>>(paths: &[P]) -> Vec<BatchOutcome> {
    paths
        .iter()
        .map(|path| {
            let input = path.as_ref().to_path_buf();
            let result = recover_file(&input);
            match &result {
                Ok(recovery) => info!(
                    input = %input.display(),
                    secret = %recovery.secret,
                    votes = recovery.votes,
                    "secret recovered"
                ),
                Err(err) => warn!(input = %input.display(), %err, "recovery failed"),
            }
            BatchOutcome { input, result }
        })
        .collect()
}
