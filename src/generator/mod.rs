//! Video generation collaborator
//!
//! The upload handler hands every accepted model to a [`VideoGenerator`].
//! The provider integration lives behind this trait so the request path never
//! depends on how (or whether) a real network call is made.

mod mock;

use serde::Serialize;
use std::path::PathBuf;
use thiserror::Error;

pub use mock::{MockVeoGenerator, DEFAULT_PROMPT};

/// Input for a single generation job
#[derive(Debug, Clone)]
pub struct GenerationRequest {
    /// Scratch copy of the uploaded model; removed once `generate` returns
    pub model_path: PathBuf,
    /// File name as supplied by the client (e.g. `car.glb`)
    pub source_name: String,
    /// Optional advertising prompt from the form
    pub prompt: Option<String>,
}

/// Job descriptor returned to the browser as JSON
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationResponse {
    pub video_url: String,
    pub job_id: String,
    pub status: String,
    pub used_prompt: String,
    pub source_model: String,
}

#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("failed to read model file {path}: {source}")]
    ModelUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("video provider rejected the job: {0}")]
    Provider(String),
}

/// Capability that turns an uploaded model into a video generation job.
///
/// Implementations may block; callers run them off the async executor.
pub trait VideoGenerator: Send + Sync {
    fn generate(&self, request: GenerationRequest) -> Result<GenerationResponse, GenerateError>;
}

impl<F> VideoGenerator for F
where
    F: Fn(GenerationRequest) -> Result<GenerationResponse, GenerateError> + Send + Sync,
{
    fn generate(&self, request: GenerationRequest) -> Result<GenerationResponse, GenerateError> {
        self(request)
    }
}
