//! Placeholder Veo client.
//!
//! Returns a fixed job descriptor with the same shape a real provider
//! integration would produce. No network traffic is generated.

use super::{GenerateError, GenerationRequest, GenerationResponse, VideoGenerator};

/// Prompt reported back when the form did not carry one
pub const DEFAULT_PROMPT: &str = "(default prompt)";

const DEMO_VIDEO_URL: &str = "https://example.com/generated-veo-ad.mp4";
const DEMO_JOB_ID: &str = "demo-job-1234";
const QUEUED: &str = "queued";

#[derive(Debug, Clone, Default)]
pub struct MockVeoGenerator;

impl MockVeoGenerator {
    pub const fn new() -> Self {
        Self
    }
}

impl VideoGenerator for MockVeoGenerator {
    fn generate(&self, request: GenerationRequest) -> Result<GenerationResponse, GenerateError> {
        let used_prompt = request
            .prompt
            .filter(|p| !p.is_empty())
            .unwrap_or_else(|| DEFAULT_PROMPT.to_string());

        Ok(GenerationResponse {
            video_url: DEMO_VIDEO_URL.to_string(),
            job_id: DEMO_JOB_ID.to_string(),
            status: QUEUED.to_string(),
            used_prompt,
            source_model: request.source_name,
        })
    }
}
