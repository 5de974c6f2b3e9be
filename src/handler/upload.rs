//! Upload intake module
//!
//! `POST /api/generate`: validates a multipart form carrying a `model` file
//! (GLTF/GLB) and an optional `prompt`, streams the model into a scratch file,
//! hands it to the video generator and answers with the job descriptor.
//!
//! The scratch file is owned by a [`TempPath`] guard, so it is removed on every
//! exit path: success, validation failure mid-stream, generator error, or a
//! panicking generator.

use crate::config::AppState;
use crate::generator::{GenerateError, GenerationRequest, GenerationResponse};
use crate::http;
use crate::logger;
use http_body_util::{BodyExt, Full};
use hyper::body::{Body, Bytes};
use hyper::header::{HeaderMap, CONTENT_LENGTH, CONTENT_TYPE};
use hyper::{Request, Response, StatusCode};
use multer::{Constraints, Field, Multipart, SizeLimit};
use std::path::Path;
use std::sync::Arc;
use tempfile::TempPath;
use thiserror::Error;
use tokio::io::AsyncWriteExt;

pub const GENERATE_PATH: &str = "/api/generate";

const MODEL_FIELD: &str = "model";
const PROMPT_FIELD: &str = "prompt";
const SUPPORTED_EXTENSIONS: [&str; 2] = ["gltf", "glb"];
const SCRATCH_PREFIX: &str = "upload-";
const MULTIPART_FORM_DATA: &str = "multipart/form-data";

/// Reasons an upload request ends without a job descriptor
#[derive(Debug, Error)]
pub enum UploadError {
    #[error("Unknown endpoint")]
    UnknownEndpoint,
    #[error("Expected multipart/form-data")]
    NotMultipart,
    #[error("File too large")]
    PayloadTooLarge,
    #[error("Malformed multipart body: {0}")]
    Malformed(#[source] multer::Error),
    #[error("Missing model file upload")]
    MissingModel,
    #[error("Only GLTF/GLB files are supported")]
    UnsupportedMediaType,
    #[error("Failed to store upload: {0}")]
    Storage(#[from] std::io::Error),
    #[error("Video generation failed: {0}")]
    Generation(#[from] GenerateError),
    #[error("Video generation worker failed: {0}")]
    Worker(#[from] tokio::task::JoinError),
}

impl UploadError {
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::UnknownEndpoint => StatusCode::NOT_FOUND,
            Self::NotMultipart | Self::Malformed(_) | Self::MissingModel => StatusCode::BAD_REQUEST,
            Self::PayloadTooLarge => StatusCode::PAYLOAD_TOO_LARGE,
            Self::UnsupportedMediaType => StatusCode::UNSUPPORTED_MEDIA_TYPE,
            Self::Storage(_) | Self::Worker(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Generation(_) => StatusCode::BAD_GATEWAY,
        }
    }

    /// Reason phrase sent to the client; server-side details stay in the log
    fn client_message(&self) -> String {
        match self {
            Self::Storage(_) | Self::Worker(_) => "Internal server error".to_string(),
            Self::Generation(_) => "Video generation failed".to_string(),
            other => other.to_string(),
        }
    }
}

impl From<multer::Error> for UploadError {
    fn from(err: multer::Error) -> Self {
        match err {
            multer::Error::StreamSizeExceeded { .. } | multer::Error::FieldSizeExceeded { .. } => {
                Self::PayloadTooLarge
            }
            multer::Error::NoMultipart | multer::Error::NoBoundary => Self::NotMultipart,
            other => Self::Malformed(other),
        }
    }
}

/// Model file that has been validated and written to the scratch directory
struct StoredModel {
    source_name: String,
    scratch: TempPath,
}

/// Fields of interest collected from the form
#[derive(Default)]
struct UploadForm {
    model: Option<StoredModel>,
    prompt: Option<String>,
}

/// Handle `POST` requests
pub async fn handle_upload<B>(req: Request<B>, state: &AppState) -> Response<Full<Bytes>>
where
    B: Body<Data = Bytes> + Send + 'static,
    B::Error: Into<Box<dyn std::error::Error + Send + Sync>>,
{
    match process_upload(req, state).await {
        Ok(job) => http::build_json_response(&job),
        Err(err) => {
            let status = err.status();
            if status.is_server_error() {
                logger::log_error(&format!("Upload failed: {err}"));
            } else {
                logger::log_warning(&format!("Upload rejected ({}): {err}", status.as_u16()));
            }
            http::build_error_response(status, &err.client_message())
        }
    }
}

async fn process_upload<B>(req: Request<B>, state: &AppState) -> Result<GenerationResponse, UploadError>
where
    B: Body<Data = Bytes> + Send + 'static,
    B::Error: Into<Box<dyn std::error::Error + Send + Sync>>,
{
    if req.uri().path() != GENERATE_PATH {
        return Err(UploadError::UnknownEndpoint);
    }

    let content_type = req
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default();
    if !is_form_data(content_type) {
        return Err(UploadError::NotMultipart);
    }
    check_declared_length(req.headers(), state.max_body_size)?;
    let boundary = multer::parse_boundary(content_type).map_err(|_| UploadError::NotMultipart)?;

    // The declared length is advisory; the stream itself is capped as well
    let constraints =
        Constraints::new().size_limit(SizeLimit::new().whole_stream(state.max_body_size));
    let mut multipart =
        Multipart::with_constraints(req.into_body().into_data_stream(), boundary, constraints);

    let form = read_form(&mut multipart, &state.upload_dir).await?;
    let model = form.model.ok_or(UploadError::MissingModel)?;

    let request = GenerationRequest {
        model_path: model.scratch.to_path_buf(),
        source_name: model.source_name,
        prompt: form.prompt,
    };
    let generator = Arc::clone(&state.generator);
    let outcome = tokio::task::spawn_blocking(move || generator.generate(request)).await;

    discard_scratch(model.scratch);
    Ok(outcome??)
}

/// Media type (parameters ignored) is `multipart/form-data`
fn is_form_data(content_type: &str) -> bool {
    content_type
        .split(';')
        .next()
        .is_some_and(|media| media.trim().eq_ignore_ascii_case(MULTIPART_FORM_DATA))
}

/// Reject requests whose declared `Content-Length` exceeds the ceiling.
/// A missing or unparsable header skips the check.
fn check_declared_length(headers: &HeaderMap, max_body_size: u64) -> Result<(), UploadError> {
    let Some(value) = headers.get(CONTENT_LENGTH) else {
        return Ok(());
    };

    match value.to_str().ok().and_then(|s| s.trim().parse::<u64>().ok()) {
        Some(size) if size > max_body_size => {
            logger::log_warning(&format!(
                "Request body too large: {size} bytes (max: {max_body_size})"
            ));
            Err(UploadError::PayloadTooLarge)
        }
        Some(_) => Ok(()),
        None => {
            logger::log_warning(&format!(
                "Invalid Content-Length value: {value:?}, skipping size check"
            ));
            Ok(())
        }
    }
}

/// Walk the multipart stream, storing the first `model` file and the first `prompt`
async fn read_form(multipart: &mut Multipart<'_>, upload_dir: &Path) -> Result<UploadForm, UploadError> {
    let mut form = UploadForm::default();

    while let Some(mut field) = multipart.next_field().await? {
        let name = field.name().map(ToString::to_string);
        match name.as_deref() {
            Some(MODEL_FIELD) if form.model.is_none() => {
                // An empty file name means no file was chosen; a name without a
                // final component (`dir/`) is still a file of the wrong kind
                let source_name = field
                    .file_name()
                    .filter(|name| !name.is_empty())
                    .map(client_file_name)
                    .ok_or(UploadError::MissingModel)?;
                let extension =
                    supported_extension(&source_name).ok_or(UploadError::UnsupportedMediaType)?;
                let scratch = store_model(&mut field, upload_dir, &extension).await?;
                form.model = Some(StoredModel { source_name, scratch });
            }
            Some(PROMPT_FIELD) if form.prompt.is_none() => {
                form.prompt = Some(field.text().await?);
            }
            // Unread field data is skipped by the next `next_field` call
            _ => {}
        }
    }

    Ok(form)
}

/// Last path component of a client-supplied file name
fn client_file_name(raw: &str) -> String {
    raw.rsplit(['/', '\\']).next().unwrap_or_default().to_string()
}

/// Lower-cased extension if the file name is a GLTF/GLB model
fn supported_extension(file_name: &str) -> Option<String> {
    let extension = Path::new(file_name)
        .extension()?
        .to_str()?
        .to_ascii_lowercase();
    SUPPORTED_EXTENSIONS
        .contains(&extension.as_str())
        .then_some(extension)
}

/// Stream one field into a uniquely named scratch file
async fn store_model(
    field: &mut Field<'_>,
    upload_dir: &Path,
    extension: &str,
) -> Result<TempPath, UploadError> {
    let named = tempfile::Builder::new()
        .prefix(SCRATCH_PREFIX)
        .suffix(&format!(".{extension}"))
        .tempfile_in(upload_dir)?;
    let (file, scratch) = named.into_parts();
    let mut file = tokio::fs::File::from_std(file);

    while let Some(chunk) = field.chunk().await? {
        file.write_all(&chunk).await?;
    }
    file.flush().await?;

    Ok(scratch)
}

/// Remove the scratch file; failures are logged, never surfaced
fn discard_scratch(scratch: TempPath) {
    let path = scratch.to_path_buf();
    if let Err(e) = scratch.close() {
        if e.kind() != std::io::ErrorKind::NotFound {
            logger::log_warning(&format!(
                "Failed to remove scratch file '{}': {e}",
                path.display()
            ));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::{MockVeoGenerator, VideoGenerator, DEFAULT_PROMPT};
    use std::path::PathBuf;
    use std::sync::Mutex;
    use tempfile::TempDir;

    const BOUNDARY: &str = "X-VEO-TEST-BOUNDARY";

    enum Part<'a> {
        File(&'a str, &'a str, &'a [u8]),
        Text(&'a str, &'a str),
    }

    fn multipart_body(parts: &[Part<'_>]) -> Vec<u8> {
        let mut body = Vec::new();
        for part in parts {
            body.extend_from_slice(format!("--{BOUNDARY}\r\n").as_bytes());
            match part {
                Part::File(name, file_name, data) => {
                    body.extend_from_slice(
                        format!(
                            "Content-Disposition: form-data; name=\"{name}\"; filename=\"{file_name}\"\r\nContent-Type: application/octet-stream\r\n\r\n"
                        )
                        .as_bytes(),
                    );
                    body.extend_from_slice(data);
                }
                Part::Text(name, value) => {
                    body.extend_from_slice(
                        format!("Content-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}")
                            .as_bytes(),
                    );
                }
            }
            body.extend_from_slice(b"\r\n");
        }
        body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());
        body
    }

    fn upload_request(parts: &[Part<'_>]) -> Request<Full<Bytes>> {
        let body = multipart_body(parts);
        Request::post(GENERATE_PATH)
            .header(CONTENT_TYPE, format!("multipart/form-data; boundary={BOUNDARY}"))
            .header(CONTENT_LENGTH, body.len())
            .body(Full::new(Bytes::from(body)))
            .unwrap()
    }

    fn state_with(generator: Arc<dyn VideoGenerator>) -> (TempDir, AppState) {
        let tmp = tempfile::tempdir().unwrap();
        let state = AppState::new(tmp.path().join("public"), tmp.path().join("uploads"), generator);
        state.prepare_upload_dir().unwrap();
        (tmp, state)
    }

    fn mock_state() -> (TempDir, AppState) {
        state_with(Arc::new(MockVeoGenerator::new()))
    }

    fn scratch_entries(state: &AppState) -> usize {
        std::fs::read_dir(&state.upload_dir).unwrap().count()
    }

    async fn json_body(resp: Response<Full<Bytes>>) -> serde_json::Value {
        let bytes = resp.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_glb_with_prompt() {
        let (_tmp, state) = mock_state();
        let req = upload_request(&[
            Part::File("model", "car.glb", b"glTF\x02\x00\x00\x00"),
            Part::Text("prompt", "ad for a car"),
        ]);

        let resp = handle_upload(req, &state).await;
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(resp.headers()["content-type"], "application/json");
        assert_eq!(resp.headers()["access-control-allow-origin"], "*");
        assert_eq!(resp.headers()["cache-control"], "no-cache");
        assert!(resp.headers().contains_key("content-length"));

        let json = json_body(resp).await;
        assert_eq!(json["sourceModel"], "car.glb");
        assert_eq!(json["usedPrompt"], "ad for a car");
        assert_eq!(json["status"], "queued");
        assert_eq!(json["jobId"], "demo-job-1234");
        assert_eq!(json["videoUrl"], "https://example.com/generated-veo-ad.mp4");
        assert_eq!(scratch_entries(&state), 0);
    }

    #[tokio::test]
    async fn test_gltf_without_prompt_uses_default() {
        let (_tmp, state) = mock_state();
        let req = upload_request(&[Part::File("model", "scene.gltf", br#"{"asset":{"version":"2.0"}}"#)]);

        let resp = handle_upload(req, &state).await;
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(json_body(resp).await["usedPrompt"], DEFAULT_PROMPT);
    }

    #[tokio::test]
    async fn test_prompt_before_model_and_uppercase_extension() {
        let (_tmp, state) = mock_state();
        let req = upload_request(&[
            Part::Text("prompt", "sunset drive"),
            Part::Text("style", "cinematic"),
            Part::File("model", "models/Car.GLB", b"bytes"),
        ]);

        let resp = handle_upload(req, &state).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let json = json_body(resp).await;
        assert_eq!(json["sourceModel"], "Car.GLB");
        assert_eq!(json["usedPrompt"], "sunset drive");
    }

    #[tokio::test]
    async fn test_generator_sees_materialized_file() {
        let seen: Arc<Mutex<Vec<(PathBuf, Vec<u8>)>>> = Arc::default();
        let recorder = Arc::clone(&seen);
        let generator = move |req: GenerationRequest| -> Result<GenerationResponse, GenerateError> {
            let bytes = std::fs::read(&req.model_path).map_err(|source| {
                GenerateError::ModelUnreadable { path: req.model_path.clone(), source }
            })?;
            recorder.lock().unwrap().push((req.model_path.clone(), bytes));
            MockVeoGenerator::new().generate(req)
        };
        let (_tmp, state) = state_with(Arc::new(generator));

        let req = upload_request(&[Part::File("model", "car.glb", b"model-bytes")]);
        assert_eq!(handle_upload(req, &state).await.status(), StatusCode::OK);

        let seen = seen.lock().unwrap();
        let (path, bytes) = &seen[0];
        assert_eq!(bytes.as_slice(), b"model-bytes");
        assert_eq!(path.parent().unwrap(), state.upload_dir.as_path());
        let name = path.file_name().unwrap().to_str().unwrap();
        assert!(name.starts_with(SCRATCH_PREFIX));
        assert!(name.ends_with(".glb"));
        assert!(!path.exists());
    }

    #[tokio::test]
    async fn test_generator_failure_still_cleans_up() {
        let generator = |_: GenerationRequest| -> Result<GenerationResponse, GenerateError> {
            Err(GenerateError::Provider("simulated outage".to_string()))
        };
        let (_tmp, state) = state_with(Arc::new(generator));

        let req = upload_request(&[Part::File("model", "car.glb", b"bytes")]);
        let resp = handle_upload(req, &state).await;
        assert_eq!(resp.status(), StatusCode::BAD_GATEWAY);
        assert_eq!(scratch_entries(&state), 0);
    }

    #[tokio::test]
    async fn test_generator_panic_still_cleans_up() {
        let generator = |_: GenerationRequest| -> Result<GenerationResponse, GenerateError> {
            panic!("generator crashed")
        };
        let (_tmp, state) = state_with(Arc::new(generator));

        let req = upload_request(&[Part::File("model", "car.glb", b"bytes")]);
        let resp = handle_upload(req, &state).await;
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(scratch_entries(&state), 0);
    }

    #[tokio::test]
    async fn test_missing_model_is_400() {
        let (_tmp, state) = mock_state();
        let req = upload_request(&[Part::Text("prompt", "ad for a car")]);
        assert_eq!(handle_upload(req, &state).await.status(), StatusCode::BAD_REQUEST);

        let req = upload_request(&[Part::File("model", "", b"")]);
        assert_eq!(handle_upload(req, &state).await.status(), StatusCode::BAD_REQUEST);

        // A text field called `model` carries no file name
        let req = upload_request(&[Part::Text("model", "car.glb")]);
        assert_eq!(handle_upload(req, &state).await.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_unsupported_extension_is_415() {
        let (_tmp, state) = mock_state();
        for name in ["car.obj", "car.glb.exe", "car", ".glb", "car.fbx"] {
            let req = upload_request(&[Part::File("model", name, b"bytes")]);
            let resp = handle_upload(req, &state).await;
            assert_eq!(resp.status(), StatusCode::UNSUPPORTED_MEDIA_TYPE, "{name}");
        }
        assert_eq!(scratch_entries(&state), 0);
    }

    #[tokio::test]
    async fn test_wrong_content_type_is_400() {
        let (_tmp, state) = mock_state();
        for content_type in ["application/json", "multipart/form-data", "multipart/mixed; boundary=x"] {
            let req = Request::post(GENERATE_PATH)
                .header(CONTENT_TYPE, content_type)
                .body(Full::new(Bytes::from_static(b"{}")))
                .unwrap();
            let resp = handle_upload(req, &state).await;
            assert_eq!(resp.status(), StatusCode::BAD_REQUEST, "{content_type}");
        }

        let req = Request::post(GENERATE_PATH)
            .body(Full::new(Bytes::new()))
            .unwrap();
        assert_eq!(handle_upload(req, &state).await.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_declared_length_over_limit_is_413() {
        let (_tmp, state) = mock_state();
        let body = multipart_body(&[Part::File("model", "car.glb", b"bytes")]);
        let req = Request::post(GENERATE_PATH)
            .header(CONTENT_TYPE, format!("multipart/form-data; boundary={BOUNDARY}"))
            .header(CONTENT_LENGTH, "104857601")
            .body(Full::new(Bytes::from(body)))
            .unwrap();

        let resp = handle_upload(req, &state).await;
        assert_eq!(resp.status(), StatusCode::PAYLOAD_TOO_LARGE);
        assert_eq!(scratch_entries(&state), 0);
    }

    #[tokio::test]
    async fn test_declared_length_checked_before_boundary() {
        let (_tmp, state) = mock_state();
        let req = Request::post(GENERATE_PATH)
            .header(CONTENT_TYPE, "multipart/form-data")
            .header(CONTENT_LENGTH, "209715200")
            .body(Full::new(Bytes::new()))
            .unwrap();

        let resp = handle_upload(req, &state).await;
        assert_eq!(resp.status(), StatusCode::PAYLOAD_TOO_LARGE);
        assert_eq!(scratch_entries(&state), 0);

        // A non-form media type is rejected before the length check
        let req = Request::post(GENERATE_PATH)
            .header(CONTENT_TYPE, "application/json")
            .header(CONTENT_LENGTH, "209715200")
            .body(Full::new(Bytes::new()))
            .unwrap();
        assert_eq!(handle_upload(req, &state).await.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_first_model_and_prompt_win() {
        let (_tmp, state) = mock_state();
        let req = upload_request(&[
            Part::Text("prompt", "first"),
            Part::File("model", "a.glb", b"first model"),
            Part::File("model", "b.obj", b"second model"),
            Part::Text("prompt", "second"),
        ]);

        let resp = handle_upload(req, &state).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let json = json_body(resp).await;
        assert_eq!(json["sourceModel"], "a.glb");
        assert_eq!(json["usedPrompt"], "first");
        assert_eq!(scratch_entries(&state), 0);
    }

    #[tokio::test]
    async fn test_directory_like_file_name_is_415() {
        let (_tmp, state) = mock_state();
        for name in ["dir/", "models/"] {
            let req = upload_request(&[Part::File("model", name, b"bytes")]);
            let resp = handle_upload(req, &state).await;
            assert_eq!(resp.status(), StatusCode::UNSUPPORTED_MEDIA_TYPE, "{name}");
        }
        assert_eq!(scratch_entries(&state), 0);
    }

    #[tokio::test]
    async fn test_stream_over_limit_is_413() {
        let (_tmp, state) = mock_state();
        let state = state.with_max_body_size(256);
        let payload = vec![7u8; 4096];
        let body = multipart_body(&[Part::File("model", "car.glb", &payload)]);
        // No Content-Length: only the streaming cap can catch this
        let req = Request::post(GENERATE_PATH)
            .header(CONTENT_TYPE, format!("multipart/form-data; boundary={BOUNDARY}"))
            .body(Full::new(Bytes::from(body)))
            .unwrap();

        let resp = handle_upload(req, &state).await;
        assert_eq!(resp.status(), StatusCode::PAYLOAD_TOO_LARGE);
        assert_eq!(scratch_entries(&state), 0);
    }

    #[tokio::test]
    async fn test_truncated_body_is_400_and_cleans_up() {
        let (_tmp, state) = mock_state();
        let mut body = multipart_body(&[Part::File("model", "car.glb", &[1u8; 1024])]);
        body.truncate(body.len() - 600);
        let req = Request::post(GENERATE_PATH)
            .header(CONTENT_TYPE, format!("multipart/form-data; boundary={BOUNDARY}"))
            .body(Full::new(Bytes::from(body)))
            .unwrap();

        assert_eq!(handle_upload(req, &state).await.status(), StatusCode::BAD_REQUEST);
        assert_eq!(scratch_entries(&state), 0);
    }

    #[tokio::test]
    async fn test_other_post_path_is_404() {
        let (_tmp, state) = mock_state();
        let body = multipart_body(&[Part::File("model", "car.glb", b"bytes")]);
        let req = Request::post("/api/other")
            .header(CONTENT_TYPE, format!("multipart/form-data; boundary={BOUNDARY}"))
            .body(Full::new(Bytes::from(body)))
            .unwrap();
        assert_eq!(handle_upload(req, &state).await.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_declared_length_parsing() {
        let mut headers = HeaderMap::new();
        assert!(check_declared_length(&headers, 10).is_ok());
        headers.insert(CONTENT_LENGTH, "10".parse().unwrap());
        assert!(check_declared_length(&headers, 10).is_ok());
        headers.insert(CONTENT_LENGTH, "11".parse().unwrap());
        assert!(matches!(
            check_declared_length(&headers, 10),
            Err(UploadError::PayloadTooLarge)
        ));
        headers.insert(CONTENT_LENGTH, "lots".parse().unwrap());
        assert!(check_declared_length(&headers, 10).is_ok());
    }

    #[test]
    fn test_is_form_data() {
        assert!(is_form_data("multipart/form-data"));
        assert!(is_form_data("multipart/form-data; boundary=abc"));
        assert!(is_form_data("Multipart/Form-Data ;boundary=abc"));
        assert!(!is_form_data("multipart/mixed; boundary=abc"));
        assert!(!is_form_data("application/json"));
        assert!(!is_form_data(""));
    }

    #[test]
    fn test_supported_extension() {
        assert_eq!(supported_extension("car.glb").as_deref(), Some("glb"));
        assert_eq!(supported_extension("scene.GLTF").as_deref(), Some("gltf"));
        assert_eq!(supported_extension("car.obj"), None);
        assert_eq!(supported_extension("glb"), None);
    }

    #[test]
    fn test_client_file_name_strips_directories() {
        assert_eq!(client_file_name("car.glb"), "car.glb");
        assert_eq!(client_file_name("models/car.glb"), "car.glb");
        assert_eq!(client_file_name("C:\\fakepath\\car.glb"), "car.glb");
        assert_eq!(client_file_name("dir/"), "");
    }

    #[test]
    fn test_status_mapping() {
        assert_eq!(UploadError::UnknownEndpoint.status(), StatusCode::NOT_FOUND);
        assert_eq!(UploadError::NotMultipart.status(), StatusCode::BAD_REQUEST);
        assert_eq!(UploadError::PayloadTooLarge.status(), StatusCode::PAYLOAD_TOO_LARGE);
        assert_eq!(UploadError::MissingModel.status(), StatusCode::BAD_REQUEST);
        assert_eq!(UploadError::UnsupportedMediaType.status(), StatusCode::UNSUPPORTED_MEDIA_TYPE);
        assert_eq!(
            UploadError::Generation(GenerateError::Provider("x".into())).status(),
            StatusCode::BAD_GATEWAY
        );
        assert_eq!(
            UploadError::Storage(std::io::Error::other("disk full")).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
