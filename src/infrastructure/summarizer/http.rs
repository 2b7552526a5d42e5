//! HTTP summarizer adapter

use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use reqwest::StatusCode;
use serde_json::Value;
use tracing::{debug, warn};

use crate::application::ports::{SubmissionError, SubmissionResult, Summarizer};
use crate::domain::config::Endpoint;
use crate::domain::upload::SelectedFile;

/// Multipart field the service reads the audio from
pub const FILE_FIELD: &str = "arquivo";

/// Detail used when the service reports failure without a message
pub const GENERIC_FAILURE: &str = "Erro ao processar o áudio";

static MISSING: Value = Value::Null;

/// Fields of the service's JSON object body. Anything that is not an
/// object (array, scalar, HTML) reads as every field missing.
struct ServiceResponse {
    body: Option<Value>,
}

impl ServiceResponse {
    fn parse(body: &[u8]) -> Self {
        Self {
            body: serde_json::from_slice::<Value>(body)
                .ok()
                .filter(Value::is_object),
        }
    }

    fn field(&self, key: &str) -> &Value {
        self.body
            .as_ref()
            .and_then(|body| body.get(key))
            .unwrap_or(&MISSING)
    }
}

/// Summarizer that posts the file to the remote service
pub struct HttpSummarizer {
    endpoint: Endpoint,
    client: reqwest::Client,
}

impl HttpSummarizer {
    /// Create a summarizer for the given endpoint
    pub fn new(endpoint: Endpoint) -> Self {
        Self {
            endpoint,
            client: reqwest::Client::new(),
        }
    }

    /// The endpoint requests are sent to
    pub fn endpoint(&self) -> &Endpoint {
        &self.endpoint
    }

    /// Detail shown when the service cannot be reached
    pub fn connection_failure_detail(&self) -> String {
        format!(
            "Erro de conexão. Verifique se o backend está rodando em {}",
            self.endpoint.base_url()
        )
    }

    /// Build the multipart form carrying the file
    fn build_form(file: &SelectedFile) -> Form {
        // Shares the selection's buffer instead of copying the recording
        let new_part = || {
            Part::stream_with_length(file.bytes(), file.size_bytes())
                .file_name(file.name().to_string())
        };
        let part = match new_part().mime_str(file.media_type()) {
            Ok(part) => part,
            Err(e) => {
                debug!(media_type = file.media_type(), error = %e, "sending file without media type");
                new_part()
            }
        };
        Form::new().part(FILE_FIELD, part)
    }

    /// Classify a request that produced no response
    fn classify_send_error(&self, err: &reqwest::Error) -> SubmissionError {
        if err.is_connect() || err.is_timeout() || err.is_request() {
            SubmissionError::Transport(self.connection_failure_detail())
        } else {
            SubmissionError::Unexpected(err.to_string())
        }
    }

    /// Interpret a response status and body
    fn interpret(status: StatusCode, body: &[u8]) -> SubmissionResult {
        let response = ServiceResponse::parse(body);

        if !status.is_success() {
            let detail =
                text_of(response.field("mensagem")).unwrap_or_else(|| server_error(status));
            return Err(SubmissionError::Service(detail));
        }

        if is_truthy(response.field("sucesso")) {
            if let Some(summary) = text_of(response.field("resumo")) {
                return Ok(summary);
            }
        }

        Err(SubmissionError::Service(
            text_of(response.field("mensagem")).unwrap_or_else(|| GENERIC_FAILURE.to_string()),
        ))
    }
}

#[async_trait]
impl Summarizer for HttpSummarizer {
    async fn submit(&self, file: &SelectedFile) -> SubmissionResult {
        let form = Self::build_form(file);
        debug!(url = self.endpoint.url(), name = file.name(), "posting file");

        let response = match self
            .client
            .post(self.endpoint.url())
            .multipart(form)
            .send()
            .await
        {
            Ok(response) => response,
            Err(e) => {
                debug!(error = %e, "request failed before a response arrived");
                return Err(self.classify_send_error(&e));
            }
        };

        let status = response.status();
        debug!(status = status.as_u16(), "service responded");

        match response.bytes().await {
            Ok(body) => Self::interpret(status, &body),
            Err(_) if !status.is_success() => Err(SubmissionError::Service(server_error(status))),
            Err(e) => {
                warn!(error = %e, "failed to read response body");
                Err(SubmissionError::Unexpected(e.to_string()))
            }
        }
    }
}

fn server_error(status: StatusCode) -> String {
    format!("Erro do servidor: {}", status.as_u16())
}

/// JavaScript-style truthiness, as the service's clients have always read the flag
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Text of a field if it is truthy
fn text_of(value: &Value) -> Option<String> {
    if !is_truthy(value) {
        return None;
    }
    match value {
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}
