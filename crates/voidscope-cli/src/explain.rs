use crate::config::ExplainConfig;
use crate::error::{CliError, Result};
use crate::utils::progress::Spinner;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};
use voidscope::core::models::lattice::{LatticeType, VoidType};

const SYSTEM_INSTRUCTION: &str = "\
You are an expert crystallography professor.
Explain concepts clearly and concisely for students.
Focus on the geometry of voids (interstices) in metal lattices.
When asked, assume the user is looking at a 3D visualization.
Format the answer as Markdown.";

const EMPTY_RESPONSE_TEXT: &str = "No explanation generated.";

const OFFLINE_NOTE: &str =
    "_Configure an API key (see `explain.api-key-env`) to get a live, detailed explanation._";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExplanationSource {
    Model(String),
    Offline,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Explanation {
    pub text: String,
    pub source: ExplanationSource,
}

pub fn build_prompt(lattice: LatticeType, void_type: VoidType) -> String {
    format!(
        "Explain the {void} voids of the {label} ({name}) crystal structure.\n\
         1. How many such voids are there per unit cell?\n\
         2. What is their coordination number?\n\
         3. What is the radius ratio (r/R)?\n\
         Keep it concise, suitable for a side panel.",
        void = void_type.to_string().to_lowercase(),
        label = lattice.label(),
        name = lattice.full_name(),
    )
}

pub fn offline_explanation(lattice: LatticeType, void_type: VoidType) -> String {
    let body = match (lattice, void_type) {
        (LatticeType::Fcc, VoidType::Tetrahedral) => {
            "**Count:** 8 per unit cell.\n\n\
             **Position:** centers of the 8 octants ($1/4, 1/4, 1/4$ and equivalents).\n\n\
             **Formed by:** 1 corner atom and 3 face-center atoms.\n\n\
             **Radius ratio:** $r/R \\approx 0.225$"
        }
        (LatticeType::Fcc, VoidType::Octahedral) => {
            "**Count:** 4 per unit cell (1 body center + 12 edge centers, each edge shared by 4 cells).\n\n\
             **Position:** body center ($1/2, 1/2, 1/2$) and edge centers.\n\n\
             **Radius ratio:** $r/R \\approx 0.414$"
        }
        (LatticeType::Bcc, _) => {
            "No detailed explanation is available offline. \
             Voids in BCC crystals are flatter than those in FCC, \
             and the tetrahedral voids lie on the cell faces."
        }
    };
    format!("{}\n\n{}", body, OFFLINE_NOTE)
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest<'a> {
    system_instruction: Content<'a>,
    contents: Vec<Content<'a>>,
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    role: Option<&'a str>,
    parts: Vec<RequestPart<'a>>,
}

#[derive(Debug, Serialize)]
struct RequestPart<'a> {
    text: &'a str,
}

#[derive(Debug, Default, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Default, Deserialize)]
struct Candidate {
    #[serde(default)]
    content: Option<ResponseContent>,
}

#[derive(Debug, Default, Deserialize)]
struct ResponseContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Debug, Default, Deserialize)]
struct ResponsePart {
    #[serde(default)]
    text: Option<String>,
}

impl GenerateContentResponse {
    fn into_text(self) -> String {
        let text: String = self
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.content)
            .map(|content| {
                content
                    .parts
                    .into_iter()
                    .filter_map(|p| p.text)
                    .collect()
            })
            .unwrap_or_default();

        if text.trim().is_empty() {
            EMPTY_RESPONSE_TEXT.to_string()
        } else {
            text
        }
    }
}

pub struct ExplainClient {
    http: reqwest::Client,
    model: String,
    endpoint: String,
    api_key: String,
}

impl ExplainClient {
    pub fn new(config: &ExplainConfig, api_key: impl Into<String>) -> Result<Self> {
        let http = reqwest::Client::builder().timeout(config.timeout).build()?;
        Ok(Self {
            http,
            model: config.model.clone(),
            endpoint: config.endpoint.clone(),
            api_key: api_key.into(),
        })
    }

    pub fn request_url(&self) -> String {
        format!("{}/models/{}:generateContent", self.endpoint, self.model)
    }

    pub async fn generate(&self, prompt: &str) -> Result<String> {
        let body = GenerateContentRequest {
            system_instruction: Content {
                role: None,
                parts: vec![RequestPart {
                    text: SYSTEM_INSTRUCTION,
                }],
            },
            contents: vec![Content {
                role: Some("user"),
                parts: vec![RequestPart { text: prompt }],
            }],
        };

        let url = self.request_url();
        debug!("Sending explanation request to {}", url);
        let response = self
            .http
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(&body)
            .send()
            .await?
            .error_for_status()?;

        let parsed: GenerateContentResponse = response.json().await?;
        Ok(parsed.into_text())
    }
}

/// Produces an explanation for the selected void type, using the remote model
/// when a credential is configured and `offline` is not requested.
pub async fn explain(
    config: &ExplainConfig,
    lattice: LatticeType,
    void_type: VoidType,
    offline: bool,
) -> Result<Explanation> {
    let api_key = match (&config.api_key, offline) {
        (Some(key), false) => key,
        (None, false) => {
            warn!("No API key configured; using the built-in explanation.");
            return Ok(offline_result(lattice, void_type));
        }
        (_, true) => {
            info!("Offline mode requested; using the built-in explanation.");
            return Ok(offline_result(lattice, void_type));
        }
    };

    let client = ExplainClient::new(config, api_key.as_str())?;
    let prompt = build_prompt(lattice, void_type);

    let spinner = Spinner::start(format!(
        "Asking {} about {} {} voids...",
        config.model, lattice, void_type
    ));
    match client.generate(&prompt).await {
        Ok(text) => {
            spinner.finish("✓ Explanation received");
            Ok(Explanation {
                text,
                source: ExplanationSource::Model(config.model.clone()),
            })
        }
        Err(e) => {
            spinner.abandon("✗ Explanation request failed");
            Err(CliError::Explain(format!(
                "{}. Check your network connection and API key.",
                e
            )))
        }
    }
}

fn offline_result(lattice: LatticeType, void_type: VoidType) -> Explanation {
    Explanation {
        text: offline_explanation(lattice, void_type),
        source: ExplanationSource::Offline,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    fn config(endpoint: &str, api_key: Option<&str>) -> ExplainConfig {
        ExplainConfig {
            model: "test-model".to_string(),
            endpoint: endpoint.to_string(),
            api_key: api_key.map(str::to_string),
            timeout: Duration::from_secs(5),
        }
    }

    /// Serves a single HTTP request with `body` and hands back the raw request.
    async fn serve_once(
        status: &'static str,
        body: &'static str,
    ) -> (String, tokio::task::JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let handle = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut raw = Vec::new();
            let mut buf = [0u8; 4096];
            loop {
                let n = socket.read(&mut buf).await.unwrap();
                if n == 0 {
                    break;
                }
                raw.extend_from_slice(&buf[..n]);
                let text = String::from_utf8_lossy(&raw);
                if let Some(header_end) = text.find("\r\n\r\n") {
                    let content_length = text[..header_end]
                        .lines()
                        .find_map(|line| {
                            let (name, value) = line.split_once(':')?;
                            name.eq_ignore_ascii_case("content-length")
                                .then(|| value.trim().parse::<usize>().ok())?
                        })
                        .unwrap_or(0);
                    if raw.len() >= header_end + 4 + content_length {
                        break;
                    }
                }
            }
            let response = format!(
                "HTTP/1.1 {}\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{}",
                status,
                body.len(),
                body
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            socket.shutdown().await.ok();
            String::from_utf8_lossy(&raw).into_owned()
        });
        (format!("http://{}/v1beta", addr), handle)
    }

    #[test]
    fn prompt_names_lattice_and_void_type() {
        let prompt = build_prompt(LatticeType::Bcc, VoidType::Octahedral);
        assert!(prompt.contains("octahedral"));
        assert!(prompt.contains("BCC (body-centered cubic)"));
        assert!(prompt.contains("r/R"));
    }

    #[test]
    fn offline_texts_cover_each_combination() {
        let fcc_tet = offline_explanation(LatticeType::Fcc, VoidType::Tetrahedral);
        assert!(fcc_tet.contains("8 per unit cell"));
        assert!(fcc_tet.contains("0.225"));

        let fcc_oct = offline_explanation(LatticeType::Fcc, VoidType::Octahedral);
        assert!(fcc_oct.contains("4 per unit cell"));
        assert!(fcc_oct.contains("0.414"));

        for void_type in VoidType::ALL {
            let bcc = offline_explanation(LatticeType::Bcc, void_type);
            assert!(bcc.contains("flatter"));
            assert!(bcc.contains("cell faces"));
        }

        for lattice in LatticeType::ALL {
            for void_type in VoidType::ALL {
                assert!(offline_explanation(lattice, void_type).ends_with(OFFLINE_NOTE));
            }
        }
    }

    #[test]
    fn empty_response_yields_placeholder() {
        let parsed: GenerateContentResponse = serde_json::from_str("{}").unwrap();
        assert_eq!(parsed.into_text(), EMPTY_RESPONSE_TEXT);

        let parsed: GenerateContentResponse =
            serde_json::from_str(r#"{"candidates":[{"content":{"parts":[{"text":"  "}]}}]}"#)
                .unwrap();
        assert_eq!(parsed.into_text(), EMPTY_RESPONSE_TEXT);
    }

    #[test]
    fn response_parts_are_concatenated() {
        let parsed: GenerateContentResponse = serde_json::from_str(
            r#"{"candidates":[{"content":{"parts":[{"text":"Hello, "},{"text":"voids."}]}}]}"#,
        )
        .unwrap();
        assert_eq!(parsed.into_text(), "Hello, voids.");
    }

    #[test]
    fn request_body_uses_expected_field_names() {
        let body = GenerateContentRequest {
            system_instruction: Content {
                role: None,
                parts: vec![RequestPart { text: "sys" }],
            },
            contents: vec![Content {
                role: Some("user"),
                parts: vec![RequestPart { text: "hi" }],
            }],
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["systemInstruction"]["parts"][0]["text"], "sys");
        assert!(json["systemInstruction"].get("role").is_none());
        assert_eq!(json["contents"][0]["role"], "user");
        assert_eq!(json["contents"][0]["parts"][0]["text"], "hi");
    }

    #[test]
    fn request_url_targets_generate_content() {
        let client = ExplainClient::new(&config("https://host/v1beta", None), "k").unwrap();
        assert_eq!(
            client.request_url(),
            "https://host/v1beta/models/test-model:generateContent"
        );
    }

    #[tokio::test]
    async fn missing_api_key_falls_back_to_offline_text() {
        let explanation = explain(
            &config("http://127.0.0.1:9", None),
            LatticeType::Fcc,
            VoidType::Octahedral,
            false,
        )
        .await
        .unwrap();
        assert_eq!(explanation.source, ExplanationSource::Offline);
        assert!(explanation.text.contains("0.414"));
    }

    #[tokio::test]
    async fn offline_flag_skips_the_network_even_with_a_key() {
        let explanation = explain(
            &config("http://127.0.0.1:9", Some("key")),
            LatticeType::Bcc,
            VoidType::Tetrahedral,
            true,
        )
        .await
        .unwrap();
        assert_eq!(explanation.source, ExplanationSource::Offline);
    }

    #[tokio::test]
    async fn model_response_is_returned() {
        let (endpoint, server) = serve_once(
            "200 OK",
            r#"{"candidates":[{"content":{"parts":[{"text":"Eight voids per cell."}]}}]}"#,
        )
        .await;

        let explanation = explain(
            &config(&endpoint, Some("secret-key")),
            LatticeType::Fcc,
            VoidType::Tetrahedral,
            false,
        )
        .await
        .unwrap();

        assert_eq!(explanation.text, "Eight voids per cell.");
        assert_eq!(
            explanation.source,
            ExplanationSource::Model("test-model".to_string())
        );

        let request = server.await.unwrap();
        assert!(request.starts_with("POST /v1beta/models/test-model:generateContent"));
        assert!(request.to_ascii_lowercase().contains("x-goog-api-key: secret-key"));
        assert!(request.contains("systemInstruction"));
    }

    #[tokio::test]
    async fn http_error_status_becomes_explain_error() {
        let (endpoint, server) = serve_once("403 Forbidden", r#"{"error":"denied"}"#).await;

        let result = explain(
            &config(&endpoint, Some("bad-key")),
            LatticeType::Fcc,
            VoidType::Tetrahedral,
            false,
        )
        .await;

        assert!(matches!(result, Err(CliError::Explain(msg)) if msg.contains("API key")));
        server.await.unwrap();
    }

    #[tokio::test]
    async fn unreachable_endpoint_becomes_explain_error() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let result = explain(
            &config(&format!("http://{}/v1beta", addr), Some("key")),
            LatticeType::Bcc,
            VoidType::Octahedral,
            false,
        )
        .await;

        assert!(matches!(result, Err(CliError::Explain(msg)) if msg.contains("network")));
    }
}
