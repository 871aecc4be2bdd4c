//! HTTP client for the two external collaborators.
//!
//! The template service hands us raw template text once per session; the
//! generation service turns a form payload into a downloadable document.
//! Both are fire-and-forget: no retry, no cancellation. A failed template
//! fetch degrades to a fixed placeholder so the form stays usable; a failed
//! generation surfaces one error for the caller to show the user.

use crate::config::StudioConfig;
use crate::error::{ProformaError, ProformaResult};
use crate::preview::TEMPLATE_FETCH_FAILED;
use serde::Deserialize;
use serde_json::Value;
use std::time::Duration;
use tracing::{info, warn};

#[derive(Deserialize)]
struct TemplateResponse {
    ok: bool,
    #[serde(default)]
    template_text: Option<String>,
}

#[derive(Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    download_url: Option<String>,
}

/// Result of a successful generation request.
#[derive(Debug, Clone)]
pub struct GenerateOutcome {
    /// Absolute URL of the generated document, when the service returned one.
    /// `None` still means success (the document was written server-side).
    pub download_url: Option<String>,
}

/// Client for the template and generation services.
pub struct StudioClient {
    base_url: String,
    client: reqwest::Client,
}

impl StudioClient {
    /// Build a client against the configured server.
    pub fn new(config: &StudioConfig) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());
        Self {
            base_url: config.server_url.clone(),
            client,
        }
    }

    /// `GET /template`. Any failure — transport, non-2xx, `ok=false`, or a
    /// body without text — degrades to the fixed placeholder string rather
    /// than an error; the form must stay usable without a template.
    pub async fn fetch_template(&self) -> String {
        let url = format!("{}/template", self.base_url);
        let res = match self.client.get(&url).send().await {
            Ok(res) => res,
            Err(e) => {
                warn!("template fetch failed: {e}");
                return TEMPLATE_FETCH_FAILED.to_string();
            }
        };
        if !res.status().is_success() {
            warn!("template fetch returned {}", res.status());
            return TEMPLATE_FETCH_FAILED.to_string();
        }
        match res.json::<TemplateResponse>().await {
            Ok(TemplateResponse {
                ok: true,
                template_text: Some(text),
            }) => {
                info!("template loaded ({} chars)", text.chars().count());
                text
            }
            Ok(_) => {
                warn!("template service declined");
                TEMPLATE_FETCH_FAILED.to_string()
            }
            Err(e) => {
                warn!("template response parse failed: {e}");
                TEMPLATE_FETCH_FAILED.to_string()
            }
        }
    }

    /// `POST /generate` with the flat form payload. A non-success status is
    /// one error; a success with no `download_url` is still a success.
    pub async fn generate(&self, payload: &Value) -> ProformaResult<GenerateOutcome> {
        let url = format!("{}/generate", self.base_url);
        let res = self.client.post(&url).json(payload).send().await?;

        if !res.status().is_success() {
            let status = res.status();
            return Err(ProformaError::GenerationService(format!(
                "server returned {status}"
            )));
        }

        let parsed: GenerateResponse = res
            .json()
            .await
            .map_err(|e| ProformaError::GenerationService(format!("response parse failed: {e}")))?;

        // relative URLs from the server resolve against our base
        let download_url = parsed.download_url.map(|u| {
            if u.starts_with("http://") || u.starts_with("https://") {
                u
            } else {
                format!("{}{}", self.base_url, u)
            }
        });
        Ok(GenerateOutcome { download_url })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn template_response_decodes_both_shapes() {
        let ok: TemplateResponse =
            serde_json::from_str(r#"{"ok": true, "template_text": "本文"}"#).expect("decode");
        assert!(ok.ok);
        assert_eq!(ok.template_text.as_deref(), Some("本文"));

        let declined: TemplateResponse =
            serde_json::from_str(r#"{"ok": false, "error": "missing"}"#).expect("decode");
        assert!(!declined.ok);
        assert!(declined.template_text.is_none());
    }

    #[test]
    fn generate_response_tolerates_missing_url() {
        let with: GenerateResponse =
            serde_json::from_str(r#"{"ok": true, "download_url": "/download/x.docx"}"#)
                .expect("decode");
        assert_eq!(with.download_url.as_deref(), Some("/download/x.docx"));

        let without: GenerateResponse = serde_json::from_str(r#"{"ok": true}"#).expect("decode");
        assert!(without.download_url.is_none());
    }
}
