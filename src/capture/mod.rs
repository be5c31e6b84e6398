//! Data model of a website capture result.
//!
//! Mirrors the JSON returned by the capture service. Fields the service may
//! omit default to empty values so partially extracted results still load.

mod records;

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::CapsiftError;

pub use records::{
    ElementRecord, ExternalScript, FormInput, FormRecord, HtmlLine, InlineScript, NetworkEntry,
    PopupRecord, ScriptRecord,
};

// ---------------------------------------------------------------------------
// CaptureResult
// ---------------------------------------------------------------------------

/// Everything one capture produced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CaptureResult {
    pub session_id: String,

    /// Base64-encoded screenshot, passed through untouched.
    pub screenshot: String,

    /// Image format of `screenshot`, `"png"` unless the service says otherwise.
    pub screenshot_format: String,

    pub network_logs: Vec<NetworkEntry>,

    pub dom_elements: DomElements,

    /// URL after redirects.
    pub final_url: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub capture_config: Option<CaptureConfig>,

    /// Raw HTML, present only when the capture asked for it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub html_source: Option<String>,
}

impl Default for CaptureResult {
    fn default() -> Self {
        Self {
            session_id:        String::new(),
            screenshot:        String::new(),
            screenshot_format: "png".to_owned(),
            network_logs:      Vec::new(),
            dom_elements:      DomElements::default(),
            final_url:         String::new(),
            capture_config:    None,
            html_source:       None,
        }
    }
}

/// Viewport settings the capture ran with.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CaptureConfig {
    pub full_page: bool,
    pub width:     u32,
    pub height:    u32,
    pub delay:     u32,
}

/// DOM inventory extracted from the captured page.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DomElements {
    pub clickable_elements: Vec<ElementRecord>,
    pub hidden_elements:    Vec<ElementRecord>,
    pub forms:              Vec<FormRecord>,
    pub scripts:            Vec<ScriptRecord>,
    pub popups:             Vec<PopupRecord>,

    /// `content` of a `<meta http-equiv="refresh">`, if any.
    pub redirect: Option<String>,
    pub title:    Option<String>,
    pub url:      Option<String>,

    /// Set by the service when DOM extraction failed; the lists are then empty.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl CaptureResult {
    // ── Loading ───────────────────────────────────────────────────────────

    /// Parse a capture result from JSON text.
    pub fn from_json(json: &str) -> Result<Self, CapsiftError> {
        let result: Self = serde_json::from_str(json)?;
        result.log_loaded();
        Ok(result)
    }

    /// Parse a capture result from a JSON byte stream.
    pub fn from_reader(reader: impl Read) -> Result<Self, CapsiftError> {
        let result: Self = serde_json::from_reader(reader)?;
        result.log_loaded();
        Ok(result)
    }

    /// Read and parse a capture result file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, CapsiftError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| CapsiftError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(path = %path.display(), "loading capture result");
        Self::from_reader(BufReader::new(file))
    }

    fn log_loaded(&self) {
        tracing::debug!(
            final_url  = %self.final_url,
            network    = self.network_logs.len(),
            clickable  = self.dom_elements.clickable_elements.len(),
            hidden     = self.dom_elements.hidden_elements.len(),
            forms      = self.dom_elements.forms.len(),
            scripts    = self.dom_elements.scripts.len(),
            popups     = self.dom_elements.popups.len(),
            html_bytes = self.html_source.as_deref().map_or(0, str::len),
            "capture result loaded"
        );
        if let Some(error) = &self.dom_elements.error {
            tracing::warn!(%error, "capture reported a DOM extraction failure");
        }
    }

    // ── Derived collections ───────────────────────────────────────────────

    /// The HTML source split on `\n`, numbered from 1.
    ///
    /// Empty when the capture carried no source or an empty one.
    pub fn html_lines(&self) -> Vec<HtmlLine<'_>> {
        match self.html_source.as_deref() {
            Some(source) if !source.is_empty() => source
                .split('\n')
                .enumerate()
                .map(|(idx, text)| HtmlLine { number: idx + 1, text })
                .collect(),
            _ => Vec::new(),
        }
    }

    /// Scripts loaded from a URL.
    pub fn external_scripts(&self) -> Vec<ExternalScript<'_>> {
        self.dom_elements
            .scripts
            .iter()
            .filter(|s| !s.src.is_empty())
            .map(ExternalScript)
            .collect()
    }

    /// Scripts embedded in the page.
    pub fn inline_scripts(&self) -> Vec<InlineScript<'_>> {
        self.dom_elements
            .scripts
            .iter()
            .filter(|s| s.inline)
            .map(InlineScript)
            .collect()
    }
}
