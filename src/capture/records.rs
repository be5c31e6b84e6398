use std::borrow::Cow;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::traits::Record;
use crate::value::FieldValue;

// ---------------------------------------------------------------------------
// Network
// ---------------------------------------------------------------------------

/// One request seen while the page loaded.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NetworkEntry {
    pub url:    String,
    pub method: String,

    /// Resource type (`document`, `script`, `image`, ...).
    #[serde(rename = "type")]
    pub kind: String,

    /// `None` when no response arrived.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<u16>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_text: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<f64>,
}

impl Record for NetworkEntry {
    fn search_fields(&self) -> Vec<Cow<'_, str>> {
        vec![
            Cow::Borrowed(self.url.as_str()),
            Cow::Borrowed(self.method.as_str()),
            Cow::Borrowed(self.kind.as_str()),
            self.status.map(|s| s.to_string()).unwrap_or_default().into(),
        ]
    }

    fn column(&self, key: &str) -> FieldValue<'_> {
        match key {
            "url"         => FieldValue::text(&self.url),
            "method"      => FieldValue::text(&self.method),
            "type"        => FieldValue::text(&self.kind),
            "status"      => self.status.into(),
            "status_text" => self.status_text.as_deref().into(),
            _             => FieldValue::Missing,
        }
    }
}

// ---------------------------------------------------------------------------
// DOM elements
// ---------------------------------------------------------------------------

/// A clickable (or hidden clickable) element.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ElementRecord {
    pub tag:  String,
    pub text: String,
    pub id:   String,

    #[serde(deserialize_with = "lenient_string")]
    pub classes: String,

    pub href: String,

    #[serde(rename = "type")]
    pub kind: String,

    pub role:       String,
    pub visible:    bool,
    pub aria_label: String,

    /// Whether the element carries an `onclick` attribute.
    pub onclick:  bool,
    pub selector: String,
}

impl ElementRecord {
    /// What a table shows to identify the element: its selector, or the tag
    /// name when no selector was generated.
    pub fn label(&self) -> &str {
        if self.selector.is_empty() {
            &self.tag
        } else {
            &self.selector
        }
    }
}

impl Record for ElementRecord {
    fn search_fields(&self) -> Vec<Cow<'_, str>> {
        vec![
            Cow::Borrowed(self.text.as_str()),
            Cow::Borrowed(self.id.as_str()),
            Cow::Borrowed(self.classes.as_str()),
            Cow::Borrowed(self.selector.as_str()),
            Cow::Borrowed(self.tag.as_str()),
        ]
    }

    fn column(&self, key: &str) -> FieldValue<'_> {
        match key {
            "label"      => FieldValue::text(self.label()),
            "tag"        => FieldValue::text(&self.tag),
            "text"       => FieldValue::text(&self.text),
            "id"         => FieldValue::text(&self.id),
            "classes"    => FieldValue::text(&self.classes),
            "selector"   => FieldValue::text(&self.selector),
            "href"       => FieldValue::text(&self.href),
            "type"       => FieldValue::text(&self.kind),
            "role"       => FieldValue::text(&self.role),
            "aria_label" => FieldValue::text(&self.aria_label),
            _            => FieldValue::Missing,
        }
    }
}

/// A `<form>` and its first inputs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormRecord {
    pub action: String,
    pub method: String,
    pub id:     String,
    pub inputs: Vec<FormInput>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormInput {
    pub name: String,

    #[serde(rename = "type")]
    pub kind: String,

    pub required: bool,
}

impl Record for FormRecord {
    fn search_fields(&self) -> Vec<Cow<'_, str>> {
        vec![
            Cow::Borrowed(self.method.as_str()),
            Cow::Borrowed(self.action.as_str()),
            Cow::Borrowed(self.id.as_str()),
        ]
    }

    fn column(&self, key: &str) -> FieldValue<'_> {
        match key {
            "method" => FieldValue::text(&self.method),
            "action" => FieldValue::text(if self.action.is_empty() { "(no action)" } else { self.action.as_str() }),
            "id"     => FieldValue::text(&self.id),
            "inputs" => self.inputs.len().into(),
            _        => FieldValue::Missing,
        }
    }
}

/// A modal, overlay or cookie banner.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PopupRecord {
    pub id: String,

    #[serde(deserialize_with = "lenient_string")]
    pub classes: String,

    pub visible: bool,
    pub text:    String,

    /// Text of the visible buttons inside the popup.
    pub buttons: Vec<String>,
}

impl Record for PopupRecord {
    fn search_fields(&self) -> Vec<Cow<'_, str>> {
        [&self.id, &self.classes, &self.text]
            .into_iter()
            .chain(&self.buttons)
            .map(|s| Cow::Borrowed(s.as_str()))
            .collect()
    }

    fn column(&self, key: &str) -> FieldValue<'_> {
        match key {
            "id"      => FieldValue::text(&self.id),
            "classes" => FieldValue::text(&self.classes),
            "text"    => FieldValue::text(&self.text),
            "buttons" => self.buttons.join(", ").into(),
            _         => FieldValue::Missing,
        }
    }
}

// ---------------------------------------------------------------------------
// Scripts
// ---------------------------------------------------------------------------

/// A `<script>` tag, external (`src` set) or inline.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScriptRecord {
    pub src:    String,
    pub inline: bool,

    #[serde(rename = "type")]
    pub kind: String,

    #[serde(deserialize_with = "lenient_string")]
    pub content: String,
}

/// The combined scripts counter searches every field.
impl Record for ScriptRecord {
    fn search_fields(&self) -> Vec<Cow<'_, str>> {
        vec![
            Cow::Borrowed(self.src.as_str()),
            Cow::Borrowed(self.kind.as_str()),
            Cow::Borrowed(self.content.as_str()),
        ]
    }

    fn column(&self, key: &str) -> FieldValue<'_> {
        match key {
            "src"     => FieldValue::text(&self.src),
            "type"    => FieldValue::text(&self.kind),
            "content" => FieldValue::text(&self.content),
            _         => FieldValue::Missing,
        }
    }
}

/// External script as listed in its own table: searched by URL and type.
#[derive(Debug, Clone, Copy)]
pub struct ExternalScript<'a>(pub &'a ScriptRecord);

impl Record for ExternalScript<'_> {
    fn search_fields(&self) -> Vec<Cow<'_, str>> {
        vec![Cow::Borrowed(self.0.src.as_str()), Cow::Borrowed(self.0.kind.as_str())]
    }

    fn column(&self, key: &str) -> FieldValue<'_> {
        self.0.column(key)
    }
}

/// Inline script as listed in its own table: searched by type and body.
#[derive(Debug, Clone, Copy)]
pub struct InlineScript<'a>(pub &'a ScriptRecord);

impl Record for InlineScript<'_> {
    fn search_fields(&self) -> Vec<Cow<'_, str>> {
        vec![Cow::Borrowed(self.0.kind.as_str()), Cow::Borrowed(self.0.content.as_str())]
    }

    fn column(&self, key: &str) -> FieldValue<'_> {
        self.0.column(key)
    }
}

// ---------------------------------------------------------------------------
// HTML source
// ---------------------------------------------------------------------------

/// One line of the captured HTML source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HtmlLine<'a> {
    /// 1-based line number in the full source.
    pub number: usize,
    pub text:   &'a str,
}

impl Record for HtmlLine<'_> {
    fn search_fields(&self) -> Vec<Cow<'_, str>> {
        vec![Cow::Borrowed(self.text)]
    }

    fn column(&self, key: &str) -> FieldValue<'_> {
        match key {
            "line" => self.number.into(),
            "text" => FieldValue::text(self.text),
            _      => FieldValue::Missing,
        }
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Accept any JSON value where a string is expected.
///
/// The page-side extractor serializes `className` verbatim, which on SVG
/// elements is an object (`{"baseVal": ..., "animVal": ...}`) and may be null
/// for detached nodes.
fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => s,
        Value::Null      => String::new(),
        Value::Bool(b)   => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::Object(map) => match map.get("baseVal") {
            Some(Value::String(s)) => s.clone(),
            _ => String::new(),
        },
        Value::Array(_) => String::new(),
    })
}
