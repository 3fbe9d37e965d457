//! Front-matter parsing
//!
//! A document carries front-matter when its first line is `---`, optionally
//! followed by a language tag (`---yaml`, `---json`). The header runs until
//! the next line that is exactly `---`; everything after that line is the
//! body, returned untouched.

use serde_yaml::Value;
use std::fs;
use std::path::Path;

use super::Metadata;
use crate::error::ContentError;

const DELIMITER: &str = "---";

/// Errors produced while splitting and parsing a front-matter header
#[derive(Debug, thiserror::Error)]
pub enum FrontMatterError {
    #[error("unclosed front-matter block - missing closing ---")]
    Unclosed,

    #[error("unsupported front-matter language `{0}`")]
    UnsupportedLanguage(String),

    #[error("invalid YAML in front-matter: {0}")]
    InvalidYaml(String),

    #[error("invalid JSON in front-matter: {0}")]
    InvalidJson(String),

    #[error("front-matter must be a mapping of keys to values")]
    NotAMapping,

    #[error("front-matter key must be a string, number or boolean, found `{0}`")]
    InvalidKey(String),
}

/// A parsed document: header fields plus the raw body
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Document {
    pub data: Metadata,
    pub content: String,
}

impl Document {
    pub fn new(data: Metadata, content: impl Into<String>) -> Self {
        Self {
            data,
            content: content.into(),
        }
    }

    /// Read and parse a document from disk
    pub fn read<P: AsRef<Path>>(path: P) -> crate::Result<Self> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|e| ContentError::io(path, e))?;
        tracing::debug!("Read {:?} ({} bytes)", path, raw.len());

        Self::parse(&raw).map_err(|source| ContentError::FrontMatter {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Parse a document from a string
    pub fn parse(raw: &str) -> Result<Self, FrontMatterError> {
        let raw = raw.strip_prefix('\u{feff}').unwrap_or(raw);

        let (first_line, rest) = split_line(raw);
        let Some(language) = opening_language(first_line) else {
            return Ok(Self::new(Metadata::new(), raw));
        };
        let Some(rest) = rest else {
            return Err(FrontMatterError::Unclosed);
        };

        // Walk the remaining lines until the closing delimiter
        let mut header_len = 0;
        let mut remaining = rest;
        loop {
            let (line, next) = split_line(remaining);
            if is_closing(line) {
                let header = &rest[..header_len];
                let body = next.unwrap_or("");
                let data = parse_header(language, header)?;
                return Ok(Self::new(data, body));
            }
            match next {
                Some(next) => {
                    header_len += remaining.len() - next.len();
                    remaining = next;
                }
                None => return Err(FrontMatterError::Unclosed),
            }
        }
    }

    /// Serialize back into a front-matter document
    pub fn to_markdown(&self) -> Result<String, FrontMatterError> {
        let header = if self.data.is_empty() {
            String::new()
        } else {
            serde_yaml::to_string(&self.data)
                .map_err(|e| FrontMatterError::InvalidYaml(e.to_string()))?
        };

        Ok(format!("{DELIMITER}\n{header}{DELIMITER}\n{}", self.content))
    }
}

/// Split off the first line, returning it without its line break and the
/// text after the break (`None` when there is no break)
fn split_line(s: &str) -> (&str, Option<&str>) {
    match s.find('\n') {
        Some(pos) => (s[..pos].trim_end_matches('\r'), Some(&s[pos + 1..])),
        None => (s.trim_end_matches('\r'), None),
    }
}

/// Returns the language tag if the line opens a front-matter block
fn opening_language(line: &str) -> Option<&str> {
    let tag = line.strip_prefix(DELIMITER)?;
    if tag.starts_with('-') {
        return None;
    }
    Some(tag.trim())
}

fn is_closing(line: &str) -> bool {
    line.trim_end() == DELIMITER
}

fn parse_header(language: &str, header: &str) -> Result<Metadata, FrontMatterError> {
    if header.trim().is_empty() {
        return Ok(Metadata::new());
    }

    let value = match language {
        "" | "yaml" | "yml" => serde_yaml::from_str::<Value>(header)
            .map_err(|e| FrontMatterError::InvalidYaml(e.to_string()))?,
        "json" => {
            let json: serde_json::Value = serde_json::from_str(header)
                .map_err(|e| FrontMatterError::InvalidJson(e.to_string()))?;
            serde_yaml::to_value(json)
                .map_err(|e| FrontMatterError::InvalidJson(e.to_string()))?
        }
        other => return Err(FrontMatterError::UnsupportedLanguage(other.to_string())),
    };

    into_metadata(value)
}

fn into_metadata(value: Value) -> Result<Metadata, FrontMatterError> {
    match value {
        Value::Null => Ok(Metadata::new()),
        Value::Mapping(mapping) => mapping
            .into_iter()
            .map(|(key, value)| match scalar_to_string(&key) {
                Some(key) => Ok((key, value)),
                None => Err(FrontMatterError::InvalidKey(describe(&key))),
            })
            .collect(),
        Value::Tagged(tagged) => into_metadata(tagged.value),
        _ => Err(FrontMatterError::NotAMapping),
    }
}

/// Stringify a scalar YAML value (used for keys and tag identifiers)
pub(crate) fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// Single-line rendering of a value for error messages
fn describe(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        other => serde_json::to_string(other).unwrap_or_else(|_| format!("{:?}", other)),
    }
}
