//! Export configuration.
//!
//! ```toml
//! [type-parameters]
//! mangling-suffix = "_"
//! reserved-names = ["Foo"]
//! ```
//!
//! Every table and key is optional.

use std::path::Path;

use miette::SourceSpan;
use serde::Deserialize;

use crate::error::{Error, Result};

const DEFAULT_MANGLING_SUFFIX: &str = "_";

/// Root of the export configuration file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "kebab-case", deny_unknown_fields)]
pub struct ExportConfig {
    /// `[type-parameters]`
    pub type_parameters: NamerConfig,
}

/// Settings for naming type parameters.
///
/// Deserializing goes through [`NamerConfig::new`], so an invalid suffix or
/// reserved name is rejected however the value is built.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "RawNamerConfig")]
pub struct NamerConfig {
    mangling_suffix: String,
    reserved_names: Vec<String>,
}

impl Default for NamerConfig {
    fn default() -> Self {
        Self {
            mangling_suffix: DEFAULT_MANGLING_SUFFIX.to_string(),
            reserved_names: Vec::new(),
        }
    }
}

impl NamerConfig {
    /// Create a validated namer configuration.
    pub fn new(mangling_suffix: impl Into<String>, reserved_names: Vec<String>) -> Result<Self> {
        let mangling_suffix = mangling_suffix.into();
        if let Some(reason) = suffix_problem(&mangling_suffix) {
            return Err(Box::new(Error::InvalidSetting {
                key: "mangling-suffix",
                value: mangling_suffix,
                reason,
            }));
        }
        if let Some((name, reason)) = first_invalid_name(&reserved_names) {
            return Err(Box::new(Error::InvalidSetting {
                key: "reserved name",
                value: name.to_string(),
                reason,
            }));
        }
        Ok(Self {
            mangling_suffix,
            reserved_names,
        })
    }

    /// Text appended to a type parameter name until it no longer clashes.
    pub fn mangling_suffix(&self) -> &str {
        &self.mangling_suffix
    }

    /// Extra names that type parameters must avoid.
    pub fn reserved_names(&self) -> &[String] {
        &self.reserved_names
    }
}

/// Unvalidated `[type-parameters]` table as written in the file.
#[derive(Debug, Deserialize)]
#[serde(default, rename_all = "kebab-case", deny_unknown_fields)]
struct RawNamerConfig {
    mangling_suffix: String,
    reserved_names: Vec<String>,
}

impl Default for RawNamerConfig {
    fn default() -> Self {
        Self {
            mangling_suffix: DEFAULT_MANGLING_SUFFIX.to_string(),
            reserved_names: Vec::new(),
        }
    }
}

impl TryFrom<RawNamerConfig> for NamerConfig {
    type Error = Box<Error>;

    fn try_from(raw: RawNamerConfig) -> Result<Self> {
        Self::new(raw.mangling_suffix, raw.reserved_names)
    }
}

/// Unvalidated configuration document, checked against its source text so
/// errors can point at the offending value.
#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "kebab-case", deny_unknown_fields)]
struct RawExportConfig {
    type_parameters: RawNamerConfig,
}

impl RawExportConfig {
    fn validate(&self, src: &str, filename: &str) -> Result<()> {
        let namer = &self.type_parameters;

        if let Some(reason) = suffix_problem(&namer.mangling_suffix) {
            return Err(Error::validation(
                format!("invalid mangling-suffix: {}", reason),
                src,
                filename,
                find_span(src, "mangling-suffix"),
            ));
        }

        if let Some((name, reason)) = first_invalid_name(&namer.reserved_names) {
            return Err(Error::validation(
                format!("invalid reserved name '{}': {}", name, reason),
                src,
                filename,
                find_span(src, &format!("\"{}\"", name)),
            ));
        }

        Ok(())
    }
}

/// Parse an export configuration file from the given path
pub fn parse_file(path: impl AsRef<Path>) -> Result<ExportConfig> {
    let path = path.as_ref();
    tracing::debug!(path = %path.display(), "loading export configuration");
    let content = std::fs::read_to_string(path).map_err(|e| {
        Box::new(Error::Io {
            path: path.to_path_buf(),
            source: e,
        })
    })?;
    let filename = path.display().to_string();
    parse_str_with_filename(&content, &filename)
}

/// Parse an export configuration from a string (uses "objcx.toml" as default filename)
pub fn parse_str(content: &str) -> Result<ExportConfig> {
    parse_str_with_filename(content, "objcx.toml")
}

/// Parse an export configuration with a custom filename for error reporting
pub fn parse_str_with_filename(content: &str, filename: &str) -> Result<ExportConfig> {
    let raw: RawExportConfig =
        toml::from_str(content).map_err(|e| Error::parse(e, content, filename))?;
    raw.validate(content, filename)?;
    Ok(ExportConfig {
        type_parameters: raw.type_parameters.try_into()?,
    })
}

fn suffix_problem(suffix: &str) -> Option<String> {
    if suffix.is_empty() {
        return Some("mangling suffix cannot be empty".to_string());
    }
    suffix
        .chars()
        .find(|c| !is_identifier_char(*c))
        .map(|c| format!("'{}' cannot appear in an identifier", c))
}

fn first_invalid_name(names: &[String]) -> Option<(&str, String)> {
    names
        .iter()
        .find_map(|name| identifier_problem(name).map(|reason| (name.as_str(), reason)))
}

fn identifier_problem(name: &str) -> Option<String> {
    let mut chars = name.chars();
    match chars.next() {
        None => Some("name cannot be empty".to_string()),
        Some(first) if first.is_ascii_digit() => {
            Some("name cannot start with a digit".to_string())
        }
        Some(first) => std::iter::once(first)
            .chain(chars)
            .find(|c| !is_identifier_char(*c))
            .map(|c| format!("'{}' cannot appear in an identifier", c)),
    }
}

fn is_identifier_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

fn find_span(src: &str, needle: &str) -> Option<SourceSpan> {
    src.find(needle)
        .map(|offset| SourceSpan::from((offset, needle.len())))
}
