//! Loading content documents from disk.
//!
//! Two document kinds exist: a globals document holding one [`Globals`]
//! record, and a blocks document holding a top-level list of blocks.

use std::path::Path;

use serde::de::DeserializeOwned;
use tracing::debug;

use crate::{
    block::AnyBlock,
    error::{CoreError, Result},
    globals::Globals,
};

/// Serialization format of a content document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentFormat {
    /// JSON, as returned by the CMS REST API (.json files).
    Json,
    /// YAML (.yaml / .yml files).
    Yaml,
}

impl ContentFormat {
    /// Determine the format from a file extension.
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_lowercase().as_str() {
            "json" => Some(Self::Json),
            "yaml" | "yml" => Some(Self::Yaml),
            _ => None,
        }
    }

    /// Determine the format from a path, failing on unsupported extensions.
    pub fn from_path(path: &Path) -> Result<Self> {
        path.extension()
            .and_then(|e| e.to_str())
            .and_then(Self::from_extension)
            .ok_or_else(|| CoreError::unsupported_format(path))
    }

    /// Get the canonical file extension for this format.
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Yaml => "yaml",
        }
    }
}

fn parse<T: DeserializeOwned>(content: &str, format: ContentFormat, path: &Path) -> Result<T> {
    match format {
        ContentFormat::Json => {
            serde_json::from_str(content).map_err(|e| CoreError::document(path, e.to_string()))
        }
        ContentFormat::Yaml => {
            serde_yaml::from_str(content).map_err(|e| CoreError::document(path, e.to_string()))
        }
    }
}

/// Parse a globals document from a string.
///
/// `path` is only used for error reporting.
pub fn parse_globals(content: &str, format: ContentFormat, path: &Path) -> Result<Globals> {
    parse(content, format, path)
}

/// Parse a blocks document from a string.
pub fn parse_blocks(content: &str, format: ContentFormat, path: &Path) -> Result<Vec<AnyBlock>> {
    parse(content, format, path)
}

/// Load a globals document, picking the parser by extension.
pub fn load_globals(path: &Path) -> Result<Globals> {
    let format = ContentFormat::from_path(path)?;
    let content = std::fs::read_to_string(path)?;
    let globals = parse_globals(&content, format, path)?;
    debug!(?path, ?format, "loaded globals");
    Ok(globals)
}

/// Load a blocks document, picking the parser by extension.
pub fn load_blocks(path: &Path) -> Result<Vec<AnyBlock>> {
    let format = ContentFormat::from_path(path)?;
    let content = std::fs::read_to_string(path)?;
    let blocks = parse_blocks(&content, format, path)?;
    debug!(?path, ?format, count = blocks.len(), "loaded blocks");
    Ok(blocks)
}

/// Serialize a document in the given format.
pub fn to_string<T: serde::Serialize>(value: &T, format: ContentFormat) -> Result<String> {
    Ok(match format {
        ContentFormat::Json => serde_json::to_string_pretty(value)?,
        ContentFormat::Yaml => serde_yaml::to_string(value)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::block::{Block, BlockType};

    #[test]
    fn test_format_from_extension() {
        assert_eq!(ContentFormat::from_extension("json"), Some(ContentFormat::Json));
        assert_eq!(ContentFormat::from_extension("YML"), Some(ContentFormat::Yaml));
        assert_eq!(ContentFormat::from_extension("yaml"), Some(ContentFormat::Yaml));
        assert_eq!(ContentFormat::from_extension("toml"), None);
    }

    #[test]
    fn test_format_from_path_unsupported() {
        let err = ContentFormat::from_path(Path::new("content/home.xml")).unwrap_err();
        assert!(matches!(err, CoreError::UnsupportedFormat { .. }));

        let err = ContentFormat::from_path(Path::new("content/README")).unwrap_err();
        assert!(matches!(err, CoreError::UnsupportedFormat { .. }));
    }

    #[test]
    fn test_parse_yaml_blocks() {
        let content = r#"
- type: block_hero
  id: hero-1
  title: Launch faster
  buttons:
    - label: Get started
      href: /start
- type: block_divider
  id: div-1
- type: block_map
  id: map-1
  zoom: 4
"#;
        let blocks =
            parse_blocks(content, ContentFormat::Yaml, Path::new("home.yaml")).expect("parse");

        assert_eq!(blocks.len(), 3);
        assert_eq!(
            blocks[0].as_known().map(Block::block_type),
            Some(BlockType::Hero)
        );
        assert_eq!(blocks[1].type_tag(), "block_divider");
        assert_eq!(blocks[2].type_tag(), "block_map");
        assert!(blocks[2].as_known().is_none());
    }

    #[test]
    fn test_parse_globals_error_names_path() {
        let err = parse_globals(
            r#"{ "title": "Acme" }"#,
            ContentFormat::Json,
            Path::new("content/globals.json"),
        )
        .unwrap_err();

        let message = err.to_string();
        assert!(message.contains("content/globals.json"));
        assert!(message.contains("social_links"));
    }

    #[test]
    fn test_load_globals_from_file() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join("globals.yml");
        std::fs::write(&path, "title: Acme\nsocial_links: ~\nurl: https://acme.test\n")
            .expect("write");

        let globals = load_globals(&path).expect("load");
        assert_eq!(globals.title.as_deref(), Some("Acme"));
        assert_eq!(globals.url.as_deref(), Some("https://acme.test"));
    }

    #[test]
    fn test_load_missing_file() {
        let result = load_blocks(Path::new("/nonexistent/blocks.json"));
        assert!(matches!(result, Err(CoreError::Io(_))));
    }

    #[test]
    fn test_to_string_json_keeps_tag() {
        let blocks = parse_blocks(
            r#"[{ "type": "block_quote", "id": "q1", "content": "Ship it." }]"#,
            ContentFormat::Json,
            Path::new("quotes.json"),
        )
        .expect("parse");

        let out = to_string(&blocks, ContentFormat::Json).expect("serialize");
        assert!(out.contains("\"type\": \"block_quote\""));
        let again =
            parse_blocks(&out, ContentFormat::Json, Path::new("quotes.json")).expect("reparse");
        assert_eq!(again, blocks);
    }
}
