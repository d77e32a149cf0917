//! New command - write a starter content document

use std::{fs, path::Path};

use color_eyre::eyre::{Result, WrapErr, bail};
use sitekit_core::{
    AnyBlock, Block, ContentFormat, Globals, document,
    block::{BlockDivider, BlockHero, BlockRichtext, Button},
    globals::GlobalsTheme,
};

/// Kind of document to scaffold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum DocumentKind {
    /// Site-wide settings.
    Globals,
    /// A page's list of blocks.
    Blocks,
}

/// Run the new command.
///
/// Writes a starter document; the format follows the extension and defaults
/// to JSON. Existing files are never overwritten.
pub fn run(kind: DocumentKind, path: &Path) -> Result<()> {
    tracing::info!(?path, ?kind, "Creating new document");

    let file_path = if path.extension().is_some() {
        path.to_path_buf()
    } else {
        path.with_extension(ContentFormat::Json.extension())
    };
    let format = ContentFormat::from_path(&file_path)?;

    if file_path.exists() {
        bail!("Refusing to overwrite {}", file_path.display());
    }

    let title = title_from_path(&file_path);
    let body = match kind {
        DocumentKind::Globals => document::to_string(&starter_globals(&title), format)?,
        DocumentKind::Blocks => document::to_string(&starter_blocks(&title), format)?,
    };

    if let Some(parent) = file_path.parent() {
        fs::create_dir_all(parent).wrap_err("Failed to create directories")?;
    }

    fs::write(&file_path, body).wrap_err("Failed to write file")?;

    tracing::info!(?file_path, "Created new document");
    println!("Created: {}", file_path.display());

    Ok(())
}

fn title_from_path(path: &Path) -> String {
    path.file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("Untitled")
        .replace(['-', '_'], " ")
}

fn starter_globals(title: &str) -> Globals {
    Globals {
        title: Some(title.to_string()),
        url: Some("https://example.com".to_string()),
        social_links: None,
        theme: Some(GlobalsTheme {
            primary: Some("#6644ff".to_string()),
            gray: Some("#71717a".to_string()),
            border_radius: Some("0.5rem".to_string()),
            fonts: None,
        }),
        ..Default::default()
    }
}

fn starter_blocks(title: &str) -> Vec<AnyBlock> {
    vec![
        Block::Hero(BlockHero {
            id: "hero".to_string(),
            title: Some(title.to_string()),
            headline: Some("Write your headline here".to_string()),
            buttons: vec![Button {
                label: Some("Get in touch".to_string()),
                href: Some("/contact".to_string()),
                variant: Some("primary".to_string()),
            }],
            ..Default::default()
        })
        .into(),
        Block::Divider(BlockDivider {
            id: "divider".to_string(),
            title: None,
        })
        .into(),
        Block::Richtext(BlockRichtext {
            id: "body".to_string(),
            content: Some("<p>Write your content here.</p>".to_string()),
            ..Default::default()
        })
        .into(),
    ]
}

#[cfg(test)]
mod tests {
    use sitekit_core::{BlockType, Report, config::CheckConfig, validate};

    use super::*;

    #[test]
    fn test_new_globals_defaults_to_json() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join("site/my-site");

        run(DocumentKind::Globals, &path).expect("run");

        let written = dir.path().join("site/my-site.json");
        let globals = document::load_globals(&written).expect("load");
        assert_eq!(globals.title.as_deref(), Some("my site"));

        let mut report = Report::default();
        validate::validate_globals(&globals, &written, &mut report);
        assert!(report.is_clean(true), "{:?}", report.warnings);
    }

    #[test]
    fn test_new_blocks_yaml() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join("about_us.yaml");

        run(DocumentKind::Blocks, &path).expect("run");

        let blocks = document::load_blocks(&path).expect("load");
        let types: Vec<BlockType> = blocks
            .iter()
            .filter_map(AnyBlock::as_known)
            .map(Block::block_type)
            .collect();
        assert_eq!(
            types,
            vec![BlockType::Hero, BlockType::Divider, BlockType::Richtext]
        );
        assert_eq!(blocks[0].as_known().and_then(Block::title), Some("about us"));

        let mut report = Report::default();
        validate::validate_blocks(&blocks, &CheckConfig::default(), &path, &mut report);
        assert!(report.is_clean(true));
    }

    #[test]
    fn test_new_refuses_overwrite() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join("globals.json");
        fs::write(&path, "{}").expect("write");

        let err = run(DocumentKind::Globals, &path).unwrap_err();
        assert!(err.to_string().contains("Refusing to overwrite"));
        assert_eq!(fs::read_to_string(&path).expect("read"), "{}");
    }

    #[test]
    fn test_new_rejects_unknown_extension() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let result = run(DocumentKind::Blocks, &dir.path().join("page.xml"));
        assert!(result.is_err());
    }
}
