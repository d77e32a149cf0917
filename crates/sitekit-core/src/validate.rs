//! Content validation.
//!
//! Decoding already enforces the shape of every document. The checks here
//! cover what the types cannot express: URL schemes, colour tokens, block
//! ids unique within a document, and tags this crate does not know.

use std::{
    collections::HashSet,
    fmt,
    path::{Path, PathBuf},
};

use crate::{
    block::{AnyBlock, Block},
    config::CheckConfig,
    globals::Globals,
};

/// A single finding, attached to the document it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Issue {
    pub path: PathBuf,
    pub message: String,
}

impl fmt::Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.path.display(), self.message)
    }
}

/// Errors and warnings collected across documents.
#[derive(Debug, Default)]
pub struct Report {
    pub errors: Vec<Issue>,
    pub warnings: Vec<Issue>,
}

impl Report {
    pub fn add_error(&mut self, path: &Path, msg: impl Into<String>) {
        self.errors.push(Issue {
            path: path.to_path_buf(),
            message: msg.into(),
        });
    }

    pub fn add_warning(&mut self, path: &Path, msg: impl Into<String>) {
        self.warnings.push(Issue {
            path: path.to_path_buf(),
            message: msg.into(),
        });
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    /// Whether the report passes, optionally counting warnings as failures.
    pub fn is_clean(&self, strict: bool) -> bool {
        !self.has_errors() && !(strict && self.has_warnings())
    }
}

/// Check a globals record.
pub fn validate_globals(globals: &Globals, path: &Path, report: &mut Report) {
    if globals.title.as_deref().is_none_or(|t| t.trim().is_empty()) {
        report.add_warning(path, "title is not set");
    }

    if let Some(url) = &globals.url {
        if !is_http_url(url) {
            report.add_warning(path, "url should start with http:// or https://");
        } else if url.ends_with('/') {
            report.add_warning(path, "url should not have a trailing slash");
        }
    }

    if let Some(hook) = &globals.build_hook_url
        && !is_http_url(hook)
    {
        report.add_warning(
            path,
            "build_hook_url should start with http:// or https://",
        );
    }

    if let Some(email) = &globals.email
        && !email.contains('@')
    {
        report.add_warning(path, format!("email '{email}' does not look like an address"));
    }

    if let Some(theme) = &globals.theme {
        for (name, value) in [("theme.primary", &theme.primary), ("theme.gray", &theme.gray)] {
            if let Some(color) = value
                && !is_hex_color(color)
            {
                report.add_warning(path, format!("{name} '{color}' is not a #rgb or #rrggbb colour"));
            }
        }
    }
}

/// Check the blocks of one document.
pub fn validate_blocks(blocks: &[AnyBlock], config: &CheckConfig, path: &Path, report: &mut Report) {
    let mut seen_ids = HashSet::new();

    for (index, any) in blocks.iter().enumerate() {
        match any.id() {
            Some(id) if !seen_ids.insert(id) => {
                report.add_error(path, format!("block #{index}: duplicate id '{id}'"));
            }
            Some(_) => {}
            None => report.add_warning(path, format!("block #{index}: missing id")),
        }

        let block = match any {
            AnyBlock::Known(block) => block,
            AnyBlock::Unknown { block_type, .. } => {
                let msg = format!("block #{index}: unknown block type '{block_type}'");
                if config.allow_unknown_blocks {
                    report.add_warning(path, msg);
                } else {
                    report.add_error(path, msg);
                }
                continue;
            }
        };

        match block {
            Block::Html(html) if html.raw_html.as_deref().is_none_or(|h| h.trim().is_empty()) => {
                report.add_warning(path, format!("block #{index}: block_html has no raw_html"));
            }
            Block::Video(video) if !video.has_source() => {
                report.add_warning(
                    path,
                    format!("block #{index}: block_video has neither video_url nor video_file"),
                );
            }
            _ => {}
        }
    }
}

fn is_http_url(url: &str) -> bool {
    url.starts_with("http://") || url.starts_with("https://")
}

fn is_hex_color(value: &str) -> bool {
    let Some(digits) = value.strip_prefix('#') else {
        return false;
    };
    matches!(digits.len(), 3 | 6) && digits.chars().all(|c| c.is_ascii_hexdigit())
}
