//! sitekit Core Library
//!
//! Content model for a website builder: page blocks, site-wide globals and
//! media file references, plus document loading and validation.

pub mod block;
pub mod config;
mod de;
pub mod document;
pub mod error;
pub mod file;
pub mod globals;
pub mod validate;

pub use block::{AnyBlock, Block, BlockType};
pub use config::Config;
pub use document::ContentFormat;
pub use error::{CoreError, Result};
pub use file::{File, FileRef};
pub use globals::{Globals, GlobalsTheme};
pub use validate::{Issue, Report};
