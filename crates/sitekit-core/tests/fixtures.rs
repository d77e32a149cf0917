//! Tests against the sample site under `fixtures/`.

use std::path::{Path, PathBuf};

use sitekit_core::{
    AnyBlock, Block, BlockType, Config, FileRef, Report, document, validate,
};

fn fixtures() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("../../fixtures")
}

#[test]
fn test_sample_config_loads() {
    let config = Config::load(&fixtures().join("sitekit.toml")).expect("config should load");
    assert_eq!(config.content.dir, PathBuf::from("content"));
    assert_eq!(config.globals_path(), PathBuf::from("content/globals.json"));
    assert!(!config.check.allow_unknown_blocks);
}

#[test]
fn test_sample_globals_load() {
    let globals =
        document::load_globals(&fixtures().join("content/globals.json")).expect("should load");

    assert_eq!(globals.title.as_deref(), Some("Acme Agency"));
    assert_eq!(globals.social_link("github"), Some("https://github.com/acme"));
    assert!(globals.og_image.is_none());

    assert!(matches!(globals.logo(false), Some(FileRef::Id(id)) if id == "5d2b7a31-light"));
    let dark = globals.logo(true).and_then(FileRef::as_file).expect("expanded dark logo");
    assert_eq!(dark.width, Some(320));

    let theme = globals.theme.as_ref().expect("theme");
    assert_eq!(theme.border_radius.as_deref(), Some("0.5rem"));
    assert_eq!(
        theme.font_families().and_then(|f| f.code.as_deref()),
        Some("Fira Code")
    );

    let mut report = Report::default();
    validate::validate_globals(&globals, Path::new("globals.json"), &mut report);
    assert!(report.is_clean(true), "{:?}", report.warnings);
}

#[test]
fn test_sample_home_blocks_load() {
    let blocks =
        document::load_blocks(&fixtures().join("content/pages/home.json")).expect("should load");

    let types: Vec<BlockType> = blocks
        .iter()
        .filter_map(AnyBlock::as_known)
        .map(Block::block_type)
        .collect();
    assert_eq!(
        types,
        vec![
            BlockType::Hero,
            BlockType::Logocloud,
            BlockType::Steps,
            BlockType::Faqs,
            BlockType::Divider,
            BlockType::Cta,
        ]
    );

    let Some(Block::Logocloud(cloud)) = blocks[1].as_known() else {
        panic!("expected logo cloud");
    };
    let ids: Vec<&str> = cloud.logos.iter().map(FileRef::id).collect();
    assert_eq!(ids, vec!["c1", "c2", "c3"]);
}

#[test]
fn test_sample_about_yaml_loads() {
    let blocks =
        document::load_blocks(&fixtures().join("content/pages/about.yaml")).expect("should load");
    assert_eq!(blocks.len(), 4);

    let Some(Block::CustomHero2(hero)) = blocks[0].as_known() else {
        panic!("expected custom hero 2");
    };
    assert_eq!(hero.eyebrow.as_deref(), Some("About"));
    assert_eq!(
        hero.background_image.as_ref().map(FileRef::id),
        Some("e4f2-team-photo")
    );
}

#[test]
fn test_sample_pages_validate_clean() {
    let config = Config::load(&fixtures().join("sitekit.toml")).expect("config should load");
    let mut report = Report::default();

    for page in ["home.json", "about.yaml"] {
        let path = fixtures().join("content/pages").join(page);
        let blocks = document::load_blocks(&path).expect("should load");
        validate::validate_blocks(&blocks, &config.check, &path, &mut report);
    }

    assert!(report.is_clean(true), "{:?} {:?}", report.errors, report.warnings);
}
