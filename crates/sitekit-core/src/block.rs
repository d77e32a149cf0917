//! Page blocks.
//!
//! A page is built from a sequence of blocks. Each block carries a `type`
//! tag naming one of a closed set of shapes, and the remaining fields must
//! match that shape exactly.

use std::{fmt, str::FromStr};

use serde::{
    Deserialize, Deserializer, Serialize, Serializer,
    de::Error as _,
    ser::{Error as _, SerializeMap},
};
use serde_json::{Map, Value};

use crate::{de::null_as_default, error::CoreError, file::FileRef};

/// Name of the discriminant field on the wire.
pub const TAG_FIELD: &str = "type";

/// Discriminant of a [`Block`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum BlockType {
    #[serde(rename = "block_columns")]
    Columns,
    #[serde(rename = "block_cta")]
    Cta,
    #[serde(rename = "block_faqs")]
    Faqs,
    #[serde(rename = "block_form")]
    Form,
    #[serde(rename = "block_gallery")]
    Gallery,
    #[serde(rename = "block_hero")]
    Hero,
    #[serde(rename = "block_html")]
    Html,
    #[serde(rename = "block_logocloud")]
    Logocloud,
    #[serde(rename = "block_quote")]
    Quote,
    #[serde(rename = "block_richtext")]
    Richtext,
    #[serde(rename = "block_steps")]
    Steps,
    #[serde(rename = "block_team")]
    Team,
    #[serde(rename = "block_testimonials")]
    Testimonials,
    #[serde(rename = "block_video")]
    Video,
    #[serde(rename = "block_divider")]
    Divider,
    #[serde(rename = "block_custom_hero_block")]
    CustomHeroBlock,
    #[serde(rename = "block_custom_hero_2")]
    CustomHero2,
}

impl BlockType {
    /// Every block type, in declaration order.
    pub const ALL: [BlockType; 17] = [
        Self::Columns,
        Self::Cta,
        Self::Faqs,
        Self::Form,
        Self::Gallery,
        Self::Hero,
        Self::Html,
        Self::Logocloud,
        Self::Quote,
        Self::Richtext,
        Self::Steps,
        Self::Team,
        Self::Testimonials,
        Self::Video,
        Self::Divider,
        Self::CustomHeroBlock,
        Self::CustomHero2,
    ];

    /// The wire tag for this type.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Columns => "block_columns",
            Self::Cta => "block_cta",
            Self::Faqs => "block_faqs",
            Self::Form => "block_form",
            Self::Gallery => "block_gallery",
            Self::Hero => "block_hero",
            Self::Html => "block_html",
            Self::Logocloud => "block_logocloud",
            Self::Quote => "block_quote",
            Self::Richtext => "block_richtext",
            Self::Steps => "block_steps",
            Self::Team => "block_team",
            Self::Testimonials => "block_testimonials",
            Self::Video => "block_video",
            Self::Divider => "block_divider",
            Self::CustomHeroBlock => "block_custom_hero_block",
            Self::CustomHero2 => "block_custom_hero_2",
        }
    }
}

impl FromStr for BlockType {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| CoreError::unknown_block_type(s))
    }
}

impl fmt::Display for BlockType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A content block, tagged by its [`BlockType`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Block {
    #[serde(rename = "block_columns")]
    Columns(BlockColumn),
    #[serde(rename = "block_cta")]
    Cta(BlockCta),
    #[serde(rename = "block_faqs")]
    Faqs(BlockFaq),
    #[serde(rename = "block_form")]
    Form(BlockForm),
    #[serde(rename = "block_gallery")]
    Gallery(BlockGallery),
    #[serde(rename = "block_hero")]
    Hero(BlockHero),
    #[serde(rename = "block_html")]
    Html(BlockHtml),
    #[serde(rename = "block_logocloud")]
    Logocloud(BlockLogocloud),
    #[serde(rename = "block_quote")]
    Quote(BlockQuote),
    #[serde(rename = "block_richtext")]
    Richtext(BlockRichtext),
    #[serde(rename = "block_steps")]
    Steps(BlockStep),
    #[serde(rename = "block_team")]
    Team(BlockTeam),
    #[serde(rename = "block_testimonials")]
    Testimonials(BlockTestimonial),
    #[serde(rename = "block_video")]
    Video(BlockVideo),
    #[serde(rename = "block_divider")]
    Divider(BlockDivider),
    #[serde(rename = "block_custom_hero_block")]
    CustomHeroBlock(BlockCustomHeroBlock),
    #[serde(rename = "block_custom_hero_2")]
    CustomHero2(BlockCustomHero2),
}

impl Block {
    /// The discriminant of the active variant.
    pub fn block_type(&self) -> BlockType {
        match self {
            Self::Columns(_) => BlockType::Columns,
            Self::Cta(_) => BlockType::Cta,
            Self::Faqs(_) => BlockType::Faqs,
            Self::Form(_) => BlockType::Form,
            Self::Gallery(_) => BlockType::Gallery,
            Self::Hero(_) => BlockType::Hero,
            Self::Html(_) => BlockType::Html,
            Self::Logocloud(_) => BlockType::Logocloud,
            Self::Quote(_) => BlockType::Quote,
            Self::Richtext(_) => BlockType::Richtext,
            Self::Steps(_) => BlockType::Steps,
            Self::Team(_) => BlockType::Team,
            Self::Testimonials(_) => BlockType::Testimonials,
            Self::Video(_) => BlockType::Video,
            Self::Divider(_) => BlockType::Divider,
            Self::CustomHeroBlock(_) => BlockType::CustomHeroBlock,
            Self::CustomHero2(_) => BlockType::CustomHero2,
        }
    }

    /// The block's id.
    pub fn id(&self) -> &str {
        match self {
            Self::Columns(b) => &b.id,
            Self::Cta(b) => &b.id,
            Self::Faqs(b) => &b.id,
            Self::Form(b) => &b.id,
            Self::Gallery(b) => &b.id,
            Self::Hero(b) => &b.id,
            Self::Html(b) => &b.id,
            Self::Logocloud(b) => &b.id,
            Self::Quote(b) => &b.id,
            Self::Richtext(b) => &b.id,
            Self::Steps(b) => &b.id,
            Self::Team(b) => &b.id,
            Self::Testimonials(b) => &b.id,
            Self::Video(b) => &b.id,
            Self::Divider(b) => &b.id,
            Self::CustomHeroBlock(b) => &b.id,
            Self::CustomHero2(b) => &b.id,
        }
    }

    /// The block's title, for shapes that have one.
    pub fn title(&self) -> Option<&str> {
        match self {
            Self::Columns(b) => b.title.as_deref(),
            Self::Cta(b) => b.title.as_deref(),
            Self::Faqs(b) => b.title.as_deref(),
            Self::Form(b) => b.title.as_deref(),
            Self::Gallery(b) => b.title.as_deref(),
            Self::Hero(b) => b.title.as_deref(),
            Self::Html(_) => None,
            Self::Logocloud(b) => b.title.as_deref(),
            Self::Quote(b) => b.title.as_deref(),
            Self::Richtext(b) => b.title.as_deref(),
            Self::Steps(b) => b.title.as_deref(),
            Self::Team(b) => b.title.as_deref(),
            Self::Testimonials(b) => b.title.as_deref(),
            Self::Video(b) => b.title.as_deref(),
            Self::Divider(b) => b.title.as_deref(),
            Self::CustomHeroBlock(b) => b.title.as_deref(),
            Self::CustomHero2(b) => b.title.as_deref(),
        }
    }
}

/// Horizontal placement of a block's image relative to its text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImagePosition {
    Left,
    Right,
}

/// Text alignment for heading-and-body blocks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    Left,
    Center,
}

/// Where a video block's media comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VideoType {
    Youtube,
    Vimeo,
    Url,
}

/// A call-to-action link rendered as a button.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Button {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
    /// Style hint for the renderer (e.g., "primary", "outline").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variant: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ColumnRow {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub headline: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<FileRef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_position: Option<ImagePosition>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FaqItem {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub answer: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct StepItem {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<FileRef>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TestimonialItem {
    /// Name of the person quoted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<FileRef>,
}

/// Rows of image-and-text columns.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BlockColumn {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub headline: Option<String>,
    #[serde(default, deserialize_with = "null_as_default", skip_serializing_if = "Vec::is_empty")]
    pub rows: Vec<ColumnRow>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BlockCta {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub headline: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(default, deserialize_with = "null_as_default", skip_serializing_if = "Vec::is_empty")]
    pub buttons: Vec<Button>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BlockFaq {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub headline: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alignment: Option<Alignment>,
    #[serde(default, deserialize_with = "null_as_default", skip_serializing_if = "Vec::is_empty")]
    pub faqs: Vec<FaqItem>,
}

/// Embeds a form managed elsewhere in the CMS.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BlockForm {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub headline: Option<String>,
    /// Id of the form to render.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub form: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BlockGallery {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub headline: Option<String>,
    #[serde(default, deserialize_with = "null_as_default", skip_serializing_if = "Vec::is_empty")]
    pub gallery_items: Vec<FileRef>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BlockHero {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub headline: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(default, deserialize_with = "null_as_default", skip_serializing_if = "Vec::is_empty")]
    pub buttons: Vec<Button>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<FileRef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_position: Option<ImagePosition>,
}

/// Raw HTML inserted verbatim by the renderer.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BlockHtml {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub raw_html: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BlockLogocloud {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub headline: Option<String>,
    #[serde(default, deserialize_with = "null_as_default", skip_serializing_if = "Vec::is_empty")]
    pub logos: Vec<FileRef>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BlockQuote {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BlockRichtext {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub headline: Option<String>,
    /// HTML body produced by the CMS editor.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alignment: Option<Alignment>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BlockStep {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub headline: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub show_step_numbers: Option<bool>,
    /// Alternate image side on every other step.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alternate_image_position: Option<bool>,
    #[serde(default, deserialize_with = "null_as_default", skip_serializing_if = "Vec::is_empty")]
    pub steps: Vec<StepItem>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BlockTeam {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub headline: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BlockTestimonial {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub headline: Option<String>,
    #[serde(default, deserialize_with = "null_as_default", skip_serializing_if = "Vec::is_empty")]
    pub testimonials: Vec<TestimonialItem>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BlockVideo {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub headline: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video_type: Option<VideoType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video_file: Option<FileRef>,
}

impl BlockVideo {
    /// Whether the block points at any media at all.
    pub fn has_source(&self) -> bool {
        self.video_url.as_deref().is_some_and(|u| !u.trim().is_empty()) || self.video_file.is_some()
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BlockDivider {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BlockCustomHeroBlock {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub headline: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<FileRef>,
    #[serde(default, deserialize_with = "null_as_default", skip_serializing_if = "Vec::is_empty")]
    pub buttons: Vec<Button>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BlockCustomHero2 {
    pub id: String,
    /// Small label shown above the title.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub eyebrow: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_image: Option<FileRef>,
    #[serde(default, deserialize_with = "null_as_default", skip_serializing_if = "Vec::is_empty")]
    pub buttons: Vec<Button>,
}

/// A block as found in content, with a fallback for tags this crate does not
/// know.
///
/// A recognised tag with a malformed payload is a decode error, never
/// `Unknown`.
#[derive(Debug, Clone, PartialEq)]
pub enum AnyBlock {
    /// A block of a known type.
    Known(Block),
    /// A block whose tag is outside [`BlockType::ALL`].
    Unknown {
        /// The tag as written.
        block_type: String,
        /// Every other field, untouched.
        fields: Map<String, Value>,
    },
}

impl AnyBlock {
    /// The wire tag, known or not.
    pub fn type_tag(&self) -> &str {
        match self {
            Self::Known(block) => block.block_type().as_str(),
            Self::Unknown { block_type, .. } => block_type,
        }
    }

    /// The block id, if one is present.
    pub fn id(&self) -> Option<&str> {
        match self {
            Self::Known(block) => Some(block.id()),
            Self::Unknown { fields, .. } => fields.get("id").and_then(Value::as_str),
        }
    }

    pub fn as_known(&self) -> Option<&Block> {
        match self {
            Self::Known(block) => Some(block),
            Self::Unknown { .. } => None,
        }
    }

    pub fn into_known(self) -> Option<Block> {
        match self {
            Self::Known(block) => Some(block),
            Self::Unknown { .. } => None,
        }
    }
}

impl From<Block> for AnyBlock {
    fn from(block: Block) -> Self {
        Self::Known(block)
    }
}

impl<'de> Deserialize<'de> for AnyBlock {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let mut fields = match Value::deserialize(deserializer)? {
            Value::Object(map) => map,
            other => {
                return Err(D::Error::custom(format!(
                    "expected a block object, found {other}"
                )));
            }
        };

        let tag = match fields.get(TAG_FIELD) {
            Some(Value::String(tag)) => tag.clone(),
            Some(other) => {
                return Err(D::Error::custom(format!(
                    "block `{TAG_FIELD}` must be a string, found {other}"
                )));
            }
            None => return Err(D::Error::missing_field(TAG_FIELD)),
        };

        if tag.parse::<BlockType>().is_ok() {
            return Block::deserialize(Value::Object(fields))
                .map(Self::Known)
                .map_err(|e| D::Error::custom(format!("invalid {tag}: {e}")));
        }

        fields.remove(TAG_FIELD);
        Ok(Self::Unknown {
            block_type: tag,
            fields,
        })
    }
}

impl Serialize for AnyBlock {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Self::Known(block) => block.serialize(serializer),
            Self::Unknown { block_type, fields } => {
                if fields.contains_key(TAG_FIELD) {
                    return Err(S::Error::custom("unknown block fields repeat the tag"));
                }
                let mut map = serializer.serialize_map(Some(fields.len() + 1))?;
                map.serialize_entry(TAG_FIELD, block_type)?;
                for (key, value) in fields {
                    map.serialize_entry(key, value)?;
                }
                map.end()
            }
        }
    }
}
