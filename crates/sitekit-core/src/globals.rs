//! Site-wide settings.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::{de::required_nullable, file::FileRef};

/// Font families used by the theme.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FontFamilies {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ThemeFonts {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub families: Option<FontFamilies>,
}

/// Theme tokens: colours, border radius and fonts.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GlobalsTheme {
    /// Primary brand colour.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub primary: Option<String>,

    /// Neutral colour the gray scale is derived from.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gray: Option<String>,

    /// CSS length, e.g. "0.5rem".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border_radius: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fonts: Option<ThemeFonts>,
}

impl GlobalsTheme {
    /// The configured font families, if any.
    pub fn font_families(&self) -> Option<&FontFamilies> {
        self.fonts.as_ref().and_then(|f| f.families.as_ref())
    }
}

/// Site-wide settings record.
///
/// Every field is optional except `social_links`, whose key must be present
/// even when its value is `null`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Globals {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address_country: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address_locality: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address_region: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub street_address: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,

    /// URL of the deploy hook that starts a new build.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub build_hook_url: Option<String>,

    /// Website title.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tagline: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Base URL of the site.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    /// Logo for light backgrounds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo_on_light_bg: Option<FileRef>,

    /// Logo for dark backgrounds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo_on_dark_bg: Option<FileRef>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub og_image: Option<FileRef>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub routes: Option<Map<String, Value>>,

    #[serde(deserialize_with = "required_nullable")]
    pub social_links: Option<Map<String, Value>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub theme: Option<GlobalsTheme>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deployment: Option<String>,

    /// Default SEO metadata.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seo: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub social: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notice_deployment: Option<String>,
}

impl Globals {
    /// Pick the logo for a background, falling back to the other variant.
    pub fn logo(&self, dark_background: bool) -> Option<&FileRef> {
        let (preferred, fallback) = if dark_background {
            (&self.logo_on_dark_bg, &self.logo_on_light_bg)
        } else {
            (&self.logo_on_light_bg, &self.logo_on_dark_bg)
        };
        preferred.as_ref().or(fallback.as_ref())
    }

    /// Postal address lines in display order, skipping unset parts.
    pub fn address_lines(&self) -> Vec<String> {
        let mut lines = Vec::new();
        if let Some(street) = non_empty(&self.street_address) {
            lines.push(street.to_string());
        }

        let locality: Vec<&str> = [&self.address_locality, &self.address_region, &self.postal_code]
            .into_iter()
            .filter_map(non_empty)
            .collect();
        if !locality.is_empty() {
            lines.push(locality.join(" "));
        }

        if let Some(country) = non_empty(&self.address_country) {
            lines.push(country.to_string());
        }
        lines
    }

    /// Look up a social link by network name (e.g., "github").
    pub fn social_link(&self, network: &str) -> Option<&str> {
        self.social_links
            .as_ref()?
            .get(network)
            .and_then(Value::as_str)
    }
}

fn non_empty(field: &Option<String>) -> Option<&str> {
    field.as_deref().map(str::trim).filter(|s| !s.is_empty())
}
