//! Per-call adaptation configuration and transform output types.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::registry::{VariantMetadata, VariantTag};

/// Rendering footprint requested for a component.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SizeOption {
    Small,
    Medium,
    Large,
    Full,
}

impl Default for SizeOption {
    fn default() -> Self {
        SizeOption::Medium
    }
}

impl SizeOption {
    pub fn as_str(self) -> &'static str {
        match self {
            SizeOption::Small => "small",
            SizeOption::Medium => "medium",
            SizeOption::Large => "large",
            SizeOption::Full => "full",
        }
    }
}

/// Visual direction a theme steers a component toward.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ThemeStyle {
    Professional,
    Creative,
    Minimal,
    Bold,
    Modern,
}

impl Default for ThemeStyle {
    fn default() -> Self {
        ThemeStyle::Professional
    }
}

impl ThemeStyle {
    pub fn as_str(self) -> &'static str {
        match self {
            ThemeStyle::Professional => "professional",
            ThemeStyle::Creative => "creative",
            ThemeStyle::Minimal => "minimal",
            ThemeStyle::Bold => "bold",
            ThemeStyle::Modern => "modern",
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ThemeConfig {
    pub style: Option<ThemeStyle>,
    pub color_scheme: Option<String>,
    pub accent_color: Option<String>,
}

impl ThemeConfig {
    /// Field-wise merge; override fields win when present.
    pub fn merged(&self, overrides: &ThemeConfig) -> ThemeConfig {
        ThemeConfig {
            style: overrides.style.or(self.style),
            color_scheme: overrides
                .color_scheme
                .clone()
                .or_else(|| self.color_scheme.clone()),
            accent_color: overrides
                .accent_color
                .clone()
                .or_else(|| self.accent_color.clone()),
        }
    }
}

/// Per-call configuration; every field optional, defaults applied by the
/// transform rules (size -> medium, theme style -> professional).
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AdaptConfig {
    pub size: Option<SizeOption>,
    pub theme: Option<ThemeConfig>,
    pub variant: Option<String>,
    pub custom_prompt: Option<String>,
}

impl AdaptConfig {
    pub fn merged(&self, overrides: &AdaptConfig) -> AdaptConfig {
        let theme = match (&self.theme, &overrides.theme) {
            (Some(base), Some(over)) => Some(base.merged(over)),
            (None, Some(over)) => Some(over.clone()),
            (Some(base), None) => Some(base.clone()),
            (None, None) => None,
        };
        AdaptConfig {
            size: overrides.size.or(self.size),
            theme,
            variant: overrides.variant.clone().or_else(|| self.variant.clone()),
            custom_prompt: overrides
                .custom_prompt
                .clone()
                .or_else(|| self.custom_prompt.clone()),
        }
    }

    pub fn size_or_default(&self) -> SizeOption {
        self.size.unwrap_or_default()
    }

    pub fn theme_style_or_default(&self) -> ThemeStyle {
        self.theme
            .as_ref()
            .and_then(|theme| theme.style)
            .unwrap_or_default()
    }
}

/// Open, variant-specific output record handed to the rendering layer.
pub type PropertyBag = Map<String, Value>;

/// Cache entry produced by one adaptation call.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdaptedComponent {
    pub tag: VariantTag,
    pub props: PropertyBag,
    pub metadata: &'static VariantMetadata,
}
