//! Named `{size, theme}` bundles for configuring many components at once.

use serde::Serialize;

use super::VariantTag;
use crate::models::{AdaptConfig, SizeOption, ThemeConfig, ThemeStyle};

/// Bulk-configuration bundle. Component overrides, when present, replace
/// the blanket size/theme for that tag only.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Preset {
    pub name: &'static str,
    pub description: &'static str,
    pub size: SizeOption,
    pub theme: ThemeConfig,
    pub component_overrides: Vec<(VariantTag, AdaptConfig)>,
}

impl Preset {
    pub fn base_config(&self) -> AdaptConfig {
        AdaptConfig {
            size: Some(self.size),
            theme: Some(self.theme.clone()),
            variant: None,
            custom_prompt: None,
        }
    }

    pub fn override_for(&self, tag: VariantTag) -> Option<&AdaptConfig> {
        self.component_overrides
            .iter()
            .find(|(candidate, _)| *candidate == tag)
            .map(|(_, config)| config)
    }
}

fn theme(style: ThemeStyle, color_scheme: &str) -> ThemeConfig {
    ThemeConfig {
        style: Some(style),
        color_scheme: Some(color_scheme.to_string()),
        accent_color: None,
    }
}

/// The full preset catalog, in presentation order.
pub fn all() -> Vec<Preset> {
    vec![
        Preset {
            name: "classicProfessional",
            description: "Restrained layout with medium components and a professional palette.",
            size: SizeOption::Medium,
            theme: theme(ThemeStyle::Professional, "light"),
            component_overrides: Vec::new(),
        },
        Preset {
            name: "creativeDark",
            description: "Large expressive components on a dark creative palette.",
            size: SizeOption::Large,
            theme: theme(ThemeStyle::Creative, "dark"),
            component_overrides: vec![
                (
                    VariantTag::Sparkles,
                    AdaptConfig {
                        size: Some(SizeOption::Full),
                        ..AdaptConfig::default()
                    },
                ),
                (
                    VariantTag::InfiniteMovingCards,
                    AdaptConfig {
                        variant: Some("skills".to_string()),
                        ..AdaptConfig::default()
                    },
                ),
            ],
        },
        Preset {
            name: "minimalLight",
            description: "Small quiet components with a minimal light palette.",
            size: SizeOption::Small,
            theme: theme(ThemeStyle::Minimal, "light"),
            component_overrides: Vec::new(),
        },
        Preset {
            name: "boldImpact",
            description: "Large high-contrast components for a loud first impression.",
            size: SizeOption::Large,
            theme: theme(ThemeStyle::Bold, "dark"),
            component_overrides: vec![(
                VariantTag::HeroHighlight,
                AdaptConfig {
                    variant: Some("name".to_string()),
                    ..AdaptConfig::default()
                },
            )],
        },
        Preset {
            name: "modernBalanced",
            description: "Medium components with a modern teal palette.",
            size: SizeOption::Medium,
            theme: theme(ThemeStyle::Modern, "dark"),
            component_overrides: Vec::new(),
        },
        Preset {
            name: "fullShowcase",
            description: "Full-width components for a single-page showcase.",
            size: SizeOption::Full,
            theme: theme(ThemeStyle::Professional, "dark"),
            component_overrides: Vec::new(),
        },
    ]
}

/// Looks a preset up by name; `None` for unregistered names.
pub fn find(name: &str) -> Option<Preset> {
    all().into_iter().find(|preset| preset.name == name)
}
