//! Shared rules every transform applies: base-bag merge, theme palettes,
//! size scaling, list bounding, truncation, and fallback accessors.

use serde_json::{json, Value};

use crate::models::{AdaptConfig, ProfileData, PropertyBag, SizeOption, Skill, ThemeStyle};

pub(crate) const PLACEHOLDER_IMAGE: &str = "/images/placeholder-project.svg";
pub(crate) const PLACEHOLDER_AVATAR: &str = "/images/placeholder-avatar.svg";
pub(crate) const FALLBACK_NAME: &str = "Your Name";
pub(crate) const FALLBACK_TITLE: &str = "Creative Professional";
pub(crate) const FALLBACK_SUMMARY: &str =
    "A dedicated professional passionate about building great work.";

pub(crate) const FILLER_SKILLS: &[&str] = &[
    "Collaboration",
    "Problem Solving",
    "Communication",
    "Adaptability",
];

pub(crate) const FILLER_WORDS: &[&str] = &["create", "build", "ship", "learn"];

pub(crate) const FILLER_IMAGES: &[&str] = &[
    "/images/placeholder-1.svg",
    "/images/placeholder-2.svg",
    "/images/placeholder-3.svg",
];

pub(crate) struct FillerProject {
    pub name: &'static str,
    pub description: &'static str,
    pub image: &'static str,
}

pub(crate) const FILLER_PROJECTS: &[FillerProject] = &[
    FillerProject {
        name: "Sample Project",
        description: "A placeholder project while real work is added.",
        image: "/images/placeholder-1.svg",
    },
    FillerProject {
        name: "Side Quest",
        description: "A small exploration that taught something new.",
        image: "/images/placeholder-2.svg",
    },
    FillerProject {
        name: "Team Effort",
        description: "A collaboration placeholder entry.",
        image: "/images/placeholder-3.svg",
    },
];

pub(crate) const FILLER_QUOTES: &[(&str, &str)] = &[
    ("Simplicity is the soul of efficiency.", "Austin Freeman"),
    ("Make it work, make it right, make it fast.", "Kent Beck"),
    ("Quality is not an act, it is a habit.", "Aristotle"),
];

/// Fixed per-style lookup table applied before any colour decision.
pub(crate) struct ThemePalette {
    pub primary: &'static str,
    pub secondary: &'static str,
    pub accent: &'static str,
    pub background: &'static str,
    pub gradient: [&'static str; 3],
    pub glow: &'static str,
}

pub(crate) fn palette(style: ThemeStyle) -> &'static ThemePalette {
    match style {
        ThemeStyle::Professional => &ThemePalette {
            primary: "#1e3a8a",
            secondary: "#334155",
            accent: "#2563eb",
            background: "#0f172a",
            gradient: ["#1e3a8a", "#2563eb", "#38bdf8"],
            glow: "#3b82f6",
        },
        ThemeStyle::Creative => &ThemePalette {
            primary: "#7c3aed",
            secondary: "#a21caf",
            accent: "#ec4899",
            background: "#1e1b4b",
            gradient: ["#7c3aed", "#ec4899", "#f97316"],
            glow: "#a855f7",
        },
        ThemeStyle::Minimal => &ThemePalette {
            primary: "#18181b",
            secondary: "#52525b",
            accent: "#71717a",
            background: "#fafafa",
            gradient: ["#18181b", "#52525b", "#a1a1aa"],
            glow: "#d4d4d8",
        },
        ThemeStyle::Bold => &ThemePalette {
            primary: "#b91c1c",
            secondary: "#c2410c",
            accent: "#f59e0b",
            background: "#18181b",
            gradient: ["#b91c1c", "#ea580c", "#f59e0b"],
            glow: "#ef4444",
        },
        ThemeStyle::Modern => &ThemePalette {
            primary: "#0f766e",
            secondary: "#155e75",
            accent: "#06b6d4",
            background: "#042f2e",
            gradient: ["#0f766e", "#06b6d4", "#22d3ee"],
            glow: "#14b8a6",
        },
    }
}

/// Fixed per-size multiplier for geometry and intensity fields.
pub(crate) fn size_factor(size: SizeOption) -> f64 {
    match size {
        SizeOption::Small => 0.75,
        SizeOption::Medium => 1.0,
        SizeOption::Large => 1.25,
        SizeOption::Full => 1.5,
    }
}

pub(crate) fn scaled_count(base: usize, size: SizeOption) -> usize {
    ((base as f64) * size_factor(size)).round() as usize
}

pub(crate) fn scaled_px(base: f64, size: SizeOption) -> f64 {
    (base * size_factor(size) * 100.0).round() / 100.0
}

pub(crate) fn class_token(size: SizeOption, style: ThemeStyle, color_scheme: &str) -> String {
    format!(
        "portfolio-component size-{} theme-{} scheme-{}",
        size.as_str(),
        style.as_str(),
        color_scheme
    )
}

/// Base bag computed once per call. Variant-specific keys win on
/// collision; `className` is the one key a variant may fully replace.
pub(crate) fn base_bag(config: &AdaptConfig) -> PropertyBag {
    let size = config.size_or_default();
    let style = config.theme_style_or_default();
    let scheme = config
        .theme
        .as_ref()
        .and_then(|theme| theme.color_scheme.clone())
        .unwrap_or_else(|| "default".to_string());
    let mut bag = PropertyBag::new();
    bag.insert("data-theme".to_string(), json!(style.as_str()));
    bag.insert("data-size".to_string(), json!(size.as_str()));
    bag.insert(
        "className".to_string(),
        json!(class_token(size, style, &scheme)),
    );
    bag
}

/// Accent colour resolution: explicit config accent wins over the palette.
pub(crate) fn accent_color(config: &AdaptConfig) -> String {
    config
        .theme
        .as_ref()
        .and_then(|theme| theme.accent_color.clone())
        .unwrap_or_else(|| palette(config.theme_style_or_default()).accent.to_string())
}

/// Character-budget truncation with an ellipsis suffix. UTF-8 safe.
pub(crate) fn truncate(text: &str, budget: usize) -> String {
    if text.chars().count() <= budget {
        return text.to_string();
    }
    let head: String = text.chars().take(budget).collect();
    format!("{head}…")
}

/// Clamps a shaped item list to `[min, max]`: stable-prefix truncation
/// above `max`, padding below `min` from `filler` cycling by
/// `index mod filler.len()`.
pub(crate) fn bound_items(
    mut items: Vec<Value>,
    min: usize,
    max: usize,
    filler: &[Value],
) -> Vec<Value> {
    items.truncate(max);
    let mut index = 0;
    while items.len() < min && !filler.is_empty() {
        items.push(filler[index % filler.len()].clone());
        index += 1;
    }
    items
}

/// Rank for freeform skill levels; unknown levels rank lowest.
pub(crate) fn skill_rank(level: Option<&str>) -> u8 {
    match level.map(str::to_ascii_lowercase).as_deref() {
        Some("expert") => 4,
        Some("advanced") => 3,
        Some("intermediate") => 2,
        Some("beginner") => 1,
        _ => 0,
    }
}

/// Highest-ranked skill, first occurrence winning ties.
pub(crate) fn top_skill(skills: &[Skill]) -> Option<&Skill> {
    let mut best: Option<&Skill> = None;
    for skill in skills {
        let rank = skill_rank(skill.level.as_deref());
        match best {
            Some(current) if skill_rank(current.level.as_deref()) >= rank => {}
            _ => best = Some(skill),
        }
    }
    best
}

pub(crate) fn display_name(profile: &ProfileData) -> String {
    profile
        .personal_info
        .as_ref()
        .and_then(|info| info.name.clone())
        .filter(|name| !name.is_empty())
        .unwrap_or_else(|| FALLBACK_NAME.to_string())
}

pub(crate) fn headline(profile: &ProfileData) -> String {
    profile
        .personal_info
        .as_ref()
        .and_then(|info| info.title.clone())
        .filter(|title| !title.is_empty())
        .unwrap_or_else(|| FALLBACK_TITLE.to_string())
}

pub(crate) fn summary(profile: &ProfileData) -> String {
    profile
        .personal_info
        .as_ref()
        .and_then(|info| info.summary.clone())
        .filter(|summary| !summary.is_empty())
        .unwrap_or_else(|| FALLBACK_SUMMARY.to_string())
}

pub(crate) fn avatar(profile: &ProfileData) -> String {
    profile
        .personal_info
        .as_ref()
        .and_then(|info| info.avatar.clone())
        .filter(|avatar| !avatar.is_empty())
        .unwrap_or_else(|| PLACEHOLDER_AVATAR.to_string())
}

pub(crate) fn location(profile: &ProfileData) -> String {
    profile
        .personal_info
        .as_ref()
        .and_then(|info| info.location.clone())
        .filter(|location| !location.is_empty())
        .unwrap_or_else(|| "Remote".to_string())
}

/// Representative project: first entry with an image, else the first
/// entry. Stable left-to-right reduction.
pub(crate) fn featured_project(profile: &ProfileData) -> Option<&crate::models::Project> {
    profile
        .projects
        .iter()
        .find(|project| project.image.as_deref().is_some_and(|image| !image.is_empty()))
        .or_else(|| profile.projects.first())
}

/// Free-text hint from the caller, falling back to canned copy.
pub(crate) fn hint(config: &AdaptConfig, fallback: &str) -> String {
    config
        .custom_prompt
        .clone()
        .filter(|prompt| !prompt.is_empty())
        .unwrap_or_else(|| fallback.to_string())
}

/// Section navigation entries for the populated profile sections, in a
/// fixed order: `(label, icon, anchor)`.
pub(crate) fn section_links(profile: &ProfileData) -> Vec<(String, &'static str, String)> {
    let mut links = vec![("Home".to_string(), "home", "#home".to_string())];
    if profile.personal_info.is_some() {
        links.push(("About".to_string(), "user", "#about".to_string()));
    }
    if !profile.experience.is_empty() {
        links.push(("Experience".to_string(), "briefcase", "#experience".to_string()));
    }
    if !profile.education.is_empty() {
        links.push(("Education".to_string(), "academic-cap", "#education".to_string()));
    }
    if !profile.skills.is_empty() {
        links.push(("Skills".to_string(), "sparkles", "#skills".to_string()));
    }
    if !profile.projects.is_empty() {
        links.push(("Projects".to_string(), "folder", "#projects".to_string()));
    }
    if !profile.achievements.is_empty() {
        links.push(("Achievements".to_string(), "trophy", "#achievements".to_string()));
    }
    links.push(("Contact".to_string(), "envelope", "#contact".to_string()));
    links
}

pub(crate) fn skill_names(profile: &ProfileData, limit: usize) -> Vec<String> {
    let mut names: Vec<String> = profile
        .skills
        .iter()
        .take(limit)
        .map(|skill| skill.name.clone())
        .collect();
    let mut index = 0;
    while names.len() < limit.min(FILLER_SKILLS.len()) {
        names.push(FILLER_SKILLS[index % FILLER_SKILLS.len()].to_string());
        index += 1;
    }
    names
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_respects_character_budget() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("abcdefghij", 4), "abcd…");
    }

    #[test]
    fn bound_items_pads_with_cycled_filler() {
        let filler = vec![json!("a"), json!("b")];
        let bounded = bound_items(vec![json!(1)], 4, 6, &filler);
        assert_eq!(bounded, vec![json!(1), json!("a"), json!("b"), json!("a")]);
    }

    #[test]
    fn bound_items_truncates_stable_prefix() {
        let items: Vec<Value> = (0..10).map(|n| json!(n)).collect();
        let bounded = bound_items(items, 3, 6, &[]);
        assert_eq!(bounded.len(), 6);
        assert_eq!(bounded[0], json!(0));
        assert_eq!(bounded[5], json!(5));
    }

    #[test]
    fn top_skill_prefers_first_maximum() {
        let skills = vec![
            Skill {
                name: "Go".to_string(),
                level: Some("Expert".to_string()),
                category: None,
            },
            Skill {
                name: "Rust".to_string(),
                level: Some("Expert".to_string()),
                category: None,
            },
        ];
        assert_eq!(top_skill(&skills).map(|s| s.name.as_str()), Some("Go"));
    }
}
