//! Background transforms. None of these require profile data; text they
//! display comes from `personalInfo` when present and fallbacks otherwise.

use serde_json::json;

use super::support::{
    accent_color, base_bag, display_name, headline, hint, palette, scaled_count, scaled_px,
    summary, truncate,
};
use crate::models::{AdaptConfig, ProfileData, PropertyBag, SizeOption, ThemeStyle};

pub fn aurora_background(profile: &ProfileData, config: &AdaptConfig) -> PropertyBag {
    let mut bag = base_bag(config);
    let colors = palette(config.theme_style_or_default());
    bag.insert("headline".to_string(), json!(display_name(profile)));
    bag.insert("subheadline".to_string(), json!(headline(profile)));
    bag.insert("gradientColors".to_string(), json!(colors.gradient));
    bag.insert("showRadialGradient".to_string(), json!(true));
    bag.insert(
        "animationDuration".to_string(),
        json!(scaled_px(8.0, config.size_or_default())),
    );
    bag
}

pub fn background_beams(profile: &ProfileData, config: &AdaptConfig) -> PropertyBag {
    let mut bag = base_bag(config);
    let style = config.theme_style_or_default();
    bag.insert(
        "beamCount".to_string(),
        json!(scaled_count(6, config.size_or_default())),
    );
    bag.insert("beamColor".to_string(), json!(palette(style).glow));
    bag.insert("subtle".to_string(), json!(style == ThemeStyle::Minimal));
    bag.insert("caption".to_string(), json!(truncate(&summary(profile), 120)));
    bag
}

pub fn background_beams_with_collision(profile: &ProfileData, config: &AdaptConfig) -> PropertyBag {
    let mut bag = base_bag(config);
    bag.insert(
        "beamCount".to_string(),
        json!(scaled_count(8, config.size_or_default())),
    );
    bag.insert("explosionColor".to_string(), json!(accent_color(config)));
    bag.insert("headline".to_string(), json!(truncate(&headline(profile), 60)));
    bag
}

pub fn background_boxes(profile: &ProfileData, config: &AdaptConfig) -> PropertyBag {
    let mut bag = base_bag(config);
    let size = config.size_or_default();
    bag.insert("rows".to_string(), json!(scaled_count(12, size)));
    bag.insert("columns".to_string(), json!(scaled_count(16, size)));
    bag.insert("highlightColor".to_string(), json!(accent_color(config)));
    bag.insert("title".to_string(), json!(display_name(profile)));
    bag
}

pub fn background_gradient_animation(profile: &ProfileData, config: &AdaptConfig) -> PropertyBag {
    let mut bag = base_bag(config);
    let colors = palette(config.theme_style_or_default());
    // Sub-variants: "vivid" sharpens the stops, anything else stays soft.
    let vivid = config.variant.as_deref() == Some("vivid");
    bag.insert("firstColor".to_string(), json!(colors.gradient[0]));
    bag.insert("secondColor".to_string(), json!(colors.gradient[1]));
    bag.insert("thirdColor".to_string(), json!(colors.gradient[2]));
    bag.insert("blendingValue".to_string(), json!(if vivid { "hard-light" } else { "soft-light" }));
    bag.insert(
        "interactive".to_string(),
        json!(config.size_or_default() != SizeOption::Small),
    );
    bag.insert("overlayText".to_string(), json!(display_name(profile)));
    bag
}

pub fn background_lines(_profile: &ProfileData, config: &AdaptConfig) -> PropertyBag {
    let mut bag = base_bag(config);
    let size = config.size_or_default();
    let colors = palette(config.theme_style_or_default());
    bag.insert("lineCount".to_string(), json!(scaled_count(10, size)));
    bag.insert("lineColor".to_string(), json!(colors.secondary));
    bag.insert("waveAmplitude".to_string(), json!(scaled_px(12.0, size)));
    bag
}

pub fn shooting_stars(_profile: &ProfileData, config: &AdaptConfig) -> PropertyBag {
    let mut bag = base_bag(config);
    let colors = palette(config.theme_style_or_default());
    bag.insert(
        "starCount".to_string(),
        json!(scaled_count(12, config.size_or_default())),
    );
    bag.insert("trailColor".to_string(), json!(colors.glow));
    bag.insert("starColor".to_string(), json!("#ffffff"));
    bag.insert("backgroundColor".to_string(), json!(colors.background));
    bag
}

pub fn stars_background(_profile: &ProfileData, config: &AdaptConfig) -> PropertyBag {
    let mut bag = base_bag(config);
    bag.insert(
        "starCount".to_string(),
        json!(scaled_count(120, config.size_or_default())),
    );
    bag.insert("twinkleProbability".to_string(), json!(0.7));
    bag.insert(
        "backgroundColor".to_string(),
        json!(palette(config.theme_style_or_default()).background),
    );
    bag
}

pub fn meteors(_profile: &ProfileData, config: &AdaptConfig) -> PropertyBag {
    let mut bag = base_bag(config);
    bag.insert(
        "number".to_string(),
        json!(scaled_count(20, config.size_or_default())),
    );
    bag.insert("color".to_string(), json!(accent_color(config)));
    bag
}

pub fn sparkles(_profile: &ProfileData, config: &AdaptConfig) -> PropertyBag {
    let mut bag = base_bag(config);
    let size = config.size_or_default();
    bag.insert("id".to_string(), json!(format!("sparkles-{}", size.as_str())));
    bag.insert("particleDensity".to_string(), json!(scaled_count(80, size)));
    bag.insert("minSize".to_string(), json!(0.6));
    bag.insert("maxSize".to_string(), json!(scaled_px(1.4, size)));
    bag.insert("particleColor".to_string(), json!(accent_color(config)));
    bag
}

pub fn vortex(profile: &ProfileData, config: &AdaptConfig) -> PropertyBag {
    let mut bag = base_bag(config);
    // Fixed per-style hue table for the particle field.
    let base_hue = match config.theme_style_or_default() {
        ThemeStyle::Professional => 220,
        ThemeStyle::Creative => 280,
        ThemeStyle::Minimal => 0,
        ThemeStyle::Bold => 15,
        ThemeStyle::Modern => 180,
    };
    bag.insert(
        "particleCount".to_string(),
        json!(scaled_count(500, config.size_or_default())),
    );
    bag.insert("baseHue".to_string(), json!(base_hue));
    bag.insert("rangeY".to_string(), json!(800));
    bag.insert("overlayText".to_string(), json!(hint(config, &display_name(profile))));
    bag
}

pub fn wavy_background(profile: &ProfileData, config: &AdaptConfig) -> PropertyBag {
    let mut bag = base_bag(config);
    let size = config.size_or_default();
    let style = config.theme_style_or_default();
    bag.insert("waveWidth".to_string(), json!(scaled_px(50.0, size)));
    bag.insert("colors".to_string(), json!(palette(style).gradient));
    bag.insert("waveOpacity".to_string(), json!(0.5));
    bag.insert("blur".to_string(), json!(10));
    bag.insert(
        "speed".to_string(),
        json!(if style == ThemeStyle::Bold { "fast" } else { "slow" }),
    );
    bag.insert("headline".to_string(), json!(display_name(profile)));
    bag.insert("subheadline".to_string(), json!(headline(profile)));
    bag
}
