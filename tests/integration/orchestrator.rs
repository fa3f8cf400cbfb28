use portfoliokit::models::{AdaptConfig, SizeOption, ThemeConfig, ThemeStyle};
use portfoliokit::registry::{Category, VariantTag};
use portfoliokit::ComponentAdapter;

use crate::support;

fn size_override(size: SizeOption) -> AdaptConfig {
    AdaptConfig {
        size: Some(size),
        ..AdaptConfig::default()
    }
}

#[test]
fn readapting_a_tag_overwrites_its_cache_slot() {
    let mut adapter = ComponentAdapter::new(support::full_profile());
    adapter.adapt(VariantTag::Sparkles, Some(&size_override(SizeOption::Small)));
    adapter.adapt(VariantTag::Sparkles, Some(&size_override(SizeOption::Large)));
    assert_eq!(adapter.cached_count(), 1);
    let entry = adapter.cached(VariantTag::Sparkles).expect("cached");
    assert_eq!(entry.props["data-size"], "large");
}

#[test]
fn overrides_merge_over_session_defaults() {
    let defaults = AdaptConfig {
        size: Some(SizeOption::Large),
        theme: Some(ThemeConfig {
            style: Some(ThemeStyle::Bold),
            color_scheme: Some("dark".to_string()),
            accent_color: None,
        }),
        variant: None,
        custom_prompt: None,
    };
    let mut adapter = ComponentAdapter::with_defaults(support::full_profile(), defaults);
    let adapted = adapter.adapt(VariantTag::Meteors, Some(&size_override(SizeOption::Small)));
    // Size comes from the override, theme from the defaults.
    assert_eq!(adapted.props["data-size"], "small");
    assert_eq!(adapted.props["data-theme"], "bold");
}

#[test]
fn adapt_all_covers_every_available_variant() {
    let mut adapter = ComponentAdapter::new(support::skills_only());
    let adapted = adapter.adapt_all(None);
    assert_eq!(adapted.len(), adapter.available_variants().len());
    assert_eq!(adapter.cached_count(), adapted.len());
}

#[test]
fn reset_clears_cache_and_preset_marker() {
    let mut adapter = ComponentAdapter::new(support::full_profile());
    adapter.apply_preset("modernBalanced");
    assert!(adapter.cached_count() > 0);
    adapter.reset();
    assert_eq!(adapter.cached_count(), 0);
    assert_eq!(adapter.active_preset(), None);
    // Idempotent.
    adapter.reset();
    assert_eq!(adapter.cached_count(), 0);
}

#[test]
fn by_category_filters_cached_entries() {
    let mut adapter = ComponentAdapter::new(support::full_profile());
    adapter.adapt(VariantTag::AuroraBackground, None);
    adapter.adapt(VariantTag::Meteors, None);
    adapter.adapt(VariantTag::BentoGrid, None);
    let backgrounds = adapter.by_category(Category::Background);
    assert_eq!(backgrounds.len(), 2);
    assert!(adapter.by_category(Category::Navigation).is_empty());
}

#[test]
fn recommend_matches_use_case_tags_case_insensitively() {
    let adapter = ComponentAdapter::new(support::full_profile());
    let hero = adapter.recommend("HERO");
    assert!(hero.contains(&VariantTag::AuroraBackground));
    assert!(hero.contains(&VariantTag::HeroHighlight));
    assert!(!hero.contains(&VariantTag::FocusCards));

    let career = adapter.recommend("career");
    assert!(career.contains(&VariantTag::Timeline));
    assert!(career.contains(&VariantTag::MultiStepLoader));
}

#[test]
fn recommend_only_returns_available_tags() {
    let adapter = ComponentAdapter::new(support::empty_profile());
    // hero-highlight needs personalInfo, so it cannot be recommended here.
    assert!(!adapter.recommend("hero").contains(&VariantTag::HeroHighlight));
    assert!(adapter.recommend("hero").contains(&VariantTag::AuroraBackground));
}

#[test]
fn adapt_named_resolves_wire_names_at_the_boundary() {
    let mut adapter = ComponentAdapter::new(support::full_profile());
    let adapted = adapter.adapt_named("bento-grid", None).expect("known name");
    assert_eq!(adapted.tag, VariantTag::BentoGrid);
    assert!(adapter.adapt_named("definitely-not-a-component", None).is_none());
    assert_eq!(adapter.cached_count(), 1);
}
