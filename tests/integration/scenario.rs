//! End-to-end walkthrough with a minimal profile: a name and two skills.

use portfoliokit::models::AdaptConfig;
use portfoliokit::registry::{self, VariantTag};
use portfoliokit::transforms;
use portfoliokit::ComponentAdapter;

use crate::support;

#[test]
fn availability_reflects_the_populated_sections() {
    let adapter = ComponentAdapter::new(support::jane_doe());
    let available = adapter.available_variants();
    for meta in registry::list_all() {
        let expected = meta.required_data.is_empty()
            || meta.required_data.iter().any(|section| {
                matches!(
                    section,
                    portfoliokit::models::DataSection::PersonalInfo
                        | portfoliokit::models::DataSection::Skills
                )
            });
        assert_eq!(
            available.contains(&meta.tag),
            expected,
            "availability mismatch for {}",
            meta.name
        );
    }
    // Spot checks: project-only and history-only variants stay locked.
    assert!(!available.contains(&VariantTag::FocusCards));
    assert!(!available.contains(&VariantTag::Timeline));
    assert!(available.contains(&VariantTag::HeroHighlight));
    assert!(available.contains(&VariantTag::EvervaultCard));
}

#[test]
fn personal_info_variant_uses_the_name() {
    let mut adapter = ComponentAdapter::new(support::jane_doe());
    let adapted = adapter.adapt(VariantTag::HeroHighlight, None);
    assert_eq!(adapted.props["title"], "Jane Doe");
}

#[test]
fn skill_reduction_picks_the_first_maximum_level() {
    let mut adapter = ComponentAdapter::new(support::jane_doe());
    let config = AdaptConfig {
        variant: Some("skill".to_string()),
        ..AdaptConfig::default()
    };
    let adapted = adapter.adapt(VariantTag::EvervaultCard, Some(&config));
    assert_eq!(adapted.props["text"], "Go");
}

#[test]
fn unrecognized_sub_variants_fall_through_to_the_default_branch() {
    let profile = support::jane_doe();
    let unknown = AdaptConfig {
        variant: Some("bogus".to_string()),
        ..AdaptConfig::default()
    };
    let default = AdaptConfig::default();
    // evervault-card: anything other than "skill" shows the initials.
    assert_eq!(
        transforms::apply(VariantTag::EvervaultCard, &profile, &unknown),
        transforms::apply(VariantTag::EvervaultCard, &profile, &default),
    );
    // timeline: anything other than "education"/"experience" keeps both.
    assert_eq!(
        transforms::apply(VariantTag::Timeline, &profile, &unknown),
        transforms::apply(VariantTag::Timeline, &profile, &default),
    );
}

#[test]
fn repeated_adaptation_is_idempotent() {
    let mut adapter = ComponentAdapter::new(support::jane_doe());
    let first = adapter.adapt(VariantTag::HeroHighlight, None);
    let second = adapter.adapt(VariantTag::HeroHighlight, None);
    assert_eq!(first.props, second.props);
    assert_eq!(adapter.cached_count(), 1);
}
