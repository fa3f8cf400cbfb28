use portfoliokit::models::SizeOption;
use portfoliokit::registry::{self, presets, VariantTag};
use portfoliokit::ComponentAdapter;

use crate::support;

#[test]
fn preset_catalog_is_well_formed() {
    let catalog = presets::all();
    assert!(catalog.len() >= 5);
    for (index, preset) in catalog.iter().enumerate() {
        assert!(!preset.description.is_empty());
        assert!(preset.theme.style.is_some());
        assert!(
            catalog[..index].iter().all(|prior| prior.name != preset.name),
            "duplicate preset name {}",
            preset.name
        );
    }
    assert!(presets::find("creativeDark").is_some());
    assert!(presets::find("noSuchPreset").is_none());
}

#[test]
fn preset_adapts_exactly_the_supported_available_tags() {
    let mut adapter = ComponentAdapter::new(support::full_profile());
    let preset = presets::find("creativeDark").expect("preset exists");
    let adapted = adapter.apply_preset("creativeDark");

    let expected: Vec<VariantTag> = adapter
        .available_variants()
        .iter()
        .copied()
        .filter(|tag| {
            let meta = registry::metadata(*tag);
            meta.supported_sizes.contains(&SizeOption::Large)
                && meta.supported_themes.contains(&preset.theme.style.unwrap())
        })
        .collect();
    assert_eq!(adapted, expected);
    assert_eq!(adapter.cached_count(), expected.len());
    assert_eq!(adapter.active_preset(), Some("creativeDark"));

    for tag in &adapted {
        let entry = adapter.cached(*tag).expect("cached entry");
        assert_eq!(entry.props["data-theme"], "creative");
    }
    // No tag outside the selection is touched.
    for meta in registry::list_all() {
        if !adapted.contains(&meta.tag) {
            assert!(adapter.cached(meta.tag).is_none(), "{} leaked", meta.name);
        }
    }
}

#[test]
fn component_overrides_take_precedence_for_their_tag_only() {
    let mut adapter = ComponentAdapter::new(support::full_profile());
    let adapted = adapter.apply_preset("creativeDark");

    // Sparkles carries a size override up to full.
    assert!(adapted.contains(&VariantTag::Sparkles));
    let sparkles = adapter.cached(VariantTag::Sparkles).expect("cached");
    assert_eq!(sparkles.props["data-size"], "full");

    // Other tags keep the blanket preset size.
    let aurora = adapter.cached(VariantTag::AuroraBackground).expect("cached");
    assert_eq!(aurora.props["data-size"], "large");
}

#[test]
fn unknown_preset_is_a_no_op() {
    let mut adapter = ComponentAdapter::new(support::full_profile());
    adapter.adapt(VariantTag::Meteors, None);
    let adapted = adapter.apply_preset("noSuchPreset");
    assert!(adapted.is_empty());
    assert_eq!(adapter.cached_count(), 1);
    assert_eq!(adapter.active_preset(), None);
}
