use portfoliokit::models::AdaptConfig;
use portfoliokit::registry;
use portfoliokit::transforms;

use crate::support;

#[test]
fn every_transform_is_total_on_an_empty_profile() {
    let profile = support::empty_profile();
    let config = AdaptConfig::default();
    for meta in registry::list_all() {
        let bag = transforms::apply(meta.tag, &profile, &config);
        assert_eq!(bag["data-theme"], "professional", "{}", meta.name);
        assert_eq!(bag["data-size"], "medium", "{}", meta.name);
        assert!(
            bag["className"].as_str().is_some_and(|class| !class.is_empty()),
            "{} has no class token",
            meta.name
        );
        assert!(
            bag.len() > 3,
            "{} produced only the base keys",
            meta.name
        );
    }
}

#[test]
fn transforms_are_deterministic() {
    let profile = support::full_profile();
    let config = AdaptConfig::default();
    for meta in registry::list_all() {
        let first = transforms::apply(meta.tag, &profile, &config);
        let second = transforms::apply(meta.tag, &profile, &config);
        assert_eq!(first, second, "{} is not deterministic", meta.name);
    }
}

#[test]
fn fallbacks_fill_text_fields_when_data_is_absent() {
    let profile = support::empty_profile();
    let config = AdaptConfig::default();
    let hero = transforms::apply(registry::VariantTag::HeroHighlight, &profile, &config);
    assert_eq!(hero["title"], "Your Name");
    let card = transforms::apply(registry::VariantTag::ThreeDCard, &profile, &config);
    assert_eq!(card["image"], "/images/placeholder-project.svg");
}

#[test]
fn custom_prompt_flows_into_hint_backed_fields() {
    let profile = support::empty_profile();
    let config = AdaptConfig {
        custom_prompt: Some("Available for contract work".to_string()),
        ..AdaptConfig::default()
    };
    let banner = transforms::apply(registry::VariantTag::StickyBanner, &profile, &config);
    assert_eq!(banner["message"], "Available for contract work");
    let button = transforms::apply(registry::VariantTag::StatefulButton, &profile, &config);
    assert_eq!(button["text"], "Available for contract work");
}

#[test]
fn absent_or_empty_prompts_fall_back_to_canned_copy() {
    let profile = support::empty_profile();
    let banner =
        transforms::apply(registry::VariantTag::StickyBanner, &profile, &AdaptConfig::default());
    assert_eq!(banner["message"], "Open to new opportunities");

    let empty = AdaptConfig {
        custom_prompt: Some(String::new()),
        ..AdaptConfig::default()
    };
    let banner = transforms::apply(registry::VariantTag::StickyBanner, &profile, &empty);
    assert_eq!(banner["message"], "Open to new opportunities");
}
