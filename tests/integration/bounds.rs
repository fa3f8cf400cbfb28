use portfoliokit::models::AdaptConfig;
use portfoliokit::registry::VariantTag;
use portfoliokit::transforms;

use crate::support;

// card-hover-effect declares [min=3, max=6] on its item list.

#[test]
fn short_lists_are_padded_with_cycled_filler() {
    let profile = support::projects_only(1);
    let bag = transforms::apply(VariantTag::CardHoverEffect, &profile, &AdaptConfig::default());
    let items = bag["items"].as_array().expect("items array");
    assert_eq!(items.len(), 3);
    assert_eq!(items[0]["title"], "project-0");
    // Two filler entries, cycled from the start of the filler list.
    assert_eq!(items[1]["title"], "Sample Project");
    assert_eq!(items[2]["title"], "Side Quest");
}

#[test]
fn long_lists_are_truncated_to_a_stable_prefix() {
    let profile = support::projects_only(10);
    let bag = transforms::apply(VariantTag::CardHoverEffect, &profile, &AdaptConfig::default());
    let items = bag["items"].as_array().expect("items array");
    assert_eq!(items.len(), 6);
    for (index, item) in items.iter().enumerate() {
        assert_eq!(item["title"], format!("project-{index}"));
    }
}

#[test]
fn hero_parallax_pads_up_to_its_minimum_of_eight() {
    let profile = support::projects_only(2);
    let bag = transforms::apply(VariantTag::HeroParallax, &profile, &AdaptConfig::default());
    let products = bag["products"].as_array().expect("products array");
    assert_eq!(products.len(), 8);
    assert_eq!(products[0]["title"], "project-0");
    assert_eq!(products[1]["title"], "project-1");
    // Six filler products cycling through the three-entry filler list.
    assert_eq!(products[2]["title"], "Sample Project");
    assert_eq!(products[5]["title"], "Sample Project");
}
