use portfoliokit::registry::{self, VariantTag};

use crate::support;

#[test]
fn tags_without_requirements_are_always_available() {
    let available = registry::available_variants(&support::empty_profile());
    for meta in registry::list_all() {
        if meta.required_data.is_empty() {
            assert!(available.contains(&meta.tag), "{} should be available", meta.name);
        } else {
            assert!(!available.contains(&meta.tag), "{} should be filtered", meta.name);
        }
    }
}

#[test]
fn any_listed_section_satisfies_the_requirement() {
    // card-hover-effect lists skills and projects; either alone suffices.
    let skills_only = registry::available_variants(&support::skills_only());
    assert!(skills_only.contains(&VariantTag::CardHoverEffect));
    assert!(skills_only.contains(&VariantTag::InfiniteMovingCards));
    assert!(!skills_only.contains(&VariantTag::FocusCards));
    assert!(!skills_only.contains(&VariantTag::Timeline));

    let projects_only = registry::available_variants(&support::projects_only(1));
    assert!(projects_only.contains(&VariantTag::CardHoverEffect));
    assert!(projects_only.contains(&VariantTag::FocusCards));
    assert!(!projects_only.contains(&VariantTag::InfiniteMovingCards));
}

#[test]
fn availability_preserves_registry_order() {
    let available = registry::available_variants(&support::full_profile());
    let expected: Vec<VariantTag> = registry::list_all()
        .filter(|meta| available.contains(&meta.tag))
        .map(|meta| meta.tag)
        .collect();
    assert_eq!(available, expected);
}

#[test]
fn full_profile_unlocks_every_variant() {
    assert_eq!(registry::available_variants(&support::full_profile()).len(), 80);
}
