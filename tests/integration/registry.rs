use anyhow::Result;
use portfoliokit::registry::{self, VariantTag, REGISTRY};
use serde_json::json;

#[test]
fn registry_self_check_passes() -> Result<()> {
    registry::self_check()
}

#[test]
fn registry_holds_one_entry_per_tag() {
    assert_eq!(REGISTRY.len(), 80);
    for (index, meta) in REGISTRY.iter().enumerate() {
        assert_eq!(meta.tag as usize, index, "entry {} out of order", meta.name);
        assert!(!meta.display_name.is_empty());
        assert!(!meta.description.is_empty());
        assert!(!meta.best_for.is_empty(), "{} has no use-case tags", meta.name);
    }
}

#[test]
fn list_all_is_declaration_order() {
    let names: Vec<&str> = registry::list_all().map(|meta| meta.name).collect();
    assert_eq!(names.len(), 80);
    assert_eq!(names[0], "aurora-background");
    assert_eq!(names[79], "grid-and-dot-backgrounds");
}

#[test]
fn wire_names_round_trip_through_parse() {
    for meta in registry::list_all() {
        assert_eq!(VariantTag::parse(meta.name), Some(meta.tag), "{}", meta.name);
    }
    assert_eq!(VariantTag::parse("not-a-component"), None);
    assert_eq!(VariantTag::parse(""), None);
}

#[test]
fn wire_names_match_serde_representation() {
    for meta in registry::list_all() {
        let serialized = serde_json::to_value(meta.tag).expect("tag serializes");
        assert_eq!(serialized, json!(meta.name));
    }
}

#[test]
fn metadata_lookup_matches_table() {
    let meta = registry::metadata(VariantTag::BentoGrid);
    assert_eq!(meta.tag, VariantTag::BentoGrid);
    assert_eq!(meta.name, "bento-grid");
}
