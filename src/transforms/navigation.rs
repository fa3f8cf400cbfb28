//! Navigation transforms. Links are derived from whichever profile
//! sections are populated, so none of these require data.

use serde_json::{json, Value};

use super::support::{
    accent_color, avatar, base_bag, bound_items, display_name, section_links, truncate,
};
use crate::models::{AdaptConfig, ProfileData, PropertyBag, SizeOption};

fn shaped_links(profile: &ProfileData) -> Vec<Value> {
    section_links(profile)
        .into_iter()
        .map(|(title, icon, href)| json!({ "title": title, "icon": icon, "href": href }))
        .collect()
}

fn link_filler() -> Vec<Value> {
    vec![
        json!({ "title": "Home", "icon": "home", "href": "#home" }),
        json!({ "title": "Contact", "icon": "envelope", "href": "#contact" }),
    ]
}

pub fn floating_dock(profile: &ProfileData, config: &AdaptConfig) -> PropertyBag {
    let mut bag = base_bag(config);
    bag.insert(
        "items".to_string(),
        json!(bound_items(shaped_links(profile), 4, 8, &link_filler())),
    );
    bag.insert("magnification".to_string(), json!(1.6));
    bag.insert(
        "orientation".to_string(),
        json!(if config.size_or_default() == SizeOption::Small { "vertical" } else { "horizontal" }),
    );
    bag
}

pub fn floating_navbar(profile: &ProfileData, config: &AdaptConfig) -> PropertyBag {
    let mut bag = base_bag(config);
    bag.insert(
        "navItems".to_string(),
        json!(bound_items(shaped_links(profile), 3, 5, &link_filler())),
    );
    bag.insert("showOnScrollUp".to_string(), json!(true));
    bag.insert("accentColor".to_string(), json!(accent_color(config)));
    bag
}

pub fn navbar_menu(profile: &ProfileData, config: &AdaptConfig) -> PropertyBag {
    let mut bag = base_bag(config);
    let email = profile
        .personal_info
        .as_ref()
        .and_then(|info| info.email.clone());
    bag.insert(
        "items".to_string(),
        json!(bound_items(shaped_links(profile), 3, 7, &link_filler())),
    );
    bag.insert(
        "cta".to_string(),
        json!({
            "label": "Contact",
            "href": email
                .map(|address| format!("mailto:{address}"))
                .unwrap_or_else(|| "#contact".to_string()),
        }),
    );
    bag
}

pub fn sidebar(profile: &ProfileData, config: &AdaptConfig) -> PropertyBag {
    let mut bag = base_bag(config);
    bag.insert(
        "links".to_string(),
        json!(bound_items(shaped_links(profile), 4, 8, &link_filler())),
    );
    bag.insert("label".to_string(), json!(display_name(profile)));
    bag.insert("avatar".to_string(), json!(avatar(profile)));
    bag.insert(
        "startCollapsed".to_string(),
        json!(config.size_or_default() == SizeOption::Medium),
    );
    bag
}

pub fn tabs(profile: &ProfileData, config: &AdaptConfig) -> PropertyBag {
    let mut bag = base_bag(config);
    let mut items: Vec<Value> = Vec::new();
    if !profile.skills.is_empty() {
        items.push(json!({
            "title": "Skills",
            "value": "skills",
            "summary": truncate(
                &profile
                    .skills
                    .iter()
                    .map(|skill| skill.name.clone())
                    .collect::<Vec<_>>()
                    .join(", "),
                120,
            ),
        }));
    }
    if !profile.projects.is_empty() {
        items.push(json!({
            "title": "Projects",
            "value": "projects",
            "summary": format!("{} projects", profile.projects.len()),
        }));
    }
    if !profile.experience.is_empty() {
        items.push(json!({
            "title": "Experience",
            "value": "experience",
            "summary": format!("{} roles", profile.experience.len()),
        }));
    }
    let filler = vec![
        json!({ "title": "Overview", "value": "overview", "summary": "A quick overview." }),
        json!({ "title": "About", "value": "about", "summary": "Background and interests." }),
    ];
    bag.insert("tabs".to_string(), json!(bound_items(items, 2, 6, &filler)));
    bag.insert("activeTabColor".to_string(), json!(accent_color(config)));
    bag
}

pub fn resizable_navbar(profile: &ProfileData, config: &AdaptConfig) -> PropertyBag {
    let mut bag = base_bag(config);
    bag.insert(
        "navItems".to_string(),
        json!(bound_items(shaped_links(profile), 3, 5, &link_filler())),
    );
    bag.insert("logoText".to_string(), json!(display_name(profile)));
    bag.insert("compactOnScroll".to_string(), json!(true));
    bag
}
