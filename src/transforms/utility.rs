//! Utility transforms: globes, maps, code cards, textures, loaders.

use serde_json::{json, Value};

use super::support::{
    accent_color, base_bag, bound_items, display_name, featured_project, headline, hint, location,
    palette, scaled_count, scaled_px, skill_names, truncate, FILLER_PROJECTS,
};
use crate::models::{AdaptConfig, ProfileData, PropertyBag};

pub fn three_d_pin(profile: &ProfileData, config: &AdaptConfig) -> PropertyBag {
    let mut bag = base_bag(config);
    let project = featured_project(profile);
    let website = profile
        .personal_info
        .as_ref()
        .and_then(|info| info.website.clone());
    bag.insert(
        "title".to_string(),
        json!(project.map(|p| p.name.clone()).unwrap_or_else(|| display_name(profile))),
    );
    bag.insert(
        "href".to_string(),
        json!(project
            .and_then(|p| p.url.clone())
            .or(website)
            .unwrap_or_else(|| "#projects".to_string())),
    );
    bag.insert(
        "description".to_string(),
        json!(truncate(
            project
                .and_then(|p| p.description.as_deref())
                .unwrap_or("Featured work"),
            100
        )),
    );
    bag
}

pub fn world_map(profile: &ProfileData, config: &AdaptConfig) -> PropertyBag {
    let mut bag = base_bag(config);
    bag.insert("homeLabel".to_string(), json!(location(profile)));
    bag.insert(
        "connectionLabels".to_string(),
        json!(profile
            .experience
            .iter()
            .filter_map(|entry| entry.company.clone())
            .take(4)
            .collect::<Vec<_>>()),
    );
    bag.insert("arcColor".to_string(), json!(accent_color(config)));
    bag.insert(
        "dotCount".to_string(),
        json!(scaled_count(24, config.size_or_default())),
    );
    bag
}

pub fn github_globe(_profile: &ProfileData, config: &AdaptConfig) -> PropertyBag {
    let mut bag = base_bag(config);
    let colors = palette(config.theme_style_or_default());
    bag.insert("globeColor".to_string(), json!(colors.background));
    bag.insert("markerColor".to_string(), json!(colors.glow));
    bag.insert("autoRotate".to_string(), json!(true));
    bag.insert(
        "arcCount".to_string(),
        json!(scaled_count(16, config.size_or_default())),
    );
    bag
}

pub fn code_block(profile: &ProfileData, config: &AdaptConfig) -> PropertyBag {
    let mut bag = base_bag(config);
    let skills = skill_names(profile, 4);
    let quoted: Vec<String> = skills.iter().map(|name| format!("\"{name}\"")).collect();
    let code = format!(
        "const developer = {{\n  name: \"{}\",\n  title: \"{}\",\n  skills: [{}],\n}};",
        display_name(profile),
        headline(profile),
        quoted.join(", "),
    );
    bag.insert("language".to_string(), json!("typescript"));
    bag.insert("filename".to_string(), json!("profile.ts"));
    bag.insert("code".to_string(), json!(code));
    bag.insert("highlightLines".to_string(), json!([2]));
    bag
}

pub fn glowing_effect(profile: &ProfileData, config: &AdaptConfig) -> PropertyBag {
    let mut bag = base_bag(config);
    let size = config.size_or_default();
    let mut items: Vec<Value> = profile
        .projects
        .iter()
        .map(|project| {
            json!({
                "title": project.name,
                "description": truncate(project.description.as_deref().unwrap_or(""), 120),
            })
        })
        .collect();
    items.extend(profile.skills.iter().map(|skill| {
        json!({
            "title": skill.name,
            "description": skill.level.clone().unwrap_or_else(|| "Skilled".to_string()),
        })
    }));
    let filler: Vec<Value> = FILLER_PROJECTS
        .iter()
        .map(|f| json!({ "title": f.name, "description": f.description }))
        .collect();
    bag.insert("items".to_string(), json!(bound_items(items, 2, 5, &filler)));
    bag.insert("spread".to_string(), json!(scaled_px(40.0, size)));
    bag.insert("proximity".to_string(), json!(scaled_px(64.0, size)));
    bag.insert("glowColor".to_string(), json!(accent_color(config)));
    bag
}

pub fn loader(profile: &ProfileData, config: &AdaptConfig) -> PropertyBag {
    let mut bag = base_bag(config);
    // Sub-variants: "dots" renders a dot loader, default a spinner.
    bag.insert(
        "kind".to_string(),
        json!(match config.variant.as_deref() {
            Some("dots") => "dots",
            _ => "spinner",
        }),
    );
    bag.insert(
        "loadingText".to_string(),
        json!(format!("Loading {}…", display_name(profile))),
    );
    bag.insert("color".to_string(), json!(accent_color(config)));
    bag.insert(
        "indicatorSize".to_string(),
        json!(scaled_px(40.0, config.size_or_default())),
    );
    bag
}

pub fn cover(profile: &ProfileData, config: &AdaptConfig) -> PropertyBag {
    let mut bag = base_bag(config);
    bag.insert("text".to_string(), json!(truncate(&headline(profile), 40)));
    bag.insert("coverText".to_string(), json!(hint(config, "warp speed")));
    bag.insert(
        "beamCount".to_string(),
        json!(scaled_count(10, config.size_or_default())),
    );
    bag
}

pub fn feature_sections(profile: &ProfileData, config: &AdaptConfig) -> PropertyBag {
    let mut bag = base_bag(config);
    // Sub-variants: "list" stacks features vertically, default is a grid.
    let layout = match config.variant.as_deref() {
        Some("list") => "list",
        _ => "grid",
    };
    let mut features: Vec<Value> = profile
        .skills
        .iter()
        .map(|skill| {
            json!({
                "title": skill.name,
                "description": skill.level.clone().unwrap_or_else(|| "Skilled".to_string()),
                "icon": "sparkles",
            })
        })
        .collect();
    features.extend(profile.projects.iter().map(|project| {
        json!({
            "title": project.name,
            "description": truncate(project.description.as_deref().unwrap_or(""), 120),
            "icon": "folder",
        })
    }));
    let filler: Vec<Value> = FILLER_PROJECTS
        .iter()
        .map(|f| json!({ "title": f.name, "description": f.description, "icon": "folder" }))
        .collect();
    bag.insert("features".to_string(), json!(bound_items(features, 3, 6, &filler)));
    bag.insert("layout".to_string(), json!(layout));
    bag
}

pub fn grid_and_dot_backgrounds(_profile: &ProfileData, config: &AdaptConfig) -> PropertyBag {
    let mut bag = base_bag(config);
    // Sub-variants: "dots" and "small-grid" swap the texture pattern.
    let pattern = match config.variant.as_deref() {
        Some("dots") => "dots",
        Some("small-grid") => "small-grid",
        _ => "grid",
    };
    bag.insert("pattern".to_string(), json!(pattern));
    bag.insert(
        "patternColor".to_string(),
        json!(palette(config.theme_style_or_default()).secondary),
    );
    bag.insert("fadeCenter".to_string(), json!(true));
    bag.insert(
        "cellSize".to_string(),
        json!(scaled_px(40.0, config.size_or_default())),
    );
    bag
}
