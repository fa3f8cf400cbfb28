//! Content transforms: headline effects, scroll narratives, text reveals.

use serde_json::{json, Value};

use super::support::{
    accent_color, base_bag, bound_items, display_name, featured_project, headline, hint, palette,
    scaled_px, skill_names, summary, truncate, FILLER_PROJECTS, FILLER_WORDS, PLACEHOLDER_IMAGE,
};
use crate::models::{AdaptConfig, ProfileData, PropertyBag};

pub fn typewriter_effect(profile: &ProfileData, config: &AdaptConfig) -> PropertyBag {
    let mut bag = base_bag(config);
    // Sub-variants: "name" types the owner's name, default types the
    // professional title.
    let source = match config.variant.as_deref() {
        Some("name") => display_name(profile),
        _ => headline(profile),
    };
    let words: Vec<Value> = source
        .split_whitespace()
        .map(|word| json!({ "text": word }))
        .collect();
    let words = if words.is_empty() {
        FILLER_WORDS.iter().map(|word| json!({ "text": word })).collect()
    } else {
        words
    };
    bag.insert("words".to_string(), json!(words));
    bag.insert("cursorColor".to_string(), json!(accent_color(config)));
    bag
}

pub fn text_generate_effect(profile: &ProfileData, config: &AdaptConfig) -> PropertyBag {
    let mut bag = base_bag(config);
    bag.insert("words".to_string(), json!(truncate(&summary(profile), 280)));
    bag.insert(
        "duration".to_string(),
        json!(scaled_px(0.5, config.size_or_default())),
    );
    bag.insert("filter".to_string(), json!(true));
    bag
}

pub fn flip_words(profile: &ProfileData, config: &AdaptConfig) -> PropertyBag {
    let mut bag = base_bag(config);
    // Sub-variants: "roles" flips through held positions, default flips
    // through skill names.
    let words: Vec<String> = match config.variant.as_deref() {
        Some("roles") if !profile.experience.is_empty() => profile
            .experience
            .iter()
            .filter_map(|entry| entry.position.clone())
            .take(4)
            .collect(),
        _ => skill_names(profile, 4),
    };
    let words = if words.is_empty() {
        FILLER_WORDS.iter().map(|word| word.to_string()).collect()
    } else {
        words
    };
    bag.insert("words".to_string(), json!(words));
    bag.insert("prefix".to_string(), json!(display_name(profile)));
    bag.insert("duration".to_string(), json!(3000));
    bag
}

pub fn colourful_text(profile: &ProfileData, config: &AdaptConfig) -> PropertyBag {
    let mut bag = base_bag(config);
    bag.insert("text".to_string(), json!(display_name(profile)));
    bag.insert(
        "colors".to_string(),
        json!(palette(config.theme_style_or_default()).gradient),
    );
    bag
}

pub fn container_text_flip(profile: &ProfileData, config: &AdaptConfig) -> PropertyBag {
    let mut bag = base_bag(config);
    bag.insert("words".to_string(), json!(skill_names(profile, 4)));
    bag.insert("interval".to_string(), json!(3000));
    bag.insert("accentColor".to_string(), json!(accent_color(config)));
    bag
}

pub fn hero_parallax(profile: &ProfileData, config: &AdaptConfig) -> PropertyBag {
    let mut bag = base_bag(config);
    let products: Vec<Value> = profile
        .projects
        .iter()
        .map(|project| {
            json!({
                "title": project.name,
                "link": project.url.clone().unwrap_or_else(|| "#projects".to_string()),
                "thumbnail": project.image.clone().unwrap_or_else(|| PLACEHOLDER_IMAGE.to_string()),
            })
        })
        .collect();
    let filler: Vec<Value> = FILLER_PROJECTS
        .iter()
        .map(|f| json!({ "title": f.name, "link": "#", "thumbnail": f.image }))
        .collect();
    bag.insert("products".to_string(), json!(bound_items(products, 8, 15, &filler)));
    bag.insert("headerTitle".to_string(), json!(display_name(profile)));
    bag.insert("headerSubtitle".to_string(), json!(headline(profile)));
    bag
}

pub fn layout_grid(profile: &ProfileData, config: &AdaptConfig) -> PropertyBag {
    let mut bag = base_bag(config);
    let cards: Vec<Value> = profile
        .projects
        .iter()
        .enumerate()
        .map(|(index, project)| {
            json!({
                "id": index,
                "content": format!(
                    "{} — {}",
                    project.name,
                    truncate(project.description.as_deref().unwrap_or(""), 100),
                ),
                "className": if index % 3 == 0 { "md:col-span-2" } else { "col-span-1" },
                "thumbnail": project.image.clone().unwrap_or_else(|| PLACEHOLDER_IMAGE.to_string()),
            })
        })
        .collect();
    let filler: Vec<Value> = FILLER_PROJECTS
        .iter()
        .enumerate()
        .map(|(index, f)| {
            json!({
                "id": 900 + index,
                "content": f.description,
                "className": "col-span-1",
                "thumbnail": f.image,
            })
        })
        .collect();
    bag.insert("cards".to_string(), json!(bound_items(cards, 4, 8, &filler)));
    bag
}

pub fn macbook_scroll(profile: &ProfileData, config: &AdaptConfig) -> PropertyBag {
    let mut bag = base_bag(config);
    let project = featured_project(profile);
    bag.insert(
        "src".to_string(),
        json!(project
            .and_then(|p| p.image.clone())
            .unwrap_or_else(|| PLACEHOLDER_IMAGE.to_string())),
    );
    bag.insert("title".to_string(), json!(truncate(&summary(profile), 80)));
    bag.insert("badge".to_string(), json!(display_name(profile)));
    bag.insert("showGradient".to_string(), json!(true));
    bag
}

pub fn container_scroll_animation(profile: &ProfileData, config: &AdaptConfig) -> PropertyBag {
    let mut bag = base_bag(config);
    let project = featured_project(profile);
    bag.insert(
        "titleText".to_string(),
        json!(format!("{} — {}", display_name(profile), headline(profile))),
    );
    bag.insert(
        "image".to_string(),
        json!(project
            .and_then(|p| p.image.clone())
            .unwrap_or_else(|| PLACEHOLDER_IMAGE.to_string())),
    );
    bag.insert(
        "rotate".to_string(),
        json!(scaled_px(20.0, config.size_or_default())),
    );
    bag
}

pub fn google_gemini_effect(_profile: &ProfileData, config: &AdaptConfig) -> PropertyBag {
    let mut bag = base_bag(config);
    bag.insert("pathLengths".to_string(), json!([0.0, 0.2, 0.4, 0.6, 0.8]));
    bag.insert("title".to_string(), json!(hint(config, "Scroll to explore")));
    bag.insert(
        "strokeColor".to_string(),
        json!(palette(config.theme_style_or_default()).glow),
    );
    bag
}

pub fn lamp_effect(profile: &ProfileData, config: &AdaptConfig) -> PropertyBag {
    let mut bag = base_bag(config);
    bag.insert("title".to_string(), json!(display_name(profile)));
    bag.insert("subtitle".to_string(), json!(headline(profile)));
    bag.insert(
        "lampColor".to_string(),
        json!(palette(config.theme_style_or_default()).glow),
    );
    bag.insert("delay".to_string(), json!(0.5));
    bag
}

pub fn svg_mask_effect(profile: &ProfileData, config: &AdaptConfig) -> PropertyBag {
    let mut bag = base_bag(config);
    bag.insert("revealText".to_string(), json!(truncate(&summary(profile), 160)));
    bag.insert(
        "maskText".to_string(),
        json!(hint(config, "Move the pointer to reveal")),
    );
    bag.insert(
        "revealSize".to_string(),
        json!(scaled_px(600.0, config.size_or_default())),
    );
    bag
}

pub fn tracing_beam(profile: &ProfileData, config: &AdaptConfig) -> PropertyBag {
    let mut bag = base_bag(config);
    let mut sections: Vec<Value> = profile
        .experience
        .iter()
        .map(|entry| {
            json!({
                "badge": entry.duration.clone().unwrap_or_else(|| "Role".to_string()),
                "title": format!(
                    "{} · {}",
                    entry.position.clone().unwrap_or_else(|| "Role".to_string()),
                    entry.company.clone().unwrap_or_else(|| "Company".to_string()),
                ),
                "description": truncate(entry.description.as_deref().unwrap_or(""), 220),
            })
        })
        .collect();
    sections.extend(profile.education.iter().map(|entry| {
        json!({
            "badge": entry.year.clone().unwrap_or_else(|| "Education".to_string()),
            "title": entry.degree.clone().unwrap_or_else(|| "Degree".to_string()),
            "description": entry.institution.clone().unwrap_or_default(),
        })
    }));
    let filler: Vec<Value> = FILLER_PROJECTS
        .iter()
        .map(|f| json!({ "badge": "Sample", "title": f.name, "description": f.description }))
        .collect();
    bag.insert(
        "sections".to_string(),
        json!(bound_items(sections, 3, 8, &filler)),
    );
    bag.insert(
        "beamColors".to_string(),
        json!(palette(config.theme_style_or_default()).gradient),
    );
    bag
}

pub fn text_hover_effect(profile: &ProfileData, config: &AdaptConfig) -> PropertyBag {
    let mut bag = base_bag(config);
    bag.insert("text".to_string(), json!(display_name(profile)));
    bag.insert("strokeColor".to_string(), json!(accent_color(config)));
    bag.insert(
        "automaticDuration".to_string(),
        json!(scaled_px(4.0, config.size_or_default())),
    );
    bag
}

pub fn pointer_highlight(profile: &ProfileData, config: &AdaptConfig) -> PropertyBag {
    let mut bag = base_bag(config);
    let colors = palette(config.theme_style_or_default());
    bag.insert("text".to_string(), json!(truncate(&headline(profile), 60)));
    bag.insert("rectangleColor".to_string(), json!(colors.accent));
    bag.insert("pointerColor".to_string(), json!(colors.glow));
    bag
}

pub fn compare(profile: &ProfileData, config: &AdaptConfig) -> PropertyBag {
    let mut bag = base_bag(config);
    let mut images = profile
        .projects
        .iter()
        .filter_map(|project| project.image.clone())
        .filter(|image| !image.is_empty());
    bag.insert(
        "firstImage".to_string(),
        json!(images.next().unwrap_or_else(|| PLACEHOLDER_IMAGE.to_string())),
    );
    bag.insert(
        "secondImage".to_string(),
        json!(images
            .next()
            .unwrap_or_else(|| "/images/placeholder-2.svg".to_string())),
    );
    bag.insert("slideMode".to_string(), json!("hover"));
    bag.insert("showHandlebar".to_string(), json!(true));
    bag
}

pub fn sticky_banner(profile: &ProfileData, config: &AdaptConfig) -> PropertyBag {
    let mut bag = base_bag(config);
    let email = profile
        .personal_info
        .as_ref()
        .and_then(|info| info.email.clone());
    bag.insert(
        "message".to_string(),
        json!(hint(config, "Open to new opportunities")),
    );
    bag.insert("dismissable".to_string(), json!(true));
    bag.insert("linkText".to_string(), json!("Contact"));
    bag.insert(
        "linkHref".to_string(),
        json!(email
            .map(|address| format!("mailto:{address}"))
            .unwrap_or_else(|| "#contact".to_string())),
    );
    bag
}

pub fn spotlight(profile: &ProfileData, config: &AdaptConfig) -> PropertyBag {
    let mut bag = base_bag(config);
    bag.insert("title".to_string(), json!(display_name(profile)));
    bag.insert("subtitle".to_string(), json!(headline(profile)));
    bag.insert(
        "fill".to_string(),
        json!(palette(config.theme_style_or_default()).glow),
    );
    bag
}
