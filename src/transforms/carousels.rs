//! Carousel and scroll-sequence transforms. All item lists are bounded.

use serde_json::{json, Value};

use super::support::{
    accent_color, base_bag, bound_items, display_name, palette, scaled_px, size_factor, truncate,
    FILLER_IMAGES, FILLER_PROJECTS, FILLER_QUOTES, PLACEHOLDER_AVATAR, PLACEHOLDER_IMAGE,
};
use crate::models::{AdaptConfig, ProfileData, PropertyBag, SizeOption};

fn speed_label(size: SizeOption) -> &'static str {
    let factor = size_factor(size);
    if factor < 1.0 {
        "slow"
    } else if factor > 1.0 {
        "fast"
    } else {
        "normal"
    }
}

pub fn apple_cards_carousel(profile: &ProfileData, config: &AdaptConfig) -> PropertyBag {
    let mut bag = base_bag(config);
    let mut cards: Vec<Value> = profile
        .projects
        .iter()
        .map(|project| {
            json!({
                "category": project.technologies.first().cloned().unwrap_or_else(|| "Project".to_string()),
                "title": project.name,
                "src": project.image.clone().unwrap_or_else(|| PLACEHOLDER_IMAGE.to_string()),
                "content": truncate(project.description.as_deref().unwrap_or(""), 240),
            })
        })
        .collect();
    cards.extend(profile.experience.iter().map(|entry| {
        json!({
            "category": entry.company.clone().unwrap_or_else(|| "Experience".to_string()),
            "title": entry.position.clone().unwrap_or_else(|| "Role".to_string()),
            "src": PLACEHOLDER_IMAGE,
            "content": truncate(entry.description.as_deref().unwrap_or(""), 240),
        })
    }));
    let filler: Vec<Value> = FILLER_PROJECTS
        .iter()
        .map(|f| {
            json!({
                "category": "Sample",
                "title": f.name,
                "src": f.image,
                "content": f.description,
            })
        })
        .collect();
    bag.insert("cards".to_string(), json!(bound_items(cards, 3, 8, &filler)));
    bag.insert("initialScroll".to_string(), json!(0));
    bag
}

pub fn carousel(profile: &ProfileData, config: &AdaptConfig) -> PropertyBag {
    let mut bag = base_bag(config);
    let slides: Vec<Value> = profile
        .projects
        .iter()
        .map(|project| {
            json!({
                "title": project.name,
                "button": "View Project",
                "src": project.image.clone().unwrap_or_else(|| PLACEHOLDER_IMAGE.to_string()),
            })
        })
        .collect();
    let filler: Vec<Value> = FILLER_PROJECTS
        .iter()
        .map(|f| json!({ "title": f.name, "button": "View", "src": f.image }))
        .collect();
    bag.insert("slides".to_string(), json!(bound_items(slides, 3, 8, &filler)));
    bag.insert("autoplay".to_string(), json!(false));
    bag
}

pub fn infinite_moving_cards(profile: &ProfileData, config: &AdaptConfig) -> PropertyBag {
    let mut bag = base_bag(config);
    // Sub-variants: "achievements" scrolls award cards, the default
    // scrolls skill cards.
    let items: Vec<Value> = match config.variant.as_deref() {
        Some("achievements") if !profile.achievements.is_empty() => profile
            .achievements
            .iter()
            .map(|achievement| {
                json!({
                    "quote": truncate(
                        achievement.description.as_deref().unwrap_or(&achievement.title),
                        140,
                    ),
                    "name": achievement.title,
                    "title": achievement.date.clone().unwrap_or_else(|| "Achievement".to_string()),
                })
            })
            .collect(),
        _ => profile
            .skills
            .iter()
            .map(|skill| {
                json!({
                    "quote": skill.level.clone().unwrap_or_else(|| "Skilled".to_string()),
                    "name": skill.name,
                    "title": skill.category.clone().unwrap_or_else(|| "Skill".to_string()),
                })
            })
            .collect(),
    };
    let filler: Vec<Value> = FILLER_QUOTES
        .iter()
        .map(|(quote, author)| json!({ "quote": quote, "name": author, "title": "Quote" }))
        .collect();
    bag.insert("items".to_string(), json!(bound_items(items, 4, 10, &filler)));
    bag.insert("direction".to_string(), json!("left"));
    bag.insert("speed".to_string(), json!(speed_label(config.size_or_default())));
    bag.insert("pauseOnHover".to_string(), json!(true));
    bag
}

pub fn images_slider(profile: &ProfileData, config: &AdaptConfig) -> PropertyBag {
    let mut bag = base_bag(config);
    let images: Vec<Value> = profile
        .projects
        .iter()
        .filter_map(|project| project.image.clone())
        .filter(|image| !image.is_empty())
        .map(|image| json!(image))
        .collect();
    let filler: Vec<Value> = FILLER_IMAGES.iter().map(|image| json!(image)).collect();
    bag.insert("images".to_string(), json!(bound_items(images, 3, 8, &filler)));
    bag.insert("overlay".to_string(), json!(true));
    bag.insert("overlayText".to_string(), json!(display_name(profile)));
    bag.insert("autoplay".to_string(), json!(true));
    bag
}

pub fn animated_testimonials(profile: &ProfileData, config: &AdaptConfig) -> PropertyBag {
    let mut bag = base_bag(config);
    let mut testimonials: Vec<Value> = profile
        .achievements
        .iter()
        .map(|achievement| {
            json!({
                "quote": truncate(
                    achievement.description.as_deref().unwrap_or(&achievement.title),
                    200,
                ),
                "name": achievement.issuer.clone().unwrap_or_else(|| achievement.title.clone()),
                "designation": achievement.date.clone().unwrap_or_else(|| "Recognition".to_string()),
                "src": PLACEHOLDER_AVATAR,
            })
        })
        .collect();
    testimonials.extend(profile.experience.iter().map(|entry| {
        json!({
            "quote": truncate(entry.description.as_deref().unwrap_or(""), 200),
            "name": entry.company.clone().unwrap_or_else(|| "Company".to_string()),
            "designation": entry.position.clone().unwrap_or_else(|| "Role".to_string()),
            "src": PLACEHOLDER_AVATAR,
        })
    }));
    let filler: Vec<Value> = FILLER_QUOTES
        .iter()
        .map(|(quote, author)| {
            json!({
                "quote": quote,
                "name": author,
                "designation": "Quote",
                "src": PLACEHOLDER_AVATAR,
            })
        })
        .collect();
    bag.insert(
        "testimonials".to_string(),
        json!(bound_items(testimonials, 3, 6, &filler)),
    );
    bag.insert(
        "autoplay".to_string(),
        json!(matches!(config.size_or_default(), SizeOption::Large | SizeOption::Full)),
    );
    bag
}

pub fn parallax_scroll(profile: &ProfileData, config: &AdaptConfig) -> PropertyBag {
    let mut bag = base_bag(config);
    let images: Vec<Value> = profile
        .projects
        .iter()
        .map(|project| {
            json!(project.image.clone().unwrap_or_else(|| PLACEHOLDER_IMAGE.to_string()))
        })
        .collect();
    let filler: Vec<Value> = FILLER_IMAGES.iter().map(|image| json!(image)).collect();
    bag.insert("images".to_string(), json!(bound_items(images, 6, 12, &filler)));
    bag.insert(
        "columnOffset".to_string(),
        json!(scaled_px(200.0, config.size_or_default())),
    );
    bag
}

pub fn sticky_scroll_reveal(profile: &ProfileData, config: &AdaptConfig) -> PropertyBag {
    let mut bag = base_bag(config);
    let colors = palette(config.theme_style_or_default());
    // Sub-variants: "projects" narrates project work, default narrates
    // the experience history.
    let content: Vec<Value> = match config.variant.as_deref() {
        Some("projects") if !profile.projects.is_empty() => profile
            .projects
            .iter()
            .map(|project| {
                json!({
                    "title": project.name,
                    "description": truncate(project.description.as_deref().unwrap_or(""), 220),
                })
            })
            .collect(),
        _ => profile
            .experience
            .iter()
            .map(|entry| {
                json!({
                    "title": format!(
                        "{} · {}",
                        entry.position.clone().unwrap_or_else(|| "Role".to_string()),
                        entry.company.clone().unwrap_or_else(|| "Company".to_string()),
                    ),
                    "description": truncate(entry.description.as_deref().unwrap_or(""), 220),
                })
            })
            .collect(),
    };
    let filler: Vec<Value> = FILLER_PROJECTS
        .iter()
        .map(|f| json!({ "title": f.name, "description": f.description }))
        .collect();
    bag.insert("content".to_string(), json!(bound_items(content, 3, 6, &filler)));
    bag.insert("backgroundColors".to_string(), json!(colors.gradient));
    bag
}

pub fn timeline(profile: &ProfileData, config: &AdaptConfig) -> PropertyBag {
    let mut bag = base_bag(config);
    // Sub-variants: "education" and "experience" restrict the source;
    // the default interleaves experience first, then education.
    let variant = config.variant.as_deref();
    let mut entries: Vec<Value> = Vec::new();
    if variant != Some("education") {
        entries.extend(profile.experience.iter().map(|entry| {
            json!({
                "title": entry.duration.clone().unwrap_or_else(|| "Present".to_string()),
                "heading": entry.position.clone().unwrap_or_else(|| "Role".to_string()),
                "content": truncate(entry.description.as_deref().unwrap_or(""), 200),
            })
        }));
    }
    if variant != Some("experience") {
        entries.extend(profile.education.iter().map(|entry| {
            json!({
                "title": entry.year.clone().unwrap_or_else(|| "Graduated".to_string()),
                "heading": entry.degree.clone().unwrap_or_else(|| "Degree".to_string()),
                "content": entry.institution.clone().unwrap_or_default(),
            })
        }));
    }
    let filler: Vec<Value> = FILLER_PROJECTS
        .iter()
        .map(|f| json!({ "title": "Earlier", "heading": f.name, "content": f.description }))
        .collect();
    bag.insert("entries".to_string(), json!(bound_items(entries, 3, 10, &filler)));
    bag.insert("lineColor".to_string(), json!(accent_color(config)));
    bag
}
