//! Card transforms: single feature cards and bounded card grids.

use serde_json::{json, Value};

use super::support::{
    accent_color, avatar, base_bag, bound_items, display_name, featured_project, headline,
    palette, scaled_count, scaled_px, summary, top_skill, truncate, FillerProject,
    FILLER_PROJECTS, FILLER_QUOTES, FILLER_SKILLS, PLACEHOLDER_IMAGE,
};
use crate::models::{AdaptConfig, ProfileData, PropertyBag};

fn filler_cards(shape: impl Fn(&FillerProject) -> Value) -> Vec<Value> {
    FILLER_PROJECTS.iter().map(shape).collect()
}

pub fn three_d_card(profile: &ProfileData, config: &AdaptConfig) -> PropertyBag {
    let mut bag = base_bag(config);
    // Sub-variants: "experience" features the first role, default features
    // the representative project.
    match config.variant.as_deref() {
        Some("experience") if !profile.experience.is_empty() => {
            let entry = &profile.experience[0];
            bag.insert(
                "title".to_string(),
                json!(entry.position.clone().unwrap_or_else(|| "Role".to_string())),
            );
            bag.insert(
                "description".to_string(),
                json!(truncate(
                    entry.description.as_deref().unwrap_or("Professional experience."),
                    160
                )),
            );
            bag.insert("image".to_string(), json!(PLACEHOLDER_IMAGE));
            bag.insert(
                "ctaText".to_string(),
                json!(entry.company.clone().unwrap_or_else(|| "Learn more".to_string())),
            );
        }
        _ => {
            let project = featured_project(profile);
            bag.insert(
                "title".to_string(),
                json!(project.map(|p| p.name.clone()).unwrap_or_else(|| FILLER_PROJECTS[0].name.to_string())),
            );
            bag.insert(
                "description".to_string(),
                json!(truncate(
                    project
                        .and_then(|p| p.description.as_deref())
                        .unwrap_or(FILLER_PROJECTS[0].description),
                    160
                )),
            );
            bag.insert(
                "image".to_string(),
                json!(project
                    .and_then(|p| p.image.clone())
                    .unwrap_or_else(|| PLACEHOLDER_IMAGE.to_string())),
            );
            bag.insert(
                "ctaLink".to_string(),
                json!(project.and_then(|p| p.url.clone()).unwrap_or_else(|| "#projects".to_string())),
            );
        }
    }
    bag.insert(
        "translateZ".to_string(),
        json!(scaled_px(60.0, config.size_or_default())),
    );
    bag
}

pub fn bento_grid(profile: &ProfileData, config: &AdaptConfig) -> PropertyBag {
    let mut bag = base_bag(config);
    let projects_only = config.variant.as_deref() == Some("projects");
    let mut items: Vec<Value> = profile
        .projects
        .iter()
        .map(|project| {
            json!({
                "title": project.name,
                "description": truncate(project.description.as_deref().unwrap_or(""), 120),
                "header": project.image.clone().unwrap_or_else(|| PLACEHOLDER_IMAGE.to_string()),
                "icon": "folder",
            })
        })
        .collect();
    if !projects_only {
        items.extend(profile.skills.iter().map(|skill| {
            json!({
                "title": skill.name,
                "description": skill.level.clone().unwrap_or_else(|| "Skilled".to_string()),
                "header": PLACEHOLDER_IMAGE,
                "icon": "sparkles",
            })
        }));
        items.extend(profile.experience.iter().map(|entry| {
            json!({
                "title": entry.position.clone().unwrap_or_else(|| "Role".to_string()),
                "description": truncate(entry.description.as_deref().unwrap_or(""), 120),
                "header": PLACEHOLDER_IMAGE,
                "icon": "briefcase",
            })
        }));
    }
    let filler = filler_cards(|filler| {
        json!({
            "title": filler.name,
            "description": filler.description,
            "header": filler.image,
            "icon": "folder",
        })
    });
    bag.insert("items".to_string(), json!(bound_items(items, 3, 6, &filler)));
    bag.insert(
        "columns".to_string(),
        json!(scaled_count(3, config.size_or_default()).clamp(2, 4)),
    );
    bag
}

pub fn card_hover_effect(profile: &ProfileData, config: &AdaptConfig) -> PropertyBag {
    let mut bag = base_bag(config);
    let mut items: Vec<Value> = profile
        .projects
        .iter()
        .map(|project| {
            json!({
                "title": project.name,
                "description": truncate(project.description.as_deref().unwrap_or(""), 140),
                "link": project.url.clone().unwrap_or_else(|| "#projects".to_string()),
            })
        })
        .collect();
    items.extend(profile.skills.iter().map(|skill| {
        json!({
            "title": skill.name,
            "description": skill.level.clone().unwrap_or_else(|| "Skilled".to_string()),
            "link": "#skills",
        })
    }));
    let filler = filler_cards(|filler| {
        json!({
            "title": filler.name,
            "description": filler.description,
            "link": "#",
        })
    });
    bag.insert("items".to_string(), json!(bound_items(items, 3, 6, &filler)));
    bag.insert("hoverColor".to_string(), json!(accent_color(config)));
    bag
}

pub fn card_spotlight(profile: &ProfileData, config: &AdaptConfig) -> PropertyBag {
    let mut bag = base_bag(config);
    let colors = palette(config.theme_style_or_default());
    match config.variant.as_deref() {
        Some("project") if !profile.projects.is_empty() => {
            let project = &profile.projects[0];
            bag.insert("title".to_string(), json!(project.name));
            bag.insert(
                "text".to_string(),
                json!(truncate(project.description.as_deref().unwrap_or(""), 180)),
            );
        }
        _ => {
            bag.insert("title".to_string(), json!(display_name(profile)));
            bag.insert("text".to_string(), json!(truncate(&summary(profile), 180)));
        }
    }
    bag.insert("spotlightColor".to_string(), json!(colors.glow));
    bag.insert(
        "radius".to_string(),
        json!(scaled_px(350.0, config.size_or_default())),
    );
    bag
}

pub fn card_stack(profile: &ProfileData, config: &AdaptConfig) -> PropertyBag {
    let mut bag = base_bag(config);
    let mut items: Vec<Value> = profile
        .achievements
        .iter()
        .enumerate()
        .map(|(index, achievement)| {
            json!({
                "id": index,
                "name": achievement.issuer.clone().unwrap_or_else(|| display_name(profile)),
                "designation": achievement.date.clone().unwrap_or_else(|| "Achievement".to_string()),
                "content": truncate(
                    achievement.description.as_deref().unwrap_or(&achievement.title),
                    140,
                ),
            })
        })
        .collect();
    items.extend(profile.experience.iter().enumerate().map(|(index, entry)| {
        json!({
            "id": 100 + index,
            "name": entry.company.clone().unwrap_or_else(|| "Company".to_string()),
            "designation": entry.duration.clone().unwrap_or_else(|| "Role".to_string()),
            "content": truncate(entry.description.as_deref().unwrap_or(""), 140),
        })
    }));
    let filler: Vec<Value> = FILLER_QUOTES
        .iter()
        .enumerate()
        .map(|(index, (quote, author))| {
            json!({
                "id": 900 + index,
                "name": author,
                "designation": "Quote",
                "content": quote,
            })
        })
        .collect();
    bag.insert("items".to_string(), json!(bound_items(items, 3, 5, &filler)));
    bag.insert("offset".to_string(), json!(10));
    bag.insert("scaleFactor".to_string(), json!(0.06));
    bag
}

pub fn draggable_card(profile: &ProfileData, config: &AdaptConfig) -> PropertyBag {
    let mut bag = base_bag(config);
    let mut items: Vec<Value> = profile
        .projects
        .iter()
        .map(|project| {
            json!({
                "title": project.name,
                "image": project.image.clone().unwrap_or_else(|| PLACEHOLDER_IMAGE.to_string()),
            })
        })
        .collect();
    items.extend(profile.achievements.iter().map(|achievement| {
        json!({
            "title": achievement.title,
            "image": PLACEHOLDER_IMAGE,
        })
    }));
    let filler = filler_cards(|f| json!({ "title": f.name, "image": f.image }));
    bag.insert("cards".to_string(), json!(bound_items(items, 2, 5, &filler)));
    bag.insert("dragElastic".to_string(), json!(0.2));
    bag
}

pub fn evervault_card(profile: &ProfileData, config: &AdaptConfig) -> PropertyBag {
    let mut bag = base_bag(config);
    // Sub-variants: "skill" shows the strongest skill, the default shows
    // the owner's initials.
    let text = match config.variant.as_deref() {
        Some("skill") => top_skill(&profile.skills)
            .map(|skill| skill.name.clone())
            .unwrap_or_else(|| FILLER_SKILLS[0].to_string()),
        _ => display_name(profile)
            .split_whitespace()
            .take(2)
            .filter_map(|word| word.chars().next())
            .collect::<String>()
            .to_uppercase(),
    };
    bag.insert("text".to_string(), json!(text));
    bag.insert("cardText".to_string(), json!(headline(profile)));
    bag.insert("glowColor".to_string(), json!(accent_color(config)));
    bag
}

pub fn expandable_card(profile: &ProfileData, config: &AdaptConfig) -> PropertyBag {
    let mut bag = base_bag(config);
    let mut cards: Vec<Value> = profile
        .projects
        .iter()
        .map(|project| {
            json!({
                "title": project.name,
                "description": truncate(project.description.as_deref().unwrap_or(""), 80),
                "src": project.image.clone().unwrap_or_else(|| PLACEHOLDER_IMAGE.to_string()),
                "ctaText": "View",
                "ctaLink": project.url.clone().unwrap_or_else(|| "#projects".to_string()),
                "content": truncate(project.description.as_deref().unwrap_or(""), 280),
            })
        })
        .collect();
    cards.extend(profile.experience.iter().map(|entry| {
        json!({
            "title": entry.position.clone().unwrap_or_else(|| "Role".to_string()),
            "description": entry.company.clone().unwrap_or_default(),
            "src": PLACEHOLDER_IMAGE,
            "ctaText": "Details",
            "ctaLink": "#experience",
            "content": truncate(entry.description.as_deref().unwrap_or(""), 280),
        })
    }));
    let filler = filler_cards(|f| {
        json!({
            "title": f.name,
            "description": truncate(f.description, 80),
            "src": f.image,
            "ctaText": "View",
            "ctaLink": "#",
            "content": f.description,
        })
    });
    bag.insert("cards".to_string(), json!(bound_items(cards, 2, 8, &filler)));
    bag
}

pub fn focus_cards(profile: &ProfileData, config: &AdaptConfig) -> PropertyBag {
    let mut bag = base_bag(config);
    let cards: Vec<Value> = profile
        .projects
        .iter()
        .map(|project| {
            json!({
                "title": project.name,
                "src": project.image.clone().unwrap_or_else(|| PLACEHOLDER_IMAGE.to_string()),
            })
        })
        .collect();
    let filler = filler_cards(|f| json!({ "title": f.name, "src": f.image }));
    bag.insert("cards".to_string(), json!(bound_items(cards, 3, 6, &filler)));
    bag
}

pub fn glare_card(profile: &ProfileData, config: &AdaptConfig) -> PropertyBag {
    let mut bag = base_bag(config);
    bag.insert("title".to_string(), json!(display_name(profile)));
    bag.insert("subtitle".to_string(), json!(headline(profile)));
    bag.insert("image".to_string(), json!(avatar(profile)));
    bag.insert(
        "glareColor".to_string(),
        json!(palette(config.theme_style_or_default()).glow),
    );
    bag
}

pub fn wobble_card(profile: &ProfileData, config: &AdaptConfig) -> PropertyBag {
    let mut bag = base_bag(config);
    let colors = palette(config.theme_style_or_default());
    let mut cards: Vec<Value> = profile
        .projects
        .iter()
        .enumerate()
        .map(|(index, project)| {
            json!({
                "title": project.name,
                "description": truncate(project.description.as_deref().unwrap_or(""), 140),
                "background": colors.gradient[index % colors.gradient.len()],
            })
        })
        .collect();
    cards.extend(profile.skills.iter().enumerate().map(|(index, skill)| {
        json!({
            "title": skill.name,
            "description": skill.level.clone().unwrap_or_else(|| "Skilled".to_string()),
            "background": colors.gradient[index % colors.gradient.len()],
        })
    }));
    let filler = filler_cards(|f| {
        json!({
            "title": f.name,
            "description": f.description,
            "background": colors.gradient[0],
        })
    });
    bag.insert("cards".to_string(), json!(bound_items(cards, 2, 3, &filler)));
    bag
}

pub fn text_reveal_card(profile: &ProfileData, config: &AdaptConfig) -> PropertyBag {
    let mut bag = base_bag(config);
    match config.variant.as_deref() {
        Some("contact") => {
            let email = profile
                .personal_info
                .as_ref()
                .and_then(|info| info.email.clone())
                .unwrap_or_else(|| "hello@example.com".to_string());
            bag.insert("text".to_string(), json!("Get in touch"));
            bag.insert("revealText".to_string(), json!(email));
        }
        _ => {
            bag.insert("text".to_string(), json!(truncate(&headline(profile), 40)));
            bag.insert("revealText".to_string(), json!(display_name(profile)));
        }
    }
    bag
}

pub fn background_gradient_card(profile: &ProfileData, config: &AdaptConfig) -> PropertyBag {
    let mut bag = base_bag(config);
    let colors = palette(config.theme_style_or_default());
    let project = featured_project(profile);
    bag.insert(
        "title".to_string(),
        json!(project.map(|p| p.name.clone()).unwrap_or_else(|| display_name(profile))),
    );
    bag.insert(
        "description".to_string(),
        json!(truncate(
            project
                .and_then(|p| p.description.as_deref())
                .unwrap_or(&summary(profile)),
            160
        )),
    );
    bag.insert(
        "image".to_string(),
        json!(project
            .and_then(|p| p.image.clone())
            .unwrap_or_else(|| PLACEHOLDER_IMAGE.to_string())),
    );
    bag.insert("gradientColors".to_string(), json!(colors.gradient));
    bag.insert(
        "link".to_string(),
        json!(project.and_then(|p| p.url.clone()).unwrap_or_else(|| "#projects".to_string())),
    );
    bag
}

pub fn direction_aware_hover(profile: &ProfileData, config: &AdaptConfig) -> PropertyBag {
    let mut bag = base_bag(config);
    let project = featured_project(profile);
    bag.insert(
        "imageUrl".to_string(),
        json!(project
            .and_then(|p| p.image.clone())
            .unwrap_or_else(|| PLACEHOLDER_IMAGE.to_string())),
    );
    bag.insert(
        "title".to_string(),
        json!(project.map(|p| p.name.clone()).unwrap_or_else(|| FILLER_PROJECTS[0].name.to_string())),
    );
    bag.insert(
        "subtitle".to_string(),
        json!(truncate(
            &project
                .map(|p| p.technologies.join(", "))
                .filter(|joined| !joined.is_empty())
                .unwrap_or_else(|| "Featured work".to_string()),
            60
        )),
    );
    bag
}

pub fn glowing_stars_card(profile: &ProfileData, config: &AdaptConfig) -> PropertyBag {
    let mut bag = base_bag(config);
    let project = featured_project(profile);
    bag.insert(
        "title".to_string(),
        json!(project.map(|p| p.name.clone()).unwrap_or_else(|| FILLER_PROJECTS[0].name.to_string())),
    );
    bag.insert(
        "description".to_string(),
        json!(truncate(
            project
                .and_then(|p| p.description.as_deref())
                .unwrap_or(FILLER_PROJECTS[0].description),
            120
        )),
    );
    bag.insert(
        "starCount".to_string(),
        json!(scaled_count(108, config.size_or_default())),
    );
    bag
}
