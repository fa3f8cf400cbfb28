//! Interactive transforms: buttons, tooltips, modals, pointer effects.

use serde_json::{json, Value};

use super::support::{
    accent_color, base_bag, bound_items, display_name, featured_project, headline, hint, palette,
    scaled_px, summary, truncate, FILLER_SKILLS, PLACEHOLDER_AVATAR, PLACEHOLDER_IMAGE,
};
use crate::models::{AdaptConfig, ProfileData, PropertyBag};

pub fn animated_modal(profile: &ProfileData, config: &AdaptConfig) -> PropertyBag {
    let mut bag = base_bag(config);
    // Sub-variants: "contact" opens a contact modal, default opens the
    // featured project.
    match config.variant.as_deref() {
        Some("contact") => {
            let email = profile
                .personal_info
                .as_ref()
                .and_then(|info| info.email.clone())
                .unwrap_or_else(|| "hello@example.com".to_string());
            bag.insert("triggerText".to_string(), json!("Contact Me"));
            bag.insert("modalTitle".to_string(), json!(display_name(profile)));
            bag.insert("modalContent".to_string(), json!(format!("Reach me at {email}")));
        }
        _ => {
            let project = featured_project(profile);
            bag.insert("triggerText".to_string(), json!("View Details"));
            bag.insert(
                "modalTitle".to_string(),
                json!(project.map(|p| p.name.clone()).unwrap_or_else(|| display_name(profile))),
            );
            bag.insert(
                "modalContent".to_string(),
                json!(truncate(
                    project
                        .and_then(|p| p.description.as_deref())
                        .unwrap_or(&summary(profile)),
                    240
                )),
            );
        }
    }
    bag.insert("accentColor".to_string(), json!(accent_color(config)));
    bag
}

pub fn animated_tooltip(profile: &ProfileData, config: &AdaptConfig) -> PropertyBag {
    let mut bag = base_bag(config);
    let mut items: Vec<Value> = profile
        .skills
        .iter()
        .enumerate()
        .map(|(index, skill)| {
            json!({
                "id": index,
                "name": skill.name,
                "designation": skill.level.clone().unwrap_or_else(|| "Skilled".to_string()),
                "image": PLACEHOLDER_AVATAR,
            })
        })
        .collect();
    items.extend(profile.experience.iter().enumerate().map(|(index, entry)| {
        json!({
            "id": 100 + index,
            "name": entry.company.clone().unwrap_or_else(|| "Company".to_string()),
            "designation": entry.position.clone().unwrap_or_else(|| "Role".to_string()),
            "image": PLACEHOLDER_AVATAR,
        })
    }));
    let filler: Vec<Value> = FILLER_SKILLS
        .iter()
        .enumerate()
        .map(|(index, name)| {
            json!({
                "id": 900 + index,
                "name": name,
                "designation": "Skill",
                "image": PLACEHOLDER_AVATAR,
            })
        })
        .collect();
    bag.insert("items".to_string(), json!(bound_items(items, 3, 8, &filler)));
    bag
}

pub fn following_pointer(profile: &ProfileData, config: &AdaptConfig) -> PropertyBag {
    let mut bag = base_bag(config);
    let project = featured_project(profile);
    bag.insert("pointerTitle".to_string(), json!(display_name(profile)));
    bag.insert(
        "title".to_string(),
        json!(project.map(|p| p.name.clone()).unwrap_or_else(|| "Featured Work".to_string())),
    );
    bag.insert(
        "description".to_string(),
        json!(truncate(
            project
                .and_then(|p| p.description.as_deref())
                .unwrap_or("A selection of recent work."),
            140
        )),
    );
    bag.insert(
        "image".to_string(),
        json!(project
            .and_then(|p| p.image.clone())
            .unwrap_or_else(|| PLACEHOLDER_IMAGE.to_string())),
    );
    bag.insert("pointerColor".to_string(), json!(accent_color(config)));
    bag
}

pub fn hero_highlight(profile: &ProfileData, config: &AdaptConfig) -> PropertyBag {
    let mut bag = base_bag(config);
    bag.insert("title".to_string(), json!(display_name(profile)));
    bag.insert("highlightText".to_string(), json!(headline(profile)));
    bag.insert("subtitle".to_string(), json!(truncate(&summary(profile), 180)));
    bag.insert(
        "highlightColor".to_string(),
        json!(palette(config.theme_style_or_default()).glow),
    );
    bag
}

pub fn hover_border_gradient(profile: &ProfileData, config: &AdaptConfig) -> PropertyBag {
    let mut bag = base_bag(config);
    let colors = palette(config.theme_style_or_default());
    let label = profile
        .personal_info
        .as_ref()
        .and_then(|info| info.email.as_ref())
        .map(|_| "Get in Touch")
        .unwrap_or("View Portfolio");
    bag.insert("buttonText".to_string(), json!(label));
    bag.insert("gradientColors".to_string(), json!(colors.gradient));
    bag.insert("clockwise".to_string(), json!(true));
    bag.insert("duration".to_string(), json!(1));
    bag
}

pub fn lens(profile: &ProfileData, config: &AdaptConfig) -> PropertyBag {
    let mut bag = base_bag(config);
    let size = config.size_or_default();
    let project = featured_project(profile);
    bag.insert(
        "image".to_string(),
        json!(project
            .and_then(|p| p.image.clone())
            .unwrap_or_else(|| PLACEHOLDER_IMAGE.to_string())),
    );
    bag.insert("zoomFactor".to_string(), json!(scaled_px(1.5, size)));
    bag.insert("lensSize".to_string(), json!(scaled_px(170.0, size)));
    bag
}

pub fn link_preview(profile: &ProfileData, config: &AdaptConfig) -> PropertyBag {
    let mut bag = base_bag(config);
    let mut links: Vec<Value> = profile
        .personal_info
        .iter()
        .flat_map(|info| info.links.iter())
        .map(|link| json!({ "text": link.label, "url": link.url }))
        .collect();
    links.extend(
        profile
            .projects
            .iter()
            .filter_map(|project| {
                project
                    .url
                    .clone()
                    .map(|url| json!({ "text": project.name, "url": url }))
            }),
    );
    let filler = vec![
        json!({ "text": "Portfolio", "url": "#home" }),
        json!({ "text": "Contact", "url": "#contact" }),
    ];
    bag.insert("links".to_string(), json!(bound_items(links, 2, 6, &filler)));
    bag.insert("previewWidth".to_string(), json!(scaled_px(200.0, config.size_or_default())));
    bag
}

pub fn moving_border(profile: &ProfileData, config: &AdaptConfig) -> PropertyBag {
    let mut bag = base_bag(config);
    // Sub-variants: "resume" labels the button as a download action.
    let label = match config.variant.as_deref() {
        Some("resume") => "Download Resume".to_string(),
        _ => hint(config, "Contact Me"),
    };
    bag.insert("buttonText".to_string(), json!(label));
    bag.insert("borderRadius".to_string(), json!("1.75rem"));
    bag.insert(
        "duration".to_string(),
        json!(scaled_px(2.0, config.size_or_default())),
    );
    bag.insert(
        "borderColor".to_string(),
        json!(palette(config.theme_style_or_default()).glow),
    );
    bag.insert("ownerName".to_string(), json!(display_name(profile)));
    bag
}

pub fn multi_step_loader(profile: &ProfileData, config: &AdaptConfig) -> PropertyBag {
    let mut bag = base_bag(config);
    // Sub-variants: "education" walks the education history, default walks
    // the experience history.
    let steps: Vec<Value> = match config.variant.as_deref() {
        Some("education") if !profile.education.is_empty() => profile
            .education
            .iter()
            .map(|entry| {
                json!({
                    "text": format!(
                        "{} — {}",
                        entry.degree.clone().unwrap_or_else(|| "Studied".to_string()),
                        entry.institution.clone().unwrap_or_else(|| "University".to_string()),
                    )
                })
            })
            .collect(),
        _ => profile
            .experience
            .iter()
            .map(|entry| {
                json!({
                    "text": format!(
                        "{} at {}",
                        entry.position.clone().unwrap_or_else(|| "Worked".to_string()),
                        entry.company.clone().unwrap_or_else(|| "a company".to_string()),
                    )
                })
            })
            .collect(),
    };
    let filler = vec![
        json!({ "text": "Started the journey" }),
        json!({ "text": "Learned the craft" }),
        json!({ "text": "Shipped great work" }),
    ];
    bag.insert(
        "loadingStates".to_string(),
        json!(bound_items(steps, 3, 8, &filler)),
    );
    bag.insert("duration".to_string(), json!(2000));
    bag.insert("loop".to_string(), json!(false));
    bag
}

pub fn placeholders_and_vanish_input(profile: &ProfileData, config: &AdaptConfig) -> PropertyBag {
    let mut bag = base_bag(config);
    let placeholders: Vec<Value> = profile
        .skills
        .iter()
        .map(|skill| json!(format!("Ask about {}…", skill.name)))
        .collect();
    let filler = vec![
        json!("Ask me anything…"),
        json!("What are you building?"),
        json!("Say hello…"),
    ];
    bag.insert(
        "placeholders".to_string(),
        json!(bound_items(placeholders, 3, 6, &filler)),
    );
    bag.insert("submitLabel".to_string(), json!("Send"));
    bag
}

pub fn stateful_button(_profile: &ProfileData, config: &AdaptConfig) -> PropertyBag {
    let mut bag = base_bag(config);
    bag.insert("text".to_string(), json!(hint(config, "Send Message")));
    bag.insert("successText".to_string(), json!("Sent"));
    bag.insert("loadingDuration".to_string(), json!(1500));
    bag.insert("accentColor".to_string(), json!(accent_color(config)));
    bag
}

pub fn canvas_reveal_effect(profile: &ProfileData, config: &AdaptConfig) -> PropertyBag {
    let mut bag = base_bag(config);
    let colors = palette(config.theme_style_or_default());
    let cards: Vec<Value> = profile
        .skills
        .iter()
        .enumerate()
        .map(|(index, skill)| {
            json!({
                "title": skill.name,
                "color": colors.gradient[index % colors.gradient.len()],
            })
        })
        .collect();
    let filler: Vec<Value> = FILLER_SKILLS
        .iter()
        .enumerate()
        .map(|(index, name)| {
            json!({
                "title": name,
                "color": colors.gradient[index % colors.gradient.len()],
            })
        })
        .collect();
    bag.insert("cards".to_string(), json!(bound_items(cards, 2, 4, &filler)));
    bag.insert(
        "animationSpeed".to_string(),
        json!(scaled_px(4.0, config.size_or_default())),
    );
    bag.insert("dotSize".to_string(), json!(3));
    bag
}
