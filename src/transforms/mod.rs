//! The transform set: one pure function per registry tag.
//!
//! `apply` is the dispatch table. The match is exhaustive over
//! `VariantTag`, so the 1:1 pairing with the registry is enforced by the
//! compiler; adding a tag without a transform fails the build.

pub mod backgrounds;
pub mod cards;
pub mod carousels;
pub mod content;
pub mod interactive;
pub mod navigation;
mod support;
pub mod utility;

use crate::models::{AdaptConfig, ProfileData, PropertyBag};
use crate::registry::VariantTag;

/// Runs the transform for `tag`. Total over all inputs: missing profile
/// data resolves through documented fallbacks, never an error.
pub fn apply(tag: VariantTag, profile: &ProfileData, config: &AdaptConfig) -> PropertyBag {
    use VariantTag::*;
    match tag {
        AuroraBackground => backgrounds::aurora_background(profile, config),
        BackgroundBeams => backgrounds::background_beams(profile, config),
        BackgroundBeamsWithCollision => {
            backgrounds::background_beams_with_collision(profile, config)
        }
        BackgroundBoxes => backgrounds::background_boxes(profile, config),
        BackgroundGradientAnimation => {
            backgrounds::background_gradient_animation(profile, config)
        }
        BackgroundLines => backgrounds::background_lines(profile, config),
        ShootingStars => backgrounds::shooting_stars(profile, config),
        StarsBackground => backgrounds::stars_background(profile, config),
        Meteors => backgrounds::meteors(profile, config),
        Sparkles => backgrounds::sparkles(profile, config),
        Vortex => backgrounds::vortex(profile, config),
        WavyBackground => backgrounds::wavy_background(profile, config),
        ThreeDCard => cards::three_d_card(profile, config),
        BentoGrid => cards::bento_grid(profile, config),
        CardHoverEffect => cards::card_hover_effect(profile, config),
        CardSpotlight => cards::card_spotlight(profile, config),
        CardStack => cards::card_stack(profile, config),
        DraggableCard => cards::draggable_card(profile, config),
        EvervaultCard => cards::evervault_card(profile, config),
        ExpandableCard => cards::expandable_card(profile, config),
        FocusCards => cards::focus_cards(profile, config),
        GlareCard => cards::glare_card(profile, config),
        WobbleCard => cards::wobble_card(profile, config),
        TextRevealCard => cards::text_reveal_card(profile, config),
        BackgroundGradientCard => cards::background_gradient_card(profile, config),
        DirectionAwareHover => cards::direction_aware_hover(profile, config),
        GlowingStarsCard => cards::glowing_stars_card(profile, config),
        AppleCardsCarousel => carousels::apple_cards_carousel(profile, config),
        Carousel => carousels::carousel(profile, config),
        InfiniteMovingCards => carousels::infinite_moving_cards(profile, config),
        ImagesSlider => carousels::images_slider(profile, config),
        AnimatedTestimonials => carousels::animated_testimonials(profile, config),
        ParallaxScroll => carousels::parallax_scroll(profile, config),
        StickyScrollReveal => carousels::sticky_scroll_reveal(profile, config),
        Timeline => carousels::timeline(profile, config),
        AnimatedModal => interactive::animated_modal(profile, config),
        AnimatedTooltip => interactive::animated_tooltip(profile, config),
        FollowingPointer => interactive::following_pointer(profile, config),
        HeroHighlight => interactive::hero_highlight(profile, config),
        HoverBorderGradient => interactive::hover_border_gradient(profile, config),
        Lens => interactive::lens(profile, config),
        LinkPreview => interactive::link_preview(profile, config),
        MovingBorder => interactive::moving_border(profile, config),
        MultiStepLoader => interactive::multi_step_loader(profile, config),
        PlaceholdersAndVanishInput => {
            interactive::placeholders_and_vanish_input(profile, config)
        }
        StatefulButton => interactive::stateful_button(profile, config),
        CanvasRevealEffect => interactive::canvas_reveal_effect(profile, config),
        FloatingDock => navigation::floating_dock(profile, config),
        FloatingNavbar => navigation::floating_navbar(profile, config),
        NavbarMenu => navigation::navbar_menu(profile, config),
        Sidebar => navigation::sidebar(profile, config),
        Tabs => navigation::tabs(profile, config),
        ResizableNavbar => navigation::resizable_navbar(profile, config),
        TypewriterEffect => content::typewriter_effect(profile, config),
        TextGenerateEffect => content::text_generate_effect(profile, config),
        FlipWords => content::flip_words(profile, config),
        ColourfulText => content::colourful_text(profile, config),
        ContainerTextFlip => content::container_text_flip(profile, config),
        HeroParallax => content::hero_parallax(profile, config),
        LayoutGrid => content::layout_grid(profile, config),
        MacbookScroll => content::macbook_scroll(profile, config),
        ContainerScrollAnimation => content::container_scroll_animation(profile, config),
        GoogleGeminiEffect => content::google_gemini_effect(profile, config),
        LampEffect => content::lamp_effect(profile, config),
        SvgMaskEffect => content::svg_mask_effect(profile, config),
        TracingBeam => content::tracing_beam(profile, config),
        TextHoverEffect => content::text_hover_effect(profile, config),
        PointerHighlight => content::pointer_highlight(profile, config),
        Compare => content::compare(profile, config),
        StickyBanner => content::sticky_banner(profile, config),
        Spotlight => content::spotlight(profile, config),
        ThreeDPin => utility::three_d_pin(profile, config),
        WorldMap => utility::world_map(profile, config),
        GithubGlobe => utility::github_globe(profile, config),
        CodeBlock => utility::code_block(profile, config),
        GlowingEffect => utility::glowing_effect(profile, config),
        Loader => utility::loader(profile, config),
        Cover => utility::cover(profile, config),
        FeatureSections => utility::feature_sections(profile, config),
        GridAndDotBackgrounds => utility::grid_and_dot_backgrounds(profile, config),
    }
}
