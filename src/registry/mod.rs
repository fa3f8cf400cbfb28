//! Capability registry: one metadata entry per presentation-component
//! kind, plus the availability filter over a profile payload.
//!
//! The registry is a fixed table in declaration order (`catalog::REGISTRY`);
//! `VariantTag` discriminants double as table indices, which `self_check`
//! verifies alongside name uniqueness.

mod catalog;
pub mod presets;

use anyhow::{ensure, Result};
use serde::{Deserialize, Serialize};

use crate::models::{DataSection, ProfileData, SizeOption, ThemeStyle};

pub use catalog::REGISTRY;
pub use presets::Preset;

/// Closed identifier for one of the 80 presentation-component kinds.
///
/// Declaration order is registry order; keep `catalog::REGISTRY` aligned.
#[derive(
    Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord,
)]
#[serde(rename_all = "kebab-case")]
pub enum VariantTag {
    // backgrounds
    AuroraBackground,
    BackgroundBeams,
    BackgroundBeamsWithCollision,
    BackgroundBoxes,
    BackgroundGradientAnimation,
    BackgroundLines,
    ShootingStars,
    StarsBackground,
    Meteors,
    Sparkles,
    Vortex,
    WavyBackground,
    // cards
    ThreeDCard,
    BentoGrid,
    CardHoverEffect,
    CardSpotlight,
    CardStack,
    DraggableCard,
    EvervaultCard,
    ExpandableCard,
    FocusCards,
    GlareCard,
    WobbleCard,
    TextRevealCard,
    BackgroundGradientCard,
    DirectionAwareHover,
    GlowingStarsCard,
    // carousels
    AppleCardsCarousel,
    Carousel,
    InfiniteMovingCards,
    ImagesSlider,
    AnimatedTestimonials,
    ParallaxScroll,
    StickyScrollReveal,
    Timeline,
    // interactive
    AnimatedModal,
    AnimatedTooltip,
    FollowingPointer,
    HeroHighlight,
    HoverBorderGradient,
    Lens,
    LinkPreview,
    MovingBorder,
    MultiStepLoader,
    PlaceholdersAndVanishInput,
    StatefulButton,
    CanvasRevealEffect,
    // navigation
    FloatingDock,
    FloatingNavbar,
    NavbarMenu,
    Sidebar,
    Tabs,
    ResizableNavbar,
    // content
    TypewriterEffect,
    TextGenerateEffect,
    FlipWords,
    ColourfulText,
    ContainerTextFlip,
    HeroParallax,
    LayoutGrid,
    MacbookScroll,
    ContainerScrollAnimation,
    GoogleGeminiEffect,
    LampEffect,
    SvgMaskEffect,
    TracingBeam,
    TextHoverEffect,
    PointerHighlight,
    Compare,
    StickyBanner,
    Spotlight,
    // utility
    ThreeDPin,
    WorldMap,
    GithubGlobe,
    CodeBlock,
    GlowingEffect,
    Loader,
    Cover,
    FeatureSections,
    GridAndDotBackgrounds,
}

impl VariantTag {
    /// Kebab-case wire name, matching the serde representation.
    pub fn as_str(self) -> &'static str {
        metadata(self).name
    }

    /// Resolves a wire name; `None` for anything outside the registry.
    pub fn parse(name: &str) -> Option<VariantTag> {
        REGISTRY.iter().find(|meta| meta.name == name).map(|meta| meta.tag)
    }
}

/// Broad grouping used by selection UIs and `by_category` queries.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Background,
    Card,
    Carousel,
    Interactive,
    Navigation,
    Content,
    Utility,
}

/// Static descriptor for one component kind.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VariantMetadata {
    pub tag: VariantTag,
    pub name: &'static str,
    pub category: Category,
    pub display_name: &'static str,
    pub description: &'static str,
    /// Free-text use-case tags matched by `recommend`.
    pub best_for: &'static [&'static str],
    /// Profile sections that make this component meaningful. Empty means
    /// always available; otherwise ANY non-empty listed section suffices.
    pub required_data: &'static [DataSection],
    pub supported_sizes: &'static [SizeOption],
    pub supported_themes: &'static [ThemeStyle],
}

pub fn metadata(tag: VariantTag) -> &'static VariantMetadata {
    &REGISTRY[tag as usize]
}

/// All metadata entries in declaration order.
pub fn list_all() -> impl Iterator<Item = &'static VariantMetadata> {
    REGISTRY.iter()
}

/// Tags usable with the given profile, in registry order.
///
/// A tag with no data requirements is always available; otherwise it is
/// available when at least one listed section is present and non-empty.
pub fn available_variants(profile: &ProfileData) -> Vec<VariantTag> {
    REGISTRY
        .iter()
        .filter(|meta| {
            meta.required_data.is_empty()
                || meta
                    .required_data
                    .iter()
                    .any(|section| profile.has_section(*section))
        })
        .map(|meta| meta.tag)
        .collect()
}

/// Verifies registry integrity: index alignment, unique names, and
/// non-empty size/theme support for every entry.
pub fn self_check() -> Result<()> {
    for (index, meta) in REGISTRY.iter().enumerate() {
        ensure!(
            meta.tag as usize == index,
            "registry entry '{}' is out of declaration order",
            meta.name
        );
        ensure!(
            !meta.supported_sizes.is_empty() && !meta.supported_themes.is_empty(),
            "registry entry '{}' declares no size or theme support",
            meta.name
        );
        ensure!(
            REGISTRY[..index].iter().all(|prior| prior.name != meta.name),
            "registry entry '{}' has a duplicate name",
            meta.name
        );
    }
    Ok(())
}
