//! The registry table. One entry per `VariantTag`, in declaration order.

use super::{Category, VariantMetadata, VariantTag};
use crate::models::config::SizeOption::{Full, Large, Medium, Small};
use crate::models::config::ThemeStyle::{Bold, Creative, Minimal, Modern, Professional};
use crate::models::profile::DataSection::{
    Achievements, Education, Experience, PersonalInfo, Projects, Skills,
};
use crate::models::{DataSection, SizeOption, ThemeStyle};

const ALL_SIZES: &[SizeOption] = &[Small, Medium, Large, Full];
const ALL_THEMES: &[ThemeStyle] = &[Professional, Creative, Minimal, Bold, Modern];

#[allow(clippy::too_many_arguments)]
const fn meta(
    tag: VariantTag,
    name: &'static str,
    category: Category,
    display_name: &'static str,
    description: &'static str,
    best_for: &'static [&'static str],
    required_data: &'static [DataSection],
    supported_sizes: &'static [SizeOption],
    supported_themes: &'static [ThemeStyle],
) -> VariantMetadata {
    VariantMetadata {
        tag,
        name,
        category,
        display_name,
        description,
        best_for,
        required_data,
        supported_sizes,
        supported_themes,
    }
}

pub static REGISTRY: [VariantMetadata; 80] = [
    // backgrounds
    meta(
        VariantTag::AuroraBackground,
        "aurora-background",
        Category::Background,
        "Aurora Background",
        "Soft aurora gradient sweep behind a hero headline.",
        &["hero", "landing", "headline", "intro"],
        &[],
        ALL_SIZES,
        &[Professional, Creative, Modern],
    ),
    meta(
        VariantTag::BackgroundBeams,
        "background-beams",
        Category::Background,
        "Background Beams",
        "Thin light beams tracing paths across a dark canvas.",
        &["hero", "landing", "ambient"],
        &[],
        &[Medium, Large, Full],
        &[Professional, Minimal, Modern],
    ),
    meta(
        VariantTag::BackgroundBeamsWithCollision,
        "background-beams-with-collision",
        Category::Background,
        "Colliding Beams",
        "Beams that explode on impact with the section edge.",
        &["hero", "landing", "dramatic"],
        &[],
        &[Large, Full],
        &[Creative, Bold],
    ),
    meta(
        VariantTag::BackgroundBoxes,
        "background-boxes",
        Category::Background,
        "Background Boxes",
        "Interactive grid of tiles that light up under the pointer.",
        &["hero", "interactive", "landing"],
        &[],
        &[Large, Full],
        &[Creative, Bold, Modern],
    ),
    meta(
        VariantTag::BackgroundGradientAnimation,
        "background-gradient-animation",
        Category::Background,
        "Gradient Animation",
        "Slowly morphing multi-stop gradient backdrop.",
        &["hero", "ambient", "landing"],
        &[],
        ALL_SIZES,
        &[Creative, Bold, Modern],
    ),
    meta(
        VariantTag::BackgroundLines,
        "background-lines",
        Category::Background,
        "Background Lines",
        "Animated wave lines drifting behind the content.",
        &["hero", "ambient", "subtle"],
        &[],
        ALL_SIZES,
        &[Professional, Minimal, Modern],
    ),
    meta(
        VariantTag::ShootingStars,
        "shooting-stars",
        Category::Background,
        "Shooting Stars",
        "Star streaks crossing a night-sky backdrop.",
        &["hero", "ambient", "night"],
        &[],
        &[Medium, Large, Full],
        &[Creative, Modern],
    ),
    meta(
        VariantTag::StarsBackground,
        "stars-background",
        Category::Background,
        "Stars Background",
        "Static twinkling starfield.",
        &["ambient", "night", "subtle"],
        &[],
        ALL_SIZES,
        &[Creative, Minimal, Modern],
    ),
    meta(
        VariantTag::Meteors,
        "meteors",
        Category::Background,
        "Meteors",
        "Meteor streaks falling across a card or section.",
        &["accent", "card", "dramatic"],
        &[],
        &[Small, Medium, Large],
        &[Creative, Bold],
    ),
    meta(
        VariantTag::Sparkles,
        "sparkles",
        Category::Background,
        "Sparkles",
        "Configurable particle sparkles layered over content.",
        &["hero", "accent", "headline"],
        &[],
        ALL_SIZES,
        &[Creative, Bold, Modern],
    ),
    meta(
        VariantTag::Vortex,
        "vortex",
        Category::Background,
        "Vortex",
        "Swirling particle vortex filling the section.",
        &["hero", "dramatic", "landing"],
        &[],
        &[Large, Full],
        &[Bold, Creative],
    ),
    meta(
        VariantTag::WavyBackground,
        "wavy-background",
        Category::Background,
        "Wavy Background",
        "Blurred sine waves rolling behind a headline.",
        &["hero", "landing", "headline"],
        &[],
        &[Medium, Large, Full],
        &[Professional, Creative, Modern],
    ),
    // cards
    meta(
        VariantTag::ThreeDCard,
        "three-d-card",
        Category::Card,
        "3D Card",
        "Perspective-tilting card for one featured item.",
        &["projects", "featured", "showcase"],
        &[Projects, Experience],
        &[Small, Medium, Large],
        &[Professional, Creative, Modern],
    ),
    meta(
        VariantTag::BentoGrid,
        "bento-grid",
        Category::Card,
        "Bento Grid",
        "Asymmetric grid of mixed-size feature tiles.",
        &["projects", "skills", "overview", "showcase"],
        &[Projects, Skills, Experience],
        &[Medium, Large, Full],
        ALL_THEMES,
    ),
    meta(
        VariantTag::CardHoverEffect,
        "card-hover-effect",
        Category::Card,
        "Card Hover Effect",
        "Uniform card grid with a sliding hover highlight.",
        &["projects", "skills", "grid"],
        &[Projects, Skills],
        &[Medium, Large, Full],
        &[Professional, Minimal, Modern],
    ),
    meta(
        VariantTag::CardSpotlight,
        "card-spotlight",
        Category::Card,
        "Card Spotlight",
        "Card with a pointer-following radial spotlight.",
        &["featured", "about", "highlight"],
        &[Projects, PersonalInfo],
        &[Small, Medium, Large],
        &[Creative, Bold, Modern],
    ),
    meta(
        VariantTag::CardStack,
        "card-stack",
        Category::Card,
        "Card Stack",
        "Auto-rotating stack of short statement cards.",
        &["achievements", "testimonials", "highlights"],
        &[Achievements, Experience],
        &[Small, Medium],
        &[Professional, Creative, Modern],
    ),
    meta(
        VariantTag::DraggableCard,
        "draggable-card",
        Category::Card,
        "Draggable Card",
        "Physics-driven cards the visitor can toss around.",
        &["playful", "projects", "achievements"],
        &[Projects, Achievements],
        &[Medium, Large],
        &[Creative, Bold],
    ),
    meta(
        VariantTag::EvervaultCard,
        "evervault-card",
        Category::Card,
        "Evervault Card",
        "Encrypted-text reveal card showing one keyword.",
        &["skills", "accent", "badge"],
        &[Skills, PersonalInfo],
        &[Small, Medium],
        &[Creative, Bold, Modern],
    ),
    meta(
        VariantTag::ExpandableCard,
        "expandable-card",
        Category::Card,
        "Expandable Card",
        "Card list that expands items into a detail overlay.",
        &["projects", "experience", "detail"],
        &[Projects, Experience],
        &[Medium, Large, Full],
        &[Professional, Minimal, Modern],
    ),
    meta(
        VariantTag::FocusCards,
        "focus-cards",
        Category::Card,
        "Focus Cards",
        "Image cards that blur siblings on hover.",
        &["projects", "gallery", "visual"],
        &[Projects],
        &[Medium, Large, Full],
        &[Minimal, Professional, Modern],
    ),
    meta(
        VariantTag::GlareCard,
        "glare-card",
        Category::Card,
        "Glare Card",
        "Holographic glare card for a profile badge.",
        &["about", "badge", "featured"],
        &[PersonalInfo, Projects],
        &[Small, Medium],
        &[Creative, Bold],
    ),
    meta(
        VariantTag::WobbleCard,
        "wobble-card",
        Category::Card,
        "Wobble Card",
        "Oversized cards that wobble with pointer movement.",
        &["projects", "skills", "showcase"],
        &[Projects, Skills],
        &[Medium, Large],
        &[Creative, Bold, Modern],
    ),
    meta(
        VariantTag::TextRevealCard,
        "text-reveal-card",
        Category::Card,
        "Text Reveal Card",
        "Wipe-to-reveal card contrasting two lines of text.",
        &["about", "tagline", "headline"],
        &[PersonalInfo],
        &[Small, Medium, Large],
        &[Creative, Bold, Modern],
    ),
    meta(
        VariantTag::BackgroundGradientCard,
        "background-gradient-card",
        Category::Card,
        "Gradient Border Card",
        "Card wrapped in an animated gradient border.",
        &["featured", "about", "accent"],
        &[Projects, PersonalInfo],
        &[Small, Medium],
        &[Creative, Modern],
    ),
    meta(
        VariantTag::DirectionAwareHover,
        "direction-aware-hover",
        Category::Card,
        "Direction Aware Hover",
        "Image card whose overlay enters from the pointer side.",
        &["projects", "gallery", "visual"],
        &[Projects],
        &[Small, Medium, Large],
        &[Minimal, Creative, Modern],
    ),
    meta(
        VariantTag::GlowingStarsCard,
        "glowing-stars-card",
        Category::Card,
        "Glowing Stars Card",
        "Card with an animated star-grid header.",
        &["projects", "featured", "night"],
        &[Projects],
        &[Small, Medium],
        &[Creative, Modern],
    ),
    // carousels
    meta(
        VariantTag::AppleCardsCarousel,
        "apple-cards-carousel",
        Category::Carousel,
        "Apple Cards Carousel",
        "Full-bleed snapping card carousel with modal detail.",
        &["projects", "experience", "showcase"],
        &[Projects, Experience],
        &[Large, Full],
        &[Professional, Creative, Modern],
    ),
    meta(
        VariantTag::Carousel,
        "carousel",
        Category::Carousel,
        "Carousel",
        "Classic slide carousel with arrows and indicators.",
        &["projects", "gallery", "slides"],
        &[Projects],
        &[Medium, Large, Full],
        &[Professional, Minimal, Modern],
    ),
    meta(
        VariantTag::InfiniteMovingCards,
        "infinite-moving-cards",
        Category::Carousel,
        "Infinite Moving Cards",
        "Continuously scrolling marquee of small cards.",
        &["skills", "achievements", "marquee", "testimonials"],
        &[Skills, Achievements],
        &[Medium, Large, Full],
        ALL_THEMES,
    ),
    meta(
        VariantTag::ImagesSlider,
        "images-slider",
        Category::Carousel,
        "Images Slider",
        "Full-frame image slider with keyboard navigation.",
        &["gallery", "projects", "visual"],
        &[Projects],
        &[Medium, Large, Full],
        &[Creative, Minimal, Modern],
    ),
    meta(
        VariantTag::AnimatedTestimonials,
        "animated-testimonials",
        Category::Carousel,
        "Animated Testimonials",
        "Rotating quote panel with portrait crossfade.",
        &["testimonials", "achievements", "quotes"],
        &[Achievements, Experience],
        &[Medium, Large],
        &[Professional, Modern],
    ),
    meta(
        VariantTag::ParallaxScroll,
        "parallax-scroll",
        Category::Carousel,
        "Parallax Scroll",
        "Image columns scrolling at offset speeds.",
        &["gallery", "projects", "visual"],
        &[Projects],
        &[Large, Full],
        &[Creative, Modern],
    ),
    meta(
        VariantTag::StickyScrollReveal,
        "sticky-scroll-reveal",
        Category::Carousel,
        "Sticky Scroll Reveal",
        "Sticky panel narrating sections as the page scrolls.",
        &["experience", "story", "walkthrough"],
        &[Experience, Projects],
        &[Large, Full],
        &[Professional, Minimal, Modern],
    ),
    meta(
        VariantTag::Timeline,
        "timeline",
        Category::Carousel,
        "Timeline",
        "Vertical scroll timeline of dated entries.",
        &["experience", "education", "history", "career"],
        &[Experience, Education],
        &[Medium, Large, Full],
        ALL_THEMES,
    ),
    // interactive
    meta(
        VariantTag::AnimatedModal,
        "animated-modal",
        Category::Interactive,
        "Animated Modal",
        "Trigger button opening a springy detail modal.",
        &["detail", "contact", "projects"],
        &[Projects, PersonalInfo],
        &[Small, Medium],
        ALL_THEMES,
    ),
    meta(
        VariantTag::AnimatedTooltip,
        "animated-tooltip",
        Category::Interactive,
        "Animated Tooltip",
        "Avatar row with springy hover tooltips.",
        &["skills", "team", "badges"],
        &[Skills, Experience],
        &[Small, Medium],
        &[Professional, Minimal, Modern],
    ),
    meta(
        VariantTag::FollowingPointer,
        "following-pointer",
        Category::Interactive,
        "Following Pointer",
        "Card area with a labelled custom pointer.",
        &["projects", "playful", "card"],
        &[Projects],
        &[Small, Medium],
        &[Creative, Modern],
    ),
    meta(
        VariantTag::HeroHighlight,
        "hero-highlight",
        Category::Interactive,
        "Hero Highlight",
        "Hero section with a painted highlight behind key words.",
        &["hero", "intro", "headline", "about"],
        &[PersonalInfo],
        &[Medium, Large, Full],
        ALL_THEMES,
    ),
    meta(
        VariantTag::HoverBorderGradient,
        "hover-border-gradient",
        Category::Interactive,
        "Hover Border Gradient",
        "Call-to-action button with a rotating border gradient.",
        &["cta", "contact", "button"],
        &[PersonalInfo],
        &[Small],
        &[Creative, Bold, Modern],
    ),
    meta(
        VariantTag::Lens,
        "lens",
        Category::Interactive,
        "Lens",
        "Magnifying lens over a featured image.",
        &["gallery", "detail", "visual"],
        &[Projects],
        &[Small, Medium],
        &[Minimal, Modern],
    ),
    meta(
        VariantTag::LinkPreview,
        "link-preview",
        Category::Interactive,
        "Link Preview",
        "Inline links that preview their target on hover.",
        &["links", "contact", "writing"],
        &[PersonalInfo, Projects],
        &[Small, Medium],
        &[Professional, Minimal],
    ),
    meta(
        VariantTag::MovingBorder,
        "moving-border",
        Category::Interactive,
        "Moving Border",
        "Button wrapped in a travelling border glow.",
        &["cta", "button", "contact"],
        &[PersonalInfo],
        &[Small],
        &[Creative, Bold, Modern],
    ),
    meta(
        VariantTag::MultiStepLoader,
        "multi-step-loader",
        Category::Interactive,
        "Multi Step Loader",
        "Step-by-step loader narrating a journey.",
        &["career", "story", "walkthrough"],
        &[Experience, Education],
        &[Medium, Large],
        &[Modern, Professional],
    ),
    meta(
        VariantTag::PlaceholdersAndVanishInput,
        "placeholders-and-vanish-input",
        Category::Interactive,
        "Vanish Input",
        "Search-style input with rotating placeholder prompts.",
        &["contact", "search", "prompt"],
        &[],
        &[Small, Medium],
        &[Minimal, Modern],
    ),
    meta(
        VariantTag::StatefulButton,
        "stateful-button",
        Category::Interactive,
        "Stateful Button",
        "Submit button animating through loading and success.",
        &["cta", "button", "form"],
        &[],
        &[Small],
        ALL_THEMES,
    ),
    meta(
        VariantTag::CanvasRevealEffect,
        "canvas-reveal-effect",
        Category::Interactive,
        "Canvas Reveal Effect",
        "Hover-revealed dot-matrix canvas cards.",
        &["skills", "grid", "dramatic"],
        &[Skills],
        &[Medium, Large],
        &[Creative, Bold, Modern],
    ),
    // navigation
    meta(
        VariantTag::FloatingDock,
        "floating-dock",
        Category::Navigation,
        "Floating Dock",
        "macOS-style magnifying icon dock.",
        &["navigation", "links", "social"],
        &[],
        &[Small, Medium],
        &[Modern, Minimal, Professional],
    ),
    meta(
        VariantTag::FloatingNavbar,
        "floating-navbar",
        Category::Navigation,
        "Floating Navbar",
        "Navbar that hides on scroll down and floats back up.",
        &["navigation", "header", "menu"],
        &[],
        &[Medium, Large, Full],
        ALL_THEMES,
    ),
    meta(
        VariantTag::NavbarMenu,
        "navbar-menu",
        Category::Navigation,
        "Navbar Menu",
        "Top navbar with animated dropdown panels.",
        &["navigation", "header", "menu"],
        &[],
        &[Medium, Large, Full],
        &[Professional, Modern],
    ),
    meta(
        VariantTag::Sidebar,
        "sidebar",
        Category::Navigation,
        "Sidebar",
        "Collapsible icon sidebar for section navigation.",
        &["navigation", "sections", "menu"],
        &[],
        &[Medium, Large, Full],
        &[Professional, Minimal, Modern],
    ),
    meta(
        VariantTag::Tabs,
        "tabs",
        Category::Navigation,
        "Tabs",
        "Animated tab switcher over section panels.",
        &["sections", "skills", "projects", "navigation"],
        &[Skills, Projects, Experience],
        &[Medium, Large, Full],
        ALL_THEMES,
    ),
    meta(
        VariantTag::ResizableNavbar,
        "resizable-navbar",
        Category::Navigation,
        "Resizable Navbar",
        "Navbar that shrinks into a compact pill on scroll.",
        &["navigation", "header", "menu"],
        &[],
        &[Medium, Large, Full],
        &[Modern, Professional],
    ),
    // content
    meta(
        VariantTag::TypewriterEffect,
        "typewriter-effect",
        Category::Content,
        "Typewriter Effect",
        "Headline typed out word by word with a cursor.",
        &["hero", "headline", "intro"],
        &[PersonalInfo],
        &[Medium, Large, Full],
        &[Creative, Bold, Modern],
    ),
    meta(
        VariantTag::TextGenerateEffect,
        "text-generate-effect",
        Category::Content,
        "Text Generate Effect",
        "Paragraph fading in one word at a time.",
        &["about", "summary", "intro"],
        &[PersonalInfo],
        &[Medium, Large, Full],
        ALL_THEMES,
    ),
    meta(
        VariantTag::FlipWords,
        "flip-words",
        Category::Content,
        "Flip Words",
        "Headline with a rotating emphasized word.",
        &["hero", "headline", "skills"],
        &[Skills, PersonalInfo],
        &[Small, Medium, Large],
        &[Creative, Modern],
    ),
    meta(
        VariantTag::ColourfulText,
        "colourful-text",
        Category::Content,
        "Colourful Text",
        "Headline word cycling through colour shuffles.",
        &["headline", "accent", "playful"],
        &[PersonalInfo],
        &[Small, Medium, Large],
        &[Creative, Bold],
    ),
    meta(
        VariantTag::ContainerTextFlip,
        "container-text-flip",
        Category::Content,
        "Container Text Flip",
        "Pill container flipping through short words.",
        &["skills", "headline", "accent"],
        &[Skills],
        &[Small, Medium],
        &[Creative, Modern],
    ),
    meta(
        VariantTag::HeroParallax,
        "hero-parallax",
        Category::Content,
        "Hero Parallax",
        "Scroll-driven parallax wall of product cards.",
        &["projects", "showcase", "landing"],
        &[Projects],
        &[Full],
        &[Creative, Bold, Modern],
    ),
    meta(
        VariantTag::LayoutGrid,
        "layout-grid",
        Category::Content,
        "Layout Grid",
        "Clickable image grid expanding tiles in place.",
        &["gallery", "projects", "visual"],
        &[Projects],
        &[Large, Full],
        &[Creative, Minimal, Modern],
    ),
    meta(
        VariantTag::MacbookScroll,
        "macbook-scroll",
        Category::Content,
        "Macbook Scroll",
        "Scroll-animated laptop revealing a screenshot.",
        &["showcase", "product", "landing"],
        &[Projects, PersonalInfo],
        &[Full],
        &[Modern, Professional],
    ),
    meta(
        VariantTag::ContainerScrollAnimation,
        "container-scroll-animation",
        Category::Content,
        "Container Scroll",
        "Tablet-style container tilting up while scrolling.",
        &["showcase", "product", "landing"],
        &[Projects, PersonalInfo],
        &[Large, Full],
        &[Modern, Creative],
    ),
    meta(
        VariantTag::GoogleGeminiEffect,
        "google-gemini-effect",
        Category::Content,
        "Gemini Effect",
        "Scroll-drawn SVG path swirl.",
        &["landing", "dramatic", "divider"],
        &[],
        &[Large, Full],
        &[Modern, Creative],
    ),
    meta(
        VariantTag::LampEffect,
        "lamp-effect",
        Category::Content,
        "Lamp Effect",
        "Section header lit by a conic lamp glow.",
        &["headline", "section", "dramatic"],
        &[PersonalInfo],
        &[Medium, Large, Full],
        &[Bold, Creative, Modern],
    ),
    meta(
        VariantTag::SvgMaskEffect,
        "svg-mask-effect",
        Category::Content,
        "SVG Mask Effect",
        "Pointer-driven mask revealing hidden copy.",
        &["about", "playful", "reveal"],
        &[PersonalInfo],
        &[Medium, Large],
        &[Minimal, Creative],
    ),
    meta(
        VariantTag::TracingBeam,
        "tracing-beam",
        Category::Content,
        "Tracing Beam",
        "Scroll-tracing gradient beam beside long content.",
        &["experience", "story", "article"],
        &[Experience, Education],
        &[Large, Full],
        &[Professional, Minimal, Modern],
    ),
    meta(
        VariantTag::TextHoverEffect,
        "text-hover-effect",
        Category::Content,
        "Text Hover Effect",
        "Giant outlined text filled by pointer proximity.",
        &["headline", "hero", "signature"],
        &[PersonalInfo],
        &[Medium, Large, Full],
        &[Bold, Minimal, Modern],
    ),
    meta(
        VariantTag::PointerHighlight,
        "pointer-highlight",
        Category::Content,
        "Pointer Highlight",
        "Inline phrase boxed by an animated pointer frame.",
        &["headline", "accent", "about"],
        &[PersonalInfo],
        &[Small, Medium],
        &[Minimal, Modern],
    ),
    meta(
        VariantTag::Compare,
        "compare",
        Category::Content,
        "Compare",
        "Slider comparing two images or states.",
        &["projects", "before-after", "visual"],
        &[Projects],
        &[Medium, Large],
        &[Creative, Modern],
    ),
    meta(
        VariantTag::StickyBanner,
        "sticky-banner",
        Category::Content,
        "Sticky Banner",
        "Dismissible announcement banner pinned to the top.",
        &["announcement", "header", "cta"],
        &[],
        &[Full],
        ALL_THEMES,
    ),
    meta(
        VariantTag::Spotlight,
        "spotlight",
        Category::Content,
        "Spotlight",
        "Hero section lit by a sweeping spotlight cone.",
        &["hero", "intro", "headline"],
        &[PersonalInfo],
        &[Medium, Large, Full],
        &[Professional, Bold, Modern],
    ),
    // utility
    meta(
        VariantTag::ThreeDPin,
        "three-d-pin",
        Category::Utility,
        "3D Pin",
        "Map-pin style perspective link card.",
        &["links", "featured", "contact"],
        &[Projects, PersonalInfo],
        &[Small, Medium],
        &[Creative, Modern],
    ),
    meta(
        VariantTag::WorldMap,
        "world-map",
        Category::Utility,
        "World Map",
        "Dotted world map with animated connection arcs.",
        &["location", "contact", "global"],
        &[PersonalInfo, Experience],
        &[Large, Full],
        &[Professional, Modern],
    ),
    meta(
        VariantTag::GithubGlobe,
        "github-globe",
        Category::Utility,
        "Github Globe",
        "Rotating wireframe globe with activity arcs.",
        &["global", "landing", "statistics"],
        &[],
        &[Large, Full],
        &[Modern, Professional],
    ),
    meta(
        VariantTag::CodeBlock,
        "code-block",
        Category::Utility,
        "Code Block",
        "Syntax-highlighted code card introducing the author.",
        &["skills", "developer", "about"],
        &[Skills, Projects],
        &[Medium, Large],
        &[Minimal, Modern, Professional],
    ),
    meta(
        VariantTag::GlowingEffect,
        "glowing-effect",
        Category::Utility,
        "Glowing Effect",
        "Proximity glow border wrapping a card grid.",
        &["grid", "accent", "projects"],
        &[Projects, Skills],
        &[Medium, Large, Full],
        &[Creative, Modern],
    ),
    meta(
        VariantTag::Loader,
        "loader",
        Category::Utility,
        "Loader",
        "Branded loading indicator.",
        &["loading", "transition"],
        &[],
        &[Small, Medium],
        ALL_THEMES,
    ),
    meta(
        VariantTag::Cover,
        "cover",
        Category::Utility,
        "Cover",
        "Warp-speed hover cover around a key phrase.",
        &["headline", "accent", "playful"],
        &[PersonalInfo],
        &[Small, Medium, Large],
        &[Bold, Modern],
    ),
    meta(
        VariantTag::FeatureSections,
        "feature-sections",
        Category::Utility,
        "Feature Sections",
        "Composed feature section with icon bullets.",
        &["skills", "overview", "services"],
        &[Skills, Projects],
        &[Large, Full],
        &[Professional, Modern, Minimal],
    ),
    meta(
        VariantTag::GridAndDotBackgrounds,
        "grid-and-dot-backgrounds",
        Category::Utility,
        "Grid And Dot Backgrounds",
        "Faded grid or dot texture behind a section.",
        &["ambient", "subtle", "section"],
        &[],
        ALL_SIZES,
        &[Minimal, Professional, Modern],
    ),
];
