pub mod models;
pub mod orchestration;
pub mod registry;
pub mod transforms;

// Re-export commonly used types for convenience.
pub use models::{
    AdaptConfig, AdaptedComponent, ProfileData, PropertyBag, SizeOption, ThemeConfig, ThemeStyle,
};
pub use orchestration::ComponentAdapter;
pub use registry::{Category, Preset, VariantMetadata, VariantTag};
