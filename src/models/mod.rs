pub mod config;
pub mod profile;

pub use config::{AdaptConfig, AdaptedComponent, PropertyBag, SizeOption, ThemeConfig, ThemeStyle};
pub use profile::{
    Achievement, DataSection, EducationEntry, ExperienceEntry, PersonalInfo, ProfileData, Project,
    Skill, SocialLink,
};
