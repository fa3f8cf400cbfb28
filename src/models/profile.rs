//! Profile payload types shared by the registry, transforms, and adapter.
//!
//! The payload is produced by an external CV-ingestion frontend, so every
//! field is optional and the engine tolerates any subset being absent.

use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};

/// Structured professional-profile payload. Read-only input to the engine.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileData {
    pub personal_info: Option<PersonalInfo>,
    #[serde(default)]
    pub experience: Vec<ExperienceEntry>,
    #[serde(default)]
    pub education: Vec<EducationEntry>,
    #[serde(default)]
    pub skills: Vec<Skill>,
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub achievements: Vec<Achievement>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonalInfo {
    pub name: Option<String>,
    pub title: Option<String>,
    pub summary: Option<String>,
    pub avatar: Option<String>,
    pub website: Option<String>,
    pub email: Option<String>,
    pub location: Option<String>,
    #[serde(default)]
    pub links: Vec<SocialLink>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SocialLink {
    pub label: String,
    pub url: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExperienceEntry {
    pub company: Option<String>,
    pub position: Option<String>,
    pub duration: Option<String>,
    pub description: Option<String>,
    #[serde(default)]
    pub highlights: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EducationEntry {
    pub institution: Option<String>,
    pub degree: Option<String>,
    pub field: Option<String>,
    pub year: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Skill {
    pub name: String,
    pub level: Option<String>,
    pub category: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub name: String,
    pub description: Option<String>,
    pub image: Option<String>,
    #[serde(default)]
    pub technologies: Vec<String>,
    pub url: Option<String>,
    pub repository: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Achievement {
    pub title: String,
    pub description: Option<String>,
    pub date: Option<String>,
    pub issuer: Option<String>,
}

/// Named profile sections the registry can declare as data prerequisites.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub enum DataSection {
    PersonalInfo,
    Experience,
    Education,
    Skills,
    Projects,
    Achievements,
}

impl ProfileData {
    /// True when the section resolves to a present, non-empty value.
    pub fn has_section(&self, section: DataSection) -> bool {
        match section {
            DataSection::PersonalInfo => self.personal_info.is_some(),
            DataSection::Experience => !self.experience.is_empty(),
            DataSection::Education => !self.education.is_empty(),
            DataSection::Skills => !self.skills.is_empty(),
            DataSection::Projects => !self.projects.is_empty(),
            DataSection::Achievements => !self.achievements.is_empty(),
        }
    }

    pub fn from_json_str(payload: &str) -> Result<Self> {
        serde_json::from_str(payload).context("Failed to parse profile payload as JSON")
    }

    pub fn from_yaml_str(payload: &str) -> Result<Self> {
        serde_yaml::from_str(payload).context("Failed to parse profile payload as YAML")
    }

    /// Loads a payload file, dispatching on the extension.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let data = fs::read_to_string(path)
            .with_context(|| format!("Failed to read profile payload at {}", path.display()))?;
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .unwrap_or_default()
            .to_ascii_lowercase();
        match extension.as_str() {
            "json" => Self::from_json_str(&data)
                .with_context(|| format!("Invalid JSON profile at {}", path.display())),
            "yaml" | "yml" => Self::from_yaml_str(&data)
                .with_context(|| format!("Invalid YAML profile at {}", path.display())),
            other => bail!("Unsupported profile payload extension '{other}'"),
        }
    }
}
