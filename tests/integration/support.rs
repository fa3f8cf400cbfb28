use portfoliokit::models::{
    Achievement, EducationEntry, ExperienceEntry, PersonalInfo, ProfileData, Project, Skill,
    SocialLink,
};

pub fn empty_profile() -> ProfileData {
    ProfileData::default()
}

pub fn skill(name: &str, level: &str) -> Skill {
    Skill {
        name: name.to_string(),
        level: Some(level.to_string()),
        category: None,
    }
}

pub fn project(name: &str) -> Project {
    Project {
        name: name.to_string(),
        description: Some(format!("{name} description")),
        image: Some(format!("/images/{name}.png")),
        technologies: vec!["Rust".to_string()],
        url: Some(format!("https://example.com/{name}")),
        repository: None,
    }
}

pub fn projects_only(count: usize) -> ProfileData {
    ProfileData {
        projects: (0..count).map(|index| project(&format!("project-{index}"))).collect(),
        ..ProfileData::default()
    }
}

pub fn skills_only() -> ProfileData {
    ProfileData {
        skills: vec![skill("Go", "Expert"), skill("Rust", "Intermediate")],
        ..ProfileData::default()
    }
}

pub fn jane_doe() -> ProfileData {
    ProfileData {
        personal_info: Some(PersonalInfo {
            name: Some("Jane Doe".to_string()),
            ..PersonalInfo::default()
        }),
        skills: vec![skill("Go", "Expert"), skill("Rust", "Intermediate")],
        ..ProfileData::default()
    }
}

pub fn full_profile() -> ProfileData {
    ProfileData {
        personal_info: Some(PersonalInfo {
            name: Some("Alex Rivera".to_string()),
            title: Some("Systems Engineer".to_string()),
            summary: Some("Builds reliable infrastructure and the tools around it.".to_string()),
            avatar: Some("/images/alex.png".to_string()),
            website: Some("https://alex.example.com".to_string()),
            email: Some("alex@example.com".to_string()),
            location: Some("Lisbon, Portugal".to_string()),
            links: vec![SocialLink {
                label: "GitHub".to_string(),
                url: "https://github.com/alex".to_string(),
            }],
        }),
        experience: vec![
            ExperienceEntry {
                company: Some("Northwind".to_string()),
                position: Some("Staff Engineer".to_string()),
                duration: Some("2021 — Present".to_string()),
                description: Some("Leads the storage platform team.".to_string()),
                highlights: vec!["Cut tail latency by 40%".to_string()],
            },
            ExperienceEntry {
                company: Some("Contoso".to_string()),
                position: Some("Backend Engineer".to_string()),
                duration: Some("2017 — 2021".to_string()),
                description: Some("Built the billing pipeline.".to_string()),
                highlights: Vec::new(),
            },
        ],
        education: vec![EducationEntry {
            institution: Some("IST Lisbon".to_string()),
            degree: Some("MSc Computer Science".to_string()),
            field: Some("Distributed Systems".to_string()),
            year: Some("2017".to_string()),
        }],
        skills: vec![
            skill("Rust", "Expert"),
            skill("Go", "Advanced"),
            skill("PostgreSQL", "Advanced"),
        ],
        projects: vec![project("atlas"), project("beacon")],
        achievements: vec![Achievement {
            title: "Best Paper Award".to_string(),
            description: Some("Recognized at an industry systems conference.".to_string()),
            date: Some("2023".to_string()),
            issuer: Some("SysConf".to_string()),
        }],
    }
}
