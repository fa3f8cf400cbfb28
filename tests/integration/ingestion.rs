use anyhow::Result;
use portfoliokit::models::ProfileData;
use tempfile::TempDir;

const JSON_PAYLOAD: &str = r#"{
  "personalInfo": { "name": "Jane Doe", "title": "Engineer" },
  "skills": [ { "name": "Go", "level": "Expert" } ]
}"#;

const YAML_PAYLOAD: &str = "personalInfo:\n  name: Jane Doe\nprojects:\n  - name: atlas\n";

#[test]
fn parses_json_payloads() -> Result<()> {
    let profile = ProfileData::from_json_str(JSON_PAYLOAD)?;
    assert_eq!(
        profile.personal_info.as_ref().and_then(|info| info.name.as_deref()),
        Some("Jane Doe")
    );
    assert_eq!(profile.skills.len(), 1);
    assert!(profile.projects.is_empty());
    Ok(())
}

#[test]
fn parses_yaml_payloads() -> Result<()> {
    let profile = ProfileData::from_yaml_str(YAML_PAYLOAD)?;
    assert_eq!(profile.projects.len(), 1);
    assert_eq!(profile.projects[0].name, "atlas");
    Ok(())
}

#[test]
fn loads_payload_files_by_extension() -> Result<()> {
    let dir = TempDir::new()?;
    let json_path = dir.path().join("profile.json");
    std::fs::write(&json_path, JSON_PAYLOAD)?;
    let profile = ProfileData::from_path(&json_path)?;
    assert_eq!(profile.skills[0].name, "Go");

    let yaml_path = dir.path().join("profile.yaml");
    std::fs::write(&yaml_path, YAML_PAYLOAD)?;
    let profile = ProfileData::from_path(&yaml_path)?;
    assert_eq!(profile.projects.len(), 1);
    Ok(())
}

#[test]
fn rejects_unknown_extensions_and_bad_payloads() -> Result<()> {
    let dir = TempDir::new()?;
    let path = dir.path().join("profile.txt");
    std::fs::write(&path, "not a profile")?;
    assert!(ProfileData::from_path(&path).is_err());
    assert!(ProfileData::from_json_str("{ broken").is_err());
    Ok(())
}
