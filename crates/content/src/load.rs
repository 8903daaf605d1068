use std::{collections::HashSet, fs, path::Path};

use anyhow::Context;
use serde::Deserialize;
use thiserror::Error;

use crate::domain::{
    ContactMethod, EducationEntry, ExperienceEntry, Hero, Profile, Project, NAV_SECTIONS,
};
use crate::profile::builtin_profile;

#[derive(Debug, Error)]
pub enum ContentError {
    #[error("hero roles list is empty; the role rotator needs at least one label")]
    EmptyRoles,
    #[error("duplicate section id '{0}'")]
    DuplicateSectionId(&'static str),
}

/// Any top-level field present in the file replaces the built-in value
/// wholesale; absent fields keep the defaults.
#[derive(Debug, Default, Deserialize)]
struct ProfileOverride {
    hero: Option<Hero>,
    about: Option<Vec<String>>,
    experience: Option<Vec<ExperienceEntry>>,
    education: Option<Vec<EducationEntry>>,
    skills: Option<Vec<String>>,
    projects: Option<Vec<Project>>,
    contact: Option<Vec<ContactMethod>>,
}

pub fn load_profile(path: Option<&Path>) -> anyhow::Result<Profile> {
    let mut profile = builtin_profile();

    if let Some(path) = path {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("failed to read profile file '{}'", path.display()))?;
        let overrides: ProfileOverride = toml::from_str(&raw)
            .with_context(|| format!("profile file '{}' is not valid TOML", path.display()))?;
        apply_overrides(&mut profile, overrides);
        tracing::info!(path = %path.display(), "applied profile overrides");
    }

    validate(&profile)?;
    Ok(profile)
}

fn apply_overrides(profile: &mut Profile, overrides: ProfileOverride) {
    if let Some(v) = overrides.hero {
        profile.hero = v;
    }
    if let Some(v) = overrides.about {
        profile.about = v;
    }
    if let Some(v) = overrides.experience {
        profile.experience = v;
    }
    if let Some(v) = overrides.education {
        profile.education = v;
    }
    if let Some(v) = overrides.skills {
        profile.skills = v;
    }
    if let Some(v) = overrides.projects {
        profile.projects = v;
    }
    if let Some(v) = overrides.contact {
        profile.contact = v;
    }
}

fn validate(profile: &Profile) -> Result<(), ContentError> {
    if profile.hero.roles.is_empty() {
        return Err(ContentError::EmptyRoles);
    }

    let mut seen = HashSet::new();
    for section in NAV_SECTIONS {
        if !seen.insert(section.id) {
            return Err(ContentError::DuplicateSectionId(section.id.as_str()));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::{
        env, fs,
        time::{SystemTime, UNIX_EPOCH},
    };

    use super::*;

    #[test]
    fn builtin_profile_passes_validation() {
        let profile = load_profile(None).expect("builtin profile loads");
        assert!(!profile.hero.roles.is_empty());
        assert!(!profile.experience.is_empty());
        assert!(!profile.projects.is_empty());
    }

    #[test]
    fn nav_section_ids_are_unique_and_ordered() {
        let ids: Vec<&str> = NAV_SECTIONS.iter().map(|s| s.id.as_str()).collect();
        let mut deduped = ids.clone();
        deduped.dedup();
        assert_eq!(ids, deduped);
        assert_eq!(ids.first().copied(), Some("about-me"));
        assert_eq!(ids.last().copied(), Some("contact"));
    }

    #[test]
    fn override_file_replaces_only_present_fields() {
        let suffix = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("clock")
            .as_nanos();
        let path = env::temp_dir().join(format!("folio_profile_{suffix}.toml"));
        fs::write(&path, "skills = [\"Rust\", \"SQL\"]\nabout = [\"One paragraph.\"]\n")
            .expect("write override");

        let profile = load_profile(Some(&path)).expect("override loads");
        assert_eq!(profile.skills, vec!["Rust".to_string(), "SQL".to_string()]);
        assert_eq!(profile.about, vec!["One paragraph.".to_string()]);
        // Untouched fields keep the built-in values.
        assert_eq!(profile.hero.name, builtin_profile().hero.name);

        fs::remove_file(path).expect("cleanup");
    }

    #[test]
    fn empty_roles_override_is_rejected() {
        let suffix = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("clock")
            .as_nanos();
        let path = env::temp_dir().join(format!("folio_profile_bad_{suffix}.toml"));
        fs::write(
            &path,
            "[hero]\nname = \"X\"\nroles = []\nintro = []\nresume_path = \"\"\nemail = \"\"\ngithub_url = \"\"\nlinkedin_url = \"\"\n",
        )
        .expect("write override");

        let err = load_profile(Some(&path)).expect_err("empty roles must fail");
        assert!(err.to_string().contains("roles"));

        fs::remove_file(path).expect("cleanup");
    }
}
