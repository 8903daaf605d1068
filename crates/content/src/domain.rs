use std::fmt;

use serde::{Deserialize, Serialize};

/// Stable identifier of an addressable page section. The set of sections is
/// fixed at compile time; profile files may override text, never structure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SectionId(pub &'static str);

impl SectionId {
    pub fn as_str(&self) -> &'static str {
        self.0
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

pub const HERO: SectionId = SectionId("hero");
pub const ABOUT: SectionId = SectionId("about-me");
pub const EXPERIENCE: SectionId = SectionId("experience");
pub const EDUCATION: SectionId = SectionId("education");
pub const SKILLS: SectionId = SectionId("skills");
pub const PROJECTS: SectionId = SectionId("projects");
pub const CONTACT: SectionId = SectionId("contact");

#[derive(Debug, Clone, Copy)]
pub struct Section {
    pub id: SectionId,
    pub label: &'static str,
}

/// Navigable sections in document order. Order here is the order the page
/// renders them, which is what the active-section scan relies on.
pub const NAV_SECTIONS: &[Section] = &[
    Section { id: ABOUT, label: "About Me" },
    Section { id: EXPERIENCE, label: "Experience" },
    Section { id: EDUCATION, label: "Education" },
    Section { id: SKILLS, label: "Skills" },
    Section { id: PROJECTS, label: "Projects" },
    Section { id: CONTACT, label: "Contact" },
];

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Hero {
    pub name: String,
    pub roles: Vec<String>,
    pub intro: Vec<String>,
    pub resume_path: String,
    pub email: String,
    pub github_url: String,
    pub linkedin_url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExperienceEntry {
    pub company: String,
    pub duration: String,
    pub position: String,
    pub location: String,
    pub responsibilities: Vec<String>,
    pub is_current: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Course {
    pub name: String,
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EducationEntry {
    pub institution: String,
    pub duration: String,
    pub degree: String,
    pub major: String,
    pub location: String,
    pub courses: Vec<Course>,
    pub is_current: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    pub title: String,
    pub description: String,
    pub technologies: Vec<String>,
    pub github_url: Option<String>,
    pub live_url: Option<String>,
    pub category: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactMethod {
    pub title: String,
    pub value: String,
    pub link: Option<String>,
    pub description: String,
}

/// The whole page's content, loaded once at startup and read-only afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    pub hero: Hero,
    pub about: Vec<String>,
    pub experience: Vec<ExperienceEntry>,
    pub education: Vec<EducationEntry>,
    pub skills: Vec<String>,
    pub projects: Vec<Project>,
    pub contact: Vec<ContactMethod>,
}
