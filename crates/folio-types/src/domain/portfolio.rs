use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::style::{Layout, Theme};

/// Identity token for an experience or project entry.
///
/// Assigned once when the entry is created and never reused or renumbered:
/// deleting an entry shifts the survivors down by position but leaves their
/// ids untouched. Files produced by other tools may carry arbitrary id
/// strings, so this stays a plain string wrapper rather than a parsed UUID.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntryId(String);

impl EntryId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// A fresh id, distinct from every other id this source hands out.
    pub fn fresh() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// One work-history entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExperienceEntry {
    pub id: EntryId,
    pub company: String,
    pub position: String,
    pub duration: String,
    pub description: String,
}

impl ExperienceEntry {
    /// An empty entry with a fresh id, as appended by the editor's "add".
    pub fn blank() -> Self {
        Self {
            id: EntryId::fresh(),
            company: String::new(),
            position: String::new(),
            duration: String::new(),
            description: String::new(),
        }
    }
}

/// One showcased project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectEntry {
    pub id: EntryId,
    pub title: String,
    pub description: String,
    pub technologies: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
}

impl ProjectEntry {
    pub fn blank() -> Self {
        Self {
            id: EntryId::fresh(),
            title: String::new(),
            description: String::new(),
            technologies: String::new(),
            link: None,
        }
    }
}

/// The closed set of platforms a portfolio can link out to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SocialPlatform {
    Github,
    Linkedin,
    Twitter,
    Website,
}

impl SocialPlatform {
    pub const ALL: [SocialPlatform; 4] = [
        SocialPlatform::Github,
        SocialPlatform::Linkedin,
        SocialPlatform::Twitter,
        SocialPlatform::Website,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            SocialPlatform::Github => "GitHub",
            SocialPlatform::Linkedin => "LinkedIn",
            SocialPlatform::Twitter => "Twitter",
            SocialPlatform::Website => "Website",
        }
    }
}

/// Profile links keyed by the fixed platform set.
///
/// `None` means "not shown", which is stronger than an empty string:
/// serialization skips absent links entirely, and no renderer ever sees one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLinks {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linkedin: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub twitter: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
}

impl SocialLinks {
    pub fn get(&self, platform: SocialPlatform) -> Option<&str> {
        match platform {
            SocialPlatform::Github => self.github.as_deref(),
            SocialPlatform::Linkedin => self.linkedin.as_deref(),
            SocialPlatform::Twitter => self.twitter.as_deref(),
            SocialPlatform::Website => self.website.as_deref(),
        }
    }

    pub fn set(&mut self, platform: SocialPlatform, url: Option<String>) {
        let slot = match platform {
            SocialPlatform::Github => &mut self.github,
            SocialPlatform::Linkedin => &mut self.linkedin,
            SocialPlatform::Twitter => &mut self.twitter,
            SocialPlatform::Website => &mut self.website,
        };
        *slot = url;
    }

    pub fn is_empty(&self) -> bool {
        SocialPlatform::ALL.iter().all(|p| self.get(*p).is_none())
    }

    /// Present links in the fixed platform order.
    pub fn present(&self) -> Vec<(SocialPlatform, &str)> {
        SocialPlatform::ALL
            .iter()
            .filter_map(|p| self.get(*p).map(|url| (*p, url)))
            .collect()
    }
}

/// The canonical portfolio record.
///
/// Exactly one value exists per editing session. Edits never mutate a record
/// in place: every operation in `folio-engine` takes the current value and
/// returns a complete new one, so a renderer always sees a consistent record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Portfolio {
    pub name: String,
    pub title: String,
    pub bio: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub experience: Vec<ExperienceEntry>,
    #[serde(default)]
    pub projects: Vec<ProjectEntry>,
    #[serde(default)]
    pub social: SocialLinks,
    #[serde(default)]
    pub theme: Theme,
    #[serde(default)]
    pub layout: Layout,
}

impl Portfolio {
    /// The seed record the editor opens with.
    ///
    /// Entry ids are freshly assigned on every call, so two sessions seeded
    /// from the starter never share ids.
    pub fn starter() -> Self {
        Self {
            name: "Your Name".to_string(),
            title: "Full Stack Developer".to_string(),
            bio: "I build beautiful and functional digital experiences.".to_string(),
            email: "you@example.com".to_string(),
            phone: "+1 (555) 123-4567".to_string(),
            location: "San Francisco, CA".to_string(),
            skills: ["React", "TypeScript", "Node.js", "CSS", "Web Design"]
                .into_iter()
                .map(String::from)
                .collect(),
            experience: vec![ExperienceEntry {
                id: EntryId::fresh(),
                company: "Tech Company".to_string(),
                position: "Senior Developer".to_string(),
                duration: "2022 - Present".to_string(),
                description: "Led development of key features and mentored junior developers."
                    .to_string(),
            }],
            projects: vec![ProjectEntry {
                id: EntryId::fresh(),
                title: "E-Commerce Platform".to_string(),
                description: "A modern e-commerce solution with real-time inventory management."
                    .to_string(),
                technologies: "React, Node.js, PostgreSQL".to_string(),
                link: Some("https://example.com".to_string()),
            }],
            social: SocialLinks {
                github: Some("https://github.com".to_string()),
                linkedin: Some("https://linkedin.com".to_string()),
                twitter: Some("https://twitter.com".to_string()),
                website: None,
            },
            theme: Theme::Dark,
            layout: Layout::Modern,
        }
    }

    pub fn to_json_pretty(&self) -> crate::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(text: &str) -> crate::Result<Self> {
        Ok(serde_json::from_str(text)?)
    }
}
