//! Field-level update operations over a portfolio record.
//!
//! Every operation is pure: it takes the current record by reference and
//! returns a complete new record. Out-of-range entry indices are a no-op,
//! never a panic: the caller gets the record back unchanged.

use folio_types::{ExperienceEntry, Layout, Portfolio, ProjectEntry, SocialPlatform, Theme};

/// Scalar fields addressable by [`set_field`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Title,
    Bio,
    Location,
    Email,
    Phone,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExperienceField {
    Company,
    Position,
    Duration,
    Description,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectField {
    Title,
    Description,
    Technologies,
    Link,
}

pub fn set_field(record: &Portfolio, field: Field, value: impl Into<String>) -> Portfolio {
    let value = value.into();
    let mut next = record.clone();
    match field {
        Field::Name => next.name = value,
        Field::Title => next.title = value,
        Field::Bio => next.bio = value,
        Field::Location => next.location = value,
        Field::Email => next.email = value,
        Field::Phone => next.phone = value,
    }
    next
}

/// Replace the skills sequence from a single comma-separated input.
///
/// Split on comma, trim each piece, drop empties. Order follows the split
/// order and duplicates are retained.
pub fn set_skills_from_text(record: &Portfolio, text: &str) -> Portfolio {
    let mut next = record.clone();
    next.skills = text
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect();
    next
}

/// The comma-separated form of the skills sequence, as shown in the editor input.
pub fn skills_text(record: &Portfolio) -> String {
    record.skills.join(", ")
}

pub fn add_experience(record: &Portfolio) -> Portfolio {
    let mut next = record.clone();
    next.experience.push(ExperienceEntry::blank());
    next
}

pub fn update_experience_field(
    record: &Portfolio,
    index: usize,
    field: ExperienceField,
    value: impl Into<String>,
) -> Portfolio {
    let mut next = record.clone();
    if let Some(entry) = next.experience.get_mut(index) {
        let value = value.into();
        match field {
            ExperienceField::Company => entry.company = value,
            ExperienceField::Position => entry.position = value,
            ExperienceField::Duration => entry.duration = value,
            ExperienceField::Description => entry.description = value,
        }
    }
    next
}

/// Remove the entry at `index`; later entries shift down, ids are untouched.
pub fn delete_experience(record: &Portfolio, index: usize) -> Portfolio {
    let mut next = record.clone();
    if index < next.experience.len() {
        next.experience.remove(index);
    }
    next
}

pub fn add_project(record: &Portfolio) -> Portfolio {
    let mut next = record.clone();
    next.projects.push(ProjectEntry::blank());
    next
}

pub fn update_project_field(
    record: &Portfolio,
    index: usize,
    field: ProjectField,
    value: impl Into<String>,
) -> Portfolio {
    let mut next = record.clone();
    if let Some(entry) = next.projects.get_mut(index) {
        let value = value.into();
        match field {
            ProjectField::Title => entry.title = value,
            ProjectField::Description => entry.description = value,
            ProjectField::Technologies => entry.technologies = value,
            ProjectField::Link => entry.link = normalize_optional(value),
        }
    }
    next
}

pub fn delete_project(record: &Portfolio, index: usize) -> Portfolio {
    let mut next = record.clone();
    if index < next.projects.len() {
        next.projects.remove(index);
    }
    next
}

pub fn set_social(record: &Portfolio, platform: SocialPlatform, value: impl Into<String>) -> Portfolio {
    let mut next = record.clone();
    next.social.set(platform, normalize_optional(value.into()));
    next
}

pub fn set_theme(record: &Portfolio, theme: Theme) -> Portfolio {
    let mut next = record.clone();
    next.theme = theme;
    next
}

pub fn set_layout(record: &Portfolio, layout: Layout) -> Portfolio {
    let mut next = record.clone();
    next.layout = layout;
    next
}

// An empty string means "cleared": optional fields hold None, never "".
fn normalize_optional(value: String) -> Option<String> {
    if value.is_empty() { None } else { Some(value) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_types::SocialLinks;

    fn base() -> Portfolio {
        Portfolio::starter()
    }

    #[test]
    fn test_set_field_replaces_one_scalar() {
        let record = base();
        let next = set_field(&record, Field::Name, "Ada Lovelace");

        assert_eq!(next.name, "Ada Lovelace");
        assert_eq!(next.title, record.title);
        assert_eq!(record.name, "Your Name");
    }

    #[test]
    fn test_skills_split_trims_and_drops_empties() {
        let next = set_skills_from_text(&base(), "React, TypeScript,  , Node.js");
        assert_eq!(next.skills, vec!["React", "TypeScript", "Node.js"]);
    }

    #[test]
    fn test_skills_keep_order_and_duplicates() {
        let next = set_skills_from_text(&base(), "Rust,Go,Rust");
        assert_eq!(next.skills, vec!["Rust", "Go", "Rust"]);

        let cleared = set_skills_from_text(&next, " , ,");
        assert!(cleared.skills.is_empty());
    }

    #[test]
    fn test_skills_text_round_trips_through_input_form() {
        let record = set_skills_from_text(&base(), "Rust, Go");
        assert_eq!(skills_text(&record), "Rust, Go");
        assert_eq!(set_skills_from_text(&record, &skills_text(&record)), record);
    }

    #[test]
    fn test_add_experience_appends_blank_with_fresh_id() {
        let record = base();
        let next = add_experience(&record);

        assert_eq!(next.experience.len(), record.experience.len() + 1);
        let added = next.experience.last().unwrap();
        assert!(added.company.is_empty());
        assert_ne!(added.id, next.experience[0].id);
    }

    #[test]
    fn test_update_experience_in_range() {
        let next = update_experience_field(&base(), 0, ExperienceField::Company, "Initech");
        assert_eq!(next.experience[0].company, "Initech");
    }

    #[test]
    fn test_update_out_of_range_is_noop() {
        let record = base();
        assert_eq!(
            update_experience_field(&record, 99, ExperienceField::Company, "x"),
            record
        );
        assert_eq!(
            update_project_field(&record, 99, ProjectField::Title, "x"),
            record
        );
    }

    #[test]
    fn test_delete_preserves_relative_order_and_ids() {
        let mut record = base();
        record = add_experience(&record);
        record = add_experience(&record);
        let ids: Vec<_> = record.experience.iter().map(|e| e.id.clone()).collect();

        let next = delete_experience(&record, 1);
        assert_eq!(next.experience.len(), 2);
        assert_eq!(next.experience[0].id, ids[0]);
        assert_eq!(next.experience[1].id, ids[2]);
    }

    #[test]
    fn test_delete_out_of_range_is_noop() {
        let record = base();
        assert_eq!(delete_experience(&record, 5), record);
        assert_eq!(delete_project(&record, 5), record);
    }

    #[test]
    fn test_project_link_clears_to_absent() {
        let record = base();
        let next = update_project_field(&record, 0, ProjectField::Link, "");
        assert_eq!(next.projects[0].link, None);

        let next = update_project_field(&next, 0, ProjectField::Link, "https://demo.dev");
        assert_eq!(next.projects[0].link.as_deref(), Some("https://demo.dev"));
    }

    #[test]
    fn test_set_social_empty_clears() {
        let record = set_social(&base(), SocialPlatform::Github, "");
        assert_eq!(record.social.github, None);

        let record = set_social(&record, SocialPlatform::Website, "https://me.dev");
        assert_eq!(record.social.website.as_deref(), Some("https://me.dev"));
    }

    #[test]
    fn test_theme_and_layout_setters() {
        let record = set_theme(&base(), Theme::Light);
        assert_eq!(record.theme, Theme::Light);

        let record = set_layout(&record, Layout::Creative);
        assert_eq!(record.layout, Layout::Creative);
    }

    #[test]
    fn test_operations_never_touch_unrelated_fields() {
        let record = Portfolio {
            social: SocialLinks {
                github: Some("https://github.com/a".to_string()),
                ..SocialLinks::default()
            },
            ..base()
        };

        let next = set_layout(
            &set_theme(&set_field(&record, Field::Bio, "new bio"), Theme::Light),
            Layout::Minimal,
        );

        assert_eq!(next.social, record.social);
        assert_eq!(next.experience, record.experience);
        assert_eq!(next.projects, record.projects);
        assert_eq!(next.skills, record.skills);
    }
}
