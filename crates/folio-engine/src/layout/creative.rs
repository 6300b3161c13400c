//! Split-header template: name and title beside a location card, skills in
//! two columns, numbered "Selected Work" projects, side-by-side footer.
//! This template carries no experience section.

use crate::document::Block;
use folio_types::Portfolio;

pub(crate) fn blocks(record: &Portfolio) -> Vec<Block> {
    let mut blocks = vec![Block::SplitMasthead {
        name: record.name.clone(),
        title: record.title.clone(),
        location: record.location.clone(),
    }];

    if !record.bio.is_empty() {
        blocks.push(Block::Paragraph {
            text: record.bio.clone(),
        });
    }

    if !record.skills.is_empty() {
        blocks.push(Block::SectionTitle {
            text: "Expertise".to_string(),
        });

        // Column split at the midpoint, ceiling-rounded: the first column
        // never holds fewer items than the second.
        let split = record.skills.len().div_ceil(2);
        blocks.push(Block::TagColumns {
            left: record.skills[..split].to_vec(),
            right: record.skills[split..].to_vec(),
        });
    }

    if !record.projects.is_empty() {
        blocks.push(Block::SectionTitle {
            text: "Selected Work".to_string(),
        });
        for (idx, entry) in record.projects.iter().enumerate() {
            blocks.push(Block::ProjectCard {
                number: Some(format!("{:02}", idx + 1)),
                title: entry.title.clone(),
                description: entry.description.clone(),
                technologies: entry.technologies.clone(),
                link: entry.link.clone(),
            });
        }
    }

    blocks.push(Block::Rule);
    blocks.push(Block::SplitFooter {
        contact: [&record.email, &record.phone]
            .into_iter()
            .filter(|text| !text.is_empty())
            .cloned()
            .collect(),
        social: super::social_links(record),
    });

    blocks
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_types::Layout;

    fn record() -> Portfolio {
        let mut record = Portfolio::starter();
        record.layout = Layout::Creative;
        record
    }

    fn skills(n: usize) -> Vec<String> {
        (1..=n).map(|i| format!("skill-{i}")).collect()
    }

    #[test]
    fn test_skill_columns_split_at_ceil_midpoint() {
        for (total, expected_left) in [(1, 1), (2, 1), (5, 3), (6, 3)] {
            let mut record = record();
            record.skills = skills(total);

            let (left, right) = blocks(&record)
                .iter()
                .find_map(|b| match b {
                    Block::TagColumns { left, right } => Some((left.clone(), right.clone())),
                    _ => None,
                })
                .expect("skills present, columns expected");

            assert_eq!(left.len(), expected_left, "total={total}");
            assert_eq!(left.len() + right.len(), total);

            // Split preserves sequence order across the two columns.
            let mut joined = left;
            joined.extend(right);
            assert_eq!(joined, record.skills);
        }
    }

    #[test]
    fn test_projects_numbered_from_01() {
        let mut record = record();
        record.projects.push(record.projects[0].clone());

        let numbers: Vec<_> = blocks(&record)
            .iter()
            .filter_map(|b| match b {
                Block::ProjectCard { number, .. } => number.clone(),
                _ => None,
            })
            .collect();
        assert_eq!(numbers, vec!["01", "02"]);
    }

    #[test]
    fn test_no_experience_section() {
        let blocks = blocks(&record());
        assert!(
            !blocks
                .iter()
                .any(|b| matches!(b, Block::ExperienceCard { .. }))
        );
    }

    #[test]
    fn test_split_footer_drops_empty_contact_fields() {
        let mut record = record();
        record.email.clear();

        let footer = blocks(&record)
            .into_iter()
            .find_map(|b| match b {
                Block::SplitFooter { contact, .. } => Some(contact),
                _ => None,
            })
            .unwrap();
        assert_eq!(footer, vec![record.phone.clone()]);
    }

    #[test]
    fn test_location_card_carries_location_text() {
        let mut record = record();
        record.location = "Lisbon, Portugal".to_string();

        match &blocks(&record)[0] {
            Block::SplitMasthead { location, .. } => {
                assert_eq!(location, "Lisbon, Portugal");
            }
            other => panic!("expected split masthead, got {other:?}"),
        }
    }
}
