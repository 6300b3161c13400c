//! Single-column template: header, skill tags, stacked cards, plain footer.

use crate::document::Block;
use folio_types::Portfolio;

pub(crate) fn blocks(record: &Portfolio) -> Vec<Block> {
    let mut blocks = vec![Block::Masthead {
        name: record.name.clone(),
        title: record.title.clone(),
    }];

    if !record.bio.is_empty() {
        blocks.push(Block::Paragraph {
            text: record.bio.clone(),
        });
    }

    if !record.skills.is_empty() {
        blocks.push(Block::SectionTitle {
            text: "Skills".to_string(),
        });
        blocks.push(Block::TagRow {
            tags: record.skills.clone(),
        });
    }

    if !record.experience.is_empty() {
        blocks.push(Block::SectionTitle {
            text: "Experience".to_string(),
        });
        for entry in &record.experience {
            blocks.push(Block::ExperienceCard {
                position: entry.position.clone(),
                company: entry.company.clone(),
                duration: entry.duration.clone(),
                description: entry.description.clone(),
                accented: false,
            });
        }
    }

    if !record.projects.is_empty() {
        blocks.push(Block::SectionTitle {
            text: "Projects".to_string(),
        });
        for entry in &record.projects {
            blocks.push(Block::ProjectCard {
                number: None,
                title: entry.title.clone(),
                description: entry.description.clone(),
                technologies: entry.technologies.clone(),
                link: entry.link.clone(),
            });
        }
    }

    blocks.extend(super::footer_blocks(record));
    blocks
}
