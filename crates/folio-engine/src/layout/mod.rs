//! Layout templates.
//!
//! Each template maps a portfolio record to a block list; [`render`] picks
//! the template from `record.layout`. Rendering is stateless and
//! side-effect-free: the same record always yields the same `Document`.

mod creative;
mod minimal;
mod modern;

use crate::document::{Block, ContactKind, ContactLine, Document, SocialLink};
use folio_types::{Portfolio, SocialPlatform};

pub fn render(record: &Portfolio) -> Document {
    let blocks = match record.layout {
        folio_types::Layout::Minimal => minimal::blocks(record),
        folio_types::Layout::Modern => modern::blocks(record),
        folio_types::Layout::Creative => creative::blocks(record),
    };

    Document {
        theme: record.theme,
        layout: record.layout,
        blocks,
    }
}

// The preview links out to the icon platforms; `website` stays export-only.
const ICON_PLATFORMS: [SocialPlatform; 3] = [
    SocialPlatform::Github,
    SocialPlatform::Linkedin,
    SocialPlatform::Twitter,
];

pub(crate) fn contact_lines(record: &Portfolio) -> Vec<ContactLine> {
    [
        (ContactKind::Email, &record.email),
        (ContactKind::Phone, &record.phone),
        (ContactKind::Location, &record.location),
    ]
    .into_iter()
    .filter(|(_, text)| !text.is_empty())
    .map(|(kind, text)| ContactLine {
        kind,
        text: text.clone(),
    })
    .collect()
}

pub(crate) fn social_links(record: &Portfolio) -> Vec<SocialLink> {
    ICON_PLATFORMS
        .iter()
        .filter_map(|platform| {
            record.social.get(*platform).map(|url| SocialLink {
                platform: *platform,
                url: url.to_string(),
            })
        })
        .collect()
}

// Shared single-column footer: divider, then contact lines and social icons,
// each omitted entirely when empty.
pub(crate) fn footer_blocks(record: &Portfolio) -> Vec<Block> {
    let mut blocks = vec![Block::Rule];

    let lines = contact_lines(record);
    if !lines.is_empty() {
        blocks.push(Block::ContactLines { lines });
    }

    let links = social_links(record);
    if !links.is_empty() {
        blocks.push(Block::SocialRow { links });
    }

    blocks
}
