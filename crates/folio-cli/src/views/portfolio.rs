//! Terminal formatting for a rendered [`Document`].
//!
//! Blocks are flattened into styled lines first; the ANSI printer and the
//! editor's preview pane both consume the same line list, so the two
//! surfaces can never disagree about what a record renders to.

use folio_engine::{Block, ContactKind, Document, SocialLink};
use folio_types::Theme;
use owo_colors::OwoColorize;

const PAGE_WIDTH: usize = 60;

/// Semantic style of one output line; each backend maps it to its own colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineStyle {
    Normal,
    Heading,
    Subheading,
    Accent,
    Muted,
    Banner,
    Tag,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewLine {
    pub style: LineStyle,
    pub text: String,
}

impl ViewLine {
    fn new(style: LineStyle, text: impl Into<String>) -> Self {
        Self {
            style,
            text: text.into(),
        }
    }

    fn blank() -> Self {
        Self::new(LineStyle::Normal, "")
    }
}

/// Flatten a document into styled lines, top to bottom.
pub fn document_view_lines(doc: &Document) -> Vec<ViewLine> {
    let mut lines = Vec::new();

    for block in &doc.blocks {
        match block {
            Block::Banner => {
                lines.push(ViewLine::new(LineStyle::Banner, "═".repeat(PAGE_WIDTH)));
                lines.push(ViewLine::blank());
            }

            Block::Avatar { glyph } => {
                lines.push(ViewLine::new(LineStyle::Accent, format!("( {} )", glyph)));
                lines.push(ViewLine::blank());
            }

            Block::Masthead { name, title } => {
                lines.push(ViewLine::new(LineStyle::Heading, name.clone()));
                lines.push(ViewLine::new(LineStyle::Accent, title.clone()));
                lines.push(ViewLine::blank());
            }

            Block::SplitMasthead {
                name,
                title,
                location,
            } => {
                lines.push(ViewLine::new(LineStyle::Heading, name.clone()));
                lines.push(ViewLine::new(LineStyle::Accent, title.clone()));
                lines.push(ViewLine::new(
                    LineStyle::Muted,
                    format!("[ Based in: {} ]", location),
                ));
                lines.push(ViewLine::blank());
            }

            Block::Paragraph { text } => {
                lines.push(ViewLine::new(LineStyle::Normal, text.clone()));
                lines.push(ViewLine::blank());
            }

            Block::SectionTitle { text } => {
                lines.push(ViewLine::new(LineStyle::Subheading, text.clone()));
            }

            Block::TagRow { tags } => {
                let row = tags
                    .iter()
                    .map(|t| format!("[{}]", t))
                    .collect::<Vec<_>>()
                    .join(" ");
                lines.push(ViewLine::new(LineStyle::Tag, row));
                lines.push(ViewLine::blank());
            }

            Block::TagColumns { left, right } => {
                let width = left.iter().map(|t| t.len()).max().unwrap_or(0);
                for i in 0..left.len().max(right.len()) {
                    let l = left.get(i).map(String::as_str).unwrap_or("");
                    let r = right.get(i).map(String::as_str).unwrap_or("");
                    lines.push(ViewLine::new(
                        LineStyle::Tag,
                        format!("{:width$}    {}", l, r, width = width)
                            .trim_end()
                            .to_string(),
                    ));
                }
                lines.push(ViewLine::blank());
            }

            Block::ExperienceCard {
                position,
                company,
                duration,
                description,
                accented,
            } => {
                let marker = if *accented { "▌ " } else { "" };
                let mut header: Vec<&str> = Vec::new();
                if !position.is_empty() {
                    header.push(position);
                }
                if !company.is_empty() {
                    header.push(company);
                }
                let mut line = format!("{}{}", marker, header.join(" — "));
                if !duration.is_empty() {
                    if line.len() > marker.len() {
                        line.push(' ');
                    }
                    line.push_str(&format!("({})", duration));
                }
                lines.push(ViewLine::new(LineStyle::Normal, line));
                if !description.is_empty() {
                    lines.push(ViewLine::new(LineStyle::Muted, format!("  {}", description)));
                }
                lines.push(ViewLine::blank());
            }

            Block::ProjectCard {
                number,
                title,
                description,
                technologies,
                link,
            } => {
                let heading = match number {
                    Some(number) => format!("{} · {}", number, title),
                    None => title.clone(),
                };
                lines.push(ViewLine::new(LineStyle::Normal, heading));
                if !description.is_empty() {
                    lines.push(ViewLine::new(LineStyle::Muted, format!("  {}", description)));
                }
                if !technologies.is_empty() {
                    lines.push(ViewLine::new(LineStyle::Muted, format!("  {}", technologies)));
                }
                if let Some(link) = link {
                    lines.push(ViewLine::new(LineStyle::Accent, format!("  View → {}", link)));
                }
                lines.push(ViewLine::blank());
            }

            Block::Rule => {
                lines.push(ViewLine::new(LineStyle::Muted, "─".repeat(PAGE_WIDTH)));
            }

            Block::ContactLines { lines: contact } => {
                for line in contact {
                    let icon = match line.kind {
                        ContactKind::Email => "✉",
                        ContactKind::Phone => "✆",
                        ContactKind::Location => "⌂",
                    };
                    lines.push(ViewLine::new(
                        LineStyle::Muted,
                        format!("{} {}", icon, line.text),
                    ));
                }
            }

            Block::SocialRow { links } => {
                lines.push(ViewLine::new(LineStyle::Accent, social_row_text(links)));
            }

            Block::SplitFooter { contact, social } => {
                if !contact.is_empty() {
                    lines.push(ViewLine::new(LineStyle::Subheading, "Contact"));
                    for line in contact {
                        lines.push(ViewLine::new(LineStyle::Muted, line.clone()));
                    }
                }
                if !social.is_empty() {
                    lines.push(ViewLine::new(LineStyle::Subheading, "Connect"));
                    lines.push(ViewLine::new(LineStyle::Accent, social_row_text(social)));
                }
            }
        }
    }

    while lines.last().is_some_and(|l| l.text.is_empty()) {
        lines.pop();
    }
    lines
}

fn social_row_text(links: &[SocialLink]) -> String {
    links
        .iter()
        .map(|link| format!("{} {}", link.platform.label(), link.url))
        .collect::<Vec<_>>()
        .join("  ·  ")
}

/// Plain text, one string per line. Used by tests and non-TTY output.
pub fn plain_lines(doc: &Document) -> Vec<String> {
    document_view_lines(doc)
        .into_iter()
        .map(|line| line.text)
        .collect()
}

pub fn print_document(doc: &Document, color: bool) {
    if !color {
        for line in plain_lines(doc) {
            println!("{}", line);
        }
        return;
    }

    // Dark theme dims the secondary text harder; light leans on defaults.
    let dark = doc.theme == Theme::Dark;
    for line in document_view_lines(doc) {
        match line.style {
            LineStyle::Normal => println!("{}", line.text),
            LineStyle::Heading => println!("{}", line.text.bold()),
            LineStyle::Subheading => println!("{}", line.text.bold().underline()),
            LineStyle::Accent => println!("{}", line.text.blue()),
            LineStyle::Banner => println!("{}", line.text.cyan()),
            LineStyle::Tag => println!("{}", line.text.cyan()),
            LineStyle::Muted => {
                if dark {
                    println!("{}", line.text.dimmed());
                } else {
                    println!("{}", line.text.white().dimmed());
                }
            }
        }
    }
}
