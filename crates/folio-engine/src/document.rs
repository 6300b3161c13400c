use folio_types::{Layout, SocialPlatform, Theme};
use serde::Serialize;

/// A rendered preview: the ordered block list for one layout template.
///
/// Produced by [`crate::render`] as a pure projection of a portfolio record.
/// Terminal backends format a `Document` without consulting the record again.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Document {
    pub theme: Theme,
    pub layout: Layout,
    pub blocks: Vec<Block>,
}

/// One structural element of a rendered preview.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Block {
    /// Full-width accent strip (modern).
    Banner,

    /// Monogram derived from the first character of the name (modern).
    Avatar { glyph: String },

    /// Name and professional title.
    Masthead { name: String, title: String },

    /// Name and title in a wide column beside a location side card (creative).
    SplitMasthead {
        name: String,
        title: String,
        location: String,
    },

    Paragraph { text: String },

    SectionTitle { text: String },

    /// Inline skill tags (minimal, modern).
    TagRow { tags: Vec<String> },

    /// Skill cards in two columns, split at the sequence midpoint (creative).
    TagColumns {
        left: Vec<String>,
        right: Vec<String>,
    },

    ExperienceCard {
        position: String,
        company: String,
        duration: String,
        description: String,
        /// Left-accent border treatment (modern).
        accented: bool,
    },

    ProjectCard {
        /// Zero-padded ordinal, "01" onward (creative).
        number: Option<String>,
        title: String,
        description: String,
        technologies: String,
        link: Option<String>,
    },

    /// Horizontal divider before the footer.
    Rule,

    /// Contact details, one line each; empty fields are never included.
    ContactLines { lines: Vec<ContactLine> },

    /// Social links in platform order; absent links are never included.
    SocialRow { links: Vec<SocialLink> },

    /// Contact and social side by side (creative footer).
    SplitFooter {
        contact: Vec<String>,
        social: Vec<SocialLink>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactLine {
    pub kind: ContactKind,
    pub text: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ContactKind {
    Email,
    Phone,
    Location,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SocialLink {
    pub platform: SocialPlatform,
    pub url: String,
}
