use chrono::{DateTime, Datelike};
use rust_embed::Embed;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use thiserror::Error;

const PORTFOLIO_FILE: &str = "portfolio.json";

static PORTFOLIO: LazyLock<Result<Portfolio, ContentError>> =
    LazyLock::new(|| Portfolio::load(PORTFOLIO_FILE));

#[derive(Embed)]
#[folder = "content"]
pub struct Assets;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContentError {
    #[error("Content file not found: {0}")]
    NotFound(String),
    #[error("Couldn't parse content: {0}")]
    ParseError(String),
}

/// Page anchors in navigation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Home,
    About,
    Projects,
    Skills,
    Contact,
}

impl Section {
    pub const ALL: [Section; 5] = [
        Self::Home,
        Self::About,
        Self::Projects,
        Self::Skills,
        Self::Contact,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::About => "about",
            Self::Projects => "projects",
            Self::Skills => "skills",
            Self::Contact => "contact",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::About => "About",
            Self::Projects => "Projects",
            Self::Skills => "Skills",
            Self::Contact => "Contact",
        }
    }

    pub fn href(&self) -> String {
        format!("#{}", self.id())
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Resume {
    pub href: String,
    pub download_name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Owner {
    pub name: String,
    pub tagline: String,
    pub pitch: String,
    pub resume: Resume,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    Blue,
    Purple,
    Green,
}

impl Tone {
    pub fn badge_class(&self) -> &'static str {
        match self {
            Self::Blue => "bg-blue-50 dark:bg-blue-900 text-blue-600 dark:text-blue-300",
            Self::Purple => "bg-purple-50 dark:bg-purple-900 text-purple-600 dark:text-purple-300",
            Self::Green => "bg-green-50 dark:bg-green-900 text-green-600 dark:text-green-300",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Highlight {
    pub label: String,
    pub tone: Tone,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TimelineEntry {
    pub title: String,
    pub institution: String,
    pub period: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct About {
    pub paragraphs: Vec<String>,
    pub highlights: Vec<Highlight>,
    pub timeline: Vec<TimelineEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Project {
    pub title: String,
    pub description: String,
    pub tech: Vec<String>,
    pub repository: Option<String>,
}

impl Project {
    /// Link target for the card. Projects without a public repository point
    /// back at the page.
    pub fn repository_href(&self) -> &str {
        self.repository.as_deref().unwrap_or("#")
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SkillCategory {
    pub category: String,
    pub items: Vec<String>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LinkKind {
    Email,
    Phone,
    LinkedIn,
    GitHub,
}

impl LinkKind {
    /// `mailto:` and `tel:` links hand off to another app; everything else
    /// opens in a new tab.
    pub fn opens_new_tab(&self) -> bool {
        !matches!(self, Self::Email | Self::Phone)
    }

    pub fn icon_class(&self) -> &'static str {
        match self {
            Self::Email => "extra-email",
            Self::Phone => "extra-phone",
            Self::LinkedIn => "devicon-linkedin-plain",
            Self::GitHub => "devicon-github-plain",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ContactLink {
    pub kind: LinkKind,
    pub label: String,
    pub value: String,
    pub href: String,
}

impl ContactLink {
    pub fn target(&self) -> Option<&'static str> {
        self.kind.opens_new_tab().then_some("_blank")
    }

    pub fn rel(&self) -> Option<&'static str> {
        self.kind.opens_new_tab().then_some("noopener noreferrer")
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Portfolio {
    pub owner: Owner,
    pub about: About,
    pub projects: Vec<Project>,
    pub skills: Vec<SkillCategory>,
    pub contact: Vec<ContactLink>,
    pub footer: Vec<ContactLink>,
}

impl Portfolio {
    pub fn load(name: &str) -> Result<Self, ContentError> {
        let file = Assets::get(name).ok_or_else(|| ContentError::NotFound(name.to_string()))?;
        Self::parse(&file.data)
    }

    pub fn parse(data: &[u8]) -> Result<Self, ContentError> {
        serde_json::from_slice(data).map_err(|e| ContentError::ParseError(e.to_string()))
    }
}

/// The embedded portfolio, parsed on first use.
pub fn portfolio() -> Result<&'static Portfolio, ContentError> {
    PORTFOLIO.as_ref().map_err(Clone::clone)
}

/// Year of the build, shown in the footer copyright line.
pub fn copyright_year() -> i32 {
    build_year(env!("BUILD_TIME")).unwrap_or(2025)
}

fn build_year(stamp: &str) -> Option<i32> {
    DateTime::parse_from_rfc3339(stamp).ok().map(|t| t.year())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_portfolio_loads() {
        let portfolio = portfolio().expect("embedded portfolio should parse");
        assert!(!portfolio.owner.name.is_empty());
        assert!(!portfolio.projects.is_empty());
        assert!(!portfolio.skills.is_empty());
        assert!(portfolio
            .skills
            .iter()
            .all(|s| !s.items.is_empty() && !s.category.is_empty()));
        assert!(portfolio.owner.resume.download_name.ends_with(".pdf"));
    }

    #[test]
    fn test_missing_file() {
        assert_eq!(
            Portfolio::load("nope.json"),
            Err(ContentError::NotFound("nope.json".to_string()))
        );
    }

    #[test]
    fn test_parse_error_is_reported() {
        let err = Portfolio::parse(b"{\"owner\": 3}").unwrap_err();
        assert!(matches!(err, ContentError::ParseError(_)));
        assert!(err.to_string().starts_with("Couldn't parse content"));
    }

    #[test]
    fn test_link_targets() {
        let link = |kind| ContactLink {
            kind,
            label: String::new(),
            value: String::new(),
            href: String::new(),
        };
        assert_eq!(link(LinkKind::Email).target(), None);
        assert_eq!(link(LinkKind::Phone).rel(), None);
        assert_eq!(link(LinkKind::GitHub).target(), Some("_blank"));
        assert_eq!(link(LinkKind::LinkedIn).rel(), Some("noopener noreferrer"));
    }

    #[test]
    fn test_link_kind_names() {
        let kinds: Vec<LinkKind> =
            serde_json::from_str(r#"["email", "phone", "linkedin", "github"]"#)
                .expect("kinds should parse");
        assert_eq!(
            kinds,
            [
                LinkKind::Email,
                LinkKind::Phone,
                LinkKind::LinkedIn,
                LinkKind::GitHub
            ]
        );
    }

    #[test]
    fn test_project_without_repository_links_to_page() {
        let project = Project {
            title: "Portfolio Website".to_string(),
            description: String::new(),
            tech: vec![],
            repository: None,
        };
        assert_eq!(project.repository_href(), "#");
    }

    #[test]
    fn test_sections_in_nav_order() {
        let ids: Vec<_> = Section::ALL.iter().map(Section::id).collect();
        assert_eq!(ids, ["home", "about", "projects", "skills", "contact"]);
        assert_eq!(Section::Skills.href(), "#skills");
    }

    #[test]
    fn test_build_year() {
        assert_eq!(build_year("2024-03-09T12:00:00+00:00"), Some(2024));
        assert_eq!(build_year("yesterday"), None);
        assert!(copyright_year() >= 2024);
    }
}
