//! Portfolio sections and the display types the UI renders
//!
//! Every piece of portfolio data belongs to one [`Section`]. Each section has
//! bundled fallback content (see [`fallback`]) and an API endpoint that can
//! replace it at runtime.

pub mod fallback;

use serde::Deserialize;

/// The portfolio sections, in tab order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    /// Landing banner with name and tagline
    Hero,
    /// Biography and career highlights
    About,
    /// Skills grouped by category
    Skills,
    /// Portfolio projects
    Projects,
    /// Contact details
    Contact,
    /// Blog posts
    Blog,
    /// Work experience, education and certifications
    Resume,
}

impl Section {
    /// Returns a slice containing all sections in tab order
    pub fn all() -> &'static [Section] {
        &[
            Section::Hero,
            Section::About,
            Section::Skills,
            Section::Projects,
            Section::Contact,
            Section::Blog,
            Section::Resume,
        ]
    }

    /// Returns the display title for the section
    pub fn title(&self) -> &'static str {
        match self {
            Section::Hero => "Hero",
            Section::About => "About",
            Section::Skills => "Skills",
            Section::Projects => "Projects",
            Section::Contact => "Contact",
            Section::Blog => "Blog",
            Section::Resume => "Resume",
        }
    }

    /// Returns the API endpoint serving this section
    ///
    /// Also used as the cache invalidation prefix for the section.
    pub fn endpoint(&self) -> &'static str {
        match self {
            Section::Hero => "/api/hero",
            Section::About => "/api/about",
            Section::Skills => "/api/skills",
            Section::Projects => "/api/projects",
            Section::Contact => "/api/contact",
            Section::Blog => "/api/blog",
            Section::Resume => "/api/resume",
        }
    }

    /// Parses a section name as given on the command line
    ///
    /// Matching is case-insensitive and ignores surrounding whitespace.
    /// Returns `None` for unknown names.
    pub fn from_name(s: &str) -> Option<Section> {
        match s.to_lowercase().trim() {
            "hero" => Some(Section::Hero),
            "about" => Some(Section::About),
            "skills" => Some(Section::Skills),
            "projects" => Some(Section::Projects),
            "contact" => Some(Section::Contact),
            "blog" => Some(Section::Blog),
            "resume" => Some(Section::Resume),
            _ => None,
        }
    }
}

/// Landing banner content
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Hero {
    /// Full name
    pub name: String,
    /// One-line tagline under the name
    pub subtitle: String,
    /// Short introduction paragraph
    pub description: String,
}

/// A headline number shown next to the biography ("7+ Years Experience")
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Highlight {
    /// The number or figure
    pub number: String,
    /// What the figure counts
    pub label: String,
}

/// Biography content
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct About {
    /// Full name
    pub name: String,
    /// Professional title
    pub title: String,
    /// Multi-paragraph biography
    pub description: String,
    /// Headline figures
    #[serde(default)]
    pub highlights: Vec<Highlight>,
}

/// A single skill with a proficiency level
#[derive(Debug, Clone, PartialEq)]
pub struct Skill {
    /// Skill name
    pub name: String,
    /// Proficiency from 0 to 100
    pub level: u8,
}

/// Skills sharing a category, rendered as one block
#[derive(Debug, Clone, PartialEq)]
pub struct SkillGroup {
    /// Category name
    pub category: String,
    /// Emoji icon shown next to the category
    pub icon: String,
    /// Skills in this category
    pub skills: Vec<Skill>,
}

/// A portfolio project
#[derive(Debug, Clone, PartialEq)]
pub struct Project {
    /// Unique identifier
    pub id: i64,
    /// Project title
    pub title: String,
    /// Short category label ("iOS Application")
    pub category: String,
    /// What the project does
    pub description: String,
    /// Technologies used
    pub technologies: Vec<String>,
    /// Repository link, empty when not public
    pub github_url: String,
    /// Live product link, empty when unavailable
    pub live_url: String,
}

/// Contact details
///
/// Handle fields hold what is shown on screen; the matching `*_url` fields
/// hold full links where the source provides them.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Contact {
    /// Email address
    pub email: String,
    /// LinkedIn handle
    pub linkedin: Option<String>,
    /// GitHub handle
    pub github: Option<String>,
    /// Instagram handle
    pub instagram: Option<String>,
    /// WhatsApp number
    pub whatsapp: Option<String>,
    /// Phone number
    pub phone: Option<String>,
    /// LinkedIn profile link
    pub linkedin_url: Option<String>,
    /// GitHub profile link
    pub github_url: Option<String>,
    /// Instagram profile link
    pub instagram_url: Option<String>,
    /// WhatsApp chat link
    pub whatsapp_url: Option<String>,
}

/// A blog post
#[derive(Debug, Clone, PartialEq)]
pub struct BlogPost {
    /// Unique identifier
    pub id: i64,
    /// URL-safe slug
    pub slug: String,
    /// Post title
    pub title: String,
    /// Human-readable publication date, empty when unpublished
    pub date: String,
    /// Estimated reading time in minutes
    pub read_time_minutes: u32,
    /// Topic tags
    pub tags: Vec<String>,
    /// One-paragraph summary
    pub excerpt: String,
    /// Full post body (markdown, rendered as plain text)
    pub content: String,
}

/// One job on the resume
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Experience {
    /// Role title
    pub title: String,
    /// Employer and location
    pub company: String,
    /// Employment period ("January 2020 - Present")
    pub period: String,
    /// Responsibility bullet points
    #[serde(default)]
    pub description: Vec<String>,
}

/// One entry in the education history
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Education {
    /// Degree or qualification name
    pub degree: String,
    /// Institution and location
    pub school: String,
    /// Attendance period
    pub period: String,
    /// Free-form note, often empty
    #[serde(default)]
    pub description: String,
}

/// Resume content
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Resume {
    /// Work history, most recent first
    pub experience: Vec<Experience>,
    /// Education history, most recent first
    pub education: Vec<Education>,
    /// Certification names
    #[serde(default)]
    pub certifications: Vec<String>,
}

/// Content for one section, whichever section it is
#[derive(Debug, Clone, PartialEq)]
pub enum SectionContent {
    Hero(Hero),
    About(About),
    Skills(Vec<SkillGroup>),
    Projects(Vec<Project>),
    Contact(Contact),
    Blog(Vec<BlogPost>),
    Resume(Resume),
}

impl SectionContent {
    /// Returns which section this content belongs to
    pub fn section(&self) -> Section {
        match self {
            SectionContent::Hero(_) => Section::Hero,
            SectionContent::About(_) => Section::About,
            SectionContent::Skills(_) => Section::Skills,
            SectionContent::Projects(_) => Section::Projects,
            SectionContent::Contact(_) => Section::Contact,
            SectionContent::Blog(_) => Section::Blog,
            SectionContent::Resume(_) => Section::Resume,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_returns_seven_sections() {
        let sections = Section::all();
        assert_eq!(sections.len(), 7);
        assert_eq!(sections[0], Section::Hero);
        assert_eq!(sections[6], Section::Resume);
    }

    #[test]
    fn test_every_section_has_a_distinct_endpoint() {
        let endpoints: Vec<&str> = Section::all().iter().map(|s| s.endpoint()).collect();
        for (i, a) in endpoints.iter().enumerate() {
            for (j, b) in endpoints.iter().enumerate() {
                if i != j {
                    assert_ne!(a, b);
                }
            }
        }
    }

    #[test]
    fn test_endpoint_paths() {
        assert_eq!(Section::Hero.endpoint(), "/api/hero");
        assert_eq!(Section::Projects.endpoint(), "/api/projects");
        assert_eq!(Section::Blog.endpoint(), "/api/blog");
    }

    #[test]
    fn test_from_name_known_sections() {
        assert_eq!(Section::from_name("projects"), Some(Section::Projects));
        assert_eq!(Section::from_name("skills"), Some(Section::Skills));
        assert_eq!(Section::from_name("about"), Some(Section::About));
        assert_eq!(Section::from_name("hero"), Some(Section::Hero));
        assert_eq!(Section::from_name("contact"), Some(Section::Contact));
        assert_eq!(Section::from_name("blog"), Some(Section::Blog));
        assert_eq!(Section::from_name("resume"), Some(Section::Resume));
    }

    #[test]
    fn test_from_name_is_case_insensitive() {
        assert_eq!(Section::from_name("PROJECTS"), Some(Section::Projects));
        assert_eq!(Section::from_name("Blog"), Some(Section::Blog));
    }

    #[test]
    fn test_from_name_trims_whitespace() {
        assert_eq!(Section::from_name("  hero  "), Some(Section::Hero));
        assert_eq!(Section::from_name("\tresume\n"), Some(Section::Resume));
    }

    #[test]
    fn test_from_name_rejects_unknown_names() {
        assert_eq!(Section::from_name("weather"), None);
        assert_eq!(Section::from_name(""), None);
        assert_eq!(Section::from_name("blogs"), None);
    }

    #[test]
    fn test_section_content_reports_its_section() {
        let hero = SectionContent::Hero(Hero {
            name: "Test".to_string(),
            subtitle: "Subtitle".to_string(),
            description: "Description".to_string(),
        });
        assert_eq!(hero.section(), Section::Hero);

        let skills = SectionContent::Skills(vec![]);
        assert_eq!(skills.section(), Section::Skills);

        let blog = SectionContent::Blog(vec![]);
        assert_eq!(blog.section(), Section::Blog);
    }
}
