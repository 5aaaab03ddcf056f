//! Reshaping API payloads into display content
//!
//! The API serves records in its own shape; these pure functions turn a raw
//! JSON body into the [`SectionContent`] the views render. Dispatch is by
//! [`Section`], and nothing here touches the network.

use crate::api::ApiError;
use crate::content::{BlogPost, Project, Section, SectionContent, Skill, SkillGroup};
use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::Deserialize;
use serde_json::Value;
use std::collections::HashMap;

/// Words per minute assumed when estimating reading time
const READING_WPM: usize = 200;

/// Wire shape of a project record
#[derive(Debug, Deserialize)]
struct ProjectRecord {
    id: i64,
    title: String,
    category: String,
    description: String,
    technologies: Vec<String>,
    #[serde(default)]
    github_url: Option<String>,
    #[serde(default)]
    live_url: Option<String>,
}

/// Wire shape of a flat skill record
#[derive(Debug, Deserialize)]
struct SkillRecord {
    category: String,
    icon: String,
    skill_name: String,
    level: u8,
}

/// Wire shape of a blog post record
#[derive(Debug, Deserialize)]
struct BlogPostRecord {
    id: i64,
    slug: String,
    title: String,
    #[serde(default)]
    excerpt: Option<String>,
    content: String,
    #[serde(default)]
    published_at: Option<String>,
}

/// Reshapes a raw API body into display content for a section
///
/// Malformed bodies surface as [`ApiError::Decode`], which the provider
/// treats like any other fetch failure.
pub fn reshape(section: Section, raw: Value) -> Result<SectionContent, ApiError> {
    match section {
        Section::Hero => Ok(SectionContent::Hero(serde_json::from_value(raw)?)),
        Section::About => Ok(SectionContent::About(serde_json::from_value(raw)?)),
        Section::Skills => {
            let records: Vec<SkillRecord> = serde_json::from_value(raw)?;
            Ok(SectionContent::Skills(group_skills(records)))
        }
        Section::Projects => {
            let records: Vec<ProjectRecord> = serde_json::from_value(raw)?;
            Ok(SectionContent::Projects(
                records.into_iter().map(project_from_record).collect(),
            ))
        }
        Section::Contact => Ok(SectionContent::Contact(serde_json::from_value(raw)?)),
        Section::Blog => {
            let records: Vec<BlogPostRecord> = serde_json::from_value(raw)?;
            Ok(SectionContent::Blog(
                records.into_iter().map(post_from_record).collect(),
            ))
        }
        Section::Resume => Ok(SectionContent::Resume(serde_json::from_value(raw)?)),
    }
}

/// Converts a wire project into a display project
///
/// The optional URL fields come back as the empty string when absent, so the
/// views never deal with missing links.
fn project_from_record(record: ProjectRecord) -> Project {
    Project {
        id: record.id,
        title: record.title,
        category: record.category,
        description: record.description,
        technologies: record.technologies,
        github_url: record.github_url.unwrap_or_default(),
        live_url: record.live_url.unwrap_or_default(),
    }
}

/// Groups flat skill records by category, preserving first-seen order
///
/// The group icon is taken from the first record of each category.
fn group_skills(records: Vec<SkillRecord>) -> Vec<SkillGroup> {
    let mut groups: Vec<SkillGroup> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for record in records {
        let at = match index.get(&record.category) {
            Some(&at) => at,
            None => {
                groups.push(SkillGroup {
                    category: record.category.clone(),
                    icon: record.icon.clone(),
                    skills: Vec::new(),
                });
                index.insert(record.category.clone(), groups.len() - 1);
                groups.len() - 1
            }
        };
        groups[at].skills.push(Skill {
            name: record.skill_name,
            level: record.level,
        });
    }

    groups
}

/// Converts a wire blog post into a display post
///
/// The API carries no tags or reading time; tags stay empty and reading time
/// is estimated from the word count.
fn post_from_record(record: BlogPostRecord) -> BlogPost {
    let read_time_minutes = estimate_read_time(&record.content);
    BlogPost {
        id: record.id,
        slug: record.slug,
        title: record.title,
        date: record
            .published_at
            .as_deref()
            .map(format_published_date)
            .unwrap_or_default(),
        read_time_minutes,
        tags: Vec::new(),
        excerpt: record.excerpt.unwrap_or_default(),
        content: record.content,
    }
}

/// Estimates reading time in minutes, never less than one
fn estimate_read_time(content: &str) -> u32 {
    let words = content.split_whitespace().count();
    (words.div_ceil(READING_WPM)).max(1) as u32
}

/// Renders an API timestamp as a human-readable date
///
/// Accepts RFC 3339, bare ISO datetimes, and bare dates; anything else is
/// passed through unchanged.
fn format_published_date(published_at: &str) -> String {
    if let Ok(dt) = DateTime::parse_from_rfc3339(published_at) {
        return dt.date_naive().format("%B %-d, %Y").to_string();
    }
    if let Ok(dt) = published_at.parse::<NaiveDateTime>() {
        return dt.date().format("%B %-d, %Y").to_string();
    }
    if let Ok(date) = published_at.parse::<NaiveDate>() {
        return date.format("%B %-d, %Y").to_string();
    }
    published_at.to_string()
}
