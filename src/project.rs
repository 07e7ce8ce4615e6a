use std::fmt;
use std::fmt::{Display, Formatter};

use serde::Serialize;

/// Which decorative skyline illustration the site draws for a project.
/// Purely presentational, no behavioral meaning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum BuildingType {
    #[serde(rename = "modern")]
    Modern,
    #[serde(rename = "classic")]
    Classic,
    #[serde(rename = "industrial")]
    Industrial,
    #[serde(rename = "residential")]
    Residential,
}

impl Display for BuildingType {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let label = match self {
            BuildingType::Modern => "modern",
            BuildingType::Classic => "classic",
            BuildingType::Industrial => "industrial",
            BuildingType::Residential => "residential",
        };
        write!(f, "{}", label)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectLink {
    pub label: String,
    pub url: String,
}

/// A showcased project. Same lifecycle as `BlogPost`: authored at build
/// time, immutable afterwards.
///
/// `links` may be empty and `note` absent - neither is an error state.
/// `period` is display-only free text.
#[derive(Debug, Clone, Serialize)]
pub struct Project {
    pub id: String,
    pub title: String,
    pub description: String,
    pub long_description: String,
    pub technologies: Vec<String>,
    pub period: String,
    pub links: Vec<ProjectLink>,
    pub building_type: BuildingType,
    pub note: Option<String>,
}

impl Project {
    /// Splits the long description on blank lines, the way the detail page
    /// renders it. Stray surrounding whitespace is trimmed per paragraph.
    pub fn paragraphs(&self) -> Vec<&str> {
        self.long_description
            .split("\n\n")
            .map(|p| p.trim())
            .filter(|p| !p.is_empty())
            .collect()
    }
}

impl Display for Project {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "id={}, period={}, building={}\ntitle={}\n{}",
               self.id,
               self.period,
               self.building_type,
               self.title,
               self.description,
        )
    }
}

#[cfg(test)]
mod tests {
    use crate::test_data::sample_project;

    use super::*;

    #[test]
    fn test_paragraphs() {
        let mut project = sample_project("gpt2-cuda");
        project.long_description =
            "First paragraph about kernels.\n\nSecond paragraph about profiling.\n\n".to_string();
        let paragraphs = project.paragraphs();
        assert_eq!(paragraphs, [
            "First paragraph about kernels.",
            "Second paragraph about profiling.",
        ]);
    }

    #[test]
    fn test_single_paragraph() {
        let mut project = sample_project("cosmos-os");
        project.long_description = "Just one block of text.".to_string();
        assert_eq!(project.paragraphs(), ["Just one block of text."]);
    }

    #[test]
    fn test_empty_links_and_note_are_valid() {
        let project = sample_project("meoow-processor");
        assert!(project.links.is_empty());
        assert!(project.note.is_none());
    }

    #[test]
    fn test_links_and_note_present() {
        let mut project = sample_project("meoow-processor");
        project.links.push(ProjectLink {
            label: "GitHub".to_string(),
            url: "https://github.com/example/meoow".to_string(),
        });
        project.note = Some("Source code is private per course policy".to_string());

        let json = serde_json::to_value(&project).unwrap();
        assert_eq!(json["links"][0]["label"], "GitHub");
        assert_eq!(json["links"][0]["url"], "https://github.com/example/meoow");
        assert_eq!(json["note"], "Source code is private per course policy");
    }

    #[test]
    fn test_building_type_json_form() {
        let json = serde_json::to_string(&BuildingType::Industrial).unwrap();
        assert_eq!(json, "\"industrial\"");
    }
}
