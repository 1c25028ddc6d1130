//! Portfolio content shown alongside the backdrop.
//!
//! The host can replace the built-in placeholder at runtime with a JSON
//! document. Nothing is validated beyond parsing.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Socials {
    pub github: String,
    pub linkedin: String,
    pub mail: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stat {
    pub label: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: u32,
    pub title: String,
    pub description: String,
    /// Preview image path.
    #[serde(default)]
    pub preview: String,
    #[serde(default)]
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Profile {
    pub name: String,
    pub title: String,
    pub location: String,
    pub about: String,
    pub avatar: String,
    pub resume_url: String,
    pub socials: Socials,
    pub stats: Vec<Stat>,
    pub skills: Vec<String>,
    pub projects: Vec<Project>,
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            name: "Your Name".into(),
            title: "Software Engineer".into(),
            location: "Somewhere, Earth".into(),
            about: "A short introduction goes here.".into(),
            avatar: "/avatar.png".into(),
            resume_url: "/resume.pdf".into(),
            socials: Socials {
                github: "https://github.com/".into(),
                linkedin: "https://www.linkedin.com/".into(),
                mail: "mailto:hello@example.com".into(),
            },
            stats: vec![
                Stat { label: "Years".into(), value: "5+".into() },
                Stat { label: "Projects".into(), value: "20+".into() },
            ],
            skills: vec!["Rust".into(), "WebAssembly".into(), "TypeScript".into()],
            projects: vec![Project {
                id: 1,
                title: "Example Project".into(),
                description: "What it does and why it matters.".into(),
                preview: "/previews/example.png".into(),
                url: "https://example.com/".into(),
            }],
        }
    }
}

impl Profile {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_document_keeps_placeholder_fields() {
        let p = Profile::from_json(r#"{"name":"Ada","socials":{"github":"gh"}}"#).unwrap();
        assert_eq!(p.name, "Ada");
        assert_eq!(p.title, Profile::default().title);
        assert_eq!(p.socials.github, "gh");
        assert_eq!(p.socials.mail, "");
    }

    #[test]
    fn projects_and_stats_parse() {
        let p = Profile::from_json(
            r#"{"resume_url":"/cv.pdf",
                "stats":[{"label":"Talks","value":"3"}],
                "projects":[{"id":7,"title":"A","description":"B"}]}"#,
        )
        .unwrap();
        assert_eq!(p.resume_url, "/cv.pdf");
        assert_eq!(p.stats[0].value, "3");
        assert_eq!(p.projects[0].id, 7);
        assert_eq!(p.projects[0].preview, "");
    }

    #[test]
    fn malformed_document_is_an_error() {
        assert!(Profile::from_json(r#"{"name": 3}"#).is_err());
        assert!(Profile::from_json("not json").is_err());
        assert!(Profile::from_json(r#"{"projects":[{"title":"no id"}]}"#).is_err());
    }

    #[test]
    fn default_survives_json() {
        let p = Profile::default();
        assert_eq!(Profile::from_json(&p.to_json().unwrap()).unwrap(), p);
    }
}
