//! Authored site content.
//!
//! Every list the page renders lives in a JSON document under `content/`,
//! embedded at compile time and parsed once at startup. Nothing here is
//! mutated after [`Content::load`] returns.

use std::collections::HashSet;

use serde::{de::DeserializeOwned, Deserialize, Serialize};

use crate::error::ContentError;

const SITE_JSON: &str = include_str!("../content/site.json");
const PROJECTS_JSON: &str = include_str!("../content/projects.json");
const SERVICES_JSON: &str = include_str!("../content/services.json");
const TESTIMONIALS_JSON: &str = include_str!("../content/testimonials.json");
const TECH_STACK_JSON: &str = include_str!("../content/tech_stack.json");
const HIGHLIGHTS_JSON: &str = include_str!("../content/highlights.json");

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: u32,
    pub name: String,
    pub category: String,
    pub img_url: String,
    pub description: String,
    pub technologies: Vec<String>,
    pub details: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Service {
    pub id: u32,
    pub name: String,
    pub title: String,
    pub image: String,
    pub description: String,
    pub category: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Testimonial {
    pub id: u32,
    pub name: String,
    pub role: String,
    pub image: String,
    pub content: String,
    pub rating: u8,
    pub tech: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Accent {
    Blue,
    Purple,
    Emerald,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TechItem {
    pub name: String,
    pub icon: String,
    pub level: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TechGroup {
    pub name: String,
    pub accent: Accent,
    pub items: Vec<TechItem>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HighlightIcon {
    Code,
    Gauge,
    Users,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Highlight {
    pub number: String,
    pub title: String,
    pub description: String,
    pub icon: HighlightIcon,
    pub gradient: String,
    pub bg_gradient: String,
    pub preview: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Link {
    pub name: String,
    pub path: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    pub address: String,
    pub email: String,
    pub phone: String,
    pub phone_href: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteInfo {
    pub brand: String,
    pub company_name: String,
    pub logo: String,
    pub nav_links: Vec<Link>,
    pub policy_links: Vec<Link>,
    pub contact: Contact,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Content {
    pub site: SiteInfo,
    pub projects: Vec<Project>,
    pub services: Vec<Service>,
    pub testimonials: Vec<Testimonial>,
    pub tech_stack: Vec<TechGroup>,
    pub highlights: Vec<Highlight>,
}

fn parse<T: DeserializeOwned>(document: &'static str, raw: &str) -> Result<T, ContentError> {
    serde_json::from_str(raw).map_err(|source| ContentError::Parse { document, source })
}

fn require(document: &'static str, field: &'static str, value: &str) -> Result<(), ContentError> {
    if value.trim().is_empty() {
        return Err(ContentError::EmptyField { document, field });
    }
    Ok(())
}

impl Content {
    /// Parses and validates the embedded content documents.
    pub fn load() -> Result<Self, ContentError> {
        let content = Self {
            site: parse("site.json", SITE_JSON)?,
            projects: parse("projects.json", PROJECTS_JSON)?,
            services: parse("services.json", SERVICES_JSON)?,
            testimonials: parse("testimonials.json", TESTIMONIALS_JSON)?,
            tech_stack: parse("tech_stack.json", TECH_STACK_JSON)?,
            highlights: parse("highlights.json", HIGHLIGHTS_JSON)?,
        };
        content.validate()?;

        log::debug!(
            "content loaded: {} projects, {} services, {} testimonials",
            content.projects.len(),
            content.services.len(),
            content.testimonials.len()
        );
        Ok(content)
    }

    pub fn validate(&self) -> Result<(), ContentError> {
        let mut ids = HashSet::new();
        for project in &self.projects {
            if !ids.insert(project.id) {
                return Err(ContentError::DuplicateProjectId(project.id));
            }
            require("projects.json", "name", &project.name)?;
            require("projects.json", "category", &project.category)?;
        }

        for group in &self.tech_stack {
            require("tech_stack.json", "name", &group.name)?;
            for item in &group.items {
                if item.level > 100 {
                    return Err(ContentError::LevelOutOfRange {
                        name: item.name.clone(),
                        level: item.level,
                    });
                }
            }
        }

        for testimonial in &self.testimonials {
            if !(1..=5).contains(&testimonial.rating) {
                return Err(ContentError::RatingOutOfRange {
                    name: testimonial.name.clone(),
                    rating: testimonial.rating,
                });
            }
        }

        require("site.json", "companyName", &self.site.company_name)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_content_loads() {
        let content = Content::load().unwrap();
        assert_eq!(content.projects.len(), 4);
        assert_eq!(content.services.len(), 5);
        assert_eq!(content.testimonials.len(), 3);
        assert_eq!(content.tech_stack.len(), 3);
        assert_eq!(content.highlights.len(), 3);
        assert_eq!(content.site.company_name, "Abreshevents");
    }

    #[test]
    fn project_fields_use_camel_case() {
        let raw = r#"[{"id":7,"name":"n","category":"c","imgUrl":"/images/x.png",
            "description":"d","technologies":["Rust"],"details":[]}]"#;
        let projects: Vec<Project> = parse("projects.json", raw).unwrap();
        assert_eq!(projects[0].img_url, "/images/x.png");
        assert_eq!(projects[0].technologies, vec!["Rust".to_string()]);
    }

    #[test]
    fn malformed_document_names_the_file() {
        let err = parse::<Vec<Project>>("projects.json", "[{").unwrap_err();
        assert!(matches!(err, ContentError::Parse { document: "projects.json", .. }));
        assert_eq!(err.to_string(), "failed to parse projects.json");
    }

    #[test]
    fn duplicate_project_ids_are_rejected() {
        let mut content = Content::load().unwrap();
        content.projects[1].id = content.projects[0].id;
        let err = content.validate().unwrap_err();
        assert!(matches!(err, ContentError::DuplicateProjectId(1)));
    }

    #[test]
    fn blank_category_is_rejected() {
        let mut content = Content::load().unwrap();
        content.projects[2].category = "  ".into();
        let err = content.validate().unwrap_err();
        assert!(matches!(
            err,
            ContentError::EmptyField {
                document: "projects.json",
                field: "category"
            }
        ));
    }

    #[test]
    fn tech_level_above_hundred_is_rejected() {
        let mut content = Content::load().unwrap();
        content.tech_stack[0].items[0].level = 101;
        let err = content.validate().unwrap_err();
        assert_eq!(err.to_string(), "tech level for React is 101, expected 0..=100");
    }

    #[test]
    fn zero_star_rating_is_rejected() {
        let mut content = Content::load().unwrap();
        content.testimonials[0].rating = 0;
        assert!(matches!(
            content.validate(),
            Err(ContentError::RatingOutOfRange { rating: 0, .. })
        ));
    }
}
