//! Page content: hero text, work experience, about text and taglines.
//!
//! The built-in content is used unless a TOML file is given.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::{debug, info};

use crate::error::ContentError;

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Experience {
    pub id: String,
    pub title: String,
    pub subtitle: String,
    pub company: String,
    pub location: String,
    pub duration: String,
    #[serde(default)]
    pub responsibilities: Vec<String>,
    #[serde(default)]
    pub live_demo: Option<String>,
    #[serde(default)]
    pub image: Option<PathBuf>,
    #[serde(default)]
    pub image_alt: Option<String>,
}

impl Experience {
    pub fn image_alt(&self) -> String {
        self.image_alt
            .clone()
            .unwrap_or_else(|| format!("{} project", self.company))
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Hero {
    pub title: String,
    pub subtitle: String,
    #[serde(default)]
    pub paragraphs: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct About {
    pub title: String,
    pub subtitle: String,
    #[serde(default)]
    pub paragraphs: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Portfolio {
    pub logo: String,
    pub hero: Hero,
    pub experiences: Vec<Experience>,
    pub about: About,
    pub taglines: Vec<String>,
}

impl Portfolio {
    /// Reads a portfolio from a TOML file.
    ///
    /// Relative image paths are resolved against the file's directory.
    pub fn load(path: &Path) -> Result<Self, ContentError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ContentError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let mut portfolio: Portfolio =
            toml::from_str(&contents).map_err(|source| ContentError::Parse {
                path: path.to_path_buf(),
                source,
            })?;

        if let Some(base) = path.parent() {
            for experience in portfolio.experiences.iter_mut() {
                if let Some(image) = experience.image.as_mut() {
                    if image.is_relative() {
                        *image = base.join(&*image);
                    }
                }
            }
        }

        portfolio.validate()?;
        info!(
            path = %path.display(),
            experiences = portfolio.experiences.len(),
            taglines = portfolio.taglines.len(),
            "loaded portfolio content"
        );
        Ok(portfolio)
    }

    /// Both carousels need at least one item.
    pub fn validate(&self) -> Result<(), ContentError> {
        if self.experiences.is_empty() {
            return Err(ContentError::Missing("experiences"));
        }
        if self.taglines.is_empty() {
            return Err(ContentError::Missing("taglines"));
        }
        debug!("portfolio content valid");
        Ok(())
    }
}

impl Default for Portfolio {
    fn default() -> Self {
        Self {
            logo: "KALPO".into(),
            hero: Hero {
                title: "I'M KALPOJYOTI KOCH".into(),
                subtitle: "SOFTWARE ENGINEER".into(),
                paragraphs: vec![
                    "A Computer Science grad from Central Institute of Technology (BTech, 2025) \
                     based in Kokrajhar, Assam."
                        .into(),
                    "With a passion for scalable web apps and smart ML systems, I've integrated \
                     AI-ML on AlgoHealth; responsive landing pages with React and TypeScript at \
                     SUZOCO; and created a RAG based Chatbot at NEEPCO."
                        .into(),
                    "Fluent in Python, C++ and tools like Node.js, FastAPI, scikit-learn, plus \
                     AI/ML certifications. I'm excited to tackle software or AI challenges in a \
                     collaborative team."
                        .into(),
                ],
            },
            experiences: vec![
                Experience {
                    id: "nielit".into(),
                    title: "INTERN".into(),
                    subtitle: "AI/ML".into(),
                    company: "NIELIT".into(),
                    location: "Kokrajhar, Assam".into(),
                    duration: "Aug 2025 - Present".into(),
                    responsibilities: vec!["Working on a Cough-Based Respiratory Screener".into()],
                    live_demo: None,
                    image: None,
                    image_alt: Some("NIELIT AI/ML project".into()),
                },
                Experience {
                    id: "suzoco".into(),
                    title: "INTERN".into(),
                    subtitle: "Web Development".into(),
                    company: "SUZOCO".into(),
                    location: "Kokrajhar, Assam".into(),
                    duration: "Mar 2025 - Jun 2025".into(),
                    responsibilities: vec![
                        "Developed a responsive, high performance landing page using React, \
                         TypeScript and Vite"
                            .into(),
                        "Collaborated with design and backend teams to integrate dynamic content \
                         and ensure cross-browser compatibility"
                            .into(),
                    ],
                    live_demo: Some("https://suzocoservices.in/".into()),
                    image: None,
                    image_alt: Some("SUZOCO website landing page".into()),
                },
                Experience {
                    id: "neepco".into(),
                    title: "INTERN".into(),
                    subtitle: "AI/ML".into(),
                    company: "NEEPCO".into(),
                    location: "Shillong, Meghalaya".into(),
                    duration: "Jul 2024 - Aug 2024".into(),
                    responsibilities: vec![
                        "Built a Retrieval-Augmented Generation chatbot for NEEPCO's DOP \
                         delivering traceable, policy-backed answers via semantic retrieval and \
                         fine-grained clause chunking optimized for CPU-only constraints"
                            .into(),
                        "Deployed with a quantized TinyLlama backend and sequential request \
                         handling on free-tier infrastructure to improve reliability, timeout \
                         control, and response accuracy for policy queries"
                            .into(),
                    ],
                    live_demo: Some("https://neepcodop.netlify.app/".into()),
                    image: None,
                    image_alt: Some("NEEPCO DOP chatbot interface".into()),
                },
            ],
            about: About {
                title: "WHO AM I".into(),
                subtitle: "MY JOURNEY".into(),
                paragraphs: vec![
                    "Your about content goes here...".into(),
                    "More about content...".into(),
                ],
            },
            taglines: vec![
                "SOFTWARE ENGINEER".into(),
                "AI/ML DEVELOPER".into(),
                "WEB DEVELOPER".into(),
            ],
        }
    }
}
