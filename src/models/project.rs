// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Portfolio catalog data structures.
//!
//! This module defines the project records shown on the page and the
//! catalog that groups them together with the owner's contact details.

use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Sentinel value in catalog files meaning "no code link".
const NO_CODE_LINK: &str = "#";

/// A single portfolio entry.
///
/// Records are defined once when the catalog is built and never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: u32,
    pub title: String,
    pub description: String,
    /// URL of a directly playable or stream-hosted video.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video_url: Option<String>,
    /// URL of a page meant to be shown inside an embedded preview.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iframe_url: Option<String>,
    /// Source repository link, or the `"#"` sentinel for none.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code_url: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl Project {
    /// The code-repository link, if the record carries a real one.
    pub fn code_link(&self) -> Option<&str> {
        self.code_url
            .as_deref()
            .filter(|url| *url != NO_CODE_LINK && !url.is_empty())
    }

    /// Whether the record references any media at all.
    pub fn has_media(&self) -> bool {
        self.video_url.is_some() || self.iframe_url.is_some()
    }
}

/// Complete catalog: page identity, contact links, and the project list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    pub owner: String,
    pub tagline: String,
    pub email: String,
    pub github_url: String,
    pub linkedin_url: String,
    /// Background media for the hero banner.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hero_media: Option<String>,
    pub projects: Vec<Project>,
}

impl Catalog {
    /// The compiled-in catalog shown when no file has been loaded.
    pub fn builtin() -> Self {
        Self {
            owner: "Nick Murawski".to_string(),
            tagline: "Things I make!".to_string(),
            email: "nickmski30@gmail.com".to_string(),
            github_url: "https://github.com/nickMski".to_string(),
            linkedin_url: "https://www.linkedin.com/in/nick-murawski-495980328".to_string(),
            hero_media: Some(
                "https://raw.githubusercontent.com/nickMski/backupSite/main/public/videos/houdiniFlip.mp4"
                    .to_string(),
            ),
            projects: vec![
                Project {
                    id: 1,
                    title: "AI Liquid Detection Model and Webapp (Group Project)".to_string(),
                    description: concat!(
                        "• Served as the primary project communicator, presenting the AI club ",
                        "project to stakeholders and team members\n\n",
                        "• Aided in key aspects of model training and web application development, ",
                        "leveraging skills in .NET framework and Azure cloud technologies\n\n",
                        "• Implemented API integrations and containerization using Azure, ",
                        "demonstrating proficiency in cloud-based software deployment"
                    )
                    .to_string(),
                    video_url: Some("https://www.youtube.com/embed/UxzjRXbXRTk".to_string()),
                    iframe_url: None,
                    code_url: Some("https://github.com/nickMski/Liquid-Detection-Model".to_string()),
                    tags: vec![
                        "React".to_string(),
                        "PyTorch".to_string(),
                        ".NET".to_string(),
                        "Computer Vision".to_string(),
                    ],
                },
                Project {
                    id: 2,
                    title: "Mandelbrot Fractal Explorer (Group Project)".to_string(),
                    description: concat!(
                        "• Developed mathematical algorithms to generate complex fractal imagery ",
                        "using OpenGL shading techniques\n\n",
                        "• Translated advanced mathematical concepts into precise computational ",
                        "graphics rendering\n\n",
                        "• Utilized shader programming to create sophisticated mathematical ",
                        "visualization techniques"
                    )
                    .to_string(),
                    video_url: Some("https://www.youtube.com/embed/AQyYwTJyVwE".to_string()),
                    iframe_url: None,
                    code_url: Some("https://github.com/ChaseMcClellan/MandlebrotDemo.git".to_string()),
                    tags: vec!["C++".to_string(), "OpenGL".to_string(), "Shaders".to_string()],
                },
                Project {
                    id: 3,
                    title: "Procedural Tree Generator (Solo Project)".to_string(),
                    description: concat!(
                        "• Researched and designed an advanced L-system based tree generation tool\n\n",
                        "• Logically formulated organic, parametric tree structures using Python ",
                        "and VEX algorithms\n\n",
                        "• Leveraged algorithmic growth rules and spatial constraints to produce ",
                        "naturalistic, dynamically branching geometries"
                    )
                    .to_string(),
                    video_url: Some("https://youtube.com/embed/iFfz0iqc2LU".to_string()),
                    iframe_url: None,
                    code_url: Some("https://github.com/nickMski/Houdini-lsystem-generator".to_string()),
                    tags: vec![
                        "VEX".to_string(),
                        "Python".to_string(),
                        "Houdini".to_string(),
                        "Parameters".to_string(),
                    ],
                },
                Project {
                    id: 4,
                    title: "Post Malone Music Quiz Game (Solo Project)".to_string(),
                    description: concat!(
                        "• Designed and developed an interactive web-based game using Adobe ",
                        "Animate and JavaScript\n\n",
                        "• Created an engaging gameplay mechanic centered on testing players' ",
                        "knowledge of Post Malone's song lyrics\n\n",
                        "• Utilized JavaScript to develop dynamic game interactions and scoring ",
                        "mechanisms"
                    )
                    .to_string(),
                    video_url: None,
                    iframe_url: Some(
                        "https://nickmski.github.io/intAniFinal/intAniPostGame.html".to_string(),
                    ),
                    code_url: Some("https://github.com/nickMski/Post-Coast-to-Coast".to_string()),
                    tags: vec![
                        "JavaScript".to_string(),
                        "Adobe Animate".to_string(),
                        "Animation".to_string(),
                        "Post Malone".to_string(),
                    ],
                },
                Project {
                    id: 5,
                    title: "Music Video Production (Solo Project)".to_string(),
                    description: concat!(
                        "• Demonstrated proficiency in video production techniques and ",
                        "post-production editing\n\n",
                        "• Produced a professional-quality music video for a track by a family ",
                        "member (cousin)\n\n",
                        "• I tried to have fun with it, and – perhaps as a result – it turned ",
                        "out very well!"
                    )
                    .to_string(),
                    video_url: Some("https://www.youtube.com/embed/jkRDa4CtWos".to_string()),
                    iframe_url: None,
                    code_url: Some(NO_CODE_LINK.to_string()),
                    tags: vec![
                        "Adobe".to_string(),
                        "Cinematography".to_string(),
                        "Editing".to_string(),
                    ],
                },
            ],
        }
    }

    /// Check catalog consistency. Project ids must be unique.
    pub fn validate(&self) -> Result<()> {
        let mut seen = HashSet::new();
        for project in &self.projects {
            if !seen.insert(project.id) {
                bail!("duplicate project id: {}", project.id);
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_catalog_is_valid() {
        let catalog = Catalog::builtin();
        assert!(catalog.validate().is_ok());
        assert_eq!(catalog.projects.len(), 5);
    }

    #[test]
    fn test_code_link_sentinel_means_none() {
        let catalog = Catalog::builtin();
        let music_video = catalog.projects.iter().find(|p| p.id == 5).unwrap();
        assert_eq!(music_video.code_link(), None);

        let liquid = catalog.projects.iter().find(|p| p.id == 1).unwrap();
        assert_eq!(
            liquid.code_link(),
            Some("https://github.com/nickMski/Liquid-Detection-Model")
        );
    }

    #[test]
    fn test_validate_rejects_duplicate_ids() {
        let mut catalog = Catalog::builtin();
        let duplicate = catalog.projects[0].clone();
        catalog.projects.push(duplicate);
        assert!(catalog.validate().is_err());
    }

    #[test]
    fn test_has_media() {
        let mut project = Catalog::builtin().projects[0].clone();
        assert!(project.has_media());
        project.video_url = None;
        project.iframe_url = None;
        assert!(!project.has_media());
    }
}
