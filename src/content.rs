mod audit;
mod tables;

use serde::Serialize;
use thiserror::Error;

use crate::glyph::Glyph;

pub use audit::{audit, ContentWarning};
pub use tables::{
    FOOTNOTE, PROFILE, PROJECTS, PROJECTS_HEADER, SKILLS_HEADER, SKILL_GROUPS, SOCIAL_LINKS,
};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContentError {
    #[error("unknown glyph key: {0}")]
    UnknownGlyph(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SocialLink {
    pub name: &'static str,
    pub glyph: Glyph,
    pub glyph_size: u16,
    pub destination: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub image: &'static str,
    pub tags: &'static [&'static str],
    pub source: Option<&'static str>,
    pub demo: Option<&'static str>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ActionKind {
    Source,
    Demo,
}

impl ActionKind {
    pub const fn label(self) -> &'static str {
        match self {
            ActionKind::Source => "Code",
            ActionKind::Demo => "View",
        }
    }

    pub const fn glyph(self) -> Glyph {
        match self {
            ActionKind::Source => Glyph::Code,
            ActionKind::Demo => Glyph::ExternalLink,
        }
    }
}

/// A link button rendered at the bottom of a project card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardAction {
    pub kind: ActionKind,
    pub href: &'static str,
}

impl Project {
    /// Buttons for this card, source first. An absent URI yields no action at all.
    pub fn actions(&self) -> Vec<CardAction> {
        [
            (ActionKind::Source, self.source),
            (ActionKind::Demo, self.demo),
        ]
        .into_iter()
        .filter_map(|(kind, href)| href.map(|href| CardAction { kind, href }))
        .collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Skill {
    pub name: &'static str,
    pub glyph: Glyph,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SkillGroup {
    pub title: &'static str,
    pub skills: &'static [Skill],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SectionHeader {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "text", rename_all = "lowercase")]
pub enum BioFragment {
    Plain(&'static str),
    Highlight(&'static str),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TickerPhrase {
    pub text: &'static str,
    /// Tailwind decoration color for the underline.
    pub accent: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Profile {
    pub name: &'static str,
    pub greeting: &'static str,
    /// Page meta description.
    pub summary: &'static str,
    pub portrait: &'static str,
    pub portrait_alt: &'static str,
    pub phrases: &'static [TickerPhrase],
    pub bio: &'static [BioFragment],
}

/// All static tables in one serializable value.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Snapshot {
    pub profile: &'static Profile,
    pub social_links: &'static [SocialLink],
    pub projects_header: &'static SectionHeader,
    pub projects: &'static [Project],
    pub footnote: &'static str,
    pub skills_header: &'static SectionHeader,
    pub skill_groups: &'static [SkillGroup],
}

pub fn snapshot() -> Snapshot {
    Snapshot {
        profile: &PROFILE,
        social_links: SOCIAL_LINKS,
        projects_header: &PROJECTS_HEADER,
        projects: PROJECTS,
        footnote: FOOTNOTE,
        skills_header: &SKILLS_HEADER,
        skill_groups: SKILL_GROUPS,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn project(source: Option<&'static str>, demo: Option<&'static str>) -> Project {
        Project {
            title: "t",
            description: "d",
            image: "/i.webp",
            tags: &["a"],
            source,
            demo,
        }
    }

    #[test]
    fn test_actions_follow_optional_uris() {
        assert!(project(None, None).actions().is_empty());

        let only_source = project(Some("https://github.com/x/y"), None).actions();
        assert_eq!(
            only_source,
            vec![CardAction {
                kind: ActionKind::Source,
                href: "https://github.com/x/y"
            }]
        );

        let only_demo = project(None, Some("https://demo.example")).actions();
        assert_eq!(only_demo.len(), 1);
        assert_eq!(only_demo[0].kind, ActionKind::Demo);

        let both = project(Some("https://s"), Some("https://d")).actions();
        let kinds = both.iter().map(|a| a.kind).collect::<Vec<_>>();
        assert_eq!(kinds, vec![ActionKind::Source, ActionKind::Demo]);
    }

    #[test]
    fn test_dataset_projects() {
        assert_eq!(PROJECTS.len(), 3);

        let medi = &PROJECTS[1];
        assert_eq!(medi.title, "MediConnect — HACK-36");
        let actions = medi.actions();
        assert_eq!(actions.len(), 1);
        assert_eq!(actions[0].kind, ActionKind::Source);

        let spam = &PROJECTS[2];
        assert!(spam.title.starts_with("Email Spam Classifier"));
        let actions = spam.actions();
        assert_eq!(actions.len(), 2);
        assert_eq!(
            actions[1].href,
            "https://email-spam-classifier-yungstunner.onrender.com"
        );
    }

    #[test]
    fn test_skill_order_is_preserved() {
        let frontend = SKILL_GROUPS
            .iter()
            .find(|g| g.title == "Frontend")
            .expect("frontend group");
        let names = frontend.skills.iter().map(|s| s.name).collect::<Vec<_>>();
        assert_eq!(
            names,
            vec!["React", "TypeScript", "TailwindCSS", "JavaScript", "Git", "GitHub"]
        );
        assert_eq!(SKILL_GROUPS[1].title, "Backend");
        assert_eq!(SKILL_GROUPS[1].skills[0].name, "Node.js");
    }

    #[test]
    fn test_snapshot_json() {
        let value = serde_json::to_value(snapshot()).unwrap();
        assert_eq!(value["projects"].as_array().unwrap().len(), 3);
        assert!(value["projects"][0]["demo"].is_null());
        assert_eq!(value["skill_groups"][0]["skills"][0]["glyph"], "react");
        assert_eq!(value["profile"]["bio"][1]["kind"], "highlight");
        assert_eq!(value["social_links"][0]["glyph"], "mail");
    }
}
