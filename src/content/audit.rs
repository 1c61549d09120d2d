use std::{collections::HashSet, fmt};

use http::Uri;

use super::{Project, SocialLink};

/// Something in the content tables that looks wrong but still renders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentWarning {
    MalformedUri {
        owner: &'static str,
        uri: &'static str,
    },
    DuplicateTag {
        project: &'static str,
        tag: &'static str,
    },
    NoTags {
        project: &'static str,
    },
}

impl fmt::Display for ContentWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContentWarning::MalformedUri { owner, uri } => {
                write!(f, "{owner}: malformed link {uri:?}")
            }
            ContentWarning::DuplicateTag { project, tag } => {
                write!(f, "{project}: tag {tag:?} listed more than once")
            }
            ContentWarning::NoTags { project } => write!(f, "{project}: no tags"),
        }
    }
}

/// Links are either `mailto:` with an address or `https://` with a host.
fn is_well_formed(uri: &str) -> bool {
    if let Some(address) = uri.strip_prefix("mailto:") {
        return match address.split_once('@') {
            Some((user, domain)) => !user.is_empty() && domain.contains('.'),
            None => false,
        };
    }
    match uri.parse::<Uri>() {
        Ok(parsed) => parsed.scheme_str() == Some("https") && parsed.host().is_some(),
        Err(_) => false,
    }
}

/// Walk the tables and report anything suspicious. Nothing is rejected; the
/// site renders whatever the tables hold.
pub fn audit(links: &[SocialLink], projects: &[Project]) -> Vec<ContentWarning> {
    let mut warnings = Vec::new();

    for link in links {
        if !is_well_formed(link.destination) {
            warnings.push(ContentWarning::MalformedUri {
                owner: link.name,
                uri: link.destination,
            });
        }
    }

    for project in projects {
        if project.tags.is_empty() {
            warnings.push(ContentWarning::NoTags {
                project: project.title,
            });
        }
        let mut seen = HashSet::new();
        for &tag in project.tags {
            if !seen.insert(tag) {
                warnings.push(ContentWarning::DuplicateTag {
                    project: project.title,
                    tag,
                });
            }
        }
        for uri in [project.source, project.demo].into_iter().flatten() {
            if !is_well_formed(uri) {
                warnings.push(ContentWarning::MalformedUri {
                    owner: project.title,
                    uri,
                });
            }
        }
    }

    warnings
}
