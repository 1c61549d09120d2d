use std::{fmt, str::FromStr};

use serde::{Serialize, Serializer};

use crate::content::ContentError;

/// Every icon the site content can reference.
///
/// Content tables hold a `Glyph`, never a rendered icon; the icon font class is
/// looked up with [`Glyph::class`] when a view is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Glyph {
    Mail,
    WhatsApp,
    Instagram,
    Code,
    ExternalLink,
    React,
    NextJs,
    TypeScript,
    TailwindCss,
    JavaScript,
    Git,
    GitHub,
    NodeJs,
    Express,
    MongoDb,
    MySql,
    Firebase,
    Vercel,
    Cloudflare,
}

impl Glyph {
    pub const ALL: [Glyph; 19] = [
        Glyph::Mail,
        Glyph::WhatsApp,
        Glyph::Instagram,
        Glyph::Code,
        Glyph::ExternalLink,
        Glyph::React,
        Glyph::NextJs,
        Glyph::TypeScript,
        Glyph::TailwindCss,
        Glyph::JavaScript,
        Glyph::Git,
        Glyph::GitHub,
        Glyph::NodeJs,
        Glyph::Express,
        Glyph::MongoDb,
        Glyph::MySql,
        Glyph::Firebase,
        Glyph::Vercel,
        Glyph::Cloudflare,
    ];

    /// Stable key used in serialized content and for lookups.
    pub const fn key(self) -> &'static str {
        match self {
            Glyph::Mail => "mail",
            Glyph::WhatsApp => "whatsapp",
            Glyph::Instagram => "instagram",
            Glyph::Code => "code",
            Glyph::ExternalLink => "external-link",
            Glyph::React => "react",
            Glyph::NextJs => "nextjs",
            Glyph::TypeScript => "typescript",
            Glyph::TailwindCss => "tailwindcss",
            Glyph::JavaScript => "javascript",
            Glyph::Git => "git",
            Glyph::GitHub => "github",
            Glyph::NodeJs => "nodejs",
            Glyph::Express => "express",
            Glyph::MongoDb => "mongodb",
            Glyph::MySql => "mysql",
            Glyph::Firebase => "firebase",
            Glyph::Vercel => "vercel",
            Glyph::Cloudflare => "cloudflare",
        }
    }

    /// Icon font class for this glyph.
    ///
    /// Brand marks come from devicon; generic symbols use the site's own
    /// `extra-*` mask icons defined in `input.css`.
    pub const fn class(self) -> &'static str {
        match self {
            Glyph::Mail => "extra-email",
            Glyph::WhatsApp => "extra-whatsapp",
            Glyph::Instagram => "extra-instagram",
            Glyph::Code => "devicon-github-original",
            Glyph::ExternalLink => "extra-link",
            Glyph::React => "devicon-react-original",
            Glyph::NextJs => "devicon-nextjs-plain",
            Glyph::TypeScript => "devicon-typescript-plain",
            Glyph::TailwindCss => "devicon-tailwindcss-original",
            Glyph::JavaScript => "devicon-javascript-plain",
            Glyph::Git => "devicon-git-plain",
            Glyph::GitHub => "devicon-github-original",
            Glyph::NodeJs => "devicon-nodejs-plain",
            Glyph::Express => "devicon-express-original",
            Glyph::MongoDb => "devicon-mongodb-plain",
            Glyph::MySql => "devicon-mysql-plain",
            Glyph::Firebase => "devicon-firebase-plain",
            Glyph::Vercel => "devicon-vercel-original",
            Glyph::Cloudflare => "devicon-cloudflare-plain",
        }
    }

    pub fn from_key(key: &str) -> Result<Self, ContentError> {
        Self::ALL
            .into_iter()
            .find(|g| g.key() == key)
            .ok_or_else(|| ContentError::UnknownGlyph(key.to_string()))
    }
}

impl FromStr for Glyph {
    type Err = ContentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_key(s)
    }
}

impl fmt::Display for Glyph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl Serialize for Glyph {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.key())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_keys_are_unique_and_resolve() {
        let keys = Glyph::ALL.iter().map(|g| g.key()).collect::<HashSet<_>>();
        assert_eq!(keys.len(), Glyph::ALL.len());

        for glyph in Glyph::ALL {
            assert_eq!(Glyph::from_key(glyph.key()).unwrap(), glyph);
            assert_eq!(glyph.to_string().parse::<Glyph>().unwrap(), glyph);
        }
    }

    #[test]
    fn test_unknown_key() {
        let err = Glyph::from_key("cobol").unwrap_err();
        assert!(matches!(err, ContentError::UnknownGlyph(ref k) if k == "cobol"));
        assert_eq!(err.to_string(), "unknown glyph key: cobol");
    }

    #[test]
    fn test_classes() {
        assert_eq!(Glyph::React.class(), "devicon-react-original");
        assert_eq!(Glyph::Mail.class(), "extra-email");
        assert!(Glyph::ALL
            .iter()
            .all(|g| g.class().starts_with("devicon-") || g.class().starts_with("extra-")));
    }

    #[test]
    fn test_serializes_as_key() {
        let json = serde_json::to_string(&Glyph::TailwindCss).unwrap();
        assert_eq!(json, "\"tailwindcss\"");
    }
}
