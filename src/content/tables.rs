use super::{
    BioFragment, Profile, Project, SectionHeader, Skill, SkillGroup, SocialLink, TickerPhrase,
};
use crate::glyph::Glyph;

pub static PROFILE: Profile = Profile {
    name: "Subhash Chandra",
    greeting: "Hi, I'm",
    summary: "Subhash Chandra, MERN stack developer: featured projects and tech stack.",
    portrait: "/images/hero/subhash.jpeg",
    portrait_alt: "Subhash Chandra - profile photo",
    phrases: &[
        TickerPhrase {
            text: "DSA Enthusiast",
            accent: "decoration-blue-500",
        },
        TickerPhrase {
            text: "Fullstack Dev",
            accent: "decoration-red-500",
        },
    ],
    bio: &[
        BioFragment::Plain("I'm "),
        BioFragment::Highlight("Subhash Chandra"),
        BioFragment::Plain(", a passionate "),
        BioFragment::Highlight("MERN Stack Developer"),
        BioFragment::Plain(
            " dedicated to building dynamic, high-performance digital experiences. From crafting sleek, responsive ",
        ),
        BioFragment::Highlight("frontends"),
        BioFragment::Plain(" in React to architecting scalable "),
        BioFragment::Highlight("backends"),
        BioFragment::Plain(
            " with Node.js and MongoDB, I bring ideas to life with clean code, modern design, and seamless functionality.",
        ),
    ],
};

// Instagram is kept out of the list until the profile URL is real.
pub const SOCIAL_LINKS: &[SocialLink] = &[
    SocialLink {
        name: "Email",
        glyph: Glyph::Mail,
        glyph_size: 25,
        destination: "mailto:subhashc2707.com",
    },
    SocialLink {
        name: "WhatsApp",
        glyph: Glyph::WhatsApp,
        glyph_size: 20,
        destination: "https://wa.me/+916396304269",
    },
];

pub static PROJECTS_HEADER: SectionHeader = SectionHeader {
    title: "Projects",
    subtitle: "Featured",
    description: "A selection of my recent work demonstrating my skills and experience.",
};

pub const FOOTNOTE: &str = "Delivered 15+ confidential projects across web and mobile platforms.";

pub const PROJECTS: &[Project] = &[
    Project {
        title: "QuickStay — Hotel Booking Platform",
        description: "Hotel booking web app featuring live availability, filters, and location-aware search for multiple concurrent users. Implemented secure booking flow with JWT authentication, role-based access (Admin/Guest), and booking history tracking. Integrated an admin dashboard for listings, pricing, and availability management. Deployed on Vercel with automated build & deployment simulating a CI/CD pipeline.",
        image: "/images/projects/mpc.webp",
        tags: &[
            "React.js",
            "Node.js",
            "Express.js",
            "MongoDB",
            "Tailwind CSS",
            "JWT",
            "REST API",
            "Vercel",
        ],
        source: Some("https://github.com/Yungstunner/QuickStay"),
        demo: None,
    },
    Project {
        title: "MediConnect — HACK-36",
        description: "Full-stack doctor–patient appointment booking platform developed during HACK-36 with calendar scheduling for 50+ simulated appointments and dashboards for 10 mock doctors. Implemented JWT authentication, role-based access control, and REST APIs for 5 user roles and 15 endpoints, optimizing queries to reduce response time by 40%. Built interactive UI components using React.js and Tailwind CSS.",
        image: "/images/projects/hrms.webp",
        tags: &[
            "React.js",
            "Node.js",
            "Express.js",
            "MongoDB",
            "Tailwind CSS",
            "JWT",
            "REST API",
        ],
        source: Some("https://github.com/Yungstunner/MediConnect"),
        demo: None,
    },
    Project {
        title: "Email Spam Classifier — Streamlit + NLTK",
        description: "Machine learning web app to classify emails as spam or ham using NLTK and Tf-idf Vectorizer. Trained on 5,000 labeled emails from Kaggle, achieving 98% accuracy and 99% precision after preprocessing (tokenization, stopword removal, vectorization). Deployed via Streamlit and Render for real-time text classification.",
        image: "/images/projects/mcodo.webp",
        tags: &[
            "Python",
            "NLTK",
            "Scikit-learn",
            "Tf-idf",
            "Streamlit",
            "Render",
            "Machine Learning",
        ],
        source: Some("https://github.com/Yungstunner/Email-Spam-Classifier"),
        demo: Some("https://email-spam-classifier-yungstunner.onrender.com"),
    },
];

pub static SKILLS_HEADER: SectionHeader = SectionHeader {
    title: "Technologies",
    subtitle: "Tech Stack",
    description: "Technologies I use to craft digital experiences",
};

pub const SKILL_GROUPS: &[SkillGroup] = &[
    SkillGroup {
        title: "Frontend",
        skills: &[
            Skill {
                name: "React",
                glyph: Glyph::React,
            },
            Skill {
                name: "TypeScript",
                glyph: Glyph::TypeScript,
            },
            Skill {
                name: "TailwindCSS",
                glyph: Glyph::TailwindCss,
            },
            Skill {
                name: "JavaScript",
                glyph: Glyph::JavaScript,
            },
            Skill {
                name: "Git",
                glyph: Glyph::Git,
            },
            Skill {
                name: "GitHub",
                glyph: Glyph::GitHub,
            },
        ],
    },
    SkillGroup {
        title: "Backend",
        skills: &[
            Skill {
                name: "Node.js",
                glyph: Glyph::NodeJs,
            },
            Skill {
                name: "Express",
                glyph: Glyph::Express,
            },
            Skill {
                name: "MongoDB",
                glyph: Glyph::MongoDb,
            },
            Skill {
                name: "MySQL",
                glyph: Glyph::MySql,
            },
            Skill {
                name: "Firebase",
                glyph: Glyph::Firebase,
            },
            Skill {
                name: "Vercel",
                glyph: Glyph::Vercel,
            },
            Skill {
                name: "Cloudflare",
                glyph: Glyph::Cloudflare,
            },
        ],
    },
];
