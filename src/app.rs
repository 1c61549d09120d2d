mod animate;
mod primitives;
mod profile_intro;
mod projects;
mod skills;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};

pub use profile_intro::{PhraseTicker, ProfileIntro, SocialLinks};
pub use projects::{ProjectCard, ProjectGallery, TagList};
pub use skills::{SkillCard, SkillMatrix};

use crate::content::PROFILE;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="dark" />
                <link rel="shortcut icon" type="image/ico" href="/favicon.ico" />
                <link
                    rel="stylesheet"
                    href="https://cdn.jsdelivr.net/gh/devicons/devicon@latest/devicon.min.css"
                />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio.css" />
                <MetaTags />
            </head>
            <body class="bg-background text-gray-300">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    view! {
        <Title formatter=|title| format!("{} - {title}", PROFILE.name) />
        <Meta name="description" content=PROFILE.summary />

        <Router>
            <main class="flex flex-col flex-grow items-center mx-auto w-full pb-25">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=path!("/") view=HomePage />
                </Routes>
            </main>
        </Router>
    }
}

/// The three sections, top to bottom.
#[component]
fn HomePage() -> impl IntoView {
    view! {
        <Title text="Portfolio" />
        <ProfileIntro />
        <ProjectGallery />
        <SkillMatrix />
    }
}
