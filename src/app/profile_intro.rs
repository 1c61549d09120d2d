use leptos::{either::Either, prelude::*};
use leptos_use::use_interval_fn;

use super::{
    animate::Reveal,
    primitives::{GlyphIcon, OutboundLink},
};
use crate::{
    content::{BioFragment, SocialLink, TickerPhrase, PROFILE, SOCIAL_LINKS},
    reveal::{INTRO_LINKS, INTRO_TEXT, INTRO_TICKER, PORTRAIT},
    ticker::Ticker,
};

#[component]
pub fn ProfileIntro() -> impl IntoView {
    let profile = &PROFILE;

    view! {
        <section class="w-full mt-35 px-6">
            <div class="max-w-7xl mx-auto flex flex-col gap-2 justify-center items-center">
                <Reveal
                    motion=PORTRAIT
                    class="group relative w-40 md:w-48 lg:w-56 aspect-square overflow-hidden rounded-full"
                >
                    <img
                        src=profile.portrait
                        alt=profile.portrait_alt
                        class="absolute inset-0 w-full h-full object-cover grayscale hover:grayscale-0 transition-transform duration-500 ease-in-out group-hover:scale-105"
                    />
                </Reveal>
                <Reveal
                    motion=INTRO_TEXT
                    class="flex flex-col justify-center items-center mt-6 gap-8 md:gap-6 max-w-3xl"
                >
                    <div class="flex flex-col justify-center items-center text-center md:text-start md:justify-start md:items-start">
                        <span>{profile.greeting}</span>
                        <h1 class="font-display tracking-wide text-5xl font-medium text-gray-50">
                            {profile.name}
                        </h1>
                    </div>
                    <Reveal motion=INTRO_LINKS>
                        <SocialLinks links=SOCIAL_LINKS />
                    </Reveal>
                    <Reveal motion=INTRO_TICKER>
                        <PhraseTicker phrases=profile.phrases />
                    </Reveal>
                    <p class="text-base tracking-wider text-center md:text-left">
                        <Bio fragments=profile.bio />
                    </p>
                </Reveal>
            </div>
        </section>
    }
}

#[component]
pub fn SocialLinks(links: &'static [SocialLink]) -> impl IntoView {
    view! {
        <ul class="flex gap-3 justify-center items-center">
            {links
                .iter()
                .map(|link| {
                    view! {
                        <li class="text-gray-500 hover:text-foreground border-red-500 hover:border-b-[0.5px] p-1">
                            <OutboundLink href=link.destination title=link.name>
                                <GlyphIcon glyph=link.glyph size=link.glyph_size />
                            </OutboundLink>
                        </li>
                    }
                })
                .collect_view()}
        </ul>
    }
}

/// Horizontal strip that slides to the next phrase every dwell period, forever.
#[component]
pub fn PhraseTicker(phrases: &'static [TickerPhrase]) -> impl IntoView {
    let ticker = Ticker::new(phrases);
    let (step, set_step) = signal(0_u64);
    let _ = use_interval_fn(
        move || set_step.update(|s| *s = s.wrapping_add(1)),
        ticker.dwell_ms(),
    );

    view! {
        <div class="flex gap-2 justify-center items-baseline">
            <div class="w-40 overflow-hidden" aria-hidden="true">
                <div class="flex" style=move || ticker.strip_style(step.get())>
                    {ticker
                        .phrases()
                        .iter()
                        .map(|phrase| {
                            view! {
                                <div class=format!(
                                    "w-full shrink-0 text-center underline decoration-1 {}",
                                    phrase.accent,
                                )>{phrase.text}</div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
            <span class="sr-only">{move || ticker.phrase_at(step.get()).text}</span>
        </div>
    }
}

#[component]
fn Bio(fragments: &'static [BioFragment]) -> impl IntoView {
    fragments
        .iter()
        .map(|fragment| match fragment {
            BioFragment::Plain(text) => Either::Left(*text),
            BioFragment::Highlight(text) => Either::Right(view! {
                <span class="font-medium text-gray-50">{*text}</span>
            }),
        })
        .collect_view()
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;
    use leptos::tachys::view::RenderHtml;

    #[test]
    fn test_social_links_are_isolated() {
        let owner = Owner::new();
        owner.set();
        let html = view! { <SocialLinks links=SOCIAL_LINKS /> }.into_view().to_html();

        assert_eq!(html.matches("<a ").count(), SOCIAL_LINKS.len());
        assert_eq!(html.matches("target=\"_blank\"").count(), SOCIAL_LINKS.len());
        assert_eq!(
            html.matches("rel=\"noopener noreferrer\"").count(),
            SOCIAL_LINKS.len()
        );
        assert!(html.contains("href=\"https://wa.me/+916396304269\""));
        assert!(html.contains("font-size: 25px"));
    }

    #[test]
    fn test_ticker_starts_on_first_phrase() {
        let owner = Owner::new();
        owner.set();
        let html = view! { <PhraseTicker phrases=PROFILE.phrases /> }
            .into_view()
            .to_html();

        assert!(html.contains("DSA Enthusiast"));
        assert!(html.contains("Fullstack Dev"));
        assert!(html.contains("translateX(-0%)"));
    }
}
