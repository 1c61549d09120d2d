use leptos::prelude::*;

use crate::{content::SectionHeader, glyph::Glyph};

#[component]
pub fn GlyphIcon(
    glyph: Glyph,
    #[prop(default = 18)] size: u16,
    #[prop(optional)] class: &'static str,
) -> impl IntoView {
    view! {
        <i
            class=format!("{} {class}", glyph.class())
            style=format!("font-size: {size}px")
            aria-hidden="true"
        ></i>
    }
}

/// Link that opens in a new browsing context without leaking referrer or opener.
#[component]
pub fn OutboundLink(
    href: &'static str,
    #[prop(optional)] title: Option<&'static str>,
    #[prop(optional)] class: &'static str,
    children: Children,
) -> impl IntoView {
    view! {
        <a href=href title=title aria-label=title class=class target="_blank" rel="noopener noreferrer">
            {children()}
        </a>
    }
}

#[component]
pub fn SectionHeading(header: &'static SectionHeader) -> impl IntoView {
    view! {
        <div class="flex flex-col items-center text-center gap-2">
            <span class="text-sm uppercase tracking-widest text-red-500">{header.subtitle}</span>
            <h2 class="font-display text-4xl font-medium tracking-wide text-gray-50">
                {header.title}
            </h2>
            <p class="max-w-2xl text-gray-400">{header.description}</p>
        </div>
    }
}

#[component]
pub fn Chip(children: Children) -> impl IntoView {
    view! {
        <span class="border border-gray-700 bg-[#0D1117] text-xs sm:text-sm px-3 py-1.5 rounded-full font-medium">
            {children()}
        </span>
    }
}
