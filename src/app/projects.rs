use leptos::prelude::*;

use super::{
    animate::{Reveal, StaggerGroup, StaggerItem},
    primitives::{Chip, GlyphIcon, OutboundLink, SectionHeading},
};
use crate::{
    content::{Project, FOOTNOTE, PROJECTS, PROJECTS_HEADER},
    reveal::{RevealTrigger, GALLERY_FOOTNOTE, GRID_ITEM, PROJECT_GRID, SECTION_HEADER},
};

#[component]
pub fn ProjectGallery(#[prop(default = PROJECTS)] projects: &'static [Project]) -> impl IntoView {
    view! {
        <section class="w-full mt-25 px-6" id="projects">
            <div class="max-w-7xl mx-auto flex flex-col gap-2 justify-center items-center">
                <Reveal motion=SECTION_HEADER trigger=RevealTrigger::InView>
                    <SectionHeading header=&PROJECTS_HEADER />
                </Reveal>
                <StaggerGroup
                    motion=PROJECT_GRID
                    item=GRID_ITEM
                    class="mt-6 grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-5 sm:gap-6 lg:gap-7 auto-rows-fr items-stretch"
                >
                    {projects
                        .iter()
                        .enumerate()
                        .map(|(index, project)| {
                            view! {
                                <StaggerItem index>
                                    <ProjectCard project />
                                </StaggerItem>
                            }
                        })
                        .collect_view()}
                </StaggerGroup>
                <Reveal
                    motion=GALLERY_FOOTNOTE
                    trigger=RevealTrigger::InView
                    class="mt-6 text-center text-gray-500"
                >
                    {FOOTNOTE}
                </Reveal>
            </div>
        </section>
    }
}

#[component]
pub fn ProjectCard(project: &'static Project) -> impl IntoView {
    view! {
        <article class="h-full flex flex-col border border-gray-700 text-gray-300 backdrop-blur-3xl bg-[#161B22]/70 rounded-2xl overflow-hidden group transition-all duration-300 hover:scale-[1.02]">
            <div class="relative overflow-hidden aspect-video">
                <img
                    src=project.image
                    alt=project.title
                    loading="lazy"
                    class="absolute inset-0 w-full h-full object-cover transition-transform duration-500 group-hover:scale-110"
                />
                <div class="absolute inset-0 bg-gradient-to-t from-background/90 via-background/40 to-transparent opacity-0 group-hover:opacity-100 transition-opacity duration-300"></div>
            </div>
            <div class="flex flex-col flex-1 p-6 sm:p-7 gap-4">
                <div>
                    <h3 class="font-display text-xl font-bold mb-2 tracking-tight">
                        {project.title}
                    </h3>
                    <p class="text-gray-400 text-sm sm:text-base leading-normal">
                        {project.description}
                    </p>
                </div>
                <TagList tags=project.tags />
                <div class="mt-auto flex gap-3 pt-4 border-t border-gray-800">
                    {project
                        .actions()
                        .into_iter()
                        .map(|action| {
                            view! {
                                <OutboundLink
                                    href=action.href
                                    class="flex-1 flex justify-center items-center py-2.5 rounded-lg border border-gray-700 hover:border-red-500 hover:text-red-500 transition-all"
                                >
                                    <GlyphIcon glyph=action.kind.glyph() size=16 class="mr-2" />
                                    {action.kind.label()}
                                </OutboundLink>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </article>
    }
}

/// One chip per tag, in order. Repeated tags render repeatedly.
#[component]
pub fn TagList(tags: &'static [&'static str]) -> impl IntoView {
    view! {
        <div class="flex flex-wrap gap-2">
            {tags.iter().map(|tag| view! { <Chip>{*tag}</Chip> }).collect_view()}
        </div>
    }
}
