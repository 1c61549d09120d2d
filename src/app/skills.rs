use leptos::prelude::*;

use super::{
    animate::{Reveal, StaggerGroup, StaggerItem},
    primitives::{GlyphIcon, SectionHeading},
};
use crate::{
    content::{SkillGroup, SKILLS_HEADER, SKILL_GROUPS},
    reveal::{RevealTrigger, GRID_ITEM, SECTION_HEADER, SKILL_PANEL},
};

#[component]
pub fn SkillMatrix(#[prop(default = SKILL_GROUPS)] groups: &'static [SkillGroup]) -> impl IntoView {
    view! {
        <section class="w-full mt-25 px-6" id="skills">
            <div class="max-w-7xl mx-auto flex flex-col gap-2 justify-center items-center">
                <Reveal motion=SECTION_HEADER trigger=RevealTrigger::InView>
                    <SectionHeading header=&SKILLS_HEADER />
                </Reveal>
                <StaggerGroup motion=SKILL_PANEL item=GRID_ITEM class="max-w-4xl">
                    <div class="mt-6 flex flex-col md:flex-row w-full gap-6 border border-gray-700 text-gray-300 backdrop-blur-3xl bg-[#161B22]/70 p-8 rounded-2xl">
                        {groups
                            .iter()
                            .enumerate()
                            .map(|(index, group)| {
                                view! {
                                    <StaggerItem index>
                                        <SkillCard group />
                                    </StaggerItem>
                                }
                            })
                            .collect_view()}
                    </div>
                </StaggerGroup>
            </div>
        </section>
    }
}

#[component]
pub fn SkillCard(group: &'static SkillGroup) -> impl IntoView {
    view! {
        <div>
            <h2 class="font-medium pb-2 mb-4">{group.title}</h2>
            <div class="flex flex-wrap gap-2 md:gap-4 justify-start items-center">
                {group
                    .skills
                    .iter()
                    .map(|skill| {
                        view! {
                            <div class="text-gray-400 hover:text-foreground hover:underline decoration-red-500 flex items-center gap-2 border border-gray-700 bg-[#0D1117] px-4 py-2 rounded-md hover:scale-105 hover:rotate-3 transition-transform">
                                <GlyphIcon glyph=skill.glyph class="text-lg" />
                                <span class="text-sm font-medium">{skill.name}</span>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;
    use leptos::tachys::view::RenderHtml;

    #[test]
    fn test_chips_keep_input_order() {
        let owner = Owner::new();
        owner.set();
        let html = view! { <SkillCard group=&SKILL_GROUPS[0] /> }.into_view().to_html();

        let positions = ["React", "TypeScript", "TailwindCSS", "JavaScript"]
            .iter()
            .map(|name| html.find(&format!(">{name}<")).expect("chip rendered"))
            .collect::<Vec<_>>();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
        assert!(html.contains("devicon-react-original"));
    }

    #[test]
    fn test_matrix_renders_both_groups() {
        let owner = Owner::new();
        owner.set();
        let html = view! { <SkillMatrix /> }.into_view().to_html();
        let frontend = html.find(">Frontend<").expect("frontend title");
        let backend = html.find(">Backend<").expect("backend title");
        assert!(frontend < backend);
        assert!(html.contains("Tech Stack"));
    }
}
