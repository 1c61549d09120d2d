use leptos::{html, prelude::*};
use leptos_use::use_element_visibility;

use crate::reveal::{
    Motion, Reveal as RevealModel, RevealEvent, RevealState, RevealTrigger, STAGGER_STEP,
};

/// Track an element's one-shot reveal. Events only arrive on the client, so the
/// server always renders the pending pose.
fn use_reveal(trigger: RevealTrigger, node: NodeRef<html::Div>) -> ReadSignal<RevealState> {
    let (state, set_state) = signal(RevealState::Pending);
    let model = StoredValue::new(RevealModel::new(trigger));
    let feed = move |event: RevealEvent| {
        if model.try_update_value(|m| m.observe(event)).unwrap_or(false) {
            set_state.set(RevealState::Revealed);
        }
    };

    match trigger {
        RevealTrigger::Mount => {
            Effect::new(move |_| feed(RevealEvent::Mounted));
        }
        RevealTrigger::InView => {
            let visible = use_element_visibility(node);
            Effect::new(move |_| feed(RevealEvent::Visibility(visible.get())));
        }
    }

    state
}

#[component]
pub fn Reveal(
    motion: Motion,
    #[prop(default = RevealTrigger::Mount)] trigger: RevealTrigger,
    #[prop(optional)] class: &'static str,
    children: Children,
) -> impl IntoView {
    let node = NodeRef::<html::Div>::new();
    let state = use_reveal(trigger, node);

    view! {
        <div node_ref=node class=class style=move || motion.style(state.get())>
            {children()}
        </div>
    }
}

#[derive(Debug, Clone, Copy)]
struct Stagger {
    state: ReadSignal<RevealState>,
    item: Motion,
}

/// Container revealed on scroll whose [`StaggerItem`] children follow it one
/// step apart.
#[component]
pub fn StaggerGroup(
    motion: Motion,
    item: Motion,
    #[prop(optional)] class: &'static str,
    children: Children,
) -> impl IntoView {
    let node = NodeRef::<html::Div>::new();
    let state = use_reveal(RevealTrigger::InView, node);
    provide_context(Stagger { state, item });

    view! {
        <div node_ref=node class=class style=move || motion.style(state.get())>
            {children()}
        </div>
    }
}

#[component]
pub fn StaggerItem(index: usize, children: Children) -> impl IntoView {
    let Stagger { state, item } = expect_context::<Stagger>();
    let motion = item.staggered(index, STAGGER_STEP);

    view! {
        <div class="h-full" style=move || motion.style(state.get())>
            {children()}
        </div>
    }
}
