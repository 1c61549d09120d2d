//! One-shot entrance animations.
//!
//! An element starts [`RevealState::Pending`] in its `from` pose and moves to
//! [`RevealState::Revealed`] the first time its trigger fires. There is no way
//! back: later events are ignored.

use std::time::Duration;

/// Visual pose of an element at one end of its entrance animation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pose {
    pub opacity: f32,
    pub offset_y: f32,
    pub scale: f32,
}

impl Pose {
    pub const SHOWN: Pose = Pose {
        opacity: 1.0,
        offset_y: 0.0,
        scale: 1.0,
    };

    pub const fn below(offset_y: f32) -> Self {
        Pose {
            opacity: 0.0,
            offset_y,
            scale: 1.0,
        }
    }

    pub const fn shrunk(scale: f32) -> Self {
        Pose {
            opacity: 0.0,
            offset_y: 0.0,
            scale,
        }
    }

    fn transform(&self) -> String {
        format!("translateY({}px) scale({})", self.offset_y, self.scale)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Easing {
    Linear,
    EaseOut,
}

impl Easing {
    pub const fn css(self) -> &'static str {
        match self {
            Easing::Linear => "linear",
            Easing::EaseOut => "ease-out",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Motion {
    pub from: Pose,
    pub to: Pose,
    pub duration: Duration,
    pub delay: Duration,
    pub easing: Easing,
}

impl Motion {
    /// Ease-out entrance from `from` to fully shown.
    pub const fn enter(from: Pose, duration_ms: u64) -> Self {
        Motion {
            from,
            to: Pose::SHOWN,
            duration: Duration::from_millis(duration_ms),
            delay: Duration::ZERO,
            easing: Easing::EaseOut,
        }
    }

    pub const fn delayed(self, delay_ms: u64) -> Self {
        Motion {
            delay: Duration::from_millis(delay_ms),
            ..self
        }
    }

    /// Same motion for the `index`th child of a staggered group.
    pub fn staggered(self, index: usize, step: Duration) -> Self {
        let extra = step.saturating_mul(u32::try_from(index).unwrap_or(u32::MAX));
        Motion {
            delay: self.delay.saturating_add(extra),
            ..self
        }
    }

    pub fn pose(&self, state: RevealState) -> Pose {
        match state {
            RevealState::Pending => self.from,
            RevealState::Revealed => self.to,
        }
    }

    /// Inline CSS for an element in `state`.
    pub fn style(&self, state: RevealState) -> String {
        let pose = self.pose(state);
        let timing = format!(
            "{}ms {} {}ms",
            self.duration.as_millis(),
            self.easing.css(),
            self.delay.as_millis()
        );
        format!(
            "opacity: {}; transform: {}; transition: opacity {timing}, transform {timing};",
            pose.opacity,
            pose.transform()
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RevealState {
    #[default]
    Pending,
    Revealed,
}

/// What fires an element's entrance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealTrigger {
    /// As soon as the element is mounted.
    Mount,
    /// The first time the element scrolls into the viewport.
    InView,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealEvent {
    Mounted,
    Visibility(bool),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reveal {
    trigger: RevealTrigger,
    state: RevealState,
}

impl Reveal {
    pub const fn new(trigger: RevealTrigger) -> Self {
        Reveal {
            trigger,
            state: RevealState::Pending,
        }
    }

    pub const fn state(&self) -> RevealState {
        self.state
    }

    /// Feed an event. Returns `true` only on the transition to revealed.
    pub fn observe(&mut self, event: RevealEvent) -> bool {
        if self.state == RevealState::Revealed {
            return false;
        }
        let fires = matches!(
            (self.trigger, event),
            (RevealTrigger::Mount, RevealEvent::Mounted)
                | (RevealTrigger::InView, RevealEvent::Visibility(true))
        );
        if fires {
            self.state = RevealState::Revealed;
        }
        fires
    }
}

/// Delay between consecutive children of a staggered grid.
pub const STAGGER_STEP: Duration = Duration::from_millis(150);

pub const PORTRAIT: Motion = Motion::enter(Pose::shrunk(0.8), 800);
pub const INTRO_TEXT: Motion = Motion::enter(Pose::below(40.0), 900).delayed(200);
pub const INTRO_LINKS: Motion = Motion::enter(Pose::below(20.0), 800).delayed(500);
pub const INTRO_TICKER: Motion = Motion::enter(Pose::below(20.0), 800).delayed(700);
pub const SECTION_HEADER: Motion = Motion::enter(Pose::below(20.0), 800);
pub const PROJECT_GRID: Motion = Motion::enter(Pose::below(40.0), 800);
pub const SKILL_PANEL: Motion = Motion::enter(Pose::below(30.0), 800);
pub const GRID_ITEM: Motion = Motion::enter(Pose::below(20.0), 800);
pub const GALLERY_FOOTNOTE: Motion = Motion::enter(Pose::below(20.0), 800).delayed(400);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mount_trigger() {
        let mut reveal = Reveal::new(RevealTrigger::Mount);
        assert_eq!(reveal.state(), RevealState::Pending);
        assert!(!reveal.observe(RevealEvent::Visibility(true)));
        assert_eq!(reveal.state(), RevealState::Pending);

        assert!(reveal.observe(RevealEvent::Mounted));
        assert_eq!(reveal.state(), RevealState::Revealed);
        assert!(!reveal.observe(RevealEvent::Mounted));
    }

    #[test]
    fn test_in_view_fires_once() {
        let mut reveal = Reveal::new(RevealTrigger::InView);
        assert!(!reveal.observe(RevealEvent::Mounted));
        assert!(!reveal.observe(RevealEvent::Visibility(false)));
        assert_eq!(reveal.state(), RevealState::Pending);

        assert!(reveal.observe(RevealEvent::Visibility(true)));
        // scrolling back out never hides it again
        assert!(!reveal.observe(RevealEvent::Visibility(false)));
        assert!(!reveal.observe(RevealEvent::Visibility(true)));
        assert_eq!(reveal.state(), RevealState::Revealed);
    }

    #[test]
    fn test_style_per_state() {
        let pending = PORTRAIT.style(RevealState::Pending);
        assert_eq!(
            pending,
            "opacity: 0; transform: translateY(0px) scale(0.8); \
             transition: opacity 800ms ease-out 0ms, transform 800ms ease-out 0ms;"
        );

        let revealed = INTRO_TEXT.style(RevealState::Revealed);
        assert!(revealed.starts_with("opacity: 1; transform: translateY(0px) scale(1);"));
        assert!(revealed.contains("opacity 900ms ease-out 200ms"));
    }

    #[test]
    fn test_stagger() {
        let third = GRID_ITEM.staggered(2, STAGGER_STEP);
        assert_eq!(third.delay, Duration::from_millis(300));
        assert_eq!(third.duration, GRID_ITEM.duration);

        let late = GALLERY_FOOTNOTE.staggered(1, STAGGER_STEP);
        assert_eq!(late.delay, Duration::from_millis(550));
    }
}
