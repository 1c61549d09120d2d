use std::time::Duration;

use crate::{content::TickerPhrase, reveal::Easing};

/// Endless horizontal phrase loop.
///
/// The ticker has no end state: every step maps onto one of its phrases, so it
/// can be sampled at any time and always shows exactly one of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticker {
    phrases: &'static [TickerPhrase],
    dwell: Duration,
    slide: Duration,
}

const FALLBACK: &[TickerPhrase] = &[TickerPhrase {
    text: "",
    accent: "",
}];

impl Ticker {
    pub const DWELL: Duration = Duration::from_millis(2500);
    pub const SLIDE: Duration = Duration::from_millis(600);

    /// An empty phrase list becomes a single blank phrase rather than an empty ticker.
    pub fn new(phrases: &'static [TickerPhrase]) -> Self {
        let phrases = if phrases.is_empty() { FALLBACK } else { phrases };
        Ticker {
            phrases,
            dwell: Self::DWELL,
            slide: Self::SLIDE,
        }
    }

    pub fn phrases(&self) -> &'static [TickerPhrase] {
        self.phrases
    }

    pub fn dwell_ms(&self) -> u64 {
        u64::try_from(self.dwell.as_millis()).unwrap_or(u64::MAX)
    }

    pub fn index_at(&self, step: u64) -> usize {
        // phrases is never empty, see `new`
        (step % self.phrases.len() as u64) as usize
    }

    pub fn phrase_at(&self, step: u64) -> &'static TickerPhrase {
        &self.phrases[self.index_at(step)]
    }

    /// Phrase showing after `elapsed` time since mount.
    pub fn phrase_after(&self, elapsed: Duration) -> &'static TickerPhrase {
        let step = elapsed.as_millis() / self.dwell.as_millis().max(1);
        self.phrase_at(u64::try_from(step).unwrap_or(u64::MAX))
    }

    /// Inline style for the sliding strip at `step`.
    pub fn strip_style(&self, step: u64) -> String {
        format!(
            "transform: translateX(-{}%); transition: transform {}ms {};",
            self.index_at(step) * 100,
            self.slide.as_millis(),
            Easing::Linear.css()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::PROFILE;

    #[test]
    fn test_loops_forever() {
        let ticker = Ticker::new(PROFILE.phrases);
        assert_eq!(ticker.phrases().len(), 2);
        assert_eq!(ticker.phrase_at(0).text, "DSA Enthusiast");
        assert_eq!(ticker.phrase_at(1).text, "Fullstack Dev");
        assert_eq!(ticker.phrase_at(2).text, "DSA Enthusiast");
        assert_eq!(ticker.phrase_at(u64::MAX).text, "Fullstack Dev");
    }

    #[test]
    fn test_any_sample_is_a_configured_phrase() {
        let ticker = Ticker::new(PROFILE.phrases);
        for ms in (0..60_000).step_by(337) {
            let shown = ticker.phrase_after(Duration::from_millis(ms));
            assert!(PROFILE.phrases.contains(shown));
        }
        let shown = ticker.phrase_after(Duration::from_secs(60 * 60 * 24 * 365));
        assert!(PROFILE.phrases.contains(shown));
    }

    #[test]
    fn test_empty_list_still_shows_something() {
        let ticker = Ticker::new(&[]);
        assert_eq!(ticker.phrases().len(), 1);
        assert_eq!(ticker.phrase_at(7).text, "");
    }

    #[test]
    fn test_strip_style() {
        let ticker = Ticker::new(PROFILE.phrases);
        assert_eq!(
            ticker.strip_style(3),
            "transform: translateX(-100%); transition: transform 600ms linear;"
        );
        assert_eq!(ticker.dwell_ms(), 2500);
    }
}
