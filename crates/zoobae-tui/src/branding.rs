//! Cosmetic per-screen state: the rotating tagline and the backdrop.
//!
//! A `Branding` is created each time a screen becomes active and dropped
//! when it stops being active. Nothing here is shared between screens.

use std::time::{Duration, Instant};

use rand::Rng;

pub const TAGLINES: [&str; 3] = ["Your AI Matchmaker", "Modern dating", "Modern Matching"];

/// Number of backdrop variants a screen can pick from
pub const BACKDROP_COUNT: usize = 6;

/// Time between tagline changes
const ROTATE_EVERY: Duration = Duration::from_millis(5000);

/// Length of each half of the fade (out, then in)
const FADE: Duration = Duration::from_millis(800);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fade {
    Visible,
    FadingOut,
    FadingIn,
}

#[derive(Debug, Clone)]
pub struct Branding {
    backdrop: usize,
    started: Instant,
}

impl Branding {
    /// Pick a random backdrop and start the tagline clock now
    pub fn new() -> Self {
        Self::with_rng(&mut rand::thread_rng(), Instant::now())
    }

    pub fn with_rng<R: Rng>(rng: &mut R, started: Instant) -> Self {
        Self {
            backdrop: rng.gen_range(0..BACKDROP_COUNT),
            started,
        }
    }

    pub fn backdrop(&self) -> usize {
        self.backdrop
    }

    /// Tagline and fade state at `now`
    pub fn tagline(&self, now: Instant) -> (&'static str, Fade) {
        let (rotations, fade) = Self::state_at(now.saturating_duration_since(self.started));
        (TAGLINES[rotations % TAGLINES.len()], fade)
    }

    /// Every period fades the old tagline out, swaps it, then fades the new one in.
    fn state_at(elapsed: Duration) -> (usize, Fade) {
        let period = ROTATE_EVERY.as_millis();
        let fade = FADE.as_millis();
        let elapsed = elapsed.as_millis();

        let completed = (elapsed / period) as usize;
        let within = elapsed % period;

        if completed == 0 {
            (0, Fade::Visible)
        } else if within < fade {
            (completed - 1, Fade::FadingOut)
        } else if within < fade * 2 {
            (completed, Fade::FadingIn)
        } else {
            (completed, Fade::Visible)
        }
    }
}

impl Default for Branding {
    fn default() -> Self {
        Self::new()
    }
}
