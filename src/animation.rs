// The one live repeating paint timer.
// The controller holds it as Option<Animation>; replacing or taking it is the
// cancellation, so two cells can never be mid-paint at once.

use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnimationKind {
    /// Raise alpha toward 1, stop when saturated.
    Ramp,
    /// New random colour every step until interrupted.
    Rainbow,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Animation {
    pub cell: usize,
    pub kind: AnimationKind,
    interval: Duration,
    next_due: Instant,
}

impl Animation {
    /// The first step already ran synchronously; the next is one interval out.
    pub fn start(cell: usize, kind: AnimationKind, interval: Duration, now: Instant) -> Self {
        Self { cell, kind, interval, next_due: now + interval }
    }

    /// Consume one step if its deadline has passed.
    pub fn take_due_step(&mut self, now: Instant) -> bool {
        if now < self.next_due {
            return false;
        }
        self.next_due += self.interval;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn steps_fire_on_the_interval() {
        let t0 = Instant::now();
        let ms = Duration::from_millis;
        let mut a = Animation::start(3, AnimationKind::Ramp, ms(200), t0);

        assert!(!a.take_due_step(t0 + ms(199)));
        assert!(a.take_due_step(t0 + ms(200)));
        assert!(!a.take_due_step(t0 + ms(399)));
        assert!(a.take_due_step(t0 + ms(400)));
    }

    #[test]
    fn late_polls_catch_up_one_step_at_a_time() {
        let t0 = Instant::now();
        let ms = Duration::from_millis;
        let mut a = Animation::start(0, AnimationKind::Rainbow, ms(200), t0);

        let now = t0 + ms(650);
        let mut fired = 0;
        while a.take_due_step(now) {
            fired += 1;
        }
        assert_eq!(fired, 3);
    }
}
