//! Timed status effects and cooldown timers

use serde::{Deserialize, Serialize};

/// A status that is either off or counting down to off
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub enum TimedEffect {
    #[default]
    Inactive,
    Active { remaining: f32 },
}

impl TimedEffect {
    /// Start (or restart) the effect for `duration` seconds; durations within
    /// `epsilon` of zero leave it inactive
    pub fn trigger(&mut self, duration: f32, epsilon: f32) {
        *self = if duration > epsilon {
            TimedEffect::Active {
                remaining: duration,
            }
        } else {
            TimedEffect::Inactive
        };
    }

    /// Count down by `dt`; drops back to `Inactive` once within `epsilon` of zero
    pub fn tick(&mut self, dt: f32, epsilon: f32) {
        if let TimedEffect::Active { remaining } = *self {
            let left = remaining - dt;
            *self = if left > epsilon {
                TimedEffect::Active { remaining: left }
            } else {
                TimedEffect::Inactive
            };
        }
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        matches!(self, TimedEffect::Active { .. })
    }

    /// Seconds left (0 when inactive)
    #[inline]
    pub fn remaining(&self) -> f32 {
        match self {
            TimedEffect::Active { remaining } => *remaining,
            TimedEffect::Inactive => 0.0,
        }
    }
}

/// Countdown gating a repeatable action; never goes negative
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Cooldown {
    remaining: f32,
}

impl Cooldown {
    #[inline]
    pub fn remaining(&self) -> f32 {
        self.remaining
    }

    /// True once the timer is within `epsilon` of zero
    #[inline]
    pub fn is_ready(&self, epsilon: f32) -> bool {
        self.remaining <= epsilon
    }

    pub fn reset(&mut self, interval: f32) {
        self.remaining = interval.max(0.0);
    }

    pub fn tick(&mut self, dt: f32) {
        self.remaining = (self.remaining - dt).max(0.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::EPSILON;

    #[test]
    fn test_effect_lifecycle() {
        let mut effect = TimedEffect::default();
        assert!(!effect.is_active());
        assert_eq!(effect.remaining(), 0.0);

        effect.trigger(0.5, EPSILON);
        assert!(effect.is_active());

        effect.tick(0.2, EPSILON);
        assert!(effect.is_active());
        assert!((effect.remaining() - 0.3).abs() < 1e-6);

        effect.tick(0.2, EPSILON);
        assert!(effect.is_active());

        // Crossing zero clamps and deactivates in the same step
        effect.tick(0.2, EPSILON);
        assert_eq!(effect, TimedEffect::Inactive);
        assert_eq!(effect.remaining(), 0.0);
    }

    #[test]
    fn test_effect_zero_duration_stays_inactive() {
        let mut effect = TimedEffect::default();
        effect.trigger(0.0, EPSILON);
        assert!(!effect.is_active());
    }

    #[test]
    fn test_cooldown_clamps_at_zero() {
        let mut cd = Cooldown::default();
        assert!(cd.is_ready(EPSILON));
        cd.reset(0.1);
        assert!(!cd.is_ready(EPSILON));
        cd.tick(0.05);
        assert!(!cd.is_ready(EPSILON));
        cd.tick(0.5);
        assert_eq!(cd.remaining(), 0.0);
        assert!(cd.is_ready(EPSILON));
    }

    #[test]
    fn test_cooldown_monotonic() {
        let mut cd = Cooldown::default();
        cd.reset(1.0);
        let mut last = cd.remaining();
        for _ in 0..50 {
            cd.tick(1.0 / 30.0);
            assert!(cd.remaining() <= last);
            assert!(cd.remaining() >= 0.0);
            last = cd.remaining();
        }
        assert!(cd.is_ready(EPSILON));
    }

    #[test]
    fn test_epsilon_is_caller_supplied() {
        let mut cd = Cooldown::default();
        cd.reset(0.005);
        assert!(!cd.is_ready(EPSILON));
        assert!(cd.is_ready(0.01));

        let mut effect = TimedEffect::default();
        effect.trigger(0.05, 0.1);
        assert!(!effect.is_active());

        effect.trigger(0.5, 0.1);
        effect.tick(0.45, 0.1);
        assert!(!effect.is_active());
    }
}
