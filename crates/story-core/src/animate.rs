// File: crates/story-core/src/animate.rs
// Summary: Retargetable tweens: set a target value, let advance() interpolate.

use std::collections::HashMap;
use std::hash::Hash;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Easing {
    Linear,
    /// Default for chart transitions, matching the reference motion curve.
    CubicInOut,
}

impl Easing {
    pub fn apply(&self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::CubicInOut => {
                let t = t * 2.0;
                if t < 1.0 {
                    0.5 * t * t * t
                } else {
                    let t = t - 2.0;
                    0.5 * (t * t * t + 2.0)
                }
            }
        }
    }
}

/// One in-flight interpolation of a single scalar attribute.
#[derive(Clone, Copy, Debug)]
pub struct Tween {
    from: f64,
    to: f64,
    duration_ms: f64,
    elapsed_ms: f64,
    easing: Easing,
}

impl Tween {
    pub fn new(from: f64, to: f64, duration_ms: f64, easing: Easing) -> Self {
        Self { from, to, duration_ms: duration_ms.max(0.0), elapsed_ms: 0.0, easing }
    }

    pub fn value(&self) -> f64 {
        // A finished tween reports its exact end value, free of float dust,
        // so a cleared scene compares equal to its pre-transition state.
        if self.duration_ms <= 0.0 || self.finished() {
            return self.to;
        }
        let t = (self.elapsed_ms / self.duration_ms).clamp(0.0, 1.0);
        self.from + (self.to - self.from) * self.easing.apply(t)
    }

    pub fn target(&self) -> f64 {
        self.to
    }

    pub fn finished(&self) -> bool {
        self.elapsed_ms >= self.duration_ms
    }

    /// Advance by `dt_ms`; returns false once the tween has reached its end.
    pub fn advance(&mut self, dt_ms: f64) -> bool {
        self.elapsed_ms = (self.elapsed_ms + dt_ms.max(0.0)).min(self.duration_ms.max(0.0));
        !self.finished()
    }
}

/// Fire-and-forget animation set keyed by attribute. Inserting a key that is
/// already animating replaces the in-flight tween, so overlapping calls are
/// last-write-wins on the target value with no cancel-then-restart flicker.
#[derive(Debug)]
pub struct Animator<K: Eq + Hash + Copy> {
    tweens: HashMap<K, Tween>,
}

impl<K: Eq + Hash + Copy> Animator<K> {
    pub fn new() -> Self {
        Self { tweens: HashMap::new() }
    }

    /// Start (or retarget) the tween for `key`. `from` is the attribute's
    /// current sampled value so a retarget continues from mid-flight.
    pub fn animate(&mut self, key: K, from: f64, to: f64, duration_ms: f64, easing: Easing) {
        self.tweens.insert(key, Tween::new(from, to, duration_ms, easing));
    }

    /// Drop any tween for `key`; used when an attribute is written immediately.
    pub fn cancel(&mut self, key: K) {
        self.tweens.remove(&key);
    }

    /// Final value `key` is heading toward, if it is animating.
    pub fn target_of(&self, key: K) -> Option<f64> {
        self.tweens.get(&key).map(Tween::target)
    }

    pub fn is_idle(&self) -> bool {
        self.tweens.is_empty()
    }

    /// Advance all tweens by `dt_ms`, handing each sampled value to `apply`.
    /// Completed tweens deliver their exact end value and are retired.
    pub fn advance(&mut self, dt_ms: f64, mut apply: impl FnMut(K, f64)) {
        self.tweens.retain(|&key, tween| {
            let running = tween.advance(dt_ms);
            apply(key, tween.value());
            running
        });
    }
}

impl<K: Eq + Hash + Copy> Default for Animator<K> {
    fn default() -> Self {
        Self::new()
    }
}
