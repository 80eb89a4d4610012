// File: crates/plot-core/src/animate.rs
// Summary: Retargetable scalar animation: each property owns its interpolation state.

/// Cubic in-out easing on `t` in [0, 1].
pub fn ease_cubic_in_out(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        let u = 2.0 * t - 2.0;
        0.5 * u * u * u + 1.0
    }
}

/// One animated scalar property. Restarting toward a new target samples the
/// in-flight value first, so the latest target always wins without a visual
/// jump; nothing is queued.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Animated {
    from: f32,
    to: f32,
    start_ms: f64,
    duration_ms: f64,
}

impl Animated {
    /// A settled value with no transition in flight.
    pub fn fixed(value: f32) -> Self {
        Self { from: value, to: value, start_ms: 0.0, duration_ms: 0.0 }
    }

    /// Start at `from` and move to `target` over `duration_ms` from `now_ms`.
    pub fn starting_at(from: f32, target: f32, now_ms: f64, duration_ms: f64) -> Self {
        Self { from, to: target, start_ms: now_ms, duration_ms }
    }

    pub fn target(&self) -> f32 { self.to }

    /// Restart the interpolation toward a new target from the current sample.
    /// A no-op when the target is already in effect.
    pub fn retarget(&mut self, target: f32, now_ms: f64, duration_ms: f64) {
        if target == self.to {
            return;
        }
        let current = self.value_at(now_ms);
        self.from = current;
        self.to = target;
        self.start_ms = now_ms;
        self.duration_ms = duration_ms;
    }

    /// Snap to a value immediately, cancelling any in-flight transition.
    pub fn snap(&mut self, value: f32) {
        self.from = value;
        self.to = value;
        self.duration_ms = 0.0;
    }

    /// Sample the eased value at `now_ms`.
    pub fn value_at(&self, now_ms: f64) -> f32 {
        if self.duration_ms <= 0.0 || now_ms >= self.start_ms + self.duration_ms {
            return self.to;
        }
        if now_ms <= self.start_ms {
            return self.from;
        }
        let t = (now_ms - self.start_ms) / self.duration_ms;
        self.from + (self.to - self.from) * ease_cubic_in_out(t) as f32
    }

    pub fn is_settled(&self, now_ms: f64) -> bool {
        self.duration_ms <= 0.0 || now_ms >= self.start_ms + self.duration_ms
    }
}
