use crate::animation::ease::Ease;

/// Values that can be linearly interpolated by a [`Tween`].
pub trait Lerp: Sized {
    /// Interpolate from `a` (`t = 0`) to `b` (`t = 1`).
    fn lerp(a: &Self, b: &Self, t: f64) -> Self;
}

impl Lerp for f64 {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        a + (b - a) * t
    }
}

/// Eased interpolation from one value to another over a fixed number of seconds.
///
/// Time only moves forward through [`Tween::advance`]; the host's update loop drives it.
#[derive(Clone, Debug, PartialEq)]
pub struct Tween<T> {
    from: T,
    to: T,
    duration_secs: f64,
    elapsed_secs: f64,
    ease: Ease,
}

impl<T> Tween<T>
where
    T: Lerp + Clone,
{
    /// Non-finite or negative durations collapse to an instantaneous tween.
    pub fn new(from: T, to: T, duration_secs: f64, ease: Ease) -> Self {
        let duration_secs = if duration_secs.is_finite() {
            duration_secs.max(0.0)
        } else {
            0.0
        };
        Self {
            from,
            to,
            duration_secs,
            elapsed_secs: 0.0,
            ease,
        }
    }

    /// Advance by `dt` seconds and return the time left over past the end of the tween.
    ///
    /// Leftover is `0.0` while the tween is still running. Non-positive or non-finite `dt`
    /// leaves the tween untouched.
    pub fn advance(&mut self, dt: f64) -> f64 {
        if !dt.is_finite() || dt < 0.0 {
            return 0.0;
        }
        let remaining = self.duration_secs - self.elapsed_secs;
        if dt >= remaining {
            self.elapsed_secs = self.duration_secs;
            dt - remaining
        } else {
            self.elapsed_secs += dt;
            0.0
        }
    }

    /// Normalized progress in `[0, 1]`, before easing.
    pub fn progress(&self) -> f64 {
        if self.duration_secs <= 0.0 {
            return 1.0;
        }
        (self.elapsed_secs / self.duration_secs).clamp(0.0, 1.0)
    }

    /// Eased value at the current progress.
    pub fn value(&self) -> T {
        T::lerp(&self.from, &self.to, self.ease.apply(self.progress()))
    }

    /// `true` once the full duration has elapsed.
    pub fn is_finished(&self) -> bool {
        self.elapsed_secs >= self.duration_secs
    }

    /// Seconds consumed so far, capped at the duration.
    pub fn elapsed_secs(&self) -> f64 {
        self.elapsed_secs
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/tween.rs"]
mod tests;
