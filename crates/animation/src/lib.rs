mod player;
mod value;

use std::time::Duration;

use axt_easing::{EasingCurve, ParametricCurve};
use axt_shared::Lerp;

pub use self::{player::AnimationPlayer, value::TweenValue};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum RepeatMode {
    Once,
    Times(u16),
    Infinite,
}

impl RepeatMode {
    /// Returns `true` if the repeat mode is [`Infinite`].
    ///
    /// [`Infinite`]: RepeatMode::Infinite
    #[must_use]
    pub const fn is_infinite(&self) -> bool {
        matches!(self, Self::Infinite)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum RestartBehaviour {
    StartValue,
    /// Play back towards the start instead of jumping to it. Only affects
    /// [`RepeatMode::Infinite`].
    EndValue,
}

impl RestartBehaviour {
    /// Returns `true` if the restart behaviour is [`EndValue`].
    ///
    /// [`EndValue`]: RestartBehaviour::EndValue
    #[must_use]
    pub const fn is_end_value(self) -> bool {
        matches!(self, Self::EndValue)
    }
}

/// A tween between two values, shaped by an easing curve.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Animation {
    elapsed: f32,
    duration: f32,
    curve: EasingCurve,
    repeat: RepeatMode,
    restart_behaviour: RestartBehaviour,

    origin: TweenValue,
    value: TweenValue,
    destination: TweenValue,
}

impl Animation {
    #[must_use]
    pub fn new<T: Into<TweenValue>>(
        start: T,
        end: T,
        duration: u64,
        curve: EasingCurve,
        repeat: RepeatMode,
    ) -> Self {
        let [origin, destination] = [start.into(), end.into()];

        Self {
            elapsed: 0.0,
            duration: Duration::from_millis(duration).as_secs_f32(),
            curve,
            repeat,
            restart_behaviour: RestartBehaviour::StartValue,
            origin,
            value: origin,
            destination,
        }
    }

    #[must_use]
    pub const fn with_restart_behaviour(mut self, behaviour: RestartBehaviour) -> Self {
        self.restart_behaviour = behaviour;

        self
    }

    /// Retargets the animation: it continues from wherever it is now.
    pub fn to<T: Into<TweenValue>>(&mut self, value: T) {
        self.origin = self.value;
        self.destination = value.into();
        self.elapsed = 0.0;
    }

    pub fn get<T: TryFrom<TweenValue>>(&self) -> Option<T> {
        T::try_from(self.value).ok()
    }

    pub const fn value(&self) -> TweenValue {
        self.value
    }

    pub const fn curve(&self) -> EasingCurve {
        self.curve
    }

    pub const fn is_backwards(&self) -> bool {
        self.restart_behaviour.is_end_value()
    }

    pub const fn get_duration(&self) -> f32 {
        self.duration
    }

    pub const fn get_elapsed(&self) -> f32 {
        self.elapsed
    }

    /// Time covered by one full pass before `elapsed` wraps.
    const fn period(&self) -> f32 {
        if self.repeat.is_infinite() && self.is_backwards() {
            self.duration * 2.0
        } else {
            self.duration
        }
    }

    /// Normalized, un-eased time of the current pass.
    pub fn progress(&self) -> f32 {
        if self.duration <= 0.0 {
            return 1.0;
        }

        match (self.repeat, self.restart_behaviour) {
            (RepeatMode::Once, _) => (self.elapsed / self.duration).min(1.0),
            (RepeatMode::Times(count), _) => {
                if self.elapsed >= self.duration * f32::from(count) {
                    1.0
                } else {
                    (self.elapsed % self.duration) / self.duration
                }
            }
            (RepeatMode::Infinite, RestartBehaviour::StartValue) => {
                (self.elapsed % self.duration) / self.duration
            }
            (RepeatMode::Infinite, RestartBehaviour::EndValue) => {
                let cycle = self.elapsed % (self.duration * 2.0);

                if cycle <= self.duration {
                    cycle / self.duration
                } else {
                    (self.duration * 2.0 - cycle) / self.duration
                }
            }
        }
    }

    pub const fn reset(&mut self) {
        self.elapsed = 0.0;
        self.value = self.origin;
    }

    #[allow(clippy::cast_possible_truncation)]
    pub fn advance(&mut self, delta: f32) {
        self.elapsed += delta;

        if self.repeat.is_infinite() && self.period() > 0.0 {
            self.elapsed %= self.period();
        }

        let eased = self.curve.transform(f64::from(self.progress())) as f32;

        self.value = self.origin.lerp(&self.destination, eased);
    }

    pub fn is_finished(&self) -> bool {
        match self.repeat {
            RepeatMode::Once => self.elapsed >= self.duration,
            RepeatMode::Times(n) => self.elapsed >= (self.duration * f32::from(n)),
            RepeatMode::Infinite => false,
        }
    }
}
