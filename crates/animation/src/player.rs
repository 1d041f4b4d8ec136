use crate::{Animation, TweenValue};
use indexmap::IndexMap;

/// Named animations, advanced together in the order they were added.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AnimationPlayer {
    animations: IndexMap<String, Animation>,
    enabled: bool,
}

impl AnimationPlayer {
    pub fn reset(&mut self) {
        for animation in self.animations.values_mut() {
            animation.reset();
        }
    }

    pub const fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub const fn enable(&mut self) {
        self.enabled = true;
    }

    pub const fn disable(&mut self) {
        self.enabled = false;
    }

    pub fn advance(&mut self, delta: f32) {
        if self.enabled {
            for animation in self.animations.values_mut() {
                animation.advance(delta);
            }
        }
    }

    /// Adds an animation, replacing any previous one with the same name.
    pub fn add<T: Into<String>>(&mut self, name: T, animation: Animation) {
        self.animations.insert(name.into(), animation);
    }

    pub fn remove<T: AsRef<str>>(&mut self, name: T) -> Option<Animation> {
        self.animations.shift_remove(name.as_ref())
    }

    pub fn get_mut<T: AsRef<str>>(&mut self, name: T) -> Option<&mut Animation> {
        self.animations.get_mut(name.as_ref())
    }

    pub fn get_elapsed<T: AsRef<str>>(&self, name: T) -> Option<f32> {
        self.animations
            .get(name.as_ref())
            .map(Animation::get_elapsed)
    }

    pub fn get_duration<T: AsRef<str>>(&self, name: T) -> Option<f32> {
        self.animations
            .get(name.as_ref())
            .map(Animation::get_duration)
    }

    pub fn get_value<T: AsRef<str>, V: TryFrom<TweenValue>>(&self, name: T) -> Option<V> {
        self.animations.get(name.as_ref()).and_then(Animation::get)
    }

    pub fn animations(&self) -> impl Iterator<Item = (&str, &Animation)> {
        self.animations
            .iter()
            .map(|(name, animation)| (name.as_str(), animation))
    }

    pub fn len(&self) -> usize {
        self.animations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.animations.is_empty()
    }

    pub fn is_finished<T: AsRef<str>>(&self, name: T) -> bool {
        self.enabled
            && self
                .animations
                .get(name.as_ref())
                .is_some_and(Animation::is_finished)
    }
}

#[cfg(test)]
mod tests {
    use super::AnimationPlayer;
    use crate::{Animation, RepeatMode};
    use axt_easing::EasingCurve;

    #[test]
    fn test_player_advances_only_when_enabled() {
        let mut player = AnimationPlayer::default();

        player.add(
            "fade",
            Animation::new(1.0, 0.0, 1000, EasingCurve::LinearIn, RepeatMode::Once),
        );
        player.add(
            "slide",
            Animation::new(0.0, 192.0, 400, EasingCurve::CubicOut, RepeatMode::Once),
        );

        player.advance(0.5);
        assert_eq!(player.get_value::<_, f32>("fade"), Some(1.0));

        player.enable();
        player.advance(0.5);

        let fade = player.get_value::<_, f32>("fade").unwrap();

        assert!((fade - 0.5).abs() < 1e-4);
        assert!(player.is_finished("slide"));
        assert!(!player.is_finished("fade"));
        assert!(!player.is_finished("missing"));

        let names: Vec<_> = player.animations().map(|(name, _)| name).collect();

        assert_eq!(names, ["fade", "slide"]);
    }

    #[test]
    fn test_remove_and_reset() {
        let mut player = AnimationPlayer::default();

        player.enable();
        player.add(
            "a",
            Animation::new(0.0, 10.0, 100, EasingCurve::QuadIn, RepeatMode::Once),
        );
        player.advance(1.0);
        player.reset();

        assert_eq!(player.get_value::<_, f32>("a"), Some(0.0));
        assert_eq!(player.get_elapsed("a"), Some(0.0));
        assert!(player.remove("a").is_some());
        assert!(player.is_empty());
    }
}
