use macroquad::input::{KeyCode, TouchPhase};
use macroquad::math::Vec2;

use crate::direction::{Direction, swipe_direction};

/// What the player asked for
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Intent {
    Steer(Direction),
    Restart,
    Quit,
}

/// Map a pressed key to an intent; unknown keys map to nothing
pub fn intent_for_key(key: KeyCode) -> Option<Intent> {
    match key {
        // Movement - arrows and WASD
        KeyCode::Up | KeyCode::W => Some(Intent::Steer(Direction::Up)),
        KeyCode::Down | KeyCode::S => Some(Intent::Steer(Direction::Down)),
        KeyCode::Left | KeyCode::A => Some(Intent::Steer(Direction::Left)),
        KeyCode::Right | KeyCode::D => Some(Intent::Steer(Direction::Right)),

        // Controls
        KeyCode::R | KeyCode::Enter => Some(Intent::Restart),
        KeyCode::Q | KeyCode::Escape => Some(Intent::Quit),
        _ => None,
    }
}

/// Keys polled every frame
pub const WATCHED_KEYS: [KeyCode; 12] = [
    KeyCode::Up,
    KeyCode::Down,
    KeyCode::Left,
    KeyCode::Right,
    KeyCode::W,
    KeyCode::A,
    KeyCode::S,
    KeyCode::D,
    KeyCode::R,
    KeyCode::Enter,
    KeyCode::Q,
    KeyCode::Escape,
];

/// Turns a single-finger drag into steering.
///
/// While the finger moves, the displacement from where it first touched
/// picks the direction; lifting the finger ends the gesture.
#[derive(Debug, Default)]
pub struct SwipeTracker {
    start: Option<Vec2>,
}

impl SwipeTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_tracking(&self) -> bool {
        self.start.is_some()
    }

    pub fn on_touch(&mut self, phase: TouchPhase, position: Vec2) -> Option<Direction> {
        match phase {
            TouchPhase::Started => {
                self.start = Some(position);
                None
            }
            TouchPhase::Moved => {
                let start = self.start?;
                let delta = position - start;
                swipe_direction(delta.x, delta.y)
            }
            TouchPhase::Stationary => None,
            TouchPhase::Ended | TouchPhase::Cancelled => {
                self.start = None;
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use macroquad::math::vec2;

    #[test]
    fn test_arrow_and_wasd_keys() {
        assert_eq!(intent_for_key(KeyCode::Up), Some(Intent::Steer(Direction::Up)));
        assert_eq!(intent_for_key(KeyCode::S), Some(Intent::Steer(Direction::Down)));
        assert_eq!(intent_for_key(KeyCode::A), Some(Intent::Steer(Direction::Left)));
        assert_eq!(intent_for_key(KeyCode::Right), Some(Intent::Steer(Direction::Right)));
    }

    #[test]
    fn test_control_keys() {
        assert_eq!(intent_for_key(KeyCode::R), Some(Intent::Restart));
        assert_eq!(intent_for_key(KeyCode::Enter), Some(Intent::Restart));
        assert_eq!(intent_for_key(KeyCode::Escape), Some(Intent::Quit));
    }

    #[test]
    fn test_unknown_key_ignored() {
        assert_eq!(intent_for_key(KeyCode::X), None);
        assert_eq!(intent_for_key(KeyCode::Space), None);
    }

    #[test]
    fn test_swipe_gesture() {
        let mut swipe = SwipeTracker::new();
        assert_eq!(swipe.on_touch(TouchPhase::Started, vec2(100.0, 100.0)), None);
        assert!(swipe.is_tracking());
        assert_eq!(
            swipe.on_touch(TouchPhase::Moved, vec2(140.0, 110.0)),
            Some(Direction::Right)
        );
        // still measured from the first touch
        assert_eq!(
            swipe.on_touch(TouchPhase::Moved, vec2(120.0, 160.0)),
            Some(Direction::Down)
        );
        assert_eq!(swipe.on_touch(TouchPhase::Ended, vec2(120.0, 160.0)), None);
        assert!(!swipe.is_tracking());
    }

    #[test]
    fn test_move_without_start_ignored() {
        let mut swipe = SwipeTracker::new();
        assert_eq!(swipe.on_touch(TouchPhase::Moved, vec2(50.0, 0.0)), None);
    }
}
