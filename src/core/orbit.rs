//! Orbital card carousel math
//!
//! Cards sit evenly spaced on a virtual circle seen from the front. Each
//! frame the whole ring turns a little; a card's transform is derived from
//! its angle on the ring:
//! - `x = sin(angle) * radius_x`
//! - `z = cos(angle) * radius_z`
//! - `scale` goes from 0.6 (back of the ring) to 1.0 (facing the viewer)
//!
//! Nothing here touches the DOM. The UI layer feeds frame timestamps into a
//! [`FrameClock`], passes the deltas to [`OrbitAnimator::advance`] and
//! renders [`CardTransform::css_transform`] on each card.

use serde::{Deserialize, Serialize};

/// Smallest scale, reached by the card directly behind the ring's center
pub const MIN_SCALE: f64 = 0.6;
/// Largest scale, reached by the card directly facing the viewer
pub const MAX_SCALE: f64 = 1.0;
/// Upper bound of [`stack_order`]
pub const MAX_STACK_ORDER: i32 = 200;

/// Orbit geometry and speed
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OrbitConfig {
    /// Horizontal swing in pixels
    pub radius_x: f64,
    /// Depth separation between front and back in pixels
    pub radius_z: f64,
    /// Rotation speed in degrees per millisecond
    pub speed: f64,
}

impl Default for OrbitConfig {
    fn default() -> Self {
        Self {
            radius_x: 280.0,
            radius_z: 200.0,
            speed: 0.015,
        }
    }
}

/// On-screen transform of a single card
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardTransform {
    pub translate_x: f64,
    pub translate_z: f64,
    pub scale: f64,
    pub stack_order: i32,
}

impl CardTransform {
    /// CSS `transform` value for this card
    pub fn css_transform(&self) -> String {
        format!(
            "translateX({:.2}px) translateZ({:.2}px) scale({:.4})",
            self.translate_x, self.translate_z, self.scale
        )
    }

    /// Full inline style: transform plus z-index
    pub fn css_style(&self) -> String {
        format!(
            "transform: {}; z-index: {};",
            self.css_transform(),
            self.stack_order
        )
    }
}

/// Angular position of a card on the ring, in degrees within `[0, 360)`
pub fn card_angle_degrees(card_index: usize, rotation: f64, total_cards: usize) -> f64 {
    if total_cards == 0 {
        return 0.0;
    }
    let step = 360.0 / total_cards as f64;
    (card_index as f64 * step + rotation).rem_euclid(360.0)
}

/// Distance in degrees between a card and the viewer-facing 0° point
pub fn angular_distance_from_front(card_index: usize, rotation: f64, total_cards: usize) -> f64 {
    let angle = card_angle_degrees(card_index, rotation, total_cards);
    angle.min(360.0 - angle)
}

/// Compute the transform of one card for the given rotation
pub fn compute_transform(
    config: &OrbitConfig,
    card_index: usize,
    rotation: f64,
    total_cards: usize,
) -> CardTransform {
    let angle = card_angle_degrees(card_index, rotation, total_cards).to_radians();
    let depth = angle.cos();

    CardTransform {
        translate_x: angle.sin() * config.radius_x,
        translate_z: depth * config.radius_z,
        scale: MIN_SCALE + ((depth + 1.0) / 2.0) * (MAX_SCALE - MIN_SCALE),
        stack_order: stack_order(card_index, rotation, total_cards),
    }
}

/// Layering value in `[0, 200]`; cards closer to the viewer get larger values
pub fn stack_order(card_index: usize, rotation: f64, total_cards: usize) -> i32 {
    let angle = card_angle_degrees(card_index, rotation, total_cards).to_radians();
    ((angle.cos() + 1.0) * 100.0).round() as i32
}

/// Index of the card closest to the front, lowest index on exact ties
pub fn detect_frontmost(rotation: f64, total_cards: usize) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;
    for index in 0..total_cards {
        let distance = angular_distance_from_front(index, rotation, total_cards);
        match best {
            Some((_, best_distance)) if distance >= best_distance => {}
            _ => best = Some((index, distance)),
        }
    }
    best.map(|(index, _)| index)
}

/// Animator lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AnimatorState {
    /// Advancing every frame
    Running,
    /// Not mounted; frames are ignored
    #[default]
    Stopped,
}

/// Rotating carousel state
#[derive(Debug, Clone, PartialEq)]
pub struct OrbitAnimator {
    config: OrbitConfig,
    total_cards: usize,
    rotation: f64,
    frontmost: Option<usize>,
    state: AnimatorState,
}

impl OrbitAnimator {
    pub fn new(config: OrbitConfig, total_cards: usize) -> Self {
        Self {
            config,
            total_cards,
            rotation: 0.0,
            frontmost: detect_frontmost(0.0, total_cards),
            state: AnimatorState::Stopped,
        }
    }

    pub fn config(&self) -> &OrbitConfig {
        &self.config
    }

    pub fn total_cards(&self) -> usize {
        self.total_cards
    }

    /// Accumulated rotation in degrees (not wrapped)
    pub fn rotation(&self) -> f64 {
        self.rotation
    }

    pub fn state(&self) -> AnimatorState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == AnimatorState::Running
    }

    /// Card currently treated as active
    pub fn frontmost(&self) -> Option<usize> {
        self.frontmost
    }

    /// Enter the running state (component mounted)
    pub fn start(&mut self) {
        self.state = AnimatorState::Running;
    }

    /// Enter the stopped state (component unmounted)
    pub fn stop(&mut self) {
        self.state = AnimatorState::Stopped;
    }

    /// Advance the ring by `delta_ms` milliseconds.
    ///
    /// Returns the new active card index when the frontmost card changed
    /// during this step. The active card only changes when another card is
    /// strictly closer to the front than the current one.
    pub fn advance(&mut self, delta_ms: f64) -> Option<usize> {
        if !self.is_running() || !delta_ms.is_finite() || delta_ms <= 0.0 {
            return None;
        }

        self.rotation += delta_ms * self.config.speed;
        self.refresh_frontmost()
    }

    fn refresh_frontmost(&mut self) -> Option<usize> {
        let candidate = detect_frontmost(self.rotation, self.total_cards)?;

        match self.frontmost {
            Some(current) if current == candidate => None,
            Some(current) => {
                let current_distance =
                    angular_distance_from_front(current, self.rotation, self.total_cards);
                let candidate_distance =
                    angular_distance_from_front(candidate, self.rotation, self.total_cards);
                if candidate_distance < current_distance {
                    self.frontmost = Some(candidate);
                    Some(candidate)
                } else {
                    None
                }
            }
            None => {
                self.frontmost = Some(candidate);
                Some(candidate)
            }
        }
    }

    /// Transform of a single card at the current rotation
    pub fn transform(&self, card_index: usize) -> CardTransform {
        compute_transform(&self.config, card_index, self.rotation, self.total_cards)
    }

    /// Transforms of every card at the current rotation
    pub fn transforms(&self) -> Vec<CardTransform> {
        (0..self.total_cards).map(|i| self.transform(i)).collect()
    }
}

/// Turns host frame timestamps into per-frame deltas
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameClock {
    last_timestamp: Option<f64>,
    max_delta_ms: f64,
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new(100.0)
    }
}

impl FrameClock {
    pub fn new(max_delta_ms: f64) -> Self {
        Self {
            last_timestamp: None,
            max_delta_ms,
        }
    }

    /// Delta since the previous frame, capped at `max_delta_ms`.
    /// The first frame after a reset yields 0.
    pub fn tick(&mut self, timestamp_ms: f64) -> f64 {
        let delta = match self.last_timestamp {
            Some(last) if timestamp_ms > last => (timestamp_ms - last).min(self.max_delta_ms),
            _ => 0.0,
        };
        if self.last_timestamp.is_none_or(|last| timestamp_ms > last) {
            self.last_timestamp = Some(timestamp_ms);
        }
        delta
    }

    /// Forget the previous timestamp
    pub fn reset(&mut self) {
        self.last_timestamp = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn running(total: usize) -> OrbitAnimator {
        let mut animator = OrbitAnimator::new(OrbitConfig::default(), total);
        animator.start();
        animator
    }

    #[test]
    fn test_front_card_at_zero_rotation() {
        let t = compute_transform(&OrbitConfig::default(), 0, 0.0, 8);
        assert!(t.translate_x.abs() < EPS);
        assert!((t.translate_z - 200.0).abs() < EPS);
        assert!((t.scale - 1.0).abs() < EPS);
        assert_eq!(t.stack_order, 200);
    }

    #[test]
    fn test_back_card_at_zero_rotation() {
        let t = compute_transform(&OrbitConfig::default(), 4, 0.0, 8);
        assert!(t.translate_x.abs() < 1e-6);
        assert!((t.translate_z + 200.0).abs() < 1e-6);
        assert!((t.scale - 0.6).abs() < 1e-9);
        assert_eq!(t.stack_order, 0);
    }

    #[test]
    fn test_side_card_uses_full_horizontal_radius() {
        let config = OrbitConfig::default();
        let t = compute_transform(&config, 2, 0.0, 8);
        assert!((t.translate_x - config.radius_x).abs() < 1e-6);
        assert!((t.scale - 0.8).abs() < 1e-9);
        assert_eq!(t.stack_order, 100);
    }

    #[test]
    fn test_scale_and_translation_stay_bounded() {
        let config = OrbitConfig {
            radius_x: 150.0,
            radius_z: 90.0,
            speed: 0.02,
        };
        for total in 1..=10 {
            for step in 0..720 {
                let rotation = step as f64 * 1.37 - 300.0;
                for index in 0..total {
                    let t = compute_transform(&config, index, rotation, total);
                    assert!(t.scale >= MIN_SCALE - EPS && t.scale <= MAX_SCALE + EPS);
                    assert!(t.translate_x.abs() <= config.radius_x + EPS);
                    assert!(t.translate_z.abs() <= config.radius_z + EPS);
                    assert!((0..=MAX_STACK_ORDER).contains(&t.stack_order));
                }
            }
        }
    }

    #[test]
    fn test_full_rotation_is_periodic() {
        let config = OrbitConfig::default();
        let total = 6;
        let base = 37.5;
        let shifted = base + 360.0 * total as f64;
        for index in 0..total {
            let a = compute_transform(&config, index, base, total);
            let b = compute_transform(&config, index, shifted, total);
            assert!((a.translate_x - b.translate_x).abs() < 1e-6);
            assert!((a.translate_z - b.translate_z).abs() < 1e-6);
            assert!((a.scale - b.scale).abs() < 1e-9);
            assert_eq!(a.stack_order, b.stack_order);
        }
    }

    #[test]
    fn test_stack_order_grows_toward_viewer() {
        let orders: Vec<i32> = (0..=4).map(|i| stack_order(i, 0.0, 8)).collect();
        assert!(orders.windows(2).all(|w| w[0] >= w[1]));
        assert_eq!(orders[0], 200);
        assert_eq!(orders[4], 0);
    }

    #[test]
    fn test_detect_frontmost_empty_ring() {
        assert_eq!(detect_frontmost(10.0, 0), None);
    }

    #[test]
    fn test_detect_frontmost_tie_prefers_lowest_index() {
        // Cards 0 and 7 are both 22.5° away
        assert_eq!(detect_frontmost(22.5, 8), Some(0));
        assert_eq!(detect_frontmost(22.6, 8), Some(7));
    }

    #[test]
    fn test_detect_frontmost_always_in_range() {
        for total in 1..=10 {
            for step in 0..400 {
                let index = detect_frontmost(step as f64 * 2.3, total);
                assert!(index.is_some_and(|i| i < total));
            }
        }
    }

    #[test]
    fn test_advance_switches_frontmost_after_half_step() {
        let config = OrbitConfig {
            speed: 0.5,
            ..OrbitConfig::default()
        };
        let mut animator = OrbitAnimator::new(config, 8);
        animator.start();
        assert_eq!(animator.frontmost(), Some(0));

        assert_eq!(animator.advance(30.0), None);
        assert_eq!(animator.rotation(), 15.0);
        assert_eq!(animator.frontmost(), Some(0));

        // 22.5° exactly is a tie; card 0 stays active
        assert_eq!(animator.advance(15.0), None);
        assert_eq!(animator.frontmost(), Some(0));

        assert_eq!(animator.advance(2.0), Some(7));
        assert_eq!(animator.frontmost(), Some(7));
    }

    #[test]
    fn test_advance_notifies_once_per_change() {
        let mut animator = running(4);
        let mut changes = Vec::new();
        for _ in 0..2400 {
            if let Some(index) = animator.advance(10.0) {
                changes.push(index);
            }
        }
        // 2400 * 10ms * 0.015 = 360°, one full turn: 3, 2, 1, then back to 0
        assert_eq!(changes, vec![3, 2, 1, 0]);
    }

    #[test]
    fn test_rotation_is_monotonic() {
        let mut animator = running(5);
        let mut last = animator.rotation();
        for delta in [16.0, 0.0, -20.0, f64::NAN, f64::INFINITY, 33.3] {
            animator.advance(delta);
            assert!(animator.rotation() >= last);
            last = animator.rotation();
        }
        assert!((animator.rotation() - (16.0 + 33.3) * 0.015).abs() < 1e-9);
    }

    #[test]
    fn test_stopped_animator_ignores_frames() {
        let mut animator = OrbitAnimator::new(OrbitConfig::default(), 8);
        assert_eq!(animator.state(), AnimatorState::Stopped);
        assert_eq!(animator.advance(5000.0), None);
        assert_eq!(animator.rotation(), 0.0);

        animator.start();
        animator.advance(100.0);
        animator.stop();
        let frozen = animator.rotation();
        animator.advance(100.0);
        assert_eq!(animator.rotation(), frozen);
    }

    #[test]
    fn test_transforms_cover_every_card() {
        let animator = running(6);
        let transforms = animator.transforms();
        assert_eq!(transforms.len(), 6);
        assert_eq!(transforms[0], animator.transform(0));
    }

    #[test]
    fn test_css_style_format() {
        let t = compute_transform(&OrbitConfig::default(), 0, 0.0, 8);
        assert_eq!(
            t.css_transform(),
            "translateX(0.00px) translateZ(200.00px) scale(1.0000)"
        );
        assert!(t.css_style().ends_with("z-index: 200;"));
    }

    #[test]
    fn test_frame_clock_first_frame_is_zero() {
        let mut clock = FrameClock::default();
        assert_eq!(clock.tick(1234.0), 0.0);
        assert_eq!(clock.tick(1250.0), 16.0);
    }

    #[test]
    fn test_frame_clock_caps_large_gaps() {
        let mut clock = FrameClock::new(50.0);
        clock.tick(0.0);
        assert_eq!(clock.tick(10_000.0), 50.0);
    }

    #[test]
    fn test_frame_clock_ignores_backwards_timestamps() {
        let mut clock = FrameClock::default();
        clock.tick(100.0);
        assert_eq!(clock.tick(90.0), 0.0);
        assert_eq!(clock.tick(116.0), 16.0);

        clock.reset();
        assert_eq!(clock.tick(500.0), 0.0);
    }
}
