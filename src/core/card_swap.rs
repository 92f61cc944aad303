//! Card-swap deck
//!
//! A pile of cards drawn as a skewed stack. Every `delay` milliseconds the
//! front card drops to the back and the next one comes forward. Hovering the
//! stack pauses the timer; leaving it restarts the countdown from zero.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

/// Stack geometry and timing
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CardSwapConfig {
    /// Horizontal (and depth) distance between neighbouring cards, in px
    pub card_distance: f64,
    /// Vertical distance between neighbouring cards, in px
    pub vertical_distance: f64,
    /// Time between swaps, in ms
    pub delay_ms: f64,
    /// Skew of the whole stack, in degrees
    pub skew_degrees: f64,
    pub pause_on_hover: bool,
}

impl Default for CardSwapConfig {
    fn default() -> Self {
        Self {
            card_distance: 60.0,
            vertical_distance: 70.0,
            delay_ms: 5000.0,
            skew_degrees: 6.0,
            pause_on_hover: true,
        }
    }
}

/// Position of a card within the stack
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardSlot {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub z_index: i32,
}

impl CardSlot {
    /// Slot for stack position `position` (0 = front) in a pile of `total`
    pub fn at(config: &CardSwapConfig, position: usize, total: usize) -> Self {
        let i = position as f64;
        Self {
            x: i * config.card_distance,
            y: -i * config.vertical_distance,
            z: -i * config.card_distance * 1.5,
            z_index: total.saturating_sub(position) as i32,
        }
    }

    /// Inline style placing a card in this slot
    pub fn css_style(&self, skew_degrees: f64) -> String {
        format!(
            "transform: translate(-50%, -50%) translate3d({:.1}px, {:.1}px, {:.1}px) skewY({:.1}deg); z-index: {};",
            self.x, self.y, self.z, skew_degrees, self.z_index
        )
    }
}

/// Result of a promotion
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Swap {
    /// Card sent to the back
    pub previous_front: usize,
    /// Card now at the front
    pub new_front: usize,
}

/// Stack ordering plus the repeating promotion timer
#[derive(Debug, Clone, PartialEq)]
pub struct CardSwapDeck {
    config: CardSwapConfig,
    order: VecDeque<usize>,
    elapsed_ms: f64,
    paused: bool,
}

impl CardSwapDeck {
    pub fn new(config: CardSwapConfig, total: usize) -> Self {
        Self {
            config,
            order: (0..total).collect(),
            elapsed_ms: 0.0,
            paused: false,
        }
    }

    pub fn config(&self) -> &CardSwapConfig {
        &self.config
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn front(&self) -> Option<usize> {
        self.order.front().copied()
    }

    /// Card indices from front to back
    pub fn order(&self) -> impl Iterator<Item = usize> + '_ {
        self.order.iter().copied()
    }

    /// Stack position of `card` (0 = front)
    pub fn position_of(&self, card: usize) -> Option<usize> {
        self.order.iter().position(|&c| c == card)
    }

    /// Current slot of `card`
    pub fn slot_of(&self, card: usize) -> Option<CardSlot> {
        self.position_of(card)
            .map(|position| CardSlot::at(&self.config, position, self.order.len()))
    }

    /// Send the front card to the back
    pub fn promote(&mut self) -> Option<Swap> {
        if self.order.len() < 2 {
            return None;
        }
        let previous_front = self.order.pop_front()?;
        self.order.push_back(previous_front);
        let new_front = self.order.front().copied()?;
        Some(Swap {
            previous_front,
            new_front,
        })
    }

    /// Advance the timer. Promotes once per elapsed `delay_ms`.
    ///
    /// Returns the last swap performed during this tick, if any.
    pub fn tick(&mut self, delta_ms: f64) -> Option<Swap> {
        if self.paused || !delta_ms.is_finite() || delta_ms <= 0.0 || self.config.delay_ms <= 0.0
        {
            return None;
        }

        self.elapsed_ms += delta_ms;
        let mut last = None;
        while self.elapsed_ms >= self.config.delay_ms {
            self.elapsed_ms -= self.config.delay_ms;
            last = self.promote().or(last);
        }
        last
    }

    /// Pointer entered the stack
    pub fn pointer_enter(&mut self) {
        if self.config.pause_on_hover {
            self.paused = true;
        }
    }

    /// Pointer left the stack; the countdown starts over
    pub fn pointer_leave(&mut self) {
        if self.paused {
            self.paused = false;
            self.elapsed_ms = 0.0;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn deck(total: usize) -> CardSwapDeck {
        CardSwapDeck::new(CardSwapConfig::default(), total)
    }

    #[test]
    fn test_slot_geometry() {
        let config = CardSwapConfig::default();
        let front = CardSlot::at(&config, 0, 3);
        assert_eq!(front.x, 0.0);
        assert_eq!(front.z_index, 3);

        let back = CardSlot::at(&config, 2, 3);
        assert_eq!(back.x, 120.0);
        assert_eq!(back.y, -140.0);
        assert_eq!(back.z, -180.0);
        assert_eq!(back.z_index, 1);
    }

    #[test]
    fn test_promote_rotates_order() {
        let mut deck = deck(3);
        let swap = deck.promote().unwrap();
        assert_eq!(swap.previous_front, 0);
        assert_eq!(swap.new_front, 1);
        assert_eq!(deck.order().collect::<Vec<_>>(), vec![1, 2, 0]);
        assert_eq!(deck.position_of(0), Some(2));
    }

    #[test]
    fn test_small_decks_never_promote() {
        assert!(deck(0).promote().is_none());
        assert!(deck(1).promote().is_none());
        assert!(deck(1).tick(60_000.0).is_none());
    }

    #[test]
    fn test_tick_promotes_after_delay() {
        let mut deck = deck(3);
        assert!(deck.tick(4999.0).is_none());
        let swap = deck.tick(1.0).unwrap();
        assert_eq!(swap.new_front, 1);
        assert_eq!(deck.front(), Some(1));
    }

    #[test]
    fn test_tick_catches_up_on_long_gaps() {
        let mut deck = deck(4);
        let swap = deck.tick(10_500.0).unwrap();
        assert_eq!(swap.new_front, 2);
        assert_eq!(deck.order().collect::<Vec<_>>(), vec![2, 3, 0, 1]);
    }

    #[test]
    fn test_hover_pauses_and_leave_restarts_countdown() {
        let mut deck = deck(3);
        deck.tick(4000.0);
        deck.pointer_enter();
        assert!(deck.is_paused());
        assert!(deck.tick(10_000.0).is_none());
        assert_eq!(deck.front(), Some(0));

        deck.pointer_leave();
        assert!(!deck.is_paused());
        assert!(deck.tick(4000.0).is_none());
        assert!(deck.tick(1000.0).is_some());
    }

    #[test]
    fn test_hover_ignored_when_pause_disabled() {
        let config = CardSwapConfig {
            pause_on_hover: false,
            ..CardSwapConfig::default()
        };
        let mut deck = CardSwapDeck::new(config, 2);
        deck.pointer_enter();
        assert!(!deck.is_paused());
        assert!(deck.tick(5000.0).is_some());
    }

    #[test]
    fn test_slot_follows_card_after_swap() {
        let mut deck = deck(3);
        deck.promote();
        let slot = deck.slot_of(1).unwrap();
        assert_eq!(slot.x, 0.0);
        assert_eq!(slot.z_index, 3);
        assert!(deck.slot_of(7).is_none());
    }

    #[test]
    fn test_css_style_contains_skew_and_layer() {
        let slot = CardSlot::at(&CardSwapConfig::default(), 1, 3);
        let style = slot.css_style(6.0);
        assert!(style.contains("translate3d(60.0px, -70.0px, -90.0px)"));
        assert!(style.contains("skewY(6.0deg)"));
        assert!(style.ends_with("z-index: 2;"));
    }
}
