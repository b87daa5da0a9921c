use crate::config::StackConfig;

pub const Z_STACKED_BASE: i32 = 200;
pub const Z_RESTING: i32 = 300;
pub const Z_PASSED: i32 = 400;
pub const Z_ACTIVE: i32 = 500;
pub const Z_INCOMING: i32 = 640;
pub const Z_INCOMING_PINNED: i32 = 650;
pub const Z_FOLLOWING: i32 = 660;

/// Live window readings for one scroll/resize tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollState {
    pub scroll_y: f64,
    /// `getBoundingClientRect().top` of the stack container.
    pub stack_top_in_viewport: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Placement {
    /// `position: fixed`, `top` relative to the viewport.
    Pinned { top: f64 },
    /// `position: absolute`, resting one step below its own slot.
    StackedBehind { top: f64 },
    /// `position: absolute`, at its own slot in the stack.
    Queued { top: f64 },
}

impl Placement {
    pub fn top(&self) -> f64 {
        match *self {
            Placement::Pinned { top }
            | Placement::StackedBehind { top }
            | Placement::Queued { top } => top,
        }
    }

    pub fn css_position(&self) -> &'static str {
        match self {
            Placement::Pinned { .. } => "fixed",
            Placement::StackedBehind { .. } | Placement::Queued { .. } => "absolute",
        }
    }

    pub fn is_pinned(&self) -> bool {
        matches!(self, Placement::Pinned { .. })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardRole {
    Passed,
    Active,
    Incoming,
    /// The card after the incoming one; its header peeks over the incoming card.
    Following,
    Waiting,
    /// Laid out statically while the stack is in its end phase.
    Settled,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardLayout {
    pub role: CardRole,
    pub placement: Placement,
    pub z_index: i32,
}

impl CardLayout {
    pub fn is_active(&self) -> bool {
        self.role == CardRole::Active && self.placement.is_pinned()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct StackFrame {
    pub active_index: usize,
    pub end_phase: bool,
    pub container_height: f64,
    pub cards: Vec<CardLayout>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StackGeometry {
    pub card_count: usize,
    pub card_height: f64,
    pub overlap: f64,
    pub peek: f64,
}

impl StackGeometry {
    pub fn new(card_count: usize, card_height: f64, config: &StackConfig) -> Self {
        let card_height = if card_height > 0.0 {
            card_height
        } else {
            config.card_height
        };
        Self {
            card_count,
            card_height,
            overlap: config.overlap,
            peek: config.peek,
        }
    }

    /// Vertical distance between the tops of two consecutive cards.
    pub fn step(&self) -> f64 {
        self.card_height + self.overlap
    }

    pub fn container_height(&self) -> f64 {
        if self.card_count == 0 {
            return 0.0;
        }
        self.step() * (self.card_count - 1) as f64 + self.card_height
    }

    fn last_index(&self) -> usize {
        self.card_count.saturating_sub(1)
    }

    /// Highest card whose scroll range contains `scroll_y`, or 0 if none does.
    pub fn active_index(&self, state: &ScrollState) -> usize {
        let stack_top = state.stack_top_in_viewport + state.scroll_y;
        (0..self.card_count)
            .rev()
            .find(|&i| {
                let start = stack_top + i as f64 * self.step();
                state.scroll_y >= start && state.scroll_y < start + self.card_height
            })
            .unwrap_or(0)
    }

    pub fn is_end_phase(&self, state: &ScrollState, active: usize) -> bool {
        let last = self.last_index();
        let container_top = state.stack_top_in_viewport.max(0.0);
        let last_viewport_top = state.stack_top_in_viewport + last as f64 * self.step();
        active == last || last_viewport_top <= container_top + self.peek
    }

    /// Layout of card `index` given the already resolved active index and phase.
    pub fn card_layout(
        &self,
        state: &ScrollState,
        index: usize,
        active: usize,
        end_phase: bool,
    ) -> CardLayout {
        let step = self.step();
        let slot_top = index as f64 * step;
        let container_top = state.stack_top_in_viewport.max(0.0);
        let stack_bottom =
            state.stack_top_in_viewport + state.scroll_y + self.container_height();
        let within = state.scroll_y < stack_bottom;

        let stacked = CardLayout {
            role: CardRole::Passed,
            placement: Placement::StackedBehind {
                top: (index + 1) as f64 * step,
            },
            z_index: Z_STACKED_BASE + index as i32,
        };
        let resting = |role| CardLayout {
            role,
            placement: Placement::Queued { top: slot_top },
            z_index: Z_RESTING,
        };

        if end_phase {
            return if index < active {
                CardLayout {
                    role: CardRole::Settled,
                    ..stacked
                }
            } else {
                resting(CardRole::Settled)
            };
        }

        if index == active && within {
            CardLayout {
                role: CardRole::Active,
                placement: Placement::Pinned { top: container_top },
                z_index: Z_ACTIVE,
            }
        } else if index < active && within {
            CardLayout {
                role: CardRole::Passed,
                placement: Placement::Pinned { top: container_top },
                z_index: Z_PASSED,
            }
        } else if index < active {
            stacked
        } else if index == active + 1 && within {
            let viewport_top = state.stack_top_in_viewport + slot_top;
            if viewport_top <= container_top + self.peek {
                CardLayout {
                    role: CardRole::Incoming,
                    placement: Placement::Pinned {
                        top: container_top + self.peek,
                    },
                    z_index: Z_INCOMING_PINNED,
                }
            } else {
                CardLayout {
                    role: CardRole::Incoming,
                    placement: Placement::Queued { top: slot_top },
                    z_index: Z_INCOMING,
                }
            }
        } else if index == active + 2 && within {
            CardLayout {
                role: CardRole::Following,
                placement: Placement::Queued { top: slot_top },
                z_index: Z_FOLLOWING,
            }
        } else {
            resting(CardRole::Waiting)
        }
    }

    pub fn frame(&self, state: &ScrollState) -> StackFrame {
        let active_index = self.active_index(state);
        let end_phase = self.is_end_phase(state, active_index);
        let cards = (0..self.card_count)
            .map(|i| self.card_layout(state, i, active_index, end_phase))
            .collect();

        StackFrame {
            active_index,
            end_phase,
            container_height: self.container_height(),
            cards,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn geometry() -> StackGeometry {
        StackGeometry::new(10, 520.0, &StackConfig::default())
    }

    /// Page where the stack container starts `offset` pixels into the document.
    fn at(scroll_y: f64, offset: f64) -> ScrollState {
        ScrollState {
            scroll_y,
            stack_top_in_viewport: offset - scroll_y,
        }
    }

    #[test]
    fn container_fits_the_whole_stack() {
        let g = geometry();
        assert_eq!(g.step(), 480.0);
        assert_eq!(g.container_height(), 480.0 * 9.0 + 520.0);
        assert_eq!(g.frame(&at(0.0, 300.0)).container_height, 4840.0);
    }

    #[test]
    fn unmeasured_card_falls_back_to_configured_height() {
        let g = StackGeometry::new(10, 0.0, &StackConfig::default());
        assert_eq!(g.card_height, 520.0);
        assert_eq!(g.container_height(), 4840.0);
    }

    #[test]
    fn empty_stack_has_no_height() {
        let g = StackGeometry::new(0, 520.0, &StackConfig::default());
        assert_eq!(g.container_height(), 0.0);
        assert!(g.frame(&at(0.0, 0.0)).cards.is_empty());
    }

    #[test]
    fn later_card_wins_overlapping_ranges() {
        let g = geometry();
        // 500px into the stack is inside both card 0 [0,520) and card 1 [480,1000).
        assert_eq!(g.active_index(&at(800.0, 300.0)), 1);
        assert_eq!(g.active_index(&at(300.0 + 479.0, 300.0)), 0);
    }

    #[test]
    fn defaults_to_first_card_before_the_stack() {
        let g = geometry();
        let frame = g.frame(&at(0.0, 600.0));
        assert_eq!(frame.active_index, 0);
        assert!(!frame.end_phase);
        assert!(frame.cards[0].is_active());
        assert_eq!(frame.cards[0].placement, Placement::Pinned { top: 600.0 });
    }

    #[test]
    fn exactly_one_active_card_until_end_phase() {
        let g = geometry();
        let offset = 200.0;
        let mut scroll = 0.0;
        while scroll < offset + g.container_height() {
            let frame = g.frame(&at(scroll, offset));
            let active = frame.cards.iter().filter(|c| c.is_active()).count();
            if frame.end_phase {
                assert_eq!(active, 0, "scroll {scroll}");
                assert!(frame.cards.iter().all(|c| !c.placement.is_pinned()));
            } else {
                assert_eq!(active, 1, "scroll {scroll}");
                assert!(frame.cards[frame.active_index].is_active());
            }
            scroll += 7.0;
        }
    }

    #[test]
    fn z_order_keeps_following_header_above_incoming() {
        let g = geometry();
        let offset = 100.0;
        for active in 1..8 {
            // Middle of the card's range, before the incoming card nears the top.
            let scroll = offset + active as f64 * g.step() + 10.0;
            let frame = g.frame(&at(scroll, offset));
            assert_eq!(frame.active_index, active);
            assert!(!frame.end_phase);

            let z = |i: usize| frame.cards[i].z_index;
            for passed in 0..active {
                assert_eq!(frame.cards[passed].role, CardRole::Passed);
                assert!(z(passed) < z(active));
            }
            assert_eq!(frame.cards[active + 1].role, CardRole::Incoming);
            assert_eq!(frame.cards[active + 2].role, CardRole::Following);
            assert!(z(active) < z(active + 1));
            assert!(z(active + 1) < z(active + 2));
        }
    }

    #[test]
    fn incoming_card_pins_below_active_once_near_top() {
        let g = geometry();
        let offset = 0.0;
        // Card 2 starts at 960; at 950 its top sits 10px below the viewport top.
        let frame = g.frame(&at(950.0, offset));
        assert_eq!(frame.active_index, 1);
        let incoming = frame.cards[2];
        assert_eq!(incoming.role, CardRole::Incoming);
        assert_eq!(incoming.placement, Placement::Pinned { top: 24.0 });
        assert_eq!(incoming.z_index, Z_INCOMING_PINNED);

        let early = g.frame(&at(500.0, offset)).cards[2];
        assert_eq!(early.placement, Placement::Queued { top: 960.0 });
        assert_eq!(early.z_index, Z_INCOMING);
    }

    #[test]
    fn passed_cards_pin_behind_active() {
        let g = geometry();
        let frame = g.frame(&at(1500.0, 0.0));
        assert_eq!(frame.active_index, 3);
        for card in &frame.cards[..3] {
            assert_eq!(card.placement, Placement::Pinned { top: 0.0 });
            assert_eq!(card.z_index, Z_PASSED);
        }
    }

    #[test]
    fn end_phase_when_last_card_nears_container_top() {
        let g = geometry();
        let offset = 0.0;
        // Last card slot starts at 4320; 24px of peek triggers the end phase early.
        let before = g.frame(&at(4320.0 - 30.0, offset));
        assert!(!before.end_phase);

        let frame = g.frame(&at(4320.0 - 20.0, offset));
        assert_eq!(frame.active_index, 8);
        assert!(frame.end_phase);
        for (i, card) in frame.cards.iter().enumerate() {
            assert_eq!(card.role, CardRole::Settled);
            if i < 8 {
                assert_eq!(card.placement, Placement::StackedBehind { top: (i + 1) as f64 * 480.0 });
                assert_eq!(card.z_index, Z_STACKED_BASE + i as i32);
            } else {
                assert_eq!(card.placement, Placement::Queued { top: i as f64 * 480.0 });
                assert_eq!(card.z_index, Z_RESTING);
            }
        }
    }

    #[test]
    fn end_phase_when_last_card_is_active() {
        let g = geometry();
        let frame = g.frame(&at(4320.0 + 100.0, 0.0));
        assert_eq!(frame.active_index, 9);
        assert!(frame.end_phase);
        assert!(frame.cards.iter().all(|c| !c.is_active()));
    }

    #[test]
    fn end_phase_persists_after_the_stack() {
        let g = geometry();
        let frame = g.frame(&at(10_000.0, 0.0));
        assert_eq!(frame.active_index, 0);
        assert!(frame.end_phase);
        assert_eq!(frame.cards[0].placement, Placement::Queued { top: 0.0 });
    }
}
