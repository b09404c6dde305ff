//! Match sequencer
//!
//! Pure state machine behind the discovery feed's swipe interaction:
//!
//! ```text
//! Idle(i) --swipe(d)--> Animating(i, d) --settle--> Idle(i+1)              (reject)
//!                                       --settle--> MatchAnnounced(i+1, i) (like)
//! MatchAnnounced --clear--> Idle(i+1)
//! ```
//!
//! The sequencer never sleeps. Every transition that needs a delay hands back
//! a [`TimerRequest`] carrying a [`TimerToken`]; whoever runs the clock calls
//! [`MatchSequencer::fire`] with that token when the delay elapses. Only the
//! most recently issued token is live, so a timer superseded by a newer
//! gesture (or by a reset) is reported as [`FireOutcome::Stale`] and changes
//! nothing.

use std::time::Duration;

/// Direction of a swipe gesture
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SwipeDirection {
    Reject,
    Like,
}

impl SwipeDirection {
    /// Signed offset (-1 for reject, +1 for like)
    pub fn offset(self) -> i8 {
        match self {
            SwipeDirection::Reject => -1,
            SwipeDirection::Like => 1,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SwipeDirection::Reject => "reject",
            SwipeDirection::Like => "like",
        }
    }
}

/// Identifies one scheduled timer
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TimerToken(pub u64);

/// What a timer does when it fires
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TimerKind {
    /// End of the card animation: advance the deck
    Settle,
    /// End of the match banner
    ClearBanner,
}

/// A delay the caller must schedule on the sequencer's behalf
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TimerRequest {
    pub token: TimerToken,
    pub kind: TimerKind,
    pub delay: Duration,
}

/// Delays used by the sequencer
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SequencerTimings {
    pub settle: Duration,
    pub banner: Duration,
}

impl Default for SequencerTimings {
    fn default() -> Self {
        Self {
            settle: Duration::from_millis(300),
            banner: Duration::from_millis(2000),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SequencerState {
    Idle {
        index: usize,
    },
    Animating {
        index: usize,
        direction: SwipeDirection,
        /// Candidate captured at swipe time (only for likes)
        captured: Option<usize>,
    },
    MatchAnnounced {
        /// Already-advanced deck position
        index: usize,
        matched: usize,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SwipeOutcome {
    /// Card is in flight; caller must schedule the timer
    Started {
        timer: TimerRequest,
        /// Banner that was on screen and got dismissed by this gesture
        dismissed_match: Option<usize>,
    },
    /// A card is already in flight, or the deck is empty
    Ignored,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FireOutcome {
    /// Token was superseded or never issued
    Stale,
    /// Reject settled, deck now shows `index`
    Advanced { index: usize },
    /// Like settled; caller must schedule the banner timer
    Announced {
        index: usize,
        matched: usize,
        timer: TimerRequest,
    },
    BannerCleared { index: usize },
}

#[derive(Clone, Debug)]
pub struct MatchSequencer {
    state: SequencerState,
    len: usize,
    timings: SequencerTimings,
    generation: u64,
    pending: Option<TimerToken>,
}

impl MatchSequencer {
    /// Create a sequencer over a deck of `len` candidates
    pub fn new(len: usize, timings: SequencerTimings) -> Self {
        Self {
            state: SequencerState::Idle { index: 0 },
            len,
            timings,
            generation: 0,
            pending: None,
        }
    }

    pub fn state(&self) -> SequencerState {
        self.state
    }

    /// Deck position currently on screen
    pub fn displayed_index(&self) -> usize {
        match self.state {
            SequencerState::Idle { index }
            | SequencerState::Animating { index, .. }
            | SequencerState::MatchAnnounced { index, .. } => index,
        }
    }

    /// Direction of the card in flight (neutral when none)
    pub fn direction(&self) -> Option<SwipeDirection> {
        match self.state {
            SequencerState::Animating { direction, .. } => Some(direction),
            _ => None,
        }
    }

    /// Candidate named by the match banner, if showing
    pub fn matched(&self) -> Option<usize> {
        match self.state {
            SequencerState::MatchAnnounced { matched, .. } => Some(matched),
            _ => None,
        }
    }

    pub fn pending_token(&self) -> Option<TimerToken> {
        self.pending
    }

    /// Handle a swipe gesture
    pub fn swipe(&mut self, direction: SwipeDirection) -> SwipeOutcome {
        if self.len == 0 {
            return SwipeOutcome::Ignored;
        }

        let (index, dismissed_match) = match self.state {
            SequencerState::Idle { index } => (index, None),
            SequencerState::Animating { .. } => return SwipeOutcome::Ignored,
            SequencerState::MatchAnnounced { index, matched } => (index, Some(matched)),
        };

        let captured = match direction {
            SwipeDirection::Like => Some(index),
            SwipeDirection::Reject => None,
        };
        self.state = SequencerState::Animating {
            index,
            direction,
            captured,
        };

        SwipeOutcome::Started {
            timer: self.schedule(TimerKind::Settle, self.timings.settle),
            dismissed_match,
        }
    }

    /// Deliver an elapsed timer
    pub fn fire(&mut self, token: TimerToken) -> FireOutcome {
        if self.pending != Some(token) {
            return FireOutcome::Stale;
        }
        self.pending = None;

        match self.state {
            SequencerState::Animating {
                index, captured, ..
            } => {
                let next = (index + 1) % self.len;
                match captured {
                    Some(matched) => {
                        self.state = SequencerState::MatchAnnounced {
                            index: next,
                            matched,
                        };
                        let timer = self.schedule(TimerKind::ClearBanner, self.timings.banner);
                        FireOutcome::Announced {
                            index: next,
                            matched,
                            timer,
                        }
                    }
                    None => {
                        self.state = SequencerState::Idle { index: next };
                        FireOutcome::Advanced { index: next }
                    }
                }
            }
            SequencerState::MatchAnnounced { index, .. } => {
                self.state = SequencerState::Idle { index };
                FireOutcome::BannerCleared { index }
            }
            SequencerState::Idle { .. } => FireOutcome::Stale,
        }
    }

    /// Back to the first card; every outstanding token goes stale
    pub fn reset(&mut self) {
        self.state = SequencerState::Idle { index: 0 };
        self.pending = None;
    }

    fn schedule(&mut self, kind: TimerKind, delay: Duration) -> TimerRequest {
        self.generation += 1;
        let token = TimerToken(self.generation);
        self.pending = Some(token);
        TimerRequest { token, kind, delay }
    }
}
