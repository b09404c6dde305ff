//! Feed Model
//!
//! The candidate deck and the match sequencer that walks it.

use crate::catalog;
use crate::logic::sequencer::{
    FireOutcome, MatchSequencer, SequencerTimings, SwipeDirection, SwipeOutcome, TimerToken,
};

use super::types::Candidate;

#[derive(Clone, Debug)]
pub struct FeedModel {
    pub candidates: Vec<Candidate>,
    pub sequencer: MatchSequencer,
}

impl FeedModel {
    /// Deck seeded from the static catalog
    pub fn new(timings: SequencerTimings) -> Self {
        Self::with_candidates(catalog::candidates(), timings)
    }

    pub fn with_candidates(candidates: Vec<Candidate>, timings: SequencerTimings) -> Self {
        let sequencer = MatchSequencer::new(candidates.len(), timings);
        Self {
            candidates,
            sequencer,
        }
    }

    /// Card on screen
    pub fn current_candidate(&self) -> Option<&Candidate> {
        self.candidates.get(self.sequencer.displayed_index())
    }

    /// Candidate named by the match banner
    pub fn matched_candidate(&self) -> Option<&Candidate> {
        self.sequencer
            .matched()
            .and_then(|idx| self.candidates.get(idx))
    }

    pub fn swipe(&mut self, direction: SwipeDirection) -> SwipeOutcome {
        let outcome = self.sequencer.swipe(direction);
        match outcome {
            SwipeOutcome::Started { timer, .. } => log::debug!(
                "Swipe {} on {:?}, settle timer {:?}",
                direction.as_str(),
                self.current_candidate().map(|c| c.name.as_str()),
                timer.token
            ),
            SwipeOutcome::Ignored => log::debug!("Swipe {} ignored", direction.as_str()),
        }
        outcome
    }

    pub fn fire(&mut self, token: TimerToken) -> FireOutcome {
        let outcome = self.sequencer.fire(token);
        match outcome {
            FireOutcome::Stale => log::debug!("Stale feed timer {:?} dropped", token),
            FireOutcome::Announced { matched, .. } => log::info!(
                "Match with {}",
                self.candidates
                    .get(matched)
                    .map(|c| c.name.as_str())
                    .unwrap_or("?")
            ),
            _ => {}
        }
        outcome
    }

    /// Screen left: back to the first card, pending timers go stale
    pub fn reset(&mut self) {
        self.sequencer.reset();
    }
}
