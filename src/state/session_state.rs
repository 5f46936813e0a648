use std::collections::{HashSet, VecDeque};

use chrono::{DateTime, Local};

use crate::constants::CALL_COST;
use crate::data::catalog;
use crate::models::{HistoryEntry, ServiceRecord};
use crate::utils::HelplineError;

/// Session counters shown in the top bar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Counters {
    pub likes: u32,
    pub coins: u32,
    pub copies: u32,
}

/// Outcome of a like click
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LikeOutcome {
    Liked,
    AlreadyLiked,
}

/// Pure session model: counters, liked ids and call history.
///
/// Every user action is a single synchronous transition on this struct.
/// Rendering reads it back through `crate::view`.
pub struct SessionState {
    counters: Counters,
    liked_ids: HashSet<u32>,
    history: VecDeque<HistoryEntry>, // Most recent first
    history_limit: Option<usize>,
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new(crate::constants::DEFAULT_STARTING_COINS, None)
    }
}

impl SessionState {
    pub fn new(starting_coins: u32, history_limit: Option<usize>) -> Self {
        Self {
            counters: Counters {
                likes: 0,
                coins: starting_coins,
                copies: 0,
            },
            liked_ids: HashSet::new(),
            history: VecDeque::new(),
            history_limit,
        }
    }

    pub fn counters(&self) -> Counters {
        self.counters
    }

    pub fn is_liked(&self, service_id: u32) -> bool {
        self.liked_ids.contains(&service_id)
    }

    pub fn history(&self) -> impl ExactSizeIterator<Item = &HistoryEntry> {
        self.history.iter()
    }

    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    pub fn can_afford_call(&self) -> bool {
        self.counters.coins >= CALL_COST
    }

    /// Like a service once per session; repeat likes are ignored
    pub fn like(&mut self, service_id: u32) -> Result<LikeOutcome, HelplineError> {
        if catalog::find(service_id).is_none() {
            return Err(HelplineError::UnknownService(service_id));
        }

        if !self.liked_ids.insert(service_id) {
            return Ok(LikeOutcome::AlreadyLiked);
        }

        self.counters.likes += 1;
        Ok(LikeOutcome::Liked)
    }

    /// Spend the call cost and log the call at `now`.
    ///
    /// Rejects without touching any state when the balance is too low.
    pub fn call(
        &mut self,
        service_id: u32,
        now: DateTime<Local>,
    ) -> Result<&'static ServiceRecord, HelplineError> {
        let service =
            catalog::find(service_id).ok_or(HelplineError::UnknownService(service_id))?;

        let balance = self.counters.coins;
        let remaining = balance
            .checked_sub(CALL_COST)
            .ok_or(HelplineError::InsufficientCoins {
                required: CALL_COST,
                balance,
            })?;

        self.counters.coins = remaining;
        self.history.push_front(HistoryEntry::new(service, now));
        if let Some(limit) = self.history_limit {
            self.history.truncate(limit);
        }

        Ok(service)
    }

    /// Count one completed clipboard copy
    pub fn record_copy(&mut self) {
        self.counters.copies += 1;
    }

    /// Drop every history entry, returning how many were removed
    pub fn clear_history(&mut self) -> usize {
        let removed = self.history.len();
        self.history.clear();
        removed
    }
}
