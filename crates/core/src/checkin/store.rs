//! In-memory review queue of evaluated check-ins.

use super::EvaluatedCheckin;
use crate::constants::DEFAULT_REVIEW_QUEUE_CAPACITY;
use crate::{CheckinError, CheckinResult};
use serde::Deserialize;
use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, RwLock};
use telecare_uuid::CheckinId;

/// Criteria for listing stored check-ins. Unset fields match everything.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct CheckinFilter {
    pub requires_consultation: Option<bool>,
    pub prescription_id: Option<String>,
}

impl CheckinFilter {
    /// Only check-ins that a provider must review.
    pub fn needing_review() -> Self {
        Self {
            requires_consultation: Some(true),
            ..Self::default()
        }
    }

    fn matches(&self, checkin: &EvaluatedCheckin) -> bool {
        self.requires_consultation
            .map_or(true, |wanted| checkin.requires_consultation() == wanted)
            && self.prescription_id.as_deref().map_or(true, |wanted| {
                checkin.record.prescription_id.as_deref() == Some(wanted)
            })
    }
}

struct Inner {
    capacity: usize,
    order: VecDeque<CheckinId>,
    by_id: HashMap<CheckinId, EvaluatedCheckin>,
}

/// Evaluated check-ins in submission order, holding at most `capacity` entries.
///
/// Cloning is cheap and every clone shares the same queue.
#[derive(Clone)]
pub struct CheckinStore {
    inner: Arc<RwLock<Inner>>,
}

impl Default for CheckinStore {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_REVIEW_QUEUE_CAPACITY)
    }
}

impl CheckinStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A queue that keeps the newest `capacity` check-ins. A capacity of zero is treated as one.
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            inner: Arc::new(RwLock::new(Inner {
                capacity,
                order: VecDeque::new(),
                by_id: HashMap::new(),
            })),
        }
    }

    /// Appends a check-in to the queue, evicting the oldest entry when the queue is full.
    ///
    /// # Errors
    ///
    /// Returns `CheckinError::DuplicateId` if a check-in with the same id is already stored, or
    /// `CheckinError::StorePoisoned` if a writer panicked while holding the lock.
    pub fn insert(&self, checkin: EvaluatedCheckin) -> CheckinResult<()> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| CheckinError::StorePoisoned)?;

        let id = checkin.record.id;
        if inner.by_id.contains_key(&id) {
            return Err(CheckinError::DuplicateId(id));
        }

        while inner.order.len() >= inner.capacity {
            let Some(oldest) = inner.order.pop_front() else {
                break;
            };
            inner.by_id.remove(&oldest);
            tracing::debug!("review queue full, evicted check-in {}", oldest);
        }

        inner.order.push_back(id);
        inner.by_id.insert(id, checkin);
        Ok(())
    }

    pub fn get(&self, id: &CheckinId) -> CheckinResult<Option<EvaluatedCheckin>> {
        let inner = self
            .inner
            .read()
            .map_err(|_| CheckinError::StorePoisoned)?;

        Ok(inner.by_id.get(id).cloned())
    }

    /// Returns the stored check-ins matching `filter`, oldest first.
    pub fn list(&self, filter: &CheckinFilter) -> CheckinResult<Vec<EvaluatedCheckin>> {
        let inner = self
            .inner
            .read()
            .map_err(|_| CheckinError::StorePoisoned)?;

        Ok(inner
            .order
            .iter()
            .filter_map(|id| inner.by_id.get(id))
            .filter(|checkin| filter.matches(checkin))
            .cloned()
            .collect())
    }

    pub fn len(&self) -> CheckinResult<usize> {
        let inner = self
            .inner
            .read()
            .map_err(|_| CheckinError::StorePoisoned)?;
        Ok(inner.order.len())
    }

    pub fn is_empty(&self) -> CheckinResult<bool> {
        Ok(self.len()? == 0)
    }
}
