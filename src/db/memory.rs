//! In-process store used as a test double for the router and service.

use async_trait::async_trait;
use std::sync::Mutex;

use super::models::Visit;
use super::store::{StoreError, VisitStore};

#[derive(Default)]
pub struct MemoryVisitStore {
    visits: Mutex<Vec<Visit>>,
}

impl MemoryVisitStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of every stored visit in insertion order.
    pub fn all(&self) -> Vec<Visit> {
        self.lock().clone()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<Visit>> {
        // Poisoning cannot leave the Vec half-written.
        self.visits.lock().unwrap_or_else(|e| e.into_inner())
    }
}

#[async_trait]
impl VisitStore for MemoryVisitStore {
    async fn insert(&self, visit: &Visit) -> Result<(), StoreError> {
        self.lock().push(visit.clone());
        Ok(())
    }

    async fn select_recent(&self, limit: u32) -> Result<Vec<Visit>, StoreError> {
        let visits = self.lock();
        let mut indexed: Vec<(usize, &Visit)> = visits.iter().enumerate().collect();
        indexed.sort_by(|(ia, a), (ib, b)| b.timestamp.cmp(&a.timestamp).then(ib.cmp(ia)));
        Ok(indexed
            .into_iter()
            .take(limit as usize)
            .map(|(_, v)| v.clone())
            .collect())
    }
}
