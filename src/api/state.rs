//! Application state for the staffing API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::notify::NotificationSender;
use crate::store::StaffingStore;

/// Shared application state.
///
/// Contains the staffing store behind a read-write lock and the
/// notification sender used for approval and broadcast messages.
#[derive(Clone)]
pub struct AppState {
    store: Arc<RwLock<StaffingStore>>,
    notifier: Arc<dyn NotificationSender + Send + Sync>,
}

impl AppState {
    /// Creates a new application state around a store and a sender.
    pub fn new(
        store: StaffingStore,
        notifier: Arc<dyn NotificationSender + Send + Sync>,
    ) -> Self {
        Self {
            store: Arc::new(RwLock::new(store)),
            notifier,
        }
    }

    /// Returns the shared store handle.
    pub fn store(&self) -> &Arc<RwLock<StaffingStore>> {
        &self.store
    }

    /// Returns the notification sender.
    pub fn notifier(&self) -> &(dyn NotificationSender + Send + Sync) {
        self.notifier.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notify::LogOnlySender;

    #[test]
    fn test_app_state_is_clone() {
        // Required for axum state
        fn assert_clone<T: Clone>() {}
        assert_clone::<AppState>();
    }

    #[tokio::test]
    async fn test_store_is_shared_between_clones() {
        let state = AppState::new(StaffingStore::new(), Arc::new(LogOnlySender));
        let clone = state.clone();

        let monitor = crate::models::Monitor::new(
            "ana",
            crate::models::MonitorCategory::Monitor,
        );
        let id = monitor.id;
        state.store().write().await.insert_monitor(monitor);

        assert!(clone.store().read().await.monitor(id).is_ok());
    }
}
