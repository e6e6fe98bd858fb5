//! Dashboard State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use std::collections::HashSet;

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::{Application, ValidationReport};
use crate::report::forwarded_ids;

/// Records fetched for the dashboard plus local forwarding state
#[derive(Clone, Debug, Default, Store)]
pub struct DashboardState {
    /// Applications, highest id first
    pub applications: Vec<Application>,
    /// Reports filed so far, used for the Report column
    pub validation_reports: Vec<ValidationReport>,
    /// Applications forwarded to DCRB, by the server or in this session
    pub sent_ids: HashSet<u32>,
}

/// Type alias for the store
pub type DashboardStore = Store<DashboardState>;

pub fn use_dashboard_store() -> DashboardStore {
    expect_context::<DashboardStore>()
}

// ========================
// Store Helper Functions
// ========================

// Requests finish in detached tasks, possibly after the dashboard (and its
// store) is gone, so every helper goes through `try_update`, which is a no-op
// on a disposed store.

/// Replace the application list and reseed the sent set from it
pub fn store_set_applications(store: &DashboardStore, apps: Vec<Application>) {
    let sent = forwarded_ids(&apps);
    store.sent_ids().try_update(|ids| *ids = sent);
    store.applications().try_update(|list| *list = apps);
}

pub fn store_set_validation_reports(store: &DashboardStore, reports: Vec<ValidationReport>) {
    store.validation_reports().try_update(|list| *list = reports);
}

/// Remove an application from the store by ID
pub fn store_remove_application(store: &DashboardStore, app_id: u32) {
    store.applications().try_update(|apps| apps.retain(|app| app.id != app_id));
    store.sent_ids().try_update(|ids| ids.remove(&app_id));
}

/// Record a successful DCRB forward
pub fn store_mark_sent(store: &DashboardStore, app_id: u32) {
    store.sent_ids().try_update(|ids| ids.insert(app_id));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_app(id: u32, forwarded: bool) -> Application {
        serde_json::from_value(serde_json::json!({ "id": id, "forwarded_to_dcrb": forwarded }))
            .unwrap()
    }

    #[test]
    fn test_helpers_update_live_store() {
        let owner = Owner::new();
        owner.with(|| {
            let store = Store::new(DashboardState::default());
            store_set_applications(&store, vec![make_app(3, true), make_app(2, false), make_app(1, false)]);
            assert!(store.sent_ids().with_untracked(|ids| ids.contains(&3)));

            store_mark_sent(&store, 2);
            store_remove_application(&store, 3);

            let ids: Vec<u32> = store.applications().with_untracked(|apps| apps.iter().map(|a| a.id).collect());
            assert_eq!(ids, vec![2, 1]);
            assert!(store.sent_ids().with_untracked(|ids| ids.contains(&2) && !ids.contains(&3)));
        });
    }

    #[test]
    fn test_helpers_ignore_disposed_store() {
        let owner = Owner::new();
        let store = owner.with(|| Store::new(DashboardState::default()));
        owner.cleanup();

        // Responses landing after the dashboard unmounted must not panic
        store_remove_application(&store, 1);
        store_mark_sent(&store, 1);
        store_set_applications(&store, vec![make_app(1, true)]);
        store_set_validation_reports(&store, Vec::new());
    }
}
