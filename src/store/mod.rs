//! In-memory persistence for the staffing workflow.
//!
//! Real storage is a conventional relational store; this module keeps the
//! same contract in memory: per-entity maps keyed by id, unique indexes for
//! the (monitor, season) interest pair, the (season, monitor) assignment
//! pair, and allowance-class names. `get_or_create` resolves a duplicate
//! insert by returning the existing row, which is how two racing callers
//! both end up with the same single record.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::error::{StaffingError, StaffingResult};
use crate::models::{
    AllowanceClass, Interest, InterestStatus, Monitor, RateTable, Season, StaffRole,
    TeamAssignment,
};

/// Repository for all workflow entities.
#[derive(Debug, Default)]
pub struct StaffingStore {
    monitors: HashMap<Uuid, Monitor>,
    seasons: HashMap<Uuid, Season>,
    interests: HashMap<Uuid, Interest>,
    // Unique index: (monitor_id, season_id) -> interest id.
    interest_by_pair: HashMap<(Uuid, Uuid), Uuid>,
    assignments: HashMap<Uuid, TeamAssignment>,
    // Unique index: (season_id, monitor_id) -> assignment id.
    assignment_by_pair: HashMap<(Uuid, Uuid), Uuid>,
    allowance_classes: HashMap<Uuid, AllowanceClass>,
    allowance_by_name: HashMap<String, Uuid>,
    rate_tables: Vec<RateTable>,
}

impl StaffingStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    // --- monitors ---

    /// Inserts or replaces a monitor account.
    pub fn insert_monitor(&mut self, monitor: Monitor) {
        self.monitors.insert(monitor.id, monitor);
    }

    /// Looks up a monitor by id.
    pub fn monitor(&self, id: Uuid) -> StaffingResult<&Monitor> {
        self.monitors
            .get(&id)
            .ok_or(StaffingError::NotFound { entity: "monitor", id })
    }

    /// All monitor-role accounts that have a notification address.
    pub fn reachable_monitors(&self) -> Vec<&Monitor> {
        let mut monitors: Vec<&Monitor> = self
            .monitors
            .values()
            .filter(|m| m.role == StaffRole::Monitor && m.email.is_some())
            .collect();
        monitors.sort_by(|a, b| a.username.cmp(&b.username));
        monitors
    }

    // --- seasons ---

    /// Inserts or replaces a season.
    pub fn insert_season(&mut self, season: Season) {
        self.seasons.insert(season.id, season);
    }

    /// Looks up a season by id.
    pub fn season(&self, id: Uuid) -> StaffingResult<&Season> {
        self.seasons
            .get(&id)
            .ok_or(StaffingError::NotFound { entity: "season", id })
    }

    /// Mutable season lookup, used by edit and notification-gate operations.
    pub fn season_mut(&mut self, id: Uuid) -> StaffingResult<&mut Season> {
        self.seasons
            .get_mut(&id)
            .ok_or(StaffingError::NotFound { entity: "season", id })
    }

    /// Seasons whose opened notification has not gone out yet.
    pub fn seasons_awaiting_notification(&self) -> Vec<&Season> {
        self.seasons.values().filter(|s| !s.notified).collect()
    }

    // --- interests ---

    /// Fetches the interest record for (monitor, season), creating it in the
    /// `Interested` state when absent.
    ///
    /// Returns the record and whether it was created by this call. The pair
    /// index stands in for the storage-level unique constraint: a caller
    /// that loses the creation race gets the winner's row back instead of
    /// an error.
    pub fn get_or_create_interest(
        &mut self,
        monitor_id: Uuid,
        season_id: Uuid,
        now: DateTime<Utc>,
    ) -> (Interest, bool) {
        if let Some(&id) = self.interest_by_pair.get(&(monitor_id, season_id)) {
            return (self.interests[&id].clone(), false);
        }
        let interest = Interest::new(monitor_id, season_id, now);
        self.interest_by_pair
            .insert((monitor_id, season_id), interest.id);
        self.interests.insert(interest.id, interest.clone());
        (interest, true)
    }

    /// Looks up an interest record by id.
    pub fn interest(&self, id: Uuid) -> StaffingResult<&Interest> {
        self.interests
            .get(&id)
            .ok_or(StaffingError::NotFound { entity: "interest", id })
    }

    /// Updates the status of an interest record and returns the new record.
    pub fn set_interest_status(
        &mut self,
        id: Uuid,
        status: InterestStatus,
    ) -> StaffingResult<Interest> {
        let interest = self
            .interests
            .get_mut(&id)
            .ok_or(StaffingError::NotFound { entity: "interest", id })?;
        interest.status = status;
        Ok(interest.clone())
    }

    /// All interest records for a season, oldest first.
    pub fn interests_for_season(&self, season_id: Uuid) -> Vec<&Interest> {
        let mut interests: Vec<&Interest> = self
            .interests
            .values()
            .filter(|i| i.season_id == season_id)
            .collect();
        interests.sort_by_key(|i| i.created_at);
        interests
    }

    /// Seasons a monitor has confirmed participation in.
    pub fn confirmed_seasons_for(&self, monitor_id: Uuid) -> Vec<&Season> {
        self.interests
            .values()
            .filter(|i| i.monitor_id == monitor_id && i.status == InterestStatus::Confirmed)
            .filter_map(|i| self.seasons.get(&i.season_id))
            .collect()
    }

    // --- assignments ---

    /// Fetches the assignment for (season, monitor), creating a pending one
    /// when absent. Same race contract as [`Self::get_or_create_interest`].
    pub fn get_or_create_assignment(
        &mut self,
        season_id: Uuid,
        monitor_id: Uuid,
    ) -> (TeamAssignment, bool) {
        if let Some(&id) = self.assignment_by_pair.get(&(season_id, monitor_id)) {
            return (self.assignments[&id].clone(), false);
        }
        let assignment = TeamAssignment::new(season_id, monitor_id);
        self.assignment_by_pair
            .insert((season_id, monitor_id), assignment.id);
        self.assignments.insert(assignment.id, assignment.clone());
        (assignment, true)
    }

    /// Looks up an assignment by id.
    pub fn assignment(&self, id: Uuid) -> StaffingResult<&TeamAssignment> {
        self.assignments
            .get(&id)
            .ok_or(StaffingError::NotFound { entity: "assignment", id })
    }

    /// Mutable assignment lookup, used by the bulk editor.
    pub fn assignment_mut(&mut self, id: Uuid) -> StaffingResult<&mut TeamAssignment> {
        self.assignments
            .get_mut(&id)
            .ok_or(StaffingError::NotFound { entity: "assignment", id })
    }

    /// The assignment for a (season, monitor) pair, if one exists.
    pub fn assignment_for_pair(
        &self,
        season_id: Uuid,
        monitor_id: Uuid,
    ) -> Option<&TeamAssignment> {
        self.assignment_by_pair
            .get(&(season_id, monitor_id))
            .and_then(|id| self.assignments.get(id))
    }

    /// All assignments for a season.
    pub fn assignments_for_season(&self, season_id: Uuid) -> Vec<&TeamAssignment> {
        self.assignments
            .values()
            .filter(|a| a.season_id == season_id)
            .collect()
    }

    // --- allowance classes ---

    /// Inserts an allowance class; class names are unique.
    pub fn insert_allowance_class(&mut self, class: AllowanceClass) -> StaffingResult<()> {
        if self.allowance_by_name.contains_key(&class.name) {
            return Err(StaffingError::Conflict {
                message: format!("allowance class '{}' already exists", class.name),
            });
        }
        self.allowance_by_name.insert(class.name.clone(), class.id);
        self.allowance_classes.insert(class.id, class);
        Ok(())
    }

    /// Looks up an allowance class by id.
    pub fn allowance_class(&self, id: Uuid) -> StaffingResult<&AllowanceClass> {
        self.allowance_classes
            .get(&id)
            .ok_or(StaffingError::NotFound { entity: "allowance class", id })
    }

    /// Looks up an allowance class by its unique name.
    pub fn allowance_class_by_name(&self, name: &str) -> Option<&AllowanceClass> {
        self.allowance_by_name
            .get(name)
            .and_then(|id| self.allowance_classes.get(id))
    }

    // --- rate tables ---

    /// Appends a rate table version. Historical tables are kept; only the
    /// newest is ever read.
    pub fn push_rate_table(&mut self, table: RateTable) {
        self.rate_tables.push(table);
    }

    /// The authoritative rate table: the one with the newest `updated_at`.
    pub fn current_rate_table(&self) -> Option<&RateTable> {
        self.rate_tables.iter().max_by_key(|t| t.updated_at)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::MonitorCategory;
    use chrono::TimeZone;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn store_with_monitor() -> (StaffingStore, Uuid) {
        let mut store = StaffingStore::new();
        let mut monitor = Monitor::new("carla", MonitorCategory::Monitor);
        monitor.approved = true;
        monitor.email = Some("carla@example.com".to_string());
        let id = monitor.id;
        store.insert_monitor(monitor);
        (store, id)
    }

    #[test]
    fn test_monitor_not_found() {
        let store = StaffingStore::new();
        let result = store.monitor(Uuid::new_v4());
        assert!(matches!(result, Err(StaffingError::NotFound { entity: "monitor", .. })));
    }

    #[test]
    fn test_get_or_create_interest_is_idempotent() {
        let (mut store, monitor_id) = store_with_monitor();
        let season_id = Uuid::new_v4();
        let now = Utc::now();

        let (first, created_first) = store.get_or_create_interest(monitor_id, season_id, now);
        let (second, created_second) = store.get_or_create_interest(monitor_id, season_id, now);

        assert!(created_first);
        assert!(!created_second);
        assert_eq!(first.id, second.id);
        assert_eq!(store.interests_for_season(season_id).len(), 1);
    }

    #[test]
    fn test_racing_interest_creation_resolves_to_one_record() {
        // Two callers racing past the existence check: the second insert
        // hits the unique index and falls back to the winner's row.
        let (mut store, monitor_id) = store_with_monitor();
        let season_id = Uuid::new_v4();

        let (winner, _) = store.get_or_create_interest(monitor_id, season_id, Utc::now());
        let (loser, created) = store.get_or_create_interest(monitor_id, season_id, Utc::now());

        assert!(!created);
        assert_eq!(winner.id, loser.id);
    }

    #[test]
    fn test_get_or_create_assignment_is_idempotent() {
        let mut store = StaffingStore::new();
        let season_id = Uuid::new_v4();
        let monitor_id = Uuid::new_v4();

        let (first, created_first) = store.get_or_create_assignment(season_id, monitor_id);
        let (second, created_second) = store.get_or_create_assignment(season_id, monitor_id);

        assert!(created_first);
        assert!(!created_second);
        assert_eq!(first.id, second.id);
        assert_eq!(store.assignments_for_season(season_id).len(), 1);
    }

    #[test]
    fn test_set_interest_status_updates_record() {
        let (mut store, monitor_id) = store_with_monitor();
        let season_id = Uuid::new_v4();
        let (interest, _) = store.get_or_create_interest(monitor_id, season_id, Utc::now());

        let updated = store
            .set_interest_status(interest.id, InterestStatus::Approved)
            .unwrap();
        assert_eq!(updated.status, InterestStatus::Approved);
        assert_eq!(
            store.interest(interest.id).unwrap().status,
            InterestStatus::Approved
        );
    }

    #[test]
    fn test_allowance_class_names_are_unique() {
        let mut store = StaffingStore::new();
        store
            .insert_allowance_class(AllowanceClass::new("allowance_1", dec("90.00")))
            .unwrap();

        let duplicate = store.insert_allowance_class(AllowanceClass::new("allowance_1", dec("99.00")));
        assert!(matches!(duplicate, Err(StaffingError::Conflict { .. })));
        assert_eq!(
            store.allowance_class_by_name("allowance_1").unwrap().amount,
            dec("90.00")
        );
    }

    #[test]
    fn test_current_rate_table_picks_newest() {
        let mut store = StaffingStore::new();
        assert!(store.current_rate_table().is_none());

        let older = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap();
        let newer = Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap();

        let mut old_table = RateTable::zeroed(older);
        old_table.monitor = dec("190.00");
        let mut new_table = RateTable::zeroed(newer);
        new_table.monitor = dec("210.00");

        // Insert newest first to make sure ordering comes from the
        // timestamp, not the insertion order.
        store.push_rate_table(new_table);
        store.push_rate_table(old_table);

        assert_eq!(
            store.current_rate_table().unwrap().monitor,
            dec("210.00")
        );
    }

    #[test]
    fn test_reachable_monitors_filters_and_sorts() {
        let (mut store, _) = store_with_monitor();

        let mut no_email = Monitor::new("bento", MonitorCategory::Counselor);
        no_email.approved = true;
        store.insert_monitor(no_email);

        let mut manager = Monitor::new("alda", MonitorCategory::Monitor);
        manager.role = StaffRole::Manager;
        manager.email = Some("alda@example.com".to_string());
        store.insert_monitor(manager);

        let reachable = store.reachable_monitors();
        assert_eq!(reachable.len(), 1);
        assert_eq!(reachable[0].username, "carla");
    }

    #[test]
    fn test_confirmed_seasons_for_monitor() {
        use crate::models::{SeasonCategory, SeasonDraft};
        use chrono::NaiveDate;

        let (mut store, monitor_id) = store_with_monitor();
        let season = Season::create(SeasonDraft {
            category: SeasonCategory::School,
            start_date: NaiveDate::from_ymd_opt(2026, 3, 2).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2026, 3, 6).unwrap(),
            client: None,
            team_arrival: None,
            team_departure: None,
            paid_days: dec("4.5"),
        })
        .unwrap();
        let season_id = season.id;
        store.insert_season(season);

        let (interest, _) = store.get_or_create_interest(monitor_id, season_id, Utc::now());
        assert!(store.confirmed_seasons_for(monitor_id).is_empty());

        store
            .set_interest_status(interest.id, InterestStatus::Confirmed)
            .unwrap();
        let confirmed = store.confirmed_seasons_for(monitor_id);
        assert_eq!(confirmed.len(), 1);
        assert_eq!(confirmed[0].id, season_id);
    }
}
