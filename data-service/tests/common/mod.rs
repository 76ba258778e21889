//! Mock repositories for API integration tests: in-memory stand-ins for every
//! repository trait, so the router can be exercised without a real Postgres or Redis.

use async_trait::async_trait;
use chrono::{NaiveDate, Utc};
use data_service::api::AppState;
use data_service::domain::entities::{
    Availability, Demand, DayDemandIndex, DefaultDemand, EventRule, ScheduleShift, ShiftTransferRequest, SpecialDay,
};
use data_service::domain::repositories::{
    AvailabilityRepository, CreateEventRule, CreateTransferRequest, DayDemandIndexRepository,
    DefaultDemandRepository, DemandRepository, EventRuleRepository, NewScheduleShift, PatchScheduleShift,
    ScheduleShiftRepository, SpecialDayRepository, TransferRepository, UpsertAvailability, UpsertDemand,
    UpsertSpecialDay,
};
use data_service::domain::services::{
    AvailabilityService, DayIndexService, DefaultTemplateService, DemandService, LoggingNotificationDispatcher,
    RuleEngine, ScheduleService, TransferService,
};
use data_service::infrastructure::redis::RedisPool;
use data_service::infrastructure::solver_client::SolverClient;
use shared::{DomainError, DomainResult, SolveRequest, SolveResponse, TemplateItem, TransferStatus};
use std::collections::HashMap;
use std::sync::{Arc, RwLock};
use uuid::Uuid;

#[derive(Default)]
pub struct MockAvailabilityRepository {
    rows: RwLock<HashMap<(Uuid, String, NaiveDate), Availability>>,
}

impl MockAvailabilityRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl AvailabilityRepository for MockAvailabilityRepository {
    async fn upsert(&self, input: UpsertAvailability) -> DomainResult<Availability> {
        let key = (input.tenant_id, input.employee_id.clone(), input.date);
        let mut rows = self.rows.write().unwrap();
        let now = Utc::now();
        let existing = rows.get(&key);
        let merged_min = existing.map(|e| e.hours_min.max(input.hours_min)).unwrap_or(input.hours_min);
        let merged_max = match (existing.and_then(|e| e.hours_max), input.hours_max) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (Some(a), None) | (None, Some(a)) => Some(a),
            (None, None) => None,
        };
        let row = Availability {
            id: existing.map(|e| e.id).unwrap_or_else(Uuid::new_v4),
            tenant_id: input.tenant_id,
            employee_id: input.employee_id,
            employee_name: input.employee_name,
            date: input.date,
            experienced: input.experienced,
            hours_min: merged_min,
            hours_max: merged_max,
            available_slots: sqlx::types::Json(input.available_slots),
            assigned_shift: input.assigned_shift.map(sqlx::types::Json),
            created_at: existing.map(|e| e.created_at).unwrap_or(now),
            updated_at: now,
        };
        rows.insert(key, row.clone());
        Ok(row)
    }

    async fn find(&self, tenant_id: Uuid, employee_id: &str, date: NaiveDate) -> DomainResult<Option<Availability>> {
        Ok(self.rows.read().unwrap().get(&(tenant_id, employee_id.to_string(), date)).cloned())
    }

    async fn list_range(&self, tenant_id: Uuid, date_from: NaiveDate, date_to: NaiveDate) -> DomainResult<Vec<Availability>> {
        Ok(self
            .rows
            .read()
            .unwrap()
            .values()
            .filter(|a| a.tenant_id == tenant_id && a.date >= date_from && a.date <= date_to)
            .cloned()
            .collect())
    }
}

#[derive(Default)]
pub struct MockDemandRepository {
    rows: RwLock<HashMap<Uuid, Demand>>,
}

impl MockDemandRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn snapshot(&self) -> Vec<Demand> {
        self.rows.read().unwrap().values().cloned().collect()
    }
}

#[async_trait]
impl DemandRepository for MockDemandRepository {
    async fn upsert_by_hash(&self, input: UpsertDemand) -> DomainResult<(Demand, bool)> {
        let mut rows = self.rows.write().unwrap();
        if let Some(existing) = rows.values().find(|d| d.tenant_id == input.tenant_id && d.content_hash == input.content_hash) {
            return Ok((existing.clone(), false));
        }
        let now = Utc::now();
        let demand = Demand {
            id: Uuid::new_v4(),
            tenant_id: input.tenant_id,
            name: input.name,
            raw_payload: sqlx::types::Json(input.raw_payload),
            content_hash: input.content_hash,
            date_from: input.date_from,
            date_to: input.date_to,
            schedule_generated: false,
            solved_at: None,
            created_at: now,
            updated_at: now,
        };
        rows.insert(demand.id, demand.clone());
        Ok((demand, true))
    }

    async fn find_by_id(&self, tenant_id: Uuid, id: Uuid) -> DomainResult<Option<Demand>> {
        Ok(self.rows.read().unwrap().get(&id).filter(|d| d.tenant_id == tenant_id).cloned())
    }

    async fn find_by_hash(&self, tenant_id: Uuid, content_hash: &str) -> DomainResult<Option<Demand>> {
        Ok(self
            .rows
            .read()
            .unwrap()
            .values()
            .find(|d| d.tenant_id == tenant_id && d.content_hash == content_hash)
            .cloned())
    }

    async fn mark_generated(&self, id: Uuid) -> DomainResult<()> {
        if let Some(demand) = self.rows.write().unwrap().get_mut(&id) {
            demand.schedule_generated = true;
            demand.solved_at = Some(Utc::now());
        }
        Ok(())
    }
}

/// Backfill is not exercised by these tests — every test that reaches the day index
/// saves demand through `DemandService` first, which populates it directly via `upsert`.
#[derive(Default)]
pub struct MockDayDemandIndexRepository {
    rows: RwLock<Vec<DayDemandIndex>>,
}

impl MockDayDemandIndexRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl DayDemandIndexRepository for MockDayDemandIndexRepository {
    async fn upsert(
        &self,
        tenant_id: Uuid,
        date: NaiveDate,
        location: &str,
        day_hash: &str,
        demand_id: Uuid,
    ) -> DomainResult<DayDemandIndex> {
        let mut rows = self.rows.write().unwrap();
        if rows
            .iter()
            .any(|r| r.tenant_id == tenant_id && r.date == date && r.location == location && r.day_hash == day_hash)
        {
            return Err(DomainError::IndexRace(format!("day index row already exists for {date} {location}")));
        }
        let row = DayDemandIndex {
            id: Uuid::new_v4(),
            tenant_id,
            date,
            location: location.to_string(),
            day_hash: day_hash.to_string(),
            demand_id,
            created_at: Utc::now(),
        };
        rows.push(row.clone());
        Ok(row)
    }

    async fn find_latest(&self, tenant_id: Uuid, date: NaiveDate, location: &str) -> DomainResult<Option<DayDemandIndex>> {
        Ok(self
            .rows
            .read()
            .unwrap()
            .iter()
            .filter(|r| r.tenant_id == tenant_id && r.date == date && r.location == location)
            .max_by_key(|r| r.created_at)
            .cloned())
    }

    async fn candidate_demands_spanning(&self, _tenant_id: Uuid, _date: NaiveDate) -> DomainResult<Vec<Demand>> {
        Ok(Vec::new())
    }
}

#[derive(Default)]
pub struct MockDefaultDemandRepository {
    rows: RwLock<HashMap<(Uuid, String, i16), DefaultDemand>>,
}

impl MockDefaultDemandRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn key(tenant_id: Uuid, location: &str, weekday: Option<i16>) -> (Uuid, String, i16) {
        (tenant_id, location.to_string(), weekday.unwrap_or(-1))
    }
}

#[async_trait]
impl DefaultDemandRepository for MockDefaultDemandRepository {
    async fn upsert(&self, tenant_id: Uuid, location: &str, weekday: Option<i16>, items: Vec<TemplateItem>) -> DomainResult<DefaultDemand> {
        let mut rows = self.rows.write().unwrap();
        let key = Self::key(tenant_id, location, weekday);
        let now = Utc::now();
        let row = DefaultDemand {
            id: rows.get(&key).map(|r| r.id).unwrap_or_else(Uuid::new_v4),
            tenant_id,
            location: location.to_string(),
            weekday,
            items: sqlx::types::Json(items),
            created_at: rows.get(&key).map(|r| r.created_at).unwrap_or(now),
            updated_at: now,
        };
        rows.insert(key, row.clone());
        Ok(row)
    }

    async fn find_with_fallback(&self, tenant_id: Uuid, location: &str, weekday: i16) -> DomainResult<Option<(DefaultDemand, bool)>> {
        let rows = self.rows.read().unwrap();
        if let Some(exact) = rows.get(&Self::key(tenant_id, location, Some(weekday))) {
            return Ok(Some((exact.clone(), false)));
        }
        Ok(rows.get(&Self::key(tenant_id, location, None)).map(|r| (r.clone(), true)))
    }

    async fn list_for_location(&self, tenant_id: Uuid, location: &str) -> DomainResult<Vec<DefaultDemand>> {
        Ok(self
            .rows
            .read()
            .unwrap()
            .values()
            .filter(|r| r.tenant_id == tenant_id && r.location == location)
            .cloned()
            .collect())
    }

    async fn replace_bulk(&self, tenant_id: Uuid, location: &str, entries: Vec<(Option<i16>, Vec<TemplateItem>)>) -> DomainResult<Vec<DefaultDemand>> {
        let mut out = Vec::with_capacity(entries.len());
        for (weekday, items) in entries {
            out.push(self.upsert(tenant_id, location, weekday, items).await?);
        }
        Ok(out)
    }
}

#[derive(Default)]
pub struct MockEventRuleRepository {
    rows: RwLock<HashMap<Uuid, EventRule>>,
}

impl MockEventRuleRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl EventRuleRepository for MockEventRuleRepository {
    async fn create(&self, input: CreateEventRule) -> DomainResult<EventRule> {
        let now = Utc::now();
        let rule = EventRule {
            id: Uuid::new_v4(),
            tenant_id: input.tenant_id,
            name: input.name,
            mode: input.mode,
            value: input.value,
            needs_experienced_default: input.needs_experienced_default,
            min_demand: input.min_demand,
            max_demand: input.max_demand,
            active: input.active,
            created_at: now,
            updated_at: now,
        };
        self.rows.write().unwrap().insert(rule.id, rule.clone());
        Ok(rule)
    }

    async fn find_by_id(&self, tenant_id: Uuid, id: Uuid) -> DomainResult<Option<EventRule>> {
        Ok(self.rows.read().unwrap().get(&id).filter(|r| r.tenant_id == tenant_id).cloned())
    }

    async fn list(&self, tenant_id: Uuid) -> DomainResult<Vec<EventRule>> {
        Ok(self.rows.read().unwrap().values().filter(|r| r.tenant_id == tenant_id).cloned().collect())
    }
}

#[derive(Default)]
pub struct MockSpecialDayRepository {
    rows: RwLock<Vec<SpecialDay>>,
    rule_repo: RwLock<Option<Arc<dyn EventRuleRepository>>>,
}

impl MockSpecialDayRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wires the rule repository this mock joins against in `active_in_range_with_rules`.
    pub fn set_rule_repo(&self, rule_repo: Arc<dyn EventRuleRepository>) {
        *self.rule_repo.write().unwrap() = Some(rule_repo);
    }
}

#[async_trait]
impl SpecialDayRepository for MockSpecialDayRepository {
    async fn upsert(&self, input: UpsertSpecialDay) -> DomainResult<SpecialDay> {
        let mut rows = self.rows.write().unwrap();
        if let Some(existing) = rows
            .iter_mut()
            .find(|r| r.tenant_id == input.tenant_id && r.date == input.date && r.location == input.location && r.rule_id == input.rule_id)
        {
            existing.note = input.note;
            existing.active = input.active.unwrap_or(existing.active);
            existing.updated_at = Utc::now();
            return Ok(existing.clone());
        }
        let now = Utc::now();
        let row = SpecialDay {
            id: Uuid::new_v4(),
            tenant_id: input.tenant_id,
            date: input.date,
            location: input.location,
            rule_id: input.rule_id,
            note: input.note,
            active: input.active.unwrap_or(true),
            created_at: now,
            updated_at: now,
        };
        rows.push(row.clone());
        Ok(row)
    }

    async fn list(&self, tenant_id: Uuid, date_from: Option<NaiveDate>, date_to: Option<NaiveDate>, location: Option<&str>) -> DomainResult<Vec<SpecialDay>> {
        Ok(self
            .rows
            .read()
            .unwrap()
            .iter()
            .filter(|r| r.tenant_id == tenant_id)
            .filter(|r| date_from.map_or(true, |d| r.date >= d))
            .filter(|r| date_to.map_or(true, |d| r.date <= d))
            .filter(|r| location.map_or(true, |loc| r.location == loc))
            .cloned()
            .collect())
    }

    async fn active_in_range_with_rules(&self, tenant_id: Uuid, date_from: NaiveDate, date_to: NaiveDate) -> DomainResult<Vec<(SpecialDay, EventRule)>> {
        let rule_repo = self.rule_repo.read().unwrap().clone().expect("rule repo not wired for this mock");
        let mut out = Vec::new();
        for special_day in self.rows.read().unwrap().iter().filter(|r| {
            r.tenant_id == tenant_id && r.active && r.date >= date_from && r.date <= date_to
        }) {
            if let Some(rule) = rule_repo.find_by_id(tenant_id, special_day.rule_id).await? {
                if rule.active {
                    out.push((special_day.clone(), rule));
                }
            }
        }
        Ok(out)
    }
}

#[derive(Default)]
pub struct MockScheduleShiftRepository {
    rows: RwLock<HashMap<Uuid, ScheduleShift>>,
}

impl MockScheduleShiftRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ScheduleShiftRepository for MockScheduleShiftRepository {
    async fn bulk_insert(&self, shifts: Vec<NewScheduleShift>) -> DomainResult<Vec<ScheduleShift>> {
        let mut rows = self.rows.write().unwrap();
        let mut out = Vec::with_capacity(shifts.len());
        for s in shifts {
            if rows.values().any(|r| r.demand_id == s.demand_id && r.shift_uid == s.shift_uid) {
                continue;
            }
            let now = Utc::now();
            let row = ScheduleShift {
                id: Uuid::new_v4(),
                tenant_id: s.tenant_id,
                demand_id: s.demand_id,
                shift_uid: s.shift_uid,
                date: s.date,
                location: s.location,
                start: s.start,
                end: s.end,
                demand_count: s.demand_count,
                needs_experienced: s.needs_experienced,
                assigned_employees: sqlx::types::Json(s.assigned_employees),
                missing_minutes: s.missing_minutes,
                meta: sqlx::types::Json(s.meta),
                user_edited: false,
                confirmed: false,
                approved_by: None,
                approved_at: None,
                created_at: now,
                updated_at: now,
            };
            rows.insert(row.id, row.clone());
            out.push(row);
        }
        Ok(out)
    }

    async fn delete_by_demand(&self, demand_id: Uuid) -> DomainResult<()> {
        self.rows.write().unwrap().retain(|_, r| r.demand_id != demand_id);
        Ok(())
    }

    async fn find_by_uid(&self, tenant_id: Uuid, shift_uid: &str) -> DomainResult<Option<ScheduleShift>> {
        Ok(self.rows.read().unwrap().values().find(|r| r.tenant_id == tenant_id && r.shift_uid == shift_uid).cloned())
    }

    async fn find_by_id(&self, id: Uuid) -> DomainResult<Option<ScheduleShift>> {
        Ok(self.rows.read().unwrap().get(&id).cloned())
    }

    async fn list_by_demand(&self, demand_id: Uuid) -> DomainResult<Vec<ScheduleShift>> {
        Ok(self.rows.read().unwrap().values().filter(|r| r.demand_id == demand_id).cloned().collect())
    }

    async fn list_by_date_location(&self, tenant_id: Uuid, date: NaiveDate, location: &str) -> DomainResult<Vec<ScheduleShift>> {
        Ok(self
            .rows
            .read()
            .unwrap()
            .values()
            .filter(|r| r.tenant_id == tenant_id && r.date == date && r.location == location)
            .cloned()
            .collect())
    }

    async fn update(&self, id: Uuid, patch: PatchScheduleShift) -> DomainResult<ScheduleShift> {
        let mut rows = self.rows.write().unwrap();
        let row = rows.get_mut(&id).ok_or_else(|| DomainError::NotFound(format!("schedule shift {id}")))?;
        if let Some(date) = patch.date {
            row.date = date;
        }
        if let Some(location) = patch.location {
            row.location = location;
        }
        if let Some(start) = patch.start {
            row.start = start;
        }
        if let Some(end) = patch.end {
            row.end = end;
        }
        if let Some(demand_count) = patch.demand_count {
            row.demand_count = demand_count;
        }
        if let Some(assigned) = patch.assigned_employees {
            row.assigned_employees = sqlx::types::Json(assigned);
        }
        if let Some(needs_experienced) = patch.needs_experienced {
            row.needs_experienced = needs_experienced;
        }
        if let Some(missing_minutes) = patch.missing_minutes {
            row.missing_minutes = missing_minutes;
        }
        if let Some(confirmed) = patch.confirmed {
            row.confirmed = confirmed;
        }
        if let Some(detail) = patch.assigned_employees_detail {
            row.meta.0.assigned_employees_detail = detail;
        }
        if let Some(segments) = patch.missing_segments {
            row.meta.0.missing_segments = segments;
        }
        row.user_edited = true;
        row.approved_by = None;
        row.approved_at = None;
        row.updated_at = Utc::now();
        Ok(row.clone())
    }

    async fn set_assigned_employees(&self, id: Uuid, assigned_employees: Vec<String>, approved_by: String) -> DomainResult<ScheduleShift> {
        let mut rows = self.rows.write().unwrap();
        let row = rows.get_mut(&id).ok_or_else(|| DomainError::NotFound(format!("schedule shift {id}")))?;
        row.assigned_employees = sqlx::types::Json(assigned_employees);
        row.approved_by = Some(approved_by);
        row.approved_at = Some(Utc::now());
        row.updated_at = Utc::now();
        Ok(row.clone())
    }

    async fn approve(&self, id: Uuid, approved_by: String) -> DomainResult<ScheduleShift> {
        let mut rows = self.rows.write().unwrap();
        let row = rows.get_mut(&id).ok_or_else(|| DomainError::NotFound(format!("schedule shift {id}")))?;
        row.confirmed = true;
        row.approved_by = Some(approved_by);
        row.approved_at = Some(Utc::now());
        row.updated_at = Utc::now();
        Ok(row.clone())
    }
}

#[derive(Default)]
pub struct MockTransferRepository {
    rows: RwLock<HashMap<Uuid, ShiftTransferRequest>>,
}

impl MockTransferRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TransferRepository for MockTransferRepository {
    async fn create(&self, input: CreateTransferRequest) -> DomainResult<ShiftTransferRequest> {
        let now = Utc::now();
        let row = ShiftTransferRequest {
            id: Uuid::new_v4(),
            tenant_id: input.tenant_id,
            shift_id: input.shift_id,
            requested_by: input.requested_by,
            action: input.action,
            target_employee: input.target_employee,
            status: TransferStatus::Pending,
            note: input.note,
            manager_note: None,
            approved_by: None,
            approved_at: None,
            created_at: now,
            updated_at: now,
        };
        self.rows.write().unwrap().insert(row.id, row.clone());
        Ok(row)
    }

    async fn find_by_id(&self, tenant_id: Uuid, id: Uuid) -> DomainResult<Option<ShiftTransferRequest>> {
        Ok(self.rows.read().unwrap().get(&id).filter(|r| r.tenant_id == tenant_id).cloned())
    }

    async fn moderate(&self, id: Uuid, status: TransferStatus, manager_note: Option<String>, approved_by: String) -> DomainResult<ShiftTransferRequest> {
        let mut rows = self.rows.write().unwrap();
        let row = rows.get_mut(&id).ok_or_else(|| DomainError::NotFound(format!("transfer request {id}")))?;
        row.status = status;
        row.manager_note = manager_note;
        row.approved_by = Some(approved_by);
        row.approved_at = Some(Utc::now());
        row.updated_at = Utc::now();
        Ok(row.clone())
    }
}

/// Canned solver client: always reports every requested demand slot as fully covered
/// by the first available employee on that date/location, so golden-path schedule
/// generation tests don't need to hand-construct a feasible solve.
pub struct StubSolverClient;

#[async_trait]
impl SolverClient for StubSolverClient {
    async fn solve(&self, request: SolveRequest) -> DomainResult<SolveResponse> {
        use shared::time::to_minutes;
        use shared::{AssignedEmployeeDetail, AssignedEmployeeSegment, HoursSummaryEntry, ShiftAssignmentOut};

        let assignments = request
            .demand
            .iter()
            .map(|d| {
                let employee = request.availability.iter().find(|a| a.date == d.date);
                let minutes = (to_minutes(&d.end).unwrap_or(0) - to_minutes(&d.start).unwrap_or(0)).max(0);
                ShiftAssignmentOut {
                    date: d.date.clone(),
                    location: d.location.clone(),
                    start: d.start.clone(),
                    end: d.end.clone(),
                    demand: d.demand,
                    needs_experienced: d.needs_experienced,
                    assigned_employees: employee.map(|e| vec![e.employee_id.clone()]).unwrap_or_default(),
                    assigned_employees_detail: employee
                        .map(|e| {
                            vec![AssignedEmployeeDetail {
                                employee_id: e.employee_id.clone(),
                                employee_name: e.employee_name.clone(),
                                start: d.start.clone(),
                                end: d.end.clone(),
                                minutes,
                                segments: vec![AssignedEmployeeSegment { start: d.start.clone(), end: d.end.clone(), minutes }],
                            }]
                        })
                        .unwrap_or_default(),
                    missing_minutes: 0,
                    missing_segments: Vec::new(),
                }
            })
            .collect();

        Ok(SolveResponse {
            assignments,
            uncovered: Vec::new(),
            hours_summary: request
                .availability
                .iter()
                .map(|a| HoursSummaryEntry {
                    employee_id: a.employee_id.clone(),
                    experienced: a.experienced,
                    total_hours: 0.0,
                    hours_min: a.hours_min,
                    hours_max: a.hours_max,
                    over_hours: 0.0,
                    under_hours: 0.0,
                })
                .collect(),
        })
    }
}

pub struct TestRepos {
    pub availability: Arc<MockAvailabilityRepository>,
    pub demand: Arc<MockDemandRepository>,
    pub default_demand: Arc<MockDefaultDemandRepository>,
    pub event_rule: Arc<MockEventRuleRepository>,
    pub special_day: Arc<MockSpecialDayRepository>,
    pub shift: Arc<MockScheduleShiftRepository>,
    pub transfer: Arc<MockTransferRepository>,
}

/// Builds a full `AppState` backed by in-memory mock repositories, wired the same way
/// `main.rs` wires the real Postgres-backed ones.
pub async fn create_test_app_state() -> (AppState, TestRepos) {
    let availability_repo = Arc::new(MockAvailabilityRepository::new());
    let demand_repo = Arc::new(MockDemandRepository::new());
    let day_index_repo = Arc::new(MockDayDemandIndexRepository::new());
    let default_demand_repo = Arc::new(MockDefaultDemandRepository::new());
    let event_rule_repo = Arc::new(MockEventRuleRepository::new());
    let special_day_repo = Arc::new(MockSpecialDayRepository::new());
    special_day_repo.set_rule_repo(event_rule_repo.clone());
    let shift_repo = Arc::new(MockScheduleShiftRepository::new());
    let transfer_repo = Arc::new(MockTransferRepository::new());

    let availability_service = Arc::new(AvailabilityService::new(availability_repo.clone()));
    let day_index_service = Arc::new(DayIndexService::new(day_index_repo, demand_repo.clone()));
    let default_template_service = Arc::new(DefaultTemplateService::new(default_demand_repo.clone()));
    let demand_service = Arc::new(DemandService::new(
        demand_repo.clone(),
        default_demand_repo.clone(),
        shift_repo.clone(),
        day_index_service.clone(),
    ));
    let rule_engine = Arc::new(RuleEngine::new(special_day_repo.clone()));
    let notifications = Arc::new(LoggingNotificationDispatcher);
    let solver_client = Arc::new(StubSolverClient);
    let schedule_service = Arc::new(ScheduleService::new(
        demand_repo.clone(),
        shift_repo.clone(),
        availability_service.clone(),
        rule_engine,
        solver_client,
        day_index_service,
        notifications.clone(),
    ));
    let transfer_service = Arc::new(TransferService::new(transfer_repo.clone(), shift_repo.clone(), notifications));

    let redis_pool = create_mock_redis_pool().await;

    let state = AppState::new(
        availability_service,
        demand_service,
        default_template_service,
        schedule_service,
        transfer_service,
        event_rule_repo.clone(),
        special_day_repo.clone(),
        redis_pool,
    );

    (
        state,
        TestRepos {
            availability: availability_repo,
            demand: demand_repo,
            default_demand: default_demand_repo,
            event_rule: event_rule_repo,
            special_day: special_day_repo,
            shift: shift_repo,
            transfer: transfer_repo,
        },
    )
}

/// Connects to a local Redis instance the same way production wiring does; these tests
/// assume one is reachable in the CI environment, matching how the rest of this crate's
/// cache layer is exercised.
pub async fn create_mock_redis_pool() -> RedisPool {
    let client = redis::Client::open("redis://localhost:6379").unwrap();
    redis::aio::ConnectionManager::new(client).await.unwrap()
}

pub fn auth_headers(tenant_id: Uuid, user_id: &str, role: &str) -> Vec<(&'static str, String)> {
    vec![("x-tenant-id", tenant_id.to_string()), ("x-user-id", user_id.to_string()), ("x-role", role.to_string())]
}
