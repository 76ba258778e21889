//! Schedule store and mutation pipeline: turns a Demand plus rule-adjusted
//! availability into persisted [`ScheduleShift`] rows via the solver
//! microservice, then exposes the manager edit/approve surface.

use std::sync::Arc;

use chrono::NaiveDate;
use shared::{
    AssignedShiftInput, AvailabilityInput, AvailabilitySlotInput, DomainError, DomainResult, Role,
    SolveRequest,
};
use uuid::Uuid;

use crate::domain::entities::{shift_uid, Availability, ScheduleShift, ShiftMeta};
use crate::domain::repositories::{
    DemandRepository, NewScheduleShift, PatchScheduleShift, ScheduleShiftRepository,
};
use crate::domain::services::availability_service::AvailabilityService;
use crate::domain::services::day_index_service::DayIndexService;
use crate::domain::services::notification_service::NotificationDispatcher;
use crate::domain::services::rule_engine::RuleEngine;
use crate::infrastructure::solver_client::SolverClient;

pub struct ScheduleService {
    demand_repo: Arc<dyn DemandRepository>,
    shift_repo: Arc<dyn ScheduleShiftRepository>,
    availability: Arc<AvailabilityService>,
    rule_engine: Arc<RuleEngine>,
    solver_client: Arc<dyn SolverClient>,
    day_index: Arc<DayIndexService>,
    notifications: Arc<dyn NotificationDispatcher>,
}

fn to_availability_input(a: &Availability) -> AvailabilityInput {
    AvailabilityInput {
        employee_id: a.employee_id.clone(),
        employee_name: a.employee_name.clone(),
        date: a.date.to_string(),
        experienced: a.experienced,
        hours_min: a.hours_min,
        hours_max: a.hours_max,
        available_slots: a
            .available_slots
            .0
            .iter()
            .map(|s| AvailabilitySlotInput { start: s.start.clone(), end: s.end.clone() })
            .collect(),
        assigned_shift: a.assigned_shift.as_ref().map(|s| AssignedShiftInput {
            location: s.location.clone(),
            start: s.start.clone(),
            end: s.end.clone(),
            confirmed: s.confirmed,
        }),
    }
}

impl ScheduleService {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        demand_repo: Arc<dyn DemandRepository>,
        shift_repo: Arc<dyn ScheduleShiftRepository>,
        availability: Arc<AvailabilityService>,
        rule_engine: Arc<RuleEngine>,
        solver_client: Arc<dyn SolverClient>,
        day_index: Arc<DayIndexService>,
        notifications: Arc<dyn NotificationDispatcher>,
    ) -> Self {
        Self {
            demand_repo,
            shift_repo,
            availability,
            rule_engine,
            solver_client,
            day_index,
            notifications,
        }
    }

    /// Runs the rule-engine + solver pipeline for `demand_id` and builds the
    /// not-yet-persisted shift rows it produced, without touching `shift_repo`. Shared by
    /// `ensure_schedule` (persists) and `preview_schedule` (does not).
    async fn solve_demand(&self, tenant_id: Uuid, demand_id: Uuid) -> DomainResult<Vec<NewScheduleShift>> {
        let demand = self
            .demand_repo
            .find_by_id(tenant_id, demand_id)
            .await?
            .ok_or_else(|| DomainError::NotFound(format!("demand {demand_id}")))?;

        let rule_adjusted = self
            .rule_engine
            .apply(tenant_id, demand.date_from, demand.date_to, &demand.raw_payload.0)
            .await?;

        let availability_rows = self.availability.list_range(tenant_id, demand.date_from, demand.date_to).await?;
        let availability = availability_rows.iter().map(to_availability_input).collect();

        let request = SolveRequest {
            availability,
            demand: rule_adjusted,
            time_limit_sec: None,
            workers: None,
        };

        let response = self.solver_client.solve(request).await?;

        let uncovered_snapshot = response
            .uncovered
            .iter()
            .map(|u| serde_json::to_value(u).unwrap_or(serde_json::Value::Null))
            .collect::<Vec<_>>();
        let hours_summary_snapshot = response
            .hours_summary
            .iter()
            .map(|h| serde_json::to_value(h).unwrap_or(serde_json::Value::Null))
            .collect::<Vec<_>>();

        let mut new_shifts = Vec::with_capacity(response.assignments.len());
        for assignment in response.assignments {
            let date: NaiveDate = assignment
                .date
                .parse()
                .map_err(|_| DomainError::ExternalServiceError(format!("solver returned invalid date {}", assignment.date)))?;
            let uid = shift_uid(demand_id, date, &assignment.location, &assignment.start, &assignment.end);
            new_shifts.push(NewScheduleShift {
                tenant_id,
                demand_id,
                shift_uid: uid,
                date,
                location: assignment.location,
                start: assignment.start,
                end: assignment.end,
                demand_count: assignment.demand,
                needs_experienced: assignment.needs_experienced,
                assigned_employees: assignment.assigned_employees,
                missing_minutes: assignment.missing_minutes,
                meta: ShiftMeta {
                    assigned_employees_detail: assignment.assigned_employees_detail,
                    missing_segments: assignment.missing_segments,
                    uncovered: uncovered_snapshot.clone(),
                    hours_summary: hours_summary_snapshot.clone(),
                },
            });
        }

        Ok(new_shifts)
    }

    /// Generates (or returns the existing) schedule for `demand_id`. Unifies the
    /// historically-divergent `generate_day`/`generate_range` entry points behind one
    /// pipeline parameterized by the demand's own date range.
    pub async fn ensure_schedule(&self, tenant_id: Uuid, demand_id: Uuid, force: bool) -> DomainResult<Vec<ScheduleShift>> {
        if !force {
            let existing = self.shift_repo.list_by_demand(demand_id).await?;
            if !existing.is_empty() {
                return Ok(existing);
            }
        } else {
            self.shift_repo.delete_by_demand(demand_id).await?;
        }

        let new_shifts = self.solve_demand(tenant_id, demand_id).await?;
        let inserted = self.shift_repo.bulk_insert(new_shifts).await?;
        self.demand_repo.mark_generated(demand_id).await?;
        Ok(inserted)
    }

    /// Runs the same pipeline as `ensure_schedule` but never persists the resulting
    /// shifts — the `persist=false` branch of `generate-day`/`generate-range`. The Demand
    /// itself may still have been saved by the caller beforehand; content-addressed saves
    /// are idempotent and cheap regardless.
    pub async fn preview_schedule(&self, tenant_id: Uuid, demand_id: Uuid) -> DomainResult<Vec<NewScheduleShift>> {
        self.solve_demand(tenant_id, demand_id).await
    }

    pub async fn get_shift(&self, tenant_id: Uuid, shift_uid: &str) -> DomainResult<ScheduleShift> {
        self.shift_repo
            .find_by_uid(tenant_id, shift_uid)
            .await?
            .ok_or_else(|| DomainError::NotFound(format!("shift {shift_uid}")))
    }

    pub async fn list_by_demand(&self, demand_id: Uuid) -> DomainResult<Vec<ScheduleShift>> {
        self.shift_repo.list_by_demand(demand_id).await
    }

    /// Applies a manager patch. Any edit invalidates prior approval (`user_edited=true`,
    /// `approved_by`/`approved_at` cleared) — the repository implementation enforces this
    /// clearing as part of the same write.
    pub async fn update_shift(&self, tenant_id: Uuid, shift_uid: &str, patch: PatchScheduleShift) -> DomainResult<ScheduleShift> {
        let current = self.get_shift(tenant_id, shift_uid).await?;
        self.shift_repo.update(current.id, patch).await
    }

    pub async fn approve_shift(&self, tenant_id: Uuid, shift_uid: &str, role: Role, approved_by: &str) -> DomainResult<ScheduleShift> {
        if !role.can_moderate() {
            return Err(DomainError::AuthorizationFailure("manager or owner role required to approve a shift".to_string()));
        }
        let shift = self.get_shift(tenant_id, shift_uid).await?;
        let approved = self.shift_repo.approve(shift.id, approved_by.to_string()).await?;

        for employee_id in approved.assigned_employees.0.iter() {
            self.notifications
                .notify(employee_id, "Shift approved", &format!("Your shift {shift_uid} has been approved."))
                .await;
        }

        Ok(approved)
    }

    /// Returns the persisted day schedule if any shift has already been solved; else
    /// resolves (or lazily backfills) the owning demand and generates one.
    pub async fn get_day_schedule(&self, tenant_id: Uuid, date: NaiveDate, location: &str) -> DomainResult<Vec<ScheduleShift>> {
        let existing = self.shift_repo.list_by_date_location(tenant_id, date, location).await?;
        if !existing.is_empty() {
            return Ok(existing);
        }

        match self.day_index.lookup(tenant_id, date, location).await? {
            Some(demand) => {
                self.ensure_schedule(tenant_id, demand.id, false).await?;
                self.shift_repo.list_by_date_location(tenant_id, date, location).await
            }
            None => Ok(Vec::new()),
        }
    }
}
