//! Time-sliced constraint model: slices every original demand shift into fixed
//! 30-minute units and assigns employees to them under coverage, non-overlap,
//! experience, and weekly-hour rules.
//!
//! Expressed as a mixed-integer linear program rather than a CP-SAT-style
//! constraint model, since `good_lp`/`microlp` work over linear constraints on
//! bounded integer and binary variables — every constraint here is already
//! linear arithmetic over bools, so the MILP formulation loses no expressiveness.

mod model;

use std::collections::{BTreeMap, BTreeSet, HashMap};

use shared::solver::{
    AssignedEmployeeDetail, AssignedEmployeeSegment, HoursSummaryEntry, MissingSegment,
    ShiftAssignmentOut, SolveRequest, SolveResponse, UncoveredEntry,
};
use shared::time;

use model::{Lp, VarId};

/// Runtime knobs for one solve invocation.
#[derive(Debug, Clone, Copy)]
pub struct SolverParams {
    pub time_limit_sec: f64,
    pub workers: u32,
}

impl Default for SolverParams {
    fn default() -> Self {
        Self {
            time_limit_sec: 10.0,
            workers: 8,
        }
    }
}

impl SolverParams {
    pub fn from_request(req: &SolveRequest) -> Self {
        let defaults = Self::default();
        Self {
            time_limit_sec: req.time_limit_sec.unwrap_or(defaults.time_limit_sec),
            workers: req.workers.unwrap_or(defaults.workers),
        }
    }
}

#[derive(Debug, Clone)]
struct OrigShift {
    id: String,
    date: String,
    location: String,
    start: String,
    end: String,
    start_min: i32,
    end_min: i32,
    demand: i32,
    needs_experienced: bool,
}

#[derive(Debug, Clone)]
struct SliceUnit {
    id: String,
    orig_id: String,
    date: String,
    start: String,
    end: String,
    start_min: i32,
    end_min: i32,
    demand: i32,
    needs_experienced: bool,
}

impl SliceUnit {
    fn duration(&self) -> i32 {
        self.end_min - self.start_min
    }
}

#[derive(Debug, Clone)]
struct EmployeeAgg {
    experienced: bool,
    hours_min: i32,
    /// `None` is the unbounded ceiling.
    hours_max: Option<i32>,
    name: Option<String>,
}

fn shift_key(date: &str, location: &str, start: &str, end: &str) -> String {
    format!("{date}|{location}|{start}-{end}")
}

fn tighten_min(a: i32, b: i32) -> i32 {
    a.max(b)
}

fn tighten_max(a: Option<i32>, b: Option<i32>) -> Option<i32> {
    match (a, b) {
        (None, None) => None,
        (Some(x), None) | (None, Some(x)) => Some(x),
        (Some(x), Some(y)) => Some(x.min(y)),
    }
}

/// Runs one solve over `req`, never failing: an infeasible or erroring model degrades
/// to the "no assignments, fully uncovered" fallback.
pub fn solve(req: &SolveRequest, params: SolverParams) -> SolveResponse {
    let orig_shifts: Vec<OrigShift> = req
        .demand
        .iter()
        .map(|item| {
            let start_min = time::to_minutes(&item.start).unwrap_or(0);
            let end_min = time::to_minutes(&item.end).unwrap_or(start_min);
            OrigShift {
                id: shift_key(&item.date, &item.location, &item.start, &item.end),
                date: item.date.clone(),
                location: item.location.clone(),
                start: item.start.clone(),
                end: item.end.clone(),
                start_min,
                end_min,
                demand: item.demand.max(0),
                needs_experienced: item.needs_experienced,
            }
        })
        .collect();

    let mut slices: Vec<SliceUnit> = Vec::new();
    let mut slices_by_orig: HashMap<String, Vec<usize>> = HashMap::new();
    for orig in &orig_shifts {
        for sl in time::slice_interval(orig.start_min, orig.end_min) {
            let idx = slices.len();
            slices.push(SliceUnit {
                id: format!("{}#{}-{}", orig.id, sl.start, sl.end),
                orig_id: orig.id.clone(),
                date: orig.date.clone(),
                start: time::minutes_to_hhmm(sl.start),
                end: time::minutes_to_hhmm(sl.end),
                start_min: sl.start,
                end_min: sl.end,
                demand: orig.demand,
                needs_experienced: orig.needs_experienced,
            });
            slices_by_orig.entry(orig.id.clone()).or_default().push(idx);
        }
    }

    // Aggregate availability per (employee, date), tightening hour bounds across rows.
    let mut employees: BTreeMap<String, EmployeeAgg> = BTreeMap::new();
    let mut availability: HashMap<(String, String), Vec<(i32, i32)>> = HashMap::new();
    let mut preassign_orig: HashMap<(String, String), bool> = HashMap::new();

    for rec in &req.availability {
        let entry = employees.entry(rec.employee_id.clone()).or_insert(EmployeeAgg {
            experienced: rec.experienced,
            hours_min: rec.hours_min,
            hours_max: rec.hours_max,
            name: rec.employee_name.clone(),
        });
        entry.experienced = entry.experienced || rec.experienced;
        entry.hours_min = tighten_min(entry.hours_min, rec.hours_min);
        entry.hours_max = tighten_max(entry.hours_max, rec.hours_max);
        if entry.name.is_none() {
            entry.name = rec.employee_name.clone();
        }

        let slots = availability
            .entry((rec.employee_id.clone(), rec.date.clone()))
            .or_default();
        for slot in &rec.available_slots {
            if let (Ok(s), Ok(e)) = (time::to_minutes(&slot.start), time::to_minutes(&slot.end)) {
                if time::is_valid_interval(s, e) {
                    slots.push((s, e));
                }
            }
        }

        if let Some(asg) = &rec.assigned_shift {
            if asg.confirmed {
                let candidate_id = shift_key(&rec.date, &asg.location, &asg.start, &asg.end);
                if orig_shifts.iter().any(|o| o.id == candidate_id) {
                    preassign_orig.insert((rec.employee_id.clone(), candidate_id), true);
                }
            }
        }
    }

    let emp_ids: Vec<String> = employees.keys().cloned().collect();

    let mut preassign_slices: HashMap<(String, usize), bool> = HashMap::new();
    for ((emp, orig_id), val) in &preassign_orig {
        if *val {
            if let Some(idxs) = slices_by_orig.get(orig_id) {
                for &idx in idxs {
                    preassign_slices.insert((emp.clone(), idx), true);
                }
            }
        }
    }

    // allowed[e][slice_idx]
    let mut allowed: HashMap<(String, usize), bool> = HashMap::new();
    for e in &emp_ids {
        for (idx, sl) in slices.iter().enumerate() {
            let slots = availability
                .get(&(e.clone(), sl.date.clone()))
                .map(Vec::as_slice)
                .unwrap_or(&[]);
            let mut ok = slots
                .iter()
                .any(|(a, b)| time::contains(*a, *b, sl.start_min, sl.end_min));
            if preassign_slices.get(&(e.clone(), idx)).copied().unwrap_or(false) {
                ok = true;
            }
            allowed.insert((e.clone(), idx), ok);
        }
    }

    let mut allowed_orig: HashMap<(String, String), bool> = HashMap::new();
    for e in &emp_ids {
        for orig in &orig_shifts {
            let mut any_ok = preassign_orig.get(&(e.clone(), orig.id.clone())).copied().unwrap_or(false);
            if !any_ok {
                if let Some(idxs) = slices_by_orig.get(&orig.id) {
                    any_ok = idxs.iter().any(|&idx| *allowed.get(&(e.clone(), idx)).unwrap_or(&false));
                }
            }
            allowed_orig.insert((e.clone(), orig.id.clone()), any_ok);
        }
    }

    let mut lp = Lp::new();

    // x[e, slice_idx]
    let mut x: HashMap<(String, usize), VarId> = HashMap::new();
    for e in &emp_ids {
        for idx in 0..slices.len() {
            if *allowed.get(&(e.clone(), idx)).unwrap_or(&false) {
                x.insert((e.clone(), idx), lp.add_binary(&format!("x_{e}_{idx}")));
            }
        }
    }

    // y[e, orig]
    let mut y: HashMap<(String, String), VarId> = HashMap::new();
    for e in &emp_ids {
        for orig in &orig_shifts {
            if *allowed_orig.get(&(e.clone(), orig.id.clone())).unwrap_or(&false) {
                y.insert(
                    (e.clone(), orig.id.clone()),
                    lp.add_binary(&format!("y_{e}_{}", orig.id)),
                );
            }
        }
    }

    // Force pre-assignments.
    for ((e, idx), val) in &preassign_slices {
        if *val {
            if let Some(&v) = x.get(&(e.clone(), *idx)) {
                lp.fix(v, 1.0);
            }
        }
    }
    for ((e, orig_id), val) in &preassign_orig {
        if *val {
            if let Some(&v) = y.get(&(e.clone(), orig_id.clone())) {
                lp.fix(v, 1.0);
            }
        }
    }

    // At most `demand` distinct employees per original shift.
    for orig in &orig_shifts {
        let terms: Vec<VarId> = emp_ids
            .iter()
            .filter_map(|e| y.get(&(e.clone(), orig.id.clone())).copied())
            .collect();
        lp.at_most(&terms, orig.demand as f64);
    }

    // Link x <= y, and selected-implies-covers-one-slice.
    for e in &emp_ids {
        for orig in &orig_shifts {
            let Some(idxs) = slices_by_orig.get(&orig.id) else { continue };
            let Some(&y_var) = y.get(&(e.clone(), orig.id.clone())) else { continue };
            let mut covering = Vec::new();
            for &idx in idxs {
                if let Some(&x_var) = x.get(&(e.clone(), idx)) {
                    lp.leq(&[(x_var, 1.0)], &[(y_var, 1.0)], 0.0);
                    covering.push(x_var);
                }
            }
            if !covering.is_empty() {
                lp.geq_sum(&covering, y_var);
            }
        }
    }

    // Demand cap and under-coverage per slice; experience requirement when staffed.
    let mut under: HashMap<usize, VarId> = HashMap::new();
    let mut staffed: HashMap<usize, VarId> = HashMap::new();
    for (idx, sl) in slices.iter().enumerate() {
        let assigned: Vec<VarId> = emp_ids
            .iter()
            .filter_map(|e| x.get(&(e.clone(), idx)).copied())
            .collect();
        lp.at_most(&assigned, sl.demand as f64);

        let u = lp.add_int(&format!("under_{idx}"), 0.0, sl.demand as f64);
        lp.under_coverage(&assigned, u, sl.demand as f64);
        under.insert(idx, u);

        let s = lp.add_binary(&format!("staffed_{idx}"));
        lp.geq_sum(&assigned, s);
        let weighted_assigned: Vec<(VarId, f64)> = assigned.iter().map(|&v| (v, 1.0)).collect();
        lp.leq(&weighted_assigned, &[(s, sl.demand as f64)], 0.0);
        staffed.insert(idx, s);

        if sl.needs_experienced {
            let exp_assigned: Vec<VarId> = emp_ids
                .iter()
                .filter(|e| employees.get(*e).map(|a| a.experienced).unwrap_or(false))
                .filter_map(|e| x.get(&(e.clone(), idx)).copied())
                .collect();
            lp.geq_sum(&exp_assigned, s);
        }
    }

    // Non-overlap per employee per day — pairwise over slices sharing a date.
    for e in &emp_ids {
        let mut by_date: HashMap<&str, Vec<usize>> = HashMap::new();
        for (idx, sl) in slices.iter().enumerate() {
            if x.contains_key(&(e.clone(), idx)) {
                by_date.entry(sl.date.as_str()).or_default().push(idx);
            }
        }
        for idxs in by_date.values() {
            for i in 0..idxs.len() {
                for j in (i + 1)..idxs.len() {
                    let (a, b) = (&slices[idxs[i]], &slices[idxs[j]]);
                    if time::overlaps(a.start_min, a.end_min, b.start_min, b.end_min) {
                        let va = x[&(e.clone(), idxs[i])];
                        let vb = x[&(e.clone(), idxs[j])];
                        lp.at_most(&[va, vb], 1.0);
                    }
                }
            }
        }
    }

    // Hour bounds via slack.
    let mut over: HashMap<String, VarId> = HashMap::new();
    let mut under_hours: HashMap<String, VarId> = HashMap::new();
    const WEEK_MINUTES: f64 = 7.0 * 24.0 * 60.0;
    for e in &emp_ids {
        let agg = &employees[e];
        let terms: Vec<(VarId, f64)> = (0..slices.len())
            .filter_map(|idx| x.get(&(e.clone(), idx)).map(|&v| (v, slices[idx].duration() as f64)))
            .collect();
        let max_min = agg.hours_max.map(|h| (h as f64) * 60.0).unwrap_or(WEEK_MINUTES);
        let min_min = (agg.hours_min as f64) * 60.0;

        let over_v = lp.add_int(&format!("over_{e}"), 0.0, WEEK_MINUTES);
        let under_v = lp.add_int(&format!("underh_{e}"), 0.0, WEEK_MINUTES);
        lp.hours_ceiling(&terms, over_v, max_min);
        lp.hours_floor(&terms, under_v, min_min);
        over.insert(e.clone(), over_v);
        under_hours.insert(e.clone(), under_v);
    }

    // Objective: coverage dominates, exceeding max dominates falling short of min.
    let mut objective: Vec<(VarId, f64)> = Vec::new();
    for v in under.values() {
        objective.push((*v, 1000.0));
    }
    for v in over.values() {
        objective.push((*v, 10.0));
    }
    for v in under_hours.values() {
        objective.push((*v, 1.0));
    }

    let solution = lp.minimize(&objective, params);

    // Compose output per original shift.
    let mut assignments = Vec::with_capacity(orig_shifts.len());
    let mut uncovered = Vec::new();

    for orig in &orig_shifts {
        let idxs = slices_by_orig.get(&orig.id).cloned().unwrap_or_default();

        let mut assigned_set: BTreeSet<String> = BTreeSet::new();
        // per-employee contiguous run accumulation for segment composition
        let mut employee_runs: BTreeMap<String, Vec<(i32, i32)>> = BTreeMap::new();
        let mut missing_minutes_total = 0i32;
        let mut missing_segments: Vec<MissingSegment> = Vec::new();
        let mut current_missing: Option<(i32, i32, i32)> = None; // start, end, missing_count

        for &idx in &idxs {
            let sl = &slices[idx];
            let mut assigned_here: Vec<&String> = Vec::new();
            for e in &emp_ids {
                if let Some(&v) = x.get(&(e.clone(), idx)) {
                    if solution.as_ref().map(|s| s.value(v) > 0.5).unwrap_or(false) {
                        assigned_here.push(e);
                        assigned_set.insert(e.clone());
                        employee_runs.entry(e.clone()).or_default().push((sl.start_min, sl.end_min));
                    }
                }
            }
            let count = assigned_here.len() as i32;
            let missing_here = (sl.demand - count).max(0);
            missing_minutes_total += missing_here * sl.duration();

            current_missing = match current_missing {
                Some((s, e, m)) if e == sl.start_min && m == missing_here && missing_here > 0 => {
                    Some((s, sl.end_min, m))
                }
                Some((s, e, m)) => {
                    if m > 0 {
                        missing_segments.push(MissingSegment {
                            start: time::minutes_to_hhmm(s),
                            end: time::minutes_to_hhmm(e),
                            missing: m,
                            missing_minutes: m * (e - s),
                        });
                    }
                    if missing_here > 0 {
                        Some((sl.start_min, sl.end_min, missing_here))
                    } else {
                        None
                    }
                }
                None if missing_here > 0 => Some((sl.start_min, sl.end_min, missing_here)),
                None => None,
            };
        }
        if let Some((s, e, m)) = current_missing {
            if m > 0 {
                missing_segments.push(MissingSegment {
                    start: time::minutes_to_hhmm(s),
                    end: time::minutes_to_hhmm(e),
                    missing: m,
                    missing_minutes: m * (e - s),
                });
            }
        }

        let mut assigned_employees_detail = Vec::new();
        for (emp, mut runs) in employee_runs {
            runs.sort();
            let mut segments = Vec::new();
            let mut iter = runs.into_iter();
            if let Some((mut s, mut e)) = iter.next() {
                for (ns, ne) in iter {
                    if ns == e {
                        e = ne;
                    } else {
                        segments.push(AssignedEmployeeSegment {
                            start: time::minutes_to_hhmm(s),
                            end: time::minutes_to_hhmm(e),
                            minutes: e - s,
                        });
                        s = ns;
                        e = ne;
                    }
                }
                segments.push(AssignedEmployeeSegment {
                    start: time::minutes_to_hhmm(s),
                    end: time::minutes_to_hhmm(e),
                    minutes: e - s,
                });
            }
            let total_minutes: i32 = segments.iter().map(|s| s.minutes).sum();
            let span_start = segments.first().map(|s| s.start.clone()).unwrap_or_default();
            let span_end = segments.last().map(|s| s.end.clone()).unwrap_or_default();
            assigned_employees_detail.push(AssignedEmployeeDetail {
                employee_id: emp.clone(),
                employee_name: employees.get(&emp).and_then(|a| a.name.clone()),
                start: span_start,
                end: span_end,
                minutes: total_minutes,
                segments,
            });
        }

        assignments.push(ShiftAssignmentOut {
            date: orig.date.clone(),
            location: orig.location.clone(),
            start: orig.start.clone(),
            end: orig.end.clone(),
            demand: orig.demand,
            assigned_employees: assigned_set.into_iter().collect(),
            needs_experienced: orig.needs_experienced,
            missing_minutes: missing_minutes_total,
            assigned_employees_detail,
            missing_segments,
        });

        if missing_minutes_total > 0 {
            uncovered.push(UncoveredEntry {
                date: orig.date.clone(),
                location: orig.location.clone(),
                start: orig.start.clone(),
                end: orig.end.clone(),
                missing_minutes: missing_minutes_total,
            });
        }
    }

    let mut hours_summary = Vec::with_capacity(emp_ids.len());
    for e in &emp_ids {
        let agg = &employees[e];
        let total_minutes: i32 = (0..slices.len())
            .filter_map(|idx| {
                x.get(&(e.clone(), idx)).and_then(|&v| {
                    solution
                        .as_ref()
                        .map(|s| (s.value(v) > 0.5).then_some(slices[idx].duration()))
                })
            })
            .flatten()
            .sum();
        let over_minutes = over
            .get(e)
            .and_then(|&v| solution.as_ref().map(|s| s.value(v)))
            .unwrap_or(0.0);
        let under_minutes = under_hours
            .get(e)
            .and_then(|&v| solution.as_ref().map(|s| s.value(v)))
            .unwrap_or(0.0);
        hours_summary.push(HoursSummaryEntry {
            employee_id: e.clone(),
            experienced: agg.experienced,
            total_hours: (total_minutes as f64 / 60.0 * 100.0).round() / 100.0,
            hours_min: agg.hours_min,
            hours_max: agg.hours_max,
            over_hours: over_minutes / 60.0,
            under_hours: under_minutes / 60.0,
        });
    }

    if solution.is_none() {
        tracing::warn!("solver returned no feasible solution; reporting full uncovered demand");
        return fallback_fully_uncovered(&orig_shifts);
    }

    SolveResponse {
        assignments,
        uncovered,
        hours_summary,
    }
}

/// The INFEASIBLE/error fallback: empty assignments, full coverage gap.
fn fallback_fully_uncovered(orig_shifts: &[OrigShift]) -> SolveResponse {
    let assignments: Vec<ShiftAssignmentOut> = orig_shifts
        .iter()
        .map(|o| {
            let missing_minutes = (o.end_min - o.start_min) * o.demand;
            ShiftAssignmentOut {
                date: o.date.clone(),
                location: o.location.clone(),
                start: o.start.clone(),
                end: o.end.clone(),
                demand: o.demand,
                assigned_employees: Vec::new(),
                needs_experienced: o.needs_experienced,
                missing_minutes,
                assigned_employees_detail: Vec::new(),
                missing_segments: if missing_minutes > 0 {
                    vec![MissingSegment {
                        start: o.start.clone(),
                        end: o.end.clone(),
                        missing: o.demand,
                        missing_minutes,
                    }]
                } else {
                    Vec::new()
                },
            }
        })
        .collect();
    let uncovered = assignments
        .iter()
        .filter(|a| a.missing_minutes > 0)
        .map(|a| UncoveredEntry {
            date: a.date.clone(),
            location: a.location.clone(),
            start: a.start.clone(),
            end: a.end.clone(),
            missing_minutes: a.missing_minutes,
        })
        .collect();
    SolveResponse {
        assignments,
        uncovered,
        hours_summary: Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::solver::{AvailabilityInput, AvailabilitySlotInput};
    use shared::DemandItem;

    fn avail(emp: &str, date: &str, start: &str, end: &str, experienced: bool) -> AvailabilityInput {
        AvailabilityInput {
            employee_id: emp.into(),
            employee_name: None,
            date: date.into(),
            experienced,
            hours_min: 0,
            hours_max: None,
            available_slots: vec![AvailabilitySlotInput {
                start: start.into(),
                end: end.into(),
            }],
            assigned_shift: None,
        }
    }

    fn demand(date: &str, location: &str, start: &str, end: &str, count: i32, needs_exp: bool) -> DemandItem {
        DemandItem {
            date: date.into(),
            location: location.into(),
            start: start.into(),
            end: end.into(),
            demand: count,
            needs_experienced: needs_exp,
        }
    }

    #[test]
    fn perfect_match_covers_fully() {
        let req = SolveRequest {
            availability: vec![avail("e1", "2026-03-02", "09:00", "13:00", false)],
            demand: vec![demand("2026-03-02", "main", "09:00", "13:00", 1, false)],
            time_limit_sec: Some(5.0),
            workers: Some(1),
        };
        let resp = solve(&req, SolverParams::from_request(&req));
        assert_eq!(resp.assignments.len(), 1);
        assert_eq!(resp.assignments[0].assigned_employees, vec!["e1".to_string()]);
        assert_eq!(resp.assignments[0].missing_minutes, 0);
    }

    #[test]
    fn infeasible_demand_reports_partial_coverage() {
        let req = SolveRequest {
            availability: vec![
                avail("e1", "2026-03-02", "08:00", "16:00", false),
                avail("e2", "2026-03-02", "08:00", "16:00", false),
            ],
            demand: vec![demand("2026-03-02", "main", "08:00", "12:00", 5, false)],
            time_limit_sec: None,
            workers: None,
        };
        let resp = solve(&req, SolverParams::from_request(&req));
        assert_eq!(resp.assignments[0].assigned_employees.len(), 2);
        assert_eq!(resp.assignments[0].missing_minutes, (5 - 2) * 240);
    }

    #[test]
    fn disjoint_availability_leaves_shift_uncovered() {
        let req = SolveRequest {
            availability: vec![avail("e1", "2026-03-02", "14:00", "18:00", false)],
            demand: vec![demand("2026-03-02", "main", "08:00", "12:00", 1, false)],
            time_limit_sec: None,
            workers: None,
        };
        let resp = solve(&req, SolverParams::from_request(&req));
        assert!(resp.assignments[0].assigned_employees.is_empty());
        assert_eq!(resp.assignments[0].missing_minutes, 240);
    }

    #[test]
    fn experience_deficit_prefers_leaving_slice_unstaffed() {
        let req = SolveRequest {
            availability: vec![avail("e1", "2026-03-02", "09:00", "10:00", false)],
            demand: vec![demand("2026-03-02", "main", "09:00", "10:00", 1, true)],
            time_limit_sec: None,
            workers: None,
        };
        let resp = solve(&req, SolverParams::from_request(&req));
        assert!(resp.assignments[0].assigned_employees.is_empty());
        assert_eq!(resp.assignments[0].missing_minutes, 60);
    }

    #[test]
    fn deterministic_with_single_worker() {
        let req = SolveRequest {
            availability: vec![
                avail("e1", "2026-03-02", "08:00", "12:00", false),
                avail("e2", "2026-03-02", "08:00", "12:00", true),
            ],
            demand: vec![demand("2026-03-02", "main", "08:00", "12:00", 2, true)],
            time_limit_sec: None,
            workers: Some(1),
        };
        let r1 = solve(&req, SolverParams::from_request(&req));
        let r2 = solve(&req, SolverParams::from_request(&req));
        let total = |r: &SolveResponse| -> (usize, i32) {
            (
                r.assignments.iter().map(|a| a.assigned_employees.len()).sum(),
                r.assignments.iter().map(|a| a.missing_minutes).sum(),
            )
        };
        assert_eq!(total(&r1), total(&r2));
    }
}
