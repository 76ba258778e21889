//! Thin builder over `good_lp` so `solver::solve` can stay about scheduling
//! semantics rather than linear-program plumbing.
//!
//! `microlp` (the pure-Rust backend selected in the workspace `Cargo.toml`) has no
//! wall-clock deadline hook the way OR-Tools' CP-SAT does, so `SolverParams::time_limit_sec`
//! and `workers` are accepted for wire compatibility with the original model but are not
//! enforced here — logged once per solve. A `SolverTimeout` is therefore unreachable
//! with this backend; an infeasible model falls back to the fully-uncovered report instead.

use std::collections::HashMap;

use good_lp::{constraint, variable, variables, Expression, ProblemVariables, Solution, SolverModel, Variable};

use super::SolverParams;

pub type VarId = Variable;

pub struct Lp {
    vars: ProblemVariables,
    constraints: Vec<good_lp::Constraint>,
    all_vars: Vec<VarId>,
}

fn sum_vars(vars: &[VarId]) -> Expression {
    let mut iter = vars.iter();
    let Some(&first) = iter.next() else {
        return Expression::from(0.0);
    };
    let mut acc: Expression = first.into();
    for &v in iter {
        acc = acc + v;
    }
    acc
}

fn sum_weighted(terms: &[(VarId, f64)]) -> Expression {
    let mut iter = terms.iter();
    let Some(&(first, coeff)) = iter.next() else {
        return Expression::from(0.0);
    };
    let mut acc: Expression = coeff * first;
    for &(v, c) in iter {
        acc = acc + c * v;
    }
    acc
}

impl Lp {
    pub fn new() -> Self {
        Self {
            vars: variables!(),
            constraints: Vec::new(),
            all_vars: Vec::new(),
        }
    }

    pub fn add_binary(&mut self, _name: &str) -> VarId {
        let v = self.vars.add(variable().binary());
        self.all_vars.push(v);
        v
    }

    pub fn add_int(&mut self, _name: &str, min: f64, max: f64) -> VarId {
        let v = self.vars.add(variable().integer().min(min).max(max));
        self.all_vars.push(v);
        v
    }

    /// Forces a decision variable to a constant (pre-assignment lift).
    pub fn fix(&mut self, v: VarId, value: f64) {
        self.constraints.push(constraint!(v == value));
    }

    /// `sum(vars) <= bound`.
    pub fn at_most(&mut self, vars: &[VarId], bound: f64) {
        if vars.is_empty() {
            return;
        }
        self.constraints.push(constraint!(sum_vars(vars) <= bound));
    }

    /// `sum(lhs weighted) <= sum(rhs weighted) + constant`.
    pub fn leq(&mut self, lhs: &[(VarId, f64)], rhs: &[(VarId, f64)], constant: f64) {
        let l = sum_weighted(lhs);
        let r = sum_weighted(rhs) + constant;
        self.constraints.push(constraint!(l <= r));
    }

    /// `sum(terms) >= var` (coverage-implication / experience-when-staffed shape).
    pub fn geq_sum(&mut self, terms: &[VarId], var: VarId) {
        if terms.is_empty() {
            self.constraints.push(constraint!(var <= 0.0));
            return;
        }
        self.constraints.push(constraint!(sum_vars(terms) >= var));
    }

    /// `under >= demand - sum(assigned)`.
    pub fn under_coverage(&mut self, assigned: &[VarId], under: VarId, demand: f64) {
        let sum = sum_vars(assigned);
        self.constraints.push(constraint!(under >= demand - sum));
    }

    /// `sum(duration * x) <= max_min + over`.
    pub fn hours_ceiling(&mut self, terms: &[(VarId, f64)], over: VarId, max_min: f64) {
        let tot = sum_weighted(terms);
        self.constraints.push(constraint!(tot <= max_min + over));
    }

    /// `sum(duration * x) + under >= min_min`.
    pub fn hours_floor(&mut self, terms: &[(VarId, f64)], under: VarId, min_min: f64) {
        let tot = sum_weighted(terms);
        self.constraints.push(constraint!(tot + under >= min_min));
    }

    /// Minimizes the weighted objective, returning evaluated variable values, or `None`
    /// if the model is infeasible or the backend otherwise fails to produce a solution.
    pub fn minimize(self, objective: &[(VarId, f64)], params: SolverParams) -> Option<SolvedValues> {
        tracing::debug!(
            time_limit_sec = params.time_limit_sec,
            workers = params.workers,
            "solving (microlp backend does not enforce a wall-clock deadline)"
        );

        let objective_expr = sum_weighted(objective);
        let mut model = self.vars.minimise(objective_expr).using(good_lp::solvers::microlp::microlp);
        for c in self.constraints {
            model = model.with(c);
        }

        match model.solve() {
            Ok(solution) => {
                let mut values = HashMap::with_capacity(self.all_vars.len());
                for v in self.all_vars {
                    values.insert(v, solution.value(v));
                }
                Some(SolvedValues(values))
            }
            Err(err) => {
                tracing::warn!(error = %err, "solver did not produce a feasible solution");
                None
            }
        }
    }
}

pub struct SolvedValues(HashMap<VarId, f64>);

impl SolvedValues {
    pub fn value(&self, v: VarId) -> f64 {
        self.0.get(&v).copied().unwrap_or(0.0)
    }
}
