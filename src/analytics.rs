use crate::error::Result;
use crate::filter::FilterCriteria;
use crate::model::{EntityRef, Task, TaskStatus, Timesheet};
use crate::storage::Storage;
use crate::views::{
    CompletionSlice, FilterOptions, Kpis, ProjectCost, RevenueExpensePoint, StatusCount,
    UtilizationSlice, WorkloadPoint,
};
use chrono::Datelike;
use futures::try_join;
use log::debug;
use std::collections::HashSet;

/// Short English month names, in calendar order. Trend views always emit one
/// entry per name, in this order.
pub const MONTH_ABBREVS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Whether the status dimension participates when scoping timesheets
/// through their tasks. Resource utilization is the one view that ignores it.
enum TaskScope {
    Full,
    IgnoreStatus,
}

/// Read-only roll-up of project, task, and timesheet snapshots.
///
/// The engine is constructed with an injected [`Storage`] collaborator and
/// holds no state of its own: every view re-reads the collections it needs,
/// applies the shared [`FilterCriteria`] predicates, and computes its
/// aggregate from scratch. Two views computed back to back may therefore see
/// different underlying data; this is a reporting surface, not a
/// transactional one.
pub struct AnalyticsEngine<S> {
    storage: S,
}

impl<S: Storage> AnalyticsEngine<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    /// Headline KPI roll-up: project count, completed task count, and the
    /// billable/non-billable hour split with its rounded percentage.
    pub async fn kpis(&self, criteria: &FilterCriteria) -> Result<Kpis> {
        let (projects, tasks, timesheets) = try_join!(
            self.storage.list_projects(),
            self.storage.list_tasks(),
            self.storage.list_timesheets(),
        )?;

        let projects: Vec<_> = projects
            .iter()
            .filter(|p| criteria.matches_project(p))
            .collect();
        let tasks: Vec<_> = tasks.iter().filter(|t| criteria.matches_task(t)).collect();
        let task_ids: HashSet<&str> = tasks.iter().map(|t| t.id.as_str()).collect();
        let timesheets: Vec<_> = timesheets
            .iter()
            .filter(|ts| {
                task_ids.contains(ts.task_id.as_str()) && criteria.matches_timesheet(ts)
            })
            .collect();

        debug!(
            "KPI roll-up over {} projects, {} tasks, {} timesheets after filtering",
            projects.len(),
            tasks.len(),
            timesheets.len()
        );

        let total_hours: f64 = timesheets.iter().map(|ts| ts.time_logged).sum();
        let billable_hours: f64 = timesheets
            .iter()
            .filter(|ts| ts.billable)
            .map(|ts| ts.time_logged)
            .sum();

        Ok(Kpis {
            total_projects: projects.len(),
            tasks_completed: tasks
                .iter()
                .filter(|t| t.status == TaskStatus::Completed)
                .count(),
            total_hours,
            billable_hours,
            non_billable_hours: total_hours - billable_hours,
            billable_percentage: rounded_percentage(billable_hours, total_hours),
        })
    }

    /// Cost vs revenue per filtered project. A direct projection, no
    /// aggregation across projects.
    pub async fn project_costs(&self, criteria: &FilterCriteria) -> Result<Vec<ProjectCost>> {
        let projects = self.storage.list_projects().await?;

        Ok(projects
            .iter()
            .filter(|p| criteria.matches_project(p))
            .map(|p| ProjectCost {
                name: p.name.clone(),
                cost: p.cost,
                revenue: p.revenue,
            })
            .collect())
    }

    /// Billable vs non-billable hours over the scoped timesheets. Honors the
    /// project, employee, billable, and date dimensions but not task status.
    pub async fn resource_utilization(
        &self,
        criteria: &FilterCriteria,
    ) -> Result<Vec<UtilizationSlice>> {
        let (tasks, timesheets) =
            try_join!(self.storage.list_tasks(), self.storage.list_timesheets())?;
        let scoped = scoped_timesheets(&tasks, &timesheets, criteria, TaskScope::IgnoreStatus);

        let billable: f64 = scoped
            .iter()
            .filter(|ts| ts.billable)
            .map(|ts| ts.time_logged)
            .sum();
        let non_billable: f64 = scoped
            .iter()
            .filter(|ts| !ts.billable)
            .map(|ts| ts.time_logged)
            .sum();

        Ok(vec![
            UtilizationSlice {
                name: "Billable".to_string(),
                value: billable,
            },
            UtilizationSlice {
                name: "Non-Billable".to_string(),
                value: non_billable,
            },
        ])
    }

    /// Completion percentage per filtered project, from its own task
    /// counters. Projects with no tasks report 0.
    pub async fn project_completion(
        &self,
        criteria: &FilterCriteria,
    ) -> Result<Vec<CompletionSlice>> {
        let projects = self.storage.list_projects().await?;

        Ok(projects
            .iter()
            .filter(|p| criteria.matches_project(p))
            .map(|p| CompletionSlice {
                name: p.name.clone(),
                value: rounded_percentage(f64::from(p.completed_tasks), f64::from(p.total_tasks)),
            })
            .collect())
    }

    /// Hours logged per month over the scoped timesheets. Always returns
    /// twelve entries, Jan through Dec, zero-filled.
    ///
    /// Buckets are keyed by month name only: entries from different years
    /// that share a month land in the same bucket.
    pub async fn workload_trend(&self, criteria: &FilterCriteria) -> Result<Vec<WorkloadPoint>> {
        let (tasks, timesheets) =
            try_join!(self.storage.list_tasks(), self.storage.list_timesheets())?;
        let scoped = scoped_timesheets(&tasks, &timesheets, criteria, TaskScope::Full);

        let mut hours = [0.0f64; 12];
        for timesheet in scoped {
            if let Some(at) = timesheet.created_at {
                hours[at.month0() as usize] += timesheet.time_logged;
            }
        }

        Ok(MONTH_ABBREVS
            .iter()
            .zip(hours)
            .map(|(month, hours)| WorkloadPoint {
                month: month.to_string(),
                hours,
            })
            .collect())
    }

    /// Revenue and expense totals per month over the filtered projects,
    /// bucketed by project deadline. Projects without a deadline are
    /// skipped. Same fixed twelve-entry shape and same month-name keying as
    /// [`AnalyticsEngine::workload_trend`].
    pub async fn revenue_expense_trend(
        &self,
        criteria: &FilterCriteria,
    ) -> Result<Vec<RevenueExpensePoint>> {
        let projects = self.storage.list_projects().await?;

        let mut totals = [(0.0f64, 0.0f64); 12];
        for project in projects.iter().filter(|p| criteria.matches_project(p)) {
            if let Some(deadline) = project.deadline {
                let slot = &mut totals[deadline.month0() as usize];
                slot.0 += project.revenue;
                slot.1 += project.cost;
            }
        }

        Ok(MONTH_ABBREVS
            .iter()
            .zip(totals)
            .map(|(month, (revenue, expense))| RevenueExpensePoint {
                month: month.to_string(),
                revenue,
                expense,
            })
            .collect())
    }

    /// Task counts grouped by status. Sparse: statuses with zero matching
    /// tasks are omitted, unlike the fixed-shape trend views.
    pub async fn task_status_distribution(
        &self,
        criteria: &FilterCriteria,
    ) -> Result<Vec<StatusCount>> {
        let tasks = self.storage.list_tasks().await?;
        let filtered: Vec<_> = tasks.iter().filter(|t| criteria.matches_task(t)).collect();

        Ok(TaskStatus::ALL
            .iter()
            .filter_map(|&status| {
                let value = filtered.iter().filter(|t| t.status == status).count();
                if value > 0 {
                    Some(StatusCount {
                        name: status,
                        value,
                    })
                } else {
                    None
                }
            })
            .collect())
    }

    /// The project/employee/status lists the filter bar offers. No filtering
    /// logic of its own.
    pub async fn filter_options(&self) -> Result<FilterOptions> {
        let (projects, users) =
            try_join!(self.storage.list_projects(), self.storage.list_users())?;

        Ok(FilterOptions {
            projects: projects
                .into_iter()
                .map(|p| EntityRef {
                    id: p.id,
                    name: p.name,
                })
                .collect(),
            employees: users,
            statuses: TaskStatus::ALL.to_vec(),
        })
    }
}

/// Restricts timesheets to those logged against a surviving task, then
/// applies the billable and date predicates.
fn scoped_timesheets<'a>(
    tasks: &[Task],
    timesheets: &'a [Timesheet],
    criteria: &FilterCriteria,
    scope: TaskScope,
) -> Vec<&'a Timesheet> {
    let task_ids: HashSet<&str> = tasks
        .iter()
        .filter(|t| match scope {
            TaskScope::Full => criteria.matches_task(t),
            TaskScope::IgnoreStatus => criteria.matches_task_scope(t),
        })
        .map(|t| t.id.as_str())
        .collect();

    timesheets
        .iter()
        .filter(|ts| task_ids.contains(ts.task_id.as_str()) && criteria.matches_timesheet(ts))
        .collect()
}

fn rounded_percentage(part: f64, whole: f64) -> u32 {
    if whole > 0.0 {
        (part / whole * 100.0).round() as u32
    } else {
        0
    }
}
