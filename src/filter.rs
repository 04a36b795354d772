use crate::model::{Project, Task, TaskStatus, Timesheet};
use chrono::{DateTime, NaiveDate, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Loosely-typed filter bag as it arrives from a query string.
///
/// Every field is optional and free-form; [`RawFilters::normalize`] is the
/// only place that interprets the values. Malformed input never errors, it
/// simply imposes no restriction.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct RawFilters {
    pub project: Option<String>,
    pub employee: Option<String>,
    pub status: Option<String>,
    pub billable: Option<String>,
    pub start: Option<String>,
    pub end: Option<String>,
}

impl RawFilters {
    /// Maps the raw bag to typed criteria. The literal `"all"`, empty strings,
    /// absent fields, unknown status labels, and unparseable dates all mean
    /// "no restriction on this dimension".
    pub fn normalize(&self) -> FilterCriteria {
        FilterCriteria {
            project: restriction(&self.project),
            employee: restriction(&self.employee),
            status: self
                .status
                .as_deref()
                .and_then(TaskStatus::from_label),
            billable: match self.billable.as_deref() {
                Some("true") => Some(true),
                Some("false") => Some(false),
                _ => None,
            },
            start: self.start.as_deref().and_then(|raw| parse_bound(raw, false)),
            end: self.end.as_deref().and_then(|raw| parse_bound(raw, true)),
        }
    }
}

fn restriction(value: &Option<String>) -> Option<String> {
    match value.as_deref() {
        None | Some("") | Some("all") => None,
        Some(v) => Some(v.to_string()),
    }
}

/// Accepts RFC 3339 timestamps or bare `YYYY-MM-DD` dates. A bare end date
/// widens to the last second of that day so both bounds stay inclusive.
fn parse_bound(raw: &str, end_of_day: bool) -> Option<DateTime<Utc>> {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Some(parsed.with_timezone(&Utc));
    }

    let date = NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()?;
    let at = if end_of_day {
        date.and_hms_opt(23, 59, 59)?
    } else {
        date.and_hms_opt(0, 0, 0)?
    };
    Some(at.and_utc())
}

/// Normalized predicate criteria shared by every analytics view.
///
/// `None` on a dimension means "no restriction". All views interpret the
/// dimensions identically: projects match on id, tasks on project/assignee/
/// status, and timesheets on billable flag and `created_at` range after
/// being restricted to the surviving task ids.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterCriteria {
    pub project: Option<String>,
    pub employee: Option<String>,
    pub status: Option<TaskStatus>,
    pub billable: Option<bool>,
    pub start: Option<DateTime<Utc>>,
    pub end: Option<DateTime<Utc>>,
}

impl FilterCriteria {
    /// Criteria that matches everything.
    pub fn unrestricted() -> Self {
        Self::default()
    }

    pub fn matches_project(&self, project: &Project) -> bool {
        match &self.project {
            Some(id) => project.id == *id,
            None => true,
        }
    }

    pub fn matches_task(&self, task: &Task) -> bool {
        self.matches_task_scope(task)
            && self.status.map_or(true, |status| task.status == status)
    }

    /// Project and assignee dimensions only; the status dimension is skipped.
    /// Resource utilization scopes its timesheets through this predicate.
    pub fn matches_task_scope(&self, task: &Task) -> bool {
        let project_ok = self
            .project
            .as_ref()
            .map_or(true, |id| task.project_id.as_deref() == Some(id.as_str()));
        let assignee_ok = self
            .employee
            .as_ref()
            .map_or(true, |id| task.assignee_id.as_deref() == Some(id.as_str()));
        project_ok && assignee_ok
    }

    /// Billable and date dimensions. Membership in the filtered task set is
    /// the caller's job. A timesheet without `created_at` is excluded as soon
    /// as either date bound is set.
    pub fn matches_timesheet(&self, timesheet: &Timesheet) -> bool {
        if let Some(billable) = self.billable {
            if timesheet.billable != billable {
                return false;
            }
        }

        if self.start.is_some() || self.end.is_some() {
            match timesheet.created_at {
                Some(at) => {
                    if let Some(start) = self.start {
                        if at < start {
                            return false;
                        }
                    }
                    if let Some(end) = self.end {
                        if at > end {
                            return false;
                        }
                    }
                }
                None => return false,
            }
        }

        true
    }
}
