use crate::model::{EntityRef, TaskStatus};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Headline numbers for the analytics dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Kpis {
    pub total_projects: usize,
    pub tasks_completed: usize,
    pub total_hours: f64,
    pub billable_hours: f64,
    pub non_billable_hours: f64,
    /// Rounded share of billable hours, 0-100. Zero when no hours were logged.
    pub billable_percentage: u32,
}

/// Per-project cost vs revenue, one entry per filtered project.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProjectCost {
    pub name: String,
    pub cost: f64,
    pub revenue: f64,
}

/// One slice of the billable/non-billable utilization pie.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct UtilizationSlice {
    pub name: String,
    pub value: f64,
}

/// Completion percentage for a single project.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CompletionSlice {
    pub name: String,
    /// Rounded share of completed tasks, 0-100. Zero when the project has no tasks.
    pub value: u32,
}

/// Hours logged per calendar month. Trend responses always carry twelve of
/// these, Jan through Dec, with zeroes for empty months.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct WorkloadPoint {
    pub month: String,
    pub hours: f64,
}

/// Revenue and expense totals per calendar month, same fixed twelve-entry
/// shape as [`WorkloadPoint`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct RevenueExpensePoint {
    pub month: String,
    pub revenue: f64,
    pub expense: f64,
}

/// Task count for one status. The distribution is sparse: statuses with no
/// matching tasks are omitted entirely.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct StatusCount {
    pub name: TaskStatus,
    pub value: usize,
}

/// Everything the filter bar needs to populate its dropdowns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct FilterOptions {
    pub projects: Vec<EntityRef>,
    pub employees: Vec<EntityRef>,
    pub statuses: Vec<TaskStatus>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kpis_wire_shape() {
        let kpis = Kpis {
            total_projects: 2,
            tasks_completed: 3,
            total_hours: 10.0,
            billable_hours: 7.5,
            non_billable_hours: 2.5,
            billable_percentage: 75,
        };

        let json = serde_json::to_value(&kpis).unwrap();
        assert_eq!(json["totalProjects"], 2);
        assert_eq!(json["billablePercentage"], 75);
        assert_eq!(json["nonBillableHours"], 2.5);
    }

    #[test]
    fn test_status_count_serializes_label() {
        let count = StatusCount {
            name: TaskStatus::InProgress,
            value: 4,
        };
        let json = serde_json::to_value(&count).unwrap();
        assert_eq!(json["name"], "In Progress");
    }
}
