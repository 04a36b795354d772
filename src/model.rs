use chrono::{DateTime, NaiveDate, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Lifecycle state of a project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub enum ProjectStatus {
    Planned,
    #[serde(rename = "In Progress")]
    InProgress,
    Completed,
    #[serde(rename = "On Hold")]
    OnHold,
}

/// Lifecycle state of a task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub enum TaskStatus {
    Planned,
    #[serde(rename = "In Progress")]
    InProgress,
    Completed,
    Blocked,
}

impl TaskStatus {
    /// The four task statuses, in the order the UI presents them.
    pub const ALL: [TaskStatus; 4] = [
        TaskStatus::Planned,
        TaskStatus::InProgress,
        TaskStatus::Completed,
        TaskStatus::Blocked,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            TaskStatus::Planned => "Planned",
            TaskStatus::InProgress => "In Progress",
            TaskStatus::Completed => "Completed",
            TaskStatus::Blocked => "Blocked",
        }
    }

    /// Parses the human-readable label used on the wire ("In Progress", ...).
    /// Returns `None` for anything that is not one of the four labels.
    pub fn from_label(label: &str) -> Option<TaskStatus> {
        Self::ALL.iter().copied().find(|s| s.label() == label)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    pub name: String,
    pub manager: String,
    pub deadline: Option<NaiveDate>,
    pub status: ProjectStatus,
    pub budget: f64,
    pub budget_spent: f64,
    pub cost: f64,
    pub revenue: f64,
    pub total_tasks: u32,
    pub completed_tasks: u32,
    /// 0-100. Callers keep this at 100 for completed projects.
    pub progress: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: String,
    pub project_id: Option<String>,
    pub assignee_id: Option<String>,
    pub status: TaskStatus,
    pub is_billable: bool,
    pub total_hours: f64,
    pub deadline: Option<NaiveDate>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Timesheet {
    pub id: String,
    pub task_id: String,
    pub employee_id: String,
    /// Hours logged against the task. Never negative.
    pub time_logged: f64,
    pub billable: bool,
    pub created_at: Option<DateTime<Utc>>,
}

/// Minimal `{id, name}` projection used to populate filter dropdowns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct EntityRef {
    pub id: String,
    pub name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_labels_round_trip() {
        for status in TaskStatus::ALL {
            assert_eq!(TaskStatus::from_label(status.label()), Some(status));
        }
        assert_eq!(TaskStatus::from_label("Cancelled"), None);
        assert_eq!(TaskStatus::from_label("in progress"), None);
    }

    #[test]
    fn test_serialization_uses_wire_labels() {
        let json = serde_json::to_string(&TaskStatus::InProgress).unwrap();
        assert_eq!(json, "\"In Progress\"");

        let status: ProjectStatus = serde_json::from_str("\"On Hold\"").unwrap();
        assert_eq!(status, ProjectStatus::OnHold);
    }

    #[test]
    fn test_timesheet_wire_shape() {
        let timesheet = Timesheet {
            id: "ts-1".to_string(),
            task_id: "t-1".to_string(),
            employee_id: "u-1".to_string(),
            time_logged: 4.5,
            billable: true,
            created_at: None,
        };

        let json = serde_json::to_value(&timesheet).unwrap();
        assert_eq!(json["taskId"], "t-1");
        assert_eq!(json["timeLogged"], 4.5);
        assert!(json["createdAt"].is_null());
    }
}
