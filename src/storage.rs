use crate::error::Result;
use crate::model::{EntityRef, Project, Task, Timesheet};
use async_trait::async_trait;
use std::sync::Arc;

/// Read boundary to the backing relational store.
///
/// Implementations must return complete snapshots of each collection; no
/// transactional isolation is assumed between calls. Read failures surface
/// as [`crate::WorksightError::Storage`].
#[async_trait]
pub trait Storage: Send + Sync {
    async fn list_projects(&self) -> Result<Vec<Project>>;
    async fn list_tasks(&self) -> Result<Vec<Task>>;
    async fn list_timesheets(&self) -> Result<Vec<Timesheet>>;
    async fn list_users(&self) -> Result<Vec<EntityRef>>;
}

#[async_trait]
impl<S: Storage + ?Sized> Storage for Arc<S> {
    async fn list_projects(&self) -> Result<Vec<Project>> {
        (**self).list_projects().await
    }

    async fn list_tasks(&self) -> Result<Vec<Task>> {
        (**self).list_tasks().await
    }

    async fn list_timesheets(&self) -> Result<Vec<Timesheet>> {
        (**self).list_timesheets().await
    }

    async fn list_users(&self) -> Result<Vec<EntityRef>> {
        (**self).list_users().await
    }
}

/// In-memory storage backed by plain vectors.
///
/// Construct it with explicit collections and hand it to the engine; there
/// is no global fallback store. Doubles as the fixture implementation in
/// tests.
#[derive(Debug, Clone, Default)]
pub struct MemStorage {
    pub projects: Vec<Project>,
    pub tasks: Vec<Task>,
    pub timesheets: Vec<Timesheet>,
    pub users: Vec<EntityRef>,
}

#[async_trait]
impl Storage for MemStorage {
    async fn list_projects(&self) -> Result<Vec<Project>> {
        Ok(self.projects.clone())
    }

    async fn list_tasks(&self) -> Result<Vec<Task>> {
        Ok(self.tasks.clone())
    }

    async fn list_timesheets(&self) -> Result<Vec<Timesheet>> {
        Ok(self.timesheets.clone())
    }

    async fn list_users(&self) -> Result<Vec<EntityRef>> {
        Ok(self.users.clone())
    }
}
