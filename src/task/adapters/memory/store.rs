//! Thread-safe in-memory task store with an assignee secondary index.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::task::{
    domain::{Task, TaskId, TaskPatch},
    ports::{TaskStore, TaskStoreError, TaskStoreResult},
};

/// Thread-safe in-memory task store.
///
/// Reference implementation of the [`TaskStore`] contract; patches are
/// applied under the single write lock, which provides the atomic
/// single-record update the service relies on.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTaskStore {
    state: Arc<RwLock<InMemoryState>>,
}

#[derive(Debug, Default)]
struct InMemoryState {
    tasks: HashMap<TaskId, Task>,
    assignee_index: HashMap<String, Vec<TaskId>>,
}

impl InMemoryTaskStore {
    /// Creates an empty in-memory store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

fn index_assignee(index: &mut HashMap<String, Vec<TaskId>>, task: &Task) {
    index
        .entry(task.assigned_to().to_owned())
        .or_default()
        .push(task.task_id());
}

/// Removes a task ID from the assignee index, cleaning up the entry if empty.
fn remove_from_index(index: &mut HashMap<String, Vec<TaskId>>, task_id: TaskId, key: &str) {
    if let Some(ids) = index.get_mut(key) {
        ids.retain(|id| *id != task_id);
        if ids.is_empty() {
            index.remove(key);
        }
    }
}

fn lock_poisoned(err: impl std::fmt::Display) -> TaskStoreError {
    TaskStoreError::persistence(std::io::Error::other(err.to_string()))
}

#[async_trait]
impl TaskStore for InMemoryTaskStore {
    async fn insert_new(&self, task: &Task) -> TaskStoreResult<()> {
        let mut state = self.state.write().map_err(lock_poisoned)?;
        if state.tasks.contains_key(&task.task_id()) {
            return Err(TaskStoreError::DuplicateTask(task.task_id()));
        }

        index_assignee(&mut state.assignee_index, task);
        state.tasks.insert(task.task_id(), task.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: TaskId) -> TaskStoreResult<Option<Task>> {
        let state = self.state.read().map_err(lock_poisoned)?;
        Ok(state.tasks.get(&id).cloned())
    }

    async fn apply_patch(
        &self,
        id: TaskId,
        patch: &TaskPatch,
        updated_at: DateTime<Utc>,
    ) -> TaskStoreResult<Option<Task>> {
        let mut state = self.state.write().map_err(lock_poisoned)?;

        let Some(existing) = state.tasks.get(&id) else {
            return Ok(None);
        };
        let previous_assignee = existing.assigned_to().to_owned();

        let mut updated = existing.clone();
        updated.apply_patch(patch, updated_at);

        if updated.assigned_to() != previous_assignee {
            remove_from_index(&mut state.assignee_index, id, &previous_assignee);
            index_assignee(&mut state.assignee_index, &updated);
        }
        state.tasks.insert(id, updated.clone());
        Ok(Some(updated))
    }

    async fn list_all(&self) -> TaskStoreResult<Vec<Task>> {
        let state = self.state.read().map_err(lock_poisoned)?;
        Ok(state.tasks.values().cloned().collect())
    }

    async fn find_by_assignee(&self, assignee: &str) -> TaskStoreResult<Vec<Task>> {
        let state = self.state.read().map_err(lock_poisoned)?;
        let tasks = state
            .assignee_index
            .get(assignee)
            .map(|ids| {
                ids.iter()
                    .filter_map(|id| state.tasks.get(id).cloned())
                    .collect()
            })
            .unwrap_or_default();
        Ok(tasks)
    }
}
