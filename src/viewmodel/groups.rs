use std::sync::{Arc, Mutex};

use crate::domain::error::AppResult;
use crate::domain::models::group::{Group, NewGroup};
use crate::domain::remote::RemoteDataService;
use crate::viewmodel::lock;

/// View-model for the group list screen: the cached group rows, the search
/// box and the create-group dialog draft.
pub struct GroupListModel {
    remote: Arc<dyn RemoteDataService>,
    state: Mutex<GroupListState>,
}

#[derive(Default)]
struct GroupListState {
    groups: Vec<Group>,
    search: String,
    name_draft: String,
    loading: bool,
    creating: bool,
    generation: u64,
}

impl GroupListModel {
    pub fn new(remote: Arc<dyn RemoteDataService>) -> Self {
        GroupListModel {
            remote,
            state: Mutex::new(GroupListState::default()),
        }
    }

    /// Fetches all groups. A failed fetch is logged and leaves the list
    /// empty. Each load carries a generation token; a result that resolves
    /// after a newer load has started is discarded instead of overwriting
    /// fresher state.
    pub async fn load(&self) {
        let generation = {
            let mut state = lock(&self.state);
            state.loading = true;
            state.generation += 1;
            state.generation
        };

        let result = self.remote.select_groups().await;

        let mut state = lock(&self.state);
        if state.generation != generation {
            return;
        }
        state.loading = false;

        match result {
            Ok(groups) => state.groups = groups,
            Err(error) => {
                tracing::error!(%error, "failed to fetch groups");
                state.groups = Vec::new();
            }
        }
    }

    /// Groups whose name contains the search text as a case-insensitive
    /// substring, in original order. Pure; recomputed on every call.
    pub fn filtered(&self) -> Vec<Group> {
        let state = lock(&self.state);
        let query = state.search.to_lowercase();

        state
            .groups
            .iter()
            .filter(|group| group.name.to_lowercase().contains(&query))
            .cloned()
            .collect()
    }

    /// Inserts a group named after the current draft. A blank draft is a
    /// no-op without a remote call. On success the returned rows are
    /// appended and the draft cleared; on failure the draft is kept so the
    /// user can retry.
    pub async fn create_group(&self) -> AppResult<()> {
        let name = lock(&self.state).name_draft.clone();

        if name.trim().is_empty() {
            return Ok(());
        }

        {
            let mut state = lock(&self.state);
            state.creating = true;
        }

        let result = self.remote.insert_group(NewGroup { name }).await;

        let mut state = lock(&self.state);
        state.creating = false;

        match result {
            Ok(rows) => {
                state.groups.extend(rows);
                state.name_draft.clear();
                Ok(())
            }
            Err(error) => {
                tracing::error!(%error, "failed to create group");
                Err(error.into())
            }
        }
    }

    pub fn set_search(&self, query: impl Into<String>) {
        lock(&self.state).search = query.into();
    }

    pub fn set_name_draft(&self, name: impl Into<String>) {
        lock(&self.state).name_draft = name.into();
    }

    pub fn name_draft(&self) -> String {
        lock(&self.state).name_draft.clone()
    }

    pub fn groups(&self) -> Vec<Group> {
        lock(&self.state).groups.clone()
    }

    pub fn is_loading(&self) -> bool {
        lock(&self.state).loading
    }

    pub fn is_creating(&self) -> bool {
        lock(&self.state).creating
    }
}
