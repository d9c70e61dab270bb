use std::sync::{Arc, Mutex};

use crate::domain::error::AppResult;
use crate::domain::models::expense::{Expense, NewExpense};
use crate::domain::remote::RemoteDataService;
use crate::viewmodel::{lock, validation::parse_amount};

/// Shown when the group row is missing or its fetch failed.
pub static UNKNOWN_GROUP: &str = "Unknown Group";

/// View-model for a single group's expense screen. Activated with a group
/// identifier; every operation is a no-op while none is set.
pub struct GroupExpensesModel {
    remote: Arc<dyn RemoteDataService>,
    state: Mutex<GroupExpensesState>,
}

#[derive(Default)]
struct GroupExpensesState {
    group_id: Option<i64>,
    group_name: String,
    expenses: Vec<Expense>,
    draft: ExpenseDraft,
    loading: bool,
    generation: u64,
}

/// Pending new-expense input; the amount stays text until validated.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExpenseDraft {
    pub name: String,
    pub amount: String,
}

impl GroupExpensesModel {
    pub fn new(remote: Arc<dyn RemoteDataService>) -> Self {
        GroupExpensesModel {
            remote,
            state: Mutex::new(GroupExpensesState::default()),
        }
    }

    /// Points the model at a group and reloads it: the group's display name
    /// and its expense rows are fetched independently. Fetch failures are
    /// logged; the name falls back to [`UNKNOWN_GROUP`] and the expense list
    /// to empty. A result arriving after a newer activation is discarded.
    pub async fn activate(&self, group_id: Option<i64>) {
        let generation = {
            let mut state = lock(&self.state);
            state.group_id = group_id;
            state.generation += 1;
            state.loading = group_id.is_some();
            state.generation
        };

        let Some(group_id) = group_id else {
            return;
        };

        let (name, expenses) = futures::join!(
            self.remote.find_group_name(group_id),
            self.remote.select_expenses(group_id),
        );

        let mut state = lock(&self.state);
        if state.generation != generation {
            return;
        }
        state.loading = false;

        state.group_name = match name {
            Ok(Some(name)) => name,
            Ok(None) => UNKNOWN_GROUP.to_string(),
            Err(error) => {
                tracing::error!(%error, group_id, "failed to fetch group");
                UNKNOWN_GROUP.to_string()
            }
        };

        state.expenses = match expenses {
            Ok(expenses) => expenses,
            Err(error) => {
                tracing::error!(%error, group_id, "failed to fetch expenses");
                Vec::new()
            }
        };
    }

    /// Inserts an expense built from the draft. A missing group id or an
    /// empty draft field is a no-op without a remote call; an unparseable or
    /// negative amount is a validation error, also without a remote call.
    /// On success the returned rows are appended and the draft reset; on
    /// failure the draft is kept.
    pub async fn add_expense(&self) -> AppResult<()> {
        let (group_id, draft) = {
            let state = lock(&self.state);
            (state.group_id, state.draft.clone())
        };

        let Some(group_id) = group_id else {
            return Ok(());
        };

        if draft.name.is_empty() || draft.amount.is_empty() {
            return Ok(());
        }

        let amount = parse_amount(&draft.amount)?;

        let result = self
            .remote
            .insert_expense(NewExpense {
                name: draft.name,
                amount,
                group_id,
            })
            .await;

        let mut state = lock(&self.state);

        match result {
            Ok(rows) => {
                state.expenses.extend(rows);
                state.draft = ExpenseDraft::default();
                Ok(())
            }
            Err(error) => {
                tracing::error!(%error, group_id, "failed to add expense");
                Err(error.into())
            }
        }
    }

    pub fn set_draft_name(&self, name: impl Into<String>) {
        lock(&self.state).draft.name = name.into();
    }

    pub fn set_draft_amount(&self, amount: impl Into<String>) {
        lock(&self.state).draft.amount = amount.into();
    }

    pub fn draft(&self) -> ExpenseDraft {
        lock(&self.state).draft.clone()
    }

    pub fn group_name(&self) -> String {
        lock(&self.state).group_name.clone()
    }

    pub fn expenses(&self) -> Vec<Expense> {
        lock(&self.state).expenses.clone()
    }

    pub fn is_loading(&self) -> bool {
        lock(&self.state).loading
    }
}
