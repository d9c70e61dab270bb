use async_trait::async_trait;
use reqwest::RequestBuilder;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::config::RemoteConfig;
use crate::domain::models::expense::{Expense, NewExpense};
use crate::domain::models::group::{Group, NewGroup};
use crate::domain::models::session::{Credentials, Registration};
use crate::domain::remote::{RemoteDataService, RemoteError, RemoteResult};
use crate::infrastructure::models::remote::{
    ExpenseInsert, ExpenseRow, GroupInsert, GroupNameRow, GroupRow, PasswordGrantBody,
    RemoteErrorBody, SignUpBody,
};

const GROUPS: &str = "groups";
const EXPENSES: &str = "expenses";

/// HTTP client for the hosted platform: a PostgREST-style row API under
/// `/rest/v1` and a GoTrue-style auth API under `/auth/v1`, both guarded by
/// the project API key.
pub struct RemoteClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl RemoteClient {
    pub fn new(config: &RemoteConfig) -> Self {
        RemoteClient {
            http: reqwest::Client::new(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
        }
    }

    fn table(&self, name: &str) -> String {
        format!("{}/rest/v1/{name}", self.base_url)
    }

    fn auth(&self, path: &str) -> String {
        format!("{}/auth/v1/{path}", self.base_url)
    }

    /// Sends a prepared request and decodes the success body, converting an
    /// error body into [`RemoteError::Rejected`] where the service produced
    /// one and into [`RemoteError::Transport`] everywhere else.
    async fn send<T: DeserializeOwned>(&self, request: RequestBuilder) -> RemoteResult<T> {
        let response = request
            .header("apikey", &self.api_key)
            .bearer_auth(&self.api_key)
            .send()
            .await
            .map_err(|err| RemoteError::Transport(err.to_string()))?;

        let status = response.status();

        if status.is_success() {
            return response
                .json::<T>()
                .await
                .map_err(|err| RemoteError::Transport(err.to_string()));
        }

        match response.json::<RemoteErrorBody>().await {
            Ok(body) => match body.into_message() {
                Some(message) => Err(RemoteError::Rejected(message)),
                None => Err(RemoteError::Transport(format!("status {status}"))),
            },
            Err(_) => Err(RemoteError::Transport(format!("status {status}"))),
        }
    }
}

#[async_trait]
impl RemoteDataService for RemoteClient {
    async fn select_groups(&self) -> RemoteResult<Vec<Group>> {
        let rows: Vec<GroupRow> = self
            .send(
                self.http
                    .get(self.table(GROUPS))
                    .query(&[("select", "id,name")]),
            )
            .await?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn find_group_name(&self, group_id: i64) -> RemoteResult<Option<String>> {
        let rows: Vec<GroupNameRow> = self
            .send(
                self.http
                    .get(self.table(GROUPS))
                    .query(&[("select", "name"), ("id", &format!("eq.{group_id}"))]),
            )
            .await?;

        Ok(rows.into_iter().next().map(|row| row.name))
    }

    async fn insert_group(&self, group: NewGroup) -> RemoteResult<Vec<Group>> {
        let rows: Vec<GroupRow> = self
            .send(
                self.http
                    .post(self.table(GROUPS))
                    .header("Prefer", "return=representation")
                    .json(&[GroupInsert::from(group)]),
            )
            .await?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn select_expenses(&self, group_id: i64) -> RemoteResult<Vec<Expense>> {
        let rows: Vec<ExpenseRow> = self
            .send(self.http.get(self.table(EXPENSES)).query(&[
                ("select", "id,name,amount,group_id"),
                ("group_id", &format!("eq.{group_id}")),
            ]))
            .await?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn insert_expense(&self, expense: NewExpense) -> RemoteResult<Vec<Expense>> {
        let rows: Vec<ExpenseRow> = self
            .send(
                self.http
                    .post(self.table(EXPENSES))
                    .header("Prefer", "return=representation")
                    .json(&[ExpenseInsert::from(expense)]),
            )
            .await?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn sign_up(&self, registration: Registration) -> RemoteResult<Value> {
        self.send(
            self.http
                .post(self.auth("signup"))
                .json(&SignUpBody::from(registration)),
        )
        .await
    }

    async fn sign_in_with_password(&self, credentials: Credentials) -> RemoteResult<Value> {
        self.send(
            self.http
                .post(self.auth("token"))
                .query(&[("grant_type", "password")])
                .json(&PasswordGrantBody::from(credentials)),
        )
        .await
    }
}

#[cfg(test)]
pub mod mock {
    use std::time::Duration;

    use serde_json::json;
    use tokio::sync::Mutex;

    use super::*;

    /// In-memory stand-in for the hosted platform. Rows live in plain
    /// vectors, ids are handed out sequentially, and tests can inject a
    /// failure or a response delay through the public fields.
    #[derive(Default)]
    pub struct RemoteServiceMock {
        pub groups: Mutex<Vec<Group>>,
        pub expenses: Mutex<Vec<Expense>>,
        /// Registered accounts as (email, password) pairs.
        pub accounts: Mutex<Vec<(String, String)>>,
        pub next_id: Mutex<i64>,
        /// When set, every subsequent call fails with a clone of this error.
        pub fail_with: Mutex<Option<RemoteError>>,
        /// Consumed by the next call, which computes its answer immediately
        /// but sleeps before delivering it. Lets tests overlap an old
        /// in-flight response with a newer, faster one.
        pub delay: Mutex<Option<Duration>>,
        pub calls: Mutex<usize>,
    }

    impl RemoteServiceMock {
        pub async fn seed_group(&self, id: i64, name: &str) {
            self.groups.lock().await.push(Group {
                id,
                name: name.to_string(),
            });
        }

        pub async fn seed_expense(&self, id: i64, name: &str, amount: f64, group_id: i64) {
            self.expenses.lock().await.push(Expense {
                id,
                name: name.to_string(),
                amount,
                group_id,
            });
        }

        pub async fn seed_account(&self, email: &str, password: &str) {
            self.accounts
                .lock()
                .await
                .push((email.to_string(), password.to_string()));
        }

        pub async fn call_count(&self) -> usize {
            *self.calls.lock().await
        }

        async fn begin(&self) -> RemoteResult<()> {
            *self.calls.lock().await += 1;

            match self.fail_with.lock().await.clone() {
                Some(error) => Err(error),
                None => Ok(()),
            }
        }

        async fn deliver<T>(&self, response: T) -> RemoteResult<T> {
            let delay = self.delay.lock().await.take();
            if let Some(delay) = delay {
                tokio::time::sleep(delay).await;
            }

            Ok(response)
        }

        async fn assign_id(&self) -> i64 {
            let mut next_id = self.next_id.lock().await;
            *next_id += 1;
            *next_id
        }
    }

    #[async_trait]
    impl RemoteDataService for RemoteServiceMock {
        async fn select_groups(&self) -> RemoteResult<Vec<Group>> {
            self.begin().await?;

            let rows = self.groups.lock().await.clone();
            self.deliver(rows).await
        }

        async fn find_group_name(&self, group_id: i64) -> RemoteResult<Option<String>> {
            self.begin().await?;

            let name = self
                .groups
                .lock()
                .await
                .iter()
                .find(|group| group.id == group_id)
                .map(|group| group.name.clone());
            self.deliver(name).await
        }

        async fn insert_group(&self, group: NewGroup) -> RemoteResult<Vec<Group>> {
            self.begin().await?;

            let created = Group {
                id: self.assign_id().await,
                name: group.name,
            };

            self.groups.lock().await.push(created.clone());

            self.deliver(vec![created]).await
        }

        async fn select_expenses(&self, group_id: i64) -> RemoteResult<Vec<Expense>> {
            self.begin().await?;

            let rows = self
                .expenses
                .lock()
                .await
                .iter()
                .filter(|expense| expense.group_id == group_id)
                .cloned()
                .collect();
            self.deliver(rows).await
        }

        async fn insert_expense(&self, expense: NewExpense) -> RemoteResult<Vec<Expense>> {
            self.begin().await?;

            let created = Expense {
                id: self.assign_id().await,
                name: expense.name,
                amount: expense.amount,
                group_id: expense.group_id,
            };

            self.expenses.lock().await.push(created.clone());

            self.deliver(vec![created]).await
        }

        async fn sign_up(&self, registration: Registration) -> RemoteResult<Value> {
            self.begin().await?;

            let mut accounts = self.accounts.lock().await;

            if accounts.iter().any(|(email, _)| *email == registration.email) {
                return Err(RemoteError::Rejected("User already registered".to_string()));
            }

            accounts.push((registration.email.clone(), registration.password));

            Ok(json!({
                "id": format!("user-{}", accounts.len()),
                "email": registration.email,
                "user_metadata": { "name": registration.name },
            }))
        }

        async fn sign_in_with_password(&self, credentials: Credentials) -> RemoteResult<Value> {
            self.begin().await?;

            let accounts = self.accounts.lock().await;

            let known = accounts
                .iter()
                .any(|(email, password)| *email == credentials.email && *password == credentials.password);

            if !known {
                return Err(RemoteError::Rejected(
                    "Invalid login credentials".to_string(),
                ));
            }

            Ok(json!({
                "access_token": "mock-access-token",
                "token_type": "bearer",
                "expires_in": 3600,
                "user": { "email": credentials.email },
            }))
        }
    }
}
