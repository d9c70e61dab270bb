use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

use crate::domain::models::expense::{Expense, NewExpense};
use crate::domain::models::group::{Group, NewGroup};
use crate::domain::models::session::{Credentials, Registration};

pub type RemoteResult<T> = Result<T, RemoteError>;

/// Failure modes of the hosted platform, split the way callers need to react
/// to them: an explicit rejection carries the service's own message and maps
/// to a client error, everything else is opaque.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RemoteError {
    /// The service handled the request and refused it (duplicate account,
    /// invalid credentials, constraint violation).
    #[error("{0}")]
    Rejected(String),
    /// The request never got a service-level answer: connection failure,
    /// undecodable response, unexpected status with no error body.
    #[error("remote service failure: {0}")]
    Transport(String),
}

/// The capability surface of the remote data platform: row reads and inserts
/// on the `groups` and `expenses` tables plus the two auth calls. The
/// platform owns durability, uniqueness and session handling; everything
/// here is a pass-through. Injected so tests can substitute a double.
#[async_trait]
pub trait RemoteDataService: Send + Sync {
    async fn select_groups(&self) -> RemoteResult<Vec<Group>>;

    /// Name of a single group, `None` when the row does not exist.
    async fn find_group_name(&self, group_id: i64) -> RemoteResult<Option<String>>;

    /// Inserts a group and returns the created rows with server-assigned ids.
    async fn insert_group(&self, group: NewGroup) -> RemoteResult<Vec<Group>>;

    async fn select_expenses(&self, group_id: i64) -> RemoteResult<Vec<Expense>>;

    async fn insert_expense(&self, expense: NewExpense) -> RemoteResult<Vec<Expense>>;

    /// Creates an account. The returned payload is owned by the remote auth
    /// provider and forwarded opaquely.
    async fn sign_up(&self, registration: Registration) -> RemoteResult<Value>;

    /// Password grant. On success the provider establishes a session and
    /// returns its payload.
    async fn sign_in_with_password(&self, credentials: Credentials) -> RemoteResult<Value>;
}
