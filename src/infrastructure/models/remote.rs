use serde::{Deserialize, Serialize};

use crate::domain::models::expense::{Expense, NewExpense};
use crate::domain::models::group::{Group, NewGroup};
use crate::domain::models::session::{Credentials, Registration};

#[derive(Debug, Deserialize)]
pub struct GroupRow {
    id: i64,
    name: String,
}

#[derive(Debug, Deserialize)]
pub struct GroupNameRow {
    pub name: String,
}

#[derive(Serialize)]
pub struct GroupInsert {
    name: String,
}

#[derive(Debug, Deserialize)]
pub struct ExpenseRow {
    id: i64,
    name: String,
    amount: f64,
    group_id: i64,
}

#[derive(Serialize)]
pub struct ExpenseInsert {
    name: String,
    amount: f64,
    group_id: i64,
}

/// Sign-up body for the auth endpoint; the display name travels inside the
/// provider's free-form user metadata object.
#[derive(Serialize)]
pub struct SignUpBody {
    email: String,
    password: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    data: Option<SignUpMetadata>,
}

#[derive(Serialize)]
pub struct SignUpMetadata {
    name: String,
}

#[derive(Serialize)]
pub struct PasswordGrantBody {
    email: String,
    password: String,
}

/// Error body of the hosted platform. The row API and the auth API disagree
/// on the field name, so all known spellings are tried in order.
#[derive(Debug, Deserialize)]
pub struct RemoteErrorBody {
    message: Option<String>,
    msg: Option<String>,
    error_description: Option<String>,
    error: Option<String>,
}

impl RemoteErrorBody {
    pub fn into_message(self) -> Option<String> {
        self.message
            .or(self.msg)
            .or(self.error_description)
            .or(self.error)
    }
}

impl From<GroupRow> for Group {
    fn from(row: GroupRow) -> Self {
        Group {
            id: row.id,
            name: row.name,
        }
    }
}

impl From<NewGroup> for GroupInsert {
    fn from(group: NewGroup) -> Self {
        GroupInsert { name: group.name }
    }
}

impl From<ExpenseRow> for Expense {
    fn from(row: ExpenseRow) -> Self {
        Expense {
            id: row.id,
            name: row.name,
            amount: row.amount,
            group_id: row.group_id,
        }
    }
}

impl From<NewExpense> for ExpenseInsert {
    fn from(expense: NewExpense) -> Self {
        ExpenseInsert {
            name: expense.name,
            amount: expense.amount,
            group_id: expense.group_id,
        }
    }
}

impl From<Registration> for SignUpBody {
    fn from(registration: Registration) -> Self {
        SignUpBody {
            email: registration.email,
            password: registration.password,
            data: registration.name.map(|name| SignUpMetadata { name }),
        }
    }
}

impl From<Credentials> for PasswordGrantBody {
    fn from(credentials: Credentials) -> Self {
        PasswordGrantBody {
            email: credentials.email,
            password: credentials.password,
        }
    }
}
