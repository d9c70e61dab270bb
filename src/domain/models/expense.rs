/// A single expense row. `group_id` references a [`Group`] and is enforced
/// by the remote platform only.
///
/// [`Group`]: super::group::Group
#[derive(Debug, Clone, PartialEq)]
pub struct Expense {
    pub id: i64,
    pub name: String,
    pub amount: f64,
    pub group_id: i64,
}

#[derive(Debug, Clone)]
pub struct NewExpense {
    pub name: String,
    pub amount: f64,
    pub group_id: i64,
}
