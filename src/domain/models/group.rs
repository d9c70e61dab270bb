/// A named collection expenses belong to. The identifier is assigned by the
/// remote platform on insert.
#[derive(Debug, Clone, PartialEq)]
pub struct Group {
    pub id: i64,
    pub name: String,
}

#[derive(Debug, Clone)]
pub struct NewGroup {
    pub name: String,
}
