mod auth;

use std::sync::Arc;

use crate::container::Container;
use crate::infrastructure::remote::mock::RemoteServiceMock;

use serde::Deserialize;

use rstest::*;

/// Full app wired against the in-memory remote double. Tests keep a handle
/// on the mock to seed rows and inject failures.
pub struct TestContext {
    pub remote: Arc<RemoteServiceMock>,
    pub container: Arc<Container>,
}

#[fixture]
fn context() -> TestContext {
    let remote = Arc::new(RemoteServiceMock::default());
    let container = Arc::new(Container::new(remote.clone()));

    TestContext { remote, container }
}

#[derive(Debug, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
struct Error {
    error: String,
}
