use std::sync::Arc;

use crate::config::RemoteConfig;
use crate::domain::remote::RemoteDataService;
use crate::infrastructure::remote::RemoteClient;

/// Wiring for everything the app factory injects. The remote service handle
/// is the single shared capability; swapping it for a double is how tests
/// run without the hosted platform.
pub struct Container {
    pub remote: Arc<dyn RemoteDataService>,
}

impl Container {
    pub fn new(remote: Arc<dyn RemoteDataService>) -> Self {
        Container { remote }
    }

    pub fn from_config(config: &RemoteConfig) -> Self {
        Container::new(Arc::new(RemoteClient::new(config)))
    }
}
