use mockito::{Server, ServerGuard};

/// Mock API server for a single test.
///
/// Point the transport under test at [`TestSetup::url`]; every request it makes must match a
/// mock registered through the `create_*_endpoint` helpers or the server answers 501.
pub struct TestSetup {
    pub server: ServerGuard,
}

impl TestSetup {
    pub async fn new() -> Self {
        Self {
            server: Server::new_async().await,
        }
    }

    /// Base URL of the mock server, without trailing slash.
    pub fn url(&self) -> String {
        self.server.url()
    }
}
