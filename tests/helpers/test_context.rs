//! Test context for unified test setup
//!
//! Starts a mock backend and wires every service against it with in-memory
//! session storage and a recording notifier.

use std::sync::Arc;

use college_portal::config::Settings;
use college_portal::models::AdminInfo;
use college_portal::services::{RecordingNotifier, ServiceFactory};
use college_portal::state::{MemoryStorage, SessionStorage, ADMIN_INFO_KEY, ADMIN_TOKEN_KEY};

use super::backend_mock::BackendMockServer;
use super::test_data::ADMIN_TOKEN;

pub struct TestContext {
    pub backend: BackendMockServer,
    pub settings: Settings,
    pub storage: Arc<MemoryStorage>,
    pub notifier: Arc<RecordingNotifier>,
    pub services: ServiceFactory,
}

impl TestContext {
    pub async fn new() -> Self {
        // Initialize logging once
        let _ = tracing_subscriber::fmt().with_test_writer().try_init();

        let backend = BackendMockServer::new().await;
        let mut settings = Settings::default();
        settings.api.base_url = backend.uri();

        let storage = Arc::new(MemoryStorage::new());
        let notifier = Arc::new(RecordingNotifier::new());
        let services = ServiceFactory::new(&settings, storage.clone(), notifier.clone())
            .expect("Failed to create services");

        Self { backend, settings, storage, notifier, services }
    }

    /// Context whose storage already holds an admin session
    pub async fn with_stored_session() -> Self {
        let ctx = Self::new().await;
        ctx.store_session(ADMIN_TOKEN);
        ctx
    }

    pub fn store_session(&self, token: &str) {
        let info = AdminInfo { username: "admin".into(), role: "super_admin".into() };
        self.storage.set_item(ADMIN_TOKEN_KEY, token).unwrap();
        self.storage
            .set_item(ADMIN_INFO_KEY, &serde_json::to_string(&info).unwrap())
            .unwrap();
    }

    /// Stored session restored and verified against the mock backend
    pub async fn authenticated() -> Self {
        let ctx = Self::with_stored_session().await;
        ctx.backend.mock_verify_token(ADMIN_TOKEN, true).await;
        let state = ctx.services.session.restore().await;
        assert!(state.is_authenticated(), "session should restore, got {state:?}");
        ctx.notifier.clear();
        ctx
    }
}
