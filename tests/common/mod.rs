use std::net::SocketAddr;
use std::sync::Arc;

use reqwest::{Client, StatusCode};
use serde_json::{Value, json};

use folio::config::Config;
use folio::models::{Project, ProjectDocument};
use folio::store::memory::MemoryStore;

/// A running test server backed by an in-memory content store.
pub struct TestApp {
    pub addr: SocketAddr,
    pub client: Client,
    pub store: Arc<MemoryStore>,
}

impl TestApp {
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    /// GET, returning (body, status).
    pub async fn get(&self, path: &str) -> (Value, StatusCode) {
        let resp = self
            .client
            .get(self.url(path))
            .send()
            .await
            .expect("get request failed");
        let status = resp.status();
        let body: Value = resp.json().await.unwrap_or(json!(null));
        (body, status)
    }

    /// POST a JSON body, returning (body, status).
    pub async fn post_json(&self, path: &str, body: &Value) -> (Value, StatusCode) {
        let resp = self
            .client
            .post(self.url(path))
            .json(body)
            .send()
            .await
            .expect("post request failed");
        let status = resp.status();
        let body: Value = resp.json().await.unwrap_or(json!(null));
        (body, status)
    }
}

pub fn sample_project(id: i64, title: &str) -> Project {
    Project {
        id,
        title: title.to_string(),
        description: String::new(),
        image: String::new(),
        demo_url: String::new(),
        github_url: String::new(),
        tags: vec![],
        featured: false,
        created_at: "2024-01-01".to_string(),
    }
}

pub fn seed_document(projects: Vec<Project>) -> ProjectDocument {
    let total = projects.len();
    ProjectDocument {
        projects,
        total,
        last_updated: "2024-01-01".to_string(),
    }
}

fn test_config(with_token: bool) -> Config {
    Config {
        host: "127.0.0.1".parse().unwrap(),
        port: 0, // unused, we bind to a random port
        repo: "tester/portfolio".to_string(),
        branch: "main".to_string(),
        db_path: "database/projects.json".to_string(),
        github_token: with_token.then(|| "test-token".to_string()),
        static_dir: "static".to_string(),
        log_level: "warn".to_string(),
    }
}

async fn spawn_with(document: ProjectDocument, with_token: bool) -> TestApp {
    let store = Arc::new(MemoryStore::new(document));
    let app = folio::build_app(store.clone(), test_config(with_token));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind to random port");
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("Server failed");
    });

    let client = Client::new();

    TestApp {
        addr,
        client,
        store,
    }
}

/// Spawn a test app with a write credential configured.
pub async fn spawn_app(document: ProjectDocument) -> TestApp {
    spawn_with(document, true).await
}

/// Spawn a test app with no write credential, as deployed read-only.
pub async fn spawn_app_without_token(document: ProjectDocument) -> TestApp {
    spawn_with(document, false).await
}
