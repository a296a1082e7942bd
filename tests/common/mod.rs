#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use axum::{
    extract::State,
    http::{header::AUTHORIZATION, HeaderMap, StatusCode},
    routing::post,
    Json, Router,
};
use fyrre::config::Settings;
use fyrre::content::TokenSource;
use fyrre::pages::Pages;
use serde_json::{json, Value};
use url::Url;

pub const TEST_TOKEN: &str = "test-token";
pub const SITE_URL: &str = "https://fyrre.example";

type Responder = Arc<dyn Fn(&Value) -> (StatusCode, Value) + Send + Sync>;

/// A request the mock backend received.
#[derive(Debug, Clone)]
pub struct Recorded {
    pub authorization: Option<String>,
    pub body: Value,
}

#[derive(Clone)]
struct MockState {
    respond: Responder,
    requests: Arc<Mutex<Vec<Recorded>>>,
}

/// A content backend on a random local port answering with `respond`.
pub struct MockBackend {
    pub url: Url,
    requests: Arc<Mutex<Vec<Recorded>>>,
}

impl MockBackend {
    pub async fn start<F>(respond: F) -> Self
    where
        F: Fn(&Value) -> (StatusCode, Value) + Send + Sync + 'static,
    {
        let state = MockState {
            respond: Arc::new(respond),
            requests: Arc::new(Mutex::new(Vec::new())),
        };
        let requests = state.requests.clone();
        let app = Router::new()
            .route("/graphql", post(handle))
            .with_state(state);

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind mock backend");
        let addr = listener.local_addr().expect("Mock backend has no address");
        tokio::spawn(async move {
            axum::serve(listener, app).await.expect("Mock backend failed");
        });

        Self {
            url: Url::parse(&format!("http://{}/graphql", addr)).unwrap(),
            requests,
        }
    }

    /// Answer every operation with `{"data": data}`, picking by operation name.
    pub async fn with_data(routes: Vec<(&'static str, Value)>) -> Self {
        Self::start(move |body| {
            for (operation, data) in &routes {
                if is_operation(body, operation) {
                    return (StatusCode::OK, json!({ "data": data }));
                }
            }
            (
                StatusCode::OK,
                json!({ "errors": [{ "message": "unexpected operation in test" }] }),
            )
        })
        .await
    }

    pub fn requests(&self) -> Vec<Recorded> {
        self.requests.lock().unwrap().clone()
    }

    /// The host the normalizer resolves root-relative media against.
    pub fn origin(&self) -> String {
        format!(
            "http://{}:{}",
            self.url.host_str().unwrap(),
            self.url.port().unwrap()
        )
    }

    pub fn settings(&self) -> Settings {
        Settings::new(
            self.url.clone(),
            TokenSource::Static(TEST_TOKEN.to_string()),
            Url::parse(SITE_URL).unwrap(),
        )
    }

    pub fn pages(&self) -> Pages {
        let settings = self.settings();
        Pages::new(settings.content_service(), settings.allow_list())
    }
}

async fn handle(
    State(state): State<MockState>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> (StatusCode, Json<Value>) {
    let authorization = headers
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    state.requests.lock().unwrap().push(Recorded {
        authorization,
        body: body.clone(),
    });
    let (status, value) = (state.respond)(&body);
    (status, Json(value))
}

/// Operation names are not sent; the query text starts with `query <Name>`.
pub fn is_operation(body: &Value, name: &str) -> bool {
    body["query"]
        .as_str()
        .is_some_and(|q| q.contains(&format!("query {}", name)))
}

// ============================================================
// Fixtures
// ============================================================

pub fn post_node(id: &str, title: &str) -> Value {
    json!({
        "id": id,
        "title": title,
        "slug": title.to_lowercase().replace(' ', "-"),
        "date": "2024-03-01T09:30:00",
        "excerpt": format!("<p>{} teaser [&hellip;]&#46;&#46;&#46;</p>", title),
        "featuredImage": { "node": {
            "sourceUrl": format!("/wp-content/uploads/2024/03/{}.jpg", id),
            "altText": ""
        }},
        "tags": { "nodes": [{ "id": "tag-1", "name": "Art" }] },
        "author": { "node": { "id": "user-1", "name": "Jakob Grønberg", "slug": "jakob" } }
    })
}

pub fn posts(count: usize) -> Value {
    let nodes: Vec<Value> = (1..=count)
        .map(|i| post_node(&format!("post-{}", i), &format!("Story {}", i)))
        .collect();
    json!({ "nodes": nodes })
}

pub fn site_layout() -> Value {
    json!({
        "categories": { "nodes": [
            { "id": "cat-art", "name": "Art", "slug": "art", "children": { "nodes": [
                { "id": "cat-sculpture", "name": "Sculpture", "slug": "sculpture" }
            ]}},
            { "id": "cat-life", "name": "Life", "slug": "life", "children": { "nodes": [] } }
        ]},
        "generalSettings": { "title": "Fyrre Magazine", "description": "Art and life" }
    })
}
