use once_cell::sync::Lazy;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use serde_json::{json, Value};
use std::net::TcpListener;
use std::path::PathBuf;
use std::process::{Child, Command, Stdio};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::Mutex;
use tokio::time::sleep;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SessionView {
    phrase: Value,
    target: u32,
    count: u32,
    state: String,
}

#[derive(Debug, Deserialize)]
struct TapResponse {
    session: SessionView,
    recorded: Option<Value>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Statistics {
    total: u64,
    today: u64,
    total_sessions: usize,
}

struct TestServer {
    base_url: String,
    data_dir: PathBuf,
    child: Child,
}

impl Drop for TestServer {
    fn drop(&mut self) {
        let _ = self.child.kill();
        let _ = self.child.wait();
        let _ = std::fs::remove_dir_all(&self.data_dir);
    }
}

static TEST_LOCK: Lazy<Mutex<()>> = Lazy::new(|| Mutex::new(()));
static SERVER: Lazy<Mutex<Option<Arc<TestServer>>>> = Lazy::new(|| Mutex::new(None));

#[cfg(unix)]
mod cleanup {
    use std::path::PathBuf;
    use std::sync::atomic::{AtomicI32, Ordering};
    use std::sync::{Once, OnceLock};

    static REGISTER: Once = Once::new();
    static PID: AtomicI32 = AtomicI32::new(0);
    static DATA_DIR: OnceLock<PathBuf> = OnceLock::new();

    pub fn register(pid: u32, data_dir: PathBuf) {
        REGISTER.call_once(|| {
            PID.store(pid as i32, Ordering::SeqCst);
            let _ = DATA_DIR.set(data_dir);
            unsafe {
                libc::atexit(on_exit);
            }
        });
    }

    extern "C" fn on_exit() {
        let pid = PID.load(Ordering::SeqCst);
        if pid > 0 {
            unsafe {
                libc::kill(pid, libc::SIGTERM);
            }
        }
        if let Some(dir) = DATA_DIR.get() {
            let _ = std::fs::remove_dir_all(dir);
        }
    }
}

fn pick_free_port() -> u16 {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind random port");
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    port
}

fn unique_data_dir() -> PathBuf {
    let nanos = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    let mut path = std::env::temp_dir();
    path.push(format!("qalbify_http_{}_{}", std::process::id(), nanos));
    path
}

async fn wait_until_ready(base_url: &str) {
    let client = Client::new();
    let deadline = Instant::now() + Duration::from_secs(3);
    loop {
        if let Ok(resp) = client.get(format!("{base_url}/api/session")).send().await {
            if resp.status().is_success() {
                return;
            }
        }
        if Instant::now() > deadline {
            panic!("server did not become ready");
        }
        sleep(Duration::from_millis(100)).await;
    }
}

async fn spawn_server() -> TestServer {
    let port = pick_free_port();
    let data_dir = unique_data_dir();
    let child = Command::new(env!("CARGO_BIN_EXE_qalbify"))
        .env("PORT", port.to_string())
        .env("APP_DATA_DIR", &data_dir)
        .env("RUST_LOG", "info")
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .spawn()
        .expect("failed to spawn server");

    let base_url = format!("http://127.0.0.1:{port}");
    let server = TestServer {
        base_url,
        data_dir,
        child,
    };
    wait_until_ready(&server.base_url).await;
    server
}

async fn shared_server() -> Arc<TestServer> {
    let mut guard = SERVER.lock().await;
    if let Some(server) = guard.as_ref() {
        return Arc::clone(server);
    }
    let server = Arc::new(spawn_server().await);
    #[cfg(unix)]
    cleanup::register(server.child.id(), server.data_dir.clone());
    *guard = Some(Arc::clone(&server));
    server
}

async fn post_json(client: &Client, url: String, body: Value) -> reqwest::Response {
    client.post(url).json(&body).send().await.unwrap()
}

async fn stats(client: &Client, base_url: &str) -> Statistics {
    client
        .get(format!("{base_url}/api/stats"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap()
}

#[tokio::test]
async fn http_tap_to_target_records_history_once() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();
    let base = &server.base_url;

    let response = post_json(&client, format!("{base}/api/session/target"), json!({ "target": 2 })).await;
    assert!(response.status().is_success());
    let before = stats(&client, base).await;

    let first: TapResponse = client
        .post(format!("{base}/api/session/increment"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(first.session.count, 1);
    assert_eq!(first.session.state, "counting");
    assert!(first.recorded.is_none());

    let second: TapResponse = client
        .post(format!("{base}/api/session/increment"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(second.session.count, 2);
    assert_eq!(second.session.state, "completed");
    let recorded = second.recorded.expect("completion should be recorded");
    assert_eq!(recorded["count"], 2);
    assert_eq!(recorded["target"], 2);
    assert_eq!(recorded["phraseName"], second.session.phrase["name"]);

    let third: TapResponse = client
        .post(format!("{base}/api/session/increment"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(third.session.count, 2);
    assert!(third.recorded.is_none());

    let after = stats(&client, base).await;
    assert_eq!(after.total, before.total + 2);
    assert_eq!(after.today, before.today + 2);
    assert_eq!(after.total_sessions, before.total_sessions + 1);

    let history: Value = client
        .get(format!("{base}/api/history"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(history["entries"][0]["id"], recorded["id"]);
}

#[tokio::test]
async fn http_rejects_invalid_input() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();
    let base = &server.base_url;

    for target in [0, -5, 10_001] {
        let response =
            post_json(&client, format!("{base}/api/session/target"), json!({ "target": target })).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    let response =
        post_json(&client, format!("{base}/api/session/target"), json!({ "target": 10_000 })).await;
    let session: SessionView = response.json().await.unwrap();
    assert_eq!(session.target, 10_000);
    assert_eq!(session.count, 0);
    assert_eq!(session.state, "idle");

    let response = post_json(
        &client,
        format!("{base}/api/phrases"),
        json!({ "name": "  ", "script": "ت" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = post_json(
        &client,
        format!("{base}/api/session/phrase"),
        json!({ "phraseId": "no-such-phrase" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn http_custom_phrase_lifecycle() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();
    let base = &server.base_url;

    let response = post_json(
        &client,
        format!("{base}/api/phrases"),
        json!({ "name": "Test", "script": "ت", "defaultTarget": 7 }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let phrase: Value = response.json().await.unwrap();
    assert_eq!(phrase["gloss"], "Test");
    let id = phrase["id"].as_str().unwrap().to_string();

    let packs: Value = client
        .get(format!("{base}/api/packs"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(packs[3]["id"], "custom");
    assert!(packs[3]["items"]
        .as_array()
        .unwrap()
        .iter()
        .any(|item| item["id"] == id.as_str()));

    let session: SessionView = post_json(
        &client,
        format!("{base}/api/session/phrase"),
        json!({ "phraseId": &id }),
    )
    .await
    .json()
    .await
    .unwrap();
    assert_eq!(session.phrase["name"], "Test");
    assert_eq!(session.target, 7);

    let response = client
        .patch(format!("{base}/api/phrases/{id}"))
        .json(&json!({ "gloss": "A test phrase" }))
        .send()
        .await
        .unwrap();
    let updated: Value = response.json().await.unwrap();
    assert_eq!(updated["gloss"], "A test phrase");
    assert_eq!(updated["name"], "Test");

    for _ in 0..2 {
        let response = client
            .delete(format!("{base}/api/phrases/{id}"))
            .send()
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NO_CONTENT);
    }

    let response = client
        .patch(format!("{base}/api/phrases/{id}"))
        .json(&json!({ "name": "Gone" }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn http_clear_history_is_idempotent() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();
    let base = &server.base_url;

    post_json(&client, format!("{base}/api/session/target"), json!({ "target": 1 })).await;
    client
        .post(format!("{base}/api/session/increment"))
        .send()
        .await
        .unwrap();

    for _ in 0..2 {
        let response = client
            .delete(format!("{base}/api/history"))
            .send()
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NO_CONTENT);

        let history: Value = client
            .get(format!("{base}/api/history"))
            .send()
            .await
            .unwrap()
            .json()
            .await
            .unwrap();
        assert!(history["entries"].as_array().unwrap().is_empty());
    }

    let after = stats(&client, base).await;
    assert_eq!(after.total_sessions, 0);
    assert_eq!(after.total, 0);
}

#[tokio::test]
async fn http_dropped_server_removes_its_data_dir() {
    let server = spawn_server().await;
    let client = Client::new();

    post_json(&client, format!("{}/api/session/target", server.base_url), json!({ "target": 1 })).await;
    client
        .post(format!("{}/api/session/increment", server.base_url))
        .send()
        .await
        .unwrap();

    let data_dir = server.data_dir.clone();
    assert!(data_dir.join("history.json").exists());

    drop(server);
    assert!(!data_dir.exists());
}
