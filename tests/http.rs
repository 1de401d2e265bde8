use once_cell::sync::Lazy;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use std::net::TcpListener;
use std::process::{Child, Command, Stdio};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::Mutex;
use tokio::time::sleep;

#[derive(Debug, Deserialize, PartialEq)]
struct Summary {
    days_completed: usize,
    long_run_done: bool,
    strength_days: usize,
    run_days: usize,
}

#[derive(Debug, Deserialize)]
struct RewardView {
    id: String,
}

#[derive(Debug, Deserialize, PartialEq)]
struct Blocks {
    total: usize,
    done: usize,
}

#[derive(Debug, Deserialize)]
struct DayProgress {
    id: String,
    done: usize,
    total: usize,
}

#[derive(Debug, Deserialize)]
struct ProgressResponse {
    summary: Summary,
    rewards: Vec<RewardView>,
    blocks: Blocks,
    days: Vec<DayProgress>,
}

#[derive(Debug, Deserialize)]
struct ThemeResponse {
    mode: String,
}

struct TestServer {
    base_url: String,
    child: Child,
}

impl Drop for TestServer {
    fn drop(&mut self) {
        let _ = self.child.kill();
        let _ = self.child.wait();
    }
}

const READY_TIMEOUT: Duration = Duration::from_secs(3);

static TEST_LOCK: Lazy<Mutex<()>> = Lazy::new(|| Mutex::new(()));
static SERVER: Lazy<Mutex<Option<Arc<TestServer>>>> = Lazy::new(|| Mutex::new(None));

#[cfg(unix)]
mod cleanup {
    use std::sync::atomic::{AtomicI32, Ordering};
    use std::sync::Once;

    static REGISTER: Once = Once::new();
    static PID: AtomicI32 = AtomicI32::new(0);

    pub fn register(pid: u32) {
        REGISTER.call_once(|| {
            PID.store(pid as i32, Ordering::SeqCst);
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
    }
}

fn pick_free_port() -> u16 {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind random port");
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    port
}

fn unique_data_path() -> String {
    let nanos = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    let mut path = std::env::temp_dir();
    path.push(format!("training_week_http_{}_{}.json", std::process::id(), nanos));
    path.to_string_lossy().to_string()
}

async fn wait_until_ready(base_url: &str) {
    let client = Client::new();
    let deadline = Instant::now() + READY_TIMEOUT;
    loop {
        if let Ok(resp) = client.get(format!("{base_url}/api/progress")).send().await {
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
    let plan_path = concat!(env!("CARGO_MANIFEST_DIR"), "/data/training-plan.json");
    let child = Command::new(env!("CARGO_BIN_EXE_training_week"))
        .env("PORT", port.to_string())
        .env("APP_DATA_PATH", unique_data_path())
        .env("PLAN_PATH", plan_path)
        .env("RUST_LOG", "info")
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .spawn()
        .expect("failed to spawn server");

    #[cfg(unix)]
    cleanup::register(child.id());

    let base_url = format!("http://127.0.0.1:{port}");
    wait_until_ready(&base_url).await;

    TestServer { base_url, child }
}

async fn shared_server() -> Arc<TestServer> {
    let mut guard = SERVER.lock().await;
    if let Some(server) = guard.as_ref() {
        return Arc::clone(server);
    }
    let server = Arc::new(spawn_server().await);
    *guard = Some(Arc::clone(&server));
    server
}

async fn post_json(client: &Client, url: String, body: serde_json::Value) -> ProgressResponse {
    let response = client.post(url).json(&body).send().await.unwrap();
    assert!(response.status().is_success());
    response.json().await.unwrap()
}

async fn new_week(client: &Client, base_url: &str) -> ProgressResponse {
    let response = client
        .post(format!("{base_url}/api/week/reset"))
        .send()
        .await
        .unwrap();
    assert!(response.status().is_success());
    response.json().await.unwrap()
}

async fn complete_day(client: &Client, base_url: &str, day_id: &str, tasks: usize) -> ProgressResponse {
    let mut last = None;
    for index in 0..tasks {
        last = Some(
            post_json(
                client,
                format!("{base_url}/api/toggle"),
                serde_json::json!({ "day_id": day_id, "index": index, "value": true }),
            )
            .await,
        );
    }
    last.expect("day has tasks")
}

#[tokio::test]
async fn http_toggle_updates_progress() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let fresh = new_week(&client, &server.base_url).await;
    assert_eq!(fresh.summary.days_completed, 0);
    assert_eq!(fresh.summary.strength_days, 3);
    assert_eq!(fresh.summary.run_days, 3);
    assert_eq!(fresh.blocks.done, 0);
    let ids: Vec<_> = fresh.rewards.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, ["balanced-week"]);

    let progress = post_json(
        &client,
        format!("{}/api/toggle", server.base_url),
        serde_json::json!({ "day_id": "tue", "index": 1, "value": true }),
    )
    .await;
    assert_eq!(progress.blocks.done, 1);
    let tue = progress.days.iter().find(|day| day.id == "tue").unwrap();
    assert_eq!((tue.done, tue.total), (1, 3));
    assert_eq!(progress.summary.days_completed, 0);

    let state: serde_json::Value = client
        .get(format!("{}/api/state", server.base_url))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(state["tue"]["completed"], serde_json::json!([null, true]));
}

#[tokio::test]
async fn http_long_run_and_three_days() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    new_week(&client, &server.base_url).await;
    complete_day(&client, &server.base_url, "mon", 4).await;
    complete_day(&client, &server.base_url, "fri", 1).await;
    let progress = complete_day(&client, &server.base_url, "sat", 4).await;

    assert_eq!(progress.summary.days_completed, 3);
    assert!(progress.summary.long_run_done);
    let ids: Vec<_> = progress.rewards.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, ["three-days", "long-run", "balanced-week"]);

    let response = client
        .post(format!("{}/api/days/sat/reset", server.base_url))
        .send()
        .await
        .unwrap();
    assert!(response.status().is_success());
    let progress: ProgressResponse = response.json().await.unwrap();
    assert_eq!(progress.summary.days_completed, 2);
    assert!(!progress.summary.long_run_done);
    assert_eq!(progress.blocks.total, 22);
}

#[tokio::test]
async fn http_rejects_out_of_range_index() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();
    let toggle_url = format!("{}/api/toggle", server.base_url);

    let response = client
        .post(&toggle_url)
        .json(&serde_json::json!({ "day_id": "fri", "index": 1, "value": true }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let before = new_week(&client, &server.base_url).await;

    let response = client
        .post(&toggle_url)
        .json(&serde_json::json!({ "day_id": "retired-day", "index": 32, "value": true }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let after = post_json(
        &client,
        toggle_url.clone(),
        serde_json::json!({ "day_id": "retired-day", "index": 31, "value": true }),
    )
    .await;
    assert_eq!(after.summary, before.summary);
    assert_eq!(after.blocks, before.blocks);

    let progress: ProgressResponse = client
        .get(format!("{}/api/progress", server.base_url))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(progress.summary, before.summary);
    assert_eq!(progress.blocks, before.blocks);
}

#[tokio::test]
async fn http_theme_toggles_back_and_forth() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let before: ThemeResponse = client
        .get(format!("{}/api/theme", server.base_url))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    let flipped: ThemeResponse = client
        .post(format!("{}/api/theme/toggle", server.base_url))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_ne!(flipped.mode, before.mode);

    let restored: ThemeResponse = client
        .post(format!("{}/api/theme/toggle", server.base_url))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(restored.mode, before.mode);
}

#[tokio::test]
async fn http_index_renders_week() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let response = client.get(format!("{}/", server.base_url)).send().await.unwrap();
    assert!(response.status().is_success());
    let body = response.text().await.unwrap();
    assert!(body.contains("week-carousel"));
    assert!(body.contains("Rodaje largo"));
}
