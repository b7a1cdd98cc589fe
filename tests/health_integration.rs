//! Integration tests for the liveness endpoint.

mod common;

#[tokio::test]
async fn test_healthz_reports_ok() {
    let (addr, shutdown) = common::spawn_service(common::test_config(0)).await;

    let client = reqwest::Client::builder().no_proxy().build().unwrap();
    let res = client
        .get(format!("http://{}/healthz", addr))
        .send()
        .await
        .expect("Service unreachable");

    assert_eq!(res.status(), 200);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["status"], "ok");
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));

    shutdown.trigger();
}

#[tokio::test]
async fn test_healthz_is_not_delayed() {
    // The artificial delay applies only to submissions.
    let (addr, shutdown) = common::spawn_service(common::test_config(2000)).await;

    let client = reqwest::Client::builder().no_proxy().build().unwrap();
    let started = std::time::Instant::now();
    let res = client
        .get(format!("http://{}/healthz", addr))
        .send()
        .await
        .expect("Service unreachable");

    assert_eq!(res.status(), 200);
    assert!(started.elapsed() < std::time::Duration::from_millis(1500));

    shutdown.trigger();
}
