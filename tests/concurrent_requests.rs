//! Concurrency test: many parallel clients against one route table.

use std::time::{Duration, Instant};

use serde_json::Value;

use item_service::config::AppProfile;

mod common;

#[tokio::test]
async fn test_parallel_clients_see_identical_responses() {
    let (addr, shutdown) = common::start_server(AppProfile::Standard).await;

    let concurrency = 16;
    let requests_per_task = 25;
    let total_requests = concurrency * requests_per_task;

    let client = reqwest::Client::new();
    let start = Instant::now();

    let mut tasks = Vec::new();
    for task_id in 0..concurrency {
        let client = client.clone();
        let base = format!("http://{}", addr);
        tasks.push(tokio::spawn(async move {
            let mut bodies = Vec::new();
            for i in 0..requests_per_task {
                let n = task_id * 1000 + i;
                let res = client
                    .get(format!("{}/items/{}?q=t{}", base, n, task_id))
                    .send()
                    .await
                    .unwrap();
                assert!(res.status().is_success());
                let body: Value = res.json().await.unwrap();
                bodies.push((n, task_id, body));
            }
            bodies
        }));
    }

    let mut seen = 0;
    for task in tasks {
        for (n, task_id, body) in task.await.unwrap() {
            assert_eq!(body["item_id"], n);
            assert_eq!(body["q"], format!("t{}", task_id));
            seen += 1;
        }
    }
    assert_eq!(seen, total_requests);
    assert!(start.elapsed() < Duration::from_secs(30));

    shutdown.trigger();
}
