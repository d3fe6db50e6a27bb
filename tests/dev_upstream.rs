//! Development-mode upstream behavior.

mod common;

use ytify_shell::host::HostError;
use ytify_shell::EmbeddedHost;

#[tokio::test]
async fn forwards_requests_to_the_bundler() {
    let upstream = "127.0.0.1:27762".parse().unwrap();
    common::start_mock_bundler(upstream, "bundled module").await;

    let config = common::development_config(27761, "127.0.0.1:27762");
    let handle = EmbeddedHost::new(config).start().await.unwrap();
    let client = common::client();

    let res = client
        .get(format!("http://{}/src/main.ts", handle.addr()))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), 200);
    common::assert_security_headers(res.headers());
    assert_eq!(res.text().await.unwrap(), "bundled module");

    handle.stop().await;
}

#[tokio::test]
async fn upstream_loss_is_a_per_request_502() {
    let upstream = "127.0.0.1:27764".parse().unwrap();
    common::start_black_hole(upstream).await;

    let config = common::development_config(27763, "127.0.0.1:27764");
    let handle = EmbeddedHost::new(config).start().await.unwrap();
    let client = common::client();
    let base = format!("http://{}", handle.addr());

    let res = client.get(format!("{base}/anything")).send().await.unwrap();
    assert_eq!(res.status(), 502);
    common::assert_security_headers(res.headers());

    // The host itself is still alive and keeps answering.
    let res = client.get(format!("{base}/again")).send().await.unwrap();
    assert_eq!(res.status(), 502);

    handle.stop().await;
}

#[tokio::test]
async fn dead_bundler_fails_start() {
    let config = common::development_config(27765, "127.0.0.1:27766");
    let err = EmbeddedHost::new(config).start().await.unwrap_err();
    assert!(
        matches!(err, HostError::UpstreamInit(_)),
        "expected upstream init error, got {err}"
    );
}
