#![allow(dead_code)]

use axum::http::StatusCode;
use axum::routing::get;
use axum::Router;
use std::net::SocketAddr;
use std::time::Duration;
use tokio::net::TcpListener;

pub const SIDECAR_PATH: &str = "/v1/listeners/x/sidecar~10.0.16.4~x~x";

/// Serves a fixed status and body on the sidecar listeners path and returns
/// the bound address.
pub async fn spawn_pilot(status: StatusCode, body: &'static str) -> SocketAddr {
    let app = Router::new().route(SIDECAR_PATH, get(move || async move { (status, body) }));

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    addr
}

/// Answers the listeners path only after `delay`.
pub async fn spawn_slow_pilot(delay: Duration) -> SocketAddr {
    let app = Router::new().route(
        SIDECAR_PATH,
        get(move || async move {
            tokio::time::sleep(delay).await;
            (StatusCode::OK, LISTENERS_BODY)
        }),
    );

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    addr
}

/// An address nothing is listening on.
pub async fn unused_addr() -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    listener.local_addr().unwrap()
}

pub const LISTENERS_BODY: &str = r#"{
  "Listeners": [
    {
      "Name": "tcp_127.128.0.4_80",
      "Address": "tcp://127.128.0.4:80",
      "Filters": [{
        "Config": {
          "route_config": {
            "routes": [{
              "cluster": "out.httpbin.default.istio.local|http",
              "destination_ip_list": ["127.128.0.4/32"]
            }]
          }
        }
      }]
    },
    {
      "Name": "virtual",
      "Address": "tcp://0.0.0.0:15001",
      "Filters": []
    }
  ]
}"#;
