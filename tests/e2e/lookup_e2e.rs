//! Pilot stand-in → refresh → lookup router, with real infrastructure.

use axum::{
    body::Body,
    http::{Request, StatusCode},
    routing::get,
    Router,
};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::net::TcpListener;
use tokio_util::sync::CancellationToken;
use tower::ServiceExt;
use vip_agent_api::{create_api_routes, AppState};
use vip_agent_application::ports::MappingStore;
use vip_agent_application::use_cases::{
    FetchMappingsUseCase, GetMappingsUseCase, LookupHostUseCase, RefreshMappingsUseCase,
};
use vip_agent_domain::{listeners_url, DomainError, MappingExtractor};
use vip_agent_infrastructure::pilot::PilotClient;
use vip_agent_infrastructure::store::SnapshotMappingStore;
use vip_agent_infrastructure::system::HostsFileSink;
use vip_agent_jobs::MappingRefreshJob;

const LOCAL_IP: &str = "10.0.16.4";

fn listener_json(name: &str, cluster: &str, destination: &str) -> Value {
    json!({
        "Name": name,
        "Address": "tcp://0.0.0.0:80",
        "Filters": [{
            "Config": {
                "route_config": {
                    "routes": [{
                        "cluster": cluster,
                        "destination_ip_list": [destination],
                        "destination_ports": "80"
                    }]
                }
            }
        }]
    })
}

/// Pilot stand-in whose listener body can be swapped between polls.
struct PilotStub {
    addr: SocketAddr,
    body: Arc<Mutex<String>>,
}

impl PilotStub {
    async fn spawn(listeners: Vec<Value>) -> Self {
        let body = Arc::new(Mutex::new(json!({ "Listeners": listeners }).to_string()));
        let served = body.clone();
        let path = format!("/v1/listeners/x/sidecar~{}~x~x", LOCAL_IP);
        let app = Router::new().route(
            &path,
            get(move || {
                let served = served.clone();
                async move { served.lock().unwrap().clone() }
            }),
        );

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self { addr, body }
    }

    fn set_listeners(&self, listeners: Vec<Value>) {
        *self.body.lock().unwrap() = json!({ "Listeners": listeners }).to_string();
    }

    fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }
}

struct Agent {
    store: Arc<SnapshotMappingStore>,
    refresh: Arc<RefreshMappingsUseCase>,
    router: Router,
}

fn build_agent(
    pilot: &PilotStub,
    cidr: &str,
    tld: &str,
    hosts_file: Option<&std::path::Path>,
) -> Agent {
    let store = Arc::new(SnapshotMappingStore::new());
    let client = PilotClient::new(
        listeners_url(&pilot.base_url(), LOCAL_IP),
        Duration::from_secs(2),
    )
    .unwrap();
    let extractor = MappingExtractor::new(cidr.parse().unwrap(), tld);
    let fetch = Arc::new(FetchMappingsUseCase::new(Arc::new(client), extractor));

    let mut refresh = RefreshMappingsUseCase::new(fetch, store.clone());
    if let Some(path) = hosts_file {
        refresh = refresh.with_sink(Arc::new(HostsFileSink::new(path)));
    }

    let router = create_api_routes(AppState {
        lookup_host: Arc::new(LookupHostUseCase::new(store.clone())),
        get_mappings: Arc::new(GetMappingsUseCase::new(store.clone())),
    });

    Agent {
        store,
        refresh: Arc::new(refresh),
        router,
    }
}

async fn lookup(router: &Router, uri: &str) -> (StatusCode, Value) {
    let response = router
        .clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&body).unwrap())
}

#[tokio::test]
async fn test_polled_mapping_is_served() {
    let pilot = PilotStub::spawn(vec![
        listener_json("inbound", "in.8080", "10.0.16.4/32"),
        listener_json(
            "egress",
            "out.svc-a.deploy.example.com|other",
            "10.0.0.5/32",
        ),
    ])
    .await;
    let agent = build_agent(&pilot, "10.0.0.0/24", "example.com", None);

    let count = agent.refresh.execute().await.unwrap();
    assert_eq!(count, 1);

    let (status, body) = lookup(
        &agent.router,
        "/?name=svc-a.deploy.example.com.&type=1",
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["Status"], 0);
    assert_eq!(
        body["Answer"],
        json!([{"name": "svc-a.deploy.example.com.", "type": 1, "TTL": 0, "data": "10.0.0.5"}])
    );

    let (status, body) = lookup(
        &agent.router,
        "/?name=svc-a.deploy.example.com.&type=28",
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["Status"], 0);
    assert_eq!(body["Answer"], json!([]));

    let (status, body) = lookup(&agent.router, "/?type=1").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["Status"], 2);
}

#[tokio::test]
async fn test_broken_listener_keeps_previous_snapshot() {
    let pilot = PilotStub::spawn(vec![listener_json(
        "egress",
        "out.svc-a.deploy.example.com|other",
        "10.0.0.5/32",
    )])
    .await;
    let agent = build_agent(&pilot, "10.0.0.0/24", "example.com", None);
    agent.refresh.execute().await.unwrap();

    pilot.set_listeners(vec![
        listener_json("fresh", "out.svc-b.deploy.example.com|other", "10.0.0.6/32"),
        listener_json("broken", "out.svc-c.deploy.example.org|other", "10.0.0.7/32"),
    ]);
    let result = agent.refresh.execute().await;

    assert!(matches!(result, Err(DomainError::Extraction(_))));
    assert!(agent.store.lookup("svc-a.deploy.example.com").is_some());
    assert_eq!(agent.store.lookup("svc-b.deploy.example.com"), None);
}

#[tokio::test]
async fn test_refresh_job_follows_pilot() {
    let pilot = PilotStub::spawn(vec![listener_json(
        "egress",
        "out.old.istio.local|http",
        "127.128.0.4/32",
    )])
    .await;
    let dir = tempfile::tempdir().unwrap();
    let hosts = dir.path().join("hosts");
    let agent = build_agent(&pilot, "127.128.0.0/9", "istio.local", Some(&hosts));
    let token = CancellationToken::new();

    let job = Arc::new(
        MappingRefreshJob::new(agent.refresh.clone(), Duration::from_millis(20))
            .with_cancellation(token.clone()),
    );
    let handle = job.start();

    tokio::time::sleep(Duration::from_millis(100)).await;
    assert!(agent.store.lookup("old.istio.local").is_some());

    pilot.set_listeners(vec![listener_json(
        "egress",
        "out.new.istio.local|http",
        "127.128.0.9/32",
    )]);
    tokio::time::sleep(Duration::from_millis(150)).await;

    token.cancel();
    let stopped = tokio::time::timeout(Duration::from_secs(2), handle)
        .await
        .unwrap()
        .unwrap();
    assert!(stopped.is_ok());

    let (_, body) = lookup(&agent.router, "/?name=new.istio.local.").await;
    assert_eq!(body["Answer"][0]["data"], "127.128.0.9");
    let (_, body) = lookup(&agent.router, "/?name=old.istio.local.").await;
    assert_eq!(body["Answer"], json!([]));

    let written = std::fs::read_to_string(&hosts).unwrap();
    assert_eq!(written, "127.128.0.9\tnew.istio.local\n");
}
