//! [`Http`] transport against a stub server.

#![cfg(feature = "http")]

use std::{collections::HashMap, net::SocketAddr, time::Duration};

use axum::{http::HeaderMap, routing::post, Form, Json, Router};
use common::operations::Post;
use secrecy::SecretString;
use service::{
    domain::Field,
    infra::{
        http,
        transport::{self, Submission},
        Http, Transport as _,
    },
};
use tokio::net::TcpListener;
use url::Url;

async fn save(
    headers: HeaderMap,
    Form(form): Form<HashMap<String, String>>,
) -> Json<serde_json::Value> {
    let header = |name: &str| {
        headers
            .get(name)
            .and_then(|v| v.to_str().ok())
            .map(ToOwned::to_owned)
    };

    if header("x-requested-with").as_deref() != Some("XMLHttpRequest") {
        return Json(serde_json::json!({"ok": false, "errors": ["not AJAX"]}));
    }
    if header("cookie").as_deref() != Some("session=abc") {
        return Json(serde_json::json!({"ok": false, "errors": ["no session"]}));
    }
    if form.get("buyer_name").map(String::as_str) != Some("Ravi Kumar") {
        return Json(serde_json::json!({"ok": false}));
    }
    Json(serde_json::json!({"ok": true, "s_no": 42}))
}

async fn serve() -> SocketAddr {
    let app = Router::new()
        .route("/crm/new", post(save))
        .route("/crm/broken", post(|| async { "<html>502</html>" }));

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    }));
    addr
}

fn client(addr: SocketAddr, cookie: Option<&str>) -> Http {
    Http::new(http::Config {
        base_url: Url::parse(&format!("http://{addr}/")).unwrap(),
        timeout: Duration::from_secs(5),
        session_cookie: cookie.map(|c| SecretString::from(c.to_owned())),
    })
    .unwrap()
}

fn submission(path: &str) -> Submission {
    Submission {
        path: path.to_owned(),
        fields: vec![
            (Field::BuyerName, "Ravi Kumar".to_owned()),
            (Field::BaseSqftPrice, "₹5,000.00".to_owned()),
        ],
    }
}

#[tokio::test]
async fn posts_form_as_ajax() {
    let addr = serve().await;

    let reply = client(addr, Some("session=abc"))
        .execute(Post(submission("/crm/new")))
        .await
        .unwrap();

    assert!(reply.ok);
    assert_eq!(reply.serial_number(), Some("42"));
}

#[tokio::test]
async fn decodes_rejection() {
    let addr = serve().await;

    let reply = client(addr, None)
        .execute(Post(submission("/crm/new")))
        .await
        .unwrap();

    assert!(!reply.ok);
    assert_eq!(reply.rejection(), ["no session"]);
}

#[tokio::test]
async fn fails_on_non_json_reply() {
    let addr = serve().await;

    let err = client(addr, Some("session=abc"))
        .execute(Post(submission("/crm/broken")))
        .await
        .unwrap_err();

    assert!(matches!(err.into_inner(), transport::Error::Decode(_)));
}

#[tokio::test]
async fn fails_when_server_is_gone() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let err = client(addr, None)
        .execute(Post(submission("/crm/new")))
        .await
        .unwrap_err();

    assert!(matches!(
        err.into_inner(),
        transport::Error::Http(http::Error::Request(_)),
    ));
}
