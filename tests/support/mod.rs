//! In-process stand-in for an AEM author instance serving the Venia product pages.

#![allow(dead_code)]

use axum::extract::State;
use axum::http::{header, HeaderMap, StatusCode, Uri};
use axum::response::{Html, IntoResponse, Response};
use axum::Router;
use serde_json::Value;
use std::net::SocketAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::oneshot;
use venia_it::fixtures::FixtureStore;
use venia_it::http::SlingClient;
use venia_it::scenarios::product_page::PRODUCT_PAGE;
use venia_it::SuiteContext;

/// `Basic base64("admin:admin")`
const ADMIN_AUTH: &str = "Basic YWRtaW46YWRtaW4=";

pub fn init_logger() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_test_writer()
        .try_init();
}

/// Ways the rendered pages can deviate from a healthy instance.
#[derive(Debug, Clone, Copy, Default)]
pub struct Faults {
    /// Render the product name span twice.
    pub duplicate_product_name: bool,
    /// Embed a data layer whose `dc:title` differs from the fixture.
    pub stale_data_layer: bool,
    /// Serialize data layer objects with their keys in reverse order.
    pub reorder_data_layer: bool,
}

struct MockState {
    faults: Faults,
    fixtures: FixtureStore,
    hits: AtomicUsize,
}

pub struct MockVenia {
    addr: SocketAddr,
    state: Arc<MockState>,
    shutdown: Option<oneshot::Sender<()>>,
}

impl MockVenia {
    pub async fn start() -> Self {
        Self::start_with(Faults::default()).await
    }

    pub async fn start_with(faults: Faults) -> Self {
        let state = Arc::new(MockState {
            faults,
            fixtures: FixtureStore::default(),
            hits: AtomicUsize::new(0),
        });
        let app = Router::new().fallback(serve_page).with_state(state.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind mock server");
        let addr = listener.local_addr().expect("local addr");
        let (tx, rx) = oneshot::channel::<()>();
        tokio::spawn(async move {
            let _ = axum::serve(listener, app)
                .with_graceful_shutdown(async {
                    let _ = rx.await;
                })
                .await;
        });

        Self {
            addr,
            state,
            shutdown: Some(tx),
        }
    }

    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    pub fn hits(&self) -> usize {
        self.state.hits.load(Ordering::SeqCst)
    }

    pub fn client(&self, user: &str, password: &str) -> SlingClient {
        SlingClient::new(
            &self.base_url(),
            user,
            password,
            Duration::from_secs(10),
            Duration::from_secs(5),
        )
        .expect("valid mock url")
    }

    pub fn context(&self) -> SuiteContext {
        SuiteContext::new(
            Arc::new(self.client("admin", "admin")),
            FixtureStore::default(),
        )
    }
}

impl Drop for MockVenia {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown.take() {
            let _ = tx.send(());
        }
    }
}

async fn serve_page(
    State(state): State<Arc<MockState>>,
    headers: HeaderMap,
    uri: Uri,
) -> Response {
    state.hits.fetch_add(1, Ordering::SeqCst);

    let authorized = headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v == ADMIN_AUTH);
    if !authorized {
        return (
            StatusCode::UNAUTHORIZED,
            Html("<html><body><h1>Login required</h1></body></html>".to_string()),
        )
            .into_response();
    }

    let path = uri.path();
    let publish_mode = uri
        .query()
        .is_some_and(|q| q.split('&').any(|kv| kv == "wcmmode=disabled"));

    let simple = format!("{}.html/honora-wide-leg-pants.html", PRODUCT_PAGE);
    let grouped = format!("{}.html/augusta-trio.html", PRODUCT_PAGE);
    let placeholder = format!("{}.html", PRODUCT_PAGE);

    let page = if path == simple {
        Some(ProductPage {
            title: "Honora Wide Leg Pants",
            name: "Honora Wide Leg Pants",
            breadcrumb: &["Home", "Bottoms", "Pants & Shorts", "Honora Wide Leg Pants"],
            grouped: false,
            fixture: "datalayer/simple-product.json",
        })
    } else if path == grouped {
        Some(ProductPage {
            title: "Augusta Trio",
            name: "Augusta Trio",
            breadcrumb: &["Home", "Accessories", "Augusta Trio"],
            grouped: true,
            fixture: "datalayer/grouped-product.json",
        })
    } else if path == placeholder {
        Some(ProductPage {
            title: "Product page",
            name: "Product name",
            breadcrumb: &["Home"],
            grouped: false,
            fixture: "datalayer/placeholder-product.json",
        })
    } else {
        None
    };

    match page {
        Some(page) => (StatusCode::OK, Html(render_product(&state, &page))).into_response(),
        None => (StatusCode::NOT_FOUND, Html(render_not_found(publish_mode))).into_response(),
    }
}

struct ProductPage {
    title: &'static str,
    name: &'static str,
    breadcrumb: &'static [&'static str],
    grouped: bool,
    fixture: &'static str,
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

/// Compact JSON with every object's keys in reverse order.
fn to_json_reversed(value: &Value) -> String {
    match value {
        Value::Object(map) => {
            let fields: Vec<String> = map
                .iter()
                .rev()
                .map(|(k, v)| format!("{}:{}", Value::String(k.clone()), to_json_reversed(v)))
                .collect();
            format!("{{{}}}", fields.join(","))
        }
        Value::Array(items) => {
            let items: Vec<String> = items.iter().map(to_json_reversed).collect();
            format!("[{}]", items.join(","))
        }
        other => other.to_string(),
    }
}

fn navigation() -> String {
    let roots = ["Tops", "Bottoms", "Dresses", "Accessories", "Shop The Look", "Blog"];
    let mut out = String::from(r#"<nav class="cmp-navigation"><ul class="cmp-navigation__group">"#);
    for (i, root) in roots.iter().enumerate() {
        out.push_str(r#"<li class="cmp-navigation__item cmp-navigation__item--level-0">"#);
        out.push_str(&format!(
            r##"<a class="cmp-navigation__item-link" href="#">{}</a>"##,
            escape(root)
        ));
        if i == 1 {
            out.push_str(
                r##"<ul class="cmp-navigation__group">
                    <li class="cmp-navigation__item cmp-navigation__item--level-1"><a href="#">Pants &amp; Shorts</a></li>
                    <li class="cmp-navigation__item cmp-navigation__item--level-1"><a href="#">Skirts</a></li>
                </ul>"##,
            );
        }
        out.push_str("</li>");
    }
    out.push_str("</ul></nav>");
    out
}

fn render_product(state: &MockState, page: &ProductPage) -> String {
    let mut data_layer = state
        .fixtures
        .load_json(page.fixture)
        .expect("bundled fixture");
    if state.faults.stale_data_layer {
        if let Some(obj) = data_layer.as_object_mut() {
            for entry in obj.values_mut() {
                entry["dc:title"] = Value::String("Stale title".into());
            }
        }
    }
    let data_layer = if state.faults.reorder_data_layer {
        to_json_reversed(&data_layer)
    } else {
        data_layer.to_string()
    };

    let breadcrumb: String = page
        .breadcrumb
        .iter()
        .map(|item| format!(r#"<li class="cmp-breadcrumb__item">{}</li>"#, escape(item)))
        .collect();

    let name = format!("<span>{}</span>", escape(page.name));
    let name = if state.faults.duplicate_product_name {
        name.repeat(2)
    } else {
        name
    };

    let grouped = if page.grouped {
        r#"<section class="productFullDetail__groupedProducts"><table>
            <tr><td>Augusta Pullover Jacket</td></tr>
            <tr><td>Augusta Shorts</td></tr>
            <tr><td>Augusta Tee</td></tr>
        </table></section>"#
    } else {
        ""
    };

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8">
  <title>{title}</title>
</head>
<body class="page basicpage">
  <header class="experiencefragment">{nav}</header>
  <div class="breadcrumb"><nav class="cmp-breadcrumb"><ol class="cmp-breadcrumb__list">{breadcrumb}</ol></nav></div>
  <main>
    <div class="product">
      <div class="productFullDetail__root" data-cmp-data-layer="{data_layer}">
        <h1 class="productFullDetail__productName">{name}</h1>
        {grouped}
      </div>
    </div>
  </main>
</body>
</html>"#,
        title = escape(page.title),
        nav = navigation(),
        breadcrumb = breadcrumb,
        data_layer = escape(&data_layer),
        name = name,
        grouped = grouped,
    )
}

fn render_not_found(publish_mode: bool) -> String {
    // The authoring overlay adds its own heading, which breaks the single-h1 check.
    let overlay = if publish_mode {
        ""
    } else {
        r#"<div id="OverlayWrapper"><h1>Edit mode</h1></div>"#
    };
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head><title>Page Not Found</title></head>
<body class="page errorpage">
  {overlay}
  <div class="title"><h1 class="cmp-title__text">Ruh-Roh!
      Page Not Found</h1></div>
</body>
</html>"#,
        overlay = overlay
    )
}
