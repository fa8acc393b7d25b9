//! Wikipedia client against a local MediaWiki stand-in.

mod test_utils;

use lectern_interface::ResearchSource;
use lectern_models::{MAX_QUERY_CHARS, WikipediaClient};
use std::time::Duration;
use test_utils::{MockServer, RecordedRequest};

fn search_body(titles: &[&str]) -> String {
    let hits = titles
        .iter()
        .map(|title| serde_json::json!({ "ns": 0, "title": title }))
        .collect::<Vec<_>>();
    serde_json::json!({ "batchcomplete": "", "query": { "search": hits } }).to_string()
}

fn extract_body(title: &str, extract: Option<&str>) -> String {
    let mut page = serde_json::json!({ "pageid": 1, "ns": 0, "title": title });
    if let Some(text) = extract {
        page["extract"] = serde_json::Value::String(text.to_string());
    }
    serde_json::json!({ "query": { "pages": { "1": page } } }).to_string()
}

fn is_search(request: &RecordedRequest) -> bool {
    request.has_param("list=search")
}

fn client(server: &MockServer, top_k: usize, max_chars: usize) -> WikipediaClient {
    WikipediaClient::with_options("en", top_k, max_chars, Duration::from_secs(5))
        .expect("client builds")
        .with_api_url(server.url("/w/api.php"))
}

/// Answers searches with `hits` and extract requests with one intro per title.
async fn wiki(hits: &'static [&'static str]) -> MockServer {
    MockServer::start(move |request| {
        if is_search(request) {
            return (200, search_body(hits));
        }
        for title in hits {
            let param = format!("titles={}", title.replace(' ', "+"));
            if request.has_param(&param) {
                return (200, extract_body(title, Some(format!("About {title}.").as_str())));
            }
        }
        (200, extract_body("Unknown", None))
    })
    .await
}

#[tokio::test]
async fn test_search_formats_top_pages() {
    let server = wiki(&["Apollo program", "Voyager 1", "Space Shuttle"]).await;

    let research = client(&server, 2, 4000)
        .search("space exploration")
        .await
        .expect("search succeeds");

    assert_eq!(
        research,
        "Page: Apollo program\nSummary: About Apollo program.\n\n\
         Page: Voyager 1\nSummary: About Voyager 1."
    );

    let requests = server.requests();
    assert_eq!(requests.len(), 3);
    let search = requests.iter().find(|r| is_search(r)).unwrap();
    assert_eq!(search.method, "GET");
    assert!(search.has_param("srsearch=space+exploration"));
    assert!(search.has_param("srlimit=2"));
}

#[tokio::test]
async fn test_no_hits_is_empty_text() {
    let server = MockServer::start(|_| (200, search_body(&[]))).await;

    let research = client(&server, 3, 4000).search("zzqxj").await.unwrap();

    assert_eq!(research, "");
    assert_eq!(server.requests().len(), 1);
}

#[tokio::test]
async fn test_page_without_intro_is_skipped() {
    let server = MockServer::start(|request| {
        if is_search(request) {
            (200, search_body(&["Empty", "Owl"]))
        } else if request.has_param("titles=Owl") {
            (200, extract_body("Owl", Some("Owls are birds.")))
        } else {
            (200, extract_body("Empty", Some("   ")))
        }
    })
    .await;

    let research = client(&server, 3, 4000).search("owls").await.unwrap();

    assert_eq!(research, "Page: Owl\nSummary: Owls are birds.");
}

#[tokio::test]
async fn test_failed_page_fetch_keeps_other_pages() {
    let server = MockServer::start(|request| {
        if is_search(request) {
            (200, search_body(&["Owl", "Broken"]))
        } else if request.has_param("titles=Owl") {
            (200, extract_body("Owl", Some("Owls are birds.")))
        } else {
            (500, "oops".to_string())
        }
    })
    .await;

    let research = client(&server, 3, 4000).search("owls").await.unwrap();

    assert_eq!(research, "Page: Owl\nSummary: Owls are birds.");
}

#[tokio::test]
async fn test_api_error_body_is_an_error() {
    let server = MockServer::start(|_| {
        (
            200,
            r#"{"error":{"code":"maxlag","info":"Waiting for a database server: 7 seconds lagged."}}"#
                .to_string(),
        )
    })
    .await;

    let err = client(&server, 3, 4000)
        .search("space exploration")
        .await
        .unwrap_err();

    let message = err.to_string();
    assert!(message.contains("maxlag"), "{message}");
    assert!(message.contains("seconds lagged"), "{message}");
}

#[tokio::test]
async fn test_search_status_error_is_an_error() {
    let server = MockServer::start(|_| (503, "unavailable".to_string())).await;

    let result = client(&server, 3, 4000).search("space exploration").await;

    assert!(result.is_err());
}

#[tokio::test]
async fn test_output_is_capped() {
    let server = wiki(&["Apollo program", "Voyager 1", "Space Shuttle"]).await;

    let research = client(&server, 3, 40).search("space").await.unwrap();

    assert_eq!(research.chars().count(), 40);
    assert!(research.starts_with("Page: Apollo program\nSummary: "));
}

#[tokio::test]
async fn test_long_query_is_cut() {
    let server = MockServer::start(|_| (200, search_body(&[]))).await;
    let query = "a".repeat(MAX_QUERY_CHARS + 100);

    client(&server, 3, 4000).search(&query).await.unwrap();

    let expected = format!("srsearch={}", "a".repeat(MAX_QUERY_CHARS));
    assert!(server.requests()[0].has_param(&expected));
}
