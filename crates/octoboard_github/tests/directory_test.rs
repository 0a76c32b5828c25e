//! Integration tests for the contributor directory, driven by a scripted
//! in-memory transport so upstream call counts are observable.

use async_trait::async_trait;
use octoboard_error::{GithubError, GithubErrorKind, GithubResult};
use octoboard_github::{ContributorDirectory, GithubTransport};
use serde_json::{Value as JsonValue, json};
use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

const ORG: &str = "testorg";

/// Scripted response for one URL.
#[derive(Clone)]
enum Scripted {
    Json(JsonValue),
    Status(u16),
}

/// Transport that serves canned responses and counts every call.
#[derive(Clone, Default)]
struct MockTransport {
    routes: HashMap<String, Scripted>,
    calls: Arc<AtomicUsize>,
}

impl MockTransport {
    fn new() -> Self {
        Self::default()
    }

    fn route(mut self, url: impl Into<String>, payload: JsonValue) -> Self {
        self.routes.insert(url.into(), Scripted::Json(payload));
        self
    }

    fn route_status(mut self, url: impl Into<String>, status: u16) -> Self {
        self.routes.insert(url.into(), Scripted::Status(status));
        self
    }

    fn calls(&self) -> Arc<AtomicUsize> {
        self.calls.clone()
    }
}

#[async_trait]
impl GithubTransport for MockTransport {
    async fn get_json(&self, url: &str) -> GithubResult<JsonValue> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match self.routes.get(url) {
            Some(Scripted::Json(payload)) => Ok(payload.clone()),
            Some(Scripted::Status(code)) => Err(GithubError::new(GithubErrorKind::Status(*code))),
            None => panic!("unscripted request: {url}"),
        }
    }
}

fn repos_url() -> String {
    format!("https://api.github.com/orgs/{ORG}/repos")
}

fn contributors_url(repo: &str) -> String {
    format!("https://api.github.com/repos/{ORG}/{repo}/contributors")
}

fn search_url(login: &str) -> String {
    format!("https://api.github.com/search/issues?q=is:pull-request +author:{login} +org:{ORG}")
}

fn user_url(login: &str) -> String {
    format!("https://api.github.com/users/{login}")
}

/// Two repos sharing a contributor: alpha = {alice, bob}, beta = {bob, carol}.
fn two_repo_transport() -> MockTransport {
    MockTransport::new()
        .route(repos_url(), json!([{"name": "alpha"}, {"name": "beta"}]))
        .route(
            contributors_url("alpha"),
            json!([{"login": "alice"}, {"login": "bob"}]),
        )
        .route(
            contributors_url("beta"),
            json!([{"login": "bob"}, {"login": "carol"}]),
        )
}

#[tokio::test]
async fn roster_dedups_across_repositories() {
    let transport = two_repo_transport();
    let calls = transport.calls();
    let mut directory = ContributorDirectory::new(transport, ORG);

    let roster = directory.contributors().await.unwrap();

    let expected: Vec<_> = roster.iter().cloned().collect();
    assert_eq!(expected, vec!["alice", "bob", "carol"]);
    // One repo-list call plus one contributor-list call per repo.
    assert_eq!(calls.load(Ordering::SeqCst), 3);
}

#[tokio::test]
async fn second_roster_call_is_served_from_cache() {
    let transport = two_repo_transport();
    let calls = transport.calls();
    let mut directory = ContributorDirectory::new(transport, ORG);

    let first = directory.contributors().await.unwrap();
    let second = directory.contributors().await.unwrap();

    assert_eq!(first, second);
    // No additional upstream calls within the freshness window.
    assert_eq!(calls.load(Ordering::SeqCst), 3);
}

#[tokio::test]
async fn repo_failure_aborts_aggregation() {
    let transport = MockTransport::new()
        .route(repos_url(), json!([{"name": "alpha"}, {"name": "beta"}]))
        .route(
            contributors_url("alpha"),
            json!([{"login": "alice"}]),
        )
        .route_status(contributors_url("beta"), 502);
    let calls = transport.calls();
    let mut directory = ContributorDirectory::new(transport, ORG);

    let err = directory.contributors().await.unwrap_err();
    assert_eq!(err.status(), Some(502));

    // Nothing was cached: a retry goes back upstream.
    let err = directory.contributors().await.unwrap_err();
    assert_eq!(err.status(), Some(502));
    assert_eq!(calls.load(Ordering::SeqCst), 6);
}

#[tokio::test]
async fn zero_score_contributors_are_excluded() {
    let transport = MockTransport::new()
        .route(repos_url(), json!([{"name": "alpha"}]))
        .route(
            contributors_url("alpha"),
            json!([{"login": "alice"}, {"login": "bob"}]),
        )
        .route(search_url("alice"), json!({"total_count": 5}))
        .route(search_url("bob"), json!({"total_count": 0}));
    let mut directory = ContributorDirectory::new(transport, ORG);

    let board = directory.leaderboard().await.unwrap();

    assert_eq!(board.len(), 1);
    assert_eq!(board[0].login(), "alice");
    assert_eq!(*board[0].score(), 5);
}

#[tokio::test]
async fn leaderboard_is_sorted_descending_on_every_read() {
    let transport = two_repo_transport()
        .route(search_url("alice"), json!({"total_count": 2}))
        .route(search_url("bob"), json!({"total_count": 7}))
        .route(search_url("carol"), json!({"total_count": 4}));
    let mut directory = ContributorDirectory::new(transport, ORG);

    let board = directory.leaderboard().await.unwrap();
    let order: Vec<_> = board.iter().map(|e| e.login().as_str()).collect();
    assert_eq!(order, vec!["bob", "carol", "alice"]);

    // The cached read sorts too.
    let board = directory.leaderboard().await.unwrap();
    let order: Vec<_> = board.iter().map(|e| e.login().as_str()).collect();
    assert_eq!(order, vec!["bob", "carol", "alice"]);
}

#[tokio::test]
async fn second_leaderboard_call_issues_no_search_queries() {
    let transport = two_repo_transport()
        .route(search_url("alice"), json!({"total_count": 2}))
        .route(search_url("bob"), json!({"total_count": 7}))
        .route(search_url("carol"), json!({"total_count": 4}));
    let calls = transport.calls();
    let mut directory = ContributorDirectory::new(transport, ORG);

    directory.leaderboard().await.unwrap();
    let after_first = calls.load(Ordering::SeqCst);
    // 3 roster calls + 3 search queries.
    assert_eq!(after_first, 6);

    directory.leaderboard().await.unwrap();
    assert_eq!(calls.load(Ordering::SeqCst), after_first);
}

#[tokio::test]
async fn profile_is_resolved_live() {
    let transport = MockTransport::new()
        .route(search_url("alice"), json!({"total_count": 5}))
        .route(
            user_url("alice"),
            json!({
                "login": "alice",
                "name": "Alice Liddell",
                "avatar_url": "https://avatars.githubusercontent.com/u/1?v=4",
                "bio": "curiouser and curiouser"
            }),
        );
    let calls = transport.calls();
    let mut directory = ContributorDirectory::new(transport, ORG);

    let profile = directory.profile("alice").await.unwrap();
    assert_eq!(profile.login(), "alice");
    assert_eq!(profile.name().as_deref(), Some("Alice Liddell"));
    assert_eq!(*profile.total_pulls(), Some(5));

    // Never cached: a second lookup repeats both calls.
    directory.profile("alice").await.unwrap();
    assert_eq!(calls.load(Ordering::SeqCst), 4);
}

#[tokio::test]
async fn missing_profile_surfaces_not_found() {
    let transport = MockTransport::new()
        .route(search_url("ghost"), json!({"total_count": 0}))
        .route_status(user_url("ghost"), 404);
    let mut directory = ContributorDirectory::new(transport, ORG);

    let err = directory.profile("ghost").await.unwrap_err();
    assert!(err.is_not_found());
}
