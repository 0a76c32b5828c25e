//! Contributor aggregation, leaderboard building, and profile lookup.

use crate::client::GithubTransport;
use crate::models::{
    ContributorProfile, LeaderboardEntry, RepoContributorJson, RepoJson, SearchCountJson, UserJson,
};
use octoboard_cache::TtlCache;
use octoboard_error::{GithubError, GithubErrorKind, GithubResult};
use serde_json::Value as JsonValue;
use std::collections::BTreeSet;
use std::time::Duration;
use tracing::{debug, info, instrument};

const GITHUB_API: &str = "https://api.github.com";

/// Cache key for the deduplicated contributor roster.
pub const CONTRIBUTORS_KEY: &str = "contributors_mini";
/// Cache key for the unsorted leaderboard entries.
pub const LEADERBOARD_KEY: &str = "leaderboard";

/// Repository membership changes rarely, so the roster outlives the default
/// cache lifetime by a wide margin.
const ROSTER_TTL: Duration = Duration::from_secs(12 * 60 * 60);

/// Directory of an organization's contributors.
///
/// Fans out paginated GitHub calls (org repositories, then each repository's
/// contributor list), aggregates the results into a deduplicated roster, and
/// memoizes the roster and the pull-request leaderboard behind TTL expiry.
/// Profile lookups are always live.
///
/// The cache is owned by the directory rather than shared process-wide, so a
/// fresh directory starts cold and tests get isolated cache state.
pub struct ContributorDirectory<T> {
    transport: T,
    cache: TtlCache,
    organization: String,
}

impl<T: GithubTransport> ContributorDirectory<T> {
    /// Create a directory for the given organization with a cold cache.
    pub fn new(transport: T, organization: impl Into<String>) -> Self {
        Self {
            transport,
            cache: TtlCache::new(),
            organization: organization.into(),
        }
    }

    /// The organization this directory scans.
    pub fn organization(&self) -> &String {
        &self.organization
    }

    /// The deduplicated set of contributor logins across every repository in
    /// the organization.
    ///
    /// Served from cache when fresh (12-hour lifetime). On a miss: one call
    /// lists the repositories, then one call per repository fetches its
    /// contributor list, sequentially. Any single repository failure aborts
    /// the whole aggregation and nothing is cached.
    #[instrument(skip(self), fields(organization = %self.organization))]
    pub async fn contributors(&mut self) -> GithubResult<BTreeSet<String>> {
        if let Some(roster) = self.cache.try_get::<BTreeSet<String>>(CONTRIBUTORS_KEY) {
            debug!(count = roster.len(), "Serving contributor roster from cache");
            return Ok(roster);
        }

        let url = format!("{GITHUB_API}/orgs/{}/repos", self.organization);
        let payload = self.transport.get_json(&url).await?;
        let repos: Vec<RepoJson> = parse(payload)?;

        let mut roster = BTreeSet::new();
        for repo in &repos {
            let url = format!(
                "{GITHUB_API}/repos/{}/{}/contributors",
                self.organization, repo.name
            );
            let payload = self.transport.get_json(&url).await?;
            let contributors: Vec<RepoContributorJson> = parse(payload)?;
            roster.extend(contributors.into_iter().map(|c| c.login));
        }

        info!(
            repos = repos.len(),
            contributors = roster.len(),
            "Aggregated contributor roster"
        );
        self.cache.insert(CONTRIBUTORS_KEY, &roster, Some(ROSTER_TTL));
        Ok(roster)
    }

    /// The pull-request leaderboard, sorted descending by score.
    ///
    /// Entries are stored unsorted under the default cache lifetime (scores
    /// change with every new pull request, so the leaderboard is shorter-lived
    /// than the roster); sorting happens on every read. Contributors with
    /// zero matching pull requests are excluded entirely.
    #[instrument(skip(self), fields(organization = %self.organization))]
    pub async fn leaderboard(&mut self) -> GithubResult<Vec<LeaderboardEntry>> {
        if let Some(entries) = self.cache.try_get::<Vec<LeaderboardEntry>>(LEADERBOARD_KEY) {
            debug!(count = entries.len(), "Serving leaderboard from cache");
            return Ok(sorted_descending(entries));
        }

        let roster = self.contributors().await?;

        let mut entries = Vec::new();
        for login in &roster {
            let count = self.pull_request_count(login).await?;
            if count > 0 {
                entries.push(LeaderboardEntry::new(login.clone(), count));
            }
        }

        info!(scored = entries.len(), "Built leaderboard");
        self.cache.insert(LEADERBOARD_KEY, &entries, None);
        Ok(sorted_descending(entries))
    }

    /// One contributor's full profile, resolved live on every call.
    ///
    /// # Errors
    ///
    /// Fails with status 404 when the user does not exist; the presentation
    /// layer maps that to "not found".
    #[instrument(skip(self), fields(organization = %self.organization))]
    pub async fn profile(&mut self, login: &str) -> GithubResult<ContributorProfile> {
        let count = self.pull_request_count(login).await?;

        let url = format!("{GITHUB_API}/users/{login}");
        let payload = self.transport.get_json(&url).await?;
        let user: UserJson = parse(payload)?;

        ContributorProfile::builder()
            .login(user.login)
            .name(user.name)
            .avatar_url(user.avatar_url)
            .bio(user.bio)
            .total_pulls(Some(count))
            .build()
            .map_err(|e| GithubError::new(GithubErrorKind::Builder(e.to_string())))
    }

    /// Count pull requests authored by `login` against the organization.
    async fn pull_request_count(&self, login: &str) -> GithubResult<u64> {
        let url = format!(
            "{GITHUB_API}/search/issues?q=is:pull-request +author:{login} +org:{}",
            self.organization
        );
        let payload = self.transport.get_json(&url).await?;
        let search: SearchCountJson = parse(payload)?;
        Ok(search.total_count)
    }
}

/// Deserialize a JSON payload into the expected wire shape.
fn parse<M: serde::de::DeserializeOwned>(payload: JsonValue) -> GithubResult<M> {
    serde_json::from_value(payload)
        .map_err(|e| GithubError::new(GithubErrorKind::Json(e.to_string())))
}

/// Sort entries by score, highest first. Stable, so ties keep their stored
/// order.
fn sorted_descending(mut entries: Vec<LeaderboardEntry>) -> Vec<LeaderboardEntry> {
    entries.sort_by(|a, b| b.score().cmp(a.score()));
    entries
}
