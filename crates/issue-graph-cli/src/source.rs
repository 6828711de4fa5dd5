//! Issue sources.
//!
//! Issues come either from the GitHub REST API or, for offline use, from a
//! JSON file holding the same array the issues endpoint returns. Both skip
//! pull requests, which the endpoint lists alongside issues.
//!
//! Only the newest page of issues is listed. When a single root issue is
//! requested and it is not on that page, [`fetch_for`] fetches it by number.

use std::{
    fmt, fs, io,
    path::{Path, PathBuf},
    str::FromStr,
    time::Duration,
};

use log::{debug, info};
use reqwest::{
    StatusCode,
    blocking::Client,
    header::{ACCEPT, USER_AGENT},
};
use thiserror::Error;

use issue_graph::{IssueGraphError, RootSelection, identifier::IssueId, semantic::Issue};

const USER_AGENT_VALUE: &str = concat!("issue-graph/", env!("CARGO_PKG_VERSION"));
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Errors raised while fetching issues.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("invalid repository format: `{0}` (expected owner/repo)")]
    InvalidRepo(String),

    #[error("request to GitHub failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("GitHub API returned {status} for {url}")]
    Status { status: u16, url: String },

    #[error("failed to decode issues: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("failed to read issues from {path}: {source}")]
    Io { path: PathBuf, source: io::Error },
}

impl From<SourceError> for IssueGraphError {
    fn from(err: SourceError) -> Self {
        IssueGraphError::source_error(err)
    }
}

/// A repository named as `owner/repo`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoRef {
    owner: String,
    repo: String,
}

impl RepoRef {
    /// Splits `owner/repo` at the first slash.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError::InvalidRepo`] when there is no slash or either
    /// side of it is empty.
    pub fn parse(value: &str) -> Result<Self, SourceError> {
        match value.split_once('/') {
            Some((owner, repo)) if !owner.is_empty() && !repo.is_empty() => Ok(Self {
                owner: owner.to_string(),
                repo: repo.to_string(),
            }),
            _ => Err(SourceError::InvalidRepo(value.to_string())),
        }
    }

    pub fn owner(&self) -> &str {
        &self.owner
    }

    pub fn repo(&self) -> &str {
        &self.repo
    }
}

impl FromStr for RepoRef {
    type Err = SourceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for RepoRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.repo)
    }
}

/// Something issues can be fetched from.
pub trait IssueSource {
    /// Fetch issues, newest first, without pull requests.
    fn fetch_issues(&self) -> Result<Vec<Issue>, SourceError>;

    /// Fetch a single issue by number.
    ///
    /// Returns `None` when there is no such issue or it is a pull request.
    fn fetch_issue(&self, id: IssueId) -> Result<Option<Issue>, SourceError>;
}

/// Fetches the issues needed to render `selection`.
///
/// A selected root issue that is not among the listed issues is fetched on
/// its own and appended.
///
/// # Errors
///
/// Returns any [`SourceError`] raised by `source`.
pub fn fetch_for(
    source: &dyn IssueSource,
    selection: RootSelection,
) -> Result<Vec<Issue>, SourceError> {
    let mut issues = source.fetch_issues()?;

    let RootSelection::Issue(id) = selection else {
        return Ok(issues);
    };
    if issues.iter().any(|issue| issue.number() == id) {
        return Ok(issues);
    }

    debug!(issue = id.number(); "Root issue not listed, fetching it directly");
    match source.fetch_issue(id)? {
        Some(root) => issues.push(root),
        None => debug!(issue = id.number(); "Root issue does not exist"),
    }
    Ok(issues)
}

/// Fetches the first page of a repository's issues from the GitHub REST API.
///
/// Requests are unauthenticated. Listing returns the 100 most recently
/// created issues, open or closed; single issues are fetched by number.
#[derive(Debug)]
pub struct GithubSource {
    client: Client,
    api_url: String,
    repo: RepoRef,
}

impl GithubSource {
    /// Create a source for `repo` against the API at `api_url`.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError::Http`] when the HTTP client cannot be built.
    pub fn new(api_url: impl Into<String>, repo: RepoRef) -> Result<Self, SourceError> {
        let client = Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(Self {
            client,
            api_url: api_url.into(),
            repo,
        })
    }

    /// URL of the issues list endpoint, without query parameters.
    pub fn issues_url(&self) -> String {
        format!(
            "{}/repos/{}/{}/issues",
            self.api_url.trim_end_matches('/'),
            self.repo.owner(),
            self.repo.repo()
        )
    }

    /// URL of a single issue.
    pub fn issue_url(&self, id: IssueId) -> String {
        format!("{}/{}", self.issues_url(), id.number())
    }

    /// Sends a GET request and returns the body, or `None` on `404`.
    fn get(&self, url: &str, query: &[(&str, &str)]) -> Result<Option<String>, SourceError> {
        let response = self
            .client
            .get(url)
            .query(query)
            .header(USER_AGENT, USER_AGENT_VALUE)
            .header(ACCEPT, "application/vnd.github+json")
            .send()?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !status.is_success() {
            return Err(SourceError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        Ok(Some(response.text()?))
    }
}

impl IssueSource for GithubSource {
    fn fetch_issues(&self) -> Result<Vec<Issue>, SourceError> {
        let url = self.issues_url();
        info!(repo:% = self.repo, url; "Fetching issues from GitHub");

        let query = [
            ("state", "all"),
            ("sort", "created"),
            ("direction", "desc"),
            ("per_page", "100"),
        ];
        match self.get(&url, &query)? {
            Some(body) => parse_issues(&body),
            None => Err(SourceError::Status {
                status: StatusCode::NOT_FOUND.as_u16(),
                url,
            }),
        }
    }

    fn fetch_issue(&self, id: IssueId) -> Result<Option<Issue>, SourceError> {
        let url = self.issue_url(id);
        info!(repo:% = self.repo, url; "Fetching issue from GitHub");

        match self.get(&url, &[])? {
            Some(body) => parse_issue(&body),
            None => Ok(None),
        }
    }
}

/// Reads issues from a JSON file shaped like the issues endpoint response.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl IssueSource for FileSource {
    fn fetch_issues(&self) -> Result<Vec<Issue>, SourceError> {
        info!(path = self.path.display().to_string(); "Reading issues from file");

        let content = fs::read_to_string(&self.path).map_err(|source| SourceError::Io {
            path: self.path.clone(),
            source,
        })?;
        parse_issues(&content)
    }

    fn fetch_issue(&self, id: IssueId) -> Result<Option<Issue>, SourceError> {
        let issues = self.fetch_issues()?;
        Ok(issues.into_iter().find(|issue| issue.number() == id))
    }
}

/// Decodes an issues array and drops pull requests.
fn parse_issues(json: &str) -> Result<Vec<Issue>, SourceError> {
    let items: Vec<Issue> = serde_json::from_str(json)?;
    let total = items.len();

    let issues: Vec<Issue> = items
        .into_iter()
        .filter(|item| !item.is_pull_request())
        .collect();

    debug!(
        items_count = total,
        issues_count = issues.len();
        "Decoded issues"
    );
    Ok(issues)
}

/// Decodes a single issue object; a pull request yields `None`.
fn parse_issue(json: &str) -> Result<Option<Issue>, SourceError> {
    let item: Issue = serde_json::from_str(json)?;
    if item.is_pull_request() {
        debug!(issue = item.number().number(); "Requested issue is a pull request");
        return Ok(None);
    }
    Ok(Some(item))
}
