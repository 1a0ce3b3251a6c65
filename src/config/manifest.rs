use urlencoding::encode;

/// Every endpoint path is appended to this.
pub const BASE_URL: &str = "https://gitlab.kitware.com/api/v4";

/// Identifiers of the live objects the fixtures are captured from.
///
/// Retargeting the tool means editing these values (or the manifest below)
/// and rebuilding; there is no runtime configuration.
pub struct FixtureIds {
    /// Project path; percent-encoded wherever it lands in an endpoint path.
    pub project: &'static str,
    pub user: u64,
    pub commit: &'static str,
    pub issue: u64,
    pub merge_request: u64,
    pub note: u64,
    pub pipeline: u64,
    pub group: u64,
}

impl Default for FixtureIds {
    fn default() -> Self {
        Self {
            project: "utils/rust-gitlab",
            user: 11, // kwrobot
            commit: "de4ac3cf96cb8a0893be22b03f5171d934f9d392",
            issue: 69328,
            merge_request: 20215,
            note: 177359,
            pipeline: 145400,
            group: 498, // utils
        }
    }
}

/// One fixture to capture.
pub struct Fixture {
    /// Output name; the file written is `<name>.json`.
    pub name: &'static str,
    /// Endpoint path appended to [`BASE_URL`].
    pub endpoint: String,
    /// Query parameters sent with the request.
    pub params: &'static [(&'static str, &'static str)],
    /// Keep the payload exactly as returned, skipping reduction and
    /// redaction. Used for list endpoints captured whole.
    pub raw: bool,
}

impl Fixture {
    fn new(name: &'static str, endpoint: String) -> Self {
        Self {
            name,
            endpoint,
            params: &[],
            raw: false,
        }
    }

    fn with_params(
        name: &'static str,
        endpoint: String,
        params: &'static [(&'static str, &'static str)],
    ) -> Self {
        Self {
            name,
            endpoint,
            params,
            raw: false,
        }
    }

    fn full_list(name: &'static str, endpoint: String) -> Self {
        Self {
            name,
            endpoint,
            params: &[],
            raw: true,
        }
    }
}

/// The fixtures a run captures, in the order they are written.
pub fn manifest(ids: &FixtureIds) -> Vec<Fixture> {
    let project = encode(ids.project);

    vec![
        Fixture::new("user_public", "/user".to_string()),
        Fixture::new("user", format!("/users/{}", ids.user)),
        Fixture::new("project", format!("/projects/{}", project)),
        Fixture::new("project_hook", format!("/projects/{}/hooks", project)),
        Fixture::new("member", format!("/groups/{}/members", ids.group)),
        Fixture::new(
            "repo_branch",
            format!("/projects/{}/repository/branches/master", project),
        ),
        Fixture::new(
            "repo_commit_detail",
            format!("/projects/{}/repository/commits/{}", project, ids.commit),
        ),
        Fixture::new(
            "commit_note",
            format!(
                "/projects/{}/repository/commits/{}/comments",
                project, ids.commit
            ),
        ),
        Fixture::with_params(
            "commit_status",
            format!(
                "/projects/{}/repository/commits/{}/statuses",
                project, ids.commit
            ),
            &[("all", "true")],
        ),
        Fixture::new("issue", format!("/projects/{}/issues/{}", project, ids.issue)),
        Fixture::new(
            "merge_request",
            format!("/projects/{}/merge_requests/{}", project, ids.merge_request),
        ),
        Fixture::new(
            "issue_reference",
            format!(
                "/projects/{}/merge_requests/{}/closes_issues",
                project, ids.merge_request
            ),
        ),
        Fixture::new(
            "note",
            format!(
                "/projects/{}/merge_requests/{}/notes",
                project, ids.merge_request
            ),
        ),
        Fixture::new(
            "award_emoji",
            format!(
                "/projects/{}/merge_requests/{}/notes/{}/award_emoji",
                project, ids.merge_request, ids.note
            ),
        ),
        Fixture::new("pipeline_basic", format!("/projects/{}/pipelines", project)),
        Fixture::new(
            "pipeline",
            format!("/projects/{}/pipelines/{}", project, ids.pipeline),
        ),
        Fixture::new("group", format!("/groups/{}", ids.group)),
        Fixture::full_list("labels", format!("/projects/{}/labels", project)),
    ]
}
