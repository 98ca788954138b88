//! Blocking HTTP implementation of [`OrgApi`].

use super::status::error_for_status;
use super::types::{Member, Membership, RepoPermission, Repository, Team};
use super::OrgApi;
use crate::config::{Config, TeamPrivacy, Token};
use crate::error::{AdminError, Result};
use crate::request::Permission;
use reqwest::blocking::{Client, Response};
use reqwest::header::{ACCEPT, AUTHORIZATION, HeaderMap, HeaderValue};
use reqwest::Method;
use serde::de::DeserializeOwned;
use serde_json::{Value, json};

/// REST API version pinned through the `X-GitHub-Api-Version` header.
const API_VERSION: &str = "2022-11-28";

/// Single page size for list calls; list actions never paginate.
const PAGE_SIZE: u32 = 100;

/// GitHub REST client authenticated with one token.
pub struct GitHubClient {
    http: Client,
    base_url: String,
}

impl std::fmt::Debug for GitHubClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GitHubClient")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

impl GitHubClient {
    /// Build a client for `config.api_url`.
    ///
    /// # Errors
    ///
    /// Returns `AdminError::Authentication` if the token cannot be carried
    /// in a header, or `AdminError::Api` if the HTTP client fails to build.
    pub fn new(config: &Config, token: &Token) -> Result<Self> {
        let mut auth = HeaderValue::from_str(&format!("Bearer {}", token.expose()))
            .map_err(|_| {
                AdminError::Authentication(
                    "token contains characters not allowed in an HTTP header".to_string(),
                )
            })?;
        auth.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, auth);
        headers.insert(
            ACCEPT,
            HeaderValue::from_static("application/vnd.github+json"),
        );
        headers.insert("x-github-api-version", HeaderValue::from_static(API_VERSION));

        let http = Client::builder()
            .default_headers(headers)
            .user_agent(config.user_agent.clone())
            .timeout(config.timeout())
            .build()
            .map_err(|e| AdminError::Api(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self {
            http,
            base_url: config.api_base().to_string(),
        })
    }

    fn send(
        &self,
        method: Method,
        path: &str,
        body: Option<Value>,
        context: &str,
    ) -> Result<Response> {
        let url = format!("{}{}", self.base_url, path);
        tracing::debug!(%method, %url, "sending API request");

        let mut request = self.http.request(method, &url);
        if let Some(body) = body {
            request = request.json(&body);
        }

        let response = request
            .send()
            .map_err(|e| AdminError::Api(format!("{}: request failed: {}", context, e)))?;

        let status = response.status();
        tracing::debug!(status = status.as_u16(), "received API response");
        if status.is_success() {
            return Ok(response);
        }

        let headers = response.headers().clone();
        let text = response.text().unwrap_or_default();
        Err(error_for_status(status, &headers, &text, context))
    }

    fn send_json<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: Option<Value>,
        context: &str,
    ) -> Result<T> {
        self.send(method, path, body, context)?
            .json::<T>()
            .map_err(|e| AdminError::Api(format!("{}: unexpected response body: {}", context, e)))
    }

    fn send_empty(
        &self,
        method: Method,
        path: &str,
        body: Option<Value>,
        context: &str,
    ) -> Result<()> {
        self.send(method, path, body, context).map(|_| ())
    }
}

impl OrgApi for GitHubClient {
    fn create_team(&self, org: &str, name: &str, privacy: TeamPrivacy) -> Result<Team> {
        self.send_json(
            Method::POST,
            &format!("/orgs/{}/teams", org),
            Some(json!({ "name": name, "privacy": privacy.as_str() })),
            &format!("create team '{}' in '{}'", name, org),
        )
    }

    fn delete_team(&self, org: &str, team_slug: &str) -> Result<()> {
        self.send_empty(
            Method::DELETE,
            &format!("/orgs/{}/teams/{}", org, team_slug),
            None,
            &format!("team '{}' in '{}'", team_slug, org),
        )
    }

    fn set_team_repo_permission(
        &self,
        org: &str,
        team_slug: &str,
        repo: &str,
        permission: Permission,
    ) -> Result<()> {
        self.send_empty(
            Method::PUT,
            &format!("/orgs/{}/teams/{}/repos/{}/{}", org, team_slug, org, repo),
            Some(json!({ "permission": permission.as_str() })),
            &format!("team '{}' on repo '{}/{}'", team_slug, org, repo),
        )
    }

    fn remove_team_repo(&self, org: &str, team_slug: &str, repo: &str) -> Result<()> {
        self.send_empty(
            Method::DELETE,
            &format!("/orgs/{}/teams/{}/repos/{}/{}", org, team_slug, org, repo),
            None,
            &format!("team '{}' on repo '{}/{}'", team_slug, org, repo),
        )
    }

    fn set_team_membership(
        &self,
        org: &str,
        team_slug: &str,
        user: &str,
        role: &str,
    ) -> Result<Membership> {
        self.send_json(
            Method::PUT,
            &format!("/orgs/{}/teams/{}/memberships/{}", org, team_slug, user),
            Some(json!({ "role": role })),
            &format!("user '{}' in team '{}' of '{}'", user, team_slug, org),
        )
    }

    fn remove_team_membership(&self, org: &str, team_slug: &str, user: &str) -> Result<()> {
        self.send_empty(
            Method::DELETE,
            &format!("/orgs/{}/teams/{}/memberships/{}", org, team_slug, user),
            None,
            &format!("user '{}' in team '{}' of '{}'", user, team_slug, org),
        )
    }

    fn create_repo(&self, org: &str, name: &str, private: bool) -> Result<Repository> {
        self.send_json(
            Method::POST,
            &format!("/orgs/{}/repos", org),
            Some(json!({ "name": name, "private": private })),
            &format!("create repo '{}' in '{}'", name, org),
        )
    }

    fn delete_repo(&self, org: &str, repo: &str) -> Result<()> {
        self.send_empty(
            Method::DELETE,
            &format!("/repos/{}/{}", org, repo),
            None,
            &format!("repo '{}/{}'", org, repo),
        )
    }

    fn repo_permission(&self, org: &str, repo: &str, user: &str) -> Result<RepoPermission> {
        self.send_json(
            Method::GET,
            &format!("/repos/{}/{}/collaborators/{}/permission", org, repo, user),
            None,
            &format!("user '{}' on repo '{}/{}'", user, org, repo),
        )
    }

    fn org_membership(&self, org: &str, user: &str) -> Result<Membership> {
        self.send_json(
            Method::GET,
            &format!("/orgs/{}/memberships/{}", org, user),
            None,
            &format!("user '{}' in '{}'", user, org),
        )
    }

    fn list_teams(&self, org: &str) -> Result<Vec<Team>> {
        self.send_json(
            Method::GET,
            &format!("/orgs/{}/teams?per_page={}", org, PAGE_SIZE),
            None,
            &format!("teams of '{}'", org),
        )
    }

    fn list_repos(&self, org: &str) -> Result<Vec<Repository>> {
        self.send_json(
            Method::GET,
            &format!("/orgs/{}/repos?per_page={}", org, PAGE_SIZE),
            None,
            &format!("repositories of '{}'", org),
        )
    }

    fn list_members(&self, org: &str) -> Result<Vec<Member>> {
        self.send_json(
            Method::GET,
            &format!("/orgs/{}/members?per_page={}", org, PAGE_SIZE),
            None,
            &format!("members of '{}'", org),
        )
    }
}
