//! HTTP-level tests for the GitHub client against a mock server.

use super::*;
use crate::config::{Config, TeamPrivacy, Token};
use crate::error::AdminError;
use crate::request::Permission;
use mockito::{Matcher, Server};
use serde_json::json;

fn client_for(server: &Server) -> GitHubClient {
    let config = Config {
        api_url: server.url(),
        ..Config::default()
    };
    GitHubClient::new(&config, &Token::new("test-token")).unwrap()
}

#[test]
fn test_create_team_sends_name_privacy_and_headers() {
    let mut server = Server::new();
    let mock = server
        .mock("POST", "/orgs/acme/teams")
        .match_header("authorization", "Bearer test-token")
        .match_header("accept", "application/vnd.github+json")
        .match_header("x-github-api-version", "2022-11-28")
        .match_header("user-agent", Matcher::Regex("^org-admin/".to_string()))
        .match_body(Matcher::Json(
            json!({"name": "Platform Team", "privacy": "secret"}),
        ))
        .with_status(201)
        .with_header("content-type", "application/json")
        .with_body(r#"{"id": 7, "name": "Platform Team", "slug": "platform-team", "privacy": "secret"}"#)
        .create();

    let team = client_for(&server)
        .create_team("acme", "Platform Team", TeamPrivacy::Secret)
        .unwrap();

    mock.assert();
    assert_eq!(team.slug, "platform-team");
    assert_eq!(team.id, 7);
}

#[test]
fn test_delete_team_accepts_no_content() {
    let mut server = Server::new();
    let mock = server
        .mock("DELETE", "/orgs/acme/teams/devs")
        .with_status(204)
        .create();

    client_for(&server).delete_team("acme", "devs").unwrap();
    mock.assert();
}

#[test]
fn test_delete_missing_team_is_not_found() {
    let mut server = Server::new();
    let mock = server
        .mock("DELETE", "/orgs/acme/teams/ghosts")
        .with_status(404)
        .with_body(r#"{"message": "Not Found"}"#)
        .create();

    let err = client_for(&server).delete_team("acme", "ghosts").unwrap_err();
    mock.assert();
    assert!(matches!(err, AdminError::NotFound(_)));
    assert!(err.to_string().contains("ghosts"));
}

#[test]
fn test_set_team_repo_permission_body() {
    let mut server = Server::new();
    let mock = server
        .mock("PUT", "/orgs/acme/teams/devs/repos/acme/api")
        .match_body(Matcher::Json(json!({"permission": "maintain"})))
        .with_status(204)
        .create();

    client_for(&server)
        .set_team_repo_permission("acme", "devs", "api", Permission::Maintain)
        .unwrap();
    mock.assert();
}

#[test]
fn test_remove_team_repo() {
    let mut server = Server::new();
    let mock = server
        .mock("DELETE", "/orgs/acme/teams/devs/repos/acme/api")
        .with_status(204)
        .create();

    client_for(&server)
        .remove_team_repo("acme", "devs", "api")
        .unwrap();
    mock.assert();
}

#[test]
fn test_set_team_membership_sends_role() {
    let mut server = Server::new();
    let mock = server
        .mock("PUT", "/orgs/acme/teams/devs/memberships/octocat")
        .match_body(Matcher::Json(json!({"role": "maintainer"})))
        .with_status(200)
        .with_body(r#"{"role": "maintainer", "state": "pending", "url": "x"}"#)
        .create();

    let membership = client_for(&server)
        .set_team_membership("acme", "devs", "octocat", "maintainer")
        .unwrap();
    mock.assert();
    assert_eq!(membership.role, "maintainer");
    assert_eq!(membership.state, "pending");
}

#[test]
fn test_remove_team_membership() {
    let mut server = Server::new();
    let mock = server
        .mock("DELETE", "/orgs/acme/teams/devs/memberships/octocat")
        .with_status(204)
        .create();

    client_for(&server)
        .remove_team_membership("acme", "devs", "octocat")
        .unwrap();
    mock.assert();
}

#[test]
fn test_create_repo_sends_visibility() {
    let mut server = Server::new();
    let mock = server
        .mock("POST", "/orgs/acme/repos")
        .match_body(Matcher::Json(json!({"name": "service", "private": true})))
        .with_status(201)
        .with_body(r#"{"name": "service", "full_name": "acme/service", "private": true}"#)
        .create();

    let repo = client_for(&server)
        .create_repo("acme", "service", true)
        .unwrap();
    mock.assert();
    assert_eq!(repo.visibility(), "private");
    assert_eq!(repo.full_name.as_deref(), Some("acme/service"));
}

#[test]
fn test_existing_repo_is_conflict() {
    let mut server = Server::new();
    server
        .mock("POST", "/orgs/acme/repos")
        .with_status(422)
        .with_body(r#"{"message": "Repository creation failed."}"#)
        .create();

    let err = client_for(&server)
        .create_repo("acme", "service", false)
        .unwrap_err();
    assert!(matches!(err, AdminError::PermissionConflict(_)));
}

#[test]
fn test_delete_repo() {
    let mut server = Server::new();
    let mock = server
        .mock("DELETE", "/repos/acme/old-service")
        .with_status(204)
        .create();

    client_for(&server).delete_repo("acme", "old-service").unwrap();
    mock.assert();
}

#[test]
fn test_repo_permission() {
    let mut server = Server::new();
    server
        .mock("GET", "/repos/acme/api/collaborators/octocat/permission")
        .with_status(200)
        .with_body(r#"{"permission": "write", "role_name": "maintain", "user": {"login": "octocat"}}"#)
        .create();

    let permission = client_for(&server)
        .repo_permission("acme", "api", "octocat")
        .unwrap();
    assert_eq!(permission.permission, "write");
    assert_eq!(permission.role_name.as_deref(), Some("maintain"));
}

#[test]
fn test_org_membership() {
    let mut server = Server::new();
    server
        .mock("GET", "/orgs/acme/memberships/octocat")
        .with_status(200)
        .with_body(r#"{"role": "admin", "state": "active"}"#)
        .create();

    let membership = client_for(&server)
        .org_membership("acme", "octocat")
        .unwrap();
    assert_eq!(membership.role, "admin");
}

#[test]
fn test_list_calls_request_one_full_page() {
    let mut server = Server::new();
    let teams = server
        .mock("GET", "/orgs/acme/teams")
        .match_query(Matcher::UrlEncoded("per_page".into(), "100".into()))
        .with_status(200)
        .with_body(r#"[{"id": 1, "name": "Devs", "slug": "devs"}]"#)
        .create();
    let repos = server
        .mock("GET", "/orgs/acme/repos")
        .match_query(Matcher::UrlEncoded("per_page".into(), "100".into()))
        .with_status(200)
        .with_body(r#"[{"name": "api", "private": false}]"#)
        .create();
    let members = server
        .mock("GET", "/orgs/acme/members")
        .match_query(Matcher::UrlEncoded("per_page".into(), "100".into()))
        .with_status(200)
        .with_body(r#"[{"login": "octocat"}, {"login": "hubot"}]"#)
        .create();

    let client = client_for(&server);
    assert_eq!(client.list_teams("acme").unwrap()[0].slug, "devs");
    assert_eq!(client.list_repos("acme").unwrap()[0].name, "api");
    assert_eq!(client.list_members("acme").unwrap().len(), 2);

    teams.assert();
    repos.assert();
    members.assert();
}

#[test]
fn test_bad_credentials_is_authentication_error() {
    let mut server = Server::new();
    server
        .mock("GET", "/orgs/acme/memberships/octocat")
        .with_status(401)
        .with_body(r#"{"message": "Bad credentials"}"#)
        .create();

    let err = client_for(&server)
        .org_membership("acme", "octocat")
        .unwrap_err();
    assert!(matches!(err, AdminError::Authentication(_)));
}

#[test]
fn test_rate_limit_is_not_retried() {
    let mut server = Server::new();
    let mock = server
        .mock("POST", "/orgs/acme/teams")
        .with_status(403)
        .with_header("x-ratelimit-remaining", "0")
        .with_header("x-ratelimit-reset", "1700000000")
        .with_body(r#"{"message": "API rate limit exceeded"}"#)
        .expect(1)
        .create();

    let err = client_for(&server)
        .create_team("acme", "devs", TeamPrivacy::Closed)
        .unwrap_err();
    mock.assert();
    assert!(matches!(err, AdminError::RateLimit { .. }));
}

#[test]
fn test_malformed_body_is_api_error() {
    let mut server = Server::new();
    server
        .mock("GET", "/orgs/acme/teams")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body("not json")
        .create();

    let err = client_for(&server).list_teams("acme").unwrap_err();
    assert!(matches!(err, AdminError::Api(_)));
}

#[test]
fn test_unreachable_server_is_api_error() {
    let config = Config {
        api_url: "http://127.0.0.1:1".to_string(),
        timeout_secs: 2,
        ..Config::default()
    };
    let client = GitHubClient::new(&config, &Token::new("test-token")).unwrap();

    let err = client.delete_team("acme", "devs").unwrap_err();
    assert!(matches!(err, AdminError::Api(_)));
}

#[test]
fn test_client_debug_does_not_leak_token() {
    let server = Server::new();
    let client = client_for(&server);
    assert!(!format!("{:?}", client).contains("test-token"));
}
