//! Tests for argument resolution.

use super::*;
use crate::error::AdminError;

fn raw(action: &str, org: &str) -> RawArgs {
    RawArgs {
        action: Some(action.to_string()),
        org: Some(org.to_string()),
        ..Default::default()
    }
}

fn invalid_field(err: AdminError) -> String {
    match err {
        AdminError::InvalidArgument { field, .. } => field,
        other => panic!("expected InvalidArgument, got {:?}", other),
    }
}

#[test]
fn test_create_team_resolves() {
    let mut args = raw("create-team", "acme");
    args.team = Some("Platform Team".to_string());

    let request = resolve(args).unwrap();
    assert_eq!(request.action, Action::CreateTeam);
    assert_eq!(request.org, "acme");
    assert_eq!(request.team.as_deref(), Some("Platform Team"));
    assert!(!request.repo_private);
}

#[test]
fn test_missing_action_is_invalid() {
    let args = RawArgs {
        org: Some("acme".to_string()),
        ..Default::default()
    };
    assert_eq!(invalid_field(resolve(args).unwrap_err()), "--action");
}

#[test]
fn test_unknown_action_lists_choices() {
    let err = resolve(raw("explode-org", "acme")).unwrap_err();
    let message = err.to_string();
    assert!(message.contains("--action"));
    assert!(message.contains("create-team"));
    assert!(message.contains("user-access"));
}

#[test]
fn test_missing_org_is_invalid() {
    let args = RawArgs {
        action: Some("list-teams".to_string()),
        ..Default::default()
    };
    assert_eq!(invalid_field(resolve(args).unwrap_err()), "--org");
}

#[test]
fn test_every_required_field_is_enforced() {
    let cases: &[(&str, &str)] = &[
        ("create-team", "--team"),
        ("delete-team", "--team"),
        ("add-repo", "--team, --repo, --permission"),
        ("remove-repo", "--team, --repo"),
        ("add-user", "--team, --user, --permission"),
        ("remove-user", "--team, --user"),
        ("create-repo", "--repo-name"),
        ("user-access", "--user"),
        ("delete-repo", "--repo"),
    ];

    for (action, missing) in cases {
        let err = resolve(raw(action, "acme")).unwrap_err();
        assert_eq!(&invalid_field(err), missing, "action {}", action);
    }
}

#[test]
fn test_partial_fields_name_only_the_missing_ones() {
    let mut args = raw("add-repo", "acme");
    args.team = Some("devs".to_string());
    args.repo = Some("api".to_string());

    assert_eq!(invalid_field(resolve(args).unwrap_err()), "--permission");
}

#[test]
fn test_list_actions_need_only_org() {
    for action in ["list-teams", "list-repos", "list-members"] {
        assert!(resolve(raw(action, "acme")).is_ok(), "action {}", action);
    }
}

#[test]
fn test_nil_permission_is_absent() {
    let mut args = raw("remove-repo", "acme");
    args.team = Some("devs".to_string());
    args.repo = Some("api".to_string());
    args.permission = Some("nil".to_string());

    let request = resolve(args).unwrap();
    assert_eq!(request.permission, None);
}

#[test]
fn test_nil_permission_does_not_satisfy_add_repo() {
    let mut args = raw("add-repo", "acme");
    args.team = Some("devs".to_string());
    args.repo = Some("api".to_string());
    args.permission = Some("nil".to_string());

    assert_eq!(invalid_field(resolve(args).unwrap_err()), "--permission");
}

#[test]
fn test_unknown_permission_is_invalid() {
    let mut args = raw("add-repo", "acme");
    args.team = Some("devs".to_string());
    args.repo = Some("api".to_string());
    args.permission = Some("write".to_string());

    assert_eq!(invalid_field(resolve(args).unwrap_err()), "--permission");
}

#[test]
fn test_empty_values_are_absent() {
    let mut args = raw("create-team", "acme");
    args.team = Some("   ".to_string());

    assert_eq!(invalid_field(resolve(args).unwrap_err()), "--team");
}

#[test]
fn test_repo_private_defaults_to_false() {
    let mut args = raw("create-repo", "acme");
    args.repo_name = Some("service".to_string());

    let request = resolve(args).unwrap();
    assert_eq!(request.repo_name.as_deref(), Some("service"));
    assert!(!request.repo_private);
}

#[test]
fn test_repo_private_accepts_true_and_false() {
    for (value, expected) in [("true", true), ("false", false)] {
        let mut args = raw("create-repo", "acme");
        args.repo_name = Some("service".to_string());
        args.repo_private = Some(value.to_string());
        assert_eq!(resolve(args).unwrap().repo_private, expected);
    }
}

#[test]
fn test_repo_private_rejects_other_values() {
    for value in ["yes", "1", "TRUE"] {
        let mut args = raw("create-repo", "acme");
        args.repo_name = Some("service".to_string());
        args.repo_private = Some(value.to_string());
        assert_eq!(
            invalid_field(resolve(args).unwrap_err()),
            "--repo-private",
            "value {}",
            value
        );
    }
}

#[test]
fn test_repo_private_conflicts_with_other_actions() {
    let mut args = raw("create-team", "acme");
    args.team = Some("devs".to_string());
    args.repo_private = Some("true".to_string());

    assert_eq!(invalid_field(resolve(args).unwrap_err()), "--repo-private");
}

#[test]
fn test_repo_name_conflicts_with_other_actions() {
    let mut args = raw("delete-repo", "acme");
    args.repo_name = Some("api".to_string());

    assert_eq!(invalid_field(resolve(args).unwrap_err()), "--repo-name");
}

#[test]
fn test_email_is_rejected_as_user() {
    let mut args = raw("user-access", "acme");
    args.user = Some("dev@example.com".to_string());

    let err = resolve(args).unwrap_err();
    assert!(err.to_string().contains("email"));
}

#[test]
fn test_path_characters_are_rejected() {
    let mut args = raw("delete-repo", "acme");
    args.repo = Some("../../user".to_string());
    assert_eq!(invalid_field(resolve(args).unwrap_err()), "--repo");

    let args = raw("list-teams", "acme/evil");
    assert_eq!(invalid_field(resolve(args).unwrap_err()), "--org");

    let mut args = raw("delete-repo", "acme");
    args.repo = Some("..".to_string());
    assert_eq!(invalid_field(resolve(args).unwrap_err()), "--repo");
}

#[test]
fn test_team_without_letters_is_rejected() {
    let mut args = raw("create-team", "acme");
    args.team = Some("!!!".to_string());
    assert_eq!(invalid_field(resolve(args).unwrap_err()), "--team");
}

#[test]
fn test_values_are_trimmed() {
    let mut args = raw(" add-user ", " acme ");
    args.team = Some(" devs ".to_string());
    args.user = Some(" octocat ".to_string());
    args.permission = Some(" push ".to_string());

    let request = resolve(args).unwrap();
    assert_eq!(request.org, "acme");
    assert_eq!(request.team.as_deref(), Some("devs"));
    assert_eq!(request.user.as_deref(), Some("octocat"));
    assert_eq!(request.permission, Some(Permission::Push));
}

#[test]
fn test_permission_ordering() {
    assert!(Permission::Pull < Permission::Triage);
    assert!(Permission::Triage < Permission::Push);
    assert!(Permission::Push < Permission::Maintain);
    assert!(Permission::Maintain < Permission::Admin);
}

#[test]
fn test_team_role_from_permission() {
    assert_eq!(Permission::Pull.team_role(), "member");
    assert_eq!(Permission::Push.team_role(), "member");
    assert_eq!(Permission::Maintain.team_role(), "maintainer");
    assert_eq!(Permission::Admin.team_role(), "maintainer");
}

#[test]
fn test_permission_from_api_name() {
    assert_eq!(Permission::from_api_name("read"), Some(Permission::Pull));
    assert_eq!(Permission::from_api_name("write"), Some(Permission::Push));
    assert_eq!(Permission::from_api_name("admin"), Some(Permission::Admin));
    assert_eq!(Permission::from_api_name("none"), None);
}

#[test]
fn test_action_names_are_stable() {
    for action in Action::ALL {
        assert_eq!(action.as_str().parse::<Action>().unwrap(), action);
        assert_eq!(action.to_string(), action.as_str());
    }
}

#[test]
fn test_mutating_actions() {
    assert!(Action::CreateTeam.is_mutation());
    assert!(Action::DeleteRepo.is_mutation());
    assert!(!Action::UserAccess.is_mutation());
    assert!(!Action::ListMembers.is_mutation());
}
