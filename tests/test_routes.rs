mod common;

use common::FakeApi;
use mango_projects::error::{ApiError, ValidationError};
use mango_projects::project::directory_name;
use mango_projects::render;
use mango_projects::routes::*;

#[test]
fn test_index_keeps_api_order() {
    let api = FakeApi::with(&[("Zeta", "zeta"), ("Alpha", "alpha")]);
    let names: Vec<_> = index(&api).unwrap().into_iter().map(|p| p.name).collect();
    assert_eq!(names, ["Zeta", "Alpha"]);
}

#[test]
fn test_index_empty_still_offers_add_project() {
    let api = FakeApi::default();
    let projects = index(&api).unwrap();
    assert!(projects.is_empty());

    let view = render::index(&projects);
    assert!(view.contains(render::ADD_PROJECT));
    assert!(view.contains("/add-project"));
}

#[test]
fn test_index_links_each_project_to_edit_view() {
    let api = FakeApi::with(&[("Demo", "demo"), ("My Cool Project", "my-cool-project")]);
    let view = render::index(&index(&api).unwrap());
    assert!(view.contains("/edit/demo"));
    assert!(view.contains("/edit/my-cool-project"));
    assert!(view.contains("My Cool Project"));
}

#[test]
fn test_add_project_redirects_to_created_detail_view() {
    let api = FakeApi::default();
    let route = add_project(&api, &ProjectForm::with_name("Demo")).unwrap();
    assert_eq!(route, Route::Project("demo".into()));
    assert_eq!(route.to_string(), "/project/demo");
    assert_eq!(api.calls.get(), 1);
}

#[test]
fn test_add_project_sends_derived_identifier() {
    let api = FakeApi::default();
    add_project(&api, &ProjectForm::with_name("My  Cool Project")).unwrap();
    let stored = api.projects.borrow();
    assert_eq!(stored[0].directory_name, "my-cool-project");
    assert_eq!(stored[0].name, "My  Cool Project");
}

#[test]
fn test_add_project_missing_name_makes_no_call() {
    let api = FakeApi::default();
    let err = add_project(&api, &ProjectForm::default()).unwrap_err();
    assert!(matches!(err, ApiError::Validation(ValidationError::MissingName)));
    assert_eq!(api.calls.get(), 0);
}

#[test]
fn test_add_project_empty_name_makes_no_call() {
    let api = FakeApi::default();
    let err = add_project(&api, &ProjectForm::with_name("")).unwrap_err();
    assert!(matches!(err, ApiError::Validation(ValidationError::EmptyName)));
    assert_eq!(api.calls.get(), 0);
    assert!(api.projects.borrow().is_empty());
}

#[test]
fn test_add_project_dot_names_make_no_call() {
    let api = FakeApi::default();
    for name in [".", ".."] {
        let err = add_project(&api, &ProjectForm::with_name(name)).unwrap_err();
        assert!(
            matches!(err, ApiError::Validation(ValidationError::ReservedDirectoryName(ref dir)) if dir == name),
            "{err:?}"
        );
    }
    assert_eq!(api.calls.get(), 0);
}

#[test]
fn test_add_project_rejects_divergent_identifier() {
    let api = FakeApi { rename_to: Some("demo_1".into()), ..FakeApi::default() };
    let err = add_project(&api, &ProjectForm::with_name("Demo")).unwrap_err();
    match err {
        ApiError::IdentifierMismatch { sent, returned } => {
            assert_eq!(sent, "demo");
            assert_eq!(returned, "demo_1");
        }
        other => panic!("expected IdentifierMismatch, got {other:?}"),
    }
}

#[test]
fn test_add_project_duplicate_surfaces_status() {
    let api = FakeApi::with(&[("Demo", "demo")]);
    let err = add_project(&api, &ProjectForm::with_name("demo")).unwrap_err();
    assert!(matches!(err, ApiError::Status { status: 400, .. }));
    assert!(!err.is_retryable());
}

#[test]
fn test_add_project_network_failure_is_retryable() {
    let api = FakeApi { unreachable: true, ..FakeApi::default() };
    let err = add_project(&api, &ProjectForm::with_name("Demo")).unwrap_err();
    assert!(err.is_retryable());
    assert!(render::error(&err).contains("try again"));
}

#[test]
fn test_project_not_found_is_distinct() {
    let api = FakeApi::with(&[("Demo", "demo")]);
    let err = project(&api, "missing").unwrap_err();
    assert!(matches!(err, ApiError::NotFound(ref dir) if dir == "missing"));
    assert!(render::error(&err).starts_with("Not found"));
}

#[test]
fn test_project_fetch_is_idempotent() {
    let api = FakeApi::with(&[("Demo", "demo")]);
    let first = project(&api, "demo").unwrap();
    let second = project(&api, "demo").unwrap();
    assert_eq!(first, second);
    assert_eq!(api.calls.get(), 2);
}

#[test]
fn test_created_project_is_fetchable_via_redirect() {
    let api = FakeApi::default();
    let Route::Project(dir) = add_project(&api, &ProjectForm::with_name("New Thing")).unwrap() else {
        panic!("expected a detail redirect");
    };
    let p = project(&api, &dir).unwrap();
    assert_eq!(p.name, "New Thing");
    assert_eq!(p.directory_name, directory_name(&p.name));
}

#[test]
fn test_edit_loads_project() {
    let api = FakeApi::with(&[("Demo", "demo")]);
    let p = edit(&api, "demo").unwrap();
    let view = render::edit(&p);
    assert!(view.contains("/edit/demo"));
    assert!(view.contains("name: Demo"));
}

#[test]
fn test_edit_action_changes_nothing() {
    let api = FakeApi::with(&[("Demo", "demo")]);
    assert_eq!(edit_action("demo", &ProjectForm::with_name("Renamed")), None);
    assert_eq!(project(&api, "demo").unwrap().name, "Demo");
}

#[test]
fn test_route_paths() {
    assert_eq!(Route::Index.to_string(), "/");
    assert_eq!(Route::AddProject.to_string(), "/add-project");
    assert_eq!(Route::Edit("demo".into()).to_string(), "/edit/demo");
}
