use resource_recipe::framework::{plural, singular, Action, Resource, ResourceError, ResourceOptions};
use serde_json::json;

fn example() -> Resource {
    Resource::new(ResourceOptions::new("app", "example")).expect("valid resource")
}

#[test]
fn test_names_follow_pluralisation() {
    let resource = example();
    assert_eq!(resource.many_name(), plural("example"));
    assert_eq!(resource.single_name(), singular("example"));
    assert_eq!(resource.many_name(), "examples");
}

#[test]
fn test_declared_from_json() {
    let options: ResourceOptions =
        serde_json::from_value(json!({ "scope": "shop", "name": "categories", "state": { "page": 3 } })).unwrap();
    let resource = Resource::new(options).unwrap();
    assert_eq!(resource.name(), "category");
    assert_eq!(resource.many_name(), "categories");
    assert_eq!(resource.initial_state().get("page"), Some(&json!(3)));
    assert_eq!(resource.localise("fetchPage").unwrap(), "shop/category/FETCH_PAGE");
}

#[test]
fn test_array_state_is_invalid() {
    let err = Resource::new(ResourceOptions::new("app", "example").with_state(json!([1]))).unwrap_err();
    assert!(matches!(err, ResourceError::InvalidArgument(_)));
}

#[test]
fn test_should_contain_add_but_not_unknown() {
    let resource = example();
    assert!(resource.action("add").is_ok());
    let err = resource.action("doesNotExist").unwrap_err();
    assert_eq!(
        err,
        ResourceError::NotFound("Action \"app/example/DOES_NOT_EXIST\" does not exist on the resource.".into())
    );
    let err = resource.thunk("doesNotExist").unwrap_err();
    assert_eq!(
        err,
        ResourceError::NotFound("Thunk \"app/example/DOES_NOT_EXIST\" does not exist on the resource.".into())
    );
}

#[test]
fn test_reset_returns_initial_state() {
    let resource = example();
    let reducer = resource.reducer();
    let mut state = reducer.reduce(None, &resource.action("add").unwrap().with(json!({ "id": 1 })));
    state = reducer.reduce(Some(&state), &resource.action("loading").unwrap().create());
    state = reducer.reduce(Some(&state), &resource.action("current").unwrap().with(json!({ "id": 1 })));
    assert_ne!(state, *resource.initial_state());

    let reset = reducer.reduce(Some(&state), &resource.action("reset").unwrap().create());
    assert_eq!(reset, *resource.initial_state());
}

#[test]
fn test_unknown_action_leaves_state_alone() {
    let resource = example();
    let reducer = resource.reducer();
    let state = resource.initial_state().clone();
    assert_eq!(reducer.reduce(Some(&state), &Action::new("unknown", None)), state);
}

#[test]
fn test_replace_with_unknown_id_is_noop() {
    let resource = example();
    let reducer = resource.reducer();
    let state = reducer.reduce(None, &resource.action("set").unwrap().with(json!([{ "id": 1, "v": 1 }])));
    let next = reducer.reduce(Some(&state), &resource.action("replace").unwrap().with(json!({ "id": 99, "v": 2 })));
    assert_eq!(next, state);
}

#[test]
fn test_replace_without_payload_targets_items_without_id() {
    let resource = example();
    let reducer = resource.reducer();
    let state = reducer.reduce(None, &resource.action("set").unwrap().with(json!([{ "id": 1 }, { "name": "x" }])));
    let next = reducer.reduce(Some(&state), &resource.action("replace").unwrap().create());
    assert_eq!(next.get("examples"), Some(&json!([{ "id": 1 }, {}])));
}

#[test]
fn test_combined_types_from_other_combined_matcher() {
    let mut resource = example();
    let pair = resource.combine(["archive", "hide"]).unwrap();
    assert_eq!(pair.to_string(), "app/example/ARCHIVE||app/example/HIDE");
    resource
        .add_method(vec![pair], |state, action| state.with("last", json!(action.kind)))
        .unwrap();
    let state = resource.reducer().reduce(None, &resource.action("hide").unwrap().create());
    assert_eq!(state.get("last"), Some(&json!("app/example/HIDE")));
}
