//! JSON shapes at the response boundary.
#![cfg(feature = "serde")]

use serde_json::json;
use sidekick::help::{AskForHelp, HelpApi, InMemorySuperheroRepository, Problem};
use sidekick::{ErrorList, ErrorRecord};

#[test]
fn test_error_record_path_is_null_when_absent() {
    let record = ErrorRecord::new("name is blank", None);
    assert_eq!(
        serde_json::to_value(&record).unwrap(),
        json!({ "message": "name is blank", "path": null })
    );

    let record = ErrorRecord::new("name is blank", Some("name".to_string()));
    assert_eq!(
        serde_json::to_value(&record).unwrap(),
        json!({ "message": "name is blank", "path": "name" })
    );
}

#[test]
fn test_error_list_is_a_plain_array() {
    let errors = ErrorList::one("a").append("b");
    assert_eq!(serde_json::to_value(&errors).unwrap(), json!(["a", "b"]));
}

#[test]
fn test_command_body_deserializes() {
    let command: AskForHelp =
        serde_json::from_str(r#"{ "name": "luffy", "problem": "SuperVilain" }"#).unwrap();
    assert_eq!(command, AskForHelp::new("luffy", Problem::SuperVilain));
}

#[tokio::test]
async fn test_success_body() {
    let api = HelpApi::<InMemorySuperheroRepository>::default();
    let response = api
        .find_help(AskForHelp::new("luffy", Problem::SuperVilain))
        .await;

    assert_eq!(
        serde_json::to_value(&response).unwrap(),
        json!({
            "hero": {
                "id": "luffy",
                "name": "luffy",
                "isAvailable": true,
                "abilities": ["ElasticBody", "Strength", "DoNotGiveUp"],
                "weaknesses": ["Dumb", "Water"]
            },
            "matchingAbilities": ["ElasticBody"]
        })
    );
}

#[tokio::test]
async fn test_bad_request_body() {
    let api = HelpApi::<InMemorySuperheroRepository>::default();
    let response = api
        .find_help(AskForHelp::new("luffy", Problem::FellIntoWater))
        .await;

    assert_eq!(response.status_code(), 400);
    assert_eq!(
        serde_json::to_value(&response).unwrap(),
        json!([
            { "message": "Couldn't find the required ability for your problem", "path": null },
            { "message": "Weaknesses found : [Water]", "path": null }
        ])
    );
}
