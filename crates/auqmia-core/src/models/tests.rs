use super::*;
use crate::api::{LoginResponse, RegistrationInput, UserPatch};
use serde_json::json;

#[test]
fn record_id_keeps_wire_shape() {
    let numeric: RecordId = serde_json::from_value(json!(7)).expect("numeric id");
    let text: RecordId = serde_json::from_value(json!("abc")).expect("text id");

    assert_eq!(numeric, RecordId::Number(7));
    assert_eq!(numeric.to_string(), "7");
    assert_eq!(text.to_string(), "abc");
    assert_eq!(serde_json::to_value(&numeric).expect("serialize"), json!(7));
    assert_eq!(serde_json::to_value(&text).expect("serialize"), json!("abc"));
}

#[test]
fn user_preserves_unknown_fields() {
    let body = json!({
        "id": 1,
        "name": "Ana",
        "email": "ana@example.com",
        "address": { "state": "SP", "city": "Campinas", "district": "Centro" },
        "phone": "1199999",
        "avatar": null
    });
    let user: User = serde_json::from_value(body.clone()).expect("user");

    assert_eq!(user.id.to_string(), "1");
    assert_eq!(user.extra.get("phone"), Some(&json!("1199999")));
    assert_eq!(serde_json::to_value(&user).expect("serialize"), body);
}

#[test]
fn user_tolerates_missing_profile_fields() {
    let user: User = serde_json::from_value(json!({ "id": "u-1" })).expect("user");
    assert!(user.name.is_empty());
    assert!(user.address.is_none());
}

#[test]
fn animal_attributes_and_name() {
    let animal: Animal = serde_json::from_value(json!({
        "id": 3,
        "name": "Bidu",
        "species": "dog",
        "userId": 1
    }))
    .expect("animal");

    assert_eq!(animal.name(), Some("Bidu"));
    assert_eq!(animal.attributes.get("species"), Some(&json!("dog")));
    assert!(!animal.attributes.contains_key("id"));
}

#[test]
fn login_response_reads_camel_case_token() {
    let response: LoginResponse = serde_json::from_value(json!({
        "accessToken": "tok",
        "user": { "id": "1", "email": "a@b.com" }
    }))
    .expect("login response");
    assert_eq!(response.access_token, "tok");
    assert_eq!(response.user.id, RecordId::from("1"));
}

#[test]
fn registration_normalizes_address_and_drops_confirmation() {
    let input: RegistrationInput = serde_json::from_value(json!({
        "name": "Ana",
        "email": "ana@example.com",
        "password": "x",
        "confirm_password": "x",
        "state": "sp",
        "city": "c",
        "district": "d",
        "phone": "123"
    }))
    .expect("input");

    let body = serde_json::to_value(input.normalize()).expect("serialize");

    assert_eq!(
        body,
        json!({
            "name": "Ana",
            "email": "ana@example.com",
            "password": "x",
            "address": { "state": "SP", "city": "c", "district": "d" },
            "phone": "123"
        })
    );
    assert!(body.get("confirm_password").is_none());
    assert!(body.get("state").is_none());
}

#[test]
fn registration_extra_cannot_shadow_body_fields() {
    let mut input: RegistrationInput = serde_json::from_value(json!({
        "name": "Ana",
        "email": "ana@example.com",
        "password": "x",
        "confirm_password": "x",
        "state": "sp",
        "city": "c",
        "district": "d",
        "phone": "123"
    }))
    .expect("input");
    input
        .extra
        .insert("address".to_string(), json!({ "state": "XX" }));
    input.extra.insert("email".to_string(), json!("other@example.com"));

    let body = serde_json::to_string(&input.normalize()).expect("serialize");

    assert_eq!(body.matches("\"address\"").count(), 1);
    assert_eq!(body.matches("\"email\"").count(), 1);
    let value: serde_json::Value = serde_json::from_str(&body).expect("json");
    assert_eq!(value["address"]["state"], json!("SP"));
    assert_eq!(value["email"], json!("ana@example.com"));
    assert_eq!(value["phone"], json!("123"));
}

#[test]
fn user_patch_omits_absent_fields() {
    let patch = UserPatch {
        name: Some("Bia".to_string()),
        ..UserPatch::default()
    };
    assert!(!patch.is_empty());
    assert_eq!(
        serde_json::to_value(&patch).expect("serialize"),
        json!({ "name": "Bia" })
    );
    assert!(UserPatch::default().is_empty());
}
