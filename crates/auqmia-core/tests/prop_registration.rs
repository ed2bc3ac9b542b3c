use auqmia_core::RegistrationInput;
use proptest::prelude::*;
use serde_json::{Map, Value};

fn input(state: &str, city: &str, district: &str, extra: Map<String, Value>) -> RegistrationInput {
    RegistrationInput {
        name: "Ana".to_string(),
        email: "ana@example.com".to_string(),
        password: "secret".to_string(),
        confirm_password: "secret".to_string(),
        state: state.to_string(),
        district: district.to_string(),
        city: city.to_string(),
        extra,
    }
}

#[test]
fn normalize_keeps_user_fields() {
    let request = input("rj", "Niteroi", "Icarai", Map::new()).normalize();
    assert_eq!(request.name, "Ana");
    assert_eq!(request.email, "ana@example.com");
    assert_eq!(request.password, "secret");
    assert_eq!(request.address.state, "RJ");
    assert_eq!(request.address.city, "Niteroi");
    assert_eq!(request.address.district, "Icarai");
}

proptest! {
    #[test]
    fn normalize_uppercases_state_only(
        state in "[a-zA-Z]{2}",
        city in "[a-z ]{1,12}",
        district in "[a-z ]{1,12}",
    ) {
        let request = input(&state, &city, &district, Map::new()).normalize();
        prop_assert_eq!(request.address.state, state.to_uppercase());
        prop_assert_eq!(request.address.city, city);
        prop_assert_eq!(request.address.district, district);
    }

    #[test]
    fn normalize_passes_extra_fields_through(
        entries in proptest::collection::btree_map("x_[a-z]{1,8}", "[a-z0-9]{0,8}", 0..6),
    ) {
        let extra: Map<String, Value> = entries
            .iter()
            .map(|(key, value)| (key.clone(), Value::String(value.clone())))
            .collect();
        let request = input("sp", "c", "d", extra.clone()).normalize();
        let body = serde_json::to_value(&request).expect("serialize");

        prop_assert!(body.get("confirm_password").is_none());
        for (key, value) in &extra {
            prop_assert_eq!(body.get(key), Some(value));
        }
    }
}
