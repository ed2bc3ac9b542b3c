use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::models::{Address, User};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoginResponse {
    pub user: User,
    #[serde(rename = "accessToken")]
    pub access_token: String,
}

/// Sign-up form as the user filled it in: flat address fields plus the
/// password confirmation. Anything else on the form lands in `extra`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegistrationInput {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub state: String,
    pub district: String,
    pub city: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Body accepted by `POST /register`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    pub address: Address,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl RegisterRequest {
    const FIELDS: &'static [&'static str] =
        &["name", "email", "password", "address", "confirm_password"];
}

impl RegistrationInput {
    /// Drops the confirmation, nests the address and uppercases the state
    /// code. Every other field is passed through as-is, except extra keys
    /// that would shadow a field of the request body.
    pub fn normalize(self) -> RegisterRequest {
        let RegistrationInput {
            name,
            email,
            password,
            confirm_password: _,
            state,
            district,
            city,
            mut extra,
        } = self;
        for key in RegisterRequest::FIELDS {
            extra.remove(*key);
        }
        RegisterRequest {
            name,
            email,
            password,
            address: Address {
                state: state.to_uppercase(),
                city,
                district,
            },
            extra,
        }
    }
}
