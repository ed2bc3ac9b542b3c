use auqmia_core::{paths, LoginRequest, LoginResponse, RegisterRequest, User, UserPatch};

use crate::error::ClientError;
use crate::gateway::{Access, Gateway};

fn user_path(id: &str) -> Result<String, ClientError> {
    paths::user(id).ok_or_else(|| ClientError::InvalidId(id.to_string()))
}

#[derive(Clone)]
pub struct ProfileAccessor {
    gateway: Gateway,
}

impl ProfileAccessor {
    pub fn new(gateway: Gateway) -> Self {
        Self { gateway }
    }

    pub async fn current_user(&self, id: &str) -> Result<User, ClientError> {
        self.gateway.get(&user_path(id)?, Access::Authenticated).await
    }

    pub async fn update_user(&self, id: &str, patch: &UserPatch) -> Result<User, ClientError> {
        self.gateway
            .put(&user_path(id)?, patch, Access::Authenticated)
            .await
    }

    /// Creates the account only; the caller still has to log in.
    pub async fn register(&self, payload: &RegisterRequest) -> Result<(), ClientError> {
        self.gateway
            .post_unit(paths::REGISTER, payload, Access::Public)
            .await
    }

    pub async fn login(&self, credentials: &LoginRequest) -> Result<LoginResponse, ClientError> {
        // The auth endpoint answers wrong credentials with 400.
        match self
            .gateway
            .post(paths::LOGIN, credentials, Access::Public)
            .await
        {
            Err(ClientError::Validation { status, body }) => Err(ClientError::Auth { status, body }),
            other => other,
        }
    }
}
