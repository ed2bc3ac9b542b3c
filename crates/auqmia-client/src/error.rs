use auqmia_keystore::KeystoreError;
use reqwest::StatusCode;

#[derive(thiserror::Error, Debug)]
pub enum ClientError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("request failed: {status} {body}")]
    Status { status: StatusCode, body: String },
    #[error("error decoding response body (status {status}): {message}")]
    Decode { status: StatusCode, message: String },
    #[error("authentication rejected: {status} {body}")]
    Auth { status: StatusCode, body: String },
    #[error("request rejected: {status} {body}")]
    Validation { status: StatusCode, body: String },
    #[error("not logged in")]
    Unauthenticated,
    #[error("token cannot be used as a bearer credential: {0}")]
    InvalidToken(String),
    #[error("not a usable record id: {0:?}")]
    InvalidId(String),
    #[error("session changed before the response arrived")]
    Superseded,
    #[error(transparent)]
    Storage(#[from] KeystoreError),
}

impl ClientError {
    pub(crate) fn from_status(status: StatusCode, body: String) -> Self {
        match status {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => ClientError::Auth { status, body },
            StatusCode::BAD_REQUEST | StatusCode::UNPROCESSABLE_ENTITY => {
                ClientError::Validation { status, body }
            }
            _ => ClientError::Status { status, body },
        }
    }

    pub fn status(&self) -> Option<StatusCode> {
        match self {
            ClientError::Status { status, .. }
            | ClientError::Decode { status, .. }
            | ClientError::Auth { status, .. }
            | ClientError::Validation { status, .. } => Some(*status),
            ClientError::Transport(err) => err.status(),
            _ => None,
        }
    }

    pub fn is_auth(&self) -> bool {
        matches!(self, ClientError::Auth { .. })
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(StatusCode::NOT_FOUND)
    }
}
