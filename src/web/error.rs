use crate::utils::error::PortalError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

/// Failure of a page handler. The detail is logged; the client only sees a
/// generic message.
#[derive(Debug)]
pub enum PageError {
    ListFailed(PortalError),
    CreateFailed(PortalError),
}

impl PageError {
    pub fn public_message(&self) -> &'static str {
        match self {
            PageError::ListFailed(_) => "Error fetching records from HubSpot.",
            PageError::CreateFailed(_) => "Error creating record in HubSpot.",
        }
    }

    fn source_error(&self) -> &PortalError {
        match self {
            PageError::ListFailed(err) | PageError::CreateFailed(err) => err,
        }
    }
}

impl IntoResponse for PageError {
    fn into_response(self) -> Response {
        let err = self.source_error();
        match err {
            PortalError::RemoteUnavailable { status, detail } => {
                tracing::error!(status = ?status, "{}: {}", self.public_message(), detail);
            }
            other => tracing::error!("{}: {}", self.public_message(), other),
        }
        tracing::debug!("Recovery suggestion: {}", err.recovery_suggestion());

        (StatusCode::INTERNAL_SERVER_ERROR, self.public_message()).into_response()
    }
}
