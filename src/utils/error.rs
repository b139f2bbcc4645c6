use thiserror::Error;

#[derive(Error, Debug)]
pub enum PortalError {
    /// Network failure, timeout or non-success status from the remote store.
    #[error("Remote store unavailable: {detail}")]
    RemoteUnavailable { status: Option<u16>, detail: String },

    #[error("Missing configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Invalid configuration value for {field} ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl PortalError {
    pub fn remote_status(status: u16, detail: impl Into<String>) -> Self {
        PortalError::RemoteUnavailable {
            status: Some(status),
            detail: detail.into(),
        }
    }

    pub fn is_remote_unavailable(&self) -> bool {
        matches!(self, PortalError::RemoteUnavailable { .. })
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            PortalError::RemoteUnavailable { status: Some(code), .. } => {
                format!("HubSpot answered with status {}", code)
            }
            PortalError::RemoteUnavailable { status: None, .. } => {
                "HubSpot could not be reached".to_string()
            }
            PortalError::MissingConfigError { field } => {
                format!("Required setting {} is not set", field)
            }
            PortalError::InvalidConfigValueError { field, reason, .. } => {
                format!("Setting {} is invalid: {}", field, reason)
            }
            PortalError::IoError(e) => format!("File system error: {}", e),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            PortalError::RemoteUnavailable { status: Some(401), .. }
            | PortalError::RemoteUnavailable { status: Some(403), .. } => {
                "Check that HUBSPOT_TOKEN is a valid private app token with CRM object scopes"
            }
            PortalError::RemoteUnavailable { .. } => {
                "Check network access to api.hubapi.com and the HUBSPOT_OBJECT value"
            }
            PortalError::MissingConfigError { .. } | PortalError::InvalidConfigValueError { .. } => {
                "Set HUBSPOT_TOKEN and HUBSPOT_OBJECT in your environment or .env file"
            }
            PortalError::IoError(_) => "Check file permissions and available disk space",
        }
    }
}

impl From<reqwest::Error> for PortalError {
    fn from(err: reqwest::Error) -> Self {
        let detail = if err.is_timeout() {
            format!("request timed out: {}", err)
        } else {
            err.to_string()
        };

        PortalError::RemoteUnavailable {
            status: err.status().map(|s| s.as_u16()),
            detail,
        }
    }
}

pub type Result<T> = std::result::Result<T, PortalError>;
