use crate::domain::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{
    validate_non_empty_string, validate_path, validate_positive_number, Validate,
};
use std::fmt;
use std::path::PathBuf;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_PUBLIC_DIR: &str = "public";

/// Bearer token for the CRM API. Never printed.
#[derive(Clone, PartialEq, Eq)]
pub struct AccessToken(String);

impl AccessToken {
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl From<String> for AccessToken {
    fn from(value: String) -> Self {
        AccessToken(value)
    }
}

impl From<&str> for AccessToken {
    fn from(value: &str) -> Self {
        AccessToken(value.to_string())
    }
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AccessToken(***)")
    }
}

/// Process-wide settings, built once at startup and handed to the adapter
/// and the web layer.
#[derive(Debug, Clone)]
pub struct PortalSettings {
    access_token: AccessToken,
    object_type: String,
    pub port: u16,
    pub public_dir: PathBuf,
}

impl PortalSettings {
    pub fn new(access_token: impl Into<AccessToken>, object_type: impl Into<String>) -> Result<Self> {
        let settings = Self {
            access_token: access_token.into(),
            object_type: object_type.into(),
            port: DEFAULT_PORT,
            public_dir: PathBuf::from(DEFAULT_PUBLIC_DIR),
        };
        settings.validate()?;
        Ok(settings)
    }

    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    pub fn with_public_dir(mut self, public_dir: impl Into<PathBuf>) -> Self {
        self.public_dir = public_dir.into();
        self
    }
}

impl Validate for PortalSettings {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("hubspot_token", self.access_token.expose())?;
        validate_non_empty_string("hubspot_object", &self.object_type)?;
        validate_positive_number("port", self.port as usize, 1)?;
        validate_path("public_dir", &self.public_dir.to_string_lossy())?;
        Ok(())
    }
}

impl ConfigProvider for PortalSettings {
    fn access_token(&self) -> &str {
        self.access_token.expose()
    }

    fn object_type(&self) -> &str {
        &self.object_type
    }
}
