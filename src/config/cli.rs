use crate::config::settings::{AccessToken, PortalSettings, DEFAULT_PUBLIC_DIR};
use crate::utils::error::Result;
use crate::utils::validation::{validate_required_field, Validate};
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "cobj-portal")]
#[command(about = "Web front end for listing and creating HubSpot custom object records")]
pub struct CliConfig {
    /// Private app token used as the bearer token
    #[arg(long, env = "HUBSPOT_TOKEN", hide_env_values = true)]
    pub hubspot_token: Option<AccessToken>,

    /// Object type identifier, e.g. 2-123456 or p_pets
    #[arg(long, env = "HUBSPOT_OBJECT")]
    pub hubspot_object: Option<String>,

    #[arg(long, env = "PORT", default_value = "3000")]
    pub port: u16,

    #[arg(long, env = "PUBLIC_DIR", default_value = DEFAULT_PUBLIC_DIR)]
    pub public_dir: String,

    #[arg(long, help = "Emit logs as JSON lines")]
    pub json_logs: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    pub fn into_settings(self) -> Result<PortalSettings> {
        self.validate()?;

        let token = validate_required_field("hubspot_token", &self.hubspot_token)?.clone();
        let object_type = validate_required_field("hubspot_object", &self.hubspot_object)?.clone();

        let settings = PortalSettings::new(token, object_type)?
            .with_port(self.port)
            .with_public_dir(self.public_dir);
        settings.validate()?;
        Ok(settings)
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_required_field("hubspot_token", &self.hubspot_token)?;
        validate_required_field("hubspot_object", &self.hubspot_object)?;
        Ok(())
    }
}
