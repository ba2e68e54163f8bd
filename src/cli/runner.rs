//! CLI runner - executes commands

use crate::cli::commands::{Cli, Commands, OutputFormat};
use crate::cli::server;
use crate::config::{declare_config, ConnectorConfig, ConnectorSettings, DateRange};
use crate::connector::{Connector, DataRequest, SmsConnector};
use crate::error::{Error, Result};
use crate::schema::SchemaRegistry;
use crate::types::declare_auth_type;
use serde::Serialize;
use std::sync::Arc;
use tracing::info;

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the CLI command
    ///
    /// Declarations are answered without reading settings or secrets.
    pub async fn run(&self) -> Result<()> {
        match &self.cli.command {
            Commands::AuthType => self.emit(&declare_auth_type()),
            Commands::Config => self.emit(&declare_config()),
            Commands::Schema => self.emit(&SchemaRegistry::default().schema()),
            Commands::Fetch {
                fields,
                account_sid,
                start_date,
                end_date,
            } => {
                let range = resolve_date_range(
                    start_date.as_deref(),
                    end_date.as_deref(),
                    chrono::Local::now().date_naive(),
                )?;
                let request = DataRequest::new(
                    fields.as_slice(),
                    &ConnectorConfig::new(account_sid),
                    range,
                );
                let connector = SmsConnector::from_settings(&self.settings()?)?;
                self.fetch(&connector, &request).await
            }
            Commands::Serve { port } => {
                let connector = SmsConnector::from_settings(&self.settings()?)?;
                info!("Serving connector on port {port}");
                server::serve(Arc::new(connector), *port).await
            }
        }
    }

    /// Load settings from the file given on the command line, or defaults
    fn settings(&self) -> Result<ConnectorSettings> {
        match &self.cli.settings {
            Some(path) => ConnectorSettings::load(path),
            None => Ok(ConnectorSettings::default()),
        }
    }

    async fn fetch(&self, connector: &dyn Connector, request: &DataRequest) -> Result<()> {
        match connector.fetch_data(request).await {
            Ok(response) => self.emit(&response),
            Err(err) => {
                if connector.is_diagnostic_mode_enabled() {
                    eprintln!("{}", err.debug_text);
                }
                Err(Error::config(err.text))
            }
        }
    }

    fn emit<T: Serialize>(&self, value: &T) -> Result<()> {
        println!("{}", render(value, self.cli.format)?);
        Ok(())
    }
}

/// Serialize a value in the requested output format
pub(crate) fn render<T: Serialize>(value: &T, format: OutputFormat) -> Result<String> {
    let text = match format {
        OutputFormat::Json => serde_json::to_string(value)?,
        OutputFormat::Pretty => serde_json::to_string_pretty(value)?,
    };
    Ok(text)
}

/// Both dates, or neither (the host default window ending yesterday)
pub(crate) fn resolve_date_range(
    start: Option<&str>,
    end: Option<&str>,
    today: chrono::NaiveDate,
) -> Result<DateRange> {
    match (start, end) {
        (Some(start), Some(end)) => Ok(DateRange::new(start, end)),
        (None, None) => Ok(DateRange::last_28_days(today)),
        _ => Err(Error::config(
            "--start-date and --end-date must be given together",
        )),
    }
}
