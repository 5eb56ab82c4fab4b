//! Server health command.

use anyhow::Result;
use clap::Args;
use serde::{Deserialize, Serialize};

use crate::client::ApiClient;
use crate::output::{self, OutputFormat};

#[derive(Args)]
pub struct HealthArgs {}

#[derive(Debug, Deserialize, Serialize)]
struct HealthInfo {
    status: String,
    version: String,
    timestamp: String,
}

pub async fn execute(_args: HealthArgs, client: &ApiClient, format: OutputFormat) -> Result<()> {
    // Health is unversioned and not enveloped.
    let health: HealthInfo = client.get_raw("/health").await?;

    match format {
        OutputFormat::Table => {
            output::print_success(&format!(
                "{} ({} v{})",
                health.status,
                client.base_url(),
                health.version
            ));
        }
        _ => output::print_item(&health, format),
    }
    Ok(())
}
