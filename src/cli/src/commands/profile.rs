//! Profile management commands.

use anyhow::Result;
use clap::Subcommand;
use serde::{Deserialize, Serialize};

use crate::client::ApiClient;
use crate::output::{self, OutputFormat};

#[derive(Subcommand)]
pub enum ProfileCommands {
    /// Show the current profile
    Show,

    /// Update the profile (fields left out keep their current value)
    Update {
        #[arg(short, long)]
        name: Option<String>,

        #[arg(short, long)]
        email: Option<String>,

        #[arg(short, long)]
        location: Option<String>,

        #[arg(short, long)]
        bio: Option<String>,
    },
}

#[derive(Debug, Deserialize, Serialize)]
struct Profile {
    name: String,
    email: String,
    #[serde(default)]
    location: String,
    #[serde(default)]
    bio: String,
}

pub async fn execute(cmd: ProfileCommands, client: &ApiClient, format: OutputFormat) -> Result<()> {
    match cmd {
        ProfileCommands::Show => {
            let profile: Profile = client.get("/api/v1/profile").await?;
            output::print_item(&profile, format);
            Ok(())
        }

        ProfileCommands::Update {
            name,
            email,
            location,
            bio,
        } => {
            // The server replaces the profile wholesale, so start from the
            // current record and overlay the provided fields.
            let mut profile: Profile = client.get("/api/v1/profile").await?;
            if let Some(name) = name {
                profile.name = name;
            }
            if let Some(email) = email {
                profile.email = email;
            }
            if let Some(location) = location {
                profile.location = location;
            }
            if let Some(bio) = bio {
                profile.bio = bio;
            }

            let updated: Profile = client.put("/api/v1/profile", &profile).await?;
            output::print_success(&format!("Profile updated for {}", updated.name));
            Ok(())
        }
    }
}
