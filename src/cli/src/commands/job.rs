//! Job application management commands.
//!
//! Provides add, list, get, update, and delete operations. Delete asks for
//! confirmation unless `--yes` is passed; the server performs no
//! confirmation of its own.

use anyhow::{bail, Result};
use clap::{Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};
use tabled::Tabled;

use crate::client::ApiClient;
use crate::output::{self, OutputFormat};

#[derive(Subcommand)]
pub enum JobCommands {
    /// Add a new job application
    Add {
        /// Role applied for
        #[arg(short, long)]
        position: String,

        /// Company applied to
        #[arg(short, long)]
        company: String,

        /// Job location
        #[arg(short, long)]
        location: String,

        /// Application status
        #[arg(short, long, value_enum, default_value_t = StatusArg::Pending)]
        status: StatusArg,

        /// Employment kind
        #[arg(short = 'k', long = "type", value_enum, default_value_t = KindArg::FullTime)]
        kind: KindArg,
    },

    /// List job applications, optionally filtered
    List {
        /// Free-text search over position and company
        #[arg(short, long)]
        search: Option<String>,

        /// Filter by status (pending, interview, declined)
        #[arg(long, value_enum)]
        status: Option<StatusArg>,

        /// Filter by type (full-time, part-time, remote, internship)
        #[arg(long = "type", value_enum)]
        kind: Option<KindArg>,
    },

    /// Get one job application
    Get {
        /// Job ID
        id: i64,
    },

    /// Replace a job application (full-record update)
    Update {
        /// Job ID
        id: i64,

        #[arg(short, long)]
        position: String,

        #[arg(short, long)]
        company: String,

        #[arg(short, long)]
        location: String,

        #[arg(short, long, value_enum)]
        status: StatusArg,

        #[arg(short = 'k', long = "type", value_enum)]
        kind: KindArg,
    },

    /// Delete a job application
    Delete {
        /// Job ID
        id: i64,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
}

// ── Argument enums ──────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, ValueEnum, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusArg {
    Pending,
    Interview,
    Declined,
}

impl StatusArg {
    fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Interview => "interview",
            Self::Declined => "declined",
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum KindArg {
    FullTime,
    PartTime,
    Remote,
    Internship,
}

impl KindArg {
    fn as_str(&self) -> &'static str {
        match self {
            Self::FullTime => "full-time",
            Self::PartTime => "part-time",
            Self::Remote => "remote",
            Self::Internship => "internship",
        }
    }
}

// ── API types ───────────────────────────────────────────────────────────────

#[derive(Serialize)]
struct JobDraftRequest {
    position: String,
    company: String,
    location: String,
    status: StatusArg,
    #[serde(rename = "type")]
    kind: KindArg,
}

#[derive(Debug, Deserialize, Serialize)]
struct JobInfo {
    id: i64,
    position: String,
    company: String,
    location: String,
    status: String,
    #[serde(rename = "type")]
    kind: String,
    created_at: String,
}

#[derive(Debug, Deserialize)]
struct MutationOutcome {
    id: i64,
    #[serde(default)]
    matched: bool,
}

#[derive(Debug, Serialize, Tabled)]
struct JobRow {
    #[tabled(rename = "ID")]
    id: i64,
    #[tabled(rename = "Position")]
    position: String,
    #[tabled(rename = "Company")]
    company: String,
    #[tabled(rename = "Location")]
    location: String,
    #[tabled(rename = "Status")]
    status: String,
    #[tabled(rename = "Type")]
    kind: String,
    #[tabled(rename = "Created")]
    created: String,
}

impl From<JobInfo> for JobRow {
    fn from(job: JobInfo) -> Self {
        let created = job
            .created_at
            .parse::<chrono::DateTime<chrono::Utc>>()
            .map(|dt| dt.format("%Y-%m-%d").to_string())
            .unwrap_or(job.created_at);

        Self {
            id: job.id,
            position: job.position,
            company: job.company,
            location: job.location,
            status: output::colorize_status(&job.status),
            kind: job.kind,
            created,
        }
    }
}

// ── Execution ───────────────────────────────────────────────────────────────

/// Build the listing query as raw key/value pairs; the HTTP client
/// percent-encodes the values.
fn list_query(
    search: Option<String>,
    status: Option<StatusArg>,
    kind: Option<KindArg>,
) -> Vec<(&'static str, String)> {
    let mut query = Vec::new();
    if let Some(search) = search {
        query.push(("search", search));
    }
    if let Some(status) = status {
        query.push(("status", status.as_str().to_string()));
    }
    if let Some(kind) = kind {
        query.push(("type", kind.as_str().to_string()));
    }
    query
}

pub async fn execute(cmd: JobCommands, client: &ApiClient, format: OutputFormat) -> Result<()> {
    match cmd {
        JobCommands::Add {
            position,
            company,
            location,
            status,
            kind,
        } => {
            let request = JobDraftRequest {
                position,
                company,
                location,
                status,
                kind,
            };
            let job: JobInfo = client.post("/api/v1/jobs", &request).await?;
            output::print_success(&format!(
                "Added application for {} at {} (id {})",
                job.position, job.company, job.id
            ));
            Ok(())
        }

        JobCommands::List {
            search,
            status,
            kind,
        } => {
            let query = list_query(search, status, kind);
            let jobs: Vec<JobInfo> = client.get_with_query("/api/v1/jobs", &query).await?;
            let rows: Vec<JobRow> = jobs.into_iter().map(JobRow::from).collect();
            output::print_list(&rows, format);
            Ok(())
        }

        JobCommands::Get { id } => {
            let job: JobInfo = client.get(&format!("/api/v1/jobs/{}", id)).await?;
            output::print_item(&job, format);
            Ok(())
        }

        JobCommands::Update {
            id,
            position,
            company,
            location,
            status,
            kind,
        } => {
            let request = JobDraftRequest {
                position,
                company,
                location,
                status,
                kind,
            };
            let outcome: MutationOutcome =
                client.put(&format!("/api/v1/jobs/{}", id), &request).await?;
            if outcome.matched {
                output::print_success(&format!("Updated job {}", outcome.id));
            } else {
                output::print_info(&format!("No job with id {}; nothing updated", outcome.id));
            }
            Ok(())
        }

        JobCommands::Delete { id, yes } => {
            if !yes && !output::confirm(&format!("Delete job {}?", id)) {
                bail!("aborted");
            }

            let outcome: MutationOutcome = client.delete(&format!("/api/v1/jobs/{}", id)).await?;
            if outcome.matched {
                output::print_success(&format!("Deleted job {}", outcome.id));
            } else {
                output::print_info(&format!("No job with id {}; nothing deleted", outcome.id));
            }
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_query_passes_values_raw() {
        // Reserved characters are left to the HTTP client to encode, never
        // concatenated into the URL by hand.
        let query = list_query(
            Some("staff & principal".to_string()),
            Some(StatusArg::Pending),
            Some(KindArg::FullTime),
        );
        assert_eq!(
            query,
            vec![
                ("search", "staff & principal".to_string()),
                ("status", "pending".to_string()),
                ("type", "full-time".to_string()),
            ]
        );
    }

    #[test]
    fn test_list_query_omits_unset_dimensions() {
        assert!(list_query(None, None, None).is_empty());

        let query = list_query(None, None, Some(KindArg::Remote));
        assert_eq!(query, vec![("type", "remote".to_string())]);
    }
}
