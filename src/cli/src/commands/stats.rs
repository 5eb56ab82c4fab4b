//! Application statistics commands.

use anyhow::Result;
use clap::Subcommand;
use serde::{Deserialize, Serialize};
use tabled::Tabled;

use crate::client::ApiClient;
use crate::output::{self, OutputFormat};

#[derive(Subcommand)]
pub enum StatsCommands {
    /// Per-status counts and total
    Summary,

    /// Monthly application volume, oldest month first
    Monthly,

    /// Most recently created applications
    Recent {
        /// Maximum number of results
        #[arg(short, long, default_value = "5")]
        limit: usize,
    },
}

// ── API types ───────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize, Serialize)]
struct StatusSummary {
    pending: usize,
    interview: usize,
    declined: usize,
    total: usize,
}

#[derive(Debug, Deserialize, Serialize, Tabled)]
struct MonthBucket {
    #[tabled(rename = "Month")]
    label: String,
    #[tabled(rename = "Applications")]
    count: usize,
}

#[derive(Debug, Deserialize, Serialize, Tabled)]
struct SummaryRow {
    #[tabled(rename = "Status")]
    status: String,
    #[tabled(rename = "Count")]
    count: usize,
}

#[derive(Debug, Deserialize, Serialize, Tabled)]
struct RecentRow {
    #[tabled(rename = "ID")]
    id: i64,
    #[tabled(rename = "Position")]
    position: String,
    #[tabled(rename = "Company")]
    company: String,
    #[tabled(rename = "Status")]
    status: String,
}

#[derive(Debug, Deserialize)]
struct JobInfo {
    id: i64,
    position: String,
    company: String,
    status: String,
}

// ── Execution ───────────────────────────────────────────────────────────────

pub async fn execute(cmd: StatsCommands, client: &ApiClient, format: OutputFormat) -> Result<()> {
    match cmd {
        StatsCommands::Summary => {
            let summary: StatusSummary = client.get("/api/v1/stats/summary").await?;
            let rows = vec![
                SummaryRow {
                    status: output::colorize_status("pending"),
                    count: summary.pending,
                },
                SummaryRow {
                    status: output::colorize_status("interview"),
                    count: summary.interview,
                },
                SummaryRow {
                    status: output::colorize_status("declined"),
                    count: summary.declined,
                },
                SummaryRow {
                    status: "total".to_string(),
                    count: summary.total,
                },
            ];
            output::print_list(&rows, format);
            Ok(())
        }

        StatsCommands::Monthly => {
            let series: Vec<MonthBucket> = client.get("/api/v1/stats/monthly").await?;
            output::print_list(&series, format);
            Ok(())
        }

        StatsCommands::Recent { limit } => {
            let jobs: Vec<JobInfo> = client
                .get(&format!("/api/v1/jobs/recent?limit={}", limit))
                .await?;
            let rows: Vec<RecentRow> = jobs
                .into_iter()
                .map(|job| RecentRow {
                    id: job.id,
                    position: job.position,
                    company: job.company,
                    status: output::colorize_status(&job.status),
                })
                .collect();
            output::print_list(&rows, format);
            Ok(())
        }
    }
}
