//! CSV export for administrators

use std::str::FromStr;

use chrono::{DateTime, Utc};
use csv::Writer;
use swap_core::access::require_admin;
use swap_core::Caller;
use tracing::{info, instrument, warn};

use crate::dto::CsvExport;

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// What to export
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ExportKind {
    #[default]
    Users,
    Swaps,
    Feedback,
}

impl ExportKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Users => "users",
            Self::Swaps => "swaps",
            Self::Feedback => "feedback",
        }
    }

    const fn header(self) -> [&'static str; 6] {
        match self {
            Self::Users => ["ID", "Username", "Email", "Date Joined", "Last Login", "Is Active"],
            Self::Swaps => ["ID", "Requester", "Recipient", "Status", "Created", "Updated"],
            Self::Feedback => ["ID", "Swap ID", "From User", "To User", "Rating", "Created"],
        }
    }
}

impl FromStr for ExportKind {
    type Err = ServiceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "users" => Ok(Self::Users),
            "swaps" => Ok(Self::Swaps),
            "feedback" => Ok(Self::Feedback),
            other => Err(ServiceError::validation(format!(
                "Unknown export type '{other}', expected users, swaps or feedback"
            ))),
        }
    }
}

/// Attachment name for a type nobody exports; keeps it header-safe
fn fallback_filename(requested: &str) -> String {
    let stem: String = requested
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_'))
        .take(64)
        .collect();
    if stem.is_empty() {
        "export.csv".to_string()
    } else {
        format!("{stem}.csv")
    }
}

fn timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339()
}

fn yes_no(flag: bool) -> &'static str {
    if flag {
        "True"
    } else {
        "False"
    }
}

pub struct ExportService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ExportService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Render one table as CSV: a header row plus one row per record
    ///
    /// An unrecognised `kind` yields an empty attachment rather than an error.
    #[instrument(skip(self))]
    pub async fn export(&self, caller: Caller, kind: Option<&str>) -> ServiceResult<CsvExport> {
        require_admin(&caller)?;
        let kind = match kind.map(ExportKind::from_str).transpose() {
            Ok(kind) => kind.unwrap_or_default(),
            Err(err) => {
                let requested = kind.unwrap_or_default();
                warn!(error = %err, "Nothing to export");
                return Ok(CsvExport {
                    filename: fallback_filename(requested),
                    body: Vec::new(),
                });
            }
        };

        let mut writer = Writer::from_writer(Vec::new());
        writer.write_record(kind.header())?;

        let rows = match kind {
            ExportKind::Users => {
                let accounts = self.ctx.account_repo().list().await?;
                for a in &accounts {
                    writer.write_record([
                        a.id.to_string(),
                        a.username.clone(),
                        a.email.clone(),
                        timestamp(a.date_joined),
                        a.last_login.map(timestamp).unwrap_or_default(),
                        yes_no(a.is_active).to_string(),
                    ])?;
                }
                accounts.len()
            }
            ExportKind::Swaps => {
                let swaps = self.ctx.swap_repo().list_all(None).await?;
                for s in &swaps {
                    writer.write_record([
                        s.request.id.to_string(),
                        s.requester_username.clone(),
                        s.recipient_username.clone(),
                        s.request.status.to_string(),
                        timestamp(s.request.created_at),
                        timestamp(s.request.updated_at),
                    ])?;
                }
                swaps.len()
            }
            ExportKind::Feedback => {
                let feedback = self.ctx.feedback_repo().list_all().await?;
                for f in &feedback {
                    writer.write_record([
                        f.feedback.id.to_string(),
                        f.feedback.swap_request_id.to_string(),
                        f.from_username.clone(),
                        f.to_username.clone(),
                        f.feedback.rating.to_string(),
                        timestamp(f.feedback.created_at),
                    ])?;
                }
                feedback.len()
            }
        };

        let body = writer
            .into_inner()
            .map_err(|e| ServiceError::internal(format!("csv export failed: {e}")))?;

        info!(kind = kind.as_str(), rows, "Export rendered");

        Ok(CsvExport {
            filename: format!("{}.csv", kind.as_str()),
            body,
        })
    }
}
