use std::io::Write;

use domain::{ImportError, ImportReport, Member};
pub mod app_state;
pub mod cli;
pub mod domain;
pub mod operations;
pub mod services;
pub mod utils;
use crate::utils::tracing::log_error_chain;
use app_state::{AppState, ImportConfig};

/// Provisions every member of a roster, one member at a time and in roster
/// order.
pub struct Importer {
    state: AppState,
    config: ImportConfig,
}

impl Importer {
    pub fn new(state: AppState, config: ImportConfig) -> Self {
        Self { state, config }
    }

    /// Writes the transcript of every command to `out`. Stops at the first
    /// command that cannot be launched; exit statuses never stop the run.
    #[tracing::instrument(name = "Importing roster", skip_all, fields(members = roster.len()))]
    pub async fn run<W: Write>(
        &self,
        roster: &[Member],
        out: &mut W,
    ) -> Result<ImportReport, ImportError> {
        let mut report = ImportReport::default();

        for member in roster {
            let outcome = operations::import_member(
                &self.state,
                &self.config,
                member,
                out,
            )
            .await
            .inspect_err(|e| log_error_chain(e))?;
            report.outcomes.push(outcome);
        }

        let summary = if self.config.dry_run {
            format!(
                "Dry run: {} members, no commands were launched",
                report.outcomes.len()
            )
        } else {
            format!(
                "Imported {} members, {} commands exited unsuccessfully",
                report.imported(),
                report.failed_commands()
            )
        };
        writeln!(out, "Done.")
            .and_then(|_| writeln!(out, "{}", summary))
            .map_err(ImportError::OutputError)?;

        tracing::info!(
            imported = report.imported(),
            failed_commands = report.failed_commands(),
            "import finished"
        );

        Ok(report)
    }
}
