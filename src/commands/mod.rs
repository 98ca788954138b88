//! Run orchestration for org-admin.
//!
//! A run is a single pass with no retries:
//!
//! 1. Resolve the raw flags into an [`ActionRequest`]
//! 2. Load configuration and the access token
//! 3. Dispatch the one API call for the action
//! 4. Append one audit record describing the outcome
//! 5. Print the report
//!
//! Invalid input, configuration and token problems stop the run before any
//! network call and are not logged. API failures are logged, then returned.


use crate::audit::{AuditLog, LogRecord, current_actor};
use crate::cli::Cli;
use crate::config::{Config, TeamPrivacy, Token};
use crate::dispatch::{Dispatcher, Report};
use crate::error::Result;
use crate::github::{GitHubClient, OrgApi};
use crate::request::{ActionRequest, resolve};

/// Execute one invocation of the CLI.
pub fn run(cli: &Cli) -> Result<()> {
    let request = resolve(cli.raw_args())?;

    let config = Config::discover(cli.config.as_deref())?
        .with_overrides(cli.api_url.clone(), cli.log_file.clone())?;
    let token = Token::from_env()?;
    let client = GitHubClient::new(&config, &token)?;
    let log = AuditLog::new(&config.log_file);

    let report = execute(
        &client,
        &request,
        &log,
        &current_actor(),
        config.team_privacy,
    )?;

    println!("{}", report);
    println!("  Logged to: {}", log.path().display());
    Ok(())
}

/// Dispatch `request` and record the outcome in `log`.
///
/// Exactly one record is appended whether or not the API call succeeds.
/// A request the dispatcher refuses before calling out is not logged.
///
/// # Errors
///
/// - The API error, if the call failed (a log failure alongside it is
///   only reported as a warning)
/// - `AdminError::LogWrite` if the call succeeded but the record could
///   not be written; the error says the change was already applied
pub fn execute<A: OrgApi>(
    api: &A,
    request: &ActionRequest,
    log: &AuditLog,
    actor: &str,
    team_privacy: TeamPrivacy,
) -> Result<Report> {
    let outcome = Dispatcher::new(api)
        .with_team_privacy(team_privacy)
        .dispatch(request);

    if matches!(&outcome, Err(err) if !err.is_api_failure()) {
        return outcome;
    }

    let record = LogRecord::for_request(request, actor);
    let record = match &outcome {
        Ok(report) => record.succeeded(report.summary.clone(), report.access_level.clone()),
        Err(err) => {
            tracing::info!(action = %request.action, error = %err, "action failed");
            record.failed(err)
        }
    };

    let logged = log.append(&record);

    match (outcome, logged) {
        (Ok(report), Ok(())) => Ok(report),
        (Ok(_), Err(log_err)) => {
            Err(log_err.after_action(request.action.as_str(), request.action.is_mutation()))
        }
        (Err(err), Ok(())) => Err(err),
        (Err(err), Err(log_err)) => {
            tracing::warn!(
                path = %log.path().display(),
                error = %log_err.after_action(request.action.as_str(), false),
                "failed action could not be logged"
            );
            Err(err)
        }
    }
}
