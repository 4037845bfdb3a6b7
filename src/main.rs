//! Kudos CLI entrypoint: runs one review page operation against a listing
//! snapshot.

mod cli;

use std::io::{self, Write};
use std::process::ExitCode;
use std::sync::Arc;

use camino::Utf8Path;
use kudos::files::read_utf8;
use kudos::{
    HttpReviewGateway, KudosConfig, PageError, ReviewListing, ReviewPage,
    StderrJsonlTelemetrySink, listing_path,
};
use ortho_config::OrthoConfig;

use cli::operation::run_operation;
use cli::output::write_report;

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            if writeln!(io::stderr().lock(), "{error}").is_err() {
                return ExitCode::FAILURE;
            }
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), PageError> {
    let config = load_config()?;

    let operation = config.operation()?;
    let listing = ReviewListing::read(&listing_path(config.require_listing()?))?;
    let gateway = HttpReviewGateway::new(config.gateway_config()?)?;

    let mut page = ReviewPage::new(listing, Arc::new(gateway));
    if config.telemetry {
        page = page.with_telemetry(Arc::new(StderrJsonlTelemetrySink));
    }
    if let Some(path) = config.edit_template.as_deref() {
        page = page.with_edit_template(read_utf8(Utf8Path::new(path), "edit template")?);
    }

    let report = run_operation(&mut page, operation).await?;
    write_report(&page, &report)
}

/// Loads configuration from CLI, environment, and files.
///
/// # Errors
///
/// Returns [`PageError::Configuration`] when ortho-config fails to parse
/// arguments or load configuration files.
fn load_config() -> Result<KudosConfig, PageError> {
    KudosConfig::load().map_err(|error| PageError::Configuration {
        message: error.to_string(),
    })
}
