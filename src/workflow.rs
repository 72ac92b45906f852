use crate::checker::{CheckOutcome, CheckReport, UpdateChecker};
use crate::cli::CheckArgs;
use crate::config::{self, CheckConfig};
use crate::error::{IfwupError, Result};
use crate::launcher::MaintenanceTool;
use colored::Colorize;
use indicatif::ProgressBar;
use std::path::PathBuf;
use std::thread;
use std::time::Duration;

/// Run an update check and report the outcome on stdout.
pub fn execute_check(args: &CheckArgs, json: bool) -> Result<()> {
    let config = build_config(args)?;
    let current_version = config.current_version.clone();

    if json {
        let outcome = run_check(config, false)?;
        let report = CheckReport::new(&outcome, &current_version);
        println!("{}", serde_json::to_string_pretty(&report)?);

        if !outcome.is_success() {
            return Err(IfwupError::CheckFailed(outcome.code));
        }
        return Ok(());
    }

    println!("{}", "Checking for available updates...".cyan().bold());
    println!("   Local version: {}", current_version.bright_cyan());

    let outcome = run_check(config, true)?;
    if !outcome.is_success() {
        return Err(IfwupError::CheckFailed(outcome.code));
    }

    println!("{}", format!("✓ Answered by the {}", outcome.source).green());

    if outcome.has_newer_version {
        println!("\n{}", "⬆ A newer version is available!".green().bold());
        println!(
            "{}",
            "Run `ifwup update` to start the maintenance tool.".dimmed()
        );
    } else {
        println!("\n{}", "✨ Everything is up to date!".green().bold());
    }

    Ok(())
}

/// Run an update check and hand off to the maintenance tool when a newer
/// version is found.
pub fn execute_update(args: &CheckArgs, tool: Option<PathBuf>) -> Result<()> {
    println!("{}", "Starting update process...".cyan().bold());

    println!("\n{}", "1. Checking for available updates...".yellow());
    let config = build_config(args)?;
    let outcome = run_check(config, true)?;

    if !outcome.is_success() {
        return Err(IfwupError::CheckFailed(outcome.code));
    }

    if !outcome.has_newer_version {
        println!("{}", "✨ Everything is up to date!".green().bold());
        return Ok(());
    }

    println!("{}", "✓ A newer version is available".green());

    println!("\n{}", "2. Handing off to the maintenance tool...".yellow());
    if !MaintenanceTool::system().launch(tool) {
        return Err(IfwupError::Launch(
            "maintenance tool could not be started".to_string(),
        ));
    }

    println!("{}", "✓ Maintenance tool started, exiting".green());

    Ok(())
}

/// Start the maintenance tool directly, without checking first.
pub fn execute_launch(tool: Option<PathBuf>) -> Result<()> {
    println!("{}", "Launching the maintenance tool...".cyan().bold());

    if !MaintenanceTool::system().launch(tool) {
        return Err(IfwupError::Launch(
            "maintenance tool could not be started".to_string(),
        ));
    }

    println!("{}", "✓ Maintenance tool started".green());

    Ok(())
}

fn build_config(args: &CheckArgs) -> Result<CheckConfig> {
    if let Some(url) = &args.remote_manifest {
        config::validate_manifest_url(url)?;
    }

    Ok(CheckConfig {
        current_version: args.app_version.clone(),
        remote_manifest_url: args.remote_manifest.clone(),
        feed_owner: args.feed_owner.clone(),
        feed_repo: args.feed_repo.clone(),
        local_manifest_path: args.local_manifest.clone(),
    })
}

/// Run the check on a background thread, with a spinner while waiting.
fn run_check(config: CheckConfig, show_spinner: bool) -> Result<CheckOutcome> {
    let pending = UpdateChecker::new(config)?.spawn();

    if !show_spinner {
        return Ok(pending.wait());
    }

    let spinner = ProgressBar::new_spinner();
    spinner.set_message("Contacting update sources...");
    while !pending.is_finished() {
        spinner.tick();
        thread::sleep(Duration::from_millis(120));
    }

    let outcome = pending.wait();
    spinner.finish_and_clear();

    Ok(outcome)
}
