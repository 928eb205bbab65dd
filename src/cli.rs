//! Command-line front end.
//!
//! # Usage
//!
//! ```bash
//! # Assemble an address
//! email-builder build --user-name name --domain email --sub-domain co --tld uk
//!
//! # Assemble and check it, as JSON
//! email-builder build -u name -d email -t com --check --json
//!
//! # Prompt for each part
//! email-builder build --interactive
//!
//! # Check addresses
//! email-builder validate nathan@gmail.com name@email
//! ```

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use colored::*;
use dialoguer::Input;
use serde::Serialize;
use std::process::ExitCode;

use crate::domain::{AddressParts, EmailBuilder};
use crate::error::EmailError;
use crate::utils::email_pattern::validate_email;

/// Assemble email addresses from parts and check them.
#[derive(Parser, Debug)]
#[command(name = "email-builder")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Assemble an address from its parts
    Build(BuildArgs),

    /// Check one or more addresses against the address pattern
    Validate {
        /// Addresses to check
        #[arg(required = true)]
        emails: Vec<String>,

        /// Print results as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Args, Debug, Default)]
pub struct BuildArgs {
    /// Part before the '@'
    #[arg(short, long)]
    pub user_name: Option<String>,

    /// Domain label (e.g. "email")
    #[arg(short, long)]
    pub domain: Option<String>,

    /// Sub-domain label (e.g. "co")
    #[arg(short, long)]
    pub sub_domain: Option<String>,

    /// Top-level domain (e.g. "uk")
    #[arg(short, long)]
    pub tld: Option<String>,

    /// Prompt for every part not given as a flag
    #[arg(short, long)]
    pub interactive: bool,

    /// Also check the assembled address
    #[arg(short, long)]
    pub check: bool,

    /// Print the result as JSON
    #[arg(long)]
    pub json: bool,
}

impl BuildArgs {
    fn parts(&self) -> AddressParts {
        AddressParts {
            user_name: self.user_name.clone(),
            domain: self.domain.clone(),
            sub_domain: self.sub_domain.clone(),
            tld: self.tld.clone(),
        }
    }
}

/// Outcome of checking a single address.
#[derive(Debug, Serialize)]
pub struct ValidationReport {
    pub email: String,
    pub valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

impl ValidationReport {
    pub fn new(email: impl Into<String>) -> Self {
        let email = email.into();
        let error = validate_email(&email).err();

        Self {
            valid: error.is_none(),
            code: error.as_ref().map(EmailError::code),
            reason: error.map(|e| e.to_string()),
            email,
        }
    }

    fn render(&self) -> String {
        match &self.reason {
            None => format!("{} {}", "valid  ".green().bold(), self.email),
            Some(reason) => format!(
                "{} {} {}",
                "invalid".red().bold(),
                self.email,
                format!("({reason})").as_str().bright_black()
            ),
        }
    }
}

/// Outcome of the `build` command.
#[derive(Debug, Serialize)]
pub struct BuildReport {
    pub email: String,
    pub parts: AddressParts,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub check: Option<ValidationReport>,
}

impl BuildReport {
    pub fn new(parts: AddressParts, check: bool) -> Self {
        let email = EmailBuilder::builder().set_parts(parts.clone()).build().email();
        let check = check.then(|| ValidationReport::new(email.clone()));

        Self {
            email,
            parts,
            check,
        }
    }
}

/// Runs the parsed command and returns the process exit status.
///
/// # Errors
///
/// Returns an error if an interactive prompt fails or JSON output cannot be produced.
pub fn run(cli: Cli) -> Result<ExitCode> {
    match cli.command {
        Commands::Build(args) => run_build(args),
        Commands::Validate { emails, json } => run_validate(emails, json),
    }
}

fn run_build(args: BuildArgs) -> Result<ExitCode> {
    let parts = if args.interactive {
        prompt_missing_parts(args.parts())?
    } else {
        args.parts()
    };

    let report = BuildReport::new(parts, args.check);
    tracing::info!(email = %report.email, "Built email address");

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else if let Some(check) = &report.check {
        println!("{}", check.render());
    } else {
        println!("{}", report.email);
    }

    Ok(match &report.check {
        Some(check) if !check.valid => ExitCode::FAILURE,
        _ => ExitCode::SUCCESS,
    })
}

fn run_validate(emails: Vec<String>, json: bool) -> Result<ExitCode> {
    let reports: Vec<ValidationReport> = emails.into_iter().map(ValidationReport::new).collect();
    let failed = reports.iter().filter(|r| !r.valid).count();

    tracing::info!(
        total = reports.len(),
        failed,
        "Validated email addresses"
    );

    if json {
        println!("{}", serde_json::to_string_pretty(&reports)?);
    } else {
        for report in &reports {
            println!("{}", report.render());
        }
    }

    Ok(if failed == 0 {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

/// Asks for every part that was not supplied on the command line.
///
/// An empty answer leaves the part absent.
fn prompt_missing_parts(parts: AddressParts) -> Result<AddressParts> {
    println!("{}", "Build an email address".bright_blue().bold());
    println!("{}", "Leave a part empty to skip it.".bright_black());
    println!();

    Ok(AddressParts {
        user_name: prompt_part("User name", parts.user_name)?,
        domain: prompt_part("Domain", parts.domain)?,
        sub_domain: prompt_part("Sub-domain", parts.sub_domain)?,
        tld: prompt_part("TLD", parts.tld)?,
    })
}

fn prompt_part(label: &str, current: Option<String>) -> Result<Option<String>> {
    if let Some(value) = current {
        return Ok(Some(value));
    }

    let value: String = Input::new()
        .with_prompt(label)
        .allow_empty(true)
        .interact_text()?;

    Ok(Some(value).filter(|v| !v.is_empty()))
}
