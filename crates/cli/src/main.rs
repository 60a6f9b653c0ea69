// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! # redconnect
//!
//! Runs the donation wizard from the command line against a simulated
//! booking backend.
//!
//! - `redconnect centers` lists the donation centers
//! - `redconnect schedule --request jane.json` books the request in the file
//! - `redconnect history` shows the demo donor's dashboard and history

#![deny(
    clippy::pedantic,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod commands;
mod request;
mod simulated;

use std::io::Stdout;
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

use clap::{Parser, Subcommand};
use clap_verbosity_flag::{InfoLevel, Verbosity};
use color_eyre::Result;
use color_eyre::eyre::Context;
use redconnect_api::{AuthConfig, AuthService, PasswordPolicy};
use redconnect_domain::CenterDirectory;
use time::{Date, OffsetDateTime};
use tracing::level_filters::LevelFilter;
use tracing_log::AsTrace;

use crate::request::{RequestFile, parse_date};
use crate::simulated::SimulatedBooking;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<ExitCode> {
    color_eyre::install()?;
    let args: Args = Args::parse();
    tracing_subscriber::fmt()
        .with_max_level(args.log_level())
        .with_writer(std::io::stderr)
        .without_time()
        .init();

    args.run().await
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,

    #[command(flatten)]
    verbosity: Verbosity<InfoLevel>,
}

impl Args {
    async fn run(self) -> Result<ExitCode> {
        self.command.run().await
    }

    fn log_level(&self) -> LevelFilter {
        self.verbosity.log_level_filter().as_trace()
    }
}

#[derive(Clone, Debug, Subcommand)]
enum Command {
    /// List the donation centers
    #[command(visible_alias = "c")]
    Centers,

    /// Run the donation wizard with a request file and book it
    #[command(visible_alias = "s")]
    Schedule {
        /// JSON file with the form values (camelCase keys)
        #[arg(short, long)]
        request: PathBuf,

        /// Date the booking window starts from (YYYY-MM-DD); defaults to today
        #[arg(long, value_parser = parse_date)]
        today: Option<Date>,

        /// Simulated booking latency in milliseconds
        #[arg(long, default_value_t = 2000)]
        latency_ms: u64,

        /// Make the simulated backend reject the booking
        #[arg(long)]
        fail: bool,
    },

    /// Show the demo donor's dashboard and donation history
    #[command(visible_alias = "h")]
    History {
        /// Date the history is relative to (YYYY-MM-DD); defaults to today
        #[arg(long, value_parser = parse_date)]
        today: Option<Date>,
    },
}

impl Command {
    async fn run(self) -> Result<ExitCode> {
        let mut out: Stdout = std::io::stdout();
        let mut auth: AuthService =
            AuthService::new(AuthConfig::default(), PasswordPolicy::default());

        match self {
            Self::Centers => commands::centers(&mut out, &CenterDirectory::default())?,
            Self::Schedule {
                request,
                today,
                latency_ms,
                fail,
            } => {
                let text: String = std::fs::read_to_string(&request)
                    .wrap_err_with(|| format!("Failed to read {}", request.display()))?;
                let request: RequestFile = RequestFile::from_json(&text)?;
                let port: SimulatedBooking =
                    SimulatedBooking::new(Duration::from_millis(latency_ms), fail);

                let booked: bool =
                    commands::schedule(&mut out, &mut auth, &request, or_today(today), &port)
                        .await?;
                if !booked {
                    return Ok(ExitCode::FAILURE);
                }
            }
            Self::History { today } => commands::history(&mut out, &mut auth, or_today(today))?,
        }
        Ok(ExitCode::SUCCESS)
    }
}

fn or_today(today: Option<Date>) -> Date {
    today.unwrap_or_else(|| OffsetDateTime::now_utc().date())
}
