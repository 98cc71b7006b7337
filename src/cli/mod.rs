use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result, bail};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};

use crate::api;
use crate::application::HolidayService;
use crate::config::Config;
use crate::domain::{Clock, FixedClock, HolidayRecord, SystemClock};
use crate::upstream::NagerClient;

/// Holiday Fetcher - public holiday summaries per country and year
#[derive(Parser)]
#[command(name = "holiday-fetcher")]
#[command(about = "Summarize public holidays from the Nager.Date API, as a server or one query at a time")]
#[command(version)]
pub struct Cli {
    /// Base URL of the holiday API (overrides HOLIDAYS_UPSTREAM_URL)
    #[arg(long, global = true)]
    pub upstream_url: Option<String>,

    /// Treat this date (YYYY-MM-DD) as today instead of the system date
    #[arg(long, global = true)]
    pub today: Option<String>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the HTTP server
    Serve {
        /// Listen address (overrides HOLIDAYS_ADDR)
        #[arg(long)]
        addr: Option<SocketAddr>,
    },

    /// Show the last three holidays already celebrated in a year
    Last {
        /// Two-letter country code (e.g., "US")
        #[arg(short, long)]
        country: String,

        /// Year to look up
        #[arg(short, long)]
        year: i32,

        /// Output format: json, table
        #[arg(long, default_value = "json")]
        format: String,
    },

    /// Count holidays not falling on a weekend, per country, largest first
    NonWeekends {
        /// Year to look up
        #[arg(short, long)]
        year: i32,

        /// Country codes, comma separated (e.g., "US,GB,FR")
        #[arg(short, long, value_delimiter = ',', required = true)]
        countries: Vec<String>,

        /// Output format: json, table
        #[arg(long, default_value = "json")]
        format: String,
    },

    /// List holidays two countries share, by date
    Common {
        /// Year to look up
        #[arg(short, long)]
        year: i32,

        /// First country; its holiday names are reported
        #[arg(long)]
        country1: String,

        /// Second country
        #[arg(long)]
        country2: String,

        /// Output format: json, table
        #[arg(long, default_value = "json")]
        format: String,
    },
}

impl Cli {
    fn config(&self) -> Result<Config> {
        let mut config = Config::from_env()?;
        if let Some(url) = &self.upstream_url {
            config.upstream_url = url.clone();
        }
        if let Commands::Serve { addr: Some(addr) } = &self.command {
            config.addr = *addr;
        }
        Ok(config)
    }

    fn clock(&self) -> Result<Arc<dyn Clock>> {
        match &self.today {
            Some(date_str) => {
                let date = NaiveDate::parse_from_str(date_str, "%Y-%m-%d").with_context(|| {
                    format!("Invalid date format '{}'. Use YYYY-MM-DD", date_str)
                })?;
                Ok(Arc::new(FixedClock(date)))
            }
            None => Ok(Arc::new(SystemClock)),
        }
    }

    pub async fn run(self) -> Result<()> {
        let config = self.config()?;
        let source = Arc::new(NagerClient::new(config.upstream_url.as_str()));
        let service = HolidayService::new(source, self.clock()?);

        match self.command {
            Commands::Serve { .. } => {
                tracing::info!(upstream = %config.upstream_url, "Starting holiday service");
                api::run_server(config.addr, Arc::new(service)).await?;
            }

            Commands::Last {
                country,
                year,
                format,
            } => {
                let holidays = service.last_celebrated_holidays(&country, year).await?;
                print_holidays(&holidays, &format)?;
            }

            Commands::NonWeekends {
                year,
                countries,
                format,
            } => {
                let counts = service.non_weekend_counts(year, &countries).await?;
                match format.as_str() {
                    "json" => println!("{}", serde_json::to_string_pretty(&counts)?),
                    "table" => {
                        for count in counts {
                            println!("{}", count);
                        }
                    }
                    other => bail!("Unknown format '{}'. Use table or json", other),
                }
            }

            Commands::Common {
                year,
                country1,
                country2,
                format,
            } => {
                let holidays = service.common_holidays(&country1, &country2, year).await?;
                print_holidays(&holidays, &format)?;
            }
        }

        Ok(())
    }
}

fn print_holidays(holidays: &[HolidayRecord], format: &str) -> Result<()> {
    match format {
        "json" => println!("{}", serde_json::to_string_pretty(holidays)?),
        "table" => {
            if holidays.is_empty() {
                println!("No holidays found.");
            } else {
                println!("{:<12} {}", "DATE", "NAME");
                println!("{}", "-".repeat(40));
                for holiday in holidays {
                    println!("{:<12} {}", holiday.date.to_string(), holiday.local_name);
                }
            }
        }
        other => bail!("Unknown format '{}'. Use table or json", other),
    }
    Ok(())
}
