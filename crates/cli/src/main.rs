//! Hostel Desk command-line interface
//!
//! Talks to the same backend as the desktop app and shares its session
//! store, so one `hosteldesk login` serves both.

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use colored::Colorize;
use hosteldesk_client::{ApiClient, ClientConfig, Session, SessionStore};
use hosteldesk_core::{RecordId, Resource};
use hosteldesk_desk::export;
use hosteldesk_model::{
    Bed, Complaint, EmergencyContact, Facility, Fee, Floor, FoodMenu, Hostel, HostelTiming,
    Leave, Payment, Resident, Room, Staff, User, Visitor,
};
use std::io::Write;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "hosteldesk", version, about = "Hostel management admin CLI")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Sign in and store the session for later commands
    Login {
        #[arg(short, long)]
        email: String,
        /// Password; prompted for when omitted
        #[arg(short, long)]
        password: Option<String>,
    },
    /// Drop the stored session
    Logout,
    /// Show the signed-in account
    Whoami,
    /// Print a resource collection
    List {
        /// Collection path (hostels, beds, residents, fees, ...)
        resource: String,
        /// Keep only records belonging to this hostel
        #[arg(long)]
        hostel_id: Option<String>,
        /// Keep only records belonging to this resident
        #[arg(long)]
        resident_id: Option<String>,
        /// Case-insensitive substring match on the display field
        #[arg(short, long)]
        search: Option<String>,
    },
    /// Write the payments CSV export
    ExportPayments {
        /// Output file; defaults to Payments_Export_<date>.csv
        #[arg(short, long)]
        out: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .init();

    let cli = Cli::parse();
    let config = ClientConfig::load();
    let client = ApiClient::new(&config);
    let store = SessionStore::new().context("no usable session store location")?;

    match cli.command {
        Command::Login { email, password } => {
            let password = match password {
                Some(p) => p,
                None => prompt("Password: ")?,
            };
            let session = client.login(&email, &password).await?;
            store.save(&session)?;
            println!(
                "{} signed in as {}",
                "ok:".green().bold(),
                session.display_name().bold()
            );
        }
        Command::Logout => {
            store.clear()?;
            println!("{} session cleared", "ok:".green().bold());
        }
        Command::Whoami => {
            let session = require_session(&store)?;
            println!(
                "{} <{}> via {}",
                session.user.name.bold(),
                session.user.email,
                client.base_url()
            );
        }
        Command::List {
            resource,
            hostel_id,
            resident_id,
            search,
        } => {
            let session = require_session(&store)?;
            let filter = ListFilter {
                hostel_id: hostel_id.map(RecordId::new),
                resident_id: resident_id.map(RecordId::new),
                search,
            };
            list_resource(&client, &session, &resource, &filter).await?;
        }
        Command::ExportPayments { out } => {
            let session = require_session(&store)?;
            let payments: Vec<Payment> = client.list(&session).await?;
            let path = out.unwrap_or_else(|| {
                PathBuf::from(export::export_file_name(
                    chrono::Local::now().date_naive(),
                ))
            });
            export::write_payments_csv(&path, &payments)?;
            println!(
                "{} {} payments written to {}",
                "ok:".green().bold(),
                payments.len(),
                path.display()
            );
        }
    }

    Ok(())
}

// ============================================================================
// Listing
// ============================================================================

struct ListFilter {
    hostel_id: Option<RecordId>,
    resident_id: Option<RecordId>,
    search: Option<String>,
}

impl ListFilter {
    fn keeps<T: Resource>(&self, record: &T) -> bool {
        if let Some(id) = &self.hostel_id {
            if record.foreign_key("hostelId") != Some(id) {
                return false;
            }
        }
        if let Some(id) = &self.resident_id {
            if record.foreign_key("residentId") != Some(id) {
                return false;
            }
        }
        if let Some(needle) = &self.search {
            if !record
                .search_text()
                .to_lowercase()
                .contains(&needle.to_lowercase())
            {
                return false;
            }
        }
        true
    }
}

async fn list_resource(
    client: &ApiClient,
    session: &Session,
    resource: &str,
    filter: &ListFilter,
) -> Result<()> {
    match resource {
        "hostels" => print_list::<Hostel>(client, session, filter).await,
        "floors" => print_list::<Floor>(client, session, filter).await,
        "rooms" => print_list::<Room>(client, session, filter).await,
        "beds" => print_list::<Bed>(client, session, filter).await,
        "residents" => print_list::<Resident>(client, session, filter).await,
        "staff" => print_list::<Staff>(client, session, filter).await,
        "users" => print_list::<User>(client, session, filter).await,
        "fees" => print_list::<Fee>(client, session, filter).await,
        "payments" => print_list::<Payment>(client, session, filter).await,
        "complaints" => print_list::<Complaint>(client, session, filter).await,
        "leaves" => print_list::<Leave>(client, session, filter).await,
        "visitors" => print_list::<Visitor>(client, session, filter).await,
        "emergency" => print_list::<EmergencyContact>(client, session, filter).await,
        "facilities" => print_list::<Facility>(client, session, filter).await,
        "food-menus" => print_list::<FoodMenu>(client, session, filter).await,
        "hostel-timings" => print_list::<HostelTiming>(client, session, filter).await,
        other => bail!("unknown resource '{other}'"),
    }
}

async fn print_list<T: Resource>(
    client: &ApiClient,
    session: &Session,
    filter: &ListFilter,
) -> Result<()> {
    let records: Vec<T> = client.list(session).await?;
    let total = records.len();
    let kept: Vec<&T> = records.iter().filter(|r| filter.keeps(*r)).collect();

    println!(
        "{} ({} of {})",
        T::LABEL.bold(),
        kept.len().to_string().bold(),
        total
    );
    for record in kept {
        println!("  {}  {}", record.id().to_string().dimmed(), record.search_text());
    }
    Ok(())
}

// ============================================================================
// Helpers
// ============================================================================

fn require_session(store: &SessionStore) -> Result<Session> {
    store
        .load()
        .context("not signed in; run `hosteldesk login` first")
}

fn prompt(label: &str) -> Result<String> {
    print!("{label}");
    std::io::stdout().flush()?;
    let mut line = String::new();
    std::io::stdin().read_line(&mut line)?;
    Ok(line.trim_end().to_string())
}
