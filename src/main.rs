use anyhow::Context;
use clap::{Parser, Subcommand};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use vaccine_api_client::HttpBackend;
use vaccine_core::config::timeout_from_env_value;
use vaccine_core::constants::GET_PATIENT_ROUTE;
use vaccine_core::table::TableRow;
use vaccine_core::validation::required_patient_id;
use vaccine_core::{
    AddPatientFlow, ClientConfig, GetPatientFlow, History, Navigator, Route, SearchPatientFlow,
    VaccineIdBackend,
};

#[derive(Parser)]
#[command(name = "vaccine-id")]
#[command(about = "Vaccination record client for the vaccine-id API")]
struct Cli {
    /// Base URL of the vaccine-id API (overrides VACCINE_ID_ENDPOINT)
    #[arg(long, global = true)]
    endpoint: Option<String>,
    /// Bearer token attached to every request (overrides VACCINE_ID_ACCESS_TOKEN)
    #[arg(long, global = true)]
    token: Option<String>,
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a patient profile
    AddPatient {
        name: String,
        surname: String,
        /// Date of birth (M/D/YYYY)
        dob: String,
        /// Open the new patient's details afterwards
        #[arg(long)]
        open: bool,
    },
    /// Show a patient and their immunization history
    GetPatient {
        /// Patient id
        #[arg(long, conflicts_with = "url", required_unless_present = "url")]
        id: Option<String>,
        /// In-app URL, e.g. /get-patient?id=<id>
        #[arg(long)]
        url: Option<String>,
    },
    /// Add an immunization record to a patient
    AddRecord {
        /// Patient id
        #[arg(long)]
        id: String,
        /// Vaccine name
        name: String,
        manufacturer: String,
        lot: String,
        provider: String,
        /// Date given (M/D/YYYY)
        date: String,
    },
    /// Search patients by surname and date of birth
    SearchPatient {
        surname: String,
        /// Date of birth (M/D/YYYY)
        dob: String,
        /// Open the details of the result at this row (0-based)
        #[arg(long)]
        open: Option<usize>,
    },
    /// Check that the API is reachable
    Health,
}

/// Navigator of the command line: remembers every route and hands the latest one back so the
/// matching screen can be run.
#[derive(Default)]
struct AppRouter {
    history: History,
    pending: Option<Route>,
}

impl AppRouter {
    fn take_pending(&mut self) -> Option<Route> {
        self.pending.take()
    }
}

impl Navigator for AppRouter {
    fn navigate(&mut self, route: Route) {
        self.pending = Some(route.clone());
        self.history.navigate(route);
    }

    fn current(&self) -> Option<&Route> {
        self.history.current()
    }
}

/// Entry point of the vaccine-id client.
///
/// # Environment Variables
/// - `VACCINE_ID_ENDPOINT`: base URL of the API (required unless `--endpoint` is given)
/// - `VACCINE_ID_ACCESS_TOKEN`: bearer token (optional)
/// - `VACCINE_ID_TIMEOUT_SECS`: request timeout in seconds (default: 30)
///
/// # Errors
/// Returns an error if configuration is missing or invalid, or if the requested action fails.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("vaccine_id=info".parse()?)
                .add_directive("vaccine_core=info".parse()?),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let Some(command) = cli.command else {
        println!("Use 'vaccine-id --help' for commands");
        return Ok(());
    };

    let (endpoint, token) = resolve_connection(
        cli.endpoint,
        cli.token,
        std::env::var("VACCINE_ID_ENDPOINT").ok(),
        std::env::var("VACCINE_ID_ACCESS_TOKEN").ok(),
    )?;
    let timeout = timeout_from_env_value(std::env::var("VACCINE_ID_TIMEOUT_SECS").ok())?;

    let cfg = ClientConfig::new(endpoint, token, timeout)?;
    tracing::info!("-- Using vaccine-id API at {}", cfg.endpoint());
    let backend: Arc<dyn VaccineIdBackend> = Arc::new(HttpBackend::new(&cfg)?);
    let mut router = AppRouter::default();

    match command {
        Commands::AddPatient {
            name,
            surname,
            dob,
            open,
        } => {
            let mut flow = AddPatientFlow::new(backend.clone());
            let id = flow.add_patient(&name, &surname, &dob).await?;
            println!("Created patient with ID: {}", id);
            if open {
                flow.get_patient(&mut router)?;
            }
        }
        Commands::GetPatient { id, url } => {
            let route = match (id, url) {
                (_, Some(url)) => url.parse::<Route>()?,
                (Some(id), None) => Route::get_patient(&required_patient_id(&id)?),
                (None, None) => anyhow::bail!("either --id or --url is required"),
            };
            router.navigate(route);
        }
        Commands::AddRecord {
            id,
            name,
            manufacturer,
            lot,
            provider,
            date,
        } => {
            let route = Route::get_patient(&required_patient_id(&id)?);
            let mut flow = GetPatientFlow::new(backend.clone());
            flow.init(&route).await?;
            flow.create_record();
            flow.add_record(&name, &manufacturer, &lot, &provider, &date)
                .await?;
            print_patient(&flow);
        }
        Commands::SearchPatient { surname, dob, open } => {
            let mut flow = SearchPatientFlow::new(backend.clone());
            flow.search_patient(&surname, &dob).await?;
            if flow.results().is_empty() {
                println!("No patients found.");
            } else {
                print_table(flow.results());
            }
            if let Some(row) = open {
                flow.open_row(row, &mut router)?;
            }
        }
        Commands::Health => {
            let health = backend.health().await?;
            if !health.is_online() {
                anyhow::bail!("vaccine-id API reports status '{}'", health.status);
            }
            println!("vaccine-id API is {}", health.status);
        }
    }

    while let Some(route) = router.take_pending() {
        open_route(backend.clone(), &route).await?;
    }

    Ok(())
}

/// Picks the endpoint and token, command-line flags first, then the environment.
///
/// # Errors
/// Returns an error if neither `--endpoint` nor `VACCINE_ID_ENDPOINT` is given.
fn resolve_connection(
    endpoint_flag: Option<String>,
    token_flag: Option<String>,
    env_endpoint: Option<String>,
    env_token: Option<String>,
) -> anyhow::Result<(String, Option<String>)> {
    let endpoint = endpoint_flag
        .or(env_endpoint)
        .context("VACCINE_ID_ENDPOINT is not set and --endpoint was not given")?;
    Ok((endpoint, token_flag.or(env_token)))
}

/// Runs the screen a route points at.
async fn open_route(backend: Arc<dyn VaccineIdBackend>, route: &Route) -> anyhow::Result<()> {
    if route.path() != GET_PATIENT_ROUTE {
        anyhow::bail!("no screen for route {}", route);
    }
    let mut flow = GetPatientFlow::new(backend);
    flow.init(route).await?;
    print_patient(&flow);
    Ok(())
}

fn print_patient(flow: &GetPatientFlow) {
    if let Some(patient) = flow.patient() {
        println!(
            "ID: {}, Name: {} {}, DOB: {}",
            patient.id, patient.name, patient.surname, patient.dob
        );
    }
    if flow.records().is_empty() {
        println!("No immunization records.");
    } else {
        print_table(flow.records());
    }
}

fn print_table<T: TableRow>(rows: &[T]) {
    println!("{}", T::columns().join(" | "));
    for row in rows {
        println!("{}", row.cells().join(" | "));
    }
}
