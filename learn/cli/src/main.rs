//! Learn CLI - query a Learn-style LMS from the command line

use clap::{Parser, Subcommand};
use learn_lib::config::BASE_URL_VAR;
use learn_lib::courses::{self, CourseListOptions};
use learn_lib::memberships::{self, MembershipListOptions};
use learn_lib::users::{self, UserListOptions};
use learn_lib::{Id, LearnClient, LearnConfig, PageOptions, system};
use rest_call::ApiClient;
use rest_call::openapi::OutputFormat;
use serde::Serialize;
use tracing_subscriber::{filter::EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

type CliResult = Result<(), Box<dyn std::error::Error>>;

#[derive(Parser)]
#[command(name = "learn")]
#[command(about = "Query a Learn LMS through its public REST API", long_about = None)]
struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short = 'v', action = clap::ArgAction::Count, global = true)]
    log_verbosity: u8,

    /// Output logs as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Server root; overrides LEARN_BASE_URL
    #[arg(long, global = true, value_name = "URL")]
    base_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

/// Paging flags shared by list commands.
#[derive(clap::Args)]
struct ListArgs {
    /// Items per page
    #[arg(long, value_name = "N")]
    limit: Option<u32>,

    /// Follow next-page links and print every result
    #[arg(long)]
    all: bool,

    /// Upper bound on pages fetched with --all
    #[arg(long, default_value_t = 10, value_name = "N")]
    max_pages: usize,
}

impl ListArgs {
    fn paging(&self) -> PageOptions {
        PageOptions {
            limit: self.limit,
            ..PageOptions::default()
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Show the server version (no credentials needed)
    Version,

    /// Courses and organizations
    Courses {
        #[command(subcommand)]
        command: CourseCommands,
    },

    /// User accounts
    Users {
        #[command(subcommand)]
        command: UserCommands,
    },

    /// List the members of a course
    Members {
        /// Course id (`_7_1`, `courseId:BIO-101`, `externalId:...`)
        #[arg(value_name = "COURSE")]
        course: String,

        #[command(flatten)]
        list: ListArgs,
    },

    /// List every endpoint this client covers
    Endpoints,

    /// Print an OpenAPI document for the covered endpoints
    Openapi {
        /// Emit YAML instead of JSON
        #[arg(long)]
        yaml: bool,
    },
}

#[derive(Subcommand)]
enum CourseCommands {
    /// List courses
    List {
        /// Substring of the course name
        #[arg(long)]
        name: Option<String>,

        #[command(flatten)]
        list: ListArgs,
    },

    /// Show one course
    Get {
        #[arg(value_name = "COURSE")]
        course: String,
    },
}

#[derive(Subcommand)]
enum UserCommands {
    /// List users
    List {
        /// Substring of the user name
        #[arg(long)]
        user_name: Option<String>,

        #[command(flatten)]
        list: ListArgs,
    },

    /// Show one user
    Get {
        #[arg(value_name = "USER")]
        user: String,
    },
}

/// Initialize tracing subscriber based on verbosity and output format
fn init_tracing(verbose: u8, json: bool) {
    let base_filter = match std::env::var("RUST_LOG") {
        Ok(filter) => filter,
        Err(_) => match verbose {
            0 => "warn".to_string(),
            1 => "warn,learn_lib=info,rest_call=info".to_string(),
            2 => "info,learn_lib=debug,rest_call=debug".to_string(),
            _ => "debug,learn_lib=trace,rest_call=trace".to_string(),
        },
    };

    let filter = EnvFilter::try_new(&base_filter).unwrap_or_else(|_| EnvFilter::new("warn"));

    if json {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_level(true)
                    .with_thread_ids(false)
                    .with_file(verbose >= 3)
                    .with_line_number(verbose >= 3)
                    .with_writer(std::io::stderr)
                    .compact(),
            )
            .init();
    }
}

/// Environment configuration with `--base-url` taking precedence.
fn load_config(base_url: Option<&str>) -> Result<LearnConfig, rest_call::ConfigError> {
    LearnConfig::from_lookup(|name| match (name, base_url) {
        (BASE_URL_VAR, Some(url)) => Some(url.to_string()),
        _ => std::env::var(name).ok(),
    })
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> CliResult {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

async fn connect(base_url: Option<&str>) -> Result<LearnClient, Box<dyn std::error::Error>> {
    let config = load_config(base_url)?;
    Ok(LearnClient::connect(&config).await?)
}

async fn run(cli: Cli) -> CliResult {
    let base_url = cli.base_url.as_deref();

    match cli.command {
        Commands::Version => {
            let config = load_config(base_url)?;
            let api = ApiClient::builder(config.base_url)
                .timeout(config.timeout)
                .build()?;
            let version = api.execute(&system::get_version()?).await?;
            print_json(&version)
        }

        Commands::Courses { command } => {
            let client = connect(base_url).await?;
            match command {
                CourseCommands::List { name, list } => {
                    let call = courses::list_courses(&CourseListOptions {
                        name,
                        paging: list.paging(),
                        ..CourseListOptions::default()
                    })?;
                    if list.all {
                        print_json(&client.collect_all(call, list.max_pages).await?)
                    } else {
                        print_json(&client.execute(&call).await?)
                    }
                }
                CourseCommands::Get { course } => {
                    print_json(&client.execute(&courses::get_course(Id::from(course))?).await?)
                }
            }
        }

        Commands::Users { command } => {
            let client = connect(base_url).await?;
            match command {
                UserCommands::List { user_name, list } => {
                    let call = users::list_users(&UserListOptions {
                        user_name,
                        paging: list.paging(),
                        ..UserListOptions::default()
                    })?;
                    if list.all {
                        print_json(&client.collect_all(call, list.max_pages).await?)
                    } else {
                        print_json(&client.execute(&call).await?)
                    }
                }
                UserCommands::Get { user } => {
                    print_json(&client.execute(&users::get_user(Id::from(user))?).await?)
                }
            }
        }

        Commands::Members { course, list } => {
            let client = connect(base_url).await?;
            let call = memberships::list_course_memberships(
                Id::from(course),
                &MembershipListOptions {
                    paging: list.paging(),
                    ..MembershipListOptions::default()
                },
            )?;
            if list.all {
                print_json(&client.collect_all(call, list.max_pages).await?)
            } else {
                print_json(&client.execute(&call).await?)
            }
        }

        Commands::Endpoints => {
            for spec in learn_lib::catalog()? {
                println!(
                    "{:<22} {:<7} {:<14} {}",
                    spec.id,
                    spec.method.to_string(),
                    spec.tags.join(","),
                    spec.path
                );
            }
            Ok(())
        }

        Commands::Openapi { yaml } => {
            let server = match load_config(base_url) {
                Ok(config) => config.base_url.to_string(),
                Err(_) => "/".to_string(),
            };
            let format = if yaml {
                OutputFormat::Yaml
            } else {
                OutputFormat::Json
            };
            println!("{}", learn_lib::client::openapi_for(&server)?.generate(format)?);
            Ok(())
        }
    }
}

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing(cli.log_verbosity, cli.json);

    tracing::debug!("learn CLI starting");

    if let Err(e) = run(cli).await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
