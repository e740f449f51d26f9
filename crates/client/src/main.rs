//! `acctrules`: command-line access to the accounting rules API.

use anyhow::Context;
use clap::Parser;
use serde::Serialize;

use acctrules_client::config::{API_TOKEN_ENV, API_URL_ENV, DEFAULT_API_URL};
use acctrules_client::{AccountingRulesClient, ClientConfig};
use acctrules_core::{
    ConflictDecision, ConflictQuery, ConflictResolution, Pagination, RuleId, RuleQuery, SolveUsing,
};

#[derive(Parser, Debug)]
#[command(
    name = "acctrules",
    version,
    about = "Inspect and manage accounting rules",
    after_help = "Examples:\n  acctrules list --event-type trade\n  acctrules fetch trade spend --counterparty uniswap-v2\n  acctrules resolve --using remote\n  acctrules resolve --using local --id 4 --id 9\n"
)]
struct Cli {
    /// Base URL of the API, including the version prefix
    #[arg(long, env = API_URL_ENV, default_value = DEFAULT_API_URL)]
    api_url: String,

    /// Bearer token
    #[arg(long, env = API_TOKEN_ENV, hide_env_values = true)]
    token: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, clap::Args)]
struct PageArgs {
    #[arg(long, default_value_t = 10)]
    limit: u32,

    #[arg(long, default_value_t = 0)]
    offset: u32,
}

impl From<PageArgs> for Pagination {
    fn from(args: PageArgs) -> Self {
        Pagination::new(args.limit, args.offset)
    }
}

#[derive(Debug, clap::Subcommand)]
enum Commands {
    /// List rules matching a filter
    List {
        #[command(flatten)]
        page: PageArgs,

        #[arg(long = "event-type")]
        event_types: Vec<String>,

        #[arg(long = "event-subtype")]
        event_subtypes: Vec<String>,

        #[arg(long = "counterparty")]
        counterparties: Vec<String>,

        /// Include rules without a counterparty in the counterparty filter
        #[arg(long)]
        general: bool,
    },

    /// Show the rule applying to an event type/subtype for a counterparty
    Fetch {
        event_type: String,
        event_subtype: String,

        #[arg(long)]
        counterparty: Option<String>,
    },

    /// Show rule categories and their linked identifiers
    Info,

    /// List conflicts between local and remote rules
    Conflicts {
        #[command(flatten)]
        page: PageArgs,
    },

    /// Resolve conflicts, all of them unless ids are given
    Resolve {
        /// Winning side: local or remote
        #[arg(long)]
        using: SolveUsing,

        /// Local rule id to resolve (repeatable)
        #[arg(long = "id")]
        ids: Vec<RuleId>,
    },

    /// Delete a rule
    Delete { id: RuleId },
}

fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn optional_list<T>(values: Vec<T>) -> Option<Vec<T>> {
    if values.is_empty() { None } else { Some(values) }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    acctrules_observability::init();

    let cli = Cli::parse();

    let mut config = ClientConfig::new(cli.api_url).context("invalid --api-url")?;
    if let Some(token) = cli.token {
        config = config.with_token(token);
    }
    let client = AccountingRulesClient::new(config);

    match cli.command {
        Commands::List {
            page,
            event_types,
            event_subtypes,
            counterparties,
            general,
        } => {
            let mut counterparties: Vec<Option<String>> =
                counterparties.into_iter().map(Some).collect();
            if general {
                counterparties.push(None);
            }

            let query = RuleQuery {
                event_types: optional_list(event_types),
                event_subtypes: optional_list(event_subtypes),
                counterparties: optional_list(counterparties),
                ..RuleQuery::new(page.into())
            };
            print_json(&client.list_rules(&query).await?)?;
        }
        Commands::Fetch {
            event_type,
            event_subtype,
            counterparty,
        } => {
            let query = RuleQuery::for_event(Pagination::default(), event_type, event_subtype);
            match client.fetch_rule(&query, counterparty.as_deref()).await? {
                Some(entry) => print_json(&entry)?,
                None => {
                    tracing::info!("no accounting rule applies");
                    println!("null");
                }
            }
        }
        Commands::Info => {
            print_json(&client.linked_mapping().await?)?;
        }
        Commands::Conflicts { page } => {
            let query = ConflictQuery::new(page.into());
            print_json(&client.list_conflicts(&query).await?)?;
        }
        Commands::Resolve { using, ids } => {
            let resolution = if ids.is_empty() {
                ConflictResolution::all(using)
            } else {
                ConflictResolution::selected(ids.into_iter().map(|local_id| ConflictDecision {
                    local_id,
                    solve_using: using,
                }))
            };
            print_json(&client.resolve_conflicts(&resolution).await?)?;
        }
        Commands::Delete { id } => {
            print_json(&client.delete_rule(id).await?)?;
        }
    }

    Ok(())
}
