use anyhow::Error;
use clap::Parser;
use clap_verbosity_flag::Level as VerbosityLevel;
use clap_verbosity_flag::Verbosity;
use groupscope_dto as dto;
use groupscope_dto::client::{ClientConfig, V1Client};
use serde::Serialize;
use tracing::{debug, Level};
use tracing_subscriber::fmt::Subscriber;
use url::Url;

mod session;

use session::RosterSession;

#[derive(Debug, Parser)]
struct Opts {
    #[command(subcommand)]
    pub command: Command,

    /// Server to connect to.
    // In debug mode this is set to localhost:8000, while in production this is
    // set to the public groups API origin.
    #[clap(long, env = "GROUPSCOPE_SERVER", hide_env_values = true)]
    #[cfg_attr(debug_assertions, clap(default_value = "http://localhost:8000/"))]
    #[cfg_attr(
        not(debug_assertions),
        clap(default_value = "https://groups.roblox.com/")
    )]
    pub server: Url,

    /// Output pretty formatted JSON (no colors).
    #[clap(
        long,
        global = true,
        env = "GROUPSCOPE_PRETTY",
        hide_env_values = true
    )]
    pub pretty: bool,

    #[command(flatten)]
    pub verbose: Verbosity,
}

#[derive(Debug, Parser)]
enum Command {
    /// Look up a group's metadata.
    Get(GroupGetOpts),

    /// List a group's members, one page at a time or in full.
    Members(MembersOpts),
}

#[derive(Debug, Parser)]
pub struct GroupGetOpts {
    /// The group's numerical id.
    id: String,
}

#[derive(Debug, Parser)]
pub struct MembersOpts {
    /// The group's numerical id.
    id: String,

    #[clap(flatten)]
    params: dto::params::MemberListParams,

    /// Follow continuation cursors until the roster is exhausted.
    #[clap(long, conflicts_with = "cursor")]
    all: bool,

    /// Print a human-readable roster instead of JSON.
    #[clap(long)]
    table: bool,
}

fn output_json<J: Serialize>(value: J, opts: &Opts) -> Result<(), anyhow::Error> {
    println!(
        "{}",
        if opts.pretty {
            serde_json::to_string_pretty(&value)?
        } else {
            serde_json::to_string(&value)?
        }
    );
    Ok(())
}

fn client(opts: &Opts) -> Result<V1Client, anyhow::Error> {
    V1Client::new(ClientConfig {
        url_base: Some(opts.server.clone()),
    })
    .map_err(Error::msg)
}

fn print_group(group: &dto::groups::GroupDetails) {
    println!("{} (id {})", group.name, group.id);
    if !group.description.is_empty() {
        println!("{}", group.description);
    }
    println!(
        "{} members, created {}, {}",
        group.member_count,
        group.created.format("%Y-%m-%d"),
        if group.public_entry_allowed {
            "public entry"
        } else {
            "invite only"
        }
    );
}

fn print_members(members: &[dto::groups::GroupMember]) {
    for member in members {
        let tier = dto::groups::RankTier::from(&member.role);
        println!(
            "{:<24} @{:<24} {} (rank {}, {})",
            member.user.display_name, member.user.username, member.role.name, member.role.rank, tier
        );
    }
}

async fn group_get(opts: &Opts, get_opts: &GroupGetOpts) -> Result<(), anyhow::Error> {
    let id = session::parse_group_id(&get_opts.id)?;
    let response = client(opts)?.group_details(id).await?;
    output_json(response, opts)
}

async fn members(opts: &Opts, members_opts: &MembersOpts) -> Result<(), anyhow::Error> {
    members_opts.params.validate().map_err(Error::msg)?;
    let client = client(opts)?;

    if members_opts.all {
        let mut session = RosterSession::with_params(client, members_opts.params.clone());
        session.search(&members_opts.id).await?;
        while session.load_more().await? {}

        debug!(pages = session.pages_fetched(), "roster exhausted");

        if members_opts.table {
            if let Some(group) = session.group() {
                print_group(group);
                println!();
            }
            print_members(session.members());
            println!();
            println!("{} members loaded", session.members().len());
        } else {
            output_json(session.members(), opts)?;
        }
    } else {
        let id = session::parse_group_id(&members_opts.id)?;
        let page = client.group_members(id, &members_opts.params).await?;

        if members_opts.table {
            print_members(&page.data);
            if let Some(cursor) = &page.next_page_cursor {
                println!();
                println!("next cursor: {cursor}");
            }
        } else {
            output_json(page, opts)?;
        }
    }

    Ok(())
}

#[tokio::main]
async fn main() {
    let opts = Opts::parse();
    debug!(?opts);

    // Initialize tracing.
    let subscriber = Subscriber::builder();
    let subscriber = match opts.verbose.log_level() {
        Some(VerbosityLevel::Error) => subscriber.with_max_level(Level::ERROR),
        Some(VerbosityLevel::Warn) => subscriber.with_max_level(Level::WARN),
        Some(VerbosityLevel::Info) => subscriber.with_max_level(Level::INFO),
        Some(VerbosityLevel::Debug) => subscriber.with_max_level(Level::DEBUG),
        None | Some(VerbosityLevel::Trace) => subscriber.with_max_level(Level::TRACE),
    };
    subscriber
        .with_ansi(true)
        .with_writer(std::io::stderr)
        .init();

    let result = match &opts.command {
        Command::Get(get_opts) => group_get(&opts, get_opts).await,
        Command::Members(members_opts) => members(&opts, members_opts).await,
    };

    match result {
        Ok(()) => {}
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    }
}
