mod commands;
mod logging;
mod render;

use anyhow::Result;
use calgrid_core::EventBook;
use calgrid_core::config::CalGridConfig;
use calgrid_core::time::parse_date;
use calgrid_core::view::ViewKind;
use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use log::debug;

use crate::commands::form::FieldArgs;

#[derive(Parser)]
#[command(name = "calgrid")]
#[command(about = "Month, week and day views over your local calendar events")]
#[command(version)]
struct Cli {
    /// Print debug logs to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show a month grid
    Month(ViewArgs),
    /// Show a week, hour by hour
    Week(ViewArgs),
    /// Show a single day, hour by hour
    Day(ViewArgs),
    /// Add an event (prompts for anything not given)
    Add {
        #[command(flatten)]
        fields: FieldArgs,

        /// Pre-fill the start time with the top of this hour (0-23), on
        /// today's date unless --date is given
        #[arg(long, value_parser = clap::value_parser!(u32).range(0..24))]
        hour: Option<u32>,
    },
    /// Change an event (prompts for every field if none are given)
    Edit {
        id: String,

        #[command(flatten)]
        fields: FieldArgs,
    },
    /// Delete an event
    Delete {
        id: String,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        force: bool,
    },
    /// Show an event's details
    Show { id: String },
    /// List events, grouped by day
    List {
        /// Only list events on this date (YYYY-MM-DD)
        #[arg(short, long)]
        date: Option<String>,

        /// Print the stored records as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show config and storage paths
    Config,
}

#[derive(Args)]
struct ViewArgs {
    /// Date the view is anchored on (YYYY-MM-DD), defaults to today
    #[arg(short, long)]
    date: Option<String>,

    /// Step this many months, weeks or days back
    #[arg(long, default_value_t = 0)]
    prev: u32,

    /// Step this many months, weeks or days forward
    #[arg(long, default_value_t = 0)]
    next: u32,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = CalGridConfig::load()?;
    let _logger = logging::init(cli.verbose, config.log_level.as_deref())?;

    let book = EventBook::new(config.open_store());

    match cli.command {
        Some(Commands::Month(args)) => show_view(&book, &config, ViewKind::Month, args),
        Some(Commands::Week(args)) => show_view(&book, &config, ViewKind::Week, args),
        Some(Commands::Day(args)) => show_view(&book, &config, ViewKind::Day, args),
        Some(Commands::Add { fields, hour }) => commands::add::run(&book, fields, hour),
        Some(Commands::Edit { id, fields }) => commands::edit::run(&book, &id, fields),
        Some(Commands::Delete { id, force }) => commands::delete::run(&book, &id, force),
        Some(Commands::Show { id }) => commands::show::run(&book, &id),
        Some(Commands::List { date, json }) => {
            let date = date.as_deref().map(parse_date).transpose()?;
            commands::list::run(&book, date, json)
        }
        Some(Commands::Config) => commands::config::run(&config),
        None => {
            let view = config.view()?;
            show_view(&book, &config, view, ViewArgs { date: None, prev: 0, next: 0 })
        }
    }
}

fn show_view<S>(book: &EventBook<S>, config: &CalGridConfig, view: ViewKind, args: ViewArgs) -> Result<()>
where
    S: calgrid_core::store::EventStore,
{
    let anchor = match args.date.as_deref() {
        Some(s) => parse_date(s)?,
        None => today(),
    };
    let steps = i64::from(args.next) - i64::from(args.prev);
    let steps = i32::try_from(steps).map_err(|_| anyhow::anyhow!("Too many steps: {}", steps))?;
    let anchor = view.shift(anchor, steps);
    debug!("event=show_view view={} anchor={}", view, anchor);

    commands::view::run(book, config, view, anchor)
}

pub(crate) fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}
