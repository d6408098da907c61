use crate::models::city::City;
use crate::models::filter::{DayFilter, MonthFilter};
use clap::{Args, Parser, Subcommand, ValueEnum};

/// Command-line interface definition for bikeshare
/// Explore US bikeshare trip data for Chicago, New York City and Washington
#[derive(Parser)]
#[command(
    name = "bikeshare",
    version = env!("CARGO_PKG_VERSION"),
    about = "Explore US bikeshare data: filter trips by city, month and weekday and print travel statistics",
    long_about = None
)]
pub struct Cli {
    /// Override the directory holding the city CSV files
    #[arg(global = true, long = "data-dir", value_name = "DIR")]
    pub data_dir: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    /// Without a subcommand the interactive explorer starts
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// City / month / day selection shared by the non-interactive commands.
#[derive(Args, Debug, Clone)]
pub struct FilterArgs {
    /// City: chicago, "new york city" (or new_york_city), washington
    #[arg(long, short = 'c', value_parser = parse_city)]
    pub city: City,

    /// Month: all, january .. june
    #[arg(long, short = 'm', default_value = "all", value_parser = parse_month)]
    pub month: MonthFilter,

    /// Day of week: all, monday .. sunday
    #[arg(long, short = 'd', default_value = "all", value_parser = parse_day)]
    pub day: DayFilter,
}

fn parse_city(s: &str) -> Result<City, String> {
    s.parse::<City>().map_err(|e| e.to_string())
}

fn parse_month(s: &str) -> Result<MonthFilter, String> {
    s.parse::<MonthFilter>().map_err(|e| e.to_string())
}

fn parse_day(s: &str) -> Result<DayFilter, String> {
    s.parse::<DayFilter>().map_err(|e| e.to_string())
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write the default configuration file
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        /// Print the current configuration file to stdout
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        /// Edit the configuration file with your preferred editor
        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        /// Specify the editor to use (overrides $EDITOR/$VISUAL).
        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Interactive explorer: prompts for filters, prints stats, pages rows
    Explore,

    /// Print the statistics for one filter selection and exit
    Stats {
        #[command(flatten)]
        filter: FilterArgs,

        /// Output format: table or json
        #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,
    },

    /// Print one page (5 rows) of the filtered raw trips
    Rows {
        #[command(flatten)]
        filter: FilterArgs,

        /// Page number, starting at 0
        #[arg(long, short = 'p', default_value_t = 0)]
        page: usize,
    },
}
