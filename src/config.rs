use std::net::SocketAddr;
use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "library")]
#[command(
    version,
    about = "A GraphQL API over an in-memory collection of books and authors"
)]
pub struct Cli {
    /// Address the GraphQL endpoint listens on
    #[arg(long, env = "LIBRARY_LISTEN", default_value = "0.0.0.0:5000")]
    pub listen: SocketAddr,

    /// JSON file with the initial `authors` and `books` (defaults to a built-in set)
    #[arg(long, env = "LIBRARY_SEED")]
    pub seed: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Also write JSON logs to this file
    #[arg(long, env = "LIBRARY_LOG_FILE")]
    pub log_file: Option<PathBuf>,

    /// Print the GraphQL schema and exit
    #[arg(long)]
    pub print_schema: bool,
}
