use anyhow::{Context, Result};
use clap::Parser;

use config::Cli;
use datamodel::{Library, Seed};
use server::{build_schema, make_app};

mod config;
mod datamodel;
mod error;
mod logging;
mod server;

#[cfg(test)]
mod tests;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.print_schema {
        print!("{}", build_schema(Library::default()).sdl());
        return Ok(());
    }

    logging::init(cli.verbose, cli.log_file).context("failed to set up logging")?;

    let seed = match &cli.seed {
        Some(path) => Seed::from_file(path)
            .with_context(|| format!("failed to load seed file {}", path.display()))?,
        None => Seed::builtin(),
    };
    let app = make_app(Library::new(seed));

    let listener = tokio::net::TcpListener::bind(cli.listen)
        .await
        .with_context(|| format!("failed to bind {}", cli.listen))?;
    tracing::info!("server ready at http://{}/", listener.local_addr()?);

    axum::serve(listener, app).await?;
    Ok(())
}
