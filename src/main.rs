use clap::Parser;
use colored::*;

mod api;
mod config;
mod errors;
mod output;
mod sanitize;

use api::gitlab::GitLabClient;
use config::manifest::{manifest, Fixture, FixtureIds, BASE_URL};

#[derive(Parser)]
#[command(name = "glfetch")]
#[command(version = "0.1.0")]
#[command(about = "Snapshot GitLab API responses as JSON test fixtures", long_about = None)]
struct Cli {
    /// Personal access token, sent as the PRIVATE-TOKEN header
    token: String,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    println!("{}", "glfetch v0.1.0".bright_cyan().bold());
    println!();

    if let Err(e) = run(&cli.token).await {
        eprintln!("\n{}", e.to_string().red());
        std::process::exit(1);
    }

    println!();
}

// Captures every fixture in manifest order, stopping at the first failure.
// Files written by earlier fixtures are left in place.
async fn run(token: &str) -> anyhow::Result<()> {
    let client = GitLabClient::new(BASE_URL.to_string(), token.to_string());
    let fixtures = manifest(&FixtureIds::default());

    for fixture in &fixtures {
        write_fixture(&client, fixture).await?;
    }

    println!();
    println!(
        "{}",
        format!("{} fixtures written!", fixtures.len()).green().bold()
    );

    Ok(())
}

async fn write_fixture(client: &GitLabClient, fixture: &Fixture) -> errors::Result<()> {
    println!("{}", format!("Writing out {}...", fixture.name).cyan());

    let payload = client.get(&fixture.endpoint, fixture.params).await?;

    let payload = if fixture.raw {
        payload
    } else {
        sanitize::sanitize(payload)?
    };

    output::write_fixture_file(fixture.name, &payload)?;

    Ok(())
}
