//! Command implementations

pub mod project;
pub mod user;

use anyhow::Result;
use showcase_client::Actions;

use crate::cli::OutputFormat;

/// Print a session token (diagnostic)
pub async fn token(actions: &Actions, format: OutputFormat) -> Result<()> {
    let token = actions.fetch_token().await?;
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&token)?),
        OutputFormat::Text => println!("{}", token.token),
    }
    Ok(())
}
