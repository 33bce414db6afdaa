//! User lookup and management commands

use anyhow::{Context, Result};

use showcase_api_types::ApiId;
use showcase_client::Actions;

use crate::cli::{OutputFormat, UserCommands};

pub async fn run(actions: &Actions, cmd: UserCommands, format: OutputFormat) -> Result<()> {
    match cmd {
        UserCommands::Show { email } => show(actions, email, format).await,
        UserCommands::Create {
            name,
            email,
            avatar_url,
        } => create(actions, name, email, avatar_url, format).await,
        UserCommands::Projects { id, last } => projects(actions, id, last, format).await,
    }
}

async fn show(actions: &Actions, email: String, format: OutputFormat) -> Result<()> {
    let user = actions.get_user(&email).await?;

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&user)?),
        OutputFormat::Text => match user {
            Some(user) => {
                println!("{}  {} <{}>", user.id, user.name, user.email);
                println!("  avatar: {}", user.avatar_url);
            }
            None => println!("no user with email '{}'", email),
        },
    }
    Ok(())
}

async fn create(
    actions: &Actions,
    name: String,
    email: String,
    avatar_url: String,
    format: OutputFormat,
) -> Result<()> {
    let user = actions.create_user(&name, &email, &avatar_url).await?;

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&user)?),
        OutputFormat::Text => println!("created {} ({})", user.id, user.email),
    }
    Ok(())
}

async fn projects(
    actions: &Actions,
    id: String,
    last: Option<u32>,
    format: OutputFormat,
) -> Result<()> {
    let user = actions
        .get_user_projects(&ApiId::from(id.as_str()), last)
        .await?
        .with_context(|| format!("no user with id '{}'", id))?;

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&user)?),
        OutputFormat::Text => {
            println!("{}  {} <{}>", user.id, user.name, user.email);
            if user.projects.is_empty() {
                println!("  no projects yet");
            }
            for project in user.projects.nodes() {
                println!("  {}  {}", project.id, project.title);
            }
        }
    }
    Ok(())
}
