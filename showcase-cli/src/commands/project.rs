//! Project feed and management commands

use anyhow::{bail, Context, Result};
use url::form_urlencoded;

use showcase_api_types::{ApiId, Category, Project, ProjectDraft};
use showcase_client::{Actions, Direction, PageCursors};

use crate::cli::{OutputFormat, ProjectCommands};

pub async fn run(actions: &Actions, cmd: ProjectCommands, format: OutputFormat) -> Result<()> {
    match cmd {
        ProjectCommands::List { category, cursor } => list(actions, category, cursor, format).await,
        ProjectCommands::Show { id } => show(actions, id, format).await,
        ProjectCommands::Create {
            title,
            description,
            image,
            live_site_url,
            github_url,
            category,
            creator,
        } => {
            let draft = ProjectDraft {
                title,
                description,
                image,
                live_site_url,
                github_url,
                category: parse_category(&category)?,
            };
            create(actions, draft, creator, format).await
        }
        ProjectCommands::Update {
            id,
            title,
            description,
            image,
            live_site_url,
            github_url,
            category,
        } => {
            let category = category.as_deref().map(parse_category).transpose()?;
            update(
                actions,
                id,
                FieldUpdates {
                    title,
                    description,
                    image,
                    live_site_url,
                    github_url,
                    category,
                },
                format,
            )
            .await
        }
        ProjectCommands::Delete { id } => delete(actions, id, format).await,
    }
}

/// Flags given to `project update`; unset fields keep their current value
struct FieldUpdates {
    title: Option<String>,
    description: Option<String>,
    image: Option<String>,
    live_site_url: Option<String>,
    github_url: Option<String>,
    category: Option<String>,
}

async fn list(
    actions: &Actions,
    category: Option<String>,
    cursor: Option<String>,
    format: OutputFormat,
) -> Result<()> {
    let category = category.as_deref().map(parse_category).transpose()?;
    let page = actions
        .list_projects(category.as_deref(), cursor.as_deref())
        .await?;

    if format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(&page)?);
        return Ok(());
    }

    if page.is_empty() {
        println!("no projects found");
    }
    for project in page.nodes() {
        print_project_line(project);
    }

    // Reconstruct the query this page was fetched with, then hand out
    // ready-made navigation targets for both directions.
    let mut current = form_urlencoded::Serializer::new(String::new());
    if let Some(category) = &category {
        current.append_pair("category", category);
    }
    if let Some(cursor) = &cursor {
        current.append_pair("endcursor", cursor);
    }
    let current_query = current.finish();

    let cursors = PageCursors::from(&page.page_info);
    if cursors.can_navigate(Direction::Previous) {
        println!("previous: {}", cursors.navigate("/", &current_query, Direction::Previous));
    }
    if cursors.can_navigate(Direction::Next) {
        println!("next:     {}", cursors.navigate("/", &current_query, Direction::Next));
    }

    Ok(())
}

async fn show(actions: &Actions, id: String, format: OutputFormat) -> Result<()> {
    let project = actions
        .get_project(&ApiId::from(id.as_str()))
        .await?
        .with_context(|| format!("no project with id '{}'", id))?;

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&project)?),
        OutputFormat::Text => {
            println!("{} [{}]", project.title, project.category);
            println!("  {}", project.description);
            println!("  image:  {}", project.image);
            println!("  live:   {}", project.live_site_url);
            println!("  source: {}", project.github_url);
            if let Some(author) = &project.created_by {
                println!("  by:     {} <{}>", author.name, author.email);
            }
        }
    }
    Ok(())
}

async fn create(
    actions: &Actions,
    draft: ProjectDraft,
    creator: String,
    format: OutputFormat,
) -> Result<()> {
    let token = actions.fetch_token().await?;
    let project = actions
        .create_project(&draft, &ApiId::from(creator.as_str()), &token.token)
        .await?;

    emit_project("created", &project, format)
}

async fn update(
    actions: &Actions,
    id: String,
    updates: FieldUpdates,
    format: OutputFormat,
) -> Result<()> {
    let id = ApiId::from(id.as_str());
    let current = actions
        .get_project(&id)
        .await?
        .with_context(|| format!("no project with id '{}'", id))?;

    let draft = ProjectDraft {
        title: updates.title.unwrap_or(current.title),
        description: updates.description.unwrap_or(current.description),
        image: updates.image.unwrap_or(current.image),
        live_site_url: updates.live_site_url.unwrap_or(current.live_site_url),
        github_url: updates.github_url.unwrap_or(current.github_url),
        category: updates.category.unwrap_or(current.category),
    };

    let token = actions.fetch_token().await?;
    let project = actions.update_project(&draft, &id, &token.token).await?;

    emit_project("updated", &project, format)
}

async fn delete(actions: &Actions, id: String, format: OutputFormat) -> Result<()> {
    let token = actions.fetch_token().await?;
    let deleted = actions
        .delete_project(&ApiId::from(id.as_str()), &token.token)
        .await?;

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&deleted)?),
        OutputFormat::Text => println!("deleted {}", deleted),
    }
    Ok(())
}

fn emit_project(verb: &str, project: &Project, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(project)?),
        OutputFormat::Text => println!("{} {} ({})", verb, project.id, project.title),
    }
    Ok(())
}

fn print_project_line(project: &Project) {
    println!("{}  {} [{}]", project.id, project.title, project.category);
}

/// Validate a category flag against the recognised set, keeping the wire
/// spelling
fn parse_category(value: &str) -> Result<String> {
    match value.parse::<Category>() {
        Ok(category) => Ok(category.as_str().to_string()),
        Err(err) => bail!(err),
    }
}
