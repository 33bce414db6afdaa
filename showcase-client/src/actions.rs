//! One operation per showcase use case
//!
//! Each action is a thin composition over the GraphQL wrapper or the
//! companion server's REST endpoints. Calls are sequential; errors propagate
//! unchanged to the caller.

use std::sync::Arc;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Deserialize;
use serde_json::json;
use tracing::debug;

use showcase_api_types::{
    ApiId, CreateProjectInput, CreateUserInput, CreatorLink, Project, ProjectDraft, ProjectsPage,
    TokenResponse, UploadResult, User, UserWithProjects,
};
use showcase_config::ShowcaseConfig;

use crate::errors::ClientError;
use crate::graphql::{GraphqlClient, RequestAuth};
use crate::queries;
use crate::rest::{HttpTransport, RestTransport};

static DATA_URL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^data:image/[a-z]+;base64,").expect("valid data-URL pattern"));

/// Whether `value` is an inline base64 image freshly picked by the user, as
/// opposed to an already-hosted URL
pub fn is_base64_data_url(value: &str) -> bool {
    DATA_URL_PATTERN.is_match(value)
}

/// Handle bundling the clients every action needs
pub struct Actions {
    graphql: GraphqlClient,
    rest: Arc<dyn RestTransport>,
    server_url: String,
}

impl Actions {
    /// Build the production handle from the loaded configuration
    pub fn new(config: &ShowcaseConfig) -> Result<Self, ClientError> {
        Ok(Self::with_parts(
            GraphqlClient::new(config)?,
            Arc::new(HttpTransport::new(config)?),
            config.server.base_url.clone(),
        ))
    }

    /// Assemble a handle from explicit parts (tests swap in mocks here)
    pub fn with_parts(
        graphql: GraphqlClient,
        rest: Arc<dyn RestTransport>,
        server_url: impl Into<String>,
    ) -> Self {
        let server_url = server_url.into().trim_end_matches('/').to_string();
        Self {
            graphql,
            rest,
            server_url,
        }
    }

    /// Look up a user by email; `None` when no account exists yet
    pub async fn get_user(&self, email: &str) -> Result<Option<User>, ClientError> {
        let data: UserData = self
            .graphql
            .request(queries::GET_USER, json!({ "email": email }), RequestAuth::ApiKey)
            .await?;
        Ok(data.user)
    }

    /// Create a user on first sign-in
    ///
    /// Duplicate handling is the server's responsibility; no idempotence
    /// check happens here.
    pub async fn create_user(
        &self,
        name: &str,
        email: &str,
        avatar_url: &str,
    ) -> Result<User, ClientError> {
        let input = CreateUserInput {
            name: name.to_string(),
            email: email.to_string(),
            avatar_url: avatar_url.to_string(),
        };
        let data: CreateUserData = self
            .graphql
            .request(
                queries::CREATE_USER,
                json!({ "input": input }),
                RequestAuth::ApiKey,
            )
            .await?;
        Ok(data.user_create.user)
    }

    /// Fetch a session token from the companion server
    pub async fn fetch_token(&self) -> Result<TokenResponse, ClientError> {
        let url = format!("{}/api/auth/token", self.server_url);
        let body = self.rest.get_json(&url).await?;
        Ok(serde_json::from_value(body)?)
    }

    /// Upload an image and return whatever the host reports
    pub async fn upload_image(&self, image: &str) -> Result<UploadResult, ClientError> {
        let url = format!("{}/api/upload", self.server_url);
        let body = self.rest.post_json(&url, &json!({ "path": image })).await?;
        Ok(serde_json::from_value(body)?)
    }

    /// Create a project: upload the image, then issue the create mutation
    /// with the hosted URL substituted for the inline one
    ///
    /// An upload response without a `url` aborts with
    /// [`ClientError::UploadFailed`]; the mutation is not issued.
    pub async fn create_project(
        &self,
        draft: &ProjectDraft,
        creator_id: &ApiId,
        token: &str,
    ) -> Result<Project, ClientError> {
        let uploaded = self.upload_image(&draft.image).await?;
        let Some(image_url) = uploaded.url else {
            return Err(ClientError::UploadFailed);
        };

        let input = CreateProjectInput {
            draft: ProjectDraft {
                image: image_url,
                ..draft.clone()
            },
            created_by: CreatorLink {
                link: creator_id.clone(),
            },
        };
        debug!(title = %input.draft.title, "creating project");
        let data: ProjectCreateData = self
            .graphql
            .request(
                queries::CREATE_PROJECT,
                json!({ "input": input }),
                RequestAuth::Bearer(token.to_string()),
            )
            .await?;
        Ok(data.project_create.project)
    }

    /// Update a project, re-uploading the image only when the draft carries a
    /// freshly picked inline one
    pub async fn update_project(
        &self,
        draft: &ProjectDraft,
        project_id: &ApiId,
        token: &str,
    ) -> Result<Project, ClientError> {
        let mut updated = draft.clone();

        if is_base64_data_url(&draft.image) {
            debug!(project = %project_id, "image changed, re-uploading");
            let uploaded = self.upload_image(&draft.image).await?;
            match uploaded.url {
                Some(image_url) => updated.image = image_url,
                None => return Err(ClientError::UploadFailed),
            }
        }

        let data: ProjectUpdateData = self
            .graphql
            .request(
                queries::UPDATE_PROJECT,
                json!({ "id": project_id, "input": updated }),
                RequestAuth::Bearer(token.to_string()),
            )
            .await?;
        Ok(data.project_update.project)
    }

    /// Delete a project; returns the deleted id
    pub async fn delete_project(&self, id: &ApiId, token: &str) -> Result<ApiId, ClientError> {
        let data: ProjectDeleteData = self
            .graphql
            .request(
                queries::DELETE_PROJECT,
                json!({ "id": id }),
                RequestAuth::Bearer(token.to_string()),
            )
            .await?;
        Ok(data.project_delete.deleted_id)
    }

    /// Fetch one project with its author; `None` when the id is unknown
    pub async fn get_project(&self, id: &ApiId) -> Result<Option<Project>, ClientError> {
        let data: ProjectData = self
            .graphql
            .request(queries::GET_PROJECT_BY_ID, json!({ "id": id }), RequestAuth::ApiKey)
            .await?;
        Ok(data.project)
    }

    /// Fetch a user together with their `last` most recent projects
    pub async fn get_user_projects(
        &self,
        id: &ApiId,
        last: Option<u32>,
    ) -> Result<Option<UserWithProjects>, ClientError> {
        let data: UserProjectsData = self
            .graphql
            .request(
                queries::GET_USER_PROJECTS,
                json!({ "id": id, "last": last }),
                RequestAuth::ApiKey,
            )
            .await?;
        Ok(data.user)
    }

    /// Fetch one page of the project feed
    ///
    /// A missing category is sent as the empty string, which the search
    /// filter treats as "no filter".
    pub async fn list_projects(
        &self,
        category: Option<&str>,
        end_cursor: Option<&str>,
    ) -> Result<ProjectsPage, ClientError> {
        let variables = json!({
            "category": category.unwrap_or_default(),
            "endcursor": end_cursor,
        });
        let data: ProjectSearchData = self
            .graphql
            .request(queries::LIST_PROJECTS, variables, RequestAuth::ApiKey)
            .await?;
        Ok(data.project_search)
    }
}

// Per-operation `data` envelopes. Wire names come from the schema, hence the
// camelCase renames.

#[derive(Deserialize)]
struct UserData {
    user: Option<User>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct CreateUserData {
    user_create: UserPayload,
}

#[derive(Deserialize)]
struct UserPayload {
    user: User,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ProjectSearchData {
    project_search: ProjectsPage,
}

#[derive(Deserialize)]
struct ProjectData {
    project: Option<Project>,
}

#[derive(Deserialize)]
struct UserProjectsData {
    user: Option<UserWithProjects>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ProjectCreateData {
    project_create: ProjectPayload,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ProjectUpdateData {
    project_update: ProjectPayload,
}

#[derive(Deserialize)]
struct ProjectPayload {
    project: Project,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ProjectDeleteData {
    project_delete: DeletedProject,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct DeletedProject {
    deleted_id: ApiId,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_base64_data_url() {
        assert!(is_base64_data_url("data:image/png;base64,AAAA"));
        assert!(is_base64_data_url("data:image/jpeg;base64,/9j/4AAQ"));

        assert!(!is_base64_data_url("https://cdn.example.com/x.png"));
        assert!(!is_base64_data_url("data:text/plain;base64,AAAA"));
        assert!(!is_base64_data_url(""));
    }

    #[test]
    fn test_server_url_trailing_slash_trimmed() {
        let config = ShowcaseConfig::default();
        let actions = Actions::with_parts(
            GraphqlClient::new(&config).unwrap(),
            Arc::new(crate::rest::MockTransport::new()),
            "http://localhost:3000/",
        );
        assert_eq!(actions.server_url, "http://localhost:3000");
    }
}
