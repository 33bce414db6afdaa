use serde::{Deserialize, Serialize};

use crate::ids::ApiId;
use crate::pagination::Connection;

/// A platform member
///
/// Created on first sign-in; read-only from the client's perspective after
/// that.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: ApiId,
    pub name: String,
    pub email: String,
    pub avatar_url: String,
}

/// A showcased project as returned by the API
///
/// `created_by` is only selected by the detail query; list queries leave it
/// out.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: ApiId,
    pub title: String,
    pub description: String,
    pub image: String,
    pub live_site_url: String,
    pub github_url: String,
    pub category: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_by: Option<User>,
}

/// The editable fields of a project, as captured by a form
///
/// `image` is either an already-hosted URL or an inline
/// `data:image/...;base64,` payload freshly picked by the user.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectDraft {
    pub title: String,
    pub description: String,
    pub image: String,
    pub live_site_url: String,
    pub github_url: String,
    pub category: String,
}

/// Trimmed project selection used inside a user's project list
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectSummary {
    pub id: ApiId,
    pub title: String,
    pub image: String,
}

/// A user together with their (most recent) projects
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserWithProjects {
    pub id: ApiId,
    pub name: String,
    pub email: String,
    pub avatar_url: String,
    pub projects: Connection<ProjectSummary>,
}

/// Input envelope for the user-creation mutation
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserInput {
    pub name: String,
    pub email: String,
    pub avatar_url: String,
}

/// Link to the creating user, in the API's relation-link shape
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatorLink {
    pub link: ApiId,
}

/// Input envelope for the project-creation mutation
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateProjectInput {
    #[serde(flatten)]
    pub draft: ProjectDraft,
    pub created_by: CreatorLink,
}

/// Body of the session-token endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenResponse {
    pub token: String,
}

/// Body of the image-upload endpoint
///
/// `url` is absent when the upstream host rejected the image.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadResult {
    #[serde(default)]
    pub url: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_project_wire_names_are_camel_case() {
        let wire = json!({
            "id": "p1",
            "title": "Pixel Garden",
            "description": "A tiny plant sim",
            "image": "https://cdn.example.com/p1.png",
            "liveSiteUrl": "https://pixelgarden.example.com",
            "githubUrl": "https://github.com/ada/pixel-garden",
            "category": "Frontend"
        });

        let project: Project = serde_json::from_value(wire).unwrap();
        assert_eq!(project.live_site_url, "https://pixelgarden.example.com");
        assert_eq!(project.github_url, "https://github.com/ada/pixel-garden");
        assert!(project.created_by.is_none());
    }

    #[test]
    fn test_create_project_input_flattens_draft() {
        let input = CreateProjectInput {
            draft: ProjectDraft {
                title: "Pixel Garden".to_string(),
                description: "A tiny plant sim".to_string(),
                image: "https://cdn.example.com/p1.png".to_string(),
                live_site_url: "https://pixelgarden.example.com".to_string(),
                github_url: "https://github.com/ada/pixel-garden".to_string(),
                category: "Frontend".to_string(),
            },
            created_by: CreatorLink { link: ApiId::from("u1") },
        };

        let value = serde_json::to_value(&input).unwrap();
        assert_eq!(value["title"], "Pixel Garden");
        assert_eq!(value["liveSiteUrl"], "https://pixelgarden.example.com");
        assert_eq!(value["createdBy"]["link"], "u1");
    }

    #[test]
    fn test_upload_result_without_url() {
        let result: UploadResult = serde_json::from_value(json!({})).unwrap();
        assert!(result.url.is_none());
    }
}
