//! Unified wire types for the Showcase GraphQL API
//!
//! This crate provides the type definitions shared by the client SDK and any
//! front-end built on top of it, so that every consumer agrees on field names
//! and pagination shapes.

pub mod domain;
pub mod enums;
pub mod ids;
pub mod pagination;

// Re-export main types for convenience
pub use domain::{
    CreateProjectInput, CreateUserInput, CreatorLink, Project, ProjectDraft, ProjectSummary, TokenResponse,
    UploadResult, User, UserWithProjects,
};
pub use enums::{Category, CategoryParseError};
pub use ids::ApiId;
pub use pagination::{Connection, Edge, PageInfo, ProjectsPage};
