//! GraphQL documents, one per use case
//!
//! Selections mirror the structs in `showcase-api-types`; the schema itself
//! is owned by the API.

pub const GET_USER: &str = r#"
query GetUser($email: String!) {
  user(by: { email: $email }) {
    id
    name
    email
    avatarUrl
  }
}
"#;

pub const CREATE_USER: &str = r#"
mutation CreateUser($input: UserCreateInput!) {
  userCreate(input: $input) {
    user {
      id
      name
      email
      avatarUrl
    }
  }
}
"#;

pub const LIST_PROJECTS: &str = r#"
query ListProjects($category: String, $endcursor: String) {
  projectSearch(first: 8, after: $endcursor, filter: { category: { eq: $category } }) {
    pageInfo {
      hasNextPage
      hasPreviousPage
      startCursor
      endCursor
    }
    edges {
      node {
        id
        title
        description
        image
        liveSiteUrl
        githubUrl
        category
      }
    }
  }
}
"#;

pub const GET_PROJECT_BY_ID: &str = r#"
query GetProjectById($id: ID!) {
  project(by: { id: $id }) {
    id
    title
    description
    image
    liveSiteUrl
    githubUrl
    category
    createdBy {
      id
      name
      email
      avatarUrl
    }
  }
}
"#;

pub const GET_USER_PROJECTS: &str = r#"
query GetUserProjects($id: ID!, $last: Int) {
  user(by: { id: $id }) {
    id
    name
    email
    avatarUrl
    projects(last: $last) {
      edges {
        node {
          id
          title
          image
        }
      }
    }
  }
}
"#;

pub const CREATE_PROJECT: &str = r#"
mutation CreateProject($input: ProjectCreateInput!) {
  projectCreate(input: $input) {
    project {
      id
      title
      description
      image
      liveSiteUrl
      githubUrl
      category
    }
  }
}
"#;

pub const UPDATE_PROJECT: &str = r#"
mutation UpdateProject($id: ID!, $input: ProjectUpdateInput!) {
  projectUpdate(by: { id: $id }, input: $input) {
    project {
      id
      title
      description
      image
      liveSiteUrl
      githubUrl
      category
    }
  }
}
"#;

pub const DELETE_PROJECT: &str = r#"
mutation DeleteProject($id: ID!) {
  projectDelete(by: { id: $id }) {
    deletedId
  }
}
"#;
