use serde::{Deserialize, Serialize};

// @module: Team access and project registries

/// Role of a registered user
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Admin,
    #[default]
    Dev,
}

/// A user registered in the team access list
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct UserProfile {
    // @field: Unique identifier
    pub id: String,
    // @field: Display name, sent as the submitting username
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub role: UserRole,
}

/// A project training jobs can be launched into
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct ProjectDefinition {
    // @field: Unique identifier
    pub id: String,
    // @field: Display name
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub created_at: String,
}

/// Read-only view of registered users and projects
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Registry {
    users: Vec<UserProfile>,
    projects: Vec<ProjectDefinition>,
}

impl Registry {
    pub fn new(users: Vec<UserProfile>, projects: Vec<ProjectDefinition>) -> Self {
        Self { users, projects }
    }

    pub fn users(&self) -> &[UserProfile] {
        &self.users
    }

    pub fn projects(&self) -> &[ProjectDefinition] {
        &self.projects
    }

    // @returns: User with the given id
    pub fn find_user(&self, id: &str) -> Option<&UserProfile> {
        self.users.iter().find(|u| u.id == id)
    }

    // @returns: Project with the given id
    pub fn find_project(&self, id: &str) -> Option<&ProjectDefinition> {
        self.projects.iter().find(|p| p.id == id)
    }
}
