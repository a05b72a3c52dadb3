use std::fmt;

use crate::domain::project::errors::ProjectFieldError;
use crate::domain::project::errors::ProjectIdError;
use crate::domain::user::models::UserId;

/// Project aggregate owned by exactly one user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Project {
    pub id: ProjectId,
    pub name: ProjectName,
    pub description: ProjectDescription,
    pub completed: bool,
    pub user_id: UserId,
}

impl Project {
    pub fn is_owned_by(&self, user_id: UserId) -> bool {
        self.user_id == user_id
    }

    /// Overwrite the mutable fields from a command.
    pub fn apply(&mut self, command: ProjectCommand) {
        self.name = command.name;
        self.description = command.description;
        self.completed = command.completed;
    }
}

/// Server-assigned project identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ProjectId(pub i64);

impl ProjectId {
    /// Parse a project ID from a path segment.
    ///
    /// # Errors
    /// * `InvalidFormat` - String is not a positive integer
    pub fn from_string(s: &str) -> Result<Self, ProjectIdError> {
        match s.parse::<i64>() {
            Ok(id) if id > 0 => Ok(Self(id)),
            _ => Err(ProjectIdError::InvalidFormat(s.to_string())),
        }
    }
}

impl fmt::Display for ProjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Project name value object.
///
/// Non-blank and at most 100 characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectName(String);

impl ProjectName {
    const MAX_LENGTH: usize = 100;

    /// # Errors
    /// * `EmptyName` - Name is empty or whitespace
    /// * `NameTooLong` - Name exceeds 100 characters
    pub fn new(name: String) -> Result<Self, ProjectFieldError> {
        let length = name.chars().count();
        if name.trim().is_empty() {
            Err(ProjectFieldError::EmptyName)
        } else if length > Self::MAX_LENGTH {
            Err(ProjectFieldError::NameTooLong {
                max: Self::MAX_LENGTH,
                actual: length,
            })
        } else {
            Ok(Self(name))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Free-form project description, at most 200 characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectDescription(String);

impl ProjectDescription {
    const MAX_LENGTH: usize = 200;

    pub fn new(description: String) -> Result<Self, ProjectFieldError> {
        let length = description.chars().count();
        if length > Self::MAX_LENGTH {
            Err(ProjectFieldError::DescriptionTooLong {
                max: Self::MAX_LENGTH,
                actual: length,
            })
        } else {
            Ok(Self(description))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Validated project fields, used for both creation and full replacement.
#[derive(Debug, Clone)]
pub struct ProjectCommand {
    pub name: ProjectName,
    pub description: ProjectDescription,
    pub completed: bool,
}

/// Project data as it is inserted; the store assigns the id.
#[derive(Debug, Clone)]
pub struct NewProject {
    pub name: ProjectName,
    pub description: ProjectDescription,
    pub completed: bool,
    pub user_id: UserId,
}

impl NewProject {
    pub fn from_command(command: ProjectCommand, user_id: UserId) -> Self {
        Self {
            name: command.name,
            description: command.description,
            completed: command.completed,
            user_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_project_name_validation() {
        assert_eq!(ProjectName::new("P".to_string()).unwrap().as_str(), "P");
        assert_eq!(
            ProjectName::new("   ".to_string()),
            Err(ProjectFieldError::EmptyName)
        );
        assert!(matches!(
            ProjectName::new("n".repeat(101)),
            Err(ProjectFieldError::NameTooLong { max: 100, actual: 101 })
        ));
    }

    #[test]
    fn test_project_description_validation() {
        assert!(ProjectDescription::new(String::new()).is_ok());
        assert!(ProjectDescription::new("d".repeat(200)).is_ok());
        assert!(ProjectDescription::new("d".repeat(201)).is_err());
    }

    #[test]
    fn test_apply_keeps_identity_and_owner() {
        let mut project = Project {
            id: ProjectId(3),
            name: ProjectName::new("old".to_string()).unwrap(),
            description: ProjectDescription::new("old".to_string()).unwrap(),
            completed: false,
            user_id: UserId(1),
        };

        project.apply(ProjectCommand {
            name: ProjectName::new("new".to_string()).unwrap(),
            description: ProjectDescription::new("new".to_string()).unwrap(),
            completed: true,
        });

        assert_eq!(project.id, ProjectId(3));
        assert_eq!(project.user_id, UserId(1));
        assert_eq!(project.name.as_str(), "new");
        assert!(project.completed);
        assert!(project.is_owned_by(UserId(1)));
        assert!(!project.is_owned_by(UserId(2)));
    }

    #[test]
    fn test_project_id_from_string() {
        assert_eq!(ProjectId::from_string("7"), Ok(ProjectId(7)));
        assert!(ProjectId::from_string("-1").is_err());
        assert!(ProjectId::from_string("seven").is_err());
    }
}
