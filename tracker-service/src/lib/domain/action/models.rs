use std::fmt;

use crate::domain::action::errors::ActionFieldError;
use crate::domain::action::errors::ActionIdError;
use crate::domain::project::models::ProjectId;

/// An action or note recorded against a project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Action {
    pub id: ActionId,
    pub project_id: ProjectId,
    pub description: ActionDescription,
    pub note: Option<ActionNote>,
}

impl Action {
    pub fn apply(&mut self, command: ActionCommand) {
        self.description = command.description;
        self.note = command.note;
    }
}

/// Server-assigned action identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActionId(pub i64);

impl ActionId {
    /// # Errors
    /// * `InvalidFormat` - String is not a positive integer
    pub fn from_string(s: &str) -> Result<Self, ActionIdError> {
        match s.parse::<i64>() {
            Ok(id) if id > 0 => Ok(Self(id)),
            _ => Err(ActionIdError::InvalidFormat(s.to_string())),
        }
    }
}

impl fmt::Display for ActionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Required action description, 1-200 characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionDescription(String);

impl ActionDescription {
    const MAX_LENGTH: usize = 200;

    pub fn new(description: String) -> Result<Self, ActionFieldError> {
        let length = description.chars().count();
        if description.trim().is_empty() {
            Err(ActionFieldError::EmptyDescription)
        } else if length > Self::MAX_LENGTH {
            Err(ActionFieldError::DescriptionTooLong {
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

/// Optional free-form note, at most 250 characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionNote(String);

impl ActionNote {
    const MAX_LENGTH: usize = 250;

    pub fn new(note: String) -> Result<Self, ActionFieldError> {
        let length = note.chars().count();
        if length > Self::MAX_LENGTH {
            Err(ActionFieldError::NoteTooLong {
                max: Self::MAX_LENGTH,
                actual: length,
            })
        } else {
            Ok(Self(note))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Validated action fields, used for both creation and replacement.
#[derive(Debug, Clone)]
pub struct ActionCommand {
    pub description: ActionDescription,
    pub note: Option<ActionNote>,
}

#[derive(Debug, Clone)]
pub struct NewAction {
    pub project_id: ProjectId,
    pub description: ActionDescription,
    pub note: Option<ActionNote>,
}

impl NewAction {
    pub fn from_command(command: ActionCommand, project_id: ProjectId) -> Self {
        Self {
            project_id,
            description: command.description,
            note: command.note,
        }
    }
}
