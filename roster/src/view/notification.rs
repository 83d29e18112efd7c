use strum_macros::Display;

use crate::model::action::Action;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Display)]
pub enum Variant {
    #[strum(to_string = "Success")]
    Success,
    #[strum(to_string = "Error")]
    Destructive,
}

/// Transient, dismissible message shown after an action completes
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notification {
    pub title: String,
    pub description: String,
    pub variant: Variant,
}

impl Notification {
    pub fn success(description: &str) -> Self {
        Self {
            title: Variant::Success.to_string(),
            description: description.to_string(),
            variant: Variant::Success,
        }
    }

    pub fn error(description: &str) -> Self {
        Self {
            title: Variant::Destructive.to_string(),
            description: description.to_string(),
            variant: Variant::Destructive,
        }
    }

    /// Message for a completed action. A successful list or fetch is silent.
    pub fn for_action(action: &Action, succeeded: bool) -> Option<Self> {
        if !succeeded {
            let notification = match action {
                Action::List => Notification::error("Could not load persons from backend."),
                _ => Notification::error(&format!("Failed to {}.", action.noun_phrase())),
            };

            return Some(notification);
        }

        match action {
            Action::Create(_) => Some(Notification::success("Person created successfully.")),
            Action::Update(_, _) => Some(Notification::success("Person updated successfully.")),
            Action::Delete(_) => Some(Notification::success("Person deleted successfully.")),
            Action::List | Action::Fetch(_) => None,
        }
    }

    pub fn is_error(&self) -> bool {
        self.variant == Variant::Destructive
    }
}
