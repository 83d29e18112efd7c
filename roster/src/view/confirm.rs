use crate::{consts::consts::PersonId, model::action::Action};

/// Two step delete: a request produces a prompt, and the delete is only sent
/// once the prompt has been answered with yes.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DeleteConfirmation {
    pending: Option<PersonId>,
}

impl DeleteConfirmation {
    pub fn new() -> Self {
        Self { pending: None }
    }

    pub fn pending(&self) -> Option<PersonId> {
        self.pending
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Replaces any earlier unanswered request
    pub fn request(&mut self, id: PersonId) -> String {
        self.pending = Some(id);

        prompt()
    }

    /// Clears the pending request, only a yes for a pending id yields an action
    pub fn resolve(&mut self, confirmed: bool) -> Option<Action> {
        let id = self.pending.take()?;

        match confirmed {
            true => Some(Action::Delete(id)),
            false => None,
        }
    }
}

pub fn prompt() -> String {
    "Are you sure you want to delete this person?".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn yes_yields_delete() {
        let mut confirmation = DeleteConfirmation::new();

        confirmation.request(PersonId(1));

        assert!(confirmation.is_pending());
        assert_eq!(confirmation.resolve(true), Some(Action::Delete(PersonId(1))));
        assert!(!confirmation.is_pending());
    }

    #[test]
    fn no_drops_the_request() {
        let mut confirmation = DeleteConfirmation::new();

        confirmation.request(PersonId(1));

        assert_eq!(confirmation.resolve(false), None);
        assert_eq!(
            confirmation.resolve(true),
            None,
            "an answered request cannot be confirmed again"
        );
    }

    #[test]
    fn answer_without_request_does_nothing() {
        assert_eq!(DeleteConfirmation::new().resolve(true), None);
    }
}
