use thiserror::Error;

use crate::{
    consts::consts::PersonId,
    gateway::gateway::{send_action, GatewayResult, PersonGateway},
    model::action::{Action, ActionResult},
};

use super::{
    confirm::DeleteConfirmation,
    form::{Field, FormError, FormMode, PersonForm},
    list::PersonList,
    notification::Notification,
};

#[derive(Error, Debug, PartialEq)]
pub enum ViewError {
    #[error("No person with [id: {0}] in the list")]
    UnknownPerson(PersonId),
    #[error("Answer the pending confirmation first (yes / no)")]
    ConfirmationPending,
    #[error("Nothing to confirm")]
    NothingToConfirm,
    #[error(transparent)]
    Form(#[from] FormError),
}

/// Top level admin view: the person list, the add / edit dialog and the delete
/// confirmation.
///
/// The view never talks to the network itself. Intents return the [`Action`]
/// to send, and the caller hands the outcome back through [`PersonAdmin::complete`].
/// This keeps the state synchronous and lets the caller decide how requests
/// are scheduled.
///
/// Local state is only changed by successful results:
/// - list replaces the collection
/// - fetch, create and update merge the record returned by the server
/// - delete removes the id without re-fetching
#[derive(Debug, Default)]
pub struct PersonAdmin {
    list: PersonList,
    form: PersonForm,
    confirmation: DeleteConfirmation,
}

impl PersonAdmin {
    pub fn new() -> Self {
        Self {
            list: PersonList::new(),
            form: PersonForm::new(),
            confirmation: DeleteConfirmation::new(),
        }
    }

    pub fn list(&self) -> &PersonList {
        &self.list
    }

    pub fn form(&self) -> &PersonForm {
        &self.form
    }

    pub fn confirmation(&self) -> &DeleteConfirmation {
        &self.confirmation
    }

    /// Initial load, identical to a reload
    pub fn mount(&mut self) -> Action {
        self.reload()
    }

    pub fn reload(&mut self) -> Action {
        self.list.begin_loading();
        Action::List
    }

    pub fn set_search(&mut self, search: &str) -> Result<(), ViewError> {
        self.ensure_no_confirmation()?;
        self.list.set_search(search);
        Ok(())
    }

    pub fn show(&mut self, id: PersonId) -> Result<Action, ViewError> {
        self.ensure_no_confirmation()?;
        Ok(Action::Fetch(id))
    }

    pub fn open_create(&mut self) -> Result<(), ViewError> {
        self.ensure_no_confirmation()?;
        self.form.open_create();
        Ok(())
    }

    pub fn open_edit(&mut self, id: PersonId) -> Result<(), ViewError> {
        self.ensure_no_confirmation()?;

        let person = self.list.get(id).ok_or(ViewError::UnknownPerson(id))?;

        self.form.open_edit(person);
        Ok(())
    }

    pub fn set_field(&mut self, field: Field, value: &str) -> Result<(), ViewError> {
        self.ensure_no_confirmation()?;
        Ok(self.form.set_field(field, value)?)
    }

    pub fn cancel_form(&mut self) -> Result<(), ViewError> {
        self.ensure_no_confirmation()?;
        self.form.cancel();
        Ok(())
    }

    pub fn submit(&mut self) -> Result<Action, ViewError> {
        self.ensure_no_confirmation()?;
        Ok(self.form.begin_submit()?)
    }

    /// First half of a delete, returns the question to ask
    pub fn request_delete(&mut self, id: PersonId) -> Result<String, ViewError> {
        self.ensure_no_confirmation()?;

        if self.list.get(id).is_none() {
            return Err(ViewError::UnknownPerson(id));
        }

        Ok(self.confirmation.request(id))
    }

    /// Second half of a delete, `Some` only when the answer was yes
    pub fn answer_confirmation(&mut self, confirmed: bool) -> Result<Option<Action>, ViewError> {
        if !self.confirmation.is_pending() {
            return Err(ViewError::NothingToConfirm);
        }

        Ok(self.confirmation.resolve(confirmed))
    }

    /// Applies the outcome of `action`. On failure nothing local changes
    /// (besides clearing the loading flag and re-enabling the form submit).
    pub fn complete(
        &mut self,
        action: &Action,
        result: GatewayResult<ActionResult>,
    ) -> Option<Notification> {
        let succeeded = match result {
            Ok(action_result) => {
                self.apply(action_result);
                true
            }
            Err(e) => {
                log::debug!("Unable to {}: {:?}", action.noun_phrase(), e);
                false
            }
        };

        match action {
            Action::List => self.list.finish_loading(),
            Action::Create(_) => self.form.finish_submit(FormMode::Create, succeeded),
            Action::Update(id, _) => self.form.finish_submit(FormMode::Edit(*id), succeeded),
            Action::Fetch(_) | Action::Delete(_) => {}
        }

        Notification::for_action(action, succeeded)
    }

    /// Sends `action` and applies its outcome in one go
    pub async fn run<G: PersonGateway>(
        &mut self,
        gateway: &G,
        action: Action,
    ) -> Option<Notification> {
        let result = send_action(gateway, action.clone()).await;

        self.complete(&action, result)
    }

    fn apply(&mut self, action_result: ActionResult) {
        match action_result {
            ActionResult::List(persons) => self.list.replace(persons),
            ActionResult::Single(person) => self.list.merge(person),
            ActionResult::Deleted(id) => {
                self.list.remove(id);
            }
        }
    }

    fn ensure_no_confirmation(&self) -> Result<(), ViewError> {
        match self.confirmation.is_pending() {
            true => Err(ViewError::ConfirmationPending),
            false => Ok(()),
        }
    }
}
