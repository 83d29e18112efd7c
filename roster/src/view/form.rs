use strum_macros::{Display, EnumIter, EnumString};
use thiserror::Error;

use crate::{
    consts::consts::PersonId,
    model::{
        action::Action,
        person::{parse_age, Person},
    },
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Display, EnumString, EnumIter)]
#[strum(ascii_case_insensitive)]
pub enum Field {
    #[strum(
        to_string = "First Name",
        serialize = "first",
        serialize = "firstname",
        serialize = "first_name"
    )]
    FirstName,
    #[strum(
        to_string = "Last Name",
        serialize = "last",
        serialize = "lastname",
        serialize = "last_name"
    )]
    LastName,
    #[strum(to_string = "Email", serialize = "email")]
    Email,
    #[strum(to_string = "Age", serialize = "age")]
    Age,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit(PersonId),
}

#[derive(Clone, Debug, PartialEq)]
pub enum FormState {
    Closed,
    Open { mode: FormMode, draft: Person },
}

/// A save that has been sent and not yet answered
#[derive(Clone, Copy, Debug, PartialEq)]
struct Submission {
    mode: FormMode,
    /// Which opening of the dialog sent it
    opened: u64,
}

#[derive(Error, Debug, PartialEq)]
pub enum FormError {
    #[error("No person is being edited")]
    Closed,
    #[error("A save is already in progress")]
    SubmitInProgress,
    #[error("{0} is required")]
    MissingField(Field),
}

/// The add / edit dialog.
///
/// `Closed -> Open(Create)` on add, `Closed -> Open(Edit)` on edit, and back to
/// `Closed` on cancel or once a submit succeeds. The draft does not survive a
/// close, an outstanding save does: submit stays disabled until it is answered,
/// and its answer only closes the dialog it was sent from.
#[derive(Clone, Debug, PartialEq)]
pub struct PersonForm {
    state: FormState,
    /// Bumped on every open
    opened: u64,
    outstanding: Option<Submission>,
}

impl PersonForm {
    pub fn new() -> Self {
        Self {
            state: FormState::Closed,
            opened: 0,
            outstanding: None,
        }
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    pub fn is_open(&self) -> bool {
        matches!(self.state, FormState::Open { .. })
    }

    pub fn is_submitting(&self) -> bool {
        self.outstanding.is_some()
    }

    pub fn mode(&self) -> Option<FormMode> {
        match &self.state {
            FormState::Open { mode, .. } => Some(*mode),
            FormState::Closed => None,
        }
    }

    pub fn draft(&self) -> Option<&Person> {
        match &self.state {
            FormState::Open { draft, .. } => Some(draft),
            FormState::Closed => None,
        }
    }

    /// Clears whatever draft was there before
    pub fn open_create(&mut self) {
        self.opened += 1;
        self.state = FormState::Open {
            mode: FormMode::Create,
            draft: Person::blank(),
        };
    }

    /// Opens seeded with `person`, an unsaved person opens in create mode
    pub fn open_edit(&mut self, person: &Person) {
        let mode = match person.id {
            Some(id) => FormMode::Edit(id),
            None => FormMode::Create,
        };

        self.opened += 1;
        self.state = FormState::Open {
            mode,
            draft: person.clone(),
        };
    }

    pub fn cancel(&mut self) {
        self.state = FormState::Closed;
    }

    pub fn set_field(&mut self, field: Field, value: &str) -> Result<(), FormError> {
        let FormState::Open { draft, .. } = &mut self.state else {
            return Err(FormError::Closed);
        };

        match field {
            Field::FirstName => draft.first_name = value.to_string(),
            Field::LastName => draft.last_name = value.to_string(),
            Field::Email => draft.email = value.to_string(),
            Field::Age => draft.age = parse_age(value),
        }

        Ok(())
    }

    /// Validates the draft and disables submit, returning the action to send.
    ///
    /// Only emptiness is checked, the email format is left to the server.
    pub fn begin_submit(&mut self) -> Result<Action, FormError> {
        let FormState::Open { mode, draft } = &self.state else {
            return Err(FormError::Closed);
        };

        if self.outstanding.is_some() {
            return Err(FormError::SubmitInProgress);
        }

        let required = [
            (Field::FirstName, &draft.first_name),
            (Field::LastName, &draft.last_name),
            (Field::Email, &draft.email),
        ];

        if let Some((field, _)) = required.iter().find(|(_, value)| value.is_empty()) {
            return Err(FormError::MissingField(*field));
        }

        let action = match mode {
            FormMode::Create => Action::Create(draft.clone().without_id()),
            FormMode::Edit(id) => Action::Update(*id, draft.clone()),
        };

        self.outstanding = Some(Submission {
            mode: *mode,
            opened: self.opened,
        });

        Ok(action)
    }

    /// Answers the save sent for `mode` and re-enables submit.
    ///
    /// Success closes the dialog only if it is still the one that sent the save,
    /// failure keeps the draft. An answer for anything else is ignored.
    pub fn finish_submit(&mut self, mode: FormMode, succeeded: bool) {
        let Some(submission) = self.outstanding else {
            log::debug!("No save outstanding for {:?}", mode);
            return;
        };

        if submission.mode != mode {
            log::debug!(
                "Ignoring answer for {:?}, waiting on {:?}",
                mode,
                submission.mode
            );
            return;
        }

        self.outstanding = None;

        if succeeded && self.is_open() && self.opened == submission.opened {
            self.state = FormState::Closed;
        }
    }

    pub fn title(&self) -> &'static str {
        match self.mode() {
            Some(FormMode::Edit(_)) => "Edit Person",
            _ => "Add New Person",
        }
    }

    pub fn submit_label(&self) -> &'static str {
        if self.is_submitting() {
            return "Saving...";
        }

        match self.mode() {
            Some(FormMode::Edit(_)) => "Update",
            _ => "Create",
        }
    }
}

impl Default for PersonForm {
    fn default() -> Self {
        PersonForm::new()
    }
}
