use serde::{Deserialize, Serialize};

use crate::consts::consts::PersonId;

use super::person::Person;

/// Intents the admin view sends through the gateway
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub enum Action {
    /// Returns a list of Person
    List,
    Fetch(PersonId),
    Create(Person),
    Update(PersonId, Person),
    Delete(PersonId),
}

impl Action {
    pub fn is_mutation(&self) -> bool {
        match self {
            Action::Create(_) | Action::Update(_, _) | Action::Delete(_) => true,
            Action::List | Action::Fetch(_) => false,
        }
    }

    /// Used in user facing messages, e.g. "Failed to delete person."
    pub fn noun_phrase(&self) -> &'static str {
        match self {
            Action::List => "load persons",
            Action::Fetch(_) => "fetch person",
            Action::Create(_) => "create person",
            Action::Update(_, _) => "update person",
            Action::Delete(_) => "delete person",
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub enum ActionResult {
    List(Vec<Person>),
    /// Record returned by fetch, create and update
    Single(Person),
    Deleted(PersonId),
}

impl ActionResult {
    pub fn single(self) -> Option<Person> {
        match self {
            ActionResult::Single(p) => Some(p),
            _ => None,
        }
    }

    pub fn list(self) -> Option<Vec<Person>> {
        match self {
            ActionResult::List(l) => Some(l),
            _ => None,
        }
    }
}
