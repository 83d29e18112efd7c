use crate::{consts::consts::PersonId, model::person::Person};

use super::filter::filter;

/// What the table body shows
#[derive(Debug, PartialEq)]
pub enum RenderState<'a> {
    Loading,
    Empty,
    Populated(Vec<&'a Person>),
}

/// Owns the people known to the admin view together with the search text.
///
/// This is the only copy of the collection on the client, every change goes
/// through the methods below.
#[derive(Debug, Clone)]
pub struct PersonList {
    persons: Vec<Person>,
    search: String,
    loading: bool,
}

impl PersonList {
    /// Starts out loading, the first fetch is issued on mount
    pub fn new() -> Self {
        Self {
            persons: vec![],
            search: String::new(),
            loading: true,
        }
    }

    pub fn persons(&self) -> &[Person] {
        &self.persons
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn get(&self, id: PersonId) -> Option<&Person> {
        self.persons.iter().find(|p| p.id == Some(id))
    }

    pub fn set_search(&mut self, search: &str) {
        self.search = search.to_string();
    }

    pub fn begin_loading(&mut self) {
        self.loading = true;
    }

    pub fn finish_loading(&mut self) {
        self.loading = false;
    }

    pub fn replace(&mut self, persons: Vec<Person>) {
        self.persons = persons;
    }

    /// Applies a record returned by the server: replaces the row with the same
    /// id in place, otherwise appends it. Records without an id are ignored.
    pub fn merge(&mut self, person: Person) {
        let Some(id) = person.id else {
            log::warn!("Ignoring unsaved person returned by server: {:?}", person);
            return;
        };

        match self.persons.iter_mut().find(|p| p.id == Some(id)) {
            Some(existing) => *existing = person,
            None => self.persons.push(person),
        }
    }

    /// Returns whether a row was removed
    pub fn remove(&mut self, id: PersonId) -> bool {
        let before = self.persons.len();

        self.persons.retain(|p| p.id != Some(id));

        self.persons.len() != before
    }

    /// Recomputed on every call, there is no index to keep in sync
    pub fn filtered(&self) -> Vec<&Person> {
        filter(&self.persons, &self.search)
    }

    pub fn render_state(&self) -> RenderState<'_> {
        // The filter still runs while loading, but loading wins
        let filtered = self.filtered();

        if self.loading {
            return RenderState::Loading;
        }

        match filtered.is_empty() {
            true => RenderState::Empty,
            false => RenderState::Populated(filtered),
        }
    }
}

impl Default for PersonList {
    fn default() -> Self {
        PersonList::new()
    }
}
