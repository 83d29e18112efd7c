use serde::{Deserialize, Serialize};

use crate::consts::consts::PersonId;

/// A person as exchanged with the REST service.
///
/// `id` is only present once the server has persisted the record, a freshly
/// drafted person never carries one.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Person {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<PersonId>,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(default)]
    pub age: i32,
}

impl Person {
    pub fn new(first_name: &str, last_name: &str, email: &str, age: i32) -> Self {
        Person {
            id: None,
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            email: email.to_string(),
            age,
        }
    }

    /// Empty draft used when the add dialog is opened
    pub fn blank() -> Self {
        Person::new("", "", "", 0)
    }

    pub fn with_id(mut self, id: PersonId) -> Self {
        self.id = Some(id);
        self
    }

    pub fn without_id(mut self) -> Self {
        self.id = None;
        self
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    pub fn is_persisted(&self) -> bool {
        self.id.is_some()
    }

    pub fn new_test() -> Self {
        Person::new("Ann", "Lee", "ann@x.com", 30).with_id(PersonId(1))
    }
}

impl Default for Person {
    fn default() -> Self {
        Person::blank()
    }
}

/// Parses the age field the way the form input does: leading whitespace and
/// a sign are accepted, then the longest run of digits is read. Anything that
/// does not start with a number (or does not fit) falls back to `0`.
pub fn parse_age(raw: &str) -> i32 {
    let trimmed = raw.trim_start();

    let (negative, unsigned) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };

    let digits_end = unsigned
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(unsigned.len());

    let digits = &unsigned[..digits_end];

    if digits.is_empty() {
        return 0;
    }

    let parsed = match negative {
        true => format!("-{}", digits).parse::<i32>(),
        false => digits.parse::<i32>(),
    };

    parsed.unwrap_or(0)
}
