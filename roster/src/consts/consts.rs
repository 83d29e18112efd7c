use std::fmt;

use serde::{Deserialize, Serialize};

// New Type Pattern -- https://doc.rust-lang.org/rust-by-example/generics/new_types.html
/// Server assigned identifier of a person, travels as a bare JSON number
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(transparent)]
pub struct PersonId(pub i64);

impl PersonId {
    pub fn to_number(self) -> i64 {
        self.0
    }
}

impl fmt::Display for PersonId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for PersonId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse::<i64>().map(PersonId)
    }
}

// Values

/// Collection endpoint of the person REST service. Fixed at build time, set
/// `ROSTER_API_BASE_URL` while compiling to point the binary somewhere else.
pub const API_BASE_URL: &str = match option_env!("ROSTER_API_BASE_URL") {
    Some(url) => url,
    None => "http://localhost:8080/PersonREST/api/people",
};

pub const LOADING_PLACEHOLDER: &str = "Loading persons...";
pub const EMPTY_PLACEHOLDER: &str = "No persons found.";
