use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: u32,
    pub name: String,
    pub username: String,
    pub email: String,
    pub phone: String,
    pub website: String,
    pub address: Address,
    pub company: Company,
}

impl User {
    pub fn handle(&self) -> String {
        format!("@{}", self.username)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Address {
    pub street: String,
    pub suite: String,
    pub city: String,
    pub zipcode: String,
    pub geo: Geo,
}

impl Address {
    pub fn summary(&self) -> String {
        format!("{}, {}, {} {}", self.street, self.suite, self.city, self.zipcode)
    }
}

// The demo API sends coordinates as strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Geo {
    pub lat: String,
    pub lng: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Company {
    pub name: String,
    #[serde(rename = "catchPhrase")]
    pub catch_phrase: String,
    pub bs: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ViewState {
    Loading,
    Error(String),
    Loaded(Vec<User>),
}

#[derive(Debug, Error)]
pub enum UserCardsError {
    #[error("Failed to fetch users: HTTP {status}")]
    HttpStatus { status: u16 },

    // Detail is for logs; the message stays generic.
    #[error("Unable to load users. Please check your connection and try again.")]
    Network(String),

    #[error("Unable to load users: the server sent an unexpected response.")]
    Parse(#[from] serde_json::Error),

    #[error("Failed to read users: {0}")]
    Io(#[from] std::io::Error),
}

impl UserCardsError {
    /// Underlying cause, for logging. The display string is what the page shows.
    pub fn detail(&self) -> String {
        match self {
            UserCardsError::HttpStatus { status } => format!("status {}", status),
            UserCardsError::Network(detail) => detail.clone(),
            UserCardsError::Parse(e) => e.to_string(),
            UserCardsError::Io(e) => e.to_string(),
        }
    }
}
