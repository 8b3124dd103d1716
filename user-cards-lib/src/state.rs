use crate::config::DirectoryConfig;
use crate::render::{render_document, render_view};
use crate::types::*;
use tracing::{info, warn};

/// The page-level unit: one request, then one of two terminal states.
#[derive(Debug, Clone)]
pub struct UserDirectory {
    config: DirectoryConfig,
    state: ViewState,
    requested: bool,
    settled: bool,
}

impl UserDirectory {
    pub fn new(config: DirectoryConfig) -> Self {
        Self {
            config,
            state: ViewState::Loading,
            requested: false,
            settled: false,
        }
    }

    pub fn config(&self) -> &DirectoryConfig {
        &self.config
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    /// Returns the endpoint to request on first display, and `None` on every later call.
    pub fn start(&mut self) -> Option<String> {
        if self.requested {
            return None;
        }
        self.requested = true;
        info!("Requesting users from {}", self.config.endpoint);
        Some(self.config.endpoint.clone())
    }

    pub fn finish(&mut self, result: Result<Vec<User>, UserCardsError>) {
        if !self.requested {
            warn!("Ignoring user list completion before any request was issued");
            return;
        }
        if self.settled {
            warn!("Ignoring duplicate user list completion");
            return;
        }
        self.settled = true;
        self.state = match result {
            Ok(users) => {
                info!("Loaded {} users", users.len());
                ViewState::Loaded(users)
            }
            Err(e) => {
                warn!("Error fetching users: {} ({})", e, e.detail());
                ViewState::Error(e.to_string())
            }
        };
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.state, ViewState::Loading)
    }

    pub fn render(&self) -> String {
        render_view(&self.state, &self.config)
    }

    pub fn render_document(&self) -> String {
        render_document(&self.config, &self.render())
    }
}
