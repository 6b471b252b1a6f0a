//! Redirect intents and the navigators that carry them out

use crate::error::Result;
use std::cell::RefCell;

/// Outcome of a session check: stay on the page or leave for `target`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Navigation {
    Stay,
    Redirect { target: String },
}

impl Navigation {
    pub fn redirect(target: impl Into<String>) -> Self {
        Self::Redirect {
            target: target.into(),
        }
    }

    pub fn is_redirect(&self) -> bool {
        matches!(self, Self::Redirect { .. })
    }

    /// Where to go, if anywhere
    pub fn target(&self) -> Option<&str> {
        match self {
            Self::Stay => None,
            Self::Redirect { target } => Some(target),
        }
    }

    /// Hand a redirect to `navigator`; `Stay` is a no-op
    ///
    /// # Errors
    ///
    /// Returns whatever the navigator reports when it cannot navigate
    pub fn follow<N: Navigator + ?Sized>(&self, navigator: &N) -> Result<()> {
        match self {
            Self::Stay => Ok(()),
            Self::Redirect { target } => navigator.navigate(target),
        }
    }
}

/// Performs a full-page navigation
pub trait Navigator {
    fn navigate(&self, target: &str) -> Result<()>;
}

/// Navigator that only remembers where it was sent
#[derive(Debug, Default)]
pub struct RecordingNavigator {
    visited: RefCell<Vec<String>>,
}

impl RecordingNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Targets in the order they were requested
    pub fn visited(&self) -> Vec<String> {
        self.visited.borrow().clone()
    }

    pub fn last(&self) -> Option<String> {
        self.visited.borrow().last().cloned()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, target: &str) -> Result<()> {
        self.visited.borrow_mut().push(target.to_string());
        Ok(())
    }
}
