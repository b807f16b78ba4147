//! Test doubles and fixture data shared by unit and behaviour tests.

use std::sync::{Mutex, PoisonError};

use crate::{Catalog, CompletionError, CompletionProvider, CompletionRequest, Restaurant};

/// Stub `CompletionProvider` returning a pre-configured response.
///
/// Every request is recorded so tests can inspect the prompts the ranking
/// engine produced.
#[derive(Debug)]
pub struct StubCompletionProvider {
    response: StubResponse,
    requests: Mutex<Vec<CompletionRequest>>,
}

#[derive(Debug, Clone)]
enum StubResponse {
    Text(String),
    Error(CompletionError),
}

impl StubCompletionProvider {
    /// Create a provider that answers every request with `text`.
    #[must_use]
    pub fn with_text(text: impl Into<String>) -> Self {
        Self::from_response(StubResponse::Text(text.into()))
    }

    /// Create a provider that fails every request with `error`.
    #[must_use]
    pub fn with_error(error: CompletionError) -> Self {
        Self::from_response(StubResponse::Error(error))
    }

    const fn from_response(response: StubResponse) -> Self {
        Self {
            response,
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Requests received so far, oldest first.
    #[must_use]
    pub fn requests(&self) -> Vec<CompletionRequest> {
        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl CompletionProvider for StubCompletionProvider {
    fn complete(&self, request: &CompletionRequest) -> Result<String, CompletionError> {
        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(request.clone());
        match &self.response {
            StubResponse::Text(text) => Ok(text.clone()),
            StubResponse::Error(error) => Err(error.clone()),
        }
    }
}

/// Build a valid restaurant for fixtures.
///
/// # Panics
/// Panics when `name` is blank; fixtures are expected to be well formed.
#[must_use]
#[expect(
    clippy::expect_used,
    reason = "fixture helpers fail fast on malformed test data"
)]
pub fn restaurant(name: &str, location: &str) -> Restaurant {
    Restaurant::new(name, location).expect("fixture restaurant must have a name")
}

/// Five-record catalog spanning three localities.
///
/// Banashankari holds three restaurants priced 800, 600 and 700,
/// Basavanagudi one at 1000, and Indiranagar one at 500.
///
/// # Panics
/// Never in practice: every record carries a name.
#[must_use]
#[expect(
    clippy::expect_used,
    reason = "fixture catalog is statically well formed"
)]
pub fn banashankari_catalog() -> Catalog {
    Catalog::new(vec![
        restaurant("Jalsa", "Banashankari")
            .with_city("Bangalore")
            .with_price(800.0)
            .with_rating(4.1)
            .with_votes(775)
            .with_cuisines(["North Indian", "Mughlai", "Chinese"])
            .with_dishes_liked(["Pasta", "Lunch Buffet"])
            .with_category("Casual Dining"),
        restaurant("Spice Elephant", "Banashankari")
            .with_city("Bangalore")
            .with_price(600.0)
            .with_rating(4.0)
            .with_votes(787)
            .with_cuisines(["Chinese", "North Indian", "Thai"])
            .with_category("Casual Dining"),
        restaurant("San Churro Cafe", "Banashankari")
            .with_city("Bangalore")
            .with_price(700.0)
            .with_rating(3.8)
            .with_votes(918)
            .with_cuisines(["Cafe", "Mexican", "Italian"])
            .with_category("Cafe"),
        restaurant("Addhuri Udupi Bhojana", "Basavanagudi")
            .with_city("Bangalore")
            .with_price(1000.0)
            .with_rating(3.7)
            .with_votes(88)
            .with_cuisines(["South Indian", "North Indian"])
            .with_category("Quick Bites"),
        restaurant("Toit", "Indiranagar")
            .with_city("Bangalore")
            .with_price(500.0)
            .with_rating(4.7)
            .with_votes(14_956)
            .with_cuisines(["Italian", "American", "Pizza"])
            .with_category("Microbrewery"),
    ])
    .expect("fixture catalog records are valid")
}
