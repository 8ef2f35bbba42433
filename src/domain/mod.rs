//! Core domain types shared across the crate.
//!
//! This module contains the entity types deserialized from the backend
//! (articles, researchers, profiles) and the centralized error type. Domain
//! types carry no behavior beyond formatting helpers; all state transitions
//! live in the application layer.

pub mod article;
pub mod error;
pub mod researcher;

pub use article::{Article, Author, QualisTier, ScoredArticle};
pub use error::{Result, SearchError};
pub use researcher::{Researcher, ResearcherProfile, ResearcherSummary};
