//! In-memory store for the fake registry backend.
//!
//! Holds ordered collections of every entity the API serves and provides
//! deterministic CRUD/query operations. Handlers receive a [`Store`] handle
//! by dependency injection; no external I/O happens here.

mod errors;
mod records;
mod seed;
mod state;

pub use errors::{StoreError, StoreResult};
pub use records::{
    Account, AiReview, Datasheet, NewOrg, NewPackage, NewSnippet, OrderQuote, Org, Package,
    PackageBuild, PackageDeployment, PackageRelease, PinInformation, QuotedComponent, Session,
    ShippingOption, Snippet, SnippetType,
};
pub use seed::{fixture_state, SEED_ACCOUNT_HANDLE, SEED_SESSION_TOKEN};
pub use state::{
    DatasheetFilter, PackageFilter, Store, StoreState, DEFAULT_SEARCH_LIMIT,
    PLACEHOLDER_AI_REVIEW_TEXT, QUOTE_VENDORS,
};
