//! Entity records held by the in-memory store.
//!
//! Every record is identified by a `Uuid` assigned at creation and owned by
//! the store. Foreign-key style fields (`package_id`, `package_release_id`,
//! `account_id`) are plain ids; referential checks happen in the route
//! handlers that traverse them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A registry user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Account {
    pub account_id: Uuid,
    pub github_username: String,
    pub tscircuit_handle: String,
    /// Personal org created alongside the account.
    pub personal_org_id: Option<Uuid>,
    pub balance_cents: i64,
    pub ai_tokens_used: i64,
    pub created_at: DateTime<Utc>,
}

/// An authenticated login. The raw bearer token is stored directly; this is
/// a test fixture, not a credential store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    pub session_id: Uuid,
    pub account_id: Uuid,
    pub token: String,
    pub is_cli_session: bool,
    pub expires_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

/// A published circuit design. `name` is always `owner/unscoped_name`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Package {
    pub package_id: Uuid,
    pub name: String,
    pub unscoped_name: String,
    pub owner_tscircuit_handle: String,
    pub description: Option<String>,
    pub creator_account_id: Uuid,
    pub latest_package_release_id: Option<Uuid>,
    pub star_count: u64,
    pub is_snippet: bool,
    pub is_private: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// An immutable release of a package.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PackageRelease {
    pub package_release_id: Uuid,
    pub package_id: Uuid,
    pub version: String,
    pub is_latest: bool,
    pub is_locked: bool,
    pub created_at: DateTime<Utc>,
}

/// A build of a release.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PackageBuild {
    pub package_build_id: Uuid,
    pub package_release_id: Uuid,
    pub transpiled: bool,
    pub circuit_json_build_error: Option<String>,
    pub build_completed_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

/// A deployment of a build.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PackageDeployment {
    pub package_deployment_id: Uuid,
    pub package_release_id: Uuid,
    pub package_build_id: Uuid,
    pub is_production: bool,
    pub created_at: DateTime<Utc>,
}

/// Kind of a shareable snippet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SnippetType {
    Board,
    Package,
    Model,
    Footprint,
}

/// Legacy shareable circuit design with inline code.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Snippet {
    pub snippet_id: Uuid,
    pub unscoped_name: String,
    pub owner_name: String,
    pub code: String,
    pub snippet_type: SnippetType,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// One pin's metadata inside a processed datasheet.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PinInformation {
    pub pin_number: String,
    pub name: String,
    pub description: String,
    pub capabilities: Vec<String>,
}

/// Chip metadata. Created with only a `chip_name`; enrichment fields stay
/// null until the fake async-processing endpoint fills them in.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Datasheet {
    pub datasheet_id: Uuid,
    pub chip_name: String,
    pub pin_information: Option<Vec<PinInformation>>,
    pub datasheet_pdf_urls: Option<Vec<String>>,
    pub ai_description: Option<String>,
    pub is_popular: bool,
    pub created_at: DateTime<Utc>,
}

/// An AI review job. A review with no `ai_review_text` is pending; the fake
/// processing endpoint completes it with placeholder text.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AiReview {
    pub ai_review_id: Uuid,
    pub package_release_id: Option<Uuid>,
    pub ai_review_text: Option<String>,
    pub start_processing_at: Option<DateTime<Utc>>,
    pub finished_processing_at: Option<DateTime<Utc>>,
    pub processing_error: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl AiReview {
    /// Derived status surfaced to clients: `pending` until review text
    /// exists, `completed` afterwards. There are no other states.
    pub fn display_status(&self) -> &'static str {
        if self.ai_review_text.is_some() {
            "completed"
        } else {
            "pending"
        }
    }
}

/// A single component line inside a vendor quote.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuotedComponent {
    pub manufacturer_part_number: String,
    pub supplier_part_number: String,
    pub quantity: u32,
    pub unit_price: f64,
    pub available: bool,
}

/// A shipping option offered by a quoting vendor.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShippingOption {
    pub carrier: String,
    pub service: String,
    pub cost: f64,
}

/// A vendor quotation tied to a package release and the requesting account.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderQuote {
    pub order_quote_id: Uuid,
    pub account_id: Uuid,
    pub package_release_id: Uuid,
    pub vendor_name: String,
    pub quoted_components: Vec<QuotedComponent>,
    pub bare_pcb_cost: f64,
    pub shipping_options: Vec<ShippingOption>,
    pub total_cost_without_shipping: f64,
    pub is_completed: bool,
    pub is_processing: bool,
    pub created_at: DateTime<Utc>,
}

/// A group of accounts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Org {
    pub org_id: Uuid,
    pub name: String,
    pub github_handle: Option<String>,
    pub owner_account_id: Uuid,
    pub is_personal_org: bool,
    pub member_account_ids: Vec<Uuid>,
    pub created_at: DateTime<Utc>,
}

// ==================
// Creation parameters
// ==================

/// Fields required to create a package. Everything else is defaulted by the
/// store (`add_package`).
#[derive(Debug, Clone)]
pub struct NewPackage {
    pub name: String,
    pub unscoped_name: String,
    pub owner_tscircuit_handle: String,
    pub description: Option<String>,
    pub creator_account_id: Uuid,
    pub is_snippet: bool,
    pub is_private: bool,
}

/// Fields required to create a snippet.
#[derive(Debug, Clone)]
pub struct NewSnippet {
    pub unscoped_name: String,
    pub owner_name: String,
    pub code: String,
    pub snippet_type: SnippetType,
    pub description: Option<String>,
}

/// Fields required to create an org.
#[derive(Debug, Clone)]
pub struct NewOrg {
    pub name: String,
    pub github_handle: Option<String>,
    pub owner_account_id: Uuid,
    pub is_personal_org: bool,
}
