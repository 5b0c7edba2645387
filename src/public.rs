//! Public mapping layer.
//!
//! Pure transforms from internal store records to the shapes responses are
//! allowed to carry: internal-only fields are dropped (session tokens,
//! account billing counters), datetimes become RFC 3339 strings, and absent
//! optional fields serialize as explicit `null`.

use serde::Serialize;

use crate::store::{
    Account, AiReview, Datasheet, OrderQuote, Org, Package, PackageBuild, PackageDeployment,
    PackageRelease, PinInformation, QuotedComponent, Session, ShippingOption, Snippet,
    SnippetType,
};

/// Account as it leaves the boundary. Billing counters stay internal.
#[derive(Debug, Clone, Serialize)]
pub struct PublicAccount {
    pub account_id: String,
    pub github_username: String,
    pub tscircuit_handle: String,
    pub personal_org_id: Option<String>,
    pub created_at: String,
}

impl From<&Account> for PublicAccount {
    fn from(account: &Account) -> Self {
        Self {
            account_id: account.account_id.to_string(),
            github_username: account.github_username.clone(),
            tscircuit_handle: account.tscircuit_handle.clone(),
            personal_org_id: account.personal_org_id.map(|id| id.to_string()),
            created_at: account.created_at.to_rfc3339(),
        }
    }
}

/// Session without its bearer token.
#[derive(Debug, Clone, Serialize)]
pub struct PublicSession {
    pub session_id: String,
    pub account_id: String,
    pub is_cli_session: bool,
    pub expires_at: String,
    pub created_at: String,
}

impl From<&Session> for PublicSession {
    fn from(session: &Session) -> Self {
        Self {
            session_id: session.session_id.to_string(),
            account_id: session.account_id.to_string(),
            is_cli_session: session.is_cli_session,
            expires_at: session.expires_at.to_rfc3339(),
            created_at: session.created_at.to_rfc3339(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct PublicPackage {
    pub package_id: String,
    pub name: String,
    pub unscoped_name: String,
    pub owner_tscircuit_handle: String,
    pub description: Option<String>,
    pub creator_account_id: String,
    pub latest_package_release_id: Option<String>,
    pub star_count: u64,
    pub is_snippet: bool,
    pub is_private: bool,
    pub created_at: String,
    pub updated_at: String,
}

impl From<&Package> for PublicPackage {
    fn from(package: &Package) -> Self {
        Self {
            package_id: package.package_id.to_string(),
            name: package.name.clone(),
            unscoped_name: package.unscoped_name.clone(),
            owner_tscircuit_handle: package.owner_tscircuit_handle.clone(),
            description: package.description.clone(),
            creator_account_id: package.creator_account_id.to_string(),
            latest_package_release_id: package
                .latest_package_release_id
                .map(|id| id.to_string()),
            star_count: package.star_count,
            is_snippet: package.is_snippet,
            is_private: package.is_private,
            created_at: package.created_at.to_rfc3339(),
            updated_at: package.updated_at.to_rfc3339(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct PublicPackageRelease {
    pub package_release_id: String,
    pub package_id: String,
    pub version: String,
    pub is_latest: bool,
    pub is_locked: bool,
    pub created_at: String,
}

impl From<&PackageRelease> for PublicPackageRelease {
    fn from(release: &PackageRelease) -> Self {
        Self {
            package_release_id: release.package_release_id.to_string(),
            package_id: release.package_id.to_string(),
            version: release.version.clone(),
            is_latest: release.is_latest,
            is_locked: release.is_locked,
            created_at: release.created_at.to_rfc3339(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct PublicPackageBuild {
    pub package_build_id: String,
    pub package_release_id: String,
    pub transpiled: bool,
    pub circuit_json_build_error: Option<String>,
    pub build_completed_at: Option<String>,
    pub created_at: String,
}

impl From<&PackageBuild> for PublicPackageBuild {
    fn from(build: &PackageBuild) -> Self {
        Self {
            package_build_id: build.package_build_id.to_string(),
            package_release_id: build.package_release_id.to_string(),
            transpiled: build.transpiled,
            circuit_json_build_error: build.circuit_json_build_error.clone(),
            build_completed_at: build.build_completed_at.map(|t| t.to_rfc3339()),
            created_at: build.created_at.to_rfc3339(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct PublicPackageDeployment {
    pub package_deployment_id: String,
    pub package_release_id: String,
    pub package_build_id: String,
    pub is_production: bool,
    pub created_at: String,
}

impl From<&PackageDeployment> for PublicPackageDeployment {
    fn from(deployment: &PackageDeployment) -> Self {
        Self {
            package_deployment_id: deployment.package_deployment_id.to_string(),
            package_release_id: deployment.package_release_id.to_string(),
            package_build_id: deployment.package_build_id.to_string(),
            is_production: deployment.is_production,
            created_at: deployment.created_at.to_rfc3339(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct PublicSnippet {
    pub snippet_id: String,
    pub unscoped_name: String,
    pub name: String,
    pub owner_name: String,
    pub code: String,
    pub snippet_type: SnippetType,
    pub description: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

impl From<&Snippet> for PublicSnippet {
    fn from(snippet: &Snippet) -> Self {
        Self {
            snippet_id: snippet.snippet_id.to_string(),
            unscoped_name: snippet.unscoped_name.clone(),
            name: format!("{}/{}", snippet.owner_name, snippet.unscoped_name),
            owner_name: snippet.owner_name.clone(),
            code: snippet.code.clone(),
            snippet_type: snippet.snippet_type,
            description: snippet.description.clone(),
            created_at: snippet.created_at.to_rfc3339(),
            updated_at: snippet.updated_at.to_rfc3339(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct PublicDatasheet {
    pub datasheet_id: String,
    pub chip_name: String,
    pub pin_information: Option<Vec<PinInformation>>,
    pub datasheet_pdf_urls: Option<Vec<String>>,
    pub ai_description: Option<String>,
    pub is_popular: bool,
    pub created_at: String,
}

impl From<&Datasheet> for PublicDatasheet {
    fn from(datasheet: &Datasheet) -> Self {
        Self {
            datasheet_id: datasheet.datasheet_id.to_string(),
            chip_name: datasheet.chip_name.clone(),
            pin_information: datasheet.pin_information.clone(),
            datasheet_pdf_urls: datasheet.datasheet_pdf_urls.clone(),
            ai_description: datasheet.ai_description.clone(),
            is_popular: datasheet.is_popular,
            created_at: datasheet.created_at.to_rfc3339(),
        }
    }
}

/// AI review with its derived `display_status`.
#[derive(Debug, Clone, Serialize)]
pub struct PublicAiReview {
    pub ai_review_id: String,
    pub package_release_id: Option<String>,
    pub ai_review_text: Option<String>,
    pub display_status: String,
    pub start_processing_at: Option<String>,
    pub finished_processing_at: Option<String>,
    pub processing_error: Option<String>,
    pub created_at: String,
}

impl From<&AiReview> for PublicAiReview {
    fn from(review: &AiReview) -> Self {
        Self {
            ai_review_id: review.ai_review_id.to_string(),
            package_release_id: review.package_release_id.map(|id| id.to_string()),
            ai_review_text: review.ai_review_text.clone(),
            display_status: review.display_status().to_string(),
            start_processing_at: review.start_processing_at.map(|t| t.to_rfc3339()),
            finished_processing_at: review.finished_processing_at.map(|t| t.to_rfc3339()),
            processing_error: review.processing_error.clone(),
            created_at: review.created_at.to_rfc3339(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct PublicOrderQuote {
    pub order_quote_id: String,
    pub account_id: String,
    pub package_release_id: String,
    pub vendor_name: String,
    pub quoted_components: Vec<QuotedComponent>,
    pub bare_pcb_cost: f64,
    pub shipping_options: Vec<ShippingOption>,
    pub total_cost_without_shipping: f64,
    pub is_completed: bool,
    pub is_processing: bool,
    pub created_at: String,
}

impl From<&OrderQuote> for PublicOrderQuote {
    fn from(quote: &OrderQuote) -> Self {
        Self {
            order_quote_id: quote.order_quote_id.to_string(),
            account_id: quote.account_id.to_string(),
            package_release_id: quote.package_release_id.to_string(),
            vendor_name: quote.vendor_name.clone(),
            quoted_components: quote.quoted_components.clone(),
            bare_pcb_cost: quote.bare_pcb_cost,
            shipping_options: quote.shipping_options.clone(),
            total_cost_without_shipping: quote.total_cost_without_shipping,
            is_completed: quote.is_completed,
            is_processing: quote.is_processing,
            created_at: quote.created_at.to_rfc3339(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct PublicOrg {
    pub org_id: String,
    pub name: String,
    pub github_handle: Option<String>,
    pub owner_account_id: String,
    pub is_personal_org: bool,
    pub member_count: usize,
    pub created_at: String,
}

impl From<&Org> for PublicOrg {
    fn from(org: &Org) -> Self {
        Self {
            org_id: org.org_id.to_string(),
            name: org.name.clone(),
            github_handle: org.github_handle.clone(),
            owner_account_id: org.owner_account_id.to_string(),
            is_personal_org: org.is_personal_org,
            member_count: org.member_account_ids.len(),
            created_at: org.created_at.to_rfc3339(),
        }
    }
}
