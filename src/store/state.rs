//! # In-Memory Store
//!
//! Ordered collections of registry entities behind a single `RwLock`.
//!
//! ## Invariants
//! - STORE-1: Every id is unique across the store's lifetime
//! - STORE-2: List operations preserve insertion order
//! - STORE-3: A mutation either fully lands or leaves prior state unchanged
//!
//! Handlers receive a `Store` handle by injection; there is no ambient
//! global state. All operations are short synchronous critical sections.

use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use chrono::{Duration, Utc};
use serde::Serialize;
use uuid::Uuid;

use super::errors::{StoreError, StoreResult};
use super::records::{
    Account, AiReview, Datasheet, NewOrg, NewPackage, NewSnippet, OrderQuote, Org, Package,
    PackageBuild, PackageDeployment, PackageRelease, PinInformation, QuotedComponent, Session,
    ShippingOption, Snippet,
};

/// Fixed vendor list used by the order-quote batch operation.
pub const QUOTE_VENDORS: [&str; 2] = ["jlcpcb", "pcbway"];

/// Result cap applied to search operations when the caller gives no limit.
pub const DEFAULT_SEARCH_LIMIT: usize = 50;

/// Review text written when an AI review is processed.
pub const PLACEHOLDER_AI_REVIEW_TEXT: &str = "Placeholder AI Review";

/// All collections owned by the store, in insertion order.
#[derive(Debug, Default, Clone, Serialize)]
pub struct StoreState {
    pub accounts: Vec<Account>,
    pub sessions: Vec<Session>,
    pub packages: Vec<Package>,
    pub package_releases: Vec<PackageRelease>,
    pub package_builds: Vec<PackageBuild>,
    pub package_deployments: Vec<PackageDeployment>,
    pub snippets: Vec<Snippet>,
    pub datasheets: Vec<Datasheet>,
    pub ai_reviews: Vec<AiReview>,
    pub order_quotes: Vec<OrderQuote>,
    pub orgs: Vec<Org>,
}

/// Optional predicates for `list_packages`. Unset fields match everything.
#[derive(Debug, Default, Clone)]
pub struct PackageFilter {
    pub owner_tscircuit_handle: Option<String>,
    pub is_snippet: Option<bool>,
    pub creator_account_id: Option<Uuid>,
}

/// Optional predicates for `list_datasheets`.
#[derive(Debug, Default, Clone)]
pub struct DatasheetFilter {
    pub chip_name: Option<String>,
    pub is_popular: Option<bool>,
}

/// Handle to the in-memory store.
pub struct Store {
    state: RwLock<StoreState>,
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}

impl Store {
    /// Create an empty store.
    pub fn new() -> Self {
        Self {
            state: RwLock::new(StoreState::default()),
        }
    }

    /// Create a store pre-populated with the given collections.
    pub fn with_state(state: StoreState) -> Self {
        Self {
            state: RwLock::new(state),
        }
    }

    fn read(&self) -> StoreResult<RwLockReadGuard<'_, StoreState>> {
        self.state.read().map_err(|_| StoreError::LockPoisoned)
    }

    fn write(&self) -> StoreResult<RwLockWriteGuard<'_, StoreState>> {
        self.state.write().map_err(|_| StoreError::LockPoisoned)
    }

    /// Full clone of every collection, for `/api/_fake/db` and tests.
    pub fn snapshot(&self) -> StoreResult<StoreState> {
        Ok(self.read()?.clone())
    }

    /// Replace all collections wholesale. Used by the seed operation.
    pub fn replace(&self, state: StoreState) -> StoreResult<()> {
        *self.write()? = state;
        Ok(())
    }

    // ==================
    // Accounts
    // ==================

    pub fn add_account(
        &self,
        github_username: impl Into<String>,
        tscircuit_handle: impl Into<String>,
    ) -> StoreResult<Account> {
        let account = Account {
            account_id: Uuid::new_v4(),
            github_username: github_username.into(),
            tscircuit_handle: tscircuit_handle.into(),
            personal_org_id: None,
            balance_cents: 0,
            ai_tokens_used: 0,
            created_at: Utc::now(),
        };
        self.write()?.accounts.push(account.clone());
        Ok(account)
    }

    pub fn get_account_by_id(&self, id: Uuid) -> StoreResult<Option<Account>> {
        Ok(self
            .read()?
            .accounts
            .iter()
            .find(|a| a.account_id == id)
            .cloned())
    }

    pub fn get_account_by_handle(&self, handle: &str) -> StoreResult<Option<Account>> {
        Ok(self
            .read()?
            .accounts
            .iter()
            .find(|a| a.tscircuit_handle == handle)
            .cloned())
    }

    pub fn search_accounts(&self, query: &str, limit: usize) -> StoreResult<Vec<Account>> {
        let state = self.read()?;
        Ok(state
            .accounts
            .iter()
            .filter(|a| text_matches(query, &[&a.tscircuit_handle, &a.github_username]))
            .take(limit)
            .cloned()
            .collect())
    }

    pub fn delete_account(&self, id: Uuid) -> StoreResult<bool> {
        let mut state = self.write()?;
        let before = state.accounts.len();
        state.accounts.retain(|a| a.account_id != id);
        Ok(state.accounts.len() != before)
    }

    // ==================
    // Sessions
    // ==================

    pub fn add_session(
        &self,
        account_id: Uuid,
        token: impl Into<String>,
        is_cli_session: bool,
    ) -> StoreResult<Session> {
        let now = Utc::now();
        let session = Session {
            session_id: Uuid::new_v4(),
            account_id,
            token: token.into(),
            is_cli_session,
            expires_at: now + Duration::days(30),
            created_at: now,
        };
        self.write()?.sessions.push(session.clone());
        Ok(session)
    }

    pub fn get_session_by_token(&self, token: &str) -> StoreResult<Option<Session>> {
        Ok(self
            .read()?
            .sessions
            .iter()
            .find(|s| s.token == token)
            .cloned())
    }

    pub fn list_sessions_for_account(&self, account_id: Uuid) -> StoreResult<Vec<Session>> {
        Ok(self
            .read()?
            .sessions
            .iter()
            .filter(|s| s.account_id == account_id)
            .cloned()
            .collect())
    }

    pub fn delete_session(&self, id: Uuid) -> StoreResult<bool> {
        let mut state = self.write()?;
        let before = state.sessions.len();
        state.sessions.retain(|s| s.session_id != id);
        Ok(state.sessions.len() != before)
    }

    // ==================
    // Packages
    // ==================

    pub fn add_package(&self, new: NewPackage) -> StoreResult<Package> {
        let now = Utc::now();
        let package = Package {
            package_id: Uuid::new_v4(),
            name: new.name,
            unscoped_name: new.unscoped_name,
            owner_tscircuit_handle: new.owner_tscircuit_handle,
            description: new.description,
            creator_account_id: new.creator_account_id,
            latest_package_release_id: None,
            star_count: 0,
            is_snippet: new.is_snippet,
            is_private: new.is_private,
            created_at: now,
            updated_at: now,
        };
        self.write()?.packages.push(package.clone());
        Ok(package)
    }

    pub fn get_package_by_id(&self, id: Uuid) -> StoreResult<Option<Package>> {
        Ok(self
            .read()?
            .packages
            .iter()
            .find(|p| p.package_id == id)
            .cloned())
    }

    pub fn get_package_by_name(&self, name: &str) -> StoreResult<Option<Package>> {
        Ok(self.read()?.packages.iter().find(|p| p.name == name).cloned())
    }

    pub fn list_packages(&self, filter: &PackageFilter) -> StoreResult<Vec<Package>> {
        let state = self.read()?;
        Ok(state
            .packages
            .iter()
            .filter(|p| {
                filter
                    .owner_tscircuit_handle
                    .as_ref()
                    .map_or(true, |h| &p.owner_tscircuit_handle == h)
                    && filter.is_snippet.map_or(true, |v| p.is_snippet == v)
                    && filter
                        .creator_account_id
                        .map_or(true, |id| p.creator_account_id == id)
            })
            .cloned()
            .collect())
    }

    pub fn search_packages(&self, query: &str, limit: usize) -> StoreResult<Vec<Package>> {
        let state = self.read()?;
        Ok(state
            .packages
            .iter()
            .filter(|p| {
                text_matches(
                    query,
                    &[&p.name, p.description.as_deref().unwrap_or_default()],
                )
            })
            .take(limit)
            .cloned()
            .collect())
    }

    // ==================
    // Package releases
    // ==================

    /// Append a release and make it the package's latest. Previous releases
    /// of the same package lose their `is_latest` flag in the same write.
    pub fn add_package_release(
        &self,
        package_id: Uuid,
        version: impl Into<String>,
    ) -> StoreResult<PackageRelease> {
        let now = Utc::now();
        let release = PackageRelease {
            package_release_id: Uuid::new_v4(),
            package_id,
            version: version.into(),
            is_latest: true,
            is_locked: false,
            created_at: now,
        };
        let mut state = self.write()?;
        for existing in state
            .package_releases
            .iter_mut()
            .filter(|r| r.package_id == package_id)
        {
            existing.is_latest = false;
        }
        if let Some(package) = state
            .packages
            .iter_mut()
            .find(|p| p.package_id == package_id)
        {
            package.latest_package_release_id = Some(release.package_release_id);
            package.updated_at = now;
        }
        state.package_releases.push(release.clone());
        Ok(release)
    }

    pub fn get_package_release_by_id(&self, id: Uuid) -> StoreResult<Option<PackageRelease>> {
        Ok(self
            .read()?
            .package_releases
            .iter()
            .find(|r| r.package_release_id == id)
            .cloned())
    }

    pub fn list_package_releases(
        &self,
        package_id: Option<Uuid>,
    ) -> StoreResult<Vec<PackageRelease>> {
        Ok(self
            .read()?
            .package_releases
            .iter()
            .filter(|r| package_id.map_or(true, |id| r.package_id == id))
            .cloned()
            .collect())
    }

    // ==================
    // Package builds and deployments
    // ==================

    pub fn get_package_build_by_id(&self, id: Uuid) -> StoreResult<Option<PackageBuild>> {
        Ok(self
            .read()?
            .package_builds
            .iter()
            .find(|b| b.package_build_id == id)
            .cloned())
    }

    pub fn list_package_builds(
        &self,
        package_release_id: Option<Uuid>,
    ) -> StoreResult<Vec<PackageBuild>> {
        Ok(self
            .read()?
            .package_builds
            .iter()
            .filter(|b| package_release_id.map_or(true, |id| b.package_release_id == id))
            .cloned()
            .collect())
    }

    pub fn add_package_deployment(
        &self,
        package_release_id: Uuid,
        package_build_id: Uuid,
    ) -> StoreResult<PackageDeployment> {
        let deployment = PackageDeployment {
            package_deployment_id: Uuid::new_v4(),
            package_release_id,
            package_build_id,
            is_production: false,
            created_at: Utc::now(),
        };
        self.write()?.package_deployments.push(deployment.clone());
        Ok(deployment)
    }

    pub fn get_package_deployment_by_id(
        &self,
        id: Uuid,
    ) -> StoreResult<Option<PackageDeployment>> {
        Ok(self
            .read()?
            .package_deployments
            .iter()
            .find(|d| d.package_deployment_id == id)
            .cloned())
    }

    // ==================
    // Snippets
    // ==================

    pub fn add_snippet(&self, new: NewSnippet) -> StoreResult<Snippet> {
        let now = Utc::now();
        let snippet = Snippet {
            snippet_id: Uuid::new_v4(),
            unscoped_name: new.unscoped_name,
            owner_name: new.owner_name,
            code: new.code,
            snippet_type: new.snippet_type,
            description: new.description,
            created_at: now,
            updated_at: now,
        };
        self.write()?.snippets.push(snippet.clone());
        Ok(snippet)
    }

    pub fn get_snippet_by_id(&self, id: Uuid) -> StoreResult<Option<Snippet>> {
        Ok(self
            .read()?
            .snippets
            .iter()
            .find(|s| s.snippet_id == id)
            .cloned())
    }

    /// Most recently inserted snippets first, capped at `limit`.
    pub fn list_latest_snippets(&self, limit: usize) -> StoreResult<Vec<Snippet>> {
        Ok(self
            .read()?
            .snippets
            .iter()
            .rev()
            .take(limit)
            .cloned()
            .collect())
    }

    // ==================
    // Datasheets
    // ==================

    pub fn add_datasheet(&self, chip_name: impl Into<String>) -> StoreResult<Datasheet> {
        let datasheet = Datasheet {
            datasheet_id: Uuid::new_v4(),
            chip_name: chip_name.into(),
            pin_information: None,
            datasheet_pdf_urls: None,
            ai_description: None,
            is_popular: false,
            created_at: Utc::now(),
        };
        self.write()?.datasheets.push(datasheet.clone());
        Ok(datasheet)
    }

    pub fn get_datasheet_by_id(&self, id: Uuid) -> StoreResult<Option<Datasheet>> {
        Ok(self
            .read()?
            .datasheets
            .iter()
            .find(|d| d.datasheet_id == id)
            .cloned())
    }

    pub fn list_datasheets(&self, filter: &DatasheetFilter) -> StoreResult<Vec<Datasheet>> {
        Ok(self
            .read()?
            .datasheets
            .iter()
            .filter(|d| {
                filter
                    .chip_name
                    .as_ref()
                    .map_or(true, |name| &d.chip_name == name)
                    && filter.is_popular.map_or(true, |v| d.is_popular == v)
            })
            .cloned()
            .collect())
    }

    /// Fill enrichment fields on every datasheet still pending. Returns how
    /// many datasheets were populated.
    pub fn process_pending_datasheets(&self) -> StoreResult<usize> {
        let mut state = self.write()?;
        let mut processed = 0;
        for datasheet in state
            .datasheets
            .iter_mut()
            .filter(|d| d.pin_information.is_none())
        {
            datasheet.pin_information = Some(placeholder_pin_information());
            datasheet.datasheet_pdf_urls = Some(vec![format!(
                "https://datasheets.example.com/{}.pdf",
                datasheet.chip_name.to_lowercase()
            )]);
            datasheet.ai_description =
                Some(format!("{} general purpose component", datasheet.chip_name));
            processed += 1;
        }
        Ok(processed)
    }

    // ==================
    // AI reviews
    // ==================

    pub fn add_ai_review(&self, package_release_id: Option<Uuid>) -> StoreResult<AiReview> {
        let review = AiReview {
            ai_review_id: Uuid::new_v4(),
            package_release_id,
            ai_review_text: None,
            start_processing_at: None,
            finished_processing_at: None,
            processing_error: None,
            created_at: Utc::now(),
        };
        self.write()?.ai_reviews.push(review.clone());
        Ok(review)
    }

    pub fn get_ai_review_by_id(&self, id: Uuid) -> StoreResult<Option<AiReview>> {
        Ok(self
            .read()?
            .ai_reviews
            .iter()
            .find(|r| r.ai_review_id == id)
            .cloned())
    }

    pub fn list_ai_reviews(&self) -> StoreResult<Vec<AiReview>> {
        Ok(self.read()?.ai_reviews.clone())
    }

    /// Transition a pending review to completed with placeholder text.
    /// Returns the updated review, or `None` if the id is unknown.
    pub fn complete_ai_review(&self, id: Uuid) -> StoreResult<Option<AiReview>> {
        let mut state = self.write()?;
        let now = Utc::now();
        Ok(state
            .ai_reviews
            .iter_mut()
            .find(|r| r.ai_review_id == id)
            .map(|review| {
                review.ai_review_text = Some(PLACEHOLDER_AI_REVIEW_TEXT.to_string());
                review.start_processing_at.get_or_insert(now);
                review.finished_processing_at = Some(now);
                review.clone()
            }))
    }

    // ==================
    // Order quotes
    // ==================

    /// Create one quote per vendor in `QUOTE_VENDORS`, all inside a single
    /// write-lock acquisition so the batch lands whole.
    pub fn add_vendor_quotes(
        &self,
        account_id: Uuid,
        package_release_id: Uuid,
    ) -> StoreResult<Vec<OrderQuote>> {
        let mut state = self.write()?;
        let now = Utc::now();
        let quotes: Vec<OrderQuote> = QUOTE_VENDORS
            .iter()
            .map(|vendor| OrderQuote {
                order_quote_id: Uuid::new_v4(),
                account_id,
                package_release_id,
                vendor_name: (*vendor).to_string(),
                quoted_components: placeholder_quoted_components(),
                bare_pcb_cost: 4.2,
                shipping_options: placeholder_shipping_options(),
                total_cost_without_shipping: 12.5,
                is_completed: true,
                is_processing: false,
                created_at: now,
            })
            .collect();
        state.order_quotes.extend(quotes.iter().cloned());
        Ok(quotes)
    }

    pub fn get_order_quote_by_id(&self, id: Uuid) -> StoreResult<Option<OrderQuote>> {
        Ok(self
            .read()?
            .order_quotes
            .iter()
            .find(|q| q.order_quote_id == id)
            .cloned())
    }

    // ==================
    // Orgs
    // ==================

    pub fn add_org(&self, new: NewOrg) -> StoreResult<Org> {
        let org = Org {
            org_id: Uuid::new_v4(),
            name: new.name,
            github_handle: new.github_handle,
            owner_account_id: new.owner_account_id,
            is_personal_org: new.is_personal_org,
            member_account_ids: vec![new.owner_account_id],
            created_at: Utc::now(),
        };
        self.write()?.orgs.push(org.clone());
        Ok(org)
    }

    pub fn get_org_by_id(&self, id: Uuid) -> StoreResult<Option<Org>> {
        Ok(self.read()?.orgs.iter().find(|o| o.org_id == id).cloned())
    }

    pub fn search_orgs(&self, query: &str, limit: usize) -> StoreResult<Vec<Org>> {
        let state = self.read()?;
        Ok(state
            .orgs
            .iter()
            .filter(|o| {
                text_matches(
                    query,
                    &[&o.name, o.github_handle.as_deref().unwrap_or_default()],
                )
            })
            .take(limit)
            .cloned()
            .collect())
    }
}

/// Case-insensitive substring match against any of the haystacks.
/// An empty query matches every record.
fn text_matches(query: &str, haystacks: &[&str]) -> bool {
    if query.is_empty() {
        return true;
    }
    let needle = query.to_lowercase();
    haystacks
        .iter()
        .any(|h| h.to_lowercase().contains(&needle))
}

fn placeholder_pin_information() -> Vec<PinInformation> {
    vec![
        PinInformation {
            pin_number: "1".to_string(),
            name: "VCC".to_string(),
            description: "Positive supply voltage".to_string(),
            capabilities: vec!["power".to_string()],
        },
        PinInformation {
            pin_number: "2".to_string(),
            name: "GND".to_string(),
            description: "Ground reference".to_string(),
            capabilities: vec!["power".to_string()],
        },
        PinInformation {
            pin_number: "3".to_string(),
            name: "IO1".to_string(),
            description: "General purpose input/output".to_string(),
            capabilities: vec!["digital".to_string(), "pwm".to_string()],
        },
    ]
}

fn placeholder_quoted_components() -> Vec<QuotedComponent> {
    vec![QuotedComponent {
        manufacturer_part_number: "RC0402FR-0710KL".to_string(),
        supplier_part_number: "C60490".to_string(),
        quantity: 10,
        unit_price: 0.004,
        available: true,
    }]
}

fn placeholder_shipping_options() -> Vec<ShippingOption> {
    vec![
        ShippingOption {
            carrier: "DHL".to_string(),
            service: "Express Worldwide".to_string(),
            cost: 18.0,
        },
        ShippingOption {
            carrier: "USPS".to_string(),
            service: "Priority".to_string(),
            cost: 9.5,
        },
    ]
}
