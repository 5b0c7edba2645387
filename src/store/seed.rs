//! Fixture data loaded by `POST /api/_fake/seed` and at server boot.
//!
//! The seed is deterministic in shape and content: the same accounts, orgs,
//! packages, snippets, and datasheets every time, with a fixed session token
//! so tests can authenticate without a login flow. Ids and timestamps are
//! freshly generated per seed.

use chrono::{Duration, Utc};
use uuid::Uuid;

use super::errors::StoreResult;
use super::records::{
    Account, Datasheet, Org, Package, PackageBuild, PackageDeployment, PackageRelease,
    PinInformation, Session, Snippet, SnippetType,
};
use super::state::{Store, StoreState};

/// Bearer token of the session created by the seed.
pub const SEED_SESSION_TOKEN: &str = "fakereg_seed_session_token";

/// Handle of the account owning the seeded session.
pub const SEED_ACCOUNT_HANDLE: &str = "testuser";

impl Store {
    /// Reset every collection and repopulate the fixture data.
    pub fn seed(&self) -> StoreResult<()> {
        self.replace(fixture_state())
    }
}

/// Build the full fixture state from scratch.
pub fn fixture_state() -> StoreState {
    let now = Utc::now();
    let mut state = StoreState::default();

    // Accounts and their personal orgs.
    let testuser_org_id = Uuid::new_v4();
    let testuser = Account {
        account_id: Uuid::new_v4(),
        github_username: SEED_ACCOUNT_HANDLE.to_string(),
        tscircuit_handle: SEED_ACCOUNT_HANDLE.to_string(),
        personal_org_id: Some(testuser_org_id),
        balance_cents: 500,
        ai_tokens_used: 0,
        created_at: now - Duration::days(30),
    };
    let maker_org_id = Uuid::new_v4();
    let maker = Account {
        account_id: Uuid::new_v4(),
        github_username: "boardmaker".to_string(),
        tscircuit_handle: "boardmaker".to_string(),
        personal_org_id: Some(maker_org_id),
        balance_cents: 0,
        ai_tokens_used: 120,
        created_at: now - Duration::days(90),
    };

    state.orgs.push(Org {
        org_id: testuser_org_id,
        name: SEED_ACCOUNT_HANDLE.to_string(),
        github_handle: Some(SEED_ACCOUNT_HANDLE.to_string()),
        owner_account_id: testuser.account_id,
        is_personal_org: true,
        member_account_ids: vec![testuser.account_id],
        created_at: testuser.created_at,
    });
    state.orgs.push(Org {
        org_id: maker_org_id,
        name: "boardmaker".to_string(),
        github_handle: Some("boardmaker".to_string()),
        owner_account_id: maker.account_id,
        is_personal_org: true,
        member_account_ids: vec![maker.account_id],
        created_at: maker.created_at,
    });
    state.orgs.push(Org {
        org_id: Uuid::new_v4(),
        name: "open-hardware-collective".to_string(),
        github_handle: None,
        owner_account_id: maker.account_id,
        is_personal_org: false,
        member_account_ids: vec![maker.account_id, testuser.account_id],
        created_at: now - Duration::days(60),
    });

    state.sessions.push(Session {
        session_id: Uuid::new_v4(),
        account_id: testuser.account_id,
        token: SEED_SESSION_TOKEN.to_string(),
        is_cli_session: false,
        expires_at: now + Duration::days(30),
        created_at: now - Duration::hours(1),
    });

    // A published package with full release/build/deployment lineage.
    let breakout_id = Uuid::new_v4();
    let breakout_release_id = Uuid::new_v4();
    let breakout_build_id = Uuid::new_v4();
    state.packages.push(Package {
        package_id: breakout_id,
        name: "boardmaker/usb-c-breakout".to_string(),
        unscoped_name: "usb-c-breakout".to_string(),
        owner_tscircuit_handle: "boardmaker".to_string(),
        description: Some("USB-C breakout board with CC resistors".to_string()),
        creator_account_id: maker.account_id,
        latest_package_release_id: Some(breakout_release_id),
        star_count: 12,
        is_snippet: false,
        is_private: false,
        created_at: now - Duration::days(45),
        updated_at: now - Duration::days(2),
    });
    state.package_releases.push(PackageRelease {
        package_release_id: breakout_release_id,
        package_id: breakout_id,
        version: "0.1.0".to_string(),
        is_latest: true,
        is_locked: false,
        created_at: now - Duration::days(2),
    });
    state.package_builds.push(PackageBuild {
        package_build_id: breakout_build_id,
        package_release_id: breakout_release_id,
        transpiled: true,
        circuit_json_build_error: None,
        build_completed_at: Some(now - Duration::days(2)),
        created_at: now - Duration::days(2),
    });
    state.package_deployments.push(PackageDeployment {
        package_deployment_id: Uuid::new_v4(),
        package_release_id: breakout_release_id,
        package_build_id: breakout_build_id,
        is_production: true,
        created_at: now - Duration::days(1),
    });

    // A snippet-style package owned by the seed account.
    state.packages.push(Package {
        package_id: Uuid::new_v4(),
        name: format!("{}/led-flasher", SEED_ACCOUNT_HANDLE),
        unscoped_name: "led-flasher".to_string(),
        owner_tscircuit_handle: SEED_ACCOUNT_HANDLE.to_string(),
        description: Some("Two-transistor LED flasher".to_string()),
        creator_account_id: testuser.account_id,
        latest_package_release_id: None,
        star_count: 3,
        is_snippet: true,
        is_private: false,
        created_at: now - Duration::days(10),
        updated_at: now - Duration::days(10),
    });

    for (i, (name, code, kind)) in [
        (
            "blinking-led",
            "export default () => (\n  <board width=\"10mm\" height=\"10mm\">\n    <led name=\"LED1\" />\n  </board>\n)",
            SnippetType::Board,
        ),
        (
            "timer-555",
            "export default () => (\n  <board width=\"20mm\" height=\"20mm\">\n    <chip name=\"U1\" footprint=\"dip8\" />\n  </board>\n)",
            SnippetType::Board,
        ),
        (
            "soic8-footprint",
            "export const soic8 = () => <footprint name=\"soic8\" />",
            SnippetType::Footprint,
        ),
    ]
    .into_iter()
    .enumerate()
    {
        state.snippets.push(Snippet {
            snippet_id: Uuid::new_v4(),
            unscoped_name: name.to_string(),
            owner_name: SEED_ACCOUNT_HANDLE.to_string(),
            code: code.to_string(),
            snippet_type: kind,
            description: None,
            created_at: now - Duration::days(5) + Duration::hours(i as i64),
            updated_at: now - Duration::days(5) + Duration::hours(i as i64),
        });
    }

    // One already-enriched popular datasheet; everything else arrives via
    // the datasheets/create endpoint and stays pending until processed.
    state.datasheets.push(Datasheet {
        datasheet_id: Uuid::new_v4(),
        chip_name: "RP2040".to_string(),
        pin_information: Some(vec![PinInformation {
            pin_number: "1".to_string(),
            name: "IOVDD".to_string(),
            description: "Digital IO supply".to_string(),
            capabilities: vec!["power".to_string()],
        }]),
        datasheet_pdf_urls: Some(vec![
            "https://datasheets.example.com/rp2040.pdf".to_string()
        ]),
        ai_description: Some("Dual-core Cortex-M0+ microcontroller".to_string()),
        is_popular: true,
        created_at: now - Duration::days(20),
    });

    state.accounts.push(testuser);
    state.accounts.push(maker);
    state
}
