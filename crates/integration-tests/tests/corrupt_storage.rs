//! Corruption recovery: each store degrades to empty independently.

use verdant_core::PlantId;
use verdant_integration_tests::TestContext;
use verdant_tracker::storage::{StorageBackend, keys};

const GARBAGE: &str = "{not json";

#[test]
fn corrupt_plants_store_reads_empty_and_is_cleared() {
    let ctx = TestContext::new();
    ctx.backend.set(keys::MY_PLANTS, GARBAGE).expect("seed");

    assert!(ctx.plants().my_plants().expect("list").is_empty());
    assert_eq!(ctx.backend.get(keys::MY_PLANTS).expect("get"), None);
}

#[test]
fn corrupt_users_store_reads_empty_and_is_cleared() {
    let ctx = TestContext::new();
    ctx.backend
        .set(keys::REGISTERED_USERS, GARBAGE)
        .expect("seed");

    // Login scans the users store; with the store corrupt it sees nobody.
    assert!(ctx.auth().login("flora@example.com").is_err());
    assert_eq!(ctx.backend.get(keys::REGISTERED_USERS).expect("get"), None);
}

#[test]
fn corrupt_session_reads_as_logged_out_and_is_cleared() {
    let ctx = TestContext::new();
    ctx.backend.set(keys::CURRENT_USER, GARBAGE).expect("seed");

    assert_eq!(ctx.auth().current_user().expect("current"), None);
    assert_eq!(ctx.backend.get(keys::CURRENT_USER).expect("get"), None);
}

#[test]
fn wrong_shape_counts_as_corrupt() {
    let ctx = TestContext::new();
    // Valid JSON, wrong shape: a user list where a plant list belongs.
    ctx.backend
        .set(
            keys::MY_PLANTS,
            r#"[{"id":"1","name":"Flora","email":"flora@example.com"}]"#,
        )
        .expect("seed");

    assert!(ctx.plants().my_plants().expect("list").is_empty());
    assert_eq!(ctx.backend.get(keys::MY_PLANTS).expect("get"), None);
}

#[test]
fn corruption_of_one_store_leaves_the_others_intact() {
    let ctx = TestContext::new();
    let auth = ctx.auth();

    let user = auth
        .register("Flora", "flora@example.com", None, "Gr0wing")
        .expect("register");

    ctx.backend.set(keys::MY_PLANTS, GARBAGE).expect("seed");
    assert!(ctx.plants().my_plants().expect("list").is_empty());

    // The session and users stores were not touched by the reset.
    assert_eq!(auth.current_user().expect("current"), Some(user.clone()));
    auth.logout().expect("logout");
    assert_eq!(auth.login("flora@example.com").expect("login"), user);
}

#[test]
fn resolver_still_serves_catalog_after_collection_corruption() {
    let ctx = TestContext::new();
    ctx.backend.set(keys::MY_PLANTS, GARBAGE).expect("seed");

    let resolved = ctx
        .plants()
        .resolve(&PlantId::new("1"))
        .expect("resolve")
        .expect("found");
    assert_eq!(Some(&resolved), ctx.catalog.get(&PlantId::new("1")));
}
