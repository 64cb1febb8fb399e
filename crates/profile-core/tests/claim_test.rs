//! Claim checks for every variant against its maximal fixture.

mod common;

use profile_core::{MappingConfig, ProfileMapping};

use common::{all_connection_fixtures, remove_path, store_with};

/// The maximal fixture is claimed by its own variant.
#[test]
fn test_each_variant_claims_its_fixture() {
    let config = MappingConfig::default();
    for (name, fixture) in all_connection_fixtures() {
        let store = fixture.store();
        let mapping = ProfileMapping::new(
            fixture.kind(),
            &fixture.connection.conn_id,
            fixture.profile_args.clone(),
            &store,
            &config,
        )
        .unwrap();
        assert!(mapping.can_claim_connection().unwrap(), "{name} not claimed");
    }
}

/// Removing the source of any single required field makes the variant decline.
#[test]
fn test_missing_required_field_is_not_claimed() {
    let config = MappingConfig::default();
    for (name, fixture) in all_connection_fixtures() {
        let mapper = fixture.kind().mapper();
        for field in mapper.required_fields() {
            if fixture.profile_args.contains_key(*field) {
                continue;
            }
            let mut record = fixture.connection.clone();
            for path in mapper.param_paths(field).unwrap_or_default() {
                remove_path(&mut record, path);
            }

            let store = store_with(record);
            let mapping = ProfileMapping::new(
                fixture.kind(),
                &fixture.connection.conn_id,
                fixture.profile_args.clone(),
                &store,
                &config,
            )
            .unwrap();
            assert!(
                !mapping.can_claim_connection().unwrap(),
                "{name}: claimed without `{field}`"
            );
        }
    }
}

/// A connection of another type is never claimed.
#[test]
fn test_other_connection_type_is_not_claimed() {
    let config = MappingConfig::default();
    for (name, fixture) in all_connection_fixtures() {
        let mut record = fixture.connection.clone();
        record.conn_type = "generic".to_string();
        let store = store_with(record);
        let mapping = ProfileMapping::new(
            fixture.kind(),
            &fixture.connection.conn_id,
            fixture.profile_args.clone(),
            &store,
            &config,
        )
        .unwrap();
        assert!(!mapping.can_claim_connection().unwrap(), "{name} claimed a generic connection");
    }
}

/// Supplying a missing required field as a profile arg restores the claim.
#[test]
fn test_override_satisfies_required_field() {
    let fixture = common::load_connection_fixture("vertica_user_password");
    let mut record = fixture.connection.clone();
    record.password = None;
    let store = store_with(record);
    let config = MappingConfig::default();

    let mut profile_args = fixture.profile_args.clone();
    profile_args.insert("password".to_string(), serde_json::json!("from_args"));
    let mapping = ProfileMapping::new(
        fixture.kind(),
        &fixture.connection.conn_id,
        profile_args,
        &store,
        &config,
    )
    .unwrap();
    assert!(mapping.can_claim_connection().unwrap());
    assert_eq!(
        mapping.env_vars().unwrap()["COSMOS_CONN_VERTICA_PASSWORD"],
        "from_args"
    );
}
