//! End-to-end tests for Snowflake key-pair auth with the key stored in the
//! connection.

mod common;

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use pkcs8::{EncryptedPrivateKeyInfo, PrivateKeyInfo};
use profile_core::keypair::parse_pkcs8_pem;
use profile_core::{
    get_automatic_profile_mapping, ConnectionRecord, MappingConfig, ProfileMapping,
    ProfileMappingKind,
};
use serde_json::{json, Value};
use test_fixtures::read_fixture_text;

use common::{args, load_connection_fixture, store_with};

const PRIVATE_KEY_VAR: &str = "COSMOS_CONN_SNOWFLAKE_PRIVATE_KEY";
const PASSPHRASE_VAR: &str = "COSMOS_CONN_SNOWFLAKE_PRIVATE_KEY_PASSPHRASE";

fn p8_connection() -> ConnectionRecord {
    ConnectionRecord::new("my_snowflake_pk_connection", "snowflake")
        .with_login("my_user")
        .with_schema("my_schema")
        .with_password("my_password")
        .with_extra(&json!({
            "account": "my_account",
            "region": "my_region",
            "database": "my_database",
            "warehouse": "my_warehouse",
            "private_key_content": read_fixture_text("keys/rsa_pkcs8_encrypted.p8"),
        }))
}

/// The key-content mapping is selected for a connection carrying key content
/// and a passphrase.
#[test]
fn test_profile_mapping_selected() {
    let fixture = load_connection_fixture("snowflake_encrypted_private_key_content");
    let store = fixture.store();

    let mapping = get_automatic_profile_mapping(&store, "my_snowflake_pk_connection", args(&[]))
        .unwrap();
    assert_eq!(mapping.kind(), ProfileMappingKind::SnowflakeEncryptedPrivateKeyContent);
    assert!(mapping.is_community());
}

/// Profile values, with the account composed from account and region.
#[test]
fn test_profile() {
    let fixture = load_connection_fixture("snowflake_encrypted_private_key_content");
    let store = fixture.store();

    let mapping = get_automatic_profile_mapping(&store, "my_snowflake_pk_connection", args(&[]))
        .unwrap();
    let profile = mapping.profile().unwrap();

    let expected = json!({
        "type": "snowflake",
        "user": "my_user",
        "private_key": "{{ env_var('COSMOS_CONN_SNOWFLAKE_PRIVATE_KEY') }}",
        "private_key_passphrase": "{{ env_var('COSMOS_CONN_SNOWFLAKE_PRIVATE_KEY_PASSPHRASE') }}",
        "schema": "my_schema",
        "account": "my_account.my_region",
        "database": "my_database",
        "warehouse": "my_warehouse",
    });
    assert_eq!(serde_json::to_value(&profile).unwrap(), expected);
}

/// A database override replaces the connection's database and nothing else.
#[test]
fn test_profile_args_overrides() {
    let fixture = load_connection_fixture("snowflake_encrypted_private_key_content");
    let store = fixture.store();

    let mapping = get_automatic_profile_mapping(
        &store,
        "my_snowflake_pk_connection",
        args(&[("database", json!("my_db_override"))]),
    )
    .unwrap();
    assert_eq!(mapping.profile_args(), &args(&[("database", json!("my_db_override"))]));

    let profile = mapping.profile().unwrap();
    assert_eq!(profile["database"], json!("my_db_override"));
    assert_eq!(profile["account"], json!("my_account.my_region"));
    assert_eq!(profile["warehouse"], json!("my_warehouse"));
    assert_eq!(profile.len(), 8);
}

/// Secret values are exported under the names the placeholders reference.
#[test]
fn test_profile_env_vars() {
    let fixture = load_connection_fixture("snowflake_encrypted_private_key_content");
    let store = fixture.store();

    let mapping = get_automatic_profile_mapping(&store, "my_snowflake_pk_connection", args(&[]))
        .unwrap();
    let env_vars = mapping.env_vars().unwrap();

    assert_eq!(env_vars.len(), 2);
    assert_eq!(env_vars[PASSPHRASE_VAR], "secret");
    assert_eq!(env_vars[PRIVATE_KEY_VAR], "my_content");
}

/// Connections saved with `extra__snowflake__` keys behave like current ones.
#[test]
fn test_old_snowflake_format() {
    let config = MappingConfig::default();
    let legacy = load_connection_fixture("snowflake_legacy_private_key_content");
    let legacy_store = legacy.store();
    let legacy_mapping = ProfileMapping::new(
        ProfileMappingKind::SnowflakeEncryptedPrivateKeyContent,
        &legacy.connection.conn_id,
        args(&[]),
        &legacy_store,
        &config,
    )
    .unwrap();
    assert!(legacy_mapping.can_claim_connection().unwrap());
    assert_eq!(legacy_mapping.profile().unwrap(), legacy.profile);

    let current = ConnectionRecord::new(&legacy.connection.conn_id, "snowflake")
        .with_login("my_user")
        .with_schema("my_schema")
        .with_password("secret")
        .with_extra(&json!({
            "account": "my_account",
            "database": "my_database",
            "warehouse": "my_warehouse",
            "private_key_content": "my_content",
        }));
    let current_store = store_with(current);
    let current_mapping = ProfileMapping::new(
        ProfileMappingKind::SnowflakeEncryptedPrivateKeyContent,
        &legacy.connection.conn_id,
        args(&[]),
        &current_store,
        &config,
    )
    .unwrap();

    assert_eq!(legacy_mapping.profile().unwrap(), current_mapping.profile().unwrap());
    assert_eq!(legacy_mapping.env_vars().unwrap(), current_mapping.env_vars().unwrap());
}

/// Dropping any one of the connection's values makes the mapping decline.
#[test]
fn test_connection_claiming() {
    let full = ConnectionRecord::new("c", "snowflake")
        .with_login("my_user")
        .with_schema("my_database")
        .with_password("secret")
        .with_extra(&json!({
            "account": "my_account",
            "database": "my_database",
            "warehouse": "my_warehouse",
            "private_key_content": "my_content",
        }));

    let config = MappingConfig::default();
    let claims = |record: ConnectionRecord| {
        let store = store_with(record);
        let mapping = ProfileMapping::new(
            ProfileMappingKind::SnowflakeEncryptedPrivateKeyContent,
            "c",
            args(&[]),
            &store,
            &config,
        )
        .unwrap();
        assert_eq!(mapping.conn_id(), "c");
        mapping.can_claim_connection().unwrap()
    };

    assert!(claims(full.clone()));

    let mut record = full.clone();
    record.conn_type = "postgres".to_string();
    assert!(!claims(record), "wrong connection type");

    for path in [
        "login",
        "schema",
        "password",
        "extra",
        "extra.account",
        "extra.database",
        "extra.warehouse",
        "extra.private_key_content",
    ] {
        let mut record = full.clone();
        common::remove_path(&mut record, path);
        assert!(!claims(record), "claimed without {path}");
    }
}

/// An encrypted PKCS#8 key is exported as base64 DER, encrypted with the same
/// passphrase, and decrypts back to the original key.
#[test]
fn test_p8_key_is_reencoded() {
    let record = p8_connection();
    let store = store_with(record.clone());
    let mapping = get_automatic_profile_mapping(&store, &record.conn_id, args(&[])).unwrap();

    let env_vars = mapping.env_vars().unwrap();
    let exported = &env_vars[PRIVATE_KEY_VAR];
    assert!(!exported.contains("BEGIN"));
    assert_eq!(env_vars[PASSPHRASE_VAR], "my_password");

    let der = STANDARD.decode(exported).unwrap();
    let encrypted = EncryptedPrivateKeyInfo::try_from(der.as_slice()).unwrap();
    let decrypted = encrypted.decrypt("my_password").unwrap();
    let recovered = PrivateKeyInfo::try_from(decrypted.as_bytes()).unwrap();

    let original_doc = parse_pkcs8_pem(
        &read_fixture_text("keys/rsa_pkcs8_encrypted.p8"),
        Some("my_password"),
    )
    .unwrap();
    let original = PrivateKeyInfo::try_from(original_doc.as_bytes()).unwrap();

    assert_eq!(recovered.algorithm.oid, original.algorithm.oid);
    assert_eq!(recovered.private_key, original.private_key);

    // The profile still only carries the placeholder.
    let profile = mapping.profile().unwrap();
    assert_eq!(
        profile["private_key"],
        Value::String(format!("{{{{ env_var('{PRIVATE_KEY_VAR}') }}}}"))
    );
}

/// Re-encryption uses a fresh salt, but one mapping exports one key.
#[test]
fn test_reencoded_key_is_stable_per_mapping() {
    let record = p8_connection();
    let store = store_with(record.clone());
    let mapping = get_automatic_profile_mapping(&store, &record.conn_id, args(&[])).unwrap();

    let first = mapping.env_vars().unwrap();
    let second = mapping.env_vars().unwrap();
    assert_eq!(first, second);
}

/// A key override is exported verbatim, with no re-encoding.
#[test]
fn test_private_key_override_is_not_transformed() {
    let record = p8_connection();
    let pem = read_fixture_text("keys/rsa_pkcs8_encrypted.p8");
    let store = store_with(record.clone());
    let mapping = get_automatic_profile_mapping(
        &store,
        &record.conn_id,
        args(&[("private_key", json!(pem))]),
    )
    .unwrap();

    assert_eq!(mapping.env_vars().unwrap()[PRIVATE_KEY_VAR], pem);
}

/// A wrong passphrase leaves the stored key untouched.
#[test]
fn test_wrong_passphrase_passes_key_through() {
    let mut record = p8_connection();
    record.password = Some("not_the_password".to_string());
    let store = store_with(record.clone());
    let mapping = get_automatic_profile_mapping(&store, &record.conn_id, args(&[])).unwrap();

    assert_eq!(
        mapping.env_vars().unwrap()[PRIVATE_KEY_VAR],
        read_fixture_text("keys/rsa_pkcs8_encrypted.p8")
    );
}
