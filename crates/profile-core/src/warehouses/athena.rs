//! AWS Athena with an access key pair.

use crate::contract::{ParamMapping, ProfileMapper};

const ATHENA_ACCESS_KEY_PARAMS: &[ParamMapping] = &[
    ParamMapping::new("aws_access_key_id", &["login"]),
    ParamMapping::new("aws_secret_access_key", &["password"]),
    ParamMapping::new("aws_session_token", &["extra.aws_session_token"]),
    ParamMapping::new("aws_profile_name", &["extra.aws_profile_name"]),
    ParamMapping::new("database", &["extra.database"]),
    ParamMapping::new("debug_query_state", &["extra.debug_query_state"]),
    ParamMapping::new("lf_tags_database", &["extra.lf_tags_database"]),
    ParamMapping::new("num_retries", &["extra.num_retries"]),
    ParamMapping::new("poll_interval", &["extra.poll_interval"]),
    ParamMapping::new("region_name", &["extra.region_name"]),
    ParamMapping::new("s3_data_dir", &["extra.s3_data_dir"]),
    ParamMapping::new("s3_data_naming", &["extra.s3_data_naming"]),
    ParamMapping::new("s3_staging_dir", &["extra.s3_staging_dir"]),
    ParamMapping::new("schema", &["extra.schema"]),
    ParamMapping::new("work_group", &["extra.work_group"]),
];

pub struct AthenaAccessKey;

impl ProfileMapper for AthenaAccessKey {
    fn connection_type(&self) -> &'static str {
        "aws"
    }

    fn profile_type(&self) -> &'static str {
        "athena"
    }

    fn is_community(&self) -> bool {
        true
    }

    fn required_fields(&self) -> &'static [&'static str] {
        &[
            "aws_access_key_id",
            "aws_secret_access_key",
            "database",
            "region_name",
            "s3_staging_dir",
            "schema",
        ]
    }

    fn secret_fields(&self) -> &'static [&'static str] {
        &["aws_secret_access_key", "aws_session_token"]
    }

    fn param_mapping(&self) -> &'static [ParamMapping] {
        ATHENA_ACCESS_KEY_PARAMS
    }
}
