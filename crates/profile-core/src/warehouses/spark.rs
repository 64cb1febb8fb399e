use crate::contract::{ParamMapping, ProfileMapper};

const SPARK_THRIFT_PARAMS: &[ParamMapping] = &[
    ParamMapping::new("host", &["host"]),
    ParamMapping::new("port", &["port"]),
    ParamMapping::new("schema", &["schema"]),
];

/// Spark over the Thrift server.
pub struct SparkThrift;

impl ProfileMapper for SparkThrift {
    fn connection_type(&self) -> &'static str {
        "spark"
    }

    fn profile_type(&self) -> &'static str {
        "spark"
    }

    fn profile_method(&self) -> Option<&'static str> {
        Some("thrift")
    }

    fn is_community(&self) -> bool {
        true
    }

    fn required_fields(&self) -> &'static [&'static str] {
        &["host", "schema"]
    }

    fn param_mapping(&self) -> &'static [ParamMapping] {
        SPARK_THRIFT_PARAMS
    }
}
