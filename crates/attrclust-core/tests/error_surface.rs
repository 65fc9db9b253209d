use attrclust_core::errors::{ClusterError, ErrorInfo};

fn sample_info(code: &str, message: &str) -> ErrorInfo {
    ErrorInfo::new(code, message)
        .with_context("k", "4")
        .with_context("nodes", "3")
}

#[test]
fn input_error_surface() {
    let err = ClusterError::Input(sample_info("I001", "too many clusters"));
    assert_eq!(err.info().code, "I001");
    assert!(err.info().context.contains_key("nodes"));
}

#[test]
fn constructors_use_stable_codes() {
    assert_eq!(ClusterError::empty_graph().info().code, "empty-graph");

    let err = ClusterError::invalid_cluster_count(5, 3);
    assert!(matches!(&err, ClusterError::Input(_)));
    assert_eq!(err.info().code, "invalid-cluster-count");
    assert_eq!(err.info().context.get("k"), Some(&"5".to_string()));
    assert_eq!(err.info().context.get("nodes"), Some(&"3".to_string()));

    let err = ClusterError::dimension_mismatch(2, 3);
    assert!(matches!(&err, ClusterError::Vector(info) if info.code == "dimension-mismatch"));
}

#[test]
fn constructors_attach_hints() {
    let err = ClusterError::invalid_cluster_count(0, 3);
    assert_eq!(err.info().hint.as_deref(), Some("use 1..=node count"));
    assert!(err.to_string().ends_with("| hint: use 1..=node count"));

    assert!(ClusterError::empty_graph().info().hint.is_some());
    assert!(ClusterError::dimension_mismatch(1, 2).info().hint.is_some());
}

#[test]
fn display_includes_context_and_hint() {
    let err = ClusterError::Config(
        ErrorInfo::new("config-parse", "bad yaml")
            .with_context("line", "3")
            .with_hint("check indentation"),
    );
    let rendered = err.to_string();
    assert_eq!(
        rendered,
        "config error: bad yaml (code: config-parse) | context: [line=3] | hint: check indentation"
    );
}

#[test]
fn errors_serialize_with_family_tag() {
    let err = ClusterError::Serde(ErrorInfo::new("deserialize-json", "eof"));
    let json = serde_json::to_value(&err).expect("serialize");
    assert_eq!(json["family"], "Serde");
    assert_eq!(json["detail"]["code"], "deserialize-json");
    let decoded: ClusterError = serde_json::from_value(json).expect("deserialize");
    assert_eq!(decoded, err);
}
