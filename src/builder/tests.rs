//! Tests for the config builders.

use crate::builder::{
    AreaConfigOptions, BasicConfigOptions, create_area_config, get_basic_openr_config,
};
use crate::config::OpenrDaemonConfig;
use crate::random::random_node_name;
use crate::test_support::{capture_warnings, sample_area};

// =========================================================================
// Area builder
// =========================================================================

#[test]
fn test_area_defaults() {
    let area = create_area_config("area1", ["n.*"], ["eth.*"], AreaConfigOptions::default());

    assert_eq!(area.area_id, "area1");
    assert_eq!(area.neighbor_regexes, vec!["n.*"]);
    assert_eq!(area.interface_regexes, vec!["eth.*"]);
    assert!(area.policy.is_none());
    assert!(!area.enable_adj_labels);
}

#[test]
fn test_area_with_all_options() {
    let area = create_area_config(
        "spine",
        vec!["fsw.*".to_string(), "ssw.*".to_string()],
        vec!["po.*".to_string()],
        AreaConfigOptions {
            policy: Some("spine-import".to_string()),
            enable_adj_labels: true,
        },
    );

    assert_eq!(area.neighbor_regexes, vec!["fsw.*", "ssw.*"]);
    assert_eq!(area.interface_regexes, vec!["po.*"]);
    assert_eq!(area.policy.as_deref(), Some("spine-import"));
    assert!(area.enable_adj_labels);
}

#[test]
fn test_area_with_policy_helper() {
    let opts = AreaConfigOptions::with_policy("p1");

    assert_eq!(opts.policy.as_deref(), Some("p1"));
    assert!(!opts.enable_adj_labels);
}

#[test]
fn test_area_values_are_not_validated_or_normalized() {
    let area = create_area_config(
        "",
        ["fsw(", "  spaced  "],
        Vec::<String>::new(),
        AreaConfigOptions::with_policy(""),
    );

    assert_eq!(area.area_id, "");
    assert_eq!(area.neighbor_regexes, vec!["fsw(", "  spaced  "]);
    assert!(area.interface_regexes.is_empty());
    assert_eq!(area.policy, Some(String::new()));
}

#[test]
fn test_area_builder_is_pure() {
    let build = || create_area_config("a", ["x"], ["y"], AreaConfigOptions::with_policy("p"));

    assert_eq!(build(), build());
}

// =========================================================================
// Daemon builder
// =========================================================================

#[test]
fn test_daemon_defaults() {
    let config = get_basic_openr_config(BasicConfigOptions::default());

    assert_eq!(config.node_name, "");
    assert_eq!(config.domain_name, "domain");
    assert!(config.areas.is_empty());
    assert!(config.enable_v4);
    assert!(!config.enable_segment_routing);
    assert!(config.dryrun);
    assert!(!config.enable_v4_over_v6_nexthop);
    assert!(!config.enable_adj_labels);
    assert!(!config.enable_prepend_labels);
}

#[test]
fn test_daemon_defaults_match_record_default() {
    assert_eq!(
        get_basic_openr_config(BasicConfigOptions::default()),
        OpenrDaemonConfig::default()
    );
}

#[test]
fn test_daemon_every_field_is_assigned() {
    let areas = vec![sample_area("a")];
    let config = get_basic_openr_config(BasicConfigOptions {
        node_name: "node-1".to_string(),
        domain_name: "fabric".to_string(),
        areas: areas.clone(),
        enable_v4: false,
        enable_segment_routing: true,
        dryrun: false,
        enable_v4_over_v6_nexthop: true,
        enable_adj_labels: true,
        enable_prepend_labels: true,
    });

    assert_eq!(config.node_name, "node-1");
    assert_eq!(config.domain_name, "fabric");
    assert_eq!(config.areas, areas);
    assert!(!config.enable_v4);
    assert!(config.enable_segment_routing);
    assert!(!config.dryrun);
    assert!(config.enable_v4_over_v6_nexthop);
    assert!(config.enable_adj_labels);
    assert!(config.enable_prepend_labels);
}

#[test]
fn test_daemon_flags_are_independent() {
    // Adjacency labels on the daemon do not leak into the areas and vice versa.
    let config = get_basic_openr_config(BasicConfigOptions {
        enable_adj_labels: true,
        areas: vec![sample_area("a")],
        ..Default::default()
    });

    assert!(config.enable_adj_labels);
    assert!(!config.areas[0].enable_adj_labels);
    assert!(!config.enable_segment_routing);
}

#[test]
fn test_daemon_preserves_area_order() {
    let a1 = create_area_config("A1", [".*"], [".*"], AreaConfigOptions::default());
    let a2 = create_area_config("A2", [".*"], [".*"], AreaConfigOptions::default());

    let config = get_basic_openr_config(BasicConfigOptions {
        areas: vec![a1.clone(), a2.clone()],
        ..Default::default()
    });

    assert_eq!(config.areas, vec![a1, a2]);
    assert_eq!(config.area_ids(), vec!["A1", "A2"]);
}

#[test]
fn test_daemon_keeps_duplicate_area_ids() {
    let config = get_basic_openr_config(BasicConfigOptions {
        areas: vec![sample_area("dup"), sample_area("dup")],
        ..Default::default()
    });

    assert_eq!(config.area_ids(), vec!["dup", "dup"]);
}

#[test]
fn test_prepend_labels_without_segment_routing_is_kept() {
    let config = get_basic_openr_config(BasicConfigOptions {
        enable_prepend_labels: true,
        ..Default::default()
    });

    assert!(config.enable_prepend_labels);
    assert!(!config.enable_segment_routing);
}

#[test]
fn test_prepend_labels_without_segment_routing_logs_warning() {
    let logs = capture_warnings(|| {
        get_basic_openr_config(BasicConfigOptions {
            node_name: "node-p".to_string(),
            enable_prepend_labels: true,
            ..Default::default()
        });
    });

    assert!(logs.contains("WARN"), "got: {logs}");
    assert!(logs.contains("prepend labels enabled without segment routing"));
    assert!(logs.contains("node-p"));
}

#[test]
fn test_prepend_labels_with_segment_routing_is_quiet() {
    let logs = capture_warnings(|| {
        get_basic_openr_config(BasicConfigOptions {
            enable_segment_routing: true,
            enable_prepend_labels: true,
            ..Default::default()
        });
    });

    assert!(logs.is_empty(), "got: {logs}");
}

#[test]
fn test_daemon_builder_is_pure() {
    let opts = BasicConfigOptions {
        node_name: "n".to_string(),
        areas: vec![sample_area("a")],
        ..Default::default()
    };

    assert_eq!(
        get_basic_openr_config(opts.clone()),
        get_basic_openr_config(opts)
    );
}

#[test]
fn test_daemon_with_random_node_name() {
    let name = random_node_name("node-", 10);
    let config = get_basic_openr_config(BasicConfigOptions {
        node_name: name.clone(),
        ..Default::default()
    });

    assert_eq!(config.node_name, name);
}

// =========================================================================
// Options from YAML
// =========================================================================

#[test]
fn test_options_from_empty_yaml_are_defaults() {
    let opts: BasicConfigOptions = serde_yaml::from_str("").unwrap();

    assert_eq!(opts, BasicConfigOptions::default());
}

#[test]
fn test_options_from_partial_yaml() {
    let yaml = r#"
node_name: node-7
domain: lab
enable_segment_routing: true
areas:
  - area_id: "0"
    neighbor_regexes: [".*"]
"#;
    let opts: BasicConfigOptions = serde_yaml::from_str(yaml).unwrap();

    assert_eq!(opts.node_name, "node-7");
    assert_eq!(opts.domain_name, "lab");
    assert!(opts.enable_segment_routing);
    assert!(opts.enable_v4);
    assert!(opts.dryrun);
    assert_eq!(opts.areas.len(), 1);
}

#[test]
fn test_options_read_back_from_saved_config() {
    let config = get_basic_openr_config(BasicConfigOptions {
        node_name: "node-9".to_string(),
        domain_name: "lab".to_string(),
        areas: vec![sample_area("a1"), sample_area("a2")],
        enable_v4: false,
        enable_segment_routing: true,
        dryrun: false,
        enable_v4_over_v6_nexthop: true,
        enable_adj_labels: true,
        enable_prepend_labels: true,
    });

    let opts: BasicConfigOptions = serde_yaml::from_str(&config.to_yaml().unwrap()).unwrap();

    assert!(opts.enable_v4_over_v6_nexthop);
    assert_eq!(get_basic_openr_config(opts), config);
}

#[test]
fn test_options_accept_field_names_as_aliases() {
    let yaml = r#"
domain_name: lab
enable_v4_over_v6_nexthop: true
"#;
    let opts: BasicConfigOptions = serde_yaml::from_str(yaml).unwrap();

    assert_eq!(opts.domain_name, "lab");
    assert!(opts.enable_v4_over_v6_nexthop);
}

#[test]
fn test_options_serialize_with_wire_keys() {
    let opts = BasicConfigOptions {
        enable_v4_over_v6_nexthop: true,
        ..Default::default()
    };
    let value = serde_json::to_value(&opts).unwrap();

    assert_eq!(value["domain"], "domain");
    assert_eq!(value["v4_over_v6_nexthop"], true);
    assert!(value.get("domain_name").is_none());
    assert!(value.get("enable_v4_over_v6_nexthop").is_none());
}
