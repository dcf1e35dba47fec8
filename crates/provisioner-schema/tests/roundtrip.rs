//! Round-trip tests over complete runtime configs
//!
//! Every fixture must come back from encode/decode exactly as it went in,
//! including which optional fields were absent.

use provisioner_schema::{
    decode, decode_yaml, encode, encode_yaml, AwsProviderConfig, AzureProviderConfig,
    ClusterConfig, Error, GardenerConfig, GcpConfig, GcpProviderConfig, KymaConfig,
    ProviderSpecificConfig, RuntimeConfig,
};
use rstest::rstest;
use serde_json::json;

fn s(value: &str) -> Option<String> {
    Some(value.to_string())
}

fn gardener_config(provider: &str) -> GardenerConfig {
    GardenerConfig {
        name: s("name"),
        kubernetes_version: s("1.16"),
        volume_size_gb: Some(50),
        machine_type: s("machine"),
        region: s("region"),
        provider: s(provider),
        seed: s("seed"),
        target_secret: s("secret"),
        disk_type: s("disk"),
        worker_cidr: s("10.10.10.10/25"),
        auto_scaler_min: Some(1),
        auto_scaler_max: Some(4),
        max_surge: Some(25),
        max_unavailable: Some(2),
        provider_specific_config: None,
    }
}

fn gardener_cluster(provider: &str, config: impl Into<ProviderSpecificConfig>) -> ClusterConfig {
    ClusterConfig::Gardener(gardener_config(provider).with_provider_specific_config(config))
}

fn azure_no_zones() -> AzureProviderConfig {
    AzureProviderConfig {
        vnet_cidr: s("10.10.11.11/25"),
        zones: None,
    }
}

fn azure_with_zones() -> AzureProviderConfig {
    AzureProviderConfig {
        vnet_cidr: s("10.10.11.11/25"),
        zones: Some(vec!["az-zone-1".to_string(), "az-zone-2".to_string()]),
    }
}

fn gcp_provider() -> GcpProviderConfig {
    GcpProviderConfig {
        zones: vec!["gcp-zone-1".to_string(), "gcp-zone-2".to_string()],
    }
}

fn aws_provider() -> AwsProviderConfig {
    AwsProviderConfig {
        zone: s("aws zone"),
        vpc_cidr: s("10.10.10.11/25"),
        public_cidr: s("10.10.10.12/25"),
        internal_cidr: s("10.10.10.13/25"),
    }
}

fn gcp_cluster() -> ClusterConfig {
    ClusterConfig::Gcp(GcpConfig {
        name: s("name"),
        project_name: s("project"),
        kubernetes_version: s("1.17"),
        number_of_nodes: Some(3),
        boot_disk_size_gb: Some(50),
        machine_type: s("machine"),
        region: s("region"),
        zone: s("zone"),
    })
}

fn runtime(cluster: ClusterConfig, kyma_version: &str) -> RuntimeConfig {
    RuntimeConfig {
        cluster_config: Some(cluster),
        kyma_config: Some(KymaConfig {
            version: s(kyma_version),
        }),
        kubeconfig: s("kubeconfig"),
    }
}

#[rstest]
#[case::gardener_azure_no_zones(runtime(gardener_cluster("azure", azure_no_zones()), "my precious"))]
#[case::gardener_azure(runtime(gardener_cluster("azure", azure_with_zones()), "my favourite"))]
#[case::gardener_gcp(runtime(gardener_cluster("gcp", gcp_provider()), "my favourite"))]
#[case::gardener_aws(runtime(gardener_cluster("aws", aws_provider()), "my favourite"))]
#[case::gcp_cluster(runtime(gcp_cluster(), "my favourite"))]
fn fixtures_roundtrip(#[case] config: RuntimeConfig) {
    let json = encode(&config).expect("encode json");
    assert_eq!(decode(&json).expect("decode json"), config);

    let yaml = encode_yaml(&config).expect("encode yaml");
    assert_eq!(decode_yaml(&yaml).expect("decode yaml"), config);

    config.validate().expect("fixtures are valid runtime configs");
}

#[rstest]
#[case::empty(RuntimeConfig::default())]
#[case::no_cluster(RuntimeConfig { kubeconfig: s("kubeconfig"), ..Default::default() })]
#[case::empty_kyma(RuntimeConfig { kyma_config: Some(KymaConfig::default()), ..Default::default() })]
#[case::bare_gardener(RuntimeConfig {
    cluster_config: Some(ClusterConfig::Gardener(GardenerConfig::default())),
    ..Default::default()
})]
#[case::provider_without_settings(RuntimeConfig {
    cluster_config: Some(ClusterConfig::Gardener(gardener_config("openstack"))),
    ..Default::default()
})]
fn sparse_configs_roundtrip(#[case] config: RuntimeConfig) {
    let json = encode(&config).expect("encode json");
    assert_eq!(decode(&json).expect("decode json"), config);
}

fn decoded_provider_config(config: &RuntimeConfig) -> ProviderSpecificConfig {
    let document = encode(config).expect("encode");
    let decoded = decode(&document).expect("decode");
    decoded
        .cluster_config
        .as_ref()
        .and_then(ClusterConfig::as_gardener)
        .and_then(|g| g.provider_specific_config.clone())
        .expect("gardener cluster with provider config")
}

#[test]
fn azure_without_zones_stays_zoneless() {
    let config = runtime(gardener_cluster("azure", azure_no_zones()), "my precious");
    match decoded_provider_config(&config) {
        ProviderSpecificConfig::Azure(azure) => {
            assert_eq!(azure.vnet_cidr.as_deref(), Some("10.10.11.11/25"));
            assert!(azure.zones.is_none());
        }
        other => panic!("expected Azure config, got {other:?}"),
    }
}

#[test]
fn azure_empty_zone_list_is_not_absent() {
    let azure = AzureProviderConfig {
        zones: Some(vec![]),
        ..azure_no_zones()
    };
    let config = runtime(gardener_cluster("azure", azure), "my precious");
    match decoded_provider_config(&config) {
        ProviderSpecificConfig::Azure(azure) => assert_eq!(azure.zones, Some(vec![])),
        other => panic!("expected Azure config, got {other:?}"),
    }
}

#[test]
fn azure_zones_keep_order() {
    let config = runtime(gardener_cluster("azure", azure_with_zones()), "my favourite");
    match decoded_provider_config(&config) {
        ProviderSpecificConfig::Azure(azure) => {
            assert_eq!(
                azure.zones,
                Some(vec!["az-zone-1".to_string(), "az-zone-2".to_string()])
            );
        }
        other => panic!("expected Azure config, got {other:?}"),
    }
}

#[test]
fn gcp_provider_decodes_as_gcp() {
    let config = runtime(gardener_cluster("gcp", gcp_provider()), "my favourite");
    assert_eq!(
        decoded_provider_config(&config),
        ProviderSpecificConfig::Gcp(gcp_provider())
    );
}

#[test]
fn aws_provider_keeps_all_network_fields() {
    let config = runtime(gardener_cluster("aws", aws_provider()), "my favourite");
    match decoded_provider_config(&config) {
        ProviderSpecificConfig::Aws(aws) => {
            assert_eq!(aws.zone.as_deref(), Some("aws zone"));
            assert_eq!(aws.vpc_cidr.as_deref(), Some("10.10.10.11/25"));
            assert_eq!(aws.public_cidr.as_deref(), Some("10.10.10.12/25"));
            assert_eq!(aws.internal_cidr.as_deref(), Some("10.10.10.13/25"));
        }
        other => panic!("expected AWS config, got {other:?}"),
    }
}

#[test]
fn hand_written_document_decodes() {
    let document = json!({
        "clusterConfig": {
            "type": "gardener",
            "name": "name",
            "provider": "azure",
            "providerSpecificConfig": { "vnetCidr": "10.10.11.11/25", "zones": null }
        },
        "kymaConfig": { "version": null },
        "kubeconfig": null
    })
    .to_string();

    let config = decode(&document).expect("decode");
    assert!(config.kubeconfig.is_none());
    assert_eq!(config.kyma_config, Some(KymaConfig { version: None }));
    let gardener = config.cluster_config.as_ref().and_then(ClusterConfig::as_gardener).unwrap();
    assert_eq!(
        gardener.provider_specific_config,
        Some(ProviderSpecificConfig::Azure(azure_no_zones()))
    );
}

#[rstest]
#[case::unknown_cluster_type(json!({ "clusterConfig": { "type": "openstack" } }), "unknown variant")]
#[case::missing_cluster_type(json!({ "clusterConfig": { "name": "name" } }), "type")]
#[case::unknown_provider(
    json!({ "clusterConfig": { "type": "gardener", "provider": "openstack", "providerSpecificConfig": {} } }),
    "unknown provider `openstack`"
)]
#[case::missing_provider(
    json!({ "clusterConfig": { "type": "gardener", "providerSpecificConfig": { "zones": [] } } }),
    "provider is missing"
)]
#[case::wrong_field_type(json!({ "kubeconfig": 42 }), "invalid type")]
fn bad_documents_fail_to_decode(#[case] document: serde_json::Value, #[case] expected: &str) {
    let err = decode(&document.to_string()).unwrap_err();
    assert!(matches!(err, Error::Decode { .. }), "{err}");
    assert!(err.to_string().contains(expected), "{err}");
}

#[test]
fn yaml_document_decodes_like_json() {
    let yaml = r#"
clusterConfig:
  type: gardener
  name: name
  kubernetesVersion: "1.16"
  provider: aws
  autoScalerMin: 1
  autoScalerMax: 4
  providerSpecificConfig:
    zone: aws zone
    vpcCidr: 10.10.10.11/25
kymaConfig:
  version: my favourite
"#;
    let config = decode_yaml(yaml).expect("decode yaml");
    let gardener = config.cluster_config.as_ref().and_then(ClusterConfig::as_gardener).unwrap();
    assert_eq!(gardener.kubernetes_version.as_deref(), Some("1.16"));
    assert_eq!(gardener.auto_scaler_max, Some(4));
    assert_eq!(
        gardener.provider_specific_config,
        Some(ProviderSpecificConfig::Aws(AwsProviderConfig {
            zone: s("aws zone"),
            vpc_cidr: s("10.10.10.11/25"),
            ..Default::default()
        }))
    );
}
