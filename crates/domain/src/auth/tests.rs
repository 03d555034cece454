//! Tests for the auth bounded context

use super::*;

mod reference_tests {
    use super::*;

    #[test]
    fn test_reference_kind_display() {
        assert_eq!(ReferenceKind::secret().to_string(), "Secret");
        assert_eq!(ReferenceKind::new("ConfigMap").to_string(), "ConfigMap");
    }

    #[test]
    fn test_reference_accessors() {
        let reference = AuthReference::secret("nacos-system", "nacos-creds");
        assert_eq!(reference.kind(), &ReferenceKind::secret());
        assert_eq!(reference.namespace(), "nacos-system");
        assert_eq!(reference.name(), "nacos-creds");
    }

    #[test]
    fn test_with_namespace_returns_a_new_value() {
        let reference = AuthReference::secret("old", "creds");
        let relocated = reference.with_namespace("new");

        assert_eq!(relocated.namespace(), "new");
        assert_eq!(relocated.name(), "creds");
        assert_eq!(relocated.kind(), &ReferenceKind::secret());
        // The original is untouched
        assert_eq!(reference.namespace(), "old");
    }

    #[test]
    fn test_reference_display() {
        let reference = AuthReference::secret("ns", "creds");
        assert_eq!(reference.to_string(), "Secret/ns/creds");
    }

    #[test]
    fn test_reference_serde_roundtrip() {
        let reference = AuthReference::new(ReferenceKind::new("Vault"), "ns", "creds");
        let json = serde_json::to_string(&reference).unwrap();
        let back: AuthReference = serde_json::from_str(&json).unwrap();
        assert_eq!(back, reference);
    }
}

mod server_params_tests {
    use super::*;

    #[test]
    fn test_empty_strings_read_as_absent() {
        let hints = ServerParams::new("ns")
            .with_endpoint("")
            .with_server_addr("");
        assert_eq!(hints.endpoint(), None);
        assert_eq!(hints.server_addr(), None);
    }

    #[test]
    fn test_provided_addresses_are_visible() {
        let hints = ServerParams::new("ns")
            .with_endpoint("nacos.example.com:8848")
            .with_server_addr("1.2.3.4:8848");
        assert_eq!(hints.endpoint(), Some("nacos.example.com:8848"));
        assert_eq!(hints.server_addr(), Some("1.2.3.4:8848"));
        assert_eq!(hints.namespace(), "ns");
    }

    #[test]
    fn test_default_has_no_addresses() {
        let hints = ServerParams::default();
        assert_eq!(hints.endpoint(), None);
        assert_eq!(hints.server_addr(), None);
        assert_eq!(hints.namespace(), "");
    }
}

mod client_auth_info_tests {
    use super::*;

    #[test]
    fn test_default_is_empty_and_valid() {
        let auth = ClientAuthInfo::default();
        assert!(auth.is_empty());
        assert_eq!(auth.access_key, "");
        assert_eq!(auth.secret_key, "");
        assert_eq!(auth.username, "");
        assert_eq!(auth.password, "");
    }

    #[test]
    fn test_any_field_makes_it_non_empty() {
        let auth = ClientAuthInfo {
            password: "pw".to_string(),
            ..Default::default()
        };
        assert!(!auth.is_empty());
    }

    #[test]
    fn test_debug_does_not_expose_values() {
        let auth = ClientAuthInfo {
            access_key: "super-secret-ak".to_string(),
            password: "super-secret-pw".to_string(),
            ..Default::default()
        };
        let debug = format!("{auth:?}");
        assert!(!debug.contains("super-secret-ak"));
        assert!(!debug.contains("super-secret-pw"));
        assert!(debug.contains("REDACTED"));
    }
}

mod client_params_tests {
    use super::*;

    #[test]
    fn test_endpoint_form() {
        let params = ClientParams::new(
            ServerLocator::Endpoint("nacos.example.com:8848".to_string()),
            "ns1",
            ClientAuthInfo::default(),
        );
        assert_eq!(params.endpoint(), Some("nacos.example.com:8848"));
        assert_eq!(params.server_addr(), None);
        assert_eq!(params.namespace(), "ns1");
        assert!(params.auth().is_empty());
    }

    #[test]
    fn test_server_addr_form() {
        let params = ClientParams::new(
            ServerLocator::ServerAddr("1.2.3.4:8848".to_string()),
            "ns2",
            ClientAuthInfo::default(),
        );
        assert_eq!(params.server_addr(), Some("1.2.3.4:8848"));
        assert_eq!(params.endpoint(), None);
    }

    #[test]
    fn test_locator_as_str() {
        assert_eq!(
            ServerLocator::Endpoint("e:1".to_string()).as_str(),
            "e:1"
        );
        assert_eq!(
            ServerLocator::ServerAddr("s:2".to_string()).as_str(),
            "s:2"
        );
    }

    #[test]
    fn test_debug_redacts_auth() {
        let params = ClientParams::new(
            ServerLocator::Endpoint("e:1".to_string()),
            "ns",
            ClientAuthInfo {
                password: "hunter2".to_string(),
                ..Default::default()
            },
        );
        let debug = format!("{params:?}");
        assert!(!debug.contains("hunter2"));
    }
}

mod error_tests {
    use super::*;
    use crate::store::StoreError;

    #[test]
    fn test_unsupported_kind_carries_the_kind_string() {
        let err = AuthError::unsupported_kind(&ReferenceKind::new("ConfigMap"));
        assert!(matches!(err, AuthError::UnsupportedReferenceKind { .. }));
        assert!(err.to_string().contains("ConfigMap"));
    }

    #[test]
    fn test_store_errors_convert_and_display() {
        let err = AuthError::from(StoreError::access_denied("rbac says no"));
        assert!(matches!(err, AuthError::StoreAccess(_)));
        assert!(err.to_string().contains("rbac says no"));
    }

    #[test]
    fn test_insufficient_parameters_display() {
        let err = AuthError::InsufficientConnectionParameters;
        assert!(err.to_string().contains("endpoint or server address"));
    }

    #[test]
    fn test_retryability_follows_the_store() {
        assert!(AuthError::from(StoreError::connection("timeout")).is_retryable());
        assert!(!AuthError::from(StoreError::access_denied("rbac")).is_retryable());
        assert!(!AuthError::unsupported_kind(&ReferenceKind::secret()).is_retryable());
        assert!(!AuthError::InsufficientConnectionParameters.is_retryable());
    }
}
