// ═══════════════════════════════════════════════════════════════════
// API Tests — response decoding contract, ApiConfig, HttpStockApi
// ═══════════════════════════════════════════════════════════════════

use stock_guardian_core::api::http::{decode_response, HttpStockApi};
use stock_guardian_core::config::{ApiConfig, DEFAULT_BASE_URL};
use stock_guardian_core::errors::CoreError;
use stock_guardian_core::models::rule::Rule;

// ═══════════════════════════════════════════════════════════════════
// decode_response — the wrapper's whole contract, no network needed
// ═══════════════════════════════════════════════════════════════════

mod decoding {
    use super::*;

    #[test]
    fn success_returns_parsed_json_unchanged() {
        let value: serde_json::Value = decode_response("/x", 200, r#"{"a":1}"#).unwrap();
        assert_eq!(value, serde_json::json!({"a": 1}));
    }

    #[test]
    fn success_decodes_into_typed_value() {
        let rule: Rule = decode_response(
            "/api/rules/stock/AAPL",
            200,
            r#"{"enabled":true,"risk_ge":7.0,"sentiment_le":35.0,"hot_ge":70.0,"change_abs_ge":5.0}"#,
        )
        .unwrap();
        assert!(rule.enabled);
        assert_eq!(rule.risk_ge, 7.0);
        assert_eq!(rule.change_abs_ge, 5.0);
    }

    #[test]
    fn failure_carries_body_text() {
        let err = decode_response::<serde_json::Value>("/x", 400, "Already added").unwrap_err();
        assert_eq!(err.to_string(), "Already added");
    }

    #[test]
    fn failure_with_empty_body_names_the_status() {
        let err = decode_response::<serde_json::Value>("/x", 503, "").unwrap_err();
        assert!(err.to_string().contains("503"));
    }

    #[test]
    fn failure_preserves_status_code() {
        let err = decode_response::<serde_json::Value>("/x", 404, "Holding not found").unwrap_err();
        match err {
            CoreError::Api { status, message } => {
                assert_eq!(status, 404);
                assert_eq!(message, "Holding not found");
            }
            other => panic!("expected Api, got {other:?}"),
        }
    }

    #[test]
    fn unparseable_success_body_is_a_decode_error() {
        let err =
            decode_response::<serde_json::Value>("/api/daily/reports", 200, "<html>").unwrap_err();
        match err {
            CoreError::Decode { path, .. } => assert_eq!(path, "/api/daily/reports"),
            other => panic!("expected Decode, got {other:?}"),
        }
    }

    #[test]
    fn empty_success_body_is_a_decode_error() {
        let err = decode_response::<serde_json::Value>("/x", 200, "").unwrap_err();
        assert!(matches!(err, CoreError::Decode { .. }));
    }

    #[test]
    fn status_boundaries() {
        // 2xx is success, everything else is failure
        assert!(decode_response::<serde_json::Value>("/x", 299, "{}").is_ok());
        assert!(decode_response::<serde_json::Value>("/x", 300, "{}").is_err());
        assert!(decode_response::<serde_json::Value>("/x", 199, "{}").is_err());
        assert!(decode_response::<serde_json::Value>("/x", 500, "boom").is_err());
    }
}

// ═══════════════════════════════════════════════════════════════════
// ApiConfig
// ═══════════════════════════════════════════════════════════════════

mod config {
    use super::*;

    #[test]
    fn default_points_at_local_development() {
        let config = ApiConfig::default();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.base_url, "http://localhost:8000");
    }

    #[test]
    fn trailing_slash_is_stripped() {
        let config = ApiConfig::new("https://guardian.example.com/");
        assert_eq!(config.base_url, "https://guardian.example.com");
    }

    #[test]
    fn multiple_trailing_slashes_are_stripped() {
        let config = ApiConfig::new("https://guardian.example.com///");
        assert_eq!(config.base_url, "https://guardian.example.com");
    }

    #[test]
    fn plain_url_is_kept_verbatim() {
        let config = ApiConfig::new("http://10.0.0.5:9000");
        assert_eq!(config.base_url, "http://10.0.0.5:9000");
    }
}

// ═══════════════════════════════════════════════════════════════════
// HttpStockApi construction
// ═══════════════════════════════════════════════════════════════════

mod http_client {
    use super::*;

    #[test]
    fn uses_configured_base_url() {
        let api = HttpStockApi::new(&ApiConfig::new("https://guardian.example.com/"));
        assert_eq!(api.base_url(), "https://guardian.example.com");
    }

    #[test]
    fn default_config_targets_localhost() {
        let api = HttpStockApi::new(&ApiConfig::default());
        assert_eq!(api.base_url(), "http://localhost:8000");
    }
}
