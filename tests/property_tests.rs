//! Property-based tests for service_log using proptest

use proptest::prelude::*;
use service_log::prelude::*;

fn any_severity() -> impl Strategy<Value = Severity> {
    prop_oneof![
        Just(Severity::Debug),
        Just(Severity::Info),
        Just(Severity::Warn),
        Just(Severity::Error),
    ]
}

proptest! {
    /// Severity string conversions roundtrip correctly
    #[test]
    fn test_severity_str_roundtrip(severity in any_severity()) {
        let as_str = severity.to_str();
        let parsed: Severity = as_str.parse().unwrap();
        prop_assert_eq!(severity, parsed);
    }

    /// Severity ordering is consistent with the numeric discriminant
    #[test]
    fn test_severity_ordering(s1 in any_severity(), s2 in any_severity()) {
        let v1 = s1 as u8;
        let v2 = s2 as u8;

        prop_assert_eq!(s1 <= s2, v1 <= v2);
        prop_assert_eq!(s1 < s2, v1 < v2);
    }

    /// Parsing is case-insensitive
    #[test]
    fn test_severity_case_insensitive(severity in any_severity()) {
        let lower = severity.to_str().to_lowercase();
        prop_assert_eq!(lower.parse::<Severity>().unwrap(), severity);
    }

    /// Any title, including ones carrying control characters, produces a
    /// record that renders as exactly one line of valid JSON
    #[test]
    fn test_any_title_renders_single_json_line(title in ".*") {
        let transport = MemoryTransport::new();
        let records = transport.records();
        let logger = Logger::builder("fuzz").transport(transport).build();

        logger.info(title);

        let captured = records.lock();
        prop_assert_eq!(captured.len(), 1);

        let line = RecordFormat::Json
            .render(&captured[0], &TimestampFormat::Iso8601)
            .unwrap();
        prop_assert_eq!(line.lines().count(), 1);

        let parsed: serde_json::Value = serde_json::from_str(&line).unwrap();
        prop_assert!(parsed["description"].is_string());
        prop_assert_eq!(parsed["component"].as_str(), Some("fuzz"));
    }

    /// The payload service_name override always wins over the configured
    /// default, and its absence always falls back to the default
    #[test]
    fn test_service_name_resolution(
        default_name in "[a-z][a-z0-9-]{0,16}",
        override_name in proptest::option::of("[a-z][a-z0-9-]{0,16}"),
    ) {
        let transport = MemoryTransport::new();
        let records = transport.records();
        let logger = Logger::builder("auth")
            .config(LoggerConfig::new().with_service_name(default_name.clone()))
            .transport(transport)
            .build();

        let mut payload = Payload::new();
        if let Some(ref name) = override_name {
            payload = payload.with_service_name(name.clone());
        }
        logger.error_with("check", payload);

        let captured = records.lock();
        let expected = override_name.unwrap_or(default_name);
        prop_assert_eq!(captured[0].service_name.as_deref(), Some(expected.as_str()));
    }

    /// Records below the minimum severity never reach a transport
    #[test]
    fn test_min_level_filtering(min in any_severity(), call in any_severity()) {
        let transport = MemoryTransport::new();
        let records = transport.records();
        let logger = Logger::builder("filter")
            .min_level(min)
            .transport(transport)
            .build();

        logger.log(call, "probe");

        let expected = if call >= min { 1 } else { 0 };
        prop_assert_eq!(records.lock().len(), expected);
    }
}
