//! Full-config parsing: a realistic config.toml round-trips through the
//! whole tree and unspecified sections fall back to defaults.

use solace_domain::config::{ClassifierKind, Config};

#[test]
fn realistic_config_parses() {
    let toml_str = r#"
        [server]
        host = "0.0.0.0"
        port = 8080

        [server.cors]
        allowed_origins = ["https://solace.example.com"]

        [llm]
        model = "gemini-1.5-flash"
        api_key_env = "GEMINI_API_KEY"
        timeout_secs = 10
        max_attempts = 3

        [sentiment]
        kind = "remote"
        endpoint = "https://api-inference.huggingface.co"
        api_key_env = "HF_API_TOKEN"

        [observability]
        otlp_endpoint = "http://localhost:4317"
    "#;

    let cfg: Config = toml::from_str(toml_str).unwrap();
    assert_eq!(cfg.server.host, "0.0.0.0");
    assert_eq!(cfg.server.cors.allowed_origins.len(), 1);
    assert_eq!(cfg.llm.max_attempts, 3);
    assert_eq!(cfg.sentiment.kind, ClassifierKind::Remote);
    assert_eq!(cfg.observability.otlp_endpoint.as_deref(), Some("http://localhost:4317"));
    // Defaults for values the file does not mention.
    assert!((cfg.llm.temperature - 0.4).abs() < f32::EPSILON);
    assert_eq!(cfg.llm.max_output_tokens, 150);
    assert_eq!(cfg.server.max_concurrent_requests, 256);
}

#[test]
fn default_config_is_serializable() {
    let cfg = Config::default();
    let rendered = toml::to_string_pretty(&cfg).unwrap();
    let reparsed: Config = toml::from_str(&rendered).unwrap();
    assert_eq!(reparsed.server.port, cfg.server.port);
    assert_eq!(reparsed.llm.model, cfg.llm.model);
}
