use super::*;

fn env(pairs: &'static [(&'static str, &'static str)]) -> impl Fn(&str) -> Option<String> {
    move |key| {
        pairs
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.to_string())
    }
}

#[test]
fn test_defaults() {
    let cfg = Config::default();
    assert_eq!(cfg.babel.log_level, "info");
    assert_eq!(cfg.translator.base_url, "https://api.openai.com/v1");
    assert_eq!(cfg.translator.model, "gpt-3.5-turbo");
    assert!(cfg.translator.timeout_secs.is_none());
    assert!(cfg.flags.is_empty());
}

#[test]
fn test_parse_full_file() {
    let toml_str = r#"
        [babel]
        log_level = "debug"

        [discord]
        bot_token = "file-token"

        [translator]
        api_key = "sk-file"
        model = "gpt-4o-mini"
        timeout_secs = 30

        [flags]
        "🇧🇷" = "Portuguese"
    "#;
    let cfg = parse(toml_str).unwrap();
    assert_eq!(cfg.babel.log_level, "debug");
    assert_eq!(cfg.discord.bot_token, "file-token");
    assert_eq!(cfg.translator.model, "gpt-4o-mini");
    assert_eq!(cfg.translator.base_url, "https://api.openai.com/v1");
    assert_eq!(cfg.translator.timeout_secs, Some(30));
    assert_eq!(cfg.flag_table().language_for("🇧🇷"), Some("Portuguese"));
}

#[test]
fn test_parse_empty_file_uses_defaults() {
    let cfg = parse("").unwrap();
    assert_eq!(cfg.translator.model, "gpt-3.5-turbo");
    assert!(cfg.discord.bot_token.is_empty());
}

#[test]
fn test_parse_rejects_bad_toml() {
    let err = parse("[translator\nmodel = 1").unwrap_err();
    assert!(matches!(err, BabelError::Config(_)));
}

#[test]
fn test_load_missing_file_uses_defaults() {
    let cfg = load("/nonexistent/__babel_test__/config.toml").unwrap();
    assert_eq!(cfg.translator.model, "gpt-3.5-turbo");
}

#[test]
fn test_load_reads_file() {
    let tmp = std::env::temp_dir().join("__babel_test_config__.toml");
    std::fs::write(&tmp, "[translator]\nmodel = \"gpt-4o\"\n").unwrap();
    let cfg = load(tmp.to_str().unwrap()).unwrap();
    assert_eq!(cfg.translator.model, "gpt-4o");
    let _ = std::fs::remove_file(&tmp);
}

#[test]
fn test_env_overrides_file() {
    let mut cfg = parse("[discord]\nbot_token = \"file-token\"\n").unwrap();
    cfg.apply_env_from(env(&[("DISCORD_TOKEN", "env-token"), ("OPENAI_TOKEN", "sk-env")]));
    assert_eq!(cfg.discord.bot_token, "env-token");
    assert_eq!(cfg.translator.api_key, "sk-env");
    assert!(cfg.validate().is_ok());
}

#[test]
fn test_blank_env_does_not_clobber_file() {
    let mut cfg = parse("[discord]\nbot_token = \"file-token\"\n").unwrap();
    cfg.apply_env_from(env(&[("DISCORD_TOKEN", "   ")]));
    assert_eq!(cfg.discord.bot_token, "file-token");
}

#[test]
fn test_missing_discord_token_fails() {
    let mut cfg = Config::default();
    cfg.apply_env_from(env(&[("OPENAI_TOKEN", "sk-env")]));
    let err = cfg.validate().unwrap_err();
    assert!(err.to_string().contains("DISCORD_TOKEN"));
}

#[test]
fn test_missing_openai_token_fails() {
    let mut cfg = Config::default();
    cfg.apply_env_from(env(&[("DISCORD_TOKEN", "t")]));
    let err = cfg.validate().unwrap_err();
    assert!(err.to_string().contains("OPENAI_TOKEN"));
}

#[test]
fn test_zero_timeout_rejected() {
    let mut cfg = Config::default();
    cfg.apply_env_from(env(&[("DISCORD_TOKEN", "t"), ("OPENAI_TOKEN", "k")]));
    cfg.translator.timeout_secs = Some(0);
    assert!(cfg.validate().is_err());
}
