use figment::Jail;
use ghtest_config::GhTestConfig;
use ghtest_core::Dialect;

#[test]
fn env_vars_fill_config_values() {
    Jail::expect_with(|jail| {
        jail.set_env("XDG_CONFIG_HOME", jail.directory().join("xdg").display());
        jail.set_env("GHTEST_OUTPUT__NAMESPACE", "FromEnv");
        jail.set_env("GHTEST_OUTPUT__DIALECT", "xunit");

        let config = GhTestConfig::load(None).expect("config loads");
        assert_eq!(config.output.namespace, "FromEnv");
        assert_eq!(config.output.dialect, Dialect::XUnit);
        Ok(())
    });
}

#[test]
fn env_beats_project_toml() {
    Jail::expect_with(|jail| {
        jail.set_env("XDG_CONFIG_HOME", jail.directory().join("xdg").display());
        jail.create_dir(".ghtest")?;
        jail.create_file(
            ".ghtest/config.toml",
            r#"
[output]
name = "FromToml"
"#,
        )?;
        jail.set_env("GHTEST_OUTPUT__NAME", "FromEnv");

        let config = GhTestConfig::load(None).expect("config loads");
        assert_eq!(config.output.name, "FromEnv");
        Ok(())
    });
}

#[test]
fn explicit_project_root_is_used_for_lookup() {
    Jail::expect_with(|jail| {
        jail.set_env("XDG_CONFIG_HOME", jail.directory().join("xdg").display());
        jail.create_dir("project/.ghtest")?;
        jail.create_file(
            "project/.ghtest/config.toml",
            r#"
[output]
folder = "out"
"#,
        )?;

        let root = jail.directory().join("project");
        let config = GhTestConfig::load(Some(&root)).expect("config loads");
        assert_eq!(config.output.folder, "out");

        let without_root = GhTestConfig::load(None).expect("config loads");
        assert!(!without_root.output.has_folder());
        Ok(())
    });
}
