//! Integration tests for kitmatch

mod cli_tests {
    use assert_cmd::{cargo::cargo_bin_cmd, Command};
    use predicates::prelude::*;
    use std::path::{Path, PathBuf};
    use tempfile::TempDir;

    fn fixture(name: &str) -> PathBuf {
        Path::new(env!("CARGO_MANIFEST_DIR"))
            .join("tests")
            .join("fixtures")
            .join(name)
    }

    /// Command bound to a config file inside `dir`, so the user's own config is never read
    fn kitmatch(dir: &TempDir) -> Command {
        let mut cmd = cargo_bin_cmd!("kitmatch");
        cmd.env_remove("KITMATCH_CONFIG")
            .arg("--config")
            .arg(dir.path().join("config.toml"));
        cmd
    }

    fn lookup(dir: &TempDir) -> Command {
        let mut cmd = kitmatch(dir);
        cmd.arg("lookup")
            .arg("--request")
            .arg(fixture("request.json"))
            .arg("--artifacts")
            .arg(fixture("artifacts.json"));
        cmd
    }

    #[test]
    fn help_displays() {
        let dir = TempDir::new().unwrap();
        kitmatch(&dir)
            .arg("--help")
            .assert()
            .success()
            .stdout(predicate::str::contains(
                "Decide whether an existing build artifact can be reused",
            ));
    }

    #[test]
    fn version_displays() {
        let dir = TempDir::new().unwrap();
        kitmatch(&dir)
            .arg("--version")
            .assert()
            .success()
            .stdout(predicate::str::contains("kitmatch"));
    }

    #[test]
    fn catalog_table() {
        let dir = TempDir::new().unwrap();
        kitmatch(&dir)
            .arg("catalog")
            .assert()
            .success()
            .stdout(predicate::str::contains("FEATURE"))
            .stdout(predicate::str::contains("package"));
    }

    #[test]
    fn catalog_plain_is_sorted() {
        let dir = TempDir::new().unwrap();
        kitmatch(&dir)
            .args(["catalog", "--format", "plain"])
            .assert()
            .success()
            .stdout("builder\ncamel\ncontainer\ncron\njvm\nlogging\npackage\nregistry\n");
    }

    #[test]
    fn catalog_json() {
        let dir = TempDir::new().unwrap();
        let output = kitmatch(&dir)
            .args(["catalog", "--format", "json"])
            .output()
            .unwrap();
        assert!(output.status.success());

        let features: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
        let package = features
            .as_array()
            .unwrap()
            .iter()
            .find(|f| f["id"] == "package")
            .unwrap();
        assert_eq!(package["influences_build"], true);
        assert_eq!(package["comparison"], "custom");
    }

    #[test]
    fn catalog_honors_disabled_features() {
        let dir = TempDir::new().unwrap();
        std::fs::write(
            dir.path().join("config.toml"),
            "[matching]\ndisabled_features = [\"camel\", \"cron\"]\n",
        )
        .unwrap();

        kitmatch(&dir)
            .args(["catalog", "--format", "plain"])
            .assert()
            .success()
            .stdout(predicate::str::contains("camel").not())
            .stdout(predicate::str::contains("cron").not())
            .stdout(predicate::str::contains("builder"));
    }

    #[test]
    fn config_path() {
        let dir = TempDir::new().unwrap();
        kitmatch(&dir)
            .args(["config", "path"])
            .assert()
            .success()
            .stdout(predicate::str::contains("config.toml"));
    }

    #[test]
    fn config_show_defaults() {
        let dir = TempDir::new().unwrap();
        kitmatch(&dir)
            .args(["config", "show"])
            .assert()
            .success()
            .stdout(predicate::str::contains("[general]"))
            .stdout(predicate::str::contains("[matching]"));
    }

    #[test]
    fn config_init_writes_file() {
        let dir = TempDir::new().unwrap();
        kitmatch(&dir).args(["config", "init"]).assert().success();

        let written = std::fs::read_to_string(dir.path().join("config.toml")).unwrap();
        assert!(written.contains("[lookup]"));
    }

    #[test]
    fn invalid_config_is_reported() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("config.toml"), "[general\n").unwrap();

        kitmatch(&dir)
            .args(["config", "show"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("Invalid configuration"));
    }

    #[test]
    fn lookup_skips_failed_and_mismatched_artifacts() {
        let dir = TempDir::new().unwrap();
        lookup(&dir)
            .args(["--format", "plain"])
            .assert()
            .success()
            .stdout("kit-ready\n");
    }

    #[test]
    fn lookup_json_lists_matches() {
        let dir = TempDir::new().unwrap();
        let output = lookup(&dir).args(["--format", "json"]).output().unwrap();
        assert!(output.status.success());

        let found: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
        let found = found.as_array().unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0]["name"], "kit-ready");
        assert_eq!(found[0]["phase"], "ready");
    }

    #[test]
    fn lookup_empty_json() {
        let dir = TempDir::new().unwrap();
        lookup(&dir)
            .args(["--format", "json", "--selector", "team=blue"])
            .assert()
            .success()
            .stdout(predicate::str::diff("[]\n"));
    }

    #[test]
    fn lookup_uses_platform_namespace_from_config() {
        let dir = TempDir::new().unwrap();
        std::fs::write(
            dir.path().join("config.toml"),
            "[lookup.namespaces]\ndefault = \"camel-system\"\n",
        )
        .unwrap();

        lookup(&dir)
            .args(["--format", "plain"])
            .assert()
            .success()
            .stdout("kit-managed\n");
    }

    #[test]
    fn lookup_show_key_goes_to_stderr() {
        let dir = TempDir::new().unwrap();
        lookup(&dir)
            .args(["--format", "plain", "--show-key"])
            .assert()
            .success()
            .stdout("kit-ready\n")
            .stderr(predicate::str::contains("default/quarkus-3.2.0/"));
    }

    #[test]
    fn lookup_missing_request() {
        let dir = TempDir::new().unwrap();
        kitmatch(&dir)
            .arg("lookup")
            .arg("--request")
            .arg(dir.path().join("nope.json"))
            .arg("--artifacts")
            .arg(fixture("artifacts.json"))
            .assert()
            .failure()
            .stderr(predicate::str::contains("IO error"));
    }

    #[test]
    fn lookup_excluding_selector() {
        let dir = TempDir::new().unwrap();
        lookup(&dir)
            .args(["--format", "plain", "--selector", "kitmatch.io/kind!=platform"])
            .assert()
            .success()
            .stdout("");
    }

    #[test]
    fn lookup_rejects_bad_selector() {
        let dir = TempDir::new().unwrap();
        lookup(&dir)
            .args(["--selector", "=blue"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("empty label key"));
    }

    #[test]
    fn compare_defaults_missing_version_of_first() {
        let dir = TempDir::new().unwrap();
        kitmatch(&dir)
            .arg("compare")
            .arg(fixture("kit-unversioned.json"))
            .arg(fixture("kit-current.json"))
            .assert()
            .success()
            .stdout("equivalent\n");
    }

    #[test]
    fn compare_is_asymmetric() {
        let dir = TempDir::new().unwrap();
        kitmatch(&dir)
            .arg("compare")
            .arg(fixture("kit-current.json"))
            .arg(fixture("kit-unversioned.json"))
            .assert()
            .success()
            .stdout("different\n");
    }

    #[test]
    fn compare_dependency_count_differs() {
        let dir = TempDir::new().unwrap();
        kitmatch(&dir)
            .arg("compare")
            .arg(fixture("kit-unversioned.json"))
            .arg(fixture("kit-extra-dep.json"))
            .assert()
            .success()
            .stdout("different\n");
    }

    #[test]
    fn compare_invalid_json() {
        let dir = TempDir::new().unwrap();
        let broken = dir.path().join("broken.json");
        std::fs::write(&broken, "{not json").unwrap();

        kitmatch(&dir)
            .arg("compare")
            .arg(&broken)
            .arg(fixture("kit-current.json"))
            .assert()
            .failure()
            .stderr(predicate::str::contains("Invalid artifact"));
    }
}
