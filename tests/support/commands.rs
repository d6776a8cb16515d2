//! Command helper methods for Test.

use super::Test;
use assert_cmd::Command;
use std::process::Output;

impl Test {
    /// Create a vaultsync command isolated to the test directory.
    ///
    /// Colors and inherited configuration/log overrides are switched off so
    /// output is stable.
    pub fn cmd(&self) -> Command {
        #[allow(deprecated)]
        let mut cmd = Command::cargo_bin("vaultsync").expect("failed to find vaultsync binary");
        cmd.current_dir(self.dir.path());
        cmd.env("NO_COLOR", "1");
        cmd.env_remove("VAULTSYNC_CONFIG");
        cmd.env_remove("VAULTSYNC_LOG");
        cmd
    }

    /// Shortcut for `vaultsync init`.
    pub fn init_cmd(&self) -> Output {
        self.cmd()
            .arg("init")
            .output()
            .expect("failed to run vaultsync init")
    }

    /// Shortcut for `vaultsync set --env <env> <name> <value>`.
    pub fn set(&self, env: &str, name: &str, value: &str) -> Output {
        self.cmd()
            .args(["set", "--env", env, name, value])
            .output()
            .expect("failed to run vaultsync set")
    }

    /// Shortcut for `vaultsync get --env <env> <name>`.
    pub fn get(&self, env: &str, name: &str) -> Output {
        self.cmd()
            .args(["get", "--env", env, name])
            .output()
            .expect("failed to run vaultsync get")
    }

    /// Shortcut for `vaultsync rm --env <env> <name>`.
    pub fn rm(&self, env: &str, name: &str) -> Output {
        self.cmd()
            .args(["rm", "--env", env, name])
            .output()
            .expect("failed to run vaultsync rm")
    }

    /// Shortcut for `vaultsync list --env <env>`.
    pub fn list(&self, env: &str) -> Output {
        self.cmd()
            .args(["list", "--env", env])
            .output()
            .expect("failed to run vaultsync list")
    }

    /// Shortcut for `vaultsync list --env <env> --json`.
    pub fn list_json(&self, env: &str) -> Output {
        self.cmd()
            .args(["list", "--env", env, "--json"])
            .output()
            .expect("failed to run vaultsync list --json")
    }

    /// Shortcut for `vaultsync compare <source> <target>` plus extra args.
    pub fn compare(&self, source: &str, target: &str, extra: &[&str]) -> Output {
        self.cmd()
            .args(["compare", source, target])
            .args(extra)
            .output()
            .expect("failed to run vaultsync compare")
    }

    /// Shortcut for `vaultsync copy <source> <target> --yes` plus extra args.
    pub fn copy(&self, source: &str, target: &str, extra: &[&str]) -> Output {
        self.cmd()
            .args(["copy", source, target, "--yes"])
            .args(extra)
            .output()
            .expect("failed to run vaultsync copy")
    }

    /// Shortcut for `vaultsync history <action> --env <env> <name>` plus extra args.
    pub fn history(&self, action: &str, env: &str, name: &str, extra: &[&str]) -> Output {
        self.cmd()
            .args(["history", action, "--env", env, name])
            .args(extra)
            .output()
            .expect("failed to run vaultsync history")
    }

    /// Current value of `name` in `env`, trimmed.
    pub fn value(&self, env: &str, name: &str) -> String {
        let output = self.get(env, name);
        super::assert_success(&output);
        super::stdout(&output).trim().to_string()
    }
}
