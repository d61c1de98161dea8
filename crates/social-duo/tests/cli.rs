#![cfg(unix)]

use assert_cmd::Command;
use predicates::prelude::*;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use tempfile::{TempDir, tempdir};

const LAUNCHER: &str = env!("CARGO_BIN_EXE_social-duo");
const INSTALLER: &str = env!("CARGO_BIN_EXE_social-duo-install");

const SETTINGS_VARS: &[&str] = &[
    "SOCIAL_DUO_REPO_URL",
    "SOCIAL_DUO_SUBDIRECTORY",
    "SOCIAL_DUO_LOCAL_PATH",
    "SOCIAL_DUO_PACKAGE",
    "SOCIAL_DUO_PYTHON",
    "SOCIAL_DUO_LOG",
];

/// A base directory, a working directory and a directory of fake tools.
struct Sandbox {
    _dir: TempDir,
    base: PathBuf,
    work: PathBuf,
    tools: PathBuf,
}

impl Sandbox {
    fn new() -> Self {
        let dir = tempdir().unwrap();
        let base = dir.path().join("base");
        let work = dir.path().join("work");
        let tools = dir.path().join("tools");
        for d in [&base, &work, &tools] {
            std::fs::create_dir_all(d).unwrap();
        }
        Self {
            _dir: dir,
            base,
            work,
            tools,
        }
    }

    fn bin(&self) -> PathBuf {
        self.base.join("venv/bin")
    }

    fn command(&self, program: &str) -> Command {
        let mut cmd = Command::new(program);
        for var in SETTINGS_VARS {
            cmd.env_remove(var);
        }
        cmd.env("SOCIAL_DUO_HOME", &self.base).current_dir(&self.work);
        cmd
    }

    fn launcher(&self) -> Command {
        self.command(LAUNCHER)
    }

    fn installer(&self) -> Command {
        self.command(INSTALLER)
    }

    fn install_tool(&self, body: &str) {
        write_script(&self.bin().join("social_duo"), body);
    }

    /// Fake interpreter whose `-m venv` copies `pip_body` in as the venv's pip.
    fn fake_python(&self, pip_body: &str) -> PathBuf {
        let pip = self.tools.join("pip");
        write_script(&pip, pip_body);
        let python = self.tools.join("python3");
        write_script(
            &python,
            &format!(
                r#"case "$1" in
  --version) echo "Python 3.12.1" ;;
  -m) mkdir -p "$3/bin" && cp '{}' "$3/bin/pip" ;;
  *) exit 1 ;;
esac"#,
                pip.display()
            ),
        );
        python
    }
}

/// Written by a child `cp`, so this multi-threaded test process never holds a
/// writable descriptor to a file that is later exec'd (ETXTBSY).
fn write_script(path: &Path, body: &str) {
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    let staged = tempfile::NamedTempFile::new().unwrap();
    std::fs::write(staged.path(), format!("#!/bin/sh\n{body}\n")).unwrap();
    let copied = std::process::Command::new("cp")
        .arg(staged.path())
        .arg(path)
        .status()
        .unwrap();
    assert!(copied.success());
    std::fs::set_permissions(path, std::fs::Permissions::from_mode(0o755)).unwrap();
}

const INSTALLING_PIP: &str = r#"bin=$(dirname "$0")
printf '#!/bin/sh\nprintf "%%s," "$@"\n' > "$bin/social_duo"
chmod +x "$bin/social_duo""#;

const FAILING_PIP: &str = "exit 1";

#[test]
fn test_exit_code_is_mirrored() {
    let sb = Sandbox::new();
    sb.install_tool("exit 3");

    sb.launcher().assert().code(3);
}

#[test]
fn test_args_pass_through_with_env_overrides() {
    let sb = Sandbox::new();
    sb.install_tool(r#"printf '%s|%s|' "$DUO_GREETING" "$DUO_TOKEN"; printf '%s ' "$@""#);
    std::fs::write(
        sb.base.join(".env"),
        "DUO_GREETING=hello from base\nDUO_TOKEN=\"secret\"\n",
    )
    .unwrap();
    std::fs::write(sb.work.join(".env"), "# local\nDUO_GREETING=hello from cwd\n").unwrap();

    sb.launcher()
        .args(["post", "--dry-run", "-v"])
        .assert()
        .success()
        .stdout("hello from cwd|secret|post --dry-run -v ");
}

#[test]
fn test_installed_tool_ignores_broken_settings() {
    let sb = Sandbox::new();
    sb.install_tool("exit 0");
    std::fs::write(sb.base.join("launcher.toml"), "repo_url = [").unwrap();

    sb.launcher().assert().success();
}

#[test]
fn test_missing_python() {
    let sb = Sandbox::new();

    sb.launcher()
        .env("SOCIAL_DUO_PYTHON", sb.tools.join("no-such-python"))
        .arg("chat")
        .assert()
        .code(1)
        .stderr(predicate::str::contains(
            "[social-duo] Python is required but was not found in PATH",
        ))
        .stderr(predicate::str::contains("Install Python 3.11+"));
}

#[test]
fn test_every_failed_source_is_reported() {
    let sb = Sandbox::new();
    let python = sb.fake_python(FAILING_PIP);

    sb.launcher()
        .env("SOCIAL_DUO_PYTHON", &python)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("[social-duo] Python install failed."))
        .stderr(predicate::str::contains(
            "install --upgrade git+https://github.com/ethnmcl/social-duo.git (exited with status 1)",
        ))
        .stderr(predicate::str::contains(
            "git+https://github.com/ethnmcl/social-duo.git#subdirectory=social-duo",
        ))
        .stderr(predicate::str::contains("rerun: social-duo-install"));
}

#[test]
fn test_missing_tool_is_provisioned_then_run() {
    let sb = Sandbox::new();
    let python = sb.fake_python(INSTALLING_PIP);

    sb.launcher()
        .env("SOCIAL_DUO_PYTHON", &python)
        .args(["chat", "--turns", "2"])
        .assert()
        .success()
        .stdout("chat,--turns,2,");

    assert!(sb.bin().join("social_duo").is_file());
}

#[test]
fn test_installer_provisions() {
    let sb = Sandbox::new();
    let python = sb.fake_python(INSTALLING_PIP);

    sb.installer()
        .arg("--python")
        .arg(&python)
        .assert()
        .success();

    assert!(sb.bin().join("social_duo").is_file());
}

#[test]
fn test_installer_reports_failure() {
    let sb = Sandbox::new();
    let python = sb.fake_python(FAILING_PIP);

    sb.installer()
        .env("SOCIAL_DUO_PYTHON", &python)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Attempted:"));
}

#[test]
fn test_installer_help() {
    Command::new(INSTALLER)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--local"))
        .stdout(predicate::str::contains("--python"));
}
