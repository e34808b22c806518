use assert_cmd::Command;
use std::path::Path;
use tempfile::TempDir;

pub fn samawarun_cmd() -> Command {
    let mut cmd = Command::cargo_bin("samawarun").unwrap();
    cmd.env_remove("SAMAWARUN_ROOT");
    cmd.env_remove("RUST_LOG");
    cmd
}

/// Command running inside an initialized site
#[allow(dead_code)]
pub fn site_cmd(site: &Path) -> Command {
    let mut cmd = samawarun_cmd();
    cmd.current_dir(site);
    cmd
}

/// A temp directory with a freshly initialized site
#[allow(dead_code)]
pub fn init_site() -> TempDir {
    let temp = TempDir::new().unwrap();
    samawarun_cmd()
        .arg("init")
        .arg(temp.path())
        .assert()
        .success();
    temp
}
