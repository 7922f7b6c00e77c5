use std::{process::Command, time::SystemTime};

fn main() {
  let now = SystemTime::now()
    .duration_since(std::time::UNIX_EPOCH)
    .map(|d| d.as_secs())
    .unwrap_or(0);
  println!("cargo:rustc-env=BUILD_TIME={}", now);

  println!("cargo:rerun-if-changed=.git/HEAD");

  let branch = git(&["rev-parse", "--abbrev-ref", "HEAD"]);
  let commit = git(&["rev-parse", "--short", "HEAD"]);

  println!("cargo:rustc-env=GIT_BRANCH={}", branch.as_deref().unwrap_or("unknown"));
  println!("cargo:rustc-env=GIT_COMMIT_SHORT={}", commit.as_deref().unwrap_or("unknown"));
}

fn git(args: &[&str]) -> Option<String> {
  let output = Command::new("git").args(args).output().ok()?;
  if !output.status.success() {
    return None;
  }
  let value = String::from_utf8(output.stdout).ok()?;
  let value = value.trim();
  (!value.is_empty()).then(|| value.to_string())
}
