//! Build script: stamps `--version` with the build date and, for dev
//! builds, the git commit.
//!
//! Emits `VERGEN_BUILD_DATE` always and `VERGEN_GIT_SHA` unless the
//! `release` feature is set. Either falls back to `unknown` when vergen
//! cannot produce it, so the `env!` lookups in `cli.rs` always resolve.

use vergen_gitcl::{BuildBuilder, Emitter};

fn emit_fallback(vars: &[&str]) {
    for var in vars {
        println!("cargo:rustc-env={}=unknown", var);
    }
}

#[cfg(not(feature = "release"))]
const STAMPED_VARS: &[&str] = &["VERGEN_BUILD_DATE", "VERGEN_GIT_SHA"];

#[cfg(feature = "release")]
const STAMPED_VARS: &[&str] = &["VERGEN_BUILD_DATE"];

fn emit() -> anyhow::Result<()> {
    let build = BuildBuilder::default().build_date(true).build()?;
    let mut emitter = Emitter::default();
    emitter.add_instructions(&build)?;

    #[cfg(not(feature = "release"))]
    {
        let git = vergen_gitcl::GitclBuilder::default().sha(true).build()?;
        emitter.add_instructions(&git)?;
    }

    emitter.emit()
}

fn main() {
    if let Err(e) = emit() {
        println!("cargo:warning=Failed to stamp version info: {}", e);
        emit_fallback(STAMPED_VARS);
    }
}
