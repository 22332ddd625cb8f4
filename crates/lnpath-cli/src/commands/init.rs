//! `lnpath init`: Write a default configuration file.

use clap::Args;
use std::path::{Path, PathBuf};

use lnpath_core::LnpathConfig;

#[derive(Args, Debug)]
pub struct InitArgs {
    /// Directory to initialize. Without it the file goes to the `--config` path.
    pub dir: Option<PathBuf>,
}

impl InitArgs {
    /// Where the configuration file is written.
    pub fn target(&self, config_path: &Path) -> PathBuf {
        match &self.dir {
            Some(dir) => dir.join("lnpath.toml"),
            None => config_path.to_path_buf(),
        }
    }
}

pub fn run(args: &InitArgs, config_path: &Path) -> anyhow::Result<()> {
    let target = args.target(config_path);

    if target.exists() {
        anyhow::bail!("configuration file already exists at {}", target.display());
    }

    LnpathConfig::default().save(&target)?;
    tracing::info!(path = %target.display(), "wrote default config");
    println!("Initialized lnpath configuration at {}", target.display());

    Ok(())
}
