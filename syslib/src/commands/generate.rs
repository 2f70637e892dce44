use std::path::{Path, PathBuf};

use clap::Args;
use eyre::{Context, Result};
use syslib_manifest::Manifest;
use syslib_solidity::Generator;
use tracing::info;

use super::UnwrapOrExit;

#[derive(Args)]
pub struct GenerateCommand {
    /// Path to the system manifest (TOML, or JSON with a .json extension)
    #[arg(short, long, default_value = "system.toml")]
    pub manifest: PathBuf,

    /// Output directory (prints the library to stdout when omitted)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

impl GenerateCommand {
    /// Run the generate command
    pub fn run(&self) -> Result<()> {
        let manifest = Manifest::from_file(&self.manifest).unwrap_or_exit();
        let options = manifest.render_options();
        let generator = Generator::new(&options);

        let source = generator
            .render()
            .wrap_err_with(|| format!("Failed to generate {}", generator.file_name()))?;

        match &self.output {
            None => print!("{}", source),
            Some(dir) => {
                let path = write_library(dir, &generator.file_name(), &source)?;
                info!(path = %path.display(), "wrote system library");
                println!("Generated: {}", path.display());
            }
        }

        Ok(())
    }
}

/// Write `source` to `<dir>/<file_name>`, creating `dir` if needed.
fn write_library(dir: &Path, file_name: &str, source: &str) -> Result<PathBuf> {
    std::fs::create_dir_all(dir)
        .wrap_err_with(|| format!("Failed to create directory {}", dir.display()))?;

    let path = dir.join(file_name);
    std::fs::write(&path, source).wrap_err_with(|| format!("Failed to write {}", path.display()))?;
    Ok(path)
}
