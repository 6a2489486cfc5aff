//! Command-line arguments

use anyhow::Context;
use clap::{Parser, ValueEnum};
use gltfpost::config::PostProcessOptions;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "gltfpost", version)]
#[command(
    about = "Modify materials in a glTF file and optionally reorient the scene",
    long_about = None
)]
pub struct Cli {
    /// Path to the input glTF file
    pub input: PathBuf,

    /// Path to save the modified glTF file (may equal the input)
    pub output: PathBuf,

    /// Metallic factor to set, clamped to [0, 1] [default: 0.1]
    #[arg(long, value_parser = parse_factor)]
    pub metallic: Option<f64>,

    /// Roughness factor to set, clamped to [0, 1] [default: 0.1]
    #[arg(long, value_parser = parse_factor)]
    pub roughness: Option<f64>,

    /// Override material values that are already set
    #[arg(long = "override")]
    pub override_existing: bool,

    /// Reorient the scene from Z-up to Y-up
    #[arg(long)]
    pub reorient: bool,

    /// Leave materials untouched
    #[arg(long)]
    pub skip_materials: bool,

    /// TOML file with default options; flags given here take precedence
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Logging level
    #[arg(long, value_enum, ignore_case = true, default_value_t = LogLevel::Info)]
    pub log: LogLevel,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Debug,
    Info,
    #[value(alias = "warn")]
    Warning,
    Error,
}

impl LogLevel {
    pub fn level(self) -> tracing::Level {
        match self {
            LogLevel::Debug => tracing::Level::DEBUG,
            LogLevel::Info => tracing::Level::INFO,
            LogLevel::Warning => tracing::Level::WARN,
            LogLevel::Error => tracing::Level::ERROR,
        }
    }
}

impl Cli {
    /// Resolve the options for this run: config file (if any), then flags.
    pub fn options(&self) -> anyhow::Result<PostProcessOptions> {
        let mut options = match &self.config {
            Some(path) => PostProcessOptions::from_toml_file(path)
                .with_context(|| format!("Failed to load options from {}", path.display()))?,
            None => PostProcessOptions::default(),
        };

        if let Some(metallic) = self.metallic {
            options.metallic_factor = metallic;
        }
        if let Some(roughness) = self.roughness {
            options.roughness_factor = roughness;
        }
        options.override_existing |= self.override_existing;
        options.reorient |= self.reorient;
        if self.skip_materials {
            options.patch_materials = false;
        }

        Ok(options)
    }
}

fn parse_factor(s: &str) -> Result<f64, String> {
    let value: f64 = s.parse().map_err(|e| format!("'{s}' is not a number: {e}"))?;
    if value.is_finite() {
        Ok(value)
    } else {
        Err(format!("'{s}' is not a finite number"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("gltfpost").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_defaults() {
        let cli = parse(&["in.gltf", "out.gltf"]);
        assert_eq!(cli.log, LogLevel::Info);
        assert_eq!(cli.options().unwrap(), PostProcessOptions::default());
    }

    #[test]
    fn test_flags() {
        let cli = parse(&[
            "in.gltf", "out.gltf", "--metallic", "0.5", "--roughness", "2", "--override",
            "--reorient", "--log", "WARNING",
        ]);
        let options = cli.options().unwrap();

        assert_eq!(cli.log, LogLevel::Warning);
        assert!(options.override_existing);
        assert!(options.reorient);
        assert!(options.patch_materials);
        assert!((options.metallic_factor - 0.5).abs() < f64::EPSILON);
        assert!((options.roughness_factor - 2.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_log_alias() {
        assert_eq!(parse(&["a", "b", "--log", "warn"]).log, LogLevel::Warning);
        assert_eq!(parse(&["a", "b", "--log", "debug"]).log, LogLevel::Debug);
    }

    #[test]
    fn test_rejects_non_finite_factor() {
        assert!(Cli::try_parse_from(["gltfpost", "a", "b", "--metallic", "nan"]).is_err());
        assert!(Cli::try_parse_from(["gltfpost", "a", "b", "--roughness", "inf"]).is_err());
        assert!(Cli::try_parse_from(["gltfpost", "a", "b", "--roughness", "rough"]).is_err());
    }

    #[test]
    fn test_flags_override_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("gltfpost.toml");
        std::fs::write(&path, "metallic_factor = 0.7\nroughness_factor = 0.2\nreorient = true\n")
            .unwrap();

        let path_arg = path.to_str().unwrap();
        let cli = parse(&["a", "b", "--config", path_arg, "--roughness", "0.9", "--skip-materials"]);
        let options = cli.options().unwrap();

        assert!((options.metallic_factor - 0.7).abs() < f64::EPSILON);
        assert!((options.roughness_factor - 0.9).abs() < f64::EPSILON);
        assert!(options.reorient);
        assert!(!options.patch_materials);
    }

    #[test]
    fn test_missing_config_file() {
        let cli = parse(&["a", "b", "--config", "does-not-exist.toml"]);
        let err = cli.options().unwrap_err();
        assert!(err.to_string().contains("does-not-exist.toml"));
    }
}
