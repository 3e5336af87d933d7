use crate::host::{self, HostFn, ENTRY_POINTS};
use anyhow::{anyhow, Context, Result};
use serde_json::Value;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::{fmt, fs};

/// Where params come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    Inline(String),
    File(PathBuf),
    Stdin,
}

impl InputSource {
    /// Inline params win over a file; `-` or nothing means stdin.
    pub fn resolve(params: Option<String>, input: Option<PathBuf>) -> Self {
        if let Some(p) = params {
            return Self::Inline(p);
        }
        match input {
            Some(path) if path != Path::new("-") => Self::File(path),
            _ => Self::Stdin,
        }
    }

    pub fn read_to_string(&self) -> Result<String> {
        match self {
            Self::Inline(s) => Ok(s.clone()),
            Self::File(path) => fs::read_to_string(path)
                .with_context(|| format!("failed to read params at {}", path.display())),
            Self::Stdin => {
                let mut buf = String::new();
                std::io::stdin()
                    .read_to_string(&mut buf)
                    .context("failed to read params from stdin")?;
                Ok(buf)
            }
        }
    }

    /// Read and parse a single params value. Any JSON is accepted here.
    pub fn load_params(&self) -> Result<Value> {
        let raw = self.read_to_string()?;
        serde_json::from_str(&raw).with_context(|| format!("failed to parse params JSON from {self}"))
    }
}

impl fmt::Display for InputSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Inline(_) => write!(f, "--params"),
            Self::File(path) => write!(f, "{}", path.display()),
            Self::Stdin => write!(f, "stdin"),
        }
    }
}

#[derive(Clone)]
pub struct ShapeConfig {
    pub source: InputSource,
    pub entry_name: String,
    pub entry: HostFn,
    pub pretty: bool,
}

impl ShapeConfig {
    pub fn from_cli(
        params: Option<String>,
        input: Option<PathBuf>,
        entry: String,
        pretty: bool,
    ) -> Result<Self> {
        let f = resolve_entry(&entry)?;
        Ok(Self {
            source: InputSource::resolve(params, input),
            entry_name: entry,
            entry: f,
            pretty,
        })
    }
}

#[derive(Clone)]
pub struct BatchConfig {
    pub source: InputSource,
    pub entry_name: String,
    pub entry: HostFn,
    pub max_concurrency: usize,
}

impl BatchConfig {
    pub fn from_cli(input: Option<PathBuf>, entry: String, max_concurrency: usize) -> Result<Self> {
        if max_concurrency == 0 {
            return Err(anyhow!("max concurrency must be > 0"));
        }
        let f = resolve_entry(&entry)?;
        Ok(Self {
            source: InputSource::resolve(None, input),
            entry_name: entry,
            entry: f,
            max_concurrency,
        })
    }
}

fn resolve_entry(name: &str) -> Result<HostFn> {
    host::lookup(name).ok_or_else(|| {
        anyhow!(
            "unknown entry point '{name}' (known: {})",
            ENTRY_POINTS.join(", ")
        )
    })
}

#[cfg(test)]
mod tests {
    use super::{BatchConfig, InputSource, ShapeConfig};
    use serde_json::json;
    use std::path::PathBuf;

    #[test]
    fn resolve_prefers_inline_params() {
        let src = InputSource::resolve(Some("{}".into()), Some(PathBuf::from("params.json")));
        assert_eq!(src, InputSource::Inline("{}".into()));
    }

    #[test]
    fn resolve_file_and_stdin() {
        assert_eq!(
            InputSource::resolve(None, Some(PathBuf::from("params.json"))),
            InputSource::File(PathBuf::from("params.json"))
        );
        assert_eq!(InputSource::resolve(None, Some(PathBuf::from("-"))), InputSource::Stdin);
        assert_eq!(InputSource::resolve(None, None), InputSource::Stdin);
    }

    #[test]
    fn load_inline_params() {
        let src = InputSource::Inline(r#"{"sender":"0xAA"}"#.into());
        assert_eq!(src.load_params().unwrap(), json!({ "sender": "0xAA" }));
    }

    #[test]
    fn load_params_from_file() {
        let path = std::env::temp_dir().join(format!("userop-params-{}.json", std::process::id()));
        std::fs::write(&path, r#"{"call_data":"0xbeef"}"#).unwrap();

        let loaded = InputSource::File(path.clone()).load_params();
        std::fs::remove_file(&path).ok();

        assert_eq!(loaded.unwrap(), json!({ "call_data": "0xbeef" }));
    }

    #[test]
    fn missing_file_names_the_path() {
        let err = InputSource::File(PathBuf::from("/nonexistent/params.json"))
            .load_params()
            .unwrap_err();
        assert!(err.to_string().contains("/nonexistent/params.json"), "{err}");
    }

    #[test]
    fn bad_json_is_an_error() {
        let err = InputSource::Inline("{not json".into()).load_params().unwrap_err();
        assert!(err.to_string().contains("--params"), "{err}");
    }

    #[test]
    fn shape_config_rejects_unknown_entry() {
        let err = ShapeConfig::from_cli(None, None, "nope".into(), false)
            .err()
            .unwrap();
        assert!(err.to_string().contains("mainFunction"), "{err}");
    }

    #[test]
    fn batch_config_rejects_zero_concurrency() {
        assert!(BatchConfig::from_cli(None, "mainFunction".into(), 0).is_err());
        assert!(BatchConfig::from_cli(None, "main".into(), 4).is_ok());
    }
}
