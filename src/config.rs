//! Runner configuration: defaults, then environment, then command-line flags.
//!
//! # Environment Variables
//!
//! - `CROSSY_SEED`: RNG seed (default: random per run)
//! - `CROSSY_TICK_MS`: frame length in milliseconds (default: 16)
//! - `CROSSY_WRAP`: top-edge wrap policy, `cancel` or `always` (default: cancel)
//! - `CROSSY_LOG_PATH`: write a JSONL event log to this path
//! - `CROSSY_MOUSE`: set to `0`/`false` to disable drag-to-move
//!
//! Unparseable environment values fall back to the default. Command-line flags
//! are strict: an unknown flag or a bad value is an error.

use std::path::PathBuf;

use anyhow::{anyhow, Result};

use crate::types::{WrapPolicy, TICK_MS};

pub const USAGE: &str = "\
usage: crossy [--seed N] [--tick-ms N] [--wrap cancel|always] [--log PATH] [--no-mouse]

keys: arrows/WASD/HJKL move, Enter/Space start, r restart, q quit
";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    pub seed: Option<u64>,
    pub tick_ms: u32,
    pub wrap_policy: WrapPolicy,
    pub log_path: Option<PathBuf>,
    pub mouse: bool,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            seed: None,
            tick_ms: TICK_MS,
            wrap_policy: WrapPolicy::default(),
            log_path: None,
            mouse: true,
        }
    }
}

impl RunConfig {
    /// Create from process environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Create from an arbitrary key lookup (environment stand-in).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let seed = lookup("CROSSY_SEED").and_then(|s| s.trim().parse().ok());
        let tick_ms = lookup("CROSSY_TICK_MS")
            .and_then(|s| s.trim().parse().ok())
            .filter(|&ms: &u32| ms > 0)
            .unwrap_or(defaults.tick_ms);
        let wrap_policy = lookup("CROSSY_WRAP")
            .and_then(|s| WrapPolicy::from_str(s.trim()))
            .unwrap_or(defaults.wrap_policy);
        let log_path = lookup("CROSSY_LOG_PATH")
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .map(PathBuf::from);
        let mouse = lookup("CROSSY_MOUSE")
            .map(|v| !(v == "0" || v.eq_ignore_ascii_case("false")))
            .unwrap_or(defaults.mouse);

        Self {
            seed,
            tick_ms,
            wrap_policy,
            log_path,
            mouse,
        }
    }
}

/// Apply command-line flags on top of `base`.
///
/// Returns `Ok(None)` when help was requested.
pub fn parse_args(args: &[String], base: RunConfig) -> Result<Option<RunConfig>> {
    let mut config = base;
    let mut i = 0usize;
    while i < args.len() {
        match args[i].as_str() {
            "-h" | "--help" => return Ok(None),
            "--seed" => {
                let v = flag_value(args, &mut i, "--seed")?;
                config.seed = Some(
                    v.parse()
                        .map_err(|_| anyhow!("invalid --seed value: {}", v))?,
                );
            }
            "--tick-ms" => {
                let v = flag_value(args, &mut i, "--tick-ms")?;
                config.tick_ms = v
                    .parse()
                    .ok()
                    .filter(|&ms: &u32| ms > 0)
                    .ok_or_else(|| anyhow!("invalid --tick-ms value: {}", v))?;
            }
            "--wrap" => {
                let v = flag_value(args, &mut i, "--wrap")?;
                config.wrap_policy = WrapPolicy::from_str(v)
                    .ok_or_else(|| anyhow!("invalid --wrap value: {} (expected cancel or always)", v))?;
            }
            "--log" => {
                let v = flag_value(args, &mut i, "--log")?;
                config.log_path = Some(PathBuf::from(v));
            }
            "--no-mouse" => config.mouse = false,
            other => return Err(anyhow!("unknown argument: {}", other)),
        }
        i += 1;
    }
    Ok(Some(config))
}

fn flag_value<'a>(args: &'a [String], i: &mut usize, flag: &str) -> Result<&'a str> {
    *i += 1;
    args.get(*i)
        .map(String::as_str)
        .ok_or_else(|| anyhow!("missing value for {}", flag))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_without_env() {
        assert_eq!(RunConfig::from_lookup(|_| None), RunConfig::default());
    }

    #[test]
    fn test_env_values() {
        let config = RunConfig::from_lookup(lookup(&[
            ("CROSSY_SEED", "42"),
            ("CROSSY_TICK_MS", "20"),
            ("CROSSY_WRAP", "always"),
            ("CROSSY_LOG_PATH", " /tmp/crossy.jsonl "),
            ("CROSSY_MOUSE", "false"),
        ]));
        assert_eq!(config.seed, Some(42));
        assert_eq!(config.tick_ms, 20);
        assert_eq!(config.wrap_policy, WrapPolicy::Unconditional);
        assert_eq!(config.log_path, Some(PathBuf::from("/tmp/crossy.jsonl")));
        assert!(!config.mouse);
    }

    #[test]
    fn test_bad_env_values_fall_back() {
        let config = RunConfig::from_lookup(lookup(&[
            ("CROSSY_SEED", "abc"),
            ("CROSSY_TICK_MS", "0"),
            ("CROSSY_WRAP", "sometimes"),
            ("CROSSY_LOG_PATH", "   "),
        ]));
        assert_eq!(config, RunConfig::default());
    }

    #[test]
    fn test_args_override_base() {
        let base = RunConfig {
            seed: Some(1),
            ..RunConfig::default()
        };
        let config = parse_args(
            &args(&["--seed", "7", "--wrap", "always", "--tick-ms", "33", "--no-mouse"]),
            base,
        )
        .unwrap()
        .unwrap();
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.wrap_policy, WrapPolicy::Unconditional);
        assert_eq!(config.tick_ms, 33);
        assert!(!config.mouse);
    }

    #[test]
    fn test_help_returns_none() {
        assert!(parse_args(&args(&["--help"]), RunConfig::default())
            .unwrap()
            .is_none());
    }

    #[test]
    fn test_arg_errors() {
        for bad in [
            vec!["--seed"],
            vec!["--seed", "x"],
            vec!["--tick-ms", "0"],
            vec!["--wrap", "never"],
            vec!["--bogus"],
        ] {
            assert!(
                parse_args(&args(&bad), RunConfig::default()).is_err(),
                "{:?} should fail",
                bad
            );
        }
    }
}
