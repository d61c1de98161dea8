//! `KEY=VALUE` environment files and layered environment overlays.
//!
//! Format:
//!
//! - one assignment per line, split at the first `=`;
//! - blank lines and lines starting with `#` are skipped;
//! - key and value are trimmed, lines with an empty key or no `=` are skipped;
//! - one layer of matching `"` or `'` quotes is stripped from the value;
//! - a leading byte order mark is ignored and invalid UTF-8 is replaced, not
//!   rejected.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

pub type EnvMap = BTreeMap<String, String>;

/// Parse the contents of an environment file.
pub fn parse_env(content: &str) -> EnvMap {
    let content = content.strip_prefix('\u{feff}').unwrap_or(content);
    content.lines().filter_map(parse_line).collect()
}

fn parse_line(raw: &str) -> Option<(String, String)> {
    let line = raw.trim();
    if line.is_empty() || line.starts_with('#') {
        return None;
    }
    let (key, value) = line.split_once('=')?;
    let key = key.trim();
    if key.is_empty() {
        return None;
    }
    Some((key.to_string(), unquote(value.trim()).to_string()))
}

fn unquote(value: &str) -> &str {
    for quote in ['"', '\''] {
        if value.len() >= 2 && value.starts_with(quote) && value.ends_with(quote) {
            return &value[1..value.len() - 1];
        }
    }
    value
}

/// Load an environment file. A missing or unreadable file yields an empty map.
pub fn load_env_file(path: &Path) -> EnvMap {
    match fs::read(path) {
        Ok(bytes) => parse_env(&String::from_utf8_lossy(&bytes)),
        Err(e) => {
            if e.kind() != std::io::ErrorKind::NotFound {
                tracing::warn!(path = %path.display(), error = %e, "ignoring unreadable env file");
            }
            EnvMap::new()
        }
    }
}

/// Right-biased overlay of environment sources: every layer overwrites the
/// keys of the layers added before it.
#[derive(Debug, Clone, Default)]
pub struct EnvOverlay {
    vars: EnvMap,
}

impl EnvOverlay {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn layer(mut self, vars: EnvMap) -> Self {
        self.vars.extend(vars);
        self
    }

    pub fn layer_file(self, path: &Path) -> Self {
        self.layer(load_env_file(path))
    }

    pub fn build(self) -> EnvMap {
        self.vars
    }
}
