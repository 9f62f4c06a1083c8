//! Graph access token loading from the environment or `~/.sedc-signature/.env`.

use std::collections::BTreeMap;
use std::path::Path;

use anyhow::Context;
use tracing::debug;

use crate::config::config_dir;

/// Values loaded from a `.env` file.
#[derive(Clone, Default)]
pub struct Credentials {
    vars: BTreeMap<String, String>,
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("keys", &self.vars.keys().collect::<Vec<_>>())
            .field("values", &"[REDACTED]")
            .finish()
    }
}

impl Credentials {
    /// Returns a credential value for a key, if present and non-blank.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.vars
            .get(key)
            .map(String::as_str)
            .filter(|v| !v.trim().is_empty())
    }
}

/// Load credentials from a specific `.env` path.
///
/// # Errors
///
/// Returns an error if the file does not exist, permissions are too broad,
/// or parsing fails.
pub fn load_credentials(path: &Path) -> anyhow::Result<Credentials> {
    if !path.exists() {
        return Err(anyhow::anyhow!(
            "credentials file does not exist: {}",
            path.display()
        ));
    }

    validate_private_permissions(path)?;

    let mut vars = BTreeMap::new();
    let iter = dotenvy::from_path_iter(path)
        .with_context(|| format!("failed to read credentials at {}", path.display()))?;

    for item in iter {
        let (key, value) = item.with_context(|| {
            format!(
                "failed to parse key-value entry in credentials file {}",
                path.display()
            )
        })?;
        vars.insert(key, value);
    }

    Ok(Credentials { vars })
}

/// Find the Graph bearer token.
///
/// Looks at the environment variable `token_env` first, then at the same key
/// in `~/.sedc-signature/.env`.
///
/// # Errors
///
/// Returns an error if neither source has a token, or the `.env` file exists
/// but cannot be read.
pub fn resolve_graph_token(token_env: &str) -> anyhow::Result<String> {
    let env_file = config_dir()?.join(".env");
    resolve_graph_token_with(token_env, |key| std::env::var(key).ok(), &env_file)
}

/// [`resolve_graph_token`] with a custom env resolver and `.env` path (for testing).
///
/// # Errors
///
/// Same as [`resolve_graph_token`].
pub fn resolve_graph_token_with(
    token_env: &str,
    env: impl Fn(&str) -> Option<String>,
    env_file: &Path,
) -> anyhow::Result<String> {
    if let Some(token) = env(token_env).filter(|t| !t.trim().is_empty()) {
        debug!(source = "env", "graph token resolved");
        return Ok(token);
    }

    if env_file.exists() {
        let creds = load_credentials(env_file)?;
        if let Some(token) = creds.get(token_env) {
            debug!(source = "env_file", "graph token resolved");
            return Ok(token.to_owned());
        }
    }

    Err(anyhow::anyhow!(
        "no Graph access token: set {token_env} or add it to {}",
        env_file.display()
    ))
}

#[cfg(unix)]
fn validate_private_permissions(path: &Path) -> anyhow::Result<()> {
    use std::fs;
    use std::os::unix::fs::PermissionsExt;

    let metadata = fs::metadata(path)
        .with_context(|| format!("failed to inspect credentials file {}", path.display()))?;
    let mode = metadata.permissions().mode() & 0o777;

    if mode & 0o077 != 0 {
        return Err(anyhow::anyhow!(
            "credentials file {} must be 0600, found {:o}",
            path.display(),
            mode
        ));
    }

    Ok(())
}

#[cfg(not(unix))]
fn validate_private_permissions(_path: &Path) -> anyhow::Result<()> {
    Ok(())
}
