use log::info;

use crate::error::{Error, Result};

pub(crate) const KEY_VARIABLE: &str = "AIRTABLE_KEY";
pub(crate) const BASE_VARIABLE: &str = "AIRTABLE_BASE";
pub(crate) const HOST_VARIABLE: &str = "AIRTABLE_HOST";
pub(crate) const DEFAULT_HOST: &str = "https://api.airtable.com/v0/";

/// Placeholder in the URL template that gets replaced with a table name.
pub(crate) const TABLE_PLACEHOLDER: &str = "%s";

/// Resolved client configuration. Built once, immutable afterwards.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Bearer token sent with every request.
    pub key: String,
    /// URL template of the form `<host><base>/%s`; `%s` is substituted with
    /// a table name when a request is built.
    pub url_template: String,
}

/// Resolves configuration from explicit arguments and the environment.
///
/// Explicit arguments take precedence; unset ones fall back to the
/// `AIRTABLE_KEY` / `AIRTABLE_BASE` / `AIRTABLE_HOST` environment variables.
pub(crate) fn load_config(
    key: Option<String>,
    base: Option<String>,
    host: Option<String>,
) -> Result<ClientConfig> {
    resolve(key, base, host, |name| std::env::var(name).ok())
}

fn resolve<F>(
    key: Option<String>,
    base: Option<String>,
    host: Option<String>,
    lookup: F,
) -> Result<ClientConfig>
where
    F: Fn(&str) -> Option<String>,
{
    let key = key.or_else(|| lookup(KEY_VARIABLE));
    let key = match key {
        Some(k) if !k.is_empty() => k,
        _ => {
            return Err(Error::Configuration {
                message: format!("the {} environment variable is not set", KEY_VARIABLE),
            });
        }
    };

    let base = match base.or_else(|| lookup(BASE_VARIABLE)) {
        Some(b) => b,
        None => {
            return Err(Error::Configuration {
                message: format!("the {} environment variable is not set", BASE_VARIABLE),
            });
        }
    };

    let host = host
        .or_else(|| lookup(HOST_VARIABLE))
        .unwrap_or_else(|| DEFAULT_HOST.to_string());

    let url_template = format!("{}{}/{}", host, base, TABLE_PLACEHOLDER);
    info!("initialized Airtable URL template: {}", url_template);

    Ok(ClientConfig { key, url_template })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn no_env(_: &str) -> Option<String> {
        None
    }

    #[test]
    fn fails_without_key() {
        let err = resolve(None, Some("basevariable".into()), None, no_env).unwrap_err();
        assert!(matches!(err, Error::Configuration { .. }));
        assert!(err.to_string().contains(KEY_VARIABLE));
    }

    #[test]
    fn fails_with_empty_key() {
        let err = resolve(Some(String::new()), Some("basevariable".into()), None, no_env)
            .unwrap_err();
        assert!(matches!(err, Error::Configuration { .. }));
    }

    #[test]
    fn fails_without_base() {
        let err = resolve(Some("keyvariable".into()), None, None, no_env).unwrap_err();
        assert!(matches!(err, Error::Configuration { .. }));
        assert!(err.to_string().contains(BASE_VARIABLE));
    }

    #[test]
    fn defaults_host_when_absent() {
        let cfg = resolve(
            Some("keyvariable".into()),
            Some("basevariable".into()),
            None,
            no_env,
        )
        .unwrap();
        assert_eq!(cfg.key, "keyvariable");
        assert_eq!(
            cfg.url_template,
            "https://api.airtable.com/v0/basevariable/%s"
        );
    }

    #[test]
    fn explicit_arguments_win_over_environment() {
        let env = |name: &str| match name {
            KEY_VARIABLE => Some("env-key".to_string()),
            BASE_VARIABLE => Some("env-base".to_string()),
            _ => None,
        };
        let cfg = resolve(Some("arg-key".into()), None, None, env).unwrap();
        assert_eq!(cfg.key, "arg-key");
        assert_eq!(cfg.url_template, "https://api.airtable.com/v0/env-base/%s");
    }

    #[test]
    fn host_override_is_used_verbatim() {
        let cfg = resolve(
            Some("keyvariable".into()),
            Some("basevariable".into()),
            Some("https://api.example.com/v0/".into()),
            no_env,
        )
        .unwrap();
        assert_eq!(
            cfg.url_template,
            "https://api.example.com/v0/basevariable/%s"
        );
    }
}
