use std::net::SocketAddr;

use favicon_core::{GlyphStyle, parse_hex_color, validate_label};

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";
const DEFAULT_LABEL: char = 'A';
const DEFAULT_BACKGROUND: &str = "#0f172a";
const DEFAULT_FOREGROUND: &str = "#f8fafc";

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("{name} is invalid: {reason}")]
pub struct ConfigError {
    pub name: &'static str,
    pub reason: String,
}

impl ConfigError {
    fn new(name: &'static str, reason: impl ToString) -> Self {
        Self {
            name,
            reason: reason.to_string(),
        }
    }
}

/// サーバー設定
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub bind_addr: SocketAddr,
    pub style: GlyphStyle,
    /// CMS のオリジン（CSP の img-src / connect-src / frame-src に追加）
    pub cms_origins: Vec<String>,
}

impl ServerConfig {
    /// 環境変数から ServerConfig を作成する。
    ///
    /// 任意の環境変数:
    /// - BIND_ADDR
    /// - FAVICON_LABEL
    /// - FAVICON_BACKGROUND
    /// - FAVICON_FOREGROUND
    /// - CMS_ORIGINS（カンマ区切り）
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let bind_addr = lookup("BIND_ADDR")
            .unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string())
            .parse::<SocketAddr>()
            .map_err(|e| ConfigError::new("BIND_ADDR", e))?;

        let label = match lookup("FAVICON_LABEL") {
            Some(value) => parse_label(&value)?,
            None => DEFAULT_LABEL,
        };

        let background = lookup("FAVICON_BACKGROUND").unwrap_or_else(|| DEFAULT_BACKGROUND.to_string());
        let background =
            parse_hex_color(&background).map_err(|e| ConfigError::new("FAVICON_BACKGROUND", e))?;

        let foreground = lookup("FAVICON_FOREGROUND").unwrap_or_else(|| DEFAULT_FOREGROUND.to_string());
        let foreground =
            parse_hex_color(&foreground).map_err(|e| ConfigError::new("FAVICON_FOREGROUND", e))?;

        let cms_origins = match lookup("CMS_ORIGINS") {
            Some(value) => parse_origins(&value)?,
            None => Vec::new(),
        };

        Ok(Self {
            bind_addr,
            style: GlyphStyle {
                label,
                background,
                foreground,
                ..GlyphStyle::default()
            },
            cms_origins,
        })
    }
}

fn parse_label(value: &str) -> Result<char, ConfigError> {
    let mut chars = value.trim().chars();
    let (Some(label), None) = (chars.next(), chars.next()) else {
        return Err(ConfigError::new("FAVICON_LABEL", "must be a single character"));
    };
    validate_label(label).map_err(|e| ConfigError::new("FAVICON_LABEL", e))?;
    Ok(label.to_ascii_uppercase())
}

/// オリジンは CSP ヘッダーにそのまま埋め込むため、区切り文字を含むものは拒否する
fn parse_origins(value: &str) -> Result<Vec<String>, ConfigError> {
    value
        .split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .map(|origin| {
            let valid_scheme = origin.starts_with("https://") || origin.starts_with("http://");
            let valid_chars = origin
                .chars()
                .all(|c| c.is_ascii_graphic() && c != ';' && c != ',' && c != '\'');
            if valid_scheme && valid_chars {
                Ok(origin.trim_end_matches('/').to_string())
            } else {
                Err(ConfigError::new("CMS_ORIGINS", format!("invalid origin {origin:?}")))
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name: &str| vars.get(name).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = ServerConfig::from_lookup(lookup(&[])).unwrap();

        assert_eq!(config.bind_addr, "0.0.0.0:3000".parse().unwrap());
        assert_eq!(config.style, GlyphStyle::default());
        assert!(config.cms_origins.is_empty());
    }

    #[test]
    fn test_all_values() {
        let config = ServerConfig::from_lookup(lookup(&[
            ("BIND_ADDR", "127.0.0.1:8080"),
            ("FAVICON_LABEL", "k"),
            ("FAVICON_BACKGROUND", "#fff"),
            ("FAVICON_FOREGROUND", "#000000"),
            ("CMS_ORIGINS", "https://cdn.sanity.io/, https://abc.api.sanity.io,"),
        ]))
        .unwrap();

        assert_eq!(config.bind_addr.port(), 8080);
        assert_eq!(config.style.label, 'K');
        assert_eq!(config.style.background, parse_hex_color("#ffffff").unwrap());
        assert_eq!(config.style.foreground, parse_hex_color("#000").unwrap());
        assert_eq!(
            config.cms_origins,
            vec!["https://cdn.sanity.io", "https://abc.api.sanity.io"]
        );
    }

    #[test]
    fn test_invalid_values() {
        let cases = [
            ("BIND_ADDR", "localhost"),
            ("FAVICON_LABEL", "AB"),
            ("FAVICON_LABEL", "?"),
            ("FAVICON_BACKGROUND", "navy"),
            ("FAVICON_FOREGROUND", "#12"),
            ("CMS_ORIGINS", "cdn.sanity.io"),
            ("CMS_ORIGINS", "https://x.io; script-src *"),
        ];
        for (name, value) in cases {
            let err = ServerConfig::from_lookup(lookup(&[(name, value)])).unwrap_err();
            assert_eq!(err.name, name, "{value}");
        }
    }
}
