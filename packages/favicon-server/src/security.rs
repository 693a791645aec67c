use axum::extract::{Request, State};
use axum::http::header::{self, HeaderMap, HeaderName, HeaderValue, InvalidHeaderValue};
use axum::middleware::Next;
use axum::response::Response;

use crate::AppState;

const HSTS: &str = "max-age=63072000; includeSubDomains; preload";
const REFERRER_POLICY: &str = "strict-origin-when-cross-origin";
const PERMISSIONS_POLICY: &str = "camera=(), microphone=(), geolocation=()";

/// Content-Security-Policy のディレクティブ一覧（挿入順を保持）
#[derive(Debug, Clone, Default)]
pub struct ContentSecurityPolicy {
    directives: Vec<(&'static str, Vec<String>)>,
}

impl ContentSecurityPolicy {
    /// サイト全体のポリシー。CMS のオリジンは画像・API・プレビュー埋め込みに許可する。
    pub fn for_site(cms_origins: &[String]) -> Self {
        let mut csp = Self::default()
            .directive("default-src", ["'self'"])
            .directive("script-src", ["'self'", "'unsafe-inline'"])
            .directive("style-src", ["'self'", "'unsafe-inline'"])
            .directive("img-src", ["'self'", "data:", "blob:"])
            .directive("img-src", cms_origins.iter().map(String::as_str))
            .directive("font-src", ["'self'", "data:"])
            .directive("connect-src", ["'self'"])
            .directive("connect-src", cms_origins.iter().map(String::as_str));

        if !cms_origins.is_empty() {
            csp = csp.directive("frame-src", cms_origins.iter().map(String::as_str));
        }

        csp.directive("frame-ancestors", ["'none'"])
            .directive("base-uri", ["'self'"])
            .directive("form-action", ["'self'"])
            .directive("object-src", ["'none'"])
            .directive("upgrade-insecure-requests", Vec::<&str>::new())
    }

    /// ディレクティブにソースを追加する。既存のディレクティブには重複なく追記する。
    pub fn directive<'a>(
        mut self,
        name: &'static str,
        sources: impl IntoIterator<Item = &'a str>,
    ) -> Self {
        let index = match self.directives.iter().position(|(n, _)| *n == name) {
            Some(index) => index,
            None => {
                self.directives.push((name, Vec::new()));
                self.directives.len() - 1
            }
        };

        let existing = &mut self.directives[index].1;
        for source in sources {
            if !existing.iter().any(|s| s == source) {
                existing.push(source.to_string());
            }
        }
        self
    }

    /// `name src src; name src` 形式にシリアライズする
    pub fn to_header_value(&self) -> String {
        self.directives
            .iter()
            .map(|(name, sources)| {
                if sources.is_empty() {
                    name.to_string()
                } else {
                    format!("{name} {}", sources.join(" "))
                }
            })
            .collect::<Vec<_>>()
            .join("; ")
    }
}

/// 全レスポンスに付与するセキュリティヘッダー。起動時に一度だけ検証する。
#[derive(Debug, Clone)]
pub struct SecurityHeaders {
    headers: HeaderMap,
}

impl SecurityHeaders {
    pub fn new(csp: &ContentSecurityPolicy) -> Result<Self, InvalidHeaderValue> {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::CONTENT_SECURITY_POLICY,
            HeaderValue::from_str(&csp.to_header_value())?,
        );
        headers.insert(header::STRICT_TRANSPORT_SECURITY, HeaderValue::from_static(HSTS));
        headers.insert(header::X_CONTENT_TYPE_OPTIONS, HeaderValue::from_static("nosniff"));
        headers.insert(header::X_FRAME_OPTIONS, HeaderValue::from_static("DENY"));
        headers.insert(header::REFERRER_POLICY, HeaderValue::from_static(REFERRER_POLICY));
        headers.insert(
            HeaderName::from_static("permissions-policy"),
            HeaderValue::from_static(PERMISSIONS_POLICY),
        );
        Ok(Self { headers })
    }

    /// 既存の同名ヘッダーは上書きする
    pub fn apply(&self, target: &mut HeaderMap) {
        for (name, value) in &self.headers {
            target.insert(name.clone(), value.clone());
        }
    }
}

pub async fn security_headers(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let mut response = next.run(request).await;
    state.security.apply(response.headers_mut());
    response
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_site_policy_without_cms() {
        let csp = ContentSecurityPolicy::for_site(&[]);

        assert_eq!(
            csp.to_header_value(),
            "default-src 'self'; \
             script-src 'self' 'unsafe-inline'; \
             style-src 'self' 'unsafe-inline'; \
             img-src 'self' data: blob:; \
             font-src 'self' data:; \
             connect-src 'self'; \
             frame-ancestors 'none'; \
             base-uri 'self'; \
             form-action 'self'; \
             object-src 'none'; \
             upgrade-insecure-requests"
        );
    }

    #[test]
    fn test_site_policy_with_cms() {
        let origins = vec![
            "https://cdn.sanity.io".to_string(),
            "https://abc.api.sanity.io".to_string(),
        ];
        let value = ContentSecurityPolicy::for_site(&origins).to_header_value();

        assert!(value.contains(
            "img-src 'self' data: blob: https://cdn.sanity.io https://abc.api.sanity.io;"
        ));
        assert!(value.contains(
            "connect-src 'self' https://cdn.sanity.io https://abc.api.sanity.io;"
        ));
        assert!(value.contains(
            "frame-src https://cdn.sanity.io https://abc.api.sanity.io;"
        ));
    }

    #[test]
    fn test_directive_deduplicates() {
        let csp = ContentSecurityPolicy::default()
            .directive("img-src", ["'self'", "data:"])
            .directive("default-src", ["'none'"])
            .directive("img-src", ["data:", "https://a.example"]);

        assert_eq!(
            csp.to_header_value(),
            "img-src 'self' data: https://a.example; default-src 'none'"
        );
    }

    #[test]
    fn test_apply_overwrites() {
        let security = SecurityHeaders::new(&ContentSecurityPolicy::for_site(&[])).unwrap();
        let mut headers = HeaderMap::new();
        headers.insert(header::X_FRAME_OPTIONS, HeaderValue::from_static("SAMEORIGIN"));
        headers.insert(header::CONTENT_TYPE, HeaderValue::from_static("image/png"));

        security.apply(&mut headers);

        assert_eq!(headers[header::X_FRAME_OPTIONS], "DENY");
        assert_eq!(headers[header::X_CONTENT_TYPE_OPTIONS], "nosniff");
        assert_eq!(headers["permissions-policy"], PERMISSIONS_POLICY);
        assert_eq!(headers[header::CONTENT_TYPE], "image/png");
    }

    #[test]
    fn test_invalid_header_value() {
        let csp = ContentSecurityPolicy::default().directive("img-src", ["https://a.example\n"]);
        assert!(SecurityHeaders::new(&csp).is_err());
    }
}
