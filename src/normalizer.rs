use url::Url;

/// A URL after canonicalization, carrying the exact views the detectors
/// score against.
#[derive(Debug, Clone)]
pub struct NormalizedUrl {
    /// Serialized form of the parsed URL. The dangerous-extension and
    /// '@' checks scan this, so userinfo and query survive here.
    pub full_url: String,
    pub scheme: String,
    pub host: String,
    /// Path plus query, query prefixed with '?' when non-empty.
    pub path_and_query: String,
}

#[derive(Debug)]
pub struct MalformedUrl {
    pub reason: String,
}

impl std::fmt::Display for MalformedUrl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "malformed url: {}", self.reason)
    }
}

impl std::error::Error for MalformedUrl {}

/// Canonicalize a raw URL string: trim surrounding whitespace, lowercase,
/// and prefix `https://` unless the input already starts with `http://`
/// or `https://`. Parse failures surface as `MalformedUrl`; the evaluator
/// maps those to the fixed fallback verdict instead of erroring out.
pub fn normalize(raw: &str) -> Result<NormalizedUrl, MalformedUrl> {
    let trimmed = raw.trim().to_lowercase();
    let candidate = if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
        trimmed
    } else {
        format!("https://{trimmed}")
    };

    let parsed = Url::parse(&candidate).map_err(|e| MalformedUrl {
        reason: e.to_string(),
    })?;

    let host = parsed.host_str().unwrap_or("").to_string();
    let mut path_and_query = parsed.path().to_string();
    if let Some(query) = parsed.query() {
        if !query.is_empty() {
            path_and_query.push('?');
            path_and_query.push_str(query);
        }
    }

    Ok(NormalizedUrl {
        full_url: parsed.as_str().to_string(),
        scheme: parsed.scheme().to_string(),
        host,
        path_and_query,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_and_lowercases() {
        let url = normalize("  HTTPS://Example.COM/Path?Q=1  ").unwrap();
        assert_eq!(url.full_url, "https://example.com/path?q=1");
        assert_eq!(url.host, "example.com");
        assert_eq!(url.path_and_query, "/path?q=1");
        assert_eq!(url.scheme, "https");
    }

    #[test]
    fn bare_domain_gets_https_prefix() {
        let url = normalize("wikipedia.org").unwrap();
        assert_eq!(url.full_url, "https://wikipedia.org/");
        assert_eq!(url.host, "wikipedia.org");
        assert_eq!(url.path_and_query, "/");
        assert_eq!(url.scheme, "https");
    }

    #[test]
    fn http_scheme_is_preserved() {
        let url = normalize("http://bit.ly/abc").unwrap();
        assert_eq!(url.scheme, "http");
        assert_eq!(url.host, "bit.ly");
    }

    #[test]
    fn scheme_prefix_requires_full_match() {
        // "http" without "://" is not a scheme, so the host keeps the word.
        let url = normalize("httpbin.org/get").unwrap();
        assert_eq!(url.host, "httpbin.org");
        assert_eq!(url.scheme, "https");
    }

    #[test]
    fn free_text_is_malformed() {
        assert!(normalize("not a url at all").is_err());
    }

    #[test]
    fn empty_input_is_malformed() {
        assert!(normalize("").is_err());
        assert!(normalize("   ").is_err());
    }

    #[test]
    fn userinfo_survives_in_full_url() {
        let url = normalize("https://paypal.com@evil.com/login").unwrap();
        assert!(url.full_url.contains('@'));
        assert_eq!(url.host, "evil.com");
    }

    #[test]
    fn query_keeps_question_mark() {
        let url = normalize("https://example.com/claim?prize=1").unwrap();
        assert_eq!(url.path_and_query, "/claim?prize=1");
    }
}
