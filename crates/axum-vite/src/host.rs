// Copyright 2019-2026 Maravilla Labs, operated by SOLUTAS GmbH, Switzerland
// SPDX-License-Identifier: Apache-2.0
// SPDX-License-Identifier: MIT

//! Virtual host handling for the asset route.
//!
//! When the app dispatches on hosts, the `/_vite` route can be pinned to one
//! host, or to whatever host the current request came in on (`"*"`). The
//! value is validated once at initialisation and then used both to guard the
//! route and to build asset URLs.

use std::fmt;

use axum::http::header::HOST;
use axum::http::request::Parts;
use axum::http::HeaderMap;

use crate::error::ConfigError;

/// Path prefix of the asset route.
pub const ASSET_PREFIX: &str = "/_vite";

/// Reserved token standing for "the host of the current request".
pub const WILDCARD_PLACEHOLDER: &str = "__vite_request_host__";

/// Frozen virtual host configuration of the asset route.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum VirtualHost {
    /// Ordinary single-host routing.
    #[default]
    Unset,
    /// The route answers on this host only.
    Literal(String),
    /// The route answers on any host; URLs use the request's host.
    Wildcard,
}

impl VirtualHost {
    /// Validates and normalises the routing host.
    ///
    /// `constructed` is the value given when the extension was created and
    /// `initialised` the one passed when it was attached to an app. Empty
    /// strings count as absent.
    pub fn resolve(
        constructed: Option<&str>,
        initialised: Option<&str>,
        host_matching: bool,
    ) -> Result<Self, ConfigError> {
        let constructed = constructed.filter(|h| !h.is_empty());
        let initialised = initialised.filter(|h| !h.is_empty());

        let host = match (constructed, initialised) {
            (Some(a), Some(b)) if a != b => {
                return Err(ConfigError::ConfiguredTwice {
                    constructed: a.to_string(),
                    initialised: b.to_string(),
                })
            }
            (Some(host), _) | (None, Some(host)) => host,
            (None, None) => return Ok(Self::Unset),
        };

        if !host_matching {
            return Err(ConfigError::HostMatchingDisabled(host.to_string()));
        }

        if host == "*" {
            return Ok(Self::Wildcard);
        }

        if host.contains('<') || host.contains('>') {
            return Err(ConfigError::DynamicHost(host.to_string()));
        }

        Ok(Self::Literal(host.to_string()))
    }

    /// Returns true if a request for `request_host` may reach the route.
    pub fn accepts(&self, request_host: Option<&str>) -> bool {
        match self {
            Self::Unset | Self::Wildcard => true,
            Self::Literal(host) => request_host.is_some_and(|h| h.eq_ignore_ascii_case(host)),
        }
    }
}

impl fmt::Display for VirtualHost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unset => write!(f, ""),
            Self::Literal(host) => write!(f, "{}", host),
            Self::Wildcard => write!(f, "{}", WILDCARD_PLACEHOLDER),
        }
    }
}

/// Builds URLs for the asset route, embedding the virtual host when needed.
#[derive(Debug, Clone, Copy)]
pub struct AssetUrls<'a> {
    host: &'a VirtualHost,
}

impl<'a> AssetUrls<'a> {
    /// Creates a URL builder for the given configuration.
    pub fn new(host: &'a VirtualHost) -> Self {
        Self { host }
    }

    /// Reverses the asset route for `filename`.
    ///
    /// `request_host` is the host of the request being served, if any.
    /// `explicit_host` overrides the host the URL points at. A URL for the
    /// host already being served stays relative; any other host produces a
    /// scheme-relative `//host/_vite/...` URL.
    pub fn url_for(
        &self,
        filename: &str,
        request_host: Option<&str>,
        explicit_host: Option<&str>,
    ) -> String {
        let path = format!("{}/{}", ASSET_PREFIX, filename.trim_start_matches('/'));

        let target = explicit_host.or(match self.host {
            VirtualHost::Unset => None,
            VirtualHost::Literal(host) => Some(host.as_str()),
            VirtualHost::Wildcard => request_host,
        });

        match target {
            Some(host) if !request_host.is_some_and(|r| r.eq_ignore_ascii_case(host)) => {
                format!("//{}{}", host, path)
            }
            _ => path,
        }
    }
}

/// Host of an incoming request: the `Host` header, else the URI authority.
pub fn request_host(parts: &Parts) -> Option<String> {
    host_from(&parts.headers, parts.uri.authority().map(|a| a.as_str()))
}

pub(crate) fn host_from(headers: &HeaderMap, authority: Option<&str>) -> Option<String> {
    headers
        .get(HOST)
        .and_then(|v| v.to_str().ok())
        .or(authority)
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::Request;

    #[test]
    fn absent_host_is_unset() {
        assert_eq!(VirtualHost::resolve(None, None, false).unwrap(), VirtualHost::Unset);
        assert_eq!(VirtualHost::resolve(None, None, true).unwrap(), VirtualHost::Unset);
        assert_eq!(
            VirtualHost::resolve(Some(""), None, false).unwrap(),
            VirtualHost::Unset
        );
    }

    #[test]
    fn wildcard_is_normalised() {
        let host = VirtualHost::resolve(None, Some("*"), true).unwrap();
        assert_eq!(host, VirtualHost::Wildcard);
        assert_eq!(host.to_string(), WILDCARD_PLACEHOLDER);
    }

    #[test]
    fn literal_host_from_either_place() {
        assert_eq!(
            VirtualHost::resolve(Some("assets.test"), None, true).unwrap(),
            VirtualHost::Literal("assets.test".into())
        );
        assert_eq!(
            VirtualHost::resolve(None, Some("assets.test"), true).unwrap(),
            VirtualHost::Literal("assets.test".into())
        );
        assert_eq!(
            VirtualHost::resolve(Some("assets.test"), Some("assets.test"), true).unwrap(),
            VirtualHost::Literal("assets.test".into())
        );
    }

    #[test]
    fn two_different_hosts_are_rejected() {
        let err = VirtualHost::resolve(Some("a.test"), Some("b.test"), true).unwrap_err();
        assert!(matches!(err, ConfigError::ConfiguredTwice { .. }));
    }

    #[test]
    fn conflict_is_checked_before_host_matching() {
        let err = VirtualHost::resolve(Some("a.test"), Some("b.test"), false).unwrap_err();
        assert!(matches!(err, ConfigError::ConfiguredTwice { .. }));
    }

    #[test]
    fn host_without_host_matching_is_rejected() {
        let err = VirtualHost::resolve(None, Some("a.test"), false).unwrap_err();
        assert!(matches!(err, ConfigError::HostMatchingDisabled(_)));

        let err = VirtualHost::resolve(Some("*"), None, false).unwrap_err();
        assert!(matches!(err, ConfigError::HostMatchingDisabled(_)));
    }

    #[test]
    fn routing_variables_are_rejected() {
        let err = VirtualHost::resolve(None, Some("<subdomain>.test"), true).unwrap_err();
        assert!(matches!(err, ConfigError::DynamicHost(_)));
    }

    #[test]
    fn literal_accepts_only_its_host() {
        let host = VirtualHost::Literal("assets.test".into());
        assert!(host.accepts(Some("assets.test")));
        assert!(host.accepts(Some("ASSETS.test")));
        assert!(!host.accepts(Some("www.test")));
        assert!(!host.accepts(None));

        assert!(VirtualHost::Wildcard.accepts(Some("anything.test")));
        assert!(VirtualHost::Unset.accepts(None));
    }

    #[test]
    fn unset_urls_are_relative() {
        let host = VirtualHost::Unset;
        let urls = AssetUrls::new(&host);
        assert_eq!(urls.url_for("main.js", Some("www.test"), None), "/_vite/main.js");
        assert_eq!(urls.url_for("main.js", None, None), "/_vite/main.js");
    }

    #[test]
    fn wildcard_urls_follow_the_request() {
        let host = VirtualHost::Wildcard;
        let urls = AssetUrls::new(&host);
        assert_eq!(urls.url_for("main.js", Some("www.test"), None), "/_vite/main.js");
        assert_eq!(
            urls.url_for("main.js", Some("www.test"), Some("cdn.test")),
            "//cdn.test/_vite/main.js"
        );
    }

    #[test]
    fn literal_urls_embed_the_host() {
        let host = VirtualHost::Literal("assets.test".into());
        let urls = AssetUrls::new(&host);
        assert_eq!(
            urls.url_for("main.js", Some("www.test"), None),
            "//assets.test/_vite/main.js"
        );
        assert_eq!(urls.url_for("main.js", None, None), "//assets.test/_vite/main.js");
        assert_eq!(urls.url_for("main.js", Some("assets.test"), None), "/_vite/main.js");
    }

    #[test]
    fn request_host_prefers_header() {
        let (parts, _) = Request::builder()
            .uri("http://uri.test/x")
            .header(HOST, "header.test")
            .body(())
            .unwrap()
            .into_parts();
        assert_eq!(request_host(&parts).as_deref(), Some("header.test"));

        let (parts, _) = Request::builder()
            .uri("http://uri.test/x")
            .body(())
            .unwrap()
            .into_parts();
        assert_eq!(request_host(&parts).as_deref(), Some("uri.test"));

        let (parts, _) = Request::builder().uri("/x").body(()).unwrap().into_parts();
        assert_eq!(request_host(&parts), None);
    }
}
