//! URL origin and domain extraction for site base URLs.

/// Extracts the scheme+host origin from a site base URL.
///
/// Given `"https://shop.example/collections/all"`, returns
/// `"https://shop.example"`. Sitemap probes and link absolutization always
/// start from the site root, regardless of what path the configured base
/// URL carries.
#[must_use]
pub fn site_origin(base_url: &str) -> String {
    reqwest::Url::parse(base_url).map_or_else(
        |e| {
            tracing::warn!(
                base_url,
                error = %e,
                "could not parse site URL, falling back to string split for origin extraction"
            );
            // fallback: take "https://host" by splitting on '/' and taking first 3 parts
            base_url
                .trim_end_matches('/')
                .splitn(4, '/')
                .take(3)
                .collect::<Vec<_>>()
                .join("/")
        },
        |u| u.origin().ascii_serialization(),
    )
}

/// Extracts the hostname from a site base URL, used as the listing `source`.
///
/// Falls back to the full URL string if parsing fails.
#[must_use]
pub fn site_domain(base_url: &str) -> String {
    reqwest::Url::parse(base_url)
        .ok()
        .and_then(|u| u.host_str().map(str::to_owned))
        .unwrap_or_else(|| base_url.to_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn site_origin_strips_path() {
        assert_eq!(
            site_origin("https://shop.example/collections/all"),
            "https://shop.example"
        );
    }

    #[test]
    fn site_origin_trailing_slash() {
        assert_eq!(site_origin("https://shop.example/"), "https://shop.example");
    }

    #[test]
    fn site_domain_strips_scheme() {
        assert_eq!(site_domain("https://shop.example"), "shop.example");
        assert_eq!(site_domain("http://sub.shop.example/x"), "sub.shop.example");
    }

    #[test]
    fn site_domain_falls_back_to_input() {
        assert_eq!(site_domain("not a url"), "not a url");
    }
}
