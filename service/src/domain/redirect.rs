//! Redirection after a booking is saved.

use url::Url;

/// Origin relative redirect targets are resolved against.
///
/// Only the path and the query of the resolved URL are kept.
const ORIGIN: &str = "http://localhost/";

/// Builds the URL to navigate to once a booking is saved.
///
/// The `saved=1` query parameter is set on the provided `target`, as well as
/// the `s_no` one, if the server returned the serial number of the booking.
/// Other query parameters of the `target` are preserved.
///
/// # Errors
///
/// If the `target` cannot be resolved as a URL.
pub fn success_url(
    target: &str,
    s_no: Option<&str>,
) -> Result<String, url::ParseError> {
    let mut url = Url::parse(ORIGIN)?.join(target)?;

    let retained = url
        .query_pairs()
        .filter(|(k, _)| k != "saved" && k != "s_no")
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect::<Vec<_>>();
    _ = url
        .query_pairs_mut()
        .clear()
        .extend_pairs(retained)
        .append_pair("saved", "1");
    if let Some(s_no) = s_no {
        _ = url.query_pairs_mut().append_pair("s_no", s_no);
    }

    Ok(match url.query() {
        Some(query) => format!("{}?{query}", url.path()),
        None => url.path().to_owned(),
    })
}

#[cfg(test)]
mod spec {
    use super::success_url;

    #[test]
    fn flags_default_target() {
        assert_eq!(
            success_url("/crm/new?saved=1", None).unwrap(),
            "/crm/new?saved=1",
        );
        assert_eq!(
            success_url("/crm/new?saved=1", Some("42")).unwrap(),
            "/crm/new?saved=1&s_no=42",
        );
    }

    #[test]
    fn flags_custom_target() {
        assert_eq!(success_url("/crm/list", None).unwrap(), "/crm/list?saved=1");
        assert_eq!(
            success_url("/crm/list?page=2", Some("7")).unwrap(),
            "/crm/list?page=2&saved=1&s_no=7",
        );
    }

    #[test]
    fn overwrites_stale_parameters() {
        assert_eq!(
            success_url("/crm/new?s_no=3&saved=0", Some("4")).unwrap(),
            "/crm/new?saved=1&s_no=4",
        );
    }

    #[test]
    fn keeps_only_path_of_absolute_target() {
        assert_eq!(
            success_url("https://crm.example.com/crm/new", Some("5")).unwrap(),
            "/crm/new?saved=1&s_no=5",
        );
    }
}
