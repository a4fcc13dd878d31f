//! [`Transport`]-related implementations.

#[cfg(feature = "http")]
pub mod http;

use std::fmt;

use derive_more::{Display, Error as StdError, From};
use serde::{de, Deserialize, Deserializer};

use crate::domain::Field;
#[cfg(doc)]
use common::operations::Post;

#[cfg(feature = "http")]
pub use self::http::Http;

/// Network operation, normally a [`Post`] of a [`Submission`] returning a
/// [`Reply`].
pub use common::Handler as Transport;

/// Booking form submitted to the server.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Submission {
    /// Path of the page the form is submitted to.
    pub path: String,

    /// Submitted [`Field`] texts, in their declaration order.
    pub fields: Vec<(Field, String)>,
}

/// Reply of the server to a [`Submission`].
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq)]
pub struct Reply {
    /// Indicator whether the booking was saved.
    #[serde(default)]
    pub ok: bool,

    /// Reasons the booking was rejected with.
    #[serde(default)]
    pub errors: Option<Vec<String>>,

    /// Serial number of the saved booking.
    #[serde(default, deserialize_with = "serial_number")]
    pub s_no: Option<String>,
}

/// Deserializes a serial number sent either as a string or as a number.
///
/// Number `0` means no serial number, while string `"0"` is a valid one.
fn serial_number<'de, D>(de: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    /// Visitor of a serial number.
    struct Visitor;

    impl de::Visitor<'_> for Visitor {
        type Value = Option<String>;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("a serial number string or integer")
        }

        fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
            Ok(None)
        }

        fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
            Ok(None)
        }

        fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
            Ok(Some(v.to_owned()))
        }

        fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
            Ok((v != 0).then(|| v.to_string()))
        }

        fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
            Ok((v != 0).then(|| v.to_string()))
        }
    }

    de.deserialize_any(Visitor)
}

impl Reply {
    /// Decodes a [`Reply`] from the provided JSON body.
    ///
    /// # Errors
    ///
    /// If the body isn't a JSON [`Reply`].
    pub fn from_json(body: &[u8]) -> Result<Self, Error> {
        Ok(serde_json::from_slice(body)?)
    }

    /// Returns the serial number of the saved booking, unless it's blank.
    #[must_use]
    pub fn serial_number(&self) -> Option<&str> {
        self.s_no.as_deref().map(str::trim).filter(|s| !s.is_empty())
    }

    /// Returns the reasons to show the user for a rejected booking.
    ///
    /// Falls back to a generic one when the server gave none.
    #[must_use]
    pub fn rejection(self) -> Vec<String> {
        match self.errors {
            Some(errors) if !errors.is_empty() => errors,
            Some(_) | None => vec!["Unknown error".to_owned()],
        }
    }
}

/// [`Transport`] error.
#[derive(Debug, Display, From, StdError)]
pub enum Error {
    #[cfg(feature = "http")]
    /// [`Http`] error.
    #[display("HTTP error: {_0}")]
    Http(http::Error),

    /// Reply is not a valid JSON [`Reply`].
    #[display("Failed to decode reply: {_0}")]
    Decode(serde_json::Error),
}

#[cfg(test)]
mod spec {
    use super::Reply;

    #[test]
    fn decodes_saved_reply() {
        let reply = Reply::from_json(br#"{"ok": true, "s_no": 42}"#).unwrap();

        assert!(reply.ok);
        assert_eq!(reply.serial_number(), Some("42"));

        let reply =
            Reply::from_json(br#"{"ok": true, "s_no": "A-7"}"#).unwrap();
        assert_eq!(reply.serial_number(), Some("A-7"));
    }

    #[test]
    fn ignores_blank_serial_number() {
        for body in [
            r#"{"ok": true}"#,
            r#"{"ok": true, "s_no": null}"#,
            r#"{"ok": true, "s_no": ""}"#,
            r#"{"ok": true, "s_no": 0}"#,
        ] {
            let reply = Reply::from_json(body.as_bytes()).unwrap();
            assert_eq!(reply.serial_number(), None, "{body}");
        }
    }

    #[test]
    fn keeps_zero_string_serial_number() {
        let reply =
            Reply::from_json(br#"{"ok": true, "s_no": "0"}"#).unwrap();

        assert_eq!(reply.serial_number(), Some("0"));
    }

    #[test]
    fn treats_missing_ok_as_rejection() {
        let reply = Reply::from_json(b"{}").unwrap();

        assert!(!reply.ok);
        assert_eq!(reply.rejection(), ["Unknown error"]);
    }

    #[test]
    fn keeps_server_reasons() {
        let reply = Reply::from_json(
            br#"{"ok": false, "errors": ["token is taken"]}"#,
        )
        .unwrap();

        assert_eq!(reply.rejection(), ["token is taken"]);
        assert_eq!(
            Reply::from_json(br#"{"ok": false, "errors": []}"#)
                .unwrap()
                .rejection(),
            ["Unknown error"],
        );
    }

    #[test]
    fn rejects_non_json_body() {
        assert!(Reply::from_json(b"<html>500</html>").is_err());
    }
}
