// SPDX-License-Identifier: MIT OR Apache-2.0

//! Destringified scalar value with type-safe conversions.
//!
//! An [`Entry`](crate::domain::Entry) stores the raw text written by the format
//! layer. `Scalar` holds that text after quote removal and converts it to Rust
//! types on demand.

use crate::domain::errors::{CdnError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A destringified scalar value.
///
/// # Examples
///
/// ```
/// use cdncfg::domain::Scalar;
///
/// let value = Scalar::from("42");
/// assert_eq!(value.as_str(), "42");
/// assert_eq!(value.as_i32("server.port").unwrap(), 42);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scalar(String);

impl Scalar {
    /// Creates a new `Scalar` from an already destringified `String`.
    pub fn new(value: String) -> Self {
        Scalar(value)
    }

    /// Returns the value as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Converts the scalar into its inner `String`.
    pub fn into_string(self) -> String {
        self.0
    }

    /// Converts the value to a boolean.
    ///
    /// Only the exact spellings `true` and `false` are accepted; anything else is a
    /// [`CdnError::TypeConversionError`].
    ///
    /// # Examples
    ///
    /// ```
    /// use cdncfg::domain::Scalar;
    ///
    /// assert!(Scalar::from("true").as_bool("debug").unwrap());
    /// assert!(!Scalar::from("false").as_bool("debug").unwrap());
    /// assert!(Scalar::from("yes").as_bool("debug").is_err());
    /// ```
    pub fn as_bool(&self, key: &str) -> Result<bool> {
        self.0
            .parse::<bool>()
            .map_err(|e| CdnError::from_parse_bool_error(key.to_string(), e))
    }

    /// Converts the value to an `i32`.
    pub fn as_i32(&self, key: &str) -> Result<i32> {
        self.0
            .parse::<i32>()
            .map_err(|e| CdnError::from_parse_int_error(key.to_string(), e))
    }

    /// Converts the value to an `i64`.
    pub fn as_i64(&self, key: &str) -> Result<i64> {
        self.0
            .parse::<i64>()
            .map_err(|e| CdnError::from_parse_int_error(key.to_string(), e))
    }

    /// Converts the value to an `f64`.
    pub fn as_f64(&self, key: &str) -> Result<f64> {
        self.0
            .parse::<f64>()
            .map_err(|e| CdnError::from_parse_float_error(key.to_string(), e))
    }

    /// Parses the value into any type that implements `FromStr`.
    ///
    /// # Examples
    ///
    /// ```
    /// use cdncfg::domain::Scalar;
    /// use std::net::IpAddr;
    ///
    /// let value = Scalar::from("127.0.0.1");
    /// let ip: IpAddr = value.parse("server.bind").unwrap();
    /// assert_eq!(ip.to_string(), "127.0.0.1");
    /// ```
    pub fn parse<T>(&self, key: &str) -> Result<T>
    where
        T: FromStr,
        T::Err: std::error::Error + Send + Sync + 'static,
    {
        self.0
            .parse::<T>()
            .map_err(|e| CdnError::TypeConversionError {
                key: key.to_string(),
                target_type: std::any::type_name::<T>().to_string(),
                source: Box::new(e),
            })
    }
}

impl From<String> for Scalar {
    fn from(s: String) -> Self {
        Scalar(s)
    }
}

impl From<&str> for Scalar {
    fn from(s: &str) -> Self {
        Scalar(s.to_string())
    }
}

impl From<Scalar> for String {
    fn from(value: Scalar) -> Self {
        value.0
    }
}

impl AsRef<str> for Scalar {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
