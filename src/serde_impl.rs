//! Serde support for `Attempt`.
//!
//! With the `serde` feature, [`Attempt<T>`] serializes as an externally tagged enum.
//! The error of a failure is opaque, so only its message is written:
//!
//! ```rust
//! use attempt::{Attempt, Error};
//!
//! let ok = Attempt::success(42);
//! assert_eq!(serde_json::to_string(&ok).unwrap(), r#"{"success":42}"#);
//!
//! let failed: Attempt<i32> = Attempt::failure(Error::msg("timed out"));
//! assert_eq!(serde_json::to_string(&failed).unwrap(), r#"{"failure":"timed out"}"#);
//! ```
//!
//! There is no `Deserialize` impl: a message cannot be turned back into the original
//! error.

use serde::{Serialize, Serializer};

use crate::Attempt;

impl<T> Serialize for Attempt<T>
where
    T: Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Attempt::Success(value) => {
                serializer.serialize_newtype_variant("Attempt", 0, "success", value)
            }
            Attempt::Failure(error) => serializer.serialize_newtype_variant(
                "Attempt",
                1,
                "failure",
                &error.to_string(),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{Attempt, Error};
    use serde::Serialize;

    #[derive(Serialize)]
    struct Report {
        name: &'static str,
        outcome: Attempt<u32>,
    }

    #[test]
    fn test_serialize_success() {
        let json = serde_json::to_value(Attempt::success(vec![1, 2])).unwrap();
        assert_eq!(json, serde_json::json!({ "success": [1, 2] }));
    }

    #[test]
    fn test_serialize_failure_writes_message() {
        let failed = Attempt::<u32>::of(|| "-1".parse::<u32>());
        let json = serde_json::to_value(&failed).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "failure": "invalid digit found in string" })
        );
    }

    #[test]
    fn test_serialize_nested_in_struct() {
        let report = Report {
            name: "fetch",
            outcome: Attempt::failure(Error::msg("connection reset")),
        };
        let json = serde_json::to_string(&report).unwrap();
        assert_eq!(
            json,
            r#"{"name":"fetch","outcome":{"failure":"connection reset"}}"#
        );
    }
}
