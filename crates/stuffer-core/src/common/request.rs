use crate::common::{
    error::{Error, Result},
    types::BYTES_PARAM,
};
use core::str::FromStr;

/// A validated request for `requested_bytes` random bytes.
///
/// Only non-negative integers that fit a `u64` are accepted. A missing value is
/// a [`Error::BadRequest`], never a zero-byte request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StreamRequest {
    requested_bytes: u64,
}

impl StreamRequest {
    pub const fn new(requested_bytes: u64) -> Self {
        Self { requested_bytes }
    }

    pub const fn requested_bytes(&self) -> u64 {
        self.requested_bytes
    }

    /// Parses the raw value of the `bytes` query parameter.
    ///
    /// # Errors
    ///
    /// Returns [`Error::BadRequest`] if `value` is `None` or not a valid
    /// non-negative integer.
    pub fn from_query(value: Option<&str>) -> Result<Self> {
        value.ok_or(Error::BadRequest)?.parse()
    }

    /// Finds the first `bytes` pair in a decoded query string and parses it.
    ///
    /// Later duplicates are ignored.
    pub fn from_query_pairs<K, V>(pairs: &[(K, V)]) -> Result<Self>
    where
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let value = pairs
            .iter()
            .find(|(key, _)| key.as_ref() == BYTES_PARAM)
            .map(|(_, value)| value.as_ref());
        Self::from_query(value)
    }

    /// Rejects the request if it exceeds `max`. `None` means no ceiling.
    pub fn ensure_within(self, max: Option<u64>) -> Result<Self> {
        match max {
            Some(max) if self.requested_bytes > max => Err(Error::TooLarge {
                requested: self.requested_bytes,
                max,
            }),
            _ => Ok(self),
        }
    }
}

impl FromStr for StreamRequest {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        s.parse::<u64>()
            .map(Self::new)
            .map_err(|_| Error::BadRequest)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_plain_integers() {
        assert_eq!(
            StreamRequest::from_query(Some("1048576")),
            Ok(StreamRequest::new(1_048_576))
        );
        assert_eq!(StreamRequest::from_query(Some("0")), Ok(StreamRequest::new(0)));
        assert_eq!(StreamRequest::from_query(Some("+7")), Ok(StreamRequest::new(7)));
    }

    #[test]
    fn missing_is_not_zero() {
        assert_eq!(StreamRequest::from_query(None), Err(Error::BadRequest));
    }

    #[test]
    fn rejects_non_numeric_and_negative() {
        for raw in ["", "abc", "-1", "12abc", " 5", "1.5", "18446744073709551616"] {
            assert_eq!(
                StreamRequest::from_query(Some(raw)),
                Err(Error::BadRequest),
                "{raw:?} should be rejected"
            );
        }
    }

    #[test]
    fn accepts_u64_max() {
        assert_eq!(
            StreamRequest::from_query(Some("18446744073709551615")),
            Ok(StreamRequest::new(u64::MAX))
        );
    }

    #[test]
    fn first_bytes_pair_wins() {
        let pairs = [("other", "x"), ("bytes", "12"), ("bytes", "99")];
        assert_eq!(
            StreamRequest::from_query_pairs(&pairs),
            Ok(StreamRequest::new(12))
        );
    }

    #[test]
    fn no_bytes_pair_is_bad_request() {
        let pairs: [(String, String); 1] = [("byte".into(), "12".into())];
        assert_eq!(
            StreamRequest::from_query_pairs(&pairs),
            Err(Error::BadRequest)
        );
    }

    #[test]
    fn ceiling() {
        let req = StreamRequest::new(10);
        assert_eq!(req.ensure_within(None), Ok(req));
        assert_eq!(req.ensure_within(Some(10)), Ok(req));
        assert_eq!(
            req.ensure_within(Some(9)),
            Err(Error::TooLarge {
                requested: 10,
                max: 9
            })
        );
    }
}
