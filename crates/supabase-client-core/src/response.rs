use serde::de::DeserializeOwned;

use crate::error::{SupabaseError, SupabaseResult};

/// Classify a fully-read response.
///
/// Any status in `200..300` yields the body untouched. Anything else becomes
/// [`SupabaseError::RequestFailed`] carrying the body as text; the bytes are
/// never handed back as a success value. No status is special-cased.
pub fn classify(status: u16, body: Vec<u8>) -> SupabaseResult<Vec<u8>> {
    if response_is_success(status) {
        return Ok(body);
    }
    let body = String::from_utf8_lossy(&body).into_owned();
    tracing::warn!(status, body = %body, "Supabase request failed");
    Err(SupabaseError::RequestFailed { status, body })
}

pub(crate) fn response_is_success(status: u16) -> bool {
    (200..300).contains(&status)
}

/// Strictly decode a 2xx body into `T`, mapping failures to
/// [`SupabaseError::InvalidResponse`].
pub fn decode<T: DeserializeOwned>(body: &[u8]) -> SupabaseResult<T> {
    serde_json::from_slice(body).map_err(|e| {
        tracing::warn!(error = %e, "Failed to decode Supabase response");
        SupabaseError::InvalidResponse(e.to_string())
    })
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;

    use super::*;

    #[test]
    fn success_range_passes_body_through() {
        for status in [200, 201, 204, 299] {
            let body = classify(status, b"[1,2]".to_vec()).unwrap();
            assert_eq!(body, b"[1,2]");
        }
    }

    #[test]
    fn outside_success_range_fails() {
        for status in [100, 199, 300, 304, 400, 401, 404, 500, 503] {
            let err = classify(status, b"bad".to_vec()).unwrap_err();
            match err {
                SupabaseError::RequestFailed { status: s, body } => {
                    assert_eq!(s, status);
                    assert_eq!(body, "bad");
                }
                other => panic!("expected RequestFailed, got {:?}", other),
            }
        }
    }

    #[test]
    fn non_utf8_error_body_is_lossy() {
        let err = classify(500, vec![0xff, b'x']).unwrap_err();
        assert!(err.to_string().contains('x'));
    }

    #[derive(Debug, Deserialize)]
    struct Pair {
        a: i32,
    }

    #[test]
    fn decode_ok_and_invalid() {
        let pair: Pair = decode(br#"{"a":1}"#).unwrap();
        assert_eq!(pair.a, 1);

        let err = decode::<Pair>(b"<html>").unwrap_err();
        assert!(err.is_invalid_response());
    }
}
