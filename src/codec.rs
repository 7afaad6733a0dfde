//! Answer tokens: a sequence of answer indices packed as base-4 digit characters
//! and wrapped in unpadded base64url so the token can sit in a URL untouched.
//!
//! This is a different code space from [`crate::types::level::ResultCode`], which
//! carries three base-3 level digits.

use crate::error::{QuizError, Result};
use base64::alphabet;
use base64::engine::general_purpose::{GeneralPurpose, GeneralPurposeConfig};
use base64::engine::DecodePaddingMode;
use base64::Engine;

pub const ANSWER_RADIX: u8 = 4;

const TOKEN_ENGINE: GeneralPurpose = GeneralPurpose::new(
    &alphabet::URL_SAFE,
    GeneralPurposeConfig::new()
        .with_encode_padding(false)
        .with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

pub fn encode(answers: &[u8]) -> Result<String> {
    let packed = answers
        .iter()
        .map(|&answer| {
            if answer < ANSWER_RADIX {
                Ok(char::from(b'0' + answer))
            } else {
                Err(QuizError::AnswerOutOfRange(answer))
            }
        })
        .collect::<Result<String>>()?;
    Ok(TOKEN_ENGINE.encode(packed))
}

/// Malformed tokens decode to an empty sequence.
pub fn decode(token: &str) -> Vec<u8> {
    let Ok(bytes) = TOKEN_ENGINE.decode(token.trim()) else {
        tracing::debug!(token, "answer token is not base64url");
        return Vec::new();
    };
    let digits = bytes
        .iter()
        .map(|byte| byte.checked_sub(b'0').filter(|digit| *digit < ANSWER_RADIX))
        .collect::<Option<Vec<_>>>();
    digits.unwrap_or_else(|| {
        tracing::debug!(token, "answer token carries out-of-range digits");
        Vec::new()
    })
}
