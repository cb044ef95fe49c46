//! Connector errors and CIP-30 error classification.
//!
//! Every failure from the wallet is forwarded to the caller: no retry, no
//! fallback, no rewording of the wallet's message. The only judgement made
//! here is sorting the wallet's `{code, info}` pair into the taxonomy, and
//! CIP-30 reuses numeric codes across its error families, so classification
//! is contextual per call family.

use thiserror::Error;

/// Connector errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConnectorError {
    /// The requested wallet name is not a key in the registry.
    #[error("wallet not found: {0}")]
    NotFound(String),

    /// The user declined a permission or signing prompt.
    #[error("refused by user: {0}")]
    Refused(String),

    /// An input failed the local hex shape check before reaching the wallet.
    #[error("malformed hex input: {0}")]
    MalformedHex(String),

    /// The wallet or network rejected the request. `info` is the wallet's
    /// message, verbatim.
    #[error("wallet rejected request{}: {info}", fmt_code(.code))]
    External { code: Option<i32>, info: String },
}

fn fmt_code(code: &Option<i32>) -> String {
    match code {
        Some(c) => format!(" (code {})", c),
        None => String::new(),
    }
}

/// Which CIP-30 error family a failed call reports in. The families overlap
/// numerically (e.g. code 2 is ProofGeneration for data signing but
/// UserDeclined for transaction signing), so the call site must say which
/// table applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorContext {
    /// APIError: enable and the read operations.
    Api,
    /// TxSignError: signTx.
    TxSign,
    /// DataSignError: signData.
    DataSign,
    /// TxSendError: submitTx.
    TxSend,
}

impl ConnectorError {
    /// Sort a wallet error into the taxonomy. User-declined codes become
    /// [`ConnectorError::Refused`]; everything else passes through as
    /// [`ConnectorError::External`] with the message untouched.
    pub fn classify(ctx: ErrorContext, code: Option<i32>, info: String) -> Self {
        let refused = match (ctx, code) {
            (ErrorContext::Api, Some(-3)) => true,
            (ErrorContext::TxSign, Some(2)) => true,
            (ErrorContext::DataSign, Some(3)) => true,
            (ErrorContext::TxSend, Some(1)) => true,
            _ => false,
        };
        if refused {
            ConnectorError::Refused(info)
        } else {
            ConnectorError::External { code, info }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_refused_code() {
        let err = ConnectorError::classify(ErrorContext::Api, Some(-3), "user said no".into());
        assert_eq!(err, ConnectorError::Refused("user said no".into()));
    }

    #[test]
    fn api_other_codes_are_external() {
        for code in [-1, -2, -4] {
            let err = ConnectorError::classify(ErrorContext::Api, Some(code), "boom".into());
            assert_eq!(
                err,
                ConnectorError::External {
                    code: Some(code),
                    info: "boom".into()
                }
            );
        }
    }

    #[test]
    fn tx_sign_user_declined() {
        let err = ConnectorError::classify(ErrorContext::TxSign, Some(2), "declined".into());
        assert!(matches!(err, ConnectorError::Refused(_)));
        // Code 2 means refused only in the TxSign family.
        let err = ConnectorError::classify(ErrorContext::DataSign, Some(2), "proof".into());
        assert!(matches!(err, ConnectorError::External { .. }));
    }

    #[test]
    fn data_sign_user_declined() {
        let err = ConnectorError::classify(ErrorContext::DataSign, Some(3), "declined".into());
        assert!(matches!(err, ConnectorError::Refused(_)));
    }

    #[test]
    fn tx_send_refused() {
        let err = ConnectorError::classify(ErrorContext::TxSend, Some(1), "nope".into());
        assert!(matches!(err, ConnectorError::Refused(_)));
        let err = ConnectorError::classify(ErrorContext::TxSend, Some(2), "mempool full".into());
        assert_eq!(
            err,
            ConnectorError::External {
                code: Some(2),
                info: "mempool full".into()
            }
        );
    }

    #[test]
    fn missing_code_is_external_verbatim() {
        let err = ConnectorError::classify(ErrorContext::Api, None, "TypeError: x".into());
        assert_eq!(
            err,
            ConnectorError::External {
                code: None,
                info: "TypeError: x".into()
            }
        );
        assert_eq!(err.to_string(), "wallet rejected request: TypeError: x");
    }

    #[test]
    fn external_display_includes_code() {
        let err = ConnectorError::External {
            code: Some(-2),
            info: "internal".into(),
        };
        assert_eq!(err.to_string(), "wallet rejected request (code -2): internal");
    }
}
