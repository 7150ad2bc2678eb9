use base64::prelude::*;
use sha1::{Digest, Sha1};

use crate::core::{Currency, MinorUnits};

/// Fields covered by the iPay88 request signature
///
/// The gateway recomputes the same digest on its side, so field order and
/// formatting must match exactly or the payment is rejected without a reason.
#[derive(Debug, Clone, Copy)]
pub struct SignatureInput<'a> {
    pub merchant_key: &'a str,
    pub merchant_code: &'a str,
    pub ref_no: &'a str,
    pub amount: MinorUnits,
    pub currency: Currency,
}

impl SignatureInput<'_> {
    /// key ‖ code ‖ refNo ‖ amount-in-minor-units ‖ currency
    pub fn preimage(&self) -> String {
        format!(
            "{}{}{}{}{}",
            self.merchant_key,
            self.merchant_code,
            self.ref_no,
            self.amount,
            self.currency.code()
        )
    }

    /// Base64 of the raw 20-byte SHA-1 digest (not of its hex form)
    pub fn sign(&self) -> String {
        let mut hasher = Sha1::new();
        hasher.update(self.preimage().as_bytes());
        BASE64_STANDARD.encode(hasher.finalize())
    }
}
