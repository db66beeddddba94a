//! The order message signed by trading keys.
//!
//! The fields are packed in declaration order with the widths in
//! [`crate::constants::order_layout`], 860 bits in total. Unlike
//! [`BitArray::add_bn`], packing an order refuses values that do not fit
//! their slot, since a truncated amount or id would sign a different order.

use curve::{Affine, BigUint};
use serde::{Deserialize, Serialize};

use crate::bitarray::BitArray;
use crate::constants::order_layout as width;
use crate::errors::EdDsaError;
use crate::signatures::{Signature, SignatureWithHash, sign, verify};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderMessage {
    pub exchange_id: u32,
    pub order_id: u32,
    pub account_id: u32,
    #[serde(with = "curve::serde_decimal")]
    pub dual_auth_public_key_x: BigUint,
    #[serde(with = "curve::serde_decimal")]
    pub dual_auth_public_key_y: BigUint,
    pub token_s: u32,
    pub token_b: u32,
    #[serde(with = "curve::serde_decimal")]
    pub amount_s: BigUint,
    #[serde(with = "curve::serde_decimal")]
    pub amount_b: BigUint,
    pub all_or_none: bool,
    pub valid_since: u32,
    pub valid_until: u32,
    pub max_fee_bips: u32,
    pub buy: bool,
}

impl OrderMessage {
    /// Pack the order into its 860-bit message.
    pub fn to_bit_array(&self) -> Result<BitArray, EdDsaError> {
        let mut bits = BitArray::new();

        push_u32(&mut bits, "exchange_id", self.exchange_id, width::EXCHANGE_ID)?;
        push_u32(&mut bits, "order_id", self.order_id, width::ORDER_ID)?;
        push_u32(&mut bits, "account_id", self.account_id, width::ACCOUNT_ID)?;
        push_big(
            &mut bits,
            "dual_auth_public_key_x",
            &self.dual_auth_public_key_x,
            width::DUAL_AUTH_PUBLIC_KEY_X,
        )?;
        push_big(
            &mut bits,
            "dual_auth_public_key_y",
            &self.dual_auth_public_key_y,
            width::DUAL_AUTH_PUBLIC_KEY_Y,
        )?;
        push_u32(&mut bits, "token_s", self.token_s, width::TOKEN_S)?;
        push_u32(&mut bits, "token_b", self.token_b, width::TOKEN_B)?;
        push_big(&mut bits, "amount_s", &self.amount_s, width::AMOUNT_S)?;
        push_big(&mut bits, "amount_b", &self.amount_b, width::AMOUNT_B)?;
        bits.add_bool(self.all_or_none);
        push_u32(&mut bits, "valid_since", self.valid_since, width::VALID_SINCE)?;
        push_u32(&mut bits, "valid_until", self.valid_until, width::VALID_UNTIL)?;
        push_u32(&mut bits, "max_fee_bips", self.max_fee_bips, width::MAX_FEE_BIPS)?;
        bits.add_bool(self.buy);

        debug_assert_eq!(bits.len(), width::TOTAL);
        Ok(bits)
    }

    /// Sign the packed order with a secret key given as a decimal string.
    pub fn sign(&self, secret_key: &str) -> Result<SignatureWithHash, EdDsaError> {
        let bits = self.to_bit_array()?;
        tracing::debug!(
            exchange_id = self.exchange_id,
            account_id = self.account_id,
            order_id = self.order_id,
            "signing order"
        );
        sign(secret_key, bits.bits())
    }

    /// Verify an order signature. Orders that cannot be packed never verify.
    pub fn verify(&self, signature: &Signature, public_key: &Affine) -> bool {
        match self.to_bit_array() {
            Ok(bits) => verify(bits.bits(), signature, public_key),
            Err(err) => {
                tracing::debug!(%err, "rejecting order signature");
                false
            }
        }
    }
}

fn push_u32(
    bits: &mut BitArray,
    field: &'static str,
    value: u32,
    width: usize,
) -> Result<(), EdDsaError> {
    if width < 32 && value >> width != 0 {
        return Err(EdDsaError::FieldOverflow { field, width });
    }
    bits.add_number(u64::from(value), width);
    Ok(())
}

fn push_big(
    bits: &mut BitArray,
    field: &'static str,
    value: &BigUint,
    width: usize,
) -> Result<(), EdDsaError> {
    if value.bits() > width as u64 {
        return Err(EdDsaError::FieldOverflow { field, width });
    }
    bits.add_bn(value, width);
    Ok(())
}
