//! Sizes and field widths of the EdDSA scheme.

/// Size of a compressed public key or R8 point in bytes.
pub const PK_SIZE: usize = curve::PACKED_POINT_SIZE;

/// Size of a secret key when fed to BLAKE-512 (little-endian).
pub const SK_SIZE: usize = 32;

/// Size of a packed signature in bytes.
///
/// A signature consists of:
/// - the compressed point R8 (32 bytes)
/// - the scalar S, little-endian (32 bytes)
/// Total: 64 bytes
pub const SIG_SIZE: usize = PK_SIZE + 32;

/// Bits of R8.x and A.x absorbed ahead of the message by the challenge hash.
pub const COORDINATE_BITS: usize = 254;

/// Bit widths of the order message, in packing order. The circuit reads the
/// fields in exactly this layout.
pub mod order_layout {
    pub const EXCHANGE_ID: usize = 32;
    pub const ORDER_ID: usize = 20;
    pub const ACCOUNT_ID: usize = 20;
    pub const DUAL_AUTH_PUBLIC_KEY_X: usize = 254;
    pub const DUAL_AUTH_PUBLIC_KEY_Y: usize = 254;
    pub const TOKEN_S: usize = 8;
    pub const TOKEN_B: usize = 8;
    pub const AMOUNT_S: usize = 96;
    pub const AMOUNT_B: usize = 96;
    pub const ALL_OR_NONE: usize = 1;
    pub const VALID_SINCE: usize = 32;
    pub const VALID_UNTIL: usize = 32;
    pub const MAX_FEE_BIPS: usize = 6;
    pub const BUY: usize = 1;

    /// Total message length: 860 bits.
    pub const TOTAL: usize = EXCHANGE_ID
        + ORDER_ID
        + ACCOUNT_ID
        + DUAL_AUTH_PUBLIC_KEY_X
        + DUAL_AUTH_PUBLIC_KEY_Y
        + TOKEN_S
        + TOKEN_B
        + AMOUNT_S
        + AMOUNT_B
        + ALL_OR_NONE
        + VALID_SINCE
        + VALID_UNTIL
        + MAX_FEE_BIPS
        + BUY;
}
