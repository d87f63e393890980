//! Deterministic message id synthesis
//!
//! When an export supplies no usable unique id column, a stable id is
//! synthesized from the row's provenance and content. The hash is a plain
//! 32-bit FNV-1a: cheap, allocation-free, and reproducible bit-for-bit
//! across runs so previously generated ids stay valid. No cryptographic
//! property is required or implied.

/// FNV-1a 32-bit offset basis
const FNV_OFFSET_BASIS: u32 = 2_166_136_261;

/// FNV-1a 32-bit prime
const FNV_PRIME: u32 = 16_777_619;

/// Deterministic 32-bit FNV-1a hash over the UTF-8 bytes of `text`.
///
/// Arithmetic wraps at 32 bits.
pub fn fnv1a_32(text: &str) -> u32 {
    let mut hash = FNV_OFFSET_BASIS;
    for byte in text.bytes() {
        hash ^= u32::from(byte);
        hash = hash.wrapping_mul(FNV_PRIME);
    }
    hash
}

/// Decimal hash of the pipe-joined stable key `ts_raw|sender|recipient`.
///
/// Sender and recipient are the cleaned values; the timestamp is the raw,
/// unparsed text, so an id never depends on timestamp parsing succeeding.
pub fn stable_key(ts_raw: &str, sender: &str, recipient: &str) -> String {
    fnv1a_32(&format!("{}|{}|{}", ts_raw, sender, recipient)).to_string()
}

/// Synthesize the fallback message id `ROW<source_row>:<hash>`
pub fn synthesize_msg_id(source_row: usize, ts_raw: &str, sender: &str, recipient: &str) -> String {
    format!("ROW{}:{}", source_row, stable_key(ts_raw, sender, recipient))
}
