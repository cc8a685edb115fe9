//! The judge's 4+N message framing.

/// Wrap a finished message for the judge: a 4-byte big-endian byte length,
/// then the payload.
pub fn frame(msg: &str) -> Vec<u8> {
    let mut out = Vec::with_capacity(4 + msg.len());
    out.extend_from_slice(&(msg.len() as u32).to_be_bytes());
    out.extend_from_slice(msg.as_bytes());
    out
}
