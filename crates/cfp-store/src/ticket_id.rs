//! Ticket-ID generation for the offline issue store.
//!
//! Same alphabet and length the client-side mock backend used: eight
//! characters drawn from A–Z and 0–9.

use crate::error::StoreError;

const TICKET_CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";
const TICKET_LEN: usize = 8;

/// Generate a fresh 8-character ticket ID.
///
/// # Errors
///
/// Returns `StoreError::TicketId` if the system RNG is unavailable.
pub fn generate() -> Result<String, StoreError> {
    let mut bytes = [0u8; TICKET_LEN];
    getrandom::fill(&mut bytes).map_err(|e| StoreError::TicketId(format!("rng unavailable: {e}")))?;
    Ok(bytes
        .iter()
        .map(|b| TICKET_CHARSET[usize::from(*b) % TICKET_CHARSET.len()] as char)
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_ids_are_eight_uppercase_alphanumerics() {
        let id = generate().expect("rng");
        assert_eq!(id.len(), TICKET_LEN);
        assert!(
            id.chars()
                .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit())
        );
    }

    #[test]
    fn consecutive_ids_differ() {
        let a = generate().expect("rng");
        let b = generate().expect("rng");
        assert_ne!(a, b);
    }
}
