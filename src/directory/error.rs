use thiserror::Error;

use super::types::EntryId;

/// Failures surfaced by a [`DirectoryClient`](super::DirectoryClient).
#[derive(Debug, Error)]
pub enum DirectoryError {
    /// The configured server address cannot be used for requests.
    #[error("Invalid phonebook server address: {0}")]
    InvalidAddress(String),

    /// The server could not be reached or the transfer broke off.
    #[error("Could not reach the phonebook server: {0}")]
    Network(String),

    /// The server answered with an unexpected non-success status.
    #[error("Server error: {status} - {message}")]
    Server { status: u16, message: String },

    /// The server rejected the payload; the message is the server's own.
    #[error("{0}")]
    Validation(String),

    /// The entry no longer exists on the server.
    #[error("Entry '{id}' not found")]
    NotFound { id: EntryId },

    /// The response body did not have the expected shape.
    #[error("Unexpected response from server: {0}")]
    Decode(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_displays_server_message_verbatim() {
        let err = DirectoryError::Validation("name must be unique".to_string());
        assert_eq!(err.to_string(), "name must be unique");
    }

    #[test]
    fn not_found_names_the_id() {
        let err = DirectoryError::NotFound { id: EntryId::from(3) };
        assert_eq!(err.to_string(), "Entry '3' not found");
    }

    #[test]
    fn invalid_address_is_not_a_network_failure() {
        let err = DirectoryError::InvalidAddress("relative URL without a base".into());
        assert_eq!(
            err.to_string(),
            "Invalid phonebook server address: relative URL without a base"
        );
    }
}
