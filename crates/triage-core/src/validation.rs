//! Field validation for ticket input.
//!
//! Each validator returns the normalized value or a
//! [`TicketError::Validation`]. Callers run them before touching any state.

use crate::constants::{MAX_DESCRIPTION_CHARS, MAX_TITLE_CHARS};
use crate::errors::TicketError;
use crate::tickets::NewTicket;

/// Length-check and trim a ticket title.
///
/// The length limit applies to the raw input, before trimming.
pub fn validate_title(title: &str) -> Result<String, TicketError> {
    let len = title.chars().count();
    if len > MAX_TITLE_CHARS {
        return Err(TicketError::validation(
            "title",
            format!("must be at most {MAX_TITLE_CHARS} characters (got {len})"),
        ));
    }
    let trimmed = title.trim();
    if trimmed.is_empty() {
        return Err(TicketError::validation(
            "title",
            "cannot be empty or whitespace only",
        ));
    }
    Ok(trimmed.to_owned())
}

/// Length-check a ticket description. The value is kept verbatim.
pub fn validate_description(description: &str) -> Result<String, TicketError> {
    let len = description.chars().count();
    if len > MAX_DESCRIPTION_CHARS {
        return Err(TicketError::validation(
            "description",
            format!("must be at most {MAX_DESCRIPTION_CHARS} characters (got {len})"),
        ));
    }
    Ok(description.to_owned())
}

/// Validate every field of a [`NewTicket`], returning a normalized copy.
pub fn validate_new_ticket(input: &NewTicket) -> Result<NewTicket, TicketError> {
    Ok(NewTicket {
        title: validate_title(&input.title)?,
        priority: input.priority,
        description: validate_description(&input.description)?,
    })
}
