//! Input checks shared by create and update.
//!
//! Every violation of a step is collected before rejecting, so a client
//! sees all of its mistakes at once.

use validator::Validate;

use crate::error::{ProductError, ProductResult};
use crate::models::ProductInput;

/// Reported in this order
pub const MANDATORY_FIELDS: [&str; 4] = ["code", "name", "price", "category"];

/// Range-checked fields, in reporting order
const NUMERIC_FIELDS: [&str; 3] = ["price", "quantity", "rating"];

/// Names of the mandatory fields absent from `input`
pub fn missing_mandatory_fields(input: &ProductInput) -> Vec<&'static str> {
    let present = [
        input.code.is_some(),
        input.name.is_some(),
        input.price.is_some(),
        input.category.is_some(),
    ];

    MANDATORY_FIELDS
        .into_iter()
        .zip(present)
        .filter_map(|(field, present)| (!present).then_some(field))
        .collect()
}

/// `price >= 0`, `quantity >= 0`, `0 <= rating <= 5`, for present fields only
pub fn check_numeric_ranges(input: &ProductInput) -> ProductResult<()> {
    let Err(errors) = input.validate() else {
        return Ok(());
    };

    let field_errors = errors.field_errors();
    let violations: Vec<String> = NUMERIC_FIELDS
        .iter()
        .filter_map(|field| field_errors.get(*field))
        .flat_map(|errors| errors.iter())
        .map(|error| {
            error
                .message
                .as_ref()
                .map(|message| message.to_string())
                .unwrap_or_else(|| error.code.to_string())
        })
        .collect();

    if violations.is_empty() {
        Ok(())
    } else {
        Err(ProductError::ConstraintViolations(violations))
    }
}
