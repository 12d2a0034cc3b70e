use crate::error::InputError;

/// Convert a human's 1-based column choice into a 0-based index on a board
/// with `cols` columns.
pub fn parse_column(input: &str, cols: usize) -> Result<usize, InputError> {
    let choice: usize = input
        .trim()
        .parse()
        .map_err(|_| InputError::NotANumber { cols })?;

    if choice == 0 || choice > cols {
        return Err(InputError::OutOfRange { cols });
    }
    Ok(choice - 1)
}
