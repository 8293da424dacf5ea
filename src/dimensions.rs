use crate::error::DimensionError;

const SEPARATORS: [char; 3] = ['x', 'X', '*'];

/// Reads a board size written as `WIDTHxHEIGHT`, `WIDTHXHEIGHT` or
/// `WIDTH*HEIGHT`, splitting on the first separator found.
///
/// Sizes of 0 or 1 are accepted here; [`Grid::new`](crate::Grid::new)
/// rejects them.
pub fn parse_dimensions(input: &str) -> Result<(usize, usize), DimensionError> {
    if input.is_empty() {
        return Err(DimensionError::Empty);
    }

    let (width, height) = input
        .split_once(SEPARATORS)
        .ok_or_else(|| DimensionError::NoSeparator {
            input: input.to_string(),
        })?;

    let width = parse_side(width).ok_or_else(|| DimensionError::InvalidWidth {
        width: width.to_string(),
        input: input.to_string(),
    })?;
    let height = parse_side(height).ok_or_else(|| DimensionError::InvalidHeight {
        height: height.to_string(),
        input: input.to_string(),
    })?;

    Ok((width, height))
}

fn parse_side(text: &str) -> Option<usize> {
    if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    text.parse().ok()
}
