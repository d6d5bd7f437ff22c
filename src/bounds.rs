//! Shared bounds validation for entry positions

use crate::error::{Error, Result};

/// Check that `position` is a valid entry of a matrix with `shape`
///
/// Succeeds iff `position[0] < shape[0]` and `position[1] < shape[1]`.
/// Every one-element constructor calls this before allocating anything, so a
/// failed construction has no observable side effects.
pub fn check_position(shape: [usize; 2], position: [usize; 2]) -> Result<()> {
    if position[0] >= shape[0] || position[1] >= shape[1] {
        return Err(Error::out_of_bounds(shape, position));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_in_bounds() {
        assert!(check_position([3, 3], [0, 0]).is_ok());
        assert!(check_position([3, 3], [2, 2]).is_ok());
        assert!(check_position([1, 1], [0, 0]).is_ok());
        assert!(check_position([1, 5], [0, 4]).is_ok());
    }

    #[test]
    fn test_out_of_bounds() {
        let err = check_position([2, 2], [2, 0]).unwrap_err();
        assert_eq!(
            err,
            Error::OutOfBounds {
                shape: [2, 2],
                position: [2, 0],
            }
        );

        assert!(check_position([2, 2], [0, 2]).is_err());
        assert!(check_position([2, 2], [5, 5]).is_err());
        assert!(check_position([1, 1], [1, 0]).is_err());
    }
}
