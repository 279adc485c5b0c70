//! Validation and inversion of the small fixed-size arrays that make up a
//! daily key.
//!
//! Every helper copies the caller's slice into a fresh array only after the
//! whole slice has been checked, so a failed validation never yields a
//! partially filled value.

use crate::error::ConfigurationError;

/// Copies `values` into an array of exactly `N` elements.
///
/// # Errors
/// Returns [`ConfigurationError::InvalidLength`] if `values.len() != N`.
pub fn fixed_length<const N: usize>(
    field: &'static str,
    values: &[u8],
) -> Result<[u8; N], ConfigurationError> {
    <[u8; N]>::try_from(values).map_err(|_| ConfigurationError::InvalidLength {
        field,
        expected: N,
        actual: values.len(),
    })
}

/// Validates that every element of `values` is below `bound` and copies it
/// into an array of `N` elements.
///
/// # Errors
/// Returns [`ConfigurationError::InvalidLength`] on a size mismatch and
/// [`ConfigurationError::ValueOutOfRange`] for the first offending element.
pub fn in_range<const N: usize>(
    field: &'static str,
    values: &[u8],
    bound: usize,
) -> Result<[u8; N], ConfigurationError> {
    let array = fixed_length::<N>(field, values)?;
    if let Some((index, &value)) = array
        .iter()
        .enumerate()
        .find(|&(_, &v)| v as usize >= bound)
    {
        return Err(ConfigurationError::ValueOutOfRange {
            field,
            index,
            value,
            bound,
        });
    }
    Ok(array)
}

/// Validates that `values` is a permutation of `0..N`.
///
/// # Errors
/// Returns [`ConfigurationError::InvalidLength`],
/// [`ConfigurationError::ValueOutOfRange`] or
/// [`ConfigurationError::NotAPermutation`] (a repeated value).
pub fn permutation<const N: usize>(
    field: &'static str,
    values: &[u8],
) -> Result<[u8; N], ConfigurationError> {
    let array = in_range::<N>(field, values, N)?;
    let mut seen = [false; N];
    for &v in &array {
        if std::mem::replace(&mut seen[v as usize], true) {
            return Err(ConfigurationError::NotAPermutation { field });
        }
    }
    Ok(array)
}

/// Returns the inverse of a permutation that has already been validated.
pub fn invert<const N: usize>(perm: &[u8; N]) -> [u8; N] {
    let mut inverse = [0u8; N];
    for (x, &y) in perm.iter().enumerate() {
        inverse[y as usize] = x as u8;
    }
    inverse
}

/// The identity permutation `0, 1, .., N-1`.
pub fn identity<const N: usize>() -> [u8; N] {
    let mut id = [0u8; N];
    for (i, slot) in id.iter_mut().enumerate() {
        *slot = i as u8;
    }
    id
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_length_rejects_short_input() {
        let err = fixed_length::<10>("rotor offsets", &[0; 9]).unwrap_err();
        assert_eq!(
            err,
            ConfigurationError::InvalidLength {
                field: "rotor offsets",
                expected: 10,
                actual: 9,
            }
        );
    }

    #[test]
    fn test_in_range_reports_first_offender() {
        let err = in_range::<4>("ring offsets", &[0, 30, 31, 2], 30).unwrap_err();
        assert_eq!(
            err,
            ConfigurationError::ValueOutOfRange {
                field: "ring offsets",
                index: 1,
                value: 30,
                bound: 30,
            }
        );
    }

    #[test]
    fn test_permutation_accepts_reordering() {
        let p: [u8; 10] = permutation("rotor order", &[9, 0, 8, 1, 7, 2, 6, 3, 5, 4]).unwrap();
        assert_eq!(p[0], 9);
    }

    #[test]
    fn test_permutation_rejects_duplicate() {
        let err = permutation::<3>("punch card", &[0, 1, 1]).unwrap_err();
        assert_eq!(
            err,
            ConfigurationError::NotAPermutation {
                field: "punch card"
            }
        );
    }

    #[test]
    fn test_invert() {
        let p = [2u8, 0, 3, 1];
        let inv = invert(&p);
        for x in 0..4 {
            assert_eq!(inv[p[x] as usize] as usize, x);
        }
    }

    #[test]
    fn test_identity() {
        let id: [u8; 30] = identity();
        assert_eq!(id[0], 0);
        assert_eq!(id[29], 29);
        assert_eq!(invert(&id), id);
    }
}
