//! Per-axis toroidal wraparound.

/// Map `value` into `[0, extent)` by a single add or subtract.
///
/// Neighbour offsets are `-1`, `0` or `+1`, so a raw coordinate is never
/// more than one extent outside the valid range and a full modulo is not
/// needed. Callers must uphold `-extent <= value < 2 * extent`.
///
/// # Examples
///
/// ```
/// use tessera_space::wrap_axis;
///
/// assert_eq!(wrap_axis(-1, 16), 15);
/// assert_eq!(wrap_axis(16, 16), 0);
/// assert_eq!(wrap_axis(7, 16), 7);
/// ```
#[inline]
pub fn wrap_axis(value: i32, extent: u32) -> i32 {
    let n = extent as i32;
    debug_assert!(
        (value as i64) >= -(n as i64) && (value as i64) < 2 * (n as i64),
        "wrap_axis({value}, {extent}) is more than one extent out of range"
    );
    if value < 0 {
        value + n
    } else if value >= n {
        value - n
    } else {
        value
    }
}

/// Map any `value` into `[0, extent)`.
///
/// Used for coordinates supplied from outside the stepping loop, which may
/// lie any number of extents out of range.
///
/// ```
/// use tessera_space::wrap_euclid;
///
/// assert_eq!(wrap_euclid(12, 5), 2);
/// assert_eq!(wrap_euclid(-6, 5), 4);
/// assert_eq!(wrap_euclid(i32::MIN, 7), 5);
/// ```
#[inline]
pub fn wrap_euclid(value: i32, extent: u32) -> i32 {
    (value as i64).rem_euclid(extent as i64) as i32
}

/// Validate an axis extent for use as a torus dimension.
pub(crate) fn check_extent(
    name: &'static str,
    value: u32,
    max: u32,
) -> Result<(), crate::SpaceError> {
    if value == 0 {
        return Err(crate::SpaceError::EmptySpace { axis: name });
    }
    if value > max {
        return Err(crate::SpaceError::DimensionTooLarge { name, value, max });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn single_cell_axis_wraps_to_zero() {
        assert_eq!(wrap_axis(-1, 1), 0);
        assert_eq!(wrap_axis(1, 1), 0);
        assert_eq!(wrap_axis(0, 1), 0);
    }

    #[test]
    fn euclid_handles_far_coordinates() {
        assert_eq!(wrap_euclid(12, 5), 2);
        assert_eq!(wrap_euclid(-6, 5), 4);
        assert_eq!(wrap_euclid(-5, 5), 0);
        assert_eq!(wrap_euclid(i32::MAX, 1), 0);
        assert_eq!(wrap_euclid(i32::MIN, 7), 5);
    }

    proptest! {
        #[test]
        fn result_in_range(extent in 1u32..512, raw in 0i64..1024) {
            let e = extent as i64;
            // Fold raw into the admissible window [-e, 2e).
            let value = (raw % (3 * e)) - e;
            let w = wrap_axis(value as i32, extent);
            prop_assert!(w >= 0 && (w as u32) < extent);
        }

        #[test]
        fn shift_by_extent_is_identity(extent in 1u32..512, raw in 0i64..1024) {
            let e = extent as i64;
            let c = ((raw % (2 * e)) - e) as i32;
            prop_assert_eq!(wrap_axis(c + extent as i32, extent), wrap_axis(c, extent));
        }

        #[test]
        fn euclid_agrees_with_single_step(extent in 1u32..512, raw in 0i64..1024) {
            let e = extent as i64;
            let value = ((raw % (3 * e)) - e) as i32;
            prop_assert_eq!(wrap_euclid(value, extent), wrap_axis(value, extent));
        }

        #[test]
        fn euclid_in_range(extent in 1u32..=i32::MAX as u32, value in any::<i32>()) {
            let w = wrap_euclid(value, extent);
            prop_assert!(w >= 0 && (w as u32) < extent);
        }
    }
}
