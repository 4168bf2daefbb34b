//! Ordinal version comparison used to gate on Pants capabilities.

use std::cmp::Ordering;

use crate::error::{Error, Result};

/// Compare two dot-separated version strings numerically.
///
/// Unlike `str::cmp`, `"1.10"` sorts after `"1.6"`. Segments are compared as
/// strings until the first one that differs, and only that pair is parsed as
/// integers. When one version is a prefix of the other the longer one is
/// greater, so `"1.2.3"` and `"1.2.3.0"` are *not* equal.
pub fn compare_versions(left: &str, right: &str) -> Result<Ordering> {
    let lhs: Vec<&str> = left.split('.').collect();
    let rhs: Vec<&str> = right.split('.').collect();

    let diverge = lhs
        .iter()
        .zip(rhs.iter())
        .position(|(a, b)| a != b);

    match diverge {
        Some(i) => {
            let a = parse_segment(left, lhs[i])?;
            let b = parse_segment(right, rhs[i])?;
            Ok(a.cmp(&b))
        }
        None => Ok(lhs.len().cmp(&rhs.len())),
    }
}

/// `true` when `version` is at or above `minimum`.
pub fn version_at_least(version: &str, minimum: &str) -> Result<bool> {
    Ok(compare_versions(version, minimum)? != Ordering::Less)
}

fn parse_segment(version: &str, segment: &str) -> Result<u64> {
    segment.parse::<u64>().map_err(|_| Error::VersionParse {
        version: version.to_string(),
        segment: segment.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_equal_versions() {
        for v in ["1", "1.0.5", "10.20.30", "0.0.0.1"] {
            assert_eq!(compare_versions(v, v).unwrap(), Ordering::Equal);
        }
    }

    #[test]
    fn test_numeric_not_lexicographic() {
        assert_eq!(compare_versions("1.10", "1.6").unwrap(), Ordering::Greater);
        assert_eq!(compare_versions("1.6", "1.10").unwrap(), Ordering::Less);
        assert_eq!(compare_versions("1.0.4", "1.0.5").unwrap(), Ordering::Less);
    }

    #[test]
    fn test_prefix_is_shorter() {
        assert_eq!(compare_versions("1.2.3", "1.2.3.4").unwrap(), Ordering::Less);
        // Trailing zero still counts as a longer version
        assert_eq!(compare_versions("1.2.3.0", "1.2.3").unwrap(), Ordering::Greater);
    }

    #[test]
    fn test_leading_zeros_compare_numerically() {
        assert_eq!(compare_versions("1.02", "1.2").unwrap(), Ordering::Equal);
    }

    #[test]
    fn test_antisymmetry() {
        let pairs = [
            ("1.0.5", "1.0.4"),
            ("2", "1.9.9"),
            ("1.2", "1.2.0"),
            ("0.9", "0.10"),
            ("3.1", "3.1"),
        ];
        for (a, b) in pairs {
            let forward = compare_versions(a, b).unwrap();
            let backward = compare_versions(b, a).unwrap();
            assert_eq!(forward, backward.reverse(), "{a} vs {b}");
        }
    }

    #[test]
    fn test_invalid_segment_at_divergence() {
        let err = compare_versions("1.x", "1.2").unwrap_err();
        assert!(matches!(err, Error::VersionParse { ref segment, .. } if segment == "x"));
    }

    #[test]
    fn test_invalid_segment_before_divergence_is_ignored() {
        // Equal segments are never parsed
        assert_eq!(compare_versions("dev.1", "dev.2").unwrap(), Ordering::Less);
    }

    #[test]
    fn test_version_at_least() {
        assert!(version_at_least("1.0.5", "1.0.5").unwrap());
        assert!(version_at_least("1.1", "1.0.5").unwrap());
        assert!(!version_at_least("1.0.4", "1.0.5").unwrap());
    }
}
