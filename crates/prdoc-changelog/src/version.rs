use prdoc_core::model::Bump;
use semver::Version;

/// Compute the version that follows `current` under `bump`.
///
/// Pre-1.0 crates shift the severity one position right, the way Cargo's
/// compatibility rules treat them:
/// - `>= 1.0.0`: major `x+1.0.0`, minor `x.y+1.0`, patch `x.y.z+1`
/// - `0.y.z` (y > 0): major `0.y+1.0`, minor and patch `0.y.z+1`
/// - `0.0.z`: every bump is `0.0.z+1`
///
/// Pre-release and build metadata are dropped. Returns `None` when the
/// component being incremented is already `u64::MAX`.
pub fn next_version(current: &Version, bump: Bump) -> Option<Version> {
    let (major, minor, patch) = (current.major, current.minor, current.patch);

    let next = match (major, minor, bump) {
        (0, 0, _) => Version::new(0, 0, patch.checked_add(1)?),
        (0, _, Bump::Major) => Version::new(0, minor.checked_add(1)?, 0),
        (0, _, Bump::Minor | Bump::Patch) => Version::new(0, minor, patch.checked_add(1)?),
        (_, _, Bump::Major) => Version::new(major.checked_add(1)?, 0, 0),
        (_, _, Bump::Minor) => Version::new(major, minor.checked_add(1)?, 0),
        (_, _, Bump::Patch) => Version::new(major, minor, patch.checked_add(1)?),
    };
    Some(next)
}
