use std::path::{Path, PathBuf};

use crate::model::ChangeRecord;

/// A parsed record and where it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordSource {
    pub path: PathBuf,
    /// Pull-request number taken from a `pr_<number>.<ext>` file name.
    pub pr: Option<u64>,
    /// Content fingerprint (`sha256:<hex>`).
    pub fingerprint: String,
    pub record: ChangeRecord,
}

impl RecordSource {
    /// Short label for changelogs and plans: `#<pr>` or the file stem.
    pub fn origin(&self) -> String {
        match self.pr {
            Some(n) => format!("#{n}"),
            None => self
                .path
                .file_stem()
                .map(|s| s.to_string_lossy().into_owned())
                .unwrap_or_else(|| self.path.display().to_string()),
        }
    }
}

/// Extract `<number>` from a file named `pr_<number>.<ext>`.
pub fn pr_number_from_path(path: &Path) -> Option<u64> {
    let stem = path.file_stem()?.to_str()?;
    let digits = stem.strip_prefix("pr_")?;
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pr_number_is_read_from_file_name() {
        assert_eq!(pr_number_from_path(Path::new("prdoc/pr_4029.prdoc")), Some(4029));
        assert_eq!(pr_number_from_path(Path::new("pr_7.prdoc")), Some(7));
    }

    #[test]
    fn other_names_have_no_pr_number() {
        assert_eq!(pr_number_from_path(Path::new("prdoc/pr_.prdoc")), None);
        assert_eq!(pr_number_from_path(Path::new("prdoc/pr_12a.prdoc")), None);
        assert_eq!(pr_number_from_path(Path::new("prdoc/pr_+12.prdoc")), None);
        assert_eq!(pr_number_from_path(Path::new("prdoc/notes.prdoc")), None);
    }
}
