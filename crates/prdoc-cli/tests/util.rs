use std::path::{Path, PathBuf};

#[allow(dead_code)]
pub fn samples_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..")
        .join("samples")
        .join("prdoc")
}

#[allow(dead_code)]
pub fn sample(name: &str) -> PathBuf {
    samples_dir().join(name)
}

#[allow(dead_code)]
pub fn fixture(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("prdoc-io")
        .join("tests")
        .join("fixtures")
        .join(name)
}
