//! Configuration options and the ordered manifest handed to the configure engine.
//!
//! Options are carried verbatim. Nothing here validates, reorders or deduplicates;
//! the engine decides what a repeated name means.

use std::fmt;

/// Arch tag of the embedded manifest
pub const ARCH_GCC64_COMPLEX_O: &str = "arch-gcc64-complex-O";

/// Shape of a single option string
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionForm {
    /// `--name`
    Flag,
    /// `--name=value`
    Assignment,
}

/// A single configure directive, e.g. `--with-cc=gcc` or `--download-mpich`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigOption(String);

impl ConfigOption {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn form(&self) -> OptionForm {
        if self.0.contains('=') {
            OptionForm::Assignment
        } else {
            OptionForm::Flag
        }
    }

    /// Name without leading dashes, up to the first `=`
    pub fn name(&self) -> &str {
        let head = match self.0.split_once('=') {
            Some((head, _)) => head,
            None => &self.0,
        };
        head.trim_start_matches('-')
    }

    /// Everything after the first `=`, if any
    pub fn value(&self) -> Option<&str> {
        self.0.split_once('=').map(|(_, value)| value)
    }
}

impl fmt::Display for ConfigOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Ordered, immutable sequence of option strings for one configure run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionManifest {
    options: Vec<String>,
}

impl OptionManifest {
    pub fn new<I, S>(options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            options: options.into_iter().map(Into::into).collect(),
        }
    }

    /// The options exactly as constructed, in order
    pub fn as_slice(&self) -> &[String] {
        &self.options
    }

    pub fn iter(&self) -> impl Iterator<Item = ConfigOption> + '_ {
        self.options.iter().map(|raw| ConfigOption::new(raw.as_str()))
    }

    pub fn len(&self) -> usize {
        self.options.len()
    }

    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }
}

impl fmt::Display for OptionManifest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.options.join(" "))
    }
}

/// 64-bit indices, complex scalars, optimized, with BLAS/LAPACK and MPICH downloaded
pub fn arch_gcc64_complex_o() -> OptionManifest {
    OptionManifest::new([
        "--with-cc=gcc",
        "--with-clanguage=c",
        "--with-64-bit-indices=1",
        "--with-scalar-type=complex",
        "--with-shared-libraries=1",
        "--download-fblaslapack=1",
        "--download-mpich=1",
        "--with-python=1",
        "--with-debugging=0",
        "--PETSC_ARCH=arch-gcc64-complex-O",
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_option_forms() {
        let flag = ConfigOption::new("--with-x");
        assert_eq!(flag.form(), OptionForm::Flag);
        assert_eq!(flag.name(), "with-x");
        assert_eq!(flag.value(), None);

        let assignment = ConfigOption::new("--with-cc=gcc");
        assert_eq!(assignment.form(), OptionForm::Assignment);
        assert_eq!(assignment.name(), "with-cc");
        assert_eq!(assignment.value(), Some("gcc"));
    }

    #[test]
    fn test_value_split_on_first_equals() {
        let option = ConfigOption::new("--CFLAGS=-O3 -DFOO=1");
        assert_eq!(option.name(), "CFLAGS");
        assert_eq!(option.value(), Some("-O3 -DFOO=1"));
    }

    #[test]
    fn test_manifest_keeps_order_and_duplicates() {
        let manifest = OptionManifest::new(["--with-debugging=1", "--with-cc=gcc", "--with-debugging=0"]);
        assert_eq!(
            manifest.as_slice(),
            &["--with-debugging=1", "--with-cc=gcc", "--with-debugging=0"]
        );
        assert_eq!(manifest.len(), 3);
    }

    #[test]
    fn test_arch_manifest_contents() {
        let manifest = arch_gcc64_complex_o();
        assert_eq!(manifest.len(), 10);
        assert_eq!(manifest.as_slice()[0], "--with-cc=gcc");

        let last = manifest.iter().last().unwrap();
        assert_eq!(last.name(), "PETSC_ARCH");
        assert_eq!(last.value(), Some(ARCH_GCC64_COMPLEX_O));

        let scalar = manifest.iter().find(|o| o.name() == "with-scalar-type").unwrap();
        assert_eq!(scalar.value(), Some("complex"));
        assert!(manifest.iter().all(|o| o.form() == OptionForm::Assignment));
    }

    #[test]
    fn test_manifest_display() {
        let manifest = OptionManifest::new(["--a=1", "--b"]);
        assert_eq!(manifest.to_string(), "--a=1 --b");
        assert!(OptionManifest::new(Vec::<String>::new()).is_empty());
    }
}
