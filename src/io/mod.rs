//! Result writing: artifact tracking and structured output files.
//!
//! Every file written during a cycle is recorded in an
//! [`OutputManifest`] so a rejected cycle can be rolled back without
//! leaving partial output in the published location. The NetCDF writers
//! live behind the `netcdf` cargo feature; the manifest and path layout
//! do not.

#[cfg(feature = "netcdf")]
mod netcdf_io;

#[cfg(feature = "netcdf")]
pub use netcdf_io::{write_field_file, write_station_file};

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Error type for output operations.
#[derive(Debug, Error)]
pub enum OutputError {
    /// File I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// NetCDF library error
    #[cfg(feature = "netcdf")]
    #[error("NetCDF error: {0}")]
    NetCDF(#[from] netcdf::Error),

    /// A station record is missing data the file schema requires
    #[error("station '{station}' has no {missing} to write")]
    MissingStationData {
        station: String,
        missing: &'static str,
    },
}

/// Artifacts written during one cycle.
///
/// Paths are recorded as they are written; [`discard`](Self::discard)
/// deletes them all, which is the rollback path the quality gate takes
/// on rejection.
#[derive(Debug, Default)]
pub struct OutputManifest {
    paths: Vec<PathBuf>,
}

impl OutputManifest {
    /// Empty manifest for a new cycle.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an artifact that now exists on disk.
    pub fn record(&mut self, path: impl Into<PathBuf>) {
        self.paths.push(path.into());
    }

    /// Artifacts recorded so far.
    pub fn paths(&self) -> &[PathBuf] {
        &self.paths
    }

    /// Number of recorded artifacts.
    pub fn len(&self) -> usize {
        self.paths.len()
    }

    /// Check whether anything has been written.
    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    /// Delete every recorded artifact. Files already gone are skipped;
    /// the first real deletion failure is returned after attempting the
    /// rest.
    pub fn discard(self) -> Result<(), OutputError> {
        let mut first_err = None;
        for path in &self.paths {
            match std::fs::remove_file(path) {
                Ok(()) => {}
                Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
                Err(e) => {
                    if first_err.is_none() {
                        first_err = Some(e);
                    }
                }
            }
        }
        match first_err {
            None => Ok(()),
            Some(e) => Err(OutputError::Io(e)),
        }
    }
}

/// File name for the cycle's spatial field product.
pub fn field_file_name(base: &Path, date_string: &str) -> PathBuf {
    base.join(format!("CMTB_ww3_Field_{date_string}.nc"))
}

/// File name for one station's product.
pub fn station_file_name(base: &Path, station: &str, date_string: &str) -> PathBuf {
    base.join(format!("CMTB_ww3_{station}_{date_string}.nc"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_manifest_discard_removes_files() {
        let dir = tempfile::tempdir().unwrap();
        let a = dir.path().join("a.nc");
        let b = dir.path().join("b.nc");
        fs::write(&a, b"x").unwrap();
        fs::write(&b, b"y").unwrap();

        let mut manifest = OutputManifest::new();
        manifest.record(&a);
        manifest.record(&b);
        assert_eq!(manifest.len(), 2);

        manifest.discard().unwrap();
        assert!(!a.exists());
        assert!(!b.exists());
    }

    #[test]
    fn test_discard_tolerates_missing_files() {
        let dir = tempfile::tempdir().unwrap();
        let mut manifest = OutputManifest::new();
        manifest.record(dir.path().join("never-written.nc"));
        manifest.discard().unwrap();
    }

    #[test]
    fn test_file_names() {
        let base = Path::new("/data/thredds");
        let f = field_file_name(base, "2018-10-03T000000Z");
        assert!(f.to_string_lossy().ends_with("CMTB_ww3_Field_2018-10-03T000000Z.nc"));
        let s = station_file_name(base, "waverider-26m", "2018-10-03T000000Z");
        assert!(s.to_string_lossy().contains("waverider-26m"));
    }
}
