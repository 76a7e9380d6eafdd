use crate::error::{InstallError, Result};
use crate::platform::PlatformKey;
use std::fs;
use std::path::{Path, PathBuf};

pub const PRIMARY_EXECUTABLE: &str = "protolint";
pub const PLUGIN_EXECUTABLE: &str = "protoc-gen-protolint";

/// The archive entries an install needs, in extraction order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractionManifest {
    pub primary: String,
    pub plugin: String,
}

impl ExtractionManifest {
    pub fn for_platform(platform: &PlatformKey) -> Self {
        let suffix = platform.exe_suffix();
        Self {
            primary: format!("{PRIMARY_EXECUTABLE}{suffix}"),
            plugin: format!("{PLUGIN_EXECUTABLE}{suffix}"),
        }
    }

    pub fn entries(&self) -> [&str; 2] {
        [self.primary.as_str(), self.plugin.as_str()]
    }
}

/// Destination paths of a completed extraction
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstalledBinaries {
    pub primary: PathBuf,
    pub plugin: PathBuf,
}

/// Where an install run ended up. Successful only when both paths are present.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InstallOutcome {
    pub primary: Option<PathBuf>,
    pub plugin: Option<PathBuf>,
}

impl InstallOutcome {
    pub fn failed() -> Self {
        Self::default()
    }

    pub fn is_success(&self) -> bool {
        let present = |p: &Option<PathBuf>| p.as_ref().is_some_and(|p| !p.as_os_str().is_empty());
        present(&self.primary) && present(&self.plugin)
    }
}

impl From<InstalledBinaries> for InstallOutcome {
    fn from(binaries: InstalledBinaries) -> Self {
        Self {
            primary: Some(binaries.primary),
            plugin: Some(binaries.plugin),
        }
    }
}

pub struct Extractor;

impl Extractor {
    /// Extract the manifest entries on the blocking pool.
    ///
    /// Failures are logged and produce an outcome with both paths absent.
    pub async fn extract(archive: &Path, manifest: &ExtractionManifest, dest: &Path) -> InstallOutcome {
        let (archive_path, manifest, dest_dir) =
            (archive.to_path_buf(), manifest.clone(), dest.to_path_buf());

        let result = tokio::task::spawn_blocking(move || {
            extract_entries(&archive_path, &manifest, &dest_dir)
        })
        .await
        .unwrap_or_else(|e| {
            Err(InstallError::ArchiveExtraction {
                file: archive.display().to_string(),
                reason: format!("extraction task failed: {e}"),
            })
        });

        match result {
            Ok(binaries) => binaries.into(),
            Err(e) => {
                tracing::error!("Failed to extract files from downloaded tar file: {}", e);
                InstallOutcome::failed()
            }
        }
    }
}

/// Extract exactly the manifest entries of a tar.gz archive into `dest_dir`.
///
/// Other entries are skipped. Existing files are replaced.
pub fn extract_entries(
    archive_path: &Path,
    manifest: &ExtractionManifest,
    dest_dir: &Path,
) -> Result<InstalledBinaries> {
    let archive_error = |e: std::io::Error| InstallError::ArchiveExtraction {
        file: archive_path.display().to_string(),
        reason: e.to_string(),
    };

    fs::create_dir_all(dest_dir)?;

    let file = fs::File::open(archive_path)?;
    let gz_decoder = flate2::read::GzDecoder::new(file);
    let mut archive = tar::Archive::new(gz_decoder);
    archive.set_overwrite(true);

    let wanted = manifest.entries();
    let mut found = [false; 2];

    for entry in archive.entries().map_err(archive_error)? {
        let mut entry = entry.map_err(archive_error)?;
        let entry_path = entry.path().map_err(archive_error)?.into_owned();
        let name = entry_path.strip_prefix("./").unwrap_or(&entry_path);

        let Some(idx) = wanted.iter().position(|w| name == Path::new(w)) else {
            continue;
        };
        if !entry.header().entry_type().is_file() {
            return Err(InstallError::ArchiveExtraction {
                file: archive_path.display().to_string(),
                reason: format!(
                    "{} is a {:?} entry, not a regular file",
                    wanted[idx],
                    entry.header().entry_type()
                ),
            });
        }

        let dest_path = dest_dir.join(wanted[idx]);
        tracing::debug!("Extracting {} to {}", wanted[idx], dest_path.display());
        entry.unpack(&dest_path).map_err(archive_error)?;
        make_executable(&dest_path)?;
        found[idx] = true;
    }

    if let Some(idx) = found.iter().position(|f| !f) {
        return Err(InstallError::EntryNotFound {
            name: wanted[idx].to_string(),
            archive: archive_path.display().to_string(),
        });
    }

    Ok(InstalledBinaries {
        primary: dest_dir.join(&manifest.primary),
        plugin: dest_dir.join(&manifest.plugin),
    })
}

/// Make a file executable (Unix only)
#[cfg(unix)]
pub fn make_executable(path: &Path) -> Result<()> {
    use std::os::unix::fs::PermissionsExt;
    let mut permissions = fs::metadata(path)?.permissions();
    permissions.set_mode(permissions.mode() | 0o111);
    fs::set_permissions(path, permissions)?;
    Ok(())
}

#[cfg(windows)]
pub fn make_executable(_path: &Path) -> Result<()> {
    // No-op on Windows
    Ok(())
}
