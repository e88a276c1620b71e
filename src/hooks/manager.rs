// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Hook manager for installing and removing the commit-msg hook.

use crate::config::HooksConfig;
use crate::error::{GateError, HookError, Result};
use crate::git;
use std::fs;
use std::path::{Path, PathBuf};

use super::templates::{HookTemplate, HOOK_FILENAME, HOOK_MARKER};

/// State of the commit-msg hook in a repository.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HookStatus {
    /// No commit-msg hook exists.
    Missing,
    /// A commit-msg hook generated by commitgate is installed.
    Installed,
    /// Some other tool's commit-msg hook is installed.
    Foreign,
}

/// Manager for the commit-msg hook.
pub struct HookManager {
    hooks_dir: PathBuf,
}

impl HookManager {
    /// Create a hook manager for the repository containing the current directory.
    pub fn new() -> Result<Self> {
        let repo = git::open_repo()?;
        Self::with_hooks_dir(repo.git_dir().join("hooks"))
    }

    /// Create a hook manager for a specific hooks directory.
    pub fn with_hooks_dir(hooks_dir: PathBuf) -> Result<Self> {
        if !hooks_dir.exists() {
            fs::create_dir_all(&hooks_dir).map_err(|e| {
                GateError::Hook(HookError::InstallFailed {
                    hook: HOOK_FILENAME.to_string(),
                    message: format!("Failed to create hooks directory: {}", e),
                })
            })?;
        }

        Ok(Self { hooks_dir })
    }

    fn hook_path(&self) -> PathBuf {
        self.hooks_dir.join(HOOK_FILENAME)
    }

    fn backup_path(&self) -> PathBuf {
        self.hooks_dir.join(format!("{}.backup", HOOK_FILENAME))
    }

    /// Install the commit-msg hook.
    ///
    /// A foreign hook is refused unless `force` is set, in which case it is
    /// moved aside to `commit-msg.backup`.
    pub fn install(&self, settings: &HooksConfig, force: bool) -> Result<()> {
        let hook_path = self.hook_path();

        match self.status()? {
            HookStatus::Foreign if !force => {
                return Err(GateError::Hook(HookError::AlreadyExists {
                    hook: HOOK_FILENAME.to_string(),
                }));
            }
            HookStatus::Foreign => {
                tracing::debug!("Backing up existing hook at {:?}", hook_path);
                fs::rename(&hook_path, self.backup_path()).map_err(|e| {
                    GateError::Hook(HookError::InstallFailed {
                        hook: HOOK_FILENAME.to_string(),
                        message: format!("Failed to backup existing hook: {}", e),
                    })
                })?;
            }
            HookStatus::Installed | HookStatus::Missing => {}
        }

        let script = HookTemplate::new(settings).generate();
        fs::write(&hook_path, &script).map_err(|e| {
            GateError::Hook(HookError::InstallFailed {
                hook: HOOK_FILENAME.to_string(),
                message: format!("Failed to write hook: {}", e),
            })
        })?;

        make_executable(&hook_path)?;
        tracing::debug!("Installed hook at {:?}", hook_path);

        Ok(())
    }

    /// Remove the commit-msg hook and restore any backup.
    pub fn uninstall(&self) -> Result<()> {
        let hook_path = self.hook_path();

        match self.status()? {
            HookStatus::Missing => return Ok(()),
            HookStatus::Foreign => {
                return Err(GateError::Hook(HookError::RemoveFailed {
                    hook: HOOK_FILENAME.to_string(),
                    message: "Hook was not installed by commitgate".to_string(),
                }));
            }
            HookStatus::Installed => {}
        }

        fs::remove_file(&hook_path).map_err(|e| {
            GateError::Hook(HookError::RemoveFailed {
                hook: HOOK_FILENAME.to_string(),
                message: format!("Failed to remove hook: {}", e),
            })
        })?;

        let backup_path = self.backup_path();
        if backup_path.exists() {
            fs::rename(&backup_path, &hook_path).map_err(|e| {
                GateError::Hook(HookError::RemoveFailed {
                    hook: HOOK_FILENAME.to_string(),
                    message: format!("Failed to restore backup: {}", e),
                })
            })?;
        }

        Ok(())
    }

    /// Get the status of the commit-msg hook.
    pub fn status(&self) -> Result<HookStatus> {
        let hook_path = self.hook_path();
        if !hook_path.exists() {
            return Ok(HookStatus::Missing);
        }

        if is_commitgate_hook(&hook_path)? {
            Ok(HookStatus::Installed)
        } else {
            Ok(HookStatus::Foreign)
        }
    }
}

/// Check if a hook was installed by commitgate.
fn is_commitgate_hook(path: &Path) -> Result<bool> {
    let content = fs::read_to_string(path).map_err(|e| {
        GateError::Hook(HookError::NotFound {
            hook: format!("{} ({})", path.display(), e),
        })
    })?;

    Ok(content.contains(HOOK_MARKER))
}

#[cfg(unix)]
fn make_executable(path: &Path) -> Result<()> {
    use std::os::unix::fs::PermissionsExt;

    let mut perms = fs::metadata(path)
        .map_err(|e| {
            GateError::Hook(HookError::InstallFailed {
                hook: HOOK_FILENAME.to_string(),
                message: format!("Failed to get permissions: {}", e),
            })
        })?
        .permissions();

    perms.set_mode(0o755);
    fs::set_permissions(path, perms).map_err(|e| {
        GateError::Hook(HookError::InstallFailed {
            hook: HOOK_FILENAME.to_string(),
            message: format!("Failed to set permissions: {}", e),
        })
    })
}

#[cfg(not(unix))]
fn make_executable(_path: &Path) -> Result<()> {
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn manager() -> (TempDir, HookManager) {
        let dir = TempDir::new().unwrap();
        let manager = HookManager::with_hooks_dir(dir.path().join("hooks")).unwrap();
        (dir, manager)
    }

    #[test]
    fn test_install_and_uninstall() {
        let (_dir, manager) = manager();
        assert_eq!(manager.status().unwrap(), HookStatus::Missing);

        manager.install(&HooksConfig::default(), false).unwrap();
        assert_eq!(manager.status().unwrap(), HookStatus::Installed);

        // Reinstalling our own hook needs no force.
        manager.install(&HooksConfig::default(), false).unwrap();

        manager.uninstall().unwrap();
        assert_eq!(manager.status().unwrap(), HookStatus::Missing);
    }

    #[cfg(unix)]
    #[test]
    fn test_installed_hook_is_executable() {
        use std::os::unix::fs::PermissionsExt;

        let (_dir, manager) = manager();
        manager.install(&HooksConfig::default(), false).unwrap();
        let mode = fs::metadata(manager.hook_path()).unwrap().permissions().mode();
        assert_eq!(mode & 0o111, 0o111);
    }

    #[test]
    fn test_foreign_hook_requires_force_and_is_restored() {
        let (_dir, manager) = manager();
        fs::write(manager.hook_path(), "#!/bin/sh\necho other\n").unwrap();
        assert_eq!(manager.status().unwrap(), HookStatus::Foreign);

        assert!(matches!(
            manager.install(&HooksConfig::default(), false),
            Err(GateError::Hook(HookError::AlreadyExists { .. }))
        ));
        assert!(manager.uninstall().is_err());

        manager.install(&HooksConfig::default(), true).unwrap();
        assert_eq!(manager.status().unwrap(), HookStatus::Installed);
        assert!(manager.backup_path().exists());

        manager.uninstall().unwrap();
        let restored = fs::read_to_string(manager.hook_path()).unwrap();
        assert!(restored.contains("echo other"));
    }
}
