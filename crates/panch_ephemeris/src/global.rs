//! Process-wide ephemeris backend selection.
//!
//! Mirrors the single-init, write-once singleton used throughout this
//! engine: the backend is selected once per process, the first time
//! [`init`] is called (or lazily, the first time any query function is
//! used, via [`ensure_initialized`]), and never mutated afterward.

use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use jpl_kernel::SpkKernel;

use crate::analytic_backend::AnalyticBackend;
use crate::backend::EphemerisBackend;
use crate::error::EphemerisError;
use crate::kernel_backend::KernelBackend;

static BACKEND: OnceLock<Box<dyn EphemerisBackend>> = OnceLock::new();

/// Ordered list of candidate kernel file paths, in priority order:
/// the `SWISS_EPHE_PATH` environment override first, then well-known
/// local directories.
fn candidate_kernel_paths() -> Vec<PathBuf> {
    let mut out = Vec::new();
    if let Ok(dir) = std::env::var("SWISS_EPHE_PATH") {
        out.push(PathBuf::from(dir).join("de421.bsp"));
    }
    out.push(PathBuf::from("swisseph/ephe/de421.bsp"));
    out.push(PathBuf::from("vedic-ui/node_modules/swisseph/ephe/de421.bsp"));
    out.push(PathBuf::from("/usr/share/swisseph/de421.bsp"));
    out
}

fn find_kernel_file() -> Option<PathBuf> {
    candidate_kernel_paths().into_iter().find(|p| p.exists())
}

fn build_backend() -> Box<dyn EphemerisBackend> {
    match find_kernel_file().as_deref().map(load_kernel) {
        Some(Ok(kernel)) => Box::new(KernelBackend::new(kernel)),
        Some(Err(_)) | None => Box::new(AnalyticBackend),
    }
}

fn load_kernel(path: &Path) -> Result<SpkKernel, EphemerisError> {
    SpkKernel::load(path).map_err(|e| EphemerisError::Init(e.to_string()))
}

/// Idempotent, thread-safe process-wide initialization.
///
/// Selects a kernel-backed ephemeris if a DE421 SPK file can be found via
/// [`candidate_kernel_paths`]; otherwise falls back to the built-in
/// low-precision analytic ephemeris, which never fails to construct.
/// Calling this more than once returns [`EphemerisError::AlreadyInitialized`];
/// callers that don't care about explicit initialization can instead rely
/// on [`ensure_initialized`], which every query function calls internally.
pub fn init() -> Result<(), EphemerisError> {
    BACKEND
        .set(build_backend())
        .map_err(|_| EphemerisError::AlreadyInitialized)
}

/// Initialize on first use if `init()` was never called explicitly.
pub(crate) fn ensure_initialized() -> &'static dyn EphemerisBackend {
    BACKEND.get_or_init(build_backend).as_ref()
}

/// `true` once a backend has been selected (explicitly or lazily).
pub fn is_initialized() -> bool {
    BACKEND.get().is_some()
}

/// The name of the backend currently in use (`"kernel"` or `"analytic"`),
/// initializing lazily if needed.
pub fn active_backend_name() -> &'static str {
    ensure_initialized().name()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ensure_initialized_never_panics() {
        let name = ensure_initialized().name();
        assert!(name == "kernel" || name == "analytic");
    }

    #[test]
    fn candidate_paths_nonempty() {
        assert!(!candidate_kernel_paths().is_empty());
    }
}
