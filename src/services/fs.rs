//! File loading and saving on worker threads
//!
//! The whole file is read into memory once and written back in one piece.
//! Results are reported through the [`AsyncBridge`] so the main loop never
//! blocks on the filesystem.

use super::async_bridge::{AsyncBridge, AsyncMessage};
use std::io;
use std::path::{Component, Path, PathBuf};
use std::thread;

/// Resolve `path` against `cwd` when relative, and drop `.` and `..`
/// components without touching the filesystem
pub fn resolve_path(path: &Path, cwd: &Path) -> PathBuf {
    let joined = if path.is_absolute() {
        path.to_path_buf()
    } else {
        cwd.join(path)
    };

    let mut components = Vec::new();
    for component in joined.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                if let Some(Component::Normal(_)) = components.last() {
                    components.pop();
                } else {
                    components.push(component);
                }
            }
            _ => components.push(component),
        }
    }

    if components.is_empty() {
        PathBuf::from(".")
    } else {
        components.iter().collect()
    }
}

pub fn read_file(path: &Path) -> io::Result<Vec<u8>> {
    std::fs::read(path)
}

/// Write `bytes` to `path`, creating or truncating it; returns the byte count
pub fn write_file(path: &Path, bytes: &[u8]) -> io::Result<usize> {
    std::fs::write(path, bytes)?;
    Ok(bytes.len())
}

/// Read `path` on a worker thread and report [`AsyncMessage::FileLoaded`]
pub fn spawn_load(bridge: &AsyncBridge, path: PathBuf) -> thread::JoinHandle<()> {
    let sender = bridge.sender();
    thread::spawn(move || {
        tracing::debug!("Loading {}", path.display());
        let result = read_file(&path);
        if sender
            .send(AsyncMessage::FileLoaded { path, result })
            .is_err()
        {
            tracing::warn!("Main loop gone before load finished");
        }
    })
}

/// Write `bytes` to `path` on a worker thread and report
/// [`AsyncMessage::SaveCompleted`] tagged with `revision`
pub fn spawn_save(
    bridge: &AsyncBridge,
    path: PathBuf,
    bytes: Vec<u8>,
    revision: u64,
) -> thread::JoinHandle<()> {
    let sender = bridge.sender();
    thread::spawn(move || {
        tracing::debug!("Saving {} bytes to {}", bytes.len(), path.display());
        let result = write_file(&path, &bytes);
        if sender
            .send(AsyncMessage::SaveCompleted {
                path,
                revision,
                result,
            })
            .is_err()
        {
            tracing::warn!("Main loop gone before save finished");
        }
    })
}
