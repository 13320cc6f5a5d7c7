use crate::config::AreaConfig;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use tempfile::TempDir;
use tracing_subscriber::fmt::MakeWriter;

/// An area matching every neighbor and `eth` interfaces, with no policy.
pub(crate) fn sample_area(area_id: &str) -> AreaConfig {
    AreaConfig {
        area_id: area_id.to_string(),
        neighbor_regexes: vec![".*".to_string()],
        interface_regexes: vec!["eth.*".to_string()],
        policy: None,
        enable_adj_labels: false,
    }
}

/// Write `content` to `name` inside `dir` and return the full path.
pub(crate) fn write_file(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, content)
        .unwrap_or_else(|e| panic!("failed to write {}: {}", path.display(), e));
    path
}

/// Path as an owned `String` for building CLI argument structs.
pub(crate) fn path_arg(path: &Path) -> String {
    path.to_string_lossy().to_string()
}

/// Shared in-memory sink for captured log output.
#[derive(Clone, Default)]
pub(crate) struct LogBuffer(Arc<Mutex<Vec<u8>>>);

impl LogBuffer {
    fn contents(&self) -> String {
        let bytes = self.0.lock().unwrap_or_else(|poison| poison.into_inner());
        String::from_utf8_lossy(&bytes).to_string()
    }
}

impl io::Write for LogBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0
            .lock()
            .unwrap_or_else(|poison| poison.into_inner())
            .extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for LogBuffer {
    type Writer = LogBuffer;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

/// Run `f` with a thread-local subscriber and return the WARN-and-above
/// lines it logged.
pub(crate) fn capture_warnings<F: FnOnce()>(f: F) -> String {
    let buffer = LogBuffer::default();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(buffer.clone())
        .with_max_level(tracing::Level::WARN)
        .with_ansi(false)
        .finish();

    tracing::subscriber::with_default(subscriber, f);
    buffer.contents()
}
