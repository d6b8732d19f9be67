use std::{
    future::Future,
    io,
    sync::{Arc, Mutex},
};

use tracing_subscriber::fmt::MakeWriter;

/// An in-memory sink for log output.
#[derive(Debug, Clone, Default)]
struct LogBuffer {
    bytes: Arc<Mutex<Vec<u8>>>,
}

impl io::Write for LogBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.bytes.lock().unwrap().extend_from_slice(buf);
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

/// Run `future` with a JSON log subscriber scoped to the current thread and
/// return every log entry it emitted.
///
/// Tests must run on a current thread runtime, which is the default for
/// `#[tokio::test]`.
pub(crate) async fn capture_logs<F>(future: F) -> Vec<serde_json::Value>
where
    F: Future<Output = ()>,
{
    let buffer = LogBuffer::default();
    let subscriber = tracing_subscriber::fmt()
        .json()
        .with_max_level(tracing::Level::DEBUG)
        .with_writer(buffer.clone())
        .finish();

    {
        let _guard = tracing::subscriber::set_default(subscriber);
        future.await;
    }

    let bytes = buffer.bytes.lock().unwrap();
    let entries = String::from_utf8_lossy(&bytes)
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(|line| serde_json::from_str(line).expect("log line should be JSON"))
        .collect();

    entries
}
