use std::thread;

use log::{error, warn};
use tokio::sync::mpsc::{self, UnboundedSender};

use tremor_input::MeasurementRecord;

use crate::MeasurementStore;

/// Hands records to the writer thread without ever blocking the caller.
#[derive(Debug, Clone)]
pub struct RecorderHandle {
    sender: UnboundedSender<MeasurementRecord>,
}

impl RecorderHandle {
    /// A record that cannot be handed over is logged and dropped. Losing a
    /// measurement is acceptable, stalling the command path is not.
    pub fn submit(&self, record: MeasurementRecord) {
        if let Err(rejected) = self.sender.send(record) {
            warn!(
                "Recorder worker is gone, measurement {} dropped",
                rejected.0.sequence
            );
        }
    }
}

/// Spawn the writer thread draining submitted records into `store`.
///
/// File appends are blocking I/O, so they run on their own thread. The
/// worker exits once every handle is dropped; join the returned handle for
/// an orderly teardown, or drop it.
pub fn spawn_writer(store: MeasurementStore) -> (RecorderHandle, thread::JoinHandle<()>) {
    let (sender, mut receiver) = mpsc::unbounded_channel();

    let worker = thread::spawn(move || {
        while let Some(record) = receiver.blocking_recv() {
            if let Err(e) = store.record(&record) {
                error!("Measurement {} dropped: {e}", record.sequence);
            }
        }
    });

    (RecorderHandle { sender }, worker)
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    #[test]
    fn records_are_written_in_the_background() {
        let dir = tempfile::tempdir().unwrap();
        let (handle, worker) = spawn_writer(MeasurementStore::new(dir.path().join("touch")));

        handle.submit(MeasurementRecord::new(0, (0.0, 0.0).into(), (10.0, 0.0).into()));
        handle.submit(MeasurementRecord::new(1, (0.0, 0.0).into(), (20.0, 0.0).into()));

        drop(handle);
        worker.join().unwrap();

        let entries = fs::read_dir(dir.path().join("touch")).unwrap().count();
        assert_eq!(entries, 2);
    }

    #[test]
    fn storage_failure_does_not_kill_the_worker() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("touch");
        fs::write(&path, b"occupied").unwrap();

        let (handle, worker) = spawn_writer(MeasurementStore::new(&path));
        handle.submit(MeasurementRecord::new(0, (0.0, 0.0).into(), (1.0, 1.0).into()));

        drop(handle);
        // The worker shuts down cleanly even though every write failed.
        worker.join().unwrap();
    }
}
