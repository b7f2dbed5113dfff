use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc, Mutex, MutexGuard,
};

/// Handle to the progress of a generation, can be cloned and sent to other threads.
///
/// Parallel generation gets one child handle per maze from [`ProgressHandle::start_batch`]. While
/// the batch runs, [`ProgressHandle::progress`] includes the children, [`ProgressHandle::end_batch`]
/// folds them into this handle and drops them. Children share the stop flag with their parent.
#[derive(Clone, Debug)]
pub struct ProgressHandle {
    progress: Arc<Mutex<Progress>>,
    batch: Arc<Mutex<Vec<ProgressHandle>>>,
    stopped: Arc<AtomicBool>,
}

impl ProgressHandle {
    #[allow(clippy::new_without_default)]
    pub fn new() -> Self {
        Self {
            progress: Arc::default(),
            batch: Arc::default(),
            stopped: Arc::default(),
        }
    }

    /// Creates `count` child handles, replacing the previous batch and resetting own progress.
    pub fn start_batch(&self, count: usize) -> Vec<ProgressHandle> {
        let children: Vec<_> = (0..count)
            .map(|_| Self {
                stopped: self.stopped.clone(),
                ..Self::new()
            })
            .collect();

        *self.lock() = Progress::default();
        *self.batch.lock().unwrap() = children.clone();
        children
    }

    /// Adds the progress of the running batch to this handle and forgets the children.
    pub fn end_batch(&self) {
        let children = std::mem::take(&mut *self.batch.lock().unwrap());
        let mut own = self.lock();
        *own = children
            .iter()
            .fold(*own, |total, child| total.combine(&child.progress()));
    }

    pub fn lock(&self) -> MutexGuard<'_, Progress> {
        self.progress.lock().unwrap()
    }

    /// Progress of this handle combined with the running batch, if any.
    pub fn progress(&self) -> Progress {
        let own = *self.lock();
        self.batch
            .lock()
            .unwrap()
            .iter()
            .fold(own, |total, child| total.combine(&child.progress()))
    }

    pub fn stop(&self) {
        self.stopped.store(true, Ordering::Relaxed);
    }

    pub fn is_stopped(&self) -> bool {
        self.stopped.load(Ordering::Relaxed)
    }
}

/// Number of cells already in the maze, out of all of them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Progress {
    pub done: usize,
    pub from: usize,
    pub is_done: bool,
}

impl Progress {
    pub fn finish(&mut self) {
        self.done = self.from;
        self.is_done = true;
    }

    pub fn combine(&self, other: &Self) -> Self {
        Self {
            done: self.done + other.done,
            from: self.from + other.from,
            is_done: self.is_done && other.is_done,
        }
    }
}
