//! Hand-off of work to the Android UI thread
//!
//! Toasts must be created on the application's main thread. The adapter
//! posts the toast as a task through a [`UiThread`] handle; the host drains
//! the matching [`UiLoop`] from a callback that runs on its main thread.

use std::sync::{Mutex, OnceLock};

use tokio::sync::mpsc;

use crate::application::ports::NotificationError;

/// Unit of work queued for the UI thread
pub type UiTask = Box<dyn FnOnce() + Send + 'static>;

/// Create a connected handle/loop pair
pub fn ui_channel() -> (UiThread, UiLoop) {
    let (sender, receiver) = mpsc::unbounded_channel();
    (UiThread { sender }, UiLoop { receiver })
}

/// Process-wide queue shared by notifiers the host does not wire up itself
static MAIN_QUEUE: OnceLock<(UiThread, Mutex<UiLoop>)> = OnceLock::new();

fn main_queue() -> &'static (UiThread, Mutex<UiLoop>) {
    MAIN_QUEUE.get_or_init(|| {
        let (ui, ui_loop) = ui_channel();
        (ui, Mutex::new(ui_loop))
    })
}

/// Handle onto the process-wide main-thread queue
pub fn main_thread() -> UiThread {
    main_queue().0.clone()
}

/// Run every task queued on the process-wide queue.
///
/// Must be called from the application's main thread, typically from the
/// host's event loop on every iteration. Returns how many tasks ran.
pub fn run_main_thread_tasks() -> usize {
    let mut ui_loop = match main_queue().1.lock() {
        Ok(guard) => guard,
        Err(poisoned) => poisoned.into_inner(),
    };
    ui_loop.run_pending()
}

/// Sending side, cloned into every adapter that needs the UI thread
#[derive(Clone)]
pub struct UiThread {
    sender: mpsc::UnboundedSender<UiTask>,
}

impl UiThread {
    /// Queue a task without waiting for it to run.
    ///
    /// Fails only when the loop has been dropped.
    pub fn post<F>(&self, task: F) -> Result<(), NotificationError>
    where
        F: FnOnce() + Send + 'static,
    {
        self.sender
            .send(Box::new(task))
            .map_err(|_| NotificationError::NativeCall("UI thread is not running".to_string()))
    }
}

/// Receiving side, owned by whoever runs the UI thread
pub struct UiLoop {
    receiver: mpsc::UnboundedReceiver<UiTask>,
}

impl UiLoop {
    /// Run every task queued so far and return how many ran
    pub fn run_pending(&mut self) -> usize {
        let mut ran = 0;
        while let Ok(task) = self.receiver.try_recv() {
            task();
            ran += 1;
        }
        ran
    }
}
