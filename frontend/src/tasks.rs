//! Abortable background tasks owned by a component.
//!
//! Each task is registered under a [`TaskKind`]. Registering a new task of a
//! kind aborts the one already running under it, and [`Tasks::abort_all`] is
//! called from a component's `destroy` hook so nothing resolves after teardown.

use std::collections::HashMap;
use std::future::Future;

use futures_util::future::{abortable, AbortHandle, Abortable};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TaskKind {
    LoadContacts,
    UploadPhoto,
    Submit,
}

#[derive(Default)]
pub struct Tasks {
    handles: HashMap<TaskKind, AbortHandle>,
}

impl Tasks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `future` under `kind` and returns it wrapped so that it can be
    /// aborted. A previous task of the same kind is aborted.
    pub fn track<F>(&mut self, kind: TaskKind, future: F) -> Abortable<F>
    where
        F: Future,
    {
        let (task, handle) = abortable(future);
        if let Some(previous) = self.handles.insert(kind, handle) {
            previous.abort();
        }
        task
    }

    /// Tracks `future` and runs it on the browser event loop.
    pub fn spawn<F>(&mut self, kind: TaskKind, future: F)
    where
        F: Future<Output = ()> + 'static,
    {
        let task = self.track(kind, future);
        yew::platform::spawn_local(async move {
            let _ = task.await;
        });
    }

    /// Forgets the handle of a task that has delivered its result.
    pub fn finish(&mut self, kind: TaskKind) {
        self.handles.remove(&kind);
    }

    pub fn abort_all(&mut self) {
        for (_, handle) in self.handles.drain() {
            handle.abort();
        }
    }
}
