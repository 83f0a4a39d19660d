//! Follow-up work returned by handlers.

use std::future::Future;

use futures_util::FutureExt;
use futures_util::future::BoxFuture;

use crate::message::Message;

/// Lifetime a spawned future is tied to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskScope {
    /// Aborted when the screen that started it is unmounted.
    Screen,
    /// Runs until it completes or the session shuts down.
    Session,
}

/// Work for the shell to run after a handler returns.
///
/// Futures resolve to a [`Message`] that is fed back into
/// [`App::update`](super::App::update).
#[must_use = "tasks do nothing unless handed back to the shell"]
pub struct Task(TaskKind);

enum TaskKind {
    None,
    Done(Message),
    Future {
        future: BoxFuture<'static, Message>,
        scope: TaskScope,
    },
    Batch(Vec<Task>),
}

/// A flattened unit of work.
pub(crate) enum Job {
    Message(Message),
    Spawn {
        future: BoxFuture<'static, Message>,
        scope: TaskScope,
    },
}

impl Task {
    pub fn none() -> Self {
        Self(TaskKind::None)
    }

    /// Feed `message` back immediately.
    pub fn done(message: Message) -> Self {
        Self(TaskKind::Done(message))
    }

    /// Run `future` for the current screen and map its output to a message.
    pub fn perform<T, F, M>(future: F, map: M) -> Self
    where
        F: Future<Output = T> + Send + 'static,
        M: FnOnce(T) -> Message + Send + 'static,
    {
        Self::spawn(future, map, TaskScope::Screen)
    }

    /// Run `future` for the whole session.
    pub fn perform_detached<T, F, M>(future: F, map: M) -> Self
    where
        F: Future<Output = T> + Send + 'static,
        M: FnOnce(T) -> Message + Send + 'static,
    {
        Self::spawn(future, map, TaskScope::Session)
    }

    pub fn batch(tasks: impl IntoIterator<Item = Task>) -> Self {
        Self(TaskKind::Batch(tasks.into_iter().collect()))
    }

    pub fn is_none(&self) -> bool {
        match &self.0 {
            TaskKind::None => true,
            TaskKind::Batch(tasks) => tasks.iter().all(Task::is_none),
            TaskKind::Done(_) | TaskKind::Future { .. } => false,
        }
    }

    fn spawn<T, F, M>(future: F, map: M, scope: TaskScope) -> Self
    where
        F: Future<Output = T> + Send + 'static,
        M: FnOnce(T) -> Message + Send + 'static,
    {
        Self(TaskKind::Future {
            future: future.map(map).boxed(),
            scope,
        })
    }

    /// Flatten into jobs, in order.
    pub(crate) fn into_jobs(self) -> Vec<Job> {
        let mut jobs = Vec::new();
        self.collect_jobs(&mut jobs);
        jobs
    }

    fn collect_jobs(self, jobs: &mut Vec<Job>) {
        match self.0 {
            TaskKind::None => {}
            TaskKind::Done(message) => jobs.push(Job::Message(message)),
            TaskKind::Future { future, scope } => jobs.push(Job::Spawn { future, scope }),
            TaskKind::Batch(tasks) => {
                for task in tasks {
                    task.collect_jobs(jobs);
                }
            }
        }
    }
}

impl std::fmt::Debug for Task {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.0 {
            TaskKind::None => f.write_str("Task::None"),
            TaskKind::Done(message) => f.debug_tuple("Task::Done").field(message).finish(),
            TaskKind::Future { scope, .. } => f.debug_tuple("Task::Future").field(scope).finish(),
            TaskKind::Batch(tasks) => f.debug_tuple("Task::Batch").field(tasks).finish(),
        }
    }
}
