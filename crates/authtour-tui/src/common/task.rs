//! Async task lifecycle bookkeeping.
//!
//! One slot per request kind: a submit while the same kind is running is
//! ignored by the reducer, which is what keeps a single user action from
//! putting two requests of the same kind in flight. No cancellation; backend
//! calls run to completion or fail.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TaskId(pub u64);

#[derive(Debug, Default)]
pub struct TaskSeq {
    next: u64,
}

impl TaskSeq {
    pub fn next_id(&mut self) -> TaskId {
        let id = TaskId(self.next);
        self.next = self.next.wrapping_add(1);
        id
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TaskKind {
    Signup,
    Verify,
    Login,
}

impl TaskKind {
    /// In-flight label, matching the reference UI's busy button text.
    pub fn in_flight_label(&self) -> &'static str {
        match self {
            TaskKind::Signup => "Creating Account...",
            TaskKind::Verify => "Verifying...",
            TaskKind::Login => "Logging In...",
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct TaskStarted {
    pub id: TaskId,
}

#[derive(Debug)]
pub struct TaskCompleted<E> {
    pub id: TaskId,
    pub result: E,
}

/// Task slot state (stored in AppState, mutated only by the reducer).
#[derive(Debug, Default, Clone)]
pub struct TaskState {
    pub active: Option<TaskId>,
}

impl TaskState {
    pub fn is_running(&self) -> bool {
        self.active.is_some()
    }

    pub fn on_started(&mut self, started: TaskStarted) {
        self.active = Some(started.id);
    }

    pub fn finish_if_active(&mut self, id: TaskId) -> bool {
        let ok = self.active == Some(id);
        if ok {
            self.active = None;
        }
        ok
    }
}

#[derive(Debug, Default, Clone)]
pub struct Tasks {
    pub signup: TaskState,
    pub verify: TaskState,
    pub login: TaskState,
}

impl Tasks {
    pub fn state(&self, kind: TaskKind) -> &TaskState {
        match kind {
            TaskKind::Signup => &self.signup,
            TaskKind::Verify => &self.verify,
            TaskKind::Login => &self.login,
        }
    }

    pub fn state_mut(&mut self, kind: TaskKind) -> &mut TaskState {
        match kind {
            TaskKind::Signup => &mut self.signup,
            TaskKind::Verify => &mut self.verify,
            TaskKind::Login => &mut self.login,
        }
    }

    pub fn is_any_running(&self) -> bool {
        self.signup.is_running() || self.verify.is_running() || self.login.is_running()
    }

    /// The kind currently in flight, if any.
    pub fn running_kind(&self) -> Option<TaskKind> {
        [TaskKind::Signup, TaskKind::Verify, TaskKind::Login]
            .into_iter()
            .find(|kind| self.state(*kind).is_running())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_task_seq_is_monotonic() {
        let mut seq = TaskSeq::default();
        let a = seq.next_id();
        let b = seq.next_id();
        assert_ne!(a, b);
    }

    #[test]
    fn test_finish_ignores_stale_ids() {
        let mut state = TaskState::default();
        state.on_started(TaskStarted { id: TaskId(1) });

        assert!(!state.finish_if_active(TaskId(0)));
        assert!(state.is_running());

        assert!(state.finish_if_active(TaskId(1)));
        assert!(!state.is_running());
    }

    #[test]
    fn test_running_kind_reports_active_slot() {
        let mut tasks = Tasks::default();
        assert!(tasks.running_kind().is_none());

        tasks.login.on_started(TaskStarted { id: TaskId(3) });
        assert_eq!(tasks.running_kind(), Some(TaskKind::Login));
        assert!(tasks.is_any_running());
    }
}
