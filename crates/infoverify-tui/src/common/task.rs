use tokio_util::sync::CancellationToken;

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
    AuthRequest,
    FileDiscovery,
    DocumentProcessing,
}

#[derive(Debug, Clone)]
pub struct TaskStarted {
    pub id: TaskId,
    pub cancel: Option<CancellationToken>,
}

#[derive(Debug)]
pub struct TaskCompleted<E> {
    pub id: TaskId,
    pub result: E,
}

/// Task lifecycle state (stored in AppState, mutated only by reducer).
///
/// `active` is set by the reducer when it emits the spawning effect, so a
/// second request in the same frame already sees the task as running. The
/// cancel token arrives later with `TaskStarted`.
#[derive(Debug, Default, Clone)]
pub struct TaskState {
    pub active: Option<TaskId>,
    pub cancel: Option<CancellationToken>,
}

impl TaskState {
    pub fn is_running(&self) -> bool {
        self.active.is_some()
    }

    pub fn begin(&mut self, id: TaskId) {
        self.active = Some(id);
        self.cancel = None;
    }

    /// Records the cancel token. Returns false if `started` is not the active task.
    pub fn on_started(&mut self, started: &TaskStarted) -> bool {
        let ok = self.active == Some(started.id);
        if ok {
            self.cancel = started.cancel.clone();
        }
        ok
    }

    pub fn finish_if_active(&mut self, id: TaskId) -> bool {
        let ok = self.active == Some(id);
        if ok {
            self.clear();
        }
        ok
    }

    /// Forgets the task and hands back its cancel token, if any.
    pub fn take_cancel(&mut self) -> Option<CancellationToken> {
        let token = self.cancel.take();
        self.active = None;
        token
    }

    pub fn clear(&mut self) {
        self.active = None;
        self.cancel = None;
    }
}

#[derive(Debug, Default, Clone)]
pub struct Tasks {
    pub auth_request: TaskState,
    pub file_discovery: TaskState,
    pub document_processing: TaskState,
}

impl Tasks {
    pub fn state_mut(&mut self, kind: TaskKind) -> &mut TaskState {
        match kind {
            TaskKind::AuthRequest => &mut self.auth_request,
            TaskKind::FileDiscovery => &mut self.file_discovery,
            TaskKind::DocumentProcessing => &mut self.document_processing,
        }
    }

    pub fn is_any_running(&self) -> bool {
        self.auth_request.is_running()
            || self.file_discovery.is_running()
            || self.document_processing.is_running()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stale_start_is_rejected() {
        let mut seq = TaskSeq::default();
        let first = seq.next_id();
        let second = seq.next_id();

        let mut state = TaskState::default();
        state.begin(second);

        let stale = TaskStarted {
            id: first,
            cancel: Some(CancellationToken::new()),
        };
        assert!(!state.on_started(&stale));
        assert!(state.cancel.is_none());
    }

    #[test]
    fn test_finish_only_matches_active() {
        let mut state = TaskState::default();
        state.begin(TaskId(3));

        assert!(!state.finish_if_active(TaskId(2)));
        assert!(state.is_running());
        assert!(state.finish_if_active(TaskId(3)));
        assert!(!state.is_running());
    }

    #[test]
    fn test_take_cancel_clears() {
        let mut state = TaskState::default();
        state.begin(TaskId(0));
        let token = CancellationToken::new();
        state.on_started(&TaskStarted {
            id: TaskId(0),
            cancel: Some(token.clone()),
        });

        let taken = state.take_cancel().unwrap();
        taken.cancel();
        assert!(token.is_cancelled());
        assert!(!state.is_running());
    }
}
