/// Run state of a frame-driven component.
///
/// `Idle -> Running <-> Stopped -> Disposed`. Disposal is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Lifecycle {
    #[default]
    Idle,
    Running,
    Stopped,
    Disposed,
}

impl Lifecycle {
    /// Returns true if the state changed.
    pub fn start(&mut self) -> bool {
        match self {
            Lifecycle::Idle | Lifecycle::Stopped => {
                *self = Lifecycle::Running;
                true
            }
            Lifecycle::Running => false,
            Lifecycle::Disposed => {
                log::warn!("start() called on a disposed component");
                false
            }
        }
    }

    pub fn stop(&mut self) -> bool {
        if *self == Lifecycle::Running {
            *self = Lifecycle::Stopped;
            true
        } else {
            false
        }
    }

    /// Returns true the first time only.
    pub fn dispose(&mut self) -> bool {
        if *self == Lifecycle::Disposed {
            false
        } else {
            *self = Lifecycle::Disposed;
            true
        }
    }

    pub fn is_running(self) -> bool {
        self == Lifecycle::Running
    }

    pub fn is_disposed(self) -> bool {
        self == Lifecycle::Disposed
    }
}
