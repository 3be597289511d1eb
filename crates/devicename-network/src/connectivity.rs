//! Network availability

/// What the platform reports about the network
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NetworkState {
    /// An active connection exists
    Connected,
    /// No active connection
    Disconnected,
    /// State could not be read, e.g. for lack of permission
    Unknown,
}

impl NetworkState {
    /// Whether a fetch should be attempted
    ///
    /// An unknown state is treated as connected.
    pub const fn should_fetch(self) -> bool {
        !matches!(self, Self::Disconnected)
    }
}

/// Source of [`NetworkState`]
pub trait Connectivity: Send + Sync {
    /// Current network state
    fn state(&self) -> NetworkState;
}

/// Reports a fixed state
#[derive(Debug, Clone, Copy)]
pub struct StaticConnectivity(pub NetworkState);

impl StaticConnectivity {
    /// Always connected
    pub const fn online() -> Self {
        Self(NetworkState::Connected)
    }

    /// Always disconnected
    pub const fn offline() -> Self {
        Self(NetworkState::Disconnected)
    }
}

impl Default for StaticConnectivity {
    fn default() -> Self {
        Self(NetworkState::Unknown)
    }
}

impl Connectivity for StaticConnectivity {
    fn state(&self) -> NetworkState {
        self.0
    }
}
