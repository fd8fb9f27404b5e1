use crate::ssl::enums::watch_target::WatchTarget;

impl WatchTarget {
    pub const ALL: [WatchTarget; 4] = [
        WatchTarget::ServerCa,
        WatchTarget::ClientCa,
        WatchTarget::Certificate,
        WatchTarget::PrivateKey,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            WatchTarget::ServerCa => "ca",
            WatchTarget::ClientCa => "client-ca",
            WatchTarget::Certificate => "certificate",
            WatchTarget::PrivateKey => "key",
        }
    }

    pub fn is_key_pair(&self) -> bool {
        matches!(self, WatchTarget::Certificate | WatchTarget::PrivateKey)
    }
}

impl std::fmt::Display for WatchTarget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
