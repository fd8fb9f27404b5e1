#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, Ord, PartialOrd)]
pub enum WatchTarget {
    ServerCa,
    ClientCa,
    Certificate,
    PrivateKey,
}
