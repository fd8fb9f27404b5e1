#![allow(dead_code)]
use certwatch::ssl::enums::watch_error::WatchError;
use certwatch::ssl::structs::cert_watcher::CertWatcher;
use certwatch::ssl::structs::options::Options;
use certwatch::ssl::structs::recording_event_sink::RecordingEventSink;
use rcgen::{
    BasicConstraints,
    CertificateParams,
    CertifiedIssuer,
    DnType,
    IsCa,
    KeyPair
};
use rustls::pki_types::{
    CertificateDer,
    ServerName
};
use rustls::{
    ClientConfig,
    ClientConnection,
    ServerConfig,
    ServerConnection
};
use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tempfile::TempDir;

pub type TestCa = CertifiedIssuer<'static, KeyPair>;

pub struct TestPair {
    pub cert_pem: String,
    pub key_pem: String,
}

/// A CA with a server and a client certificate issued by it.
pub struct TestPki {
    pub ca: TestCa,
    pub server: TestPair,
    pub client: TestPair,
}

pub fn create_test_ca(name: &str) -> TestCa {
    let mut params = CertificateParams::new(Vec::<String>::new()).unwrap();
    params.is_ca = IsCa::Ca(BasicConstraints::Unconstrained);
    params.distinguished_name.push(DnType::CommonName, name);
    CertifiedIssuer::self_signed(params, KeyPair::generate().unwrap()).unwrap()
}

pub fn issue_test_pair(ca: &TestCa, name: &str) -> TestPair {
    let key = KeyPair::generate().unwrap();
    let mut params = CertificateParams::new(vec!["localhost".to_string(), name.to_string()]).unwrap();
    params.distinguished_name.push(DnType::CommonName, name);
    let cert = params.signed_by(&key, &**ca).unwrap();
    TestPair {
        cert_pem: cert.pem(),
        key_pem: key.serialize_pem(),
    }
}

pub fn create_test_pki() -> TestPki {
    let ca = create_test_ca("certwatch test ca");
    let server = issue_test_pair(&ca, "server");
    let client = issue_test_pair(&ca, "client");
    TestPki { ca, server, client }
}

/// PEM that looks like a certificate but does not decode.
pub const BAD_CERTIFICATE_PEM: &str = "-----BEGIN CERTIFICATE-----\nbm90IGEgY2VydGlmaWNhdGU=\n-----END CERTIFICATE-----\n";

pub struct TestDir {
    pub dir: TempDir,
}

impl TestDir {
    pub fn new() -> Self {
        Self { dir: TempDir::new().unwrap() }
    }

    pub fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    pub fn path_string(&self, name: &str) -> String {
        self.path(name).to_string_lossy().to_string()
    }

    /// Writes `contents` to `name` and returns the full path.
    pub fn write(&self, name: &str, contents: &str) -> String {
        let path = self.path_string(name);
        sync_write(&path, contents.as_bytes()).unwrap();
        path
    }
}

/// Rewrites a file in place the way an operator would, and flushes it.
pub fn sync_write(path: &str, data: &[u8]) -> std::io::Result<()> {
    let mut file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(path)?;
    file.write_all(data)?;
    file.sync_all()
}

pub async fn wait_until(predicate: impl Fn() -> bool, iterations: usize, interval: Duration) -> bool {
    for _ in 0..iterations {
        if predicate() {
            return true;
        }
        tokio::time::sleep(interval).await;
    }
    predicate()
}

pub async fn wait_default(predicate: impl Fn() -> bool) -> bool {
    wait_until(predicate, 500, Duration::from_millis(10)).await
}

pub fn create_recording_watcher(options: Options) -> Result<(CertWatcher, Arc<RecordingEventSink>), WatchError> {
    let sink = Arc::new(RecordingEventSink::new());
    let watcher = CertWatcher::with_sink(options, sink.clone())?;
    Ok((watcher, sink))
}

/// Runs a full in-memory TLS handshake and returns the chain the client saw.
pub fn handshake(
    server_config: Arc<ServerConfig>,
    client_config: Arc<ClientConfig>,
) -> Result<Vec<CertificateDer<'static>>, rustls::Error> {
    let server_name = ServerName::try_from("localhost").unwrap();
    let mut client = ClientConnection::new(client_config, server_name)?;
    let mut server = ServerConnection::new(server_config)?;

    for _ in 0..16 {
        if !client.is_handshaking() && !server.is_handshaking() {
            break;
        }
        let mut to_server = Vec::new();
        while client.wants_write() {
            client.write_tls(&mut to_server).unwrap();
        }
        let mut reader = &to_server[..];
        while !reader.is_empty() {
            server.read_tls(&mut reader).unwrap();
            server.process_new_packets()?;
        }

        let mut to_client = Vec::new();
        while server.wants_write() {
            server.write_tls(&mut to_client).unwrap();
        }
        let mut reader = &to_client[..];
        while !reader.is_empty() {
            client.read_tls(&mut reader).unwrap();
            client.process_new_packets()?;
        }
    }
    Ok(client
        .peer_certificates()
        .map(|chain| chain.to_vec())
        .unwrap_or_default())
}
