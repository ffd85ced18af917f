//! Configuration for beanq
//!
//! Protocol constants plus a client config with sensible defaults.

// =============================================================================
// Protocol Defaults
// =============================================================================

/// Priority given to put/bury/release. Lower numbers are more urgent,
/// so 2^31 sits in the middle of the u32 range.
pub const DEFAULT_PRIORITY: u64 = 1 << 31;

/// Seconds a reservation may be held before the server releases the job
pub const DEFAULT_TTR: u64 = 120;

/// Seconds the server waits before a put/released job becomes ready
pub const DEFAULT_DELAY: u64 = 0;

/// Dial timeout for the TCP connection (milliseconds)
pub const CONNECT_TIMEOUT_MS: u64 = 2000;

/// Conventional beanstalkd listen address
pub const DEFAULT_ADDR: &str = "127.0.0.1:11300";

/// Client configuration
#[derive(Debug, Clone)]
pub struct Config {
    // -------------------------------------------------------------------------
    // Network Configuration
    // -------------------------------------------------------------------------
    /// Server address (host:port)
    pub addr: String,

    /// Connect timeout (milliseconds)
    pub connect_timeout_ms: u64,

    // -------------------------------------------------------------------------
    // Job Configuration
    // -------------------------------------------------------------------------
    /// Priority sent with put, bury and release
    pub priority: u64,

    /// Time-to-run sent with put (seconds)
    pub ttr: u64,

    /// Delay sent with put and release (seconds)
    pub delay: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            addr: DEFAULT_ADDR.to_string(),
            connect_timeout_ms: CONNECT_TIMEOUT_MS,
            priority: DEFAULT_PRIORITY,
            ttr: DEFAULT_TTR,
            delay: DEFAULT_DELAY,
        }
    }
}

impl Config {
    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the server address
    pub fn addr(mut self, addr: impl Into<String>) -> Self {
        self.config.addr = addr.into();
        self
    }

    /// Set the connect timeout (in milliseconds)
    pub fn connect_timeout_ms(mut self, ms: u64) -> Self {
        self.config.connect_timeout_ms = ms;
        self
    }

    /// Set the job priority
    pub fn priority(mut self, priority: u64) -> Self {
        self.config.priority = priority;
        self
    }

    /// Set the time-to-run (in seconds)
    pub fn ttr(mut self, seconds: u64) -> Self {
        self.config.ttr = seconds;
        self
    }

    /// Set the put/release delay (in seconds)
    pub fn delay(mut self, seconds: u64) -> Self {
        self.config.delay = seconds;
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}
