//! Enumerated field types
//!
//! Every enum here is open: unrecognized service values are kept in
//! `Unknown(String)` instead of being rejected. See [`crate::enums`].

use crate::open_enum;
use indexmap::IndexMap;

// ============================================================================
// Connections
// ============================================================================

open_enum! {
    /// Type of a catalog connection
    pub enum ConnectionType {
        Jdbc => "JDBC",
        Sftp => "SFTP",
        Mongodb => "MONGODB",
        Kafka => "KAFKA",
    }
}

open_enum! {
    /// Well-known keys of `Connection.ConnectionProperties`
    pub enum ConnectionPropertyKey {
        Host => "HOST",
        Port => "PORT",
        Username => "USERNAME",
        Password => "PASSWORD",
        EncryptedPassword => "ENCRYPTED_PASSWORD",
        JdbcDriverJarUri => "JDBC_DRIVER_JAR_URI",
        JdbcDriverClassName => "JDBC_DRIVER_CLASS_NAME",
        JdbcEngine => "JDBC_ENGINE",
        JdbcEngineVersion => "JDBC_ENGINE_VERSION",
        ConfigFiles => "CONFIG_FILES",
        InstanceId => "INSTANCE_ID",
        JdbcConnectionUrl => "JDBC_CONNECTION_URL",
        JdbcEnforceSsl => "JDBC_ENFORCE_SSL",
        CustomJdbcCert => "CUSTOM_JDBC_CERT",
        SkipCustomJdbcCertValidation => "SKIP_CUSTOM_JDBC_CERT_VALIDATION",
        CustomJdbcCertString => "CUSTOM_JDBC_CERT_STRING",
        ConnectionUrl => "CONNECTION_URL",
        KafkaBootstrapServers => "KAFKA_BOOTSTRAP_SERVERS",
    }
}

/// Map keys accept the canonical string of a property key
impl From<ConnectionPropertyKey> for String {
    fn from(key: ConnectionPropertyKey) -> Self {
        match key {
            ConnectionPropertyKey::Unknown(value) => value,
            known => crate::enums::OpenEnum::to_wire_string(&known),
        }
    }
}

// ============================================================================
// Jobs
// ============================================================================

open_enum! {
    /// Predefined worker type for jobs, dev endpoints and ML transforms
    pub enum WorkerType {
        Standard => "Standard",
        G1X => "G.1X",
        G2X => "G.2X",
    }
}

open_enum! {
    /// State of a job run
    pub enum JobRunState {
        Starting => "STARTING",
        Running => "RUNNING",
        Stopping => "STOPPING",
        Stopped => "STOPPED",
        Succeeded => "SUCCEEDED",
        Failed => "FAILED",
        Timeout => "TIMEOUT",
    }
}

impl JobRunState {
    /// Check whether the run has finished, successfully or not
    pub fn is_terminal(&self) -> bool {
        matches!(
            crate::enums::OpenEnum::normalized(self),
            JobRunState::Stopped
                | JobRunState::Succeeded
                | JobRunState::Failed
                | JobRunState::Timeout
        )
    }
}

// ============================================================================
// Crawlers
// ============================================================================

open_enum! {
    /// State of a crawler
    pub enum CrawlerState {
        Ready => "READY",
        Running => "RUNNING",
        Stopping => "STOPPING",
    }
}

open_enum! {
    /// State of a crawler schedule
    pub enum ScheduleState {
        Scheduled => "SCHEDULED",
        NotScheduled => "NOT_SCHEDULED",
        Transitioning => "TRANSITIONING",
    }
}

open_enum! {
    /// Outcome of the last crawl
    pub enum LastCrawlStatus {
        Succeeded => "SUCCEEDED",
        Cancelled => "CANCELLED",
        Failed => "FAILED",
    }
}

open_enum! {
    /// What a crawler does when it finds a changed schema
    pub enum UpdateBehavior {
        Log => "LOG",
        UpdateInDatabase => "UPDATE_IN_DATABASE",
    }
}

open_enum! {
    /// What a crawler does when it finds a deleted object
    pub enum DeleteBehavior {
        Log => "LOG",
        DeleteFromDatabase => "DELETE_FROM_DATABASE",
        DeprecateInDatabase => "DEPRECATE_IN_DATABASE",
    }
}

// ============================================================================
// Machine Learning Transforms
// ============================================================================

open_enum! {
    /// Type of machine learning transform
    pub enum TransformType {
        FindMatches => "FIND_MATCHES",
    }
}

open_enum! {
    /// Status of a machine learning transform
    pub enum TransformStatusType {
        NotReady => "NOT_READY",
        Ready => "READY",
        Deleting => "DELETING",
    }
}

// ============================================================================
// Map Helpers
// ============================================================================

/// Build a [`StringMap`](crate::record::StringMap) from key/value pairs, in
/// order. Later duplicates overwrite earlier ones, as with a bulk `set`.
pub fn string_map<I, K, V>(entries: I) -> crate::record::StringMap
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<String>,
{
    entries
        .into_iter()
        .map(|(k, v)| (k.into(), v.into()))
        .collect::<IndexMap<String, String>>()
}
