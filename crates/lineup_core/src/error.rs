use thiserror::Error;

/// Player and roster data errors, raised before any simulation runs.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("Player name must not be empty")]
    EmptyName,

    #[error("Player {player}: {field} = {value} is outside [0, 1]")]
    ProbabilityOutOfRange { player: String, field: &'static str, value: f64 },

    #[error("Player {player}: derived {field} = {value} is negative (inconsistent inputs)")]
    NegativeDerived { player: String, field: &'static str, value: f64 },

    #[error("Duplicate player name in roster: {name}")]
    DuplicateName { name: String },

    #[error("Player name {prefix} is a prefix of {name}; lineup names would be ambiguous")]
    AmbiguousName { prefix: String, name: String },

    #[error("Player {player}: outcome weights do not form a distribution ({reason})")]
    InvalidDistribution { player: String, reason: String },

    #[error("Unknown player: {name}")]
    UnknownPlayer { name: String },
}

/// Errors raised while simulating or evaluating a lineup.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SimError {
    #[error("Invalid player data: {0}")]
    InvalidPlayer(#[from] ValidationError),

    #[error("Lineup has no batters")]
    EmptyLineup,

    #[error("Lineup {lineup} cannot make an out; innings would never end")]
    DegenerateLineup { lineup: String },

    #[error("Inning did not reach three outs within {limit} plate appearances")]
    NonTerminatingInning { limit: u32 },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Worker pool error: {0}")]
    WorkerPool(String),
}

/// Errors raised while loading configuration or persisting results.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Unsupported config format: {path}")]
    UnsupportedFormat { path: String },

    #[error(transparent)]
    Invalid(#[from] SimError),
}

impl From<ValidationError> for ConfigError {
    fn from(err: ValidationError) -> Self {
        ConfigError::Invalid(SimError::InvalidPlayer(err))
    }
}

impl SimError {
    /// Data errors are fixed by editing the roster or config; retrying won't help.
    pub fn is_data_error(&self) -> bool {
        matches!(
            self,
            SimError::InvalidPlayer(_)
                | SimError::EmptyLineup
                | SimError::DegenerateLineup { .. }
                | SimError::InvalidConfig(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, SimError>;
