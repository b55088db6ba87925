//! Engine-wide constants.

/// GlobalRank engine version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Identifier of the scoring algorithm, stamped on every submission summary.
/// Bump when the estimator or the score mapping changes observable output.
pub const SCORE_ALGO_VERSION: &str = "v2-irt-1d-normal-map";

/// Newton-Raphson iteration cap.
pub const DEFAULT_MAX_ITERATIONS: u32 = 40;

/// Newton-Raphson stops once `|g/h|` drops below this.
pub const DEFAULT_CONVERGENCE_TOLERANCE: f64 = 1e-8;

/// Project config file name looked up in the config root.
pub const PROJECT_CONFIG_FILE: &str = "globalrank.toml";

/// Environment variable holding the tracing filter directives.
pub const LOG_ENV_VAR: &str = "GLOBALRANK_LOG";
