//! Move selection for the gravity-drop game: evaluation, tactics, and search.

pub mod api;
pub mod config;
pub mod depth;
pub mod error;
pub mod eval;
pub mod search;
pub mod time;

pub use api::{ComputedMove, compute_move, compute_move_with_limits};
pub use config::{DepthPolicy, EngineConfig, EvalWeights, OrderingWeights, StageWeights};
pub use error::EngineError;
pub use eval::evaluate;
pub use eval::stage::Stage;
pub use search::control::SearchControl;
pub use search::{Decision, MoveResult, Searcher};
pub use time::{SearchLimits, TimeBudget};
