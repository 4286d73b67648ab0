pub mod analysis;

pub use analysis::evaluation::{EvaluationReport, Metric, evaluate, evaluate_all};
pub use analysis::sbox::{SboxError, SboxTable};
