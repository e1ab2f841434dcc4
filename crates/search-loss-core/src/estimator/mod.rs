pub mod input;
pub mod loss;

pub use input::{Field, InputSet};
pub use loss::{
    calculate_search_loss, estimate, estimate_breakdown, max_monthly_loss, EstimateResult,
    LossBreakdown,
};
