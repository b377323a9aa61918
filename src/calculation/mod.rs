//! Pay calculation.
//!
//! [`compute_pay`] is the pure calculation over explicit inputs;
//! [`pay_report`] resolves those inputs from a store.

mod pay;
mod report;

pub use pay::compute_pay;
pub use report::pay_report;
