mod case;
mod order;
mod progress;

pub use case::{Case, CaseDraft, CaseError};
pub use order::Order;
pub use progress::ProgressRecord;
