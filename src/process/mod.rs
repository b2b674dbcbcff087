/*!
 * Process Module
 * Process records, submission requests and boundary validation
 */

pub mod request;
pub mod types;
pub mod validation;

// Re-export for convenience
pub use request::ProcessRequest;
pub use types::{Process, ProcessState};
pub use validation::validate_request;
