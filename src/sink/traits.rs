//! Trait abstraction for enquiry delivery to enable mocking in tests

use crate::state::Enquiry;
use anyhow::Result;
use async_trait::async_trait;

/// Trait for the destination of a submitted enquiry
///
/// In a real deployment an implementation would post the payload to a
/// backend; the shipped implementation only simulates delivery.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EnquirySink: Send + Sync {
    /// Deliver a validated enquiry
    async fn deliver(&mut self, enquiry: Enquiry) -> Result<()>;
}
