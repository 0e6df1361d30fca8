//! Simulated enquiry delivery
//!
//! No network call is made anywhere in the kiosk; this sink logs the
//! payload and remembers it, which is all "submission" amounts to here.

use super::traits::EnquirySink;
use crate::state::Enquiry;
use anyhow::Result;
use async_trait::async_trait;

/// Sink standing in for the backend the kiosk deliberately lacks
#[derive(Debug, Default)]
pub struct SimulatedSink {
    delivered: usize,
    last: Option<Enquiry>,
}

impl SimulatedSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of enquiries delivered so far
    #[allow(dead_code)]
    pub fn delivered(&self) -> usize {
        self.delivered
    }

    /// The most recently delivered enquiry
    #[allow(dead_code)]
    pub fn last(&self) -> Option<&Enquiry> {
        self.last.as_ref()
    }
}

#[async_trait]
impl EnquirySink for SimulatedSink {
    async fn deliver(&mut self, enquiry: Enquiry) -> Result<()> {
        let payload = serde_json::to_string(&enquiry)?;
        tracing::info!(
            reference = %enquiry.reference,
            %payload,
            "enquiry delivered (simulated)"
        );
        self.delivered += 1;
        self.last = Some(enquiry);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sink::MockEnquirySink;
    use crate::state::ContactForm;

    #[test]
    fn test_simulated_sink_records_deliveries() {
        let mut sink = SimulatedSink::new();
        assert_eq!(sink.delivered(), 0);
        assert!(sink.last().is_none());

        let mut form = ContactForm::new();
        form.fields[0].set_value("Jane".to_string());
        let enquiry = form.to_enquiry();
        let reference = enquiry.reference;

        tokio_test::block_on(sink.deliver(enquiry)).unwrap();

        assert_eq!(sink.delivered(), 1);
        let last = sink.last().unwrap();
        assert_eq!(last.reference, reference);
        assert_eq!(last.values.get("name").unwrap(), "Jane");
    }

    #[test]
    fn test_mock_sink_observes_payload() {
        let mut sink = MockEnquirySink::new();
        sink.expect_deliver()
            .withf(|enquiry| enquiry.values.get("email").unwrap() == "jane@example.com")
            .times(1)
            .returning(|_| Ok(()));

        let mut form = ContactForm::new();
        form.fields[1].set_value("jane@example.com".to_string());

        tokio_test::block_on(sink.deliver(form.to_enquiry())).unwrap();
    }
}
