//! Deterministic collaborators shared by complaint unit tests.

use crate::complaint::{
    domain::{ComplainantContact, Complaint, ComplaintSubmission, ComplaintType, OrderPrefix},
    ports::OrderIdGenerator,
};
use mockable::DefaultClock;
use std::collections::VecDeque;
use std::sync::Mutex;

/// Replays a fixed suffix sequence, repeating the last value once drained.
pub struct ScriptedSuffixes {
    remaining: Mutex<VecDeque<u16>>,
    last: u16,
}

impl ScriptedSuffixes {
    pub fn new(suffixes: impl IntoIterator<Item = u16>) -> Self {
        let remaining: VecDeque<u16> = suffixes.into_iter().collect();
        let last = remaining.back().copied().unwrap_or(1000);
        Self {
            remaining: Mutex::new(remaining),
            last,
        }
    }
}

impl OrderIdGenerator for ScriptedSuffixes {
    fn next_suffix(&self, _prefix: OrderPrefix) -> u16 {
        self.remaining
            .lock()
            .ok()
            .and_then(|mut queue| queue.pop_front())
            .unwrap_or(self.last)
    }
}

pub fn pending_complaint(complaint_type: ComplaintType, address: Option<&str>) -> Complaint {
    let contact =
        ComplainantContact::new("Harpreet", "harpreet@example.com").expect("valid contact");
    let mut submission = ComplaintSubmission::new(contact, complaint_type, "Needs attention");
    if let Some(raw) = address {
        submission = submission.with_address(raw);
    }
    Complaint::new(submission, &DefaultClock)
}
