//! Order identifier uniqueness under concurrent filing.
//!
//! A prefix has 9000 possible suffixes. Filing more complaints than that
//! with a single draw each must fail some of them, and no two stored
//! complaints may ever share an order identifier.

use super::helpers::complaint_stack;
use civicdesk::complaint::services::{
    ComplaintIntakeError, RoutingConfig, SubmitComplaintRequest,
};
use rstest::rstest;
use std::collections::HashSet;
use std::sync::Arc;

const SUFFIX_SPACE: usize = 9000;

fn road_request(n: usize) -> SubmitComplaintRequest {
    SubmitComplaintRequest::new(format!("Citizen {n}"), "citizen@example.com", "Pothole")
        .with_type("Road")
}

async fn file_concurrently(
    config: RoutingConfig,
    count: usize,
) -> Result<(Vec<String>, usize), eyre::Report> {
    let stack = complaint_stack(&config, &[])?;
    let intake = Arc::new(stack.intake);
    let handles: Vec<_> = (0..count)
        .map(|n| {
            let service = Arc::clone(&intake);
            tokio::spawn(async move { service.submit(road_request(n)).await })
        })
        .collect();

    let mut order_ids = Vec::new();
    let mut exhausted = 0;
    for handle in handles {
        match handle.await? {
            Ok(complaint) => {
                let order_id = complaint
                    .order_id()
                    .ok_or_else(|| eyre::eyre!("stored complaint has no order id"))?;
                order_ids.push(order_id.to_string());
            }
            Err(ComplaintIntakeError::OrderIdSpaceExhausted { attempts, .. }) => {
                eyre::ensure!(attempts == config.max_order_id_attempts, "attempt count mismatch");
                exhausted += 1;
            }
            Err(other) => return Err(other.into()),
        }
    }
    eyre::ensure!(
        stack.repository.len()? == order_ids.len(),
        "repository size differs from successful submissions"
    );
    Ok((order_ids, exhausted))
}

#[rstest]
#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn single_draw_saturates_without_duplicates() -> Result<(), eyre::Report> {
    let config = RoutingConfig {
        max_order_id_attempts: 1,
        ..RoutingConfig::default()
    };
    let submissions = 10_000;

    let (order_ids, exhausted) = file_concurrently(config, submissions).await?;

    let unique: HashSet<&String> = order_ids.iter().collect();
    eyre::ensure!(unique.len() == order_ids.len(), "duplicate order identifier stored");
    eyre::ensure!(order_ids.len() <= SUFFIX_SPACE, "more ids than suffixes");
    eyre::ensure!(
        exhausted >= submissions - SUFFIX_SPACE,
        "expected at least {} failures, saw {exhausted}",
        submissions - SUFFIX_SPACE
    );
    eyre::ensure!(order_ids.len() + exhausted == submissions, "lost submissions");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn retries_absorb_collisions_below_saturation() -> Result<(), eyre::Report> {
    let submissions = 2_000;

    let (order_ids, exhausted) = file_concurrently(RoutingConfig::default(), submissions).await?;

    let unique: HashSet<&String> = order_ids.iter().collect();
    eyre::ensure!(exhausted == 0, "{exhausted} submissions exhausted their retries");
    eyre::ensure!(unique.len() == submissions, "duplicate or missing order identifiers");
    Ok(())
}
