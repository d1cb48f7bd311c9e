//! When steps for complaint routing BDD scenarios.

use super::world::{ComplaintWorld, run_async};
use civicdesk::complaint::services::{SubmitComplaintRequest, TransitionComplaintRequest};
use eyre::WrapErr;
use rstest_bdd_macros::when;

fn file(world: &mut ComplaintWorld, request: SubmitComplaintRequest) -> Result<(), eyre::Report> {
    let filed =
        run_async(world.services()?.intake.submit(request)).wrap_err("file complaint")?;
    world.last_complaint = Some(filed);
    Ok(())
}

#[when(r#"a "{category}" complaint is filed without an address"#)]
fn complaint_filed_without_address(
    world: &mut ComplaintWorld,
    category: String,
) -> Result<(), eyre::Report> {
    let request = SubmitComplaintRequest::new("Jaspreet", "jaspreet@example.com", "Broken")
        .with_type(category);
    file(world, request)
}

#[when(r#"a "{category}" complaint is filed at "{address}""#)]
fn complaint_filed_at_address(
    world: &mut ComplaintWorld,
    category: String,
    address: String,
) -> Result<(), eyre::Report> {
    let request = SubmitComplaintRequest::new("Jaspreet", "jaspreet@example.com", "Overflowing")
        .with_type(category)
        .with_address(address);
    file(world, request)
}

#[when(r#"the complaint is transitioned to "{target_status}""#)]
fn complaint_transitioned(
    world: &mut ComplaintWorld,
    target_status: String,
) -> Result<(), eyre::Report> {
    let complaint_id = world.complaint()?.id();
    let result = run_async(
        world
            .services()?
            .lifecycle
            .transition(TransitionComplaintRequest::new(complaint_id, target_status)),
    );
    if let Ok(ref updated) = result {
        world.last_complaint = Some(updated.clone());
    }
    world.last_transition_result = Some(result);
    Ok(())
}
