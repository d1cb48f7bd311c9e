//! Given steps for complaint routing BDD scenarios.

use super::world::{ComplaintWorld, run_async, split_list};
use civicdesk::complaint::services::SubmitComplaintRequest;
use eyre::WrapErr;
use rstest_bdd_macros::given;

#[given(r#"the worker roster "{roster}""#)]
fn worker_roster(world: &mut ComplaintWorld, roster: String) -> Result<(), eyre::Report> {
    world.install_roster(split_list(&roster))
}

#[given("an empty worker roster")]
fn empty_worker_roster(world: &mut ComplaintWorld) -> Result<(), eyre::Report> {
    world.install_roster([])
}

#[given(r#"an "{category}" complaint has been filed"#)]
fn complaint_has_been_filed(
    world: &mut ComplaintWorld,
    category: String,
) -> Result<(), eyre::Report> {
    let request = SubmitComplaintRequest::new("Navdeep", "navdeep@example.com", "Needs repair")
        .with_type(category);
    let filed = run_async(world.services()?.intake.submit(request))
        .wrap_err("file complaint for scenario setup")?;
    world.last_complaint = Some(filed);
    Ok(())
}

#[given("the complaint has been marked resolved")]
fn complaint_marked_resolved(world: &mut ComplaintWorld) -> Result<(), eyre::Report> {
    let complaint_id = world.complaint()?.id();
    let resolved = run_async(world.services()?.lifecycle.mark_resolved(complaint_id))
        .wrap_err("resolve complaint in scenario setup")?;
    world.last_complaint = Some(resolved);
    Ok(())
}
