//! When steps for task lifecycle BDD scenarios.

use super::world::{TaskWorld, run_async};
use eyre::WrapErr;
use rstest_bdd_macros::when;

#[when("the schedule is consulted")]
fn consult_schedule(world: &mut TaskWorld) {
    world.next_active = world.service.next_active();
}

#[when(r#"the task "{title}" is completed"#)]
fn complete_task(world: &mut TaskWorld, title: String) -> Result<(), eyre::Report> {
    let id = world
        .ids_by_title
        .get(&title)
        .copied()
        .ok_or_else(|| eyre::eyre!("no task titled '{title}' in scenario world"))?;
    run_async(world.service.complete_task(id))
        .wrap_err_with(|| format!("complete task '{title}'"))?;
    Ok(())
}

#[when(r#"tag suggestions are requested for prefix "{prefix}""#)]
fn request_suggestions(world: &mut TaskWorld, prefix: String) {
    world.suggestions = Some(world.service.tag_suggestions(&prefix));
}
