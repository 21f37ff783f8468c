//! Then steps for task lifecycle BDD scenarios.

use super::world::TaskWorld;
use rstest_bdd_macros::then;

#[then(r#"the next task to act on is "{title}""#)]
fn next_task_is(world: &TaskWorld, title: String) -> Result<(), eyre::Report> {
    let next = world
        .next_active
        .as_ref()
        .ok_or_else(|| eyre::eyre!("schedule was not consulted"))?;
    if next.title() != title {
        return Err(eyre::eyre!(
            "expected next task '{title}', found '{}'",
            next.title()
        ));
    }
    Ok(())
}

#[then("the active schedule is empty")]
fn active_schedule_is_empty(world: &TaskWorld) -> Result<(), eyre::Report> {
    let active = world.service.active_by_priority();
    if !active.is_empty() {
        return Err(eyre::eyre!(
            "expected an empty schedule, found {} active tasks",
            active.len()
        ));
    }
    Ok(())
}

#[then(r#"the completed list contains "{title}""#)]
fn completed_list_contains(world: &TaskWorld, title: String) -> Result<(), eyre::Report> {
    let found = world
        .service
        .completed()
        .iter()
        .any(|task| task.title() == title);
    if !found {
        return Err(eyre::eyre!("completed list does not contain '{title}'"));
    }
    Ok(())
}

#[then(r#"the only suggestion is "{expected}""#)]
fn only_suggestion_is(world: &TaskWorld, expected: String) -> Result<(), eyre::Report> {
    let suggestions = world
        .suggestions
        .as_ref()
        .ok_or_else(|| eyre::eyre!("suggestions were not requested"))?;
    if suggestions.as_slice() != [expected.clone()] {
        return Err(eyre::eyre!(
            "expected exactly ['{expected}'], found {suggestions:?}"
        ));
    }
    Ok(())
}
