//! Given steps for task lifecycle BDD scenarios.

use super::world::{TaskWorld, run_async};
use eyre::WrapErr;
use rstest_bdd_macros::given;
use taskdesk::services::CreateTaskRequest;

fn create(
    world: &mut TaskWorld,
    title: String,
    category: String,
    priority: u8,
    day: u32,
    tags: Vec<String>,
) -> Result<(), eyre::Report> {
    let due_date = TaskWorld::day(day).ok_or_else(|| eyre::eyre!("invalid scenario day {day}"))?;
    let request = CreateTaskRequest::new(&title, category, priority, due_date).with_tags(tags);
    let created = run_async(world.service.create_task(request))
        .wrap_err_with(|| format!("create task '{title}'"))?;
    world.ids_by_title.insert(title, created.id());
    Ok(())
}

#[given(r#"a task "{title}" in category "{category}" with priority {priority:u8} due on day {day:u32}"#)]
fn task_without_tags(
    world: &mut TaskWorld,
    title: String,
    category: String,
    priority: u8,
    day: u32,
) -> Result<(), eyre::Report> {
    create(world, title, category, priority, day, Vec::new())
}

#[given(
    r#"a task "{title}" in category "{category}" with priority {priority:u8} due on day {day:u32} tagged "{tags}""#
)]
fn task_with_tags(
    world: &mut TaskWorld,
    title: String,
    category: String,
    priority: u8,
    day: u32,
    tags: String,
) -> Result<(), eyre::Report> {
    let tag_list = tags.split(',').map(str::to_owned).collect();
    create(world, title, category, priority, day, tag_list)
}
