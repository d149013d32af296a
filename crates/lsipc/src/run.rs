//! One pass: query, project, render.

use std::io::Write;

use lsipc_sysv::{Directory, IpcSource};
use lsipc_table::{render, Table};

use crate::cli::Config;
use crate::columns::IpcClass;
use crate::context::RunContext;
use crate::error::LsipcError;
use crate::project::{semaphore_detail, Projector};
use crate::summary;

/// Query `source` for every configured class and render one table to `out`.
///
/// A missing `--id` object is reported on `err` and does not fail the run.
pub fn run<S, D, W, E>(
    config: &Config,
    ctx: &RunContext,
    source: &S,
    directory: &D,
    out: &mut W,
    err: &mut E,
) -> Result<(), LsipcError>
where
    S: IpcSource + ?Sized,
    D: Directory + ?Sized,
    W: Write,
    E: Write,
{
    let mut projector = Projector::new(ctx, &config.columns, source, directory);
    let mut table = projector.table().with_name(config.active.table_name());

    for &class in &config.classes {
        if config.is_summary() {
            for line in summary::lines(class, source)? {
                projector.summary(&mut table, &line)?;
            }
            continue;
        }

        match config.id {
            None => project_all(class, source, &mut projector, &mut table)?,
            Some(id) => {
                if !project_one(class, id, source, &mut projector, &mut table)? {
                    writeln!(err, "lsipc: id {} not found", id)?;
                }
            }
        }
    }

    render(&table, &config.render, out)?;
    Ok(())
}

fn project_all<S, D>(
    class: IpcClass,
    source: &S,
    projector: &mut Projector<'_, S, D>,
    table: &mut Table,
) -> Result<(), LsipcError>
where
    S: IpcSource + ?Sized,
    D: Directory + ?Sized,
{
    match class {
        IpcClass::Messages => {
            for q in source.message_queues()? {
                projector.message_queue(table, &q)?;
            }
        }
        IpcClass::SharedMemory => {
            for seg in source.shared_memory()? {
                projector.shared_memory(table, &seg)?;
            }
        }
        IpcClass::Semaphores => {
            for set in source.semaphores()? {
                projector.semaphore_set(table, &set)?;
            }
        }
        IpcClass::Summary => {}
    }
    Ok(())
}

/// Project the object `id`; `false` when it does not exist.
fn project_one<S, D>(
    class: IpcClass,
    id: i32,
    source: &S,
    projector: &mut Projector<'_, S, D>,
    table: &mut Table,
) -> Result<bool, LsipcError>
where
    S: IpcSource + ?Sized,
    D: Directory + ?Sized,
{
    match class {
        IpcClass::Messages => match source.message_queue(id)? {
            Some(q) => projector.message_queue(table, &q).map(|_| true),
            None => Ok(false),
        },
        IpcClass::SharedMemory => match source.shared_memory_segment(id)? {
            Some(seg) => projector.shared_memory(table, &seg).map(|_| true),
            None => Ok(false),
        },
        IpcClass::Semaphores => match source.semaphore_set(id)? {
            Some(set) => {
                let elements = source.semaphore_elements(&set)?;
                let row = projector.semaphore_set(table, &set)?;
                row.set_detail(semaphore_detail(&elements));
                Ok(true)
            }
            None => Ok(false),
        },
        IpcClass::Summary => Ok(false),
    }
}
