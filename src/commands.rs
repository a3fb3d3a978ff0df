use std::fs::{self, File};
use std::io::{self, BufReader, Write};
use std::path::Path;

use crate::cli::{ListArgs, RefactorArgs};
use crate::error::TerrafactorError;
use crate::output;
use crate::terraform::{ResourceFilter, StateDocument, generate_moved_statement};

fn read_state(path: &Path) -> Result<StateDocument, TerrafactorError> {
    match fs::metadata(path) {
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            return Err(TerrafactorError::StateFileNotFound {
                path: path.to_path_buf(),
            });
        }
        _ => {}
    }

    let file = File::open(path).map_err(|source| TerrafactorError::StateFileOpen {
        path: path.to_path_buf(),
        source,
    })?;

    let state = StateDocument::load(BufReader::new(file));
    tracing::debug!(
        path = %path.display(),
        version = state.version,
        serial = state.serial,
        "terraform state loaded"
    );
    Ok(state)
}

pub fn list(args: &ListArgs, out: &mut impl Write) -> Result<(), TerrafactorError> {
    let filter = ResourceFilter::parse(&args.filter)?;
    let state = read_state(&args.tfstate)?;
    let resources = state.list_resources(&filter);

    tracing::info!(
        filter = %args.filter,
        count = resources.len(),
        "resources listed"
    );

    writeln!(out, "{}", output::state_header(&state, &args.tfstate))?;
    write!(out, "{}", output::resource_tree(&resources))?;
    Ok(())
}

pub fn refactor(args: &RefactorArgs, out: &mut impl Write) -> Result<(), TerrafactorError> {
    let filter = ResourceFilter::parse(&args.old_location)?;
    let state = read_state(&args.tfstate)?;
    let resources = state.list_resources(&filter);

    tracing::info!(
        from = %args.old_location,
        to = %args.new_location,
        count = resources.len(),
        "generating moved statements"
    );

    for resource in resources {
        let statement = generate_moved_statement(resource, &args.new_location);
        if statement.is_empty() {
            tracing::debug!(resource = %resource, "resource has no instances, nothing to move");
            continue;
        }
        write!(out, "{statement}")?;
    }
    Ok(())
}

pub fn version(out: &mut impl Write) -> Result<(), TerrafactorError> {
    writeln!(
        out,
        "{} {}",
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION")
    )?;
    Ok(())
}
