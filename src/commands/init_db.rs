//! Create the datastore and every sport's tables

use crate::{config::resolve_database_path, storage::Datastore, Result};
use std::path::PathBuf;

pub fn handle_init_db(database: Option<PathBuf>) -> Result<PathBuf> {
    let path = resolve_database_path(database)?;
    let store = Datastore::open(&path)?;
    store.ping()?;
    println!("✓ Database ready at {}", path.display());
    Ok(path)
}
