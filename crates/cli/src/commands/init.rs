use credence_kernel::contract;
use credence_persistence::FileStore;
use std::path::Path;

pub fn run(store_path: &Path, marker: &str) -> anyhow::Result<()> {
    let mut store = FileStore::open(store_path)?;
    contract::init(&mut store, &[marker.to_string()])?;
    println!("Ledger state initialized at {}", store_path.display());
    Ok(())
}
