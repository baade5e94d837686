use credence_kernel::contract;
use credence_persistence::FileStore;
use std::path::Path;

pub fn run(store_path: &Path, function: &str, args: &[String]) -> anyhow::Result<()> {
    let store = FileStore::open(store_path)?;
    let payload = contract::query(&store, function, args)?;

    if payload.is_empty() {
        println!("<empty>");
    } else {
        println!("{}", String::from_utf8_lossy(&payload));
    }
    Ok(())
}
