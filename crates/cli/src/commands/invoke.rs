use credence_kernel::contract;
use credence_persistence::FileStore;
use std::path::Path;

pub fn run(store_path: &Path, function: &str, args: &[String]) -> anyhow::Result<()> {
    let mut store = FileStore::open(store_path)?;
    let payload = contract::invoke(&mut store, function, args)?;

    if payload.is_empty() {
        println!("OK");
    } else {
        println!("{}", String::from_utf8_lossy(&payload));
    }
    Ok(())
}
