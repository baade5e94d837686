use comfy_table::Table;
use credence_kernel::repository::{self, storage_key};
use credence_kernel::store::StateStore;
use credence_kernel::types::repository::{AppliedDegreeRepository, CompletedDegreeRepository};
use credence_kernel::verify;
use credence_persistence::FileStore;
use std::path::Path;

pub fn run(store_path: &Path, govt_id: &str) -> anyhow::Result<()> {
    let store = FileStore::open(store_path)?;

    println!("Person {}", govt_id);
    print_key_summary(&store, govt_id)?;
    print_key_summary(&store, &storage_key::<CompletedDegreeRepository>(govt_id))?;
    print_key_summary(&store, &storage_key::<AppliedDegreeRepository>(govt_id))?;

    let completed: CompletedDegreeRepository = repository::load(&store, govt_id)?;
    let applied: AppliedDegreeRepository = repository::load(&store, govt_id)?;

    println!("\nCompleted degrees ({})", completed.completed_degrees.len());
    let mut table = Table::new();
    table.set_header(vec![
        "DegreeName",
        "InstituteID",
        "DegreeID",
        "PassingYear",
        "Percentage",
        "RollNo",
        "Grade",
        "Type",
    ]);
    for degree in &completed.completed_degrees {
        table.add_row(vec![
            degree.degree_name.clone(),
            degree.institute_id.to_string(),
            degree.degree_id.to_string(),
            degree.passing_year.clone(),
            degree.percentage.to_string(),
            degree.roll_no.to_string(),
            degree.grade.clone(),
            degree.degree_type.clone(),
        ]);
    }
    println!("{table}");

    println!("\nApplied degrees ({})", applied.applied_degrees.len());
    let mut table = Table::new();
    table.set_header(vec![
        "DegreeName",
        "AppliedInstituteID",
        "PreRequisiteDegree",
        "CompletedInstituteID",
        "Approved",
    ]);
    for degree in &applied.applied_degrees {
        table.add_row(vec![
            degree.degree_name.clone(),
            degree.applied_institute_id.to_string(),
            degree.pre_requisite_degree.clone(),
            degree.completed_institute_id.to_string(),
            degree.approved.to_string(),
        ]);
    }
    println!("{table}");

    Ok(())
}

fn print_key_summary(store: &FileStore, key: &str) -> anyhow::Result<()> {
    match store.get(key)? {
        Some(bytes) => println!(
            "  {}: {} bytes, blake3 {}",
            key,
            bytes.len(),
            verify::digest_hex(&verify::state_digest(&bytes))
        ),
        None => println!("  {}: <absent>", key),
    }
    Ok(())
}
