//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `worklink_core` linkage.
//! - Run the lookup-and-link flow end to end against a throwaway database and
//!   show how a repeated link classifies.

use std::process::ExitCode;
use worklink_core::{classify, open_db_in_memory, AssignService, SqliteAssignmentStore};

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("worklink_cli: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    println!("worklink_core version={}", worklink_core::core_version());

    let conn = open_db_in_memory()?;
    let seed = SqliteAssignmentStore::new(&conn);
    let user = seed.insert_user("13817171612", 1)?;
    seed.insert_task("10", 0)?;

    let service = AssignService::new(SqliteAssignmentStore::new(&conn));
    for attempt in 1..=2 {
        match service.assign_task_to_user(&user.phone, "10") {
            Ok(()) => println!("attempt {attempt}: linked user {} into project 10", user.userid),
            Err(err) => {
                let kind = classify(&err);
                println!("attempt {attempt}: {} ({err})", kind.user_message());
            }
        }
    }

    Ok(())
}
