use crate::core::{ImportStats, OutletBackend, OutletRecord, UpsertOutcome};

/// Drives both upserts for every loaded record, in row order. The two calls
/// per record are independent: a failed outlet upsert never blocks the user
/// attempt, and nothing is rolled back on partial success.
pub struct ImportEngine<B: OutletBackend> {
    backend: B,
    default_password: String,
}

impl<B: OutletBackend> ImportEngine<B> {
    pub fn new(backend: B, default_password: String) -> Self {
        Self {
            backend,
            default_password,
        }
    }

    pub async fn run(&self, records: &[OutletRecord]) -> ImportStats {
        let total = records.len();
        let mut stats = ImportStats::default();

        for (i, record) in records.iter().enumerate() {
            let position = i + 1;
            println!(
                "\n[{}/{}] Processing: {} - {}",
                position, total, record.store_code, record.short_name
            );

            let outcome = self.backend.upsert_outlet(record).await;
            match &outcome {
                UpsertOutcome::Created => println!("  ✓ Outlet created"),
                UpsertOutcome::AlreadyExists => println!("  ✓ Outlet already exists"),
                UpsertOutcome::Failed(reason) => println!("  ✗ Outlet failed: {}", reason),
            }
            stats.record_outlet(&outcome);

            let outcome = self.backend.upsert_user(record).await;
            match &outcome {
                UpsertOutcome::Created => println!(
                    "  ✓ User created (username: {}, password: {})",
                    record.short_name, self.default_password
                ),
                UpsertOutcome::AlreadyExists => println!("  ✓ User already exists"),
                UpsertOutcome::Failed(reason) => println!("  ✗ User failed: {}", reason),
            }
            stats.record_user(&outcome);

            if position % 100 == 0 {
                println!(
                    "\n--- Progress: {}/{} outlets processed ---",
                    position, total
                );
            }
        }

        stats.processed = total;
        stats
    }
}

/// Final summary block, the tool's only aggregate output surface.
pub fn print_summary(stats: &ImportStats, skipped_rows: usize, default_password: &str) {
    println!("\n{}", "=".repeat(80));
    println!("IMPORT SUMMARY");
    println!("{}", "=".repeat(80));
    println!("Total outlets processed: {}", stats.processed);
    if skipped_rows > 0 {
        println!("Rows skipped (incomplete): {}", skipped_rows);
    }
    println!("\nOutlets:");
    println!("  Created:        {}", stats.outlets_created);
    println!("  Already exists: {}", stats.outlets_exists);
    println!("  Failed:         {}", stats.outlets_failed);
    println!("\nUsers:");
    println!("  Created:        {}", stats.users_created);
    println!("  Already exists: {}", stats.users_exists);
    println!("  Failed:         {}", stats.users_failed);
    println!("\n{}", "=".repeat(80));
    println!("✓ Import completed!");
    println!("Default password for all outlets: {}", default_password);
    println!("{}", "=".repeat(80));
}
