//! Address book demo driver.
//!
//! Builds a handful of sample records and exercises lookup, deletion,
//! and paginated iteration. The library is the product; this binary is
//! just an example caller.

use address_book::{AddressBook, Record};
use anyhow::Result;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Initialize logging (stderr only, so stdout stays clean for output)
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let mut book = AddressBook::new();

    let mut record = Record::with_birthday("John Doe", "1990-05-15")?;
    record.add_phone("1234567890")?;
    record.add_phone("9876543210")?;
    book.add_record(record);

    let mut record = Record::new("Jane Smith");
    record.add_phone("5551112233")?;
    book.add_record(record);

    let mut record = Record::with_birthday("Bob Johnson", "1985-12-03")?;
    record.add_phone("7778889999")?;
    book.add_record(record);

    info!(records = book.len(), "sample address book built");

    println!("Address Book:");
    println!("{}", book);

    let search_name = "John Doe";
    match book.find(search_name) {
        Some(record) => {
            println!("\nRecord found for {}:", search_name);
            println!("{}", record);
            if let Some(countdown) = record.days_to_birthday() {
                println!("{}", countdown);
            }
        }
        None => println!("\nNo record found for {}", search_name),
    }

    let delete_name = "Jane Smith";
    book.delete(delete_name);
    println!("\nDeleted record for {}. Updated address book:", delete_name);
    println!("{}", book);

    println!("\nAddress Book Iteration:");
    for page in book.iterate(2)? {
        println!("{}\n", page);
    }

    Ok(())
}
