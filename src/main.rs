//! Demo run of the library catalog.
//!
//! Walks a small catalog through the full loan lifecycle and persists a
//! snapshot along the way. Set `RUST_LOG` to adjust log verbosity.

use library_catalog::{CatalogError, LibraryCatalog, TransitionLogger};
use tracing_subscriber::EnvFilter;

/// Build the demo catalog and drive it through the loan lifecycle
fn main() -> Result<(), CatalogError> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Create a new catalog and register the transition logger
    let mut catalog = LibraryCatalog::new();
    catalog.register_observer(Box::new(TransitionLogger));

    // Stock the shelves and register a couple of borrowers
    catalog.add_book("The Rust Programming Language", "Steve Klabnik", "QA76.73.R87")?;
    catalog.add_book("Programming Rust", "Jim Blandy", "QA76.73.P76")?;
    catalog.add_book("Rust for Rustaceans", "Jon Gjengset", "QA76.73.R88")?;
    catalog.add_borrower("Ada", "Lovelace", "ada@example.org", "555-0100")?;
    catalog.add_borrower("Grace", "Hopper", "grace@example.org", "555-0101")?;
    println!("Catalog: {catalog}");

    println!("\nBooks:");
    print!("{}", catalog.get_book_csv());
    println!("\nBorrowers:");
    print!("{}", catalog.get_borrower_csv());

    // Ada checks out a book
    println!("\nCheckout: {}", catalog.checkout("QA76.73.R87", "ada@example.org"));
    println!("Due date: {:?}", catalog.get_due_date("QA76.73.R87"));

    // The one permitted renewal succeeds; the second is rejected
    println!("Renew: {}", catalog.renew("QA76.73.R87"));
    println!("Renew again: {}", catalog.renew("QA76.73.R87"));
    println!("Due date: {:?}", catalog.get_due_date("QA76.73.R87"));

    // Ada brings the book back, and Grace takes it out
    println!("Return: {}", catalog.return_book("QA76.73.R87"));
    println!("Checkout again: {}", catalog.checkout("QA76.73.R87", "grace@example.org"));

    // Snapshot to disk, then simulate a restart by loading it back
    let path = std::env::temp_dir().join("library-catalog-demo.json");
    catalog.write_to_file(&path)?;
    println!("\nSnapshot written to {}", path.display());

    let restored = LibraryCatalog::read_from_file(&path)?;
    println!("Restored catalog: {restored}");

    Ok(())
}
