//! # Seed Data Generator
//!
//! Populates the database with a small sample catalog for development.
//!
//! ## Usage
//! ```bash
//! # Seed the default database
//! cargo run -p stockroom-db --bin seed
//!
//! # Specify database path
//! cargo run -p stockroom-db --bin seed -- --db ./data/stockroom.db
//! ```

use std::env;

use stockroom_core::Product;
use stockroom_db::{Database, DbConfig};

/// Sample catalog: (name, supplier, price_cents, stock, image).
const SAMPLE_PRODUCTS: &[(&str, &str, i64, i64, Option<&str>)] = &[
    ("T-Shirt", "Nike", 1999, 50, Some("product1.jpg")),
    ("Laptop", "Dell", 59999, 10, Some("product2.jpg")),
    ("Watch", "Casio", 4999, 30, None),
];

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = env::args().collect();

    let mut db_path = String::from("./stockroom_dev.db");

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--db" | "-d" => {
                if i + 1 < args.len() {
                    db_path = args[i + 1].clone();
                    i += 1;
                }
            }
            "--help" | "-h" => {
                println!("Stockroom Seed Data Generator");
                println!();
                println!("Usage: seed [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -d, --db <PATH>    Database file path (default: ./stockroom_dev.db)");
                println!("  -h, --help         Show this help message");
                return Ok(());
            }
            _ => {}
        }
        i += 1;
    }

    println!("🌱 Stockroom Seed Data Generator");
    println!("================================");
    println!("Database: {}", db_path);
    println!();

    let config = DbConfig::new(&db_path);
    let db = Database::new(config).await?;

    println!("✓ Connected to database");
    println!("✓ Migrations applied");

    // Seeding twice would duplicate the catalog; bail if anything exists.
    let existing = db.products().count().await?;
    if existing > 0 {
        println!("⚠ Database already has {} products", existing);
        println!("  Skipping seed to avoid duplicates.");
        println!("  Delete the database file to regenerate.");
        return Ok(());
    }

    println!();
    println!("Seeding sample products...");

    for (name, supplier, price_cents, stock, image) in SAMPLE_PRODUCTS {
        let product = Product::new(
            *name,
            *supplier,
            *price_cents,
            *stock,
            image.map(str::to_string),
        );
        db.products().insert(&product).await?;
        println!(
            "  + {} ({}) @ {} / stock {}",
            product.name,
            product.supplier,
            product.price(),
            product.stock
        );
    }

    println!();
    println!("✓ Seed complete! {} products", SAMPLE_PRODUCTS.len());

    Ok(())
}
