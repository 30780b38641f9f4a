//! Basic usage of SQL Fiddler
//!
//! Builds a product listing query from a (simulated) query string.
//!
//! Run with: cargo run --example basic_usage

use sql_fiddler::prelude::*;
use std::collections::HashMap;

fn main() -> anyhow::Result<()> {
    let fiddler = SqlFiddler::new()
        .configure_search("p.title LIKE :search", "search")
        .configure_order_by(HashMap::from([
            ("_default".to_string(), "p.id DESC".to_string()),
            ("title".to_string(), "p.title ASC".to_string()),
            ("cheapest".to_string(), "p.price ASC".to_string()),
        ]))
        .configure_page_length(HashMap::from([
            ("_default".to_string(), 20),
            ("50".to_string(), 50),
        ]));

    let request: FiddlerRequest = serde_json::from_str(
        r#"{ "search": "50%_off", "order_by": "cheapest", "page_length": "50", "page": "2" }"#,
    )?;
    let fragments = fiddler.build(&request)?;

    println!(
        "SELECT * FROM product p WHERE {} ORDER BY {} {}",
        fragments.where_clause,
        fragments.order_by,
        fragments.pagination.to_sql()
    );
    for (marker, value) in &fragments.markers {
        println!("  bind {} = {}", marker, value);
    }

    // Anything outside the allow-list is rejected instead of reaching SQL
    match fiddler.resolve_order_by(Some("price; DROP TABLE product")) {
        Ok(order_by) => println!("Unexpected order by: {}", order_by),
        Err(err) => println!("Rejected: {}", err),
    }

    Ok(())
}
