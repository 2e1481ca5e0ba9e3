//! Basic usage example for nebula-watch

use nebula_watch::prelude::*;

fn main() {
    // Create a validator for non-negative integers
    let age = instance_of(Kind::Int) & greater_or_equal(0);

    // Bind it to a field
    let person = HostType::builder("Person").field("age", age).build();
    let mut alice = person.instantiate();

    match alice.set("age", 30) {
        Ok(()) => println!("✓ age = 30 accepted"),
        Err(e) => println!("✗ Error: {e}"),
    }

    match alice.set("age", "thirty") {
        Ok(()) => println!("✓ age = \"thirty\" accepted"),
        Err(e) => println!("✗ {e}"),
    }

    if let Ok(age) = alice.get("age") {
        println!("age is still {age}");
    }

    println!("\nnebula-watch is working correctly!");
}
