//! Order Workflow
//!
//! A checkout pipeline with a closed set of steps, built through
//! `MachineBuilder` and post-processed with the outcome algebra.
//!
//! Key concepts:
//! - `step_labels!` for an exhaustive label enum
//! - `require_all` to reject machines that skip a label
//! - Domain failures carried in the state, step failures in `RunError`
//!
//! Run with: RUST_LOG=waypoint=debug cargo run --example order_workflow

use tracing_subscriber::EnvFilter;
use waypoint::builder::{finish, MachineBuilder};
use waypoint::machine::continue_to;
use waypoint::{step_labels, Outcome};

step_labels! {
    enum Checkout {
        Validate,
        Price,
        Charge,
        Done,
    }
}

#[derive(Clone, Debug)]
struct Order {
    items: Vec<(String, u32)>,
    total_cents: u32,
    paid: bool,
    rejected: Option<String>,
}

impl Order {
    fn new(items: &[(&str, u32)]) -> Self {
        Self {
            items: items.iter().map(|(n, p)| (n.to_string(), *p)).collect(),
            total_cents: 0,
            paid: false,
            rejected: None,
        }
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== Order Workflow Example ===\n");

    let checkout = MachineBuilder::new()
        .name("checkout")
        .first(Checkout::Validate)
        .step(Checkout::Validate, |order: Order| {
            if order.items.is_empty() {
                continue_to(
                    Checkout::Done,
                    Order {
                        rejected: Some("empty cart".to_string()),
                        ..order
                    },
                )
            } else {
                continue_to(Checkout::Price, order)
            }
        })
        .step(Checkout::Price, |order: Order| {
            let total_cents = order.items.iter().map(|(_, price)| price).sum();
            continue_to(Checkout::Charge, Order { total_cents, ..order })
        })
        .step(Checkout::Charge, |order: Order| {
            continue_to(Checkout::Done, Order { paid: true, ..order })
        })
        .add_step(Checkout::Done, finish())
        .require_all(Checkout::ALL)
        .build_or_panic();

    for items in [vec![("book", 1_250), ("pen", 199)], vec![]] {
        let receipt: Outcome<String, String> = checkout
            .run(Order::new(&items))
            .map_error(|e| e.to_string())
            .and_then(|order| match order.rejected {
                Some(reason) => Outcome::error(reason),
                None => Outcome::ok(order),
            })
            .keep_if(|order| order.paid, "payment missing".to_string())
            .map(|order| format!("charged {} cents", order.total_cents));

        println!(
            "{}",
            receipt.either(|e| format!("rejected: {e}"), |msg| msg)
        );
    }

    let incomplete = MachineBuilder::<Checkout, Order>::new()
        .first(Checkout::Validate)
        .add_step(Checkout::Validate, finish())
        .require_all(Checkout::ALL)
        .build();
    if let Some(errors) = incomplete.error_value() {
        println!("\nIncomplete machine rejected with {} errors:", errors.len());
        for error in errors.iter() {
            println!("  - {error}");
        }
    }

    println!("\n=== Example Complete ===");
}
