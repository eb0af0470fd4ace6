//! Ticket Workflow
//!
//! Walks a three-state ticket workflow through a series of transition
//! attempts and prints each outcome.
//!
//! - Initial -> Backlog is unconditional
//! - Backlog -> Progress requires two equal integer arguments
//! - Canceled is never declared, so moving there always fails
//!
//! Run with: RUST_LOG=statekeeper=debug cargo run --example workflow

use statekeeper::core::{Arg, StateId};
use statekeeper::{args, Machine, MachineError, Rule};
use tracing_subscriber::EnvFilter;

fn equal_integers(args: &[Arg]) -> bool {
    match args {
        [a, b] => matches!((a.as_int(), b.as_int()), (Some(a), Some(b)) if a == b),
        _ => false,
    }
}

fn report(result: Result<(), MachineError>, machine: &Machine<StateId>) {
    match result {
        Ok(()) => println!("[transition] ok"),
        Err(e) => println!("[transition] {}", e),
    }
    println!("[state] {}", machine.state());
}

fn main() -> Result<(), MachineError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== Ticket Workflow Example ===\n");

    let initial = StateId::from("Initial");
    let backlog = StateId::from("Backlog");
    let progress = StateId::from("Progress");
    let canceled = StateId::from("Canceled");

    let mut machine = Machine::new(initial.clone(), [backlog.clone(), progress.clone()]);
    machine.add_rule(Rule::unconditional(initial, backlog.clone()))?;
    machine.add_rule(Rule::conditional(
        backlog.clone(),
        progress.clone(),
        equal_integers,
    ))?;
    println!("[state] {}", machine.state());

    // Undeclared target
    report(machine.transition(&canceled, &[]), &machine);

    // No rule for Initial -> Progress
    report(machine.transition(&progress, &[]), &machine);

    // Unconditional rule
    report(machine.transition(&backlog, &[]), &machine);

    // Conditional rule: wrong arity, unequal values, wrong kind
    report(machine.transition(&progress, &[]), &machine);
    report(machine.transition(&progress, &args![10, 15]), &machine);
    report(machine.transition(&progress, &args![10.0, 10]), &machine);

    // Conditional rule satisfied
    report(machine.transition(&progress, &args![10, 10]), &machine);

    println!("\n=== Example Complete ===");
    Ok(())
}
