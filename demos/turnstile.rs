//! Turnstile State Machine
//!
//! A coin-operated turnstile: a coin unlocks it, a push locks it again.
//! Pushing a locked turnstile or paying into an unlocked one changes nothing,
//! which is modelled with self-loops.
//!
//! Run with: cargo run --example turnstile
//! Set RUST_LOG=debug to see every definition and evaluation step.

use fsmgraph::builder::eq;
use fsmgraph::{Machine, MachineError, Value};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), MachineError> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let mut machine: Machine<Value> = Machine::new();

    let locked = machine.initialize("locked".into());
    let unlocked = machine.define_state("unlocked".into());

    machine.connect(&locked, &unlocked, eq("coin"))?;
    machine.connect(&unlocked, &locked, eq("push"))?;

    machine.connect(&locked, &locked, eq("push"))?;
    machine.connect(&unlocked, &unlocked, eq("coin"))?;

    println!("Initial state is ------- {locked}");

    machine
        .run_with(["coin", "push"], |state| println!("{state}"))
        .map_err(|err| {
            eprintln!("sorry, {err}");
            err
        })?;

    if let Some(last) = machine.current() {
        println!("------------ Final state is {last}");
    }

    Ok(())
}
