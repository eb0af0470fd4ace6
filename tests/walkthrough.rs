//! End-to-end ticket workflow: Initial -> Backlog -> Progress.

use statekeeper::core::{Arg, StateId};
use statekeeper::{args, Machine, MachineBuilder, MachineError, Rule};

fn equal_integers(args: &[Arg]) -> bool {
    match args {
        [a, b] => matches!((a.as_int(), b.as_int()), (Some(a), Some(b)) if a == b),
        _ => false,
    }
}

fn id(name: &str) -> StateId {
    StateId::from(name)
}

fn ticket_machine() -> Machine<StateId> {
    let mut machine = Machine::new(id("Initial"), [id("Backlog"), id("Progress")]);
    machine
        .add_rule(Rule::unconditional(id("Initial"), id("Backlog")))
        .unwrap();
    machine
        .add_rule(Rule::conditional(id("Backlog"), id("Progress"), equal_integers))
        .unwrap();
    machine
}

#[test]
fn ticket_workflow_walkthrough() {
    let mut machine = ticket_machine();
    assert_eq!(machine.state(), &id("Initial"));

    let err = machine.transition(&id("Canceled"), &[]).unwrap_err();
    assert_eq!(
        err,
        MachineError::StateNotFound {
            state: "Canceled".to_string()
        }
    );
    assert_eq!(machine.state(), &id("Initial"));

    let err = machine.transition(&id("Progress"), &[]).unwrap_err();
    assert!(matches!(err, MachineError::TransitionNotAllowed { .. }));
    assert_eq!(machine.state(), &id("Initial"));

    machine.transition(&id("Backlog"), &[]).unwrap();
    assert_eq!(machine.state(), &id("Backlog"));

    let attempts = [args![], args![10, 15], args![10.0, 10]];
    for attempt in &attempts {
        let err = machine.transition(&id("Progress"), attempt).unwrap_err();
        assert_eq!(
            err,
            MachineError::TransitionNotAllowed {
                from: "Backlog".to_string(),
                to: "Progress".to_string(),
            }
        );
        assert_eq!(machine.state(), &id("Backlog"));
    }

    machine.transition(&id("Progress"), &args![10, 10]).unwrap();
    assert_eq!(machine.state(), &id("Progress"));
}

#[test]
fn machine_is_locked_after_first_attempt() {
    let mut machine = ticket_machine();
    assert!(!machine.is_final());

    assert!(machine.transition(&id("Canceled"), &[]).is_err());
    assert!(machine.is_final());

    let err = machine
        .add_rule(Rule::unconditional(id("Progress"), id("Initial")))
        .unwrap_err();
    assert_eq!(err, MachineError::AlreadyFinalized);
    assert_eq!(machine.rules().len(), 2);
}

#[test]
fn builder_produces_equivalent_machine() {
    let mut machine = MachineBuilder::new()
        .initial(id("Initial"))
        .states([id("Backlog"), id("Progress")])
        .rule(Rule::unconditional(id("Initial"), id("Backlog")))
        .rule(Rule::conditional(id("Backlog"), id("Progress"), equal_integers))
        .build()
        .unwrap();

    machine.transition(&id("Backlog"), &[]).unwrap();
    machine.transition(&id("Progress"), &args![7, 7]).unwrap();
    assert_eq!(machine.state(), &id("Progress"));
}

#[test]
fn self_transition_without_rules() {
    let mut machine: Machine<StateId> = Machine::new(id("Solo"), []);

    machine.transition(&id("Solo"), &args![1, "x"]).unwrap();
    assert_eq!(machine.state(), &id("Solo"));
    assert!(machine.is_final());
}

#[test]
fn failed_add_rule_leaves_machine_usable() {
    let mut machine = ticket_machine();

    assert!(machine
        .add_rule(Rule::unconditional(id("Backlog"), id("Done")))
        .is_err());
    assert_eq!(machine.rules().len(), 2);
    assert!(!machine.is_final());

    machine.transition(&id("Backlog"), &[]).unwrap();
    assert_eq!(machine.state(), &id("Backlog"));
}
