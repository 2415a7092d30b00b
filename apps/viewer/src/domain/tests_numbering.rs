use crate::domain::numbering::ObjectiveNumbering;
use crate::domain::{Task, TaskKind, TaskKindTag};

fn tasks(kinds: &[TaskKind]) -> Vec<Task> {
    kinds
        .iter()
        .enumerate()
        .map(|(i, kind)| Task::new(i.to_string(), *kind))
        .collect()
}

#[test]
fn empty_list_starts_at_one() {
    let n = ObjectiveNumbering::from_tasks(&[]);
    assert_eq!(n.next_absolute, 1);
    assert_eq!(n.next_relative, 1);
    assert!(!n.have_last);
}

#[test]
fn next_is_one_past_the_max_per_kind() {
    let list = tasks(&[
        TaskKind::Absolute(1),
        TaskKind::Absolute(4),
        TaskKind::Relative(2),
    ]);
    let n = ObjectiveNumbering::from_tasks(&list);
    assert_eq!(n.next_absolute, 5);
    assert_eq!(n.next_relative, 3);
    assert!(!n.have_last);
}

#[test]
fn adding_last_flips_have_last() {
    let mut list = tasks(&[TaskKind::Absolute(1), TaskKind::Anytime]);
    assert!(!ObjectiveNumbering::from_tasks(&list).have_last);

    list.push(Task::new("last", TaskKind::Last));
    let n = ObjectiveNumbering::from_tasks(&list);
    assert!(n.have_last);
    assert!(!n.can_add(TaskKindTag::Last));
    assert!(n.can_add(TaskKindTag::Absolute));
}

#[test]
fn two_last_tasks_still_disable_the_affordance() {
    let list = tasks(&[TaskKind::Last, TaskKind::Last]);
    let n = ObjectiveNumbering::from_tasks(&list);
    assert!(n.have_last);
    assert!(!n.affordance(TaskKindTag::Last).enabled);
}

#[test]
fn malformed_orders_count_as_absent() {
    // Order 0 is what the decoder produces for negative or non-integer orders.
    let list = tasks(&[TaskKind::Absolute(0), TaskKind::Relative(0)]);
    let n = ObjectiveNumbering::from_tasks(&list);
    assert_eq!(n.next_absolute, 1);
    assert_eq!(n.next_relative, 1);

    let list = tasks(&[TaskKind::Absolute(0), TaskKind::Absolute(3)]);
    assert_eq!(ObjectiveNumbering::from_tasks(&list).next_absolute, 4);
}

#[test]
fn anytime_and_last_do_not_affect_orders() {
    let list = tasks(&[TaskKind::Anytime, TaskKind::Last, TaskKind::Anytime]);
    let n = ObjectiveNumbering::from_tasks(&list);
    assert_eq!((n.next_absolute, n.next_relative), (1, 1));
}

#[test]
fn affordances_in_display_order() {
    let list = tasks(&[TaskKind::Absolute(2), TaskKind::Relative(1), TaskKind::Last]);
    let buttons = ObjectiveNumbering::from_tasks(&list).affordances();

    let labels: Vec<&str> = buttons.iter().map(|b| b.label.as_str()).collect();
    assert_eq!(labels, vec!["Add", "Add 3", "Add <<", "Add Ω"]);

    let kinds: Vec<TaskKind> = buttons.iter().map(|b| b.kind).collect();
    assert_eq!(
        kinds,
        vec![
            TaskKind::Anytime,
            TaskKind::Absolute(3),
            TaskKind::Relative(2),
            TaskKind::Last
        ]
    );

    let enabled: Vec<bool> = buttons.iter().map(|b| b.enabled).collect();
    assert_eq!(enabled, vec![true, true, true, false]);
}
