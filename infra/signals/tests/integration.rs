use pcx_signals::{SignalError, SignalHub, SignalReceiverExt};
use std::time::Duration;

#[derive(Clone, Debug, PartialEq, Eq)]
struct Flag(bool);

#[derive(Clone, Debug, PartialEq, Eq)]
struct Counter(u32);

#[test]
fn second_publisher_is_rejected_while_first_is_alive() {
    let hub = SignalHub::new();
    let _first = hub.register("identity", Flag(false)).unwrap();

    let err = hub.register("intruder", Flag(true)).unwrap_err();
    assert!(matches!(err, SignalError::AlreadyOwned { .. }));
    assert_eq!(hub.owner_of::<Flag>(), Some("identity"));
    assert_eq!(hub.subscribe::<Flag>().unwrap().borrow().clone(), Flag(false), "rejected owner must not write");
}

#[test]
fn slot_can_be_reclaimed_after_publisher_drops() {
    let hub = SignalHub::new();
    let first = hub.register("first", Flag(false)).unwrap();
    drop(first);

    assert_eq!(hub.owner_of::<Flag>(), None);
    let second = hub.register("second", Flag(true)).unwrap();
    assert_eq!(second.owner(), "second");
    assert_eq!(hub.subscribe::<Flag>().unwrap().borrow().clone(), Flag(true));
}

#[test]
fn subscribing_to_unknown_signal_fails() {
    let hub = SignalHub::new();
    let err = hub.subscribe::<Flag>().unwrap_err();
    assert!(matches!(err, SignalError::NotRegistered { .. }));
}

#[test]
fn unchanged_values_do_not_notify() {
    let hub = SignalHub::new();
    let publisher = hub.register("counter", Counter(1)).unwrap();
    let rx = hub.subscribe::<Counter>().unwrap();

    assert!(!publisher.publish(Counter(1)));
    assert!(!rx.has_changed().unwrap());

    assert!(publisher.publish(Counter(2)));
    assert!(rx.has_changed().unwrap());
}

#[test]
fn signal_types_are_isolated() {
    let hub = SignalHub::new();
    let flag = hub.register("flag", Flag(false)).unwrap();
    let _counter = hub.register("counter", Counter(0)).unwrap();

    flag.publish(Flag(true));

    assert_eq!(hub.subscribe::<Flag>().unwrap().borrow().clone(), Flag(true));
    assert_eq!(hub.subscribe::<Counter>().unwrap().borrow().clone(), Counter(0));
}

#[tokio::test]
async fn receivers_observe_the_latest_value() {
    let hub = SignalHub::new();
    let publisher = hub.register("counter", Counter(0)).unwrap();
    let mut rx = hub.subscribe::<Counter>().unwrap();
    assert_eq!(publisher.subscribers(), 1);

    publisher.publish(Counter(1));
    publisher.publish(Counter(2));

    assert_eq!(rx.next_value().await, Some(Counter(2)));
    assert!(!rx.has_changed().unwrap(), "next_value marks the value as seen");
}

#[tokio::test]
async fn dropping_the_publisher_closes_receivers() {
    let hub = SignalHub::new();
    let publisher = hub.register("flag", Flag(false)).unwrap();
    let mut rx = hub.subscribe::<Flag>().unwrap();

    drop(publisher);

    let next = tokio::time::timeout(Duration::from_secs(1), rx.next_value())
        .await
        .expect("closed receiver resolves immediately");
    assert_eq!(next, None);
}
