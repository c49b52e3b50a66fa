use bankledger::{Ledger, LedgerError, LedgerEvent};
use bankledger_events::{EventSink, InMemoryEventSink};

fn balance<S: EventSink<LedgerEvent>>(ledger: &Ledger<S>, name: &str) -> f64 {
    ledger.get_customer_by_name(name).unwrap().balance()
}

#[test]
fn transfer_then_interest_end_to_end() {
    let sink = InMemoryEventSink::<LedgerEvent>::new();
    let mut ledger = Ledger::new(&sink);

    ledger.add_customer("John Doe", 1000.0).unwrap();
    ledger.add_customer("Jane Smith", 500.0).unwrap();

    ledger.transfer_funds("John Doe", "Jane Smith", 200.0).unwrap();
    assert_eq!(balance(&ledger, "John Doe"), 800.0);
    assert_eq!(balance(&ledger, "Jane Smith"), 700.0);

    let report = ledger.calculate_interest(3.0).unwrap();
    assert_eq!(report.credited.len(), 2);

    assert_eq!(balance(&ledger, "John Doe"), 824.0);
    assert_eq!(balance(&ledger, "Jane Smith"), 721.0);

    let notifications: Vec<String> = sink.events().iter().map(ToString::to_string).collect();
    assert_eq!(
        notifications,
        vec![
            "New customer added: John Doe",
            "New customer added: Jane Smith",
            "John Doe withdrew $200",
            "Jane Smith deposited $200",
            "Transferred $200 from John Doe to Jane Smith",
            "John Doe deposited $24",
            "John Doe earned interest of $24",
            "Jane Smith deposited $21",
            "Jane Smith earned interest of $21",
        ]
    );
}

#[test]
fn failed_step_stops_the_run() {
    let sink = InMemoryEventSink::<LedgerEvent>::new();
    let mut ledger = Ledger::new(&sink);
    ledger.add_customer("John Doe", 1000.0).unwrap();

    let err = ledger.transfer_funds("John Doe", "Jane Smith", 200.0).unwrap_err();

    assert_eq!(err, LedgerError::NotFound("Jane Smith".to_string()));
    assert_eq!(balance(&ledger, "John Doe"), 1000.0);
    assert_eq!(sink.len(), 1);
}

#[test]
fn recorded_events_serialize_to_json() {
    let sink = InMemoryEventSink::<LedgerEvent>::new();
    let mut ledger = Ledger::new(&sink);
    ledger.add_customer("Jane Smith", 500.0).unwrap();

    let json = serde_json::to_value(sink.envelopes()).unwrap();

    assert_eq!(json[0]["sequence_number"], 1);
    assert_eq!(json[0]["event_type"], "ledger.customer.registered");
    assert_eq!(json[0]["payload"]["kind"], "customer_registered");
    assert_eq!(json[0]["payload"]["initial_deposit"], 500.0);
}

#[test]
fn unknown_source_account_stops_the_run() {
    let sink = InMemoryEventSink::<LedgerEvent>::new();
    let mut ledger = Ledger::new(&sink);
    ledger.add_customer("John Doe", 1000.0).unwrap();

    let err = ledger.transfer_funds("Nobody", "John Doe", 10.0).unwrap_err();

    assert_eq!(err, LedgerError::NotFound("Nobody".to_string()));
    assert_eq!(balance(&ledger, "John Doe"), 1000.0);
    assert_eq!(sink.len(), 1);
}
