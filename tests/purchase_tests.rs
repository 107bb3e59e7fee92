use async_trait::async_trait;
use cinema_tickets::{
    AccountId, PaymentProcessor, PurchaseOrder, PurchaseRejection, Result,
    SeatReservationService, TicketError, TicketPrices, TicketService, TicketType,
    TicketTypeRequest,
};
use std::sync::{Arc, Mutex};

#[derive(Debug, Clone, PartialEq, Eq)]
enum GatewayCall {
    Payment { account_id: AccountId, amount: u64 },
    Reservation { account_id: AccountId, seats: u32 },
}

/// Shared call ledger so one list captures the order of calls across both
/// collaborators.
#[derive(Clone, Default)]
struct CallLedger {
    calls: Arc<Mutex<Vec<GatewayCall>>>,
}

impl CallLedger {
    fn record(&self, call: GatewayCall) {
        self.calls.lock().unwrap().push(call);
    }

    fn calls(&self) -> Vec<GatewayCall> {
        self.calls.lock().unwrap().clone()
    }
}

struct RecordingPayment {
    ledger: CallLedger,
    fail: bool,
}

#[async_trait]
impl PaymentProcessor for RecordingPayment {
    async fn process_payment(&self, account_id: AccountId, amount: u64) -> Result<()> {
        self.ledger.record(GatewayCall::Payment { account_id, amount });
        if self.fail {
            return Err(TicketError::IoError(std::io::Error::other(
                "payment declined",
            )));
        }
        Ok(())
    }
}

struct RecordingSeating {
    ledger: CallLedger,
    fail: bool,
}

#[async_trait]
impl SeatReservationService for RecordingSeating {
    async fn reserve_seats(&self, account_id: AccountId, seat_count: u32) -> Result<()> {
        self.ledger.record(GatewayCall::Reservation {
            account_id,
            seats: seat_count,
        });
        if self.fail {
            return Err(TicketError::IoError(std::io::Error::other(
                "no seats left",
            )));
        }
        Ok(())
    }
}

fn service_with_ledger(
    payment_fails: bool,
    seating_fails: bool,
) -> (TicketService<RecordingPayment, RecordingSeating>, CallLedger) {
    let ledger = CallLedger::default();
    let service = TicketService::new(
        TicketPrices::default(),
        RecordingPayment {
            ledger: ledger.clone(),
            fail: payment_fails,
        },
        RecordingSeating {
            ledger: ledger.clone(),
            fail: seating_fails,
        },
    );
    (service, ledger)
}

fn request(ticket_type: TicketType, count: i64) -> TicketTypeRequest {
    TicketTypeRequest::new(ticket_type, count).unwrap()
}

fn assert_rejected(err: TicketError, expected: PurchaseRejection) {
    match err {
        TicketError::InvalidPurchase { reason, .. } => assert_eq!(reason, expected),
        other => panic!("expected InvalidPurchase, got: {other:?}"),
    }
}

#[tokio::test]
async fn family_order_pays_thirty_and_reserves_two_seats() {
    let (service, ledger) = service_with_ledger(false, false);
    let tickets = vec![
        request(TicketType::Adult, 1),
        request(TicketType::Child, 1),
        request(TicketType::Infant, 1),
    ];

    service.purchase_tickets(1, &tickets).await.unwrap();

    assert_eq!(
        ledger.calls(),
        vec![
            GatewayCall::Payment {
                account_id: 1,
                amount: 30
            },
            GatewayCall::Reservation {
                account_id: 1,
                seats: 2
            },
        ]
    );
}

#[tokio::test]
async fn larger_mixed_order_reserves_eleven_seats() {
    let (service, ledger) = service_with_ledger(false, false);
    let tickets = vec![
        request(TicketType::Adult, 5),
        request(TicketType::Child, 6),
        request(TicketType::Infant, 3),
    ];

    service.purchase_tickets(1, &tickets).await.unwrap();

    assert_eq!(
        ledger.calls(),
        vec![
            GatewayCall::Payment {
                account_id: 1,
                amount: 5 * 20 + 6 * 10
            },
            GatewayCall::Reservation {
                account_id: 1,
                seats: 11
            },
        ]
    );
}

#[tokio::test]
async fn a_full_house_of_twenty_adults_is_allowed() {
    let (service, ledger) = service_with_ledger(false, false);
    let tickets = vec![request(TicketType::Adult, 20)];

    service.purchase_tickets(9, &tickets).await.unwrap();

    assert_eq!(
        ledger.calls(),
        vec![
            GatewayCall::Payment {
                account_id: 9,
                amount: 400
            },
            GatewayCall::Reservation {
                account_id: 9,
                seats: 20
            },
        ]
    );
}

#[tokio::test]
async fn custom_prices_flow_through_to_the_payment() {
    let ledger = CallLedger::default();
    let service = TicketService::new(
        TicketPrices {
            adult: 25,
            child: 15,
            infant: 0,
        },
        RecordingPayment {
            ledger: ledger.clone(),
            fail: false,
        },
        RecordingSeating {
            ledger: ledger.clone(),
            fail: false,
        },
    );

    let tickets = vec![request(TicketType::Adult, 2), request(TicketType::Child, 1)];
    service.purchase_tickets(1, &tickets).await.unwrap();

    assert_eq!(
        ledger.calls()[0],
        GatewayCall::Payment {
            account_id: 1,
            amount: 65
        }
    );
}

#[tokio::test]
async fn nonpositive_account_is_rejected_without_side_effects() {
    let (service, ledger) = service_with_ledger(false, false);
    let tickets = vec![request(TicketType::Adult, 1)];

    let err = service.purchase_tickets(0, &tickets).await.unwrap_err();

    assert_rejected(err, PurchaseRejection::AccountIdNotPositive(0));
    assert!(ledger.calls().is_empty());
}

#[tokio::test]
async fn child_only_order_needs_an_adult() {
    let (service, ledger) = service_with_ledger(false, false);
    let tickets = vec![request(TicketType::Child, 1)];

    let err = service.purchase_tickets(1, &tickets).await.unwrap_err();

    assert_rejected(err, PurchaseRejection::NoAdultTicket);
    assert!(ledger.calls().is_empty());
}

#[tokio::test]
async fn infants_may_not_outnumber_adults() {
    let (service, ledger) = service_with_ledger(false, false);
    let tickets = vec![
        request(TicketType::Adult, 9),
        request(TicketType::Infant, 11),
    ];

    let err = service.purchase_tickets(1, &tickets).await.unwrap_err();

    assert_rejected(
        err,
        PurchaseRejection::InfantsExceedAdults {
            infants: 11,
            adults: 9,
        },
    );
    assert!(ledger.calls().is_empty());
}

#[tokio::test]
async fn one_infant_per_adult_lap_is_allowed() {
    let (service, ledger) = service_with_ledger(false, false);
    let tickets = vec![
        request(TicketType::Adult, 3),
        request(TicketType::Infant, 3),
    ];

    service.purchase_tickets(1, &tickets).await.unwrap();
    assert_eq!(ledger.calls().len(), 2);
}

#[tokio::test]
async fn more_than_twenty_requests_are_rejected() {
    let (service, ledger) = service_with_ledger(false, false);
    let tickets: Vec<_> = (0..21).map(|_| request(TicketType::Adult, 1)).collect();

    let err = service.purchase_tickets(1, &tickets).await.unwrap_err();

    assert_rejected(err, PurchaseRejection::TooManyRequests(21));
    assert!(ledger.calls().is_empty());
}

#[tokio::test]
async fn more_than_twenty_tickets_in_total_are_rejected() {
    let (service, ledger) = service_with_ledger(false, false);
    let tickets = vec![
        request(TicketType::Adult, 20),
        request(TicketType::Child, 5),
    ];

    let err = service.purchase_tickets(1, &tickets).await.unwrap_err();

    assert_rejected(err, PurchaseRejection::TooManyTickets(25));
    assert!(ledger.calls().is_empty());
}

#[tokio::test]
async fn empty_ticket_list_is_a_business_rule_violation() {
    let (service, ledger) = service_with_ledger(false, false);

    let err = service.purchase_tickets(1, &[]).await.unwrap_err();

    assert_rejected(err, PurchaseRejection::EmptyOrder);
    assert!(ledger.calls().is_empty());
}

#[tokio::test]
async fn missing_ticket_collection_is_its_own_failure_kind() {
    let (service, ledger) = service_with_ledger(false, false);
    let order = PurchaseOrder {
        account_id: 1,
        tickets: None,
    };

    let err = service.purchase(&order).await.unwrap_err();

    assert!(matches!(err, TicketError::MissingRequests));
    assert!(ledger.calls().is_empty());
}

#[tokio::test]
async fn rejection_carries_the_account_and_request_snapshot() {
    let (service, _ledger) = service_with_ledger(false, false);
    let tickets = vec![
        request(TicketType::Child, 2),
        request(TicketType::Infant, 1),
    ];

    let err = service.purchase_tickets(42, &tickets).await.unwrap_err();

    match err {
        TicketError::InvalidPurchase {
            account_id,
            requests,
            ..
        } => {
            assert_eq!(account_id, 42);
            assert_eq!(requests, tickets);
        }
        other => panic!("expected InvalidPurchase, got: {other:?}"),
    }
}

#[tokio::test]
async fn failed_payment_suppresses_the_reservation() {
    let (service, ledger) = service_with_ledger(true, false);
    let tickets = vec![request(TicketType::Adult, 2)];

    let err = service.purchase_tickets(1, &tickets).await.unwrap_err();

    assert!(matches!(err, TicketError::IoError(_)));
    assert_eq!(
        ledger.calls(),
        vec![GatewayCall::Payment {
            account_id: 1,
            amount: 40
        }]
    );
}

#[tokio::test]
async fn failed_reservation_propagates_after_payment_went_out() {
    let (service, ledger) = service_with_ledger(false, true);
    let tickets = vec![request(TicketType::Adult, 2)];

    let err = service.purchase_tickets(1, &tickets).await.unwrap_err();

    assert!(matches!(err, TicketError::IoError(_)));
    // Payment is not rolled back; both calls stay on the ledger.
    assert_eq!(ledger.calls().len(), 2);
}

#[tokio::test]
async fn order_with_tickets_present_goes_through_purchase() {
    let (service, ledger) = service_with_ledger(false, false);
    let order = PurchaseOrder {
        account_id: 5,
        tickets: Some(vec![request(TicketType::Adult, 1)]),
    };

    service.purchase(&order).await.unwrap();
    assert_eq!(ledger.calls().len(), 2);
}
