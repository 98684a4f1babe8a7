mod common;

use common::{Backend, table};
use shared::models::{RestaurantTable, TableStatus};

fn seeded() -> Backend {
    Backend::new().with_tables(vec![
        table("t2", 2, "reserved", Some("Okafor")),
        table("t1", 1, "available", None),
    ])
}

#[tokio::test]
async fn freeing_a_table_shows_what_the_server_returned() {
    let backend = seeded();
    let (mut screen, notifier) = backend.screen::<RestaurantTable>();
    screen.load().await.unwrap();
    assert_eq!(screen.list().items()[0].number, 1);

    let saved = screen
        .set_table_status("t2", TableStatus::Available)
        .await
        .unwrap();

    // the request carried the full record with only the status changed
    let sent = backend.last_body("PUT").unwrap();
    assert_eq!(sent["status"], "available");
    assert_eq!(sent["customerName"], "Okafor");
    assert_eq!(sent["capacity"], 4);
    assert_eq!(sent["_id"], "t2");

    // the server cleared the guest and the row follows it
    assert_eq!(saved.customer_name, None);
    let row = screen.list().find("t2").unwrap();
    assert_eq!(row.status, TableStatus::Available);
    assert_eq!(row.customer_name, None);
    assert_eq!(row.reservation_time, None);
    assert_eq!(
        notifier.last().map(|n| n.message),
        Some("Table 2 marked as available".to_string())
    );
}

#[tokio::test]
async fn cycling_moves_to_the_next_status() {
    let backend = seeded();
    let (mut screen, _) = backend.screen::<RestaurantTable>();
    screen.load().await.unwrap();

    let saved = screen.cycle_table_status("t1").await.unwrap();
    assert_eq!(saved.status, TableStatus::Occupied);
    assert_eq!(backend.requests_with("PUT")[0].path, "/api/restaurant/tables/t1");
}

#[tokio::test]
async fn unknown_table_sends_nothing() {
    let backend = seeded();
    let (mut screen, _) = backend.screen::<RestaurantTable>();
    screen.load().await.unwrap();

    assert!(screen.cycle_table_status("t9").await.is_err());
    assert!(backend.requests_with("PUT").is_empty());
}

#[tokio::test]
async fn status_filter_uses_table_status() {
    let backend = seeded().with_tables(vec![
        table("t1", 1, "available", None),
        table("t2", 2, "reserved", Some("Okafor")),
        table("t3", 3, "occupied", Some("Ng")),
    ]);
    let (mut screen, _) = backend.screen::<RestaurantTable>();
    screen.load().await.unwrap();

    screen.filter = screen.filter.clone().status("occupied");
    let visible: Vec<_> = screen.visible().iter().map(|t| t.id.clone()).collect();
    assert_eq!(visible, ["t3"]);
    assert_eq!(screen.list().len(), 3);
}
