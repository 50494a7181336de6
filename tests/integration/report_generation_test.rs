//! Integration tests for sales report generation
//!
//! Drives the report service end to end over an in-memory order store and
//! checks filtering, display order and every aggregate.

use std::sync::Arc;

use chrono::{TimeZone, Utc};
use order_reports::core::{AppError, ReportTimezone, StaticAccess};
use order_reports::orders::{
    Coupon, InMemoryOrderRepository, Item, NegativeTotalPolicy, Order, OrderStatus,
    OrderTotalCalculator,
};
use order_reports::reports::{build_report, ReportOptions, ReportService};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn options() -> ReportOptions {
    ReportOptions {
        timezone: ReportTimezone::utc(),
        calculator: OrderTotalCalculator::default(),
    }
}

/// Three January orders: paid, cancelled, approved with a fixed coupon
fn january_orders() -> Vec<Order> {
    vec![
        Order::new(1, Utc.with_ymd_and_hms(2024, 1, 5, 10, 0, 0).unwrap(), OrderStatus::Pago)
            .with_contact("Ana", "11 90000-0001")
            .with_item(Item::new(dec!(40), 2))
            .with_item(Item::new(dec!(20), 1)),
        Order::new(2, Utc.with_ymd_and_hms(2024, 1, 10, 10, 0, 0).unwrap(), OrderStatus::Cancelado)
            .with_contact("Bia", "11 90000-0002")
            .with_item(Item::new(dec!(50), 1)),
        Order::new(3, Utc.with_ymd_and_hms(2024, 1, 15, 10, 0, 0).unwrap(), OrderStatus::Aprovado)
            .with_contact("Caio", "11 90000-0003")
            .with_item(Item::new(dec!(200), 1))
            .with_coupon(Coupon::fixed(dec!(20))),
    ]
}

fn service(orders: Vec<Order>, granted: bool, options: ReportOptions) -> ReportService {
    ReportService::new(
        Arc::new(InMemoryOrderRepository::new(orders)),
        Arc::new(StaticAccess::new(granted)),
        options,
    )
}

#[test]
fn test_january_report() {
    let report = build_report(&january_orders(), Some("2024-01-01"), Some("2024-01-20"), &options()).unwrap();

    let ids: Vec<i64> = report.orders.iter().map(|o| o.order_id).collect();
    assert_eq!(ids, vec![3, 2, 1]);

    // 100 from order 1 plus 200 - 20 from order 3; order 2 is cancelled
    assert_eq!(report.total_revenue(), dec!(280));
    // 3 units in order 1, 1 in order 3
    assert_eq!(report.total_items(), 4);
    assert_eq!(report.count_for(OrderStatus::Cancelado), 1);
    assert_eq!(report.count_for(OrderStatus::Pago), 1);
    assert_eq!(report.count_for(OrderStatus::Aprovado), 1);
    assert_eq!(report.count_for(OrderStatus::EmEspera), 0);
    assert_eq!(report.totals.order_count, 3);

    let coupon_rows: Vec<i64> = report.rows.iter().filter(|r| r.has_coupon).map(|r| r.order_id).collect();
    assert_eq!(coupon_rows, vec![3]);
    assert_eq!(report.rows[0].total, dec!(180));
    assert_eq!(report.rows[1].total, dec!(50));
}

#[test]
fn test_range_narrows_report() {
    let report = build_report(&january_orders(), Some("2024-01-08"), Some("2024-01-12"), &options()).unwrap();

    assert_eq!(report.totals.order_count, 1);
    assert_eq!(report.total_revenue(), Decimal::ZERO);
    assert_eq!(report.total_items(), 0);
    assert_eq!(report.count_for(OrderStatus::Cancelado), 1);
}

#[test]
fn test_report_outside_any_order_is_zeroed() {
    let report = build_report(&january_orders(), Some("2025-01-01"), Some("2025-12-31"), &options()).unwrap();

    assert!(report.is_empty());
    assert!(report.rows.is_empty());
    assert_eq!(report.total_revenue(), Decimal::ZERO);
    assert_eq!(report.totals.status_counts.len(), OrderStatus::ALL.len());
    assert!(report.totals.status_counts.values().all(|count| *count == 0));
}

#[test]
fn test_clamp_policy_flows_into_revenue() {
    let orders = vec![
        Order::new(1, Utc.with_ymd_and_hms(2024, 1, 5, 10, 0, 0).unwrap(), OrderStatus::Pago)
            .with_contact("Ana", "")
            .with_item(Item::new(dec!(30), 1))
            .with_coupon(Coupon::fixed(dec!(50))),
        Order::new(2, Utc.with_ymd_and_hms(2024, 1, 6, 10, 0, 0).unwrap(), OrderStatus::Pago)
            .with_contact("Bia", "")
            .with_item(Item::new(dec!(100), 1)),
    ];

    let allow = build_report(&orders, None, None, &options()).unwrap();
    assert_eq!(allow.total_revenue(), dec!(80));

    let clamp_options = ReportOptions {
        calculator: OrderTotalCalculator::new(NegativeTotalPolicy::ClampToZero),
        ..options()
    };
    let clamp = build_report(&orders, None, None, &clamp_options).unwrap();
    assert_eq!(clamp.total_revenue(), dec!(100));
}

#[test]
fn test_report_serializes_status_codes() {
    let report = build_report(&january_orders(), None, None, &options()).unwrap();
    let json = serde_json::to_value(&report).unwrap();

    assert_eq!(json["totals"]["status_counts"]["CANCELADO"], 1);
    assert_eq!(json["totals"]["status_counts"]["SEPARADO"], 0);
    assert_eq!(json["range"], serde_json::Value::Null);
}

#[tokio::test]
async fn test_service_generates_report() {
    let service = service(january_orders(), true, options());

    let report = service
        .generate_report(Some("2024-01-01"), Some("2024-01-20"))
        .await
        .unwrap();

    assert_eq!(report.total_revenue(), dec!(280));
    assert_eq!(report.range.map(|r| r.end_date.to_string()), Some("2024-01-20".to_string()));
}

#[tokio::test]
async fn test_service_requires_admin() {
    let service = service(january_orders(), false, options());

    let err = service.generate_report(None, None).await.unwrap_err();
    assert!(matches!(err, AppError::Unauthorized(_)));
}

#[tokio::test]
async fn test_service_surfaces_store_validation() {
    let mut orders = january_orders();
    orders.push(orders[0].clone());
    let service = service(orders, true, options());

    let err = service.generate_report(None, None).await.unwrap_err();
    assert!(matches!(err, AppError::Validation(_)));
}

#[tokio::test]
async fn test_service_uses_report_timezone() {
    // 01:30 UTC on Jan 21 is still Jan 20 in Brasília
    let orders = vec![
        Order::new(9, Utc.with_ymd_and_hms(2024, 1, 21, 1, 30, 0).unwrap(), OrderStatus::Finalizado)
            .with_contact("Duda", "")
            .with_item(Item::new(dec!(10), 1)),
    ];

    let local = service(orders.clone(), true, ReportOptions::default());
    let report = local.generate_report(Some("2024-01-20"), Some("2024-01-20")).await.unwrap();
    assert_eq!(report.count_for(OrderStatus::Finalizado), 1);

    let utc = service(orders, true, options());
    let report = utc.generate_report(Some("2024-01-20"), Some("2024-01-20")).await.unwrap();
    assert!(report.is_empty());
}
