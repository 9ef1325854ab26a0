//! Macro-generated test suite for `InvoiceStore` contract validation.
//!
//! # Usage
//!
//! ```rust,ignore
//! #[macro_use]
//! mod store_harness;
//!
//! use store_harness::*;
//! use invoices::storage::InMemoryInvoiceStore;
//!
//! invoice_store_tests!(InMemoryInvoiceStore::new());
//! ```
//!
//! # Generated Tests
//!
//! - `test_list_empty` - list on an empty store returns an empty vec
//! - `test_insert_assigns_distinct_ids` - two inserts get two ids
//! - `test_insert_persists_all_columns` - inserted row reads back unchanged
//! - `test_list_newest_first` - rows come back by date descending
//! - `test_update_rewrites_mutable_columns` - customer, amount, status change; date does not
//! - `test_update_nonexistent_is_noop` - unknown id leaves the table untouched
//! - `test_delete_existing` - row disappears
//! - `test_delete_nonexistent_is_noop` - unknown id is not an error
//! - `test_concurrent_inserts` - parallel inserts from spawned tasks

/// Generate a full `InvoiceStore` conformance test suite.
///
/// `$factory` must evaluate to a fresh, empty store implementing
/// `InvoiceStore + Clone + 'static`. It is re-evaluated for each test.
#[macro_export]
macro_rules! invoice_store_tests {
    ($factory:expr) => {
        mod invoice_store_contract_tests {
            use super::*;
            use chrono::NaiveDate;
            use invoices::core::invoice::InvoiceStatus;
            use invoices::core::store::InvoiceStore;

            // ==================================================================
            // Insert & List
            // ==================================================================

            #[tokio::test]
            async fn test_list_empty() {
                let store = $factory;
                assert!(store.list().await.unwrap().is_empty());
            }

            #[tokio::test]
            async fn test_insert_assigns_distinct_ids() {
                let store = $factory;
                let a = store
                    .insert(new_invoice("c-1", 100, InvoiceStatus::Pending, 1))
                    .await
                    .unwrap();
                let b = store
                    .insert(new_invoice("c-1", 100, InvoiceStatus::Pending, 1))
                    .await
                    .unwrap();
                assert!(!a.is_empty());
                assert_ne!(a, b);
                assert_eq!(store.list().await.unwrap().len(), 2);
            }

            #[tokio::test]
            async fn test_insert_persists_all_columns() {
                let store = $factory;
                let id = store
                    .insert(new_invoice("c-7", 4500, InvoiceStatus::Paid, 9))
                    .await
                    .unwrap();

                let all = store.list().await.unwrap();
                assert_eq!(all.len(), 1);
                let invoice = &all[0];
                assert_eq!(invoice.id, id);
                assert_eq!(invoice.customer_id, "c-7");
                assert_eq!(invoice.amount, 4500);
                assert_eq!(invoice.status, InvoiceStatus::Paid);
                assert_eq!(invoice.date, NaiveDate::from_ymd_opt(2024, 3, 9).unwrap());
            }

            #[tokio::test]
            async fn test_list_newest_first() {
                let store = $factory;
                for day in [3, 12, 7] {
                    store
                        .insert(new_invoice("c-1", 100, InvoiceStatus::Pending, day))
                        .await
                        .unwrap();
                }

                let days: Vec<_> = store
                    .list()
                    .await
                    .unwrap()
                    .into_iter()
                    .map(|invoice| invoice.date)
                    .collect();
                let mut sorted = days.clone();
                sorted.sort_by(|a, b| b.cmp(a));
                assert_eq!(days, sorted);
            }

            // ==================================================================
            // Update
            // ==================================================================

            #[tokio::test]
            async fn test_update_rewrites_mutable_columns() {
                let store = $factory;
                let id = store
                    .insert(new_invoice("c-1", 100, InvoiceStatus::Pending, 5))
                    .await
                    .unwrap();

                store
                    .update(&id, changes("c-2", 1050, InvoiceStatus::Paid))
                    .await
                    .unwrap();

                let all = store.list().await.unwrap();
                let invoice = all.iter().find(|i| i.id == id).unwrap();
                assert_eq!(invoice.customer_id, "c-2");
                assert_eq!(invoice.amount, 1050);
                assert_eq!(invoice.status, InvoiceStatus::Paid);
                assert_eq!(invoice.date, NaiveDate::from_ymd_opt(2024, 3, 5).unwrap());
            }

            #[tokio::test]
            async fn test_update_nonexistent_is_noop() {
                let store = $factory;
                store
                    .insert(new_invoice("c-1", 100, InvoiceStatus::Pending, 5))
                    .await
                    .unwrap();
                let before = store.list().await.unwrap();

                store
                    .update("no-such-invoice", changes("c-2", 1, InvoiceStatus::Paid))
                    .await
                    .unwrap();

                assert_eq!(store.list().await.unwrap(), before);
            }

            // ==================================================================
            // Delete
            // ==================================================================

            #[tokio::test]
            async fn test_delete_existing() {
                let store = $factory;
                let keep = store
                    .insert(new_invoice("c-1", 100, InvoiceStatus::Pending, 1))
                    .await
                    .unwrap();
                let gone = store
                    .insert(new_invoice("c-2", 200, InvoiceStatus::Paid, 2))
                    .await
                    .unwrap();

                store.delete(&gone).await.unwrap();

                let ids: Vec<_> = store.list().await.unwrap().into_iter().map(|i| i.id).collect();
                assert_eq!(ids, vec![keep]);
            }

            #[tokio::test]
            async fn test_delete_nonexistent_is_noop() {
                let store = $factory;
                store.delete("no-such-invoice").await.unwrap();
                assert!(store.list().await.unwrap().is_empty());
            }

            // ==================================================================
            // Concurrency
            // ==================================================================

            #[tokio::test]
            async fn test_concurrent_inserts() {
                let store = $factory;
                let mut handles = Vec::new();
                for i in 0..10 {
                    let store = store.clone();
                    handles.push(tokio::spawn(async move {
                        store
                            .insert(new_invoice(&format!("c-{}", i), 100 + i, InvoiceStatus::Pending, 1))
                            .await
                            .unwrap()
                    }));
                }
                for handle in handles {
                    handle.await.unwrap();
                }

                assert_eq!(store.list().await.unwrap().len(), 10);
            }
        }
    };
}
