//! Tests for the finance book: validation, ordering and cascading removal

use proptest::prelude::*;
use rust_decimal_macros::dec;

use core_kernel::{ExpenseId, MoneyError, ParticipantId, TransferId};
use domain_ledger::{
    EventKind, ExpenseUpdate, FinanceBook, IncomeUpdate, LedgerError, NewExpense, NewIncome,
    NewTransfer, ParticipantUpdate, TransferUpdate, PARTICIPANT_PALETTE,
};

use test_utils::{
    assert_balance, assert_settlements_clear, positive_decimal_strategy, ParticipantFixtures,
    TestExpenseBuilder, TestSnapshotBuilder, TestTransferBuilder,
};

fn book_with(names: &[&str]) -> (FinanceBook, Vec<ParticipantId>) {
    let mut book = FinanceBook::new();
    let ids = names
        .iter()
        .map(|name| book.add_participant(name, None).unwrap().id)
        .collect();
    (book, ids)
}

fn expense(title: &str, payer_id: ParticipantId) -> NewExpense {
    NewExpense {
        title: title.to_string(),
        amount: dec!(30.00),
        payer_id,
    }
}

// ============================================================================
// Participant Tests
// ============================================================================

mod participant_tests {
    use super::*;

    #[test]
    fn test_add_participant_trims_and_assigns_palette() {
        let (mut book, _) = book_with(&["Ana"]);
        let bea = book.add_participant("  Bea  ", Some("🐝")).unwrap().clone();

        assert_eq!(bea.name, "Bea");
        assert_eq!(bea.emoji.as_deref(), Some("🐝"));
        assert_eq!(bea.color, PARTICIPANT_PALETTE[1]);
        assert_eq!(book.participants().len(), 2);
    }

    #[test]
    fn test_blank_name_is_rejected() {
        let mut book = FinanceBook::new();
        let result = book.add_participant("   ", None);
        assert!(matches!(result, Err(LedgerError::Validation(_))));
        assert!(!book.has_data());
    }

    #[test]
    fn test_update_participant() {
        let (mut book, ids) = book_with(&["Ana"]);
        let update = ParticipantUpdate {
            name: Some("Anna".to_string()),
            emoji: Some(" ".to_string()),
            color: Some("#000000".to_string()),
        };

        let updated = book.update_participant(&ids[0], update).unwrap();
        assert_eq!(updated.name, "Anna");
        assert_eq!(updated.emoji, None);
        assert_eq!(updated.color, "#000000");
    }

    #[test]
    fn test_update_unknown_participant() {
        let mut book = FinanceBook::new();
        let id = ParticipantFixtures::removed_id();
        let result = book.update_participant(&id, ParticipantUpdate::default());
        assert_eq!(result.unwrap_err(), LedgerError::ParticipantNotFound(id));
    }

    #[test]
    fn test_remove_participant_cascades_events() {
        let (mut book, ids) = book_with(&["Ana", "Ben", "Cy"]);
        book.add_expense(expense("Dinner", ids[0])).unwrap();
        book.add_expense(expense("Taxi", ids[1])).unwrap();
        book.add_income(NewIncome {
            title: "Refund".to_string(),
            amount: dec!(5),
            receiver_id: ids[0],
        })
        .unwrap();
        book.add_transfer(NewTransfer {
            from_id: ids[1],
            to_id: ids[0],
            amount: dec!(10),
            reason: None,
        })
        .unwrap();
        book.add_transfer(NewTransfer {
            from_id: ids[1],
            to_id: ids[2],
            amount: dec!(10),
            reason: None,
        })
        .unwrap();

        let removed = book.remove_participant(&ids[0]).unwrap();

        assert_eq!(removed.name, "Ana");
        assert_eq!(book.participants().len(), 2);
        assert_eq!(book.expenses().len(), 1);
        assert_eq!(book.expenses()[0].title, "Taxi");
        assert!(book.incomes().is_empty());
        assert_eq!(book.transfers().len(), 1);
        assert_eq!(book.transfers()[0].to_id, ids[2]);
    }

    #[test]
    fn test_remove_unknown_participant() {
        let mut book = FinanceBook::new();
        let id = ParticipantFixtures::removed_id();
        assert_eq!(
            book.remove_participant(&id).unwrap_err(),
            LedgerError::ParticipantNotFound(id)
        );
    }
}

// ============================================================================
// Event Tests
// ============================================================================

mod event_tests {
    use super::*;

    #[test]
    fn test_events_are_newest_first() {
        let (mut book, ids) = book_with(&["Ana", "Ben"]);
        book.add_expense(expense("First", ids[0])).unwrap();
        book.add_expense(expense("Second", ids[1])).unwrap();

        let titles: Vec<_> = book.expenses().iter().map(|e| e.title.as_str()).collect();
        assert_eq!(titles, vec!["Second", "First"]);
    }

    #[test]
    fn test_expense_requires_known_payer() {
        let (mut book, _) = book_with(&["Ana"]);
        let stranger = ParticipantFixtures::removed_id();
        let result = book.add_expense(expense("Dinner", stranger));
        assert_eq!(result.unwrap_err(), LedgerError::ParticipantNotFound(stranger));
    }

    #[test]
    fn test_expense_rejects_blank_title() {
        let (mut book, ids) = book_with(&["Ana"]);
        let result = book.add_expense(expense("  ", ids[0]));
        assert!(matches!(result, Err(LedgerError::Validation(_))));
    }

    #[test]
    fn test_amounts_must_be_positive_after_rounding() {
        let (mut book, ids) = book_with(&["Ana"]);
        for amount in [dec!(0), dec!(-5), dec!(0.004)] {
            let result = book.add_income(NewIncome {
                title: "Refund".to_string(),
                amount,
                receiver_id: ids[0],
            });
            assert!(matches!(
                result,
                Err(LedgerError::Money(MoneyError::InvalidAmount(_)))
            ));
        }
        assert!(book.incomes().is_empty());
    }

    #[test]
    fn test_amounts_beyond_cent_range_are_rejected() {
        let (mut book, ids) = book_with(&["Ana", "Ben"]);
        let huge = dec!(1000000000000000000);

        let result = book.add_expense(NewExpense {
            title: "Yacht".to_string(),
            amount: huge,
            payer_id: ids[0],
        });
        assert_eq!(result.unwrap_err(), LedgerError::Money(MoneyError::Overflow));
        assert!(book.expenses().is_empty());

        let id = book.add_expense(expense("Dinner", ids[0])).unwrap().id;
        let result = book.update_expense(
            &id,
            ExpenseUpdate {
                amount: Some(huge),
                ..Default::default()
            },
        );
        assert_eq!(result.unwrap_err(), LedgerError::Money(MoneyError::Overflow));
        assert_eq!(book.expenses()[0].amount.amount(), dec!(30.00));

        let result = book.add_transfer(NewTransfer {
            from_id: ids[0],
            to_id: ids[1],
            amount: huge,
            reason: None,
        });
        assert_eq!(result.unwrap_err(), LedgerError::Money(MoneyError::Overflow));
        assert_eq!(book.summary().total_expenses.amount(), dec!(30.00));
    }

    #[test]
    fn test_transfer_to_self_is_rejected() {
        let (mut book, ids) = book_with(&["Ana"]);
        let result = book.add_transfer(NewTransfer {
            from_id: ids[0],
            to_id: ids[0],
            amount: dec!(10),
            reason: Some("Loan".to_string()),
        });
        assert_eq!(result.unwrap_err(), LedgerError::SameParticipant);
    }

    #[test]
    fn test_update_expense_fields() {
        let (mut book, ids) = book_with(&["Ana", "Ben"]);
        let id = book.add_expense(expense("Dinner", ids[0])).unwrap().id;

        let updated = book
            .update_expense(
                &id,
                ExpenseUpdate {
                    amount: Some(dec!(12.345)),
                    payer_id: Some(ids[1]),
                    ..Default::default()
                },
            )
            .unwrap();

        assert_eq!(updated.title, "Dinner");
        assert_eq!(updated.amount.amount(), dec!(12.35));
        assert_eq!(updated.payer_id, ids[1]);
    }

    #[test]
    fn test_rejected_update_leaves_event_unchanged() {
        let (mut book, ids) = book_with(&["Ana"]);
        let id = book.add_expense(expense("Dinner", ids[0])).unwrap().id;
        let before = book.expenses()[0].clone();

        let result = book.update_expense(
            &id,
            ExpenseUpdate {
                title: Some("Lunch".to_string()),
                amount: Some(dec!(0)),
                ..Default::default()
            },
        );

        assert!(result.is_err());
        assert_eq!(book.expenses()[0], before);
    }

    #[test]
    fn test_update_unknown_expense() {
        let (mut book, _) = book_with(&["Ana"]);
        let id = ExpenseId::new();
        let result = book.update_expense(&id, ExpenseUpdate::default());
        assert_eq!(
            result.unwrap_err(),
            LedgerError::event_not_found(EventKind::Expense, id)
        );
    }

    #[test]
    fn test_update_income_receiver_must_exist() {
        let (mut book, ids) = book_with(&["Ana"]);
        let id = book
            .add_income(NewIncome {
                title: "Refund".to_string(),
                amount: dec!(5),
                receiver_id: ids[0],
            })
            .unwrap()
            .id;

        let stranger = ParticipantFixtures::removed_id();
        let result = book.update_income(
            &id,
            IncomeUpdate {
                receiver_id: Some(stranger),
                ..Default::default()
            },
        );
        assert_eq!(result.unwrap_err(), LedgerError::ParticipantNotFound(stranger));
    }

    #[test]
    fn test_update_transfer_cannot_collapse_pair() {
        let (mut book, ids) = book_with(&["Ana", "Ben"]);
        let id = book
            .add_transfer(NewTransfer {
                from_id: ids[0],
                to_id: ids[1],
                amount: dec!(10),
                reason: None,
            })
            .unwrap()
            .id;

        let result = book.update_transfer(
            &id,
            TransferUpdate {
                to_id: Some(ids[0]),
                ..Default::default()
            },
        );
        assert_eq!(result.unwrap_err(), LedgerError::SameParticipant);

        let updated = book
            .update_transfer(
                &id,
                TransferUpdate {
                    reason: Some("Cinema".to_string()),
                    ..Default::default()
                },
            )
            .unwrap();
        assert_eq!(updated.reason.as_deref(), Some("Cinema"));
        assert_eq!(updated.to_id, ids[1]);
    }

    #[test]
    fn test_remove_events() {
        let (mut book, ids) = book_with(&["Ana", "Ben"]);
        let expense_id = book.add_expense(expense("Dinner", ids[0])).unwrap().id;
        let transfer_id = book
            .add_transfer(NewTransfer {
                from_id: ids[0],
                to_id: ids[1],
                amount: dec!(10),
                reason: None,
            })
            .unwrap()
            .id;

        assert_eq!(book.remove_expense(&expense_id).unwrap().id, expense_id);
        assert_eq!(book.remove_transfer(&transfer_id).unwrap().id, transfer_id);
        assert!(book.expenses().is_empty());
        assert!(book.transfers().is_empty());

        let missing = TransferId::new();
        assert_eq!(
            book.remove_transfer(&missing).unwrap_err(),
            LedgerError::event_not_found(EventKind::Transfer, missing)
        );
    }
}

// ============================================================================
// Book Lifecycle Tests
// ============================================================================

mod lifecycle_tests {
    use super::*;

    #[test]
    fn test_summary_reflects_edits() {
        let (mut book, ids) = book_with(&["Ana", "Ben"]);
        book.add_expense(expense("Dinner", ids[0])).unwrap();

        let summary = book.summary();
        assert_balance(&summary, &ids[0], dec!(15.00));
        assert_balance(&summary, &ids[1], dec!(-15.00));
        assert_eq!(summary.settlements.len(), 1);
        assert_eq!(summary.settlements[0].from.id, ids[1]);
    }

    #[test]
    fn test_snapshot_round_trip() {
        let people = ParticipantFixtures::trio();
        let snapshot = TestSnapshotBuilder::new()
            .with_participants(people.clone())
            .with_expense(TestExpenseBuilder::new().paid_by(&people[1]).build())
            .with_transfer(TestTransferBuilder::new().build())
            .build();

        let book = FinanceBook::from_snapshot(snapshot.clone());
        assert_eq!(book.snapshot(), snapshot);
        assert_eq!(book.summary(), snapshot.summarize());
    }

    #[test]
    fn test_snapshot_keeps_dangling_events() {
        let snapshot = TestSnapshotBuilder::new()
            .with_participants(ParticipantFixtures::pair())
            .with_transfer(
                TestTransferBuilder::new()
                    .with_to_id(ParticipantFixtures::removed_id())
                    .build(),
            )
            .build();

        let book = FinanceBook::from_snapshot(snapshot);
        assert_eq!(book.transfers().len(), 1);
    }

    #[test]
    fn test_reset_all() {
        let (mut book, ids) = book_with(&["Ana", "Ben"]);
        book.add_expense(expense("Dinner", ids[0])).unwrap();
        assert!(book.has_data());

        book.reset_all();
        assert!(!book.has_data());
        assert_eq!(book, FinanceBook::default());
    }

    proptest! {
        #[test]
        fn test_book_summary_settles(
            amounts in prop::collection::vec(positive_decimal_strategy(), 1..10),
        ) {
            let (mut book, ids) = book_with(&["Ana", "Ben", "Cy"]);
            for (i, amount) in amounts.into_iter().enumerate() {
                book.add_expense(NewExpense {
                    title: format!("Expense {i}"),
                    amount,
                    payer_id: ids[i % ids.len()],
                })
                .unwrap();
            }
            assert_settlements_clear(&book.summary());
        }
    }
}
