//! Expense, income and transfer DTOs

use rust_decimal::Decimal;
use serde::Deserialize;

use core_kernel::ParticipantId;
use domain_ledger::{
    ExpenseUpdate, IncomeUpdate, NewExpense, NewIncome, NewTransfer, TransferUpdate,
};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateExpenseRequest {
    pub title: String,
    pub amount: Decimal,
    pub payer_id: ParticipantId,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateExpenseRequest {
    pub title: Option<String>,
    pub amount: Option<Decimal>,
    pub payer_id: Option<ParticipantId>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateIncomeRequest {
    pub title: String,
    pub amount: Decimal,
    pub receiver_id: ParticipantId,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateIncomeRequest {
    pub title: Option<String>,
    pub amount: Option<Decimal>,
    pub receiver_id: Option<ParticipantId>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTransferRequest {
    pub from_id: ParticipantId,
    pub to_id: ParticipantId,
    pub amount: Decimal,
    pub reason: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTransferRequest {
    pub from_id: Option<ParticipantId>,
    pub to_id: Option<ParticipantId>,
    pub amount: Option<Decimal>,
    pub reason: Option<String>,
}

impl From<CreateExpenseRequest> for NewExpense {
    fn from(r: CreateExpenseRequest) -> Self {
        NewExpense {
            title: r.title,
            amount: r.amount,
            payer_id: r.payer_id,
        }
    }
}

impl From<UpdateExpenseRequest> for ExpenseUpdate {
    fn from(r: UpdateExpenseRequest) -> Self {
        ExpenseUpdate {
            title: r.title,
            amount: r.amount,
            payer_id: r.payer_id,
        }
    }
}

impl From<CreateIncomeRequest> for NewIncome {
    fn from(r: CreateIncomeRequest) -> Self {
        NewIncome {
            title: r.title,
            amount: r.amount,
            receiver_id: r.receiver_id,
        }
    }
}

impl From<UpdateIncomeRequest> for IncomeUpdate {
    fn from(r: UpdateIncomeRequest) -> Self {
        IncomeUpdate {
            title: r.title,
            amount: r.amount,
            receiver_id: r.receiver_id,
        }
    }
}

impl From<CreateTransferRequest> for NewTransfer {
    fn from(r: CreateTransferRequest) -> Self {
        NewTransfer {
            from_id: r.from_id,
            to_id: r.to_id,
            amount: r.amount,
            reason: r.reason,
        }
    }
}

impl From<UpdateTransferRequest> for TransferUpdate {
    fn from(r: UpdateTransferRequest) -> Self {
        TransferUpdate {
            from_id: r.from_id,
            to_id: r.to_id,
            amount: r.amount,
            reason: r.reason,
        }
    }
}
