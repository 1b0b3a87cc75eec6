use serde::Deserialize;

use crate::engine::{IssueStatus, Transaction};

/// Shape of one object in the JSON transactions file.
/// Any key may be omitted or null.
#[derive(Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct InputRecord {
    pub mtn: Option<u64>,
    pub amount: Option<f64>,
    pub sender_full_name: Option<String>,
    pub sender_age: Option<u32>,
    pub beneficiary_full_name: Option<String>,
    pub beneficiary_age: Option<u32>,
    pub issue_id: Option<u32>,
    pub issue_solved: Option<bool>,
    pub issue_message: Option<String>,
}

impl InputRecord {
    pub fn into_transaction(self) -> Transaction {
        let mut tx = Transaction::new();

        if let Some(mtn) = self.mtn {
            tx = tx.with_mtn(mtn);
        }
        if let Some(amount) = self.amount {
            tx = tx.with_amount(amount);
        }
        if let Some(name) = self.sender_full_name {
            tx = tx.with_sender(name, self.sender_age);
        }
        if let Some(name) = self.beneficiary_full_name {
            tx = tx.with_beneficiary(name, self.beneficiary_age);
        }

        tx.with_issue(
            self.issue_id,
            IssueStatus::from(self.issue_solved),
            self.issue_message,
        )
    }
}
