use crate::engine::QueryError;

/// One financial transfer as loaded from the data file.
/// Every field may be missing in the source, so all of them are optional.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Transaction {
    mtn: Option<u64>,
    amount: Option<f64>,
    sender_full_name: Option<String>,
    sender_age: Option<u32>,
    beneficiary_full_name: Option<String>,
    beneficiary_age: Option<u32>,
    issue_id: Option<u32>,
    issue: IssueStatus,
    issue_message: Option<String>,
}

/// Resolution state of the compliance issue attached to a transaction.
/// `NoIssue` is not the same thing as `Unsolved`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IssueStatus {
    #[default]
    NoIssue,
    Solved,
    Unsolved,
}

impl From<Option<bool>> for IssueStatus {
    fn from(solved: Option<bool>) -> Self {
        match solved {
            None => IssueStatus::NoIssue,
            Some(true) => IssueStatus::Solved,
            Some(false) => IssueStatus::Unsolved,
        }
    }
}

impl Transaction {
    pub fn new() -> Self {
        Transaction::default()
    }

    pub fn with_mtn(mut self, mtn: u64) -> Self {
        self.mtn = Some(mtn);
        self
    }

    pub fn with_amount(mut self, amount: f64) -> Self {
        self.amount = Some(amount);
        self
    }

    pub fn with_sender(mut self, full_name: impl Into<String>, age: Option<u32>) -> Self {
        self.sender_full_name = Some(full_name.into());
        self.sender_age = age;
        self
    }

    pub fn with_beneficiary(mut self, full_name: impl Into<String>, age: Option<u32>) -> Self {
        self.beneficiary_full_name = Some(full_name.into());
        self.beneficiary_age = age;
        self
    }

    pub fn with_issue(
        mut self,
        issue_id: Option<u32>,
        issue: IssueStatus,
        message: Option<String>,
    ) -> Self {
        self.issue_id = issue_id;
        self.issue = issue;
        self.issue_message = message;
        self
    }

    pub fn mtn(&self) -> Option<u64> {
        self.mtn
    }

    pub fn amount(&self) -> Option<f64> {
        self.amount
    }

    pub fn sender_full_name(&self) -> Option<&str> {
        self.sender_full_name.as_deref()
    }

    pub fn sender_age(&self) -> Option<u32> {
        self.sender_age
    }

    pub fn beneficiary_full_name(&self) -> Option<&str> {
        self.beneficiary_full_name.as_deref()
    }

    pub fn beneficiary_age(&self) -> Option<u32> {
        self.beneficiary_age
    }

    pub fn issue_id(&self) -> Option<u32> {
        self.issue_id
    }

    pub fn issue(&self) -> IssueStatus {
        self.issue
    }

    pub fn issue_message(&self) -> Option<&str> {
        self.issue_message.as_deref()
    }

    /// True if the client appears on either side of the transfer.
    pub fn involves(&self, client_full_name: &str) -> bool {
        self.sender_full_name() == Some(client_full_name)
            || self.beneficiary_full_name() == Some(client_full_name)
    }

    pub fn required_amount(&self) -> Result<f64, QueryError> {
        self.amount.ok_or_else(|| self.missing("amount"))
    }

    pub fn required_sender(&self) -> Result<&str, QueryError> {
        self.sender_full_name()
            .ok_or_else(|| self.missing("senderFullName"))
    }

    pub fn required_beneficiary(&self) -> Result<&str, QueryError> {
        self.beneficiary_full_name()
            .ok_or_else(|| self.missing("beneficiaryFullName"))
    }

    fn missing(&self, field: &'static str) -> QueryError {
        QueryError::MissingField {
            field,
            mtn: self.mtn,
        }
    }
}
