use crate::engine::source::read_transactions;
use crate::engine::{IssueStatus, QueryError, Transaction};
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};
use std::path::Path;

/// Read-only queries over a collection of transactions loaded once.
///
/// The first five queries are guarded: whatever goes wrong inside them is logged
/// and reported as [`QueryError::Unsupported`]. The others hand back the
/// underlying [`QueryError::MissingField`] untouched.
#[derive(Debug, Clone, Default)]
pub struct QueryEngine {
    transactions: Vec<Transaction>,
}

impl QueryEngine {
    pub fn new(transactions: Vec<Transaction>) -> Self {
        QueryEngine { transactions }
    }

    /// Loads the JSON file at `path`. An unreadable or malformed file is logged
    /// and leaves the engine empty.
    pub fn load(path: &Path) -> Self {
        match read_transactions(path) {
            Ok(transactions) => {
                log::debug!("Loaded {} transactions", transactions.len());
                QueryEngine::new(transactions)
            }
            Err(e) => {
                log::error!("Error loading transactions: {e:#}");
                QueryEngine::default()
            }
        }
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    pub fn total_transaction_amount(&self) -> Result<f64, QueryError> {
        guarded("total_transaction_amount", || {
            self.transactions
                .iter()
                .try_fold(0.0, |total: f64, tx| {
                    tx.required_amount().map(|amount| total + amount)
                })
        })
    }

    pub fn total_transaction_amount_sent_by(
        &self,
        sender_full_name: &str,
    ) -> Result<f64, QueryError> {
        guarded("total_transaction_amount_sent_by", || {
            self.transactions
                .iter()
                .filter(|tx| tx.sender_full_name() == Some(sender_full_name))
                .try_fold(0.0, |total: f64, tx| {
                    tx.required_amount().map(|amount| total + amount)
                })
        })
    }

    /// Highest amount, 0.0 when there are no transactions.
    pub fn max_transaction_amount(&self) -> Result<f64, QueryError> {
        guarded("max_transaction_amount", || {
            let mut max: Option<f64> = None;
            for tx in &self.transactions {
                let amount = tx.required_amount()?;
                max = Some(max.map_or(amount, |m| m.max(amount)));
            }
            Ok(max.unwrap_or(0.0))
        })
    }

    /// Number of distinct names seen as sender or beneficiary.
    pub fn count_unique_clients(&self) -> Result<usize, QueryError> {
        guarded("count_unique_clients", || {
            let mut clients = HashSet::new();
            for tx in &self.transactions {
                clients.insert(tx.required_sender()?);
                clients.insert(tx.required_beneficiary()?);
            }
            Ok(clients.len())
        })
    }

    pub fn has_open_compliance_issues(&self, client_full_name: &str) -> Result<bool, QueryError> {
        guarded("has_open_compliance_issues", || {
            Ok(self
                .transactions
                .iter()
                .filter(|tx| tx.involves(client_full_name))
                .any(|tx| tx.issue() == IssueStatus::Unsolved))
        })
    }

    /// Groups by beneficiary, keeping load order inside each group.
    pub fn transactions_by_beneficiary_name(
        &self,
    ) -> Result<BTreeMap<&str, Vec<&Transaction>>, QueryError> {
        let mut groups: BTreeMap<&str, Vec<&Transaction>> = BTreeMap::new();
        for tx in &self.transactions {
            groups.entry(tx.required_beneficiary()?).or_default().push(tx);
        }
        Ok(groups)
    }

    /// Issue ids of open compliance issues. Transactions without an id are skipped.
    pub fn unsolved_issue_ids(&self) -> BTreeSet<u32> {
        self.transactions
            .iter()
            .filter(|tx| tx.issue() == IssueStatus::Unsolved)
            .filter_map(Transaction::issue_id)
            .collect()
    }

    pub fn all_solved_issue_messages(&self) -> Vec<Option<&str>> {
        self.transactions
            .iter()
            .filter(|tx| tx.issue() == IssueStatus::Solved)
            .map(Transaction::issue_message)
            .collect()
    }

    pub fn top_3_transactions_by_amount(&self) -> Result<Vec<&Transaction>, QueryError> {
        self.top_transactions_by_amount(3)
    }

    /// The `n` largest transactions, descending. Equal amounts keep load order.
    pub fn top_transactions_by_amount(&self, n: usize) -> Result<Vec<&Transaction>, QueryError> {
        let mut ranked = self
            .transactions
            .iter()
            .map(|tx| Ok((tx.required_amount()?, tx)))
            .collect::<Result<Vec<_>, QueryError>>()?;

        ranked.sort_by(|(a, _), (b, _)| b.total_cmp(a));
        ranked.truncate(n);

        Ok(ranked.into_iter().map(|(_, tx)| tx).collect())
    }

    /// Sender with the largest total sent. On a tie the sender seen first wins.
    pub fn top_sender(&self) -> Result<Option<&str>, QueryError> {
        let mut index: HashMap<&str, usize> = HashMap::new();
        let mut totals: Vec<(&str, f64)> = Vec::new();

        for tx in &self.transactions {
            let sender = tx.required_sender()?;
            let amount = tx.required_amount()?;
            let slot = *index.entry(sender).or_insert_with(|| {
                totals.push((sender, 0.0));
                totals.len() - 1
            });
            totals[slot].1 += amount;
        }

        let mut top: Option<(&str, f64)> = None;
        for (sender, total) in totals {
            if top.is_none_or(|(_, best)| total > best) {
                top = Some((sender, total));
            }
        }

        Ok(top.map(|(sender, _)| sender))
    }
}

fn guarded<T>(
    operation: &'static str,
    query: impl FnOnce() -> Result<T, QueryError>,
) -> Result<T, QueryError> {
    query().map_err(|e| {
        log::error!("Query {operation} failed: {e}");
        QueryError::Unsupported { operation }
    })
}
