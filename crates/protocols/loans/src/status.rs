//! Contract Status Model
//!
//! One canonical classification table over [`ContractStatus`]: lifecycle
//! grouping, sort order, tab membership, user-facing text, and action gating
//! all derive from the matches in this module so they can never diverge
//! between surfaces.
//!
//! Every match here is exhaustive with no wildcard arm: adding a status
//! variant must fail compilation until each consumer handles it.

use serde::{Deserialize, Serialize};

use crate::state::{Contract, ContractStatus};

/// Lifecycle group of a contract status.
///
/// The sole basis for sort priority, tab bucketing, and the open/closed
/// predicates. Total and stable: every status maps to exactly one group at
/// every call site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusGroup {
    /// Needs a user decision or near-term action; sorts first
    EarlyOrActionRequired,
    /// Loan in motion: collateralization, active, repayment, disputes
    ActiveOrClosing,
    /// Nothing further will happen on this contract
    Terminal,
}

impl StatusGroup {
    /// Sort rank: lower sorts first
    pub fn rank(&self) -> u8 {
        match self {
            Self::EarlyOrActionRequired => 0,
            Self::ActiveOrClosing => 1,
            Self::Terminal => 2,
        }
    }

    /// Dashboard tab this group feeds
    pub fn tab_label(&self) -> &'static str {
        match self {
            Self::EarlyOrActionRequired => "Action Required",
            Self::ActiveOrClosing => "Open",
            Self::Terminal => "Closed",
        }
    }
}

/// Classify a status into its lifecycle group
pub fn status_group(status: ContractStatus) -> StatusGroup {
    use ContractStatus::*;
    match status {
        Requested | RenewalRequested | Approved | CollateralRecoverable => {
            StatusGroup::EarlyOrActionRequired
        }

        CollateralSeen | CollateralConfirmed | PrincipalGiven | RepaymentProvided
        | RepaymentConfirmed | Undercollateralized | DisputeBorrowerStarted
        | DisputeLenderStarted | DisputeResolved => StatusGroup::ActiveOrClosing,

        Rejected | Cancelled | RequestExpired | ApprovalExpired | Closing | ClosingByClaim
        | ClosingByLiquidation | ClosingByDefaulting | ClosingByRecovery | ClosedByClaim
        | ClosedByLiquidation | ClosedByDefaulting | ClosedByRecovery | Closed | Defaulted
        | Extended => StatusGroup::Terminal,
    }
}

/// The contract may still change state
pub fn is_contract_open(status: ContractStatus) -> bool {
    status_group(status) != StatusGroup::Terminal
}

/// The contract reached a terminal state
pub fn is_contract_closed(status: ContractStatus) -> bool {
    status_group(status) == StatusGroup::Terminal
}

/// A user decision or near-term action is pending
pub fn is_action_required(status: ContractStatus) -> bool {
    status_group(status) == StatusGroup::EarlyOrActionRequired
}

/// Semantic tone for status badges and banners
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    Info,
    Success,
    Warning,
    Danger,
    Neutral,
}

/// Human-facing description of a status.
///
/// `message` may contain the placeholders `{expiry}` and `{next_contract}`;
/// [`render_status_message`] fills them from a contract snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusDescription {
    pub title: &'static str,
    pub tone: Tone,
    pub message: &'static str,
}

/// Describe a status for display. Total: every variant has a non-empty
/// title and message.
pub fn describe_status(status: ContractStatus) -> StatusDescription {
    use ContractStatus::*;
    use Tone::*;
    let (title, tone, message) = match status {
        Requested => (
            "Loan requested",
            Info,
            "Waiting for a lender to review this request. Expires {expiry}.",
        ),
        RenewalRequested => (
            "Renewal requested",
            Info,
            "Waiting for the lender to approve the renewal. Expires {expiry}.",
        ),
        Approved => (
            "Approved",
            Warning,
            "The lender approved this loan. Deposit the collateral before {expiry}.",
        ),
        Rejected => ("Rejected", Danger, "The lender rejected this request."),
        Cancelled => ("Cancelled", Neutral, "This request was cancelled."),
        RequestExpired => (
            "Request expired",
            Neutral,
            "No lender approved this request before it expired.",
        ),
        ApprovalExpired => (
            "Approval expired",
            Neutral,
            "The collateral was not deposited before the approval expired.",
        ),
        CollateralSeen => (
            "Collateral seen",
            Info,
            "The collateral transaction was seen and is awaiting confirmations.",
        ),
        CollateralConfirmed => (
            "Collateral confirmed",
            Success,
            "Collateral is confirmed. Waiting for the lender to send the principal.",
        ),
        Undercollateralized => (
            "Undercollateralized",
            Danger,
            "The collateral value fell below the required level. Top it up or the position may be liquidated.",
        ),
        CollateralRecoverable => (
            "Collateral recoverable",
            Warning,
            "The remaining collateral can now be withdrawn.",
        ),
        PrincipalGiven => (
            "Active",
            Success,
            "The loan is active. Repay before {expiry}.",
        ),
        RepaymentProvided => (
            "Repayment sent",
            Info,
            "The repayment was sent and is awaiting lender confirmation.",
        ),
        RepaymentConfirmed => (
            "Repayment confirmed",
            Success,
            "The lender confirmed the repayment. The contract is being settled.",
        ),
        Closing => ("Closing", Info, "The contract is being settled."),
        ClosingByClaim => (
            "Closing (claim)",
            Info,
            "The lender is claiming the repayment.",
        ),
        ClosingByLiquidation => (
            "Closing (liquidation)",
            Danger,
            "The collateral is being liquidated.",
        ),
        ClosingByDefaulting => (
            "Closing (default)",
            Danger,
            "The loan defaulted and the collateral is being claimed.",
        ),
        ClosingByRecovery => (
            "Closing (recovery)",
            Info,
            "The remaining collateral is being recovered.",
        ),
        ClosedByClaim => (
            "Closed (claim)",
            Neutral,
            "The lender claimed the repayment and the contract is closed.",
        ),
        ClosedByLiquidation => (
            "Closed (liquidation)",
            Danger,
            "The collateral was liquidated and the contract is closed.",
        ),
        ClosedByDefaulting => (
            "Closed (default)",
            Danger,
            "The loan defaulted and the contract is closed.",
        ),
        ClosedByRecovery => (
            "Closed (recovery)",
            Neutral,
            "The remaining collateral was recovered and the contract is closed.",
        ),
        DisputeBorrowerStarted => (
            "Dispute opened",
            Warning,
            "The borrower opened a dispute on this contract.",
        ),
        DisputeLenderStarted => (
            "Dispute opened",
            Warning,
            "The lender opened a dispute on this contract.",
        ),
        DisputeResolved => (
            "Dispute resolved",
            Success,
            "The dispute was resolved and the contract continues.",
        ),
        Closed => ("Closed", Neutral, "This contract is closed."),
        Defaulted => ("Defaulted", Danger, "The borrower defaulted on this loan."),
        Extended => (
            "Extended",
            Info,
            "This loan was extended into contract {next_contract}.",
        ),
    };
    StatusDescription {
        title,
        tone,
        message,
    }
}

/// Fill the `{expiry}` / `{next_contract}` placeholders from a snapshot
pub fn render_status_message(contract: &Contract) -> String {
    let template = describe_status(contract.status).message;
    let expiry = contract
        .expiry
        .map(|e| e.format("%Y-%m-%d").to_string())
        .unwrap_or_else(|| "-".to_string());
    let next = contract
        .extended_to
        .as_ref()
        .map(|id| id.to_string())
        .unwrap_or_else(|| "-".to_string());
    template
        .replace("{expiry}", &expiry)
        .replace("{next_contract}", &next)
}

/// Which side of the contract the viewer is on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewerRole {
    Borrower,
    Lender,
}

/// The single primary action a surface should offer for a contract
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContractAction {
    Approve,
    Cancel,
    ProvideCollateral,
    ProvidePrincipal,
    Repay,
    ConfirmRepayment,
    Liquidate,
    WithdrawCollateral,
    ResolveDispute,
}

impl ContractAction {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Approve => "Approve",
            Self::Cancel => "Cancel",
            Self::ProvideCollateral => "Provide Collateral",
            Self::ProvidePrincipal => "Send Principal",
            Self::Repay => "Repay",
            Self::ConfirmRepayment => "Confirm Repayment",
            Self::Liquidate => "Liquidate",
            Self::WithdrawCollateral => "Withdraw Collateral",
            Self::ResolveDispute => "Resolve Dispute",
        }
    }
}

/// Derive the primary action for a status and viewer role.
///
/// Terminal statuses never yield an action; non-terminal statuses may yield
/// `None` when the viewer is waiting on the other party.
pub fn recommended_action(status: ContractStatus, role: ViewerRole) -> Option<ContractAction> {
    use ContractAction::*;
    use ContractStatus::*;
    use ViewerRole::*;
    match (status, role) {
        (Requested | RenewalRequested, Lender) => Some(Approve),
        (Requested | RenewalRequested, Borrower) => Some(Cancel),

        (Approved, Borrower) => Some(ProvideCollateral),
        (Approved, Lender) => None,

        (CollateralSeen, _) => None,

        (CollateralConfirmed, Lender) => Some(ProvidePrincipal),
        (CollateralConfirmed, Borrower) => None,

        (Undercollateralized, Borrower) => Some(ProvideCollateral),
        (Undercollateralized, Lender) => Some(Liquidate),

        (CollateralRecoverable, Borrower) => Some(WithdrawCollateral),
        (CollateralRecoverable, Lender) => None,

        (PrincipalGiven, Borrower) => Some(Repay),
        (PrincipalGiven, Lender) => None,

        (RepaymentProvided, Lender) => Some(ConfirmRepayment),
        (RepaymentProvided, Borrower) => None,

        (RepaymentConfirmed, _) => None,

        // The counterparty of whoever opened the dispute responds
        (DisputeBorrowerStarted, Lender) => Some(ResolveDispute),
        (DisputeBorrowerStarted, Borrower) => None,
        (DisputeLenderStarted, Borrower) => Some(ResolveDispute),
        (DisputeLenderStarted, Lender) => None,
        (DisputeResolved, _) => None,

        (
            Rejected | Cancelled | RequestExpired | ApprovalExpired | Closing | ClosingByClaim
            | ClosingByLiquidation | ClosingByDefaulting | ClosingByRecovery | ClosedByClaim
            | ClosedByLiquidation | ClosedByDefaulting | ClosedByRecovery | Closed | Defaulted
            | Extended,
            _,
        ) => None,
    }
}

/// Timestamp field used for within-group recency ordering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecencyField {
    /// Request lists sort on creation date
    Created,
    /// Dashboards sort on last update
    Updated,
}

/// Sort contracts for display: group rank first, then most recent first
/// within each group.
pub fn sort_for_display(contracts: &mut [Contract], recency: RecencyField) {
    contracts.sort_by(|a, b| {
        let rank_a = status_group(a.status).rank();
        let rank_b = status_group(b.status).rank();
        rank_a.cmp(&rank_b).then_with(|| {
            let (ts_a, ts_b) = match recency {
                RecencyField::Created => (a.created_at, b.created_at),
                RecencyField::Updated => (a.updated_at, b.updated_at),
            };
            ts_b.cmp(&ts_a)
        })
    });
}

/// Contracts partitioned into the three dashboard tabs
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TabBuckets {
    pub action_required: Vec<Contract>,
    pub open: Vec<Contract>,
    pub closed: Vec<Contract>,
}

/// Bucket contracts by tab, each bucket sorted by the given recency field
pub fn bucket_by_tab(contracts: Vec<Contract>, recency: RecencyField) -> TabBuckets {
    let mut buckets = TabBuckets::default();
    for contract in contracts {
        match status_group(contract.status) {
            StatusGroup::EarlyOrActionRequired => buckets.action_required.push(contract),
            StatusGroup::ActiveOrClosing => buckets.open.push(contract),
            StatusGroup::Terminal => buckets.closed.push(contract),
        }
    }
    sort_for_display(&mut buckets.action_required, recency);
    sort_for_display(&mut buckets.open, recency);
    sort_for_display(&mut buckets.closed, recency);
    buckets
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone, Utc};
    use satlend_core::ContractId;

    fn contract_with(id: &str, status: ContractStatus, created_days_ago: i64) -> Contract {
        let now = Utc.with_ymd_and_hms(2024, 7, 1, 0, 0, 0).unwrap();
        let created_at = now - Duration::days(created_days_ago);
        Contract {
            id: ContractId::new(id),
            status,
            loan_amount: 1000.0,
            interest_rate: 0.10,
            collateral_sats: 4_000_000,
            duration_days: 30,
            created_at,
            updated_at: created_at,
            expiry: Some(now + Duration::days(30)),
            extension_max_duration_days: 0,
            extension_interest_rate: 0.0,
            extension_origination_fee: 0.0,
            loan_asset: "USD".to_string(),
            extended_to: None,
        }
    }

    #[test]
    fn test_every_status_has_group_and_description() {
        for status in ContractStatus::ALL {
            // status_group is total by construction; describe must never be empty
            let _ = status_group(status);
            let desc = describe_status(status);
            assert!(!desc.title.is_empty(), "{status} has empty title");
            assert!(!desc.message.is_empty(), "{status} has empty message");
        }
    }

    #[test]
    fn test_group_sizes() {
        let count = |group: StatusGroup| {
            ContractStatus::ALL
                .iter()
                .filter(|s| status_group(**s) == group)
                .count()
        };
        assert_eq!(count(StatusGroup::EarlyOrActionRequired), 4);
        assert_eq!(count(StatusGroup::ActiveOrClosing), 9);
        assert_eq!(count(StatusGroup::Terminal), 16);
    }

    #[test]
    fn test_terminal_statuses_never_yield_actions() {
        for status in ContractStatus::ALL {
            if status_group(status) == StatusGroup::Terminal {
                assert_eq!(recommended_action(status, ViewerRole::Borrower), None);
                assert_eq!(recommended_action(status, ViewerRole::Lender), None);
            }
        }
    }

    #[test]
    fn test_predicates_consistent_with_group() {
        for status in ContractStatus::ALL {
            assert_eq!(is_contract_open(status), !is_contract_closed(status));
            assert_eq!(
                is_action_required(status),
                status_group(status) == StatusGroup::EarlyOrActionRequired
            );
        }
    }

    #[test]
    fn test_role_specific_actions() {
        assert_eq!(
            recommended_action(ContractStatus::Requested, ViewerRole::Lender),
            Some(ContractAction::Approve)
        );
        assert_eq!(
            recommended_action(ContractStatus::Approved, ViewerRole::Borrower),
            Some(ContractAction::ProvideCollateral)
        );
        assert_eq!(
            recommended_action(ContractStatus::RepaymentProvided, ViewerRole::Lender),
            Some(ContractAction::ConfirmRepayment)
        );
        assert_eq!(
            recommended_action(ContractStatus::Undercollateralized, ViewerRole::Lender),
            Some(ContractAction::Liquidate)
        );
        // The party who opened the dispute waits for the counterparty
        assert_eq!(
            recommended_action(ContractStatus::DisputeLenderStarted, ViewerRole::Lender),
            None
        );
        assert_eq!(
            recommended_action(ContractStatus::DisputeLenderStarted, ViewerRole::Borrower),
            Some(ContractAction::ResolveDispute)
        );
    }

    #[test]
    fn test_sort_groups_before_recency() {
        // Requested is newest-first eligible but its group sorts first even
        // though the PrincipalGiven contract is older
        let requested = contract_with("a", ContractStatus::Requested, 5);
        let active = contract_with("b", ContractStatus::PrincipalGiven, 10);
        let closed = contract_with("c", ContractStatus::Closed, 1);

        let mut contracts = vec![closed.clone(), active.clone(), requested.clone()];
        sort_for_display(&mut contracts, RecencyField::Created);
        let ids: Vec<&str> = contracts.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b", "c"]);

        // Same result regardless of input order
        let mut contracts = vec![active, requested, closed];
        sort_for_display(&mut contracts, RecencyField::Created);
        let ids: Vec<&str> = contracts.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_sort_within_group_most_recent_first() {
        let older = contract_with("old", ContractStatus::Requested, 10);
        let newer = contract_with("new", ContractStatus::Requested, 2);
        let mut contracts = vec![older, newer];
        sort_for_display(&mut contracts, RecencyField::Created);
        assert_eq!(contracts[0].id.as_str(), "new");
    }

    #[test]
    fn test_bucket_by_tab() {
        let contracts = vec![
            contract_with("a", ContractStatus::Requested, 1),
            contract_with("b", ContractStatus::PrincipalGiven, 2),
            contract_with("c", ContractStatus::Defaulted, 3),
            contract_with("d", ContractStatus::DisputeResolved, 4),
        ];
        let buckets = bucket_by_tab(contracts, RecencyField::Updated);
        assert_eq!(buckets.action_required.len(), 1);
        assert_eq!(buckets.open.len(), 2);
        assert_eq!(buckets.closed.len(), 1);
    }

    #[test]
    fn test_render_message_fills_placeholders() {
        let mut contract = contract_with("a", ContractStatus::Extended, 1);
        contract.extended_to = Some(ContractId::new("c-next"));
        let message = render_status_message(&contract);
        assert!(message.contains("c-next"));
        assert!(!message.contains("{next_contract}"));

        let approved = contract_with("b", ContractStatus::Approved, 1);
        let message = render_status_message(&approved);
        assert!(message.contains("2024-07-31"));
        assert!(!message.contains("{expiry}"));
    }

    #[test]
    fn test_tab_labels() {
        assert_eq!(
            StatusGroup::EarlyOrActionRequired.tab_label(),
            "Action Required"
        );
        assert_eq!(StatusGroup::ActiveOrClosing.tab_label(), "Open");
        assert_eq!(StatusGroup::Terminal.tab_label(), "Closed");
    }
}
