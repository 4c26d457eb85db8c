//! Settlement ledger.
//!
//! Translates finalized calculation results into immutable
//! [`SettlementRecord`]s plus the matching employee-state transition, and
//! defines the port through which the pair is handed to the external
//! store. The ledger performs no recomputation: finalizing is a pure
//! translation from a result value to a persistence intent.
//!
//! # Invariants
//!
//! * A settlement record, once created, is never edited or deleted.
//! * The record and the state transition of one finalize call are applied
//!   as a single atomic unit; no observer may see one without the other.
//! * An employee leaves the `Active` state at most once: the terminate
//!   transition is rejected unless the employee is currently active.

use std::collections::HashMap;

use chrono::NaiveDate;
use tracing::info;
use uuid::Uuid;

use crate::error::{EngineError, EngineResult};
use crate::models::{
    Employee, EmployeeStatus, EndOfServiceResult, LeaveAccrualResult, SettlementRecord,
    SettlementSnapshot, SettlementType,
};

/// The employee-state change that accompanies a settlement record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmployeeTransition {
    /// Move the employee from `Active` to `Terminated`.
    Terminate {
        /// The employee's final day of service.
        termination_date: NaiveDate,
    },
    /// Advance the employee's last leave settlement date; accrual restarts
    /// from it.
    RecordLeaveSettlement {
        /// The settlement's calculation date.
        settlement_date: NaiveDate,
    },
}

/// One finalized settlement: the immutable history record and the employee
/// state transition, to be applied atomically by the store.
#[derive(Debug, Clone)]
pub struct SettlementIntent {
    /// The history record to append.
    pub record: SettlementRecord,
    /// The employee-state change to apply in the same transaction.
    pub transition: EmployeeTransition,
}

/// Finalizes a leave settlement into a persistence intent.
///
/// The record captures the full accrual calculation for audit; the
/// transition advances the employee's last settlement date so future
/// accrual starts from `calculation_date`.
pub fn finalize_leave_settlement(
    employee: &Employee,
    result: &LeaveAccrualResult,
    calculation_date: NaiveDate,
) -> SettlementIntent {
    let intent = SettlementIntent {
        record: SettlementRecord {
            id: Uuid::new_v4(),
            employee_id: employee.id.clone(),
            settlement_type: SettlementType::Leave,
            calculation_date,
            amount: result.monetary_value,
            snapshot: SettlementSnapshot::Leave(result.clone()),
        },
        transition: EmployeeTransition::RecordLeaveSettlement {
            settlement_date: calculation_date,
        },
    };

    info!(
        employee_id = %employee.id,
        settlement_id = %intent.record.id,
        amount = %intent.record.amount,
        "finalized leave settlement"
    );
    intent
}

/// Finalizes an end-of-service settlement into a persistence intent.
///
/// The record captures the full end-of-service calculation for audit; the
/// transition terminates the employee as of `termination_date`.
pub fn finalize_end_of_service(
    employee: &Employee,
    result: &EndOfServiceResult,
    termination_date: NaiveDate,
    calculation_date: NaiveDate,
) -> SettlementIntent {
    let intent = SettlementIntent {
        record: SettlementRecord {
            id: Uuid::new_v4(),
            employee_id: employee.id.clone(),
            settlement_type: SettlementType::EndOfService,
            calculation_date,
            amount: result.total_amount,
            snapshot: SettlementSnapshot::EndOfService(result.clone()),
        },
        transition: EmployeeTransition::Terminate { termination_date },
    };

    info!(
        employee_id = %employee.id,
        settlement_id = %intent.record.id,
        amount = %intent.record.amount,
        "finalized end-of-service settlement"
    );
    intent
}

/// The persistence port for settlements.
///
/// Implementations must apply the record and the transition of one intent
/// as a single atomic unit: either both become visible or neither does.
/// The terminate transition must only succeed while the employee is
/// currently active, so two racing finalize calls cannot both complete;
/// a transactional store enforces this with its own concurrency mechanism.
/// Store failures are surfaced as [`EngineError::Persistence`] and
/// propagated unchanged.
pub trait SettlementStore {
    /// Atomically applies one settlement intent.
    ///
    /// # Errors
    ///
    /// * [`EngineError::InvalidTransition`] when the state change is not
    ///   allowed from the employee's current state.
    /// * [`EngineError::Persistence`] for store-level failures.
    fn apply(&mut self, intent: SettlementIntent) -> EngineResult<()>;
}

/// The per-employee state a store tracks alongside the settlement history.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmployeeAccount {
    /// Current employment status.
    pub status: EmployeeStatus,
    /// Date of the most recent leave settlement, if any.
    pub last_settlement_date: Option<NaiveDate>,
}

/// In-process reference implementation of [`SettlementStore`].
///
/// Backs the integration tests and documents the port contract in code:
/// every intent is validated before any state is touched, so an error
/// leaves the store exactly as it was, and the history is append-only.
#[derive(Debug, Default)]
pub struct MemorySettlementStore {
    accounts: HashMap<String, EmployeeAccount>,
    history: Vec<SettlementRecord>,
}

impl MemorySettlementStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds the store with an employee's current state.
    pub fn register(&mut self, employee: &Employee) {
        self.accounts.insert(
            employee.id.clone(),
            EmployeeAccount {
                status: employee.status,
                last_settlement_date: employee.last_settlement_date,
            },
        );
    }

    /// Looks up an employee's tracked state.
    pub fn account(&self, employee_id: &str) -> Option<&EmployeeAccount> {
        self.accounts.get(employee_id)
    }

    /// The full settlement history, in application order.
    pub fn history(&self) -> &[SettlementRecord] {
        &self.history
    }

    /// The settlement history of one employee, in application order.
    pub fn history_for<'a>(
        &'a self,
        employee_id: &'a str,
    ) -> impl Iterator<Item = &'a SettlementRecord> {
        self.history
            .iter()
            .filter(move |record| record.employee_id == employee_id)
    }
}

impl SettlementStore for MemorySettlementStore {
    fn apply(&mut self, intent: SettlementIntent) -> EngineResult<()> {
        let employee_id = intent.record.employee_id.clone();
        let account =
            self.accounts
                .get_mut(&employee_id)
                .ok_or_else(|| EngineError::InvalidTransition {
                    employee_id: employee_id.clone(),
                    message: "employee is not registered with the store".to_string(),
                })?;

        // Validate the transition completely before touching any state, so
        // a rejected intent leaves the store untouched.
        match intent.transition {
            EmployeeTransition::Terminate { .. } => {
                if account.status != EmployeeStatus::Active {
                    return Err(EngineError::InvalidTransition {
                        employee_id,
                        message: "employee is already terminated".to_string(),
                    });
                }
            }
            EmployeeTransition::RecordLeaveSettlement { settlement_date } => {
                if account.status != EmployeeStatus::Active {
                    return Err(EngineError::InvalidTransition {
                        employee_id,
                        message: "cannot settle leave for a terminated employee".to_string(),
                    });
                }
                if let Some(previous) = account.last_settlement_date {
                    if settlement_date <= previous {
                        return Err(EngineError::InvalidTransition {
                            employee_id,
                            message: format!(
                                "period up to {previous} is already settled"
                            ),
                        });
                    }
                }
            }
        }

        match intent.transition {
            EmployeeTransition::Terminate { .. } => {
                account.status = EmployeeStatus::Terminated;
            }
            EmployeeTransition::RecordLeaveSettlement { settlement_date } => {
                account.last_settlement_date = Some(settlement_date);
            }
        }
        self.history.push(intent.record);

        Ok(())
    }
}
