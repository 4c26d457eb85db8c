//! Termination reasons, the end-of-service result, and settlement records.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::LeaveAccrualResult;
use crate::money::Money;

/// Why an employment ended. Determines the gratuity award schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TerminationReason {
    /// The employee resigned; the award is tiered by service length.
    Resignation,
    /// Termination by the employer under Article 77; full award.
    EmployerTerminationArt77,
    /// Termination by the employee under Article 81; full award.
    EmployeeTerminationArt81,
    /// Contract ended by force majeure; full award.
    ForceMajeure,
    /// Termination for cause under Article 80; no award.
    TerminationArt80,
}

/// The outcome of an end-of-service calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EndOfServiceResult {
    /// Service length in fractional years (365.25-day years), stable at
    /// four decimal places.
    pub service_duration_years: Decimal,
    /// The gratuity earned over the full service period, before the
    /// termination-reason schedule is applied.
    pub base_gratuity: Money,
    /// The gratuity actually owed under the termination reason. Never
    /// exceeds the base gratuity.
    pub final_gratuity: Money,
    /// Cash value of the accrued, unsettled leave balance.
    pub leave_balance_value: Money,
    /// Final gratuity plus leave balance value.
    pub total_amount: Money,
}

/// Which kind of settlement a record captures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SettlementType {
    /// A leave balance paid out mid-employment.
    Leave,
    /// A final end-of-service settlement.
    EndOfService,
}

/// The full calculation result a settlement was finalized from, embedded
/// in the record so the figures can be audited without recomputation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SettlementSnapshot {
    /// Snapshot of a leave settlement.
    Leave(LeaveAccrualResult),
    /// Snapshot of an end-of-service settlement.
    EndOfService(EndOfServiceResult),
}

/// The immutable fact of a finalized settlement.
///
/// Created once by the settlement ledger and appended to the employee's
/// history; the engine exposes no way to edit or delete one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SettlementRecord {
    /// Unique identifier for this settlement.
    pub id: Uuid,
    /// The employee the settlement belongs to.
    pub employee_id: String,
    /// Whether this is a leave or an end-of-service settlement.
    pub settlement_type: SettlementType,
    /// The date the settlement was calculated for.
    pub calculation_date: NaiveDate,
    /// The amount paid out.
    pub amount: Money,
    /// The calculation the settlement was finalized from.
    pub snapshot: SettlementSnapshot,
}
