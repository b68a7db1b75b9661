//! Core projection engine: month-by-month compound growth simulation

use crate::error::ValidationError;
use crate::schedule::InvestmentSchedule;

use super::records::ProjectionResult;
use super::state::ProjectionState;

/// Project an investment schedule month by month.
///
/// Deterministic and free of I/O or hidden state: the result depends only on
/// the schedule, and concurrent calls cannot interfere. Validation runs
/// first, so invalid inputs fail before any simulation happens.
///
/// Within each month, deposits land first, then withdrawals (clamped at a
/// zero balance), then the month's interest credits, so new money compounds
/// starting the month it arrives. A month-based outer loop is the only way
/// to handle compounding and cash-flow frequencies that do not align to
/// calendar years.
pub fn project(schedule: &InvestmentSchedule) -> Result<ProjectionResult, ValidationError> {
    schedule.validate()?;

    let periods_per_year = schedule.compounding.periods_per_year();
    let rate_per_period = schedule.annual_rate_percent / 100.0 / periods_per_year as f64;
    let deposit_every = schedule.deposit_frequency.months();
    let withdrawal_every = schedule.withdrawal_frequency.months();

    let mut state = ProjectionState::new(schedule.principal);

    for month in 1..=schedule.total_months {
        if month > 1 && (month - 1) % 12 == 0 {
            state.roll_year();
        }

        if schedule.cash_flow_mode.includes_deposits() && month % deposit_every == 0 {
            state.deposit(schedule.deposit_amount);
        }

        if schedule.cash_flow_mode.includes_withdrawals() && month % withdrawal_every == 0 {
            state.withdraw(schedule.withdrawal_amount);
        }

        for _ in 0..interest_periods_in_month(month, periods_per_year) {
            state.credit_interest(rate_per_period);
        }
    }

    Ok(state.finish())
}

/// Number of compounding periods falling in a given projection month.
///
/// Credits follow a cumulative integer schedule: by the end of month `m`,
/// `m * periods_per_year / 12` whole periods have elapsed. Every 12-month
/// span therefore compounds exactly `periods_per_year` times, including
/// frequencies that do not divide evenly into months (weekly months
/// alternate 4 and 5 credits; annual compounding credits once, in month 12).
fn interest_periods_in_month(month: u32, periods_per_year: u32) -> u32 {
    (month * periods_per_year) / 12 - ((month - 1) * periods_per_year) / 12
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schedule::{CompoundingFrequency, FlowFrequency};
    use approx::assert_relative_eq;

    fn reconciles(result: &ProjectionResult, principal: f64) {
        assert_relative_eq!(
            result.final_balance,
            principal + result.total_deposits - result.total_withdrawals
                + result.total_interest,
            max_relative = 1e-9,
            epsilon = 1e-9
        );
    }

    #[test]
    fn test_period_schedule_sums_to_periods_per_year() {
        for periods_per_year in [365, 52, 26, 12, 4, 2, 1] {
            let credited: u32 = (1..=12)
                .map(|m| interest_periods_in_month(m, periods_per_year))
                .sum();
            assert_eq!(credited, periods_per_year);
        }
    }

    #[test]
    fn test_zero_rate_holds_principal() {
        let schedule =
            InvestmentSchedule::new(10_000.0, 0.0, CompoundingFrequency::Monthly, 360);
        let result = project(&schedule).unwrap();

        assert_eq!(result.final_balance, 10_000.0);
        assert_eq!(result.total_interest, 0.0);
        assert_eq!(result.yearly_records.len(), 30);
    }

    #[test]
    fn test_lump_sum_monthly_compounding() {
        // 10k at 7% compounded monthly for 10 years
        let schedule =
            InvestmentSchedule::new(10_000.0, 7.0, CompoundingFrequency::Monthly, 120);
        let result = project(&schedule).unwrap();

        assert_relative_eq!(result.final_balance, 20_096.613766956267, max_relative = 1e-9);
        assert_relative_eq!(result.total_interest, 10_096.613766956272, max_relative = 1e-9);
        assert_eq!(result.total_deposits, 0.0);
        assert_eq!(result.yearly_records.len(), 10);
        reconciles(&result, schedule.principal);
    }

    #[test]
    fn test_monthly_deposits_compound_from_arrival_month() {
        // 10k at 8% monthly with $200 deposited every month for 20 years
        let schedule = InvestmentSchedule::new(10_000.0, 8.0, CompoundingFrequency::Monthly, 240)
            .with_deposits(200.0, FlowFrequency::Monthly);
        let result = project(&schedule).unwrap();

        assert_relative_eq!(result.final_balance, 167_857.4713865531, max_relative = 1e-9);
        assert_relative_eq!(result.total_interest, 109_857.47138655317, max_relative = 1e-9);
        assert_eq!(result.total_deposits, 48_000.0);
        assert_eq!(result.total_withdrawals, 0.0);
        assert_eq!(result.yearly_records.len(), 20);

        let first = &result.yearly_records[0];
        assert_eq!(first.start_balance, 10_000.0);
        assert_eq!(first.deposits, 2_400.0);
        assert_eq!(first.principal_basis, 12_400.0);
        assert_relative_eq!(first.interest_earned, 936.5801736619321, max_relative = 1e-9);
        assert_relative_eq!(first.end_balance, 13_336.580173661932, max_relative = 1e-9);

        let last = &result.yearly_records[19];
        assert_eq!(last.principal_basis, 58_000.0);
        assert_eq!(last.end_balance, result.final_balance);
        reconciles(&result, schedule.principal);
    }

    #[test]
    fn test_overdrawn_withdrawal_clamps_to_zero() {
        // $1000 monthly withdrawal requests against a $100 account
        let schedule = InvestmentSchedule::new(100.0, 0.0, CompoundingFrequency::Annually, 12)
            .with_withdrawals(1_000.0, FlowFrequency::Monthly);
        let result = project(&schedule).unwrap();

        assert_eq!(result.final_balance, 0.0);
        assert_eq!(result.total_interest, 0.0);
        // Only the amount actually withdrawn is counted, not the requests
        assert_eq!(result.total_withdrawals, 100.0);
        assert_eq!(result.yearly_records.len(), 1);
        assert_eq!(result.yearly_records[0].end_balance, 0.0);
        reconciles(&result, schedule.principal);
    }

    #[test]
    fn test_partial_withdrawal_before_exhaustion() {
        // Quarterly $400 withdrawals drain a $1000 account mid-year; the
        // third withdrawal is partial and later ones take nothing
        let schedule = InvestmentSchedule::new(1_000.0, 12.0, CompoundingFrequency::Monthly, 12)
            .with_withdrawals(400.0, FlowFrequency::Quarterly);
        let result = project(&schedule).unwrap();

        assert_eq!(result.final_balance, 0.0);
        assert_relative_eq!(result.total_withdrawals, 1_046.1282453876802, max_relative = 1e-9);
        assert_relative_eq!(result.total_interest, 46.1282453876801, max_relative = 1e-9);
        reconciles(&result, schedule.principal);
    }

    #[test]
    fn test_weekly_compounds_exactly_52_times() {
        let schedule = InvestmentSchedule::new(10_000.0, 8.0, CompoundingFrequency::Weekly, 12);
        let result = project(&schedule).unwrap();

        let closed_form = 10_000.0 * (1.0_f64 + 0.08 / 52.0).powi(52);
        assert_relative_eq!(result.final_balance, closed_form, max_relative = 1e-9);
    }

    #[test]
    fn test_quarterly_matches_closed_form() {
        let schedule =
            InvestmentSchedule::new(10_000.0, 8.0, CompoundingFrequency::Quarterly, 24);
        let result = project(&schedule).unwrap();

        let closed_form = 10_000.0 * (1.0_f64 + 0.08 / 4.0).powi(8);
        assert_relative_eq!(result.final_balance, closed_form, max_relative = 1e-9);
    }

    #[test]
    fn test_deposits_before_quarterly_credit_all_earn_interest() {
        // Monthly deposits into a quarterly-compounded account: the first
        // credit lands in month 3 on all three deposits made so far
        let schedule = InvestmentSchedule::new(0.0, 4.0, CompoundingFrequency::Quarterly, 12)
            .with_deposits(100.0, FlowFrequency::Monthly);
        let result = project(&schedule).unwrap();

        assert_relative_eq!(result.final_balance, 1_230.3015030000001, max_relative = 1e-9);
        assert_relative_eq!(result.total_interest, 30.301503, max_relative = 1e-9);
        assert_eq!(result.total_deposits, 1_200.0);
    }

    #[test]
    fn test_annual_compounding_and_partial_final_year() {
        // 27 months at 5% annual compounding: credits land in months 12 and
        // 24 only; the 3-month tail year earns nothing
        let schedule = InvestmentSchedule::new(10_000.0, 5.0, CompoundingFrequency::Annually, 27);
        let result = project(&schedule).unwrap();

        assert_eq!(result.yearly_records.len(), 3);
        assert_eq!(result.yearly_records[0].end_balance, 10_500.0);
        assert_eq!(result.yearly_records[1].end_balance, 11_025.0);
        assert_eq!(result.yearly_records[2].interest_earned, 0.0);
        assert_eq!(result.final_balance, 11_025.0);
    }

    #[test]
    fn test_year_count_is_ceiling_of_months() {
        for (months, expected_years) in [(1, 1), (12, 1), (13, 2), (120, 10), (123, 11)] {
            let schedule =
                InvestmentSchedule::new(1_000.0, 6.0, CompoundingFrequency::Monthly, months);
            let result = project(&schedule).unwrap();
            assert_eq!(result.yearly_records.len(), expected_years);

            for (i, record) in result.yearly_records.iter().enumerate() {
                assert_eq!(record.year, i as u32 + 1);
            }
        }
    }

    #[test]
    fn test_negative_rate_degenerate_case() {
        let schedule = InvestmentSchedule::new(10_000.0, -5.0, CompoundingFrequency::Monthly, 36);
        let result = project(&schedule).unwrap();

        assert_relative_eq!(result.final_balance, 8_604.382979543372, max_relative = 1e-9);
        assert_relative_eq!(result.total_interest, -1_395.6170204566245, max_relative = 1e-9);
        reconciles(&result, schedule.principal);
    }

    #[test]
    fn test_mixed_flows_record_identity() {
        let schedule = InvestmentSchedule::new(5_000.0, 6.0, CompoundingFrequency::Monthly, 18)
            .with_deposits(150.0, FlowFrequency::Monthly)
            .with_withdrawals(500.0, FlowFrequency::Semiannually);
        let result = project(&schedule).unwrap();

        assert_eq!(result.yearly_records.len(), 2);
        assert_relative_eq!(result.final_balance, 6_747.844426867663, max_relative = 1e-9);
        assert_eq!(result.total_deposits, 2_700.0);
        assert_eq!(result.total_withdrawals, 1_500.0);
        reconciles(&result, schedule.principal);

        // Every record satisfies end = start + deposits - withdrawals + interest
        for record in &result.yearly_records {
            assert_relative_eq!(
                record.end_balance,
                record.start_balance + record.deposits - record.withdrawals
                    + record.interest_earned,
                max_relative = 1e-9,
                epsilon = 1e-9
            );
        }

        // Adjacent records chain through the year boundary
        assert_eq!(
            result.yearly_records[1].start_balance,
            result.yearly_records[0].end_balance
        );
        assert_eq!(result.yearly_records[1].principal_basis, 7_700.0);
    }

    #[test]
    fn test_projection_is_deterministic() {
        let schedule = InvestmentSchedule::new(9_876.54, 6.25, CompoundingFrequency::Biweekly, 97)
            .with_deposits(123.45, FlowFrequency::Quarterly);

        let a = project(&schedule).unwrap();
        let b = project(&schedule).unwrap();

        assert_eq!(a.final_balance.to_bits(), b.final_balance.to_bits());
        assert_eq!(a.total_interest.to_bits(), b.total_interest.to_bits());
        assert_eq!(a.yearly_records.len(), b.yearly_records.len());
        for (ra, rb) in a.yearly_records.iter().zip(&b.yearly_records) {
            assert_eq!(ra.end_balance.to_bits(), rb.end_balance.to_bits());
        }
    }

    #[test]
    fn test_invalid_input_fails_before_simulation() {
        let zero_months = InvestmentSchedule::new(1_000.0, 5.0, CompoundingFrequency::Monthly, 0);
        assert_eq!(project(&zero_months), Err(ValidationError::EmptyHorizon));

        let mut nan_rate = InvestmentSchedule::new(1_000.0, 5.0, CompoundingFrequency::Monthly, 12);
        nan_rate.annual_rate_percent = f64::NAN;
        assert!(matches!(
            project(&nan_rate),
            Err(ValidationError::NotFinite { field: "annual_rate_percent", .. })
        ));
    }
}
