use crate::calculator::result::CalculationResult;
use crate::core::inputs::{CalculatorInputs, InputField};
use crate::core::money::{format_currency, format_percent, format_plain};
use crate::core::policy::LVR_LIMIT_PERCENT;
use std::fmt;

/// A line inside a summary panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PanelRow {
    Item {
        label: &'static str,
        value: String,
        warning: bool,
    },
    /// A field the user may overwrite; `value` is the plain number shown in it.
    Editable { label: &'static str, value: String },
    Total { label: &'static str, value: String },
    Caption(String),
    Alert { heading: &'static str, body: String },
    Note(String),
}

/// One of the four result panels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Panel {
    pub title: &'static str,
    pub rows: Vec<PanelRow>,
}

fn item(label: &'static str, value: String) -> PanelRow {
    PanelRow::Item {
        label,
        value,
        warning: false,
    }
}

fn lvr_item(label: &'static str, percent: rust_decimal::Decimal) -> PanelRow {
    PanelRow::Item {
        label,
        value: format_percent(percent),
        warning: percent > LVR_LIMIT_PERCENT,
    }
}

/// The scenario as entered, one row per base field.
pub fn inputs_panel(inputs: &CalculatorInputs) -> Panel {
    let rows = InputField::ALL
        .into_iter()
        .map(|field| {
            let value = inputs.get(field);
            let shown = if field.is_currency() {
                format_currency(value)
            } else {
                format_percent(value)
            };
            item(field.label(), shown)
        })
        .collect();
    Panel {
        title: "Scenario",
        rows,
    }
}

/// Build the four summary panels for a result.
pub fn panels(result: &CalculationResult) -> Vec<Panel> {
    let funds = Panel {
        title: "Total Funds Required",
        rows: vec![
            item("For New Purchase", format_currency(result.funds_for_new_purchase)),
            item(
                "To Payout Existing Loan",
                format_currency(result.funds_to_pay_off_mortgage),
            ),
            PanelRow::Total {
                label: "Total Funds Required",
                value: format_currency(result.total_funds_required),
            },
        ],
    };

    let mut peak_rows = vec![
        item("Peak Debt (Loan Required)", format_currency(result.peak_debt)),
        PanelRow::Editable {
            label: "(+) Interest (ICAP)",
            value: format_plain(result.capitalized_interest),
        },
        PanelRow::Caption(result.icap_source.caption()),
        PanelRow::Total {
            label: "Total Peak Debt",
            value: format_currency(result.total_peak_debt),
        },
        item("Peak Security", format_currency(result.peak_security)),
        lvr_item("Peak LVR", result.peak_lvr_percent),
    ];
    if let Some(extra) = result.extra_funds_needed {
        peak_rows.push(PanelRow::Alert {
            heading: "Peak Debt LVR Alert!",
            body: format!(
                "Peak LVR cannot exceed 80%. You need to contribute extra funds of {}.",
                format_currency(extra)
            ),
        });
    }
    let peak = Panel {
        title: "Peak Debt & LVR",
        rows: peak_rows,
    };

    let bridging = Panel {
        title: "Bridging Loan Details",
        rows: vec![
            item("Max Bridging Loan", format_currency(result.max_bridging_loan)),
            PanelRow::Caption(
                "(Lower of 85% of property value or Total Funds Required)".to_string(),
            ),
            PanelRow::Total {
                label: "Final Bridging Loan",
                value: format_currency(result.final_bridging_loan),
            },
            PanelRow::Caption("(Max Bridging Loan - Additional New Loan)".to_string()),
        ],
    };

    let residual = Panel {
        title: "Residual Lending (End Position)",
        rows: vec![
            item("Minimum End Debt", format_currency(result.minimum_end_debt)),
            PanelRow::Caption("(Total Peak Debt - Max Bridging Loan)".to_string()),
            PanelRow::Editable {
                label: "Additional New Loan",
                value: format_plain(result.additional_new_loan),
            },
            PanelRow::Caption(format!(
                "(Max: {}, reduces bridging loan)",
                format_currency(result.max_bridging_loan)
            )),
            PanelRow::Total {
                label: "Total End Debt",
                value: format_currency(result.total_end_debt),
            },
            item("End Security", format_currency(result.end_security)),
            lvr_item("End LVR", result.end_lvr_percent),
            PanelRow::Note(
                "Review end LVR to ensure that it is allowable under the applicable LVR policy."
                    .to_string(),
            ),
            PanelRow::Note(format!(
                "Check the borrowing capacity for the end debt amount of {}.",
                format_currency(result.total_end_debt)
            )),
        ],
    };

    vec![funds, peak, bridging, residual]
}

impl fmt::Display for Panel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "=== {} ===", self.title)?;
        for row in &self.rows {
            match row {
                PanelRow::Item {
                    label,
                    value,
                    warning,
                } => {
                    let marker = if *warning { "  [!]" } else { "" };
                    writeln!(f, "{:<28} {:>18}{}", format!("{}:", label), value, marker)?;
                }
                PanelRow::Editable { label, value } => {
                    writeln!(f, "{:<28} {:>18}  [editable]", format!("{}:", label), format!("$ {}", value))?;
                }
                PanelRow::Total { label, value } => {
                    writeln!(f, "{:<28} {:>18}", format!("{}:", label), value)?;
                }
                PanelRow::Caption(text) => writeln!(f, "    {}", text)?,
                PanelRow::Alert { heading, body } => {
                    writeln!(f, "  ** {} **", heading)?;
                    writeln!(f, "  {}", body)?;
                }
                PanelRow::Note(text) => writeln!(f, "Note: {}", text)?,
            }
        }
        Ok(())
    }
}

/// All four panels as text, separated by blank lines.
pub fn render_panels(result: &CalculationResult) -> String {
    panels(result)
        .iter()
        .map(|p| p.to_string())
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculator::engine::BridgingCalculator;
    use crate::core::overrides::OverrideState;
    use crate::schedule::calendar::YearMonth;
    use rust_decimal_macros::dec;

    fn inputs() -> CalculatorInputs {
        CalculatorInputs {
            selling_price: dec!(800000),
            current_mortgage: dec!(300000),
            contract_price: dec!(900000),
            stamp_duty: dec!(45000),
            sundry_costs: dec!(5000),
            current_funds: dec!(50000),
            interest_rate_percent: dec!(6.0),
        }
    }

    fn compute(inputs: &CalculatorInputs, overrides: &OverrideState) -> CalculationResult {
        BridgingCalculator::compute(inputs, overrides, YearMonth::new(2026, 10).unwrap())
    }

    #[test]
    fn test_four_panels_in_order() {
        let titles: Vec<_> = panels(&compute(&inputs(), &OverrideState::new()))
            .iter()
            .map(|p| p.title)
            .collect();
        assert_eq!(
            titles,
            vec![
                "Total Funds Required",
                "Peak Debt & LVR",
                "Bridging Loan Details",
                "Residual Lending (End Position)"
            ]
        );
    }

    #[test]
    fn test_inputs_panel_labels_every_field() {
        let panel = inputs_panel(&inputs());
        assert_eq!(panel.rows.len(), InputField::ALL.len());
        let text = panel.to_string();
        assert!(text.contains("Current Property Value:"));
        assert!(text.contains("$800,000.00"));
        assert!(text.contains("Interest Rate (%):"));
        assert!(text.contains("6.00%"));
    }

    #[test]
    fn test_text_contains_key_figures() {
        let text = render_panels(&compute(&inputs(), &OverrideState::new()));
        assert!(text.contains("$1,250,000.00"));
        assert!(text.contains("$680,000.00"));
        assert!(text.contains("(Calculated at assessed rate of 7.00%)"));
        assert!(text.contains("(Max: $680,000.00, reduces bridging loan)"));
        assert!(!text.contains("LVR Alert"));
    }

    #[test]
    fn test_self_entered_caption_and_editable_value() {
        let r = compute(&inputs(), &OverrideState::new().with_icap(dec!(12345.6)));
        let text = render_panels(&r);
        assert!(text.contains("(Self Entered)"));
        assert!(text.contains("$ 12,345.60"));
    }

    #[test]
    fn test_alert_and_warning_when_breached() {
        let mut breached = inputs();
        breached.selling_price = dec!(100000);
        let r = compute(&breached, &OverrideState::new());
        let peak = &panels(&r)[1];
        assert!(peak
            .rows
            .iter()
            .any(|row| matches!(row, PanelRow::Alert { .. })));
        assert!(peak.rows.iter().any(|row| matches!(
            row,
            PanelRow::Item {
                label: "Peak LVR",
                warning: true,
                ..
            }
        )));
    }
}
