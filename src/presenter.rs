use std::io::{self, Write};

use crate::analyzer::report::{Field, FieldValue, Report};

const RULE_WIDTH: usize = 80;
const KEY_WIDTH: usize = 30;
const INDENT: &str = "  ";

fn heavy_rule(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "{}", "═".repeat(RULE_WIDTH))
}

/// `risk_factors` -> `Risk Factors`, `local_time_12h` -> `Local Time 12H`.
fn display_key(name: &str) -> String {
    let mut key = String::with_capacity(name.len());
    let mut word_start = true;
    for c in name.chars() {
        if c == '_' {
            key.push(' ');
            word_start = true;
        } else if c.is_alphabetic() {
            if word_start {
                key.extend(c.to_uppercase());
            } else {
                key.extend(c.to_lowercase());
            }
            word_start = false;
        } else {
            key.push(c);
            word_start = true;
        }
    }
    key
}

fn scalar_text(value: &FieldValue) -> Option<String> {
    match value {
        FieldValue::Text(text) => Some(text.clone()),
        FieldValue::Integer(number) => Some(number.to_string()),
        FieldValue::Float(number) => Some(format!("{:?}", number)),
        FieldValue::Bool(true) => Some("Yes".to_owned()),
        FieldValue::Bool(false) => Some("No".to_owned()),
        FieldValue::List(items) => Some(items.join(", ")),
        FieldValue::Record(_) | FieldValue::Records(_) | FieldValue::Absent => None,
    }
}

fn write_fields(out: &mut impl Write, fields: &[Field], depth: usize) -> io::Result<()> {
    let indent = INDENT.repeat(depth);
    for field in fields {
        let key = display_key(&field.name);
        match &field.value {
            FieldValue::Absent => {}
            FieldValue::Record(nested) => {
                writeln!(out, "{}{:<KEY_WIDTH$}:", indent, key)?;
                write_fields(out, nested, depth + 2)?;
            }
            FieldValue::Records(records) => {
                writeln!(out, "{}{:<KEY_WIDTH$}:", indent, key)?;
                for (index, record) in records.iter().enumerate() {
                    writeln!(out, "{}{}#{}", indent, INDENT, index + 1)?;
                    write_fields(out, record, depth + 2)?;
                }
            }
            value => {
                let text = scalar_text(value).unwrap_or_default();
                writeln!(out, "{}{:<KEY_WIDTH$}: {}", indent, key, text)?;
            }
        }
    }
    Ok(())
}

/// Prints every section of `report`. Absent values are left out.
pub fn render_report(report: &Report, out: &mut impl Write) -> io::Result<()> {
    writeln!(out)?;
    heavy_rule(out)?;
    writeln!(out, "PHONE NUMBER ANALYSIS REPORT")?;
    heavy_rule(out)?;

    for section in report.sections() {
        let title = section.title();
        writeln!(out)?;
        writeln!(out, "{}", title)?;
        writeln!(out, "{}", "─".repeat(title.chars().count()))?;
        write_fields(out, &section.fields(), 1)?;
    }

    writeln!(out)?;
    heavy_rule(out)?;
    writeln!(out, "Analysis complete")?;
    heavy_rule(out)
}

/// Prints the short summary that follows the report.
pub fn render_summary(report: &Report, out: &mut impl Write) -> io::Result<()> {
    let analysis = &report.analysis;
    let risk = &analysis.risk_assessment;

    writeln!(out)?;
    heavy_rule(out)?;
    writeln!(out, "QUICK SUMMARY")?;
    heavy_rule(out)?;
    writeln!(out, "Total Data Points: {}", analysis.total_data_points)?;
    writeln!(
        out,
        "Number Valid: {}",
        if report.validation.is_valid_number { "Yes" } else { "No" }
    )?;
    writeln!(
        out,
        "Location: {}",
        report
            .geographic
            .location
            .primary_location
            .as_deref()
            .unwrap_or("Unknown")
    )?;
    writeln!(out, "Confidence Score: {}%", analysis.confidence_score)?;
    writeln!(out, "Risk Level: {}", risk.risk_level)?;
    if !risk.risk_factors.is_empty() {
        writeln!(out, "Risk Factors:")?;
        for factor in &risk.risk_factors {
            writeln!(out, "     • {}", factor)?;
        }
    }
    writeln!(out)?;
    heavy_rule(out)
}
