//! Number formatting and the counter animation curve

use rust_decimal::Decimal;
use std::time::Duration;

/// Rupee amount with Indian digit grouping: `₹1,23,456.78`
pub fn format_inr(amount: Decimal) -> String {
    let rounded = amount.round_dp(2);
    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };
    let text = format!("{:.2}", rounded.abs());
    let (int_part, frac_part) = text.split_once('.').unwrap_or((text.as_str(), "00"));
    format!("{}₹{}.{}", sign, group_indian(int_part), frac_part)
}

/// Signed percentage with two decimals: `+0.52%`, `-1.10%`
pub fn format_trend(pct: Decimal) -> String {
    let pct = pct.round_dp(2);
    let sign = if pct.is_sign_negative() && !pct.is_zero() {
        "-"
    } else {
        "+"
    };
    format!("{}{:.2}%", sign, pct.abs())
}

/// Value an animated counter shows `elapsed` into a `duration`-long count-up
/// from zero to `target`
///
/// Linear and floored to whole rupees, landing exactly on `target` once the
/// animation is over. Drive it from the render loop.
pub fn counter_value(target: Decimal, elapsed: Duration, duration: Duration) -> Decimal {
    if duration.is_zero() || elapsed >= duration {
        return target;
    }
    let elapsed_ms = Decimal::from(elapsed.as_millis() as u64);
    let duration_ms = Decimal::from(duration.as_millis() as u64);
    (target * (elapsed_ms / duration_ms)).floor()
}

// Last three digits, then pairs: 12,34,567
fn group_indian(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }
    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups = Vec::new();
    let mut rest = head;
    while rest.len() > 2 {
        let (h, t) = rest.split_at(rest.len() - 2);
        groups.push(t);
        rest = h;
    }
    groups.push(rest);
    groups.reverse();
    format!("{},{}", groups.join(","), tail)
}
