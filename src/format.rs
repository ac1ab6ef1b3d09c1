//! Money formatting without `format!` on floats.
//!
//! Float-to-decimal formatting has produced wasm-side panics in some
//! toolchain/browser combinations, so amounts are scaled and rounded into an
//! `i64` and only integers are formatted.

/// `<symbol><amount>` with exactly two decimals, e.g. `$1234.50`.
///
/// A negative amount keeps its sign after the symbol (`$-5.00`).
pub fn fmt_money(v: f64, symbol: &str) -> String {
    let mut out = String::with_capacity(symbol.len() + 12);
    out.push_str(symbol);
    out.push_str(&fmt_f64_fixed(v, 2));
    out
}

/// A JSON number as a browser prints it: integral values never carry a `.0`.
///
/// `720`, `720.0` and `7.2e2` all become `720`.
pub fn fmt_json_number(n: &serde_json::Number) -> String {
    if let Some(i) = n.as_i64() {
        return i.to_string();
    }
    if let Some(u) = n.as_u64() {
        return u.to_string();
    }
    let Some(v) = n.as_f64() else {
        return n.to_string();
    };
    // Integral and exactly representable: take the integer path.
    if v.fract() == 0.0 && v.abs() < 9_007_199_254_740_992.0 {
        return (v as i64).to_string();
    }
    v.to_string()
}

pub fn fmt_f64_fixed(v: f64, decimals: usize) -> String {
    if !v.is_finite() {
        return if v.is_nan() {
            "NaN".to_string()
        } else if v.is_sign_positive() {
            "Infinity".to_string()
        } else {
            "-Infinity".to_string()
        };
    }

    let decimals = decimals.min(9);
    let scale_i64 = 10_i64.pow(decimals as u32);
    let scale_f = scale_i64 as f64;

    let scaled = (v * scale_f).round();
    if !scaled.is_finite() || scaled.abs() > (i64::MAX as f64) {
        return if v.is_sign_negative() {
            "-Infinity".to_string()
        } else {
            "Infinity".to_string()
        };
    }

    let scaled_i = scaled as i64;
    // -0.004 rounds to zero and prints unsigned.
    let negative = scaled_i < 0;

    let abs_i = scaled_i.abs();
    let int_part = abs_i / scale_i64;
    let frac_part = abs_i % scale_i64;

    let mut out = String::new();
    if negative {
        out.push('-');
    }
    out.push_str(&int_part.to_string());

    if decimals > 0 {
        out.push('.');
        let frac_str = frac_part.to_string();
        for _ in 0..decimals.saturating_sub(frac_str.len()) {
            out.push('0');
        }
        out.push_str(&frac_str);
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn money_always_has_two_decimals() {
        assert_eq!(fmt_money(1234.5, "$"), "$1234.50");
        assert_eq!(fmt_money(100.0, "$"), "$100.00");
        assert_eq!(fmt_money(0.0, "$"), "$0.00");
        assert_eq!(fmt_money(0.07, "$"), "$0.07");
        assert_eq!(fmt_money(19.999, "$"), "$20.00");
    }

    #[test]
    fn negative_balances_keep_sign_after_symbol() {
        assert_eq!(fmt_money(-5.0, "$"), "$-5.00");
        assert_eq!(fmt_money(-0.001, "$"), "$0.00");
    }

    #[test]
    fn symbol_is_configurable() {
        assert_eq!(fmt_money(12.3, "€"), "€12.30");
    }

    #[test]
    fn json_numbers_print_like_a_browser() {
        let num = |raw: &str| serde_json::from_str::<serde_json::Number>(raw).unwrap();
        assert_eq!(fmt_json_number(&num("720")), "720");
        assert_eq!(fmt_json_number(&num("720.0")), "720");
        assert_eq!(fmt_json_number(&num("7.2e2")), "720");
        assert_eq!(fmt_json_number(&num("1e3")), "1000");
        assert_eq!(fmt_json_number(&num("-0.0")), "0");
        assert_eq!(fmt_json_number(&num("712.5")), "712.5");
    }

    #[test]
    fn non_finite_values_do_not_panic() {
        assert_eq!(fmt_f64_fixed(f64::NAN, 2), "NaN");
        assert_eq!(fmt_f64_fixed(f64::INFINITY, 2), "Infinity");
        assert_eq!(fmt_f64_fixed(-1e300, 2), "-Infinity");
    }
}
