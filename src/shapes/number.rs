//! Lenient number parsing and compact number output for path data.

/// Parse the longest numeric prefix of `s`, the way browsers read
/// presentation attributes: `"10px"` is 10, `" 2.5e1 "` is 25, `"abc"` is
/// nothing. Non-finite results are rejected.
pub fn parse_number(s: &str) -> Option<f64> {
    let s = s.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end += 1;
    }

    let int_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut digits = end - int_start;

    if end < bytes.len() && bytes[end] == b'.' {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        digits += frac_end - frac_start;
        if frac_end > frac_start || digits > 0 {
            end = frac_end;
        }
    }

    if digits == 0 {
        return None;
    }

    // Exponent only counts when at least one digit follows it.
    if end < bytes.len() && (bytes[end] == b'e' || bytes[end] == b'E') {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+') | Some(b'-')) {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }

    s[..end].parse::<f64>().ok().filter(|v| v.is_finite())
}

/// How computed coordinates are written into path data.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NumberFormat {
    /// Round to this many decimal places. `None` writes the shortest
    /// representation that round-trips.
    pub precision: Option<u8>,
}

impl NumberFormat {
    pub fn fmt(&self, v: f64) -> String {
        let s = match self.precision {
            None => format!("{}", v),
            Some(p) => {
                let fixed = format!("{:.*}", p as usize, v);
                if fixed.contains('.') {
                    fixed.trim_end_matches('0').trim_end_matches('.').to_string()
                } else {
                    fixed
                }
            }
        };
        // Rounding can also produce "-0".
        if s == "-0" {
            "0".to_string()
        } else {
            s
        }
    }
}
