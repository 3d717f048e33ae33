// src/core/format.rs

/// `12000` → `"$12,000"`.
pub fn currency(amount: u64) -> String {
    join!("$", &thousands(amount))
}

/// Group digits in threes with commas.
pub fn thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
