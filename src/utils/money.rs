//! Money formatting. Wages are plain f64 dollars; anything fancier
//! (currencies, locales) is out of scope.

pub fn format_money(amount: f64) -> String {
    format!("${:.2}", amount)
}

pub fn format_rate(rate: f64) -> String {
    format!("${:.2}/hr", rate)
}
